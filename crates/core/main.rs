#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![allow(clippy::as_conversions, clippy::mod_module_files)]

use std::process;

mod app;
mod interact;
mod render;

use app::SearchState;
use render::render;

use clap::Parser;
use log::{error, trace};

fn main() {
    if let Err(err) = try_main() {
        error!("{:#}", err);
        process::exit(2);
    }
}

fn try_main() -> eyre::Result<()> {
    let cli = Cli::parse();

    // if quiet then ignore verbosity but still show errors
    let verbosity = if cli.quiet {
        1
    } else {
        cli.verbosity as usize + 1
    };

    stderrlog::new().verbosity(verbosity).init()?;

    let mut state = SearchState::default();

    if cli.query.is_empty() {
        run_prompt_loop(&mut state)
    } else {
        trace!("query argument given - performing a single search");
        search_once(&mut state, &cli.query.join(" "));
        Ok(())
    }
}

/// One submit cycle: the loading view is shown before the request is made
/// and the final view after it completes. An empty query skips the request
/// and just re-renders the unchanged state.
fn search_once(state: &mut SearchState, raw: &str) {
    if let Some(query) = state.begin(raw) {
        println!("{}", render(state));
        state.finish(bookfind::search_books(&query));
    }
    println!("{}", render(state));
}

fn run_prompt_loop(state: &mut SearchState) -> eyre::Result<()> {
    println!("{}", render(state));

    loop {
        let Ok(input) = interact::user_input("Search") else {
            trace!("prompt closed - ending the session");
            return Ok(());
        };
        search_once(state, &input);
    }
}

#[derive(Parser)]
#[clap(name = "bookfind")]
#[clap(about = "Search the Open Library book catalog from the terminal")]
#[clap(version, author)]
struct Cli {
    /// Search for this query once and exit instead of starting the
    /// interactive prompt
    query: Vec<String>,

    /// How chatty the program is when performing commands
    ///
    /// The number of times this flag is used will increase how chatty
    /// the program is.
    #[clap(short, long, parse(from_occurrences))]
    verbosity: u8,

    /// Silences log output except for errors, which are still printed to stderr.
    #[clap(short, long)]
    quiet: bool,
}

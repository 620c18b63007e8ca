use dialoguer::Input;
use eyre::{eyre, Context, Result};

/// Prompts for a single line of input, submitted with Enter.
///
/// Empty input is allowed so that the caller can treat it as a no-op rather
/// than an error. An `Err` means the prompt itself failed, which the main
/// loop treats as the end of the session.
pub fn user_input(prompt: &str) -> Result<String> {
    Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .wrap_err_with(|| eyre!("User input cancelled"))
}

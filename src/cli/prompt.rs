//! Interactive confirmation prompts.
//!
//! The prompt is a trait so command orchestration can be tested without a
//! real terminal.

use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;

/// Yes/no confirmation capability
pub trait ConfirmPrompt: Send + Sync {
    /// Ask the operator a yes/no question.
    fn confirm(&self, prompt: &str, default: bool) -> anyhow::Result<bool>;
}

/// Terminal-backed prompt using dialoguer
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl ConfirmPrompt for TerminalPrompt {
    fn confirm(&self, prompt: &str, default: bool) -> anyhow::Result<bool> {
        let answer = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(default)
            .interact()?;
        Ok(answer)
    }
}

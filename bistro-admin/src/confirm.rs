//! Destructive-action confirmation
//!
//! Injected into the coordinator so delete flows stay testable without
//! a terminal attached.

use async_trait::async_trait;
use std::io::{self, Write};

/// Asks the operator to confirm a destructive action
#[async_trait]
pub trait Confirm: Send + Sync {
    /// Returns true when the action should proceed
    async fn confirm(&self, message: &str) -> bool;
}

/// Stdin-backed confirmation prompt
///
/// Anything other than `y`/`yes` (case-insensitive) declines.
pub struct ConsoleConfirm;

#[async_trait]
impl Confirm for ConsoleConfirm {
    async fn confirm(&self, message: &str) -> bool {
        print!("{message} [y/N] ");
        let _ = io::stdout().flush();
        let mut answer = String::new();
        if io::stdin().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    }
}

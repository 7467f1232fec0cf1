//! Interactive create flow using cliclack (Charm-style inline prompts)
//!
//! Asks for the project name and setup variant unless both were passed as
//! flags, then drives the scaffolder with step-by-step progress output.
//! Only available when the `tui` feature is enabled.

#[cfg(feature = "tui")]
mod prompts;

#[cfg(feature = "tui")]
pub use prompts::{run, CreateArgs};

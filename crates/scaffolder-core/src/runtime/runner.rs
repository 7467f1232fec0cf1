//! External command execution with the terminal attached
//!
//! Package managers print progress bars and may ask questions, so children
//! inherit stdin/stdout/stderr instead of being piped.

use crate::error::{Result, ScaffoldError};
use std::future::Future;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command as TokioCommand;

/// Something that can run a shell command line in a directory
///
/// Succeeds only when the command exits with status 0.
pub trait CommandRunner {
    fn run(&self, command: &str, cwd: &Path) -> impl Future<Output = Result<()>>;
}

/// Runs commands through the platform shell (`sh -c` / `cmd /C`)
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellRunner;

#[cfg(unix)]
fn shell_command(command: &str) -> TokioCommand {
    let mut cmd = TokioCommand::new("sh");
    cmd.arg("-c").arg(command);
    cmd
}

#[cfg(windows)]
fn shell_command(command: &str) -> TokioCommand {
    let mut cmd = TokioCommand::new("cmd");
    cmd.arg("/C").arg(command);
    cmd
}

impl CommandRunner for ShellRunner {
    async fn run(&self, command: &str, cwd: &Path) -> Result<()> {
        let status = shell_command(command)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| ScaffoldError::command(command, e.to_string()))?;

        if status.success() {
            Ok(())
        } else {
            let message = match status.code() {
                Some(code) => format!("Command failed with exit code: {}", code),
                None => "Command terminated by signal".to_string(),
            };
            Err(ScaffoldError::command(command, message))
        }
    }
}

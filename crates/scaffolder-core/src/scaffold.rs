//! Scaffold orchestration
//!
//! A run goes through: collect input -> resolve project root -> base scaffold
//! (if the variant needs it) -> variant steps -> done, or the optional
//! watcher. The first failure aborts the run and leaves everything already
//! written or installed on disk.

use crate::error::{Result, ScaffoldError};
use crate::runtime::CommandRunner;
use crate::templates::{package, writer};
use crate::variants::{Step, Variant, VariantRegistry};
use std::path::{Path, PathBuf};

/// Check a project name and return it trimmed
///
/// The name becomes a single directory below the current one.
pub fn validate_project_name(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ScaffoldError::Validation(
            "Project name cannot be empty.".to_string(),
        ));
    }
    if name == "." || name == ".." || name.contains(['/', '\\']) {
        return Err(ScaffoldError::Validation(
            "Project name must be a single directory name.".to_string(),
        ));
    }
    Ok(name.to_string())
}

/// Validated user input for one run
#[derive(Debug, Clone)]
pub struct SetupRequest {
    pub project_name: String,
    pub variant: Variant,
}

impl SetupRequest {
    /// Validate the name and resolve the setup selection; touches no files
    pub fn new(registry: &VariantRegistry, project_name: &str, selection: &str) -> Result<Self> {
        let variant = registry.find(selection)?.clone();
        let project_name = validate_project_name(project_name)?;
        Ok(Self {
            project_name,
            variant,
        })
    }
}

/// Where the run writes; every recipe path resolves against `project_root`
#[derive(Debug, Clone)]
pub struct ExecutionContext {
    pub project_root: PathBuf,
}

impl ExecutionContext {
    /// Compute `cwd/<project_name>` and create it if it does not exist yet
    ///
    /// Fails when something other than a directory already has that name.
    pub async fn resolve(cwd: &Path, project_name: &str) -> Result<Self> {
        let project_root = cwd.join(project_name);
        if project_root.is_dir() {
            return Ok(Self { project_root });
        }
        if project_root.exists() {
            return Err(ScaffoldError::Io {
                path: project_root,
                message: "a file with this name already exists and is not a directory".to_string(),
            });
        }
        writer::ensure_dir(&project_root).await?;
        Ok(Self { project_root })
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.project_root.join(relative)
    }

    fn dir(&self, relative: Option<&str>) -> PathBuf {
        match relative {
            Some(dir) => self.path(dir),
            None => self.project_root.clone(),
        }
    }
}

/// How the step list ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing left to do
    Done,
    /// Steps finished; the variant wants `command` kept running until interrupted
    Watching { command: String },
}

/// Observer for progress output; every hook defaults to doing nothing
pub trait Progress {
    fn base_scaffold(&mut self, _command: &str) {}
    fn step(&mut self, _step: &Step) {}
}

impl Progress for () {}

/// Interprets variants against a project root
pub struct Scaffolder<'a, R: CommandRunner> {
    runner: &'a R,
    registry: &'a VariantRegistry,
}

impl<'a, R: CommandRunner> Scaffolder<'a, R> {
    pub fn new(runner: &'a R, registry: &'a VariantRegistry) -> Self {
        Self { runner, registry }
    }

    /// Run the base scaffold (when required) and then every step in order
    pub async fn execute<P: Progress>(
        &self,
        ctx: &ExecutionContext,
        variant: &Variant,
        progress: &mut P,
    ) -> Result<Outcome> {
        if variant.requires_base_scaffold {
            let command = self.registry.base_scaffold();
            progress.base_scaffold(command);
            self.runner.run(command, &ctx.project_root).await?;
        }

        for step in &variant.steps {
            progress.step(step);
            self.run_step(ctx, step).await?;
        }

        Ok(match &variant.watch {
            Some(command) => Outcome::Watching {
                command: command.clone(),
            },
            None => Outcome::Done,
        })
    }

    /// Start the watcher in the project root and block until it exits
    pub async fn launch_watcher(&self, ctx: &ExecutionContext, command: &str) -> Result<()> {
        self.runner.run(command, &ctx.project_root).await
    }

    async fn run_step(&self, ctx: &ExecutionContext, step: &Step) -> Result<()> {
        match step {
            Step::RunCommand { command, cwd } => {
                self.runner.run(command, &ctx.dir(cwd.as_deref())).await
            }
            Step::WriteFile { path, contents } => writer::write_file(&ctx.path(path), contents).await,
            Step::EnsureDir { path } => writer::ensure_dir(&ctx.path(path)).await,
            Step::EnsureFile { path, command } => {
                if ctx.path(path).exists() {
                    Ok(())
                } else {
                    self.runner.run(command, &ctx.project_root).await
                }
            }
            Step::AddScript { name, command } => {
                package::add_script(&ctx.path("package.json"), name, command).await
            }
        }
    }
}

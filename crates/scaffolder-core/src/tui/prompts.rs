//! Charm-style CLI prompts using cliclack

use crate::error::ScaffoldError;
use crate::product::ProductConfig;
use crate::runtime::ShellRunner;
use crate::scaffold::{
    validate_project_name, ExecutionContext, Outcome, Progress, Scaffolder, SetupRequest,
};
use crate::update::UpdateCheck;
use crate::variants::{Step, Variant, VariantRegistry};
use anyhow::{Context, Result};
use colored::Colorize;
use std::time::Duration;

/// How long to wait for a pending update check once the prompts are answered
const UPDATE_NOTICE_GRACE: Duration = Duration::from_millis(500);

/// CLI arguments for the create flow
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project name; prompts when absent
    pub project_name: Option<String>,

    /// Setup variant label or id; prompts when absent
    pub setup: Option<String>,

    /// Print the watcher command instead of launching it
    pub no_watch: bool,

    /// Skip the update check
    pub skip_update_check: bool,
}

/// Run the CLI with interactive prompts
pub async fn run<C: ProductConfig>(config: &C, args: CreateArgs, cli_version: &str) -> Result<()> {
    let registry = config.registry()?;

    // Flag values are checked before anything is printed or created
    let preset_variant = match &args.setup {
        Some(selection) => Some(registry.find(selection)?.clone()),
        None => None,
    };
    let preset_name = match &args.project_name {
        Some(name) => Some(validate_project_name(name)?),
        None => None,
    };

    if !config.banner().is_empty() {
        println!("{}", config.banner().blue());
    }
    cliclack::intro(config.welcome_message())?;

    let update = if args.skip_update_check {
        None
    } else {
        UpdateCheck::spawn(config, cli_version)
    };

    // Step 1: Project name
    let project_name = match preset_name {
        Some(name) => {
            cliclack::log::info(format!("Project name: {}", name))?;
            name
        }
        None => prompt_project_name(config)?,
    };

    // Step 2: Setup variant
    let variant = match preset_variant {
        Some(variant) => {
            cliclack::log::info(format!("Setup: {}", variant.label))?;
            variant
        }
        None => select_variant(&registry)?,
    };

    let request = SetupRequest {
        project_name,
        variant,
    };

    if let Some(check) = update {
        if let Some(notice) = check.notice(UPDATE_NOTICE_GRACE).await {
            cliclack::log::warning(notice)?;
        }
    }

    // Step 3: Resolve project root
    let cwd = std::env::current_dir().context("Failed to read the current directory")?;
    let ctx = ExecutionContext::resolve(&cwd, &request.project_name).await?;
    cliclack::log::info(format!("Project directory: {}", ctx.project_root.display()))?;

    // Step 4: Base scaffold and variant steps
    let runner = ShellRunner;
    let scaffolder = Scaffolder::new(&runner, &registry);
    let outcome = scaffolder
        .execute(&ctx, &request.variant, &mut CliProgress)
        .await?;

    print_notes(&request.variant)?;

    // Step 5: Done, or hand the terminal to the watcher
    match outcome {
        Outcome::Done => {
            cliclack::outro("Your project setup is complete!")?;
        }
        Outcome::Watching { command } if args.no_watch => {
            cliclack::outro(format!(
                "Your project setup is complete! Start the watcher with: cd {} && {}",
                request.project_name, command
            ))?;
        }
        Outcome::Watching { command } => {
            cliclack::outro(format!(
                "Your project setup is complete! Starting `{}` (Ctrl+C to stop)",
                command
            ))?;
            scaffolder.launch_watcher(&ctx, &command).await?;
        }
    }

    Ok(())
}

fn prompt_project_name<C: ProductConfig>(config: &C) -> Result<String> {
    let input: String = cliclack::input("What is the name of your project?")
        .placeholder(config.default_project_name())
        .default_input(config.default_project_name())
        .validate(|input: &String| validate_project_name(input).map(|_| ()))
        .interact()?;

    Ok(validate_project_name(&input)?)
}

fn select_variant(registry: &VariantRegistry) -> Result<Variant> {
    // Build select prompt - use indices to avoid borrow issues
    let mut select = cliclack::select("Choose your setup:");
    for (idx, variant) in registry.variants().iter().enumerate() {
        select = select.item(idx, &variant.label, "");
    }

    let selected_idx: usize = select.interact()?;

    let variant = registry
        .variants()
        .get(selected_idx)
        .cloned()
        .ok_or(ScaffoldError::InvalidSelection)?;
    Ok(variant)
}

fn print_notes(variant: &Variant) -> Result<()> {
    for note in &variant.notes {
        cliclack::log::remark(note)?;
    }
    Ok(())
}

/// Logs each step as it starts
struct CliProgress;

impl Progress for CliProgress {
    fn base_scaffold(&mut self, command: &str) {
        let _ = cliclack::log::step(format!("Creating base project: {}", command.yellow()));
    }

    fn step(&mut self, step: &Step) {
        let line = match step {
            Step::RunCommand { command, .. } => format!("Running {}", command.yellow()),
            other => other.describe(),
        };
        let _ = cliclack::log::step(line);
    }
}

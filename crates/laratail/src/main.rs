//! Laratail - interactive scaffolder for Laravel projects with Tailwind CSS

mod recipes;

use clap::Parser;
use colored::Colorize;
use scaffolder_core::tui::CreateArgs;
use scaffolder_core::{ProductConfig, ScaffoldError, VariantRegistry};

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

const BANNER: &str = r#"
 _                    _        _ _
| |    __ _ _ __ __ _| |_ __ _(_) |
| |   / _` | '__/ _` | __/ _` | | |
| |__| (_| | | | (_| | || (_| | | |
|_____\__,_|_|  \__,_|\__\__,_|_|_|
"#;

/// Laratail product configuration
#[derive(Clone)]
pub struct LaratailConfig;

impl ProductConfig for LaratailConfig {
    fn name(&self) -> &'static str {
        "laratail"
    }

    fn display_name(&self) -> &'static str {
        "Laratail"
    }

    fn tagline(&self) -> Option<&'static str> {
        Some("by @uwayxt")
    }

    fn banner(&self) -> &'static str {
        BANNER
    }

    fn registry(&self) -> Result<VariantRegistry, ScaffoldError> {
        recipes::registry()
    }

    fn registry_url_env(&self) -> &'static str {
        "LARATAIL_REGISTRY_URL"
    }

    fn update_check_env(&self) -> &'static str {
        "LARATAIL_NO_UPDATE_CHECK"
    }

    fn upgrade_command(&self) -> &'static str {
        "cargo install laratail --force"
    }
}

#[derive(Parser, Debug)]
#[command(name = "laratail")]
#[command(about = "Interactive scaffolder for Laravel projects with Tailwind CSS")]
#[command(version)]
pub struct Args {
    /// Project name; the project is created in ./<NAME>
    #[arg(short, long)]
    pub name: Option<String>,

    /// Setup to run: a label from the setup prompt or its id (vite, mix, bare, cli)
    #[arg(short, long)]
    pub setup: Option<String>,

    /// Print the dev/watch command instead of launching it
    #[arg(long = "no-watch")]
    pub no_watch: bool,

    /// Do not check crates.io for a newer laratail release
    #[arg(long = "skip-update-check")]
    pub skip_update_check: bool,
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        CreateArgs {
            project_name: args.name,
            setup: args.setup,
            no_watch: args.no_watch,
            skip_update_check: args.skip_update_check,
        }
    }
}

/// Human-readable report for a failed run
fn error_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<ScaffoldError>() {
        Some(scaffold_err) => scaffold_err.to_string(),
        None => format!("An unexpected error occurred:\n{:#}", err),
    }
}

#[tokio::main]
async fn main() {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully; a running watcher receives the signal too
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let config = LaratailConfig;

    let result = scaffolder_core::run(&config, args.into(), CLI_VERSION).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    if let Err(err) = result {
        eprintln!("{}", error_message(&err).blue());
        std::process::exit(1);
    }
}

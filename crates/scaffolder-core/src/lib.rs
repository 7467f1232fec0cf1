//! Scaffolder Core - Shared library for recipe-driven project scaffolding
//!
//! A product binary supplies a `ProductConfig`: its identity, a YAML file of
//! setup variants, and the template blobs those variants write. This library
//! turns that into an interactive CLI that shells out to package managers and
//! writes files into a fresh project directory.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Command runner, template writer, package.json editing
//! - **Layer 2: Workflow Orchestration** - `VariantRegistry`, `Scaffolder` and `ProductConfig`
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use scaffolder_core::{ExecutionContext, Scaffolder, SetupRequest, ShellRunner};
//!
//! let registry = MyConfig.registry()?;
//! let request = SetupRequest::new(&registry, "demo", "bare")?;
//! let ctx = ExecutionContext::resolve(&std::env::current_dir()?, &request.project_name).await?;
//! let runner = ShellRunner;
//! let outcome = Scaffolder::new(&runner, &registry)
//!     .execute(&ctx, &request.variant, &mut ())
//!     .await?;
//! ```

pub mod error;
pub mod product;
pub mod runtime;
pub mod scaffold;
pub mod templates;
pub mod update;
pub mod variants;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use error::ScaffoldError;
pub use product::ProductConfig;
pub use runtime::{CommandRunner, ShellRunner};
pub use scaffold::{validate_project_name, ExecutionContext, Outcome, Scaffolder, SetupRequest};
pub use variants::{Step, TemplateSet, Variant, VariantRegistry};

#[cfg(feature = "tui")]
pub use tui::run;

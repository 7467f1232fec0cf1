//! Product configuration trait for CLI binaries
//!
//! A binary implements this trait to plug its recipes, templates and
//! identity into the generic scaffolding flow.

use crate::error::Result;
use crate::variants::VariantRegistry;

/// Configuration trait for scaffolding products
///
/// Each product defines:
/// - Product identity (name, display name, banner)
/// - The variant recipes and template blobs it ships
/// - Where to look for newer releases
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (crate name, env var prefix)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Byline appended to the welcome line, e.g. `by @someone`
    fn tagline(&self) -> Option<&'static str> {
        None
    }

    /// Intro line shown at the top of the prompt flow
    fn welcome_message(&self) -> String {
        match self.tagline() {
            Some(tagline) => format!("Welcome to {} {}!", self.display_name(), tagline),
            None => format!("Welcome to {}!", self.display_name()),
        }
    }

    /// ASCII art shown before the first prompt
    fn banner(&self) -> &'static str {
        ""
    }

    /// Project name offered when the user just presses enter
    fn default_project_name(&self) -> &'static str {
        "my_project"
    }

    /// Build the variant registry from the product's embedded recipes
    fn registry(&self) -> Result<VariantRegistry>;

    /// Base URL of the crate registry queried by the update check
    fn crate_registry_url(&self) -> &'static str {
        "https://crates.io"
    }

    /// Environment variable overriding `crate_registry_url`
    fn registry_url_env(&self) -> &'static str;

    /// Environment variable that disables the update check when set
    fn update_check_env(&self) -> &'static str;

    /// Upgrade/install command shown in update notices
    fn upgrade_command(&self) -> &'static str;

    /// User agent string for HTTP requests
    fn user_agent(&self) -> &'static str {
        self.name()
    }
}

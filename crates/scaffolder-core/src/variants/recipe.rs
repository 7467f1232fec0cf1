//! Recipe file types and parsing (variants.yaml)

use serde::{Deserialize, Serialize};

/// Root recipe file listing every setup variant a product offers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeFile {
    /// Command that generates the base project skeleton in place
    pub base_scaffold: String,

    /// Variants in the order they are offered to the user
    pub variants: Vec<VariantRecipe>,
}

/// One setup variant as written in the recipe file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantRecipe {
    /// Short identifier accepted by `--setup`
    pub id: String,

    /// Exact label shown in the setup prompt
    pub label: String,

    /// Whether the base scaffold runs before the steps
    #[serde(default)]
    pub base_scaffold: bool,

    #[serde(default)]
    pub steps: Vec<StepRecipe>,

    /// Lines printed once every step has finished
    #[serde(default)]
    pub notes: Vec<String>,

    /// Long-running watcher launched after the completion message
    #[serde(default)]
    pub watch: Option<String>,
}

/// A step as written in the recipe file; `write` refers to a template by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum StepRecipe {
    Run {
        command: String,
        #[serde(default)]
        cwd: Option<String>,
    },
    Write {
        path: String,
        template: String,
    },
    EnsureDir {
        path: String,
    },
    /// Run `command` only when `path` is missing
    EnsureFile {
        path: String,
        command: String,
    },
    /// Add a script entry to package.json
    AddScript {
        name: String,
        command: String,
    },
}

//! Setup variants and the registry that resolves them
//!
//! Recipes are parsed from YAML and resolved against a product's template
//! set once, at startup. After that every `Variant` is immutable data that the
//! orchestrator interprets step by step.

pub mod recipe;

use crate::error::{Result, ScaffoldError};
use recipe::{RecipeFile, StepRecipe, VariantRecipe};
use std::collections::HashSet;
use std::path::{Component, Path};

/// Named template blobs compiled into a product binary
pub type TemplateSet = [(&'static str, &'static str)];

/// One unit of work inside a variant
///
/// Paths are relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    RunCommand { command: String, cwd: Option<String> },
    WriteFile { path: String, contents: String },
    EnsureDir { path: String },
    EnsureFile { path: String, command: String },
    AddScript { name: String, command: String },
}

impl Step {
    /// Short human-readable description for progress output
    pub fn describe(&self) -> String {
        match self {
            Step::RunCommand { command, .. } => format!("Running {}", command),
            Step::WriteFile { path, .. } => format!("Writing {}", path),
            Step::EnsureDir { path } => format!("Creating {}", path),
            Step::EnsureFile { path, command } => format!("Ensuring {} ({})", path, command),
            Step::AddScript { name, .. } => format!("Adding \"{}\" script to package.json", name),
        }
    }
}

/// A fully resolved setup variant
#[derive(Debug, Clone)]
pub struct Variant {
    pub id: String,
    pub label: String,
    pub requires_base_scaffold: bool,
    pub steps: Vec<Step>,
    pub notes: Vec<String>,
    pub watch: Option<String>,
}

impl Variant {
    pub fn launches_watcher(&self) -> bool {
        self.watch.is_some()
    }
}

/// All variants offered by a product, in prompt order
#[derive(Debug, Clone)]
pub struct VariantRegistry {
    base_scaffold: String,
    variants: Vec<Variant>,
}

impl VariantRegistry {
    /// Parse a recipe file and resolve its template references
    pub fn from_yaml(yaml: &str, templates: &TemplateSet) -> Result<Self> {
        let recipes: RecipeFile = serde_yaml::from_str(yaml)
            .map_err(|e| ScaffoldError::Registry(format!("failed to parse recipes: {}", e)))?;
        Self::from_recipes(recipes, templates)
    }

    pub fn from_recipes(recipes: RecipeFile, templates: &TemplateSet) -> Result<Self> {
        if recipes.base_scaffold.trim().is_empty() {
            return Err(ScaffoldError::Registry(
                "base_scaffold command is empty".to_string(),
            ));
        }

        let mut ids = HashSet::new();
        let mut labels = HashSet::new();
        let mut variants = Vec::with_capacity(recipes.variants.len());

        for recipe in recipes.variants {
            if !ids.insert(recipe.id.clone()) {
                return Err(ScaffoldError::Registry(format!(
                    "duplicate variant id '{}'",
                    recipe.id
                )));
            }
            if !labels.insert(recipe.label.clone()) {
                return Err(ScaffoldError::Registry(format!(
                    "duplicate variant label '{}'",
                    recipe.label
                )));
            }
            variants.push(resolve_variant(recipe, templates)?);
        }

        if variants.is_empty() {
            return Err(ScaffoldError::Registry("no variants defined".to_string()));
        }

        Ok(Self {
            base_scaffold: recipes.base_scaffold,
            variants,
        })
    }

    pub fn base_scaffold(&self) -> &str {
        &self.base_scaffold
    }

    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    /// Look up a variant by its exact label or id
    pub fn find(&self, selection: &str) -> Result<&Variant> {
        self.variants
            .iter()
            .find(|v| v.label == selection || v.id == selection)
            .ok_or(ScaffoldError::InvalidSelection)
    }
}

fn resolve_variant(recipe: VariantRecipe, templates: &TemplateSet) -> Result<Variant> {
    let steps = recipe
        .steps
        .into_iter()
        .map(|step| resolve_step(step, templates))
        .collect::<Result<Vec<_>>>()
        .map_err(|e| match e {
            ScaffoldError::Registry(msg) => {
                ScaffoldError::Registry(format!("variant '{}': {}", recipe.id, msg))
            }
            other => other,
        })?;

    Ok(Variant {
        id: recipe.id,
        label: recipe.label,
        requires_base_scaffold: recipe.base_scaffold,
        steps,
        notes: recipe.notes,
        watch: recipe.watch,
    })
}

fn resolve_step(step: StepRecipe, templates: &TemplateSet) -> Result<Step> {
    let step = match step {
        StepRecipe::Run { command, cwd } => {
            if let Some(dir) = &cwd {
                check_relative(dir)?;
            }
            Step::RunCommand { command, cwd }
        }
        StepRecipe::Write { path, template } => {
            check_relative(&path)?;
            let blob = templates
                .iter()
                .find(|(name, _)| *name == template)
                .map(|(_, contents)| *contents)
                .ok_or_else(|| ScaffoldError::Registry(format!("unknown template '{}'", template)))?;
            Step::WriteFile {
                path,
                contents: format!("{}\n", blob.trim()),
            }
        }
        StepRecipe::EnsureDir { path } => {
            check_relative(&path)?;
            Step::EnsureDir { path }
        }
        StepRecipe::EnsureFile { path, command } => {
            check_relative(&path)?;
            Step::EnsureFile { path, command }
        }
        StepRecipe::AddScript { name, command } => Step::AddScript { name, command },
    };
    Ok(step)
}

/// Reject paths that could escape the project root
fn check_relative(path: &str) -> Result<()> {
    let p = Path::new(path);
    let escapes = p.as_os_str().is_empty()
        || p.components().any(|c| {
            matches!(
                c,
                Component::ParentDir | Component::RootDir | Component::Prefix(_)
            )
        });

    if escapes {
        Err(ScaffoldError::Registry(format!(
            "path '{}' must stay inside the project root",
            path
        )))
    } else {
        Ok(())
    }
}

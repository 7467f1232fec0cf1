//! Compiled-in setup recipes and template blobs

use scaffolder_core::{ScaffoldError, TemplateSet, VariantRegistry};

/// Variant definitions, see recipes/variants.yaml
pub const RECIPES: &str = include_str!("../recipes/variants.yaml");

pub const TEMPLATES: &TemplateSet = &[
    (
        "shared/tailwind.config.js",
        include_str!("../templates/shared/tailwind.config.js"),
    ),
    (
        "shared/tailwind.directives.css",
        include_str!("../templates/shared/tailwind.directives.css"),
    ),
    (
        "vite/welcome.blade.php",
        include_str!("../templates/vite/welcome.blade.php"),
    ),
    (
        "mix/webpack.mix.js",
        include_str!("../templates/mix/webpack.mix.js"),
    ),
    (
        "mix/welcome.blade.php",
        include_str!("../templates/mix/welcome.blade.php"),
    ),
    (
        "bare/welcome.blade.php",
        include_str!("../templates/bare/welcome.blade.php"),
    ),
    (
        "cli/tailwind.config.js",
        include_str!("../templates/cli/tailwind.config.js"),
    ),
    ("cli/index.html", include_str!("../templates/cli/index.html")),
];

pub fn registry() -> Result<VariantRegistry, ScaffoldError> {
    VariantRegistry::from_yaml(RECIPES, TEMPLATES)
}

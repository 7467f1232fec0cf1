//! Writing template output into the project tree
//!
//! This module provides:
//! - Template blob writing with parent directory creation
//! - package.json script editing

pub mod package;
pub mod writer;

pub use package::add_script;
pub use writer::{ensure_dir, write_file};

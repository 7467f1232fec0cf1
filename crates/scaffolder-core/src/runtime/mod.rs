//! External process execution
//!
//! This module provides the `CommandRunner` seam and its shell-backed
//! implementation used for package managers and project generators.

pub mod runner;

pub use runner::{CommandRunner, ShellRunner};

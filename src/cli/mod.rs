//! # CLI Module
//!
//! Command-line surface of the scaffolding tool.
//!
//! ## Commands
//!
//! ### `model`
//!
//! Scaffold the full service layer for one domain model:
//!
//! ```bash
//! kitgen model
//! ```
//!
//! With no arguments the interactive wizard collects the model description.
//! Options:
//! - `--config <FILE>` - Load a YAML/JSON model description instead of
//!   running the wizard
//! - `--output <DIR>` - Root directory for generated files (default: `./`)
//!
//! ## Usage from Code
//!
//! ```rust,ignore
//! kitgen::cli::run_cli()?;
//! ```

mod commands;


pub use commands::{run_cli, Cli, Commands};

//! # CLI Module
//!
//! Command-line front end for planning and linting descriptor sets.
//!
//! ## Commands
//!
//! ### `plan`
//!
//! Compile every annotated method into routes and binding plans:
//!
//! ```bash
//! protoroute-gen plan --descriptor api.yaml --format json
//! ```
//!
//! Options:
//! - `--descriptor <FILE>` - Descriptor set, YAML or JSON (required)
//! - `--config <FILE>` - Generator config (YAML, JSON or TOML)
//! - `--format <FORMAT>` - `text` (default) or `json`
//!
//! ### `lint`
//!
//! Report every annotation problem in a descriptor set:
//!
//! ```bash
//! protoroute-gen lint --descriptor api.yaml --fail-on-error
//! ```
//!
//! ## Usage from Code
//!
//! ```rust,ignore
//! use protoroute::cli::{execute, Cli};
//! use clap::Parser;
//!
//! let cli = Cli::parse();
//! execute(&cli)?;
//! ```
//!
//! Logging is configured with `PROTOROUTE_LOG_LEVEL` and
//! `PROTOROUTE_LOG_FORMAT` (see [`crate::logging`]).

mod commands;


pub use commands::{execute, render_plan, run_cli, Cli, Commands, OutputFormat};

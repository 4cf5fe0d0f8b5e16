//! # Lectern CLI
//!
//! Administrative tools for role registries.
//!
//! The binary is a thin clap front end; every command is a function in
//! [`commands`] that returns the text to print, so the commands can be
//! exercised without a terminal.
//!
//! ## Usage
//!
//! ```ignore
//! use lectern_cli::commands;
//!
//! let registry = commands::load_registry(None)?;
//! println!("{}", commands::list_roles(&registry));
//! ```

pub mod commands;
pub mod token;

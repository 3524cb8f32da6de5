//! flatcat CLI library
//!
//! This library provides the command-line interface for flatcat, which
//! concatenates files into a single marker-delimited text stream.

pub mod cli;
pub mod output;

pub use cli::Cli;

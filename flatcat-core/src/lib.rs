//! Core pattern resolution for flatcat
//!
//! This library turns a caller-supplied list of patterns (literal file
//! paths, directory paths, or glob expressions) into a deduplicated,
//! order-preserving list of absolute file paths.

pub mod error;
pub mod resolver;

pub use error::ResolveError;
pub use resolver::resolve_patterns;

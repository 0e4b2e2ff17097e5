//! Domain types and rules: configuration, validation, ecosystem detection,
//! the script catalog, and the error taxonomy.

pub mod config;
pub mod ecosystem;
pub mod error;
pub mod script;
pub mod validate;

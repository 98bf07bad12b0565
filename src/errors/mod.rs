//! Diagnostics produced while parsing.
//!
//! This module defines the error types the parser collects instead of
//! aborting. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for each kind of parse failure
//! - Helpful error names and suggestions for display

pub mod errors;

#[cfg(test)]
mod tests;

//! The Check module scans EVM bytecode for opcodes that a zkEVM target does
//! not support.
//!
//! Matched opcodes are partitioned into two severity classes: disallowed
//! opcodes make the contract unsupported outright, while incompatible opcodes
//! require recompilation with a zkEVM-aware compiler.

/// Error types for the check module
pub mod error;

mod core;
mod interfaces;

// re-export the public interface
pub use core::{check, classify};
pub use error::Error;
pub use interfaces::{CheckArgs, CheckArgsBuilder, CheckResult, Finding, Report, RuleSet, Severity};

//! Common utilities, constants, and resources used across the zklint codebase.
//!
//! This crate provides shared functionality for the zklint toolkit, including
//! Ethereum-related utilities and general utility functions.

/// Constants used throughout the zklint codebase.
pub mod constants;

/// Error types shared by zklint modules.
pub mod error;

/// Utilities for interacting with Ethereum, including bytecode resolution
/// and RPC functionality.
pub mod ether;

/// General utility functions and types for common tasks.
pub mod utils;

pub use error::Error;

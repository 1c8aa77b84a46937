//! # cbrs Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the infrastructure shared by the library and the
//! `cbrs` binary:
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and the `Result` alias
//!
//! ```rust,ignore
//! use cbrs::core::config; // For loading configuration
//! use cbrs::core::error::{CbError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;

//! Core types, catalogs, and configuration for covenant.
//!
//! This crate provides the foundational data structures used across all
//! covenant crates:
//! - [`rules`] — The fixed S1–S19 violation catalog
//! - [`types`] — Violation and diagnostic record shapes
//! - [`catalog`] — Immutable name catalogs (builtins, stdlib modules,
//!   annotation spellings, storage constructors)
//! - [`config`] — Configuration loading from `covenant.json`

pub mod catalog;
pub mod config;
pub mod rules;
pub mod types;

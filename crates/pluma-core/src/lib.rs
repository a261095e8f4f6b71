// SPDX-FileCopyrightText: 2026 Pluma Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Pluma plugin framework.
//!
//! This crate provides the foundational trait definitions, error types, and
//! common types shared across the Pluma workspace: the plugin contract
//! surface ([`Plugin`], [`ModernPlugin`]), the pre-1.0 hook surface
//! ([`LegacyHooks`]), and the opaque [`TemplateEngine`] handle.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::PlumaError;
pub use types::{ConfigTable, LegacyEvent, PageData, ValueMap};

pub use traits::{LegacyHooks, ModernPlugin, Plugin, TemplateEngine};

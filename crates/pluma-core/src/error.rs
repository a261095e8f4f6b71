// SPDX-FileCopyrightText: 2026 Pluma Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Pluma plugin framework.

use thiserror::Error;

/// The primary error type used across the Pluma trait seams and core operations.
#[derive(Debug, Error)]
pub enum PlumaError {
    /// Configuration errors (invalid TOML, missing required keys, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// A plugin hook failed. Dispatch for the current event aborts; the
    /// framework adds no isolation around misbehaving plugins.
    #[error("plugin '{name}' failed: {source}")]
    Plugin {
        name: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Requested plugin was not found in the registry.
    #[error("plugin not found: {name}")]
    PluginNotFound { name: String },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

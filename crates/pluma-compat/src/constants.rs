// SPDX-FileCopyrightText: 2026 Pluma Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Legacy configuration constants.
//!
//! Very old plugins read the content directory and content file extension
//! from process-wide constants instead of the config table. The adapter
//! keeps that surface alive as an immutable snapshot defined at most once;
//! redefinition attempts are ignored rather than attempted.

use std::sync::OnceLock;

/// The constants legacy plugins expect: content directory and extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyConstants {
    /// Value of the `content_dir` config key at definition time.
    pub content_dir: String,
    /// Value of the `content_ext` config key at definition time.
    pub content_ext: String,
}

/// Write-once slot holding the [`LegacyConstants`] snapshot.
///
/// The set-at-most-once contract is enforced by construction: there is no
/// way to replace a defined snapshot.
#[derive(Debug, Default)]
pub struct ConstantsSlot(OnceLock<LegacyConstants>);

impl ConstantsSlot {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Define the constants. The first definition wins; later calls return
    /// the original snapshot unchanged.
    pub fn define(&self, content_dir: &str, content_ext: &str) -> &LegacyConstants {
        self.0.get_or_init(|| LegacyConstants {
            content_dir: content_dir.to_string(),
            content_ext: content_ext.to_string(),
        })
    }

    /// The defined snapshot, if any.
    pub fn get(&self) -> Option<&LegacyConstants> {
        self.0.get()
    }

    /// Whether the constants have been defined.
    pub fn is_defined(&self) -> bool {
        self.0.get().is_some()
    }
}

// SPDX-FileCopyrightText: 2026 Pluma Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Legacy root-level configuration back-merge.
//!
//! Since Pluma 1.0 the configuration lives under `config/`. Installations
//! predating that kept a single config file in the root directory; when one
//! is present its settings override the already-loaded configuration. The
//! file is read defensively: missing, unreadable, or unparsable content is
//! ignored without surfacing an error.

use std::io;
use std::path::Path;

use pluma_core::ConfigTable;
use tracing::debug;

/// File name of the legacy config file, relative to the root directory.
pub const LEGACY_CONFIG_FILE: &str = "config.toml";

/// Read the legacy config file from `root_dir`, if present and usable.
pub fn load_legacy_config(root_dir: &Path) -> Option<ConfigTable> {
    let path = root_dir.join(LEGACY_CONFIG_FILE);
    let raw = match std::fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return None,
        Err(err) => {
            debug!(path = %path.display(), %err, "legacy config file unreadable, ignoring");
            return None;
        }
    };
    match raw.parse::<ConfigTable>() {
        Ok(table) => Some(table),
        Err(err) => {
            debug!(path = %path.display(), %err, "legacy config file is not a TOML table, ignoring");
            None
        }
    }
}

/// Merge `legacy` into `config`. Legacy keys win on conflict; keys only
/// present in `config` survive unchanged.
pub fn merge_legacy(config: &mut ConfigTable, legacy: ConfigTable) {
    for (key, value) in legacy {
        config.insert(key, value);
    }
}

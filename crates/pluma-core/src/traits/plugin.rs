// SPDX-FileCopyrightText: 2026 Pluma Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Base plugin trait and the modern capability interface.

use crate::traits::legacy::LegacyHooks;

/// The base trait for every plugin loaded by the Pluma host.
///
/// Provides identity plus two capability queries: [`Plugin::as_modern`]
/// answers "was this plugin written against the current interface?", and
/// [`Plugin::legacy_hooks_mut`] exposes the pre-1.0 hook surface if the
/// plugin implements any legacy callbacks.
pub trait Plugin: Send + Sync + 'static {
    /// Returns the unique, human-readable name of this plugin.
    fn name(&self) -> &str;

    /// Returns the semantic version of this plugin.
    fn version(&self) -> semver::Version;

    /// Capability query for the current plugin interface.
    ///
    /// Plugins written against the current interface return `Some(self)`;
    /// pre-1.0 plugins return `None`, which is what makes the legacy
    /// compatibility adapter activate itself.
    fn as_modern(&self) -> Option<&dyn ModernPlugin> {
        None
    }

    /// Returns the legacy hook surface, if this plugin implements any
    /// pre-1.0 callbacks. Both legacy and modern plugins may expose hooks;
    /// dispatch does not filter on [`Plugin::as_modern`].
    fn legacy_hooks_mut(&mut self) -> Option<&mut dyn LegacyHooks> {
        None
    }
}

/// Marker surface of the current plugin interface.
pub trait ModernPlugin {
    /// The plugin API revision this plugin was written against.
    fn api_version(&self) -> u32;
}

// SPDX-FileCopyrightText: 2026 Pluma Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ordered plugin registry.
//!
//! The `PluginRegistry` stores loaded plugin instances in registration
//! order; every event dispatch walks that order. Name lookup is linear,
//! registries are small.

use pluma_core::{Plugin, PlumaError};
use tracing::debug;

use crate::enablement::{resolve, Enablement};

/// A single entry in the plugin registry.
pub struct PluginEntry {
    name: String,
    enablement: Enablement,
    plugin: Box<dyn Plugin>,
}

impl PluginEntry {
    /// The plugin's unique name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The current enablement decision for this plugin.
    pub fn enablement(&self) -> Enablement {
        self.enablement
    }

    /// Whether this plugin is currently enabled.
    ///
    /// Plugins with no decision yet count as enabled; disabling is opt-in.
    pub fn is_enabled(&self) -> bool {
        self.enablement.value().unwrap_or(true)
    }

    /// Shared access to the plugin instance.
    pub fn plugin(&self) -> &dyn Plugin {
        self.plugin.as_ref()
    }

    /// Mutable access to the plugin instance.
    pub fn plugin_mut(&mut self) -> &mut dyn Plugin {
        self.plugin.as_mut()
    }
}

impl std::fmt::Debug for PluginEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginEntry")
            .field("name", &self.name)
            .field("version", &self.plugin.version())
            .field("enablement", &self.enablement)
            .field("modern", &self.plugin.as_modern().is_some())
            .finish()
    }
}

/// Ordered registry of loaded plugin instances.
///
/// Membership and order are fixed once the host has fired its
/// plugins-loaded event; afterwards only enablement flags change.
#[derive(Default)]
pub struct PluginRegistry {
    entries: Vec<PluginEntry>,
}

impl PluginRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register a plugin with no enablement decision yet.
    pub fn register(&mut self, plugin: Box<dyn Plugin>) {
        self.register_with_enablement(plugin, Enablement::Unset);
    }

    /// Register a plugin with a pre-made enablement decision.
    pub fn register_with_enablement(&mut self, plugin: Box<dyn Plugin>, enablement: Enablement) {
        let name = plugin.name().to_string();
        self.entries.push(PluginEntry {
            name,
            enablement,
            plugin,
        });
    }

    /// Get a plugin entry by name.
    pub fn get(&self, name: &str) -> Option<&PluginEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Get a plugin entry by position in registration order.
    pub fn entry_mut(&mut self, index: usize) -> Option<&mut PluginEntry> {
        self.entries.get_mut(index)
    }

    /// Propose an enablement decision for a named plugin.
    ///
    /// The proposal is merged through [`resolve`]: default proposals never
    /// override explicit decisions. Returns the resulting state.
    pub fn propose_enablement(
        &mut self,
        name: &str,
        proposal: Enablement,
    ) -> Result<Enablement, PlumaError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.name == name)
            .ok_or_else(|| PlumaError::PluginNotFound {
                name: name.to_string(),
            })?;
        let resolved = resolve(entry.enablement, proposal);
        if resolved != entry.enablement {
            debug!(plugin = %name, from = ?entry.enablement, to = ?resolved, "plugin enablement changed");
            entry.enablement = resolved;
        }
        Ok(resolved)
    }

    /// Iterate entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &PluginEntry> {
        self.entries.iter()
    }

    /// Iterate entries mutably in registration order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut PluginEntry> {
        self.entries.iter_mut()
    }

    /// Returns the number of registered plugins.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no plugins are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

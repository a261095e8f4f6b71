// SPDX-FileCopyrightText: 2026 Pluma Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The legacy event adapter.
//!
//! One handler per lifecycle event; each re-dispatches the corresponding
//! pre-1.0 event (see [`crate::events::legacy_events`]) to every plugin
//! that handles it, in registry order. Dispatch targets are resolved once,
//! when the plugins-loaded event fires, from
//! [`LegacyHooks::handled_events`]; there is no call-time lookup.
//!
//! The adapter is disabled by default. It enables itself (as an overridable
//! default decision) when any loaded plugin fails the modern capability
//! query, unless the host already made an explicit choice.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, info};

use pluma_core::{
    ConfigTable, LegacyEvent, LegacyHooks, PageData, PlumaError, TemplateEngine, ValueMap,
};
use pluma_plugin::{resolve, Enablement, PluginRegistry};

use crate::config;
use crate::constants::{ConstantsSlot, LegacyConstants};

/// Name of the legacy-support plugin that parses every page's content.
pub const PARSE_PAGES_CONTENT_PLUGIN: &str = "parse-pages-content";

/// Name of the legacy-support plugin that builds page excerpts.
pub const EXCERPT_PLUGIN: &str = "excerpt";

/// Bridges current lifecycle events to the pre-1.0 event surface.
pub struct LegacyEventAdapter {
    root_dir: PathBuf,
    enablement: Enablement,
    /// The resolved content file of the current request; set by
    /// [`LegacyEventAdapter::on_request_file`] and reused by the
    /// content-loaded events. Does not outlive the request.
    request_file: Option<String>,
    /// Registry indices subscribed to each legacy event, in registry order.
    /// Built when the plugins-loaded event fires.
    subscriptions: HashMap<LegacyEvent, Vec<usize>>,
    constants: ConstantsSlot,
}

impl LegacyEventAdapter {
    /// Create a disabled adapter for an installation rooted at `root_dir`.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
            enablement: Enablement::Unset,
            request_file: None,
            subscriptions: HashMap::new(),
            constants: ConstantsSlot::new(),
        }
    }

    /// The installation root directory.
    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// Explicitly enable or disable the adapter. Auto-detection never
    /// overrides a decision made here.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enablement = resolve(self.enablement, Enablement::Explicit(enabled));
    }

    /// The adapter's current enablement decision.
    pub fn enablement(&self) -> Enablement {
        self.enablement
    }

    /// Whether the adapter currently re-dispatches legacy events. Unset
    /// counts as disabled.
    pub fn is_enabled(&self) -> bool {
        self.enablement.value().unwrap_or(false)
    }

    /// The legacy constants snapshot, once defined during config loading.
    pub fn legacy_constants(&self) -> Option<&LegacyConstants> {
        self.constants.get()
    }

    /// The resolved content file of the current request, if any.
    pub fn request_file(&self) -> Option<&str> {
        self.request_file.as_deref()
    }

    /// All plugins have been loaded.
    ///
    /// Runs legacy-plugin detection, resolves dispatch subscriptions, and
    /// (if enabled) triggers `plugins_loaded()`.
    pub fn on_plugins_loaded(&mut self, registry: &mut PluginRegistry) -> Result<(), PlumaError> {
        if !self.enablement.is_explicit()
            && registry
                .iter()
                .any(|entry| entry.plugin().as_modern().is_none())
        {
            // a plugin predating the current interface relies on legacy events
            self.enablement = resolve(self.enablement, Enablement::Default(true));
            info!("pre-1.0 plugin loaded, enabling the legacy compatibility adapter");
        }

        self.rebuild_subscriptions(registry);

        if !self.is_enabled() {
            return Ok(());
        }
        self.dispatch(registry, LegacyEvent::PluginsLoaded, |hooks| {
            hooks.plugins_loaded()
        })
    }

    /// The configuration has been loaded.
    ///
    /// Back-merges the legacy root config file (legacy keys win),
    /// auto-enables the two legacy-support plugins if present and not
    /// explicitly configured, defines the legacy constants once, then
    /// triggers `config_loaded(config)`.
    pub fn on_config_loaded(
        &self,
        registry: &mut PluginRegistry,
        config: &mut ConfigTable,
    ) -> Result<(), PlumaError> {
        if !self.is_enabled() {
            return Ok(());
        }

        if let Some(legacy) = config::load_legacy_config(&self.root_dir) {
            config::merge_legacy(config, legacy);
            debug!("merged legacy root config over the current configuration");
        }

        // These cannot be enabled during on_plugins_loaded: at that point it
        // is unknown whether the host disabled this adapter explicitly.
        for name in [PARSE_PAGES_CONTENT_PLUGIN, EXCERPT_PLUGIN] {
            if registry.get(name).is_some() {
                registry.propose_enablement(name, Enablement::Default(true))?;
            }
        }

        self.define_constants(config);

        self.dispatch(registry, LegacyEvent::ConfigLoaded, |hooks| {
            hooks.config_loaded(&mut *config)
        })
    }

    /// The request URL has been resolved; triggers `request_url(url)`.
    pub fn on_request_url(
        &self,
        registry: &mut PluginRegistry,
        url: &mut String,
    ) -> Result<(), PlumaError> {
        if !self.is_enabled() {
            return Ok(());
        }
        self.dispatch(registry, LegacyEvent::RequestUrl, |hooks| {
            hooks.request_url(&mut *url)
        })
    }

    /// The request file has been resolved. No legacy event exists for this;
    /// the file is recorded for `after_load_content()` and
    /// `after_404_load_content()`.
    pub fn on_request_file(&mut self, file: &str) {
        if !self.is_enabled() {
            return;
        }
        self.request_file = Some(file.to_string());
    }

    /// A content file is about to be loaded; triggers
    /// `before_load_content(file)`.
    pub fn on_content_loading(
        &self,
        registry: &mut PluginRegistry,
        file: &mut String,
    ) -> Result<(), PlumaError> {
        if !self.is_enabled() {
            return Ok(());
        }
        self.dispatch(registry, LegacyEvent::BeforeLoadContent, |hooks| {
            hooks.before_load_content(&mut *file)
        })
    }

    /// A content file has been loaded; triggers
    /// `after_load_content(file, raw_content)` with the recorded request
    /// file. Mutations of the file name are written back to the slot.
    pub fn on_content_loaded(
        &mut self,
        registry: &mut PluginRegistry,
        raw_content: &mut String,
    ) -> Result<(), PlumaError> {
        if !self.is_enabled() {
            return Ok(());
        }
        let mut file = self.request_file.take().unwrap_or_default();
        let result = self.dispatch(registry, LegacyEvent::AfterLoadContent, |hooks| {
            hooks.after_load_content(&mut file, &mut *raw_content)
        });
        self.request_file = Some(file);
        result
    }

    /// The not-found content file is about to be loaded; triggers
    /// `before_404_load_content(file)`.
    pub fn on_404_content_loading(
        &self,
        registry: &mut PluginRegistry,
        file: &mut String,
    ) -> Result<(), PlumaError> {
        if !self.is_enabled() {
            return Ok(());
        }
        self.dispatch(registry, LegacyEvent::Before404LoadContent, |hooks| {
            hooks.before_404_load_content(&mut *file)
        })
    }

    /// The not-found content file has been loaded; triggers
    /// `after_404_load_content(file, raw_content)` with the recorded
    /// request file.
    pub fn on_404_content_loaded(
        &mut self,
        registry: &mut PluginRegistry,
        raw_content: &mut String,
    ) -> Result<(), PlumaError> {
        if !self.is_enabled() {
            return Ok(());
        }
        let mut file = self.request_file.take().unwrap_or_default();
        let result = self.dispatch(registry, LegacyEvent::After404LoadContent, |hooks| {
            hooks.after_404_load_content(&mut file, &mut *raw_content)
        });
        self.request_file = Some(file);
        result
    }

    /// The known meta headers are about to be read; triggers
    /// `before_read_file_meta(headers)`.
    pub fn on_meta_headers(
        &self,
        registry: &mut PluginRegistry,
        headers: &mut ValueMap,
    ) -> Result<(), PlumaError> {
        if !self.is_enabled() {
            return Ok(());
        }
        self.dispatch(registry, LegacyEvent::BeforeReadFileMeta, |hooks| {
            hooks.before_read_file_meta(&mut *headers)
        })
    }

    /// The meta block has been parsed; triggers `file_meta(meta)`.
    pub fn on_meta_parsed(
        &self,
        registry: &mut PluginRegistry,
        meta: &mut ValueMap,
    ) -> Result<(), PlumaError> {
        if !self.is_enabled() {
            return Ok(());
        }
        self.dispatch(registry, LegacyEvent::FileMeta, |hooks| {
            hooks.file_meta(&mut *meta)
        })
    }

    /// The raw content is about to be parsed; triggers
    /// `before_parse_content(raw_content)`.
    pub fn on_content_parsing(
        &self,
        registry: &mut PluginRegistry,
        raw_content: &mut String,
    ) -> Result<(), PlumaError> {
        if !self.is_enabled() {
            return Ok(());
        }
        self.dispatch(registry, LegacyEvent::BeforeParseContent, |hooks| {
            hooks.before_parse_content(&mut *raw_content)
        })
    }

    /// The content has been parsed; triggers `after_parse_content(content)`
    /// and then `content_parsed(content)`. Mutations made during the first
    /// event are visible to the second.
    pub fn on_content_parsed(
        &self,
        registry: &mut PluginRegistry,
        content: &mut String,
    ) -> Result<(), PlumaError> {
        if !self.is_enabled() {
            return Ok(());
        }
        self.dispatch(registry, LegacyEvent::AfterParseContent, |hooks| {
            hooks.after_parse_content(&mut *content)
        })?;
        self.dispatch(registry, LegacyEvent::ContentParsed, |hooks| {
            hooks.content_parsed(&mut *content)
        })
    }

    /// A single page has been loaded; triggers
    /// `get_page_data(pages, meta)` with the page's field values as a plain
    /// ordered list (keys dropped) and the page's `meta` value.
    ///
    /// Surviving list values are written back to their original keys after
    /// dispatch; values past the original field count are dropped.
    pub fn on_single_page_loaded(
        &self,
        registry: &mut PluginRegistry,
        page_data: &mut PageData,
    ) -> Result<(), PlumaError> {
        if !self.is_enabled() {
            return Ok(());
        }

        let keys: Vec<String> = page_data.keys().cloned().collect();
        let mut values: Vec<Value> = page_data.values().cloned().collect();
        let meta = page_data.get("meta").cloned().unwrap_or(Value::Null);

        self.dispatch(registry, LegacyEvent::GetPageData, |hooks| {
            hooks.get_page_data(&mut values, &meta)
        })?;

        for (key, value) in keys.into_iter().zip(values) {
            page_data.insert(key, value);
        }
        Ok(())
    }

    /// The full page list has been assembled; triggers
    /// `get_pages(pages, current_page, previous_page, next_page)`.
    pub fn on_pages_loaded(
        &self,
        registry: &mut PluginRegistry,
        pages: &mut Vec<PageData>,
        current_page: &mut Option<PageData>,
        previous_page: &mut Option<PageData>,
        next_page: &mut Option<PageData>,
    ) -> Result<(), PlumaError> {
        if !self.is_enabled() {
            return Ok(());
        }
        self.dispatch(registry, LegacyEvent::GetPages, |hooks| {
            hooks.get_pages(
                &mut *pages,
                &mut *current_page,
                &mut *previous_page,
                &mut *next_page,
            )
        })
    }

    /// The template engine is being set up; triggers
    /// `before_twig_register()`.
    pub fn on_template_engine_registration(
        &self,
        registry: &mut PluginRegistry,
    ) -> Result<(), PlumaError> {
        if !self.is_enabled() {
            return Ok(());
        }
        self.dispatch(registry, LegacyEvent::BeforeTwigRegister, |hooks| {
            hooks.before_twig_register()
        })
    }

    /// A page is about to be rendered; triggers
    /// `before_render(variables, engine, template_name)`.
    ///
    /// The template name carries a file extension since Pluma 1.0; the
    /// legacy event never did. The extension is stripped before dispatch
    /// and re-appended afterwards.
    pub fn on_page_rendering(
        &self,
        registry: &mut PluginRegistry,
        engine: &mut dyn TemplateEngine,
        variables: &mut ValueMap,
        template_name: &mut String,
    ) -> Result<(), PlumaError> {
        if !self.is_enabled() {
            return Ok(());
        }

        let extension = split_extension(template_name);

        self.dispatch(registry, LegacyEvent::BeforeRender, |hooks| {
            hooks.before_render(&mut *variables, &mut *engine, &mut *template_name)
        })?;

        template_name.push_str(&extension);
        Ok(())
    }

    /// A page has been rendered; triggers `after_render(output)`.
    pub fn on_page_rendered(
        &self,
        registry: &mut PluginRegistry,
        output: &mut String,
    ) -> Result<(), PlumaError> {
        if !self.is_enabled() {
            return Ok(());
        }
        self.dispatch(registry, LegacyEvent::AfterRender, |hooks| {
            hooks.after_render(&mut *output)
        })
    }

    /// Resolve which registry entries handle which legacy events.
    fn rebuild_subscriptions(&mut self, registry: &mut PluginRegistry) {
        self.subscriptions.clear();
        for (index, entry) in registry.iter_mut().enumerate() {
            if let Some(hooks) = entry.plugin_mut().legacy_hooks_mut() {
                for &event in hooks.handled_events() {
                    self.subscriptions.entry(event).or_default().push(index);
                }
            }
        }
    }

    /// Define the legacy constants from the live config, once. Skipped when
    /// either key is missing or not a string.
    fn define_constants(&self, config: &ConfigTable) {
        let dir = config.get("content_dir").and_then(|v| v.as_str());
        let ext = config.get("content_ext").and_then(|v| v.as_str());
        match (dir, ext) {
            (Some(dir), Some(ext)) => {
                self.constants.define(dir, ext);
            }
            _ => debug!("content_dir/content_ext not set, skipping legacy constants"),
        }
    }

    /// Invoke `call` on every subscribed plugin, in registry order. A
    /// returned error aborts dispatch for the remaining plugins.
    fn dispatch<F>(
        &self,
        registry: &mut PluginRegistry,
        event: LegacyEvent,
        mut call: F,
    ) -> Result<(), PlumaError>
    where
        F: FnMut(&mut dyn LegacyHooks) -> Result<(), PlumaError>,
    {
        let Some(indices) = self.subscriptions.get(&event) else {
            return Ok(());
        };
        debug!(event = %event, plugins = indices.len(), "dispatching legacy event");
        for &index in indices {
            let Some(entry) = registry.entry_mut(index) else {
                continue;
            };
            if let Some(hooks) = entry.plugin_mut().legacy_hooks_mut() {
                call(hooks)?;
            }
        }
        Ok(())
    }
}

/// Split the file extension (everything from the last `.` onward) off
/// `template_name`, returning it. No dot means an empty extension.
fn split_extension(template_name: &mut String) -> String {
    match template_name.rfind('.') {
        Some(position) => template_name.split_off(position),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_extension_takes_everything_from_last_dot() {
        let mut name = String::from("page.twig");
        assert_eq!(split_extension(&mut name), ".twig");
        assert_eq!(name, "page");

        let mut name = String::from("archive.v2.html");
        assert_eq!(split_extension(&mut name), ".html");
        assert_eq!(name, "archive.v2");
    }

    #[test]
    fn split_extension_without_dot_is_empty() {
        let mut name = String::from("page");
        assert_eq!(split_extension(&mut name), "");
        assert_eq!(name, "page");
    }

    #[test]
    fn new_adapter_is_disabled_and_unset() {
        let adapter = LegacyEventAdapter::new("/tmp/site");
        assert!(!adapter.is_enabled());
        assert_eq!(adapter.enablement(), Enablement::Unset);
        assert!(adapter.legacy_constants().is_none());
        assert!(adapter.request_file().is_none());
    }

    #[test]
    fn set_enabled_is_explicit() {
        let mut adapter = LegacyEventAdapter::new("/tmp/site");
        adapter.set_enabled(true);
        assert_eq!(adapter.enablement(), Enablement::Explicit(true));
        assert!(adapter.is_enabled());
    }
}

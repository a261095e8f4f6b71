// SPDX-FileCopyrightText: 2026 Pluma Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Recording mock plugin for deterministic testing.
//!
//! `MockPlugin` implements both `Plugin` and `LegacyHooks`. Every invoked
//! legacy callback appends a [`CallRecord`] with a snapshot of the received
//! arguments to a shareable call log, so tests can assert on dispatch order
//! and argument shapes across several plugins.
//!
//! Optional behaviors:
//! - `with_append_tag`: appends a marker to the mutable string parameter of
//!   each handled event (content, url, file, template name, output), so
//!   tests can observe that mutations thread through dispatch
//! - `failing_on`: returns an error from the named event's callback

use std::sync::{Arc, Mutex};

use serde_json::{json, Value};

use pluma_core::{
    ConfigTable, LegacyEvent, LegacyHooks, ModernPlugin, PageData, Plugin, PlumaError,
    TemplateEngine, ValueMap,
};

/// One recorded legacy callback invocation.
#[derive(Debug, Clone)]
pub struct CallRecord {
    /// Name of the plugin that received the call.
    pub plugin: String,
    /// The legacy event that was dispatched.
    pub event: LegacyEvent,
    /// JSON snapshot of the arguments as received (before any mutation).
    pub args: Value,
}

/// A call log shared between mocks and the test body.
pub type CallLog = Arc<Mutex<Vec<CallRecord>>>;

/// A recording plugin for adapter tests.
pub struct MockPlugin {
    name: String,
    modern: bool,
    handled: Vec<LegacyEvent>,
    append_tag: Option<String>,
    fail_on: Option<LegacyEvent>,
    calls: CallLog,
}

impl MockPlugin {
    /// Create a pre-1.0 plugin (fails the modern capability query).
    pub fn legacy(name: &str) -> Self {
        Self {
            name: name.to_string(),
            modern: false,
            handled: Vec::new(),
            append_tag: None,
            fail_on: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a plugin implementing the current interface.
    pub fn modern(name: &str) -> Self {
        Self {
            modern: true,
            ..Self::legacy(name)
        }
    }

    /// Declare the legacy events this mock handles.
    pub fn handling(mut self, events: &[LegacyEvent]) -> Self {
        self.handled = events.to_vec();
        self
    }

    /// Append `tag` to the mutable string parameter of every handled event.
    pub fn with_append_tag(mut self, tag: &str) -> Self {
        self.append_tag = Some(tag.to_string());
        self
    }

    /// Return an error from the given event's callback.
    pub fn failing_on(mut self, event: LegacyEvent) -> Self {
        self.fail_on = Some(event);
        self
    }

    /// Record calls into `log` instead of a private one, so several mocks
    /// can share a single ordered log.
    pub fn with_shared_log(mut self, log: &CallLog) -> Self {
        self.calls = Arc::clone(log);
        self
    }

    /// Handle to this mock's call log.
    pub fn call_log(&self) -> CallLog {
        Arc::clone(&self.calls)
    }

    fn enter(&self, event: LegacyEvent, args: Value) -> Result<(), PlumaError> {
        if self.fail_on == Some(event) {
            return Err(PlumaError::Plugin {
                name: self.name.clone(),
                source: format!("mock instructed to fail on {event}").into(),
            });
        }
        self.calls
            .lock()
            .expect("call log lock poisoned")
            .push(CallRecord {
                plugin: self.name.clone(),
                event,
                args,
            });
        Ok(())
    }

    fn mutate(&self, value: &mut String) {
        if let Some(tag) = &self.append_tag {
            value.push_str(tag);
        }
    }
}

impl Plugin for MockPlugin {
    fn name(&self) -> &str {
        &self.name
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn as_modern(&self) -> Option<&dyn ModernPlugin> {
        if self.modern { Some(self) } else { None }
    }

    fn legacy_hooks_mut(&mut self) -> Option<&mut dyn LegacyHooks> {
        Some(self)
    }
}

impl ModernPlugin for MockPlugin {
    fn api_version(&self) -> u32 {
        1
    }
}

impl LegacyHooks for MockPlugin {
    fn handled_events(&self) -> &[LegacyEvent] {
        &self.handled
    }

    fn plugins_loaded(&mut self) -> Result<(), PlumaError> {
        self.enter(LegacyEvent::PluginsLoaded, Value::Null)
    }

    fn config_loaded(&mut self, config: &mut ConfigTable) -> Result<(), PlumaError> {
        let snapshot = serde_json::to_value(&*config).unwrap_or(Value::Null);
        self.enter(LegacyEvent::ConfigLoaded, snapshot)
    }

    fn request_url(&mut self, url: &mut String) -> Result<(), PlumaError> {
        self.enter(LegacyEvent::RequestUrl, json!(url.as_str()))?;
        self.mutate(url);
        Ok(())
    }

    fn before_load_content(&mut self, file: &mut String) -> Result<(), PlumaError> {
        self.enter(LegacyEvent::BeforeLoadContent, json!(file.as_str()))?;
        self.mutate(file);
        Ok(())
    }

    fn after_load_content(
        &mut self,
        file: &mut String,
        raw_content: &mut String,
    ) -> Result<(), PlumaError> {
        self.enter(
            LegacyEvent::AfterLoadContent,
            json!({ "file": file.as_str(), "raw_content": raw_content.as_str() }),
        )?;
        self.mutate(file);
        self.mutate(raw_content);
        Ok(())
    }

    fn before_404_load_content(&mut self, file: &mut String) -> Result<(), PlumaError> {
        self.enter(LegacyEvent::Before404LoadContent, json!(file.as_str()))?;
        self.mutate(file);
        Ok(())
    }

    fn after_404_load_content(
        &mut self,
        file: &mut String,
        raw_content: &mut String,
    ) -> Result<(), PlumaError> {
        self.enter(
            LegacyEvent::After404LoadContent,
            json!({ "file": file.as_str(), "raw_content": raw_content.as_str() }),
        )?;
        self.mutate(raw_content);
        Ok(())
    }

    fn before_read_file_meta(&mut self, headers: &mut ValueMap) -> Result<(), PlumaError> {
        self.enter(LegacyEvent::BeforeReadFileMeta, Value::Object(headers.clone()))
    }

    fn file_meta(&mut self, meta: &mut ValueMap) -> Result<(), PlumaError> {
        self.enter(LegacyEvent::FileMeta, Value::Object(meta.clone()))
    }

    fn before_parse_content(&mut self, raw_content: &mut String) -> Result<(), PlumaError> {
        self.enter(LegacyEvent::BeforeParseContent, json!(raw_content.as_str()))?;
        self.mutate(raw_content);
        Ok(())
    }

    fn after_parse_content(&mut self, content: &mut String) -> Result<(), PlumaError> {
        self.enter(LegacyEvent::AfterParseContent, json!(content.as_str()))?;
        self.mutate(content);
        Ok(())
    }

    fn content_parsed(&mut self, content: &mut String) -> Result<(), PlumaError> {
        self.enter(LegacyEvent::ContentParsed, json!(content.as_str()))?;
        self.mutate(content);
        Ok(())
    }

    fn get_page_data(&mut self, pages: &mut Vec<Value>, meta: &Value) -> Result<(), PlumaError> {
        self.enter(
            LegacyEvent::GetPageData,
            json!({ "pages": &*pages, "meta": meta }),
        )?;
        if self.append_tag.is_some() {
            for value in pages.iter_mut() {
                if let Value::String(s) = value {
                    self.mutate(s);
                }
            }
        }
        Ok(())
    }

    fn get_pages(
        &mut self,
        pages: &mut Vec<PageData>,
        current_page: &mut Option<PageData>,
        previous_page: &mut Option<PageData>,
        next_page: &mut Option<PageData>,
    ) -> Result<(), PlumaError> {
        self.enter(
            LegacyEvent::GetPages,
            json!({
                "pages": &*pages,
                "current_page": &*current_page,
                "previous_page": &*previous_page,
                "next_page": &*next_page,
            }),
        )
    }

    fn before_twig_register(&mut self) -> Result<(), PlumaError> {
        self.enter(LegacyEvent::BeforeTwigRegister, Value::Null)
    }

    fn before_render(
        &mut self,
        variables: &mut ValueMap,
        engine: &mut dyn TemplateEngine,
        template_name: &mut String,
    ) -> Result<(), PlumaError> {
        self.enter(
            LegacyEvent::BeforeRender,
            json!({
                "variables": Value::Object(variables.clone()),
                "engine": engine.name(),
                "template_name": template_name.as_str(),
            }),
        )?;
        self.mutate(template_name);
        Ok(())
    }

    fn after_render(&mut self, output: &mut String) -> Result<(), PlumaError> {
        self.enter(LegacyEvent::AfterRender, json!(output.as_str()))?;
        self.mutate(output);
        Ok(())
    }
}

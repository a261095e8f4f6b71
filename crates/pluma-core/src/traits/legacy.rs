// SPDX-FileCopyrightText: 2026 Pluma Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The pre-1.0 hook surface.
//!
//! Before the current plugin interface existed, plugins reacted to a set of
//! differently-named callbacks with different argument shapes. This trait
//! carries that surface forward: one optional method per legacy event, each
//! defaulting to a no-op. The compatibility adapter asks
//! [`LegacyHooks::handled_events`] once, when the plugins-loaded event
//! fires, and only ever invokes the callbacks a plugin declared there.

use serde_json::Value;

use crate::error::PlumaError;
use crate::traits::template::TemplateEngine;
use crate::types::{ConfigTable, LegacyEvent, PageData, ValueMap};

/// Legacy callbacks a pre-1.0 plugin may implement.
///
/// All string and mapping parameters are mutable; writes made by one plugin
/// are visible to the next plugin in dispatch order and to the host. A
/// returned error aborts dispatch of the current event for the remaining
/// plugins.
pub trait LegacyHooks {
    /// The legacy events this plugin handles. Dispatch only invokes the
    /// callbacks named here; everything else stays a no-op.
    fn handled_events(&self) -> &[LegacyEvent];

    /// All plugins have been loaded.
    fn plugins_loaded(&mut self) -> Result<(), PlumaError> {
        Ok(())
    }

    /// The configuration has been loaded (and legacy settings back-merged).
    fn config_loaded(&mut self, _config: &mut ConfigTable) -> Result<(), PlumaError> {
        Ok(())
    }

    /// The request URL has been resolved.
    fn request_url(&mut self, _url: &mut String) -> Result<(), PlumaError> {
        Ok(())
    }

    /// A content file is about to be loaded.
    fn before_load_content(&mut self, _file: &mut String) -> Result<(), PlumaError> {
        Ok(())
    }

    /// A content file has been loaded.
    fn after_load_content(
        &mut self,
        _file: &mut String,
        _raw_content: &mut String,
    ) -> Result<(), PlumaError> {
        Ok(())
    }

    /// The not-found content file is about to be loaded.
    fn before_404_load_content(&mut self, _file: &mut String) -> Result<(), PlumaError> {
        Ok(())
    }

    /// The not-found content file has been loaded.
    fn after_404_load_content(
        &mut self,
        _file: &mut String,
        _raw_content: &mut String,
    ) -> Result<(), PlumaError> {
        Ok(())
    }

    /// The known meta header fields are about to be read.
    fn before_read_file_meta(&mut self, _headers: &mut ValueMap) -> Result<(), PlumaError> {
        Ok(())
    }

    /// The meta block of the current page has been parsed.
    fn file_meta(&mut self, _meta: &mut ValueMap) -> Result<(), PlumaError> {
        Ok(())
    }

    /// The raw content is about to be parsed.
    fn before_parse_content(&mut self, _raw_content: &mut String) -> Result<(), PlumaError> {
        Ok(())
    }

    /// The content has been parsed (first of two legacy notifications).
    fn after_parse_content(&mut self, _content: &mut String) -> Result<(), PlumaError> {
        Ok(())
    }

    /// The content has been parsed (second legacy notification; sees any
    /// mutation made during [`LegacyHooks::after_parse_content`]).
    fn content_parsed(&mut self, _content: &mut String) -> Result<(), PlumaError> {
        Ok(())
    }

    /// The current page's fields are available as an ordered list of values
    /// (keys dropped), plus the page's meta value.
    fn get_page_data(&mut self, _pages: &mut Vec<Value>, _meta: &Value) -> Result<(), PlumaError> {
        Ok(())
    }

    /// The full page list and the current/previous/next page references are
    /// available.
    fn get_pages(
        &mut self,
        _pages: &mut Vec<PageData>,
        _current_page: &mut Option<PageData>,
        _previous_page: &mut Option<PageData>,
        _next_page: &mut Option<PageData>,
    ) -> Result<(), PlumaError> {
        Ok(())
    }

    /// The template engine is being set up.
    fn before_twig_register(&mut self) -> Result<(), PlumaError> {
        Ok(())
    }

    /// A page is about to be rendered. `template_name` carries no file
    /// extension here; the adapter strips it before dispatch and restores
    /// it afterwards.
    fn before_render(
        &mut self,
        _variables: &mut ValueMap,
        _engine: &mut dyn TemplateEngine,
        _template_name: &mut String,
    ) -> Result<(), PlumaError> {
        Ok(())
    }

    /// A page has been rendered.
    fn after_render(&mut self, _output: &mut String) -> Result<(), PlumaError> {
        Ok(())
    }
}

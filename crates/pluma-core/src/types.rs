// SPDX-FileCopyrightText: 2026 Pluma Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types used across the Pluma trait seams.

use strum::{Display, EnumString};

/// The live configuration of the host, as a mutable TOML table.
///
/// Hooks receive this table mutably; writes made by one plugin are visible
/// to the next plugin in dispatch order and to the host afterwards.
pub type ConfigTable = toml::Table;

/// A generic ordered key-value mapping (meta headers, parsed meta,
/// template variables). Insertion order is preserved.
pub type ValueMap = serde_json::Map<String, serde_json::Value>;

/// The fields of a single loaded page, keyed by field name.
///
/// Field insertion order is significant: legacy consumers observe the
/// fields as a plain ordered list.
pub type PageData = ValueMap;

/// The pre-1.0 event vocabulary.
///
/// Each variant names one legacy callback that old plugins may implement
/// through [`crate::traits::LegacyHooks`]. The `Display` form is the exact
/// historical callback name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum LegacyEvent {
    PluginsLoaded,
    ConfigLoaded,
    RequestUrl,
    BeforeLoadContent,
    AfterLoadContent,
    #[strum(serialize = "before_404_load_content")]
    Before404LoadContent,
    #[strum(serialize = "after_404_load_content")]
    After404LoadContent,
    BeforeReadFileMeta,
    FileMeta,
    BeforeParseContent,
    AfterParseContent,
    ContentParsed,
    GetPageData,
    GetPages,
    BeforeTwigRegister,
    BeforeRender,
    AfterRender,
}

impl LegacyEvent {
    /// All legacy events, in host pipeline order.
    pub const ALL: [LegacyEvent; 17] = [
        LegacyEvent::PluginsLoaded,
        LegacyEvent::ConfigLoaded,
        LegacyEvent::RequestUrl,
        LegacyEvent::BeforeLoadContent,
        LegacyEvent::AfterLoadContent,
        LegacyEvent::Before404LoadContent,
        LegacyEvent::After404LoadContent,
        LegacyEvent::BeforeReadFileMeta,
        LegacyEvent::FileMeta,
        LegacyEvent::BeforeParseContent,
        LegacyEvent::AfterParseContent,
        LegacyEvent::ContentParsed,
        LegacyEvent::GetPageData,
        LegacyEvent::GetPages,
        LegacyEvent::BeforeTwigRegister,
        LegacyEvent::BeforeRender,
        LegacyEvent::AfterRender,
    ];
}

// SPDX-FileCopyrightText: 2026 Pluma Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Event translation — current lifecycle events → pre-1.0 plugin events.
//!
//! Pure deterministic mapping, fixed at compile time. Most lifecycle events
//! map to exactly one legacy event; `ContentParsed` fans out to two legacy
//! notifications in a fixed order, and `RequestFile` maps to none (the
//! adapter only records the resolved file for later events).

use pluma_core::LegacyEvent;
use strum::Display;

/// The current lifecycle event vocabulary, as fired by the host pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum LifecycleEvent {
    PluginsLoaded,
    ConfigLoaded,
    RequestUrl,
    RequestFile,
    ContentLoading,
    ContentLoaded,
    NotFoundContentLoading,
    NotFoundContentLoaded,
    MetaHeaders,
    MetaParsed,
    ContentParsing,
    ContentParsed,
    SinglePageLoaded,
    PagesLoaded,
    TemplateEngineRegistration,
    PageRendering,
    PageRendered,
}

impl LifecycleEvent {
    /// All lifecycle events, in host pipeline order.
    pub const ALL: [LifecycleEvent; 17] = [
        LifecycleEvent::PluginsLoaded,
        LifecycleEvent::ConfigLoaded,
        LifecycleEvent::RequestUrl,
        LifecycleEvent::RequestFile,
        LifecycleEvent::ContentLoading,
        LifecycleEvent::ContentLoaded,
        LifecycleEvent::NotFoundContentLoading,
        LifecycleEvent::NotFoundContentLoaded,
        LifecycleEvent::MetaHeaders,
        LifecycleEvent::MetaParsed,
        LifecycleEvent::ContentParsing,
        LifecycleEvent::ContentParsed,
        LifecycleEvent::SinglePageLoaded,
        LifecycleEvent::PagesLoaded,
        LifecycleEvent::TemplateEngineRegistration,
        LifecycleEvent::PageRendering,
        LifecycleEvent::PageRendered,
    ];
}

/// The legacy events triggered for a lifecycle event, in dispatch order.
pub fn legacy_events(event: LifecycleEvent) -> &'static [LegacyEvent] {
    use LegacyEvent as L;
    match event {
        LifecycleEvent::PluginsLoaded => &[L::PluginsLoaded],
        LifecycleEvent::ConfigLoaded => &[L::ConfigLoaded],
        LifecycleEvent::RequestUrl => &[L::RequestUrl],
        // The resolved request file is recorded, not re-dispatched.
        LifecycleEvent::RequestFile => &[],
        LifecycleEvent::ContentLoading => &[L::BeforeLoadContent],
        LifecycleEvent::ContentLoaded => &[L::AfterLoadContent],
        LifecycleEvent::NotFoundContentLoading => &[L::Before404LoadContent],
        LifecycleEvent::NotFoundContentLoaded => &[L::After404LoadContent],
        LifecycleEvent::MetaHeaders => &[L::BeforeReadFileMeta],
        LifecycleEvent::MetaParsed => &[L::FileMeta],
        LifecycleEvent::ContentParsing => &[L::BeforeParseContent],
        LifecycleEvent::ContentParsed => &[L::AfterParseContent, L::ContentParsed],
        LifecycleEvent::SinglePageLoaded => &[L::GetPageData],
        LifecycleEvent::PagesLoaded => &[L::GetPages],
        LifecycleEvent::TemplateEngineRegistration => &[L::BeforeTwigRegister],
        LifecycleEvent::PageRendering => &[L::BeforeRender],
        LifecycleEvent::PageRendered => &[L::AfterRender],
    }
}

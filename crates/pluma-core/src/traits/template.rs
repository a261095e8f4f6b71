// SPDX-FileCopyrightText: 2026 Pluma Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Opaque handle to the host's template engine.

/// A template engine instance, passed through to legacy render hooks.
///
/// Rendering itself is the host's concern; plugins only ever receive the
/// engine as an opaque mutable handle during the render events.
pub trait TemplateEngine {
    /// Returns the name of the engine implementation.
    fn name(&self) -> &str;
}

// SPDX-FileCopyrightText: 2026 Pluma Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock template engine handle for render-event tests.

use pluma_core::TemplateEngine;

/// A template engine stand-in that only carries a name.
pub struct MockTemplateEngine {
    name: String,
}

impl MockTemplateEngine {
    /// Create a mock engine with the given name.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

impl Default for MockTemplateEngine {
    fn default() -> Self {
        Self::new("mock-engine")
    }
}

impl TemplateEngine for MockTemplateEngine {
    fn name(&self) -> &str {
        &self.name
    }
}

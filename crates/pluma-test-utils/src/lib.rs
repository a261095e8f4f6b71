// SPDX-FileCopyrightText: 2026 Pluma Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Pluma integration tests.
//!
//! Provides mock plugins and a mock template engine for fast, deterministic,
//! CI-runnable tests without a real host pipeline.
//!
//! # Components
//!
//! - [`MockPlugin`] - Recording plugin, buildable as legacy or modern, with
//!   configurable handled events, mutation, and failure injection
//! - [`MockTemplateEngine`] - No-op template engine handle

pub mod mock_plugin;
pub mod mock_template;

pub use mock_plugin::{CallLog, CallRecord, MockPlugin};
pub use mock_template::MockTemplateEngine;

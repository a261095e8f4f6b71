// SPDX-FileCopyrightText: 2026 Pluma Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait definitions for the Pluma plugin architecture.
//!
//! [`Plugin`] is the base contract every loaded plugin satisfies; the
//! optional surfaces ([`ModernPlugin`], [`LegacyHooks`]) are reached through
//! capability queries on the base trait rather than downcasting.

pub mod legacy;
pub mod plugin;
pub mod template;

// Re-export all traits at the traits module level for convenience.
pub use legacy::LegacyHooks;
pub use plugin::{ModernPlugin, Plugin};
pub use template::TemplateEngine;

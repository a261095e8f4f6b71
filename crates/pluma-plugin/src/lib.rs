// SPDX-FileCopyrightText: 2026 Pluma Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin registry and enablement resolution.
//!
//! The registry is an ordered collection of loaded plugin instances; event
//! dispatch always walks it in registration order. Each entry carries a
//! tri-state [`Enablement`] so that decisions made automatically by the
//! framework (marked default) can never override decisions made by the
//! user or host configuration (marked explicit).

pub mod enablement;
pub mod registry;

pub use enablement::{resolve, Enablement};
pub use registry::{PluginEntry, PluginRegistry};

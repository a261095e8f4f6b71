// SPDX-FileCopyrightText: 2026 Pluma Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tri-state plugin enablement.
//!
//! A plugin's enabled flag can be set by the user or host configuration
//! (explicit) or by framework heuristics (default). Explicit decisions are
//! terminal with respect to default proposals: once a user has spoken,
//! auto-enable logic must never override them.

/// A plugin's enablement decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Enablement {
    /// No decision has been made yet.
    #[default]
    Unset,
    /// Set by the user or host configuration.
    Explicit(bool),
    /// Set automatically by a framework heuristic; overridable.
    Default(bool),
}

impl Enablement {
    /// Whether this decision was made explicitly by the user or host.
    pub fn is_explicit(self) -> bool {
        matches!(self, Enablement::Explicit(_))
    }

    /// The decided value, if any decision has been made.
    pub fn value(self) -> Option<bool> {
        match self {
            Enablement::Unset => None,
            Enablement::Explicit(enabled) | Enablement::Default(enabled) => Some(enabled),
        }
    }
}

/// Merge an enablement proposal into the current state.
///
/// `Default` proposals only overwrite `Unset` or other `Default` values,
/// never `Explicit` ones. `Explicit` proposals always apply.
pub fn resolve(current: Enablement, proposal: Enablement) -> Enablement {
    match proposal {
        Enablement::Default(_) if current.is_explicit() => current,
        _ => proposal,
    }
}

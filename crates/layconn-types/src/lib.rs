// ─────────────────────────────────────────────────────────────────────
// Layconn — Layout Connectivity Kernel Types
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Identifiers, coupling kinds, rule-deck configuration, and the error
//! hierarchy shared by the Layconn connectivity kernel.

pub mod config;
pub mod coupling;
pub mod error;

pub use config::{GlobalRule, RuleDeck};
pub use coupling::{Coupling, GlobalNetId, LayerId};
pub use error::{LayconnError, LayconnResult};

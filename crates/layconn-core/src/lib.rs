// ─────────────────────────────────────────────────────────────────────
// Layconn — Layout Connectivity Kernel Core
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Connectivity rule set for layout net extraction: hard and soft
//! layer-to-layer connections, named global nets, and the canonical
//! text form used by scripting clients and golden tests.
//!
//! # Invariants
//!
//! 1. **Symmetry**: every layer-to-layer relation is stored in both rows.
//!    A soft relation reads `-S` from the initiating row and `+S` from the
//!    receiving row.
//!
//! 2. **Hard dominates**: a hard relation is never downgraded by a soft
//!    connect; a hard connect upgrades an existing soft relation.
//!
//! 3. **Stable global ids**: global nets get sequential ids from 0 in
//!    registration order, and re-registering a name returns its id.
//!
//! 4. **Deterministic rendering**: rows and entries are emitted in
//!    ascending numeric order regardless of insertion order.

pub mod connectivity;
pub mod registry;

pub use connectivity::Connectivity;
pub use registry::GlobalNetRegistry;

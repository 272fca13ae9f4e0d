// ─────────────────────────────────────────────────────────────────────
// Layconn — Identifiers and Coupling Kinds
// ─────────────────────────────────────────────────────────────────────

use std::fmt;

use serde::{Deserialize, Serialize};

/// Index of a design layer. Sparse ids are fine; only map-key uniqueness
/// is required.
pub type LayerId = u32;

/// Sequential id of a global net, assigned from 0 in registration order.
pub type GlobalNetId = usize;

/// How one row entry relates to its row's owner.
///
/// A soft relation is directional: the first argument of a soft connect
/// holds `SoftOut`, the second holds `SoftIn`. Mirroring a coupling gives
/// the entry seen from the other endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Coupling {
    /// Always-considered connection. No marker.
    Hard,
    /// Soft connection seen from its initiating side. Rendered `-S`.
    SoftOut,
    /// Soft connection seen from its receiving side. Rendered `+S`.
    SoftIn,
}

impl Coupling {
    /// The same relation viewed from the peer's row.
    #[inline]
    pub fn mirrored(self) -> Self {
        match self {
            Coupling::Hard => Coupling::Hard,
            Coupling::SoftOut => Coupling::SoftIn,
            Coupling::SoftIn => Coupling::SoftOut,
        }
    }

    #[inline]
    pub fn is_soft(self) -> bool {
        !matches!(self, Coupling::Hard)
    }

    /// Marker appended after the peer id in the canonical text form.
    #[inline]
    pub fn suffix(self) -> &'static str {
        match self {
            Coupling::Hard => "",
            Coupling::SoftOut => "-S",
            Coupling::SoftIn => "+S",
        }
    }

    /// Combine an existing entry with a newly requested one.
    ///
    /// Hard dominates: a hard entry is never downgraded, and a hard request
    /// upgrades a soft entry. Between two soft entries the newer orientation
    /// wins.
    #[inline]
    pub fn merge(existing: Option<Coupling>, requested: Coupling) -> Coupling {
        match (existing, requested) {
            (Some(Coupling::Hard), _) => Coupling::Hard,
            (_, requested) => requested,
        }
    }
}

impl fmt::Display for Coupling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Coupling::Hard => "hard",
            Coupling::SoftOut => "soft-out",
            Coupling::SoftIn => "soft-in",
        };
        f.write_str(name)
    }
}

// ─────────────────────────────────────────────────────────────────────
// Layconn — Connectivity Rule Set
// ─────────────────────────────────────────────────────────────────────
//! Per-layer connection rows plus layer-to-global-net attachments, with
//! a canonical text rendering.
//!
//! Rendering (`Display`) emits one block per layer in ascending order:
//! the layer row `L:p,q-S,...` followed by the layer's global row
//! `GL:g,...` when it has global attachments. Entries are ascending by
//! peer id and carry the `Coupling` suffix. Rows are `\n`-separated with
//! no trailing newline; an empty rule set renders as `""`.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use layconn_types::{Coupling, GlobalNetId, LayconnResult, LayerId, RuleDeck};

use crate::registry::GlobalNetRegistry;

type Row<K> = BTreeMap<K, Coupling>;

/// Connectivity rule set: which layers connect, hard or soft, and which
/// layers attach to named global nets.
///
/// Not internally synchronized. Share behind a lock if several threads
/// mutate it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Connectivity {
    layers: BTreeMap<LayerId, Row<LayerId>>,
    globals: BTreeMap<LayerId, Row<GlobalNetId>>,
    nets: GlobalNetRegistry,
}

impl Connectivity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a rule set from a validated rule deck.
    pub fn from_deck(deck: &RuleDeck) -> LayconnResult<Self> {
        if let Err(e) = deck.validate() {
            log::warn!("rejecting rule deck: {e}");
            return Err(e);
        }
        let mut conn = Self::new();
        for &layer in &deck.layers {
            conn.connect_layer(layer);
        }
        for &(a, b) in &deck.connections {
            conn.connect(a, b);
        }
        for &(a, b) in &deck.soft_connections {
            conn.soft_connect(a, b);
        }
        for rule in &deck.global_connections {
            conn.connect_global(rule.layer, &rule.net);
        }
        for rule in &deck.soft_global_connections {
            conn.soft_connect_global(rule.layer, &rule.net);
        }
        log::debug!(
            "built connectivity from {} rules: {} layers, {} global nets",
            deck.rule_count(),
            conn.layers().count(),
            conn.global_net_count()
        );
        Ok(conn)
    }

    /// Register `layer` with a hard self-entry. Idempotent.
    pub fn connect_layer(&mut self, layer: LayerId) {
        self.link(layer, layer, Coupling::Hard);
    }

    /// Hard, bidirectional connection between `a` and `b`.
    ///
    /// Upgrades an existing soft relation between the pair.
    pub fn connect(&mut self, a: LayerId, b: LayerId) {
        self.link(a, b, Coupling::Hard);
    }

    /// Soft, bidirectional connection. `a` is the initiating side (`-S`
    /// in its row), `b` the receiving side (`+S` in its row).
    ///
    /// An existing hard relation is kept. A soft self-connection is
    /// recorded as a plain self-entry.
    pub fn soft_connect(&mut self, a: LayerId, b: LayerId) {
        if a == b {
            self.link(a, a, Coupling::Hard);
        } else {
            self.link(a, b, Coupling::SoftOut);
        }
    }

    /// Hard attachment of `layer` to the global net `name`, registering
    /// the net on first use. Returns the net id.
    pub fn connect_global(&mut self, layer: LayerId, name: &str) -> GlobalNetId {
        self.link_global(layer, name, Coupling::Hard)
    }

    /// Soft attachment of `layer` to the global net `name` (`-S` on the
    /// layer side). Returns the net id.
    pub fn soft_connect_global(&mut self, layer: LayerId, name: &str) -> GlobalNetId {
        self.link_global(layer, name, Coupling::SoftOut)
    }

    pub fn global_net_name(&self, id: GlobalNetId) -> LayconnResult<&str> {
        self.nets.name(id)
    }

    pub fn global_net_id(&self, name: &str) -> LayconnResult<GlobalNetId> {
        self.nets.id(name)
    }

    pub fn global_net_count(&self) -> usize {
        self.nets.len()
    }

    /// Registered global nets as `(id, name)` in id order.
    pub fn global_nets(&self) -> impl Iterator<Item = (GlobalNetId, &str)> + '_ {
        self.nets.iter()
    }

    /// Every layer with a layer row or a global row, ascending.
    pub fn layers(&self) -> impl Iterator<Item = LayerId> {
        let all: BTreeSet<LayerId> = self
            .layers
            .keys()
            .chain(self.globals.keys())
            .copied()
            .collect();
        all.into_iter()
    }

    /// Entries of `layer`'s row, ascending by peer.
    pub fn connected(&self, layer: LayerId) -> impl Iterator<Item = (LayerId, Coupling)> + '_ {
        self.layers
            .get(&layer)
            .into_iter()
            .flat_map(|row| row.iter().map(|(&peer, &c)| (peer, c)))
    }

    /// Global attachments of `layer`, ascending by net id.
    pub fn global_connections(
        &self,
        layer: LayerId,
    ) -> impl Iterator<Item = (GlobalNetId, Coupling)> + '_ {
        self.globals
            .get(&layer)
            .into_iter()
            .flat_map(|row| row.iter().map(|(&id, &c)| (id, c)))
    }

    /// Coupling of `b` as seen from `a`'s row.
    pub fn interaction(&self, a: LayerId, b: LayerId) -> Option<Coupling> {
        self.layers.get(&a)?.get(&b).copied()
    }

    /// Coupling of global net `id` as seen from `layer`.
    pub fn global_interaction(&self, layer: LayerId, id: GlobalNetId) -> Option<Coupling> {
        self.globals.get(&layer)?.get(&id).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty() && self.globals.is_empty()
    }

    fn link(&mut self, a: LayerId, b: LayerId, coupling: Coupling) {
        log::trace!("link {a} -> {b} ({coupling})");
        Self::merge_entry(self.layers.entry(a).or_default(), b, coupling);
        if a != b {
            Self::merge_entry(self.layers.entry(b).or_default(), a, coupling.mirrored());
        }
    }

    fn link_global(&mut self, layer: LayerId, name: &str, coupling: Coupling) -> GlobalNetId {
        let id = self.nets.intern(name);
        log::trace!("link {layer} -> G{id} {name:?} ({coupling})");
        Self::merge_entry(self.globals.entry(layer).or_default(), id, coupling);
        id
    }

    fn merge_entry<K: Ord + Copy + fmt::Display>(row: &mut Row<K>, peer: K, requested: Coupling) {
        let existing = row.get(&peer).copied();
        let merged = Coupling::merge(existing, requested);
        if merged != requested {
            log::debug!("keeping {merged} entry for {peer}, ignoring {requested} request");
        }
        row.insert(peer, merged);
    }
}

fn write_row<K: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    first: &mut bool,
    prefix: &str,
    layer: LayerId,
    row: &Row<K>,
) -> fmt::Result {
    if !*first {
        f.write_str("\n")?;
    }
    *first = false;
    write!(f, "{prefix}{layer}:")?;
    for (i, (peer, coupling)) in row.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write!(f, "{peer}{}", coupling.suffix())?;
    }
    Ok(())
}

impl fmt::Display for Connectivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for layer in self.layers() {
            if let Some(row) = self.layers.get(&layer) {
                write_row(f, &mut first, "", layer, row)?;
            }
            if let Some(row) = self.globals.get(&layer) {
                write_row(f, &mut first, "G", layer, row)?;
            }
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────
// Layconn — Global Net Registry
// ─────────────────────────────────────────────────────────────────────
//! Name ↔ id table for global nets.
//!
//! Ids are dense and sequential from 0 in registration order, so the
//! id → name direction is a plain `Vec` index.

use std::collections::HashMap;

use layconn_types::{GlobalNetId, LayconnError, LayconnResult};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalNetRegistry {
    names: Vec<String>,
    ids: HashMap<String, GlobalNetId>,
}

impl GlobalNetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the id for `name`, registering it if unseen.
    pub fn intern(&mut self, name: &str) -> GlobalNetId {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let id = self.names.len();
        self.names.push(name.to_string());
        self.ids.insert(name.to_string(), id);
        log::debug!("registered global net {name:?} as G{id}");
        id
    }

    pub fn name(&self, id: GlobalNetId) -> LayconnResult<&str> {
        self.names
            .get(id)
            .map(String::as_str)
            .ok_or_else(|| LayconnError::NotFound(format!("global net id {id}")))
    }

    pub fn id(&self, name: &str) -> LayconnResult<GlobalNetId> {
        self.ids
            .get(name)
            .copied()
            .ok_or_else(|| LayconnError::NotFound(format!("global net {name:?}")))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// `(id, name)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (GlobalNetId, &str)> + '_ {
        self.names.iter().enumerate().map(|(id, n)| (id, n.as_str()))
    }
}

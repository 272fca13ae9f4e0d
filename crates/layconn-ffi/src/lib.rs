// ─────────────────────────────────────────────────────────────────────
// Layconn — Layout Connectivity Kernel PyO3 FFI Bindings
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
// Note: #[deny(unsafe_code)] not applied — PyO3 proc macros generate
// unsafe blocks internally. All hand-written code in this crate is safe.
//! Python-callable wrapper around the Rust connectivity rule set.
//!
//! Exposes `Connectivity` to Python via PyO3 with the method names the
//! layout scripting layer uses.
//!
//! # FFI Safety
//!
//! - Layer ids are `u32`; negative or oversized ints are rejected by PyO3
//!   argument conversion before reaching Rust.
//! - Unknown global net lookups raise `KeyError`; invalid rule decks raise
//!   `ValueError`.
//! - Rule decks are validated before use (`RuleDeck::validate()`).
//!
//! Install: `pip install -e crates/layconn-ffi` (requires maturin).
//!
//! Usage from Python:
//! ```python
//! from layconn import Connectivity
//!
//! conn = Connectivity()
//! conn.connect(1)
//! conn.connect(0, 1)
//! conn.soft_connect(0, 2)
//! conn.connect_global(0, "GLOBAL1")
//! assert conn.to_s() == "0:1,2-S\nG0:0\n1:0,1\n2:0+S"
//! ```

use pyo3::exceptions::{PyKeyError, PyValueError};
use pyo3::prelude::*;

use layconn_core::Connectivity;
use layconn_types::{GlobalNetId, LayconnError, LayerId, RuleDeck};

fn to_py_err(err: LayconnError) -> PyErr {
    match err {
        LayconnError::NotFound(_) => PyKeyError::new_err(err.to_string()),
        LayconnError::Config(_) => PyValueError::new_err(err.to_string()),
    }
}

// ─── PyConnectivity ─────────────────────────────────────────────────

/// Connectivity rule set exposed to Python.
#[pyclass(name = "Connectivity")]
#[derive(Clone, Default)]
struct PyConnectivity {
    inner: Connectivity,
}

#[pymethods]
impl PyConnectivity {
    #[new]
    fn new() -> Self {
        Self::default()
    }

    /// Build from a JSON rule deck.
    #[staticmethod]
    fn from_json(json: &str) -> PyResult<Self> {
        let deck = RuleDeck::from_json(json).map_err(to_py_err)?;
        let inner = Connectivity::from_deck(&deck).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    /// `connect(layer)` registers a layer; `connect(a, b)` adds a hard
    /// connection between two layers.
    #[pyo3(signature = (a, b = None))]
    fn connect(&mut self, a: LayerId, b: Option<LayerId>) {
        match b {
            Some(b) => self.inner.connect(a, b),
            None => self.inner.connect_layer(a),
        }
    }

    /// Soft connection; `a` is the initiating side.
    fn soft_connect(&mut self, a: LayerId, b: LayerId) {
        self.inner.soft_connect(a, b);
    }

    /// Hard attachment to a global net. Returns the net id.
    fn connect_global(&mut self, layer: LayerId, name: &str) -> GlobalNetId {
        self.inner.connect_global(layer, name)
    }

    /// Soft attachment to a global net. Returns the net id.
    fn soft_connect_global(&mut self, layer: LayerId, name: &str) -> GlobalNetId {
        self.inner.soft_connect_global(layer, name)
    }

    fn global_net_name(&self, id: GlobalNetId) -> PyResult<String> {
        self.inner
            .global_net_name(id)
            .map(str::to_string)
            .map_err(to_py_err)
    }

    fn global_net_id(&self, name: &str) -> PyResult<GlobalNetId> {
        self.inner.global_net_id(name).map_err(to_py_err)
    }

    /// List of `(id, name)` for every registered global net.
    fn global_nets(&self) -> Vec<(GlobalNetId, String)> {
        self.inner
            .global_nets()
            .map(|(id, name)| (id, name.to_string()))
            .collect()
    }

    /// Every layer with connectivity rows, ascending.
    fn layers(&self) -> Vec<LayerId> {
        self.inner.layers().collect()
    }

    /// `(peer, kind)` entries of a layer row; kind is `"hard"`,
    /// `"soft-out"` or `"soft-in"`.
    fn connected(&self, layer: LayerId) -> Vec<(LayerId, String)> {
        self.inner
            .connected(layer)
            .map(|(peer, c)| (peer, c.to_string()))
            .collect()
    }

    /// `(global net id, kind)` entries of a layer's global row.
    fn global_connections(&self, layer: LayerId) -> Vec<(GlobalNetId, String)> {
        self.inner
            .global_connections(layer)
            .map(|(id, c)| (id, c.to_string()))
            .collect()
    }

    /// Canonical text form.
    fn to_s(&self) -> String {
        self.inner.to_string()
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "Connectivity(layers={}, global_nets={})",
            self.inner.layers().count(),
            self.inner.global_net_count()
        )
    }
}

// ─── Module Registration ────────────────────────────────────────────

/// Layconn — layout connectivity rule sets for Python.
///
/// - `Connectivity` — hard/soft layer connections and global nets
#[pymodule]
fn layconn(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyConnectivity>()?;
    Ok(())
}


// ─────────────────────────────────────────────────────────────────────
// Layconn — Rule Deck Configuration
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

use crate::coupling::LayerId;
use crate::error::{LayconnError, LayconnResult};

/// A layer-to-global-net attachment in a rule deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalRule {
    pub layer: LayerId,
    pub net: String,
}

impl GlobalRule {
    pub fn new(layer: LayerId, net: impl Into<String>) -> Self {
        Self {
            layer,
            net: net.into(),
        }
    }
}

/// Declarative description of a connectivity rule set.
///
/// Sections are applied in field order: `layers`, `connections`,
/// `soft_connections`, `global_connections`, `soft_global_connections`.
/// Global net ids follow first appearance in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleDeck {
    /// Layers registered with a self-entry only.
    #[serde(default)]
    pub layers: Vec<LayerId>,

    /// Hard layer pairs.
    #[serde(default)]
    pub connections: Vec<(LayerId, LayerId)>,

    /// Soft layer pairs. The first layer of each pair is the initiating side.
    #[serde(default)]
    pub soft_connections: Vec<(LayerId, LayerId)>,

    /// Hard layer-to-global-net attachments.
    #[serde(default)]
    pub global_connections: Vec<GlobalRule>,

    /// Soft layer-to-global-net attachments.
    #[serde(default)]
    pub soft_global_connections: Vec<GlobalRule>,
}

impl RuleDeck {
    /// Validate the deck.
    ///
    /// Global net names must be non-empty and carry no surrounding
    /// whitespace, since names are matched exactly.
    pub fn validate(&self) -> LayconnResult<()> {
        let rules = self
            .global_connections
            .iter()
            .chain(self.soft_global_connections.iter());
        for rule in rules {
            if rule.net.is_empty() {
                return Err(LayconnError::Config(format!(
                    "global net name for layer {} must not be empty",
                    rule.layer
                )));
            }
            if rule.net.trim() != rule.net {
                return Err(LayconnError::Config(format!(
                    "global net name {:?} has surrounding whitespace",
                    rule.net
                )));
            }
        }
        Ok(())
    }

    /// Load from JSON string.
    pub fn from_json(json: &str) -> LayconnResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| LayconnError::Config(format!("JSON parse error: {e}")))
    }

    /// Total number of rules in the deck.
    pub fn rule_count(&self) -> usize {
        self.layers.len()
            + self.connections.len()
            + self.soft_connections.len()
            + self.global_connections.len()
            + self.soft_global_connections.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty_and_valid() {
        let deck = RuleDeck::default();
        assert_eq!(deck.rule_count(), 0);
        assert!(deck.validate().is_ok());
    }

    #[test]
    fn test_from_json_full() {
        let deck = RuleDeck::from_json(
            r#"{
                "layers": [1],
                "connections": [[0, 1]],
                "soft_connections": [[0, 2]],
                "global_connections": [{"layer": 0, "net": "GLOBAL1"}],
                "soft_global_connections": [{"layer": 1, "net": "GLOBAL1"}]
            }"#,
        )
        .unwrap();
        assert_eq!(deck.layers, vec![1]);
        assert_eq!(deck.connections, vec![(0, 1)]);
        assert_eq!(deck.soft_connections, vec![(0, 2)]);
        assert_eq!(deck.global_connections, vec![GlobalRule::new(0, "GLOBAL1")]);
        assert_eq!(deck.soft_global_connections, vec![GlobalRule::new(1, "GLOBAL1")]);
        assert_eq!(deck.rule_count(), 5);
    }

    #[test]
    fn test_from_json_missing_sections_default() {
        let deck = RuleDeck::from_json(r#"{"connections": [[3, 4]]}"#).unwrap();
        assert!(deck.layers.is_empty());
        assert_eq!(deck.connections, vec![(3, 4)]);
    }

    #[test]
    fn test_from_json_rejects_negative_layer() {
        let err = RuleDeck::from_json(r#"{"layers": [-1]}"#).unwrap_err();
        assert!(matches!(err, LayconnError::Config(_)));
    }

    #[test]
    fn test_from_json_rejects_unknown_section() {
        assert!(RuleDeck::from_json(r#"{"vias": []}"#).is_err());
    }

    #[test]
    fn test_from_json_malformed() {
        let err = RuleDeck::from_json("{not json").unwrap_err();
        assert!(err.to_string().contains("JSON parse error"));
    }

    #[test]
    fn test_validate_empty_net_name() {
        let deck = RuleDeck {
            global_connections: vec![GlobalRule::new(0, "")],
            ..Default::default()
        };
        assert!(deck.validate().is_err());
    }

    #[test]
    fn test_validate_padded_net_name() {
        let deck = RuleDeck {
            soft_global_connections: vec![GlobalRule::new(2, " VDD")],
            ..Default::default()
        };
        let err = deck.validate().unwrap_err();
        assert!(err.to_string().contains("whitespace"));
    }
}

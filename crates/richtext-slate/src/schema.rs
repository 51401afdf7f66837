// SPDX-License-Identifier: AGPL-3.0-or-later
//! Schema resolution
//!
//! A Slate schema (v0.33 JSON shape) may mark container types as void.
//! Resolution turns the optional raw configuration into an immutable
//! `is_void` oracle used read-only for the duration of one conversion.

use richtext_types::{Container, DataMap, TypeSets};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Raw schema configuration, keyed by container type name.
///
/// Both sections are optional on the wire; fields other than `isVoid`
/// deserialize without error and are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaJson {
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub blocks: HashMap<String, SchemaValue>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub inlines: HashMap<String, SchemaValue>,
}

/// Per-type schema attributes; only `isVoid` is consulted
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaValue {
    #[serde(rename = "isVoid", default, skip_serializing_if = "Option::is_none")]
    pub is_void: Option<bool>,
    #[serde(flatten)]
    pub rest: DataMap,
}

impl SchemaValue {
    /// Shorthand for `{ "isVoid": value }`
    pub fn void(value: bool) -> Self {
        Self {
            is_void: Some(value),
            rest: DataMap::new(),
        }
    }
}

/// Resolved schema: the raw configuration closed over the classification
/// sets. Constructed once per conversion call, read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    config: SchemaJson,
    sets: TypeSets,
}

impl Schema {
    /// Resolve an optional raw configuration against the canonical type sets
    pub fn from_json(config: Option<SchemaJson>) -> Self {
        Self::with_sets(config, TypeSets::DEFAULT)
    }

    /// Resolve against caller-supplied classification sets
    pub fn with_sets(config: Option<SchemaJson>, sets: TypeSets) -> Self {
        Self {
            config: config.unwrap_or_default(),
            sets,
        }
    }

    pub fn sets(&self) -> &TypeSets {
        &self.sets
    }

    /// Whether `node` is void under this schema.
    ///
    /// Block type names probe the `blocks` section, everything else the
    /// `inlines` section; a missing entry or missing `isVoid` defaults to
    /// `false`. Callers only ever pass container nodes, never text leaves.
    pub fn is_void(&self, node: &Container) -> bool {
        let section = if self.sets.is_block(&node.node_type) {
            &self.config.blocks
        } else {
            &self.config.inlines
        };

        section
            .get(node.node_type.as_str())
            .and_then(|value| value.is_void)
            .unwrap_or(false)
    }
}

// SPDX-License-Identifier: AGPL-3.0-or-later
//! Block/inline kind classification
//!
//! Non-text node types are partitioned by two fixed, closed name
//! enumerations. The sets are injectable so new node kinds only require
//! supplying different sets, never touching converter logic.

use serde::{Deserialize, Serialize};

/// Canonical block-level type names
pub mod blocks {
    pub const DOCUMENT: &str = "document";
    pub const PARAGRAPH: &str = "paragraph";
    pub const HEADING_1: &str = "heading-1";
    pub const HEADING_2: &str = "heading-2";
    pub const HEADING_3: &str = "heading-3";
    pub const HEADING_4: &str = "heading-4";
    pub const HEADING_5: &str = "heading-5";
    pub const HEADING_6: &str = "heading-6";
    pub const OL_LIST: &str = "ordered-list";
    pub const UL_LIST: &str = "unordered-list";
    pub const LIST_ITEM: &str = "list-item";
    pub const QUOTE: &str = "blockquote";
    pub const HR: &str = "hr";
    pub const EMBEDDED_ENTRY: &str = "embedded-entry";

    /// All block type names
    pub const ALL: &[&str] = &[
        DOCUMENT,
        PARAGRAPH,
        HEADING_1,
        HEADING_2,
        HEADING_3,
        HEADING_4,
        HEADING_5,
        HEADING_6,
        OL_LIST,
        UL_LIST,
        LIST_ITEM,
        QUOTE,
        HR,
        EMBEDDED_ENTRY,
    ];
}

/// Canonical inline-level type names
pub mod inlines {
    pub const HYPERLINK: &str = "hyperlink";
    pub const ENTRY_HYPERLINK: &str = "entry-hyperlink";
    pub const ASSET_HYPERLINK: &str = "asset-hyperlink";
    pub const EMBEDDED_ENTRY: &str = "embedded-entry-inline";

    /// All inline type names
    pub const ALL: &[&str] = &[HYPERLINK, ENTRY_HYPERLINK, ASSET_HYPERLINK, EMBEDDED_ENTRY];
}

/// Layout category of a container node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Block,
    Inline,
}

/// Injectable classification sets partitioning container type names.
///
/// Blocks are probed before inlines, so a name appearing in both sets
/// classifies as a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeSets {
    pub blocks: &'static [&'static str],
    pub inlines: &'static [&'static str],
}

impl TypeSets {
    /// The canonical sets
    pub const DEFAULT: Self = Self {
        blocks: blocks::ALL,
        inlines: inlines::ALL,
    };

    pub fn is_block(&self, node_type: &str) -> bool {
        self.blocks.contains(&node_type)
    }

    pub fn is_inline(&self, node_type: &str) -> bool {
        self.inlines.contains(&node_type)
    }

    /// Classify a container type name, `None` if it is in neither set.
    ///
    /// Only container type names are meaningful here; `"text"` is a leaf
    /// sentinel, not a member of either set.
    pub fn classify(&self, node_type: &str) -> Option<NodeKind> {
        if self.is_block(node_type) {
            Some(NodeKind::Block)
        } else if self.is_inline(node_type) {
            Some(NodeKind::Inline)
        } else {
            None
        }
    }
}

impl Default for TypeSets {
    fn default() -> Self {
        Self::DEFAULT
    }
}

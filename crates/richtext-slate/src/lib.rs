// SPDX-License-Identifier: AGPL-3.0-or-later
//! Richtext Slate - Converters between the rich text model and Slate documents
//!
//! This crate provides:
//! - The Slate document model (`object`-tagged nodes, leaves, `isVoid`)
//! - A schema resolver deciding which container types are void
//! - `to_slate_document`: rich text tree -> Slate tree
//! - `from_slate_document`: Slate tree -> rich text tree

use thiserror::Error;

pub mod from_slate;
pub mod schema;
pub mod slate;
pub mod to_slate;

pub use from_slate::from_slate_document;
pub use schema::{Schema, SchemaJson, SchemaValue};
pub use to_slate::to_slate_document;

/// Error type for document conversion
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdapterError {
    /// A container node's type name belongs to neither the block nor the
    /// inline enumeration.
    #[error("unexpected rich text nodeType '{0}'")]
    UnknownNodeType(String),

    /// A node classified to a Slate object kind other than block or inline.
    /// The kind sum type makes this unreachable from the shipped converter;
    /// the variant stays public so callers handling conversion errors
    /// exhaustively have a stable name for it.
    #[error("unexpected slate object '{0}'")]
    UnexpectedObject(String),
}

pub type Result<T> = std::result::Result<T, AdapterError>;

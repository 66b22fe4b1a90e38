//! Error types for nbox.
//!
//! Layout passes themselves are total; these cover the collaborators
//! around them: loading options and editing container trees.

use thiserror::Error;

/// Top-level error type.
#[derive(Debug, Error)]
pub enum NboxError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Tree(#[from] TreeError),
}

/// Errors while loading layout options.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid padding {value}: must be finite and non-negative")]
    InvalidPadding { value: f32 },

    #[error("Malformed layout options: {message}")]
    Malformed { message: String },
}

/// Errors while editing or querying a container tree.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    #[error("Unknown node #{0}")]
    UnknownNode(u64),

    #[error("Node #{0} is not a container")]
    NotAContainer(u64),

    #[error("Node #{0} is not a leaf object")]
    NotAnObject(u64),

    #[error("Node #{0} already has a parent")]
    AlreadyParented(u64),

    #[error("Adding node #{child} under #{parent} would create a cycle")]
    Cycle { parent: u64, child: u64 },
}

//! Error types for tree rendering.

use thiserror::Error;

/// Errors produced while rendering a syntax tree back to source text.
///
/// Dispatch over the node catalog is exhaustive, so the only runtime failure
/// is a node kind appearing in a position its rendering rules do not cover.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnparseError {
    /// A node kind has no rendering rule in the position it appeared in,
    /// such as a slice outside of a subscript.
    #[error("no rendering rule for {kind} node in this position")]
    UnsupportedNode { kind: &'static str },
}

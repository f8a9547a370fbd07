pub use crate::dump::{dump, DumpOptions};
pub use crate::errors::UnparseError;
pub use crate::node::{FieldValue, NodeRef};
pub use crate::unparse::to_source;
pub use crate::walk::{walk_preorder, Preorder};

pub mod ast;
pub mod dump;
pub mod errors;
pub mod node;
pub mod unparse;
pub mod walk;

mod precedence;
mod writer;

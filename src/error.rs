//! Contract violations reported by the arena.
//!
//! None of these are recoverable in normal use. The plain context methods
//! panic with the error message; the `try_*` methods hand it back instead.

use crate::types::ItemId;

/// Result alias used throughout the crate.
pub type LayoutResult<T> = Result<T, LayoutError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Id does not name a live item.
    #[error("invalid item id {id} (context holds {count} items)")]
    InvalidId { id: ItemId, count: usize },

    /// The root cannot become anyone's child or sibling.
    #[error("the root item cannot be inserted into another item")]
    RootAsChild,

    /// Parent and child (or earlier and later sibling) are the same item.
    #[error("item {0} cannot be inserted into itself")]
    SelfReference(ItemId),

    /// Each item can be inserted exactly once.
    #[error("item {0} has already been inserted")]
    AlreadyInserted(ItemId),

    /// The allocator granted fewer slots than the arena needs.
    #[error("layout arena exhausted: {requested} slots needed, {granted} granted")]
    Exhausted { requested: usize, granted: usize },

    #[error("container flags {0:#x} fall outside the container mask")]
    ContainFlags(u32),

    #[error("behavior flags {0:#x} fall outside the behavior mask")]
    BehaveFlags(u32),

    #[error("user flags {0:#x} fall outside the user mask")]
    UserFlags(u32),

    #[error("invalid arena config: {0}")]
    Config(String),
}

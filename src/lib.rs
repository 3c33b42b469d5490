//! # spark-layout
//!
//! Arena-backed box layout engine.
//!
//! Items live in one growable buffer and are addressed by [`ItemId`]. Each
//! item is either a free-form container that overlays and anchors its
//! children, or a flex container that stacks them in a row or column,
//! optionally wrapping into lines. A layout run computes one rectangle per
//! item, axis by axis.
//!
//! ## Usage
//!
//! ```
//! use spark_layout::{Behave, Contain, LayoutContext};
//!
//! let mut ctx = LayoutContext::new();
//! let root = ctx.item_new();
//! ctx.set_size_xy(root, 80.0, 24.0);
//! ctx.set_contain(root, Contain::COLUMN);
//!
//! let header = ctx.item_new();
//! ctx.set_size_xy(header, 0.0, 1.0);
//! ctx.set_behave(header, Behave::HFILL);
//! ctx.insert(root, header);
//!
//! let body = ctx.item_new();
//! ctx.set_behave(body, Behave::FILL);
//! ctx.insert(root, body);
//!
//! ctx.run_context();
//! assert_eq!(ctx.rect(header).width, 80.0);
//! assert_eq!(ctx.rect(body).y, 1.0);
//! assert_eq!(ctx.rect(body).height, 23.0);
//! ```
//!
//! For a per-frame rebuild, call [`LayoutContext::reset`] and declare the tree
//! again; the buffer is kept.
//!
//! ## Modules
//!
//! - [`types`] - Ids, axes and geometry (Size, Margins, Rect)
//! - [`flags`] - Container and behavior flags with typed decoders
//! - [`engine`] - Item arena, tree building, storage strategy
//! - [`layout`] - Size and arrangement passes, wrap lines
//! - [`config`] - Arena growth parameters
//! - [`error`] - Contract violations

pub mod config;
pub mod engine;
pub mod error;
pub mod flags;
pub mod layout;
pub mod types;

pub use types::{Axis, ItemId, Margins, Rect, Scalar, Size};

pub use flags::{Anchor, Behave, BoxModel, Contain, Direction, ItemFlags, Justify, Model, USER_MASK};

pub use engine::{Children, Item, LayoutContext, Reallocator, Slot, SystemAllocator};

pub use config::ArenaConfig;
pub use error::{LayoutError, LayoutResult};

pub use layout::{Line, Lines};

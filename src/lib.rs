//! Tether is a fluent builder for anchor-style UI layout constraints.
//!
//! Tether turns chained calls into batches of [`ConstraintSpec`] values —
//! pairwise relations between view edges, dimensions, and center lines —
//! which a pluggable [`ConstraintHost`] materializes and activates in bulk.
//! The crate performs no layout solving itself; the host (a UI toolkit
//! adapter, or the in-memory [`ViewTree`]) owns that.
//!
//! # Chain lifecycle
//!
//! 1. **Select**: [`LayoutChain::locate`] pushes a pending intent for a view
//!    and switches off the host's automatic constraint translation for it
//! 2. **Configure**: dimension and relational calls fill the current intent
//!    exactly once; [`LayoutChain::and`] re-selects the same view for an
//!    additional, independent constraint
//! 3. **Apply**: [`LayoutChain::apply`] converts every intent, activates the
//!    whole batch on the host, and returns it
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **No global state**: chains are caller-owned and mutably borrow their
//!   host, so the borrow checker rules out concurrent mutation.
//! - **Misuse is recoverable**: re-configuring a finished selection, applying
//!   an unconfigured one, and similar call-order mistakes surface as typed
//!   [`TetherError`] values, never panics.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod constraint;
mod foundation;
mod host;
mod layout;

pub use constraint::model::{Attribute, ConstraintSpec, Related, Relation};
pub use foundation::error::{TetherError, TetherResult};
pub use host::backend::ConstraintHost;
pub use host::tree::{ConstraintId, ViewId, ViewTree};
pub use layout::chain::LayoutChain;

pub use kurbo::Size;

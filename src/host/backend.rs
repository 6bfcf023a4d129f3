use std::fmt;

use crate::{constraint::model::ConstraintSpec, foundation::error::TetherResult};

/// The constraint-solving collaborator behind a
/// [`LayoutChain`](crate::LayoutChain).
///
/// Implementations adapt a concrete UI toolkit: non-owning view handles, the
/// toolkit's constraint constructor, its bulk-activation call, and parent
/// lookup. Solving, invalidation, and thread-affinity rules all stay on the
/// host's side of this seam. The in-memory [`ViewTree`](crate::ViewTree) is
/// the reference implementation.
pub trait ConstraintHost {
    /// Non-owning handle to a view participating in layout.
    type View: Copy + PartialEq + fmt::Debug;

    /// Opaque materialized constraint.
    type Constraint: Clone;

    /// Whether the host still derives constraints from `view`'s autoresizing
    /// behavior.
    fn translates_autoresizing(&self, view: Self::View) -> bool;

    /// Switch autoresizing translation for `view` on or off.
    fn set_translates_autoresizing(&mut self, view: Self::View, enabled: bool);

    /// Materialize `spec` into a host constraint, not yet active.
    fn constraint(
        &mut self,
        spec: &ConstraintSpec<Self::View>,
    ) -> TetherResult<Self::Constraint>;

    /// Activate a whole batch of constraints in one call.
    fn activate(&mut self, constraints: &[Self::Constraint]) -> TetherResult<()>;

    /// Immediate layout parent of `view`, if any.
    fn parent_of(&self, view: Self::View) -> Option<Self::View>;
}

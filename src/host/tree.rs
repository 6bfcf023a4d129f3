use crate::{
    constraint::model::ConstraintSpec,
    foundation::error::{TetherError, TetherResult},
    host::backend::ConstraintHost,
};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
/// Handle to a view stored in a [`ViewTree`].
pub struct ViewId(pub u32);

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
/// Handle to a constraint materialized by a [`ViewTree`].
pub struct ConstraintId(pub u32);

#[derive(Clone, Debug)]
struct ViewNode {
    parent: Option<ViewId>,
    translates_autoresizing: bool,
}

/// In-memory view hierarchy implementing [`ConstraintHost`].
///
/// Views are flat-slab nodes addressed by [`ViewId`]; materialized
/// constraints are stored as [`ConstraintSpec`] values addressed by
/// [`ConstraintId`], and activation appends to an inspectable active set.
/// Useful as a test double and as the reference for toolkit adapters. Views
/// start with autoresizing translation enabled, matching toolkit defaults.
#[derive(Debug, Default)]
pub struct ViewTree {
    views: Vec<ViewNode>,
    specs: Vec<ConstraintSpec<ViewId>>,
    active: Vec<ConstraintId>,
}

impl ViewTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parentless view.
    pub fn add_root(&mut self) -> ViewId {
        self.push_view(None)
    }

    /// Add a child of `parent`.
    pub fn add_child(&mut self, parent: ViewId) -> TetherResult<ViewId> {
        if self.node(parent).is_none() {
            return Err(TetherError::hierarchy(format!(
                "unknown parent view {parent:?}"
            )));
        }
        Ok(self.push_view(Some(parent)))
    }

    /// Stored spec behind a materialized constraint.
    pub fn spec(&self, id: ConstraintId) -> Option<&ConstraintSpec<ViewId>> {
        self.specs.get(id.0 as usize)
    }

    /// Constraints activated so far, in activation order.
    pub fn active(&self) -> &[ConstraintId] {
        &self.active
    }

    /// Whether `id` has been activated.
    pub fn is_active(&self, id: ConstraintId) -> bool {
        self.active.contains(&id)
    }

    fn push_view(&mut self, parent: Option<ViewId>) -> ViewId {
        let id = ViewId(self.views.len() as u32);
        self.views.push(ViewNode {
            parent,
            translates_autoresizing: true,
        });
        id
    }

    fn node(&self, view: ViewId) -> Option<&ViewNode> {
        self.views.get(view.0 as usize)
    }
}

impl ConstraintHost for ViewTree {
    type View = ViewId;
    type Constraint = ConstraintId;

    fn translates_autoresizing(&self, view: ViewId) -> bool {
        self.node(view).is_some_and(|n| n.translates_autoresizing)
    }

    fn set_translates_autoresizing(&mut self, view: ViewId, enabled: bool) {
        if let Some(node) = self.views.get_mut(view.0 as usize) {
            node.translates_autoresizing = enabled;
        }
    }

    fn constraint(&mut self, spec: &ConstraintSpec<ViewId>) -> TetherResult<ConstraintId> {
        if self.node(spec.target).is_none() {
            return Err(TetherError::hierarchy(format!(
                "unknown target view {:?}",
                spec.target
            )));
        }
        if let Some(related) = &spec.related
            && self.node(related.view).is_none()
        {
            return Err(TetherError::hierarchy(format!(
                "unknown related view {:?}",
                related.view
            )));
        }
        let id = ConstraintId(self.specs.len() as u32);
        self.specs.push(spec.clone());
        Ok(id)
    }

    fn activate(&mut self, constraints: &[ConstraintId]) -> TetherResult<()> {
        for &id in constraints {
            if self.spec(id).is_none() {
                return Err(TetherError::constraint(format!(
                    "unknown constraint {id:?}"
                )));
            }
            if !self.active.contains(&id) {
                self.active.push(id);
            }
        }
        Ok(())
    }

    fn parent_of(&self, view: ViewId) -> Option<ViewId> {
        self.node(view).and_then(|n| n.parent)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/tree.rs"]
mod tests;

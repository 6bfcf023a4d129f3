use crate::{
    constraint::model::{Attribute, ConstraintSpec, Related, Relation},
    foundation::error::{TetherError, TetherResult},
};

/// Progress of an intent through its configuration lifecycle.
///
/// An intent starts `Pending`, is configured exactly once into either a
/// single-attribute dimension constraint or a two-view relationship, and may
/// only be materialized once it has left `Pending`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum IntentState {
    Pending,
    Dimensional,
    Relational,
}

/// A pending, not-yet-materialized description of one constraint.
#[derive(Clone, Debug)]
pub(crate) struct Intent<V> {
    target: V,
    attribute: Option<Attribute>,
    relation: Relation,
    related: Option<Related<V>>,
    constant: f64,
    state: IntentState,
}

impl<V: Copy> Intent<V> {
    pub(crate) fn new(target: V) -> Self {
        Self {
            target,
            attribute: None,
            relation: Relation::Equal,
            related: None,
            constant: 0.0,
            state: IntentState::Pending,
        }
    }

    pub(crate) fn target(&self) -> V {
        self.target
    }

    /// True once the intent holds enough to materialize.
    pub(crate) fn is_specified(&self) -> bool {
        self.state != IntentState::Pending
    }

    /// Configure a single-attribute dimension constraint against a constant.
    pub(crate) fn set_dimension(
        &mut self,
        attribute: Attribute,
        relation: Relation,
        constant: f64,
    ) -> TetherResult<()> {
        self.ensure_pending()?;
        self.attribute = Some(attribute);
        self.relation = relation;
        self.constant = constant;
        self.state = IntentState::Dimensional;
        Ok(())
    }

    /// Configure a relationship between the target and another view.
    pub(crate) fn set_relation(
        &mut self,
        attribute: Attribute,
        related: Related<V>,
        relation: Relation,
        constant: f64,
    ) -> TetherResult<()> {
        self.ensure_pending()?;
        self.attribute = Some(attribute);
        self.related = Some(related);
        self.relation = relation;
        self.constant = constant;
        self.state = IntentState::Relational;
        Ok(())
    }

    /// Materialize into a spec the host can turn into a constraint.
    pub(crate) fn to_spec(&self) -> TetherResult<ConstraintSpec<V>> {
        let Some(attribute) = self.attribute else {
            return Err(TetherError::constraint(
                "selection was never configured; set a dimension or relation before applying",
            ));
        };
        Ok(ConstraintSpec {
            target: self.target,
            attribute,
            relation: self.relation,
            related: self.related,
            multiplier: 1.0,
            constant: self.constant,
        })
    }

    fn ensure_pending(&self) -> TetherResult<()> {
        if self.state != IntentState::Pending {
            return Err(TetherError::chain("selection is already configured"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/constraint/intent.rs"]
mod tests;

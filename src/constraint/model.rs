#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
/// An edge, dimension, or center line of a view.
pub enum Attribute {
    /// Leading edge (left in left-to-right layouts).
    Leading,
    /// Trailing edge.
    Trailing,
    /// Top edge.
    Top,
    /// Bottom edge.
    Bottom,
    /// Vertical center line (the X position of the view's center).
    CenterX,
    /// Horizontal center line (the Y position of the view's center).
    CenterY,
    /// Width dimension.
    Width,
    /// Height dimension.
    Height,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// How the two sides of a constraint relate.
pub enum Relation {
    /// Left side equals right side.
    #[default]
    Equal,
    /// Left side is at most the right side.
    LessOrEqual,
    /// Left side is at least the right side.
    GreaterOrEqual,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// The second item of a two-view constraint.
pub struct Related<V> {
    /// The related view.
    pub view: V,
    /// The related view's attribute.
    pub attribute: Attribute,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A fully specified constraint, ready for a host to materialize.
///
/// Reads as `target.attribute <relation> related.attribute * multiplier +
/// constant`, with the right-hand item absent for dimension constraints
/// against a bare constant. Chains always emit a multiplier of `1.0`; the
/// field exists so hosts receive the full constructor shape their toolkit
/// expects.
pub struct ConstraintSpec<V> {
    /// The view the constraint is about.
    pub target: V,
    /// The constrained attribute of `target`.
    pub attribute: Attribute,
    /// Relation between the two sides.
    pub relation: Relation,
    /// Optional second item; `None` for constant dimension constraints.
    pub related: Option<Related<V>>,
    /// Scale applied to the related attribute.
    pub multiplier: f64,
    /// Constant offset added to the right-hand side.
    pub constant: f64,
}

#[cfg(test)]
#[path = "../../tests/unit/constraint/model.rs"]
mod tests;

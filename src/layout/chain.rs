use crate::{
    constraint::intent::Intent,
    constraint::model::{Attribute, Related, Relation},
    foundation::error::{TetherError, TetherResult},
    host::backend::ConstraintHost,
};

/// Fluent, caller-owned chain of pending constraints over a mutably borrowed
/// host.
///
/// A chain is one scope of work: select a view with [`locate`](Self::locate),
/// configure the selection exactly once, repeat for further views (or the
/// same view via [`and`](Self::and)), then materialize and activate the whole
/// batch with [`apply`](Self::apply). Every method consumes the chain and
/// hands it back, so call-order misuse short-circuits with `?` instead of
/// producing a malformed constraint.
///
/// ```
/// use tether::{LayoutChain, ViewTree};
///
/// # fn main() -> tether::TetherResult<()> {
/// let mut tree = ViewTree::new();
/// let root = tree.add_root();
/// let card = tree.add_child(root)?;
///
/// let batch = LayoutChain::new(&mut tree)
///     .locate(card)?
///     .width(320.0)?
///     .and()?
///     .aligned_top(root, 24.0)?
///     .apply()?;
/// assert_eq!(batch.len(), 2);
/// # Ok(())
/// # }
/// ```
pub struct LayoutChain<'host, H: ConstraintHost> {
    host: &'host mut H,
    intents: Vec<Intent<H::View>>,
}

impl<'host, H: ConstraintHost> LayoutChain<'host, H> {
    /// Start an empty chain borrowing `host` for its whole lifetime.
    pub fn new(host: &'host mut H) -> Self {
        Self {
            host,
            intents: Vec::new(),
        }
    }

    /// Select `view` as the target of a fresh intent.
    ///
    /// Switches off the host's automatic constraint translation for `view`,
    /// toggling only when it is currently on. Errors if the previous
    /// selection was never configured.
    pub fn locate(mut self, view: H::View) -> TetherResult<Self> {
        if let Some(last) = self.intents.last()
            && !last.is_specified()
        {
            return Err(TetherError::chain(
                "previous selection is not configured; finish it before selecting another view",
            ));
        }
        if self.host.translates_autoresizing(view) {
            self.host.set_translates_autoresizing(view, false);
        }
        self.intents.push(Intent::new(view));
        Ok(self)
    }

    /// Start an additional intent for the current selection's own view.
    pub fn and(self) -> TetherResult<Self> {
        let view = self.current_target()?;
        self.locate(view)
    }

    /// Pin the selection's width to `width`.
    pub fn width(mut self, width: f64) -> TetherResult<Self> {
        self.current()?
            .set_dimension(Attribute::Width, Relation::Equal, width)?;
        Ok(self)
    }

    /// Pin the selection's height to `height`.
    pub fn height(mut self, height: f64) -> TetherResult<Self> {
        self.current()?
            .set_dimension(Attribute::Height, Relation::Equal, height)?;
        Ok(self)
    }

    /// Keep the selection's width at or above `width`.
    pub fn min_width(mut self, width: f64) -> TetherResult<Self> {
        self.current()?
            .set_dimension(Attribute::Width, Relation::GreaterOrEqual, width)?;
        Ok(self)
    }

    /// Keep the selection's width at or below `width`.
    pub fn max_width(mut self, width: f64) -> TetherResult<Self> {
        self.current()?
            .set_dimension(Attribute::Width, Relation::LessOrEqual, width)?;
        Ok(self)
    }

    /// Keep the selection's height at or above `height`.
    pub fn min_height(mut self, height: f64) -> TetherResult<Self> {
        self.current()?
            .set_dimension(Attribute::Height, Relation::GreaterOrEqual, height)?;
        Ok(self)
    }

    /// Keep the selection's height at or below `height`.
    pub fn max_height(mut self, height: f64) -> TetherResult<Self> {
        self.current()?
            .set_dimension(Attribute::Height, Relation::LessOrEqual, height)?;
        Ok(self)
    }

    /// Match the selection's width to `view`'s width.
    pub fn same_width(self, view: H::View) -> TetherResult<Self> {
        self.relate(Attribute::Width, view, Attribute::Width, 0.0)
    }

    /// Match the selection's height to `view`'s height.
    pub fn same_height(self, view: H::View) -> TetherResult<Self> {
        self.relate(Attribute::Height, view, Attribute::Height, 0.0)
    }

    /// Place the selection to the left of `view`: its trailing edge meets
    /// `view`'s leading edge plus `spacing`.
    pub fn on_left_side(self, view: H::View, spacing: f64) -> TetherResult<Self> {
        self.relate(Attribute::Trailing, view, Attribute::Leading, spacing)
    }

    /// Place the selection to the right of `view`: its leading edge meets
    /// `view`'s trailing edge plus `spacing`.
    pub fn on_right_side(self, view: H::View, spacing: f64) -> TetherResult<Self> {
        self.relate(Attribute::Leading, view, Attribute::Trailing, spacing)
    }

    /// Place the selection above `view`: its bottom edge meets `view`'s top
    /// edge plus `spacing`.
    pub fn above(self, view: H::View, spacing: f64) -> TetherResult<Self> {
        self.relate(Attribute::Bottom, view, Attribute::Top, spacing)
    }

    /// Place the selection below `view`: its top edge meets `view`'s bottom
    /// edge plus `spacing`.
    pub fn below(self, view: H::View, spacing: f64) -> TetherResult<Self> {
        self.relate(Attribute::Top, view, Attribute::Bottom, spacing)
    }

    /// Align the selection's vertical center line with `view`'s, offset by
    /// `spacing`.
    pub fn on_vertical_center(self, view: H::View, spacing: f64) -> TetherResult<Self> {
        self.relate(Attribute::CenterX, view, Attribute::CenterX, spacing)
    }

    /// Align the selection's horizontal center line with `view`'s, offset by
    /// `spacing`.
    pub fn on_horizontal_center(self, view: H::View, spacing: f64) -> TetherResult<Self> {
        self.relate(Attribute::CenterY, view, Attribute::CenterY, spacing)
    }

    /// Align the selection's leading edge with `view`'s, offset by `spacing`.
    pub fn aligned_left(self, view: H::View, spacing: f64) -> TetherResult<Self> {
        self.relate(Attribute::Leading, view, Attribute::Leading, spacing)
    }

    /// Align the selection's trailing edge with `view`'s, offset by `spacing`.
    pub fn aligned_right(self, view: H::View, spacing: f64) -> TetherResult<Self> {
        self.relate(Attribute::Trailing, view, Attribute::Trailing, spacing)
    }

    /// Align the selection's top edge with `view`'s, offset by `spacing`.
    pub fn aligned_top(self, view: H::View, spacing: f64) -> TetherResult<Self> {
        self.relate(Attribute::Top, view, Attribute::Top, spacing)
    }

    /// Align the selection's bottom edge with `view`'s, offset by `spacing`.
    pub fn aligned_bottom(self, view: H::View, spacing: f64) -> TetherResult<Self> {
        self.relate(Attribute::Bottom, view, Attribute::Bottom, spacing)
    }

    /// Pin both dimensions of the selection at once.
    pub fn size(self, size: kurbo::Size) -> TetherResult<Self> {
        let view = self.current_target()?;
        self.width(size.width)?.locate(view)?.height(size.height)
    }

    /// Center the selection on `view` on both axes, offset by `spacing`.
    pub fn on_center(self, view: H::View, spacing: f64) -> TetherResult<Self> {
        let target = self.current_target()?;
        self.on_vertical_center(view, spacing)?
            .locate(target)?
            .on_horizontal_center(view, spacing)
    }

    /// Pin all four edges of the selection to its parent with zero insets.
    ///
    /// The parent is whatever the host reports for the selection's view;
    /// errors if the host reports none.
    #[tracing::instrument(skip(self))]
    pub fn fit_parent(self) -> TetherResult<Self> {
        let view = self.current_target()?;
        let Some(parent) = self.host.parent_of(view) else {
            return Err(TetherError::hierarchy(format!(
                "view {view:?} has no parent to fit"
            )));
        };
        self.aligned_top(parent, 0.0)?
            .locate(view)?
            .aligned_left(parent, 0.0)?
            .locate(view)?
            .aligned_right(parent, 0.0)?
            .locate(view)?
            .aligned_bottom(parent, 0.0)
    }

    /// Materialize every intent, activate the whole batch on the host, and
    /// return it.
    ///
    /// Consumes the chain. Errors if any intent was never configured; the
    /// first conversion or host failure aborts the apply with that error, and
    /// nothing from the batch is activated.
    #[tracing::instrument(skip(self))]
    pub fn apply(mut self) -> TetherResult<Vec<H::Constraint>> {
        let mut constraints = Vec::with_capacity(self.intents.len());
        for intent in &self.intents {
            let spec = intent.to_spec()?;
            constraints.push(self.host.constraint(&spec)?);
        }
        self.host.activate(&constraints)?;
        tracing::debug!(count = constraints.len(), "activated constraint batch");
        Ok(constraints)
    }

    fn relate(
        mut self,
        attribute: Attribute,
        view: H::View,
        related_attribute: Attribute,
        spacing: f64,
    ) -> TetherResult<Self> {
        self.current()?.set_relation(
            attribute,
            Related {
                view,
                attribute: related_attribute,
            },
            Relation::Equal,
            spacing,
        )?;
        Ok(self)
    }

    fn current(&mut self) -> TetherResult<&mut Intent<H::View>> {
        self.intents
            .last_mut()
            .ok_or_else(|| TetherError::chain("no view selected; call locate first"))
    }

    fn current_target(&self) -> TetherResult<H::View> {
        self.intents
            .last()
            .map(Intent::target)
            .ok_or_else(|| TetherError::chain("no view selected; call locate first"))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/chain.rs"]
mod tests;

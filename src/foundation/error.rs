/// Convenience result type used across Tether.
pub type TetherResult<T> = Result<T, TetherError>;

/// Top-level error taxonomy used by chain and host APIs.
#[derive(thiserror::Error, Debug)]
pub enum TetherError {
    /// Call-order misuse of the fluent chain.
    #[error("chain error: {0}")]
    Chain(String),

    /// An intent could not be materialized into a constraint.
    #[error("constraint error: {0}")]
    Constraint(String),

    /// View-hierarchy lookups that came up empty or inconsistent.
    #[error("hierarchy error: {0}")]
    Hierarchy(String),

    /// Wrapped lower-level error from host adapters.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TetherError {
    /// Build a [`TetherError::Chain`] value.
    pub fn chain(msg: impl Into<String>) -> Self {
        Self::Chain(msg.into())
    }

    /// Build a [`TetherError::Constraint`] value.
    pub fn constraint(msg: impl Into<String>) -> Self {
        Self::Constraint(msg.into())
    }

    /// Build a [`TetherError::Hierarchy`] value.
    pub fn hierarchy(msg: impl Into<String>) -> Self {
        Self::Hierarchy(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

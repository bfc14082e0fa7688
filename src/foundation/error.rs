/// Convenience result type used across ikona.
pub type IkonaResult<T> = Result<T, IkonaError>;

/// Top-level error taxonomy used by the icon pipeline.
///
/// Almost everything the pipeline can hit (missing markup, unparseable
/// markup, malformed path commands) is recovered internally with a visible
/// fallback; the variants here are the conditions that remain observable to
/// callers of the lower-level component functions, plus the one failure the
/// orchestrator itself propagates ([`IkonaError::Allocation`]).
#[derive(thiserror::Error, Debug)]
pub enum IkonaError {
    /// Markup text could not be turned into a usable icon document.
    #[error("markup error: {0}")]
    Markup(String),

    /// A pixel buffer of the requested size could not be created.
    #[error("allocation error: {0}")]
    Allocation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl IkonaError {
    /// Build an [`IkonaError::Markup`] value.
    pub fn markup(msg: impl Into<String>) -> Self {
        Self::Markup(msg.into())
    }

    /// Build an [`IkonaError::Allocation`] value.
    pub fn allocation(msg: impl Into<String>) -> Self {
        Self::Allocation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

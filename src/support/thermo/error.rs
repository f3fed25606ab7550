use thiserror::Error;

/// Errors that may occur when evaluating mixture properties through the unit-aware facade.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// The input state is outside the model's valid domain.
    ///
    /// For example, a non-positive temperature or density.
    #[error("out of domain: {context}")]
    OutOfDomain { context: String },

    /// The provided state is invalid or inconsistent with the model.
    ///
    /// For example, a composition whose length does not match the mixture's species count.
    #[error("invalid state: {context}")]
    InvalidState { context: String },

    /// The calculation failed due to a numerical or internal error.
    ///
    /// For example, a temperature inversion that does not converge.
    #[error("calculation error: {context}")]
    Calculation { context: String },
}

impl PropertyError {
    pub(crate) fn out_of_domain(context: impl Into<String>) -> Self {
        Self::OutOfDomain {
            context: context.into(),
        }
    }

    pub(crate) fn invalid_state(context: impl Into<String>) -> Self {
        Self::InvalidState {
            context: context.into(),
        }
    }

    pub(crate) fn calculation(context: impl Into<String>) -> Self {
        Self::Calculation {
            context: context.into(),
        }
    }
}

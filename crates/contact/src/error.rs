use crate::FieldErrors;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Render(#[from] askama::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Why a form submission did not reach `success`.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("form has {} invalid field(s)", .0.len())]
    Invalid(FieldErrors),

    #[error("a submission is already in flight")]
    InFlight,

    #[error("the form was already sent")]
    AlreadySent,

    #[error("relay answered {status}: {error}")]
    Rejected { status: u16, error: String },

    #[error("network error: {0}")]
    Network(String),
}

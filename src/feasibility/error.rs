use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeasibilityError {
    #[error("missing input: {0}")]
    MissingInput(&'static str),
    #[error("{field} too short for a YYYY-MM-DD date: {value:?}")]
    DateTooShort { field: &'static str, value: String },
    #[error("invalid {field} date: {value:?}")]
    InvalidDate { field: &'static str, value: String },
    #[error("empty window: {start} to {end}")]
    EmptyWindow { start: String, end: String },
}

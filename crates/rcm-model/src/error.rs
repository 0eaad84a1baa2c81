use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("required field `{0}` is missing or blank")]
    MissingField(&'static str),
    #[error("unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;

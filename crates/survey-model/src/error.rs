use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unknown {kind} label: {value}")]
    UnknownLabel { kind: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;

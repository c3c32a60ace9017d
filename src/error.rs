use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetError {
    #[error("invalid capacity {capacity}: must be positive")]
    InvalidArgument { capacity: usize },
}

pub type Result<T> = std::result::Result<T, SetError>;

pub type SegueResult<T> = Result<T, SegueError>;

#[derive(thiserror::Error, Debug)]
pub enum SegueError {
    #[error("precondition error: {0}")]
    Precondition(String),

    #[error("geometry error: {0}")]
    Geometry(String),

    #[error("contract violation: {0}")]
    Contract(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SegueError {
    pub fn precondition(msg: impl Into<String>) -> Self {
        Self::Precondition(msg.into())
    }

    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    pub fn contract(msg: impl Into<String>) -> Self {
        Self::Contract(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

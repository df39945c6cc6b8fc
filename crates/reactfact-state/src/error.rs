use thiserror::Error;

#[derive(Debug, Error)]
pub enum StateError {
    #[error("no user is signed in")]
    NotSignedIn,

    #[error("username must not be empty")]
    EmptyUsername,

    #[error("user id must not be empty")]
    EmptyUserId,

    #[error("a reaction needs text or a GIF")]
    EmptyReaction,

    #[error("a comment needs text or a GIF")]
    EmptyComment,

    #[error("fact not found: {0}")]
    FactNotFound(String),

    #[error("reaction not found: {0}")]
    ReactionNotFound(String),

    #[error("comment not found: {0}")]
    CommentNotFound(String),

    #[error("state lock poisoned")]
    LockPoisoned,

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, StateError>;

impl<T> From<std::sync::PoisonError<T>> for StateError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        StateError::LockPoisoned
    }
}

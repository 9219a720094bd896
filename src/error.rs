use std::fmt;

use crate::core::{PostId, UserId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    NotFound(String),
    AlreadyExists(String),
    Configuration(String),
}

impl AppError {
    pub fn user_not_found(user_id: UserId) -> Self {
        AppError::NotFound(format!("user {}", user_id))
    }

    pub fn post_not_found(post_id: PostId) -> Self {
        AppError::NotFound(format!("post {}", post_id))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::AlreadyExists(msg) => write!(f, "Already exists: {}", msg),
            AppError::Configuration(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

pub type AppResult<T> = Result<T, AppError>;

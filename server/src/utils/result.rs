//! Result alias for API handlers

use crate::utils::AppError;

pub type AppResult<T> = Result<T, AppError>;

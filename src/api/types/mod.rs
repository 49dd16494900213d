mod error;

pub use error::{ApiError, ApiErrorDetail, ApiErrorResponse, ApiErrorType};

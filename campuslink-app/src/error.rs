/// Application-level error type
///
/// Controllers return `AppResult<T>`. Three classes of failure:
///
/// - `Api`: the request was issued and failed (transport or non-2xx) - the
///   section that issued it stores `user_message()` and offers manual retry.
/// - `Validation`: caught client-side before any network call, attributed
///   to the offending input field.
/// - `Busy`: the row already has an action in flight; no request is issued.

use uuid::Uuid;

use campuslink_client::ApiError;

/// Application result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Application-level error
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// An issued API call failed
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Client-side validation failed; no request was issued
    #[error("{field}: {message}")]
    Validation {
        /// The offending input field
        field: String,
        /// Inline message shown near the input
        message: String,
    },

    /// An action for this entity is already in flight; no request was issued
    #[error("an action is already in flight for {id}")]
    Busy {
        /// Entity whose row is busy
        id: Uuid,
    },
}

impl AppError {
    /// Builds a validation error for a field
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        AppError::Validation {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// Maps the first failure of a `validator` run to a field error
    pub fn from_validation_errors(errors: validator::ValidationErrors) -> Self {
        let (field, message) = errors
            .field_errors()
            .iter()
            .next()
            .map(|(field, errs)| {
                let message = errs
                    .first()
                    .and_then(|e| e.message.as_ref())
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "Validation failed".to_string());
                (field.to_string(), message)
            })
            .unwrap_or_else(|| ("input".to_string(), "Validation failed".to_string()));

        AppError::Validation { field, message }
    }

    /// The message a section or inline slot should surface
    pub fn user_message(&self) -> String {
        match self {
            AppError::Api(err) => err.user_message(),
            AppError::Validation { message, .. } => message.clone(),
            AppError::Busy { .. } => "Please wait for the current action to finish".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Form {
        #[validate(length(min = 1, message = "Name is required"))]
        name: String,
    }

    #[test]
    fn test_validation_error_carries_field_message() {
        let errors = Form {
            name: String::new(),
        }
        .validate()
        .unwrap_err();

        let err = AppError::from_validation_errors(errors);
        match &err {
            AppError::Validation { field, message } => {
                assert_eq!(field, "name");
                assert_eq!(message, "Name is required");
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_api_error_message_passthrough() {
        let err = AppError::from(ApiError::from_status(409, br#"{"message":"Team is full"}"#));
        assert_eq!(err.user_message(), "Team is full");
    }
}

// ABOUTME: Unified error handling with standard error codes for the meal planning engine
// ABOUTME: Defines AppError, ErrorCode, retry classification, and serializable error responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sofra Contributors

//! # Unified Error Handling System
//!
//! Every fallible operation in the engine returns [`AppResult`]. Errors carry an
//! [`ErrorCode`] that places them in the engine's taxonomy:
//!
//! | Taxonomy                   | Codes                                                   |
//! |----------------------------|---------------------------------------------------------|
//! | Configuration              | `CONFIG_ERROR`, `CONFIG_MISSING`, `CONFIG_INVALID`      |
//! | Transport                  | `EXTERNAL_SERVICE_*`, `EXTERNAL_RATE_LIMITED`           |
//! | Parse                      | `AI_RESPONSE_UNPARSEABLE`                               |
//! | Structural validation      | `AI_RESPONSE_INVALID`                                   |
//! | Domain                     | `NO_ELIGIBLE_RECIPES`                                   |
//! | Persistence                | `STORAGE_ERROR`                                         |
//!
//! Transport, parse and structural errors are retryable inside the AI generator;
//! every other code is surfaced to the caller unchanged.

use std::error::Error as StdError;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes used throughout the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Authorization (1000-1999)
    /// Caller is not allowed to perform the operation
    #[serde(rename = "PERMISSION_DENIED")]
    PermissionDenied = 1004,

    // Validation (3000-3999)
    /// Input failed validation
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// A required field is absent
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,
    /// Input is outside its accepted range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // Resource Management (4000-4999)
    /// Referenced entity does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,
    /// No recipe survived filtering for a required meal slot
    #[serde(rename = "NO_ELIGIBLE_RECIPES")]
    NoEligibleRecipes = 4010,

    // External Services (5000-5999)
    /// The text-completion service returned an error status
    #[serde(rename = "EXTERNAL_SERVICE_ERROR")]
    ExternalServiceError = 5000,
    /// The text-completion service could not be reached or timed out
    #[serde(rename = "EXTERNAL_SERVICE_UNAVAILABLE")]
    ExternalServiceUnavailable = 5001,
    /// The text-completion service rejected our credentials
    #[serde(rename = "EXTERNAL_AUTH_FAILED")]
    ExternalAuthFailed = 5002,
    /// The text-completion service throttled the request
    #[serde(rename = "EXTERNAL_RATE_LIMITED")]
    ExternalRateLimited = 5003,
    /// The service answered but the text was not parseable JSON
    #[serde(rename = "AI_RESPONSE_UNPARSEABLE")]
    AiResponseUnparseable = 5100,
    /// The parsed answer did not have the expected plan structure
    #[serde(rename = "AI_RESPONSE_INVALID")]
    AiResponseInvalid = 5101,

    // Configuration (6000-6999)
    /// Generic configuration problem
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 6000,
    /// Required configuration is absent
    #[serde(rename = "CONFIG_MISSING")]
    ConfigMissing = 6001,
    /// Configuration value is present but unusable
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Data store write or read failed
    #[serde(rename = "STORAGE_ERROR")]
    StorageError = 9002,
    /// Data could not be serialized or deserialized
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            Self::InvalidInput | Self::MissingRequiredField | Self::ValueOutOfRange => 400,
            Self::PermissionDenied => 403,
            Self::ResourceNotFound => 404,
            Self::NoEligibleRecipes => 422,
            Self::ExternalServiceError
            | Self::ExternalServiceUnavailable
            | Self::AiResponseUnparseable
            | Self::AiResponseInvalid => 502,
            Self::ExternalAuthFailed | Self::ExternalRateLimited => 503,
            Self::InternalError
            | Self::StorageError
            | Self::SerializationError
            | Self::ConfigError
            | Self::ConfigMissing
            | Self::ConfigInvalid => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::PermissionDenied => "You do not have permission to perform this action",
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::NoEligibleRecipes => "No recipes satisfy the requested meal plan constraints",
            Self::ExternalServiceError => "The AI service encountered an error",
            Self::ExternalServiceUnavailable => "The AI service is currently unavailable",
            Self::ExternalAuthFailed => "Authentication with the AI service failed",
            Self::ExternalRateLimited => "The AI service rate limit was exceeded",
            Self::AiResponseUnparseable => "The AI service returned a response that is not JSON",
            Self::AiResponseInvalid => "The AI service returned a malformed meal plan",
            Self::ConfigError => "Configuration error encountered",
            Self::ConfigMissing => "Required configuration is missing",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::StorageError => "Storage operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }

    /// Whether a failed AI attempt with this code may be retried
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ExternalServiceError
                | Self::ExternalServiceUnavailable
                | Self::ExternalAuthFailed
                | Self::ExternalRateLimited
                | Self::AiResponseUnparseable
                | Self::AiResponseInvalid
        )
    }
}

/// Unified error type for the engine
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Whether this error is retryable by the AI generator
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        self.code.is_retryable()
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Resource not found
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Permission denied
    #[must_use]
    pub fn permission_denied(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::PermissionDenied, message)
    }

    /// Configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// External service error (non-success status from the AI service)
    #[must_use]
    pub fn external_service(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceError,
            format!("{}: {}", service.into(), message.into()),
        )
    }

    /// The AI service could not be reached (network error or timeout)
    #[must_use]
    pub fn transport(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceUnavailable,
            format!("{}: {}", service.into(), message.into()),
        )
    }

    /// The AI service refused the request because of quota or rate limits
    #[must_use]
    pub fn rate_limited(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalRateLimited,
            format!("{}: {}", service.into(), message.into()),
        )
    }

    /// The AI response text could not be parsed
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::AiResponseUnparseable, message)
    }

    /// The AI response parsed but failed structural validation
    #[must_use]
    pub fn invalid_structure(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::AiResponseInvalid, message)
    }

    /// No eligible recipes for a meal slot
    #[must_use]
    pub fn no_eligible_recipes(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NoEligibleRecipes, message)
    }

    /// Storage error
    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Serializable error body for API layers
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error details
    pub error: ErrorResponseDetails,
}

/// Error details carried in an [`ErrorResponse`]
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Machine-readable code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Whether the operation may succeed if retried
    pub retryable: bool,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                retryable: error.code.is_retryable(),
                message: error.message,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_http_status() {
        assert_eq!(ErrorCode::InvalidInput.http_status(), 400);
        assert_eq!(ErrorCode::PermissionDenied.http_status(), 403);
        assert_eq!(ErrorCode::ResourceNotFound.http_status(), 404);
        assert_eq!(ErrorCode::NoEligibleRecipes.http_status(), 422);
        assert_eq!(ErrorCode::AiResponseInvalid.http_status(), 502);
        assert_eq!(ErrorCode::StorageError.http_status(), 500);
    }

    #[test]
    fn test_retryable_classification() {
        assert!(AppError::transport("gemini", "timeout").is_retryable());
        assert!(AppError::external_service("gemini", "500").is_retryable());
        assert!(AppError::parse("not json").is_retryable());
        assert!(AppError::invalid_structure("6 days").is_retryable());

        assert!(!AppError::no_eligible_recipes("breakfast").is_retryable());
        assert!(!AppError::storage("disk full").is_retryable());
        assert!(!AppError::config("missing key").is_retryable());
        assert!(!AppError::invalid_input("weight").is_retryable());
    }

    #[test]
    fn test_display_includes_description_and_message() {
        let error = AppError::not_found("Profile 42");
        assert_eq!(
            error.to_string(),
            "The requested resource was not found: Profile 42 not found"
        );
    }

    #[test]
    fn test_error_response_serialization() {
        let response = ErrorResponse::from(AppError::parse("unexpected token"));
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("AI_RESPONSE_UNPARSEABLE"));
        assert!(json.contains("\"retryable\":true"));
    }
}

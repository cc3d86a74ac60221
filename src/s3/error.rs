// MinIO Rust Library for Amazon S3 Compatible Cloud Storage
// Copyright 2025 MinIO, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error definitions for S3 request building

use thiserror::Error;

/// Errors raised while validating request parameters.
///
/// Every variant is an invalid-input error: the caller supplied a value the
/// request cannot be built from. None of them are retryable.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ValidationErr {
    #[error("{field} is required")]
    MissingRequiredField { field: &'static str },

    #[error("invalid value '{value}' for field {field}; not a valid {class}")]
    InvalidEnumValue {
        field: &'static str,
        class: &'static str,
        value: String,
    },

    #[error("invalid timestamp '{value}' for field {field}: {reason}")]
    InvalidTimestamp {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("invalid type for field {field}; expected {expected}")]
    InvalidParamType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("invalid parameters: {0}")]
    InvalidParams(String),
}

impl ValidationErr {
    /// Returns true for errors caused by caller input. This holds for every
    /// variant; it exists so callers can branch on the error kind without
    /// matching individual variants.
    pub fn is_invalid_input(&self) -> bool {
        true
    }

    /// Name of the parameter the error refers to, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ValidationErr::MissingRequiredField { field }
            | ValidationErr::InvalidEnumValue { field, .. }
            | ValidationErr::InvalidTimestamp { field, .. }
            | ValidationErr::InvalidParamType { field, .. } => Some(*field),
            ValidationErr::InvalidParams(_) => None,
        }
    }
}

/// Top level error of this crate
#[derive(Debug, Error)]
pub enum Error {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationErr),

    #[error("http request build error: {0}")]
    Http(#[from] http::Error),
}

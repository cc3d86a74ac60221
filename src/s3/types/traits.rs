// MinIO Rust Library for Amazon S3 Compatible Cloud Storage
// Copyright 2022 MinIO, Inc.
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

//! Core traits for S3 request handling.

use super::s3_request::S3Request;
use crate::s3::error::ValidationErr;

/// Trait for converting a request builder into a concrete S3 HTTP request.
///
/// Implemented by request builders. The resulting [`S3Request`] is a plain
/// description of the HTTP request; sending, signing and retrying it is the
/// job of the transport that receives it.
pub trait ToS3Request: Sized {
    /// Consumes this request builder and returns a [`S3Request`].
    ///
    /// The transformation includes:
    ///
    /// * Setting the HTTP method
    /// * Building the request path and query parameters
    /// * Adding headers derived from the builder fields
    /// * Attaching the request body, if applicable
    ///
    /// # Returns
    ///
    /// * `Result<S3Request, ValidationErr>` - The request on success, or an
    ///   error if the builder holds invalid or incomplete input.
    fn to_s3request(self) -> Result<S3Request, ValidationErr>;
}

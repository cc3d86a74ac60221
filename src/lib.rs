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

//! # HeadObject request builder
//!
//! This crate maps the parameters of the S3 `HeadObject` operation (retrieve
//! object metadata) onto a wire-level HTTP request description.
//!
//! [`s3::builders::HeadObject`] collects the parameters with a fluent builder
//! pattern, either field by field or from a named-parameter mapping
//! ([`s3::builders::HeadObjectParams`], or a JSON object). It implements
//! [`s3::types::ToS3Request`], whose `to_s3request` validates the input and
//! returns an [`s3::types::S3Request`]: method, path, query parameters,
//! headers and an empty body.
//!
//! Sending the request (connections, signing, retries, response parsing) is
//! left to the transport the [`s3::types::S3Request`] is handed to;
//! [`s3::types::S3Request::to_http_request`] renders it as an
//! [`http::Request`] for that purpose.
//!
//! ## Basic Usage
//!
//! ```
//! use minio_head_object::s3::builders::{HeadObject, HeadObjectParams};
//! use minio_head_object::s3::types::ToS3Request;
//!
//! let params = HeadObjectParams::new()
//!     .with("Bucket", "my-bucket")
//!     .with("Key", "a/b/c.txt")
//!     .with("VersionId", "v1")
//!     .with("PartNumber", 3);
//!
//! let req = HeadObject::from_params(params)
//!     .and_then(HeadObject::to_s3request)
//!     .expect("valid request");
//!
//! assert_eq!(req.method(), http::Method::HEAD);
//! assert_eq!(req.path(), "/my-bucket/a/b/c.txt");
//! assert_eq!(req.path_and_query(), "/my-bucket/a/b/c.txt?partNumber=3&versionId=v1");
//! assert_eq!(req.header("content-type"), Some("application/xml"));
//! ```

pub mod s3;

#[cfg(test)]
#[macro_use]
extern crate quickcheck;

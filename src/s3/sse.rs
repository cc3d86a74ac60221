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

//! Server side encryption with customer provided keys (SSE-C)

use crate::s3::utils::{b64encode, md5sum_hash};

/// The only algorithm S3 accepts for customer provided keys.
pub const SSE_CUSTOMER_ALGORITHM_AES256: &str = "AES256";

#[derive(Clone, Debug, PartialEq, Eq)]
/// Server side encryption customer key type
pub struct SseCustomerKey {
    algorithm: String,
    key: String,
    key_md5: String,
}

impl SseCustomerKey {
    /// Derives the algorithm, base64 key and base64 key MD5 from a raw key.
    pub fn new(key: &str) -> Self {
        Self {
            algorithm: SSE_CUSTOMER_ALGORITHM_AES256.to_string(),
            key: b64encode(key),
            key_md5: md5sum_hash(key.as_bytes()),
        }
    }

    /// Uses already encoded values as they are.
    pub fn from_parts(
        algorithm: impl Into<String>,
        key: impl Into<String>,
        key_md5: impl Into<String>,
    ) -> Self {
        Self {
            algorithm: algorithm.into(),
            key: key.into(),
            key_md5: key_md5.into(),
        }
    }

    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    /// Base64 encoded key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Base64 encoded MD5 digest of the key
    pub fn key_md5(&self) -> &str {
        &self.key_md5
    }
}

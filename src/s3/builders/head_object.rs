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

use crate::s3::builders::params::{self, HeadObjectParams};
use crate::s3::error::ValidationErr;
use crate::s3::header_constants::*;
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::sse::SseCustomerKey;
use crate::s3::types::{RequestPayer, S3Request, ToS3Request};
use crate::s3::utils::{UtcTime, to_http_header_value};
use http::Method;

/// Argument builder for the [`HeadObject`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_HeadObject.html) S3 API operation.
///
/// Retrieves object metadata without the object body. Every field is
/// optional while building; `bucket` and `key` are checked when the request
/// is produced by [`ToS3Request::to_s3request`].
///
/// ```
/// use minio_head_object::s3::builders::HeadObject;
/// use minio_head_object::s3::types::ToS3Request;
///
/// let req = HeadObject::new("my-bucket", "photos/2024/cat.jpg")
///     .version_id("v1")
///     .to_s3request()
///     .unwrap();
/// assert_eq!(req.path(), "/my-bucket/photos/2024/cat.jpg");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HeadObject {
    extra_headers: Option<Multimap>,
    extra_query_params: Option<Multimap>,

    bucket: Option<String>,
    key: Option<String>,
    version_id: Option<String>,
    part_number: Option<u32>,

    // Conditionals
    if_match: Option<String>,
    if_none_match: Option<String>,
    if_modified_since: Option<UtcTime>,
    if_unmodified_since: Option<UtcTime>,

    /// Forwarded as-is; the service ignores it for HEAD requests.
    range: Option<String>,

    sse_customer_algorithm: Option<String>,
    sse_customer_key: Option<String>,
    sse_customer_key_md5: Option<String>,

    /// Validated against [`RequestPayer`] when the request is built.
    request_payer: Option<String>,
    expected_bucket_owner: Option<String>,
}

type FieldValue = fn(&HeadObject) -> Option<String>;

/// Header name for each header-carried field, in emission order.
const HEADER_FIELDS: &[(&str, FieldValue)] = &[
    (IF_MATCH, |r| r.if_match.clone()),
    (IF_MODIFIED_SINCE, |r| r.if_modified_since.map(to_http_header_value)),
    (IF_NONE_MATCH, |r| r.if_none_match.clone()),
    (IF_UNMODIFIED_SINCE, |r| r.if_unmodified_since.map(to_http_header_value)),
    (RANGE, |r| r.range.clone()),
    (X_AMZ_SERVER_SIDE_ENCRYPTION_CUSTOMER_ALGORITHM, |r| {
        r.sse_customer_algorithm.clone()
    }),
    (X_AMZ_SERVER_SIDE_ENCRYPTION_CUSTOMER_KEY, |r| {
        r.sse_customer_key.clone()
    }),
    (X_AMZ_SERVER_SIDE_ENCRYPTION_CUSTOMER_KEY_MD5, |r| {
        r.sse_customer_key_md5.clone()
    }),
    (X_AMZ_REQUEST_PAYER, |r| r.request_payer.clone()),
    (X_AMZ_EXPECTED_BUCKET_OWNER, |r| r.expected_bucket_owner.clone()),
];

/// Query parameter name for each query-carried field.
const QUERY_FIELDS: &[(&str, FieldValue)] = &[
    (VERSION_ID, |r| r.version_id.clone()),
    (PART_NUMBER, |r| r.part_number.map(|n| n.to_string())),
];

macro_rules! string_field {
    ($field:ident, $set:ident, $get:ident) => {
        pub fn $field(mut self, value: impl Into<String>) -> Self {
            self.$field = Some(value.into());
            self
        }

        pub fn $set(mut self, value: Option<String>) -> Self {
            self.$field = value;
            self
        }

        pub fn $get(&self) -> Option<&str> {
            self.$field.as_deref()
        }
    };
}

macro_rules! time_field {
    ($field:ident, $set:ident, $get:ident) => {
        pub fn $field(mut self, value: UtcTime) -> Self {
            self.$field = Some(value);
            self
        }

        pub fn $set(mut self, value: Option<UtcTime>) -> Self {
            self.$field = value;
            self
        }

        pub fn $get(&self) -> Option<UtcTime> {
            self.$field
        }
    };
}

// builder interface
impl HeadObject {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: Some(bucket.into()),
            key: Some(key.into()),
            ..Default::default()
        }
    }

    /// Builds from named parameters such as `Bucket`, `Key` or `IfModifiedSince`.
    ///
    /// Unknown names are ignored. Timestamps may be given parsed, as a date
    /// string or as seconds since the epoch; a value that cannot be turned
    /// into the field's type is an error.
    pub fn from_params(input: HeadObjectParams) -> Result<Self, ValidationErr> {
        let mut r = Self::default();
        for (name, value) in input {
            match name.as_str() {
                params::BUCKET => r.bucket = Some(value.into_string(params::BUCKET)?),
                params::KEY => r.key = Some(value.into_string(params::KEY)?),
                params::VERSION_ID => r.version_id = Some(value.into_string(params::VERSION_ID)?),
                params::PART_NUMBER => r.part_number = Some(value.into_u32(params::PART_NUMBER)?),
                params::IF_MATCH => r.if_match = Some(value.into_string(params::IF_MATCH)?),
                params::IF_NONE_MATCH => {
                    r.if_none_match = Some(value.into_string(params::IF_NONE_MATCH)?)
                }
                params::IF_MODIFIED_SINCE => {
                    r.if_modified_since = Some(value.into_timestamp(params::IF_MODIFIED_SINCE)?)
                }
                params::IF_UNMODIFIED_SINCE => {
                    r.if_unmodified_since =
                        Some(value.into_timestamp(params::IF_UNMODIFIED_SINCE)?)
                }
                params::RANGE => r.range = Some(value.into_string(params::RANGE)?),
                params::SSE_CUSTOMER_ALGORITHM => {
                    r.sse_customer_algorithm =
                        Some(value.into_string(params::SSE_CUSTOMER_ALGORITHM)?)
                }
                params::SSE_CUSTOMER_KEY => {
                    r.sse_customer_key = Some(value.into_string(params::SSE_CUSTOMER_KEY)?)
                }
                params::SSE_CUSTOMER_KEY_MD5 => {
                    r.sse_customer_key_md5 = Some(value.into_string(params::SSE_CUSTOMER_KEY_MD5)?)
                }
                params::REQUEST_PAYER => {
                    r.request_payer = Some(value.into_string(params::REQUEST_PAYER)?)
                }
                params::EXPECTED_BUCKET_OWNER => {
                    r.expected_bucket_owner =
                        Some(value.into_string(params::EXPECTED_BUCKET_OWNER)?)
                }
                _ => log::debug!("HeadObject: ignoring unknown parameter '{name}'"),
            }
        }
        Ok(r)
    }

    pub fn extra_headers(mut self, extra_headers: Option<Multimap>) -> Self {
        self.extra_headers = extra_headers;
        self
    }

    pub fn extra_query_params(mut self, extra_query_params: Option<Multimap>) -> Self {
        self.extra_query_params = extra_query_params;
        self
    }

    string_field!(bucket, set_bucket, get_bucket);
    string_field!(key, set_key, get_key);
    string_field!(version_id, set_version_id, get_version_id);
    string_field!(if_match, set_if_match, get_if_match);
    string_field!(if_none_match, set_if_none_match, get_if_none_match);
    string_field!(range, set_range, get_range);
    string_field!(
        sse_customer_algorithm,
        set_sse_customer_algorithm,
        get_sse_customer_algorithm
    );
    string_field!(sse_customer_key, set_sse_customer_key, get_sse_customer_key);
    string_field!(
        sse_customer_key_md5,
        set_sse_customer_key_md5,
        get_sse_customer_key_md5
    );
    string_field!(request_payer, set_request_payer, get_request_payer);
    string_field!(
        expected_bucket_owner,
        set_expected_bucket_owner,
        get_expected_bucket_owner
    );

    time_field!(if_modified_since, set_if_modified_since, get_if_modified_since);
    time_field!(
        if_unmodified_since,
        set_if_unmodified_since,
        get_if_unmodified_since
    );

    /// Part number, 1 to 10000, for objects uploaded in parts.
    pub fn part_number(mut self, part_number: u32) -> Self {
        self.part_number = Some(part_number);
        self
    }

    pub fn set_part_number(mut self, part_number: Option<u32>) -> Self {
        self.part_number = part_number;
        self
    }

    pub fn get_part_number(&self) -> Option<u32> {
        self.part_number
    }

    /// Sets all three SSE-C fields from `ssec`.
    pub fn ssec(self, ssec: &SseCustomerKey) -> Self {
        self.sse_customer_algorithm(ssec.algorithm())
            .sse_customer_key(ssec.key())
            .sse_customer_key_md5(ssec.key_md5())
    }
}

impl TryFrom<HeadObjectParams> for HeadObject {
    type Error = ValidationErr;

    fn try_from(input: HeadObjectParams) -> Result<Self, Self::Error> {
        Self::from_params(input)
    }
}

impl TryFrom<serde_json::Value> for HeadObject {
    type Error = ValidationErr;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        Self::from_params(HeadObjectParams::try_from(value)?)
    }
}

impl ToS3Request for HeadObject {
    fn to_s3request(mut self) -> Result<S3Request, ValidationErr> {
        if let Some(v) = &self.request_payer {
            RequestPayer::parse(v)?;
        }

        let mut headers: Multimap = self.extra_headers.take().unwrap_or_default();
        if !headers.contains_key_ignore_case(CONTENT_TYPE) {
            headers.add(CONTENT_TYPE, APPLICATION_XML);
        }
        // a field value replaces any extra header of the same name
        for (name, value) in HEADER_FIELDS {
            if let Some(v) = value(&self) {
                headers.remove_ignore_case(name);
                headers.add(*name, v);
            }
        }
        if let Some(range) = &self.range {
            log::debug!("HeadObject: Range '{range}' is sent but ignored by the service");
        }

        let mut query_params: Multimap = self.extra_query_params.take().unwrap_or_default();
        for (name, value) in QUERY_FIELDS {
            if let Some(v) = value(&self) {
                query_params.remove_ignore_case(name);
                query_params.add(*name, v);
            }
        }

        let bucket = self
            .bucket
            .ok_or(ValidationErr::MissingRequiredField {
                field: params::BUCKET,
            })?;
        let key = self.key.ok_or(ValidationErr::MissingRequiredField {
            field: params::KEY,
        })?;

        let req = S3Request::builder()
            .method(Method::HEAD)
            .bucket(bucket)
            .object(key)
            .query_params(query_params)
            .headers(headers)
            .build();
        log::debug!("HeadObject: built {} {}", req.method(), req.path());
        Ok(req)
    }
}

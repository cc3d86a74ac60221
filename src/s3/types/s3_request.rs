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

//! S3Request struct, the outbound request descriptor handed to a transport.

use crate::s3::error::Error;
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::utils::object_path;
use bytes::Bytes;
use http::Method;
use typed_builder::TypedBuilder;

#[derive(Clone, Debug, PartialEq, TypedBuilder)]
#[builder(build_method(into = S3Request))]
/// Fields of an [`S3Request`], collected by [`S3Request::builder`]
pub struct S3RequestParts {
    #[builder(!default)] // force required
    method: Method,

    #[builder(setter(into))] // required: no default
    bucket: String,

    #[builder(setter(into))] // required: no default
    object: String,

    #[builder(default)]
    query_params: Multimap,

    #[builder(default)]
    headers: Multimap,

    #[builder(default)]
    body: Bytes,
}

pub type S3RequestBldr = S3RequestPartsBuilder<((), (), (), (), (), ())>;

/// Immutable description of an HTTP request for one S3 operation.
#[derive(Clone, Debug, PartialEq)]
pub struct S3Request {
    method: Method,
    bucket: String,
    object: String,
    path: String,
    query_params: Multimap,
    headers: Multimap,
    body: Bytes,
}

impl From<S3RequestParts> for S3Request {
    fn from(p: S3RequestParts) -> Self {
        let path = object_path(&p.bucket, &p.object);
        Self {
            method: p.method,
            bucket: p.bucket,
            object: p.object,
            path,
            query_params: p.query_params,
            headers: p.headers,
            body: p.body,
        }
    }
}

impl S3Request {
    pub fn builder() -> S3RequestBldr {
        S3RequestParts::builder()
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    pub fn object(&self) -> &str {
        &self.object
    }

    /// Percent-encoded path, `/{bucket}/{object}`
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query_params(&self) -> &Multimap {
        &self.query_params
    }

    pub fn headers(&self) -> &Multimap {
        &self.headers
    }

    /// Looks up a header value; header names are case-insensitive.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get_ignore_case(name)
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Path followed by the encoded query string, if any.
    pub fn path_and_query(&self) -> String {
        if self.query_params.is_empty() {
            return self.path.clone();
        }
        format!("{}?{}", self.path, self.query_params.to_query_string())
    }

    /// Renders this request against `endpoint` (e.g. `https://play.min.io:9000`)
    /// as an [`http::Request`] ready for a transport to sign and send.
    pub fn to_http_request(&self, endpoint: &str) -> Result<http::Request<Bytes>, Error> {
        let uri = format!("{}{}", endpoint.trim_end_matches('/'), self.path_and_query());

        let mut builder = http::Request::builder()
            .method(self.method.clone())
            .uri(uri);
        for (key, values) in self.headers.iter_all() {
            for value in values {
                builder = builder.header(key.as_str(), value.as_str());
            }
        }

        Ok(builder.body(self.body.clone())?)
    }
}

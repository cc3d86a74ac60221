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

//! Various utility and helper functions

use base64::engine::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, NaiveDateTime, ParseError, Utc};
use md5::compute as md5compute;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Date and time with UTC timezone
pub type UtcTime = DateTime<Utc>;

const HTTP_HEADER_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Encodes data using base64 algorithm
pub fn b64encode<T: AsRef<[u8]>>(input: T) -> String {
    BASE64.encode(input)
}

/// Gets base64 encoded MD5 hash of given data
pub fn md5sum_hash(data: &[u8]) -> String {
    b64encode(md5compute(data).as_slice())
}

/// Gets HTTP header value (RFC 822 / RFC 1123 date) of given time
pub fn to_http_header_value(time: UtcTime) -> String {
    time.format(HTTP_HEADER_DATE_FORMAT).to_string()
}

/// Parses HTTP header value to time
pub fn from_http_header_value(s: &str) -> Result<UtcTime, ParseError> {
    Ok(DateTime::<Utc>::from_naive_utc_and_offset(
        NaiveDateTime::parse_from_str(s, HTTP_HEADER_DATE_FORMAT)?,
        Utc,
    ))
}

/// Parses RFC 3339 / ISO8601 value to time
pub fn from_iso8601utc(s: &str) -> Result<UtcTime, ParseError> {
    Ok(DateTime::parse_from_rfc3339(s)?.with_timezone(&Utc))
}

/// Parses a timestamp given either as an HTTP date, an RFC 2822 date or an
/// RFC 3339 date. The error of the last attempted format is returned.
pub fn parse_timestamp(s: &str) -> Result<UtcTime, ParseError> {
    let s = s.trim();
    from_http_header_value(s)
        .or_else(|_| DateTime::parse_from_rfc2822(s).map(|t| t.with_timezone(&Utc)))
        .or_else(|_| from_iso8601utc(s))
}

/// Converts seconds since the Unix epoch to time
pub fn from_epoch_seconds(secs: i64) -> Option<UtcTime> {
    DateTime::<Utc>::from_timestamp(secs, 0)
}

// Characters to escape. Based on RFC 3986: everything except the unreserved
// characters '-', '_', '.', '~' and alphanumerics. Non-ASCII is always escaped.
const QUERY_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

// Same as QUERY_ESCAPE but keeps '/' so that keys stay split into path segments.
const OBJECT_KEY_ENCODE_SET: &AsciiSet = &QUERY_ESCAPE.remove(b'/');

/// Percent-encodes a string per RFC 3986
pub fn url_encode(s: &str) -> String {
    utf8_percent_encode(s, QUERY_ESCAPE).collect()
}

/// Percent-encodes an object key per RFC 3986, leaving '/' literal
pub fn urlencode_object_key(key: &str) -> String {
    utf8_percent_encode(key, OBJECT_KEY_ENCODE_SET).collect()
}

/// Builds the path-style URI path `/{bucket}/{object}`
pub fn object_path(bucket: &str, object: &str) -> String {
    let bucket = url_encode(bucket);
    let object = urlencode_object_key(object);
    let mut path = String::with_capacity(bucket.len() + object.len() + 2);
    path.push('/');
    path.push_str(&bucket);
    path.push('/');
    path.push_str(&object);
    path
}

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

//! Named parameter bag used to construct request builders.

use crate::s3::error::ValidationErr;
use crate::s3::utils::{UtcTime, from_epoch_seconds, parse_timestamp};
use serde_json::Value;
use std::collections::BTreeMap;
use std::collections::btree_map;

pub const BUCKET: &str = "Bucket";
pub const IF_MATCH: &str = "IfMatch";
pub const IF_MODIFIED_SINCE: &str = "IfModifiedSince";
pub const IF_NONE_MATCH: &str = "IfNoneMatch";
pub const IF_UNMODIFIED_SINCE: &str = "IfUnmodifiedSince";
pub const KEY: &str = "Key";
pub const RANGE: &str = "Range";
pub const VERSION_ID: &str = "VersionId";
pub const SSE_CUSTOMER_ALGORITHM: &str = "SSECustomerAlgorithm";
pub const SSE_CUSTOMER_KEY: &str = "SSECustomerKey";
pub const SSE_CUSTOMER_KEY_MD5: &str = "SSECustomerKeyMD5";
pub const REQUEST_PAYER: &str = "RequestPayer";
pub const PART_NUMBER: &str = "PartNumber";
pub const EXPECTED_BUCKET_OWNER: &str = "ExpectedBucketOwner";

/// Every parameter name [`HeadObject`](super::HeadObject) understands.
pub const PARAM_NAMES: &[&str] = &[
    BUCKET,
    IF_MATCH,
    IF_MODIFIED_SINCE,
    IF_NONE_MATCH,
    IF_UNMODIFIED_SINCE,
    KEY,
    RANGE,
    VERSION_ID,
    SSE_CUSTOMER_ALGORITHM,
    SSE_CUSTOMER_KEY,
    SSE_CUSTOMER_KEY_MD5,
    REQUEST_PAYER,
    PART_NUMBER,
    EXPECTED_BUCKET_OWNER,
];

/// A single named parameter value
#[derive(Clone, Debug, PartialEq)]
pub enum ParamValue {
    String(String),
    Integer(i64),
    Timestamp(UtcTime),
}

impl ParamValue {
    pub(crate) fn into_string(self, field: &'static str) -> Result<String, ValidationErr> {
        match self {
            ParamValue::String(s) => Ok(s),
            _ => Err(ValidationErr::InvalidParamType {
                field,
                expected: "string",
            }),
        }
    }

    /// Accepts a parsed timestamp, a date string, or seconds since the epoch.
    pub(crate) fn into_timestamp(self, field: &'static str) -> Result<UtcTime, ValidationErr> {
        match self {
            ParamValue::Timestamp(t) => Ok(t),
            ParamValue::String(s) => {
                parse_timestamp(&s).map_err(|e| ValidationErr::InvalidTimestamp {
                    field,
                    reason: e.to_string(),
                    value: s,
                })
            }
            ParamValue::Integer(secs) => {
                from_epoch_seconds(secs).ok_or_else(|| ValidationErr::InvalidTimestamp {
                    field,
                    value: secs.to_string(),
                    reason: "seconds since epoch out of range".to_string(),
                })
            }
        }
    }

    pub(crate) fn into_u32(self, field: &'static str) -> Result<u32, ValidationErr> {
        match self {
            ParamValue::Integer(n) => u32::try_from(n).map_err(|_| ValidationErr::InvalidParamType {
                field,
                expected: "unsigned 32-bit integer",
            }),
            _ => Err(ValidationErr::InvalidParamType {
                field,
                expected: "integer",
            }),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::String(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::String(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Integer(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Integer(value.into())
    }
}

impl From<u16> for ParamValue {
    fn from(value: u16) -> Self {
        ParamValue::Integer(value.into())
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Integer(value.into())
    }
}

impl From<UtcTime> for ParamValue {
    fn from(value: UtcTime) -> Self {
        ParamValue::Timestamp(value)
    }
}

/// Mapping of parameter names (e.g. `Bucket`, `IfNoneMatch`) to values.
///
/// Names are case-sensitive and iterate in sorted order. Names a builder
/// does not know are ignored by it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HeadObjectParams(BTreeMap<String, ParamValue>);

impl HeadObjectParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter, returning the map for chaining.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> Option<ParamValue> {
        self.0.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for HeadObjectParams {
    type Item = (String, ParamValue);
    type IntoIter = btree_map::IntoIter<String, ParamValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for HeadObjectParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Converts a JSON object such as `{"Bucket": "b", "PartNumber": 3}`.
///
/// Strings and integers are taken as they are and `null` means absent.
/// Unknown names are dropped; known names with any other JSON type are
/// rejected.
impl TryFrom<Value> for HeadObjectParams {
    type Error = ValidationErr;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let Value::Object(map) = value else {
            return Err(ValidationErr::InvalidParams(
                "parameters must be a JSON object".to_string(),
            ));
        };

        let mut params = HeadObjectParams::new();
        for (name, value) in map {
            let Some(field) = PARAM_NAMES.iter().copied().find(|n| *n == name) else {
                log::debug!("ignoring unknown parameter '{name}'");
                continue;
            };
            match value {
                Value::Null => {}
                Value::String(s) => {
                    params.insert(field, s);
                }
                Value::Number(n) if n.is_i64() || n.is_u64() => {
                    let n = n.as_i64().ok_or(ValidationErr::InvalidParamType {
                        field,
                        expected: "64-bit integer",
                    })?;
                    params.insert(field, n);
                }
                _ => {
                    return Err(ValidationErr::InvalidParamType {
                        field,
                        expected: "string or integer",
                    });
                }
            }
        }
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    #[test]
    fn test_from_json_object() {
        let params = HeadObjectParams::try_from(json!({
            "Bucket": "b",
            "Key": "k",
            "PartNumber": 3,
            "VersionId": null,
            "Unknown": [1, 2, 3],
        }))
        .unwrap();
        assert_eq!(params.len(), 3);
        assert_eq!(params.get(BUCKET), Some(&ParamValue::from("b")));
        assert_eq!(params.get(PART_NUMBER), Some(&ParamValue::Integer(3)));
        assert_eq!(params.get(VERSION_ID), None);
        assert_eq!(params.get("Unknown"), None);
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        assert!(matches!(
            HeadObjectParams::try_from(json!(["Bucket"])),
            Err(ValidationErr::InvalidParams(_))
        ));
    }

    #[test]
    fn test_from_json_rejects_wrong_type() {
        assert_eq!(
            HeadObjectParams::try_from(json!({"Key": true})),
            Err(ValidationErr::InvalidParamType {
                field: KEY,
                expected: "string or integer",
            })
        );
        assert!(HeadObjectParams::try_from(json!({"PartNumber": 1.5})).is_err());
        assert!(HeadObjectParams::try_from(json!({"PartNumber": u64::MAX})).is_err());
    }

    #[test]
    fn test_into_timestamp() {
        let t = Utc.with_ymd_and_hms(2024, 2, 29, 12, 0, 0).unwrap();
        assert_eq!(ParamValue::from(t).into_timestamp(IF_MATCH), Ok(t));
        assert_eq!(
            ParamValue::from("Thu, 29 Feb 2024 12:00:00 GMT").into_timestamp(IF_MATCH),
            Ok(t)
        );
        assert_eq!(
            ParamValue::from(t.timestamp()).into_timestamp(IF_MATCH),
            Ok(t)
        );

        let err = ParamValue::from("not a date")
            .into_timestamp(IF_MODIFIED_SINCE)
            .unwrap_err();
        assert!(matches!(
            err,
            ValidationErr::InvalidTimestamp { field: IF_MODIFIED_SINCE, ref value, .. } if value == "not a date"
        ));
    }

    #[test]
    fn test_into_u32() {
        assert_eq!(ParamValue::from(3).into_u32(PART_NUMBER), Ok(3));
        assert!(ParamValue::from(-1).into_u32(PART_NUMBER).is_err());
        assert!(ParamValue::from("3").into_u32(PART_NUMBER).is_err());
    }

    #[test]
    fn test_from_iterator() {
        let params: HeadObjectParams = [(BUCKET, "b"), (KEY, "k")].into_iter().collect();
        assert_eq!(params.len(), 2);
        assert!(!params.is_empty());
    }
}

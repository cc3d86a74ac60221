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

use chrono::{TimeZone, Utc};
use http::Method;
use minio_head_object::s3::builders::{HeadObject, HeadObjectParams, ParamValue};
use minio_head_object::s3::error::ValidationErr;
use minio_head_object::s3::sse::SseCustomerKey;
use minio_head_object::s3::types::{RequestPayer, S3Request, ToS3Request};
use serde_json::json;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn build(value: serde_json::Value) -> Result<S3Request, ValidationErr> {
    HeadObject::try_from(value)?.to_s3request()
}

fn header_count(req: &S3Request) -> usize {
    req.headers().iter_all().map(|(_, v)| v.len()).sum()
}

#[test]
fn versioned_part_of_nested_key() {
    init_logger();
    let req = build(json!({
        "Bucket": "b",
        "Key": "a/b/c.txt",
        "VersionId": "v1",
        "PartNumber": 3,
    }))
    .unwrap();

    assert_eq!(req.method(), &Method::HEAD);
    assert_eq!(req.path(), "/b/a/b/c.txt");
    assert_eq!(req.query_params().len(), 2);
    assert_eq!(
        req.query_params().get("versionId").map(String::as_str),
        Some("v1")
    );
    assert_eq!(
        req.query_params().get("partNumber").map(String::as_str),
        Some("3")
    );
    assert_eq!(header_count(&req), 1);
    assert_eq!(req.header("content-type"), Some("application/xml"));
    assert!(req.body().is_empty());
}

#[test]
fn if_none_match_only() {
    init_logger();
    let req = build(json!({"Bucket": "b", "Key": "k", "IfNoneMatch": "\"etag1\""})).unwrap();

    assert_eq!(req.header("If-None-Match"), Some("\"etag1\""));
    assert_eq!(req.header("If-Match"), None);
    assert_eq!(req.header("If-Modified-Since"), None);
    assert_eq!(req.header("If-Unmodified-Since"), None);
    assert_eq!(header_count(&req), 2);
    assert!(req.query_params().is_empty());
}

#[test]
fn missing_bucket_or_key() {
    init_logger();
    let err = build(json!({"Key": "k"})).unwrap_err();
    assert_eq!(err, ValidationErr::MissingRequiredField { field: "Bucket" });
    assert!(err.to_string().contains("Bucket"));

    let err = build(json!({"Bucket": "b"})).unwrap_err();
    assert_eq!(err, ValidationErr::MissingRequiredField { field: "Key" });

    // Construction alone never requires them.
    assert!(HeadObject::try_from(json!({})).is_ok());
}

#[test]
fn unknown_keys_are_ignored() {
    init_logger();
    let with_unknown = build(json!({
        "Bucket": "b",
        "Key": "k",
        "ChecksumMode": "ENABLED",
        "Whatever": {"nested": true},
    }))
    .unwrap();
    let without = build(json!({"Bucket": "b", "Key": "k"})).unwrap();
    assert_eq!(with_unknown, without);
}

#[test]
fn request_payer_validation() {
    init_logger();
    for payer in RequestPayer::ALL {
        let req = build(json!({"Bucket": "b", "Key": "k", "RequestPayer": payer.as_str()})).unwrap();
        assert_eq!(req.header("x-amz-request-payer"), Some(payer.as_str()));
    }

    let err = build(json!({"Bucket": "b", "Key": "k", "RequestPayer": "owner"})).unwrap_err();
    let msg = err.to_string();
    assert!(err.is_invalid_input());
    assert_eq!(err.field(), Some("RequestPayer"));
    assert!(msg.contains("owner"), "{msg}");
}

#[test]
fn timestamps_from_string_or_parsed_value() {
    init_logger();
    let t = Utc.with_ymd_and_hms(2015, 10, 21, 7, 28, 0).unwrap();

    let from_string = build(json!({
        "Bucket": "b",
        "Key": "k",
        "IfModifiedSince": "2015-10-21T07:28:00Z",
        "IfUnmodifiedSince": "Wed, 21 Oct 2015 07:28:00 GMT",
    }))
    .unwrap();

    let params = HeadObjectParams::new()
        .with("Bucket", "b")
        .with("Key", "k")
        .with("IfModifiedSince", t)
        .with("IfUnmodifiedSince", ParamValue::Timestamp(t));
    let from_parsed = HeadObject::from_params(params)
        .unwrap()
        .to_s3request()
        .unwrap();

    assert_eq!(from_string, from_parsed);
    assert_eq!(
        from_string.header("If-Modified-Since"),
        Some("Wed, 21 Oct 2015 07:28:00 GMT")
    );
    assert_eq!(
        from_string.header("If-Unmodified-Since"),
        Some("Wed, 21 Oct 2015 07:28:00 GMT")
    );

    let err = HeadObject::try_from(json!({"IfModifiedSince": "last tuesday"})).unwrap_err();
    assert!(matches!(err, ValidationErr::InvalidTimestamp { field: "IfModifiedSince", .. }));
}

#[test]
fn full_request() {
    init_logger();
    let ssec = SseCustomerKey::new("32byteslongsecretkeymustprovided");
    let req = build(json!({
        "Bucket": "my-bucket",
        "Key": "reports/2024 Q1.csv",
        "IfMatch": "\"abc\"",
        "Range": "bytes=0-99",
        "SSECustomerAlgorithm": ssec.algorithm(),
        "SSECustomerKey": ssec.key(),
        "SSECustomerKeyMD5": ssec.key_md5(),
        "RequestPayer": "requester",
        "ExpectedBucketOwner": "111122223333",
    }))
    .unwrap();

    assert_eq!(req.path(), "/my-bucket/reports/2024%20Q1.csv");
    assert_eq!(header_count(&req), 8);
    assert_eq!(req.header("Range"), Some("bytes=0-99"));
    assert_eq!(
        req.header("x-amz-server-side-encryption-customer-algorithm"),
        Some("AES256")
    );
    assert_eq!(
        req.header("x-amz-expected-bucket-owner"),
        Some("111122223333")
    );

    let same = HeadObject::new("my-bucket", "reports/2024 Q1.csv")
        .if_match("\"abc\"")
        .range("bytes=0-99")
        .ssec(&ssec)
        .request_payer(RequestPayer::Requester)
        .expected_bucket_owner("111122223333")
        .to_s3request()
        .unwrap();
    assert_eq!(req, same);

    let http_req = req.to_http_request("https://s3.amazonaws.com").unwrap();
    assert_eq!(http_req.method(), &Method::HEAD);
    assert_eq!(
        http_req.uri().to_string(),
        "https://s3.amazonaws.com/my-bucket/reports/2024%20Q1.csv"
    );
    assert_eq!(http_req.headers().len(), 8);
}

#[test]
fn setter_chaining_matches_mapping() {
    init_logger();
    let chained = HeadObject::try_from(json!({}))
        .unwrap()
        .bucket("b")
        .key("k")
        .part_number(42)
        .to_s3request()
        .unwrap();
    let direct = build(json!({"Bucket": "b", "Key": "k", "PartNumber": 42})).unwrap();
    assert_eq!(chained, direct);
}

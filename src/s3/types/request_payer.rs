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

use crate::s3::error::ValidationErr;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Confirms that the requester knows it will be charged for the request.
pub enum RequestPayer {
    Requester,
}

impl RequestPayer {
    /// All values accepted by the service
    pub const ALL: &'static [RequestPayer] = &[RequestPayer::Requester];

    pub fn as_str(&self) -> &'static str {
        match self {
            RequestPayer::Requester => "requester",
        }
    }

    /// Parses the wire value. Matching is exact; the service does not accept
    /// other spellings.
    pub fn parse(s: &str) -> Result<RequestPayer, ValidationErr> {
        Self::ALL
            .iter()
            .find(|v| v.as_str() == s)
            .copied()
            .ok_or_else(|| ValidationErr::InvalidEnumValue {
                field: "RequestPayer",
                class: "RequestPayer",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for RequestPayer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestPayer {
    type Err = ValidationErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<RequestPayer> for String {
    fn from(value: RequestPayer) -> Self {
        value.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_values() {
        for v in RequestPayer::ALL {
            assert_eq!(RequestPayer::parse(v.as_str()), Ok(*v));
            assert_eq!(v.to_string().parse::<RequestPayer>(), Ok(*v));
        }
    }

    #[test]
    fn test_parse_rejects_other_values() {
        for s in ["", "Requester", "REQUESTER", "owner", "requester "] {
            let err = RequestPayer::parse(s).unwrap_err();
            assert_eq!(
                err,
                ValidationErr::InvalidEnumValue {
                    field: "RequestPayer",
                    class: "RequestPayer",
                    value: s.to_string(),
                }
            );
        }
    }
}

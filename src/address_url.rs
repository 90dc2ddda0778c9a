// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Absolute URL value type used by [`Addressable`](crate::addressable::Addressable).
//!
//! [`Url`] keeps the URL exactly as written so that destinations serialize back
//! to the same string (`"url": "http://foo.com"`), while a parsed [`url::Url`]
//! exposes the structured parts (scheme, host, path, query, fragment) to
//! dispatchers. Equality and hashing use the string as written.
//!
//! # Example
//!
//! ```rust
//! use addressable::address_url::Url;
//!
//! let url: Url = "https://broker.example.com/default/events".parse().unwrap();
//! assert_eq!(url.scheme(), "https");
//! assert_eq!(url.host(), Some("broker.example.com"));
//! assert_eq!(url.path(), "/default/events");
//! ```

use crate::errors::UrlError;
use schemars::{json_schema, JsonSchema, Schema, SchemaGenerator};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A syntactically valid absolute URL, kept as written.
#[derive(Clone, Debug)]
pub struct Url {
    raw: String,
    parsed: ::url::Url,
}

impl Url {
    /// Parse an absolute URL.
    ///
    /// # Errors
    ///
    /// Returns [`UrlError::Empty`] for an empty string and [`UrlError::Invalid`]
    /// for anything that is not an absolute URL.
    pub fn parse(input: &str) -> Result<Self, UrlError> {
        if input.is_empty() {
            return Err(UrlError::Empty);
        }

        ::url::Url::parse(input)
            .map(|parsed| Self {
                raw: input.to_string(),
                parsed,
            })
            .map_err(|e| UrlError::Invalid {
                input: input.to_string(),
                reason: e.to_string(),
            })
    }

    /// Build `http://{host}/`.
    ///
    /// # Errors
    ///
    /// Returns [`UrlError::Invalid`] if `host` is not a valid host.
    pub fn http(host: &str) -> Result<Self, UrlError> {
        Self::with_scheme("http", host)
    }

    /// Build `https://{host}/`.
    ///
    /// # Errors
    ///
    /// Returns [`UrlError::Invalid`] if `host` is not a valid host.
    pub fn https(host: &str) -> Result<Self, UrlError> {
        Self::with_scheme("https", host)
    }

    fn with_scheme(scheme: &str, host: &str) -> Result<Self, UrlError> {
        if host.is_empty() {
            return Err(UrlError::Invalid {
                input: format!("{scheme}://"),
                reason: "empty host".to_string(),
            });
        }
        Self::parse(&format!("{scheme}://{host}/"))
    }

    #[must_use]
    pub fn scheme(&self) -> &str {
        self.parsed.scheme()
    }

    /// Host without port, if the URL has one.
    #[must_use]
    pub fn host(&self) -> Option<&str> {
        self.parsed.host_str()
    }

    /// Explicit port. Default ports for the scheme are not reported.
    #[must_use]
    pub fn port(&self) -> Option<u16> {
        self.parsed.port()
    }

    #[must_use]
    pub fn path(&self) -> &str {
        self.parsed.path()
    }

    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.parsed.query()
    }

    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.parsed.fragment()
    }

    /// The URL as written. This is also its serialized form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Parsed, WHATWG-normalized form of the URL.
    #[must_use]
    pub fn into_inner(self) -> ::url::Url {
        self.parsed
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl PartialEq for Url {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for Url {}

impl Hash for Url {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl FromStr for Url {
    type Err = UrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<::url::Url> for Url {
    fn from(parsed: ::url::Url) -> Self {
        Self {
            raw: parsed.as_str().to_string(),
            parsed,
        }
    }
}

impl AsRef<::url::Url> for Url {
    fn as_ref(&self) -> &::url::Url {
        &self.parsed
    }
}

impl Serialize for Url {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for Url {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

impl JsonSchema for Url {
    fn schema_name() -> Cow<'static, str> {
        "Url".into()
    }

    fn json_schema(_: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "string",
            "format": "uri"
        })
    }
}

/// Deserialize an optional URL, treating an empty string as absent.
///
/// Used by `#[serde(deserialize_with)]` on optional URL fields. Controllers that
/// clear a URL sometimes write `""` instead of removing the key.
///
/// # Errors
///
/// Returns a deserializer error for any non-empty string that is not an absolute URL.
pub fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<Url>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) if raw.is_empty() => Ok(None),
        Some(raw) => Url::parse(&raw)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Error types for the Addressable duck type.
//!
//! This module provides error types for:
//! - Version conversion attempts across schema revisions
//! - URL parsing for advertised destinations
//! - Duck-typed decoding and round-trip conformance checks
//!
//! The library never recovers from these errors; they are returned to the
//! caller unchanged.

use thiserror::Error;

/// Errors raised by the version conversion entry points.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// No other revision of the type exists to convert to or from.
    ///
    /// The message names the concrete type of the counterpart that was presented,
    /// so misrouted conversion calls can be diagnosed from logs or status conditions.
    #[error("{version} is the highest known version, got: {counterpart}")]
    UnsupportedConversion {
        /// The revision of the type that rejected the conversion
        version: String,
        /// Concrete type name of the conversion counterpart
        counterpart: String,
    },
}

/// Errors that can occur while parsing an advertised URL.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UrlError {
    /// The input string was empty.
    #[error("URL must not be empty")]
    Empty,

    /// The input was not a syntactically valid absolute URL.
    #[error("invalid URL '{input}': {reason}")]
    Invalid {
        /// The rejected input
        input: String,
        /// Parser diagnostic
        reason: String,
    },
}

/// Errors raised while decoding untyped objects against a duck type.
#[derive(Error, Debug)]
pub enum DuckError {
    /// A typed value could not be encoded to JSON.
    #[error("failed to encode {type_name}: {source}")]
    Encode {
        /// Type that was being encoded
        type_name: &'static str,
        /// Underlying encoder error
        #[source]
        source: serde_json::Error,
    },

    /// An untyped object did not match the requested shape.
    #[error("failed to decode object as {type_name}: {source}")]
    Decode {
        /// Type that was being decoded
        type_name: &'static str,
        /// Underlying decoder error
        #[source]
        source: serde_json::Error,
    },

    /// A populated full type did not survive a round trip through the implementing type.
    #[error("{implementor} does not implement {full_type}: round trip changed {expected} into {actual}")]
    RoundTripMismatch {
        /// Type that claims to implement the duck type
        implementor: &'static str,
        /// Full type of the duck type
        full_type: &'static str,
        /// Encoded populated full type
        expected: String,
        /// Encoded value after the round trip
        actual: String,
    },
}

/// Result alias for duck-typing operations.
pub type Result<T, E = DuckError> = std::result::Result<T, E>;

// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! # Addressable - duck type for message-delivery destinations
//!
//! Custom resources in an event-delivery control plane advertise, in their
//! status, the endpoints messages may be delivered to. This crate defines the
//! shape of that advertisement so generic dispatchers can read any compatible
//! resource without knowing its concrete type.
//!
//! ## Modules
//!
//! - [`addressable`] - `Addressable`, `AddressStatus` and the conformance skeleton
//! - [`address_url`] - absolute URL value type serialized as a string
//! - [`destination`] - precedence rule for picking a destination
//! - [`duck`] - duck-typing capabilities, untyped decoding and conformance checks
//! - [`errors`] - error types
//! - [`constants`] - API identity and serialized key names
//!
//! ## Example
//!
//! ```rust
//! use addressable::addressable::AddressableType;
//! use addressable::destination::Destination;
//! use addressable::duck::from_unstructured;
//! use serde_json::json;
//!
//! let broker = json!({
//!     "apiVersion": "eventing.knative.dev/v1",
//!     "kind": "Broker",
//!     "metadata": { "name": "default", "namespace": "events" },
//!     "spec": { "config": { "kind": "ConfigMap" } },
//!     "status": {
//!         "address": { "url": "http://broker.events.svc/" },
//!         "addresses": [{ "name": "https", "url": "https://broker.events.svc/" }]
//!     }
//! });
//!
//! let duck: AddressableType = from_unstructured(&broker).unwrap();
//! let destination = Destination::select(&duck.status);
//! let url = destination.primary().and_then(|a| a.url.as_ref()).unwrap();
//! assert_eq!(url.as_str(), "https://broker.events.svc/");
//! ```

pub mod address_url;
pub mod addressable;
pub mod constants;
pub mod destination;
pub mod duck;
pub mod errors;

#[cfg(test)]
mod address_url_tests;

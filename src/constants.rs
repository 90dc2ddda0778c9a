// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Global constants for the Addressable duck type.
//!
//! This module contains the API identity of the conformance skeleton and the
//! values used by its sample fixture. Serialized key names live only in the
//! serde attributes on the records in [`crate::addressable`].

// ============================================================================
// API Constants
// ============================================================================

/// API group for duck types
pub const API_GROUP: &str = "duck.knative.dev";

/// API version of the Addressable duck type. This is the highest known revision.
pub const API_VERSION: &str = "v1";

/// Fully qualified API version (group/version)
pub const API_GROUP_VERSION: &str = "duck.knative.dev/v1";

/// Kind name for the `AddressableType` conformance skeleton
pub const KIND_ADDRESSABLE_TYPE: &str = "AddressableType";

/// Kind name for the `AddressableTypeList` list wrapper
pub const KIND_ADDRESSABLE_TYPE_LIST: &str = "AddressableTypeList";

/// Plural resource name for `AddressableType`
pub const PLURAL_ADDRESSABLE_TYPE: &str = "addressabletypes";

// ============================================================================
// Sample Fixture Values
// ============================================================================

/// Name given to the primary address by the sample populator
pub const SAMPLE_ADDRESS_NAME: &str = "http";

/// URL given to the primary address by the sample populator
pub const SAMPLE_ADDRESS_URL: &str = "http://foo.com/";

/// Name given to the TLS address by the sample populator
pub const SAMPLE_TLS_ADDRESS_NAME: &str = "https";

/// URL given to the TLS address by the sample populator
pub const SAMPLE_TLS_ADDRESS_URL: &str = "https://foo.com/";

/// Audience given to sample addresses
pub const SAMPLE_AUDIENCE: &str = "foo.com";

/// PEM trust bundle given to the TLS sample address.
///
/// The contents are not a real certificate; the schema never validates them.
pub const SAMPLE_CA_CERTS: &str = "-----BEGIN CERTIFICATE-----
MIIBszCCAVmgAwIBAgIUZm9vLmNvbSBzYW1wbGUgdHJ1c3QgYnVuZGxlMAoGCCqG
-----END CERTIFICATE-----
";

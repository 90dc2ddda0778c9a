// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Addressable duck type records.
//!
//! A resource that wants to be a message-delivery destination embeds
//! [`AddressStatus`] in its status. Dispatchers decode any such resource as
//! [`AddressableType`] and pick a destination without knowing its concrete type.
//!
//! # Resource Types
//!
//! - [`Addressable`] - a single advertised destination
//! - [`AddressStatus`] - the status fragment embedded by addressable resources
//! - [`AddressableType`] - the conformance skeleton wrapping [`AddressStatus`]
//! - [`AddressableTypeList`] - list wrapper for the skeleton
//!
//! # Example
//!
//! ```yaml
//! apiVersion: eventing.knative.dev/v1
//! kind: Broker
//! metadata:
//!   name: default
//!   namespace: events
//! status:
//!   address:
//!     name: http
//!     url: http://broker-ingress.knative-eventing.svc.cluster.local/events/default
//!   addresses:
//!     - name: https
//!       url: https://broker-ingress.knative-eventing.svc.cluster.local/events/default
//!       CACerts: |
//!         -----BEGIN CERTIFICATE-----
//!         ...
//!         -----END CERTIFICATE-----
//!       audience: broker.events.default
//! ```

use crate::address_url::{self, Url};
use crate::constants::{
    API_GROUP, API_GROUP_VERSION, API_VERSION, KIND_ADDRESSABLE_TYPE, KIND_ADDRESSABLE_TYPE_LIST,
    PLURAL_ADDRESSABLE_TYPE, SAMPLE_ADDRESS_NAME, SAMPLE_ADDRESS_URL, SAMPLE_AUDIENCE,
    SAMPLE_CA_CERTS, SAMPLE_TLS_ADDRESS_NAME, SAMPLE_TLS_ADDRESS_URL,
};
use crate::duck::{Convertible, Implementable, Listable, ObjectList, OwnerRefable, Populatable};
use crate::errors::ConversionError;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{ListMeta, ObjectMeta};
use k8s_openapi::NamespaceResourceScope;
use kube::core::{Resource, TypeMeta};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tracing::debug;

/// A destination for message delivery.
///
/// Every field is optional and absence means "unspecified". Absent fields are
/// omitted when serialized, so an empty `Addressable` encodes as `{}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Addressable {
    /// Name of the address, typically the protocol it serves (e.g. "http", "https").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Absolute URL of the destination.
    ///
    /// An empty string in the serialized form is read as absent.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "address_url::deserialize_optional"
    )]
    #[schemars(with = "Option<Url>")]
    pub url: Option<Url>,

    /// Certification Authority (CA) certificates in PEM format (RFC 7468).
    ///
    /// One or more concatenated PEM blocks. The contents are not validated.
    #[serde(rename = "CACerts", default, skip_serializing_if = "Option::is_none")]
    pub ca_certs: Option<String>,

    /// OIDC audience bound into delivery tokens for this address. Opaque.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,
}

impl Addressable {
    /// Revision of the Addressable schema implemented here.
    pub const VERSION: &'static str = API_VERSION;

    /// Whether every field is absent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.url.is_none()
            && self.ca_certs.is_none()
            && self.audience.is_none()
    }
}

impl Convertible for Addressable {
    /// Always fails: `v1` is the highest known revision.
    fn convert_to(&self, to: &mut dyn Convertible) -> Result<(), ConversionError> {
        let counterpart = to.type_name();
        debug!(counterpart, "Rejecting conversion from Addressable {}", Self::VERSION);
        Err(ConversionError::UnsupportedConversion {
            version: Self::VERSION.to_string(),
            counterpart: counterpart.to_string(),
        })
    }

    /// Always fails: `v1` is the highest known revision.
    fn convert_from(&mut self, from: &dyn Convertible) -> Result<(), ConversionError> {
        let counterpart = from.type_name();
        debug!(counterpart, "Rejecting conversion into Addressable {}", Self::VERSION);
        Err(ConversionError::UnsupportedConversion {
            version: Self::VERSION.to_string(),
            counterpart: counterpart.to_string(),
        })
    }
}

impl Implementable for Addressable {
    type Full = AddressableType;

    fn full_type(&self) -> AddressableType {
        AddressableType::default()
    }
}

/// How resources embed [`Addressable`] in their status.
///
/// If `addresses` is present and non-empty, clients must ignore `address`.
/// If neither is present, the owner is not ready for delivery.
/// See [`Destination`](crate::destination::Destination) for the selection rule.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddressStatus {
    /// A single address. Ignored by clients when `addresses` is present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Addressable>,

    /// Addresses for different protocols (e.g. HTTP and HTTPS).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<Addressable>>,
}

/// Skeleton resource wrapping [`AddressStatus`] the way compatible resources embed it.
///
/// Used to decode references to addressable resources and to answer schema
/// registry queries. This is not a real resource and is never persisted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressableType {
    #[serde(flatten, default)]
    pub types: Option<TypeMeta>,

    #[serde(default)]
    pub metadata: ObjectMeta,

    #[serde(default)]
    pub status: AddressStatus,
}

impl AddressableType {
    /// Create a named skeleton carrying its own type metadata.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            types: Some(Self::type_meta()),
            metadata: ObjectMeta {
                name: Some(name.to_string()),
                ..Default::default()
            },
            status: AddressStatus::default(),
        }
    }

    /// `apiVersion`/`kind` of the skeleton.
    #[must_use]
    pub fn type_meta() -> TypeMeta {
        TypeMeta {
            api_version: API_GROUP_VERSION.to_string(),
            kind: KIND_ADDRESSABLE_TYPE.to_string(),
        }
    }
}

impl Resource for AddressableType {
    type DynamicType = ();
    type Scope = NamespaceResourceScope;

    fn kind(_: &()) -> Cow<'_, str> {
        KIND_ADDRESSABLE_TYPE.into()
    }

    fn group(_: &()) -> Cow<'_, str> {
        API_GROUP.into()
    }

    fn version(_: &()) -> Cow<'_, str> {
        API_VERSION.into()
    }

    fn api_version(_: &()) -> Cow<'_, str> {
        API_GROUP_VERSION.into()
    }

    fn plural(_: &()) -> Cow<'_, str> {
        PLURAL_ADDRESSABLE_TYPE.into()
    }

    fn meta(&self) -> &ObjectMeta {
        &self.metadata
    }

    fn meta_mut(&mut self) -> &mut ObjectMeta {
        &mut self.metadata
    }
}

impl OwnerRefable for AddressableType {}

impl Listable for AddressableType {
    type List = AddressableTypeList;
}

impl Populatable for AddressableType {
    /// Fill the status with sample addresses covering every field path.
    ///
    /// The scalar address is `{name: "http", url: "http://foo.com/"}` with no trust
    /// bundle and no audience. The `addresses` list carries an HTTPS entry with a
    /// trust bundle and audience, followed by the HTTP entry with an audience.
    fn populate(&mut self) {
        let http = Addressable {
            name: Some(SAMPLE_ADDRESS_NAME.to_string()),
            url: Url::parse(SAMPLE_ADDRESS_URL).ok(),
            ca_certs: None,
            audience: None,
        };
        let https = Addressable {
            name: Some(SAMPLE_TLS_ADDRESS_NAME.to_string()),
            url: Url::parse(SAMPLE_TLS_ADDRESS_URL).ok(),
            ca_certs: Some(SAMPLE_CA_CERTS.to_string()),
            audience: Some(SAMPLE_AUDIENCE.to_string()),
        };

        self.status = AddressStatus {
            addresses: Some(vec![
                https,
                Addressable {
                    audience: Some(SAMPLE_AUDIENCE.to_string()),
                    ..http.clone()
                },
            ]),
            address: Some(http),
        };
    }
}

/// A list of [`AddressableType`] resources.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressableTypeList {
    #[serde(flatten, default)]
    pub types: Option<TypeMeta>,

    #[serde(default)]
    pub metadata: ListMeta,

    #[serde(default)]
    pub items: Vec<AddressableType>,
}

impl AddressableTypeList {
    /// `apiVersion`/`kind` of the list wrapper.
    #[must_use]
    pub fn type_meta() -> TypeMeta {
        TypeMeta {
            api_version: API_GROUP_VERSION.to_string(),
            kind: KIND_ADDRESSABLE_TYPE_LIST.to_string(),
        }
    }
}

impl ObjectList for AddressableTypeList {
    type Item = AddressableType;

    const LIST_KIND: &'static str = KIND_ADDRESSABLE_TYPE_LIST;

    fn items(&self) -> &[AddressableType] {
        &self.items
    }
}

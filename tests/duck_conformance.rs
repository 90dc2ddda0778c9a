// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! End-to-end conformance tests for the Addressable duck type.
//!
//! These tests drive the public API the way a dispatcher would: decode an
//! untyped object, apply the precedence rule, and check the advertised shape.

mod common;

use addressable::address_url::Url;
use addressable::addressable::{AddressStatus, Addressable, AddressableType, AddressableTypeList};
use addressable::constants::{API_GROUP_VERSION, KIND_ADDRESSABLE_TYPE};
use addressable::destination::Destination;
use addressable::duck::{
    from_unstructured, verify_type, Convertible, Listable, ObjectList, OwnerRefable, Populatable,
};
use addressable::errors::ConversionError;
use kube::core::Resource;
use serde_json::json;

#[test]
fn http_address_serializes_without_tls_fields() {
    let address = Addressable {
        name: Some("http".to_string()),
        url: Some(Url::parse("http://foo.com/").unwrap()),
        ..Default::default()
    };

    let value = serde_json::to_value(&address).unwrap();
    assert_eq!(value, json!({"name": "http", "url": "http://foo.com/"}));
}

#[test]
fn trust_bundle_only_object_decodes() {
    let pem = "-----BEGIN CERTIFICATE-----\nMIIBszCCAVmg\n-----END CERTIFICATE-----\n";
    let address: Addressable = serde_json::from_value(json!({"CACerts": pem})).unwrap();

    assert_eq!(
        address,
        Addressable {
            ca_certs: Some(pem.to_string()),
            ..Default::default()
        }
    );
}

#[test]
fn consumer_picks_addresses_over_address() {
    let status: AddressStatus = serde_json::from_value(json!({
        "address": {"url": "http://a/"},
        "addresses": [{"url": "https://a/"}]
    }))
    .unwrap();

    let destination = Destination::select(&status);
    let url = destination.primary().and_then(|a| a.url.as_ref()).unwrap();
    assert_eq!(url.as_str(), "https://a/");
}

#[test]
fn empty_status_is_not_ready() {
    let status: AddressStatus = serde_json::from_value(json!({})).unwrap();
    assert!(!Destination::select(&status).is_ready());
}

#[test]
fn populated_skeleton_has_primary_http_address() {
    let mut skeleton = AddressableType::default();
    skeleton.populate();

    let address = skeleton.status.address.unwrap();
    let url = address.url.unwrap();
    assert_eq!(address.name.as_deref(), Some("http"));
    assert_eq!(url.scheme(), "http");
    assert_eq!(url.host(), Some("foo.com"));
}

#[test]
fn conversion_names_the_counterpart() {
    let address = Addressable::default();
    let mut skeleton_address = Addressable::default();

    let to = address.convert_to(&mut skeleton_address).unwrap_err();
    let from = skeleton_address.convert_from(&address).unwrap_err();

    for err in [to, from] {
        assert_eq!(
            err,
            ConversionError::UnsupportedConversion {
                version: "v1".to_string(),
                counterpart: std::any::type_name::<Addressable>().to_string(),
            }
        );
        assert!(err.to_string().contains(std::any::type_name::<Addressable>()));
    }
}

#[test]
fn broker_decodes_through_skeleton() {
    let broker = common::broker_object();
    let duck: AddressableType = from_unstructured(&broker).unwrap();

    assert_eq!(duck.metadata.namespace.as_deref(), Some("events"));
    assert_eq!(duck.status.address.as_ref().unwrap().name.as_deref(), Some("http"));

    let destination = Destination::select(&duck.status);
    assert_eq!(
        destination.by_scheme("https").and_then(|a| a.name.as_deref()),
        Some("https")
    );
    assert!(destination.by_scheme("http").is_none());
}

#[test]
fn skeleton_identity_and_list_pairing() {
    let skeleton = AddressableType::new("sample");

    assert_eq!(AddressableType::api_version(&()), API_GROUP_VERSION);
    assert_eq!(skeleton.group_version_kind().kind, KIND_ADDRESSABLE_TYPE);

    let list: AddressableTypeList = skeleton.list_type();
    assert!(list.items().is_empty());
}

#[test]
fn skeleton_satisfies_its_own_duck_type() {
    verify_type::<AddressableType, _>(&Addressable::default()).unwrap();
}

#[test]
fn list_round_trips_items() {
    let mut item = AddressableType::new("a");
    item.populate();

    let list = AddressableTypeList {
        types: Some(AddressableTypeList::type_meta()),
        items: vec![item, AddressableType::new("b")],
        ..Default::default()
    };

    let encoded = serde_json::to_string(&list).unwrap();
    let decoded: AddressableTypeList = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, list);
}

// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Duck-typing capabilities shared by schema fragments.
//!
//! A duck type is a schema fragment that any concrete resource may embed to claim
//! a capability. Consumers decode unknown resources against the fragment and
//! succeed if the required fields are present.
//!
//! # Capabilities
//!
//! - [`Convertible`] - version conversion entry points
//! - [`Implementable`] - maps a fragment to the skeleton resource that embeds it
//! - [`Populatable`] - fills a skeleton with deterministic sample data
//! - [`Listable`] - pairs a kind with its list kind
//! - [`OwnerRefable`] - reports group/version/kind and builds owner references
//!
//! # Decoding and conformance
//!
//! - [`from_unstructured`] and [`from_dynamic`] decode untyped objects
//! - [`verify_type`] checks that a concrete resource carries every field of a duck type

use crate::errors::{ConversionError, DuckError, Result};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::OwnerReference;
use kube::core::{DynamicObject, GroupVersionKind, Resource};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::any::type_name;
use std::fmt::Debug;
use tracing::{debug, trace};

/// A type that can be converted to and from other revisions of itself.
pub trait Convertible: Send + Sync {
    /// Migrate this value into `to`, a different revision's equivalent shape.
    ///
    /// # Errors
    ///
    /// Returns a [`ConversionError`] when no conversion to `to` exists.
    fn convert_to(&self, to: &mut dyn Convertible) -> Result<(), ConversionError>;

    /// Migrate `from`, a different revision's equivalent shape, into this value.
    ///
    /// # Errors
    ///
    /// Returns a [`ConversionError`] when no conversion from `from` exists.
    fn convert_from(&mut self, from: &dyn Convertible) -> Result<(), ConversionError>;

    /// Concrete type name of the implementor, usable through `dyn Convertible`.
    fn type_name(&self) -> &'static str {
        type_name::<Self>()
    }
}

/// A resource that can fill itself with deterministic sample data.
pub trait Populatable {
    /// Populate every field path a schema round trip must cover.
    fn populate(&mut self);
}

/// A duck-type fragment with a skeleton resource that embeds it.
pub trait Implementable {
    type Full: Populatable;

    /// Return an empty skeleton instance embedding this fragment.
    fn full_type(&self) -> Self::Full;
}

/// An ordered collection of resources with list-level metadata.
pub trait ObjectList: Default {
    type Item;

    /// Kind reported by the list wrapper
    const LIST_KIND: &'static str;

    fn items(&self) -> &[Self::Item];
}

/// A resource whose list kind can be discovered by a schema registry.
pub trait Listable: Sized {
    type List: ObjectList<Item = Self>;

    /// Return an empty instance of the paired list type.
    fn list_type(&self) -> Self::List {
        Self::List::default()
    }
}

/// A resource that can be referenced as the owner of another resource.
pub trait OwnerRefable: Resource<DynamicType = ()> {
    /// Group/version/kind triple of this resource type.
    fn group_version_kind(&self) -> GroupVersionKind {
        GroupVersionKind::gvk(&Self::group(&()), &Self::version(&()), &Self::kind(&()))
    }

    /// Controller owner reference to this object.
    ///
    /// Returns `None` when the object has no name or uid yet.
    fn owner_reference(&self) -> Option<OwnerReference> {
        self.controller_owner_ref(&())
    }
}

/// Decode an untyped JSON object into a typed duck shape.
///
/// Fields that the shape does not declare are ignored, which is what makes a
/// concrete resource readable through a fragment it embeds.
///
/// # Errors
///
/// Returns [`DuckError::Decode`] when a declared field has the wrong shape.
pub fn from_unstructured<T>(value: &serde_json::Value) -> Result<T>
where
    T: DeserializeOwned,
{
    trace!(target_type = type_name::<T>(), "Decoding unstructured object");
    T::deserialize(value).map_err(|source| DuckError::Decode {
        type_name: type_name::<T>(),
        source,
    })
}

/// Decode a [`DynamicObject`] into a typed duck shape.
///
/// # Errors
///
/// Returns [`DuckError::Encode`] if the object cannot be re-encoded and
/// [`DuckError::Decode`] if it does not match the shape.
pub fn from_dynamic<T>(object: &DynamicObject) -> Result<T>
where
    T: DeserializeOwned,
{
    let value = to_value(object)?;
    from_unstructured(&value)
}

/// Verify that `T` carries every field of the duck type `I`.
///
/// The full type of `I` is populated with sample data, encoded, decoded into
/// `T`, re-encoded, and decoded back into the full type. Any field `T` drops
/// or reshapes makes the result differ from the populated input.
///
/// # Errors
///
/// Returns [`DuckError::RoundTripMismatch`] when the round trip loses data, or an
/// encode/decode error when the shapes are incompatible.
pub fn verify_type<T, I>(implementable: &I) -> Result<()>
where
    T: Serialize + DeserializeOwned,
    I: Implementable,
    I::Full: Serialize + DeserializeOwned + PartialEq + Debug,
{
    let mut input = implementable.full_type();
    input.populate();

    let encoded = to_value(&input)?;
    let instance: T = from_unstructured(&encoded)?;
    let reencoded = to_value(&instance)?;
    let output: I::Full = from_unstructured(&reencoded)?;

    if input != output {
        debug!(
            implementor = type_name::<T>(),
            full_type = type_name::<I::Full>(),
            "Duck type round trip lost data"
        );
        return Err(DuckError::RoundTripMismatch {
            implementor: type_name::<T>(),
            full_type: type_name::<I::Full>(),
            expected: encoded.to_string(),
            actual: to_value(&output)?.to_string(),
        });
    }

    debug!(
        implementor = type_name::<T>(),
        full_type = type_name::<I::Full>(),
        "Duck type verified"
    );
    Ok(())
}

fn to_value<T: Serialize>(value: &T) -> Result<serde_json::Value> {
    serde_json::to_value(value).map_err(|source| DuckError::Encode {
        type_name: type_name::<T>(),
        source,
    })
}

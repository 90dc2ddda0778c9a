// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Destination selection for addressable resources.
//!
//! Applies the precedence rule of [`AddressStatus`]: a non-empty `addresses`
//! list supersedes the scalar `address`, and a status with neither is not ready.
//! Selection never touches the network; resolving a URL to an endpoint is left
//! to the dispatcher.

use crate::addressable::{AddressStatus, Addressable};
use tracing::trace;

/// Outcome of applying the precedence rule to an [`AddressStatus`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination<'a> {
    /// No address has been published yet.
    NotReady,
    /// Only the scalar `address` is present.
    Single(&'a Addressable),
    /// The `addresses` list, which supersedes any scalar `address`.
    Multiple(&'a [Addressable]),
}

impl<'a> Destination<'a> {
    /// Select the destination advertised by `status`.
    #[must_use]
    pub fn select(status: &'a AddressStatus) -> Self {
        let selected = match (&status.addresses, &status.address) {
            (Some(addresses), _) if !addresses.is_empty() => Destination::Multiple(addresses),
            (_, Some(address)) => Destination::Single(address),
            _ => Destination::NotReady,
        };
        trace!(?selected, "Selected destination");
        selected
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        !matches!(self, Destination::NotReady)
    }

    /// All addresses a consumer may choose from, in advertised order.
    #[must_use]
    pub fn candidates(&self) -> Vec<&'a Addressable> {
        match *self {
            Destination::NotReady => Vec::new(),
            Destination::Single(address) => vec![address],
            Destination::Multiple(addresses) => addresses.iter().collect(),
        }
    }

    /// First candidate, if any.
    #[must_use]
    pub fn primary(&self) -> Option<&'a Addressable> {
        match *self {
            Destination::NotReady => None,
            Destination::Single(address) => Some(address),
            Destination::Multiple(addresses) => addresses.first(),
        }
    }

    /// First candidate with the given `name`.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&'a Addressable> {
        self.candidates()
            .into_iter()
            .find(|address| address.name.as_deref() == Some(name))
    }

    /// First candidate whose URL uses `scheme` (compared case-insensitively).
    #[must_use]
    pub fn by_scheme(&self, scheme: &str) -> Option<&'a Addressable> {
        self.candidates().into_iter().find(|address| {
            address
                .url
                .as_ref()
                .is_some_and(|url| url.scheme().eq_ignore_ascii_case(scheme))
        })
    }
}

// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

// Common test utilities for integration tests

#![allow(dead_code)]

use kube::client::Client;
use serde_json::{json, Value};

/// Get a Kubernetes client or skip the test if not in a cluster
pub async fn get_kube_client_or_skip() -> Option<Client> {
    match Client::try_default().await {
        Ok(client) => Some(client),
        Err(e) => {
            eprintln!("Skipping integration test: not running in Kubernetes cluster: {e}");
            None
        }
    }
}

/// A Knative-style Broker object advertising both address forms
pub fn broker_object() -> Value {
    json!({
        "apiVersion": "eventing.knative.dev/v1",
        "kind": "Broker",
        "metadata": {
            "name": "default",
            "namespace": "events",
            "uid": "6f1c3a52-8e4b-4c4e-9d1e-3f2a1b0c9d8e",
            "labels": {"app": "events"}
        },
        "spec": {"delivery": {"retry": 3}},
        "status": {
            "observedGeneration": 1,
            "conditions": [{"type": "Ready", "status": "True"}],
            "address": {"name": "http", "url": "http://a/"},
            "addresses": [{"name": "https", "url": "https://a/"}]
        }
    })
}

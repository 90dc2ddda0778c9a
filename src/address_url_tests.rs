// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for the URL value type.

#[cfg(test)]
mod tests {
    use crate::address_url::*;
    use crate::errors::UrlError;

    #[test]
    fn test_parse_structured_parts() {
        let url = Url::parse("https://user@broker.example.com:8443/ns/default?x=1#frag").unwrap();

        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host(), Some("broker.example.com"));
        assert_eq!(url.port(), Some(8443));
        assert_eq!(url.path(), "/ns/default");
        assert_eq!(url.query(), Some("x=1"));
        assert_eq!(url.fragment(), Some("frag"));
    }

    #[test]
    fn test_parse_keeps_input_as_written() {
        let url = Url::parse("http://foo.com").unwrap();
        assert_eq!(url.as_str(), "http://foo.com");
        assert_eq!(url.to_string(), "http://foo.com");
        assert_eq!(url.path(), "/");
    }

    #[test]
    fn test_accessors_read_normalized_parts() {
        let url = Url::parse("HTTP://Foo.COM:80/a").unwrap();
        assert_eq!(url.as_str(), "HTTP://Foo.COM:80/a");
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host(), Some("foo.com"));
        assert_eq!(url.port(), None);
        assert_eq!(url.path(), "/a");
    }

    #[test]
    fn test_serde_round_trip_is_byte_identical() {
        for input in [
            "http://foo.com",
            "http://foo.com/",
            "HTTP://Foo.COM:80/a",
            "http://hello.default.svc.cluster.local",
            "https://a/b c?q=1#f",
        ] {
            let json = serde_json::to_string(input).unwrap();
            let url: Url = serde_json::from_str(&json).unwrap();
            assert_eq!(serde_json::to_string(&url).unwrap(), json, "{input}");
        }
    }

    #[test]
    fn test_equality_uses_written_form() {
        let bare = Url::parse("http://foo.com").unwrap();
        let slashed = Url::parse("http://foo.com/").unwrap();
        assert_ne!(bare, slashed);
        assert_eq!(bare.clone().into_inner(), slashed.into_inner());
        assert_eq!(bare, Url::parse("http://foo.com").unwrap());
    }

    #[test]
    fn test_default_port_not_reported() {
        let url = Url::parse("https://foo.com:443/").unwrap();
        assert_eq!(url.port(), None);
    }

    #[test]
    fn test_parse_empty_rejected() {
        assert_eq!(Url::parse(""), Err(UrlError::Empty));
    }

    #[test]
    fn test_parse_relative_rejected() {
        let err = Url::parse("/just/a/path").unwrap_err();
        match err {
            UrlError::Invalid { input, .. } => assert_eq!(input, "/just/a/path"),
            UrlError::Empty => panic!("expected Invalid"),
        }
    }

    #[test]
    fn test_http_constructor() {
        let url = Url::http("foo.com").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host(), Some("foo.com"));
        assert_eq!(url.to_string(), "http://foo.com/");
    }

    #[test]
    fn test_https_constructor() {
        let url = Url::https("foo.com").unwrap();
        assert_eq!(url.as_str(), "https://foo.com/");
    }

    #[test]
    fn test_constructor_rejects_empty_host() {
        assert!(matches!(Url::http(""), Err(UrlError::Invalid { .. })));
    }

    #[test]
    fn test_from_str() {
        let url: Url = "http://a/".parse().unwrap();
        assert_eq!(url.host(), Some("a"));
    }

    #[test]
    fn test_serializes_as_string() {
        let url = Url::parse("http://foo.com/events").unwrap();
        let json = serde_json::to_value(&url).unwrap();
        assert_eq!(json, serde_json::json!("http://foo.com/events"));
    }

    #[test]
    fn test_deserialize_invalid_is_error() {
        let result: Result<Url, _> = serde_json::from_str("\"not a url\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_optional_empty_is_none() {
        #[derive(serde::Deserialize)]
        struct Holder {
            #[serde(default, deserialize_with = "deserialize_optional")]
            url: Option<Url>,
        }

        let holder: Holder = serde_json::from_str(r#"{"url": ""}"#).unwrap();
        assert!(holder.url.is_none());

        let holder: Holder = serde_json::from_str(r#"{"url": null}"#).unwrap();
        assert!(holder.url.is_none());

        let holder: Holder = serde_json::from_str("{}").unwrap();
        assert!(holder.url.is_none());

        let holder: Holder = serde_json::from_str(r#"{"url": "https://a/"}"#).unwrap();
        assert_eq!(holder.url.unwrap().as_str(), "https://a/");
    }

    #[test]
    fn test_json_schema_is_uri_string() {
        let schema = schemars::schema_for!(Url);
        let value = serde_json::to_value(&schema).unwrap();
        assert_eq!(value["type"], "string");
        assert_eq!(value["format"], "uri");
    }

    #[test]
    fn test_into_inner_and_from() {
        let inner = ::url::Url::parse("http://foo.com/").unwrap();
        let url = Url::from(inner.clone());
        let inner_ref: &::url::Url = url.as_ref();
        assert_eq!(inner_ref, &inner);
        assert_eq!(url.into_inner(), inner);
    }
}

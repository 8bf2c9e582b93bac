// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deserializing bounds configuration from JSON option objects.

#![cfg(feature = "serde")]

use understory_pan_zoom::{BoundsConfig, Containment};

#[test]
fn empty_object_gives_defaults() {
    let config: BoundsConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, BoundsConfig::default());
    assert_eq!(config.max_scale(), f64::INFINITY);
}

#[test]
fn option_keys_match_the_js_names() {
    let config: BoundsConfig =
        serde_json::from_str(r#"{ "minScale": 0.5, "maxScale": 8, "contain": "inside" }"#)
            .unwrap();
    assert_eq!(config, BoundsConfig::new(0.5, 8.0, Containment::Inside));
}

#[test]
fn unknown_containment_is_an_error() {
    let parsed = serde_json::from_str::<BoundsConfig>(r#"{ "contain": "around" }"#);
    assert!(parsed.is_err());
}

#[test]
fn containment_serializes_lowercase() {
    let json = serde_json::to_string(&Containment::Outside).unwrap();
    assert_eq!(json, r#""outside""#);
}

#[test]
fn default_config_survives_a_round_trip() {
    let json = serde_json::to_string(&BoundsConfig::default()).unwrap();
    assert_eq!(json, r#"{"minScale":1.0,"contain":"outside"}"#);
    let back: BoundsConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, BoundsConfig::default());

    let bounded = BoundsConfig::new(0.5, 4.0, Containment::None);
    let back: BoundsConfig = serde_json::from_str(&serde_json::to_string(&bounded).unwrap()).unwrap();
    assert_eq!(back, bounded);
}

#[test]
fn null_max_scale_means_unbounded() {
    let config: BoundsConfig = serde_json::from_str(r#"{ "maxScale": null }"#).unwrap();
    assert_eq!(config.max_scale(), f64::INFINITY);
}

#[test]
fn inverted_bounds_are_rejected() {
    let parsed = serde_json::from_str::<BoundsConfig>(r#"{ "minScale": 4, "maxScale": 2 }"#);
    let err = parsed.unwrap_err().to_string();
    assert!(err.contains("greater than maximum scale"), "{err}");
    assert!(serde_json::from_str::<BoundsConfig>(r#"{ "minScale": -1 }"#).is_err());
}

//! Config Tests
//!
//! Tests verify defaults, builder overrides and validation.

use restkv::{Config, RestError};

#[test]
fn test_defaults_are_valid() {
    let config = Config::default();

    assert_eq!(config.listen_addr, "127.0.0.1:8080");
    assert_eq!(config.worker_threads, 8);
    assert_eq!(config.queue_capacity, 1024);
    assert_eq!(config.max_body_size, 1024 * 1024);
    assert!(config.seed_fixtures);
    assert!(config.validate().is_ok());
}

#[test]
fn test_builder_overrides() {
    let config = Config::builder()
        .listen_addr("0.0.0.0:9000")
        .worker_threads(2)
        .queue_capacity(16)
        .seed_fixtures(false)
        .max_body_kb(64)
        .unwrap()
        .build();

    assert_eq!(config.listen_addr, "0.0.0.0:9000");
    assert_eq!(config.worker_threads, 2);
    assert_eq!(config.queue_capacity, 16);
    assert_eq!(config.max_body_size, 64 * 1024);
    assert!(!config.seed_fixtures);
}

#[test]
fn test_max_body_kb_overflow_rejected() {
    let result = Config::builder().max_body_kb(usize::MAX);
    assert!(matches!(result, Err(RestError::Config(_))));

    let largest = usize::MAX / 1024;
    let config = Config::builder().max_body_kb(largest).unwrap().build();
    assert_eq!(config.max_body_size, largest * 1024);
}

#[test]
fn test_validate_rejects_unusable_values() {
    let cases = [
        Config::builder().listen_addr("  ").build(),
        Config::builder().worker_threads(0).build(),
        Config::builder().queue_capacity(0).build(),
    ];

    for config in cases {
        assert!(matches!(config.validate(), Err(RestError::Config(_))));
    }
}

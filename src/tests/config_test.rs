use std::time::Duration;

use clap::Parser;

use crate::config::{Cli, Settings, DEFAULT_API_BASE_URL};

#[test]
fn test_cli_flags_override_defaults() {
    let cli = Cli::try_parse_from([
        "spending-dashboard",
        "--api-base-url",
        "http://finance:8080/api",
        "--poll-secs",
        "5",
        "--timeout-secs",
        "2",
        "--once",
    ])
    .unwrap();
    let settings = Settings::from(&cli);

    assert!(cli.once);
    assert_eq!(settings.api_base_url, "http://finance:8080/api");
    assert_eq!(settings.poll_interval, Duration::from_secs(5));
    assert_eq!(settings.request_timeout, Duration::from_secs(2));
}

#[test]
fn test_zero_poll_interval_rejected() {
    assert!(Cli::try_parse_from(["spending-dashboard", "--poll-secs", "0"]).is_err());
}

#[test]
fn test_settings_default() {
    let s = Settings::default();
    assert_eq!(s.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(s.poll_interval, Duration::from_secs(30));
    assert_eq!(s.request_timeout, Duration::from_secs(10));
}

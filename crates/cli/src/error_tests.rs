// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[test]
fn config_error_display() {
    let err = Error::Config {
        message: "invalid version".into(),
        path: Some(PathBuf::from("hilite.toml")),
    };
    assert!(err.to_string().contains("invalid version"));
}

#[test]
fn invalid_pattern_display() {
    let err = Error::InvalidPattern("unclosed group".into());
    assert!(err.to_string().contains("unclosed group"));
}

#[test]
fn pattern_not_found_names_the_reference() {
    let err = Error::PatternNotFound("emails".into());
    assert_eq!(err.to_string(), "no pattern matching 'emails'");
}

#[parameterized(
    config = { Error::Config { message: "x".into(), path: None }, ExitCode::ConfigError },
    argument = { Error::Argument("x".into()), ExitCode::ConfigError },
    invalid_pattern = { Error::InvalidPattern("x".into()), ExitCode::Invalid },
    not_found = { Error::PatternNotFound("x".into()), ExitCode::Invalid },
    ambiguous = { Error::PatternAmbiguous("x".into(), 2), ExitCode::Invalid },
    internal = { Error::Internal("x".into()), ExitCode::InternalError },
)]
fn exit_code_mapping(err: Error, expected: ExitCode) {
    assert_eq!(ExitCode::from(&err), expected);
}

#[test]
fn exit_code_from_io_error() {
    let err = Error::Io {
        path: PathBuf::from("document.txt"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    assert_eq!(ExitCode::from(&err), ExitCode::InternalError);
}

#[test]
fn document_too_large_reports_sizes() {
    let err = Error::DocumentTooLarge {
        path: PathBuf::from("big.txt"),
        size: 20_000_000,
        max_size: 10_485_760,
    };
    let msg = err.to_string();
    assert!(msg.contains("20000000"));
    assert!(msg.contains("10485760"));
}

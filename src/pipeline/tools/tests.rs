// fyp-build: Game/Server Build Orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;

use super::{resolve, toolchain_failure};
use crate::error::{ProcessError, Stage, ToolchainError};

#[test]
fn test_non_zero_exit_keeps_code() {
    let err = toolchain_failure(
        Stage::Compile,
        "go",
        ProcessError::NonZeroExit {
            command: "go build".to_string(),
            code: 2,
        },
    );
    assert!(matches!(
        err,
        ToolchainError::NonZeroExit { stage: Stage::Compile, code: 2, .. }
    ));
}

#[test]
fn test_other_failures_are_invocation_failures() {
    let err = toolchain_failure(
        Stage::Package,
        "zip",
        ProcessError::Signalled {
            command: "zip".to_string(),
            signal: 9,
        },
    );
    insta::assert_snapshot!(
        err.to_string(),
        @"[package] failed to invoke zip: process 'zip' was terminated by signal 9"
    );
}

#[test]
fn test_resolve_unknown_executable() {
    let err = resolve(Stage::Format, "gofumpt", Path::new("fyp-test-missing-gofumpt")).unwrap_err();
    assert_eq!(err.stage(), Stage::Format);
}

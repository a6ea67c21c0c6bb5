//! Unit tests for deploy's fail-fast ordering: no copy after a failed
//! build, and exit codes surfaced from whichever step failed.

#![allow(clippy::expect_used)]

use aladdinctl::commands::deploy;

use crate::helpers::{BuildExit, PushSpy, quiet_output, test_config};

#[tokio::test]
async fn deploy_never_copies_after_failed_build() {
    let transport = PushSpy::accepting();
    let code = deploy::run(&quiet_output(), &test_config(), &BuildExit(101), &transport)
        .await
        .expect("deploy");

    assert_eq!(code, 101, "cargo's exit code propagates");
    assert_eq!(transport.pushes.get(), 0, "copy must not be attempted");
}

#[tokio::test]
async fn deploy_copies_once_after_successful_build() {
    let transport = PushSpy::accepting();
    let code = deploy::run(&quiet_output(), &test_config(), &BuildExit(0), &transport)
        .await
        .expect("deploy");

    assert_eq!(code, 0);
    assert_eq!(transport.pushes.get(), 1);
}

#[tokio::test]
async fn deploy_surfaces_copy_failure() {
    let transport = PushSpy::failing_with(1);
    let code = deploy::run(&quiet_output(), &test_config(), &BuildExit(0), &transport)
        .await
        .expect("deploy");

    assert_eq!(code, 1);
    assert_eq!(transport.pushes.get(), 1);
}

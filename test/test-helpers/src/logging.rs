// Copyright © 2022 The Radicle Link Contributors
// SPDX-License-Identifier: GPLv3-or-later

use std::env;

use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initialise logging / tracing for a test binary.
///
/// Output goes through the test harness' capture, so it is only shown for
/// failing tests. `RUST_LOG` defaults to `error`; set it to eg.
/// `field_spec=trace` to follow the zip pass. Subsequent calls are no-ops.
pub fn init() {
    if env_logger::builder().is_test(true).try_init().is_ok() {
        let filter = match env::var("RUST_LOG") {
            Ok(directives) => EnvFilter::new(directives),
            Err(_) => EnvFilter::new("error"),
        };

        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .with_test_writer()
            .compact()
            .finish();

        // Another harness may have installed a subscriber already
        let _ = tracing::subscriber::set_global_default(subscriber);
    }
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tracing_subscriber::{EnvFilter, fmt};

/// Installs a `fmt` subscriber for test binaries, filtered by `RUST_LOG` and
/// defaulting to `warn`. Safe to call from every test.
pub fn init_tracing() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
	let _ = fmt().with_env_filter(filter).with_target(false).with_test_writer().try_init();
}

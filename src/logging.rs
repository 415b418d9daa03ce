// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use env_logger::Env;

/// Initialise the global logger. `RUST_LOG` overrides the default level,
/// `-v` on the command line raises it to debug.
pub fn init(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default))
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}

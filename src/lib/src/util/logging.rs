//! Log output for the `pagepatch` binary and the tests
//!
//! Lines read `[LEVEL] 14:03:07.512 api::client::pages get_page ...`: wall
//! clock time, then the module within pagepatch, or just the crate name for
//! dependencies such as `reqwest`.
//!

use env_logger::Env;
use std::io::Write;

/// Crate prefixes stripped from log targets
const OWN_CRATES: [&str; 3] = ["libpagepatch", "pagepatch", "pagepatch_cli"];

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "warn";

/// Initialize `env_logger`, filtered by `RUST_LOG`. Calling it twice is a no-op.
pub fn init_logging() {
    let result = env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} {} {}",
                record.level(),
                chrono::Local::now().format("%H:%M:%S%.3f"),
                short_target(record.target()),
                record.args()
            )
        })
        .try_init();

    if result.is_err() {
        log::trace!("logger already initialized");
    }
}

/// `libpagepatch::api::client::pages` -> `api::client::pages`, `reqwest::connect` -> `reqwest`
pub fn short_target(target: &str) -> &str {
    let (krate, rest) = match target.split_once("::") {
        Some((krate, rest)) => (krate, Some(rest)),
        None => (target, None),
    };

    match rest {
        Some(rest) if OWN_CRATES.contains(&krate) => rest,
        _ => krate,
    }
}

//! # pagestack Core
//!
//! Core library for pagestack - page-stack navigation for mini-program style
//! hosts.
//!
//! A [`Router`] wraps the host's navigation primitives (navigate, redirect,
//! relaunch, switch tab, back), passes parameters between pages through the
//! host key-value store and delivers per-call success/fail/complete hooks.

// Core modules
pub mod config;
pub mod error;
pub mod host;
pub mod page;
pub mod router;
pub mod storage;

// Re-export commonly used types
pub use config::RouterConfig;
pub use error::{Error, Result, RouterError, RouterResult};
pub use host::{NavigationHost, SimulatedHost};
pub use page::{PageDescriptor, PageName, PageRegistry, RawPage};
pub use router::{
    HostCall, NavCallbacks, NavResponse, Navigation, NavigationIntent, Router, RouterState,
    BACK_HOME_DELTA,
};
pub use storage::{FileStore, KeyValueStore, MemoryStore};

/// Current version of the pagestack-core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize tracing on stderr, honouring `RUST_LOG` when it is set.
///
/// Without `RUST_LOG` the level is `debug` when `debug` is true and `warn`
/// otherwise.
pub fn init_tracing_with_debug(debug: bool) {
    let default = if debug { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

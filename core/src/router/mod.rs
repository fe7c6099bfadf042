//! Router module for page navigation and parameter handoff
//!
//! The [`Router`] resolves page names against the registry, hands
//! parameters to the next page through the host key-value store and forwards
//! each navigation to the host primitive that performs it.

pub mod callbacks;
pub mod intent;
pub mod navigation;
pub mod router;

// Re-export commonly used types
pub use callbacks::{NavCallbacks, NavResponse};
pub use intent::{HostCall, NavigationIntent, BACK_HOME_DELTA};
pub use navigation::Navigation;
pub use router::{Router, RouterState};

//! CLI command implementations

pub mod demo;
pub mod pages;
pub mod replay;

pub use demo::demo_command;
pub use pages::pages_command;
pub use replay::replay_command;

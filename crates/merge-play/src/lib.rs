//! Terminal driver for the merge engine: TOML/CLI configuration and a
//! seeded session loop that plays a board through the public engine API.

pub mod config;
pub mod session;

pub use config::Config;
pub use session::{Session, SessionSummary};

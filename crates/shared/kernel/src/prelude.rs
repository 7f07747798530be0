//! Convenience re-exports for downstream crates.

pub use crate::config::{ConfigError, load_config};
pub use crate::server::{ApiState, ApiStateBuilder, ApiStateError};

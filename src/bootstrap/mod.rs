pub mod config;
pub mod tracing;
pub mod wiring;

pub use self::tracing::init_tracing_subscriber;
pub use config::{load_config, resolve_config};
pub use wiring::{wire_services, AppServices, WiringError};

mod contact_config;

pub use contact_config::*;

use std::sync::OnceLock;

static GLOBAL_CONFIG: OnceLock<ContactConfig> = OnceLock::new();

/// Get the global configuration, loaded once on first access
pub fn get_global_config() -> ContactConfig {
    GLOBAL_CONFIG.get_or_init(ContactConfig::load).clone()
}

//! Service traits bridging the panel to the outside world.

mod gateway;

pub use gateway::{run_persist, SettingsGateway, TomlSettingsGateway};

#[cfg(test)]
pub use gateway::MockSettingsGateway;

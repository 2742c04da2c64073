//! Settings persistence gateway
//!
//! The panel's outbound collaborator contract: an asynchronous function
//! accepting the externally-shaped settings and returning success or
//! failure. The panel assumes nothing about the transport behind it.

use std::path::PathBuf;

use posdeck_core::prelude::*;

use crate::config::{save_settings, PersistedSettings};
use crate::message::Message;

/// Asynchronous persistence collaborator for dashboard settings.
///
/// The call either resolves or rejects; there is no intrinsic deadline.
/// A timeout, if desired, is the implementor's responsibility.
#[cfg_attr(test, mockall::automock)]
pub trait SettingsGateway {
    async fn persist(&self, settings: PersistedSettings) -> Result<()>;
}

/// Gateway that writes settings to a TOML file through the locked writer.
#[derive(Debug, Clone)]
pub struct TomlSettingsGateway {
    path: PathBuf,
}

impl TomlSettingsGateway {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl SettingsGateway for TomlSettingsGateway {
    async fn persist(&self, settings: PersistedSettings) -> Result<()> {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || save_settings(&path, &settings))
            .await
            .map_err(|e| Error::persistence(format!("Persist task panicked: {e}")))?
    }
}

/// Run the persistence collaborator and map its outcome to the follow-up
/// message the update loop feeds back into the panel.
pub async fn run_persist<G: SettingsGateway>(
    gateway: &G,
    settings: PersistedSettings,
) -> Message {
    match gateway.persist(settings).await {
        Ok(()) => Message::SaveCompleted,
        Err(e) => Message::SaveFailed {
            reason: e.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_settings;

    #[tokio::test]
    async fn test_toml_gateway_writes_through_locked_writer() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dashboard.toml");
        let gateway = TomlSettingsGateway::new(&path);

        let mut settings = PersistedSettings::new();
        settings.set_visible("stock_alerts", false);
        settings.set_order("general", vec!["stock_alerts".to_string()]);

        gateway.persist(settings.clone()).await.unwrap();
        assert_eq!(load_settings(&path).unwrap(), settings);
    }

    #[tokio::test]
    async fn test_run_persist_maps_success() {
        let mut gateway = MockSettingsGateway::new();
        gateway.expect_persist().times(1).returning(|_| Ok(()));

        let msg = run_persist(&gateway, PersistedSettings::new()).await;
        assert_eq!(msg, Message::SaveCompleted);
    }

    #[tokio::test]
    async fn test_run_persist_maps_failure_with_reason() {
        let mut gateway = MockSettingsGateway::new();
        gateway
            .expect_persist()
            .times(1)
            .returning(|_| Err(Error::persistence("disk full")));

        let msg = run_persist(&gateway, PersistedSettings::new()).await;
        match msg {
            Message::SaveFailed { reason } => assert!(reason.contains("disk full")),
            other => panic!("expected SaveFailed, got {other:?}"),
        }
    }
}

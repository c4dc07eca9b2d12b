use std::time::Duration;

use url::Url;

use crate::core::{
    diseases::{
        parse_base_url,
        DEFAULT_SERVER_URL,
    },
    HealthError,
};

pub const MIN_TIMEOUT_SECS: u64 = 1;
pub const MAX_TIMEOUT_SECS: u64 = 300;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self { base_url: DEFAULT_SERVER_URL.to_string(), timeout_secs: 30 }
    }
}

impl ServerSettings {
    pub fn parsed_base_url(&self) -> Result<Url, HealthError> {
        parse_base_url(&self.base_url)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.clamp(MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SettingsData {
    pub server: ServerSettings,
    /// Reject non-numeric field values before sending.
    pub strict_numeric_input: bool,
    pub dark_mode: bool,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self { server: ServerSettings::default(), strict_numeric_input: true, dark_mode: true }
    }
}

impl SettingsData {
    /// Adopts `incoming`. A changed timeout is handed to `apply_timeout` first and only kept
    /// when that succeeds; otherwise the current timeout stays in effect.
    pub fn merged_with(
        &self,
        mut incoming: SettingsData,
        apply_timeout: impl FnOnce(Duration) -> Result<(), HealthError>,
    ) -> (SettingsData, Option<HealthError>) {
        if incoming.server.timeout() == self.server.timeout() {
            return (incoming, None);
        }

        match apply_timeout(incoming.server.timeout()) {
            Ok(()) => (incoming, None),
            Err(e) => {
                incoming.server.timeout_secs = self.server.timeout_secs;
                (incoming, Some(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_is_clamped() {
        let mut server = ServerSettings::default();
        assert_eq!(server.timeout(), Duration::from_secs(30));

        server.timeout_secs = 0;
        assert_eq!(server.timeout(), Duration::from_secs(MIN_TIMEOUT_SECS));

        server.timeout_secs = 10_000;
        assert_eq!(server.timeout(), Duration::from_secs(MAX_TIMEOUT_SECS));
    }

    #[test]
    fn test_default_base_url_parses() {
        let url = ServerSettings::default().parsed_base_url().unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/");
    }

    #[test]
    fn test_merge_applies_new_timeout() {
        let current = SettingsData::default();
        let mut incoming = current.clone();
        incoming.server.timeout_secs = 60;

        let mut applied = None;
        let (merged, error) = current.merged_with(incoming, |timeout| {
            applied = Some(timeout);
            Ok(())
        });

        assert!(error.is_none());
        assert_eq!(applied, Some(Duration::from_secs(60)));
        assert_eq!(merged.server.timeout_secs, 60);
    }

    #[test]
    fn test_merge_keeps_old_timeout_when_client_rebuild_fails() {
        let current = SettingsData::default();
        let mut incoming = current.clone();
        incoming.server.timeout_secs = 120;
        incoming.server.base_url = "http://10.1.1.1:8000".to_string();

        let (merged, error) = current.merged_with(incoming, |_| {
            Err(HealthError::Custom("HTTP client build failed".to_string()))
        });

        assert!(error.is_some());
        assert_eq!(merged.server.timeout_secs, current.server.timeout_secs);
        assert_eq!(merged.server.base_url, "http://10.1.1.1:8000");
    }

    #[test]
    fn test_merge_skips_rebuild_for_unchanged_timeout() {
        let current = SettingsData::default();
        let mut incoming = current.clone();
        incoming.strict_numeric_input = false;

        let (merged, error) =
            current.merged_with(incoming, |_| panic!("client rebuilt without a timeout change"));

        assert!(error.is_none());
        assert!(!merged.strict_numeric_input);
    }
}

use std::time::{
    Duration,
    Instant,
};

use super::tasks::ServerStatus;

pub type CheckId = u64;

pub const SERVER_CHECK_INTERVAL: Duration = Duration::from_secs(10);

/// Tracks backend health checks. At most one check is outstanding unless forced, and only
/// the most recently issued check may update the status.
#[derive(Debug, Default)]
pub struct ServerMonitor {
    status: Option<ServerStatus>,
    latest: CheckId,
    in_flight: bool,
    last_check: Option<Instant>,
}

impl ServerMonitor {
    pub fn status(&self) -> Option<&ServerStatus> {
        self.status.as_ref()
    }

    /// Returns the id to stamp on a new check, or `None` when no check is due.
    pub fn begin_check(&mut self, now: Instant, force: bool) -> Option<CheckId> {
        if !force {
            if self.in_flight {
                return None;
            }
            if let Some(last_check) = self.last_check {
                if now.duration_since(last_check) < SERVER_CHECK_INTERVAL {
                    return None;
                }
            }
        }

        self.latest += 1;
        self.in_flight = true;
        self.last_check = Some(now);
        Some(self.latest)
    }

    /// Applies the outcome of check `id`. Returns `false` for superseded checks.
    pub fn record(&mut self, id: CheckId, status: ServerStatus) -> bool {
        if id != self.latest {
            log::debug!("Dropping superseded server check #{id}");
            return false;
        }

        let changed = self.status.as_ref().map(|s| s.is_online()) != Some(status.is_online());
        if changed {
            match &status {
                ServerStatus::Online(message) => log::info!("Server online: {message}"),
                ServerStatus::Offline(reason) => log::warn!("Server offline: {reason}"),
            }
        }

        self.status = Some(status);
        self.in_flight = false;
        true
    }

    /// Marks the server offline without a network round trip and supersedes any
    /// outstanding check.
    pub fn set_offline(&mut self, reason: String) {
        self.latest += 1;
        self.in_flight = false;
        self.status = Some(ServerStatus::Offline(reason));
    }

    /// Forgets the current status, e.g. after the server URL changed.
    pub fn reset(&mut self) {
        self.status = None;
    }
}

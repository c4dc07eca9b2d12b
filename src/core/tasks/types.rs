use crate::core::{
    form::RequestId,
    server_monitor::CheckId,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerStatus {
    Online(String),
    Offline(String),
}

impl ServerStatus {
    pub fn is_online(&self) -> bool {
        matches!(self, ServerStatus::Online(_))
    }
}

#[derive(Debug, Clone)]
pub enum TaskResult {
    Prediction { id: RequestId, result: Result<String, String> },
    ServerStatus { id: CheckId, status: ServerStatus },
}

impl TaskResult {
    pub fn task_type(&self) -> &'static str {
        match self {
            TaskResult::Prediction { .. } => "prediction",
            TaskResult::ServerStatus { .. } => "server_status",
        }
    }
}

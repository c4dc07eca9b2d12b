use std::{
    sync::{
        mpsc,
        Arc,
    },
    thread,
    time::Duration,
};

use eframe::egui;
use reqwest::Client;
use tokio::runtime::Runtime;
use url::Url;

use super::{
    ServerStatus,
    TaskResult,
};
use crate::{
    core::{
        form::PredictionRequest,
        http::http_client,
        server_monitor::CheckId,
        HealthError,
    },
    prediction,
};

pub struct TaskManager {
    runtime: Arc<Runtime>,
    client: Client,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
}

impl TaskManager {
    pub fn new(timeout: Duration) -> Result<Self, HealthError> {
        let runtime = Arc::new(Runtime::new()?);
        let client = http_client(timeout)?;

        let (sender, receiver) = mpsc::channel();

        Ok(Self { runtime, client, receiver, sender })
    }

    pub fn rebuild_client(&mut self, timeout: Duration) -> Result<(), HealthError> {
        self.client = http_client(timeout)?;
        log::info!("HTTP client rebuilt with {}s timeout", timeout.as_secs());
        Ok(())
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            log::debug!("Task finished: {}", result.task_type());
            results.push(result);
        }

        results
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Arc<Runtime>, Client) {
        (self.sender.clone(), self.runtime.clone(), self.client.clone())
    }

    pub fn submit_prediction(&self, request: PredictionRequest, ctx: &egui::Context) {
        let (sender, runtime, client) = self.task_context();
        let ctx = ctx.clone();

        log::info!(
            "Sending {} prediction request #{} to {}",
            request.disease.key(),
            request.id,
            request.endpoint
        );

        thread::spawn(move || {
            let result = runtime.block_on(async {
                prediction::request_prediction(&client, &request.endpoint, &request.body)
                    .await
                    .map_err(|e| e.to_string())
            });

            let _ = sender.send(TaskResult::Prediction { id: request.id, result });
            ctx.request_repaint();
        });
    }

    pub fn check_server(&self, id: CheckId, base_url: Url, ctx: &egui::Context) {
        let (sender, runtime, client) = self.task_context();
        let ctx = ctx.clone();

        thread::spawn(move || {
            let status = runtime.block_on(async {
                match prediction::check_server(&client, &base_url).await {
                    Ok(message) => ServerStatus::Online(message),
                    Err(e) => ServerStatus::Offline(e.to_string()),
                }
            });

            let _ = sender.send(TaskResult::ServerStatus { id, status });
            ctx.request_repaint();
        });
    }
}

//! The health view: one fetch per mount, three observable states.

use linnet_api_client::{ApiBody, HealthApi};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

const LOADING: &str = "Loading...";
const UNKNOWN_STATUS: &str = "Unknown";
const UNKNOWN_ERROR: &str = "Unknown error";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HealthState {
    Loading,
    Success(String),
    Failure(String),
}

impl HealthState {
    pub fn is_settled(&self) -> bool {
        !matches!(self, HealthState::Loading)
    }

    /// Text shown after `API Health: `.
    pub fn label(&self) -> String {
        match self {
            HealthState::Loading => LOADING.to_string(),
            HealthState::Success(status) => status.clone(),
            HealthState::Failure(message) => format!("Error: {message}"),
        }
    }
}

/// Calls `GET /health` once and maps the outcome to a settled state.
///
/// Never fails: the error branch and transport failures both become
/// [`HealthState::Failure`].
pub async fn fetch_health<A>(api: &A) -> HealthState
where
    A: HealthApi + ?Sized,
{
    match api.health().await {
        Ok(response) => match response.body {
            ApiBody::Error(detail) => {
                warn!(
                    status = %response.status,
                    error_message = %detail.message,
                    "api health returned an error"
                );
                HealthState::Failure(detail.message)
            }
            ApiBody::Data(payload) => {
                debug!(status = ?payload.status, "api health fetched");
                let status = payload
                    .status
                    .unwrap_or_else(|| UNKNOWN_STATUS.to_string());
                HealthState::Success(status)
            }
        },
        Err(error) => {
            warn!(%error, "api health request failed");
            HealthState::Failure(error.message().unwrap_or(UNKNOWN_ERROR).to_string())
        }
    }
}

/// A mounted health view.
///
/// Mounting spawns the fetch on the current tokio runtime. Dropping or
/// unmounting the view aborts the fetch, so a late result never lands.
#[derive(Debug)]
pub struct HealthView {
    state: watch::Receiver<HealthState>,
    task: Option<JoinHandle<()>>,
}

impl HealthView {
    pub fn mount<A>(api: A) -> Self
    where
        A: HealthApi + 'static,
    {
        let (tx, rx) = watch::channel(HealthState::Loading);
        let task = tokio::spawn(async move {
            let state = fetch_health(&api).await;
            // no receiver left means the view is gone
            let _ = tx.send(state);
        });

        Self {
            state: rx,
            task: Some(task),
        }
    }

    pub fn state(&self) -> HealthState {
        self.state.borrow().clone()
    }

    pub fn render(&self) -> String {
        format!("API Health: {}", self.state.borrow().label())
    }

    /// Waits until the fetch has settled and returns the final state.
    ///
    /// If the fetch task died without reporting, the view stays `Loading`.
    pub async fn settled(&mut self) -> HealthState {
        let settled = match self.state.wait_for(HealthState::is_settled).await {
            Ok(state) => Some(state.clone()),
            Err(_) => None,
        };
        settled.unwrap_or_else(|| self.state())
    }

    pub fn unmount(self) {}
}

impl Drop for HealthView {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use linnet_api_client::{ApiResponse, ClientError, ErrorDetail, HealthPayload, StatusCode};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use tokio::sync::Notify;

    type Outcome = Result<ApiResponse<HealthPayload>, ClientError>;

    struct FakeApi(Outcome);

    #[async_trait]
    impl HealthApi for FakeApi {
        async fn health(&self) -> Outcome {
            self.0.clone()
        }
    }

    /// Holds the response until the gate is opened.
    struct GatedApi {
        gate: Arc<Notify>,
        finished: Arc<AtomicBool>,
        outcome: Outcome,
    }

    #[async_trait]
    impl HealthApi for GatedApi {
        async fn health(&self) -> Outcome {
            self.gate.notified().await;
            self.finished.store(true, Ordering::SeqCst);
            self.outcome.clone()
        }
    }

    struct PanickingApi;

    #[async_trait]
    impl HealthApi for PanickingApi {
        async fn health(&self) -> Outcome {
            panic!("fetch task died");
        }
    }

    fn status(status: Option<&str>) -> Outcome {
        Ok(ApiResponse::data(
            StatusCode::OK,
            HealthPayload {
                status: status.map(str::to_string),
            },
        ))
    }

    fn error_branch(message: &str) -> Outcome {
        Ok(ApiResponse::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorDetail {
                message: message.to_string(),
            },
        ))
    }

    async fn settle(outcome: Outcome) -> String {
        let mut view = HealthView::mount(FakeApi(outcome));
        view.settled().await;
        view.render()
    }

    #[tokio::test]
    async fn renders_status() {
        assert_eq!(settle(status(Some("ok"))).await, "API Health: ok");
    }

    #[tokio::test]
    async fn missing_status_renders_unknown() {
        assert_eq!(settle(status(None)).await, "API Health: Unknown");
    }

    #[tokio::test]
    async fn error_branch_renders_message() {
        assert_eq!(settle(error_branch("boom")).await, "API Health: Error: boom");
    }

    #[tokio::test]
    async fn transport_failure_renders_message() {
        let outcome = Err(ClientError::Transport("network down".into()));
        assert_eq!(settle(outcome).await, "API Health: Error: network down");
    }

    #[tokio::test]
    async fn transport_failure_without_message() {
        let outcome = Err(ClientError::Transport(String::new()));
        assert_eq!(
            settle(outcome).await,
            "API Health: Error: Unknown error"
        );
    }

    #[tokio::test]
    async fn starts_loading_then_settles() {
        let gate = Arc::new(Notify::new());
        let mut view = HealthView::mount(GatedApi {
            gate: gate.clone(),
            finished: Arc::new(AtomicBool::new(false)),
            outcome: status(Some("ok")),
        });

        assert_eq!(view.state(), HealthState::Loading);
        assert_eq!(view.render(), "API Health: Loading...");

        gate.notify_one();
        assert_eq!(view.settled().await, HealthState::Success("ok".into()));
        assert_eq!(view.render(), "API Health: ok");
    }

    #[tokio::test]
    async fn unmount_discards_pending_fetch() {
        let gate = Arc::new(Notify::new());
        let finished = Arc::new(AtomicBool::new(false));
        let view = HealthView::mount(GatedApi {
            gate: gate.clone(),
            finished: finished.clone(),
            outcome: status(Some("ok")),
        });

        tokio::task::yield_now().await;
        view.unmount();
        gate.notify_one();
        tokio::task::yield_now().await;

        assert!(!finished.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn dead_fetch_task_leaves_view_loading() {
        let mut view = HealthView::mount(PanickingApi);
        assert_eq!(view.settled().await, HealthState::Loading);
        assert_eq!(view.render(), "API Health: Loading...");
    }

    #[tokio::test]
    async fn fetch_health_is_usable_without_a_view() {
        let api = FakeApi(error_branch("route not found: /health"));
        assert_eq!(
            fetch_health(&api).await,
            HealthState::Failure("route not found: /health".into())
        );
    }
}

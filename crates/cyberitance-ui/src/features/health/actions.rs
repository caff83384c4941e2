//! Health check request action.
//!
//! # Design
//! - Fetch through [`HealthSource`] so the flow runs against any transport.
//! - Report transitions through a callback; callers decide where state lives.
//! - Overlapping requests are not cancelled or de-duplicated; the last to settle wins.

use crate::features::health::state::HealthEvent;
use async_trait::async_trait;
use cyberitance_api_models::HealthResponse;
use thiserror::Error;

/// Failure while fetching the backend health check.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HealthFetchError {
    /// The request could not complete or its body could not be read.
    #[error("{0}")]
    Transport(String),
    /// The backend answered with a non-success status.
    #[error("Server responded with {0}")]
    Status(u16),
}

/// Anything that can answer a health check request.
#[async_trait(?Send)]
pub trait HealthSource {
    /// Issue one health check request.
    ///
    /// # Errors
    ///
    /// Returns [`HealthFetchError::Status`] for non-2xx responses and
    /// [`HealthFetchError::Transport`] when the request or decode fails.
    async fn fetch_health(&self) -> Result<HealthResponse, HealthFetchError>;
}

/// Run one health check request, emitting `Pending` and then the settled outcome.
///
/// Returns the emitted settlement so callers can log it.
#[allow(clippy::future_not_send)]
pub async fn request_health_check<S, F>(source: &S, apply: F) -> HealthEvent
where
    S: HealthSource + ?Sized,
    F: Fn(HealthEvent),
{
    apply(HealthEvent::Pending);
    let settled = match source.fetch_health().await {
        Ok(payload) => HealthEvent::Fulfilled(payload),
        Err(err) => HealthEvent::Rejected(err.to_string()),
    };
    apply(settled.clone());
    settled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::health::state::{HealthState, apply_health_event};
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;
    use std::rc::Rc;
    use tokio::sync::oneshot;

    type Outcome = Result<HealthResponse, HealthFetchError>;

    /// Answers from a fixed script and counts calls.
    struct Scripted {
        outcomes: RefCell<VecDeque<Outcome>>,
        calls: Cell<usize>,
    }

    impl Scripted {
        fn new(outcomes: Vec<Outcome>) -> Self {
            Self {
                outcomes: RefCell::new(outcomes.into()),
                calls: Cell::new(0),
            }
        }
    }

    #[async_trait(?Send)]
    impl HealthSource for Scripted {
        async fn fetch_health(&self) -> Outcome {
            self.calls.set(self.calls.get() + 1);
            self.outcomes
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(HealthFetchError::Transport("script exhausted".into())))
        }
    }

    /// Holds each request open until the test resolves it.
    struct Deferred {
        pending: RefCell<VecDeque<oneshot::Receiver<Outcome>>>,
    }

    impl Deferred {
        fn with_slots(count: usize) -> (Self, Vec<oneshot::Sender<Outcome>>) {
            let mut senders = Vec::with_capacity(count);
            let mut pending = VecDeque::with_capacity(count);
            for _ in 0..count {
                let (tx, rx) = oneshot::channel();
                senders.push(tx);
                pending.push_back(rx);
            }
            (
                Self {
                    pending: RefCell::new(pending),
                },
                senders,
            )
        }
    }

    #[async_trait(?Send)]
    impl HealthSource for Deferred {
        async fn fetch_health(&self) -> Outcome {
            let rx = self.pending.borrow_mut().pop_front().unwrap();
            rx.await
                .unwrap_or_else(|_| Err(HealthFetchError::Transport("sender dropped".into())))
        }
    }

    fn store() -> (Rc<RefCell<HealthState>>, impl Fn(HealthEvent)) {
        let state = Rc::new(RefCell::new(HealthState::default()));
        let sink = {
            let state = Rc::clone(&state);
            move |event: HealthEvent| apply_health_event(&mut state.borrow_mut(), event)
        };
        (state, sink)
    }

    fn healthy() -> HealthResponse {
        HealthResponse::new("healthy", "running")
    }

    #[tokio::test(flavor = "current_thread")]
    async fn loading_while_request_is_in_flight() {
        let (source, mut senders) = Deferred::with_slots(1);
        let tx = senders.remove(0);
        let (state, sink) = store();
        let probe = {
            let state = Rc::clone(&state);
            async move {
                tokio::task::yield_now().await;
                assert!(state.borrow().is_loading);
                assert!(state.borrow().payload.is_none());
                tx.send(Ok(healthy())).unwrap();
            }
        };
        tokio::join!(request_health_check(&source, sink), probe);
        assert!(!state.borrow().is_loading);
        assert_eq!(state.borrow().payload, Some(healthy()));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn success_sets_payload_without_error() {
        let source = Scripted::new(vec![Ok(healthy())]);
        let (state, sink) = store();
        let settled = request_health_check(&source, sink).await;
        assert_eq!(settled, HealthEvent::Fulfilled(healthy()));
        let state = state.borrow();
        assert_eq!(state.payload, Some(healthy()));
        assert!(state.error_message.is_none());
        assert!(!state.is_loading);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn server_error_surfaces_status_and_keeps_payload() {
        let source = Scripted::new(vec![Ok(healthy()), Err(HealthFetchError::Status(500))]);
        let (state, sink) = store();
        request_health_check(&source, &sink).await;
        request_health_check(&source, &sink).await;
        let state = state.borrow();
        let message = state.error_message.as_deref().unwrap();
        assert!(!message.is_empty());
        assert!(message.contains("500"));
        assert_eq!(state.payload, Some(healthy()));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn transport_error_text_is_preserved() {
        let source = Scripted::new(vec![Err(HealthFetchError::Transport(
            "Network error".into(),
        ))]);
        let (state, sink) = store();
        request_health_check(&source, sink).await;
        let state = state.borrow();
        assert_eq!(state.error_message.as_deref(), Some("Network error"));
        assert!(state.payload.is_none());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn each_invocation_issues_its_own_fetch() {
        let source = Scripted::new(vec![Ok(healthy()), Ok(healthy())]);
        let (_state, sink) = store();
        request_health_check(&source, &sink).await;
        assert_eq!(source.calls.get(), 1);
        request_health_check(&source, &sink).await;
        assert_eq!(source.calls.get(), 2);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn overlapping_requests_last_settled_wins() {
        let (source, mut senders) = Deferred::with_slots(2);
        let second = senders.remove(1);
        let first = senders.remove(0);
        let (state, sink) = store();
        let driver = {
            let state = Rc::clone(&state);
            async move {
                tokio::task::yield_now().await;
                second
                    .send(Ok(HealthResponse::new("healthy", "fresh")))
                    .unwrap();
                while state.borrow().settled < 1 {
                    tokio::task::yield_now().await;
                }
                first
                    .send(Ok(HealthResponse::new("degraded", "stale")))
                    .unwrap();
            }
        };
        tokio::join!(
            request_health_check(&source, &sink),
            request_health_check(&source, &sink),
            driver
        );
        assert_eq!(
            state.borrow().payload,
            Some(HealthResponse::new("degraded", "stale"))
        );
        assert_eq!(state.borrow().settled, 2);
    }

    #[test]
    fn error_display_matches_backend_wording() {
        assert_eq!(
            HealthFetchError::Status(503).to_string(),
            "Server responded with 503"
        );
        assert_eq!(
            HealthFetchError::Transport("Failed to fetch".into()).to_string(),
            "Failed to fetch"
        );
    }
}

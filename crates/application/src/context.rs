use dnsprobe_domain::{CheckError, ResolutionError};
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Deadline and cancellation signal carried through a single check.
///
/// The executor refuses to run without a deadline; every blocking step is
/// raced against both the deadline and the token via [`CheckContext::guard`].
#[derive(Debug, Clone)]
pub struct CheckContext {
    deadline: Option<Instant>,
    cancellation: CancellationToken,
}

impl CheckContext {
    /// A context with no deadline. Checks run under it fail with
    /// `DeadlineNotSet`.
    pub fn background() -> Self {
        Self {
            deadline: None,
            cancellation: CancellationToken::new(),
        }
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
            cancellation: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn require_deadline(&self) -> Result<Instant, CheckError> {
        self.deadline.ok_or(CheckError::DeadlineNotSet)
    }

    /// Time left before the deadline; zero once it has passed.
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancellation.clone()
    }

    pub fn cancel(&self) {
        self.cancellation.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_cancelled()
    }

    /// Run `operation` until it completes, the deadline passes, or the
    /// context is cancelled, whichever happens first.
    ///
    /// `server` only labels the timeout error.
    pub async fn guard<F, T>(&self, server: &str, operation: F) -> Result<T, ResolutionError>
    where
        F: Future<Output = Result<T, ResolutionError>>,
    {
        if self.cancellation.is_cancelled() {
            return Err(ResolutionError::Cancelled);
        }

        match self.deadline {
            Some(deadline) => {
                tokio::select! {
                    biased;
                    _ = self.cancellation.cancelled() => Err(ResolutionError::Cancelled),
                    result = tokio::time::timeout_at(deadline, operation) => {
                        result.unwrap_or_else(|_| {
                            Err(ResolutionError::Timeout {
                                server: server.to_string(),
                            })
                        })
                    }
                }
            }
            None => {
                tokio::select! {
                    biased;
                    _ = self.cancellation.cancelled() => Err(ResolutionError::Cancelled),
                    result = operation => result,
                }
            }
        }
    }
}

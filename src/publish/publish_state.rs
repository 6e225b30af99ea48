//! UI-side bookkeeping for the publish worker
//!
//! Holds the channel ends to the worker thread and the one request that may be
//! in flight. Outcomes are drained with `try_recv()` so the event loop never
//! blocks.

use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use thiserror::Error;
use tokio_util::sync::CancellationToken;

use super::publish_client::{PublishError, PublishResponse};
use super::publish_form::PublishRequest;
use super::worker::{PublishJob, PublishOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("A post is already being published")]
    Busy,

    #[error("Publish worker is not running")]
    Disconnected,
}

#[derive(Debug)]
struct InFlight {
    request_id: u64,
    cancel_token: CancellationToken,
}

#[derive(Debug, Default)]
pub struct PublishState {
    job_tx: Option<Sender<PublishJob>>,
    outcome_rx: Option<Receiver<PublishOutcome>>,
    in_flight: Option<InFlight>,
    request_id: u64,
}

impl PublishState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the channel handles for communication with the worker thread
    pub fn set_channels(&mut self, job_tx: Sender<PublishJob>, outcome_rx: Receiver<PublishOutcome>) {
        self.job_tx = Some(job_tx);
        self.outcome_rx = Some(outcome_rx);
    }

    pub fn is_pending(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Hand `request` to the worker; returns its request id
    pub fn submit(&mut self, request: PublishRequest) -> Result<u64, SubmitError> {
        if self.in_flight.is_some() {
            return Err(SubmitError::Busy);
        }
        let Some(tx) = &self.job_tx else {
            return Err(SubmitError::Disconnected);
        };

        let request_id = self.request_id.wrapping_add(1);
        let cancel_token = CancellationToken::new();
        let job = PublishJob {
            request_id,
            request,
            cancel_token: cancel_token.clone(),
        };

        if tx.send(job).is_err() {
            log::error!("Publish worker channel closed");
            self.job_tx = None;
            return Err(SubmitError::Disconnected);
        }

        self.request_id = request_id;
        self.in_flight = Some(InFlight {
            request_id,
            cancel_token,
        });
        log::debug!("Submitted publish request {}", request_id);
        Ok(request_id)
    }

    /// Drain finished requests
    ///
    /// Returns the result of the in-flight request once it arrives. Outcomes
    /// for older requests are dropped. If the worker goes away while a request
    /// is pending, that request fails as a network error.
    pub fn poll(&mut self) -> Option<Result<PublishResponse, PublishError>> {
        let rx = self.outcome_rx.as_ref()?;

        let mut finished = None;
        let mut disconnected = false;
        loop {
            match rx.try_recv() {
                Ok(outcome) => {
                    let current = self.in_flight.as_ref().map(|f| f.request_id);
                    if current == Some(outcome.request_id) {
                        self.in_flight = None;
                        finished = Some(outcome.result);
                    } else {
                        log::debug!("Dropping stale publish outcome {}", outcome.request_id);
                    }
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    disconnected = true;
                    break;
                }
            }
        }

        if disconnected {
            self.outcome_rx = None;
            self.job_tx = None;
            if finished.is_none() && self.in_flight.take().is_some() {
                finished = Some(Err(PublishError::Network(
                    "publish worker disconnected".to_string(),
                )));
            }
        }

        finished
    }

    /// Cancel the in-flight request; returns true if there was one
    pub fn cancel(&mut self) -> bool {
        match self.in_flight.take() {
            Some(in_flight) => {
                log::debug!("Cancelling publish request {}", in_flight.request_id);
                in_flight.cancel_token.cancel();
                true
            }
            None => false,
        }
    }
}

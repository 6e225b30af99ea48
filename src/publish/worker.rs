//! Publish worker thread
//!
//! Runs publish requests on a background thread so the UI never blocks on the
//! network. Jobs arrive over one channel and outcomes go back over another;
//! the thread owns a single-threaded tokio runtime for the async HTTP client.

use std::sync::mpsc::{Receiver, Sender};
use std::thread::JoinHandle;

use tokio_util::sync::CancellationToken;

use super::publish_client::{PublishClient, PublishError, PublishResponse};
use super::publish_form::PublishRequest;

/// Work sent to the worker thread
#[derive(Debug)]
pub struct PublishJob {
    pub request_id: u64,
    pub request: PublishRequest,
    pub cancel_token: CancellationToken,
}

/// Result of one job, sent back to the UI thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishOutcome {
    pub request_id: u64,
    pub result: Result<PublishResponse, PublishError>,
}

/// Spawn the publish worker thread
///
/// The thread exits when the job channel is closed.
pub fn spawn_worker(
    client: PublishClient,
    job_rx: Receiver<PublishJob>,
    outcome_tx: Sender<PublishOutcome>,
) -> JoinHandle<()> {
    std::thread::spawn(move || {
        let rt = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(rt) => rt,
            Err(e) => {
                log::error!("Publish worker could not start a runtime: {}", e);
                reject_all(job_rx, outcome_tx, &e.to_string());
                return;
            }
        };

        rt.block_on(worker_loop(client, job_rx, outcome_tx));
        log::debug!("Publish worker stopped");
    })
}

/// Process jobs until the channel is closed
///
/// Blocking `recv()` is fine here since this is a dedicated thread.
async fn worker_loop(
    client: PublishClient,
    job_rx: Receiver<PublishJob>,
    outcome_tx: Sender<PublishOutcome>,
) {
    while let Ok(job) = job_rx.recv() {
        log::debug!("Publishing request {} to {}", job.request_id, client.endpoint());
        let result = client.publish(&job.request, &job.cancel_token).await;

        if let Err(e) = &result {
            log::warn!("Publish request {} failed: {}", job.request_id, e);
        }

        let outcome = PublishOutcome {
            request_id: job.request_id,
            result,
        };
        if outcome_tx.send(outcome).is_err() {
            break;
        }
    }
}

fn reject_all(job_rx: Receiver<PublishJob>, outcome_tx: Sender<PublishOutcome>, reason: &str) {
    while let Ok(job) = job_rx.recv() {
        let outcome = PublishOutcome {
            request_id: job.request_id,
            result: Err(PublishError::Network(reason.to_string())),
        };
        if outcome_tx.send(outcome).is_err() {
            break;
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;

// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Runs a fixed batch of requests concurrently.

use std::future::Future;
use tokio::sync::mpsc;

/// The error returned when at least one request in a batch fails.
///
/// The successful results of the batch are discarded.
#[derive(thiserror::Error, Debug)]
#[error("encountered {} errors during {operation}", .errors.len())]
pub struct BatchError {
    operation: String,
    errors: Vec<anyhow::Error>,
}

impl BatchError {
    /// The errors reported by the failed requests, in no particular order.
    pub fn errors(&self) -> &[anyhow::Error] {
        &self.errors
    }
}

/// Runs each request in its own task and waits for all of them.
///
/// The results flow through two channels, one for successes and one for
/// failures, each sized to hold the full batch. The channels are drained
/// only after every task has finished. If any request fails the function
/// returns all the errors and no results.
///
/// There are no timeouts, a request that never completes blocks the batch.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// use merchant_samples::batch::run_batch;
/// let requests = (0..3).map(|i| async move { Ok::<_, anyhow::Error>(i * 2) });
/// let mut results = run_batch("test", requests).await?;
/// results.sort();
/// assert_eq!(results, vec![0, 2, 4]);
/// # Ok::<(), merchant_samples::batch::BatchError>(())
/// # });
/// ```
pub async fn run_batch<I, F, T>(operation: &str, requests: I) -> Result<Vec<T>, BatchError>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = anyhow::Result<T>> + Send + 'static,
    T: Send + 'static,
{
    let requests = requests.into_iter().collect::<Vec<_>>();
    let capacity = requests.len().max(1);
    let (results_tx, mut results_rx) = mpsc::channel::<T>(capacity);
    let (errors_tx, mut errors_rx) = mpsc::channel::<anyhow::Error>(capacity);

    let tasks = requests
        .into_iter()
        .map(|request| {
            let results_tx = results_tx.clone();
            let errors_tx = errors_tx.clone();
            tokio::spawn(async move {
                // The receivers outlive every task, sends cannot fail.
                match request.await {
                    Ok(r) => {
                        let _ = results_tx.send(r).await;
                    }
                    Err(e) => {
                        let _ = errors_tx.send(e).await;
                    }
                }
            })
        })
        .collect::<Vec<_>>();
    drop(results_tx);

    for joined in futures::future::join_all(tasks).await {
        if let Err(e) = joined {
            tracing::error!("cannot join batch task: {e}");
            let _ = errors_tx.send(anyhow::Error::new(e)).await;
        }
    }
    drop(errors_tx);

    let mut errors = Vec::new();
    while let Some(e) = errors_rx.recv().await {
        errors.push(e);
    }
    if !errors.is_empty() {
        return Err(BatchError {
            operation: operation.to_string(),
            errors,
        });
    }
    let mut results = Vec::new();
    while let Some(r) = results_rx.recv().await {
        results.push(r);
    }
    Ok(results)
}

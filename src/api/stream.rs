//! Paginated item streaming
//!
//! A background task walks the pages of a list endpoint one request at a
//! time and republishes the items through a bounded queue. The consumer sees
//! a single ordered [`Stream`] of items; dropping it stops the worker.

use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;
use log::{debug, warn};
use serde_json::Value;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use crate::api::client::RtmsClient;
use crate::api::pagination::{PaginationScheme, PaginationStyle};
use crate::error::{Result, RtmsError};

/// Ordered, single-consumer sequence of items reconstructed across pages
///
/// Yields `Ok(item)` for every item in server order and at most one `Err`,
/// after which the stream is finished. Items still queued when an error is
/// reported are discarded.
pub struct ItemStream {
    items: mpsc::Receiver<Value>,
    error: Option<oneshot::Receiver<RtmsError>>,
    worker: JoinHandle<()>,
    finished: bool,
}

impl ItemStream {
    fn finish(&mut self) {
        self.finished = true;
        self.error = None;
        self.items.close();
    }
}

impl Stream for ItemStream {
    type Item = Result<Value>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        if this.finished {
            return Poll::Ready(None);
        }

        if let Some(error) = this.error.as_mut() {
            match Pin::new(error).poll(cx) {
                Poll::Ready(Ok(err)) => {
                    this.finish();
                    return Poll::Ready(Some(Err(err)));
                }
                // Worker ended without reporting anything
                Poll::Ready(Err(_)) => this.error = None,
                Poll::Pending => {}
            }
        }

        match this.items.poll_recv(cx) {
            Poll::Ready(Some(item)) => Poll::Ready(Some(Ok(item))),
            Poll::Ready(None) => {
                // The error is sent before the item queue closes
                let late_error = this.error.take().and_then(|mut rx| rx.try_recv().ok());
                this.finish();
                Poll::Ready(late_error.map(Err))
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

impl Drop for ItemStream {
    fn drop(&mut self) {
        self.worker.abort();
    }
}

/// How the page loop ended when it did not fail
#[derive(Debug, PartialEq, Eq)]
enum PumpOutcome {
    Exhausted,
    Cancelled,
}

impl RtmsClient {
    /// Stream every item of a paged list endpoint
    ///
    /// `params` is copied; later changes by the caller are not seen by the
    /// worker. Pages are requested strictly one after another. Must be called
    /// from within a Tokio runtime.
    pub fn stream_items(
        &self,
        endpoint: &str,
        params: &BTreeMap<String, String>,
        page_size: usize,
    ) -> Result<ItemStream> {
        if page_size == 0 {
            return Err(RtmsError::Config(
                "page size must be greater than zero".to_string(),
            ));
        }

        let (item_tx, item_rx) = mpsc::channel(self.stream_buffer());
        let (error_tx, error_rx) = oneshot::channel();

        let client = self.clone();
        let endpoint = endpoint.to_string();
        let params: Vec<(String, String)> = params
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        let worker = tokio::spawn(async move {
            match pump_pages(&client, &endpoint, &params, page_size, &item_tx).await {
                Ok(PumpOutcome::Exhausted) => debug!("Stream of {} exhausted", endpoint),
                Ok(PumpOutcome::Cancelled) => {
                    debug!("Consumer of {} went away, stopping", endpoint)
                }
                Err(e) => {
                    debug!("Stream of {} failed: {}", endpoint, e);
                    // Nobody may be listening any more
                    let _ = error_tx.send(e);
                }
            }
        });

        Ok(ItemStream {
            items: item_rx,
            error: Some(error_rx),
            worker,
            finished: false,
        })
    }
}

/// Request pages until the advertised total is reached
async fn pump_pages(
    client: &RtmsClient,
    endpoint: &str,
    params: &[(String, String)],
    page_size: usize,
    items: &mpsc::Sender<Value>,
) -> Result<PumpOutcome> {
    let mut offset = 0usize;
    let mut empty_pages = 0u32;

    loop {
        debug!(
            "Fetching {} page {} (offset {}, size {})",
            endpoint,
            offset / page_size + 1,
            offset,
            page_size
        );

        let page = tokio::select! {
            biased;
            _ = items.closed() => return Ok(PumpOutcome::Cancelled),
            page = client.fetch_page(endpoint, params, offset, page_size) => page?,
        };

        let received = page.items.len();
        let is_last = page.is_last();
        let total = page.total_count;

        debug!(
            "Page returned {} items (offset {}, total {})",
            received, offset, total
        );

        for item in page.items {
            if items.send(item).await.is_err() {
                return Ok(PumpOutcome::Cancelled);
            }
        }

        if is_last {
            return Ok(PumpOutcome::Exhausted);
        }

        if page_may_repeat(client.scheme(), received, page_size) {
            warn!(
                "{} returned {} of {} requested items at offset {} (total {}); \
                 the next page number may repeat items, consider --pagination-style offset",
                endpoint, received, page_size, offset, total
            );
        }

        if received == 0 {
            empty_pages += 1;
            if empty_pages >= client.max_empty_pages() {
                return Err(RtmsError::StalledPagination {
                    offset,
                    total,
                    empty_pages,
                });
            }
        } else {
            empty_pages = 0;
        }

        offset += received;
    }
}

/// A short, non-final page in page-number style means the server capped the
/// page size, so `offset / page_size + 1` lands on a page already read
fn page_may_repeat(scheme: &PaginationScheme, received: usize, page_size: usize) -> bool {
    scheme.style == PaginationStyle::PageNumber && received > 0 && received < page_size
}

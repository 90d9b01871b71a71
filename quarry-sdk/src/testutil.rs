use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use quarry_types::error::Error;

use crate::context::Context;
use crate::transport::{RequestOptions, Transport};

/// In-memory transport that records every request and replays a canned
/// response body.
pub(crate) struct MockTransport {
    body: Bytes,
    fail: bool,
    hang: bool,
    calls: AtomicUsize,
    requests: Mutex<Vec<RequestOptions>>,
}

impl MockTransport {
    pub(crate) fn replying(body: &str) -> Arc<Self> {
        Arc::new(Self {
            body: Bytes::copy_from_slice(body.as_bytes()),
            fail: false,
            hang: false,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Fails every request with a transport error.
    pub(crate) fn failing() -> Arc<Self> {
        Arc::new(Self {
            body: Bytes::new(),
            fail: true,
            hang: false,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Never resolves, so callers can exercise cancellation.
    pub(crate) fn hanging() -> Arc<Self> {
        Arc::new(Self {
            body: Bytes::new(),
            fail: false,
            hang: true,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn last_request(&self) -> Option<RequestOptions> {
        self.requests
            .lock()
            .ok()
            .and_then(|requests| requests.last().cloned())
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn perform(&self, ctx: &Context, opts: RequestOptions) -> Result<Bytes, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(opts);
        }
        if self.hang {
            ctx.cancelled().await;
            return Err(Error::Cancelled);
        }
        if self.fail {
            return Err(Error::Transport(anyhow::anyhow!("connection refused")));
        }
        Ok(self.body.clone())
    }
}

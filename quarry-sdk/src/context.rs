use tokio::sync::watch;

/// Cancellation handle passed to every `execute` call.
///
/// A background context never cancels. A cancellable context resolves
/// [`Context::cancelled`] once its [`CancelHandle`] fires, at which point the
/// in-flight request is abandoned.
#[derive(Debug, Clone)]
pub struct Context {
    rx: Option<watch::Receiver<bool>>,
}

impl Context {
    #[must_use]
    pub fn background() -> Self {
        Self { rx: None }
    }

    #[must_use]
    pub fn cancellable() -> (Self, CancelHandle) {
        let (tx, rx) = watch::channel(false);
        (Self { rx: Some(rx) }, CancelHandle { tx })
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.rx.as_ref().is_some_and(|rx| *rx.borrow())
    }

    /// Resolves when the context is cancelled. Pends forever for a background
    /// context, or when the handle was dropped without firing.
    pub async fn cancelled(&self) {
        let Some(mut rx) = self.rx.clone() else {
            return std::future::pending::<()>().await;
        };
        loop {
            if *rx.borrow() {
                return;
            }
            if rx.changed().await.is_err() {
                return std::future::pending::<()>().await;
            }
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::background()
    }
}

#[derive(Debug)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        let _ = self.tx.send(true);
    }
}

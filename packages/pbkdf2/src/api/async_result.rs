//! Futures resolving to a derived key
//!
//! A derivation costs `iterations` PRF calls per output block, which at the
//! default 600 000 iterations is hundreds of milliseconds of pure CPU. It
//! therefore runs on tokio's blocking pool and these futures only wait on a
//! oneshot reply. The reply is either a finished key or an error; a partial
//! key never crosses the channel.

use crate::{DerivedKey, Pbkdf2Error, Result};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;
use tracing::error;

const WORKER_DROPPED: &str = "PBKDF2 derivation task dropped before replying";

fn worker_dropped() -> Pbkdf2Error {
    error!("{WORKER_DROPPED}");
    Pbkdf2Error::internal(WORKER_DROPPED)
}

/// Pending PBKDF2 derivation
pub struct AsyncDerivedKey {
    receiver: oneshot::Receiver<Result<DerivedKey>>,
}

/// Pending derivation whose result is passed through a handler
pub struct AsyncDerivedKeyWithHandler<F> {
    receiver: oneshot::Receiver<Result<DerivedKey>>,
    handler: Option<F>,
    completed: bool,
}

/// Pending derivation with an error transformation
pub struct AsyncDerivedKeyWithError<E> {
    receiver: oneshot::Receiver<Result<DerivedKey>>,
    error_handler: E,
}

impl AsyncDerivedKey {
    pub(crate) fn new(receiver: oneshot::Receiver<Result<DerivedKey>>) -> Self {
        Self { receiver }
    }

    /// An already-resolved derivation
    #[must_use]
    pub fn ready(result: Result<DerivedKey>) -> Self {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(result);
        Self { receiver: rx }
    }

    /// An already-failed derivation
    #[must_use]
    pub fn error(error: Pbkdf2Error) -> Self {
        Self::ready(Err(error))
    }

    /// Resolve through `handler` instead of returning the `Result`
    pub fn on_result<F, T>(self, handler: F) -> AsyncDerivedKeyWithHandler<F>
    where
        F: FnOnce(Result<DerivedKey>) -> T,
    {
        AsyncDerivedKeyWithHandler {
            receiver: self.receiver,
            handler: Some(handler),
            completed: false,
        }
    }

    /// Map any error through `handler`; successes pass unchanged
    pub fn on_error<E>(self, handler: E) -> AsyncDerivedKeyWithError<E>
    where
        E: Fn(Pbkdf2Error) -> Pbkdf2Error,
    {
        AsyncDerivedKeyWithError {
            receiver: self.receiver,
            error_handler: handler,
        }
    }
}

impl Future for AsyncDerivedKey {
    type Output = Result<DerivedKey>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.receiver).poll(cx) {
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            Poll::Ready(Err(_)) => Poll::Ready(Err(worker_dropped())),
            Poll::Pending => Poll::Pending,
        }
    }
}

impl<F, T> Future for AsyncDerivedKeyWithHandler<F>
where
    F: FnOnce(Result<DerivedKey>) -> T + Unpin,
{
    type Output = T;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();

        // Stay pending once the handler has run
        if this.completed {
            return Poll::Pending;
        }

        let result = match Pin::new(&mut this.receiver).poll(cx) {
            Poll::Ready(Ok(result)) => result,
            Poll::Ready(Err(_)) => Err(worker_dropped()),
            Poll::Pending => return Poll::Pending,
        };

        match this.handler.take() {
            Some(handler) => {
                this.completed = true;
                Poll::Ready(handler(result))
            }
            None => Poll::Pending,
        }
    }
}

impl<E> Future for AsyncDerivedKeyWithError<E>
where
    E: Fn(Pbkdf2Error) -> Pbkdf2Error + Unpin,
{
    type Output = Result<DerivedKey>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        match Pin::new(&mut this.receiver).poll(cx) {
            Poll::Ready(Ok(Ok(key))) => Poll::Ready(Ok(key)),
            Poll::Ready(Ok(Err(e))) => Poll::Ready(Err((this.error_handler)(e))),
            Poll::Ready(Err(_)) => Poll::Ready(Err((this.error_handler)(worker_dropped()))),
            Poll::Pending => Poll::Pending,
        }
    }
}

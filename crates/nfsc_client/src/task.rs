//! Operation tasks: blocking round trips bridged onto the async caller.

use std::sync::{Arc, Mutex, PoisonError};

use nfsc_types::nfs3::Nfs3Result;

use crate::dispatch::{RpcDispatch, TransportStatus};
use crate::error::{OpError, ValidationError};

/// Per-client shared state: the dispatch engine plus the single-flight guard
/// that serializes blocking calls on its handle.
pub(crate) struct ClientInner<D> {
    pub(crate) dispatch: D,
    flight: Mutex<()>,
}

impl<D: RpcDispatch> ClientInner<D> {
    pub(crate) fn new(dispatch: D) -> Self {
        Self {
            dispatch,
            flight: Mutex::new(()),
        }
    }

    /// Runs one blocking round trip while holding the single-flight guard.
    pub(crate) fn round_trip<R>(&self, call: impl FnOnce(&D) -> R) -> R {
        let _flight = self.flight.lock().unwrap_or_else(PoisonError::into_inner);
        call(&self.dispatch)
    }
}

/// Lifecycle of one operation.
///
/// Construction validates arguments: `Invalid` skips execution entirely but
/// the task still travels the completion path. The worker thread moves
/// `Ready` to `Done`; the submitting task then consumes the outcome, so
/// completion is delivered exactly once and no task re-enters execution.
pub(crate) enum Phase<A, T> {
    Invalid(ValidationError),
    Ready(A),
    Done(Result<T, OpError>),
}

impl<A, T> Phase<A, T> {
    /// Takes the request arguments at the start of execution. The defensive
    /// `Unknown` outcome is left in place until the call overwrites it.
    pub(crate) fn begin(&mut self) -> Option<A> {
        if matches!(self, Self::Invalid(_)) {
            return None;
        }
        match std::mem::replace(self, Self::Done(Err(OpError::Unknown))) {
            Self::Ready(args) => Some(args),
            done => {
                *self = done;
                None
            }
        }
    }

    pub(crate) fn into_outcome(self) -> Result<T, OpError> {
        match self {
            Self::Invalid(e) => Err(OpError::Validation(e)),
            Self::Done(outcome) => outcome,
            // execute never ran; nothing better to report
            Self::Ready(_) => Err(OpError::Unknown),
        }
    }
}

/// Classifies one round trip: transport status first, then the NFS status.
/// On a protocol failure the partial resfail body is discarded; only the
/// classification is surfaced.
pub(crate) fn classify<T, E>(
    reply: Result<Nfs3Result<T, E>, TransportStatus>,
) -> Result<T, OpError> {
    match reply {
        Err(status) => Err(OpError::Transport(status)),
        Ok(Nfs3Result::Err((status, _))) => Err(OpError::Protocol(status)),
        Ok(Nfs3Result::Ok(resok)) => Ok(resok),
    }
}

/// One NFS operation. Owns its arguments and, after execution, its response
/// for the rest of its lifetime.
pub(crate) trait RpcTask<D: RpcDispatch>: Send + 'static {
    type Output: Send + 'static;

    /// Blocking body; runs on a worker thread, never on the caller's.
    fn execute(&mut self, inner: &ClientInner<D>);

    /// Produces the caller-visible result. Consumes the task.
    fn finish(self) -> Result<Self::Output, OpError>;
}

/// Runs `execute` on the runtime's blocking pool, then delivers completion
/// on the submitting task once the body has fully finished.
///
/// A started round trip always runs to completion; dropping the returned
/// future does not abort the blocking call. A worker that dies surfaces as
/// the defensive `Unknown` outcome.
pub(crate) async fn submit<D, T>(inner: Arc<ClientInner<D>>, mut task: T) -> Result<T::Output, OpError>
where
    D: RpcDispatch,
    T: RpcTask<D>,
{
    let task = tokio::task::spawn_blocking(move || {
        task.execute(&inner);
        task
    })
    .await
    .map_err(|join_err| {
        tracing::warn!("worker thread failed: {join_err}");
        OpError::Unknown
    })?;
    task.finish()
}

//! Asynchronous operation surface.

use std::sync::Arc;

use crate::dispatch::RpcDispatch;
use crate::error::OpError;
use crate::readdir::{ReadDir3Task, ReadDirListing};
use crate::rename::Rename3Task;
use crate::task::{self, ClientInner};

/// Asynchronous NFSv3 client.
///
/// Wraps a blocking [`RpcDispatch`] engine. Each operation runs as one
/// blocking round trip on the runtime's blocking pool; the submitting task
/// is suspended, never blocked, and receives exactly one completion after
/// the round trip has fully finished. Round trips on one client are
/// serialized, so the engine never sees concurrent calls on its handle.
///
/// No operation is retried, and none can be canceled once its round trip
/// has started; timeouts belong to the dispatch engine. Completions of
/// distinct in-flight operations may arrive in any order, so callers that
/// need read-after-rename consistency must await the rename first.
pub struct Nfs3Client<D> {
    inner: Arc<ClientInner<D>>,
}

impl<D: RpcDispatch> Nfs3Client<D> {
    pub fn new(dispatch: D) -> Self {
        Self {
            inner: Arc::new(ClientInner::new(dispatch)),
        }
    }

    /// Reads one page of the directory identified by `dir`.
    ///
    /// `cookie` and `cookieverf` resume a listing: pass `None` for the first
    /// page, thereafter the tokens most recently returned by the server.
    /// Wrong-length token buffers fail validation without any call being
    /// issued.
    pub async fn readdir3(
        &self,
        dir: &[u8],
        cookie: Option<&[u8]>,
        cookieverf: Option<&[u8]>,
        count: u32,
    ) -> Result<ReadDirListing, OpError> {
        let task = ReadDir3Task::new(dir, cookie, cookieverf, count);
        task::submit(Arc::clone(&self.inner), task).await
    }

    /// Renames `from_name` in `from_dir` to `to_name` in `to_dir`.
    ///
    /// The server guarantees the rename is atomic; the client relays the
    /// single pass/fail outcome. Empty names are rejected without any call
    /// being issued.
    pub async fn rename3(
        &self,
        from_dir: &[u8],
        from_name: &str,
        to_dir: &[u8],
        to_name: &str,
    ) -> Result<(), OpError> {
        let task = Rename3Task::new(from_dir, from_name, to_dir, to_name)?;
        task::submit(Arc::clone(&self.inner), task).await
    }
}

impl<D> Clone for Nfs3Client<D> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

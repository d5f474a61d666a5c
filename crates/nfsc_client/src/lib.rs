//! Asynchronous NFSv3 client driving a blocking ONC RPC dispatch engine.
//!
//! The dispatch engine is a collaborator implementing [`RpcDispatch`]: one
//! blocking method per NFS procedure. Each operation submitted through
//! [`Nfs3Client`] runs its round trip on the runtime's blocking pool and
//! delivers exactly one completion back to the submitting task.

pub(crate) mod client;
pub mod dispatch;
pub mod error;
pub(crate) mod readdir;
pub(crate) mod rename;
pub(crate) mod task;
pub mod token;

pub use client::Nfs3Client;
pub use dispatch::{RpcDispatch, TransportStatus};
pub use error::{OpError, ValidationError};
pub use readdir::{DirEntry, ReadDirListing};

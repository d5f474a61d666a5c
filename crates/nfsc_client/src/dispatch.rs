//! The blocking ONC RPC dispatch collaborator.

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use nfsc_types::nfs3::{READDIR3args, READDIR3res, RENAME3args, RENAME3res};

/// Dispatch handle for a bound NFSv3 connection.
///
/// One method per NFS procedure. Each call performs a full RPC round trip
/// and blocks the calling thread until the reply arrives or the transport
/// gives up; wire encoding, XIDs and transport-level retries all live inside
/// the engine. The client never assumes concurrent calls on one handle are
/// safe and serializes round trips per client.
///
/// The mount handshake is a precondition handled elsewhere; [`is_mounted`]
/// only reports its current state and may change between calls.
///
/// [`is_mounted`]: RpcDispatch::is_mounted
pub trait RpcDispatch: Send + Sync + 'static {
    fn is_mounted(&self) -> bool;

    /// `NFSPROC3_READDIR` (procedure 16).
    fn readdir3(&self, args: &READDIR3args) -> Result<READDIR3res, TransportStatus>;

    /// `NFSPROC3_RENAME` (procedure 14).
    fn rename3(&self, args: &RENAME3args) -> Result<RENAME3res, TransportStatus>;
}

impl<D: RpcDispatch> RpcDispatch for Arc<D> {
    fn is_mounted(&self) -> bool {
        (**self).is_mounted()
    }

    fn readdir3(&self, args: &READDIR3args) -> Result<READDIR3res, TransportStatus> {
        (**self).readdir3(args)
    }

    fn rename3(&self, args: &RENAME3args) -> Result<RENAME3res, TransportStatus> {
        (**self).rename3(args)
    }
}

/// Failure of the RPC round trip itself, reported before any NFS status
/// exists.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TransportStatus {
    CantSend,
    CantRecv,
    TimedOut,
    VersionMismatch,
    AuthError,
    ProgUnavail,
    ProgMismatch,
    ProcUnavail,
    GarbageArgs,
    SystemErr,
    Interrupted,
    Failed,
}

impl fmt::Display for TransportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CantSend => write!(f, "Unable to send request"),
            Self::CantRecv => write!(f, "Unable to receive reply"),
            Self::TimedOut => write!(f, "Call timed out"),
            Self::VersionMismatch => write!(f, "RPC version mismatch"),
            Self::AuthError => write!(f, "Authentication error"),
            Self::ProgUnavail => write!(f, "Program unavailable"),
            Self::ProgMismatch => write!(f, "Program version mismatch"),
            Self::ProcUnavail => write!(f, "Procedure unavailable"),
            Self::GarbageArgs => write!(f, "Garbage arguments"),
            Self::SystemErr => write!(f, "System error"),
            Self::Interrupted => write!(f, "Call interrupted"),
            Self::Failed => write!(f, "Call failed"),
        }
    }
}

impl StdError for TransportStatus {}

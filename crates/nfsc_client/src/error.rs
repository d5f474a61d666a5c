//! Error types

use std::error::Error as StdError;
use std::fmt;

use nfsc_types::nfs3::nfsstat3;

use crate::dispatch::TransportStatus;

/// Malformed argument shape, caught before any call is issued.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ValidationError {
    LengthMismatch { expected: usize, actual: usize },
    TooLong { limit: usize, actual: usize },
    EmptyName,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, actual } => {
                write!(f, "buffer is {actual} bytes, expected {expected}")
            }
            Self::TooLong { limit, actual } => {
                write!(f, "buffer is {actual} bytes, limit is {limit}")
            }
            Self::EmptyName => write!(f, "name must not be empty"),
        }
    }
}

impl StdError for ValidationError {}

/// Terminal outcome of one failed operation.
///
/// Evaluated in escalation order: validation, mount state, transport status,
/// NFS status. The rendered message names the failing layer.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OpError {
    Validation(ValidationError),
    NotMounted,
    Transport(TransportStatus),
    Protocol(nfsstat3),
    Unknown,
}

impl fmt::Display for OpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(e) => write!(f, "invalid argument: {e}"),
            Self::NotMounted => write!(f, "not mounted"),
            Self::Transport(status) => write!(f, "RPC transport error: {status}"),
            Self::Protocol(status) => write!(f, "NFS protocol error: {status}"),
            Self::Unknown => write!(f, "unknown error"),
        }
    }
}

impl StdError for OpError {}

impl From<ValidationError> for OpError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<TransportStatus> for OpError {
    fn from(status: TransportStatus) -> Self {
        Self::Transport(status)
    }
}

//! RENAME3: atomic rename across two directory handles.

use nfsc_types::nfs3::{RENAME3args, RENAME3resok, diropargs3};

use crate::dispatch::RpcDispatch;
use crate::error::{OpError, ValidationError};
use crate::task::{ClientInner, Phase, RpcTask, classify};
use crate::token;

pub(crate) struct Rename3Task {
    phase: Phase<RENAME3args, RENAME3resok>,
}

impl Rename3Task {
    /// Names must be non-empty and handles obey the protocol length cap;
    /// both are rejected here, before any task is submitted.
    pub(crate) fn new(
        from_dir: &[u8],
        from_name: &str,
        to_dir: &[u8],
        to_name: &str,
    ) -> Result<Self, ValidationError> {
        if from_name.is_empty() || to_name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        let args = RENAME3args {
            from: diropargs3 {
                dir: token::fh_from_buf(from_dir)?,
                name: from_name.into(),
            },
            to: diropargs3 {
                dir: token::fh_from_buf(to_dir)?,
                name: to_name.into(),
            },
        };
        Ok(Self {
            phase: Phase::Ready(args),
        })
    }
}

impl<D: RpcDispatch> RpcTask<D> for Rename3Task {
    type Output = ();

    fn execute(&mut self, inner: &ClientInner<D>) {
        let Some(args) = self.phase.begin() else {
            return;
        };
        if !inner.dispatch.is_mounted() {
            self.phase = Phase::Done(Err(OpError::NotMounted));
            return;
        }
        tracing::debug!("RENAME3");
        let outcome = classify(inner.round_trip(|dispatch| dispatch.rename3(&args)));
        if let Err(err) = &outcome {
            tracing::warn!("RENAME3 failed: {err}");
        }
        self.phase = Phase::Done(outcome);
    }

    /// The rename either happened in full on the server or not at all; on
    /// success there is no payload to marshal.
    fn finish(self) -> Result<(), OpError> {
        self.phase.into_outcome().map(|_resok| ())
    }
}

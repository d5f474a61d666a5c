//! READDIR3: paginated directory listing.

use nfsc_types::nfs3::{
    NFS3_COOKIESIZE, NFS3_COOKIEVERFSIZE, NFS3_FILEIDSIZE, READDIR3args, READDIR3resok, fattr3,
};

use crate::dispatch::RpcDispatch;
use crate::error::{OpError, ValidationError};
use crate::task::{ClientInner, Phase, RpcTask, classify};
use crate::token;

/// One materialized directory entry, in server order.
///
/// `name` is `None` only when a malformed reply left the field absent; the
/// cookie resumes the listing immediately after this entry.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DirEntry {
    pub name: Option<String>,
    pub fileid: [u8; NFS3_FILEIDSIZE],
    pub cookie: [u8; NFS3_COOKIESIZE],
}

/// One page of a directory listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadDirListing {
    pub dir_attributes: Option<fattr3>,
    /// Server verifier for this page; pass it back when requesting the next.
    pub cookieverf: [u8; NFS3_COOKIEVERFSIZE],
    pub eof: bool,
    pub entries: Vec<DirEntry>,
}

pub(crate) struct ReadDir3Task {
    phase: Phase<READDIR3args, READDIR3resok>,
}

impl ReadDir3Task {
    /// Cookie and verifier must decode to their fixed token size; a mismatch
    /// marks the task invalid and execution is skipped entirely.
    pub(crate) fn new(
        dir: &[u8],
        cookie: Option<&[u8]>,
        cookieverf: Option<&[u8]>,
        count: u32,
    ) -> Self {
        let args = decode_args(dir, cookie, cookieverf, count);
        let phase = match args {
            Ok(args) => Phase::Ready(args),
            Err(e) => Phase::Invalid(e),
        };
        Self { phase }
    }
}

fn decode_args(
    dir: &[u8],
    cookie: Option<&[u8]>,
    cookieverf: Option<&[u8]>,
    count: u32,
) -> Result<READDIR3args, ValidationError> {
    Ok(READDIR3args {
        dir: token::fh_from_buf(dir)?,
        cookie: token::cookie_from_buf(cookie)?,
        cookieverf: token::verifier_from_buf(cookieverf)?,
        count,
    })
}

impl<D: RpcDispatch> RpcTask<D> for ReadDir3Task {
    type Output = ReadDirListing;

    fn execute(&mut self, inner: &ClientInner<D>) {
        let Some(args) = self.phase.begin() else {
            return;
        };
        if !inner.dispatch.is_mounted() {
            self.phase = Phase::Done(Err(OpError::NotMounted));
            return;
        }
        tracing::debug!(cookie = args.cookie, count = args.count, "READDIR3");
        let outcome = classify(inner.round_trip(|dispatch| dispatch.readdir3(&args)));
        if let Err(err) = &outcome {
            tracing::warn!("READDIR3 failed: {err}");
        }
        self.phase = Phase::Done(outcome);
    }

    fn finish(self) -> Result<ReadDirListing, OpError> {
        self.phase.into_outcome().map(|resok| materialize(&resok))
    }
}

/// Walks the reply's entry sequence in server order, copying each fileid and
/// cookie into freshly owned buffers that outlive the response.
fn materialize(resok: &READDIR3resok) -> ReadDirListing {
    let entries = resok
        .reply
        .entries
        .iter()
        .map(|entry| DirEntry {
            name: entry
                .name
                .as_ref()
                .map(|name| String::from_utf8_lossy(name.as_ref()).into_owned()),
            fileid: token::fileid_to_buf(entry.fileid),
            cookie: token::cookie_to_buf(entry.cookie),
        })
        .collect();

    ReadDirListing {
        dir_attributes: resok.dir_attributes.clone(),
        cookieverf: resok.cookieverf.0,
        eof: resok.reply.eof,
        entries,
    }
}

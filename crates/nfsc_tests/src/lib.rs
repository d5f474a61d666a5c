//! Test harness: a scripted dispatch engine standing in for the RPC layer.

use std::ops::Deref;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use nfsc_client::{Nfs3Client, RpcDispatch, TransportStatus};
use nfsc_types::nfs3::{
    READDIR3args, READDIR3res, READDIR3resfail, READDIR3resok, RENAME3args, RENAME3res,
    RENAME3resfail, RENAME3resok, cookie3, cookieverf3, dirlist3, entry3, fattr3, fileid3, ftype3,
    nfsstat3, nfstime3, specdata3,
};

type ReadDirHandler = Box<dyn FnMut(&READDIR3args) -> Result<READDIR3res, TransportStatus> + Send>;
type RenameHandler = Box<dyn FnMut(&RENAME3args) -> Result<RENAME3res, TransportStatus> + Send>;

/// Scripted stand-in for the blocking RPC dispatch engine.
///
/// Replies come from per-procedure handlers; every dispatched call is
/// counted and its arguments captured for assertions.
pub struct MockDispatch {
    mounted: AtomicBool,
    calls: AtomicUsize,
    readdir_handler: Mutex<ReadDirHandler>,
    rename_handler: Mutex<RenameHandler>,
    readdir_args: Mutex<Vec<READDIR3args>>,
    rename_args: Mutex<Vec<RENAME3args>>,
}

impl MockDispatch {
    pub fn new() -> Self {
        Self {
            mounted: AtomicBool::new(true),
            calls: AtomicUsize::new(0),
            readdir_handler: Mutex::new(Box::new(|_| Err(TransportStatus::ProcUnavail))),
            rename_handler: Mutex::new(Box::new(|_| Err(TransportStatus::ProcUnavail))),
            readdir_args: Mutex::new(Vec::new()),
            rename_args: Mutex::new(Vec::new()),
        }
    }

    pub fn unmounted() -> Self {
        let mock = Self::new();
        mock.mounted.store(false, Ordering::SeqCst);
        mock
    }

    #[must_use]
    pub fn on_readdir(
        self,
        handler: impl FnMut(&READDIR3args) -> Result<READDIR3res, TransportStatus> + Send + 'static,
    ) -> Self {
        *self.readdir_handler.lock().unwrap() = Box::new(handler);
        self
    }

    #[must_use]
    pub fn on_rename(
        self,
        handler: impl FnMut(&RENAME3args) -> Result<RENAME3res, TransportStatus> + Send + 'static,
    ) -> Self {
        *self.rename_handler.lock().unwrap() = Box::new(handler);
        self
    }

    /// Number of RPC calls that reached the engine.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn set_mounted(&self, mounted: bool) {
        self.mounted.store(mounted, Ordering::SeqCst);
    }

    pub fn readdir_args(&self) -> Vec<READDIR3args> {
        self.readdir_args.lock().unwrap().clone()
    }

    pub fn rename_args(&self) -> Vec<RENAME3args> {
        self.rename_args.lock().unwrap().clone()
    }
}

impl Default for MockDispatch {
    fn default() -> Self {
        Self::new()
    }
}

impl RpcDispatch for MockDispatch {
    fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::SeqCst)
    }

    fn readdir3(&self, args: &READDIR3args) -> Result<READDIR3res, TransportStatus> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.readdir_args.lock().unwrap().push(args.clone());
        let mut handler = self.readdir_handler.lock().unwrap();
        (*handler)(args)
    }

    fn rename3(&self, args: &RENAME3args) -> Result<RENAME3res, TransportStatus> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.rename_args.lock().unwrap().push(args.clone());
        let mut handler = self.rename_handler.lock().unwrap();
        (*handler)(args)
    }
}

pub struct TestContext {
    mock: Arc<MockDispatch>,
    client: Nfs3Client<Arc<MockDispatch>>,
}

impl TestContext {
    pub fn setup(mock: MockDispatch) -> Self {
        init_logging(tracing::Level::DEBUG);
        let mock = Arc::new(mock);
        let client = Nfs3Client::new(Arc::clone(&mock));
        Self { mock, client }
    }

    pub fn mock(&self) -> &MockDispatch {
        &self.mock
    }

    /// A clone of the client handle, for spawned tasks.
    pub fn client(&self) -> Nfs3Client<Arc<MockDispatch>> {
        self.client.clone()
    }
}

impl Deref for TestContext {
    type Target = Nfs3Client<Arc<MockDispatch>>;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

static LOGGING: std::sync::Once = std::sync::Once::new();

pub fn init_logging(level: tracing::Level) {
    LOGGING.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .init();
    });
}

/// Builds an OK READDIR3 reply from `(fileid, name, cookie)` rows.
pub fn listing_ok(
    rows: &[(fileid3, &str, cookie3)],
    eof: bool,
    verifier: cookieverf3,
    attrs: Option<fattr3>,
) -> READDIR3res {
    READDIR3res::Ok(READDIR3resok {
        dir_attributes: attrs,
        cookieverf: verifier,
        reply: dirlist3 {
            entries: rows
                .iter()
                .map(|(fileid, name, cookie)| entry3 {
                    fileid: *fileid,
                    name: Some((*name).into()),
                    cookie: *cookie,
                })
                .collect(),
            eof,
        },
    })
}

pub fn listing_err(status: nfsstat3) -> READDIR3res {
    READDIR3res::Err((status, READDIR3resfail::default()))
}

pub fn rename_ok() -> RENAME3res {
    RENAME3res::Ok(RENAME3resok::default())
}

pub fn rename_err(status: nfsstat3) -> RENAME3res {
    RENAME3res::Err((status, RENAME3resfail::default()))
}

/// Directory attributes used by the fixtures.
pub fn sample_dir_attrs() -> fattr3 {
    fattr3 {
        type_: ftype3::NF3DIR,
        mode: 0o755,
        nlink: 2,
        uid: 1000,
        gid: 1000,
        size: 4096,
        used: 4096,
        rdev: specdata3::default(),
        fsid: 1,
        fileid: 42,
        atime: nfstime3 {
            seconds: 1_700_000_000,
            nseconds: 0,
        },
        mtime: nfstime3 {
            seconds: 1_700_000_000,
            nseconds: 0,
        },
        ctime: nfstime3 {
            seconds: 1_700_000_000,
            nseconds: 0,
        },
    }
}

#![allow(non_camel_case_types, clippy::upper_case_acronyms)]

//! Definitions of the NFSv3 protocol as described in RFC 1813.
//!
//! Only the subset the client drives is modeled here. Values are plain owned
//! data; the wire representation belongs to the RPC dispatch engine.

use std::fmt;

pub const PROGRAM: u32 = 100_003;
pub const VERSION: u32 = 3;

pub const NFS3_FHSIZE: usize = 64;
pub const NFS3_COOKIESIZE: usize = 8;
pub const NFS3_COOKIEVERFSIZE: usize = 8;
pub const NFS3_FILEIDSIZE: usize = 8;

pub type cookie3 = u64;
pub type count3 = u32;
pub type fileid3 = u64;
pub type gid3 = u32;
pub type mode3 = u32;
pub type size3 = u64;
pub type uid3 = u32;

/// Result of one NFS procedure: a resok body on `NFS3_OK`, otherwise the
/// failing status paired with the procedure's resfail body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nfs3Result<T, E> {
    Ok(T),
    Err((nfsstat3, E)),
}

impl<T, E: fmt::Debug> Nfs3Result<T, E> {
    pub fn unwrap(self) -> T {
        match self {
            Self::Ok(val) => val,
            Self::Err((code, res)) => panic!("NFS3 error: {code:?}, result: {res:?}"),
        }
    }

    pub const fn status(&self) -> nfsstat3 {
        match self {
            Self::Ok(_) => nfsstat3::NFS3_OK,
            Self::Err((code, _)) => *code,
        }
    }
}

pub type READDIR3res = Nfs3Result<READDIR3resok, READDIR3resfail>;
pub type RENAME3res = Nfs3Result<RENAME3resok, RENAME3resfail>;

pub type post_op_attr = Option<fattr3>;
pub type pre_op_attr = Option<wcc_attr>;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct READDIR3args {
    pub dir: nfs_fh3,
    pub cookie: cookie3,
    pub cookieverf: cookieverf3,
    pub count: count3,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct READDIR3resfail {
    pub dir_attributes: post_op_attr,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct READDIR3resok {
    pub dir_attributes: post_op_attr,
    pub cookieverf: cookieverf3,
    pub reply: dirlist3,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RENAME3args {
    pub from: diropargs3,
    pub to: diropargs3,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RENAME3resfail {
    pub fromdir_wcc: wcc_data,
    pub todir_wcc: wcc_data,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RENAME3resok {
    pub fromdir_wcc: wcc_data,
    pub todir_wcc: wcc_data,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct cookieverf3(pub [u8; NFS3_COOKIEVERFSIZE]);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct dirlist3 {
    pub entries: Vec<entry3>,
    pub eof: bool,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct diropargs3 {
    pub dir: nfs_fh3,
    pub name: filename3,
}

/// One directory entry as decoded from a READDIR3 reply.
///
/// `name` is `None` only when a malformed or truncated reply left the field
/// absent; a present-but-empty name is protocol-illegal but representable.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct entry3 {
    pub fileid: fileid3,
    pub name: Option<filename3>,
    pub cookie: cookie3,
}

#[derive(Debug, Clone, PartialEq)]
pub struct fattr3 {
    pub type_: ftype3,
    pub mode: mode3,
    pub nlink: u32,
    pub uid: uid3,
    pub gid: gid3,
    pub size: size3,
    pub used: size3,
    pub rdev: specdata3,
    pub fsid: u64,
    pub fileid: fileid3,
    pub atime: nfstime3,
    pub mtime: nfstime3,
    pub ctime: nfstime3,
}

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct filename3(pub Vec<u8>);

impl From<Vec<u8>> for filename3 {
    fn from(name: Vec<u8>) -> Self {
        Self(name)
    }
}

impl From<&[u8]> for filename3 {
    fn from(name: &[u8]) -> Self {
        Self(name.to_vec())
    }
}

impl From<&str> for filename3 {
    fn from(name: &str) -> Self {
        Self(name.as_bytes().to_vec())
    }
}

impl AsRef<[u8]> for filename3 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl filename3 {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl PartialEq<[u8]> for filename3 {
    fn eq(&self, other: &[u8]) -> bool {
        self.0.as_slice() == other
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ftype3 {
    NF3REG = 1,
    NF3DIR = 2,
    NF3BLK = 3,
    NF3CHR = 4,
    NF3LNK = 5,
    NF3SOCK = 6,
    NF3FIFO = 7,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct nfs_fh3 {
    pub data: Vec<u8>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum nfsstat3 {
    NFS3_OK = 0,
    NFS3ERR_PERM = 1,
    NFS3ERR_NOENT = 2,
    NFS3ERR_IO = 5,
    NFS3ERR_NXIO = 6,
    NFS3ERR_ACCES = 13,
    NFS3ERR_EXIST = 17,
    NFS3ERR_XDEV = 18,
    NFS3ERR_NODEV = 19,
    NFS3ERR_NOTDIR = 20,
    NFS3ERR_ISDIR = 21,
    NFS3ERR_INVAL = 22,
    NFS3ERR_FBIG = 27,
    NFS3ERR_NOSPC = 28,
    NFS3ERR_ROFS = 30,
    NFS3ERR_MLINK = 31,
    NFS3ERR_NAMETOOLONG = 63,
    NFS3ERR_NOTEMPTY = 66,
    NFS3ERR_DQUOT = 69,
    NFS3ERR_STALE = 70,
    NFS3ERR_REMOTE = 71,
    NFS3ERR_BADHANDLE = 10001,
    NFS3ERR_NOT_SYNC = 10002,
    NFS3ERR_BAD_COOKIE = 10003,
    NFS3ERR_NOTSUPP = 10004,
    NFS3ERR_TOOSMALL = 10005,
    NFS3ERR_SERVERFAULT = 10006,
    NFS3ERR_BADTYPE = 10007,
    NFS3ERR_JUKEBOX = 10008,
}

impl nfsstat3 {
    /// Error text per RFC 1813 section 2.6.
    pub const fn description(self) -> &'static str {
        match self {
            Self::NFS3_OK => "no error",
            Self::NFS3ERR_PERM => "not owner",
            Self::NFS3ERR_NOENT => "no such file or directory",
            Self::NFS3ERR_IO => "I/O error",
            Self::NFS3ERR_NXIO => "no such device or address",
            Self::NFS3ERR_ACCES => "permission denied",
            Self::NFS3ERR_EXIST => "file exists",
            Self::NFS3ERR_XDEV => "attempt to do a cross-device hard link",
            Self::NFS3ERR_NODEV => "no such device",
            Self::NFS3ERR_NOTDIR => "not a directory",
            Self::NFS3ERR_ISDIR => "is a directory",
            Self::NFS3ERR_INVAL => "invalid argument",
            Self::NFS3ERR_FBIG => "file too large",
            Self::NFS3ERR_NOSPC => "no space left on device",
            Self::NFS3ERR_ROFS => "read-only file system",
            Self::NFS3ERR_MLINK => "too many hard links",
            Self::NFS3ERR_NAMETOOLONG => "filename too long",
            Self::NFS3ERR_NOTEMPTY => "directory not empty",
            Self::NFS3ERR_DQUOT => "quota hard limit exceeded",
            Self::NFS3ERR_STALE => "stale file handle",
            Self::NFS3ERR_REMOTE => "too many levels of remote in path",
            Self::NFS3ERR_BADHANDLE => "illegal NFS file handle",
            Self::NFS3ERR_NOT_SYNC => "update synchronization mismatch",
            Self::NFS3ERR_BAD_COOKIE => "READDIR cookie is stale",
            Self::NFS3ERR_NOTSUPP => "operation not supported",
            Self::NFS3ERR_TOOSMALL => "buffer or request is too small",
            Self::NFS3ERR_SERVERFAULT => "server fault",
            Self::NFS3ERR_BADTYPE => "type not supported by the server",
            Self::NFS3ERR_JUKEBOX => "server busy, try again later",
        }
    }
}

impl fmt::Display for nfsstat3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.description(), *self as u32)
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct nfstime3 {
    pub seconds: u32,
    pub nseconds: u32,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct specdata3 {
    pub specdata1: u32,
    pub specdata2: u32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct wcc_attr {
    pub size: size3,
    pub mtime: nfstime3,
    pub ctime: nfstime3,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct wcc_data {
    pub before: pre_op_attr,
    pub after: post_op_attr,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NFS_PROGRAM {
    NFSPROC3_NULL = 0,
    NFSPROC3_GETATTR = 1,
    NFSPROC3_SETATTR = 2,
    NFSPROC3_LOOKUP = 3,
    NFSPROC3_ACCESS = 4,
    NFSPROC3_READLINK = 5,
    NFSPROC3_READ = 6,
    NFSPROC3_WRITE = 7,
    NFSPROC3_CREATE = 8,
    NFSPROC3_MKDIR = 9,
    NFSPROC3_SYMLINK = 10,
    NFSPROC3_MKNOD = 11,
    NFSPROC3_REMOVE = 12,
    NFSPROC3_RMDIR = 13,
    NFSPROC3_RENAME = 14,
    NFSPROC3_LINK = 15,
    NFSPROC3_READDIR = 16,
    NFSPROC3_READDIRPLUS = 17,
    NFSPROC3_FSSTAT = 18,
    NFSPROC3_FSINFO = 19,
    NFSPROC3_PATHCONF = 20,
    NFSPROC3_COMMIT = 21,
}

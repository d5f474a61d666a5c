//! Conversions between caller-supplied byte buffers and protocol tokens.
//!
//! Cookies and verifiers are fixed-size opaque tokens; handles are
//! variable-length up to the protocol cap. Server-issued tokens are copied
//! out big-endian so a returned buffer always round-trips to the same value.

use nfsc_types::nfs3::{
    NFS3_COOKIESIZE, NFS3_COOKIEVERFSIZE, NFS3_FHSIZE, NFS3_FILEIDSIZE, cookie3, cookieverf3,
    fileid3, nfs_fh3,
};

use crate::error::ValidationError;

/// Decodes an optional resume cookie. Absent means start of listing.
pub fn cookie_from_buf(buf: Option<&[u8]>) -> Result<cookie3, ValidationError> {
    match buf {
        None => Ok(0),
        Some(buf) => {
            let bytes: [u8; NFS3_COOKIESIZE] =
                buf.try_into().map_err(|_| ValidationError::LengthMismatch {
                    expected: NFS3_COOKIESIZE,
                    actual: buf.len(),
                })?;
            Ok(cookie3::from_be_bytes(bytes))
        }
    }
}

/// Decodes an optional cookie verifier. Absent means the all-zero verifier
/// required on the first call of a listing.
pub fn verifier_from_buf(buf: Option<&[u8]>) -> Result<cookieverf3, ValidationError> {
    match buf {
        None => Ok(cookieverf3::default()),
        Some(buf) => {
            let bytes: [u8; NFS3_COOKIEVERFSIZE] =
                buf.try_into().map_err(|_| ValidationError::LengthMismatch {
                    expected: NFS3_COOKIEVERFSIZE,
                    actual: buf.len(),
                })?;
            Ok(cookieverf3(bytes))
        }
    }
}

/// Decodes a file handle, enforcing the protocol maximum.
pub fn fh_from_buf(buf: &[u8]) -> Result<nfs_fh3, ValidationError> {
    if buf.len() > NFS3_FHSIZE {
        return Err(ValidationError::TooLong {
            limit: NFS3_FHSIZE,
            actual: buf.len(),
        });
    }
    Ok(nfs_fh3 {
        data: buf.to_vec(),
    })
}

/// Copies a server-issued cookie into a caller-owned buffer.
pub fn cookie_to_buf(cookie: cookie3) -> [u8; NFS3_COOKIESIZE] {
    cookie.to_be_bytes()
}

/// Copies a server-issued file id into a caller-owned buffer.
pub fn fileid_to_buf(fileid: fileid3) -> [u8; NFS3_FILEIDSIZE] {
    fileid.to_be_bytes()
}

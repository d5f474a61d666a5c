// Protocol constants and status-code checks
#![allow(clippy::unwrap_used)]

use nfsc_types::nfs3::*;

#[test]
fn procedure_numbers_follow_rfc_1813() {
    assert_eq!(NFS_PROGRAM::NFSPROC3_NULL as u32, 0);
    assert_eq!(NFS_PROGRAM::NFSPROC3_RENAME as u32, 14);
    assert_eq!(NFS_PROGRAM::NFSPROC3_READDIR as u32, 16);
    assert_eq!(NFS_PROGRAM::NFSPROC3_COMMIT as u32, 21);
    assert_eq!(PROGRAM, 100_003);
    assert_eq!(VERSION, 3);
}

#[test]
fn status_codes_and_descriptions() {
    assert_eq!(nfsstat3::NFS3_OK as u32, 0);
    assert_eq!(nfsstat3::NFS3ERR_BAD_COOKIE as u32, 10003);
    assert_eq!(nfsstat3::NFS3_OK.description(), "no error");
    assert_eq!(
        nfsstat3::NFS3ERR_NOENT.to_string(),
        "no such file or directory (2)"
    );
    assert_eq!(
        nfsstat3::NFS3ERR_NOTEMPTY.to_string(),
        "directory not empty (66)"
    );
}

#[test]
fn result_status_and_unwrap() {
    let ok: READDIR3res = Nfs3Result::Ok(READDIR3resok::default());
    assert_eq!(ok.status(), nfsstat3::NFS3_OK);
    let resok = ok.unwrap();
    assert!(resok.reply.entries.is_empty());

    let err: RENAME3res = Nfs3Result::Err((nfsstat3::NFS3ERR_ACCES, RENAME3resfail::default()));
    assert_eq!(err.status(), nfsstat3::NFS3ERR_ACCES);
}

#[test]
fn filename_conversions() {
    let name: filename3 = "hello".into();
    assert_eq!(name.as_ref(), b"hello".as_slice());
    assert_eq!(name.len(), 5);
    assert!(!name.is_empty());
    assert!(filename3::default().is_empty());

    let from_bytes: filename3 = b"a.txt".as_slice().into();
    assert_eq!(from_bytes, filename3::from("a.txt"));
}

#[test]
fn default_verifier_is_all_zero() {
    assert_eq!(cookieverf3::default().0, [0u8; NFS3_COOKIEVERFSIZE]);
}

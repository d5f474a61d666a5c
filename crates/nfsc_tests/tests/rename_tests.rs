use nfsc_client::{OpError, TransportStatus, ValidationError};
use nfsc_tests::{MockDispatch, TestContext, rename_err, rename_ok};
use nfsc_types::nfs3::nfsstat3;

const FROM_FH: [u8; 12] = [0x21; 12];
const TO_FH: [u8; 12] = [0x42; 12];

#[tokio::test]
async fn rename_in_same_folder() -> Result<(), anyhow::Error> {
    let mock = MockDispatch::new().on_rename(|_| Ok(rename_ok()));
    let ctx = TestContext::setup(mock);

    ctx.rename3(&FROM_FH, "old_name", &FROM_FH, "new_name")
        .await?;

    let args = ctx.mock().rename_args();
    assert_eq!(args.len(), 1);
    assert_eq!(args[0].from.dir.data, FROM_FH.to_vec());
    assert_eq!(args[0].from.name.as_ref(), b"old_name".as_slice());
    assert_eq!(args[0].to.name.as_ref(), b"new_name".as_slice());
    Ok(())
}

#[tokio::test]
async fn rename_across_directories() -> Result<(), anyhow::Error> {
    let mock = MockDispatch::new().on_rename(|_| Ok(rename_ok()));
    let ctx = TestContext::setup(mock);

    ctx.rename3(&FROM_FH, "file.txt", &TO_FH, "file.txt").await?;

    let args = ctx.mock().rename_args();
    assert_eq!(args[0].from.dir.data, FROM_FH.to_vec());
    assert_eq!(args[0].to.dir.data, TO_FH.to_vec());
    Ok(())
}

#[tokio::test]
async fn rename_empty_source_name_is_rejected_before_dispatch() {
    let ctx = TestContext::setup(MockDispatch::new().on_rename(|_| Ok(rename_ok())));

    let err = ctx
        .rename3(&FROM_FH, "", &TO_FH, "new_name")
        .await
        .expect_err("empty source name must fail");
    assert_eq!(err, OpError::Validation(ValidationError::EmptyName));
    assert_eq!(ctx.mock().calls(), 0);
}

#[tokio::test]
async fn rename_empty_destination_name_is_rejected_before_dispatch() {
    let ctx = TestContext::setup(MockDispatch::new().on_rename(|_| Ok(rename_ok())));

    let err = ctx
        .rename3(&FROM_FH, "old_name", &TO_FH, "")
        .await
        .expect_err("empty destination name must fail");
    assert_eq!(err, OpError::Validation(ValidationError::EmptyName));
    assert_eq!(ctx.mock().calls(), 0);
}

#[tokio::test]
async fn rename_noent() {
    let mock = MockDispatch::new().on_rename(|_| Ok(rename_err(nfsstat3::NFS3ERR_NOENT)));
    let ctx = TestContext::setup(mock);

    let err = ctx
        .rename3(&FROM_FH, "nonexistent_file", &TO_FH, "new_name")
        .await
        .expect_err("renaming a missing file must fail");
    assert_eq!(err, OpError::Protocol(nfsstat3::NFS3ERR_NOENT));
    assert!(err.to_string().contains("no such file or directory"));
}

#[tokio::test]
async fn rename_transport_error() {
    let mock = MockDispatch::new().on_rename(|_| Err(TransportStatus::CantRecv));
    let ctx = TestContext::setup(mock);

    let err = ctx
        .rename3(&FROM_FH, "old_name", &TO_FH, "new_name")
        .await
        .expect_err("transport failure must surface");
    assert_eq!(err, OpError::Transport(TransportStatus::CantRecv));
    assert_eq!(err.to_string(), "RPC transport error: Unable to receive reply");
}

#[tokio::test]
async fn rename_not_mounted_performs_no_calls() {
    let mock = MockDispatch::unmounted().on_rename(|_| Ok(rename_ok()));
    let ctx = TestContext::setup(mock);

    let err = ctx
        .rename3(&FROM_FH, "old_name", &TO_FH, "new_name")
        .await
        .expect_err("unmounted client must fail");
    assert_eq!(err, OpError::NotMounted);
    assert_eq!(ctx.mock().calls(), 0);
}

#[tokio::test]
async fn rename_then_readdir_sequenced_by_caller() -> Result<(), anyhow::Error> {
    let mock = MockDispatch::new()
        .on_rename(|_| Ok(rename_ok()))
        .on_readdir(|_| {
            Ok(nfsc_tests::listing_ok(
                &[(4, "new_name", 101)],
                true,
                nfsc_types::nfs3::cookieverf3::default(),
                None,
            ))
        });
    let ctx = TestContext::setup(mock);

    ctx.rename3(&FROM_FH, "old_name", &FROM_FH, "new_name")
        .await?;
    let listing = ctx.readdir3(&FROM_FH, None, None, 4096).await?;

    assert_eq!(listing.entries[0].name.as_deref(), Some("new_name"));
    assert_eq!(ctx.mock().calls(), 2);
    Ok(())
}

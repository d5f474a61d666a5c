use nfsc_tests::{MockDispatch, TestContext, listing_ok};
use nfsc_types::nfs3::cookieverf3;

const DIR_FH: [u8; 16] = [0xab; 16];

// Replies derive from the request, so any cross-task interference would
// show up as one task observing another's page.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_readdirs_do_not_interfere() -> Result<(), anyhow::Error> {
    const TASKS: u64 = 8;

    let mock = MockDispatch::new().on_readdir(|args| {
        let label = format!("file-{}", args.cookie);
        Ok(listing_ok(
            &[(args.cookie * 10, label.as_str(), args.cookie + 1)],
            args.cookie % 2 == 0,
            cookieverf3(args.cookie.to_be_bytes()),
            None,
        ))
    });
    let ctx = TestContext::setup(mock);

    let mut handles = Vec::new();
    for i in 1..=TASKS {
        let client = ctx.client();
        handles.push(tokio::spawn(async move {
            let cookie = i.to_be_bytes();
            client.readdir3(&DIR_FH, Some(&cookie), None, 1024).await
        }));
    }

    for (i, handle) in (1..=TASKS).zip(handles) {
        let listing = handle.await??;
        assert_eq!(listing.entries.len(), 1);
        assert_eq!(listing.entries[0].name.as_deref(), Some(format!("file-{i}").as_str()));
        assert_eq!(listing.entries[0].fileid, (i * 10).to_be_bytes());
        assert_eq!(listing.entries[0].cookie, (i + 1).to_be_bytes());
        assert_eq!(listing.cookieverf, i.to_be_bytes());
        assert_eq!(listing.eof, i % 2 == 0);
    }

    assert_eq!(ctx.mock().calls(), TASKS as usize);
    Ok(())
}

// The mount flag is re-read when the worker runs, not when the task is
// built; flipping it between submissions must flip the outcome.
#[tokio::test]
async fn mount_state_is_checked_at_execute_time() -> Result<(), anyhow::Error> {
    let mock = MockDispatch::new()
        .on_readdir(|_| Ok(listing_ok(&[], true, cookieverf3::default(), None)));
    let ctx = TestContext::setup(mock);

    ctx.readdir3(&DIR_FH, None, None, 1024).await?;
    ctx.mock().set_mounted(false);

    let err = ctx
        .readdir3(&DIR_FH, None, None, 1024)
        .await
        .expect_err("second call runs after unmount");
    assert_eq!(err, nfsc_client::OpError::NotMounted);
    assert_eq!(ctx.mock().calls(), 1);
    Ok(())
}

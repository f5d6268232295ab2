use super::*;

/// Tests opening a thread for a user with no prior state.
///
/// Expected: Created outcome, thread bound
#[tokio::test]
async fn creates_thread_for_new_user() {
    let router = router();
    let gateway = FakeGateway::new();

    let outcome = router.open_thread(&gateway, user(1), "U1#0001").await.unwrap();

    let OpenOutcome::Created(thread_id) = outcome else {
        panic!("expected a newly created thread, got {outcome:?}");
    };
    assert_eq!(gateway.created().len(), 1);
    assert_eq!(router.registry().get(user(1)).await.unwrap().thread_id, thread_id);
}

/// Tests opening a thread for an already-bound user.
///
/// The command path must not shadow an existing binding with a duplicate
/// thread.
///
/// Expected: Existing outcome with the bound thread, no creation
#[tokio::test]
async fn reports_existing_binding() {
    let router = router();
    let gateway = FakeGateway::new();

    BindingFactory::new(router.registry())
        .user_id(1)
        .thread_id(100)
        .build()
        .await;

    let outcome = router.open_thread(&gateway, user(1), "U1#0001").await.unwrap();

    assert_eq!(outcome, OpenOutcome::Existing(thread(100)));
    assert!(gateway.created().is_empty());
}

/// Tests opening a thread when one exists on the platform but not in the
/// registry.
///
/// Expected: Existing outcome via name resolution, no creation
#[tokio::test]
async fn resolves_platform_thread_by_name() {
    let router = router();
    let gateway = FakeGateway::new().with_active_thread(100, "DM with U1#0001");

    let outcome = router.open_thread(&gateway, user(1), "U1#0001").await.unwrap();

    assert_eq!(outcome, OpenOutcome::Existing(thread(100)));
    assert!(gateway.created().is_empty());
    assert_eq!(router.registry().get(user(1)).await.unwrap().thread_id, thread(100));
}

use super::*;

/// Tests the archive transition notification.
///
/// Expected: exactly one "closed" notice, binding kept and marked archived
#[tokio::test]
async fn archive_notifies_closed_once() {
    let router = router();
    let gateway = FakeGateway::new();

    BindingFactory::new(router.registry())
        .user_id(1)
        .thread_id(100)
        .build()
        .await;

    router
        .on_thread_archive_changed(&gateway, thread(100), false, true)
        .await
        .unwrap();

    assert_eq!(gateway.notices(), vec![(user(1), ThreadNotice::Closed)]);

    let binding = router.registry().get(user(1)).await.unwrap();
    assert!(binding.archived);
}

/// Tests the unarchive transition notification.
///
/// Expected: exactly one "reopened" notice, binding marked active
#[tokio::test]
async fn unarchive_notifies_reopened_once() {
    let router = router();
    let gateway = FakeGateway::new();

    BindingFactory::new(router.registry())
        .user_id(1)
        .thread_id(100)
        .archived(true)
        .build()
        .await;

    router
        .on_thread_archive_changed(&gateway, thread(100), true, false)
        .await
        .unwrap();

    assert_eq!(gateway.notices(), vec![(user(1), ThreadNotice::Reopened)]);
    assert!(!router.registry().get(user(1)).await.unwrap().archived);
}

/// Tests that a repeated state report without a transition stays silent.
///
/// Expected: no notices
#[tokio::test]
async fn no_transition_sends_no_notice() {
    let router = router();
    let gateway = FakeGateway::new();

    BindingFactory::new(router.registry())
        .user_id(1)
        .thread_id(100)
        .build()
        .await;

    router
        .on_thread_archive_changed(&gateway, thread(100), false, false)
        .await
        .unwrap();
    router
        .on_thread_archive_changed(&gateway, thread(100), true, true)
        .await
        .unwrap();

    assert!(gateway.notices().is_empty());
}

/// Tests that archive events for unbound threads are ignored.
///
/// Expected: no notices
#[tokio::test]
async fn archive_of_unbound_thread_is_ignored() {
    let router = router();
    let gateway = FakeGateway::new();

    router
        .on_thread_archive_changed(&gateway, thread(100), false, true)
        .await
        .unwrap();

    assert!(gateway.notices().is_empty());
}

/// Tests the configured archive-drops-binding behavior.
///
/// With `unbind_on_archive` set, archiving notifies the user and removes the
/// binding, so the next inbound message starts a fresh thread.
///
/// Expected: notice sent, binding gone, new thread on next message
#[tokio::test]
async fn unbind_on_archive_drops_binding() {
    let router = unbinding_router();
    let gateway = FakeGateway::new();

    BindingFactory::new(router.registry())
        .user_id(1)
        .thread_id(100)
        .build()
        .await;

    router
        .on_thread_archive_changed(&gateway, thread(100), false, true)
        .await
        .unwrap();

    assert_eq!(gateway.notices(), vec![(user(1), ThreadNotice::Closed)]);
    assert!(router.registry().get(user(1)).await.is_none());

    router
        .route_inbound_dm(
            &gateway,
            user(1),
            "U1#0001",
            thread(500),
            MessageId::new(600),
            "hello again",
        )
        .await
        .unwrap();

    assert_eq!(gateway.created().len(), 1);
}

/// Tests thread deletion.
///
/// Expected: "deleted" notice sent, binding removed, next message creates a
/// new thread rather than referencing the deleted one
#[tokio::test]
async fn delete_removes_binding_and_notifies() {
    let router = router();
    let gateway = FakeGateway::new();

    BindingFactory::new(router.registry())
        .user_id(1)
        .thread_id(100)
        .build()
        .await;

    router.on_thread_deleted(&gateway, thread(100)).await.unwrap();

    assert_eq!(gateway.notices(), vec![(user(1), ThreadNotice::Deleted)]);
    assert!(router.registry().get(user(1)).await.is_none());

    router
        .route_inbound_dm(
            &gateway,
            user(1),
            "U1#0001",
            thread(500),
            MessageId::new(600),
            "anyone?",
        )
        .await
        .unwrap();

    let rebound = router.registry().get(user(1)).await.unwrap();
    assert_ne!(rebound.thread_id, thread(100));
    assert_eq!(gateway.created().len(), 1);
}

/// Tests that deleting an unbound thread is a no-op.
///
/// Expected: no notices
#[tokio::test]
async fn delete_of_unbound_thread_is_ignored() {
    let router = router();
    let gateway = FakeGateway::new();

    router.on_thread_deleted(&gateway, thread(100)).await.unwrap();

    assert!(gateway.notices().is_empty());
}

use super::*;

/// Tests relaying a staff reply back to the bound user.
///
/// Verifies the concrete scenario: a reply inside the user's thread arrives
/// as a direct message prefixed with the support team marker.
///
/// Expected: one DM containing the reply text
#[tokio::test]
async fn relays_reply_to_bound_user() {
    let router = router();
    let gateway = FakeGateway::new();

    BindingFactory::new(router.registry())
        .user_id(1)
        .thread_id(100)
        .build()
        .await;

    router
        .route_thread_reply(&gateway, thread(100), "we're on it")
        .await
        .unwrap();

    assert_eq!(
        gateway.dms(),
        vec![(user(1), "**Support Team:** we're on it".to_string())]
    );
}

/// Tests that messages in unbound channels are ignored.
///
/// Expected: Ok, no DM sent
#[tokio::test]
async fn ignores_unbound_thread() {
    let router = router();
    let gateway = FakeGateway::new();

    router
        .route_thread_reply(&gateway, thread(100), "nobody home")
        .await
        .unwrap();

    assert!(gateway.dms().is_empty());
}

/// Tests that replies stop reaching a user once their thread is deleted.
///
/// Expected: no DM after deletion
#[tokio::test]
async fn stops_relaying_after_unbind() {
    let router = router();
    let gateway = FakeGateway::new();

    BindingFactory::new(router.registry())
        .user_id(1)
        .thread_id(100)
        .build()
        .await;

    router.on_thread_deleted(&gateway, thread(100)).await.unwrap();
    router
        .route_thread_reply(&gateway, thread(100), "too late")
        .await
        .unwrap();

    assert!(gateway.dms().is_empty());
}

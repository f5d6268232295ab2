use super::*;

/// Tests the first inbound DM from an unbound user.
///
/// Verifies the concrete scenario: a thread named after the sender is
/// created, the message is forwarded into it, and the original message is
/// acknowledged with a reaction.
///
/// Expected: exactly one thread created and bound
#[tokio::test]
async fn first_message_creates_and_binds_thread() {
    let router = router();
    let gateway = FakeGateway::new();

    router
        .route_inbound_dm(
            &gateway,
            user(1),
            "U1#0001",
            thread(500),
            MessageId::new(600),
            "help me",
        )
        .await
        .unwrap();

    assert_eq!(
        gateway.created(),
        vec![(parent(), "DM with U1#0001".to_string())]
    );

    let binding = router.registry().get(user(1)).await.unwrap();
    assert_eq!(
        gateway.thread_messages(),
        vec![(binding.thread_id, "**U1#0001:** help me".to_string())]
    );
    assert_eq!(gateway.acks(), vec![(thread(500), MessageId::new(600))]);
}

/// Tests that a second DM from the same user reuses the bound thread.
///
/// Expected: one thread created, both messages forwarded into it
#[tokio::test]
async fn second_message_reuses_thread() {
    let router = router();
    let gateway = FakeGateway::new();

    for text in ["help me", "still waiting"] {
        router
            .route_inbound_dm(
                &gateway,
                user(1),
                "U1#0001",
                thread(500),
                MessageId::new(600),
                text,
            )
            .await
            .unwrap();
    }

    assert_eq!(gateway.created().len(), 1);

    let thread_id = router.registry().get(user(1)).await.unwrap().thread_id;
    assert_eq!(
        gateway.thread_messages(),
        vec![
            (thread_id, "**U1#0001:** help me".to_string()),
            (thread_id, "**U1#0001:** still waiting".to_string()),
        ]
    );
}

/// Tests that concurrent first messages from one user race into a single
/// thread.
///
/// The fake gateway delays thread creation to widen the race window; the
/// per-user gate must still serialize resolution.
///
/// Expected: exactly one thread created
#[tokio::test]
async fn concurrent_first_messages_create_one_thread() {
    let router = router();
    let gateway = FakeGateway::new().with_create_delay(Duration::from_millis(50));

    let first = router.route_inbound_dm(
        &gateway,
        user(1),
        "U1#0001",
        thread(500),
        MessageId::new(600),
        "first",
    );
    let second = router.route_inbound_dm(
        &gateway,
        user(1),
        "U1#0001",
        thread(500),
        MessageId::new(601),
        "second",
    );

    let (first, second) = tokio::join!(first, second);
    first.unwrap();
    second.unwrap();

    assert_eq!(gateway.created().len(), 1);
    assert_eq!(gateway.thread_messages().len(), 2);
}

/// Tests name-based resolution against the active thread listing.
///
/// Simulates a restart: the registry is empty but the user's thread still
/// exists on the platform.
///
/// Expected: existing thread rebound, no creation
#[tokio::test]
async fn rebinds_to_active_thread_by_name() {
    let router = router();
    let gateway = FakeGateway::new().with_active_thread(100, "DM with U1#0001");

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

    assert!(gateway.created().is_empty());
    assert_eq!(router.registry().get(user(1)).await.unwrap().thread_id, thread(100));
    assert_eq!(
        gateway.thread_messages(),
        vec![(thread(100), "**U1#0001:** hello again".to_string())]
    );
}

/// Tests name-based resolution falling back to the archived listing.
///
/// Sending into an archived public thread un-archives it platform-side, so
/// the archived match is preferred over creating a duplicate.
///
/// Expected: archived thread rebound, no creation
#[tokio::test]
async fn falls_back_to_archived_listing() {
    let router = router();
    let gateway = FakeGateway::new().with_archived_thread(100, "DM with U1#0001");

    router
        .route_inbound_dm(
            &gateway,
            user(1),
            "U1#0001",
            thread(500),
            MessageId::new(600),
            "are you there?",
        )
        .await
        .unwrap();

    assert!(gateway.created().is_empty());
    assert_eq!(
        gateway.thread_messages(),
        vec![(thread(100), "**U1#0001:** are you there?".to_string())]
    );
}

/// Tests that a failing forward yields no acknowledgement.
///
/// The relay has no retry policy: the error is surfaced to the caller for
/// logging and the sender receives no delivery confirmation.
///
/// Expected: Err, binding kept, no reaction added
#[tokio::test]
async fn failed_forward_skips_acknowledgement() {
    let router = router();
    let gateway = FakeGateway::new().with_failing_sends();

    let result = router
        .route_inbound_dm(
            &gateway,
            user(1),
            "U1#0001",
            thread(500),
            MessageId::new(600),
            "help me",
        )
        .await;

    assert!(result.is_err());
    assert!(gateway.acks().is_empty());
    // Thread resolution succeeded before the send failed, so the binding
    // stays and the next message reuses it.
    assert!(router.registry().get(user(1)).await.is_some());
}

use diner::catalog::Catalog;
use diner::clients::OrderClient;
use diner::lifecycle::KioskSystem;
use diner::model::{
    MenuItem, MenuItemId, PaymentDetails, PaymentField, Phase, SessionId, SessionPolicy,
};
use diner::order_actor::{OrderError, Rejection};
use session_actor::EntityClient;
use std::sync::Arc;

fn pizza_and_salad() -> Arc<Catalog> {
    Arc::new(
        Catalog::new(vec![
            MenuItem::new(1, "Pizza", 10.0, ["dough", "tomato"], "🍕"),
            MenuItem::new(2, "Salad", 5.0, ["leaves"], "🥗"),
        ])
        .expect("valid menu"),
    )
}

fn card() -> PaymentDetails {
    PaymentDetails::new("Ada Lovelace", "1234 5678 9012 3456", "123")
}

/// Real order actor with a real catalog, driven through the typed client.
#[tokio::test]
async fn test_add_remove_and_total_through_the_actor() {
    let (actor, generic_client) = diner::order_actor::new();
    let client = OrderClient::new(generic_client);
    let handle = tokio::spawn(actor.run(pizza_and_salad()));

    let session = client
        .open_session(SessionPolicy::LockAfterPayment)
        .await
        .expect("Failed to open session");

    assert!(client.add_item(session, MenuItemId(1)).await.unwrap());
    assert!(client.add_item(session, MenuItemId(1)).await.unwrap());
    assert!(client.add_item(session, MenuItemId(2)).await.unwrap());

    let summary = client.summary(session).await.unwrap();
    assert_eq!(summary.lines.len(), 2);
    assert_eq!((summary.lines[0].name.as_str(), summary.lines[0].quantity), ("Pizza", 2));
    assert_eq!((summary.lines[1].name.as_str(), summary.lines[1].quantity), ("Salad", 1));
    assert_eq!(summary.total, 25.0);

    assert!(client.remove_one(session, 0).await.unwrap());
    let summary = client.summary(session).await.unwrap();
    assert_eq!(summary.lines[0].quantity, 1);
    assert_eq!(summary.lines[1].quantity, 1);
    assert_eq!(summary.total, 15.0);

    // Unknown ids and stale indices change nothing.
    assert!(!client.add_item(session, MenuItemId(99)).await.unwrap());
    assert!(!client.remove_one(session, 7).await.unwrap());
    assert_eq!(client.summary(session).await.unwrap().total, 15.0);

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_checkout_and_payment_rules() {
    let system = KioskSystem::new(pizza_and_salad());
    let client = &system.order_client;
    let session = client.open_session(SessionPolicy::LockAfterPayment).await.unwrap();

    assert_eq!(
        client.checkout(session).await,
        Err(OrderError::Rejected(Rejection::EmptyCart))
    );

    client.add_item(session, MenuItemId(2)).await.unwrap();
    assert_eq!(client.checkout(session).await, Ok(()));

    let blank_cvv = PaymentDetails::new("Ada", "4242", "  ");
    assert_eq!(
        client.finalize(session, blank_cvv).await,
        Err(OrderError::Rejected(Rejection::MissingField(PaymentField::Cvv)))
    );
    assert_eq!(client.summary(session).await.unwrap().total, 5.0);

    client.finalize(session, card()).await.expect("payment accepted");
    let snapshot = client.snapshot(session).await.unwrap();
    assert_eq!(snapshot.phase, Phase::Finalized);
    assert!(snapshot.summary.is_empty());
    assert!(!snapshot.accepts_orders());

    assert!(!client.add_item(session, MenuItemId(1)).await.unwrap());
    assert_eq!(
        client.checkout(session).await,
        Err(OrderError::Rejected(Rejection::SessionClosed))
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_reset_policy_keeps_session_open() {
    let system = KioskSystem::new(pizza_and_salad());
    let client = system.order_client.clone();
    let session = client.open_session(SessionPolicy::ResetAfterPayment).await.unwrap();

    client.add_item(session, MenuItemId(1)).await.unwrap();
    client.finalize(session, card()).await.unwrap();

    let snapshot = client.snapshot(session).await.unwrap();
    assert_eq!(snapshot.phase, Phase::Ordering);
    assert!(snapshot.summary.is_empty());

    assert!(client.add_item(session, MenuItemId(2)).await.unwrap());
    assert_eq!(client.summary(session).await.unwrap().total, 5.0);

    drop(client);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_sessions_are_isolated_and_closable() {
    let system = KioskSystem::new(pizza_and_salad());
    let client = system.order_client.clone();

    let first = client.open_session(SessionPolicy::default()).await.unwrap();
    let second = client.open_session(SessionPolicy::default()).await.unwrap();
    assert_ne!(first, second);

    client.add_item(first, MenuItemId(1)).await.unwrap();
    assert_eq!(client.summary(first).await.unwrap().total, 10.0);
    assert!(client.summary(second).await.unwrap().is_empty());

    client.close(first).await.unwrap();
    assert_eq!(client.view(first).await.unwrap(), None);
    assert_eq!(
        client.add_item(first, MenuItemId(1)).await,
        Err(OrderError::SessionNotFound(first.to_string()))
    );
    assert_eq!(
        client.summary(SessionId(404)).await,
        Err(OrderError::SessionNotFound("session_404".to_string()))
    );

    drop(client);
    system.shutdown().await.unwrap();
}

use actor_framework::actor::MAX_ID_ATTEMPTS;
use actor_framework::mock::MockClient;
use actor_framework::{ActorEntity, FrameworkError, ResourceActor};
use async_trait::async_trait;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct SimpleItem {
    id: u32,
    name: String,
    stock: u32,
}

#[derive(Debug)]
struct SimpleItemCreate {
    name: String,
    stock: u32,
}

#[derive(Debug, Default)]
struct SimpleItemUpdate {
    name: Option<String>,
    stock: Option<u32>,
}

#[derive(Debug, thiserror::Error)]
#[error("Simple item error: {0}")]
struct SimpleItemError(String);

#[async_trait]
impl ActorEntity for SimpleItem {
    type Id = u32;
    type Create = SimpleItemCreate;
    type Update = SimpleItemUpdate;
    type Query = ();
    type Context = ();
    type Error = SimpleItemError;

    fn from_create_params(
        id: u32,
        params: SimpleItemCreate,
        _ctx: &Self::Context,
    ) -> Result<Self, Self::Error> {
        if params.name.is_empty() {
            return Err(SimpleItemError("name must not be empty".into()));
        }
        Ok(Self {
            id,
            name: params.name,
            stock: params.stock,
        })
    }

    async fn on_update(
        &mut self,
        update: SimpleItemUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(stock) = update.stock {
            self.stock = stock;
        }
        Ok(())
    }
}

fn counter_ids() -> impl Fn() -> u32 + Send + Sync + 'static {
    let counter = Arc::new(AtomicU32::new(1));
    move || counter.fetch_add(1, Ordering::SeqCst)
}

fn create(name: &str, stock: u32) -> SimpleItemCreate {
    SimpleItemCreate {
        name: name.to_string(),
        stock,
    }
}

#[tokio::test]
async fn test_create_update_list() {
    let (actor, client) = ResourceActor::<SimpleItem>::new(10, counter_ids());
    let handle = tokio::spawn(actor.run(()));

    // 1. Create returns the full entity
    let first = client.create(create("Widget", 10)).await.unwrap();
    assert_eq!(first.id, 1);
    assert_eq!(first.name, "Widget");

    let second = client.create(create("Gadget", 3)).await.unwrap();
    assert_eq!(second.id, 2);

    // 2. Update merges only the supplied fields
    let update = SimpleItemUpdate {
        stock: Some(5),
        ..Default::default()
    };
    let updated = client.update(first.id, update).await.unwrap();
    assert_eq!(updated.stock, 5);
    assert_eq!(updated.name, "Widget");

    // 3. List keeps insertion order and reflects the update
    let items = client.list(()).await.unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0], updated);
    assert_eq!(items[1], second);

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found() {
    let (actor, client) = ResourceActor::<SimpleItem>::new(10, counter_ids());
    tokio::spawn(actor.run(()));

    client.create(create("Widget", 1)).await.unwrap();

    let result = client.update(99, SimpleItemUpdate::default()).await;
    match result {
        Err(FrameworkError::NotFound(id)) => assert_eq!(id, "99"),
        other => panic!("Expected NotFound, got {:?}", other),
    }

    // The store is untouched
    let items = client.list(()).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].stock, 1);
}

#[tokio::test]
async fn test_taken_id_is_redrawn() {
    // Hands out 7, 7, 8, 9, ...
    let calls = AtomicU32::new(0);
    let (actor, client) = ResourceActor::<SimpleItem>::new(10, move || {
        match calls.fetch_add(1, Ordering::SeqCst) {
            0 | 1 => 7,
            n => n + 6,
        }
    });
    tokio::spawn(actor.run(()));

    let first = client.create(create("Widget", 1)).await.unwrap();
    let second = client.create(create("Gadget", 2)).await.unwrap();
    assert_eq!(first.id, 7);
    assert_eq!(second.id, 8);

    let items = client.list(()).await.unwrap();
    assert_eq!(items, vec![first, second]);
}

#[tokio::test]
async fn test_stuck_generator_is_rejected_after_bounded_draws() {
    // A generator that always hands out the same id
    let calls = Arc::new(AtomicU32::new(0));
    let counted = calls.clone();
    let (actor, client) = ResourceActor::<SimpleItem>::new(10, move || {
        counted.fetch_add(1, Ordering::SeqCst);
        7
    });
    tokio::spawn(actor.run(()));

    let first = client.create(create("Widget", 1)).await.unwrap();
    assert_eq!(first.id, 7);

    let result = client.create(create("Gadget", 2)).await;
    assert!(matches!(result, Err(FrameworkError::DuplicateId(ref id)) if id == "7"));
    assert_eq!(calls.load(Ordering::SeqCst) as usize, 1 + MAX_ID_ATTEMPTS);

    let items = client.list(()).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Widget");
}

#[tokio::test]
async fn test_create_failure_is_entity_error() {
    let (actor, client) = ResourceActor::<SimpleItem>::new(10, counter_ids());
    tokio::spawn(actor.run(()));

    let result = client.create(create("", 1)).await;
    match result {
        Err(FrameworkError::EntityError(e)) => {
            assert!(e.to_string().contains("name must not be empty"))
        }
        other => panic!("Expected EntityError, got {:?}", other),
    }
    assert!(client.list(()).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_returns_a_snapshot() {
    let (actor, client) = ResourceActor::<SimpleItem>::new(10, counter_ids());
    tokio::spawn(actor.run(()));

    let item = client.create(create("Widget", 1)).await.unwrap();
    let before = client.list(()).await.unwrap();

    client.create(create("Gadget", 2)).await.unwrap();
    client
        .update(
            item.id,
            SimpleItemUpdate {
                stock: Some(42),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(before.len(), 1);
    assert_eq!(before[0].stock, 1);
}

#[tokio::test]
async fn test_concurrent_creates_get_unique_ids() {
    let (actor, client) = ResourceActor::<SimpleItem>::new(4, counter_ids());
    tokio::spawn(actor.run(()));

    let mut handles = vec![];
    for i in 0..20 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            client.create(create(&format!("item-{i}"), i)).await
        }));
    }

    let mut ids = vec![];
    for handle in handles {
        ids.push(handle.await.unwrap().unwrap().id);
    }
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 20);
    assert_eq!(client.list(()).await.unwrap().len(), 20);
}

#[tokio::test]
async fn test_closed_actor() {
    let (actor, client) = ResourceActor::<SimpleItem>::new(10, counter_ids());
    drop(actor);

    let result = client.list(()).await;
    assert!(matches!(result, Err(FrameworkError::ActorClosed)));
}

#[tokio::test]
async fn test_mock_client_with_expectations() {
    let mut mock = MockClient::<SimpleItem>::new();
    let item = SimpleItem {
        id: 1,
        name: "Widget".into(),
        stock: 3,
    };

    mock.expect_create().return_ok(item.clone());
    mock.expect_update(1).return_err(FrameworkError::NotFound("1".into()));
    mock.expect_list().return_ok(vec![item.clone()]);

    let client = mock.client();

    let created = client.create(create("Widget", 3)).await.unwrap();
    assert_eq!(created, item);

    let result = client.update(1, SimpleItemUpdate::default()).await;
    assert!(matches!(result, Err(FrameworkError::NotFound(_))));

    let items = client.list(()).await.unwrap();
    assert_eq!(items, vec![item]);

    mock.verify();
}

use async_trait::async_trait;
use record_actor::{RecordActor, RecordEntity};
use std::collections::HashSet;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Member {
    id: u32,
    name: String,
    active: bool,
}

#[derive(Debug)]
struct MemberCreate {
    name: String,
}

#[derive(Debug, Default)]
struct MemberUpdate {
    name: Option<String>,
    active: Option<bool>,
}

#[derive(Debug, thiserror::Error)]
#[error("member error")]
struct MemberError;

#[async_trait]
impl RecordEntity for Member {
    type Id = u32;
    type Create = MemberCreate;
    type Update = MemberUpdate;
    type Context = ();
    type Error = MemberError;

    fn from_create_params(id: u32, params: MemberCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            name: params.name,
            active: true,
        })
    }

    async fn on_update(
        &mut self,
        update: MemberUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(active) = update.active {
            self.active = active;
        }
        Ok(())
    }
}

fn create(name: &str) -> MemberCreate {
    MemberCreate {
        name: name.to_string(),
    }
}

// --- Tests ---

#[tokio::test]
async fn test_store_full_lifecycle() {
    let (actor, client) = RecordActor::new(10);
    let handle = tokio::spawn(actor.run(()));

    // 1. Create
    let id: u32 = client.create(create("Alice")).await.unwrap();
    assert_eq!(id, 1);

    // 2. Partial update keeps untouched fields
    let update = MemberUpdate {
        active: Some(false),
        ..Default::default()
    };
    let updated: Member = client.update(id, update).await.unwrap();
    assert_eq!(updated.name, "Alice");
    assert!(!updated.active);

    // 3. Delete returns the removed record
    let removed = client.delete(id).await.unwrap();
    assert_eq!(removed, updated);
    assert!(client.get(id).await.unwrap().is_none());

    // 4. Shutdown once the last client is gone
    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_identifiers_never_reused_after_delete() {
    let (actor, client) = RecordActor::<Member>::new(10);
    tokio::spawn(actor.run(()));

    for name in ["a", "b", "c"] {
        client.create(create(name)).await.unwrap();
    }
    client.delete(2).await.unwrap();
    let fresh = client.create(create("d")).await.unwrap();
    assert_eq!(fresh, 4);

    client.delete(4).await.unwrap();
    client.delete(1).await.unwrap();
    let fresh = client.create(create("e")).await.unwrap();
    assert_eq!(fresh, 5);

    let ids: Vec<u32> = client.list().await.unwrap().iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![3, 5]);
    let unique: HashSet<u32> = ids.iter().copied().collect();
    assert_eq!(unique.len(), ids.len());
}

#[tokio::test]
async fn test_list_preserves_insertion_order() {
    let (actor, client) = RecordActor::<Member>::new(10);
    tokio::spawn(actor.run(()));

    // Enough records that a hashed store would scramble them.
    let names: Vec<String> = (0..25).map(|i| format!("member-{i}")).collect();
    for name in &names {
        client.create(create(name)).await.unwrap();
    }

    let listed: Vec<String> = client
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.name)
        .collect();
    assert_eq!(listed, names);
}

#[tokio::test]
async fn test_concurrent_creates_get_distinct_ids() {
    let (actor, client) = RecordActor::<Member>::new(4);
    tokio::spawn(actor.run(()));

    let mut handles = vec![];
    for i in 0..20 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            client.create(create(&format!("m{i}"))).await
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        ids.insert(handle.await.unwrap().unwrap());
    }
    assert_eq!(ids.len(), 20);
    assert_eq!(ids, (1..=20).collect::<HashSet<u32>>());
}

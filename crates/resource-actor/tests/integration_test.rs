use async_trait::async_trait;
use resource_actor::{ActorEntity, FrameworkError, ResourceActor};

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Page {
    id: u32,
    slug: String,
    title: String,
    published: bool,
}

#[derive(Debug)]
struct PageCreate {
    slug: String,
    title: String,
}

#[derive(Debug)]
struct PageUpdate {
    slug: Option<String>,
    title: Option<String>,
}

#[derive(Debug)]
enum PageAction {
    Publish,
}

#[derive(Debug, thiserror::Error)]
#[error("page error")]
struct PageError;

#[async_trait]
impl ActorEntity for Page {
    type Id = u32;
    type Create = PageCreate;
    type Update = PageUpdate;
    type Action = PageAction;
    type ActionResult = bool;
    type Context = ();
    type Error = PageError;

    fn from_create_params(id: u32, params: PageCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            slug: params.slug,
            title: params.title,
            published: false,
        })
    }

    fn unique_key(&self) -> Option<String> {
        Some(self.slug.clone())
    }

    async fn on_update(
        &mut self,
        update: PageUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if let Some(slug) = update.slug {
            self.slug = slug;
        }
        if let Some(title) = update.title {
            self.title = title;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: PageAction,
        _ctx: &Self::Context,
    ) -> Result<bool, Self::Error> {
        match action {
            PageAction::Publish => {
                if self.published {
                    Ok(false)
                } else {
                    self.published = true;
                    Ok(true)
                }
            }
        }
    }
}

// --- Tests ---

#[tokio::test]
async fn full_lifecycle() {
    let (actor, client) = ResourceActor::<Page>::new(10);
    tokio::spawn(actor.run(()));

    // Create
    let id: u32 = client
        .create(PageCreate {
            slug: "home".into(),
            title: "Home".into(),
        })
        .await
        .unwrap();
    assert_eq!(id, 1); // first id is 1

    // Key lookup
    let page = client.find_by_key("home").await.unwrap().unwrap();
    assert_eq!(page.title, "Home");

    // Action, twice: second publish reports no change
    assert!(client.perform_action(id, PageAction::Publish).await.unwrap());
    assert!(!client.perform_action(id, PageAction::Publish).await.unwrap());

    // Update
    let updated = client
        .update(
            id,
            PageUpdate {
                slug: None,
                title: Some("Welcome".into()),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.title, "Welcome");
    assert!(updated.published);

    // Delete
    client.delete(id).await.unwrap();
    assert!(client.get(id).await.unwrap().is_none());
    assert!(client.find_by_key("home").await.unwrap().is_none());
}

#[tokio::test]
async fn duplicate_keys_are_rejected_atomically() {
    let (actor, client) = ResourceActor::<Page>::new(10);
    tokio::spawn(actor.run(()));

    client
        .create(PageCreate {
            slug: "about".into(),
            title: "About".into(),
        })
        .await
        .unwrap();

    let dup = client
        .create(PageCreate {
            slug: "about".into(),
            title: "About, again".into(),
        })
        .await;
    assert!(matches!(dup, Err(FrameworkError::DuplicateKey(k)) if k == "about"));

    // The refused create must not have consumed state.
    assert_eq!(client.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn key_rename_reindexes_and_conflicts_roll_back() {
    let (actor, client) = ResourceActor::<Page>::new(10);
    tokio::spawn(actor.run(()));

    let first = client
        .create(PageCreate {
            slug: "news".into(),
            title: "News".into(),
        })
        .await
        .unwrap();
    let second = client
        .create(PageCreate {
            slug: "blog".into(),
            title: "Blog".into(),
        })
        .await
        .unwrap();

    // Rename onto a free key: old key released, new key resolves.
    client
        .update(
            first,
            PageUpdate {
                slug: Some("press".into()),
                title: None,
            },
        )
        .await
        .unwrap();
    assert!(client.find_by_key("news").await.unwrap().is_none());
    assert_eq!(
        client.find_by_key("press").await.unwrap().unwrap().id,
        first
    );

    // Rename onto a taken key: refused, stored entity untouched.
    let conflict = client
        .update(
            second,
            PageUpdate {
                slug: Some("press".into()),
                title: Some("changed".into()),
            },
        )
        .await;
    assert!(matches!(conflict, Err(FrameworkError::DuplicateKey(_))));

    let unchanged = client.get(second).await.unwrap().unwrap();
    assert_eq!(unchanged.slug, "blog");
    assert_eq!(unchanged.title, "Blog");
}

#[tokio::test]
async fn concurrent_creates_admit_exactly_one_per_key() {
    let (actor, client) = ResourceActor::<Page>::new(32);
    tokio::spawn(actor.run(()));

    let mut handles = vec![];
    for i in 0..10 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            client
                .create(PageCreate {
                    slug: "flash-sale".into(),
                    title: format!("attempt {i}"),
                })
                .await
        }));
    }

    let mut ok = 0;
    for handle in handles {
        if handle.await.unwrap().is_ok() {
            ok += 1;
        }
    }
    assert_eq!(ok, 1, "exactly one create may claim the key");
    assert_eq!(client.list().await.unwrap().len(), 1);
}

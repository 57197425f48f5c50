/// Behavioural tests for the thought service over the in-memory store
///
/// These need no external services:
/// cargo test -p thoughts-shared --test thought_service_tests

use std::collections::HashSet;
use std::sync::Arc;

use futures::future::join_all;
use thoughts_shared::auth::authenticator::Principal;
use thoughts_shared::services::thoughts::ThoughtService;
use thoughts_shared::services::ServiceError;
use thoughts_shared::store::memory::MemoryStore;
use thoughts_shared::store::ThoughtStore;
use uuid::Uuid;

fn setup() -> (Arc<MemoryStore>, ThoughtService, Principal) {
    let store = Arc::new(MemoryStore::new());
    let service = ThoughtService::new(store.clone());
    let principal = Principal {
        user_id: Uuid::new_v4(),
        email: "ada@example.com".to_string(),
    };
    (store, service, principal)
}

#[tokio::test]
async fn test_create_then_get_returns_trimmed_message_and_zero_hearts() {
    let (_, service, principal) = setup();

    let longest = "z".repeat(140);
    let messages: [&str; 5] = [
        "12345",
        "   surrounded by spaces   ",
        "\tTabs and newlines\n",
        longest.as_str(),
        "Unicode is fine: smörgåsbord ☕",
    ];

    for raw in messages {
        let created = service.create(&principal, raw).await.unwrap();
        let fetched = service.get_by_id(&created.id.to_string()).await.unwrap();

        assert_eq!(fetched.message, raw.trim());
        assert_eq!(fetched.hearts, 0);
        assert_eq!(fetched, created);
    }
}

#[tokio::test]
async fn test_invalid_messages_are_not_persisted() {
    let (store, service, principal) = setup();

    let too_long = "y".repeat(141);
    for raw in ["", "    ", "1234", "  abc  ", too_long.as_str()] {
        let result = service.create(&principal, raw).await;
        assert!(
            matches!(result, Err(ServiceError::Validation(_))),
            "{:?} should fail validation",
            raw
        );
    }

    assert_eq!(store.thought_count().await, 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_likes_are_not_lost() {
    let (_, service, principal) = setup();
    let thought = service.create(&principal, "Like me please").await.unwrap();
    let id = thought.id.to_string();

    const LIKES: usize = 64;
    let handles = (0..LIKES).map(|_| {
        let service = service.clone();
        let id = id.clone();
        tokio::spawn(async move { service.like(&id).await })
    });

    let results = join_all(handles).await;
    let observed: HashSet<i32> = results
        .into_iter()
        .map(|joined| joined.unwrap().unwrap().hearts)
        .collect();

    // every like saw a distinct post-increment value
    assert_eq!(observed.len(), LIKES);
    assert_eq!(observed.iter().max(), Some(&(LIKES as i32)));

    let fetched = service.get_by_id(&id).await.unwrap();
    assert_eq!(fetched.hearts, LIKES as i32);
}

#[tokio::test]
async fn test_list_is_ordered_newest_first() {
    let (_, service, principal) = setup();

    let t1 = service.create(&principal, "first thought").await.unwrap();
    let t2 = service.create(&principal, "second thought").await.unwrap();
    let t3 = service.create(&principal, "third thought").await.unwrap();

    let listed = service.list(None).await.unwrap();
    let ids: Vec<Uuid> = listed.iter().map(|t| t.id).collect();

    assert_eq!(ids, vec![t3.id, t2.id, t1.id]);
    assert!(listed.windows(2).all(|w| w[0].created_at >= w[1].created_at));
}

#[tokio::test]
async fn test_list_filters_by_min_hearts() {
    let (_, service, principal) = setup();

    let none = service.create(&principal, "zero hearts").await.unwrap();
    let two = service.create(&principal, "two hearts").await.unwrap();
    let three = service.create(&principal, "three hearts").await.unwrap();

    for _ in 0..2 {
        service.like(&two.id.to_string()).await.unwrap();
    }
    for _ in 0..3 {
        service.like(&three.id.to_string()).await.unwrap();
    }

    let listed = service.list(Some(2)).await.unwrap();
    let ids: HashSet<Uuid> = listed.iter().map(|t| t.id).collect();

    assert_eq!(listed.len(), 2);
    assert!(ids.contains(&two.id));
    assert!(ids.contains(&three.id));
    assert!(!ids.contains(&none.id));

    assert!(service.list(Some(4)).await.unwrap().is_empty());
    assert_eq!(service.list(Some(0)).await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_empty_store_lists_nothing() {
    let (_, service, _) = setup();
    assert!(service.list(None).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_by_id_invalid_and_absent() {
    let (_, service, _) = setup();

    assert_eq!(service.get_by_id("12345").await, Err(ServiceError::InvalidId));
    assert_eq!(
        service.get_by_id(&Uuid::new_v4().to_string()).await,
        Err(ServiceError::thought_not_found())
    );
}

#[tokio::test]
async fn test_update_revalidates_and_keeps_counters() {
    let (_, service, principal) = setup();
    let thought = service.create(&principal, "original text").await.unwrap();
    let id = thought.id.to_string();
    service.like(&id).await.unwrap();

    let rejected = service.update(&principal, &id, "shrt").await;
    assert!(matches!(rejected, Err(ServiceError::Validation(_))));
    assert_eq!(service.get_by_id(&id).await.unwrap().message, "original text");

    let updated = service.update(&principal, &id, "  edited text  ").await.unwrap();
    assert_eq!(updated.message, "edited text");
    assert_eq!(updated.hearts, 1);
    assert_eq!(updated.created_at, thought.created_at);

    let missing = service
        .update(&principal, &Uuid::new_v4().to_string(), "edited text")
        .await;
    assert_eq!(missing, Err(ServiceError::thought_not_found()));
}

#[tokio::test]
async fn test_delete_removes_exactly_one_and_is_idempotent_in_effect() {
    let (store, service, principal) = setup();
    let keep = service.create(&principal, "keep this one").await.unwrap();
    let doomed = service.create(&principal, "delete this one").await.unwrap();
    service.like(&doomed.id.to_string()).await.unwrap();

    let deleted = service
        .delete(&principal, &doomed.id.to_string())
        .await
        .unwrap();
    assert_eq!(deleted.id, doomed.id);
    assert_eq!(deleted.hearts, 1);
    assert_eq!(store.thought_count().await, 1);

    for _ in 0..2 {
        assert_eq!(
            service.delete(&principal, &doomed.id.to_string()).await,
            Err(ServiceError::thought_not_found())
        );
    }

    assert_eq!(store.thought_count().await, 1);
    assert!(store.find_thought(keep.id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_like_absent_and_invalid() {
    let (_, service, _) = setup();

    assert_eq!(service.like("not-a-uuid").await, Err(ServiceError::InvalidId));
    assert_eq!(
        service.like(&Uuid::new_v4().to_string()).await,
        Err(ServiceError::thought_not_found())
    );
}

//! Demo data seeding.
//!
//! When enabled at startup, wipes the thought collection and inserts a small
//! set of demo thoughts. Intended for local development and demos only.

use tracing::info;

use crate::models::thought::CreateThought;
use crate::services::validation::validate_message;
use crate::services::ServiceResult;
use crate::store::ThoughtStore;

/// Messages inserted by [`seed_demo_thoughts`], oldest first
pub const DEMO_THOUGHTS: &[&str] = &[
    "Berlin baby",
    "My family!",
    "The smell of coffee in the morning....",
    "Newly washed bedlinen, kids that sleeps through the night.. FINALLY!",
    "Sunshine after three days of rain",
    "Finishing a project I thought I would never finish",
    "A good book and a warm cup of tea",
    "Cats purring on my lap while I code",
];

/// Replaces all thoughts with the demo set
///
/// Returns the number of thoughts inserted.
pub async fn seed_demo_thoughts(store: &dyn ThoughtStore) -> ServiceResult<usize> {
    let removed = store.delete_all_thoughts().await?;
    info!(removed, "Cleared thoughts before seeding");

    for message in DEMO_THOUGHTS {
        let message = validate_message(message)?;
        store.insert_thought(CreateThought { message }).await?;
    }

    info!(inserted = DEMO_THOUGHTS.len(), "Seeded demo thoughts");
    Ok(DEMO_THOUGHTS.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::thought::ThoughtFilter;
    use crate::store::memory::MemoryStore;

    #[test]
    fn test_demo_thoughts_are_valid() {
        for message in DEMO_THOUGHTS {
            assert!(validate_message(message).is_ok(), "invalid demo thought: {}", message);
        }
    }

    #[tokio::test]
    async fn test_seed_replaces_existing_thoughts() {
        let store = MemoryStore::new();
        store
            .insert_thought(CreateThought {
                message: "an old thought".to_string(),
            })
            .await
            .unwrap();

        let inserted = seed_demo_thoughts(&store).await.unwrap();
        assert_eq!(inserted, DEMO_THOUGHTS.len());

        let listed = store.list_thoughts(ThoughtFilter::default()).await.unwrap();
        assert_eq!(listed.len(), DEMO_THOUGHTS.len());
        assert!(listed.iter().all(|t| t.hearts == 0));
        assert_eq!(listed[0].message, DEMO_THOUGHTS[DEMO_THOUGHTS.len() - 1]);
    }
}

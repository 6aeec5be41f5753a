//! Saved-plan collection, most-recently-saved first.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use wayfare_core::TravelData;
use wayfare_shared::IdGenerator;

use crate::archive::{PlanArchive, StoreError};

/// Operations over the saved-plan collection.
///
/// Every mutation is a whole-collection read-modify-write against the
/// archive. Destructive operations (`delete`, `clear`) expect the caller to
/// have confirmed with the user; the store itself never prompts.
pub struct PlanStore {
    archive: Arc<dyn PlanArchive>,
    ids: Arc<dyn IdGenerator>,
}

impl PlanStore {
    pub fn new(archive: Arc<dyn PlanArchive>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { archive, ids }
    }

    /// The current collection, most recently saved first.
    pub async fn list(&self) -> Result<Vec<TravelData>, StoreError> {
        self.archive.load().await
    }

    /// Look up one saved plan by id.
    pub async fn get(&self, id: &str) -> Result<TravelData, StoreError> {
        self.list()
            .await?
            .into_iter()
            .find(|plan| plan.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Prepend `data` with the chosen display name and a fresh timestamp,
    /// returning the entry as saved. Saving the same session plan twice
    /// produces two entries; the second one is re-minted with a fresh id so
    /// the collection never holds duplicate identifiers.
    pub async fn save(
        &self,
        mut data: TravelData,
        name: impl Into<String>,
    ) -> Result<TravelData, StoreError> {
        data.custom_name = Some(name.into());
        data.created_at = Utc::now();

        let mut plans = self.archive.load().await?;
        if plans.iter().any(|plan| plan.id == data.id) {
            data.id = self.ids.next_id();
        }
        plans.insert(0, data.clone());
        self.archive.store(&plans).await?;

        info!(id = %data.id, total = plans.len(), "saved travel plan");
        Ok(data)
    }

    /// Replace one entry's display name.
    pub async fn rename(&self, id: &str, new_name: &str) -> Result<(), StoreError> {
        let mut plans = self.archive.load().await?;
        let entry = plans
            .iter_mut()
            .find(|plan| plan.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        entry.custom_name = Some(new_name.to_string());
        self.archive.store(&plans).await?;

        info!(id, new_name, "renamed travel plan");
        Ok(())
    }

    /// Remove one entry by id.
    pub async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut plans = self.archive.load().await?;
        let before = plans.len();
        plans.retain(|plan| plan.id != id);
        if plans.len() == before {
            return Err(StoreError::NotFound(id.to_string()));
        }
        self.archive.store(&plans).await?;

        info!(id, remaining = plans.len(), "deleted travel plan");
        Ok(())
    }

    /// Empty the whole collection.
    pub async fn clear(&self) -> Result<(), StoreError> {
        self.archive.store(&[]).await?;
        info!("cleared all saved plans");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::MemoryArchive;
    use wayfare_shared::SequenceIds;

    fn sample_plan(id: &str) -> TravelData {
        TravelData {
            id: id.to_string(),
            custom_name: None,
            itinerary: "ITINERARY\nDay 1: Arrive".to_string(),
            accommodations: "Not found".to_string(),
            safety: "Not found".to_string(),
            health: "Not found".to_string(),
            environmental: "Not found".to_string(),
            tips: "Not found".to_string(),
            sources: vec![],
            created_at: Utc::now(),
            parsed_itinerary: None,
        }
    }

    fn store() -> PlanStore {
        PlanStore::new(
            Arc::new(MemoryArchive::default()),
            Arc::new(SequenceIds::new("plan")),
        )
    }

    #[tokio::test]
    async fn save_prepends_and_names_the_entry() {
        let store = store();
        store.save(sample_plan("a"), "First trip").await.unwrap();
        store.save(sample_plan("b"), "Second trip").await.unwrap();

        let plans = store.list().await.unwrap();
        assert_eq!(plans.len(), 2);
        assert_eq!(plans[0].id, "b");
        assert_eq!(plans[0].custom_name.as_deref(), Some("Second trip"));
        assert_eq!(plans[1].id, "a");
    }

    #[tokio::test]
    async fn saving_the_same_plan_twice_remints_the_id() {
        let store = store();
        store.save(sample_plan("a"), "Original").await.unwrap();
        let saved = store.save(sample_plan("a"), "Copy").await.unwrap();

        assert_eq!(saved.id, "plan-1");
        let plans = store.list().await.unwrap();
        assert_eq!(plans.len(), 2);
        assert_ne!(plans[0].id, plans[1].id);
    }

    #[tokio::test]
    async fn rename_replaces_only_the_display_name() {
        let store = store();
        store.save(sample_plan("a"), "Before").await.unwrap();
        store.rename("a", "After").await.unwrap();

        let plans = store.list().await.unwrap();
        assert_eq!(plans[0].custom_name.as_deref(), Some("After"));
        assert_eq!(plans[0].itinerary, sample_plan("a").itinerary);
    }

    #[tokio::test]
    async fn rename_unknown_id_is_not_found() {
        let err = store().rename("ghost", "x").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(id) if id == "ghost"));
    }

    #[tokio::test]
    async fn delete_removes_exactly_one_entry() {
        let store = store();
        store.save(sample_plan("a"), "A").await.unwrap();
        store.save(sample_plan("b"), "B").await.unwrap();
        store.delete("a").await.unwrap();

        let plans = store.list().await.unwrap();
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].id, "b");
    }

    #[tokio::test]
    async fn delete_unknown_id_is_not_found() {
        let err = store().delete("ghost").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn clear_empties_the_collection() {
        let store = store();
        store.save(sample_plan("a"), "A").await.unwrap();
        store.clear().await.unwrap();
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn get_finds_a_saved_plan_by_id() {
        let store = store();
        store.save(sample_plan("a"), "A").await.unwrap();
        assert_eq!(store.get("a").await.unwrap().id, "a");
        assert!(matches!(
            store.get("ghost").await.unwrap_err(),
            StoreError::NotFound(_)
        ));
    }
}

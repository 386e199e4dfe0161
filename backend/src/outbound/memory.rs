//! In-memory `UserStore` adapter.
//!
//! State lives behind a single mutex. Every write checks the name index and
//! mutates under the same guard, so the uniqueness rule holds under
//! concurrent requests exactly as a database constraint would.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{UserStore, UserStoreError};
use crate::domain::{ListLimit, User, UserId, UserName};

#[derive(Debug)]
struct StoreState {
    users: BTreeMap<UserId, User>,
    names: HashMap<UserName, UserId>,
    next_id: i64,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            users: BTreeMap::new(),
            names: HashMap::new(),
            next_id: 1,
        }
    }
}

impl StoreState {
    fn insert(&mut self, name: &UserName) -> Result<User, UserStoreError> {
        if self.names.contains_key(name) {
            return Err(UserStoreError::conflict(name.as_str()));
        }
        let id = UserId::new(self.next_id);
        self.next_id += 1;
        let user = User::new(id, name.clone());
        self.names.insert(name.clone(), id);
        self.users.insert(id, user.clone());
        Ok(user)
    }
}

/// Process-local user store.
///
/// # Examples
/// ```
/// use users_backend::domain::ports::UserStore;
/// use users_backend::domain::UserName;
/// use users_backend::outbound::memory::InMemoryUserStore;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let store = InMemoryUserStore::new();
/// let alice = store.create(&UserName::new("alice").unwrap()).await.unwrap();
/// assert_eq!(alice.id().get(), 1);
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    state: Mutex<StoreState>,
}

impl InMemoryUserStore {
    /// Create an empty store whose first user receives id 1.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreState>, UserStoreError> {
        self.state
            .lock()
            .map_err(|_| UserStoreError::query("in-memory user store lock poisoned"))
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn list(&self, limit: ListLimit) -> Result<Vec<User>, UserStoreError> {
        let state = self.lock()?;
        let take = usize::try_from(limit.get()).unwrap_or(usize::MAX);
        Ok(state.users.values().take(take).cloned().collect())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserStoreError> {
        let state = self.lock()?;
        Ok(state.users.get(&id).cloned())
    }

    async fn create(&self, name: &UserName) -> Result<User, UserStoreError> {
        let mut state = self.lock()?;
        state.insert(name)
    }

    async fn update(&self, id: UserId, name: &UserName) -> Result<User, UserStoreError> {
        let mut state = self.lock()?;
        let current = state
            .users
            .get(&id)
            .cloned()
            .ok_or_else(|| UserStoreError::not_found(id))?;

        match state.names.get(name) {
            Some(holder) if *holder != id => return Err(UserStoreError::conflict(name.as_str())),
            Some(_) => return Ok(current),
            None => {}
        }

        state.names.remove(current.name());
        state.names.insert(name.clone(), id);
        let updated = current.renamed(name.clone());
        state.users.insert(id, updated.clone());
        Ok(updated)
    }

    async fn delete(&self, id: UserId) -> Result<(), UserStoreError> {
        let mut state = self.lock()?;
        let removed = state
            .users
            .remove(&id)
            .ok_or_else(|| UserStoreError::not_found(id))?;
        state.names.remove(removed.name());
        Ok(())
    }

    async fn bulk_create(&self, names: &[UserName]) -> Result<Vec<User>, UserStoreError> {
        let mut state = self.lock()?;
        // Stage on a copy so a duplicate anywhere in the batch leaves no trace.
        let mut staged = StoreState {
            users: state.users.clone(),
            names: state.names.clone(),
            next_id: state.next_id,
        };
        let created = names
            .iter()
            .map(|name| staged.insert(name))
            .collect::<Result<Vec<_>, _>>()?;
        *state = staged;
        Ok(created)
    }

    async fn reset(&self) -> Result<(), UserStoreError> {
        let mut state = self.lock()?;
        *state = StoreState::default();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use rstest::{fixture, rstest};

    fn name(raw: &str) -> UserName {
        UserName::new(raw).expect("valid name")
    }

    #[fixture]
    fn seeded() -> InMemoryUserStore {
        let store = InMemoryUserStore::new();
        {
            let mut state = store.state.lock().expect("state lock");
            for raw in ["alice", "bek", "chris"] {
                state.insert(&name(raw)).expect("seed user");
            }
        }
        store
    }

    #[rstest]
    #[tokio::test]
    async fn list_respects_limit_and_order(seeded: InMemoryUserStore) {
        let users = seeded
            .list(ListLimit::new(2).expect("valid limit"))
            .await
            .expect("list");
        let names: Vec<_> = users.iter().map(|u| u.name().as_str().to_owned()).collect();
        assert_eq!(names, ["alice", "bek"]);
    }

    #[rstest]
    #[tokio::test]
    async fn create_rejects_duplicate_names(seeded: InMemoryUserStore) {
        let err = seeded.create(&name("bek")).await.expect_err("duplicate");
        assert_eq!(err, UserStoreError::conflict("bek"));
    }

    #[rstest]
    #[tokio::test]
    async fn update_to_own_name_is_not_a_conflict(seeded: InMemoryUserStore) {
        let user = seeded
            .update(UserId::new(2), &name("bek"))
            .await
            .expect("self rename");
        assert_eq!(user.name().as_str(), "bek");
    }

    #[rstest]
    #[tokio::test]
    async fn update_releases_previous_name(seeded: InMemoryUserStore) {
        seeded
            .update(UserId::new(3), &name("chally"))
            .await
            .expect("rename");
        let reused = seeded.create(&name("chris")).await.expect("name freed");
        assert_eq!(reused.id(), UserId::new(4));
    }

    #[rstest]
    #[tokio::test]
    async fn delete_reports_unknown_ids(seeded: InMemoryUserStore) {
        let err = seeded.delete(UserId::new(99)).await.expect_err("unknown");
        assert_eq!(err, UserStoreError::not_found(99_i64));
    }

    #[rstest]
    #[tokio::test]
    async fn ids_are_not_reused_after_delete(seeded: InMemoryUserStore) {
        seeded.delete(UserId::new(3)).await.expect("delete");
        let user = seeded.create(&name("daniel")).await.expect("create");
        assert_eq!(user.id(), UserId::new(4));
    }

    #[rstest]
    #[tokio::test]
    async fn bulk_create_is_all_or_nothing(seeded: InMemoryUserStore) {
        let err = seeded
            .bulk_create(&[name("daniel"), name("alice")])
            .await
            .expect_err("duplicate in batch");
        assert_eq!(err, UserStoreError::conflict("alice"));
        let found = seeded.find_by_id(UserId::new(4)).await.expect("lookup");
        assert!(found.is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn reset_restarts_identifiers(seeded: InMemoryUserStore) {
        seeded.reset().await.expect("reset");
        let user = seeded.create(&name("alice")).await.expect("create");
        assert_eq!(user.id(), UserId::new(1));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates_with_same_name_admit_one_winner() {
        let store = Arc::new(InMemoryUserStore::new());
        let attempts: Vec<_> = (0..16)
            .map(|_| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.create(&name("daniel")).await })
            })
            .collect();

        let mut successes = 0;
        let mut conflicts = 0;
        for attempt in attempts {
            match attempt.await.expect("task joins") {
                Ok(_) => successes += 1,
                Err(UserStoreError::Conflict { .. }) => conflicts += 1,
                Err(other) => panic!("unexpected error: {other}"),
            }
        }
        assert_eq!(successes, 1);
        assert_eq!(conflicts, 15);
    }
}

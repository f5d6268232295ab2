//! In-memory registry of user-to-thread bindings.
//!
//! The registry is the single writer for [`ThreadBinding`] state. It keeps a
//! secondary index from thread id to user id so that thread events (staff
//! replies, archive transitions, deletions) resolve their user without
//! scanning every binding, and it hands out per-user async gates that the
//! router uses to serialize thread resolution.

use std::collections::HashMap;
use std::sync::Arc;

use serenity::all::{ChannelId, UserId};
use tokio::sync::{Mutex, RwLock};

use crate::relay::binding::ThreadBinding;

#[derive(Default)]
struct RegistryInner {
    by_user: HashMap<UserId, ThreadBinding>,
    by_thread: HashMap<ChannelId, UserId>,
}

/// Shared in-memory store of user-to-thread bindings.
///
/// Cheap to clone; all clones share the same state. Bindings are not
/// persisted: a process restart starts from an empty registry and relies on
/// the router's name-based thread resolution to reattach live conversations.
#[derive(Clone, Default)]
pub struct BindingRegistry {
    inner: Arc<RwLock<RegistryInner>>,

    /// Per-user gates serializing check-then-act thread resolution.
    gates: Arc<Mutex<HashMap<UserId, Arc<Mutex<()>>>>>,
}

impl BindingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a user to a thread, replacing any previous binding for that user.
    ///
    /// The new binding starts in the non-archived state. If the user was
    /// previously bound to a different thread, the stale reverse-index entry
    /// is dropped so the old thread no longer resolves to this user.
    pub async fn bind(&self, user_id: UserId, thread_id: ChannelId) -> ThreadBinding {
        let binding = ThreadBinding {
            user_id,
            thread_id,
            archived: false,
        };

        let mut inner = self.inner.write().await;
        if let Some(old) = inner.by_user.insert(user_id, binding.clone()) {
            inner.by_thread.remove(&old.thread_id);
        }
        inner.by_thread.insert(thread_id, user_id);

        binding
    }

    /// Returns the binding for a user, if any.
    pub async fn get(&self, user_id: UserId) -> Option<ThreadBinding> {
        self.inner.read().await.by_user.get(&user_id).cloned()
    }

    /// Reverse lookup: returns the binding whose thread matches `thread_id`.
    pub async fn find_by_thread(&self, thread_id: ChannelId) -> Option<ThreadBinding> {
        let inner = self.inner.read().await;
        inner
            .by_thread
            .get(&thread_id)
            .and_then(|user_id| inner.by_user.get(user_id))
            .cloned()
    }

    /// Removes the binding for a user, returning it if one existed.
    pub async fn remove(&self, user_id: UserId) -> Option<ThreadBinding> {
        let mut inner = self.inner.write().await;
        let removed = inner.by_user.remove(&user_id);
        if let Some(binding) = &removed {
            inner.by_thread.remove(&binding.thread_id);
        }
        removed
    }

    /// Removes the binding whose thread matches `thread_id`, returning it if
    /// one existed.
    pub async fn remove_by_thread(&self, thread_id: ChannelId) -> Option<ThreadBinding> {
        let mut inner = self.inner.write().await;
        let Some(user_id) = inner.by_thread.remove(&thread_id) else {
            return None;
        };
        inner.by_user.remove(&user_id)
    }

    /// Updates the archived flag of the binding for `thread_id`, returning
    /// the updated binding. No-op when the thread is not bound.
    pub async fn set_archived(
        &self,
        thread_id: ChannelId,
        archived: bool,
    ) -> Option<ThreadBinding> {
        let mut inner = self.inner.write().await;
        let user_id = *inner.by_thread.get(&thread_id)?;
        let binding = inner.by_user.get_mut(&user_id)?;
        binding.archived = archived;
        Some(binding.clone())
    }

    /// Returns the resolution gate for a user.
    ///
    /// Holders of the gate's lock have exclusive right to run the
    /// check-then-act sequence (lookup binding, query threads, create) for
    /// that user. Without it, two concurrent first-messages from the same
    /// user can each observe "no binding" and create duplicate threads.
    pub async fn user_gate(&self, user_id: UserId) -> Arc<Mutex<()>> {
        self.gates
            .lock()
            .await
            .entry(user_id)
            .or_default()
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(n: u64) -> UserId {
        UserId::new(n)
    }

    fn thread(n: u64) -> ChannelId {
        ChannelId::new(n)
    }

    #[tokio::test]
    async fn bind_and_get() {
        let registry = BindingRegistry::new();
        registry.bind(user(1), thread(100)).await;

        let binding = registry.get(user(1)).await.unwrap();
        assert_eq!(binding.thread_id, thread(100));
        assert!(!binding.archived);
    }

    #[tokio::test]
    async fn rebinding_replaces_previous_thread() {
        let registry = BindingRegistry::new();
        registry.bind(user(1), thread(100)).await;
        registry.bind(user(1), thread(200)).await;

        // Only one binding exists for the user, and the stale thread no
        // longer resolves.
        assert_eq!(registry.get(user(1)).await.unwrap().thread_id, thread(200));
        assert!(registry.find_by_thread(thread(100)).await.is_none());
        assert_eq!(
            registry.find_by_thread(thread(200)).await.unwrap().user_id,
            user(1)
        );
    }

    #[tokio::test]
    async fn find_by_thread_resolves_user() {
        let registry = BindingRegistry::new();
        registry.bind(user(1), thread(100)).await;
        registry.bind(user(2), thread(200)).await;

        let binding = registry.find_by_thread(thread(200)).await.unwrap();
        assert_eq!(binding.user_id, user(2));
    }

    #[tokio::test]
    async fn remove_clears_both_indexes() {
        let registry = BindingRegistry::new();
        registry.bind(user(1), thread(100)).await;

        let removed = registry.remove(user(1)).await.unwrap();
        assert_eq!(removed.thread_id, thread(100));
        assert!(registry.get(user(1)).await.is_none());
        assert!(registry.find_by_thread(thread(100)).await.is_none());
    }

    #[tokio::test]
    async fn remove_by_thread_clears_both_indexes() {
        let registry = BindingRegistry::new();
        registry.bind(user(1), thread(100)).await;

        let removed = registry.remove_by_thread(thread(100)).await.unwrap();
        assert_eq!(removed.user_id, user(1));
        assert!(registry.get(user(1)).await.is_none());
        assert!(registry.find_by_thread(thread(100)).await.is_none());
    }

    #[tokio::test]
    async fn set_archived_updates_binding() {
        let registry = BindingRegistry::new();
        registry.bind(user(1), thread(100)).await;

        let updated = registry.set_archived(thread(100), true).await.unwrap();
        assert!(updated.archived);
        assert!(registry.get(user(1)).await.unwrap().archived);

        let updated = registry.set_archived(thread(100), false).await.unwrap();
        assert!(!updated.archived);
    }

    #[tokio::test]
    async fn set_archived_on_unbound_thread_is_noop() {
        let registry = BindingRegistry::new();
        assert!(registry.set_archived(thread(100), true).await.is_none());
    }

    #[tokio::test]
    async fn user_gate_is_stable_per_user() {
        let registry = BindingRegistry::new();
        let first = registry.user_gate(user(1)).await;
        let second = registry.user_gate(user(1)).await;
        assert!(Arc::ptr_eq(&first, &second));
    }
}

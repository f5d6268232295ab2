//! Binding factory for seeding a registry in tests.

use dmrelay::relay::{BindingRegistry, ThreadBinding};
use serenity::all::{ChannelId, UserId};

use crate::factory::helpers::next_id;

/// Factory for creating thread bindings with customizable fields.
///
/// Defaults to fresh unique user and thread ids from the shared counter and
/// a non-archived state.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::binding::BindingFactory;
///
/// let binding = BindingFactory::new(router.registry())
///     .user_id(1)
///     .thread_id(100)
///     .archived(true)
///     .build()
///     .await;
/// ```
pub struct BindingFactory<'a> {
    registry: &'a BindingRegistry,
    user_id: UserId,
    thread_id: ChannelId,
    archived: bool,
}

impl<'a> BindingFactory<'a> {
    pub fn new(registry: &'a BindingRegistry) -> Self {
        Self {
            registry,
            user_id: UserId::new(next_id()),
            thread_id: ChannelId::new(next_id()),
            archived: false,
        }
    }

    pub fn user_id(mut self, user_id: u64) -> Self {
        self.user_id = UserId::new(user_id);
        self
    }

    pub fn thread_id(mut self, thread_id: u64) -> Self {
        self.thread_id = ChannelId::new(thread_id);
        self
    }

    pub fn archived(mut self, archived: bool) -> Self {
        self.archived = archived;
        self
    }

    /// Inserts the binding into the registry and returns it.
    pub async fn build(self) -> ThreadBinding {
        self.registry.bind(self.user_id, self.thread_id).await;
        if self.archived {
            self.registry
                .set_archived(self.thread_id, true)
                .await
                .expect("binding was just inserted");
        }

        ThreadBinding {
            user_id: self.user_id,
            thread_id: self.thread_id,
            archived: self.archived,
        }
    }
}

//! Routing logic between direct messages and relay threads.

use serenity::all::{ChannelId, MessageId, UserId};

use crate::error::AppError;
use crate::relay::gateway::{RelayGateway, ThreadNotice, ThreadRef};
use crate::relay::registry::BindingRegistry;

/// Result of resolving a user's relay thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    /// A new thread was created for the user.
    Created(ChannelId),
    /// The user was already bound, or an existing thread was found by name.
    Existing(ChannelId),
}

impl OpenOutcome {
    pub fn thread_id(self) -> ChannelId {
        match self {
            Self::Created(id) | Self::Existing(id) => id,
        }
    }
}

/// Maps users to relay threads and forwards content both directions.
///
/// Thread resolution runs under a per-user gate from the registry, so
/// concurrent first-messages from one user produce exactly one thread. All
/// platform access goes through the gateway passed into each operation.
pub struct RelayRouter {
    registry: BindingRegistry,
    parent_channel: ChannelId,
    unbind_on_archive: bool,
}

impl RelayRouter {
    pub fn new(parent_channel: ChannelId, unbind_on_archive: bool) -> Self {
        Self {
            registry: BindingRegistry::new(),
            parent_channel,
            unbind_on_archive,
        }
    }

    pub fn registry(&self) -> &BindingRegistry {
        &self.registry
    }

    /// The deterministic thread name for a user.
    pub fn thread_name(user_tag: &str) -> String {
        format!("DM with {user_tag}")
    }

    /// Relays an inbound direct message into the user's thread.
    ///
    /// Resolves or creates the thread, forwards the message content, then
    /// acknowledges the original message with a checkmark reaction. Errors
    /// propagate to the caller for logging only; the sender receives no
    /// failure feedback.
    pub async fn route_inbound_dm<G: RelayGateway>(
        &self,
        gateway: &G,
        user_id: UserId,
        user_tag: &str,
        origin_channel: ChannelId,
        origin_message: MessageId,
        text: &str,
    ) -> Result<(), AppError> {
        let outcome = self.resolve_or_create(gateway, user_id, user_tag).await?;

        gateway
            .send_in_thread(outcome.thread_id(), &format!("**{user_tag}:** {text}"))
            .await?;
        gateway.acknowledge(origin_channel, origin_message).await?;

        Ok(())
    }

    /// Relays a staff reply from a bound thread back to its user.
    ///
    /// Messages in channels or threads without a binding are ignored.
    pub async fn route_thread_reply<G: RelayGateway>(
        &self,
        gateway: &G,
        thread_id: ChannelId,
        text: &str,
    ) -> Result<(), AppError> {
        let Some(binding) = self.registry.find_by_thread(thread_id).await else {
            return Ok(());
        };

        gateway
            .send_dm(binding.user_id, &format!("**Support Team:** {text}"))
            .await
    }

    /// Reacts to a thread's archived flag changing.
    ///
    /// An archive transition notifies the user that the thread was closed
    /// and, when configured, drops the binding so the next message starts a
    /// fresh thread. An unarchive transition notifies the user the thread
    /// was reopened. Calls without an actual transition are ignored.
    pub async fn on_thread_archive_changed<G: RelayGateway>(
        &self,
        gateway: &G,
        thread_id: ChannelId,
        was_archived: bool,
        now_archived: bool,
    ) -> Result<(), AppError> {
        if was_archived == now_archived {
            return Ok(());
        }

        let Some(binding) = self.registry.set_archived(thread_id, now_archived).await else {
            return Ok(());
        };

        if now_archived {
            if self.unbind_on_archive {
                self.registry.remove(binding.user_id).await;
            }
            tracing::info!(
                "Relay thread {} archived for user {}",
                thread_id,
                binding.user_id
            );
            gateway.send_notice(binding.user_id, ThreadNotice::Closed).await
        } else {
            tracing::info!(
                "Relay thread {} unarchived for user {}",
                thread_id,
                binding.user_id
            );
            gateway
                .send_notice(binding.user_id, ThreadNotice::Reopened)
                .await
        }
    }

    /// Reacts to a thread being deleted: removes the binding and notifies the
    /// user. Unbound threads are ignored.
    pub async fn on_thread_deleted<G: RelayGateway>(
        &self,
        gateway: &G,
        thread_id: ChannelId,
    ) -> Result<(), AppError> {
        let Some(binding) = self.registry.remove_by_thread(thread_id).await else {
            return Ok(());
        };

        tracing::info!(
            "Relay thread {} deleted for user {}",
            thread_id,
            binding.user_id
        );
        gateway.send_notice(binding.user_id, ThreadNotice::Deleted).await
    }

    /// Resolves or creates a thread for a user without relaying a message.
    ///
    /// Entry point for the `/add_user` command. Reuses the same resolution
    /// path as inbound messages, so an existing thread is never shadowed by
    /// a duplicate.
    pub async fn open_thread<G: RelayGateway>(
        &self,
        gateway: &G,
        user_id: UserId,
        user_tag: &str,
    ) -> Result<OpenOutcome, AppError> {
        self.resolve_or_create(gateway, user_id, user_tag).await
    }

    /// Resolves the thread for a user, creating one if necessary.
    ///
    /// Runs under the user's gate. Resolution order: existing binding, then
    /// name match against the active listing, then name match against the
    /// archived listing (sending into an archived public thread un-archives
    /// it platform-side), then creation.
    async fn resolve_or_create<G: RelayGateway>(
        &self,
        gateway: &G,
        user_id: UserId,
        user_tag: &str,
    ) -> Result<OpenOutcome, AppError> {
        let gate = self.registry.user_gate(user_id).await;
        let _guard = gate.lock().await;

        if let Some(binding) = self.registry.get(user_id).await {
            return Ok(OpenOutcome::Existing(binding.thread_id));
        }

        // The registry is empty for this user but a thread may survive from a
        // previous process: re-resolve by name before creating a duplicate.
        let name = Self::thread_name(user_tag);

        let active = gateway.active_threads(self.parent_channel).await?;
        if let Some(thread) = find_by_name(&active, &name) {
            self.registry.bind(user_id, thread.id).await;
            tracing::debug!("Rebound user {} to active thread {}", user_id, thread.id);
            return Ok(OpenOutcome::Existing(thread.id));
        }

        let archived = gateway.archived_threads(self.parent_channel).await?;
        if let Some(thread) = find_by_name(&archived, &name) {
            self.registry.bind(user_id, thread.id).await;
            tracing::debug!("Rebound user {} to archived thread {}", user_id, thread.id);
            return Ok(OpenOutcome::Existing(thread.id));
        }

        let thread = gateway.create_thread(self.parent_channel, &name).await?;
        self.registry.bind(user_id, thread.id).await;
        tracing::info!("Created relay thread {} for user {}", thread.id, user_id);

        Ok(OpenOutcome::Created(thread.id))
    }
}

fn find_by_name<'a>(threads: &'a [ThreadRef], name: &str) -> Option<&'a ThreadRef> {
    threads.iter().find(|thread| thread.name == name)
}

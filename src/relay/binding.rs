use serenity::all::{ChannelId, UserId};

/// In-memory association between a Discord user and their relay thread.
///
/// At most one binding exists per user at any time. The `archived` flag
/// mirrors the platform-reported thread state and is updated from
/// thread-update gateway events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadBinding {
    /// The user whose direct messages are relayed.
    pub user_id: UserId,

    /// The thread under the relay parent channel bound to this user.
    pub thread_id: ChannelId,

    /// Platform-reported archived state of the thread.
    pub archived: bool,
}

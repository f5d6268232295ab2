//! DM-to-thread relay core.
//!
//! This module owns the association between a Discord user and their relay
//! thread, and the routing logic that moves message content between the two
//! surfaces. All Discord API access goes through the [`RelayGateway`] trait so
//! the routing invariants can be exercised against an in-memory fake without a
//! live gateway connection.
//!
//! Bindings are held in process memory only. A restart loses the map, so the
//! router falls back to resolving threads by their deterministic name against
//! the parent channel's active and archived thread listings before creating a
//! new one.

pub mod binding;
pub mod gateway;
pub mod registry;
pub mod router;

pub use binding::ThreadBinding;
pub use gateway::{DiscordGateway, RelayGateway, ThreadNotice, ThreadRef};
pub use registry::BindingRegistry;
pub use router::{OpenOutcome, RelayRouter};

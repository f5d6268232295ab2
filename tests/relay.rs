use std::time::Duration;

use serenity::all::{ChannelId, MessageId, UserId};
use test_utils::factory::binding::BindingFactory;
use test_utils::gateway::FakeGateway;

use dmrelay::relay::{OpenOutcome, RelayRouter, ThreadNotice};

#[path = "relay/open_thread.rs"]
mod open_thread;
#[path = "relay/route_inbound_dm.rs"]
mod route_inbound_dm;
#[path = "relay/route_thread_reply.rs"]
mod route_thread_reply;
#[path = "relay/thread_lifecycle.rs"]
mod thread_lifecycle;

/// Relay parent channel used throughout the tests.
fn parent() -> ChannelId {
    ChannelId::new(42)
}

/// Router with the default archive behavior (bindings survive archival).
fn router() -> RelayRouter {
    RelayRouter::new(parent(), false)
}

/// Router configured to drop bindings when their thread is archived.
fn unbinding_router() -> RelayRouter {
    RelayRouter::new(parent(), true)
}

fn user(n: u64) -> UserId {
    UserId::new(n)
}

fn thread(n: u64) -> ChannelId {
    ChannelId::new(n)
}

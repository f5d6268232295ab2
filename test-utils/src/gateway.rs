//! In-memory fake of the relay's platform gateway.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use dmrelay::error::AppError;
use dmrelay::relay::{RelayGateway, ThreadNotice, ThreadRef};
use serenity::all::{ChannelId, MessageId, UserId};
use serenity::async_trait;

/// Starting id for threads allocated by the fake, chosen to stay clear of
/// the small ids tests use for scripted threads.
const FIRST_ALLOCATED_THREAD_ID: u64 = 9000;

#[derive(Default)]
struct FakeGatewayState {
    active: Vec<ThreadRef>,
    archived: Vec<ThreadRef>,
    created: Vec<(ChannelId, String)>,
    thread_messages: Vec<(ChannelId, String)>,
    dms: Vec<(UserId, String)>,
    notices: Vec<(UserId, ThreadNotice)>,
    acks: Vec<(ChannelId, MessageId)>,
    next_thread_id: u64,
    fail_sends: bool,
}

/// Records every outbound relay call and serves scripted thread listings.
///
/// Construct with [`FakeGateway::new`], script the platform state with the
/// `with_*` builders, then hand a reference to the router under test and
/// assert on the recorded calls afterwards.
#[derive(Clone)]
pub struct FakeGateway {
    state: Arc<Mutex<FakeGatewayState>>,
    create_delay: Option<Duration>,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(FakeGatewayState {
                next_thread_id: FIRST_ALLOCATED_THREAD_ID,
                ..FakeGatewayState::default()
            })),
            create_delay: None,
        }
    }

    /// Scripts an active thread into the listing.
    pub fn with_active_thread(self, id: u64, name: impl Into<String>) -> Self {
        self.state.lock().unwrap().active.push(ThreadRef {
            id: ChannelId::new(id),
            name: name.into(),
        });
        self
    }

    /// Scripts an archived thread into the listing.
    pub fn with_archived_thread(self, id: u64, name: impl Into<String>) -> Self {
        self.state.lock().unwrap().archived.push(ThreadRef {
            id: ChannelId::new(id),
            name: name.into(),
        });
        self
    }

    /// Delays every create_thread call, widening the race window for
    /// concurrency tests.
    pub fn with_create_delay(mut self, delay: Duration) -> Self {
        self.create_delay = Some(delay);
        self
    }

    /// Makes send_in_thread and send_dm fail.
    pub fn with_failing_sends(self) -> Self {
        self.state.lock().unwrap().fail_sends = true;
        self
    }

    /// Threads created through the gateway, as (parent, name) pairs.
    pub fn created(&self) -> Vec<(ChannelId, String)> {
        self.state.lock().unwrap().created.clone()
    }

    /// Messages sent into threads, as (thread, content) pairs.
    pub fn thread_messages(&self) -> Vec<(ChannelId, String)> {
        self.state.lock().unwrap().thread_messages.clone()
    }

    /// Direct messages sent, as (user, content) pairs.
    pub fn dms(&self) -> Vec<(UserId, String)> {
        self.state.lock().unwrap().dms.clone()
    }

    /// Lifecycle notices sent, as (user, notice) pairs.
    pub fn notices(&self) -> Vec<(UserId, ThreadNotice)> {
        self.state.lock().unwrap().notices.clone()
    }

    /// Acknowledgement reactions added, as (channel, message) pairs.
    pub fn acks(&self) -> Vec<(ChannelId, MessageId)> {
        self.state.lock().unwrap().acks.clone()
    }
}

impl Default for FakeGateway {
    fn default() -> Self {
        Self::new()
    }
}

fn send_failure() -> AppError {
    AppError::from(serenity::Error::Other("fake gateway send failure"))
}

#[async_trait]
impl RelayGateway for FakeGateway {
    async fn create_thread(&self, parent: ChannelId, name: &str) -> Result<ThreadRef, AppError> {
        if let Some(delay) = self.create_delay {
            tokio::time::sleep(delay).await;
        }

        let mut state = self.state.lock().unwrap();
        let id = ChannelId::new(state.next_thread_id);
        state.next_thread_id += 1;

        let thread = ThreadRef {
            id,
            name: name.to_string(),
        };
        state.created.push((parent, name.to_string()));
        state.active.push(thread.clone());

        Ok(thread)
    }

    async fn active_threads(&self, _parent: ChannelId) -> Result<Vec<ThreadRef>, AppError> {
        Ok(self.state.lock().unwrap().active.clone())
    }

    async fn archived_threads(&self, _parent: ChannelId) -> Result<Vec<ThreadRef>, AppError> {
        Ok(self.state.lock().unwrap().archived.clone())
    }

    async fn send_in_thread(&self, thread: ChannelId, content: &str) -> Result<(), AppError> {
        let mut state = self.state.lock().unwrap();
        if state.fail_sends {
            return Err(send_failure());
        }
        state.thread_messages.push((thread, content.to_string()));
        Ok(())
    }

    async fn send_dm(&self, user: UserId, content: &str) -> Result<(), AppError> {
        let mut state = self.state.lock().unwrap();
        if state.fail_sends {
            return Err(send_failure());
        }
        state.dms.push((user, content.to_string()));
        Ok(())
    }

    async fn send_notice(&self, user: UserId, notice: ThreadNotice) -> Result<(), AppError> {
        self.state.lock().unwrap().notices.push((user, notice));
        Ok(())
    }

    async fn acknowledge(&self, channel: ChannelId, message: MessageId) -> Result<(), AppError> {
        self.state.lock().unwrap().acks.push((channel, message));
        Ok(())
    }
}

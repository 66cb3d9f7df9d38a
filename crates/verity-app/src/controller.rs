use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use verity_detector::Classifier;
use verity_notify::ResultPresenter;
use verity_types::AppEvent;

use crate::events::event_loop;
use crate::io::watcher_io;
use crate::state::AppState;

/// Centralized channel management
pub struct ChannelSet {
    pub events: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            events: kanal::bounded_async(64),
        }
    }
}

impl Default for ChannelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            channels: ChannelSet::new(),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Sender for requests into the event loop
    pub fn event_sender(&self) -> AsyncSender<AppEvent> {
        self.channels.events.0.clone()
    }

    pub fn spawn_event_loop(
        &self,
        tasks: &mut JoinSet<anyhow::Result<()>>,
        classifier: Arc<dyn Classifier>,
        presenter: ResultPresenter,
    ) {
        tasks.spawn(event_loop(
            self.state.clone(),
            self.channels.events.1.clone(),
            classifier,
            presenter,
            self.cancel_token.child_token(),
        ));
    }

    pub fn spawn_watcher(&self, tasks: &mut JoinSet<anyhow::Result<()>>) {
        tasks.spawn(watcher_io(
            self.state.clone(),
            self.cancel_token.child_token(),
            self.channels.events.0.clone(),
        ));
    }

    /// Event loop plus document watcher
    pub fn spawn_tasks(
        &self,
        classifier: Arc<dyn Classifier>,
        presenter: ResultPresenter,
    ) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();
        self.spawn_event_loop(&mut tasks, classifier, presenter);
        self.spawn_watcher(&mut tasks);
        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}

//! Event handling for the TUI
//!
//! One channel feeds the UI loop: keyboard input, ticks, and state machine
//! events marshalled from sensor threads. That single consumer is what
//! gives transitions their no-overlap guarantee.

use std::time::Duration;

use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEvent, KeyEventKind};
use futures::StreamExt;
use localauth_core::{AuthEvent, EventSink};
use tokio::sync::mpsc;

/// Application events
#[derive(Debug, Clone)]
pub enum Event {
    /// Keyboard input
    Key(KeyEvent),
    /// Terminal tick (animations, pending display deadlines)
    Tick,
    /// A state machine event marshalled from another thread
    Auth(AuthEvent),
}

/// [`EventSink`] backed by the UI loop's channel.
///
/// Prompt callbacks hold this only through a weak handle; once the loop is
/// gone their submissions vanish silently.
pub struct ChannelSink {
    sender: mpsc::UnboundedSender<Event>,
}

impl ChannelSink {
    /// Wrap the loop's sender.
    pub fn new(sender: mpsc::UnboundedSender<Event>) -> Self {
        Self { sender }
    }
}

impl EventSink for ChannelSink {
    fn submit(&self, event: AuthEvent) {
        // A dropped receiver means teardown, not an error.
        let _ = self.sender.send(Event::Auth(event));
    }
}

/// Spawn the tick generator and keyboard reader tasks.
pub fn start_event_loop(
    tick_rate: Duration,
) -> (mpsc::UnboundedSender<Event>, mpsc::UnboundedReceiver<Event>) {
    let (tx, rx) = mpsc::unbounded_channel();

    // Tick generator
    let tick_tx = tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(tick_rate);
        loop {
            interval.tick().await;
            if tick_tx.send(Event::Tick).is_err() {
                break;
            }
        }
    });

    // Keyboard reader
    let key_tx = tx.clone();
    tokio::spawn(async move {
        let mut stream = EventStream::new();
        while let Some(Ok(event)) = stream.next().await {
            if let CrosstermEvent::Key(key) = event {
                if key.kind == KeyEventKind::Press && key_tx.send(Event::Key(key)).is_err() {
                    break;
                }
            }
        }
    });

    (tx, rx)
}

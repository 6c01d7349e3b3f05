//! Common test utilities for wizard tests.
//!
//! # Invariants
//! - Fixtures are loaded from the client crate's `fixtures/` directory
//! - One mock server plays both Elasticsearch and Kibana
//! - Each test gets its own mock server and action channel
//!
//! # What this does NOT handle
//! - Real Elasticsearch or Kibana servers
//! - Terminal management

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::buffer::Buffer;
use tokio::sync::mpsc;

pub use kbn_client::testing::load_fixture;
pub use kbn_client::{KbnClient, MatchedIndex};
pub use kbn_tui::action::{Action, MatchingIndices};
pub use kbn_tui::app::App;
pub use kbn_tui::runtime::side_effects::{SideEffectContext, TaskTracker, handle_side_effects};
pub use wiremock::{Mock, MockServer, ResponseTemplate};

pub fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

pub fn code(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn indices(names: &[&str]) -> Vec<MatchedIndex> {
    names.iter().map(|n| MatchedIndex::new(*n)).collect()
}

/// Feed a key to the app; apply and return the resulting action, if any.
pub fn press(app: &mut App, key: KeyEvent) -> Option<Action> {
    let action = app.handle_input(key)?;
    app.update(&action);
    Some(action)
}

/// Flatten a buffer into lines of text.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

/// Mock server, action channel and side effect context wired together.
pub struct SideEffectsTestHarness {
    pub mock_server: MockServer,
    pub action_rx: mpsc::Receiver<Action>,
    pub ctx: SideEffectContext,
}

impl SideEffectsTestHarness {
    pub async fn new() -> Self {
        Self::with_reasonable_wait(Duration::ZERO).await
    }

    pub async fn with_reasonable_wait(reasonable_wait: Duration) -> Self {
        let mock_server = MockServer::start().await;
        let (tx, action_rx) = mpsc::channel::<Action>(100);
        let client = KbnClient::builder()
            .elasticsearch_url(mock_server.uri())
            .kibana_url(mock_server.uri())
            .max_retries(1)
            .build()
            .expect("client should build");

        Self {
            mock_server,
            action_rx,
            ctx: SideEffectContext {
                client: Arc::new(client),
                tx,
                task_tracker: TaskTracker::new(),
                reasonable_wait,
            },
        }
    }

    /// Run the side effects of `action` and collect what the spawned tasks send.
    ///
    /// `handle_side_effects` must return promptly; it only spawns work.
    pub async fn handle_and_collect(&mut self, action: Action, timeout_secs: u64) -> Vec<Action> {
        tokio::time::timeout(
            Duration::from_millis(100),
            handle_side_effects(&action, &self.ctx),
        )
        .await
        .expect("handle_side_effects should not block on network I/O");

        self.ctx.task_tracker.close();
        let _ = tokio::time::timeout(
            Duration::from_secs(timeout_secs),
            self.ctx.task_tracker.wait(),
        )
        .await;

        let mut actions = Vec::new();
        while let Ok(action) = self.action_rx.try_recv() {
            actions.push(action);
        }
        actions
    }
}

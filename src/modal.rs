use std::time::Duration;

use crate::{Error, Event, EventPort, MessageHandle, Result, WindowRef};

/// Phase of a modal menu tracking session.
///
/// The session is an explicit state machine rather than a nest of
/// callbacks, so the cooperative loop's control flow is auditable:
///
/// ```text
/// Tracking --(menu item chosen)--> Selecting
/// Tracking --(menu closed / quit predicate / port closed)--> Quitting
/// ```
///
/// `Selecting` and `Quitting` are terminal; [`MenuSession::run`] returns
/// the one it reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackingState {
    /// Reading popup-port events, ticking the tracker periodically.
    Tracking,
    /// An item was chosen and handed to the tracker.
    Selecting,
    /// The session unwound without a selection.
    Quitting,
}

/// Collaborator hooks driving a modal menu session.
///
/// Supplied by the menu logic that owns the popup; the session turns
/// popup-port traffic and timeout ticks into calls on this trait.
pub trait MenuTracker {
    /// An item was chosen. Receives the ownership-transferred item data.
    fn on_select(&mut self, window: WindowRef, item: MessageHandle) -> Result;

    /// Periodic tick, run on every timeout expiry so the rest of the UI
    /// stays responsive while the session is modal.
    fn redisplay(&mut self) -> Result;

    /// Polled before each wait to decide whether to unwind the session,
    /// e.g. because an external quit request arrived on the main port.
    fn should_quit(&self) -> bool {
        false
    }

    /// Bound for the next wait; the tick interval of the session.
    fn next_deadline(&self) -> Duration {
        Duration::from_millis(100)
    }
}

/// A modal popup-menu sub-loop.
///
/// Runs cooperatively on the consumer thread, in parallel with nothing:
/// the main dispatch loop is suspended while a menu is tracked. It reads
/// from the dedicated popup port only, so tracking never has to interleave
/// against unrelated main-port traffic, and main-port envelopes written
/// meanwhile are simply still queued when the session ends.
pub struct MenuSession<'a> {
    port: &'a EventPort,
    state: TrackingState,
}

impl<'a> MenuSession<'a> {
    /// Create a session over the popup port
    /// ([`Bridge::popup`](crate::Bridge::popup)).
    pub fn new(port: &'a EventPort) -> Self {
        Self {
            port,
            state: TrackingState::Tracking,
        }
    }

    /// Current phase of the session.
    pub fn state(&self) -> TrackingState {
        self.state
    }

    /// Track the menu until an item is chosen or the session unwinds.
    ///
    /// Returns the terminal state: [`TrackingState::Selecting`] after the
    /// tracker received a selection, [`TrackingState::Quitting`] when the
    /// menu closed, the quit predicate fired, or the port was torn down.
    pub fn run<T: MenuTracker>(&mut self, tracker: &mut T) -> Result<TrackingState> {
        self.state = TrackingState::Tracking;
        tracing::debug!("menu tracking started");
        loop {
            match self.state {
                TrackingState::Tracking => {}
                terminal => {
                    tracing::debug!(state = ?terminal, "menu tracking finished");
                    return Ok(terminal);
                }
            }
            if tracker.should_quit() {
                self.state = TrackingState::Quitting;
                continue;
            }
            match self.port.read_with_timeout(tracker.next_deadline()) {
                Ok(envelope) => self.step(tracker, envelope.into_event())?,
                Err(Error::Timeout) => tracker.redisplay()?,
                Err(_) => self.state = TrackingState::Quitting,
            }
        }
    }

    fn step<T: MenuTracker>(&mut self, tracker: &mut T, event: Event) -> Result {
        match event {
            Event::MenuBarSelect { window, item } => {
                tracker.on_select(window, item)?;
                self.state = TrackingState::Selecting;
            }
            Event::MenuBarClose { .. } | Event::AppQuitRequested => {
                self.state = TrackingState::Quitting;
            }
            Event::Dummy => {}
            other => {
                tracing::trace!(kind = %other.kind(), "ignoring non-menu event while tracking");
            }
        }
        Ok(())
    }
}

//! # Eventport
//!
//! A bounded, ordered cross-thread event bridge for native UI toolkits.
//!
//! Eventport is the boundary layer between a toolkit that runs its own
//! event loop on a separate thread and a single-threaded application that
//! consumes the resulting input. Toolkit callbacks write typed event
//! records into a port; the application thread reads them back, one at a
//! time, in exactly the order they were written, and routes each to a
//! handler.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::thread;
//! use eventport::{Arena, Bridge, Dispatch, Dispatcher, Event, Flow, KeyEvent, Modifiers,
//!                 Result, WindowRef};
//!
//! struct Echo;
//!
//! impl Dispatch for Echo {
//!     fn on_key_down(&mut self, key: KeyEvent) -> Result<Flow> {
//!         println!("keysym {} ({})", key.keysym, key.codepoint);
//!         Ok(Flow::Continue)
//!     }
//! }
//!
//! fn main() -> Result {
//!     let mut windows = Arena::new();
//!     let window = WindowRef::from(windows.insert("main"));
//!
//!     let bridge = Bridge::default();
//!     let writer = bridge.main_writer();
//!     let toolkit = thread::spawn(move || -> Result {
//!         writer.write(Event::KeyDown(KeyEvent {
//!             window,
//!             modifiers: Modifiers::CTRL,
//!             keysym: 65,
//!             codepoint: 'A',
//!             time: 1000,
//!         }))?;
//!         writer.write(Event::AppQuitRequested)
//!     });
//!
//!     Dispatcher::new(bridge.main()).run(&mut Echo)?;
//!     toolkit.join().expect("toolkit thread panicked")
//! }
//! ```
//!
//! ## Core Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Event`] | Sum type of all UI event records (one variant per [`EventKind`]) |
//! | [`Envelope`] | One transported record: the event plus [`Meta`] (sequence, enqueue time) |
//! | [`EventPort`] | Bounded, FIFO, multi-writer/single-reader transport |
//! | [`Bridge`] | Context object owning the two ports (main and popup-menu) |
//! | [`PortWriter`] | Cloneable producer handle, moved into the toolkit thread |
//! | [`Dispatch`] / [`Dispatcher`] | Per-kind handlers and the consumer loop driving them |
//! | [`MenuTracker`] / [`MenuSession`] | Hooks and state machine for modal popup-menu tracking |
//! | [`Arena`] / [`WindowRef`] | Liveness-validated weak references to toolkit objects |
//! | [`MessageHandle`] | Owned, opaque payload transferred through certain events |
//! | [`OverflowPolicy`] | What a write does when the port is full |
//!
//! ## Write Disciplines
//!
//! [`EventPort::write`] wakes a blocked reader, guaranteeing prompt
//! delivery. [`EventPort::write_silent`] appends without waking, for
//! restricted callbacks where raising a wake condition is unsafe; the
//! envelope is picked up at the reader's next wake or poll. Producers
//! never block the toolkit thread under the default
//! [`OverflowPolicy::Fail`]; opt into [`OverflowPolicy::Block`] for events
//! that must arrive.
//!
//! ## Shutdown
//!
//! There is no cancellation of an in-flight blocking read. Graceful
//! shutdown is in-band: the producer writes [`Event::AppQuitRequested`],
//! which the dispatcher recognizes and exits on. Tearing the bridge down
//! with [`Bridge::close`] wakes every blocked reader and writer; envelopes
//! already accepted are still drained.

mod arena;
mod bridge;
mod config;
mod dispatcher;
mod envelope;
mod error;
mod event;
mod flow;
mod handle;
mod kind;
mod meta;
mod modal;
mod modifiers;
mod overflow;
mod port;
mod records;
mod writer;

pub mod testing;

pub use arena::{Arena, ObjectId};
pub use bridge::Bridge;
pub use config::BridgeConfig;
pub use dispatcher::{dispatch_event, Dispatch, Dispatcher, IdleStrategy};
pub use envelope::Envelope;
pub use error::Error;
pub use event::Event;
pub use flow::Flow;
pub use handle::{HandleId, MessageHandle, ScrollBarRef, WindowRef};
pub use kind::EventKind;
pub use meta::Meta;
pub use modal::{MenuSession, MenuTracker, TrackingState};
pub use modifiers::Modifiers;
pub use overflow::OverflowPolicy;
pub use port::EventPort;
pub use records::{ButtonEvent, KeyEvent, MotionEvent, ScrollBarPart};
pub use writer::PortWriter;

/// Convenience alias for `Result<T, eventport::Error>`.
pub type Result<T = ()> = std::result::Result<T, Error>;

use std::collections::VecDeque;
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use crate::{Envelope, Error, Event, OverflowPolicy, Result};

/// Bounded, ordered, multi-writer/single-reader transport for envelopes.
///
/// The port serializes concurrent writers internally, so envelopes come out
/// in exactly the order they were appended, regardless of which producer
/// thread wrote them. No ordering holds *between* two port instances; a
/// consumer polling both the main and the popup port during a modal session
/// must not assume any interleave.
///
/// Two write disciplines exist:
///
/// - [`write`](Self::write) appends and wakes a reader blocked in
///   [`read`](Self::read) / [`read_with_timeout`](Self::read_with_timeout),
///   guaranteeing prompt delivery.
/// - [`write_silent`](Self::write_silent) appends without any wake signal,
///   for calling contexts where raising one is unsafe. The envelope is
///   still observed by the next [`peek_size`](Self::peek_size) or read
///   call; only delivery latency changes, never correctness.
///
/// Suspension points are exactly [`read`](Self::read),
/// [`read_with_timeout`](Self::read_with_timeout) and a write under
/// [`OverflowPolicy::Block`]; everything else returns immediately.
pub struct EventPort {
    state: Mutex<PortState>,
    readable: Condvar,
    writable: Condvar,
    capacity: usize,
}

struct PortState {
    queue: VecDeque<Envelope>,
    next_seq: u64,
    closed: bool,
}

impl EventPort {
    /// Create a port holding at most `capacity` envelopes (clamped to 1).
    pub fn bounded(capacity: usize) -> Self {
        Self {
            state: Mutex::new(PortState {
                queue: VecDeque::new(),
                next_seq: 0,
                closed: false,
            }),
            readable: Condvar::new(),
            writable: Condvar::new(),
            capacity: capacity.max(1),
        }
    }

    /// Maximum number of queued envelopes.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // A poisoned mutex only means another thread panicked mid-operation;
    // the queue itself is still structurally valid, so keep going.
    fn lock(&self) -> MutexGuard<'_, PortState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append an envelope and wake one blocked reader.
    ///
    /// # Errors
    ///
    /// [`Error::PortFull`] when full under [`OverflowPolicy::Fail`];
    /// [`Error::Closed`] once the port has been torn down.
    pub fn write(&self, event: Event, policy: OverflowPolicy) -> Result {
        self.push(event, policy, true)
    }

    /// Append an envelope without waking anyone.
    ///
    /// For contexts that cannot safely raise a wake condition. A reader
    /// blocked in [`read`](Self::read) stays blocked until a signaling
    /// write arrives; one blocked in
    /// [`read_with_timeout`](Self::read_with_timeout) picks the envelope
    /// up at its next wake.
    ///
    /// # Errors
    ///
    /// Same as [`write`](Self::write).
    pub fn write_silent(&self, event: Event, policy: OverflowPolicy) -> Result {
        self.push(event, policy, false)
    }

    fn push(&self, event: Event, policy: OverflowPolicy, signal: bool) -> Result {
        let mut state = self.lock();
        loop {
            if state.closed {
                return Err(Error::Closed);
            }
            if state.queue.len() < self.capacity {
                break;
            }
            match policy {
                OverflowPolicy::Fail => {
                    tracing::warn!(
                        kind = %event.kind(),
                        capacity = self.capacity,
                        "port full, rejecting write"
                    );
                    return Err(Error::PortFull);
                }
                OverflowPolicy::Block => {
                    state = self
                        .writable
                        .wait(state)
                        .unwrap_or_else(PoisonError::into_inner);
                }
            }
        }
        let seq = state.next_seq;
        state.next_seq += 1;
        state.queue.push_back(Envelope::new(event, seq));
        drop(state);
        if signal {
            self.readable.notify_one();
        }
        Ok(())
    }

    /// Remove and return the oldest envelope, blocking until one arrives.
    ///
    /// # Errors
    ///
    /// [`Error::Closed`] once the port is closed and drained.
    pub fn read(&self) -> Result<Envelope> {
        let mut state = self.lock();
        loop {
            if let Some(envelope) = state.queue.pop_front() {
                drop(state);
                self.writable.notify_one();
                return Ok(envelope);
            }
            if state.closed {
                return Err(Error::Closed);
            }
            state = self
                .readable
                .wait(state)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    /// Like [`read`](Self::read), but gives up after `timeout`.
    ///
    /// # Errors
    ///
    /// [`Error::Timeout`] if no envelope arrived within the bound — a
    /// routine condition the consumer uses to schedule idle work (cursor
    /// blink, redisplay). Never returned before at least `timeout` has
    /// elapsed. [`Error::Closed`] once the port is closed and drained.
    pub fn read_with_timeout(&self, timeout: Duration) -> Result<Envelope> {
        let deadline = Instant::now() + timeout;
        let mut state = self.lock();
        loop {
            if let Some(envelope) = state.queue.pop_front() {
                drop(state);
                self.writable.notify_one();
                return Ok(envelope);
            }
            if state.closed {
                return Err(Error::Closed);
            }
            let now = Instant::now();
            let Some(remaining) = deadline.checked_duration_since(now).filter(|d| !d.is_zero())
            else {
                return Err(Error::Timeout);
            };
            let (guard, _) = self
                .readable
                .wait_timeout(state, remaining)
                .unwrap_or_else(PoisonError::into_inner);
            state = guard;
        }
    }

    /// Size in bytes of the next pending envelope's payload, or `None` when
    /// the queue is empty. Non-blocking and idempotent: repeated calls with
    /// no intervening read return the same answer.
    pub fn peek_size(&self) -> Option<usize> {
        self.lock().queue.front().map(Envelope::payload_size)
    }

    /// Number of queued envelopes.
    pub fn len(&self) -> usize {
        self.lock().queue.len()
    }

    /// Whether no envelopes are queued.
    pub fn is_empty(&self) -> bool {
        self.lock().queue.is_empty()
    }

    /// Whether [`close`](Self::close) has been called.
    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }

    /// Tear the port down.
    ///
    /// Every blocked reader and writer wakes up; subsequent writes fail
    /// with [`Error::Closed`]. Reads drain whatever is still queued before
    /// failing, so nothing already accepted is lost.
    pub fn close(&self) {
        let mut state = self.lock();
        if state.closed {
            return;
        }
        state.closed = true;
        let pending = state.queue.len();
        drop(state);
        tracing::debug!(pending, "port closed");
        self.readable.notify_all();
        self.writable.notify_all();
    }
}

impl std::fmt::Debug for EventPort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.lock();
        f.debug_struct("EventPort")
            .field("capacity", &self.capacity)
            .field("len", &state.queue.len())
            .field("closed", &state.closed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Arena, ButtonEvent, EventKind, KeyEvent, MessageHandle, Modifiers, MotionEvent,
        ScrollBarPart, ScrollBarRef, WindowRef,
    };
    use std::sync::Arc;
    use std::thread;

    fn window() -> WindowRef {
        let mut arena = Arena::new();
        WindowRef::from(arena.insert(()))
    }

    fn moved(x: i32) -> Event {
        Event::Moved {
            window: window(),
            x,
            y: 0,
        }
    }

    #[test]
    fn fifo_order_single_writer() {
        let port = EventPort::bounded(16);
        for x in 0..10 {
            port.write(moved(x), OverflowPolicy::Fail).unwrap();
        }
        for x in 0..10 {
            let envelope = port.read().unwrap();
            assert_eq!(envelope.seq(), x as u64);
            assert!(matches!(envelope.into_event(), Event::Moved { x: got, .. } if got == x));
        }
        assert!(port.is_empty());
    }

    #[test]
    fn peek_size_is_idempotent_and_nonblocking() {
        let port = EventPort::bounded(4);
        assert_eq!(port.peek_size(), None);

        let key = Event::KeyDown(KeyEvent {
            window: window(),
            modifiers: Modifiers::CTRL,
            keysym: 65,
            codepoint: 'A',
            time: 1000,
        });
        let expected = key.payload_size();
        port.write(key, OverflowPolicy::Fail).unwrap();
        port.write(Event::Dummy, OverflowPolicy::Fail).unwrap();

        assert_eq!(port.peek_size(), Some(expected));
        assert_eq!(port.peek_size(), Some(expected));
        port.read().unwrap();
        assert_eq!(port.peek_size(), Some(0));
    }

    #[test]
    fn fail_policy_rejects_when_full() {
        let port = EventPort::bounded(2);
        port.write(Event::Dummy, OverflowPolicy::Fail).unwrap();
        port.write(Event::Dummy, OverflowPolicy::Fail).unwrap();
        assert_eq!(
            port.write(Event::Dummy, OverflowPolicy::Fail),
            Err(Error::PortFull)
        );
        // The rejected write left the queue intact.
        assert_eq!(port.len(), 2);
    }

    #[test]
    fn block_policy_waits_for_space() {
        let port = Arc::new(EventPort::bounded(1));
        port.write(moved(0), OverflowPolicy::Fail).unwrap();

        let writer = {
            let port = Arc::clone(&port);
            thread::spawn(move || port.write(moved(1), OverflowPolicy::Block))
        };

        thread::sleep(Duration::from_millis(20));
        assert_eq!(port.len(), 1);

        let first = port.read().unwrap();
        assert!(matches!(first.event(), Event::Moved { x: 0, .. }));
        writer.join().unwrap().unwrap();
        let second = port.read().unwrap();
        assert!(matches!(second.event(), Event::Moved { x: 1, .. }));
    }

    #[test]
    fn timeout_respects_lower_bound() {
        // Scenario B: no writes occur, the read times out, and not early.
        let port = EventPort::bounded(4);
        let bound = Duration::from_millis(50);
        let start = Instant::now();
        assert_eq!(port.read_with_timeout(bound), Err(Error::Timeout));
        assert!(start.elapsed() >= bound);
    }

    #[test]
    fn scenario_a_key_down_round_trip() {
        let port = EventPort::bounded(4);
        let w = window();
        let key = KeyEvent {
            window: w,
            modifiers: Modifiers::CTRL,
            keysym: 65,
            codepoint: 'A',
            time: 1000,
        };
        port.write(Event::KeyDown(key), OverflowPolicy::Fail).unwrap();

        let envelope = port.read_with_timeout(Duration::from_micros(5000)).unwrap();
        assert_eq!(envelope.kind(), EventKind::KeyDown);
        assert_eq!(envelope.into_event(), Event::KeyDown(key));
    }

    /// One fully-populated event of every kind, in a fixed order. `seed`
    /// varies the field values between invocations.
    fn one_of_each(seed: i32, w: WindowRef, sb: ScrollBarRef) -> Vec<Event> {
        let t = seed as u64;
        let key = KeyEvent {
            window: w,
            modifiers: Modifiers::CTRL,
            keysym: 65 + seed as u32,
            codepoint: 'A',
            time: t,
        };
        let button = ButtonEvent {
            window: w,
            button: 1,
            modifiers: Modifiers::ALT,
            x: seed,
            y: -seed,
            time: t,
        };
        vec![
            Event::QuitRequested { window: w },
            Event::FrameResized {
                window: w,
                width: 800.0 + seed as f32,
                height: 600.0,
            },
            Event::FrameExposed {
                window: w,
                x: seed,
                y: 2,
                width: 30,
                height: 40,
            },
            Event::KeyDown(key),
            Event::KeyUp(key),
            Event::Activation {
                window: w,
                activated: seed % 2 == 0,
            },
            Event::MouseMotion(MotionEvent {
                window: w,
                just_exited: false,
                x: seed,
                y: seed + 1,
                time: t,
                drag_message: true,
            }),
            Event::ButtonDown(button),
            Event::ButtonUp(button),
            Event::Iconification {
                window: w,
                iconified: true,
            },
            Event::Moved {
                window: w,
                x: seed,
                y: seed + 1,
            },
            Event::ScrollBarValue {
                scroll_bar: sb,
                window: w,
                position: seed,
            },
            Event::ScrollBarPart {
                scroll_bar: sb,
                window: w,
                part: ScrollBarPart::UpButton,
            },
            Event::ScrollBarDrag {
                scroll_bar: sb,
                window: w,
                dragging: seed % 2 == 1,
            },
            Event::WheelMove {
                window: w,
                modifiers: Modifiers::SHIFT,
                delta_x: 0.5,
                delta_y: -1.5,
            },
            Event::MenuBarResized {
                window: w,
                width: 100 + seed,
                height: 20,
            },
            Event::MenuBarClick { window: w, x: 7, y: 8 },
            Event::MenuBarOpen { window: w },
            Event::MenuBarSelect {
                window: w,
                item: MessageHandle::new(format!("item-{seed}")),
            },
            Event::MenuBarClose { window: w },
            Event::FilePanelDone {
                result: MessageHandle::new(seed),
            },
            Event::MenuBarHelp {
                window: w,
                menu_bar_index: seed,
                data: MessageHandle::new(()),
                highlight: true,
            },
            Event::Zoomed {
                window: w,
                zoomed: false,
            },
            Event::DragAndDrop {
                window: w,
                x: 9,
                y: 10,
                message: MessageHandle::new(vec![seed]),
            },
            Event::AppQuitRequested,
            Event::Dummy,
            Event::MenuBarLeft {
                window: w,
                x: 11,
                y: 12,
            },
        ]
    }

    #[test]
    fn every_kind_round_trips_intact() {
        let mut arena = Arena::new();
        let w = WindowRef::from(arena.insert(()));
        let sb = ScrollBarRef::from(arena.insert(()));

        let events = one_of_each(1, w, sb);
        let distinct: std::collections::HashSet<EventKind> =
            events.iter().map(Event::kind).collect();
        assert_eq!(distinct.len(), 27);

        // Handle-carrying events cannot be kept as an owned copy, so record
        // the expectation before the write: the debug rendering captures
        // every field including handle identity, which survives the trip
        // because the handle itself moves through the port.
        let port = EventPort::bounded(events.len());
        let mut expected = Vec::new();
        for event in events {
            expected.push((event.kind(), event.payload_size(), format!("{event:?}")));
            port.write(event, OverflowPolicy::Fail).unwrap();
        }

        for (kind, size, rendering) in expected {
            let got = port.read().unwrap().into_event();
            assert_eq!(got.kind(), kind);
            assert_eq!(got.payload_size(), size);
            assert_eq!(format!("{got:?}"), rendering);
        }
        assert!(port.is_empty());

        // Payload size depends on the kind alone, never the field values.
        let first = one_of_each(3, w, sb);
        let second = one_of_each(4, w, sb);
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.kind(), b.kind());
            assert_eq!(a.payload_size(), b.payload_size());
        }
    }

    #[test]
    fn signaling_write_wakes_blocked_reader_promptly() {
        let port = Arc::new(EventPort::bounded(4));
        let reader = {
            let port = Arc::clone(&port);
            thread::spawn(move || {
                let start = Instant::now();
                let result = port.read_with_timeout(Duration::from_secs(30));
                (result, start.elapsed())
            })
        };

        thread::sleep(Duration::from_millis(30));
        port.write(Event::Dummy, OverflowPolicy::Fail).unwrap();

        let (result, elapsed) = reader.join().unwrap();
        assert_eq!(result.unwrap().kind(), EventKind::Dummy);
        // Woken by the write, not by the 30s timeout expiring.
        assert!(elapsed < Duration::from_secs(5));
    }

    #[test]
    fn silent_write_is_observed_at_next_wake() {
        let port = Arc::new(EventPort::bounded(4));
        let reader = {
            let port = Arc::clone(&port);
            thread::spawn(move || port.read_with_timeout(Duration::from_millis(100)))
        };

        thread::sleep(Duration::from_millis(20));
        port.write_silent(moved(9), OverflowPolicy::Fail).unwrap();

        // No wake signal was raised, so the reader picks the envelope up
        // when its timeout expires and it rechecks the queue.
        let envelope = reader.join().unwrap().unwrap();
        assert!(matches!(envelope.event(), Event::Moved { x: 9, .. }));

        // And a silent write is immediately visible to a poll.
        port.write_silent(Event::Dummy, OverflowPolicy::Fail).unwrap();
        assert_eq!(port.peek_size(), Some(0));
    }

    #[test]
    fn concurrent_writers_no_loss_no_duplication() {
        const WRITERS: usize = 4;
        const PER_WRITER: i32 = 50;

        let port = Arc::new(EventPort::bounded(WRITERS * PER_WRITER as usize));
        let mut producers = Vec::new();
        for writer in 0..WRITERS as i32 {
            let port = Arc::clone(&port);
            producers.push(thread::spawn(move || {
                for n in 0..PER_WRITER {
                    port.write(moved(writer * PER_WRITER + n), OverflowPolicy::Block)
                        .unwrap();
                }
            }));
        }
        for producer in producers {
            producer.join().unwrap();
        }

        let mut seen = Vec::new();
        let mut last_seq = None;
        while let Ok(envelope) = port.read_with_timeout(Duration::from_millis(10)) {
            // Sequence numbers are strictly increasing across all writers.
            assert!(last_seq < Some(envelope.seq()));
            last_seq = Some(envelope.seq());
            if let Event::Moved { x, .. } = envelope.into_event() {
                seen.push(x);
            }
        }

        assert_eq!(seen.len(), WRITERS * PER_WRITER as usize);
        // Per-writer FIFO: each writer's payloads appear in its own order.
        for writer in 0..WRITERS as i32 {
            let own: Vec<i32> = seen
                .iter()
                .copied()
                .filter(|x| x / PER_WRITER == writer)
                .collect();
            let expected: Vec<i32> =
                (writer * PER_WRITER..(writer + 1) * PER_WRITER).collect();
            assert_eq!(own, expected);
        }
    }

    #[test]
    fn close_wakes_blocked_reader_and_drains_residue() {
        let port = Arc::new(EventPort::bounded(4));
        port.write(Event::Dummy, OverflowPolicy::Fail).unwrap();

        let reader = {
            let port = Arc::clone(&port);
            thread::spawn(move || {
                let first = port.read();
                let second = port.read();
                (first, second)
            })
        };

        thread::sleep(Duration::from_millis(20));
        port.close();

        let (first, second) = reader.join().unwrap();
        // The envelope accepted before close is still delivered.
        assert_eq!(first.unwrap().kind(), EventKind::Dummy);
        assert_eq!(second, Err(Error::Closed));
        assert_eq!(
            port.write(Event::Dummy, OverflowPolicy::Block),
            Err(Error::Closed)
        );
    }

    #[test]
    fn close_unblocks_blocked_writer() {
        let port = Arc::new(EventPort::bounded(1));
        port.write(Event::Dummy, OverflowPolicy::Fail).unwrap();

        let writer = {
            let port = Arc::clone(&port);
            thread::spawn(move || port.write(Event::Dummy, OverflowPolicy::Block))
        };

        thread::sleep(Duration::from_millis(20));
        port.close();
        assert_eq!(writer.join().unwrap(), Err(Error::Closed));
    }
}

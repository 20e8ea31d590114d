//! Test utilities for asserting on dispatched events.
//!
//! [`EventRecorder`] is a [`Dispatch`] implementation that records the kind
//! of every event routed to it, and can be told to quit the loop when a
//! chosen kind arrives:
//!
//! ```rust
//! use eventport::testing::EventRecorder;
//! use eventport::{Dispatcher, Event, EventKind, EventPort, OverflowPolicy};
//!
//! let port = EventPort::bounded(8);
//! port.write(Event::Dummy, OverflowPolicy::Fail).unwrap();
//! port.write(Event::AppQuitRequested, OverflowPolicy::Fail).unwrap();
//!
//! let mut recorder = EventRecorder::new();
//! Dispatcher::new(&port).run(&mut recorder).unwrap();
//! assert_eq!(recorder.kinds(), &[EventKind::AppQuitRequested]);
//! ```
//!
//! Note that [`Event::Dummy`] reaches no handler and is therefore never
//! recorded.

use crate::{
    ButtonEvent, Dispatch, EventKind, Flow, KeyEvent, MessageHandle, Modifiers, MotionEvent,
    Result, ScrollBarPart, ScrollBarRef, WindowRef,
};

/// Records the kind of every dispatched event, in dispatch order.
#[derive(Debug, Default)]
pub struct EventRecorder {
    kinds: Vec<EventKind>,
    quit_on: Option<EventKind>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return [`Flow::Quit`] from the handler of the given kind.
    /// `AppQuitRequested` always quits, with or without this.
    pub fn quit_on(mut self, kind: EventKind) -> Self {
        self.quit_on = Some(kind);
        self
    }

    /// Kinds recorded so far, in dispatch order.
    pub fn kinds(&self) -> &[EventKind] {
        &self.kinds
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.kinds.clear();
    }

    fn record(&mut self, kind: EventKind) -> Result<Flow> {
        self.kinds.push(kind);
        if self.quit_on == Some(kind) {
            Ok(Flow::Quit)
        } else {
            Ok(Flow::Continue)
        }
    }
}

impl Dispatch for EventRecorder {
    fn on_quit_requested(&mut self, _: WindowRef) -> Result<Flow> {
        self.record(EventKind::QuitRequested)
    }

    fn on_frame_resized(&mut self, _: WindowRef, _: f32, _: f32) -> Result<Flow> {
        self.record(EventKind::FrameResized)
    }

    fn on_frame_exposed(&mut self, _: WindowRef, _: i32, _: i32, _: i32, _: i32) -> Result<Flow> {
        self.record(EventKind::FrameExposed)
    }

    fn on_key_down(&mut self, _: KeyEvent) -> Result<Flow> {
        self.record(EventKind::KeyDown)
    }

    fn on_key_up(&mut self, _: KeyEvent) -> Result<Flow> {
        self.record(EventKind::KeyUp)
    }

    fn on_activation(&mut self, _: WindowRef, _: bool) -> Result<Flow> {
        self.record(EventKind::Activation)
    }

    fn on_mouse_motion(&mut self, _: MotionEvent) -> Result<Flow> {
        self.record(EventKind::MouseMotion)
    }

    fn on_button_down(&mut self, _: ButtonEvent) -> Result<Flow> {
        self.record(EventKind::ButtonDown)
    }

    fn on_button_up(&mut self, _: ButtonEvent) -> Result<Flow> {
        self.record(EventKind::ButtonUp)
    }

    fn on_iconification(&mut self, _: WindowRef, _: bool) -> Result<Flow> {
        self.record(EventKind::Iconification)
    }

    fn on_moved(&mut self, _: WindowRef, _: i32, _: i32) -> Result<Flow> {
        self.record(EventKind::Moved)
    }

    fn on_scroll_bar_value(&mut self, _: ScrollBarRef, _: WindowRef, _: i32) -> Result<Flow> {
        self.record(EventKind::ScrollBarValue)
    }

    fn on_scroll_bar_part(
        &mut self,
        _: ScrollBarRef,
        _: WindowRef,
        _: ScrollBarPart,
    ) -> Result<Flow> {
        self.record(EventKind::ScrollBarPart)
    }

    fn on_scroll_bar_drag(&mut self, _: ScrollBarRef, _: WindowRef, _: bool) -> Result<Flow> {
        self.record(EventKind::ScrollBarDrag)
    }

    fn on_wheel_move(&mut self, _: WindowRef, _: Modifiers, _: f32, _: f32) -> Result<Flow> {
        self.record(EventKind::WheelMove)
    }

    fn on_menu_bar_resized(&mut self, _: WindowRef, _: i32, _: i32) -> Result<Flow> {
        self.record(EventKind::MenuBarResized)
    }

    fn on_menu_bar_click(&mut self, _: WindowRef, _: i32, _: i32) -> Result<Flow> {
        self.record(EventKind::MenuBarClick)
    }

    fn on_menu_bar_open(&mut self, _: WindowRef) -> Result<Flow> {
        self.record(EventKind::MenuBarOpen)
    }

    fn on_menu_bar_select(&mut self, _: WindowRef, _: MessageHandle) -> Result<Flow> {
        self.record(EventKind::MenuBarSelect)
    }

    fn on_menu_bar_close(&mut self, _: WindowRef) -> Result<Flow> {
        self.record(EventKind::MenuBarClose)
    }

    fn on_file_panel_done(&mut self, _: MessageHandle) -> Result<Flow> {
        self.record(EventKind::FilePanelDone)
    }

    fn on_menu_bar_help(
        &mut self,
        _: WindowRef,
        _: i32,
        _: MessageHandle,
        _: bool,
    ) -> Result<Flow> {
        self.record(EventKind::MenuBarHelp)
    }

    fn on_zoomed(&mut self, _: WindowRef, _: bool) -> Result<Flow> {
        self.record(EventKind::Zoomed)
    }

    fn on_drag_and_drop(&mut self, _: WindowRef, _: i32, _: i32, _: MessageHandle) -> Result<Flow> {
        self.record(EventKind::DragAndDrop)
    }

    fn on_app_quit_requested(&mut self) -> Result<Flow> {
        self.kinds.push(EventKind::AppQuitRequested);
        Ok(Flow::Quit)
    }

    fn on_menu_bar_left(&mut self, _: WindowRef, _: i32, _: i32) -> Result<Flow> {
        self.record(EventKind::MenuBarLeft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dispatch_event, Arena, Event};

    #[test]
    fn records_in_dispatch_order_and_quits_on_request() {
        let mut arena = Arena::new();
        let w = WindowRef::from(arena.insert(()));

        let mut recorder = EventRecorder::new().quit_on(EventKind::QuitRequested);
        assert!(recorder.is_empty());

        let flow = dispatch_event(
            &mut recorder,
            Event::Zoomed {
                window: w,
                zoomed: true,
            },
        )
        .unwrap();
        assert!(!flow.is_quit());

        let flow = dispatch_event(&mut recorder, Event::QuitRequested { window: w }).unwrap();
        assert!(flow.is_quit());

        assert_eq!(
            recorder.kinds(),
            &[EventKind::Zoomed, EventKind::QuitRequested]
        );
        assert_eq!(recorder.len(), 2);
        recorder.clear();
        assert!(recorder.is_empty());
    }
}

use std::time::Duration;

use crate::{
    ButtonEvent, Event, EventPort, Flow, KeyEvent, MessageHandle, Modifiers, MotionEvent, Result,
    ScrollBarPart, ScrollBarRef, WindowRef,
};

/// Consumer-side event handlers, one per kind.
///
/// Implement the methods for the kinds you care about; every handler
/// defaults to `Ok(Flow::Continue)` except
/// [`on_app_quit_requested`](Self::on_app_quit_requested), which defaults
/// to `Ok(Flow::Quit)` so the distinguished shutdown envelope unwinds the
/// loop without any extra wiring.
///
/// Handlers run synchronously on the dispatching thread and may call back
/// into toolkit operations before returning; the next envelope is not read
/// until the handler returns, so handler execution time adds directly to
/// input latency. Keep handlers short or hand expensive work off.
///
/// Handler errors propagate out of [`Dispatcher::run`]; deal with
/// collaborator failures inside the handler when the loop should survive
/// them.
#[allow(unused_variables)]
pub trait Dispatch {
    fn on_quit_requested(&mut self, window: WindowRef) -> Result<Flow> {
        Ok(Flow::Continue)
    }

    fn on_frame_resized(&mut self, window: WindowRef, width: f32, height: f32) -> Result<Flow> {
        Ok(Flow::Continue)
    }

    fn on_frame_exposed(
        &mut self,
        window: WindowRef,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    ) -> Result<Flow> {
        Ok(Flow::Continue)
    }

    fn on_key_down(&mut self, event: KeyEvent) -> Result<Flow> {
        Ok(Flow::Continue)
    }

    fn on_key_up(&mut self, event: KeyEvent) -> Result<Flow> {
        Ok(Flow::Continue)
    }

    fn on_activation(&mut self, window: WindowRef, activated: bool) -> Result<Flow> {
        Ok(Flow::Continue)
    }

    fn on_mouse_motion(&mut self, event: MotionEvent) -> Result<Flow> {
        Ok(Flow::Continue)
    }

    fn on_button_down(&mut self, event: ButtonEvent) -> Result<Flow> {
        Ok(Flow::Continue)
    }

    fn on_button_up(&mut self, event: ButtonEvent) -> Result<Flow> {
        Ok(Flow::Continue)
    }

    fn on_iconification(&mut self, window: WindowRef, iconified: bool) -> Result<Flow> {
        Ok(Flow::Continue)
    }

    fn on_moved(&mut self, window: WindowRef, x: i32, y: i32) -> Result<Flow> {
        Ok(Flow::Continue)
    }

    fn on_scroll_bar_value(
        &mut self,
        scroll_bar: ScrollBarRef,
        window: WindowRef,
        position: i32,
    ) -> Result<Flow> {
        Ok(Flow::Continue)
    }

    fn on_scroll_bar_part(
        &mut self,
        scroll_bar: ScrollBarRef,
        window: WindowRef,
        part: ScrollBarPart,
    ) -> Result<Flow> {
        Ok(Flow::Continue)
    }

    fn on_scroll_bar_drag(
        &mut self,
        scroll_bar: ScrollBarRef,
        window: WindowRef,
        dragging: bool,
    ) -> Result<Flow> {
        Ok(Flow::Continue)
    }

    fn on_wheel_move(
        &mut self,
        window: WindowRef,
        modifiers: Modifiers,
        delta_x: f32,
        delta_y: f32,
    ) -> Result<Flow> {
        Ok(Flow::Continue)
    }

    fn on_menu_bar_resized(&mut self, window: WindowRef, width: i32, height: i32) -> Result<Flow> {
        Ok(Flow::Continue)
    }

    fn on_menu_bar_click(&mut self, window: WindowRef, x: i32, y: i32) -> Result<Flow> {
        Ok(Flow::Continue)
    }

    fn on_menu_bar_open(&mut self, window: WindowRef) -> Result<Flow> {
        Ok(Flow::Continue)
    }

    /// `item` transfers ownership of the producer-allocated menu item data.
    fn on_menu_bar_select(&mut self, window: WindowRef, item: MessageHandle) -> Result<Flow> {
        Ok(Flow::Continue)
    }

    fn on_menu_bar_close(&mut self, window: WindowRef) -> Result<Flow> {
        Ok(Flow::Continue)
    }

    /// `result` transfers ownership of the file panel's result data.
    fn on_file_panel_done(&mut self, result: MessageHandle) -> Result<Flow> {
        Ok(Flow::Continue)
    }

    /// `data` transfers ownership of the help item data.
    fn on_menu_bar_help(
        &mut self,
        window: WindowRef,
        menu_bar_index: i32,
        data: MessageHandle,
        highlight: bool,
    ) -> Result<Flow> {
        Ok(Flow::Continue)
    }

    fn on_zoomed(&mut self, window: WindowRef, zoomed: bool) -> Result<Flow> {
        Ok(Flow::Continue)
    }

    /// `message` transfers ownership of the dropped data.
    fn on_drag_and_drop(
        &mut self,
        window: WindowRef,
        x: i32,
        y: i32,
        message: MessageHandle,
    ) -> Result<Flow> {
        Ok(Flow::Continue)
    }

    fn on_app_quit_requested(&mut self) -> Result<Flow> {
        Ok(Flow::Quit)
    }

    fn on_menu_bar_left(&mut self, window: WindowRef, x: i32, y: i32) -> Result<Flow> {
        Ok(Flow::Continue)
    }

    /// Called when an idle timeout elapses with no input pending
    /// (see [`IdleStrategy::Timeout`]). Perform periodic background work
    /// here: cursor blink, idle redisplay.
    fn on_idle(&mut self) -> Result {
        Ok(())
    }
}

/// Route one event to its kind's handler.
///
/// Ownership-transferring payloads are moved into the handler here; value
/// payloads are copied out of the variant. [`Event::Dummy`] reaches no
/// handler, it exists only to nudge a blocked reader.
pub fn dispatch_event<H: Dispatch + ?Sized>(handler: &mut H, event: Event) -> Result<Flow> {
    match event {
        Event::QuitRequested { window } => handler.on_quit_requested(window),
        Event::FrameResized {
            window,
            width,
            height,
        } => handler.on_frame_resized(window, width, height),
        Event::FrameExposed {
            window,
            x,
            y,
            width,
            height,
        } => handler.on_frame_exposed(window, x, y, width, height),
        Event::KeyDown(event) => handler.on_key_down(event),
        Event::KeyUp(event) => handler.on_key_up(event),
        Event::Activation { window, activated } => handler.on_activation(window, activated),
        Event::MouseMotion(event) => handler.on_mouse_motion(event),
        Event::ButtonDown(event) => handler.on_button_down(event),
        Event::ButtonUp(event) => handler.on_button_up(event),
        Event::Iconification { window, iconified } => handler.on_iconification(window, iconified),
        Event::Moved { window, x, y } => handler.on_moved(window, x, y),
        Event::ScrollBarValue {
            scroll_bar,
            window,
            position,
        } => handler.on_scroll_bar_value(scroll_bar, window, position),
        Event::ScrollBarPart {
            scroll_bar,
            window,
            part,
        } => handler.on_scroll_bar_part(scroll_bar, window, part),
        Event::ScrollBarDrag {
            scroll_bar,
            window,
            dragging,
        } => handler.on_scroll_bar_drag(scroll_bar, window, dragging),
        Event::WheelMove {
            window,
            modifiers,
            delta_x,
            delta_y,
        } => handler.on_wheel_move(window, modifiers, delta_x, delta_y),
        Event::MenuBarResized {
            window,
            width,
            height,
        } => handler.on_menu_bar_resized(window, width, height),
        Event::MenuBarClick { window, x, y } => handler.on_menu_bar_click(window, x, y),
        Event::MenuBarOpen { window } => handler.on_menu_bar_open(window),
        Event::MenuBarSelect { window, item } => handler.on_menu_bar_select(window, item),
        Event::MenuBarClose { window } => handler.on_menu_bar_close(window),
        Event::FilePanelDone { result } => handler.on_file_panel_done(result),
        Event::MenuBarHelp {
            window,
            menu_bar_index,
            data,
            highlight,
        } => handler.on_menu_bar_help(window, menu_bar_index, data, highlight),
        Event::Zoomed { window, zoomed } => handler.on_zoomed(window, zoomed),
        Event::DragAndDrop {
            window,
            x,
            y,
            message,
        } => handler.on_drag_and_drop(window, x, y, message),
        Event::AppQuitRequested => handler.on_app_quit_requested(),
        Event::Dummy => Ok(Flow::Continue),
        Event::MenuBarLeft { window, x, y } => handler.on_menu_bar_left(window, x, y),
    }
}

/// How the dispatch loop waits when no envelope is pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdleStrategy {
    /// Block indefinitely in [`EventPort::read`].
    Block,
    /// Block up to the given bound, run [`Dispatch::on_idle`] on expiry,
    /// then wait again.
    Timeout(Duration),
}

/// The consumer loop: reads envelopes from one port and routes each to its
/// handler, one at a time, on the calling thread.
///
/// Exactly one dispatcher should drain a given port; the bridge's ports
/// are single-reader by contract.
///
/// # Example
///
/// ```rust,ignore
/// let mut dispatcher = Dispatcher::new(bridge.main());
/// dispatcher.run(&mut my_handler)?;
/// ```
#[derive(Debug)]
pub struct Dispatcher<'a> {
    port: &'a EventPort,
    idle: IdleStrategy,
}

impl<'a> Dispatcher<'a> {
    /// Dispatcher that blocks indefinitely between envelopes.
    pub fn new(port: &'a EventPort) -> Self {
        Self {
            port,
            idle: IdleStrategy::Block,
        }
    }

    /// Dispatcher that wakes every `timeout` to run the idle hook.
    pub fn with_idle_timeout(port: &'a EventPort, timeout: Duration) -> Self {
        Self {
            port,
            idle: IdleStrategy::Timeout(timeout),
        }
    }

    /// The strategy used when no input is pending.
    pub fn idle_strategy(&self) -> IdleStrategy {
        self.idle
    }

    /// Run until a handler returns [`Flow::Quit`], the port closes, or a
    /// handler fails.
    ///
    /// Port closure is a clean exit (`Ok`): it means the bridge was torn
    /// down after the residue was drained.
    pub fn run<H: Dispatch>(&mut self, handler: &mut H) -> Result {
        loop {
            let envelope = match self.idle {
                IdleStrategy::Block => self.port.read(),
                IdleStrategy::Timeout(timeout) => match self.port.read_with_timeout(timeout) {
                    Err(crate::Error::Timeout) => {
                        handler.on_idle()?;
                        continue;
                    }
                    other => other,
                },
            };
            let envelope = match envelope {
                Ok(envelope) => envelope,
                Err(crate::Error::Closed) => {
                    tracing::debug!("port closed, leaving dispatch loop");
                    return Ok(());
                }
                Err(e) => return Err(e),
            };

            tracing::trace!(kind = %envelope.kind(), seq = envelope.seq(), "dispatching");
            if dispatch_event(handler, envelope.into_event())?.is_quit() {
                tracing::debug!("handler requested quit");
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Arena, EventKind, OverflowPolicy};
    use std::sync::Arc;
    use std::thread;

    fn window() -> WindowRef {
        let mut arena = Arena::new();
        WindowRef::from(arena.insert(()))
    }

    #[derive(Default)]
    struct Recorder {
        kinds: Vec<EventKind>,
        idle_ticks: usize,
    }

    impl Dispatch for Recorder {
        fn on_frame_resized(&mut self, _: WindowRef, width: f32, height: f32) -> Result<Flow> {
            assert_eq!((width, height), (800.0, 600.0));
            self.kinds.push(EventKind::FrameResized);
            Ok(Flow::Continue)
        }

        fn on_quit_requested(&mut self, _: WindowRef) -> Result<Flow> {
            self.kinds.push(EventKind::QuitRequested);
            Ok(Flow::Quit)
        }

        fn on_idle(&mut self) -> Result {
            self.idle_ticks += 1;
            Ok(())
        }
    }

    #[test]
    fn scenario_c_resize_then_quit() {
        let port = EventPort::bounded(8);
        let w = window();
        port.write(
            Event::FrameResized {
                window: w,
                width: 800.0,
                height: 600.0,
            },
            OverflowPolicy::Fail,
        )
        .unwrap();
        port.write(Event::QuitRequested { window: w }, OverflowPolicy::Fail)
            .unwrap();
        // A third envelope that a clean shutdown must never read.
        port.write(Event::Dummy, OverflowPolicy::Fail).unwrap();

        let mut recorder = Recorder::default();
        Dispatcher::new(&port).run(&mut recorder).unwrap();

        assert_eq!(
            recorder.kinds,
            vec![EventKind::FrameResized, EventKind::QuitRequested]
        );
        assert_eq!(port.len(), 1);
    }

    #[test]
    fn app_quit_default_unwinds_the_loop() {
        struct Plain;
        impl Dispatch for Plain {}

        let port = EventPort::bounded(4);
        port.write(Event::Dummy, OverflowPolicy::Fail).unwrap();
        port.write(Event::AppQuitRequested, OverflowPolicy::Fail)
            .unwrap();

        Dispatcher::new(&port).run(&mut Plain).unwrap();
        assert!(port.is_empty());
    }

    #[test]
    fn idle_hook_runs_between_timeouts() {
        let port = Arc::new(EventPort::bounded(4));
        let producer = {
            let port = Arc::clone(&port);
            thread::spawn(move || {
                thread::sleep(Duration::from_millis(60));
                port.write(Event::AppQuitRequested, OverflowPolicy::Fail)
            })
        };

        let mut recorder = Recorder::default();
        Dispatcher::with_idle_timeout(&port, Duration::from_millis(10))
            .run(&mut recorder)
            .unwrap();

        producer.join().unwrap().unwrap();
        assert!(recorder.idle_ticks >= 1);
    }

    #[test]
    fn port_closure_is_a_clean_exit() {
        let port = Arc::new(EventPort::bounded(4));
        let closer = {
            let port = Arc::clone(&port);
            thread::spawn(move || {
                thread::sleep(Duration::from_millis(20));
                port.close();
            })
        };

        let mut recorder = Recorder::default();
        Dispatcher::new(&port).run(&mut recorder).unwrap();
        closer.join().unwrap();
        assert!(recorder.kinds.is_empty());
    }

    #[test]
    fn ownership_transferring_payloads_reach_the_handler() {
        struct TakeDrop {
            payload: Option<String>,
        }
        impl Dispatch for TakeDrop {
            fn on_drag_and_drop(
                &mut self,
                _: WindowRef,
                x: i32,
                y: i32,
                message: MessageHandle,
            ) -> Result<Flow> {
                assert_eq!((x, y), (10, 20));
                self.payload = message.downcast::<String>().ok().map(|s| *s);
                Ok(Flow::Quit)
            }
        }

        let port = EventPort::bounded(4);
        port.write(
            Event::DragAndDrop {
                window: window(),
                x: 10,
                y: 20,
                message: MessageHandle::new(String::from("/tmp/dropped")),
            },
            OverflowPolicy::Fail,
        )
        .unwrap();

        let mut handler = TakeDrop { payload: None };
        Dispatcher::new(&port).run(&mut handler).unwrap();
        assert_eq!(handler.payload.as_deref(), Some("/tmp/dropped"));
    }
}

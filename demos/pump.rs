//! Event Pump Example
//!
//! Simulates the two halves of the bridge in one process:
//!
//! - a "toolkit" thread producing pointer motion, a keypress and finally
//!   an application quit request on the main port;
//! - the main thread running the dispatch loop with an idle timeout, so
//!   periodic background work (here: a heartbeat log line) keeps running
//!   while no input is pending.
//!
//! Run with `RUST_LOG=trace` to watch every envelope being dispatched.

use std::thread;
use std::time::Duration;

use eventport::{
    Arena, Bridge, Dispatch, Dispatcher, Event, Flow, KeyEvent, Modifiers, MotionEvent, Result,
    WindowRef,
};

/// Windows the consumer believes are alive. Events carry weak references
/// into this arena; each handler validates before use.
struct App {
    windows: Arena<&'static str>,
    idle_ticks: u32,
}

impl Dispatch for App {
    fn on_mouse_motion(&mut self, event: MotionEvent) -> Result<Flow> {
        match self.windows.get(event.window.id()) {
            Some(name) => println!("motion in {name}: ({}, {})", event.x, event.y),
            None => println!("motion in a window that is already gone"),
        }
        Ok(Flow::Continue)
    }

    fn on_key_down(&mut self, key: KeyEvent) -> Result<Flow> {
        println!(
            "key down: keysym {} codepoint {:?} mods {}",
            key.keysym, key.codepoint, key.modifiers
        );
        Ok(Flow::Continue)
    }

    fn on_idle(&mut self) -> Result {
        self.idle_ticks += 1;
        println!("idle tick #{}", self.idle_ticks);
        Ok(())
    }
}

fn main() -> Result {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut windows = Arena::new();
    let window = WindowRef::from(windows.insert("scratch"));

    let bridge = Bridge::default();
    let writer = bridge.main_writer();

    // The "toolkit" thread: producer side of the bridge.
    let toolkit = thread::spawn(move || -> Result {
        for n in 0..5 {
            writer.write(Event::MouseMotion(MotionEvent {
                window,
                just_exited: false,
                x: 10 * n,
                y: 5 * n,
                time: 1_000 * n as u64,
                drag_message: false,
            }))?;
            thread::sleep(Duration::from_millis(40));
        }
        writer.write(Event::KeyDown(KeyEvent {
            window,
            modifiers: Modifiers::CTRL,
            keysym: 65,
            codepoint: 'A',
            time: 6_000,
        }))?;
        thread::sleep(Duration::from_millis(120));
        writer.write(Event::AppQuitRequested)
    });

    let mut app = App {
        windows,
        idle_ticks: 0,
    };
    Dispatcher::with_idle_timeout(bridge.main(), Duration::from_millis(25)).run(&mut app)?;

    toolkit.join().expect("toolkit thread panicked")?;
    println!("clean shutdown after {} idle ticks", app.idle_ticks);
    Ok(())
}

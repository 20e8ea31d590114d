use std::mem;

use crate::{
    ButtonEvent, EventKind, KeyEvent, MessageHandle, Modifiers, MotionEvent, ScrollBarPart,
    ScrollBarRef, WindowRef,
};

/// One UI event record carried through the bridge.
///
/// A proper sum type: the discriminant and the payload shape are fixed
/// together, so the dispatcher can never misinterpret payload bytes as the
/// wrong record and its match is exhaustiveness-checked.
///
/// Window and scroll bar references are weak; validate them against the
/// consumer's [`Arena`](crate::Arena) before use. Variants carrying a
/// [`MessageHandle`] transfer ownership of a producer-allocated payload to
/// the handler; everything else is transported by value. Because of the
/// owned handles, `Event` is intentionally not `Clone`.
#[derive(Debug, PartialEq)]
pub enum Event {
    /// The user asked a window to close.
    QuitRequested { window: WindowRef },
    /// A frame changed size, in pixels.
    FrameResized {
        window: WindowRef,
        width: f32,
        height: f32,
    },
    /// A region of a frame needs repainting.
    FrameExposed {
        window: WindowRef,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
    KeyDown(KeyEvent),
    KeyUp(KeyEvent),
    /// A window gained or lost activation.
    Activation { window: WindowRef, activated: bool },
    MouseMotion(MotionEvent),
    ButtonDown(ButtonEvent),
    ButtonUp(ButtonEvent),
    /// A window was iconified or restored.
    Iconification { window: WindowRef, iconified: bool },
    /// A window moved to a new position.
    Moved { window: WindowRef, x: i32, y: i32 },
    /// A scroll bar settled on a new integer position.
    ScrollBarValue {
        scroll_bar: ScrollBarRef,
        window: WindowRef,
        position: i32,
    },
    /// One of a scroll bar's step buttons was pressed.
    ScrollBarPart {
        scroll_bar: ScrollBarRef,
        window: WindowRef,
        part: ScrollBarPart,
    },
    /// A scroll bar thumb drag started or ended.
    ScrollBarDrag {
        scroll_bar: ScrollBarRef,
        window: WindowRef,
        dragging: bool,
    },
    /// The scroll wheel moved.
    WheelMove {
        window: WindowRef,
        modifiers: Modifiers,
        delta_x: f32,
        delta_y: f32,
    },
    /// The menu bar changed size.
    MenuBarResized {
        window: WindowRef,
        width: i32,
        height: i32,
    },
    /// The menu bar was clicked.
    MenuBarClick { window: WindowRef, x: i32, y: i32 },
    /// Menu bar tracking began.
    MenuBarOpen { window: WindowRef },
    /// A menu item was chosen. `item` transfers ownership.
    MenuBarSelect {
        window: WindowRef,
        item: MessageHandle,
    },
    /// Menu bar tracking ended.
    MenuBarClose { window: WindowRef },
    /// A file panel finished. `result` transfers ownership.
    FilePanelDone { result: MessageHandle },
    /// Help echo for a highlighted menu item. `data` transfers ownership.
    MenuBarHelp {
        window: WindowRef,
        menu_bar_index: i32,
        data: MessageHandle,
        highlight: bool,
    },
    /// A window was zoomed or unzoomed.
    Zoomed { window: WindowRef, zoomed: bool },
    /// Something was dropped on a window. `message` transfers ownership.
    DragAndDrop {
        window: WindowRef,
        x: i32,
        y: i32,
        message: MessageHandle,
    },
    /// The application as a whole was asked to quit. This is the in-band
    /// shutdown signal: the dispatcher exits its loop on it by default.
    AppQuitRequested,
    /// No-op placeholder, used to nudge a blocked reader.
    Dummy,
    /// The pointer left the menu bar.
    MenuBarLeft { window: WindowRef, x: i32, y: i32 },
}

impl Event {
    /// The discriminant of this event.
    pub fn kind(&self) -> EventKind {
        match self {
            Event::QuitRequested { .. } => EventKind::QuitRequested,
            Event::FrameResized { .. } => EventKind::FrameResized,
            Event::FrameExposed { .. } => EventKind::FrameExposed,
            Event::KeyDown(_) => EventKind::KeyDown,
            Event::KeyUp(_) => EventKind::KeyUp,
            Event::Activation { .. } => EventKind::Activation,
            Event::MouseMotion(_) => EventKind::MouseMotion,
            Event::ButtonDown(_) => EventKind::ButtonDown,
            Event::ButtonUp(_) => EventKind::ButtonUp,
            Event::Iconification { .. } => EventKind::Iconification,
            Event::Moved { .. } => EventKind::Moved,
            Event::ScrollBarValue { .. } => EventKind::ScrollBarValue,
            Event::ScrollBarPart { .. } => EventKind::ScrollBarPart,
            Event::ScrollBarDrag { .. } => EventKind::ScrollBarDrag,
            Event::WheelMove { .. } => EventKind::WheelMove,
            Event::MenuBarResized { .. } => EventKind::MenuBarResized,
            Event::MenuBarClick { .. } => EventKind::MenuBarClick,
            Event::MenuBarOpen { .. } => EventKind::MenuBarOpen,
            Event::MenuBarSelect { .. } => EventKind::MenuBarSelect,
            Event::MenuBarClose { .. } => EventKind::MenuBarClose,
            Event::FilePanelDone { .. } => EventKind::FilePanelDone,
            Event::MenuBarHelp { .. } => EventKind::MenuBarHelp,
            Event::Zoomed { .. } => EventKind::Zoomed,
            Event::DragAndDrop { .. } => EventKind::DragAndDrop,
            Event::AppQuitRequested => EventKind::AppQuitRequested,
            Event::Dummy => EventKind::Dummy,
            Event::MenuBarLeft { .. } => EventKind::MenuBarLeft,
        }
    }

    /// Size in bytes of this kind's payload record.
    ///
    /// Constant per kind for the process lifetime; the size probe
    /// ([`EventPort::peek_size`](crate::EventPort::peek_size)) reports it so
    /// the consumer can size a buffer before the full read.
    pub fn payload_size(&self) -> usize {
        match self {
            Event::QuitRequested { .. } => mem::size_of::<WindowRef>(),
            Event::FrameResized { .. } => mem::size_of::<(WindowRef, f32, f32)>(),
            Event::FrameExposed { .. } => mem::size_of::<(WindowRef, i32, i32, i32, i32)>(),
            Event::KeyDown(_) | Event::KeyUp(_) => mem::size_of::<KeyEvent>(),
            Event::Activation { .. } => mem::size_of::<(WindowRef, bool)>(),
            Event::MouseMotion(_) => mem::size_of::<MotionEvent>(),
            Event::ButtonDown(_) | Event::ButtonUp(_) => mem::size_of::<ButtonEvent>(),
            Event::Iconification { .. } => mem::size_of::<(WindowRef, bool)>(),
            Event::Moved { .. } => mem::size_of::<(WindowRef, i32, i32)>(),
            Event::ScrollBarValue { .. } => mem::size_of::<(ScrollBarRef, WindowRef, i32)>(),
            Event::ScrollBarPart { .. } => {
                mem::size_of::<(ScrollBarRef, WindowRef, ScrollBarPart)>()
            }
            Event::ScrollBarDrag { .. } => mem::size_of::<(ScrollBarRef, WindowRef, bool)>(),
            Event::WheelMove { .. } => mem::size_of::<(WindowRef, Modifiers, f32, f32)>(),
            Event::MenuBarResized { .. } => mem::size_of::<(WindowRef, i32, i32)>(),
            Event::MenuBarClick { .. } | Event::MenuBarLeft { .. } => {
                mem::size_of::<(WindowRef, i32, i32)>()
            }
            Event::MenuBarOpen { .. } | Event::MenuBarClose { .. } => mem::size_of::<WindowRef>(),
            Event::MenuBarSelect { .. } => mem::size_of::<(WindowRef, MessageHandle)>(),
            Event::FilePanelDone { .. } => mem::size_of::<MessageHandle>(),
            Event::MenuBarHelp { .. } => mem::size_of::<(WindowRef, i32, MessageHandle, bool)>(),
            Event::Zoomed { .. } => mem::size_of::<(WindowRef, bool)>(),
            Event::DragAndDrop { .. } => mem::size_of::<(WindowRef, i32, i32, MessageHandle)>(),
            Event::AppQuitRequested | Event::Dummy => 0,
        }
    }
}

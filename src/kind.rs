use std::fmt;

/// Discriminant of an [`Event`](crate::Event).
///
/// The set is closed: producer and consumer compile against the same
/// enumeration, so a kind outside this list is unrepresentable and the
/// dispatcher's match is exhaustiveness-checked by the compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EventKind {
    QuitRequested,
    FrameResized,
    FrameExposed,
    KeyDown,
    KeyUp,
    Activation,
    MouseMotion,
    ButtonDown,
    ButtonUp,
    Iconification,
    Moved,
    ScrollBarValue,
    ScrollBarPart,
    ScrollBarDrag,
    WheelMove,
    MenuBarResized,
    MenuBarClick,
    MenuBarOpen,
    MenuBarSelect,
    MenuBarClose,
    FilePanelDone,
    MenuBarHelp,
    Zoomed,
    DragAndDrop,
    AppQuitRequested,
    Dummy,
    MenuBarLeft,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EventKind::QuitRequested => "quit-requested",
            EventKind::FrameResized => "frame-resized",
            EventKind::FrameExposed => "frame-exposed",
            EventKind::KeyDown => "key-down",
            EventKind::KeyUp => "key-up",
            EventKind::Activation => "activation",
            EventKind::MouseMotion => "mouse-motion",
            EventKind::ButtonDown => "button-down",
            EventKind::ButtonUp => "button-up",
            EventKind::Iconification => "iconification",
            EventKind::Moved => "moved",
            EventKind::ScrollBarValue => "scroll-bar-value",
            EventKind::ScrollBarPart => "scroll-bar-part",
            EventKind::ScrollBarDrag => "scroll-bar-drag",
            EventKind::WheelMove => "wheel-move",
            EventKind::MenuBarResized => "menu-bar-resized",
            EventKind::MenuBarClick => "menu-bar-click",
            EventKind::MenuBarOpen => "menu-bar-open",
            EventKind::MenuBarSelect => "menu-bar-select",
            EventKind::MenuBarClose => "menu-bar-close",
            EventKind::FilePanelDone => "file-panel-done",
            EventKind::MenuBarHelp => "menu-bar-help",
            EventKind::Zoomed => "zoomed",
            EventKind::DragAndDrop => "drag-and-drop",
            EventKind::AppQuitRequested => "app-quit-requested",
            EventKind::Dummy => "dummy",
            EventKind::MenuBarLeft => "menu-bar-left",
        };
        write!(f, "{name}")
    }
}

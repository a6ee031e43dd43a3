//! Option and response flag sets shared by containers and widgets.

bitflags::bitflags! {
    /// Per-call behavior switches.
    ///
    /// Combine with bitwise OR: `Options::NO_TITLE | Options::NO_RESIZE`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Options: u32 {
        /// Center control text.
        const ALIGN_CENTER = 1 << 0;
        /// Right-align control text.
        const ALIGN_RIGHT = 1 << 1;
        /// Control never takes hover or focus.
        const NO_INTERACT = 1 << 2;
        /// Skip the control or container frame.
        const NO_FRAME = 1 << 3;
        /// Window has no resize handle.
        const NO_RESIZE = 1 << 4;
        /// Container never shows scrollbars.
        const NO_SCROLL = 1 << 5;
        /// Window has no close button.
        const NO_CLOSE = 1 << 6;
        /// Window has no title bar.
        const NO_TITLE = 1 << 7;
        /// Focus survives mouse release.
        const HOLD_FOCUS = 1 << 8;
        /// Window shrinks/grows to fit its content.
        const AUTO_SIZE = 1 << 9;
        /// Window closes when clicked outside.
        const POPUP = 1 << 10;
        /// Container starts closed.
        const CLOSED = 1 << 11;
        /// Tree node starts expanded.
        const EXPANDED = 1 << 12;
    }
}

bitflags::bitflags! {
    /// What a widget reports back to the caller this frame.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Response: u32 {
        /// The widget is open/pressed (headers, tree nodes).
        const ACTIVE = 1 << 0;
        /// The widget was clicked or its edit confirmed.
        const SUBMIT = 1 << 1;
        /// The widget changed its bound value.
        const CHANGE = 1 << 2;
    }
}

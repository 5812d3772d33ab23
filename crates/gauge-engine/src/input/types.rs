/// Keyboard key identifier.
///
/// Intentionally a small set: the keys an instrument front-end reacts to.
/// Unmapped keys carry a stable platform code in `Key::Unknown`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Space,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    /// Platform-dependent key not represented here.
    Unknown(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// A single key transition.
///
/// OS auto-repeat is delivered as additional `Pressed` events with
/// `repeat == true`, matching how keyboard nudge controls are expected to
/// behave while a key is held.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct KeyEvent {
    pub key: Key,
    pub state: KeyState,
    pub repeat: bool,
}

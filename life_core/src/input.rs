// input.rs - Abstract keys and the actions they trigger
//
// Front ends translate their own key codes into `Key`; everything past that
// point is platform independent.

use crate::cursor::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Held to make cursor moves larger.
    Modifier,
    PauseToggle,
    Randomize,
    Up,
    Down,
    Left,
    Right,
    /// Toggle the cell under the cursor.
    Confirm,
    Clear,
    Step,
    Stamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    ModifierDown,
    ModifierUp,
    TogglePause,
    Randomize,
    MoveCursor(Direction),
    ToggleCell,
    Clear,
    Step,
    StampPattern,
}

impl Action {
    /// Whether the screen has to be redrawn right after this action.
    ///
    /// Every key press redraws, including the modifier; releases never do.
    pub fn redraws(self) -> bool {
        !matches!(self, Action::ModifierUp)
    }
}

/// Maps a key event to an action. Only the modifier reacts to key-up.
pub fn map_event_to_action(event: InputEvent) -> Option<Action> {
    match event {
        InputEvent::KeyUp(Key::Modifier) => Some(Action::ModifierUp),
        InputEvent::KeyUp(_) => None,
        InputEvent::KeyDown(key) => Some(match key {
            Key::Modifier    => Action::ModifierDown,
            Key::PauseToggle => Action::TogglePause,
            Key::Randomize   => Action::Randomize,
            Key::Up          => Action::MoveCursor(Direction::Up),
            Key::Down        => Action::MoveCursor(Direction::Down),
            Key::Left        => Action::MoveCursor(Direction::Left),
            Key::Right       => Action::MoveCursor(Direction::Right),
            Key::Confirm     => Action::ToggleCell,
            Key::Clear       => Action::Clear,
            Key::Step        => Action::Step,
            Key::Stamp       => Action::StampPattern,
        }),
    }
}

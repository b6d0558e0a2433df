// keys.rs - egui keyboard events to simulator keys
//
// egui has no key events for modifiers on their own, only a modifier state
// carried on every event and on the frame input. The translator latches Ctrl
// and emits a press or release whenever that state changes.

use egui::{Event, Modifiers};
use life_core::{InputEvent, Key};

pub fn map_key(key: egui::Key) -> Option<Key> {
    match key {
        egui::Key::Space      => Some(Key::PauseToggle),
        egui::Key::R          => Some(Key::Randomize),
        egui::Key::W          => Some(Key::Up),
        egui::Key::S          => Some(Key::Down),
        egui::Key::A          => Some(Key::Left),
        egui::Key::D          => Some(Key::Right),
        egui::Key::Enter      => Some(Key::Confirm),
        egui::Key::C          => Some(Key::Clear),
        egui::Key::ArrowRight => Some(Key::Step),
        egui::Key::T          => Some(Key::Stamp),
        _                     => None,
    }
}

#[derive(Debug, Default)]
pub struct KeyTranslator {
    ctrl_down: bool,
}

impl KeyTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Converts one frame of egui input, in order, into simulator key events.
    pub fn translate(&mut self, events: &[Event], frame_modifiers: Modifiers) -> Vec<InputEvent> {
        let mut out = Vec::new();
        for event in events {
            if let Event::Key { key, pressed, modifiers, .. } = event {
                self.sync_modifier(modifiers.ctrl, &mut out);
                if *pressed {
                    if let Some(key) = map_key(*key) {
                        out.push(InputEvent::KeyDown(key));
                    }
                }
            }
        }
        self.sync_modifier(frame_modifiers.ctrl, &mut out);
        out
    }

    fn sync_modifier(&mut self, ctrl: bool, out: &mut Vec<InputEvent>) {
        if ctrl == self.ctrl_down {
            return;
        }
        self.ctrl_down = ctrl;
        out.push(if ctrl {
            InputEvent::KeyDown(Key::Modifier)
        } else {
            InputEvent::KeyUp(Key::Modifier)
        });
    }
}

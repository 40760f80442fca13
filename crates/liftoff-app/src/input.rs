//! Per-tick control input and the default keyboard mapping.

use std::collections::{BTreeMap, HashSet};

use glam::{DVec2, UVec2};
use liftoff_camera::ZoomDirection;
use serde::{Deserialize, Serialize};

/// Controls that act every tick while held.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum HeldControl {
    ThrottleUp,
    ThrottleDown,
    RotateCcw,
    RotateCw,
    Stabilize,
    /// Reset time warp to 1x.
    WarpNormal,
    WarpSlower,
    WarpFaster,
}

/// Controls that act once per key press.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Start the countdown, or full throttle once launched.
    Launch,
    /// Engine cutoff.
    Cutoff,
    ToggleTether,
}

/// View manipulation from the pointer and the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraEvent {
    /// Primary button pressed: detaches the camera from the vehicle.
    DragStart,
    /// Pointer moved by this many pixels while the button is held.
    Drag(DVec2),
    Zoom {
        direction: ZoomDirection,
        anchor: DVec2,
    },
    Resize(UVec2),
}

/// Everything the player did since the previous tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlInput {
    held: HashSet<HeldControl>,
    commands: Vec<Command>,
    camera: Vec<CameraEvent>,
}

impl ControlInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hold(mut self, control: HeldControl) -> Self {
        self.held.insert(control);
        self
    }

    pub fn press(mut self, command: Command) -> Self {
        self.commands.push(command);
        self
    }

    pub fn camera(mut self, event: CameraEvent) -> Self {
        self.camera.push(event);
        self
    }

    pub fn is_held(&self, control: HeldControl) -> bool {
        self.held.contains(&control)
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn camera_events(&self) -> &[CameraEvent] {
        &self.camera
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty() && self.commands.is_empty() && self.camera.is_empty()
    }
}

/// A key's role: held or pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Binding {
    Held(HeldControl),
    Press(Command),
}

/// Key name to control mapping. Key names are case-insensitive and stored
/// lowercased, so `"W"` and `"w"` are the same key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawKeyMap")]
pub struct KeyMap {
    bindings: BTreeMap<String, Binding>,
}

/// On-disk shape of [`KeyMap`] before key names are normalized.
#[derive(Deserialize)]
struct RawKeyMap {
    bindings: BTreeMap<String, Binding>,
}

impl From<RawKeyMap> for KeyMap {
    fn from(raw: RawKeyMap) -> Self {
        let mut keys = Self {
            bindings: BTreeMap::new(),
        };
        for (key, binding) in raw.bindings {
            keys.bind(key, binding);
        }
        keys
    }
}

fn key_name(key: &str) -> String {
    key.trim().to_ascii_lowercase()
}

impl Default for KeyMap {
    /// W/S throttle, A/D rotate, M stabilize, 1/2/3 time warp, Space
    /// launch, X cutoff, T tether.
    fn default() -> Self {
        let bindings = [
            ("W", Binding::Held(HeldControl::ThrottleUp)),
            ("S", Binding::Held(HeldControl::ThrottleDown)),
            ("A", Binding::Held(HeldControl::RotateCcw)),
            ("D", Binding::Held(HeldControl::RotateCw)),
            ("M", Binding::Held(HeldControl::Stabilize)),
            ("1", Binding::Held(HeldControl::WarpSlower)),
            ("2", Binding::Held(HeldControl::WarpNormal)),
            ("3", Binding::Held(HeldControl::WarpFaster)),
            ("Space", Binding::Press(Command::Launch)),
            ("X", Binding::Press(Command::Cutoff)),
            ("T", Binding::Press(Command::ToggleTether)),
        ];
        Self {
            bindings: bindings
                .into_iter()
                .map(|(key, binding)| (key_name(key), binding))
                .collect(),
        }
    }
}

impl KeyMap {
    /// Bind `key`, replacing any previous binding for it.
    pub fn bind(&mut self, key: impl AsRef<str>, binding: Binding) {
        self.bindings.insert(key_name(key.as_ref()), binding);
    }

    /// Binding for a key name (case-insensitive).
    pub fn get(&self, key: &str) -> Option<Binding> {
        self.bindings.get(&key_name(key)).copied()
    }

    /// Build one tick's input from the keys currently down and the keys
    /// pressed since the last tick. Unbound keys are ignored; a press on a
    /// held-type key is ignored, as is holding a press-type key.
    pub fn resolve<'a>(
        &self,
        keys_down: impl IntoIterator<Item = &'a str>,
        keys_pressed: impl IntoIterator<Item = &'a str>,
    ) -> ControlInput {
        let mut input = ControlInput::new();
        for key in keys_down {
            if let Some(Binding::Held(control)) = self.get(key) {
                input.held.insert(control);
            }
        }
        for key in keys_pressed {
            if let Some(Binding::Press(command)) = self.get(key) {
                input.commands.push(command);
            }
        }
        input
    }
}

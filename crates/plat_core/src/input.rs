//! Logical input.
//!
//! `InputState` collects press/release notifications between frames and
//! remembers which actions went down since the last `end_frame()`, so a tap
//! shorter than a frame still reaches the next snapshot.
//!
//! The simulation never sees devices. Each frame the driver hands it an
//! `InputSnapshot` (the set of held actions) and the simulation derives edges
//! itself by comparing against the previous frame's snapshot, so a recorded
//! sequence of snapshots replays identically.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Left,
    Right,
    Jump,
    Run,
    Fire,
    Restart,
}

/// The actions held during one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSnapshot {
    held: BTreeSet<Action>,
}

impl InputSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_actions(actions: &[Action]) -> Self {
        Self {
            held: actions.iter().copied().collect(),
        }
    }

    pub fn with(mut self, action: Action) -> Self {
        self.held.insert(action);
        self
    }

    pub fn is_held(&self, action: Action) -> bool {
        self.held.contains(&action)
    }

    /// Down now, up in `previous`.
    pub fn pressed_since(&self, previous: &InputSnapshot, action: Action) -> bool {
        self.is_held(action) && !previous.is_held(action)
    }

    /// Up now, down in `previous`.
    pub fn released_since(&self, previous: &InputSnapshot, action: Action) -> bool {
        !self.is_held(action) && previous.is_held(action)
    }
}

/// Accumulates press/release notifications from a device layer between
/// frames.
pub struct InputState {
    held: HashSet<Action>,
    just_pressed: HashSet<Action>,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            held: HashSet::new(),
            just_pressed: HashSet::new(),
        }
    }

    pub fn press(&mut self, action: Action) {
        if self.held.insert(action) {
            self.just_pressed.insert(action);
        }
    }

    pub fn release(&mut self, action: Action) {
        self.held.remove(&action);
    }

    pub fn is_held(&self, action: Action) -> bool {
        self.held.contains(&action)
    }

    /// Held set for this frame. A tap that went down and up between two
    /// snapshots still shows up as held for one frame so it is not lost.
    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            held: self
                .held
                .iter()
                .chain(self.just_pressed.iter())
                .copied()
                .collect(),
        }
    }

    pub fn end_frame(&mut self) {
        self.just_pressed.clear();
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

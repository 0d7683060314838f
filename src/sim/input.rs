//! Logical player actions and the per-frame input snapshot

use serde::{Deserialize, Serialize};

use super::state::PaddleId;

/// Everything a player can ask of the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    MoveTopLeft,
    MoveTopRight,
    MoveBottomLeft,
    MoveBottomRight,
    ReleaseServe,
}

impl Action {
    pub fn move_left(id: PaddleId) -> Action {
        match id {
            PaddleId::Top => Action::MoveTopLeft,
            PaddleId::Bottom => Action::MoveBottomLeft,
        }
    }

    pub fn move_right(id: PaddleId) -> Action {
        match id {
            PaddleId::Top => Action::MoveTopRight,
            PaddleId::Bottom => Action::MoveBottomRight,
        }
    }
}

/// Read-only view of the actions held during one frame
pub trait InputSnapshot {
    fn is_active(&self, action: Action) -> bool;

    /// -1, 0 or +1: net horizontal intent for a paddle. Opposing keys cancel.
    fn paddle_direction(&self, id: PaddleId) -> f32 {
        let left = self.is_active(Action::move_left(id));
        let right = self.is_active(Action::move_right(id));
        match (left, right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}

/// Input commands for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub top_left: bool,
    pub top_right: bool,
    pub bottom_left: bool,
    pub bottom_right: bool,
    /// Release the held ball (whichever paddle holds it)
    pub release: bool,
}

impl TickInput {
    pub fn from_actions(actions: &[Action]) -> Self {
        let mut input = Self::default();
        for action in actions {
            input.set(*action, true);
        }
        input
    }

    pub fn set(&mut self, action: Action, held: bool) {
        match action {
            Action::MoveTopLeft => self.top_left = held,
            Action::MoveTopRight => self.top_right = held,
            Action::MoveBottomLeft => self.bottom_left = held,
            Action::MoveBottomRight => self.bottom_right = held,
            Action::ReleaseServe => self.release = held,
        }
    }
}

impl InputSnapshot for TickInput {
    fn is_active(&self, action: Action) -> bool {
        match action {
            Action::MoveTopLeft => self.top_left,
            Action::MoveTopRight => self.top_right,
            Action::MoveBottomLeft => self.bottom_left,
            Action::MoveBottomRight => self.bottom_right,
            Action::ReleaseServe => self.release,
        }
    }
}

impl InputSnapshot for [Action] {
    fn is_active(&self, action: Action) -> bool {
        self.contains(&action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposing_keys_cancel() {
        let input = TickInput {
            top_left: true,
            top_right: true,
            bottom_right: true,
            ..Default::default()
        };
        assert_eq!(input.paddle_direction(PaddleId::Top), 0.0);
        assert_eq!(input.paddle_direction(PaddleId::Bottom), 1.0);
    }

    #[test]
    fn test_slice_snapshot_matches_struct() {
        let actions = [Action::MoveBottomLeft, Action::ReleaseServe];
        let input = TickInput::from_actions(&actions);
        for action in [
            Action::MoveTopLeft,
            Action::MoveTopRight,
            Action::MoveBottomLeft,
            Action::MoveBottomRight,
            Action::ReleaseServe,
        ] {
            assert_eq!(input.is_active(action), actions[..].is_active(action));
        }
    }

    #[test]
    fn test_action_json_names() {
        let json = serde_json::to_string(&Action::MoveTopRight).unwrap();
        assert_eq!(json, "\"move_top_right\"");
    }
}

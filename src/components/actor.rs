use crate::sequence::table::{Action, ActorModel, AnimationId, Direction};

/// Directional actor whose animation is picked from its model's pose grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub model: ActorModel,
    pub direction: Direction,
    pub action: Action,
}

impl Actor {
    pub fn new(model: ActorModel) -> Self {
        Self {
            model,
            direction: Direction::Down,
            action: Action::Idle,
        }
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_action(mut self, action: Action) -> Self {
        self.action = action;
        self
    }

    /// Catalog entry for the current pose.
    pub fn sequence_id(&self) -> AnimationId {
        self.model.sequence_id(self.direction, self.action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pose_selects_sequence() {
        let actor = Actor::new(ActorModel::Penguin)
            .with_direction(Direction::Up)
            .with_action(Action::Fire);
        assert_eq!(actor.sequence_id(), AnimationId::PenguinUpFire);
    }
}

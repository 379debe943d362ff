//! Chase: преследование цели

use super::{BehaviorContext, StateBehavior, StateTag, TransitionRequest};

/// Pursuit: направление пересчитывается каждый тик, скорость постоянная.
/// Без цели — no-op (цель могла исчезнуть посреди погони).
#[derive(Debug, Clone)]
pub struct ChaseBehavior {
    speed: f32,
}

impl ChaseBehavior {
    pub fn new(speed: f32) -> Self {
        Self { speed }
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }
}

impl StateBehavior for ChaseBehavior {
    fn tag(&self) -> StateTag {
        StateTag::Chase
    }

    fn update(&mut self, ctx: &mut BehaviorContext<'_, '_>) -> Option<TransitionRequest> {
        let target_position = ctx.target.as_deref()?.position();

        let direction = (target_position - *ctx.position).normalize_or_zero();
        *ctx.position += direction * self.speed * ctx.time.delta;

        ctx.log.log(ctx.time.elapsed, "Enemy is chasing the player...");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::behaviors::test_support::{DummyTarget, Harness};
    use crate::ai::behaviors::Behavior;
    use crate::components::SimTime;
    use bevy::prelude::*;

    #[test]
    fn test_moves_toward_target_at_constant_speed() {
        let mut harness = Harness::new(Vec2::ZERO);
        let mut target = DummyTarget::at(Vec2::new(10.0, 0.0));
        let mut behavior = Behavior::Chase(ChaseBehavior::new(2.0));

        harness.update(&mut behavior, SimTime::new(0.5, 0.5), Some(&mut target));
        assert_eq!(harness.position, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_direction_recomputed_each_tick() {
        let mut harness = Harness::new(Vec2::ZERO);
        let mut target = DummyTarget::at(Vec2::new(10.0, 0.0));
        let mut behavior = Behavior::Chase(ChaseBehavior::new(1.0));
        let mut clock = SimTime::default();

        harness.update(&mut behavior, clock.advance(1.0), Some(&mut target));
        assert_eq!(harness.position, Vec2::new(1.0, 0.0));

        // Цель ушла вверх — догоняем по новому направлению
        target.position = Vec2::new(1.0, 10.0);
        harness.update(&mut behavior, clock.advance(1.0), Some(&mut target));
        assert_eq!(harness.position, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_missing_target_is_noop() {
        let mut harness = Harness::new(Vec2::new(4.0, 4.0));
        let mut behavior = Behavior::Chase(ChaseBehavior::new(3.0));

        let request = harness.update(&mut behavior, SimTime::new(1.0, 1.0), None);
        assert!(request.is_none());
        assert_eq!(harness.position, Vec2::new(4.0, 4.0));
    }
}

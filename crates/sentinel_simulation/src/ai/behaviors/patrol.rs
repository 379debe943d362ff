//! Patrol: обход waypoints по кругу

use bevy::prelude::*;

use super::{BehaviorContext, StateBehavior, StateTag, TransitionRequest};
use crate::components::{distance, move_towards};

/// Дистанция, на которой waypoint считается достигнутым
pub const WAYPOINT_REACHED_THRESHOLD: f32 = 0.1;

/// Патруль: move-toward к текущему waypoint, по достижении — следующий
/// (`(index + 1) % len`). Сам не завершается, выходит только по guard.
///
/// Достижение проверяется по позиции на начало тика: агент, доехавший до
/// точки, переключает индекс на следующем тике.
#[derive(Debug, Clone)]
pub struct PatrolBehavior {
    waypoints: Vec<Vec2>,
    target_index: usize,
    speed: f32,
    reached_threshold: f32,
}

impl PatrolBehavior {
    pub fn new(waypoints: Vec<Vec2>, speed: f32) -> Self {
        Self {
            waypoints,
            target_index: 0,
            speed,
            reached_threshold: WAYPOINT_REACHED_THRESHOLD,
        }
    }

    pub fn waypoints(&self) -> &[Vec2] {
        &self.waypoints
    }

    pub fn target_index(&self) -> usize {
        self.target_index
    }

    pub fn current_waypoint(&self) -> Option<Vec2> {
        self.waypoints.get(self.target_index).copied()
    }
}

impl StateBehavior for PatrolBehavior {
    fn tag(&self) -> StateTag {
        StateTag::Patrol
    }

    fn update(&mut self, ctx: &mut BehaviorContext<'_, '_>) -> Option<TransitionRequest> {
        // Пустой маршрут — стоим на месте
        let waypoint = self.current_waypoint()?;

        let current = *ctx.position;
        *ctx.position = move_towards(current, waypoint, self.speed * ctx.time.delta);

        ctx.log.log(ctx.time.elapsed, "Enemy is patrolling...");

        if distance(current, waypoint) < self.reached_threshold {
            self.target_index = (self.target_index + 1) % self.waypoints.len();
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::behaviors::test_support::Harness;
    use crate::ai::behaviors::Behavior;
    use crate::components::SimTime;

    fn patrol_index(behavior: &Behavior) -> usize {
        match behavior {
            Behavior::Patrol(patrol) => patrol.target_index(),
            other => panic!("expected Patrol, got {:?}", other.tag()),
        }
    }

    #[test]
    fn test_moves_toward_waypoint_without_overshoot() {
        let mut harness = Harness::new(Vec2::ZERO);
        let mut behavior = Behavior::Patrol(PatrolBehavior::new(
            vec![Vec2::new(1.0, 0.0), Vec2::new(-1.0, 0.0)],
            2.0,
        ));
        let mut clock = SimTime::default();

        harness.update(&mut behavior, clock.advance(0.25), None);
        assert_eq!(harness.position, Vec2::new(0.5, 0.0));

        // 2.0 * 0.5 = 1.0 шаг, но до точки 0.5 — остановились на точке
        harness.update(&mut behavior, clock.advance(0.5), None);
        assert_eq!(harness.position, Vec2::new(1.0, 0.0));
        assert_eq!(patrol_index(&behavior), 0);

        // Следующий тик: стоим на точке → переключаемся на следующую
        harness.update(&mut behavior, clock.advance(0.25), None);
        assert_eq!(patrol_index(&behavior), 1);
    }

    #[test]
    fn test_index_wraps_around() {
        let waypoints = vec![Vec2::ZERO, Vec2::new(0.05, 0.0)];
        let mut harness = Harness::new(Vec2::ZERO);
        let mut behavior = Behavior::Patrol(PatrolBehavior::new(waypoints, 1.0));
        let mut clock = SimTime::default();

        // Обе точки в пределах threshold → каждый тик = reached event
        for n in 1..=5 {
            harness.update(&mut behavior, clock.advance(0.1), None);
            assert_eq!(patrol_index(&behavior), n % 2);
        }
    }

    #[test]
    fn test_single_waypoint_parks_agent() {
        let mut harness = Harness::new(Vec2::new(3.0, 0.0));
        let mut behavior = Behavior::Patrol(PatrolBehavior::new(vec![Vec2::ZERO], 10.0));
        let mut clock = SimTime::default();

        for _ in 0..5 {
            harness.update(&mut behavior, clock.advance(0.5), None);
        }
        assert_eq!(harness.position, Vec2::ZERO);
        assert_eq!(patrol_index(&behavior), 0);
    }

    #[test]
    fn test_empty_route_is_noop() {
        let mut harness = Harness::new(Vec2::new(1.0, 1.0));
        let mut behavior = Behavior::Patrol(PatrolBehavior::new(Vec::new(), 2.0));

        let request = harness.update(&mut behavior, SimTime::new(0.5, 0.5), None);
        assert!(request.is_none());
        assert_eq!(harness.position, Vec2::new(1.0, 1.0));
    }
}

//! Attack: wind-up + удары по cooldown

use super::{BehaviorContext, StateBehavior, StateTag, TransitionRequest};
use crate::ai::events::AgentEvent;
use crate::components::{DamageOutcome, SimTime};

/// Атака цели
///
/// Тайминг:
/// - первые `attack_delay` секунд после входа — wind-up, урона нет
///   (каждый новый вход в Attack платит wind-up заново)
/// - далее удар если с прошлого прошло ≥ `attack_cooldown`
#[derive(Debug, Clone)]
pub struct AttackBehavior {
    enter_time: f32,
    last_attack_time: f32,
}

impl Default for AttackBehavior {
    fn default() -> Self {
        Self::new()
    }
}

impl AttackBehavior {
    pub fn new() -> Self {
        Self {
            enter_time: 0.0,
            last_attack_time: f32::NEG_INFINITY,
        }
    }

    pub fn enter_time(&self) -> f32 {
        self.enter_time
    }

    /// Время последнего удара (`-inf` если ещё не бил)
    pub fn last_attack_time(&self) -> f32 {
        self.last_attack_time
    }
}

impl StateBehavior for AttackBehavior {
    fn tag(&self) -> StateTag {
        StateTag::Attack
    }

    fn enter(&mut self, time: SimTime) {
        self.enter_time = time.elapsed;
        self.last_attack_time = f32::NEG_INFINITY;
    }

    fn update(&mut self, ctx: &mut BehaviorContext<'_, '_>) -> Option<TransitionRequest> {
        let now = ctx.time.elapsed;

        if now < self.enter_time + ctx.stats.attack_delay() {
            ctx.log.log(now, "Enemy is preparing to attack...");
            return None;
        }

        if let Some(target) = ctx.target.as_deref_mut() {
            if now >= self.last_attack_time + ctx.stats.attack_cooldown() {
                let damage = ctx.stats.damage();
                let outcome = target.receive_damage(damage, now);
                self.last_attack_time = now;
                // Удар по мёртвой цели не засчитывается
                if outcome != DamageOutcome::Ignored {
                    ctx.events.push(AgentEvent::Struck { damage, outcome });
                }
            }
        }

        ctx.log.log(now, "Enemy is attacking the player...");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::behaviors::test_support::{DummyTarget, Harness};
    use crate::ai::behaviors::Behavior;
    use crate::components::Combatant;
    use bevy::prelude::*;

    #[test]
    fn test_wind_up_then_cooldown_gated_hits() {
        // default stats: damage 10, delay 1.0, cooldown 1.0
        let mut harness = Harness::new(Vec2::ZERO);
        let mut target = DummyTarget::at(Vec2::new(1.0, 0.0));
        let mut behavior = Behavior::Attack(AttackBehavior::new());
        let mut clock = SimTime::new(0.0, 2.0);
        behavior.enter(clock);

        for _ in 0..12 {
            harness.update(&mut behavior, clock.advance(0.25), Some(&mut target));
        }

        // Вход в T=2.0, тики до 5.0: удары на 3.0, 4.0, 5.0
        let hit_times: Vec<f32> = target.hits.iter().map(|(_, t)| *t).collect();
        assert_eq!(hit_times, vec![3.0, 4.0, 5.0]);
        assert!(target.hits.iter().all(|(damage, _)| *damage == 10));
    }

    #[test]
    fn test_reentry_pays_wind_up_again() {
        let mut harness = Harness::new(Vec2::ZERO);
        let mut target = DummyTarget::at(Vec2::ZERO);
        let mut clock = SimTime::default();

        let mut first = Behavior::Attack(AttackBehavior::new());
        first.enter(clock);
        for _ in 0..4 {
            harness.update(&mut first, clock.advance(0.25), Some(&mut target));
        }
        assert_eq!(target.hits.len(), 1);

        // Новый инстанс (как после Chase → Attack)
        let mut second = Behavior::Attack(AttackBehavior::new());
        second.enter(clock);
        for _ in 0..3 {
            harness.update(&mut second, clock.advance(0.25), Some(&mut target));
        }
        assert_eq!(target.hits.len(), 1);

        harness.update(&mut second, clock.advance(0.25), Some(&mut target));
        assert_eq!(target.hits.len(), 2);
    }

    #[test]
    fn test_missing_target_deals_no_damage() {
        let mut harness = Harness::new(Vec2::ZERO);
        let mut behavior = Behavior::Attack(AttackBehavior::new());
        let mut clock = SimTime::default();
        behavior.enter(clock);

        for _ in 0..10 {
            harness.update(&mut behavior, clock.advance(0.5), None);
        }
        assert!(harness.events.is_empty());
    }

    #[test]
    fn test_strike_reported_as_event() {
        let mut harness = Harness::new(Vec2::ZERO);
        let mut target = DummyTarget::at(Vec2::ZERO);
        let mut behavior = Behavior::Attack(AttackBehavior::new());
        behavior.enter(SimTime::default());

        harness.update(&mut behavior, SimTime::new(1.0, 1.0), Some(&mut target));
        assert!(matches!(
            harness.events.as_slice(),
            [AgentEvent::Struck { damage: 10, .. }]
        ));
    }

    #[test]
    fn test_dead_target_strike_not_reported() {
        let mut harness = Harness::new(Vec2::ZERO);
        let mut target = Combatant::player(Vec2::new(1.0, 0.0), 10).unwrap();
        target.stats.take_damage(10, 0.0);
        target.stats.drain_events();

        let mut behavior = Behavior::Attack(AttackBehavior::new());
        behavior.enter(SimTime::default());
        harness.update(&mut behavior, SimTime::new(1.0, 1.0), Some(&mut target));

        assert!(harness.events.is_empty());
        assert_eq!(target.stats.current_health(), 0);
    }
}

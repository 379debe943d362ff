//! Melee strike игрока
//!
//! Круговой удар: все живые цели в радиусе `range` от origin получают
//! `damage`. Cooldown тратится на попытку, даже если никого не задели.
//! Инициируется через [`StrikeIntent`](super::StrikeIntent), не напрямую из input.

use bevy::prelude::*;

use crate::ai::EnemyAgent;
use crate::combat::DamageDealt;
use crate::components::{distance, Combatant, DamageOutcome, Target};

/// Event: entity хочет ударить (input / скрипт / AI игрока)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrikeIntent {
    pub attacker: Entity,
}

/// Melee атака (cooldown-gated)
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct MeleeStrike {
    pub damage: i32,
    pub range: f32,
    /// Cooldown между ударами (секунды)
    pub cooldown: f32,
    /// Время последнего удара (`-inf` если ещё не бил)
    pub last_strike: f32,
}

impl Default for MeleeStrike {
    fn default() -> Self {
        Self {
            damage: 50,
            range: 1.5,
            cooldown: 1.0,
            last_strike: f32::NEG_INFINITY,
        }
    }
}

impl MeleeStrike {
    pub fn is_ready(&self, now: f32) -> bool {
        now >= self.last_strike + self.cooldown
    }

    /// Попытка удара
    ///
    /// `None` — ещё cooldown. Иначе список `(key, outcome)` по задетым целям;
    /// мёртвые цели (`Ignored`) в список не попадают.
    pub fn try_strike<'a, K, T, I>(&mut self, now: f32, origin: Vec2, targets: I) -> Option<Vec<(K, DamageOutcome)>>
    where
        T: Target + ?Sized + 'a,
        I: IntoIterator<Item = (K, &'a mut T)>,
    {
        if !self.is_ready(now) {
            return None;
        }
        self.last_strike = now;

        let hits = targets
            .into_iter()
            .filter(|(_, target)| distance(origin, target.position()) <= self.range)
            .filter_map(|(key, target)| match target.receive_damage(self.damage, now) {
                DamageOutcome::Ignored => None,
                outcome => Some((key, outcome)),
            })
            .collect();

        Some(hits)
    }
}

/// Система: StrikeIntent → melee strike по врагам в радиусе
///
/// Stat events задетых врагов забирает `forward_stat_events`.
pub fn resolve_strike_intents(
    mut intents: EventReader<StrikeIntent>,
    mut strikers: Query<(&Combatant, &mut MeleeStrike)>,
    mut agents: Query<(Entity, &mut EnemyAgent)>,
    mut damage_events: EventWriter<DamageDealt>,
    time: Res<Time<Fixed>>,
) {
    let now = time.elapsed_secs();

    for intent in intents.read() {
        let Ok((striker, mut strike)) = strikers.get_mut(intent.attacker) else {
            crate::logger::log_warning(&format!("StrikeIntent from {:?} without MeleeStrike", intent.attacker));
            continue;
        };
        if striker.stats.is_dead() {
            continue;
        }

        let targets = agents
            .iter_mut()
            .map(|(entity, agent)| (entity, agent.into_inner()));

        let Some(hits) = strike.try_strike(now, striker.position, targets) else {
            continue;
        };

        for (target, _) in hits {
            damage_events.write(DamageDealt {
                attacker: intent.attacker,
                target,
                damage: strike.damage,
            });
        }
    }
}

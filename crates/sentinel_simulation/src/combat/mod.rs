//! Combat system module
//!
//! ECS ответственность:
//! - Player melee strike (StrikeIntent → MeleeStrike → урон врагам)
//! - Stat events → Bevy events (health bar, death)
//! - Death sink: despawn
//!
//! Удары врагов наносит сам AI (Attack state), см. `ai::tick_enemy_agents`.

use bevy::prelude::*;

pub mod damage;
pub mod melee;

// Re-export основных типов
pub use damage::{despawn_dead, forward_stat_event, forward_stat_events, DamageDealt, EntityDied, HealthChanged};
pub use melee::{resolve_strike_intents, MeleeStrike, StrikeIntent};

use crate::SimulationSet;

/// Combat Plugin
///
/// Регистрирует combat системы в FixedUpdate (после AI тика).
///
/// Порядок выполнения:
/// 1. resolve_strike_intents — удары игрока
/// 2. forward_stat_events — health/death уведомления
/// 3. despawn_dead — удаление мёртвых
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        // Регистрация событий
        app.add_event::<DamageDealt>()
            .add_event::<HealthChanged>()
            .add_event::<EntityDied>()
            .add_event::<StrikeIntent>()
            .register_type::<MeleeStrike>();

        app.add_systems(
            FixedUpdate,
            (resolve_strike_intents, forward_stat_events, despawn_dead)
                .chain() // Последовательное выполнение
                .in_set(SimulationSet::Combat),
        );
    }
}

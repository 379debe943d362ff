//! Damage / health / death events и системы
//!
//! Stat model копит уведомления у себя; здесь они превращаются в Bevy events
//! (health bar, death) и мёртвые entity удаляются из мира.

use bevy::prelude::*;

use crate::ai::EnemyAgent;
use crate::components::{Combatant, StatEvent};

/// Event: удар прошёл (enemy → player или player → enemy)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageDealt {
    pub attacker: Entity,
    pub target: Entity,
    pub damage: i32,
}

/// Event: health изменился (health bar sink)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthChanged {
    pub entity: Entity,
    pub current: i32,
    pub max: i32,
}

/// Event: entity умер (ровно один раз на entity)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityDied {
    pub entity: Entity,
}

/// Перевести уведомление stat model в Bevy event
pub fn forward_stat_event(
    entity: Entity,
    event: StatEvent,
    health_events: &mut EventWriter<HealthChanged>,
    died_events: &mut EventWriter<EntityDied>,
) {
    match event {
        StatEvent::HealthChanged { current, max } => {
            health_events.write(HealthChanged { entity, current, max });
        }
        StatEvent::Died => {
            crate::logger::log_info(&format!("{:?} died", entity));
            died_events.write(EntityDied { entity });
        }
    }
}

/// Система: собрать stat events, накопленные вне тика агента
///
/// Игрок (урон от врагов) и враги (урон от melee strike игрока).
pub fn forward_stat_events(
    mut combatants: Query<(Entity, &mut Combatant)>,
    mut agents: Query<(Entity, &mut EnemyAgent)>,
    mut health_events: EventWriter<HealthChanged>,
    mut died_events: EventWriter<EntityDied>,
) {
    for (entity, mut combatant) in combatants.iter_mut() {
        if !combatant.stats.has_pending_events() {
            continue;
        }
        for event in combatant.stats.drain_events() {
            forward_stat_event(entity, event, &mut health_events, &mut died_events);
        }
    }

    for (entity, mut agent) in agents.iter_mut() {
        if !agent.stats().has_pending_events() {
            continue;
        }
        for event in agent.drain_events() {
            if let crate::ai::AgentEvent::Stat(stat) = event {
                forward_stat_event(entity, stat, &mut health_events, &mut died_events);
            }
        }
    }
}

/// Система: death sink — удалить мёртвых из симуляции
pub fn despawn_dead(mut commands: Commands, mut died_events: EventReader<EntityDied>) {
    for event in died_events.read() {
        commands.entity(event.entity).despawn();
    }
}

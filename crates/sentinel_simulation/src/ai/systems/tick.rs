//! FixedUpdate тик всех EnemyAgent

use bevy::prelude::*;

use crate::ai::{AgentEvent, EnemyAgent, StateChanged};
use crate::combat::{forward_stat_event, DamageDealt, EntityDied, HealthChanged};
use crate::components::{Combatant, DamageOutcome, Player, SimTime, Target};

/// Система: тик state machine каждого врага
///
/// Цель — живой игрок (если есть). Урон игроку применяется прямо в тике
/// через `Target`; его stat events забирает `forward_stat_events`.
pub fn tick_enemy_agents(
    mut agents: Query<(Entity, &mut EnemyAgent)>,
    mut players: Query<(Entity, &mut Combatant), With<Player>>,
    mut state_events: EventWriter<StateChanged>,
    mut damage_events: EventWriter<DamageDealt>,
    mut health_events: EventWriter<HealthChanged>,
    mut died_events: EventWriter<EntityDied>,
    time: Res<Time<Fixed>>,
) {
    let now = SimTime::new(time.delta_secs(), time.elapsed_secs());

    let mut player = players
        .iter_mut()
        .find(|(_, combatant)| combatant.stats.is_alive());

    for (entity, mut agent) in agents.iter_mut() {
        // Мёртвый игрок — не цель (ждёт despawn). Предыдущий агент мог
        // убить его в этом же тике
        let live_player = player
            .as_mut()
            .filter(|(_, combatant)| combatant.stats.is_alive());
        let player_entity = live_player.as_ref().map(|(entity, _)| *entity);
        let target = live_player.map(|(_, combatant)| &mut **combatant as &mut dyn Target);

        let mut exited = None;
        for event in agent.tick(now, target) {
            match event {
                AgentEvent::Exited(tag) => exited = Some(tag),
                AgentEvent::Entered(tag) => {
                    state_events.write(StateChanged {
                        entity,
                        from: exited.take(),
                        to: tag,
                    });
                }
                AgentEvent::Struck { damage, outcome } => {
                    if outcome == DamageOutcome::Ignored {
                        continue;
                    }
                    if let Some(target) = player_entity {
                        damage_events.write(DamageDealt {
                            attacker: entity,
                            target,
                            damage,
                        });
                    }
                }
                AgentEvent::RouteRegenerated { waypoints } => {
                    crate::logger::log(&format!("{:?}: new patrol route ({} points)", entity, waypoints));
                }
                AgentEvent::Stat(stat) => {
                    forward_stat_event(entity, stat, &mut health_events, &mut died_events);
                }
            }
        }
    }
}

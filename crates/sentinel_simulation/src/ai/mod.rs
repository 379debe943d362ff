//! AI decision-making module
//!
//! Enemy FSM: Patrol / Idle / Chase / Attack.
//! - behaviors: состояния с lifecycle enter → update* → exit
//! - guards: таблица переходов (pure function)
//! - agent: контроллер (владеет состоянием, stat model, маршрутом)
//! - patrol_points: процедурная генерация маршрута
//! - systems: Bevy обвязка (FixedUpdate)

use bevy::prelude::*;

pub mod agent;
pub mod behaviors;
pub mod events;
pub mod guards;
pub mod patrol_points;
pub mod systems;


// Re-export основных типов
pub use agent::EnemyAgent;
pub use behaviors::{Behavior, StateBehavior, StateTag, TransitionRequest};
pub use events::{AgentEvent, StateChanged};
pub use guards::{evaluate_guards, GuardRadii, Transition};
pub use patrol_points::{generate_patrol_points, MAX_PLACEMENT_ATTEMPTS};
pub use systems::tick_enemy_agents;

use crate::combat::{DamageDealt, EntityDied, HealthChanged};
use crate::SimulationSet;

/// AI Plugin
///
/// Регистрирует AI системы в FixedUpdate для детерминизма.
/// Один тик = update состояния → self-heal → guards → transition
/// (внутри `EnemyAgent::tick`).
pub struct AIPlugin;

impl Plugin for AIPlugin {
    fn build(&self, app: &mut App) {
        // Combat events тоже пишутся из тика (удары, health, смерть)
        app.add_event::<StateChanged>()
            .add_event::<DamageDealt>()
            .add_event::<HealthChanged>()
            .add_event::<EntityDied>()
            .add_systems(FixedUpdate, tick_enemy_agents.in_set(SimulationSet::Ai));
    }
}

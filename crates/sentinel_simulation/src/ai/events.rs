//! AI Events
//!
//! - `AgentEvent` — очередь уведомлений конкретного агента (core, без ECS)
//! - `StateChanged` — Bevy event для visual feedback (цвет спрайта, анимации)

use bevy::prelude::*;

use crate::ai::behaviors::StateTag;
use crate::components::{DamageOutcome, StatEvent};

/// Уведомление от агента за тик (в порядке возникновения)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentEvent {
    /// Вышли из состояния (exit hook отработал)
    Exited(StateTag),
    /// Вошли в состояние — visual feedback sink получает новый тег
    Entered(StateTag),
    /// Attack нанёс удар цели
    Struck { damage: i32, outcome: DamageOutcome },
    /// Маршрут патруля перегенерирован
    RouteRegenerated { waypoints: usize },
    /// Уведомление от собственной stat model (health bar / death)
    Stat(StatEvent),
}

/// Bevy event: агент сменил состояние
///
/// `from == None` — первое состояние после спавна.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateChanged {
    pub entity: Entity,
    pub from: Option<StateTag>,
    pub to: StateTag,
}

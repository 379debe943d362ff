//! Player/target компоненты

use bevy::prelude::*;
use crate::components::stats::{DamageOutcome, StatModel};
use crate::components::world::Target;
use crate::config::{ConfigError, StatsConfig};

/// Marker: entity управляется игроком (цель врагов)
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Player;

/// Живая цель: позиция + stat model
///
/// Позицию двигает внешний collaborator (input / physics), core только читает.
#[derive(Component, Debug, Clone)]
pub struct Combatant {
    pub position: Vec2,
    pub stats: StatModel,
}

impl Combatant {
    /// Невалидные stats (например `max_health <= 0`) — ошибка
    pub fn new(position: Vec2, stats: &StatsConfig) -> Result<Self, ConfigError> {
        stats.validate()?;
        Ok(Self {
            position,
            stats: StatModel::new(stats),
        })
    }

    /// Игрок: только health, без регенерации
    pub fn player(position: Vec2, max_health: i32) -> Result<Self, ConfigError> {
        Self::new(position, &StatsConfig::passive(max_health))
    }
}

impl Target for Combatant {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn receive_damage(&mut self, amount: i32, now: f32) -> DamageOutcome {
        self.stats.take_damage(amount, now)
    }
}

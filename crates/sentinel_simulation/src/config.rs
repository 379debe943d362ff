//! Конфигурация агентов (задаётся при спавне, core её не мутирует)
//!
//! Default значения = тюнинг оригинальной игры.
//! Загрузка из RON: [`AgentConfig::from_ron`] (parse + validate).

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ошибки конфигурации — всплывают при setup, никогда в tick loop
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("chase radius ({chase_radius}) must be greater than attack range ({attack_range})")]
    ChaseRadiusNotAboveAttackRange { chase_radius: f32, attack_range: f32 },

    #[error("`{field}` must be finite and non-negative, got {value}")]
    InvalidValue { field: &'static str, value: f32 },

    #[error("max health must be positive, got {0}")]
    NonPositiveMaxHealth(i32),

    #[error("failed to parse agent config: {0}")]
    Parse(String),
}

/// Боевые и health параметры (Stat Model)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Reflect)]
#[serde(default)]
pub struct StatsConfig {
    pub max_health: i32,
    /// Урон за один удар
    pub damage: i32,
    /// Дистанция атаки (метры)
    pub attack_range: f32,
    /// Секунды между ударами
    pub attack_cooldown: f32,
    /// Wind-up после входа в Attack (секунды)
    pub attack_delay: f32,
    /// HP за один тик регенерации (0 = регенерации нет)
    pub heal_amount: i32,
    /// Секунды между тиками регенерации
    pub heal_cooldown: f32,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            max_health: 100,
            damage: 10,
            attack_range: 1.2,
            attack_cooldown: 1.0,
            attack_delay: 1.0,
            heal_amount: 5,
            heal_cooldown: 3.0,
        }
    }
}

impl StatsConfig {
    /// Stat model без атаки и регенерации (игрок в роли цели)
    pub fn passive(max_health: i32) -> Self {
        Self {
            max_health,
            damage: 0,
            heal_amount: 0,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_health <= 0 {
            return Err(ConfigError::NonPositiveMaxHealth(self.max_health));
        }
        check_non_negative("damage", self.damage as f32)?;
        check_non_negative("attack_range", self.attack_range)?;
        check_non_negative("attack_cooldown", self.attack_cooldown)?;
        check_non_negative("attack_delay", self.attack_delay)?;
        check_non_negative("heal_amount", self.heal_amount as f32)?;
        check_non_negative("heal_cooldown", self.heal_cooldown)?;
        Ok(())
    }
}

/// Патрульный маршрут: явные waypoints или генерация вокруг точки спавна
///
/// Если waypoints < 2 — маршрут генерируется (`random_point_count` точек на
/// окружности `radius` с попарной дистанцией ≥ `min_point_distance`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Reflect)]
#[serde(default)]
pub struct PatrolConfig {
    pub waypoints: Vec<Vec2>,
    pub random_point_count: usize,
    pub radius: f32,
    pub min_point_distance: f32,
}

impl Default for PatrolConfig {
    fn default() -> Self {
        Self {
            waypoints: Vec::new(),
            random_point_count: 2,
            radius: 3.0,
            min_point_distance: 1.5,
        }
    }
}

impl PatrolConfig {
    /// Маршрут задан явно (≥ 2 точек) — не генерируем и не перегенерируем
    pub fn has_fixed_route(&self) -> bool {
        self.waypoints.len() >= 2
    }
}

/// Стартовое поведение агента
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Reflect)]
pub enum InitialState {
    #[default]
    Patrol,
    /// Стоим на месте бессрочно, пока цель не войдёт в chase radius
    Idle,
}

/// Что делает агент, потеряв цель (Chase, distance > chase_radius)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Reflect)]
pub enum LoseTargetPolicy {
    /// Idle на `idle_after_chase_duration`, затем Patrol.
    /// `regenerate_route` — перегенерировать маршрут вокруг текущей позиции.
    IdleThenPatrol { regenerate_route: bool },
    /// Сразу обратно в Patrol по старому маршруту
    Patrol,
}

impl Default for LoseTargetPolicy {
    fn default() -> Self {
        Self::IdleThenPatrol {
            regenerate_route: true,
        }
    }
}

/// Полная конфигурация врага
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Reflect)]
#[serde(default)]
pub struct AgentConfig {
    /// Радиус начала преследования (должен быть > stats.attack_range)
    pub chase_radius: f32,
    /// Скорость движения (метры/сек) — patrol и chase
    pub move_speed: f32,
    pub initial_state: InitialState,
    pub lose_target: LoseTargetPolicy,
    /// Idle после потери цели (секунды)
    pub idle_after_chase_duration: f32,
    pub stats: StatsConfig,
    pub patrol: PatrolConfig,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            chase_radius: 5.0,
            move_speed: 2.0,
            initial_state: InitialState::default(),
            lose_target: LoseTargetPolicy::default(),
            idle_after_chase_duration: 5.0,
            stats: StatsConfig::default(),
            patrol: PatrolConfig::default(),
        }
    }
}

impl AgentConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.stats.validate()?;
        check_non_negative("chase_radius", self.chase_radius)?;
        check_non_negative("move_speed", self.move_speed)?;
        check_non_negative("idle_after_chase_duration", self.idle_after_chase_duration)?;
        check_non_negative("patrol.radius", self.patrol.radius)?;
        check_non_negative("patrol.min_point_distance", self.patrol.min_point_distance)?;

        if self.chase_radius <= self.stats.attack_range {
            return Err(ConfigError::ChaseRadiusNotAboveAttackRange {
                chase_radius: self.chase_radius,
                attack_range: self.stats.attack_range,
            });
        }

        for waypoint in &self.patrol.waypoints {
            if !waypoint.is_finite() {
                return Err(ConfigError::InvalidValue {
                    field: "patrol.waypoints",
                    value: if waypoint.x.is_finite() { waypoint.y } else { waypoint.x },
                });
            }
        }

        Ok(())
    }

    /// Parse RON + validate
    pub fn from_ron(source: &str) -> Result<Self, ConfigError> {
        let config: AgentConfig =
            ron::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

fn check_non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue { field, value })
    }
}

//! ECS Components и базовые типы симуляции
//!
//! Организация по доменам:
//! - stats: stat model (health, урон, регенерация, смерть)
//! - world: время тика, геометрия, Target контракт
//! - player: цель врагов (Player marker, Combatant)

pub mod player;
pub mod stats;
pub mod world;

// Re-exports для удобного импорта
pub use player::{Combatant, Player};
pub use stats::{DamageOutcome, StatEvent, StatModel};
pub use world::{distance, move_towards, SimTime, Target};

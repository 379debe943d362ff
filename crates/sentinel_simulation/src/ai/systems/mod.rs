//! AI systems (Bevy ECS обвязка над EnemyAgent)

pub mod tick;

// Re-export all systems
pub use tick::*;

//! World/spatial примитивы: simulation clock, distance, move-toward, Target
//!
//! Всё здесь — pure functions над `Vec2` (2D изометрическая плоскость).
//! Core не владеет источником времени: `SimTime` приходит снаружи каждый тик.

use bevy::prelude::*;
use crate::components::stats::DamageOutcome;

/// Время симуляции для одного тика
///
/// - `delta` — длительность тика (секунды)
/// - `elapsed` — время с начала симуляции, уже включая текущий тик
#[derive(Debug, Clone, Copy, PartialEq, Default, Reflect)]
pub struct SimTime {
    pub delta: f32,
    pub elapsed: f32,
}

impl SimTime {
    pub fn new(delta: f32, elapsed: f32) -> Self {
        Self { delta, elapsed }
    }

    /// Продвинуть clock на `delta` и вернуть время нового тика
    pub fn advance(&mut self, delta: f32) -> SimTime {
        self.delta = delta;
        self.elapsed += delta;
        *self
    }
}

/// Евклидово расстояние на плоскости
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Сдвинуть `current` к `target` не дальше чем на `max_delta`
///
/// Не перелетает через target (в отличие от velocity integration) —
/// патруль не осциллирует вокруг waypoint.
pub fn move_towards(current: Vec2, target: Vec2, max_delta: f32) -> Vec2 {
    let to_target = target - current;
    let dist = to_target.length();

    if dist <= max_delta || dist <= f32::EPSILON {
        return target;
    }

    current + to_target / dist * max_delta
}

/// Цель агента (обычно игрок)
///
/// Провайдер позиции + приёмник урона. Передаётся в тик как
/// `Option<&mut dyn Target>`: `None` = цели нет (не назначена или уничтожена).
pub trait Target {
    /// Текущая позиция цели
    fn position(&self) -> Vec2;

    /// Применить урон к stat model цели
    fn receive_damage(&mut self, amount: i32, now: f32) -> DamageOutcome;
}

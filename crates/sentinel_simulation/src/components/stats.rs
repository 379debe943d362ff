//! Stat Model: health, боевые параметры, регенерация, смерть
//!
//! Инварианты:
//! - 0 ≤ current_health ≤ max_health
//! - Died эмитится ровно один раз; после смерти модель не мутирует
//!
//! Уведомления (health bar, death) копятся в очереди и забираются владельцем
//! через [`StatModel::drain_events`] — отсутствие подписчика не проблема.

use bevy::prelude::*;
use crate::config::StatsConfig;

/// Уведомление от stat model для внешних sink'ов
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatEvent {
    /// После каждой мутации health (для health bar)
    HealthChanged { current: i32, max: i32 },
    /// Health дошёл до 0 — entity надо убрать из симуляции
    Died,
}

/// Результат `take_damage`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Урон не применён (уже мертв или amount ≤ 0)
    Ignored,
    /// Урон применён, entity жив
    Wounded { remaining: i32 },
    /// Этот удар убил entity
    Killed,
}

#[derive(Component, Debug, Clone)]
pub struct StatModel {
    max_health: i32,
    current_health: i32,
    damage: i32,
    attack_range: f32,
    attack_cooldown: f32,
    attack_delay: f32,
    heal_amount: i32,
    heal_cooldown: f32,
    last_heal_time: f32,
    /// Получен урон с момента последнего full health
    damaged_from_full: bool,
    dead: bool,
    events: Vec<StatEvent>,
}

impl StatModel {
    pub fn new(config: &StatsConfig) -> Self {
        Self {
            max_health: config.max_health,
            current_health: config.max_health,
            damage: config.damage,
            attack_range: config.attack_range,
            attack_cooldown: config.attack_cooldown,
            attack_delay: config.attack_delay,
            heal_amount: config.heal_amount,
            heal_cooldown: config.heal_cooldown,
            last_heal_time: 0.0,
            damaged_from_full: false,
            dead: false,
            events: Vec::new(),
        }
    }

    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    pub fn current_health(&self) -> i32 {
        self.current_health
    }

    /// Доля health (0.0..=1.0) — то что рисует health bar
    pub fn health_fraction(&self) -> f32 {
        self.current_health as f32 / self.max_health as f32
    }

    pub fn damage(&self) -> i32 {
        self.damage
    }

    pub fn attack_range(&self) -> f32 {
        self.attack_range
    }

    pub fn attack_cooldown(&self) -> f32 {
        self.attack_cooldown
    }

    pub fn attack_delay(&self) -> f32 {
        self.attack_delay
    }

    pub fn last_heal_time(&self) -> f32 {
        self.last_heal_time
    }

    pub fn is_damaged_from_full(&self) -> bool {
        self.damaged_from_full
    }

    pub fn is_alive(&self) -> bool {
        !self.dead
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    /// Нанести урон
    ///
    /// Первый удар с full health сбрасывает heal clock (регенерация не тикает
    /// сразу после свежего удара). Смерть — terminal, повторные вызовы no-op.
    pub fn take_damage(&mut self, amount: i32, now: f32) -> DamageOutcome {
        if self.dead || self.current_health <= 0 || amount <= 0 {
            return DamageOutcome::Ignored;
        }

        if !self.damaged_from_full {
            self.last_heal_time = now;
            self.damaged_from_full = true;
        }

        self.current_health = (self.current_health - amount).max(0);
        self.events.push(StatEvent::HealthChanged {
            current: self.current_health,
            max: self.max_health,
        });

        if self.current_health == 0 {
            self.dead = true;
            self.events.push(StatEvent::Died);
            return DamageOutcome::Killed;
        }

        DamageOutcome::Wounded {
            remaining: self.current_health,
        }
    }

    /// Лечение до max_health. Возвращает сколько HP реально восстановлено.
    pub fn heal(&mut self, amount: i32) -> i32 {
        if self.dead || amount <= 0 {
            return 0;
        }

        let before = self.current_health;
        self.current_health = (self.current_health.saturating_add(amount)).min(self.max_health);
        let healed = self.current_health - before;

        if healed > 0 {
            if self.current_health == self.max_health {
                // Следующий удар снова взведёт heal clock
                self.damaged_from_full = false;
            }
            self.events.push(StatEvent::HealthChanged {
                current: self.current_health,
                max: self.max_health,
            });
        }

        healed
    }

    /// Автономная регенерация, вызывается владельцем раз в тик
    ///
    /// Лечит `heal_amount` если health < max и с прошлого heal прошло
    /// ≥ `heal_cooldown`. Возвращает `true` если heal произошёл.
    pub fn try_heal(&mut self, now: f32) -> bool {
        if self.dead || self.heal_amount <= 0 || self.current_health >= self.max_health {
            return false;
        }

        if now - self.last_heal_time < self.heal_cooldown {
            return false;
        }

        self.heal(self.heal_amount);
        self.last_heal_time = now;
        true
    }

    /// Забрать накопленные уведомления (health bar / death sinks)
    pub fn drain_events(&mut self) -> Vec<StatEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn has_pending_events(&self) -> bool {
        !self.events.is_empty()
    }
}

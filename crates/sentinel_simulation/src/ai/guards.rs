//! Transition guard table
//!
//! Pure function: (tag, distance, radii) → переход. Никакого random,
//! одинаковый вход всегда даёт одинаковый результат.
//!
//! | Current | Condition                  | Next        |
//! |---------|----------------------------|-------------|
//! | Patrol  | distance ≤ chase_radius    | Chase       |
//! | Idle    | distance ≤ chase_radius    | Chase       |
//! | Chase   | distance > chase_radius    | LoseTarget  |
//! | Chase   | distance ≤ attack_range    | Attack      |
//! | Attack  | distance > attack_range    | Chase       |
//!
//! За тик срабатывает максимум один guard, порядок проверки — как в таблице
//! (Chase → LoseTarget проверяется раньше Chase → Attack).

use crate::ai::behaviors::StateTag;

/// Радиусы для guard'ов
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuardRadii {
    pub chase_radius: f32,
    pub attack_range: f32,
}

/// Сработавший guard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// → Chase (цель в chase radius или вышла из attack range)
    Chase,
    /// → Attack
    Attack,
    /// Цель вне chase radius: куда идти решает `LoseTargetPolicy`
    LoseTarget,
}

pub fn evaluate_guards(state: StateTag, distance: f32, radii: GuardRadii) -> Option<Transition> {
    match state {
        StateTag::Patrol | StateTag::Idle => {
            (distance <= radii.chase_radius).then_some(Transition::Chase)
        }
        StateTag::Chase => {
            if distance > radii.chase_radius {
                Some(Transition::LoseTarget)
            } else if distance <= radii.attack_range {
                Some(Transition::Attack)
            } else {
                None
            }
        }
        StateTag::Attack => (distance > radii.attack_range).then_some(Transition::Chase),
    }
}

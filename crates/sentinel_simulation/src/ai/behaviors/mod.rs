//! Behavior states врага: Patrol, Idle, Chase, Attack
//!
//! Каждое состояние — самостоятельный объект с lifecycle enter → update* → exit.
//! Инстанс живёт ровно одно пребывание в состоянии: при transition старый
//! выбрасывается, новый конструируется контроллером (таймеры сбрасываются
//! сами собой).
//!
//! `update` не вызывает контроллер напрямую — если состоянию нужен переход
//! (Idle закончился), оно возвращает [`TransitionRequest`].

use bevy::prelude::*;
use std::fmt;

use crate::ai::events::AgentEvent;
use crate::components::{SimTime, StatModel, Target};
use crate::logger::ThrottledLog;

pub mod attack;
pub mod chase;
pub mod idle;
pub mod patrol;

pub use attack::AttackBehavior;
pub use chase::ChaseBehavior;
pub use idle::IdleBehavior;
pub use patrol::{PatrolBehavior, WAYPOINT_REACHED_THRESHOLD};

/// Тег активного состояния (для guard table, visual feedback, логов)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum StateTag {
    Patrol,
    Idle,
    Chase,
    Attack,
}

impl StateTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            StateTag::Patrol => "Patrol",
            StateTag::Idle => "Idle",
            StateTag::Chase => "Chase",
            StateTag::Attack => "Attack",
        }
    }
}

impl fmt::Display for StateTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Запрос перехода от самого состояния (continuation вместо callback)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionRequest {
    /// Вернуться в Patrol (опционально с новым маршрутом)
    ResumePatrol { regenerate_route: bool },
}

/// Всё что состояние может читать/менять во время update
///
/// `'a` — borrow полей агента на время тика, `'t` — lifetime цели.
pub struct BehaviorContext<'a, 't> {
    pub time: SimTime,
    /// Позиция агента (единственный способ двигаться)
    pub position: &'a mut Vec2,
    /// Stat model агента (урон, cooldown, wind-up)
    pub stats: &'a StatModel,
    /// Цель; `None` если её нет
    pub target: Option<&'a mut (dyn Target + 't)>,
    pub log: &'a mut ThrottledLog,
    pub events: &'a mut Vec<AgentEvent>,
}

/// Контракт состояния {enter, update, exit}
pub trait StateBehavior {
    fn tag(&self) -> StateTag;

    fn enter(&mut self, _time: SimTime) {}

    fn update(&mut self, ctx: &mut BehaviorContext<'_, '_>) -> Option<TransitionRequest>;

    fn exit(&mut self, _time: SimTime) {}
}

/// Активное поведение (tagged variant)
///
/// Тег выводится из варианта — рассинхрон tag/object невозможен.
#[derive(Debug, Clone)]
pub enum Behavior {
    Patrol(PatrolBehavior),
    Idle(IdleBehavior),
    Chase(ChaseBehavior),
    Attack(AttackBehavior),
}

impl Behavior {
    fn as_state(&self) -> &dyn StateBehavior {
        match self {
            Behavior::Patrol(state) => state,
            Behavior::Idle(state) => state,
            Behavior::Chase(state) => state,
            Behavior::Attack(state) => state,
        }
    }

    fn as_state_mut(&mut self) -> &mut dyn StateBehavior {
        match self {
            Behavior::Patrol(state) => state,
            Behavior::Idle(state) => state,
            Behavior::Chase(state) => state,
            Behavior::Attack(state) => state,
        }
    }

    pub fn tag(&self) -> StateTag {
        self.as_state().tag()
    }

    pub fn enter(&mut self, time: SimTime) {
        self.as_state_mut().enter(time);
    }

    pub fn update(&mut self, ctx: &mut BehaviorContext<'_, '_>) -> Option<TransitionRequest> {
        self.as_state_mut().update(ctx)
    }

    pub fn exit(&mut self, time: SimTime) {
        self.as_state_mut().exit(time);
    }
}

//! Idle: стоим на месте, опционально с таймером завершения

use super::{BehaviorContext, StateBehavior, StateTag, TransitionRequest};
use crate::components::SimTime;

/// Idle
///
/// - `timed` — через `duration` секунд возвращает completion request
///   (ровно один раз, даже если контроллер не ушёл из состояния)
/// - `indefinite` — стоим пока guard не уведёт в Chase
#[derive(Debug, Clone)]
pub struct IdleBehavior {
    duration: Option<f32>,
    elapsed: f32,
    on_complete: Option<TransitionRequest>,
    completed: bool,
}

impl IdleBehavior {
    pub fn timed(duration: f32, on_complete: Option<TransitionRequest>) -> Self {
        Self {
            duration: Some(duration),
            elapsed: 0.0,
            on_complete,
            completed: false,
        }
    }

    pub fn indefinite() -> Self {
        Self {
            duration: None,
            elapsed: 0.0,
            on_complete: None,
            completed: false,
        }
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }
}

impl StateBehavior for IdleBehavior {
    fn tag(&self) -> StateTag {
        StateTag::Idle
    }

    fn enter(&mut self, _time: SimTime) {
        self.elapsed = 0.0;
        self.completed = false;
    }

    fn update(&mut self, ctx: &mut BehaviorContext<'_, '_>) -> Option<TransitionRequest> {
        ctx.log.log(ctx.time.elapsed, "Enemy is idling...");

        self.elapsed += ctx.time.delta;

        let duration = self.duration?;
        if self.completed || self.elapsed < duration {
            return None;
        }

        self.completed = true;
        self.on_complete
    }
}

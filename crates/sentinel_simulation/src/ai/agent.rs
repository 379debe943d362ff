//! Enemy state machine controller
//!
//! Владеет активным behavior, stat model и патрульным маршрутом.
//! Порядок тика:
//! 1. update активного behavior (+ обработка его TransitionRequest)
//! 2. self-heal через stat model
//! 3. guard table по дистанции до цели
//! 4. transition (exit → swap → enter), максимум один за тик
//!
//! Все переходы конструируются здесь — guard table аудируется в одном месте.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::ai::behaviors::{
    AttackBehavior, Behavior, BehaviorContext, ChaseBehavior, IdleBehavior, PatrolBehavior,
    StateTag, TransitionRequest,
};
use crate::ai::events::AgentEvent;
use crate::ai::guards::{evaluate_guards, GuardRadii, Transition};
use crate::ai::patrol_points::generate_patrol_points;
use crate::components::{distance, DamageOutcome, SimTime, StatModel, Target};
use crate::config::{AgentConfig, ConfigError, InitialState, LoseTargetPolicy};
use crate::logger::ThrottledLog;

/// Враг с AI state machine
///
/// Инвариант: ровно одно активное поведение, тег = вариант `behavior`.
#[derive(Component, Debug, Clone)]
pub struct EnemyAgent {
    config: AgentConfig,
    position: Vec2,
    stats: StatModel,
    behavior: Behavior,
    route: Vec<Vec2>,
    rng: ChaCha8Rng,
    log: ThrottledLog,
    events: Vec<AgentEvent>,
}

impl EnemyAgent {
    /// Создать агента в точке спавна
    ///
    /// Конфиг валидируется здесь; `seed` определяет генерацию маршрута.
    pub fn new(config: AgentConfig, spawn: Vec2, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let route = if config.patrol.has_fixed_route() {
            config.patrol.waypoints.clone()
        } else {
            generate_patrol_points(
                &mut rng,
                spawn,
                config.patrol.random_point_count,
                config.patrol.radius,
                config.patrol.min_point_distance,
            )
        };

        let behavior = match config.initial_state {
            InitialState::Patrol => Behavior::Patrol(PatrolBehavior::new(route.clone(), config.move_speed)),
            InitialState::Idle => Behavior::Idle(IdleBehavior::indefinite()),
        };

        let mut agent = Self {
            stats: StatModel::new(&config.stats),
            config,
            position: spawn,
            behavior,
            route,
            rng,
            log: ThrottledLog::default(),
            events: Vec::new(),
        };

        let initial = SimTime::default();
        agent.behavior.enter(initial);
        agent.events.push(AgentEvent::Entered(agent.behavior.tag()));
        crate::logger::log_info(&format!("Enemy entered {} state.", agent.behavior.tag()));

        Ok(agent)
    }

    pub fn state(&self) -> StateTag {
        self.behavior.tag()
    }

    pub fn behavior(&self) -> &Behavior {
        &self.behavior
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn stats(&self) -> &StatModel {
        &self.stats
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Текущий патрульный маршрут
    pub fn route(&self) -> &[Vec2] {
        &self.route
    }

    pub fn is_dead(&self) -> bool {
        self.stats.is_dead()
    }

    fn radii(&self) -> GuardRadii {
        GuardRadii {
            chase_radius: self.config.chase_radius,
            attack_range: self.stats.attack_range(),
        }
    }

    /// Один тик симуляции
    ///
    /// `target` — цель (игрок), `None` если её нет: guards не срабатывают,
    /// движение к цели no-op. Возвращает уведомления за тик.
    pub fn tick(&mut self, time: SimTime, target: Option<&mut dyn Target>) -> Vec<AgentEvent> {
        // Мертвый агент ждёт удаления — никакой логики
        if self.stats.is_dead() {
            return self.drain_events();
        }

        // 1. Update активного состояния
        let (request, target_position) = {
            let mut ctx = BehaviorContext {
                time,
                position: &mut self.position,
                stats: &self.stats,
                target,
                log: &mut self.log,
                events: &mut self.events,
            };
            let request = self.behavior.update(&mut ctx);
            let target_position = ctx.target.as_deref().map(|t| t.position());
            (request, target_position)
        };

        let requested = request.is_some();
        if let Some(request) = request {
            self.handle_request(request, time);
        }

        // 2. Self-heal
        self.stats.try_heal(time.elapsed);

        // 3-4. Guards (только при наличии цели; переход по запросу уже занял этот тик)
        if let Some(target_position) = target_position.filter(|_| !requested) {
            let dist = distance(self.position, target_position);
            if let Some(transition) = evaluate_guards(self.state(), dist, self.radii()) {
                self.apply_transition(transition, time);
            }
        }

        self.drain_events()
    }

    /// Сменить состояние: exit старого → swap → enter нового
    pub fn set_state(&mut self, next: Behavior, time: SimTime) {
        let previous = self.behavior.tag();
        self.behavior.exit(time);
        self.events.push(AgentEvent::Exited(previous));
        crate::logger::log_info(&format!("Enemy exited {} state.", previous));

        self.behavior = next;

        let tag = self.behavior.tag();
        self.events.push(AgentEvent::Entered(tag));
        self.behavior.enter(time);
        crate::logger::log_info(&format!("Enemy entered {} state.", tag));
    }

    fn handle_request(&mut self, request: TransitionRequest, time: SimTime) {
        match request {
            TransitionRequest::ResumePatrol { regenerate_route } => {
                if regenerate_route && !self.config.patrol.has_fixed_route() {
                    self.regenerate_route();
                }
                self.set_state(Behavior::Patrol(self.patrol_behavior()), time);
            }
        }
    }

    fn apply_transition(&mut self, transition: Transition, time: SimTime) {
        let next = match transition {
            Transition::Chase => Behavior::Chase(ChaseBehavior::new(self.config.move_speed)),
            Transition::Attack => Behavior::Attack(AttackBehavior::new()),
            Transition::LoseTarget => match self.config.lose_target {
                LoseTargetPolicy::IdleThenPatrol { regenerate_route } => Behavior::Idle(IdleBehavior::timed(
                    self.config.idle_after_chase_duration,
                    Some(TransitionRequest::ResumePatrol { regenerate_route }),
                )),
                LoseTargetPolicy::Patrol => Behavior::Patrol(self.patrol_behavior()),
            },
        };

        self.set_state(next, time);
    }

    fn patrol_behavior(&self) -> PatrolBehavior {
        PatrolBehavior::new(self.route.clone(), self.config.move_speed)
    }

    /// Новый маршрут вокруг текущей позиции (агент мог уйти далеко от спавна)
    fn regenerate_route(&mut self) {
        let patrol = &self.config.patrol;
        self.route = generate_patrol_points(
            &mut self.rng,
            self.position,
            patrol.random_point_count,
            patrol.radius,
            patrol.min_point_distance,
        );
        self.events.push(AgentEvent::RouteRegenerated {
            waypoints: self.route.len(),
        });
    }

    /// Урон от внешнего атакующего (игрок)
    pub fn take_damage(&mut self, amount: i32, now: f32) -> DamageOutcome {
        self.stats.take_damage(amount, now)
    }

    /// Забрать накопленные уведомления (включая stat model)
    pub fn drain_events(&mut self) -> Vec<AgentEvent> {
        let stat_events = self.stats.drain_events();
        self.events.extend(stat_events.into_iter().map(AgentEvent::Stat));
        std::mem::take(&mut self.events)
    }
}

impl Target for EnemyAgent {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn receive_damage(&mut self, amount: i32, now: f32) -> DamageOutcome {
        self.take_damage(amount, now)
    }
}

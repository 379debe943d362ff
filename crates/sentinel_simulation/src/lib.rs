//! Sentinel Simulation Core
//!
//! Enemy AI для 2D изометрической сцены: Patrol / Idle / Chase / Attack,
//! stat model с регенерацией, процедурные патрульные маршруты.
//!
//! Слои:
//! - core (ai, components, config) — plain Rust, время приходит снаружи (`SimTime`)
//! - ECS обвязка (plugins) — FixedUpdate 60Hz, core events → Bevy events

use bevy::prelude::*;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use bevy::time::TimeUpdateStrategy;
use std::time::Duration;

// Публичные модули
pub mod ai;
pub mod combat;
pub mod components;
pub mod config;
pub mod logger;

// Re-export базовых типов для удобства
pub use ai::{AIPlugin, AgentEvent, EnemyAgent, StateChanged, StateTag};
pub use combat::{CombatPlugin, DamageDealt, EntityDied, HealthChanged, MeleeStrike, StrikeIntent};
pub use components::*;
pub use config::{AgentConfig, ConfigError, InitialState, LoseTargetPolicy, PatrolConfig, StatsConfig};
pub use logger::{init_logger, log, log_error, log_info, log_warning, LogLevel, LogPrinter};

/// Seed по умолчанию (если RNG не вставлен заранее)
pub const DEFAULT_SEED: u64 = 42;

/// Частота simulation tick
pub const FIXED_HZ: f64 = 60.0;

/// Фазы FixedUpdate: сначала AI тик, потом combat (удары игрока, события, despawn)
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    Ai,
    Combat,
}

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        // Seed мог прийти из create_headless_app — не перетираем
        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(DEFAULT_SEED));
        }

        app
            // Fixed timestep 60Hz для simulation tick (легче считать интервалы)
            .insert_resource(Time::<Fixed>::from_hz(FIXED_HZ))
            .configure_sets(FixedUpdate, (SimulationSet::Ai, SimulationSet::Combat).chain())
            .register_type::<Player>()
            // Подсистемы
            .add_plugins((AIPlugin, CombatPlugin));
    }
}

/// Детерминистичный RNG resource (seeded)
///
/// Каждый заспавненный враг получает свой seed отсюда — маршруты
/// воспроизводимы при одинаковом порядке спавна.
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed для следующего агента
    pub fn next_seed(&mut self) -> u64 {
        self.rng.next_u64()
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Время виртуальное: каждый `app.update()` продвигает clock ровно на один
/// fixed шаг (после первого update, который только стартует clock).
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_hz(FIXED_HZ)) // 60Hz FixedUpdate
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(1.0 / FIXED_HZ)));

    app
}

/// Заспавнить врага
///
/// Seed маршрута берётся из `DeterministicRng`. Невалидный конфиг — ошибка,
/// entity не создаётся.
pub fn spawn_enemy(world: &mut World, config: AgentConfig, position: Vec2) -> Result<Entity, ConfigError> {
    let seed = world
        .get_resource_mut::<DeterministicRng>()
        .map(|mut rng| rng.next_seed())
        .unwrap_or(DEFAULT_SEED);

    let agent = EnemyAgent::new(config, position, seed)?;
    Ok(world.spawn(agent).id())
}

/// Заспавнить игрока (цель врагов + melee strike)
///
/// `max_health <= 0` — ошибка, entity не создаётся.
pub fn spawn_player(world: &mut World, position: Vec2, max_health: i32) -> Result<Entity, ConfigError> {
    let combatant = Combatant::player(position, max_health)?;
    Ok(world.spawn((Player, combatant, MeleeStrike::default())).id())
}

/// Snapshot всех компонентов `T` (в determinism тестах: `EnemyAgent` и `Combatant`),
/// отсортированных по Entity index. Сравнивается побайтово между прогонами.
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    // Собираем все компоненты в детерминированный формат
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    // Сериализуем в байты через Debug (простейший способ)
    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}

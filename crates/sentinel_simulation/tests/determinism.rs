//! Тесты детерминизма
//!
//! Проверяем что симуляция с одинаковым seed даёт идентичные результаты
//! (маршруты патруля, позиции, health, состояния FSM)

use bevy::prelude::*;
use sentinel_simulation::*;

const TICK_COUNT: usize = 600;

#[test]
fn test_determinism_same_seed() {
    const SEED: u64 = 12345;

    // Первый прогон
    let snapshot1 = run_simulation(SEED);

    // Второй прогон с тем же seed
    let snapshot2 = run_simulation(SEED);

    // Снепшоты должны быть идентичны
    assert_eq!(
        snapshot1, snapshot2,
        "Симуляция с одинаковым seed ({}) дала разные результаты!",
        SEED
    );
}

#[test]
fn test_determinism_multiple_runs() {
    const SEED: u64 = 42;

    // Запускаем 3 раза — все должны быть идентичны
    let snapshots: Vec<_> = (0..3).map(|_| run_simulation(SEED)).collect();

    for (i, snapshot) in snapshots.iter().enumerate().skip(1) {
        assert_eq!(
            snapshots[0], *snapshot,
            "Прогон {} дал результат отличный от прогона 0",
            i
        );
    }
}

#[test]
fn test_different_seed_different_routes() {
    assert_ne!(run_simulation(1), run_simulation(2));
}

/// Запускает симуляцию и возвращает snapshot мира
fn run_simulation(seed: u64) -> Vec<u8> {
    let mut app = create_headless_app(seed);
    app.add_plugins(SimulationPlugin);

    let player = spawn_player(app.world_mut(), Vec2::ZERO, 200).expect("valid player");
    for i in 0..6 {
        let angle = i as f32;
        let position = Vec2::new(angle.cos(), angle.sin()) * (4.0 + i as f32 * 2.0);
        spawn_enemy(app.world_mut(), AgentConfig::default(), position).expect("valid config");
    }

    for tick in 0..TICK_COUNT {
        if tick % 30 == 0 {
            app.world_mut().send_event(StrikeIntent { attacker: player });
        }
        app.update();
    }

    let mut snapshot = world_snapshot::<EnemyAgent>(app.world_mut());
    snapshot.extend(world_snapshot::<Combatant>(app.world_mut()));
    snapshot
}

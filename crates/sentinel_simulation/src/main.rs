//! Headless симуляция Sentinel
//!
//! Игрок стоит в центре и бьёт melee по cooldown, враги патрулируют вокруг,
//! замечают его и атакуют. Опционально: путь к RON конфигу врага первым аргументом.

use bevy::prelude::*;
use sentinel_simulation::{
    create_headless_app, log_error, log_info, spawn_enemy, spawn_player, AgentConfig, EnemyAgent,
    SimulationPlugin, StrikeIntent,
};

fn load_config() -> AgentConfig {
    let Some(path) = std::env::args().nth(1) else {
        return AgentConfig::default();
    };

    match std::fs::read_to_string(&path) {
        Ok(source) => match AgentConfig::from_ron(&source) {
            Ok(config) => config,
            Err(e) => {
                log_error(&format!("Invalid config {}: {}", path, e));
                AgentConfig::default()
            }
        },
        Err(e) => {
            log_error(&format!("Cannot read {}: {}", path, e));
            AgentConfig::default()
        }
    }
}

fn main() {
    let seed = 42;
    println!("Starting Sentinel headless simulation (seed: {})", seed);

    let mut app = create_headless_app(seed);
    app.add_plugins(SimulationPlugin);

    let config = load_config();
    let player = match spawn_player(app.world_mut(), Vec2::ZERO, 100) {
        Ok(player) => player,
        Err(e) => {
            log_error(&format!("Player not spawned: {}", e));
            return;
        }
    };
    for position in [Vec2::new(6.0, 0.0), Vec2::new(-4.0, 7.0), Vec2::new(0.0, -12.0)] {
        if let Err(e) = spawn_enemy(app.world_mut(), config.clone(), position) {
            log_error(&format!("Enemy not spawned: {}", e));
            return;
        }
    }

    // 1000 тиков (~16.7 sec при 60Hz)
    for tick in 0..1000 {
        app.world_mut().send_event(StrikeIntent { attacker: player });
        app.update();

        if tick % 100 == 0 {
            let mut agents = app.world_mut().query::<&EnemyAgent>();
            let alive = agents.iter(app.world()).count();
            log_info(&format!("Tick {}: {} enemies alive", tick, alive));
        }
    }

    println!("Simulation complete!");
}

//! Headless симуляция VERACRH WARS
//!
//! Скриптованный encounter: игрок стоит в центре и отстреливается,
//! враги сходятся к нему. Печатает прогресс каждые 60 кадров.

use std::time::Duration;

use bevy::prelude::*;
use veracrh_simulation::*;

/// Стреляет в сторону ближайшего врага (вместо мышки)
fn aim_at_nearest_enemy(app: &mut App) {
    let world = app.world_mut();

    let mut enemies = world.query_filtered::<(&Transform, &EnemyState), With<Enemy>>();
    let player_position = {
        let mut players = world.query_filtered::<&Transform, With<Player>>();
        match players.iter(world).next() {
            Some(transform) => transform.translation,
            None => return,
        }
    };

    let nearest = enemies
        .iter(world)
        .filter(|(_, state)| !state.is_dead())
        .map(|(transform, _)| transform.translation)
        .min_by(|a, b| {
            a.distance_squared(player_position)
                .total_cmp(&b.distance_squared(player_position))
        });

    let mut inputs = world.query_filtered::<&mut PlayerInput, With<Player>>();
    for mut input in inputs.iter_mut(world) {
        input.fire = nearest.is_some();
        input.aim = nearest.map(|target| AimInput {
            ray_origin: target + Vec3::Y * 10.0,
            ray_direction: Vec3::NEG_Y,
            hit: Some(target),
        });
    }
}

fn main() {
    let seed = 42;
    println!("Starting VERACRH WARS headless simulation (seed: {})", seed);

    let waves = ActiveEnemyCounter::default();

    let mut app = create_headless_app(seed);
    // Промахи и поглощения щитом (Debug) в консоли не нужны
    set_log_level(LogLevel::Info);
    app.insert_resource(Collaborators::default().with_waves(waves.clone()))
        .add_plugins(SimulationPlugin);

    app.world_mut().spawn(player_bundle(Vec3::ZERO));
    for i in 0..8 {
        let angle = i as f32 * std::f32::consts::TAU / 8.0;
        let position = Vec3::new(angle.cos(), 0.0, angle.sin()) * 12.0;
        app.world_mut().spawn(enemy_bundle(position, EnemyConfig::default()));
        waves.register_enemy();
    }

    let frame = Duration::from_secs_f64(1.0 / 60.0);
    let mut accumulator = Duration::ZERO;

    // Запускаем 1200 кадров (~20 секунд)
    for tick in 0..1200 {
        aim_at_nearest_enemy(&mut app);
        tick_frame(&mut app, frame, &mut accumulator);

        if tick % 60 == 0 {
            let state = *app.world().resource::<ProgressionState>();
            println!(
                "Tick {}: {} entities, {} enemies alive, kills {}, lives {}",
                tick,
                app.world().entities().len(),
                waves.alive(),
                state.kill_count,
                state.lives_remaining
            );
        }

        if app.world().resource::<ProgressionState>().phase != EncounterPhase::Playing {
            break;
        }
    }

    println!("Simulation complete!");
}

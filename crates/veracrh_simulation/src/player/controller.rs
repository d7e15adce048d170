//! Player controller systems (variable step): weapon switch, movement, facing, fire.
//!
//! Velocity считается здесь, а интегрируется в FixedUpdate (`integrate_velocity`).

use bevy::prelude::*;

use crate::combat::{muzzle_spread, spawn_projectile, WeaponTable};
use crate::components::{Actor, Arsenal, FirePoint, Player, PlayerConfig, PlayerInput};
use crate::logger;
use crate::physics::PhysicsBody;
use crate::shared::{flatten, look_rotation, turn_towards, MIN_DIRECTION_SQR};
use crate::DeterministicRng;

/// Stick/WASD → world direction на плоскости XZ (длина ≤ 1)
pub fn move_direction(move_axis: Vec2) -> Vec3 {
    Vec3::new(move_axis.x, 0.0, -move_axis.y).clamp_length_max(1.0)
}

/// Planar velocity. Sprint умножает скорость только при ненулевом движении.
pub fn planar_velocity(move_axis: Vec2, sprint: bool, config: &PlayerConfig) -> Vec3 {
    let direction = move_direction(move_axis);

    let mut speed = config.move_speed;
    if sprint && direction.length_squared() > MIN_DIRECTION_SQR {
        speed *= config.sprint_multiplier;
    }

    direction * speed
}

/// Куда хотим смотреть: прицел → точка курсора, иначе направление движения.
///
/// `None` → держим текущий facing.
pub fn desired_facing(position: Vec3, input: &PlayerInput, config: &PlayerConfig) -> Option<Quat> {
    if let Some(aim) = input.aim {
        return look_rotation(flatten(aim.target_point() - position));
    }

    if config.rotate_to_move_direction {
        return look_rotation(move_direction(input.move_axis));
    }

    None
}

/// Система: запрос смены оружия (залоченное оружие игнорируется)
pub fn player_weapon_switch(mut players: Query<(&mut PlayerInput, &mut Arsenal), With<Player>>) {
    for (mut input, mut arsenal) in players.iter_mut() {
        let Some(kind) = input.switch_to.take() else {
            continue;
        };

        if !arsenal.equip(kind) {
            logger::log(&format!("Weapon {:?} is locked, switch ignored", kind));
        }
    }
}

/// Система: velocity из input + поворот (slerp, factor = rotation_speed × dt)
pub fn player_movement_and_facing(
    mut players: Query<(&PlayerConfig, &PlayerInput, &mut Transform, &mut PhysicsBody), With<Player>>,
    time: Res<Time<Virtual>>,
) {
    let delta = time.delta_secs();

    for (config, input, mut transform, mut body) in players.iter_mut() {
        body.velocity = planar_velocity(input.move_axis, input.sprint, config);

        if let Some(target) = desired_facing(transform.translation, input, config) {
            transform.rotation = turn_towards(transform.rotation, target, config.rotation_speed, delta);
        }
    }
}

/// Система: fire cooldown + выстрел
///
/// Cooldown стартует даже если снаряд не настроен (выстрел = warning).
pub fn player_fire(
    mut commands: Commands,
    mut players: Query<(&Actor, &PlayerInput, &mut Arsenal, &Transform, &FirePoint), With<Player>>,
    table: Res<WeaponTable>,
    mut rng: ResMut<DeterministicRng>,
    time: Res<Time<Virtual>>,
) {
    let delta = time.delta_secs();

    for (actor, input, mut arsenal, transform, fire_point) in players.iter_mut() {
        arsenal.tick(delta);

        if !input.fire || !arsenal.ready_to_fire() {
            continue;
        }

        let weapon = arsenal.current();
        let spec = table.spec(weapon);

        match spec.projectile {
            Some(projectile) => {
                let rotation = transform.rotation * muzzle_spread(&mut rng.rng, spec.bloom_degrees);
                let position = transform.translation + transform.rotation * fire_point.offset;
                spawn_projectile(&mut commands, &projectile, actor.faction, position, rotation);
            }
            None => {
                logger::log_warning(&format!("No projectile configured for {:?}", weapon));
            }
        }

        arsenal.start_cooldown(spec.fire_rate);
    }
}

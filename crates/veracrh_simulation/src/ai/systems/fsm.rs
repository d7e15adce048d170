//! Enemy FSM systems: chase / begin attack / resolve attack.

use bevy::ecs::query::QuerySingleError;
use bevy::prelude::*;

use crate::ai::components::{attack_connects, decide_chase, ChaseAction, Enemy, EnemyConfig, EnemyState, EnemyTimers};
use crate::ai::events::AttackBegun;
use crate::components::{Player, ShieldCharge};
use crate::logger;
use crate::physics::PhysicsBody;
use crate::progression::EncounterDirector;
use crate::shared::{flatten, look_rotation, planar_distance, turn_towards};

/// Система: Attacking → (damage?) → Chasing
///
/// Через `attack_pause` после начала атаки заново проверяем цель:
/// игрок существует и в пределах attack_range + допуск → урон.
/// Промах тоже возвращает в Chasing.
pub fn enemy_resolve_attacks(
    mut enemies: Query<(Entity, &mut EnemyState, &EnemyConfig, &Transform), (With<Enemy>, Without<Player>)>,
    mut players: Query<(&Transform, &mut ShieldCharge), (With<Player>, Without<Enemy>)>,
    mut director: EncounterDirector,
) {
    let now = director.now();

    for (entity, mut state, config, transform) in enemies.iter_mut() {
        let EnemyState::Attacking { resume_at } = *state else {
            continue;
        };

        if now < resume_at {
            continue;
        }

        match players.single_mut() {
            Ok((player_transform, mut shield)) => {
                let distance = planar_distance(transform.translation, player_transform.translation);

                if attack_connects(distance, config) {
                    director.damage_player(&mut shield);
                } else {
                    logger::log(&format!("Enemy {:?} attack missed (distance {:.2})", entity, distance));
                }
            }
            Err(QuerySingleError::MultipleEntities(_)) => {
                logger::log_error(&format!("Enemy {:?} attack skipped: more than one Player in the world", entity));
            }
            Err(QuerySingleError::NoEntities(_)) => {
                logger::log(&format!("Enemy {:?} attack resolved without a target", entity));
            }
        }

        *state = EnemyState::Chasing;
    }
}

/// Система: Chasing: attack check, hold в stop_distance, иначе движение к игроку
///
/// Нет игрока → тик пропускается целиком (перепроверим на следующем).
pub fn enemy_chase(
    mut enemies: Query<
        (
            Entity,
            &mut EnemyState,
            &EnemyConfig,
            &mut EnemyTimers,
            &mut Transform,
            &mut PhysicsBody,
        ),
        (With<Enemy>, Without<Player>),
    >,
    players: Query<(Entity, &Transform), (With<Player>, Without<Enemy>)>,
    time: Res<Time<Fixed>>,
    mut attack_events: EventWriter<AttackBegun>,
) {
    let Ok((player, player_transform)) = players.single() else {
        return;
    };

    let now = time.elapsed_secs();
    let delta = time.delta_secs();

    for (entity, mut state, config, mut timers, mut transform, mut body) in enemies.iter_mut() {
        if *state != EnemyState::Chasing {
            continue;
        }

        let to_target = flatten(player_transform.translation - transform.translation);

        match decide_chase(to_target, config, &timers, now) {
            ChaseAction::BeginAttack => {
                body.stop();

                // Разворот к цели мгновенно, без slerp
                if let Some(facing) = look_rotation(to_target) {
                    transform.rotation = facing;
                }

                let resume_at = timers.begin_attack(now, config);
                *state = EnemyState::Attacking { resume_at };
                attack_events.write(AttackBegun { enemy: entity, target: player });
            }
            ChaseAction::Hold => {
                body.stop();
            }
            ChaseAction::Advance { direction } => {
                transform.translation += direction * config.move_speed * delta;

                if let Some(target) = look_rotation(direction) {
                    transform.rotation = turn_towards(transform.rotation, target, config.rotate_speed, delta);
                }
            }
        }
    }
}

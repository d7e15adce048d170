//! Kinematic movement: velocity integration + rapier body presets
//!
//! Архитектура:
//! - Rapier (если хост его подключил): только коллизии и contact events
//! - Velocity интегрируем сами в FixedUpdate
//! - Мёртвые тела получают `Frozen` и больше не двигаются

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

/// Linear/angular velocity, которые ведёт ядро (не rapier)
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct PhysicsBody {
    pub velocity: Vec3,
    pub angular_velocity: Vec3,
}

impl PhysicsBody {
    pub fn stop(&mut self) {
        self.velocity = Vec3::ZERO;
        self.angular_velocity = Vec3::ZERO;
    }
}

/// Body no longer reacts to velocity or external pushes
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Frozen;

/// Система интеграции velocity → Transform
///
/// position += velocity * dt. Работает в FixedUpdate.
pub fn integrate_velocity(
    mut query: Query<(&PhysicsBody, &mut Transform), Without<Frozen>>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (body, mut transform) in query.iter_mut() {
        if body.velocity == Vec3::ZERO {
            continue;
        }

        transform.translation += body.velocity * delta;
    }
}

fn kinematic_collision_types() -> ActiveCollisionTypes {
    // kinematic тела по умолчанию не генерируют события друг с другом
    ActiveCollisionTypes::default()
        | ActiveCollisionTypes::KINEMATIC_KINEMATIC
        | ActiveCollisionTypes::KINEMATIC_STATIC
}

/// Rapier body для актора (capsule, kinematic, collision events)
pub fn actor_body(radius: f32) -> impl Bundle {
    (
        RigidBody::KinematicPositionBased,
        Collider::capsule_y(0.5, radius),
        ActiveEvents::COLLISION_EVENTS,
        kinematic_collision_types(),
        Velocity::default(),
    )
}

/// Rapier body для снаряда (sensor ball + CCD против туннелирования)
pub fn projectile_body(radius: f32) -> impl Bundle {
    (
        RigidBody::KinematicPositionBased,
        Collider::ball(radius),
        Sensor,
        Ccd::enabled(),
        ActiveEvents::COLLISION_EVENTS,
        kinematic_collision_types(),
    )
}

/// Rapier sensor для pickups
pub fn sensor_body(radius: f32) -> impl Bundle {
    (
        Collider::ball(radius),
        Sensor,
        ActiveEvents::COLLISION_EVENTS,
        kinematic_collision_types(),
    )
}

/// Death freeze: отключить коллизии, обнулить скорость, сделать тело kinematic
pub fn frozen_body() -> impl Bundle {
    (
        Frozen,
        ColliderDisabled,
        RigidBody::KinematicPositionBased,
        Velocity::zero(),
    )
}

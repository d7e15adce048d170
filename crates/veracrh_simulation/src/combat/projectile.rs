//! Projectile component + contact resolution rules
//!
//! Два вида, один lifecycle:
//! - Bullet: убивает врага которого коснулся, гасится о сцену, пролетает сквозь свою фракцию
//! - Rocket: взрывается о что угодно, убивает всех врагов в радиусе (binary, без falloff)
//!
//! Снаряд резолвится ровно один раз: первый подходящий контакт помечает его spent.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::weapon::ProjectileSpec;
use crate::components::Faction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub enum ProjectileKind {
    Bullet,
    Rocket,
}

#[derive(Component, Debug, Clone, Copy, PartialEq)]
#[require(Transform)]
pub struct Projectile {
    pub kind: ProjectileKind,
    /// Friendly-fire filter (вместо back-reference на стрелка)
    pub owner: Faction,
    pub velocity: Vec3,
    pub remaining_lifetime: f32,
    pub explosion_radius: f32,
    spent: bool,
}

impl Projectile {
    /// Velocity = forward(rotation) × speed
    pub fn from_spec(spec: &ProjectileSpec, owner: Faction, rotation: Quat) -> Self {
        Self {
            kind: spec.kind,
            owner,
            velocity: rotation * Vec3::NEG_Z * spec.speed,
            remaining_lifetime: spec.lifetime,
            explosion_radius: spec.explosion_radius,
            spent: false,
        }
    }

    pub fn is_spent(&self) -> bool {
        self.spent
    }

    pub fn mark_spent(&mut self) {
        self.spent = true;
    }

    /// Count lifetime down. Returns true once expired.
    pub fn tick_lifetime(&mut self, delta: f32) -> bool {
        self.remaining_lifetime -= delta;
        self.remaining_lifetime <= 0.0
    }
}

/// Во что снаряд упёрся (после подъёма по иерархии)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactTarget {
    /// Живой враг
    Enemy(Entity),
    /// Не-враг с фракцией (игрок)
    Actor(Faction),
    /// Стены, пол, всё без Actor
    Scenery,
    /// Тело без collision response: мёртвые враги, другие снаряды
    PassThrough,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactResolution {
    Ignore,
    KillEnemy(Entity),
    /// Погас о сцену/чужое тело без урона
    Absorbed,
    Explode,
}

pub fn resolve_contact(kind: ProjectileKind, owner: Faction, target: ContactTarget) -> ContactResolution {
    if target == ContactTarget::PassThrough {
        return ContactResolution::Ignore;
    }

    match kind {
        // Rocket: никакого фильтра по фракции
        ProjectileKind::Rocket => ContactResolution::Explode,
        ProjectileKind::Bullet => match target {
            ContactTarget::Enemy(enemy) => ContactResolution::KillEnemy(enemy),
            ContactTarget::Actor(faction) if faction == owner => ContactResolution::Ignore,
            _ => ContactResolution::Absorbed,
        },
    }
}

/// Enemies within `radius` (inclusive) of `center`.
pub fn enemies_in_blast(
    center: Vec3,
    radius: f32,
    enemies: impl IntoIterator<Item = (Entity, Vec3)>,
) -> Vec<Entity> {
    enemies
        .into_iter()
        .filter(|(_, position)| position.distance(center) <= radius)
        .map(|(entity, _)| entity)
        .collect()
}

/// Spawn helper: снаряд + rapier sensor
pub fn spawn_projectile(
    commands: &mut Commands,
    spec: &ProjectileSpec,
    owner: Faction,
    position: Vec3,
    rotation: Quat,
) -> Entity {
    commands
        .spawn((
            Projectile::from_spec(spec, owner, rotation),
            Transform::from_translation(position).with_rotation(rotation),
            crate::physics::projectile_body(0.1),
        ))
        .id()
}

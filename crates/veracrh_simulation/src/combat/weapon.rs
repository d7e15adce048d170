//! Weapon definitions: kinds, unlock set, fire tuning table
//!
//! Architecture:
//! - `WeaponTable` (resource): статичные характеристики каждого оружия
//! - `Arsenal` (component на игроке): текущее оружие + cooldown
//! - player systems читают таблицу и спавнят `Projectile`

use bevy::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::projectile::ProjectileKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub enum WeaponKind {
    Rifle,
    Flamethrower,
    Rpg,
}

impl WeaponKind {
    pub const ALL: [WeaponKind; 3] = [WeaponKind::Rifle, WeaponKind::Flamethrower, WeaponKind::Rpg];

    fn bit(self) -> u8 {
        match self {
            WeaponKind::Rifle => 0b001,
            WeaponKind::Flamethrower => 0b010,
            WeaponKind::Rpg => 0b100,
        }
    }
}

/// Small set of weapon kinds (bitmask)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WeaponSet(u8);

impl WeaponSet {
    pub fn only(kind: WeaponKind) -> Self {
        Self(kind.bit())
    }

    pub fn contains(&self, kind: WeaponKind) -> bool {
        self.0 & kind.bit() != 0
    }

    pub fn insert(&mut self, kind: WeaponKind) {
        self.0 |= kind.bit();
    }

    pub fn iter(&self) -> impl Iterator<Item = WeaponKind> {
        let set = *self;
        WeaponKind::ALL.into_iter().filter(move |kind| set.contains(*kind))
    }
}

/// Параметры снаряда, который выпускает оружие
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectileSpec {
    pub kind: ProjectileKind,
    pub speed: f32,
    pub lifetime: f32,
    /// Только для Rocket
    pub explosion_radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeaponSpec {
    /// Shots per second
    pub fire_rate: f32,
    /// `None` → префаб снаряда не настроен: выстрел = warning + no-op
    pub projectile: Option<ProjectileSpec>,
    /// Random spread half-angle (degrees); 0 = точное оружие
    pub bloom_degrees: f32,
}

/// Fire tuning for every weapon kind
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct WeaponTable {
    pub rifle: WeaponSpec,
    pub flamethrower: WeaponSpec,
    pub rpg: WeaponSpec,
}

impl Default for WeaponTable {
    fn default() -> Self {
        Self {
            rifle: WeaponSpec {
                fire_rate: 8.0,
                projectile: Some(ProjectileSpec {
                    kind: ProjectileKind::Bullet,
                    speed: 25.0,
                    lifetime: 2.0,
                    explosion_radius: 0.0,
                }),
                bloom_degrees: 0.0,
            },
            flamethrower: WeaponSpec {
                fire_rate: 20.0,
                projectile: Some(ProjectileSpec {
                    kind: ProjectileKind::Bullet,
                    speed: 12.0,
                    lifetime: 0.45,
                    explosion_radius: 0.0,
                }),
                bloom_degrees: 8.0,
            },
            rpg: WeaponSpec {
                fire_rate: 1.0,
                projectile: Some(ProjectileSpec {
                    kind: ProjectileKind::Rocket,
                    speed: 14.0,
                    lifetime: 3.5,
                    explosion_radius: 4.0,
                }),
                bloom_degrees: 0.0,
            },
        }
    }
}

impl WeaponTable {
    pub fn spec(&self, kind: WeaponKind) -> &WeaponSpec {
        match kind {
            WeaponKind::Rifle => &self.rifle,
            WeaponKind::Flamethrower => &self.flamethrower,
            WeaponKind::Rpg => &self.rpg,
        }
    }

    pub fn spec_mut(&mut self, kind: WeaponKind) -> &mut WeaponSpec {
        match kind {
            WeaponKind::Rifle => &mut self.rifle,
            WeaponKind::Flamethrower => &mut self.flamethrower,
            WeaponKind::Rpg => &mut self.rpg,
        }
    }
}

/// Random muzzle spread (flamethrower bloom).
///
/// Yaw ∈ [-bloom, +bloom], pitch ∈ [-bloom/4, +bloom/4], независимо по осям.
/// Результат умножается справа на базовую ориентацию fire point.
pub fn muzzle_spread(rng: &mut impl Rng, bloom_degrees: f32) -> Quat {
    if bloom_degrees <= 0.0 {
        return Quat::IDENTITY;
    }

    let yaw = rng.gen_range(-bloom_degrees..=bloom_degrees);
    let pitch_limit = bloom_degrees * 0.25;
    let pitch = rng.gen_range(-pitch_limit..=pitch_limit);

    Quat::from_euler(EulerRot::YXZ, yaw.to_radians(), pitch.to_radians(), 0.0)
}

//! Combat module: оружие, снаряды, урон по игроку
//!
//! ECS ответственность:
//! - Fire tuning (`WeaponTable`), muzzle spread
//! - Projectile lifecycle: полёт, lifetime, первый контакт
//! - Damage resolution: щит → жизнь
//!
//! Стрельба игрока живёт в `player` (variable step), смерть врага в
//! `progression::EncounterDirector` (общая для пуль, ракет и будущих путей).

use bevy::prelude::*;

pub mod damage;
pub mod projectile;
pub mod systems;
pub mod weapon;


// Re-export основных типов
pub use damage::{despawn_after_timeout, resolve_player_damage, DamageOutcome, DespawnAfter, PlayerDamaged};
pub use projectile::{
    enemies_in_blast, resolve_contact, spawn_projectile, ContactResolution, ContactTarget, Projectile,
    ProjectileKind,
};
pub use systems::{advance_projectiles, resolve_projectile_contacts};
pub use weapon::{muzzle_spread, ProjectileSpec, WeaponKind, WeaponSet, WeaponSpec, WeaponTable};

use crate::SimulationSet;

/// Combat Plugin
///
/// Регистрирует combat системы в FixedUpdate:
/// 1. advance_projectiles: полёт + lifetime (SimulationSet::Projectiles)
/// 2. resolve_projectile_contacts: kill / absorb / explode (SimulationSet::Contacts)
/// 3. despawn_after_timeout: удаление трупов (SimulationSet::Cleanup)
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<PlayerDamaged>().init_resource::<WeaponTable>();

        app.add_systems(
            FixedUpdate,
            (
                advance_projectiles.in_set(SimulationSet::Projectiles),
                resolve_projectile_contacts.in_set(SimulationSet::Contacts),
                despawn_after_timeout.in_set(SimulationSet::Cleanup),
            ),
        );
    }
}

//! AI decision-making module
//!
//! Enemy FSM: Chasing → Attacking → Chasing, любое → Dead.
//! Все системы в FixedUpdate (SimulationSet::Ai / Contacts) для детерминизма.

use bevy::prelude::*;

pub mod components;
pub mod events;
pub mod systems;

// Re-export основных типов
pub use components::{
    attack_connects, decide_chase, ChaseAction, Enemy, EnemyConfig, EnemyState, EnemyTimers, ATTACK_RANGE_TOLERANCE,
};
pub use events::{AttackBegun, EnemyDied};
pub use systems::{enemy_chase, enemy_contact_damage, enemy_resolve_attacks};

use crate::SimulationSet;

/// AI Plugin
///
/// Порядок выполнения:
/// 1. enemy_resolve_attacks: завершение замахов (resume_at наступил)
/// 2. enemy_chase: новые атаки, hold, движение
/// 3. enemy_contact_damage: в SimulationSet::Contacts, до снарядов
pub struct AIPlugin;

impl Plugin for AIPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<AttackBegun>()
            .add_event::<EnemyDied>();

        app.add_systems(
            FixedUpdate,
            (
                (enemy_resolve_attacks, enemy_chase)
                    .chain()
                    .in_set(SimulationSet::Ai),
                enemy_contact_damage
                    .in_set(SimulationSet::Contacts)
                    .before(crate::combat::resolve_projectile_contacts),
            ),
        );
    }
}

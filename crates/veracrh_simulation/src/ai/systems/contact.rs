//! Enemy contact damage (fallback путь урона при касании игрока)

use bevy::prelude::*;

use crate::ai::components::{Enemy, EnemyConfig, EnemyState, EnemyTimers};
use crate::components::{Player, ShieldCharge};
use crate::physics::{find_in_ancestors, ContactBegan};
use crate::progression::EncounterDirector;

/// Система: ContactBegan (body = враг, other = игрок) → урон с cooldown
pub fn enemy_contact_damage(
    mut contacts: EventReader<ContactBegan>,
    mut enemies: Query<(&EnemyState, &EnemyConfig, &mut EnemyTimers), With<Enemy>>,
    mut players: Query<&mut ShieldCharge, With<Player>>,
    parents: Query<&ChildOf>,
    mut director: EncounterDirector,
) {
    let now = director.now();

    for contact in contacts.read() {
        let Some(enemy) = find_in_ancestors(contact.body, &parents, |e| enemies.contains(e)) else {
            continue;
        };
        let Ok((state, config, mut timers)) = enemies.get_mut(enemy) else {
            continue;
        };

        if !config.contact_damage_enabled || state.is_dead() || !timers.contact_damage_ready(now) {
            continue;
        }

        let Some(player) = find_in_ancestors(contact.other, &parents, |e| players.contains(e)) else {
            continue;
        };
        let Ok(mut shield) = players.get_mut(player) else {
            continue;
        };

        timers.start_contact_cooldown(now, config.contact_damage_cooldown);
        director.damage_player(&mut shield);
    }
}

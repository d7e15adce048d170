//! Pickup collection (FixedUpdate, SimulationSet::Contacts)

use bevy::prelude::*;

use crate::components::{Arsenal, Pickup, PickupKind, Player, ShieldCharge};
use crate::logger;
use crate::physics::{find_in_ancestors, ContactBegan};

/// Система: ContactBegan (body = pickup, other = игрок) → эффект + despawn
///
/// Pickup поглощается первым контактом с игроком, остальные контакты
/// (враги, снаряды, сцена) игнорируются.
pub fn collect_pickups(
    mut commands: Commands,
    mut contacts: EventReader<ContactBegan>,
    pickups: Query<&Pickup>,
    mut players: Query<(&mut Arsenal, &mut ShieldCharge), With<Player>>,
    parents: Query<&ChildOf>,
) {
    let mut consumed: Vec<Entity> = Vec::new();

    for contact in contacts.read() {
        let Ok(pickup) = pickups.get(contact.body) else {
            continue;
        };

        if consumed.contains(&contact.body) {
            continue;
        }

        let Some(player) = find_in_ancestors(contact.other, &parents, |e| players.contains(e)) else {
            continue;
        };
        let Ok((mut arsenal, mut shield)) = players.get_mut(player) else {
            continue;
        };

        match pickup.kind {
            PickupKind::Weapon(kind) => {
                arsenal.unlock_and_equip(kind);
                logger::log_info(&format!("Picked up {:?}", kind));
            }
            PickupKind::Shield => {
                if !shield.add_charge() {
                    logger::log("Shield already full, pickup wasted");
                }
            }
        }

        consumed.push(contact.body);
        commands.entity(contact.body).try_despawn();
    }
}

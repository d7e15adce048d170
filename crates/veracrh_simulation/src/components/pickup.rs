//! Pickups (shield charge, weapon unlock)

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::combat::WeaponKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickupKind {
    Shield,
    Weapon(WeaponKind),
}

/// Лежащий в мире pickup. Поглощается первым контактом с игроком.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
#[require(Transform)]
pub struct Pickup {
    pub kind: PickupKind,
}

/// Spawn helper: хост вызывает из своего `Spawner`, если хочет ECS-pickup
pub fn spawn_pickup(commands: &mut Commands, kind: PickupKind, position: Vec3) -> Entity {
    commands
        .spawn((
            Pickup { kind },
            Transform::from_translation(position),
            crate::physics::sensor_body(0.5),
        ))
        .id()
}

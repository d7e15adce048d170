//! Player domain: input → movement, facing, weapons, pickups
//!
//! Variable step (Update): switch → movement/facing → fire.
//! Fixed step: pickups в SimulationSet::Contacts (после снарядов).

use bevy::prelude::*;

pub mod controller;
pub mod pickups;


pub use controller::{
    desired_facing, move_direction, planar_velocity, player_fire, player_movement_and_facing, player_weapon_switch,
};
pub use pickups::collect_pickups;

use crate::SimulationSet;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (player_weapon_switch, player_movement_and_facing, player_fire).chain(),
        )
        .add_systems(
            FixedUpdate,
            collect_pickups
                .in_set(SimulationSet::Contacts)
                .after(crate::combat::resolve_projectile_contacts),
        );
    }
}

//! Physics bridge module
//!
//! Ядро не симулирует физику: оно интегрирует свою velocity, а коллизии
//! получает от physics collaborator в виде `ContactBegan`.

pub mod contacts;
pub mod movement;

pub use contacts::{find_in_ancestors, forward_rapier_collisions, ContactBegan, RapierContactBridgePlugin};
pub use movement::{
    actor_body, frozen_body, integrate_velocity, projectile_body, sensor_body, Frozen, PhysicsBody,
};

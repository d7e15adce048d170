//! Combat systems (projectile flight + contact resolution)

pub mod projectile;

pub use projectile::*;

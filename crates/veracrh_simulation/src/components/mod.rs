//! ECS Components для игровых entity
//!
//! Организация по доменам:
//! - actor: базовые характеристики (Actor, Faction)
//! - player: игрок (Player, PlayerConfig, PlayerInput, Arsenal, ShieldCharge, FirePoint)
//! - pickup: подбираемые предметы (Pickup, PickupKind)
//!
//! Компоненты врага (EnemyState, EnemyConfig) живут в `ai`, снаряды: в `combat`.

pub mod actor;
pub mod pickup;
pub mod player;

#[cfg(test)]
mod player_tests;

pub use actor::*;
pub use pickup::*;
pub use player::*;

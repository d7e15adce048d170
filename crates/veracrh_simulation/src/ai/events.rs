//! AI Events: сигналы для внешних слоёв (анимация, VFX, звук)
//!
//! Ядро не ждёт реакции на эти события: урон и смерть применяются синхронно,
//! события только сообщают хосту что произошло.

use bevy::prelude::*;

/// Враг начал замах (animation trigger "Attack")
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct AttackBegun {
    pub enemy: Entity,
    pub target: Entity,
}

/// Враг умер (animation trigger "Death", drop VFX)
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct EnemyDied {
    pub entity: Entity,
    pub position: Vec3,
}

//! Базовые компоненты акторов: Actor, Faction

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Фракция: фильтр friendly fire для снарядов и контактов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect, Serialize, Deserialize)]
pub enum Faction {
    #[default]
    Player,
    Enemy,
}

/// Актор (игрок или враг)
///
/// Позиция и facing: это `Transform` (translation + rotation).
/// Живость: у врага: `EnemyState`, у игрока: `ProgressionState::lives_remaining`.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
#[require(Transform)]
pub struct Actor {
    pub faction: Faction,
}

impl Actor {
    pub fn player() -> Self {
        Self { faction: Faction::Player }
    }

    pub fn enemy() -> Self {
        Self { faction: Faction::Enemy }
    }
}

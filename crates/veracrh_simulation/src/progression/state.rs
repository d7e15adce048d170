//! Progression state + tuning (kills, lives, drop table, scenes)

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::combat::WeaponKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect, Serialize, Deserialize)]
pub enum EncounterPhase {
    #[default]
    Playing,
    LevelComplete,
    GameOver,
}

/// Kill count + lives. Меняется только через `register_kill` / `register_player_death`.
///
/// Переживает restart сцены: хост перезагружает мир, ресурс остаётся.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Reflect, Serialize, Deserialize)]
#[reflect(Resource)]
pub struct ProgressionState {
    pub kill_count: u32,
    pub lives_remaining: u32,
    pub phase: EncounterPhase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KillOutcome {
    /// Порог достигнут, drop rolls пропускаются
    LevelComplete,
    Counted,
    /// Encounter уже завершён
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathOutcome {
    GameOver,
    Restart,
    Ignored,
}

impl ProgressionState {
    pub fn new(lives: u32) -> Self {
        Self {
            kill_count: 0,
            lives_remaining: lives,
            phase: EncounterPhase::Playing,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == EncounterPhase::Playing
    }

    pub fn register_kill(&mut self, kills_to_next_level: u32) -> KillOutcome {
        if !self.is_playing() {
            return KillOutcome::Ignored;
        }

        self.kill_count += 1;

        if self.kill_count >= kills_to_next_level {
            self.phase = EncounterPhase::LevelComplete;
            return KillOutcome::LevelComplete;
        }

        KillOutcome::Counted
    }

    pub fn register_player_death(&mut self) -> DeathOutcome {
        if !self.is_playing() {
            return DeathOutcome::Ignored;
        }

        self.lives_remaining = self.lives_remaining.saturating_sub(1);

        if self.lives_remaining == 0 {
            self.phase = EncounterPhase::GameOver;
            return DeathOutcome::GameOver;
        }

        DeathOutcome::Restart
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeaponWeight {
    pub kind: WeaponKind,
    pub weight: f32,
}

/// Шансы дропа после убийства (независимые броски)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropTable {
    pub shield_chance: f32,
    pub weapon_chance: f32,
    pub weapon_weights: Vec<WeaponWeight>,
}

impl Default for DropTable {
    fn default() -> Self {
        Self {
            shield_chance: 0.15,
            weapon_chance: 0.2,
            weapon_weights: vec![
                WeaponWeight { kind: WeaponKind::Rifle, weight: 0.5 },
                WeaponWeight { kind: WeaponKind::Flamethrower, weight: 0.3 },
                WeaponWeight { kind: WeaponKind::Rpg, weight: 0.2 },
            ],
        }
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionConfig {
    pub starting_lives: u32,
    pub kills_to_next_level: u32,
    pub next_level_scene: String,
    pub game_over_scene: String,
    pub drops: DropTable,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            starting_lives: 3,
            kills_to_next_level: 20,
            next_level_scene: "Level2".to_string(),
            game_over_scene: "GameOver".to_string(),
            drops: DropTable::default(),
        }
    }
}

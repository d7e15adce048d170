//! Progression: kills, lives, drops, scene transitions
//!
//! `ProgressionState` хранит только счётчики: никаких ссылок на акторов.
//! Все изменения идут через `EncounterDirector` (SystemParam).

use bevy::prelude::*;

pub mod director;
pub mod drops;
pub mod state;

#[cfg(test)]
mod drops_tests;
#[cfg(test)]
mod state_tests;

pub use director::{EncounterDirector, EncounterEvent};
pub use drops::{pick_weighted, roll_drops, DropRoll};
pub use state::{
    DeathOutcome, DropTable, EncounterPhase, KillOutcome, ProgressionConfig, ProgressionState, WeaponWeight,
};

use crate::shared::Collaborators;

/// Progression Plugin
///
/// Ресурсы: `ProgressionConfig`, `ProgressionState` (lives из конфига),
/// `Collaborators`. Хост может вставить свои версии до плагина.
pub struct ProgressionPlugin;

impl Plugin for ProgressionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ProgressionConfig>()
            .init_resource::<Collaborators>()
            .add_event::<EncounterEvent>();

        if !app.world().contains_resource::<ProgressionState>() {
            let lives = app.world().resource::<ProgressionConfig>().starting_lives;
            app.insert_resource(ProgressionState::new(lives));
        }
    }
}

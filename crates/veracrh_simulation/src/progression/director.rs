//! EncounterDirector: единая точка для смерти врага и урона по игроку
//!
//! SystemParam, который любая система берёт целиком: ИИ (attack resolve,
//! contact damage) и снаряды зовут одни и те же методы, эффекты применяются
//! синхронно внутри вызывающей системы.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use super::drops::roll_drops;
use super::state::{DeathOutcome, KillOutcome, ProgressionConfig, ProgressionState};
use crate::ai::{EnemyConfig, EnemyDied, EnemyState};
use crate::combat::{resolve_player_damage, DamageOutcome, DespawnAfter, PlayerDamaged, WeaponKind, WeaponSet};
use crate::components::ShieldCharge;
use crate::logger;
use crate::physics::{frozen_body, PhysicsBody};
use crate::shared::{Collaborators, PrefabKind};
use crate::DeterministicRng;

/// Событие: encounter сменил фазу (или перезапускается)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncounterEvent {
    LevelComplete,
    GameOver,
    Restarted,
}

#[derive(SystemParam)]
pub struct EncounterDirector<'w, 's> {
    commands: Commands<'w, 's>,
    state: ResMut<'w, ProgressionState>,
    config: Res<'w, ProgressionConfig>,
    rng: ResMut<'w, DeterministicRng>,
    collaborators: ResMut<'w, Collaborators>,
    encounter_events: EventWriter<'w, EncounterEvent>,
    died_events: EventWriter<'w, EnemyDied>,
    damaged_events: EventWriter<'w, PlayerDamaged>,
    time: Res<'w, Time<Fixed>>,
}

impl EncounterDirector<'_, '_> {
    /// Shared simulation clock (seconds)
    pub fn now(&self) -> f32 {
        self.time.elapsed_secs()
    }

    pub fn state(&self) -> &ProgressionState {
        &self.state
    }

    /// Enemy → Dead. Идемпотентно: повторный вызов ничего не делает.
    ///
    /// Returns true if this call killed the enemy.
    pub fn kill_enemy(
        &mut self,
        entity: Entity,
        state: &mut EnemyState,
        config: &EnemyConfig,
        position: Vec3,
        body: &mut PhysicsBody,
    ) -> bool {
        if state.is_dead() {
            return false;
        }

        *state = EnemyState::Dead;
        body.stop();

        let despawn_time = self.now() + config.death_removal_delay;
        self.commands
            .entity(entity)
            .try_insert((frozen_body(), DespawnAfter { despawn_time }));

        logger::log_info(&format!("Enemy {:?} died at {:?}", entity, position));

        self.on_enemy_killed(position);
        self.collaborators.unregister_enemy();
        self.died_events.write(EnemyDied { entity, position });

        true
    }

    /// Kill bookkeeping: level transition или drop rolls.
    pub fn on_enemy_killed(&mut self, position: Vec3) {
        match self.state.register_kill(self.config.kills_to_next_level) {
            KillOutcome::LevelComplete => {
                logger::log_info(&format!(
                    "Kill target reached ({}), loading '{}'",
                    self.state.kill_count, self.config.next_level_scene
                ));
                self.collaborators.load_scene(&self.config.next_level_scene);
                self.encounter_events.write(EncounterEvent::LevelComplete);
            }
            KillOutcome::Counted => self.spawn_drops(position),
            KillOutcome::Ignored => {
                logger::log(&format!("Kill ignored, encounter phase is {:?}", self.state.phase));
            }
        }
    }

    fn spawn_drops(&mut self, position: Vec3) {
        let mut available = WeaponSet::default();
        for kind in WeaponKind::ALL {
            if self.collaborators.has_prefab(PrefabKind::WeaponPickup(kind)) {
                available.insert(kind);
            }
        }

        let roll = roll_drops(&mut self.rng.rng, &self.config.drops, available);

        if roll.shield {
            self.collaborators
                .spawn(PrefabKind::ShieldPickup, position, Quat::IDENTITY);
        }

        if let Some(kind) = roll.weapon {
            self.collaborators
                .spawn(PrefabKind::WeaponPickup(kind), position, Quat::IDENTITY);
        }
    }

    /// Попадание по игроку (ranged attack или contact).
    pub fn damage_player(&mut self, shield: &mut ShieldCharge) -> DamageOutcome {
        let outcome = resolve_player_damage(shield);

        match outcome {
            DamageOutcome::Absorbed => logger::log("Shield absorbed a hit"),
            DamageOutcome::LifeLost => self.on_player_killed(),
        }

        self.damaged_events.write(PlayerDamaged { outcome });
        outcome
    }

    pub fn on_player_killed(&mut self) {
        match self.state.register_player_death() {
            DeathOutcome::GameOver => {
                logger::log_info("No lives left, game over");
                self.collaborators.load_scene(&self.config.game_over_scene);
                self.encounter_events.write(EncounterEvent::GameOver);
            }
            DeathOutcome::Restart => {
                logger::log_info(&format!(
                    "Player died, {} lives left, restarting encounter",
                    self.state.lives_remaining
                ));
                self.collaborators.reload_current_scene();
                self.encounter_events.write(EncounterEvent::Restarted);
            }
            DeathOutcome::Ignored => {
                logger::log(&format!("Player death ignored, encounter phase is {:?}", self.state.phase));
            }
        }
    }
}

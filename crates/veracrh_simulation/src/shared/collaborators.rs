//! External collaborators (spawner, scene loader, wave tracker)
//!
//! Ядро не владеет сценой, префабами и счётчиком волны: хост передаёт
//! реализации через ресурс `Collaborators`. Отсутствующий collaborator
//! не ошибка: операция превращается в no-op с warning в логе.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use crate::combat::WeaponKind;
use crate::logger;

/// Что хост умеет спавнить по запросу ядра
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrefabKind {
    ShieldPickup,
    WeaponPickup(WeaponKind),
}

pub trait Spawner: Send + Sync {
    /// Есть ли у хоста префаб для этого вида (weapon drop renormalization)
    fn has_prefab(&self, prefab: PrefabKind) -> bool;

    fn spawn(&mut self, prefab: PrefabKind, position: Vec3, rotation: Quat);
}

pub trait SceneLoader: Send + Sync {
    fn load_scene(&mut self, name: &str);

    fn reload_current_scene(&mut self);
}

pub trait WaveTracker: Send + Sync {
    /// One fewer live enemy in the current wave.
    fn unregister_enemy(&mut self);
}

/// Injected collaborators (replaces global manager singletons)
#[derive(Resource, Default)]
pub struct Collaborators {
    pub spawner: Option<Box<dyn Spawner>>,
    pub scenes: Option<Box<dyn SceneLoader>>,
    pub waves: Option<Box<dyn WaveTracker>>,
}

impl Collaborators {
    pub fn with_spawner(mut self, spawner: impl Spawner + 'static) -> Self {
        self.spawner = Some(Box::new(spawner));
        self
    }

    pub fn with_scenes(mut self, scenes: impl SceneLoader + 'static) -> Self {
        self.scenes = Some(Box::new(scenes));
        self
    }

    pub fn with_waves(mut self, waves: impl WaveTracker + 'static) -> Self {
        self.waves = Some(Box::new(waves));
        self
    }

    pub fn has_prefab(&self, prefab: PrefabKind) -> bool {
        self.spawner
            .as_ref()
            .is_some_and(|spawner| spawner.has_prefab(prefab))
    }

    pub fn spawn(&mut self, prefab: PrefabKind, position: Vec3, rotation: Quat) {
        let Some(spawner) = self.spawner.as_mut() else {
            logger::log_warning(&format!("No spawner configured, dropping {:?}", prefab));
            return;
        };

        if !spawner.has_prefab(prefab) {
            logger::log_warning(&format!("No prefab configured for {:?}", prefab));
            return;
        }

        spawner.spawn(prefab, position, rotation);
    }

    pub fn load_scene(&mut self, name: &str) {
        match self.scenes.as_mut() {
            Some(scenes) => scenes.load_scene(name),
            None => logger::log_warning(&format!("No scene loader configured, cannot load '{}'", name)),
        }
    }

    pub fn reload_current_scene(&mut self) {
        match self.scenes.as_mut() {
            Some(scenes) => scenes.reload_current_scene(),
            None => logger::log_warning("No scene loader configured, cannot reload encounter"),
        }
    }

    pub fn unregister_enemy(&mut self) {
        match self.waves.as_mut() {
            Some(waves) => waves.unregister_enemy(),
            None => logger::log_warning("No wave tracker configured, enemy death not counted"),
        }
    }
}

/// Простой счётчик живых врагов волны.
///
/// Clone делит один и тот же счётчик: хост держит одну копию, ядро другую.
#[derive(Debug, Clone, Default)]
pub struct ActiveEnemyCounter {
    alive: Arc<AtomicU32>,
}

impl ActiveEnemyCounter {
    pub fn register_enemy(&self) {
        self.alive.fetch_add(1, Ordering::SeqCst);
    }

    pub fn alive(&self) -> u32 {
        self.alive.load(Ordering::SeqCst)
    }
}

impl WaveTracker for ActiveEnemyCounter {
    fn unregister_enemy(&mut self) {
        // saturating: лишний unregister не уводит счётчик в u32::MAX
        let _ = self
            .alive
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| Some(n.saturating_sub(1)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_enemy_counter_shared_and_saturating() {
        let host = ActiveEnemyCounter::default();
        let mut core = host.clone();

        host.register_enemy();
        host.register_enemy();
        core.unregister_enemy();
        assert_eq!(host.alive(), 1);

        core.unregister_enemy();
        core.unregister_enemy();
        assert_eq!(host.alive(), 0);
    }

    #[test]
    fn test_missing_collaborators_are_noops() {
        let mut collaborators = Collaborators::default();

        assert!(!collaborators.has_prefab(PrefabKind::ShieldPickup));
        collaborators.spawn(PrefabKind::ShieldPickup, Vec3::ZERO, Quat::IDENTITY);
        collaborators.load_scene("Level2");
        collaborators.reload_current_scene();
        collaborators.unregister_enemy();
    }
}

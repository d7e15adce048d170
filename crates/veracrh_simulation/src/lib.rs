//! VERACRH WARS Simulation Core
//!
//! ECS-симуляция боя на Bevy 0.16 (headless): враги-преследователи, снаряды,
//! оружие игрока, прогрессия по убийствам.
//!
//! Хост (движок, тесты, headless runner) отвечает за:
//! - input snapshot → `PlayerInput`
//! - коллизии → `ContactBegan` (или `RapierContactBridgePlugin`)
//! - префабы/сцены/волны → `Collaborators`
//! - тики → `driver::tick_variable` / `driver::tick_fixed`

use bevy::app::TaskPoolPlugin;
use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod ai;
pub mod combat;
pub mod components;
pub mod driver;
pub mod logger;
pub mod physics;
pub mod player;
pub mod progression;
pub mod shared;

// Re-export базовых типов для удобства
pub use ai::{AIPlugin, AttackBegun, Enemy, EnemyConfig, EnemyDied, EnemyState, EnemyTimers};
pub use combat::{
    CombatPlugin, DamageOutcome, PlayerDamaged, Projectile, ProjectileKind, WeaponKind, WeaponTable,
};
pub use components::*;
pub use driver::{hold_events_for_fixed_step, tick_fixed, tick_frame, tick_variable};
pub use logger::{init_logger, log, log_error, log_info, log_warning, set_log_level, set_logger, LogLevel, LogPrinter};
pub use physics::{ContactBegan, PhysicsBody, RapierContactBridgePlugin};
pub use player::PlayerPlugin;
pub use progression::{
    EncounterDirector, EncounterEvent, EncounterPhase, ProgressionConfig, ProgressionPlugin, ProgressionState,
};
pub use shared::{ActiveEnemyCounter, Collaborators, PrefabKind, SceneLoader, Spawner, WaveTracker};

/// Порядок фаз внутри FixedUpdate (цепочка, детерминированно)
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    /// Enemy FSM: resolve attacks → chase
    Ai,
    /// velocity → Transform
    Movement,
    /// Полёт + lifetime снарядов
    Projectiles,
    /// ContactBegan: contact damage → снаряды → pickups
    Contacts,
    /// Удаление трупов
    Cleanup,
}

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        // Хост может вставить свои ресурсы до плагина
        if !app.world().contains_resource::<Time<Fixed>>() {
            // Fixed timestep 60Hz для simulation tick
            app.insert_resource(Time::<Fixed>::from_hz(60.0));
        }
        if !app.world().contains_resource::<Time<Virtual>>() {
            app.insert_resource(Time::<Virtual>::default());
        }
        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(42));
        }

        app.add_event::<ContactBegan>()
            .configure_sets(
                FixedUpdate,
                (
                    SimulationSet::Ai,
                    SimulationSet::Movement,
                    SimulationSet::Projectiles,
                    SimulationSet::Contacts,
                    SimulationSet::Cleanup,
                )
                    .chain(),
            )
            .add_systems(
                FixedUpdate,
                physics::integrate_velocity.in_set(SimulationSet::Movement),
            )
            // Подсистемы
            .add_plugins((ProgressionPlugin, CombatPlugin, AIPlugin, PlayerPlugin));

        driver::hold_events_for_fixed_step(app);
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Без TimePlugin: время двигает только `driver`, поэтому прогон
/// не зависит от реальных часов. `SimulationPlugin` добавляет вызывающий.
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(TaskPoolPlugin::default())
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_hz(60.0))
        .insert_resource(Time::<Virtual>::default());

    app
}

/// Игрок: marker + rapier capsule. Остальное подтягивает `#[require]`.
pub fn player_bundle(position: Vec3) -> impl Bundle {
    (
        Player,
        Actor::player(),
        Transform::from_translation(position),
        physics::actor_body(0.5),
    )
}

pub fn enemy_bundle(position: Vec3, config: EnemyConfig) -> impl Bundle {
    (
        Enemy,
        Actor::enemy(),
        config,
        Transform::from_translation(position),
        physics::actor_body(0.4),
    )
}

pub fn spawn_player(commands: &mut Commands, position: Vec3) -> Entity {
    commands.spawn(player_bundle(position)).id()
}

pub fn spawn_enemy(commands: &mut Commands, position: Vec3, config: EnemyConfig) -> Entity {
    commands.spawn(enemy_bundle(position, config)).id()
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}

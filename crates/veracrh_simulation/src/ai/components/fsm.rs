//! Enemy FSM components (state, tuning, timers) + pure transition logic.
//!
//! Chasing → Attacking → Chasing (цикл), любое состояние → Dead (terminal).
//! Attacking не блокирует мир: вместо корутины храним `resume_at` и
//! проверяем его каждый fixed tick.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Допуск к attack_range при повторной проверке после паузы
pub const ATTACK_RANGE_TOLERANCE: f32 = 0.05;

/// Enemy marker. Spawn через `spawn_enemy` (добавляет Actor::enemy() + physics).
#[derive(Component, Debug, Clone, Copy, Default)]
#[require(EnemyState, EnemyConfig, EnemyTimers, crate::physics::PhysicsBody, Transform)]
pub struct Enemy;

/// Enemy FSM состояния
#[derive(Component, Debug, Clone, Copy, PartialEq, Default, Reflect)]
#[reflect(Component)]
pub enum EnemyState {
    /// Преследуем игрока (или стоим в stop_distance)
    #[default]
    Chasing,

    /// Замах: движение отключено до `resume_at` (sim time, секунды)
    Attacking { resume_at: f32 },

    /// Terminal. Никакого движения, урона по нам и от нас.
    Dead,
}

impl EnemyState {
    pub fn is_dead(&self) -> bool {
        matches!(self, EnemyState::Dead)
    }
}

/// Chase/attack tuning
#[derive(Component, Debug, Clone, Copy, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct EnemyConfig {
    pub move_speed: f32,
    /// Slerp factor per second
    pub rotate_speed: f32,
    pub stop_distance: f32,
    pub attack_range: f32,
    /// Длительность замаха (от начала атаки до проверки попадания)
    pub attack_pause: f32,
    /// Доп. пауза после замаха перед следующей атакой
    pub attack_cooldown: f32,
    /// Fallback-урон при касании (на случай если range check не сработал)
    pub contact_damage_enabled: bool,
    pub contact_damage_cooldown: f32,
    /// Через сколько секунд труп удаляется (время на death animation)
    pub death_removal_delay: f32,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            move_speed: 3.5,
            rotate_speed: 12.0,
            stop_distance: 0.9,
            attack_range: 1.2,
            attack_pause: 1.0,
            attack_cooldown: 0.4,
            contact_damage_enabled: true,
            contact_damage_cooldown: 0.6,
            death_removal_delay: 1.2,
        }
    }
}

/// Ready-at timestamps (sim time) for both damage paths
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct EnemyTimers {
    pub next_attack_ready: f32,
    pub next_contact_damage_ready: f32,
}

impl EnemyTimers {
    pub fn attack_ready(&self, now: f32) -> bool {
        now >= self.next_attack_ready
    }

    /// Start an attack at `now`. Returns the resume time (end of the pause).
    pub fn begin_attack(&mut self, now: f32, config: &EnemyConfig) -> f32 {
        self.next_attack_ready = now + config.attack_pause + config.attack_cooldown;
        now + config.attack_pause
    }

    pub fn contact_damage_ready(&self, now: f32) -> bool {
        now >= self.next_contact_damage_ready
    }

    pub fn start_contact_cooldown(&mut self, now: f32, cooldown: f32) {
        self.next_contact_damage_ready = now + cooldown;
    }
}

/// Решение Chasing-состояния на один fixed tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChaseAction {
    BeginAttack,
    Hold,
    /// Unit planar direction toward the target
    Advance { direction: Vec3 },
}

/// Chasing decision from the planar vector to the target.
///
/// Attack check идёт ДО stop check: враг вплотную к игроку всё равно атакует.
pub fn decide_chase(to_target: Vec3, config: &EnemyConfig, timers: &EnemyTimers, now: f32) -> ChaseAction {
    let distance = to_target.length();

    if distance <= config.attack_range && timers.attack_ready(now) {
        return ChaseAction::BeginAttack;
    }

    if distance <= config.stop_distance || distance <= f32::EPSILON {
        return ChaseAction::Hold;
    }

    ChaseAction::Advance {
        direction: to_target / distance,
    }
}

/// Re-validation after the attack pause
pub fn attack_connects(distance: f32, config: &EnemyConfig) -> bool {
    distance <= config.attack_range + ATTACK_RANGE_TOLERANCE
}

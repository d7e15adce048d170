//! Player components: marker, tuning, input snapshot, arsenal, shield

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::combat::{WeaponKind, WeaponSet};

/// Marker component для player-controlled entity
///
/// AI systems ищут цель через `With<Player>`. В сцене ожидается один игрок;
/// если его нет (ещё не заспавнен): зависимое поведение пропускает тик.
#[derive(Component, Debug, Clone, Copy, Default)]
#[require(
    crate::components::Actor,
    PlayerConfig,
    PlayerInput,
    Arsenal,
    ShieldCharge,
    FirePoint,
    crate::physics::PhysicsBody
)]
pub struct Player;

/// Movement tuning
#[derive(Component, Debug, Clone, Copy, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct PlayerConfig {
    pub move_speed: f32,
    /// Поворачиваться по направлению движения, когда не целимся
    pub rotate_to_move_direction: bool,
    pub rotation_speed: f32,
    pub sprint_multiplier: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            move_speed: 6.0,
            rotate_to_move_direction: true,
            rotation_speed: 18.0,
            sprint_multiplier: 1.5,
        }
    }
}

/// Cursor aim, уже прогнанный через raycast хоста (камера → курсор → мир)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AimInput {
    pub ray_origin: Vec3,
    pub ray_direction: Vec3,
    /// Точка попадания луча, `None` если луч ни во что не попал
    pub hit: Option<Vec3>,
}

impl AimInput {
    /// Дальняя точка вдоль луча, если raycast промахнулся
    pub const FALLBACK_DISTANCE: f32 = 1000.0;

    pub fn target_point(&self) -> Vec3 {
        self.hit.unwrap_or_else(|| {
            self.ray_origin + self.ray_direction.normalize_or_zero() * Self::FALLBACK_DISTANCE
        })
    }
}

/// Input snapshot, который хост пишет каждый кадр
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerInput {
    /// Stick/WASD: x → +X, y → forward (-Z)
    pub move_axis: Vec2,
    pub sprint: bool,
    pub fire: bool,
    /// `Some` пока зажата кнопка прицеливания
    pub aim: Option<AimInput>,
    /// Запрос смены оружия (сбрасывается после обработки)
    pub switch_to: Option<WeaponKind>,
}

/// Точка вылета снарядов, в локальных координатах игрока
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct FirePoint {
    pub offset: Vec3,
}

impl Default for FirePoint {
    fn default() -> Self {
        Self {
            offset: Vec3::new(0.0, 0.0, -0.8),
        }
    }
}

/// Current weapon, unlocked weapons and fire cooldown.
///
/// Инвариант: `current ∈ unlocked`: все изменения идут через методы.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Arsenal {
    current: WeaponKind,
    unlocked: WeaponSet,
    /// Seconds until the next shot is allowed (≤ 0 → ready)
    pub fire_cooldown: f32,
}

impl Default for Arsenal {
    fn default() -> Self {
        Self::new(WeaponKind::Rifle)
    }
}

impl Arsenal {
    pub fn new(starting: WeaponKind) -> Self {
        Self {
            current: starting,
            unlocked: WeaponSet::only(starting),
            fire_cooldown: 0.0,
        }
    }

    pub fn current(&self) -> WeaponKind {
        self.current
    }

    pub fn unlocked(&self) -> WeaponSet {
        self.unlocked
    }

    pub fn is_unlocked(&self, kind: WeaponKind) -> bool {
        self.unlocked.contains(kind)
    }

    /// Switch to an unlocked weapon. Сбрасывает cooldown → можно стрелять сразу.
    pub fn equip(&mut self, kind: WeaponKind) -> bool {
        if !self.unlocked.contains(kind) {
            return false;
        }

        self.current = kind;
        self.fire_cooldown = 0.0;
        true
    }

    /// Pickup path: unlock + equip.
    pub fn unlock_and_equip(&mut self, kind: WeaponKind) {
        self.unlocked.insert(kind);
        self.equip(kind);
    }

    pub fn tick(&mut self, delta: f32) {
        self.fire_cooldown -= delta;
    }

    pub fn ready_to_fire(&self) -> bool {
        self.fire_cooldown <= 0.0
    }

    pub fn start_cooldown(&mut self, fire_rate: f32) {
        self.fire_cooldown = if fire_rate > 0.0 { 1.0 / fire_rate } else { f32::INFINITY };
    }
}

/// Shield charges: каждый заряд целиком поглощает одно попадание
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct ShieldCharge {
    pub charges: u32,
    pub max_charges: u32,
}

impl Default for ShieldCharge {
    fn default() -> Self {
        Self {
            charges: 0,
            max_charges: 1,
        }
    }
}

impl ShieldCharge {
    pub fn is_active(&self) -> bool {
        self.charges > 0
    }

    /// Consume exactly one charge if any. Returns true if the hit was absorbed.
    pub fn try_absorb(&mut self) -> bool {
        if self.charges == 0 {
            return false;
        }

        self.charges -= 1;
        true
    }

    /// Returns false if already at the cap.
    pub fn add_charge(&mut self) -> bool {
        if self.charges >= self.max_charges {
            return false;
        }

        self.charges += 1;
        true
    }
}

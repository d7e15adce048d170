//! Damage resolution по игроку + отложенное удаление трупов
//!
//! Оба пути урона (ranged attack врага и contact damage) сходятся в
//! `resolve_player_damage`: щит поглощает попадание целиком, иначе минус жизнь.
//! Debounce между путями нет: два попадания за тик считаются дважды.

use bevy::prelude::*;

use crate::components::ShieldCharge;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Щит съел попадание, жизни не тронуты
    Absorbed,
    /// Жизнь потеряна (дальше решает progression: restart / game over)
    LifeLost,
}

/// Событие: игрок получил попадание (HUD, hit flash, звук щита)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerDamaged {
    pub outcome: DamageOutcome,
}

/// Shield first: ровно один заряд за попадание.
pub fn resolve_player_damage(shield: &mut ShieldCharge) -> DamageOutcome {
    if shield.try_absorb() {
        DamageOutcome::Absorbed
    } else {
        DamageOutcome::LifeLost
    }
}

/// Компонент: удалить entity после `despawn_time` (sim time, секунды)
///
/// Вешается на мёртвых врагов, чтобы хост успел проиграть death animation.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct DespawnAfter {
    pub despawn_time: f32,
}

/// Система: despawn по таймауту
pub fn despawn_after_timeout(
    mut commands: Commands,
    query: Query<(Entity, &DespawnAfter)>,
    time: Res<Time<Fixed>>,
) {
    let now = time.elapsed_secs();

    for (entity, despawn_after) in query.iter() {
        if now >= despawn_after.despawn_time {
            commands.entity(entity).try_despawn();
        }
    }
}

//! Drop rolls: shield + weighted weapon pick

use rand::Rng;

use super::state::{DropTable, WeaponWeight};
use crate::combat::{WeaponKind, WeaponSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DropRoll {
    pub shield: bool,
    pub weapon: Option<WeaponKind>,
}

/// Weighted pick среди доступных видов.
///
/// `unit_roll` ∈ [0, 1) масштабируется на сумму весов доступных видов,
/// так что недоступный вид не "съедает" вероятность.
pub fn pick_weighted(weights: &[WeaponWeight], available: WeaponSet, unit_roll: f32) -> Option<WeaponKind> {
    let candidates: Vec<&WeaponWeight> = weights
        .iter()
        .filter(|entry| entry.weight > 0.0 && available.contains(entry.kind))
        .collect();

    let total: f32 = candidates.iter().map(|entry| entry.weight).sum();
    if total <= 0.0 {
        return None;
    }

    let mut remaining = unit_roll * total;

    for entry in &candidates {
        if remaining < entry.weight {
            return Some(entry.kind);
        }
        remaining -= entry.weight;
    }

    // float остаток на границе → последний кандидат
    candidates.last().map(|entry| entry.kind)
}

/// Независимые броски: щит (shield_chance) и оружие (weapon_chance).
pub fn roll_drops(rng: &mut impl Rng, table: &DropTable, available: WeaponSet) -> DropRoll {
    let shield = rng.gen::<f32>() < table.shield_chance;

    let weapon = if rng.gen::<f32>() < table.weapon_chance {
        pick_weighted(&table.weapon_weights, available, rng.gen::<f32>())
    } else {
        None
    };

    DropRoll { shield, weapon }
}

//! Tests for drop rolls (weighted weapon pick convergence).

#[cfg(test)]
mod tests {
    use crate::combat::{WeaponKind, WeaponSet};
    use crate::progression::drops::*;
    use crate::progression::state::DropTable;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    const SAMPLES: usize = 100_000;

    fn all_weapons() -> WeaponSet {
        let mut set = WeaponSet::default();
        for kind in WeaponKind::ALL {
            set.insert(kind);
        }
        set
    }

    fn histogram(available: WeaponSet) -> [usize; 3] {
        let weights = DropTable::default().weapon_weights;
        let mut rng = ChaCha8Rng::seed_from_u64(1234);
        let mut counts = [0; 3];

        for _ in 0..SAMPLES {
            match pick_weighted(&weights, available, rng.gen::<f32>()) {
                Some(WeaponKind::Rifle) => counts[0] += 1,
                Some(WeaponKind::Flamethrower) => counts[1] += 1,
                Some(WeaponKind::Rpg) => counts[2] += 1,
                None => panic!("pick with available weapons returned None"),
            }
        }

        counts
    }

    #[test]
    fn test_weighted_pick_converges_to_weights() {
        let counts = histogram(all_weapons());
        let share = |n: usize| n as f32 / SAMPLES as f32;

        assert!((share(counts[0]) - 0.5).abs() < 0.01, "rifle share {}", share(counts[0]));
        assert!((share(counts[1]) - 0.3).abs() < 0.01, "flamethrower share {}", share(counts[1]));
        assert!((share(counts[2]) - 0.2).abs() < 0.01, "rpg share {}", share(counts[2]));
    }

    #[test]
    fn test_unavailable_weapon_is_renormalized_away() {
        let mut available = WeaponSet::only(WeaponKind::Rifle);
        available.insert(WeaponKind::Flamethrower);

        let counts = histogram(available);
        assert_eq!(counts[2], 0);

        // 0.5 : 0.3 → 5 : 3
        let ratio = counts[0] as f32 / counts[1] as f32;
        assert!((ratio - 5.0 / 3.0).abs() < 0.05, "ratio {}", ratio);
    }

    #[test]
    fn test_pick_boundaries() {
        let weights = DropTable::default().weapon_weights;

        assert_eq!(pick_weighted(&weights, all_weapons(), 0.0), Some(WeaponKind::Rifle));
        assert_eq!(pick_weighted(&weights, all_weapons(), 0.6), Some(WeaponKind::Flamethrower));
        assert_eq!(pick_weighted(&weights, all_weapons(), 0.9999), Some(WeaponKind::Rpg));
        assert_eq!(pick_weighted(&weights, WeaponSet::default(), 0.5), None);
    }

    #[test]
    fn test_drop_chances_are_respected() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);

        let never = DropTable {
            shield_chance: 0.0,
            weapon_chance: 0.0,
            ..DropTable::default()
        };
        let always = DropTable {
            shield_chance: 1.0,
            weapon_chance: 1.0,
            ..DropTable::default()
        };

        for _ in 0..100 {
            assert_eq!(roll_drops(&mut rng, &never, all_weapons()), DropRoll::default());

            let roll = roll_drops(&mut rng, &always, all_weapons());
            assert!(roll.shield);
            assert!(roll.weapon.is_some());
        }
    }
}

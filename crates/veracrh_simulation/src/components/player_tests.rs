//! Tests for player components.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;
    use crate::combat::WeaponKind;
    use crate::components::{AimInput, Arsenal, ShieldCharge};

    #[test]
    fn test_arsenal_starts_with_rifle_only() {
        let arsenal = Arsenal::default();
        assert_eq!(arsenal.current(), WeaponKind::Rifle);
        assert!(arsenal.is_unlocked(WeaponKind::Rifle));
        assert!(!arsenal.is_unlocked(WeaponKind::Flamethrower));
        assert!(!arsenal.is_unlocked(WeaponKind::Rpg));
        assert!(arsenal.ready_to_fire());
    }

    #[test]
    fn test_equip_locked_weapon_is_refused() {
        let mut arsenal = Arsenal::default();
        arsenal.start_cooldown(8.0);

        assert!(!arsenal.equip(WeaponKind::Rpg));
        assert_eq!(arsenal.current(), WeaponKind::Rifle);
        // cooldown не тронут
        assert_eq!(arsenal.fire_cooldown, 0.125);
    }

    #[test]
    fn test_switch_resets_cooldown() {
        let mut arsenal = Arsenal::default();
        arsenal.unlock_and_equip(WeaponKind::Rpg);
        arsenal.start_cooldown(1.0);
        assert!(!arsenal.ready_to_fire());

        assert!(arsenal.equip(WeaponKind::Rifle));
        assert!(arsenal.ready_to_fire());
        assert_eq!(arsenal.current(), WeaponKind::Rifle);
    }

    #[test]
    fn test_cooldown_ticks_down() {
        let mut arsenal = Arsenal::default();
        arsenal.start_cooldown(4.0); // 0.25s

        arsenal.tick(0.125);
        assert!(!arsenal.ready_to_fire());

        arsenal.tick(0.125);
        assert!(arsenal.ready_to_fire());
    }

    #[test]
    fn test_shield_absorbs_exactly_one_charge() {
        let mut shield = ShieldCharge { charges: 2, max_charges: 3 };

        assert!(shield.try_absorb());
        assert_eq!(shield.charges, 1);
        assert!(shield.try_absorb());
        assert_eq!(shield.charges, 0);
        assert!(!shield.try_absorb());
        assert_eq!(shield.charges, 0);
    }

    #[test]
    fn test_shield_charge_is_capped() {
        let mut shield = ShieldCharge::default();
        assert!(!shield.is_active());

        assert!(shield.add_charge());
        assert!(!shield.add_charge());
        assert_eq!(shield.charges, 1);
    }

    #[test]
    fn test_aim_fallback_point_far_along_ray() {
        let aim = AimInput {
            ray_origin: Vec3::new(0.0, 10.0, 0.0),
            ray_direction: Vec3::new(0.0, 0.0, -2.0),
            hit: None,
        };
        assert_eq!(aim.target_point(), Vec3::new(0.0, 10.0, -AimInput::FALLBACK_DISTANCE));

        let hit = AimInput { hit: Some(Vec3::X), ..aim };
        assert_eq!(hit.target_point(), Vec3::X);
    }
}

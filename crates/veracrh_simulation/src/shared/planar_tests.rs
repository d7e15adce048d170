//! Tests for planar helpers.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;
    use crate::shared::planar::*;

    #[test]
    fn test_flatten_drops_height() {
        assert_eq!(flatten(Vec3::new(1.0, 5.0, -2.0)), Vec3::new(1.0, 0.0, -2.0));
        assert_eq!(planar_distance(Vec3::new(0.0, 10.0, 0.0), Vec3::new(3.0, 0.0, 4.0)), 5.0);
    }

    #[test]
    fn test_look_rotation_points_forward_along_direction() {
        for dir in [Vec3::X, Vec3::NEG_X, Vec3::Z, Vec3::NEG_Z, Vec3::new(1.0, 0.0, 1.0)] {
            let rotation = look_rotation(dir).unwrap();
            let forward = rotation * Vec3::NEG_Z;
            assert!(
                forward.distance(dir.normalize()) < 1e-4,
                "dir {:?} → forward {:?}",
                dir,
                forward
            );
        }
    }

    #[test]
    fn test_look_rotation_ignores_vertical_and_zero() {
        assert!(look_rotation(Vec3::ZERO).is_none());
        assert!(look_rotation(Vec3::Y * 3.0).is_none());
    }

    #[test]
    fn test_turn_towards_is_bounded() {
        let target = look_rotation(Vec3::X).unwrap();

        // rate * dt = 0.5 → половина угла
        let half = turn_towards(Quat::IDENTITY, target, 12.0, 0.5 / 12.0);
        let angle = half.angle_between(Quat::IDENTITY);
        assert!((angle - std::f32::consts::FRAC_PI_4).abs() < 1e-3, "angle = {}", angle);

        // rate * dt >= 1 → сразу в target
        let full = turn_towards(Quat::IDENTITY, target, 12.0, 1.0);
        assert!(full.angle_between(target) < 1e-4);
    }
}

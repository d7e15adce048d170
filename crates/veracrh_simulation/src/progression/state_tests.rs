//! Tests for kill/death bookkeeping.

#[cfg(test)]
mod tests {
    use crate::progression::state::*;

    #[test]
    fn test_kill_target_completes_level() {
        let mut state = ProgressionState::new(3);

        for _ in 0..19 {
            assert_eq!(state.register_kill(20), KillOutcome::Counted);
        }
        assert_eq!(state.register_kill(20), KillOutcome::LevelComplete);
        assert_eq!(state.kill_count, 20);
        assert_eq!(state.phase, EncounterPhase::LevelComplete);

        // После завершения убийства больше не считаются
        assert_eq!(state.register_kill(20), KillOutcome::Ignored);
        assert_eq!(state.kill_count, 20);
    }

    #[test]
    fn test_lives_run_out_into_game_over() {
        let mut state = ProgressionState::new(3);

        assert_eq!(state.register_player_death(), DeathOutcome::Restart);
        assert_eq!(state.register_player_death(), DeathOutcome::Restart);
        assert_eq!(state.lives_remaining, 1);
        assert_eq!(state.register_player_death(), DeathOutcome::GameOver);
        assert_eq!(state.lives_remaining, 0);

        assert_eq!(state.register_player_death(), DeathOutcome::Ignored);
        assert_eq!(state.lives_remaining, 0);
    }

    #[test]
    fn test_game_over_stops_kill_counting() {
        let mut state = ProgressionState::new(1);

        assert_eq!(state.register_player_death(), DeathOutcome::GameOver);
        assert_eq!(state.register_kill(20), KillOutcome::Ignored);
        assert_eq!(state.kill_count, 0);
    }

    #[test]
    fn test_default_config() {
        let config = ProgressionConfig::default();

        assert_eq!(config.starting_lives, 3);
        assert_eq!(config.kills_to_next_level, 20);
        assert_eq!(config.next_level_scene, "Level2");
        assert_eq!(config.game_over_scene, "GameOver");

        let total: f32 = config.drops.weapon_weights.iter().map(|w| w.weight).sum();
        assert!((total - 1.0).abs() < 1e-6);
    }
}

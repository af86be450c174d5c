//! Fixed timestep simulation tick
//!
//! Advances the run by one step: scroll, collision, scoring, difficulty and
//! world top-up.

use super::state::{GamePhase, GameState};

/// Input gathered since the previous tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Latest pointer position, already mapped to world x
    pub pointer_x: Option<f64>,
    /// Restart requested (only acted on after game over)
    pub restart: bool,
}

/// Apply input, then advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    if input.restart && state.phase == GamePhase::GameOver {
        state.restart();
    }
    if let Some(x) = input.pointer_x {
        state.set_player_x(x);
    }
    update(state);
}

/// Advance one tick without input. No-op after game over.
pub fn update(state: &mut GameState) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    state.time_ticks += 1;

    let step = state.tuning.scroll_step;
    state.player.y -= step;
    state.viewport.scroll(-step);

    if !state.player_in_tunnel() {
        state.lose();
        return;
    }

    state.points += 1;
    if state.points % state.tuning.difficulty_interval == 0 {
        increase_difficulty(state);
    }

    state.top_up_world();
    if state.tuning.evict_offscreen {
        state.evict_offscreen();
    }
}

/// Narrow the tunnel by the configured factor, never below the floor width
pub fn increase_difficulty(state: &mut GameState) {
    let current = state.generator.width();
    let next = (current * state.tuning.difficulty_factor).max(state.tuning.min_width);
    if next != current {
        state.generator.set_width(next);
        log::debug!(
            "Difficulty up at {} points: width {:.3} -> {:.3}",
            state.points,
            current,
            next
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vector2;
    use crate::sim::Polygon;
    use crate::tuning::Tuning;
    use proptest::prelude::*;

    /// Straight, centered tunnel: a player at x=0 never touches a wall
    fn straight_tuning() -> Tuning {
        Tuning {
            displacement: 0.0,
            ..Default::default()
        }
    }

    fn segment_width(segment: &Polygon) -> f64 {
        segment.points()[3].x - segment.points()[0].x
    }

    #[test]
    fn test_player_in_chute_survives() {
        let mut state = GameState::new(12345, Tuning::default());
        assert_eq!(state.player, Vector2::ZERO);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.points, 1);
        assert!((state.player.y + 0.2).abs() < 1e-12);
        assert!((state.viewport.position.y + 5.2).abs() < 1e-12);
    }

    #[test]
    fn test_dragging_into_wall_ends_run() {
        let mut state = GameState::new(12345, Tuning::default());
        let input = TickInput {
            pointer_x: Some(10.0),
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.points, 0);
    }

    #[test]
    fn test_game_over_freezes_state() {
        let mut state = GameState::new(1, Tuning::default());
        tick(
            &mut state,
            &TickInput {
                pointer_x: Some(10.0),
                ..Default::default()
            },
        );
        let player = state.player;
        let viewport = state.viewport;
        let segments = state.world.len();
        for _ in 0..5 {
            tick(
                &mut state,
                &TickInput {
                    pointer_x: Some(0.0),
                    ..Default::default()
                },
            );
        }
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.player, player);
        assert_eq!(state.viewport, viewport);
        assert_eq!(state.world.len(), segments);
    }

    #[test]
    fn test_difficulty_narrows_new_segments() {
        let tuning = Tuning {
            difficulty_interval: 20,
            ..straight_tuning()
        };
        let mut state = GameState::new(7, tuning);
        let before = state.generator.width();
        let newest_before = segment_width(state.world.last().unwrap());
        assert_eq!(newest_before, before);

        for _ in 0..20 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.points, 20);
        let after = state.generator.width();
        assert!((after - before * 0.9).abs() < 1e-12);

        let emitted = state.generator.segments_emitted();
        while state.generator.segments_emitted() == emitted {
            tick(&mut state, &TickInput::default());
            assert_eq!(state.phase, GamePhase::Running);
        }
        let newest = segment_width(state.world.last().unwrap());
        assert!(newest < before);
    }

    #[test]
    fn test_difficulty_has_a_floor() {
        let mut state = GameState::new(7, Tuning::default());
        for _ in 0..200 {
            increase_difficulty(&mut state);
        }
        assert_eq!(state.generator.width(), state.tuning.min_width);
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut state = GameState::new(12345, Tuning::default());
        for _ in 0..3 {
            tick(&mut state, &TickInput::default());
        }
        tick(
            &mut state,
            &TickInput {
                pointer_x: Some(10.0),
                ..Default::default()
            },
        );
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.best_points, 3);
        let old_world = state.world.clone();

        tick(
            &mut state,
            &TickInput {
                restart: true,
                ..Default::default()
            },
        );
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.points, 1); // restart tick is also simulated
        assert_eq!(state.run, 1);
        assert_eq!(state.player.x, 0.0);
        assert_eq!(state.world[0], old_world[0]); // same start chute
        assert_ne!(state.world, old_world); // fresh tunnel beyond it
    }

    #[test]
    fn test_restart_ignored_while_running() {
        let mut state = GameState::new(5, Tuning::default());
        tick(
            &mut state,
            &TickInput {
                restart: true,
                ..Default::default()
            },
        );
        assert_eq!(state.run, 0);
        assert_eq!(state.points, 1);
    }

    #[test]
    fn test_world_stays_bounded_on_long_run() {
        let mut state = GameState::new(9, straight_tuning());
        for _ in 0..5000 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.phase, GamePhase::Running);
        assert!(state.world.len() < 20, "world grew to {}", state.world.len());
        assert!(state.evicted > 0);
    }

    proptest! {
        #[test]
        fn straight_tunnel_never_loses(seed in 0u64..200, ticks in 1usize..600) {
            let mut state = GameState::new(seed, straight_tuning());
            for _ in 0..ticks {
                tick(&mut state, &TickInput::default());
            }
            prop_assert_eq!(state.phase, GamePhase::Running);
            prop_assert_eq!(state.points, ticks as u64);
        }

        #[test]
        fn lookahead_always_covers_viewport(seed in 0u64..200, ticks in 1usize..300) {
            let mut state = GameState::new(seed, straight_tuning());
            for _ in 0..ticks {
                tick(&mut state, &TickInput::default());
                let newest = state.world.last().unwrap();
                prop_assert!(newest.min_y() < state.viewport.top());
            }
        }
    }
}

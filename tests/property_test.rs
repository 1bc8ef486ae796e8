//! Property-based tests for the playback controller
//!
//! Uses proptest to check the navigation and clamping invariants over
//! random catalogs and inputs.

mod common;

use common::{controller, current_url, track};
use proptest::prelude::*;

fn names(len: usize) -> Vec<String> {
    (0..len).map(|i| format!("t{i}")).collect()
}

fn player_for(len: usize) -> robo_player::playback::PlaybackController<common::RecordingSink> {
    let names = names(len);
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    controller(&refs)
}

proptest! {
    /// Property: N calls to next() come back to the starting track
    #[test]
    fn next_is_cyclic(len in 1usize..30, start_seed in any::<usize>()) {
        let start = start_seed % len;
        let mut player = player_for(len);
        let first = track(&format!("t{start}"));
        player.select_or_toggle(&first);

        for _ in 0..len {
            player.next().unwrap();
        }
        prop_assert_eq!(current_url(&player), Some(first.source_url));
        prop_assert!(player.state().is_playing);
    }

    /// Property: N calls to previous() come back to the starting track
    #[test]
    fn previous_is_cyclic(len in 1usize..30, start_seed in any::<usize>()) {
        let start = start_seed % len;
        let mut player = player_for(len);
        let first = track(&format!("t{start}"));
        player.select_or_toggle(&first);

        for _ in 0..len {
            player.previous().unwrap();
        }
        prop_assert_eq!(current_url(&player), Some(first.source_url));
    }

    /// Property: next() and previous() undo each other
    #[test]
    fn next_then_previous_round_trips(
        len in 2usize..30,
        start_seed in any::<usize>(),
        forward_first in any::<bool>(),
    ) {
        let start = start_seed % len;
        let mut player = player_for(len);
        let first = track(&format!("t{start}"));
        player.select_or_toggle(&first);

        if forward_first {
            player.next().unwrap();
            player.previous().unwrap();
        } else {
            player.previous().unwrap();
            player.next().unwrap();
        }
        prop_assert_eq!(current_url(&player), Some(first.source_url));
    }

    /// Property: toggling the current track twice restores the play state
    #[test]
    fn double_toggle_is_identity(len in 1usize..10, pause_first in any::<bool>()) {
        let mut player = player_for(len);
        let first = track("t0");
        player.select_or_toggle(&first);
        if pause_first {
            player.select_or_toggle(&first);
        }
        let before = player.snapshot();

        player.select_or_toggle(&first);
        prop_assert_eq!(player.state().is_playing, !before.is_playing);
        player.select_or_toggle(&first);
        prop_assert_eq!(player.snapshot(), before);
    }

    /// Property: seek always lands inside [0, duration]
    #[test]
    fn seek_is_clamped(duration in 1.0f64..3600.0, target in -1000.0f64..5000.0) {
        let mut player = player_for(1);
        player.select_or_toggle(&track("t0"));
        player.on_metadata_loaded(duration);

        player.seek(target);
        prop_assert_eq!(player.state().current_time, target.clamp(0.0, duration));
    }

    /// Property: volume always lands inside [0, 1] and survives a switch
    #[test]
    fn volume_is_clamped_and_sticky(level in -5.0f64..5.0) {
        let mut player = player_for(2);
        player.select_or_toggle(&track("t0"));
        player.set_volume(level);
        let expected = level.clamp(0.0, 1.0);
        prop_assert_eq!(player.state().volume, expected);

        player.select_or_toggle(&track("t1"));
        prop_assert_eq!(player.state().volume, expected);
        prop_assert_eq!(player.sink().last_volume(), Some(expected));
    }
}

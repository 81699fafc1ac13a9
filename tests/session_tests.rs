// Integration tests for the session controller

use std::time::{Duration, Instant};

use sortty::algorithms::batch::{is_sorted, sort_counted};
use sortty::algorithms::AlgorithmKind;
use sortty::session::errors::SessionError;
use sortty::session::{Playback, Session};

fn run(values: Vec<i32>, kind: AlgorithmKind) -> Session {
    let mut session = Session::new(values);
    session.select_algorithm(kind);
    session.run_to_completion();
    session
}

#[test]
fn test_bubble_sort_four_elements() {
    let session = run(vec![5, 3, 8, 1], AlgorithmKind::Bubble);
    let snapshot = session.snapshot();

    assert_eq!(snapshot.values, vec![1, 3, 5, 8]);
    assert_eq!(snapshot.comparisons, 6);
    // One swap per inversion: (5,3) (5,1) (3,1) (8,1)
    assert_eq!(snapshot.swaps, 4);
    assert!(snapshot.terminal);
    assert_eq!(session.playback(), Playback::Finished);
}

#[test]
fn test_single_element_is_immediately_terminal() {
    for kind in AlgorithmKind::ALL {
        let mut session = Session::new(vec![1]);
        session.select_algorithm(kind);

        let snapshot = session.snapshot();
        assert!(snapshot.terminal, "{} should be terminal", kind);
        assert_eq!(snapshot.comparisons, 0);
        assert_eq!(snapshot.swaps, 0);
        assert_eq!(snapshot.settled_up_to, Some(0));
        assert_eq!(session.playback(), Playback::Finished);
    }
}

#[test]
fn test_empty_array_is_immediately_terminal() {
    for kind in AlgorithmKind::ALL {
        let mut session = Session::new(Vec::new());
        session.select_algorithm(kind);
        assert!(session.is_terminal(), "{} should be terminal", kind);
        assert_eq!(session.run_to_completion(), 0);
    }
}

#[test]
fn test_merge_sort_keeps_duplicates() {
    let session = run(vec![4, 2, 2, 3], AlgorithmKind::Merge);
    assert_eq!(session.values(), &[2, 2, 3, 4]);
    assert!(session.is_terminal());
}

#[test]
fn test_quick_sort_descending_input() {
    let session = run(vec![9, 8, 7, 6, 5], AlgorithmKind::Quick);
    assert_eq!(session.values(), &[5, 6, 7, 8, 9]);
    assert!(session.is_terminal());
    assert_eq!(session.pending_tasks(), 0);
    assert!(session.max_pending_tasks() > 0);
}

#[test]
fn test_unknown_algorithm_leaves_session_untouched() {
    let mut session = Session::new(vec![3, 1, 2]);
    session.select_algorithm(AlgorithmKind::Insertion);
    session.step();
    let before = session.snapshot();

    let result = session.select_algorithm_by_name("bogosort");
    assert_eq!(
        result,
        Err(SessionError::UnknownAlgorithmKind {
            name: "bogosort".to_string()
        })
    );

    let after = session.snapshot();
    assert_eq!(after.values, before.values);
    assert_eq!(after.kind, Some(AlgorithmKind::Insertion));
    assert_eq!(after.steps, before.steps);
    assert_eq!(after.comparisons, before.comparisons);
    assert_eq!(session.playback(), Playback::Paused);
}

#[test]
fn test_select_by_name_accepts_titles() {
    let mut session = Session::new(vec![2, 1]);
    assert_eq!(
        session.select_algorithm_by_name("Merge Sort"),
        Ok(AlgorithmKind::Merge)
    );
    assert_eq!(session.kind(), Some(AlgorithmKind::Merge));
}

#[test]
fn test_stepping_after_terminal_is_idempotent() {
    for kind in AlgorithmKind::ALL {
        let mut session = run(vec![6, 2, 9, 4, 4, 1], kind);
        let first = session.snapshot();

        for _ in 0..5 {
            assert!(session.step().is_done());
        }
        let second = session.snapshot();
        assert_eq!(first, second, "{} changed after completion", kind);
    }
}

#[test]
fn test_settled_boundary_never_shrinks() {
    for kind in AlgorithmKind::ALL {
        let mut session = Session::new(vec![7, 3, 9, 1, 5, 8, 2, 6, 4]);
        session.select_algorithm(kind);

        let mut previous = session.markers().settled_up_to;
        while !session.step().is_done() {
            let current = session.markers().settled_up_to;
            assert!(current >= previous, "{} settled boundary shrank", kind);
            previous = current;
        }
        assert_eq!(session.markers().settled_up_to, Some(8));
    }
}

#[test]
fn test_stepped_counts_match_batch_counts() {
    let values = vec![12, 5, 7, 5, 19, 3, 0, 8, 8, 14, 1];
    for kind in AlgorithmKind::ALL {
        let session = run(values.clone(), kind);
        let (sorted, counters) = sort_counted(kind, &values);
        let snapshot = session.snapshot();

        assert_eq!(snapshot.values, sorted, "{} result differs", kind);
        assert_eq!(snapshot.comparisons, counters.comparisons, "{} comparisons", kind);
        assert_eq!(snapshot.swaps, counters.swaps, "{} swaps", kind);
        assert!(is_sorted(&snapshot.values));
    }
}

#[test]
fn test_restart_replays_from_selected_array() {
    let mut session = run(vec![4, 1, 3, 2], AlgorithmKind::Selection);
    let finished = session.snapshot();

    assert_eq!(session.restart(), Ok(AlgorithmKind::Selection));
    assert_eq!(session.values(), &[4, 1, 3, 2]);
    assert_eq!(session.steps(), 0);
    assert_eq!(session.playback(), Playback::Playing);

    session.run_to_completion();
    let replayed = session.snapshot();
    assert_eq!(replayed.values, finished.values);
    assert_eq!(replayed.comparisons, finished.comparisons);
    assert_eq!(replayed.swaps, finished.swaps);
}

#[test]
fn test_selecting_again_sorts_current_contents() {
    let mut session = run(vec![3, 1, 2], AlgorithmKind::Bubble);
    session.select_algorithm(AlgorithmKind::Quick);

    assert_eq!(session.values(), &[1, 2, 3]);
    assert_eq!(session.snapshot().comparisons, 0);
    session.run_to_completion();
    assert_eq!(session.values(), &[1, 2, 3]);
}

#[test]
fn test_tick_waits_for_interval() {
    let mut session = Session::new(vec![5, 4, 3, 2, 1]);
    session.set_tick_interval(100).expect("interval in range");
    session.select_algorithm(AlgorithmKind::Bubble);

    let start = Instant::now();
    let mut ran = 0;
    for ms in [300, 350, 410, 500] {
        if session.tick(start + Duration::from_millis(ms)).is_some() {
            ran += 1;
        }
    }
    // 300 runs, 350 is too soon, 410 runs, 500 is too soon
    assert_eq!(ran, 2);
    assert_eq!(session.steps(), 2);
}

#[test]
fn test_paused_session_ignores_ticks() {
    let mut session = Session::new(vec![2, 1]);
    session.select_algorithm(AlgorithmKind::Bubble);
    session.pause();

    let later = Instant::now() + Duration::from_secs(5);
    assert_eq!(session.tick(later), None);
    assert_eq!(session.steps(), 0);

    session.toggle_pause();
    assert_eq!(session.playback(), Playback::Playing);
}

#[test]
fn test_tick_interval_bounds() {
    let mut session = Session::new(vec![1, 2]);
    assert!(session.set_tick_interval(10).is_ok());
    assert!(session.set_tick_interval(500).is_ok());
    assert_eq!(
        session.set_tick_interval(5),
        Err(SessionError::InvalidTickInterval {
            ms: 5,
            min: 10,
            max: 500
        })
    );
    assert!(session.set_tick_interval(501).is_err());
    assert_eq!(session.tick_interval(), Duration::from_millis(500));
}

#[test]
fn test_loading_array_abandons_sort() {
    let mut session = Session::new(vec![3, 2, 1]);
    session.select_algorithm(AlgorithmKind::Merge);
    session.step();

    session.load_initial_array(vec![9, 8]);
    assert_eq!(session.kind(), None);
    assert_eq!(session.playback(), Playback::Idle);
    assert_eq!(session.values(), &[9, 8]);
    assert_eq!(session.restart(), Err(SessionError::NoActiveSession));
}

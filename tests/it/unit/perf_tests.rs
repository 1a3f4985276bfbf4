//! Unit tests for perf module.

use pagecanvas::perf::{HandlerStats, ScopedTimer, measure};

#[test]
fn test_scoped_timer_creation() {
    // High threshold, so dropping it logs nothing
    let timer = ScopedTimer::new("test_op", 1000.0);
    assert!(timer.elapsed_ms() >= 0.0);
}

#[test]
fn test_handler_stats_accumulate() {
    let mut stats = HandlerStats::new();
    for ms in [1.0, 2.0, 3.0] {
        stats.record("pointer_move", ms);
    }
    let moves = stats.get("pointer_move").unwrap();
    assert_eq!(moves.count(), 3);
    assert_eq!(moves.average(), 2.0);
    assert_eq!(moves.max_ms(), 3.0);
    assert!(stats.get("pointer_up").is_none());

    stats.reset();
    assert!(stats.get("pointer_move").is_none());
}

#[test]
fn test_measure() {
    let (result, elapsed) = measure(|| (0..100).sum::<u32>());
    assert_eq!(result, 4950);
    assert!(elapsed >= 0.0);
}

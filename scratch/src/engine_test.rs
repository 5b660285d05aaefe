#![allow(clippy::float_cmp)]

use super::*;
use crate::consts::SAMPLE_EVERY_STROKES;

// =============================================================
// Helpers
// =============================================================

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn scratching_core() -> ScratchCore {
    let mut core = ScratchCore::new(300.0);
    core.pointer_down(pt(0.0, 0.0));
    core
}

fn count_samples(actions: &[Action]) -> usize {
    actions.iter().filter(|a| matches!(a, Action::SampleCoverage)).count()
}

// =============================================================
// Strokes
// =============================================================

#[test]
fn move_without_press_does_nothing() {
    let mut core = ScratchCore::new(300.0);
    assert!(core.pointer_move(pt(10.0, 10.0)).is_empty());
}

#[test]
fn move_while_pressed_erases_with_width_scaled_brush() {
    let mut core = scratching_core();
    let actions = core.pointer_move(pt(10.0, 0.0));
    assert_eq!(
        actions[0],
        Action::Erase(EraseSegment { from: Some(pt(0.0, 0.0)), to: pt(10.0, 0.0), radius: 20.0 })
    );
}

#[test]
fn coverage_sampled_every_nth_stroke() {
    let mut core = scratching_core();
    let mut samples = 0;
    for i in 1..=(SAMPLE_EVERY_STROKES * 3) {
        samples += count_samples(&core.pointer_move(pt(f64::from(i), 0.0)));
    }
    assert_eq!(samples, 3);
}

#[test]
fn release_always_samples() {
    let mut core = scratching_core();
    core.pointer_move(pt(5.0, 5.0));
    assert_eq!(core.pointer_up(), vec![Action::SampleCoverage]);
}

#[test]
fn release_without_stroke_is_silent() {
    let mut core = ScratchCore::new(300.0);
    assert!(core.pointer_up().is_empty());
}

// =============================================================
// Reveal
// =============================================================

#[test]
fn observe_below_threshold_reports_progress_only() {
    let mut core = ScratchCore::new(300.0);
    assert_eq!(core.observe_coverage(0.3), vec![Action::Progress(Some(30))]);
    assert!(!core.revealed());
}

#[test]
fn observe_crossing_threshold_reveals_once() {
    let mut core = ScratchCore::new(300.0);
    assert_eq!(core.observe_coverage(0.5), vec![Action::Progress(None), Action::Revealed]);
    assert_eq!(core.observe_coverage(0.9), vec![Action::Progress(None)]);
    assert!(core.revealed());
}

//! Engine behavior: scenarios, tie-breaks, degenerate inputs, event stream,
//! cancellation, and the strip-work bound.

use super::*;
use crate::brute_force::brute_force;
use crate::geometry::{Pair, SubproblemBounds};
use crate::port::{Event, Recorder, Step};
use crate::rand::{draw_points, ClusterCfg, Layout, ReplayToken, UniformCfg};

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn assert_matches_brute(points: &[Point]) {
    let sol = closest_pair(points).expect("solution");
    let reference = brute_force(points).expect("reference pair");
    assert!(
        (sol.distance - reference.distance()).abs() <= 1e-12 * reference.distance().max(1.0),
        "engine {} vs brute {} on {} points",
        sol.distance,
        reference.distance(),
        points.len()
    );
    assert!((sol.pair.distance() - sol.distance).abs() < 1e-12);
}

#[test]
fn scenario_square_root_two() {
    let pts = [p(0.0, 0.0), p(3.0, 4.0), p(1.0, 1.0), p(100.0, 100.0)];
    let sol = closest_pair(&pts).unwrap();
    assert!(sol.pair.same_points(&Pair::new(p(0.0, 0.0), p(1.0, 1.0))));
    assert!((sol.distance - std::f64::consts::SQRT_2).abs() < 1e-12);
}

#[test]
fn scenario_collinear_three() {
    let pts = [p(0.0, 0.0), p(5.0, 0.0), p(10.0, 0.0)];
    let sol = closest_pair(&pts).unwrap();
    assert_eq!(sol.pair, Pair::new(p(0.0, 0.0), p(5.0, 0.0)));
    assert!((sol.distance - 5.0).abs() < 1e-12);
    // Base case only.
    assert_eq!(sol.stats.frames, 1);
    assert_eq!(sol.stats.leaves, 1);
    assert_eq!(sol.stats.strip_comparisons, 0);
}

#[test]
fn two_points_are_returned_as_is() {
    let pts = [p(7.0, -1.0), p(2.0, 3.0)];
    let sol = closest_pair(&pts).unwrap();
    // Leaf scans in x order.
    assert_eq!(sol.pair, Pair::new(p(2.0, 3.0), p(7.0, -1.0)));
}

#[test]
fn fewer_than_two_points_is_an_error() {
    assert_eq!(
        closest_pair(&[]).unwrap_err(),
        ClosestPairError::InsufficientInput { len: 0 }
    );
    assert_eq!(
        closest_pair(&[p(1.0, 1.0)]).unwrap_err(),
        ClosestPairError::InsufficientInput { len: 1 }
    );
}

#[test]
fn left_half_wins_ties() {
    let pts = [p(10.0, 0.0), p(0.0, 0.0), p(11.0, 0.0), p(1.0, 0.0)];
    for _ in 0..3 {
        let sol = closest_pair(&pts).unwrap();
        assert_eq!(sol.pair, Pair::new(p(0.0, 0.0), p(1.0, 0.0)));
    }
}

#[test]
fn incumbent_wins_ties_against_strip() {
    // Halves {(0,0),(0,2)} and {(1,0),(1,2)} both give 2. The strip finds
    // (0,0)-(1,0) at 1; the later (0,2)-(1,2) ties and is not taken.
    let pts = [p(0.0, 0.0), p(0.0, 2.0), p(1.0, 0.0), p(1.0, 2.0)];
    let sol = closest_pair(&pts).unwrap();
    assert_eq!(sol.pair, Pair::new(p(0.0, 0.0), p(1.0, 0.0)));
    assert!((sol.distance - 1.0).abs() < 1e-12);
}

#[test]
fn duplicates_give_zero_distance() {
    let pts = [p(3.0, 3.0), p(0.0, 0.0), p(9.0, 1.0), p(3.0, 3.0), p(5.0, 5.0)];
    let sol = closest_pair(&pts).unwrap();
    assert_eq!(sol.distance, 0.0);
    assert_eq!(sol.pair, Pair::new(p(3.0, 3.0), p(3.0, 3.0)));
}

#[test]
fn repeated_x_values_stay_in_their_half() {
    // All x equal: an `x < mid_x` split of the y-view would leave the left
    // frame with no y-points. Frame consistency is debug-asserted per frame.
    let pts = [
        p(0.0, 0.0),
        p(0.0, 5.0),
        p(0.0, 5.1),
        p(0.0, 10.0),
        p(0.0, 20.0),
        p(0.0, 30.0),
    ];
    let sol = closest_pair(&pts).unwrap();
    assert!((sol.distance - 0.1).abs() < 1e-9);
}

#[test]
fn matches_brute_force_on_random_layouts() {
    let layouts = [
        Layout::Uniform(UniformCfg::default()),
        Layout::Clustered(ClusterCfg::default()),
        Layout::Collinear { vertical: true },
        Layout::Collinear { vertical: false },
        Layout::Grid { cells: 6 },
    ];
    let mut tok = ReplayToken::new(2024);
    for layout in layouts {
        for n in [2usize, 3, 4, 5, 7, 16, 33, 64, 127, 200] {
            tok = tok.next();
            assert_matches_brute(&draw_points(layout, n, tok));
        }
    }
}

#[test]
fn larger_leaf_size_agrees() {
    let pts = draw_points(Layout::Uniform(UniformCfg::default()), 150, ReplayToken::new(9));
    let base = closest_pair(&pts).unwrap();
    let wide = closest_pair_with(&pts, EngineCfg { leaf_size: 8 }, &mut NoopPort).unwrap();
    assert!((base.distance - wide.distance).abs() < 1e-12);
    assert!(wide.stats.frames < base.stats.frames);
    // Leaf sizes below 3 are raised to 3.
    let tiny = closest_pair_with(&pts, EngineCfg { leaf_size: 0 }, &mut NoopPort).unwrap();
    assert_eq!(tiny.stats, base.stats);
}

#[test]
fn nan_points_are_never_selected() {
    let pts = [
        p(f64::NAN, 0.0),
        p(0.0, 0.0),
        p(4.0, 0.0),
        p(9.0, 9.0),
        p(0.0, f64::NAN),
    ];
    let sol = closest_pair(&pts).unwrap();
    assert_eq!(sol.pair, Pair::new(p(0.0, 0.0), p(4.0, 0.0)));
    let all_nan = [p(f64::NAN, 1.0), p(f64::NAN, 2.0)];
    assert_eq!(
        closest_pair(&all_nan).unwrap_err(),
        ClosestPairError::NoComparablePair
    );
}

#[test]
fn event_stream_for_small_scenario() {
    let pts = [p(0.0, 0.0), p(3.0, 4.0), p(1.0, 1.0), p(100.0, 100.0)];
    let mut rec = Recorder::new();
    closest_pair_with(&pts, EngineCfg::default(), &mut rec).unwrap();
    let left = Pair::new(p(0.0, 0.0), p(1.0, 1.0));
    let right = Pair::new(p(3.0, 4.0), p(100.0, 100.0));
    let d = std::f64::consts::SQRT_2;
    let expected = vec![
        Event::SubproblemOpened {
            bounds: SubproblemBounds::new(0.0, 100.0),
        },
        Event::DividerDrawn { x: 3.0 },
        Event::SubproblemOpened {
            bounds: SubproblemBounds::new(0.0, 3.0),
        },
        Event::PairFound { pair: left },
        Event::SubproblemClosed,
        Event::SubproblemOpened {
            bounds: SubproblemBounds::new(3.0, 100.0),
        },
        Event::PairFound { pair: right },
        Event::SubproblemClosed,
        Event::PairUpdated { pair: left },
        Event::StripOpened {
            bounds: SubproblemBounds::new(3.0 - d, 3.0 + d),
        },
        Event::PairFound { pair: left },
        Event::SubproblemClosed,
    ];
    assert_eq!(rec.events, expected);
}

#[test]
fn events_are_nested_and_dividers_in_bounds() {
    let pts = draw_points(Layout::Clustered(ClusterCfg::default()), 120, ReplayToken::new(77));
    let mut rec = Recorder::new();
    let sol = closest_pair_with(&pts, EngineCfg::default(), &mut rec).unwrap();
    let mut stack: Vec<SubproblemBounds> = Vec::new();
    let mut opened = 0usize;
    for e in &rec.events {
        match e {
            Event::SubproblemOpened { bounds } => {
                assert!(bounds.x_start <= bounds.x_end);
                if let Some(parent) = stack.last() {
                    assert!(parent.contains_x(bounds.x_start) && parent.contains_x(bounds.x_end));
                }
                stack.push(*bounds);
                opened += 1;
            }
            Event::SubproblemClosed => {
                stack.pop().expect("close without open");
            }
            Event::DividerDrawn { x } => {
                assert!(stack.last().expect("divider outside frame").contains_x(*x));
            }
            _ => {}
        }
    }
    assert!(stack.is_empty());
    assert_eq!(opened, sol.stats.frames);
    match rec.events.iter().rev().nth(1) {
        Some(Event::PairFound { pair }) => assert_eq!(*pair, sol.pair),
        other => panic!("expected final pair-found, got {other:?}"),
    }
}

#[test]
fn stop_cancels_the_run() {
    let pts = draw_points(Layout::Uniform(UniformCfg::default()), 40, ReplayToken::new(5));
    let mut rec = Recorder::stopping_after(10);
    let err = closest_pair_with(&pts, EngineCfg::default(), &mut rec).unwrap_err();
    assert_eq!(err, ClosestPairError::Cancelled);
    assert_eq!(rec.events.len(), 10);
}

#[test]
fn pause_is_honored_and_run_completes() {
    struct PauseOnDivider {
        pauses: usize,
    }
    impl VisualizationPort for PauseOnDivider {
        fn on_divider_drawn(&mut self, _x: f64) -> Step {
            self.pauses += 1;
            Step::Pause(std::time::Duration::from_micros(1))
        }
    }
    let pts = draw_points(Layout::Uniform(UniformCfg::default()), 16, ReplayToken::new(8));
    let mut port = PauseOnDivider { pauses: 0 };
    let sol = closest_pair_with(&pts, EngineCfg::default(), &mut port).unwrap();
    assert_eq!(port.pauses, sol.stats.frames - sol.stats.leaves);
}

#[test]
fn strip_work_is_linear_on_uniform_points() {
    for (i, n) in [1_000usize, 4_000, 16_000].into_iter().enumerate() {
        let pts = draw_points(
            Layout::Uniform(UniformCfg::default()),
            n,
            ReplayToken {
                seed: 11,
                index: i as u64,
            },
        );
        let sol = closest_pair(&pts).unwrap();
        assert!(
            sol.stats.strip_comparisons <= 2 * n,
            "n={n}: {} strip comparisons",
            sol.stats.strip_comparisons
        );
    }
}

#[test]
fn depth_is_logarithmic() {
    let n = 1024;
    let pts = draw_points(Layout::Uniform(UniformCfg::default()), n, ReplayToken::new(3));
    let sol = closest_pair(&pts).unwrap();
    // 1024 → 512 → ... → 4 → 2: nine halvings.
    assert_eq!(sol.stats.max_depth, 9);
    assert_eq!(sol.stats.leaves, 512);
}

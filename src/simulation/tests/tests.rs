use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::core::grid::ACTIVE;
use crate::core::{Cell, Seed};
use crate::domain::palette::{ACTIVE_COLOR, BG_COLOR};

fn engine(width: u32, height: u32, mode: SpreadMode) -> EngineCore {
    EngineCore::with_config(EngineConfig::new(width, height, mode)).expect("valid config")
}

/// Tick until the engine stops reporting `Continue`; returns ticks fired.
fn run_to_rest(engine: &mut EngineCore, max_ticks: u32) -> u32 {
    for n in 1..=max_ticks {
        if engine.tick() != TickOutcome::Continue {
            return n;
        }
    }
    panic!("engine still busy after {} ticks", max_ticks);
}

fn manhattan(a: (u32, u32), b: (u32, u32)) -> u32 {
    a.0.abs_diff(b.0) + a.1.abs_diff(b.1)
}

// === Bounded mode ===

#[test]
fn bounded_depth_two_fills_three_by_three_from_center() {
    let mut engine = engine(3, 3, SpreadMode::Bounded { depth: 2 });

    assert!(engine.interact(1, 1));
    // Input is deferred to the next tick
    assert_eq!(engine.active_cells(), 0);

    run_to_rest(&mut engine, 10);
    assert_eq!(engine.snapshot().to_rows(), vec![vec![1, 1, 1]; 3]);
    assert_eq!(engine.active_cells(), 9);
}

#[test]
fn bounded_never_reaches_past_depth() {
    let mut engine = engine(7, 7, SpreadMode::Bounded { depth: 2 });
    engine.interact(3, 3);

    // seed tick + 2 expansion ticks
    assert_eq!(engine.tick(), TickOutcome::Continue);
    assert_eq!(engine.tick(), TickOutcome::Continue);
    assert_eq!(engine.tick(), TickOutcome::Finished);
    assert!(!engine.has_pending_work());
    assert_eq!(engine.wave_count(), 0);

    let grid = engine.snapshot();
    for row in 0..7 {
        for col in 0..7 {
            let expected = if manhattan((row, col), (3, 3)) <= 2 { ACTIVE } else { 0 };
            assert_eq!(grid.get(row, col), Some(expected), "cell ({}, {})", row, col);
        }
    }
    assert_eq!(engine.active_cells(), 13);

    // Exhausted chain stays stopped
    assert_eq!(engine.tick(), TickOutcome::Finished);
    assert_eq!(engine.active_cells(), 13);
}

#[test]
fn bounded_depth_cuts_off_non_empty_frontier() {
    let mut engine = engine(5, 1, SpreadMode::Bounded { depth: 1 });
    engine.interact(0, 0);

    assert_eq!(engine.tick(), TickOutcome::Continue);
    assert_eq!(engine.wave_frontier_len(), 1);
    assert_eq!(engine.waves[0].remaining_depth(), 0);

    // (0, 2) is still reachable but the depth budget is spent
    assert_eq!(engine.tick(), TickOutcome::Finished);
    assert_eq!(engine.snapshot().cells(), &[1, 1, 0, 0, 0]);
}

#[test]
fn bounded_depth_zero_activates_only_the_seed() {
    let mut engine = engine(3, 3, SpreadMode::Bounded { depth: 0 });
    engine.interact(1, 1);
    assert_eq!(engine.tick(), TickOutcome::Finished);
    assert_eq!(engine.active_cells(), 1);
}

#[test]
fn bounded_later_click_starts_its_own_wave() {
    let mut engine = engine(9, 1, SpreadMode::Bounded { depth: 1 });
    engine.interact(0, 0);
    run_to_rest(&mut engine, 5);
    assert_eq!(engine.active_cells(), 2);

    engine.interact(0, 8);
    run_to_rest(&mut engine, 5);
    assert_eq!(engine.snapshot().cells(), &[1, 1, 0, 0, 0, 0, 0, 1, 1]);
}

#[test]
fn bounded_waves_run_side_by_side() {
    let mut engine = engine(9, 1, SpreadMode::Bounded { depth: 3 });
    engine.interact(0, 0);
    engine.tick();
    engine.interact(0, 8);
    engine.tick();
    assert_eq!(engine.wave_count(), 2);

    run_to_rest(&mut engine, 10);
    // First wave: cols 0..=3, second wave: cols 5..=8
    assert_eq!(engine.snapshot().cells(), &[1, 1, 1, 1, 0, 1, 1, 1, 1]);
}

#[test]
fn bounded_clicks_in_one_window_share_a_wave() {
    let mut engine = engine(5, 5, SpreadMode::Bounded { depth: 2 });
    engine.interact(0, 0);
    engine.interact(4, 4);
    engine.tick();
    assert_eq!(engine.wave_count(), 1);
}

// === Binary input ===

#[test]
fn repeat_click_before_tick_is_one_pending_entry() {
    for mode in [SpreadMode::Unbounded, SpreadMode::Bounded { depth: 2 }] {
        let mut engine = engine(4, 4, mode);
        assert!(engine.interact(2, 1));
        assert!(!engine.interact(2, 1));
        assert_eq!(engine.pending_len(), 1);
        assert!(engine.pending().contains(Cell::new(2, 1)));
    }
}

#[test]
fn click_outside_grid_is_ignored() {
    let mut engine = engine(3, 2, SpreadMode::Unbounded);
    assert!(!engine.interact(2, 0));
    assert!(!engine.interact(0, 3));
    assert_eq!(engine.pending_len(), 0);
    assert_eq!(engine.tick(), TickOutcome::Idle);
}

// === Unbounded mode ===

#[test]
fn unbounded_fills_grid_then_idles() {
    let mut engine = engine(4, 4, SpreadMode::Unbounded);
    assert_eq!(engine.tick(), TickOutcome::Idle);

    engine.interact(0, 0);
    run_to_rest(&mut engine, 20);
    assert_eq!(engine.active_cells(), 16);
    assert_eq!(engine.pending_len(), 0);

    // Idle is not terminal: it keeps answering Idle and takes new input
    assert_eq!(engine.tick(), TickOutcome::Idle);
    assert!(engine.interact(3, 3));
    assert_eq!(engine.tick(), TickOutcome::Idle);
    assert_eq!(engine.active_cells(), 16);
}

#[test]
fn unbounded_front_advances_one_ring_per_tick() {
    let mut engine = engine(5, 5, SpreadMode::Unbounded);
    engine.interact(0, 0);

    for ring in 0..=8u32 {
        engine.tick();
        let grid = engine.snapshot();
        for row in 0..5 {
            for col in 0..5 {
                let want = manhattan((row, col), (0, 0)) <= ring;
                assert_eq!(grid.get(row, col) == Some(ACTIVE), want, "ring {} cell ({}, {})", ring, row, col);
            }
        }
    }
}

#[test]
fn unbounded_overlapping_fronts_are_deduplicated() {
    let mut engine = engine(3, 3, SpreadMode::Unbounded);
    engine.interact(0, 0);
    engine.interact(0, 2);
    engine.tick();

    // (0, 1) is a neighbour of both seeds but queued once
    let cells: Vec<Cell> = engine.pending().iter().map(|s| s.cell).collect();
    assert_eq!(cells, vec![Cell::new(1, 0), Cell::new(0, 1), Cell::new(1, 2)]);
}

#[test]
fn unbounded_active_cells_block_spread() {
    let mut engine = engine(3, 1, SpreadMode::Unbounded);
    engine.interact(0, 1);
    engine.tick();
    engine.tick();
    assert_eq!(engine.active_cells(), 3);

    // Re-seeding an active cell finds no eligible neighbours
    engine.interact(0, 0);
    assert_eq!(engine.tick(), TickOutcome::Idle);
    assert_eq!(engine.pending_len(), 0);
}

// === Precedence mode ===

#[test]
fn precedence_single_row_walkthrough() {
    let mut engine = engine(3, 1, SpreadMode::Precedence);

    assert!(engine.interact(0, 0));
    assert_eq!(engine.click_counter(), 1);
    assert_eq!(engine.pending().to_vec(), vec![Seed::new(Cell::new(0, 0), 1)]);

    assert_eq!(engine.tick(), TickOutcome::Continue);
    assert_eq!(engine.snapshot().cells(), &[1, 0, 0]);
    assert_eq!(engine.pending().to_vec(), vec![Seed::new(Cell::new(0, 1), 1)]);

    engine.tick();
    assert_eq!(engine.snapshot().cells(), &[1, 1, 0]);
}

#[test]
fn precedence_stronger_click_overwrites_and_never_lowers() {
    let mut engine = engine(5, 1, SpreadMode::Precedence);
    engine.interact(0, 0);

    let mut previous = engine.snapshot();
    let mut check_monotonic = |engine: &EngineCore| {
        let now = engine.snapshot();
        for (before, after) in previous.cells().iter().zip(now.cells()) {
            assert!(after >= before, "strength dropped from {} to {}", before, after);
        }
        previous = now;
    };

    for _ in 0..5 {
        engine.tick();
        check_monotonic(&engine);
    }
    assert_eq!(engine.snapshot().cells(), &[1; 5]);

    assert!(engine.interact(0, 4));
    for _ in 0..6 {
        engine.tick();
        check_monotonic(&engine);
    }
    assert_eq!(engine.snapshot().cells(), &[2; 5]);
    assert_eq!(engine.tick(), TickOutcome::Idle);
}

#[test]
fn precedence_equal_strength_does_not_spread() {
    let mut engine = engine(2, 1, SpreadMode::Precedence);
    engine.interact(0, 0);
    engine.tick();
    engine.tick();
    assert_eq!(engine.snapshot().cells(), &[1, 1]);
    // Both cells now hold 1; nothing is strictly weaker
    assert_eq!(engine.pending_len(), 0);
}

#[test]
fn precedence_click_matching_displayed_colour_is_skipped() {
    let config = EngineConfig::new(1, 1, SpreadMode::Precedence).with_palette_size(2);
    let mut engine = EngineCore::with_config(config).unwrap();

    assert!(engine.interact(0, 0));
    // Counter 2 shows colour 0, same as the (not yet ticked) cell
    assert!(!engine.interact(0, 0));
    assert_eq!(engine.click_counter(), 2);
    assert_eq!(engine.pending().strength(Cell::new(0, 0)), Some(1));

    engine.tick();
    assert_eq!(engine.snapshot().cells(), &[1]);
    // Counter 3 shows colour 1, same as the cell now
    assert!(!engine.interact(0, 0));
    // Counter 4 shows colour 0, differs from the cell
    assert!(engine.interact(0, 0));
    assert_eq!(engine.pending().strength(Cell::new(0, 0)), Some(4));
}

#[test]
fn precedence_pending_keeps_strongest_stamp() {
    let mut engine = engine(3, 1, SpreadMode::Precedence);
    engine.interact(0, 0);
    engine.interact(0, 2);
    engine.tick();
    // (0, 1) is wanted by strength 1 and strength 2
    assert_eq!(engine.pending().strength(Cell::new(0, 1)), Some(2));
    engine.tick();
    assert_eq!(engine.snapshot().cells(), &[1, 2, 2]);
}

#[test]
fn random_fill_is_seeded_and_precedence_only() {
    let config = EngineConfig::new(6, 4, SpreadMode::Precedence)
        .with_random(true)
        .with_seed(99);
    let a = EngineCore::with_config(config.clone()).unwrap();
    let b = EngineCore::with_config(config).unwrap();
    assert_eq!(a.snapshot(), b.snapshot());
    assert!(a.snapshot().cells().iter().all(|&v| v < 8));
    assert!(a.snapshot().count_active() > 0);

    let binary = EngineCore::with_config(
        EngineConfig::new(6, 4, SpreadMode::Unbounded).with_random(true),
    )
    .unwrap();
    assert_eq!(binary.active_cells(), 0);
}

#[test]
fn precedence_click_repaints_stronger_random_cell() {
    let config = EngineConfig::new(5, 5, SpreadMode::Precedence)
        .with_random(true)
        .with_seed(12345);
    let mut engine = EngineCore::with_config(config).unwrap();
    let start = engine.snapshot();

    let (row, col) = (0..5)
        .flat_map(|row| (0..5).map(move |col| (row, col)))
        .find(|&(row, col)| start.get(row, col).is_some_and(|v| v > 1))
        .expect("random fill has a cell stronger than the first click");

    assert!(engine.interact(row, col));
    engine.tick();
    assert_eq!(engine.snapshot().get(row, col), Some(1));

    engine.tick();
    let after = engine.snapshot();
    for (drow, dcol) in crate::core::grid::NEIGHBOR_OFFSETS {
        let (nrow, ncol) = (row as i32 + drow, col as i32 + dcol);
        if nrow < 0 || ncol < 0 {
            continue;
        }
        let (nrow, ncol) = (nrow as u32, ncol as u32);
        let Some(before) = start.get(nrow, ncol) else {
            continue;
        };
        let expected = if before == 0 { 1 } else { before };
        assert_eq!(after.get(nrow, ncol), Some(expected), "neighbour ({}, {})", nrow, ncol);
    }
}

// === Store, render, housekeeping ===

#[test]
fn only_working_ticks_publish_snapshots() {
    let mut engine = engine(3, 1, SpreadMode::Unbounded);
    let versions = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&versions);
    engine.subscribe(Box::new(move |grid: &Grid, version: u64| {
        sink.borrow_mut().push((version, grid.count_active()));
    }));

    engine.tick();
    assert!(versions.borrow().is_empty());

    engine.interact(0, 0);
    run_to_rest(&mut engine, 5);
    assert_eq!(*versions.borrow(), vec![(1, 1), (2, 2), (3, 3)]);
    assert_eq!(engine.version(), 3);
    assert_eq!(engine.frame(), 3);
}

#[test]
fn clear_resets_grid_but_keeps_click_counter() {
    let mut engine = engine(3, 3, SpreadMode::Precedence);
    engine.interact(1, 1);
    engine.tick();
    engine.interact(0, 0);

    engine.clear();
    assert_eq!(engine.active_cells(), 0);
    assert_eq!(engine.snapshot().count_active(), 0);
    assert_eq!(engine.pending_len(), 0);
    assert_eq!(engine.frame(), 0);
    assert_eq!(engine.click_counter(), 2);

    engine.interact(2, 2);
    assert_eq!(engine.pending().strength(Cell::new(2, 2)), Some(3));
}

#[test]
fn colors_follow_mode_palette() {
    let mut engine = engine(2, 1, SpreadMode::Unbounded);
    engine.interact(0, 0);
    engine.tick();
    assert_eq!(engine.colors(), &[ACTIVE_COLOR, BG_COLOR]);
    assert_eq!(engine.colors_len(), 2);

    let mut engine = self::engine(2, 1, SpreadMode::Precedence);
    engine.interact(0, 1);
    engine.tick();
    let palette = engine.palette().clone();
    let colors = engine.colors().to_vec();
    assert_eq!(colors[0], BG_COLOR);
    assert_eq!(colors[1], palette.color_of(&SpreadMode::Precedence, 1));
}

#[test]
fn perf_stats_describe_last_tick() {
    let mut engine = engine(3, 3, SpreadMode::Unbounded);
    engine.enable_perf_metrics(true);
    engine.interact(1, 1);
    engine.tick();

    let stats = engine.get_perf_stats();
    assert_eq!(stats.applied(), 1);
    assert_eq!(stats.candidates(), 4);
    assert_eq!(stats.pending_after(), 4);
    assert_eq!(stats.active_cells(), 1);
    assert_eq!(stats.frame(), 1);
    assert!(stats.tick_ms() >= 0.0);

    engine.enable_perf_metrics(false);
    assert_eq!(engine.get_perf_stats().applied(), 0);
}

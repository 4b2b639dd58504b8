use crate::core::grid::{neighbors, Grid};
use crate::core::pending::PendingSet;
use crate::domain::mode::{SpreadMode, TickOutcome};

use super::{EngineCore, PerfTimer, Wave};

struct TickReport {
    outcome: TickOutcome,
    applied: usize,
    candidates: usize,
}

impl TickReport {
    fn nothing(outcome: TickOutcome) -> Self {
        TickReport { outcome, applied: 0, candidates: 0 }
    }
}

pub(super) fn tick(engine: &mut EngineCore) -> TickOutcome {
    let timer = PerfTimer::start_if(engine.perf_enabled);

    let report = match engine.config.mode {
        SpreadMode::Bounded { depth } => tick_bounded(engine, depth),
        SpreadMode::Precedence | SpreadMode::Unbounded => tick_continuous(engine),
    };

    if report.applied > 0 {
        engine.frame += 1;
        engine.active_cells = engine.store.current().count_active();
        tracing::debug!(
            frame = engine.frame,
            applied = report.applied,
            candidates = report.candidates,
            pending = engine.pending.len(),
            waves = engine.waves.len(),
            "tick"
        );
    }

    if let Some(timer) = timer {
        let stats = &mut engine.perf_stats;
        stats.reset();
        stats.tick_ms = timer.elapsed_ms();
        stats.applied = report.applied as u32;
        stats.candidates = report.candidates as u32;
        stats.pending_after = engine.pending.len() as u32;
        stats.waves = engine.waves.len() as u32;
        stats.active_cells = engine.active_cells;
        stats.frame = engine.frame;
    }

    report.outcome
}

/// Eligible neighbours of every frontier seed, measured against `committed`
pub(super) fn expand(frontier: &PendingSet, committed: &Grid, mode: &SpreadMode) -> PendingSet {
    let mut next = PendingSet::new(mode.merge_rule());
    for seed in frontier.iter() {
        let found = neighbors(committed, &seed, |state, strength| mode.is_eligible(state, strength));
        tracing::trace!(row = seed.cell.row, col = seed.cell.col, found = found.len(), "expand");
        next.extend(found);
    }
    next
}

/// Precedence / unbounded: the pending set is the live frontier
fn tick_continuous(engine: &mut EngineCore) -> TickReport {
    if engine.pending.is_empty() {
        return TickReport::nothing(TickOutcome::Idle);
    }

    let mode = engine.config.mode;
    let current = engine.pending.take();

    let next = engine.store.replace_then(
        |grid| grid.stamped(current.iter(), |_, seed| mode.written_state(seed.strength)),
        |committed| expand(&current, committed, &mode),
    );

    let candidates = next.len();
    // Input that arrived since the swap is already in `pending`; the merge
    // rule makes the order irrelevant.
    engine.pending.merge(next);

    let outcome = if engine.pending.is_empty() {
        TickOutcome::Idle
    } else {
        TickOutcome::Continue
    };
    TickReport { outcome, applied: current.len(), candidates }
}

/// Bounded: queued input becomes a new wave, every wave advances once
fn tick_bounded(engine: &mut EngineCore, depth: u32) -> TickReport {
    if !engine.pending.is_empty() {
        let seeds = engine.pending.take();
        engine.waves.push(Wave::new(seeds, depth));
    }

    if engine.waves.is_empty() {
        return TickReport::nothing(TickOutcome::Finished);
    }

    let mode = engine.config.mode;
    let waves = std::mem::take(&mut engine.waves);
    let applied: usize = waves.iter().map(|w| w.frontier().len()).sum();

    let committed = engine.store.replace(|grid| {
        grid.stamped(
            waves.iter().flat_map(|w| w.frontier().iter()),
            |_, seed| mode.written_state(seed.strength),
        )
    });

    let mut candidates = 0;
    engine.waves = waves
        .into_iter()
        .filter_map(|wave| wave.advance(&committed, &mode))
        .inspect(|wave| candidates += wave.frontier().len())
        .collect();

    let outcome = if engine.has_pending_work() {
        TickOutcome::Continue
    } else {
        TickOutcome::Finished
    };
    TickReport { outcome, applied, candidates }
}

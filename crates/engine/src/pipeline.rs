use std::path::Path;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use log::debug;
use lsl_fs::{IdentityResolver, ListError, RecordStore, collect_parallel};

use crate::{layout::ColumnWidths, render::render_line, sort::sort_by_name};

/// Shared, state-independent pipeline context.
struct PipelineCtx<'a, R: IdentityResolver + ?Sized> {
    /// Owner/group name lookups, used by both layout and render.
    ids: &'a R,
    /// Reference time deciding between the time-of-day and year formats.
    now: DateTime<Local>,
}

/// Pipeline created, nothing collected yet.
pub struct InitialState;

/// Directory read into a store.
pub struct CollectedState {
    store: RecordStore,
}

/// Column widths known.
pub struct MeasuredState {
    store: RecordStore,
    widths: ColumnWidths,
}

/// Records in display order, ready to render.
pub struct SortedState {
    store: RecordStore,
    widths: ColumnWidths,
}

/// Stages for which we record timings.
#[derive(Copy, Clone, Debug)]
pub enum Stage {
    Collect,
    Layout,
    Sort,
    Render,
}

/// Timing metrics collected during pipeline execution.
#[derive(Debug, Clone, Default)]
pub struct PipelineMetrics {
    pub collect_time: Option<Duration>,
    pub layout_time: Option<Duration>,
    pub sort_time: Option<Duration>,
    pub render_time: Option<Duration>,
}

impl PipelineMetrics {
    /// Total time across all measured stages.
    pub fn total(&self) -> Duration {
        self.collect_time.unwrap_or_default()
            + self.layout_time.unwrap_or_default()
            + self.sort_time.unwrap_or_default()
            + self.render_time.unwrap_or_default()
    }
}

/// Strategy trait for timing behavior.
pub trait Timer {
    /// Run `f`, optionally measuring and recording the duration for `stage`.
    fn measure<F, R>(&mut self, stage: Stage, f: F) -> R
    where
        F: FnOnce() -> R;

    /// Return metrics if timing is enabled.
    fn metrics(&self) -> Option<&PipelineMetrics> {
        None
    }
}

/// Timer implementation that does nothing
#[derive(Debug, Default)]
pub struct NoopTimer;

impl Timer for NoopTimer {
    #[inline]
    fn measure<F, R>(&mut self, _stage: Stage, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        f()
    }
}

/// Timer implementation that collects `PipelineMetrics`.
#[derive(Debug, Default)]
pub struct MetricsTimer {
    metrics: PipelineMetrics,
}

impl Timer for MetricsTimer {
    fn measure<F, R>(&mut self, stage: Stage, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        let start = Instant::now();
        let result = f();
        let elapsed = start.elapsed();

        match stage {
            Stage::Collect => self.metrics.collect_time = Some(elapsed),
            Stage::Layout => self.metrics.layout_time = Some(elapsed),
            Stage::Sort => self.metrics.sort_time = Some(elapsed),
            Stage::Render => self.metrics.render_time = Some(elapsed),
        }

        result
    }

    fn metrics(&self) -> Option<&PipelineMetrics> {
        Some(&self.metrics)
    }
}

/// Finished listing: one line per record, in display order.
#[derive(Debug, Clone)]
pub struct Listing {
    pub lines: Vec<String>,
    pub widths: ColumnWidths,
    pub metrics: Option<PipelineMetrics>,
}

/// A type-safe directory listing pipeline.
///
/// The typestate parameter `S` enforces collect → measure → sort → render
/// at compile time, so layout and sorting only ever see a fully collected
/// store. Timing is controlled by `T`:
///
/// - `T = NoopTimer`    => untimed pipeline
/// - `T = MetricsTimer` => timed pipeline
pub struct ListingPipeline<'a, R: IdentityResolver + ?Sized, S, T: Timer = NoopTimer> {
    ctx: PipelineCtx<'a, R>,
    state: S,
    timer: T,
}

impl<'a, R: IdentityResolver + ?Sized> ListingPipeline<'a, R, InitialState, NoopTimer> {
    /// Create an untimed pipeline.
    pub fn new(ids: &'a R) -> Self {
        Self {
            ctx: PipelineCtx {
                ids,
                now: Local::now(),
            },
            state: InitialState,
            timer: NoopTimer,
        }
    }
}

impl<'a, R: IdentityResolver + ?Sized> ListingPipeline<'a, R, InitialState, MetricsTimer> {
    /// Create a timed pipeline.
    pub fn new_timed(ids: &'a R) -> Self {
        Self {
            ctx: PipelineCtx {
                ids,
                now: Local::now(),
            },
            state: InitialState,
            timer: MetricsTimer::default(),
        }
    }
}

impl<'a, R: IdentityResolver + ?Sized, S, T: Timer> ListingPipeline<'a, R, S, T> {
    /// Override the reference time used for timestamp formatting.
    pub fn with_now(mut self, now: DateTime<Local>) -> Self {
        self.ctx.now = now;
        self
    }

    /// Access timing metrics, if enabled.
    pub fn metrics(&self) -> Option<&PipelineMetrics> {
        self.timer.metrics()
    }
}

impl<'a, R: IdentityResolver + ?Sized, T: Timer> ListingPipeline<'a, R, InitialState, T> {
    /// Read `dir` using `threads` stat workers (1 means sequential).
    pub fn collect(
        self,
        dir: &Path,
        threads: usize,
    ) -> Result<ListingPipeline<'a, R, CollectedState, T>, ListError> {
        let ListingPipeline {
            ctx,
            state: InitialState,
            mut timer,
        } = self;

        let store = timer.measure(Stage::Collect, || collect_parallel(dir, threads))?;

        Ok(ListingPipeline {
            ctx,
            state: CollectedState { store },
            timer,
        })
    }

    /// Start from records gathered elsewhere.
    pub fn with_records(self, store: RecordStore) -> ListingPipeline<'a, R, CollectedState, T> {
        let ListingPipeline {
            ctx,
            state: InitialState,
            timer,
        } = self;

        ListingPipeline {
            ctx,
            state: CollectedState { store },
            timer,
        }
    }
}

impl<'a, R: IdentityResolver + ?Sized, T: Timer> ListingPipeline<'a, R, CollectedState, T> {
    /// Compute column widths over every collected record.
    pub fn measure(self) -> ListingPipeline<'a, R, MeasuredState, T> {
        let ListingPipeline {
            ctx,
            state: CollectedState { store },
            mut timer,
        } = self;

        let widths = timer.measure(Stage::Layout, || {
            ColumnWidths::measure(store.as_slice(), ctx.ids)
        });

        ListingPipeline {
            ctx,
            state: MeasuredState { store, widths },
            timer,
        }
    }
}

impl<'a, R: IdentityResolver + ?Sized, T: Timer> ListingPipeline<'a, R, MeasuredState, T> {
    /// Put records in case-insensitive name order.
    pub fn sort(self) -> ListingPipeline<'a, R, SortedState, T> {
        let ListingPipeline {
            ctx,
            state: MeasuredState { mut store, widths },
            mut timer,
        } = self;

        timer.measure(Stage::Sort, || sort_by_name(store.as_mut_slice()));

        ListingPipeline {
            ctx,
            state: SortedState { store, widths },
            timer,
        }
    }
}

impl<'a, R: IdentityResolver + ?Sized, T: Timer> ListingPipeline<'a, R, SortedState, T> {
    /// Produce one formatted line per record, consuming the pipeline.
    pub fn render(self) -> Listing {
        let ListingPipeline {
            ctx,
            state: SortedState { store, widths },
            mut timer,
        } = self;

        let lines = timer.measure(Stage::Render, || {
            store
                .iter()
                .map(|rec| render_line(rec, &widths, ctx.ids, &ctx.now))
                .collect::<Vec<_>>()
        });

        let metrics = timer.metrics().cloned();
        if let Some(m) = &metrics {
            debug!(
                "[pipeline] {} lines in {:.2}ms (collect: {:.2}ms, layout: {:.2}ms, sort: {:.2}ms, render: {:.2}ms)",
                lines.len(),
                m.total().as_secs_f64() * 1000.0,
                m.collect_time.unwrap_or_default().as_secs_f64() * 1000.0,
                m.layout_time.unwrap_or_default().as_secs_f64() * 1000.0,
                m.sort_time.unwrap_or_default().as_secs_f64() * 1000.0,
                m.render_time.unwrap_or_default().as_secs_f64() * 1000.0,
            );
        }

        Listing {
            lines,
            widths,
            metrics,
        }
    }
}

/// Run every stage against `dir`, timing the stages when `timed` is set.
pub fn list_directory<R: IdentityResolver + ?Sized>(
    dir: &Path,
    ids: &R,
    threads: usize,
    timed: bool,
) -> Result<Listing, ListError> {
    let listing = if timed {
        ListingPipeline::new_timed(ids)
            .collect(dir, threads)?
            .measure()
            .sort()
            .render()
    } else {
        ListingPipeline::new(ids)
            .collect(dir, threads)?
            .measure()
            .sort()
            .render()
    };

    debug!("[list_directory] {:?}: {} entries", dir, listing.lines.len());
    Ok(listing)
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;

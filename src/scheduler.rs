//! Cycle timer
//!
//! A schedule is identified by its generation. Arming always produces a new
//! generation, so ticks from a previous stream can be told apart and dropped.

use futures::Stream;
use std::time::Duration;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub generation: u64,
    pub period: Duration,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    generation: u64,
    armed: Option<Schedule>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm a fresh schedule, replacing any previous one.
    pub fn arm(&mut self, period: Duration) -> Schedule {
        self.generation += 1;
        let schedule = Schedule {
            generation: self.generation,
            period,
        };
        self.armed = Some(schedule);
        schedule
    }

    pub fn disarm(&mut self) {
        self.armed = None;
    }

    pub fn current(&self) -> Option<Schedule> {
        self.armed
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Whether a tick carrying `generation` belongs to the armed schedule
    pub fn accepts(&self, generation: u64) -> bool {
        self.armed
            .map(|schedule| schedule.generation == generation)
            .unwrap_or(false)
    }
}

/// Endless stream of ticks for `schedule`, the first one period after it starts.
///
/// The interval is created on first poll so the stream can be built outside
/// the runtime (e.g. while iced collects subscriptions).
pub fn ticks(schedule: Schedule) -> impl Stream<Item = u64> + Send + 'static {
    futures::stream::unfold(None, move |interval: Option<Interval>| async move {
        let mut interval = interval.unwrap_or_else(|| {
            let mut interval = interval_at(Instant::now() + schedule.period, schedule.period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            interval
        });
        interval.tick().await;
        Some((schedule.generation, Some(interval)))
    })
}

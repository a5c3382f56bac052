//! Simulated progress shown while the portfolio payload is in flight.
//!
//! The percentage creeps up on a fixed period but stays at or below
//! [`LOADING_CAP`] until the page settles, then jumps to 100 and is held
//! for [`COMPLETION_HOLD`] before the presenter returns.

use crate::core::page::LoadState;
use crate::core::{ProgressSink, StepSource};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::{self, Instant, MissedTickBehavior};

pub const TICK_PERIOD: Duration = Duration::from_millis(200);
pub const COMPLETION_HOLD: Duration = Duration::from_millis(500);
pub const LOADING_CAP: f64 = 90.0;
pub const COMPLETE: f64 = 100.0;
pub const MAX_STEP: f64 = 10.0;

const FETCHING_FROM: f64 = 40.0;
const RENDERING_FROM: f64 = 80.0;

pub fn caption(percent: f64) -> &'static str {
    if percent < FETCHING_FROM {
        "connecting"
    } else if percent < RENDERING_FROM {
        "fetching"
    } else {
        "rendering"
    }
}

fn advance(value: f64, step: f64) -> f64 {
    (value + step.clamp(0.0, MAX_STEP)).min(LOADING_CAP)
}

/// Random increments in `[0, MAX_STEP)`.
pub struct RandomSteps {
    rng: StdRng,
}

impl RandomSteps {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSteps {
    fn default() -> Self {
        Self::new()
    }
}

impl StepSource for RandomSteps {
    fn next_step(&mut self) -> f64 {
        self.rng.gen_range(0.0..MAX_STEP)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressReport {
    pub ticks: u32,
    pub final_value: f64,
    /// False when the page was torn down before it settled.
    pub completed: bool,
}

#[derive(Debug, Clone)]
pub struct ProgressPresenter {
    period: Duration,
    hold: Duration,
}

impl Default for ProgressPresenter {
    fn default() -> Self {
        Self {
            period: TICK_PERIOD,
            hold: COMPLETION_HOLD,
        }
    }
}

impl ProgressPresenter {
    pub fn new(period: Duration, hold: Duration) -> Self {
        Self { period, hold }
    }

    /// Drives the bar until `state` leaves `Loading` or its sender is dropped.
    pub async fn run<S, T>(
        &self,
        mut state: watch::Receiver<LoadState>,
        sink: &S,
        steps: &mut T,
    ) -> ProgressReport
    where
        S: ProgressSink + ?Sized,
        T: StepSource + ?Sized,
    {
        let mut value = 0.0;
        let mut ticks = 0u32;
        sink.update(value, caption(value));

        if state.borrow_and_update().is_loading() {
            let mut interval = time::interval_at(Instant::now() + self.period, self.period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    biased;
                    changed = state.changed() => {
                        if changed.is_err() {
                            tracing::debug!("Page torn down while loading; progress stopped at {:.0}%", value);
                            return ProgressReport { ticks, final_value: value, completed: false };
                        }
                        if !state.borrow_and_update().is_loading() {
                            break;
                        }
                    }
                    _ = interval.tick() => {
                        ticks += 1;
                        value = advance(value, steps.next_step());
                        sink.update(value, caption(value));
                    }
                }
            }
        }

        value = COMPLETE;
        sink.update(value, caption(value));
        tracing::debug!("Load settled after {} progress ticks", ticks);
        time::sleep(self.hold).await;

        ProgressReport {
            ticks,
            final_value: value,
            completed: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::page::PageComposer;
    use crate::domain::model::PortfolioData;
    use crate::utils::error::FolioError;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingSink {
        values: RefCell<Vec<f64>>,
    }

    impl ProgressSink for RecordingSink {
        fn update(&self, percent: f64, _caption: &str) {
            self.values.borrow_mut().push(percent);
        }
    }

    struct ConstantSteps(f64);

    impl StepSource for ConstantSteps {
        fn next_step(&mut self) -> f64 {
            self.0
        }
    }

    #[test]
    fn captions_follow_fixed_thresholds() {
        assert_eq!(caption(0.0), "connecting");
        assert_eq!(caption(39.9), "connecting");
        assert_eq!(caption(40.0), "fetching");
        assert_eq!(caption(79.9), "fetching");
        assert_eq!(caption(80.0), "rendering");
        assert_eq!(caption(100.0), "rendering");
    }

    #[test]
    fn random_steps_stay_in_range() {
        let mut steps = RandomSteps::seeded(7);
        for _ in 0..1000 {
            let step = steps.next_step();
            assert!((0.0..MAX_STEP).contains(&step));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn caps_at_ninety_then_completes() {
        let page = PageComposer::new();
        let sink = RecordingSink::default();
        let presenter = ProgressPresenter::default();

        let settle = async {
            time::sleep(Duration::from_secs(5)).await;
            page.settle(Ok(PortfolioData::default()));
        };
        let mut steps = ConstantSteps(9.99);
        let (_, report) = tokio::join!(settle, presenter.run(page.subscribe(), &sink, &mut steps));

        let values = sink.values.borrow();
        let (last, loading) = values.split_last().unwrap();
        assert_eq!(*last, COMPLETE);
        assert!(loading.iter().all(|v| *v <= LOADING_CAP));
        assert!(loading.windows(2).all(|w| w[0] <= w[1]));
        assert!(loading.contains(&LOADING_CAP));
        assert!(report.completed);
        assert_eq!(report.final_value, COMPLETE);
    }

    #[tokio::test(start_paused = true)]
    async fn no_updates_after_completion() {
        let page = PageComposer::new();
        let sink = RecordingSink::default();
        let presenter = ProgressPresenter::default();

        let settle = async {
            time::sleep(Duration::from_millis(700)).await;
            page.settle(Err(FolioError::HttpStatusError { status: 500 }));
        };
        let mut steps = RandomSteps::seeded(1);
        let started = Instant::now();
        let (_, report) = tokio::join!(settle, presenter.run(page.subscribe(), &sink, &mut steps));

        assert!(started.elapsed() >= Duration::from_millis(700) + COMPLETION_HOLD);
        assert!(report.completed);

        let count = sink.values.borrow().len();
        time::sleep(Duration::from_secs(2)).await;
        assert_eq!(sink.values.borrow().len(), count);
        assert_eq!(sink.values.borrow().last(), Some(&COMPLETE));
    }

    #[tokio::test(start_paused = true)]
    async fn already_settled_page_jumps_straight_to_complete() {
        let page = PageComposer::new();
        page.settle(Ok(PortfolioData::default()));
        let sink = RecordingSink::default();

        let report = ProgressPresenter::default()
            .run(page.subscribe(), &sink, &mut ConstantSteps(5.0))
            .await;

        assert_eq!(report.ticks, 0);
        assert_eq!(*sink.values.borrow(), vec![0.0, COMPLETE]);
    }

    #[tokio::test(start_paused = true)]
    async fn teardown_stops_without_claiming_completion() {
        let page = PageComposer::new();
        let rx = page.subscribe();
        let sink = RecordingSink::default();

        let teardown = async move {
            time::sleep(Duration::from_millis(450)).await;
            drop(page);
        };
        let presenter = ProgressPresenter::default();
        let mut steps = ConstantSteps(5.0);
        let (_, report) = tokio::join!(teardown, presenter.run(rx, &sink, &mut steps));

        assert!(!report.completed);
        assert!(report.final_value < COMPLETE);
        assert!(!sink.values.borrow().contains(&COMPLETE));
    }
}

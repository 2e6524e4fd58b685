use std::time::{Duration, Instant};

use life_matrix::{Error, Grid, next_generation};
use log::{debug, info};

#[derive(Clone, Copy, Debug)]
pub struct SimulationConfig {
    /// Generations advanced by a single run.
    pub generation_cap: usize,
    pub interval: Duration,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            generation_cap: 100,
            interval: Duration::from_millis(100),
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Run {
    generation: usize,
    due: Instant,
}

/// Drives a capped, timed sequence of generations. Only one run can be
/// active at a time.
#[derive(Debug)]
pub struct Simulation {
    config: SimulationConfig,
    run: Option<Run>,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config, run: None }
    }

    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    /// Generations completed by the active run.
    pub fn generation(&self) -> Option<usize> {
        self.run.map(|run| run.generation)
    }

    /// Starts a run whose first step is due immediately. Returns `false`
    /// and leaves the active run alone if one is already going.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.run.is_some() {
            debug!("run already in progress");
            return false;
        }
        info!(
            "running {} generations every {:?}",
            self.config.generation_cap, self.config.interval
        );
        self.run = Some(Run {
            generation: 0,
            due: now,
        });
        true
    }

    pub fn stop(&mut self) {
        self.run = None;
    }

    /// Replaces `grid` with its next generation if a step is due. Returns
    /// whether the grid changed.
    pub fn tick(&mut self, grid: &mut Grid, now: Instant) -> Result<bool, Error> {
        let cap = self.config.generation_cap;
        let Some(run) = &mut self.run else {
            return Ok(false);
        };
        if run.generation >= cap {
            self.run = None;
            return Ok(false);
        }
        if now < run.due {
            return Ok(false);
        }
        *grid = next_generation(grid)?;
        run.generation += 1;
        run.due = now + self.config.interval;
        if run.generation >= cap {
            info!("run finished, population {}", grid.population());
            self.run = None;
        }
        Ok(true)
    }

    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.run.map(|run| run.due.saturating_duration_since(now))
    }
}

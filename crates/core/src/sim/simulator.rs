//! Round-robin simulation driver.
//!
//! The driver serializes the whole run: processes take turns in id order, and
//! each turn issues up to `quantum` references, the clock advancing one tick
//! per reference starting at tick 1. One reference slot is two calls on the
//! process: `drive` (issue the reference with the current variant), then
//! `retarget` (select the variant for the next reference). A process that
//! just issued its final reference is not retargeted, so no random draws are
//! spent on a retired process.

use crate::common::{Result, Tick};
use crate::config::Config;
use crate::jobmix::JobMix;
use crate::pager::Pager;
use crate::process::Process;
use crate::random::RandomSource;
use crate::stats::SimulationReport;

/// Top-level simulation: processes + pager + random source + clock.
#[derive(Debug)]
pub struct Simulation {
    processes: Vec<Process>,
    pager: Pager,
    random: RandomSource,
    jobmix: JobMix,
    quantum: u64,
    clock: Tick,
}

impl Simulation {
    /// Validates `config` and assembles a ready-to-run simulation.
    ///
    /// Process count comes from the resolved job mix; processes are numbered
    /// from 1 in creation order, which is also their scheduling order.
    ///
    /// # Errors
    ///
    /// Any configuration-class error from [`Config::validate`].
    pub fn new(config: &Config, random: RandomSource) -> Result<Self> {
        config.validate()?;

        let mix = config.workload.job_mix.resolve()?;
        let jobmix = JobMix::new(&mix);

        let processes = (1..=mix.process_count)
            .map(|pid| {
                Process::new(
                    pid,
                    config.workload.process_size,
                    config.workload.reference_count,
                )
            })
            .collect();

        let pager = Pager::new(
            config.machine.machine_size,
            config.machine.page_size,
            config.machine.algorithm,
        )
        .with_trace_paging(config.general.trace_paging);

        Ok(Self {
            processes,
            pager,
            random: random.with_trace_draws(config.general.trace_draws),
            jobmix,
            quantum: config.workload.quantum,
            clock: 0,
        })
    }

    /// Runs the simulation to completion and returns the final report.
    ///
    /// Terminates when every process has issued its full reference budget.
    ///
    /// # Errors
    ///
    /// `RandomExhausted` when the pre-recorded sequence runs out mid-run.
    pub fn run(mut self) -> Result<SimulationReport> {
        while self.processes.iter().any(|p| !p.should_terminate()) {
            for i in 0..self.processes.len() {
                for _ in 0..self.quantum {
                    if self.processes[i].should_terminate() {
                        break;
                    }
                    self.clock += 1;
                    self.processes[i].drive(&mut self.pager, &mut self.random, self.clock)?;
                    if !self.processes[i].should_terminate() {
                        self.processes[i].retarget(&mut self.random, &self.jobmix)?;
                    }
                }
            }
        }

        Ok(self.pager.into_report())
    }

    /// Current simulated time (ticks elapsed so far).
    pub fn now(&self) -> Tick {
        self.clock
    }

    /// The processes in scheduling order.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }
}

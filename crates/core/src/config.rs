//! Configuration system for the paging simulator.
//!
//! This module defines all configuration structures and enums used to
//! parameterize a run. It provides:
//! 1. **Defaults:** Baseline machine geometry and workload parameters.
//! 2. **Structures:** Hierarchical config for machine, workload, and tracing.
//! 3. **Enums:** Replacement algorithm and job-mix selection (preset or table).
//! 4. **Validation:** Startup rejection of malformed configurations.
//!
//! Configuration is supplied via JSON (`serde`) or built in code; the CLI maps
//! its arguments onto `Config` directly.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::common::{Result, SimError};

/// Default configuration constants for the simulator.
///
/// These values define the baseline run when not explicitly overridden.
mod defaults {
    /// Total machine size in words (4 frames at the default page size).
    pub const MACHINE_SIZE: u64 = 32;

    /// Page size in words.
    pub const PAGE_SIZE: u64 = 8;

    /// Virtual address space size per process, in words.
    pub const PROCESS_SIZE: u64 = 32;

    /// References issued per process before it retires.
    pub const REFERENCE_COUNT: u64 = 1000;

    /// References a process issues per round-robin turn.
    pub const QUANTUM: u64 = 3;

    /// Default job-mix preset (one fully sequential process).
    pub const JOB_MIX_PRESET: u32 = 1;
}

/// Page-replacement algorithm selection.
///
/// Chooses which resident page the pager overwrites when a fault hits a full
/// frame table. Names parse case-insensitively, matching the run inputs the
/// simulator historically accepted (`lru`, `FIFO`, `Random`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Least Recently Used: evict the frame with the oldest access stamp,
    /// where both loads and hits count as accesses.
    #[default]
    #[serde(alias = "LRU", alias = "Lru")]
    Lru,
    /// First In First Out: evict the frame with the oldest load stamp;
    /// hits never rejuvenate a frame.
    #[serde(alias = "FIFO", alias = "Fifo")]
    Fifo,
    /// Random: evict the frame at `draw % frame_count`, consuming exactly one
    /// value from the random sequence per eviction.
    #[serde(alias = "RANDOM", alias = "Random")]
    Random,
}

impl FromStr for Algorithm {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "lru" => Ok(Self::Lru),
            "fifo" => Ok(Self::Fifo),
            "random" => Ok(Self::Random),
            _ => Err(SimError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lru => write!(f, "lru"),
            Self::Fifo => write!(f, "fifo"),
            Self::Random => write!(f, "random"),
        }
    }
}

/// One row of a job-mix table: the probabilities that govern a process's next
/// reference type.
///
/// The fourth probability, for a uniformly random reference, is derived:
/// D = 1 - A - B - C.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct MixEntry {
    /// Probability A of a sequential reference.
    pub sequential: f64,
    /// Probability B of a backward reference.
    pub backward: f64,
    /// Probability C of a jump reference.
    pub jump: f64,
}

impl MixEntry {
    /// Creates a mix row from the three independent probabilities.
    pub fn new(sequential: f64, backward: f64, jump: f64) -> Self {
        Self {
            sequential,
            backward,
            jump,
        }
    }

    /// Rejects rows with negative probabilities or probabilities summing
    /// past 1. `pid` is only used to label the error.
    pub fn validate(&self, pid: u32) -> Result<()> {
        let well_formed = self.sequential >= 0.0
            && self.backward >= 0.0
            && self.jump >= 0.0
            && self.sequential + self.backward + self.jump <= 1.0;
        if well_formed {
            Ok(())
        } else {
            Err(SimError::InvalidJobMix {
                pid,
                sequential: self.sequential,
                backward: self.backward,
                jump: self.jump,
            })
        }
    }
}

/// Job-mix selection: a numbered preset or an explicit table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum MixSpec {
    /// One of the four standard workloads (see [`MixSpec::resolve`]).
    Preset(u32),
    /// An explicit probability table.
    Table(MixTable),
}

impl Default for MixSpec {
    fn default() -> Self {
        Self::Preset(defaults::JOB_MIX_PRESET)
    }
}

/// An explicit job-mix table.
///
/// When `uniform` is true the table holds a single row shared by all
/// `processes`; otherwise it holds one row per process, in pid order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MixTable {
    /// Whether one row is shared by every process.
    pub uniform: bool,
    /// Number of processes in the run.
    pub processes: u32,
    /// Probability rows (one, or one per process).
    pub rows: Vec<MixEntry>,
}

/// A job mix resolved to its final shape: a validated row set plus the
/// process count it implies.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedMix {
    /// Whether row 0 is shared by every process.
    pub uniform: bool,
    /// Validated probability rows.
    pub rows: Vec<MixEntry>,
    /// Number of processes in the run.
    pub process_count: u32,
}

impl MixSpec {
    /// Resolves this selection into a concrete, validated row set.
    ///
    /// The presets reproduce the four standard workloads:
    /// 1. one fully sequential process;
    /// 2. four fully sequential processes;
    /// 3. four fully random processes;
    /// 4. four processes with distinct mixed distributions.
    ///
    /// # Errors
    ///
    /// `UnknownPreset` for a preset outside 1 through 4, `MixTableShape` for a
    /// table whose row count disagrees with its process count, and
    /// `InvalidJobMix` for any malformed row.
    pub fn resolve(&self) -> Result<ResolvedMix> {
        let resolved = match self {
            Self::Preset(1) => ResolvedMix {
                uniform: true,
                rows: vec![MixEntry::new(1.0, 0.0, 0.0)],
                process_count: 1,
            },
            Self::Preset(2) => ResolvedMix {
                uniform: true,
                rows: vec![MixEntry::new(1.0, 0.0, 0.0)],
                process_count: 4,
            },
            Self::Preset(3) => ResolvedMix {
                uniform: true,
                rows: vec![MixEntry::new(0.0, 0.0, 0.0)],
                process_count: 4,
            },
            Self::Preset(4) => ResolvedMix {
                uniform: false,
                rows: vec![
                    MixEntry::new(0.75, 0.25, 0.0),
                    MixEntry::new(0.75, 0.0, 0.25),
                    MixEntry::new(0.75, 0.125, 0.125),
                    MixEntry::new(0.5, 0.125, 0.125),
                ],
                process_count: 4,
            },
            Self::Preset(n) => return Err(SimError::UnknownPreset(*n)),
            Self::Table(table) => {
                let expected_rows = if table.uniform {
                    1
                } else {
                    table.processes as usize
                };
                if table.processes == 0 {
                    return Err(SimError::ZeroParameter { name: "processes" });
                }
                if table.rows.len() != expected_rows {
                    return Err(SimError::MixTableShape {
                        rows: table.rows.len(),
                        processes: table.processes,
                    });
                }
                ResolvedMix {
                    uniform: table.uniform,
                    rows: table.rows.clone(),
                    process_count: table.processes,
                }
            }
        };

        for (i, row) in resolved.rows.iter().enumerate() {
            row.validate(i as u32 + 1)?;
        }

        Ok(resolved)
    }
}

/// Root configuration structure containing all run settings.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use pagesim_core::config::{Algorithm, Config};
///
/// let config = Config::default();
/// assert_eq!(config.machine.algorithm, Algorithm::Lru);
/// assert_eq!(config.machine.machine_size / config.machine.page_size, 4);
/// ```
///
/// Deserializing from JSON:
///
/// ```
/// use pagesim_core::config::{Algorithm, Config, MixSpec};
///
/// let json = r#"{
///     "machine": {
///         "machine_size": 100,
///         "page_size": 25,
///         "algorithm": "fifo"
///     },
///     "workload": {
///         "process_size": 64,
///         "reference_count": 500,
///         "job_mix": 4
///     }
/// }"#;
///
/// let config: Config = serde_json::from_str(json).unwrap();
/// assert_eq!(config.machine.algorithm, Algorithm::Fifo);
/// assert_eq!(config.workload.job_mix, MixSpec::Preset(4));
/// assert_eq!(config.workload.quantum, 3);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Machine geometry and replacement algorithm.
    pub machine: MachineConfig,
    /// Workload shape: process size, reference counts, job mix, quantum.
    pub workload: WorkloadConfig,
    /// Tracing switches.
    #[serde(default)]
    pub general: GeneralConfig,
}

impl Config {
    /// Validates the whole configuration.
    ///
    /// # Errors
    ///
    /// Any of the configuration-class errors in [`SimError`]; the first
    /// violation found is returned.
    pub fn validate(&self) -> Result<()> {
        if self.machine.page_size == 0
            || self.machine.machine_size == 0
            || self.machine.machine_size % self.machine.page_size != 0
        {
            return Err(SimError::InvalidGeometry {
                machine_size: self.machine.machine_size,
                page_size: self.machine.page_size,
            });
        }
        if self.workload.process_size == 0 {
            return Err(SimError::ZeroParameter {
                name: "process_size",
            });
        }
        if self.workload.reference_count == 0 {
            return Err(SimError::ZeroParameter {
                name: "reference_count",
            });
        }
        if self.workload.quantum == 0 {
            return Err(SimError::ZeroParameter { name: "quantum" });
        }
        self.workload.job_mix.resolve().map(|_| ())
    }
}

/// Machine geometry and replacement algorithm.
#[derive(Debug, Clone, Deserialize)]
pub struct MachineConfig {
    /// Total physical memory in words.
    #[serde(default = "MachineConfig::default_machine_size")]
    pub machine_size: u64,

    /// Page (and frame) size in words.
    #[serde(default = "MachineConfig::default_page_size")]
    pub page_size: u64,

    /// Replacement algorithm run on every fault against a full table.
    #[serde(default)]
    pub algorithm: Algorithm,
}

impl MachineConfig {
    fn default_machine_size() -> u64 {
        defaults::MACHINE_SIZE
    }

    fn default_page_size() -> u64 {
        defaults::PAGE_SIZE
    }
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            machine_size: defaults::MACHINE_SIZE,
            page_size: defaults::PAGE_SIZE,
            algorithm: Algorithm::default(),
        }
    }
}

/// Workload shape: how many processes reference how much memory, how often.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkloadConfig {
    /// Virtual address space size of each process, in words.
    #[serde(default = "WorkloadConfig::default_process_size")]
    pub process_size: u64,

    /// References each process issues before retiring.
    #[serde(default = "WorkloadConfig::default_reference_count")]
    pub reference_count: u64,

    /// Job mix: preset number or explicit table.
    #[serde(default)]
    pub job_mix: MixSpec,

    /// References per process per round-robin turn.
    #[serde(default = "WorkloadConfig::default_quantum")]
    pub quantum: u64,
}

impl WorkloadConfig {
    fn default_process_size() -> u64 {
        defaults::PROCESS_SIZE
    }

    fn default_reference_count() -> u64 {
        defaults::REFERENCE_COUNT
    }

    fn default_quantum() -> u64 {
        defaults::QUANTUM
    }
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            process_size: defaults::PROCESS_SIZE,
            reference_count: defaults::REFERENCE_COUNT,
            job_mix: MixSpec::default(),
            quantum: defaults::QUANTUM,
        }
    }
}

/// Tracing switches, threaded into the components that honor them.
///
/// These replace run-wide mutable debug globals: each component receives the
/// flag it needs at construction and the flags live exactly as long as one
/// run.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct GeneralConfig {
    /// Log every pager decision (hit, fault, free fill, eviction).
    #[serde(default)]
    pub trace_paging: bool,

    /// Log every value consumed from the random sequence.
    #[serde(default)]
    pub trace_draws: bool,
}

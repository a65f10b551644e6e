use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub pipeline: PipelineConfig,
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// When the check flow reports progress relative to its debounce window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckProgress {
    /// Emit progress as soon as a check action is accepted.
    #[default]
    Immediate,
    /// Emit progress only when the debounced check actually starts.
    AfterDebounce,
}

/// Pipeline tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Quiet interval before an email check runs, in milliseconds (default: 200).
    #[serde(default = "default_check_debounce_ms")]
    pub check_debounce_ms: u64,
    /// Capacity of the shared event broadcast (default: 64).
    #[serde(default = "default_event_capacity")]
    pub event_capacity: usize,
    /// Capacity of the state broadcast each sink reads from (default: 64).
    #[serde(default = "default_state_capacity")]
    pub state_capacity: usize,
    /// Ordering of the check flow's progress state (default: immediate).
    #[serde(default)]
    pub check_progress: CheckProgress,
}

/// Simulated service behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Latency of a successful account creation, in milliseconds (default: 5000).
    #[serde(default = "default_create_latency_ms")]
    pub create_latency_ms: u64,
    /// Latency of an email check, in milliseconds (default: 0).
    #[serde(default)]
    pub check_latency_ms: u64,
    /// Shortest accepted password, in characters (default: 3).
    #[serde(default = "default_min_password_len")]
    pub min_password_len: usize,
}

/// Logging output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_check_debounce_ms() -> u64 {
    200
}

fn default_event_capacity() -> usize {
    64
}

fn default_state_capacity() -> usize {
    64
}

fn default_create_latency_ms() -> u64 {
    5000
}

fn default_min_password_len() -> usize {
    3
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            check_debounce_ms: default_check_debounce_ms(),
            event_capacity: default_event_capacity(),
            state_capacity: default_state_capacity(),
            check_progress: CheckProgress::default(),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            create_latency_ms: default_create_latency_ms(),
            check_latency_ms: 0,
            min_password_len: default_min_password_len(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

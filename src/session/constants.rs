// Constants for sessions, the front end and the benchmark

/// Fastest accepted tick interval in milliseconds
pub const MIN_TICK_MS: u64 = 10;

/// Slowest accepted tick interval in milliseconds
pub const MAX_TICK_MS: u64 = 500;

/// Tick interval a new session starts with
pub const DEFAULT_TICK_MS: u64 = 80;

/// Increment used by the faster/slower keys
pub const TICK_STEP_MS: u64 = 10;

/// Length of generated arrays
pub const DEFAULT_ARRAY_SIZE: usize = 50;

/// Generated random values fall in `1..=RANDOM_VALUE_MAX`
pub const RANDOM_VALUE_MAX: i32 = 100;

/// Length of the benchmark array
pub const BENCH_SIZE: usize = 10_000;

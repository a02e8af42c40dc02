/// Game rules
pub const EXPECTED_GAME_VALUE: f64 = -1.0 / 18.0; // First player's equilibrium value in three-card Kuhn poker

/// Training configuration
pub const TRAIN_ITERATIONS: usize = 200_000;
pub const NUM_WORKERS: usize = 4; // Iterations are sharded across workers and the stores merged afterwards
pub const PROGRESS_TICK: usize = 1_000; // How often each worker bumps the shared progress bar

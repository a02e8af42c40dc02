use kuhn_cfr::config::{EXPECTED_GAME_VALUE, NUM_WORKERS, TRAIN_ITERATIONS};
use kuhn_cfr::{train_sharded, Trainer};

fn main() {
    let json = std::env::args().any(|arg| arg == "--json");

    let report = if NUM_WORKERS > 1 {
        train_sharded(TRAIN_ITERATIONS, NUM_WORKERS, rand::random())
    } else {
        Trainer::new().train(TRAIN_ITERATIONS)
    };

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).expect("Failed to serialise report")
        );
    } else {
        println!("Iterations: {}", TRAIN_ITERATIONS);
        print!("{}", report);
        println!(
            "Distance from equilibrium value: {:.4}",
            (report.game_value - EXPECTED_GAME_VALUE).abs()
        );
    }
}

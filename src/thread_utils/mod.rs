mod rng;

pub use rng::with_rng;

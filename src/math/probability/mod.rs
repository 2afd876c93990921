pub mod seed;

pub use seed::source::{RandomSource, SeededRandom, resolve_seed};

//! Инфраструктура вокруг движка:
//! - реализации RNG для перемешивания;
//! - настройка tracing для бинарников и тестов.

pub mod logging;
pub mod rng;

pub use logging::{init_tracing, test_tracing};
pub use rng::{DeterministicRng, SystemRng};

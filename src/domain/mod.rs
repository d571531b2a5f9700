//! Доменная модель стола: карты, руки, фишки, игроки, колода,
//! общие карты и статическая конфигурация стола.

pub mod card;
pub mod chips;
pub mod common_pool;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod player;
pub mod round;
pub mod table;

/// Постоянный id игрока, начиная с 1.
pub type PlayerId = u32;

pub use card::*;
pub use chips::*;
pub use common_pool::*;
pub use deck::*;
pub use errors::*;
pub use hand::*;
pub use player::*;
pub use round::*;
pub use table::*;

//! Внешний API стола.
//!
//! - команды (commands.rs): всё, что меняет состояние;
//! - запросы (queries.rs): представления стола только для чтения;
//! - DTO (dto.rs): сериализуемые структуры для фронтенда;
//! - ошибки (errors.rs): то, что видит клиент.

pub mod commands;
pub mod dto;
pub mod errors;
pub mod queries;

pub use commands::*;
pub use dto::*;
pub use errors::*;
pub use queries::*;

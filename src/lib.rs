//! Пошаговый карточный стол: рассадка, раздача, фазы торговли, выплата банка
//! и выбывание, пока все фишки не окажутся у одного игрока.

pub mod api;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;

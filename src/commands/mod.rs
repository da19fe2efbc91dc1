//! Command implementations for roadnet

pub mod cities;
pub mod dispatch;
pub mod format;
pub mod matrix;
pub mod paths;
pub mod spanning;
pub mod traverse;

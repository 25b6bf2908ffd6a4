//! Command implementations for trellis

pub mod build;
pub mod dispatch;
pub mod helpers;
pub mod matrix;
pub mod shortest;
pub mod show;
pub mod traverse;

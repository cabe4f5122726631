pub mod chart;
pub mod cli;
pub mod document;
pub mod domain;
pub mod error;
pub mod gate;
pub mod index;
pub mod logging;
pub mod ui;

pub use error::{ChartCheckError, Result};

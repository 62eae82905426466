//! Plot cache benchmark output: cycles per access against buffer size.

pub mod config;
pub mod data;
pub mod error;
pub mod plot;
pub mod plotter;

pub use config::PlotConfig;
pub use data::model::Measurements;
pub use error::{Error, Result};
pub use plot::Figure;

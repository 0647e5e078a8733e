pub mod cli;
pub mod error;
pub mod logging;
pub mod render;
pub mod run;
pub mod selection;

pub mod config;
pub mod error;
pub mod frame;
pub mod framebuffer;
pub mod noise;
pub mod present;
pub mod run_state;
pub mod util;
pub mod viewport;

pub use error::{Error, Result};

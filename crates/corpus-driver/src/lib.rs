#![warn(clippy::pedantic)]

pub mod config;
pub mod driver;
pub mod error;
pub mod render_detailed;
pub mod render_json;
pub mod render_plain;

pub use config::{OutputMode, RenderConfig};
pub use driver::{CaseRenderer, DefaultRenderer};
pub use error::RenderError;

#![allow(clippy::many_single_char_names)]

pub mod camera;
mod error;
pub mod lighting;
pub mod material;
pub mod math;
pub mod object;
pub mod pattern;
pub mod scene;
pub mod showcase;
pub mod texture;

pub use error::RenderError;

pub mod config;
pub mod point;
pub mod ring;

pub use config::*;
pub use point::*;
pub use ring::*;

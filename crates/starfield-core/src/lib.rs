pub mod color;
pub mod config;
pub mod connection;
pub mod constants;
pub mod constellation;
pub mod driver;
pub mod error;
pub mod particle;
pub mod scene;
pub mod surface;

pub use color::*;
pub use config::*;
pub use connection::*;
pub use constants::*;
pub use driver::*;
pub use error::*;
pub use particle::*;
pub use scene::*;
pub use surface::*;

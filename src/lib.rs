pub mod config;
pub mod controller;
pub mod delegate;
pub mod error;
pub mod events;
pub mod geometry;
pub mod host;
pub mod processing {
    pub mod fit;
    pub mod gesture;
    pub mod offset;
    pub mod resize;
}
pub mod tasks {
    pub mod viewport;
}

pub use config::{FitMode, OffsetMode, ViewportConfig};
pub use controller::{ZoomState, ZoomViewportController};
pub use error::{Error, Result};

pub mod gesture;
pub mod state;
pub mod widget;

pub use widget::{Carousel, Key};

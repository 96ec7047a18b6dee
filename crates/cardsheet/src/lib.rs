pub mod compose;
pub mod layout;

mod card;
mod color;
mod geometry;
mod library;
mod options;
mod project;
mod types;

pub use card::{Card, CardStack, Slot};
pub use color::CardColor;
pub use compose::{compose_card, composed_size};
pub use geometry::{MAX_UPSCALE, SHEET_DPI, sheet_pixel_size, upscale_factor};
pub use library::{ImageId, Library, SourceImage};
pub use options::{LayoutOptions, MAX_PADDING, MAX_ROUNDING};
pub use project::Project;
pub use types::*;

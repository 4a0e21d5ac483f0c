pub mod area;
pub mod border;
pub mod color;
pub mod error;
pub mod geometry;
pub mod merge;
pub mod overpaint;
pub mod sweep;

pub use area::{BlockArea, BorderKind, Positioning};
pub use border::{BorderMode, BorderProps, BorderStyle};
pub use color::Rgba;
pub use error::{Error, Result};
pub use geometry::{Point, Rect};
pub use merge::MergeOptions;
pub use overpaint::overpaint_borders;

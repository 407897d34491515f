mod categories;
pub use categories::*;

mod config;
pub use config::*;

mod error;
pub use error::*;

mod geometry;
pub use geometry::*;

mod grid;
pub use grid::*;

mod members;
pub use members::*;

pub(crate) mod metrics;

mod pdf;
pub use pdf::*;

mod record;
pub use record::*;

mod render;
pub use render::*;

mod surface;
pub use surface::*;

mod units;
pub use units::*;

/// Re-export PDF-writer functionality, mostly for custom [pdf_writer::Content] generation
pub use pdf_writer;

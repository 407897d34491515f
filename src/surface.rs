use crate::error::EtiquetteError;
use crate::units::Mm;

/// The three type faces a label uses
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FontStyle {
    Regular,
    Bold,
    Italic,
}

/// Horizontal alignment of text inside its cell
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// A drawing surface the label renderer emits onto.
///
/// Coordinates are top-down, in millimetres from the top-left corner of
/// the current page; implementations convert to their native space. The
/// renderer calls `begin_page` before the first label of every page,
/// never inspects the surface, and propagates any failure unchanged.
pub trait LabelSurface {
    /// Start a fresh page; subsequent draws land on it
    fn begin_page(&mut self) -> Result<(), EtiquetteError>;

    /// Stroke a rectangle frame with top-left corner (x, y)
    fn draw_rect(&mut self, x: Mm, y: Mm, w: Mm, h: Mm) -> Result<(), EtiquetteError>;

    /// Select the font used by subsequent `draw_text_cell` calls
    fn set_font(&mut self, style: FontStyle, size: f32) -> Result<(), EtiquetteError>;

    /// Draw a single line of text inside the cell with top-left corner
    /// (x, y), vertically centred in `h`, aligned per `align`
    fn draw_text_cell(
        &mut self,
        x: Mm,
        y: Mm,
        w: Mm,
        h: Mm,
        text: &str,
        align: Align,
    ) -> Result<(), EtiquetteError>;

    /// Close the document and return its byte stream
    fn finalize(self) -> Result<Vec<u8>, EtiquetteError>
    where
        Self: Sized;
}

use crate::geometry::LabelGeometry;
use crate::units::Mm;

/// The top-left corner of one label cell, plus whether a new page must be
/// started before drawing into it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CellOrigin {
    pub x: Mm,
    pub y: Mm,
    pub page_break: bool,
}

/// Compute where the `index`-th label of a pass lands on the sheet.
///
/// The index is the only state the grid needs: column, row and page breaks
/// all derive from it, which is why a render pass must visit records in
/// input order. `page_break` is true exactly when `index` is a multiple of
/// the per-page capacity, index 0 included — the first page is emitted the
/// same way as any later one.
pub fn cell_origin(index: usize, geometry: &LabelGeometry) -> CellOrigin {
    let page_break = index % geometry.per_page() == 0;

    let col = index % geometry.cols as usize;
    let row = (index / geometry.cols as usize) % geometry.rows as usize;

    let x = geometry.margin_h + (geometry.label_width + geometry.hspacing) * col as f32;
    let y = geometry.margin_v + (geometry.label_height + geometry.vspacing) * row as f32;

    CellOrigin { x, y, page_break }
}

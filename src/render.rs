use crate::error::EtiquetteError;
use crate::geometry::LabelGeometry;
use crate::grid::cell_origin;
use crate::record::LabelRecord;
use crate::surface::{Align, FontStyle, LabelSurface};
use tracing::debug;

/// Render one label sheet pass: every record in `records` becomes exactly
/// one label, visited strictly in input order. Pages are started whenever
/// the grid calls for one, so an empty input produces zero pages.
///
/// Surface failures are returned unchanged; no drawing is retried.
pub fn render_labels<S: LabelSurface>(
    surface: &mut S,
    records: &[LabelRecord],
    geometry: &LabelGeometry,
) -> Result<(), EtiquetteError> {
    let line_h = geometry.line_height();
    let size = geometry.font_size;
    let w = geometry.label_width;
    let h = geometry.label_height;

    for (index, record) in records.iter().enumerate() {
        let cell = cell_origin(index, geometry);
        if cell.page_break {
            surface.begin_page()?;
        }

        surface.draw_rect(cell.x, cell.y, w, h)?;

        let resolved = record.resolved_address();

        surface.set_font(FontStyle::Bold, size)?;
        surface.draw_text_cell(cell.x, cell.y, w, line_h, &record.full_name, Align::Left)?;

        surface.set_font(FontStyle::Regular, size)?;
        surface.draw_text_cell(
            cell.x,
            cell.y + line_h,
            w,
            line_h,
            resolved.address,
            Align::Left,
        )?;
        surface.draw_text_cell(
            cell.x,
            cell.y + line_h * 2.0,
            w,
            line_h,
            resolved.address_continuation,
            Align::Left,
        )?;

        surface.set_font(FontStyle::Bold, size)?;
        let zip_town = format!("{} - {}", resolved.zipcode, resolved.town);
        surface.draw_text_cell(
            cell.x,
            cell.y + line_h * 3.0,
            w,
            line_h,
            &zip_town,
            Align::Left,
        )?;

        // the country is always the record's own, even when the rest of
        // the address came from the parent
        surface.set_font(FontStyle::Italic, size)?;
        surface.draw_text_cell(
            cell.x,
            cell.y + line_h * 4.0,
            w,
            line_h,
            &record.country,
            Align::Right,
        )?;
    }

    debug!(labels = records.len(), "label pass finished");
    Ok(())
}

use crate::units::Mm;

/// Geometry of one label sheet: page margins, label size, spacing between
/// labels, the column/row grid, and the font size used for label text.
///
/// All lengths are normalized to whole millimetres when the geometry is
/// built, so every downstream computation works on a clean integer grid.
/// The struct is read-only for the duration of a render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelGeometry {
    /// Horizontal page margin; also the x origin of the first column
    pub margin_h: Mm,
    /// Vertical page margin; also the y origin of the first row
    pub margin_v: Mm,
    pub label_width: Mm,
    pub label_height: Mm,
    /// Horizontal gap between two columns of labels
    pub hspacing: Mm,
    /// Vertical gap between two rows of labels
    pub vspacing: Mm,
    pub cols: u32,
    pub rows: u32,
    /// Font size in points for all label text
    pub font_size: f32,
}

impl LabelGeometry {
    /// Build a geometry, rounding every length to the nearest whole
    /// millimetre. `cols` and `rows` must be at least 1; that is a caller
    /// precondition and is not validated here.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        margin_h: Mm,
        margin_v: Mm,
        label_width: Mm,
        label_height: Mm,
        hspacing: Mm,
        vspacing: Mm,
        cols: u32,
        rows: u32,
        font_size: f32,
    ) -> LabelGeometry {
        LabelGeometry {
            margin_h: margin_h.round(),
            margin_v: margin_v.round(),
            label_width: label_width.round(),
            label_height: label_height.round(),
            hspacing: hspacing.round(),
            vspacing: vspacing.round(),
            cols,
            rows,
            font_size,
        }
    }

    /// How many labels fit on one page
    pub fn per_page(&self) -> usize {
        (self.cols * self.rows) as usize
    }

    /// Height of one text line inside a label. A label always holds five
    /// lines: name, two address lines, zip/town, country.
    pub fn line_height(&self) -> Mm {
        (self.label_height / 5.0).round()
    }

    /// The page size implied by the grid: margins on both sides plus the
    /// labels and the gaps between them.
    pub fn page_size(&self) -> (Mm, Mm) {
        let width = self.margin_h * 2.0
            + self.label_width * self.cols as f32
            + self.hspacing * (self.cols - 1) as f32;
        let height = self.margin_v * 2.0
            + self.label_height * self.rows as f32
            + self.vspacing * (self.rows - 1) as f32;
        (width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> LabelGeometry {
        LabelGeometry::new(
            Mm(10.0),
            Mm(10.0),
            Mm(90.0),
            Mm(40.0),
            Mm(10.0),
            Mm(5.0),
            2,
            7,
            9.0,
        )
    }

    #[test]
    fn lengths_are_rounded_once_at_construction() {
        let geo = LabelGeometry::new(
            Mm(10.4),
            Mm(9.6),
            Mm(89.5),
            Mm(40.2),
            Mm(10.0),
            Mm(4.5),
            2,
            7,
            9.0,
        );
        assert_eq!(geo.margin_h, Mm(10.0));
        assert_eq!(geo.margin_v, Mm(10.0));
        assert_eq!(geo.label_width, Mm(90.0));
        assert_eq!(geo.label_height, Mm(40.0));
        assert_eq!(geo.vspacing, Mm(5.0));
    }

    #[test]
    fn five_lines_per_label() {
        assert_eq!(geometry().line_height(), Mm(8.0));
    }

    #[test]
    fn per_page_is_cols_times_rows() {
        assert_eq!(geometry().per_page(), 14);
    }

    #[test]
    fn page_size_covers_margins_labels_and_gaps() {
        let (w, h) = geometry().page_size();
        // 10 + 90 + 10 + 90 + 10
        assert_eq!(w, Mm(210.0));
        // 10 + 7*40 + 6*5 + 10
        assert_eq!(h, Mm(330.0));
    }
}

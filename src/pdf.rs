use crate::error::EtiquetteError;
use crate::geometry::LabelGeometry;
use crate::metrics;
use crate::surface::{Align, FontStyle, LabelSurface};
use crate::units::{Mm, Pt};
use chrono::{DateTime, Datelike, Local, Timelike};
use pdf_writer::{Content, Date, Finish, Name, Pdf, Rect, Ref, Str, TextStr};

/// Frame colour around each label, the 160/255 grey the original sheets
/// used
const FRAME_GREY: f32 = 160.0 / 255.0;
const FRAME_LINE_WIDTH: f32 = 0.5;

/// The standard-14 faces backing the three label font styles. They are
/// never embedded; the AFM widths in [crate::metrics] cover measurement.
const FACES: [(FontStyle, &[u8]); 3] = [
    (FontStyle::Regular, b"Helvetica"),
    (FontStyle::Bold, b"Helvetica-Bold"),
    (FontStyle::Italic, b"Helvetica-Oblique"),
];

fn font_index(style: FontStyle) -> usize {
    match style {
        FontStyle::Regular => 0,
        FontStyle::Bold => 1,
        FontStyle::Italic => 2,
    }
}

/// Title, subject and keywords written to the document info dictionary.
/// Empty strings are simply not written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentMeta {
    pub title: String,
    pub subject: String,
    pub keywords: String,
}

/// A [LabelSurface] that renders to a PDF document via [pdf_writer].
///
/// The page size is fully determined by the geometry: margins on all
/// sides plus the label grid and its gaps. Content streams are buffered
/// per page and the document is assembled once, in [PdfSurface::finalize].
pub struct PdfSurface {
    page_width: Pt,
    page_height: Pt,
    pages: Vec<Content>,
    font: (FontStyle, f32),
    meta: DocumentMeta,
}

impl PdfSurface {
    pub fn new(geometry: &LabelGeometry, meta: DocumentMeta) -> PdfSurface {
        let (width, height) = geometry.page_size();
        PdfSurface {
            page_width: width.into(),
            page_height: height.into(),
            pages: Vec::new(),
            font: (FontStyle::Regular, geometry.font_size),
            meta,
        }
    }

    /// How many pages have been started so far
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn current_page(&mut self) -> Result<&mut Content, EtiquetteError> {
        if self.pages.is_empty() {
            self.begin_page()?;
        }
        // begin_page just pushed one if there was none
        Ok(self.pages.last_mut().unwrap())
    }
}

impl LabelSurface for PdfSurface {
    fn begin_page(&mut self) -> Result<(), EtiquetteError> {
        let mut content = Content::new();
        content.set_stroke_rgb(FRAME_GREY, FRAME_GREY, FRAME_GREY);
        content.set_line_width(FRAME_LINE_WIDTH);
        self.pages.push(content);
        Ok(())
    }

    fn draw_rect(&mut self, x: Mm, y: Mm, w: Mm, h: Mm) -> Result<(), EtiquetteError> {
        let (x, y): (Pt, Pt) = (x.into(), y.into());
        let (w, h): (Pt, Pt) = (w.into(), h.into());
        // flip to the PDF's bottom-up space; the rect origin is its
        // lower-left corner
        let bottom = self.page_height - y - h;
        let content = self.current_page()?;
        content.rect(x.0, bottom.0, w.0, h.0);
        content.stroke();
        Ok(())
    }

    fn set_font(&mut self, style: FontStyle, size: f32) -> Result<(), EtiquetteError> {
        self.font = (style, size);
        Ok(())
    }

    fn draw_text_cell(
        &mut self,
        x: Mm,
        y: Mm,
        w: Mm,
        h: Mm,
        text: &str,
        align: Align,
    ) -> Result<(), EtiquetteError> {
        if text.is_empty() {
            return Ok(());
        }

        let (style, size) = self.font;
        let (x, y): (Pt, Pt) = (x.into(), y.into());
        let (w, h): (Pt, Pt) = (w.into(), h.into());

        let text_x = match align {
            Align::Left => x,
            Align::Right => x + w - metrics::text_width(text, style, size),
        };
        // centre the cap-height box of the line inside the cell
        let cell_top = self.page_height - y;
        let baseline = cell_top - (h + Pt(metrics::CAP_HEIGHT * size)) / 2.0;

        let encoded = winansi(text);
        let content = self.current_page()?;
        content.begin_text();
        content.set_font(Name(format!("F{}", font_index(style)).as_bytes()), size);
        content.next_line(text_x.0, baseline.0);
        content.show(Str(&encoded));
        content.end_text();
        Ok(())
    }

    fn finalize(self) -> Result<Vec<u8>, EtiquetteError> {
        let PdfSurface {
            page_width,
            page_height,
            pages,
            meta,
            ..
        } = self;

        // a label document's objects are strictly sequential: catalog,
        // page tree, info, the faces, then a page/content pair per page
        let catalog_id = Ref::new(1);
        let page_tree_id = Ref::new(2);
        let info_id = Ref::new(3);
        let first_page = 4 + FACES.len();
        let font_id = |index: usize| Ref::new((4 + index) as i32);
        let page_id = |index: usize| Ref::new((first_page + 2 * index) as i32);
        let content_id = |index: usize| Ref::new((first_page + 2 * index + 1) as i32);

        let mut writer = Pdf::new();

        let mut info = writer.document_info(info_id);
        if !meta.title.is_empty() {
            info.title(TextStr(&meta.title));
        }
        if !meta.subject.is_empty() {
            info.subject(TextStr(&meta.subject));
        }
        if !meta.keywords.is_empty() {
            info.keywords(TextStr(&meta.keywords));
        }
        info.creator(TextStr(concat!(
            env!("CARGO_PKG_NAME"),
            " v",
            env!("CARGO_PKG_VERSION")
        )));
        info.creation_date(creation_date(Local::now()));
        info.finish();

        writer
            .pages(page_tree_id)
            .count(pages.len() as i32)
            .kids((0..pages.len()).map(page_id));

        for (i, (_, base_font)) in FACES.into_iter().enumerate() {
            let mut font = writer.type1_font(font_id(i));
            font.base_font(Name(base_font));
            font.encoding_predefined(Name(b"WinAnsiEncoding"));
        }

        let media_box = Rect {
            x1: 0.0,
            y1: 0.0,
            x2: page_width.0,
            y2: page_height.0,
        };
        for (i, content) in pages.into_iter().enumerate() {
            let mut page = writer.page(page_id(i));
            page.media_box(media_box);
            page.parent(page_tree_id);

            let mut resources = page.resources();
            let mut resource_fonts = resources.fonts();
            for fi in 0..FACES.len() {
                resource_fonts.pair(Name(format!("F{fi}").as_bytes()), font_id(fi));
            }
            resource_fonts.finish();
            resources.finish();

            page.contents(content_id(i));
            page.finish();

            writer.stream(content_id(i), &content.finish());
        }

        writer.catalog(catalog_id).pages(page_tree_id);

        Ok(writer.finish())
    }
}

/// The creation timestamp for the info dictionary, with the local UTC
/// offset split into its hour and minute parts.
fn creation_date(now: DateTime<Local>) -> Date {
    let (offset_hours, offset_minutes) = offset_parts(now.offset().local_minus_utc());
    Date::new(now.year() as u16)
        .month(now.month() as u8)
        .day(now.day() as u8)
        .hour(now.hour() as u8)
        .minute(now.minute() as u8)
        .second(now.second() as u8)
        .utc_offset_hour(offset_hours)
        .utc_offset_minute(offset_minutes)
}

/// Split a UTC offset in seconds into signed hours and unsigned minutes,
/// the two fields a PDF date carries
fn offset_parts(offset_seconds: i32) -> (i8, u8) {
    let hours = (offset_seconds / 3600) as i8;
    let minutes = (((offset_seconds % 3600) / 60).unsigned_abs()) as u8;
    (hours, minutes)
}

/// Encode text for the WinAnsi (Windows-1252) font encoding. Characters
/// without a WinAnsi code point degrade to '?'.
fn winansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| match ch {
            '€' => 0x80,
            '‚' => 0x82,
            '„' => 0x84,
            '…' => 0x85,
            '†' => 0x86,
            '‡' => 0x87,
            '‰' => 0x89,
            'Š' => 0x8A,
            '‹' => 0x8B,
            'Œ' => 0x8C,
            'Ž' => 0x8E,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '™' => 0x99,
            'š' => 0x9A,
            '›' => 0x9B,
            'œ' => 0x9C,
            'ž' => 0x9E,
            'Ÿ' => 0x9F,
            // 0x80..=0x9F are unassigned in WinAnsi outside the
            // mappings above
            ch if (ch as u32) < 0x80 || (0xA0..=0xFF).contains(&(ch as u32)) => ch as u32 as u8,
            _ => b'?',
        })
        .collect()
}

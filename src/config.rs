use crate::error::EtiquetteError;
use crate::geometry::LabelGeometry;
use crate::units::Mm;
use serde::Deserialize;
use std::path::Path;

/// Label-sheet preferences, as edited on the preferences screen and
/// stored as JSON. Every field has the application default, so a partial
/// (or empty) document yields a usable geometry.
///
/// All lengths are millimetres; `font_size` is in points.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub margin_h: f32,
    pub margin_v: f32,
    pub label_width: f32,
    pub label_height: f32,
    pub hspacing: f32,
    pub vspacing: f32,
    pub cols: u32,
    pub rows: u32,
    pub font_size: f32,
}

impl Default for Preferences {
    fn default() -> Preferences {
        Preferences {
            margin_h: 10.0,
            margin_v: 10.0,
            label_width: 90.0,
            label_height: 35.0,
            hspacing: 10.0,
            vspacing: 5.0,
            cols: 2,
            rows: 7,
            font_size: 9.0,
        }
    }
}

impl Preferences {
    /// Read preferences from a JSON file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Preferences, EtiquetteError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// The label geometry these preferences describe, with lengths
    /// normalized to whole millimetres
    pub fn geometry(&self) -> LabelGeometry {
        LabelGeometry::new(
            Mm(self.margin_h),
            Mm(self.margin_v),
            Mm(self.label_width),
            Mm(self.label_height),
            Mm(self.hspacing),
            Mm(self.vspacing),
            self.cols,
            self.rows,
            self.font_size,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_fields_take_defaults() {
        let prefs: Preferences = serde_json::from_str(r#"{"cols": 3, "rows": 8}"#).unwrap();
        assert_eq!(prefs.cols, 3);
        assert_eq!(prefs.rows, 8);
        assert_eq!(prefs.label_width, 90.0);
        assert_eq!(prefs.font_size, 9.0);
    }

    #[test]
    fn empty_document_is_the_default_sheet() {
        let prefs: Preferences = serde_json::from_str("{}").unwrap();
        assert_eq!(prefs, Preferences::default());
    }

    #[test]
    fn geometry_normalizes_lengths() {
        let prefs: Preferences =
            serde_json::from_str(r#"{"label_width": 89.6, "margin_h": 10.2}"#).unwrap();
        let geo = prefs.geometry();
        assert_eq!(geo.label_width, Mm(90.0));
        assert_eq!(geo.margin_h, Mm(10.0));
    }
}

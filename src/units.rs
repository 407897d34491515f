use derive_more::{Add, AddAssign, Display, From, Into, Sub};

/// A measurement in millimetres. Label geometry is configured in
/// millimetres, matching the page unit the preferences screen uses.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, AddAssign, Sub, From, Into, Display,
)]
pub struct Mm(pub f32);

/// A measurement in PDF points (1/72 of an inch).
#[derive(
    Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, AddAssign, Sub, From, Into, Display,
)]
pub struct Pt(pub f32);

impl std::iter::Sum for Pt {
    fn sum<I: Iterator<Item = Pt>>(iter: I) -> Pt {
        Pt(iter.map(|pt| pt.0).sum())
    }
}

impl Mm {
    /// Round to the nearest whole millimetre. Geometry inputs are
    /// normalized with this once, at construction, to keep a clean
    /// integer grid.
    pub fn round(self) -> Mm {
        Mm(self.0.round())
    }
}

impl From<Mm> for Pt {
    fn from(mm: Mm) -> Pt {
        Pt(mm.0 * 72.0 / 25.4)
    }
}

impl std::ops::Mul<f32> for Mm {
    type Output = Mm;

    fn mul(self, rhs: f32) -> Mm {
        Mm(self.0 * rhs)
    }
}

impl std::ops::Div<f32> for Mm {
    type Output = Mm;

    fn div(self, rhs: f32) -> Mm {
        Mm(self.0 / rhs)
    }
}

impl std::ops::Mul<f32> for Pt {
    type Output = Pt;

    fn mul(self, rhs: f32) -> Pt {
        Pt(self.0 * rhs)
    }
}

impl std::ops::Div<f32> for Pt {
    type Output = Pt;

    fn div(self, rhs: f32) -> Pt {
        Pt(self.0 / rhs)
    }
}

//! Length units shared by the DOCX and PPTX writers.
//!
//! Every length is stored in English Metric Units (EMU), the native unit
//! of DrawingML. WordprocessingML wants twips for spacing and margins and
//! eighths of a point for border widths; PresentationML wants hundredths
//! of a point for paragraph spacing. The conversions live here so both
//! writers round the same way.

use std::ops::{Add, Mul, Neg, Sub};

/// EMU per inch
pub const EMU_PER_INCH: i64 = 914_400;

/// EMU per point
pub const EMU_PER_POINT: i64 = 12_700;

/// EMU per centimeter
pub const EMU_PER_CM: i64 = 360_000;

/// EMU per twip (1/20 of a point)
pub const EMU_PER_TWIP: i64 = 635;

/// A length in EMU
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Length(i64);

impl Length {
    /// Zero length
    pub const ZERO: Length = Length(0);

    /// Length from raw EMU
    pub const fn emu(value: i64) -> Self {
        Self(value)
    }

    /// Length from points
    pub fn pt(value: f64) -> Self {
        Self((value * EMU_PER_POINT as f64).round() as i64)
    }

    /// Length from centimeters
    pub fn cm(value: f64) -> Self {
        Self((value * EMU_PER_CM as f64).round() as i64)
    }

    /// Length from inches
    pub fn inches(value: f64) -> Self {
        Self((value * EMU_PER_INCH as f64).round() as i64)
    }

    /// Raw EMU value
    pub const fn to_emu(self) -> i64 {
        self.0
    }

    /// Value in points
    pub fn to_points(self) -> f64 {
        self.0 as f64 / EMU_PER_POINT as f64
    }

    /// Value in twips (WordprocessingML spacing, indents, page size)
    pub fn to_twips(self) -> i64 {
        (self.0 as f64 / EMU_PER_TWIP as f64).round() as i64
    }

    /// Value in eighths of a point (WordprocessingML border widths)
    pub fn to_eighth_points(self) -> i64 {
        (self.0 as f64 * 8.0 / EMU_PER_POINT as f64).round() as i64
    }

    /// Value in hundredths of a point (PresentationML spacing)
    pub fn to_hundredth_points(self) -> i64 {
        (self.0 as f64 * 100.0 / EMU_PER_POINT as f64).round() as i64
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length(self.0 - rhs.0)
    }
}

impl Mul<i64> for Length {
    type Output = Length;

    fn mul(self, rhs: i64) -> Length {
        Length(self.0 * rhs)
    }
}

impl Neg for Length {
    type Output = Length;

    fn neg(self) -> Length {
        Length(-self.0)
    }
}

/// Font size in half-points (WordprocessingML `w:sz`)
pub fn half_points(size: f32) -> u32 {
    (size * 2.0).round().max(1.0) as u32
}

/// Font size in hundredths of a point (DrawingML `sz`)
pub fn hundredth_points(size: f32) -> u32 {
    (size * 100.0).round().max(100.0) as u32
}

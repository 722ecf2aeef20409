/// Millimetres in one inch.
pub const MM_PER_INCH: f32 = 25.4;

/// Convert millimetres to inches.
#[inline]
#[must_use]
pub fn mm_to_inch(mm: f32) -> f32 {
    mm / MM_PER_INCH
}

/// Convert inches to millimetres.
#[inline]
#[must_use]
pub fn inch_to_mm(inch: f32) -> f32 {
    inch * MM_PER_INCH
}

/// Linearly map `value` from the `from` range onto the `to` range.
///
/// `from.0` must differ from `from.1`; equal bounds divide by zero. Values
/// outside `from` extrapolate.
#[inline]
#[must_use]
pub fn remap(value: f32, from: (f32, f32), to: (f32, f32)) -> f32 {
    let t = (value - from.0) / (from.1 - from.0);
    to.0 + (to.1 - to.0) * t
}

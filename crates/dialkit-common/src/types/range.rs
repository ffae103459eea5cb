use serde::{Deserialize, Serialize};

use crate::ControlError;

/// Closed interval `[lower, upper]` covering the full extent of a slider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRange")]
pub struct NumericRange {
    lower: f64,
    upper: f64,
}

impl NumericRange {
    /// Returns `InvalidArgument` unless both ends and the width are finite and `lower <= upper`.
    pub fn new(lower: f64, upper: f64) -> Result<Self, ControlError> {
        check_interval(lower, upper)?;
        Ok(Self { lower, upper })
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.lower..=self.upper).contains(&value)
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.lower, self.upper)
    }
}

/// The sub-interval currently chosen by the two handles of a range slider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRange")]
pub struct SelectedRange {
    lower: f64,
    upper: f64,
}

impl SelectedRange {
    pub fn new(lower: f64, upper: f64) -> Result<Self, ControlError> {
        check_interval(lower, upper)?;
        Ok(Self { lower, upper })
    }

    /// Like [`SelectedRange::new`], additionally requiring the selection to lie inside `bounds`.
    pub fn within(bounds: &NumericRange, lower: f64, upper: f64) -> Result<Self, ControlError> {
        let range = Self::new(lower, upper)?;
        if !bounds.contains(lower) || !bounds.contains(upper) {
            return Err(ControlError::InvalidArgument(format!(
                "selection [{lower}, {upper}] is outside bounds [{}, {}]",
                bounds.lower(),
                bounds.upper()
            )));
        }
        Ok(range)
    }

    /// The whole of `bounds` selected.
    pub fn full(bounds: &NumericRange) -> Self {
        Self {
            lower: bounds.lower(),
            upper: bounds.upper(),
        }
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    // Callers must keep lower <= upper.
    fn from_ordered(lower: f64, upper: f64) -> Self {
        debug_assert!(lower <= upper);
        Self { lower, upper }
    }

    pub fn with_lower(&self, lower: f64) -> Self {
        Self::from_ordered(lower.min(self.upper), self.upper)
    }

    pub fn with_upper(&self, upper: f64) -> Self {
        Self::from_ordered(self.lower, upper.max(self.lower))
    }
}

fn check_interval(lower: f64, upper: f64) -> Result<(), ControlError> {
    if !lower.is_finite() || !upper.is_finite() {
        return Err(ControlError::InvalidArgument(format!(
            "interval ends must be finite, got [{lower}, {upper}]"
        )));
    }
    if lower > upper {
        return Err(ControlError::InvalidArgument(format!(
            "interval lower end {lower} exceeds upper end {upper}"
        )));
    }
    // Mapping scales by the width, so it has to be representable too.
    if !(upper - lower).is_finite() {
        return Err(ControlError::InvalidArgument(format!(
            "interval [{lower}, {upper}] is too wide"
        )));
    }
    Ok(())
}

#[derive(Deserialize)]
struct RawRange {
    lower: f64,
    upper: f64,
}

impl TryFrom<RawRange> for NumericRange {
    type Error = ControlError;

    fn try_from(raw: RawRange) -> Result<Self, Self::Error> {
        Self::new(raw.lower, raw.upper)
    }
}

impl TryFrom<RawRange> for SelectedRange {
    type Error = ControlError;

    fn try_from(raw: RawRange) -> Result<Self, Self::Error> {
        Self::new(raw.lower, raw.upper)
    }
}

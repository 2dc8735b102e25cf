//! Textual dimension input: parsing and validation of box extents.

use std::fmt;

use thiserror::Error;

use crate::BoxDimensions;

/// Largest accepted extent. Geometry is drawn in f32, so extents are capped
/// well below where single precision loses whole units.
pub const MAX_EXTENT: f64 = 1.0e6;

/// Box axis, used to name the offending field in errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Length,
    Width,
    Height,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::Length, Axis::Width, Axis::Height];

    pub fn name(&self) -> &'static str {
        match self {
            Axis::Length => "length",
            Axis::Width => "width",
            Axis::Height => "height",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Invalid dimension input
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("{axis} must be a number, got {input:?}")]
    NotANumber { axis: Axis, input: String },
    #[error("{axis} must be a positive number, got {value}")]
    NotPositive { axis: Axis, value: f64 },
    #[error("{axis} must be at most {max}, got {value}")]
    TooLarge { axis: Axis, value: f64, max: f64 },
}

impl ParseError {
    pub fn axis(&self) -> Axis {
        match self {
            ParseError::NotANumber { axis, .. }
            | ParseError::NotPositive { axis, .. }
            | ParseError::TooLarge { axis, .. } => *axis,
        }
    }
}

fn check_extent(axis: Axis, value: f64) -> Result<f64, ParseError> {
    if !(value.is_finite() && value > 0.0) {
        return Err(ParseError::NotPositive { axis, value });
    }
    if value > MAX_EXTENT {
        return Err(ParseError::TooLarge {
            axis,
            value,
            max: MAX_EXTENT,
        });
    }
    Ok(value)
}

/// Parse one extent. Surrounding whitespace is ignored.
pub fn parse_extent(axis: Axis, input: &str) -> Result<f64, ParseError> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| ParseError::NotANumber {
            axis,
            input: input.to_string(),
        })?;
    check_extent(axis, value)
}

impl BoxDimensions {
    /// Parse all three extents. Nothing is produced unless every field is valid;
    /// the first failing axis (length, width, height order) is reported.
    pub fn parse(length: &str, width: &str, height: &str) -> Result<Self, ParseError> {
        Ok(Self {
            length: parse_extent(Axis::Length, length)?,
            width: parse_extent(Axis::Width, width)?,
            height: parse_extent(Axis::Height, height)?,
        })
    }

    /// Check that every extent is a positive number no larger than [`MAX_EXTENT`]
    pub fn validate(&self) -> Result<(), ParseError> {
        check_extent(Axis::Length, self.length)?;
        check_extent(Axis::Width, self.width)?;
        check_extent(Axis::Height, self.height)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let dims = BoxDimensions::parse("10", " 20.5 ", "3e1").unwrap();
        assert_eq!(dims.extents(), [10.0, 20.5, 30.0]);
    }

    #[test]
    fn test_parse_not_a_number_names_axis() {
        let err = BoxDimensions::parse("10", "abc", "30").unwrap_err();
        assert_eq!(
            err,
            ParseError::NotANumber {
                axis: Axis::Width,
                input: "abc".to_string()
            }
        );
        assert_eq!(err.to_string(), "width must be a number, got \"abc\"");
    }

    #[test]
    fn test_parse_empty_field_fails() {
        let err = BoxDimensions::parse("10", "20", "").unwrap_err();
        assert_eq!(err.axis(), Axis::Height);
    }

    #[test]
    fn test_parse_rejects_zero_and_negative() {
        assert!(matches!(
            BoxDimensions::parse("0", "20", "30"),
            Err(ParseError::NotPositive { axis: Axis::Length, .. })
        ));
        assert!(matches!(
            BoxDimensions::parse("10", "-5", "30"),
            Err(ParseError::NotPositive { axis: Axis::Width, .. })
        ));
    }

    #[test]
    fn test_parse_rejects_nan_and_infinity() {
        assert!(BoxDimensions::parse("NaN", "1", "1").is_err());
        assert!(BoxDimensions::parse("1", "inf", "1").is_err());
    }

    #[test]
    fn test_parse_rejects_extent_beyond_f32_range() {
        let err = BoxDimensions::parse("1e39", "10", "10").unwrap_err();
        assert!(matches!(err, ParseError::TooLarge { axis: Axis::Length, .. }));
        assert!(BoxDimensions::new(10.0, 10.0, 1.0e7).is_err());
    }

    #[test]
    fn test_parse_accepts_max_extent() {
        let max = MAX_EXTENT.to_string();
        let dims = BoxDimensions::parse(&max, "1", "1").unwrap();
        assert_eq!(dims.length, MAX_EXTENT);
    }

    #[test]
    fn test_first_failing_axis_is_reported() {
        let err = BoxDimensions::parse("x", "y", "z").unwrap_err();
        assert_eq!(err.axis(), Axis::Length);
    }
}

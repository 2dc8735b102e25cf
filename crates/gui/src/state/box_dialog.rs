//! Edit Box Dimensions form state (data only)
//!
//! The UI rendering is in ui/box_dialog.rs in the binary crate.

use shared::{BoxDimensions, ParseError};

/// Three text fields edited together and validated as one unit
#[derive(Default)]
pub struct BoxDimensionsDialog {
    /// Is the dialog open?
    pub open: bool,
    pub length: String,
    pub width: String,
    pub height: String,
}

impl BoxDimensionsDialog {
    /// Open the dialog pre-filled with the current dimensions
    pub fn open_with(&mut self, current: &BoxDimensions) {
        self.open = true;
        self.length = current.length.to_string();
        self.width = current.width.to_string();
        self.height = current.height.to_string();
    }

    /// Parse all three fields; yields nothing unless every field is valid
    pub fn parse(&self) -> Result<BoxDimensions, ParseError> {
        BoxDimensions::parse(&self.length, &self.width, &self.height)
    }

    /// Close the dialog
    pub fn close(&mut self) {
        self.open = false;
        self.length.clear();
        self.width.clear();
        self.height.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_prefills_current_values() {
        let mut d = BoxDimensionsDialog::default();
        d.open_with(&BoxDimensions::new(50.0, 12.5, 3.0).unwrap());
        assert!(d.open);
        assert_eq!(d.length, "50");
        assert_eq!(d.width, "12.5");
        assert_eq!(d.height, "3");
        assert_eq!(d.parse().unwrap().extents(), [50.0, 12.5, 3.0]);
    }

    #[test]
    fn test_one_bad_field_fails_whole_form() {
        let mut d = BoxDimensionsDialog::default();
        d.open_with(&BoxDimensions::default());
        d.length = "10".to_string();
        d.width = "wide".to_string();
        d.height = "30".to_string();
        assert!(d.parse().is_err());
    }

    #[test]
    fn test_close_resets() {
        let mut d = BoxDimensionsDialog::default();
        d.open_with(&BoxDimensions::default());
        d.close();
        assert!(!d.open);
        assert!(d.length.is_empty());
    }
}

//! Display helper functions for stencils

use shared::Stencil;

/// Get display name for a stencil: 1-based position in the list plus short ID
pub fn stencil_display_name(index: usize, stencil: &Stencil) -> String {
    format!("Stencil {} ({})", index + 1, short_id(&stencil.id))
}

/// Get shortened ID (first 8 characters)
pub fn short_id(id: &str) -> &str {
    match id.char_indices().nth(8) {
        Some((end, _)) => &id[..end],
        None => id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_id() {
        assert_eq!(short_id("0123456789abcdef"), "01234567");
        assert_eq!(short_id("abc"), "abc");
        assert_eq!(short_id(""), "");
    }

    #[test]
    fn test_stencil_display_name() {
        let s = Stencil {
            id: "deadbeef-0000".to_string(),
            position: [0.0; 3],
            dimensions: [1.0; 3],
        };
        assert_eq!(stencil_display_name(0, &s), "Stencil 1 (deadbeef)");
    }
}

mod color;
mod commands;

pub use color::Color;
pub use commands::{line_command, rect_command, text_command};

/// Writes a number in its shortest form: `744`, `0.8`, `10.5`.
pub fn format_number(value: f64) -> String {
    let formatted = format!("{value:.6}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_integers() {
        assert_eq!(format_number(744.0), "744");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(540.0), "540");
        assert_eq!(format_number(-17.0), "-17");
    }

    #[test]
    fn test_format_fractions() {
        assert_eq!(format_number(0.8), "0.8");
        assert_eq!(format_number(10.25), "10.25");
    }

    #[test]
    fn test_format_negative_zero() {
        assert_eq!(format_number(-0.0), "0");
    }
}

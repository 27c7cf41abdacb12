/// An RGB fill or stroke color.
///
/// Components run from 0.0 to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    /// Creates an RGB color with values clamped to 0.0-1.0.
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Color {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
        }
    }

    pub fn white() -> Self {
        Color::rgb(1.0, 1.0, 1.0)
    }

    pub fn black() -> Self {
        Color::rgb(0.0, 0.0, 0.0)
    }

    /// Operands for `rg`/`RG`, three decimals each.
    pub fn operands(&self) -> String {
        format!("{:.3} {:.3} {:.3}", self.r, self.g, self.b)
    }
}

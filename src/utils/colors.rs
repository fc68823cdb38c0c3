use tesserae_tokens_schema::Rgba;

/// Creates an RGBA color from a hex value and alpha component.
pub fn rgb_a(hex: u32, a: f64) -> Rgba {
    let [_, r, g, b] = hex.to_be_bytes().map(|b| (b as f64) / 255.0);
    Rgba { r, g, b, a }
}

/// Formats a normalized color as a CSS color string.
///
/// Channels are scaled to `0..=255` and rounded. Alpha is written as stored,
/// and omitted entirely when the color is opaque.
pub fn rgba_to_css(color: &Rgba) -> String {
    let [red, green, blue] = [color.r, color.g, color.b].map(to_channel);

    if color.a == 1. {
        format!("rgb({red}, {green}, {blue})")
    } else {
        format!("rgba({red}, {green}, {blue}, {})", color.a)
    }
}

fn to_channel(value: f64) -> i64 {
    (value * 255.).round() as i64
}

/// Extension trait for modifying and formatting RGBA colors.
pub trait RgbaExt {
    /// Returns a new color with the specified alpha value.
    fn alpha(self, alpha: f64) -> Self;

    /// Formats the color as `rgb(..)` or `rgba(..)`.
    fn to_css(&self) -> String;
}

impl RgbaExt for Rgba {
    fn alpha(mut self, alpha: f64) -> Self {
        self.a = alpha;
        self
    }

    fn to_css(&self) -> String {
        rgba_to_css(self)
    }
}

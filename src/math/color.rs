use serde::{Deserialize, Serialize};

/// An RGBA colour with `f32` components.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Color {
    /// Red component
    pub r: f32,
    /// Green component
    pub g: f32,
    /// Blue component
    pub b: f32,
    /// Alpha component
    pub a: f32,
}

impl Color {
    /// Creates an opaque colour.
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Color { r, g, b, a: 1.0 }
    }

    /// Returns the same colour with a different alpha.
    pub const fn with_alpha(self, a: f32) -> Self {
        Color { a, ..self }
    }

    /// The components in `[r, g, b, a]` order.
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::new(0.0, 0.0, 0.0)
    }
}

impl IntoIterator for Color {
    type Item = f32;
    type IntoIter = std::array::IntoIter<f32, 4>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_array().into_iter()
    }
}

impl From<Color> for wgpu::Color {
    fn from(c: Color) -> Self {
        wgpu::Color {
            r: c.r as f64,
            g: c.g as f64,
            b: c.b as f64,
            a: c.a as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_iterate_in_order() {
        let components: Vec<f32> = Color::new(0.0, 0.5, 1.0).with_alpha(0.0).into_iter().collect();
        assert_eq!(components, vec![0.0, 0.5, 1.0, 0.0]);
    }

    #[test]
    fn alpha_defaults_to_opaque() {
        let components: Vec<f32> = Color::new(0.0, 0.5, 1.0).into_iter().collect();
        assert_eq!(components, vec![0.0, 0.5, 1.0, 1.0]);
    }

    #[test]
    fn converts_to_wgpu_clear_color() {
        let c: wgpu::Color = Color::new(0.25, 0.5, 0.75).into();
        assert_eq!((c.r, c.g, c.b, c.a), (0.25, 0.5, 0.75, 1.0));
    }
}

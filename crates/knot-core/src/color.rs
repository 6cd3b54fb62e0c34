use glam::Vec3;

/// Split a `0xRRGGBB` value into sRGB components in `0..=1`.
#[inline]
pub fn hex_rgb(hex: u32) -> Vec3 {
    let r = ((hex >> 16) & 0xff) as f32 / 255.0;
    let g = ((hex >> 8) & 0xff) as f32 / 255.0;
    let b = (hex & 0xff) as f32 / 255.0;
    Vec3::new(r, g, b)
}

#[inline]
fn channel_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert sRGB-encoded components to linear light for shading.
#[inline]
pub fn srgb_to_linear(c: Vec3) -> Vec3 {
    Vec3::new(
        channel_to_linear(c.x),
        channel_to_linear(c.y),
        channel_to_linear(c.z),
    )
}

#[inline]
pub fn hex_linear(hex: u32) -> Vec3 {
    srgb_to_linear(hex_rgb(hex))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_rgb_splits_channels() {
        let c = hex_rgb(0xff8000);
        assert!((c.x - 1.0).abs() < 1e-6);
        assert!((c.y - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.z, 0.0);
    }

    #[test]
    fn linear_conversion_keeps_endpoints() {
        assert_eq!(hex_linear(0x000000), Vec3::ZERO);
        let white = hex_linear(0xffffff);
        assert!((white - Vec3::ONE).abs().max_element() < 1e-5);
        // mid grey darkens when linearised
        assert!(hex_linear(0x808080).x < 0.5);
    }
}

/// Converts a packed `0xRRGGBB` sRGB colour into linear RGB.
pub fn srgb_hex_to_linear(hex: u32) -> [f32; 3] {
    let channel = |shift: u32| srgb_to_linear(((hex >> shift) & 0xff) as f32 / 255.0);
    [channel(16), channel(8), channel(0)]
}

pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::srgb_hex_to_linear;

    #[test]
    fn white_and_black_are_fixed_points() {
        for c in srgb_hex_to_linear(0xffffff) {
            assert!((c - 1.0).abs() < 1e-6);
        }
        assert_eq!(srgb_hex_to_linear(0x000000), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn gold_channels_are_ordered() {
        let [r, g, b] = srgb_hex_to_linear(0xc5a059);
        assert!(r > g && g > b);
        assert!(r < 0.6, "linear red should be darker than sRGB 0.77: {r}");
    }
}

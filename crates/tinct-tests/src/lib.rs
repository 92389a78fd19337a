//! Integration tests for the tinct crates.
//!
//! End-to-end checks across crate boundaries: the literal grammar against
//! device colors, model derivation against quantum scaling, and comparison
//! semantics at every precision.

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use std::cmp::Ordering;
    use tinct_color::{ColorError, DeviceColor};
    use tinct_core::{Percentage, Quantum};
    use tinct_models::{Cmyk, ColorModel, Gray, Hsl, Hsv, Mono, Yuv};

    fn hex_round_trip<Q: Quantum + std::fmt::Debug>(literal: &str) {
        let color: DeviceColor<Q> = literal.parse().expect(literal);
        let rendered = color.to_hex_string().expect("non-cmyk color");
        let reparsed: DeviceColor<Q> = rendered.parse().expect(&rendered);
        assert_eq!(color, reparsed, "{literal} -> {rendered}");
    }

    /// Byte-scaled hex output parses back to the identical color at every
    /// precision.
    #[test]
    fn test_hex_round_trip_all_precisions() {
        for literal in ["#F00", "#00FF7F", "#12345678", "olive", "transparent"] {
            hex_round_trip::<u8>(literal);
            hex_round_trip::<u16>(literal);
            hex_round_trip::<f32>(literal);
        }
    }

    /// Native-width renderings are themselves valid literals.
    #[test]
    fn test_native_width_round_trip() {
        let color: DeviceColor<u16> = "#0000FFFF0000".parse().unwrap();
        assert_eq!(color.to_short_string(), "#0000FFFF0000");
        let reparsed: DeviceColor<u16> = color.to_short_string().parse().unwrap();
        assert_eq!(color, reparsed);

        // Display always carries alpha; still parseable
        let display: DeviceColor<u16> = color.to_string().parse().unwrap();
        assert_eq!(color, display);
    }

    #[test]
    fn test_hex_literal_widths() {
        let gray: DeviceColor<u8> = "#80".parse().unwrap();
        assert_eq!((gray.r, gray.g, gray.b, gray.a), (0x80, 0x80, 0x80, 255));

        let short: DeviceColor<u8> = "#1AF".parse().unwrap();
        assert_eq!((short.r, short.g, short.b), (0x11, 0xAA, 0xFF));

        let rgba: DeviceColor<u8> = "#1234".parse().unwrap();
        assert_eq!((rgba.r, rgba.g, rgba.b, rgba.a), (0x11, 0x22, 0x33, 0x44));

        let wide: DeviceColor<u16> = "#123456789ABCDEF0".parse().unwrap();
        assert_eq!((wide.r, wide.g, wide.b, wide.a), (0x1234, 0x5678, 0x9ABC, 0xDEF0));
    }

    /// The same catalog name and its hex literal agree at every precision.
    #[test]
    fn test_names_match_literals() {
        let named8: DeviceColor<u8> = "navy".parse().unwrap();
        let hex8: DeviceColor<u8> = "#000080".parse().unwrap();
        assert_eq!(named8, hex8);

        let named16: DeviceColor<u16> = "navy".parse().unwrap();
        let hex16: DeviceColor<u16> = "#000080".parse().unwrap();
        assert_eq!(named16, hex16);
        assert_eq!(named16.b, 257 * 0x80);

        let named_f: DeviceColor<f32> = "navy".parse().unwrap();
        let hex_f: DeviceColor<f32> = "#000080".parse().unwrap();
        assert_eq!(named_f, hex_f);
    }

    #[test]
    fn test_transparent_forms() {
        let keyword: DeviceColor<u8> = "transparent".parse().unwrap();
        assert_eq!((keyword.r, keyword.g, keyword.b, keyword.a), (255, 255, 255, 0));

        // Single-digit alpha form: fully transparent red
        let red: DeviceColor<u8> = "#F000".parse().unwrap();
        assert_eq!((red.r, red.g, red.b, red.a), (255, 0, 0, 0));
        assert_eq!(red.to_string(), "#FF000000");
    }

    #[test]
    fn test_parse_error_taxonomy() {
        assert_eq!("".parse::<DeviceColor<u8>>().unwrap_err(), ColorError::EmptyValue);
        assert!(matches!(
            "#XYZ".parse::<DeviceColor<u8>>().unwrap_err(),
            ColorError::InvalidHex(_)
        ));
        assert!(matches!(
            "notacolor".parse::<DeviceColor<u8>>().unwrap_err(),
            ColorError::UnknownName(_)
        ));
    }

    /// Ordering is antisymmetric and agrees with equality for same-kind
    /// colors.
    #[test]
    fn test_ordering_consistency() {
        let colors: Vec<DeviceColor<u8>> = ["#000", "#001", "#010", "#100", "#FFF", "transparent"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        for a in &colors {
            for b in &colors {
                match a.partial_cmp(b).unwrap() {
                    Ordering::Less => assert_eq!(b.partial_cmp(a), Some(Ordering::Greater)),
                    Ordering::Greater => assert_eq!(b.partial_cmp(a), Some(Ordering::Less)),
                    Ordering::Equal => {
                        assert_eq!(a, b);
                        assert_eq!(b.partial_cmp(a), Some(Ordering::Equal));
                    }
                }
            }
        }
    }

    /// The percentage fuzz means the same thing at 8 and 16 bits.
    #[test]
    fn test_fuzzy_verdict_stable_across_precision() {
        let pairs = [("#FFF", "#FF80FF", 20.0, false), ("#FFF", "#FF80FF", 30.0, true)];
        for (a, b, fuzz, expected) in pairs {
            let a8: DeviceColor<u8> = a.parse().unwrap();
            let b8: DeviceColor<u8> = b.parse().unwrap();
            assert_eq!(a8.fuzzy_equals(&b8, Percentage::new(fuzz)), expected, "u8 {fuzz}%");

            let a16: DeviceColor<u16> = a.parse().unwrap();
            let b16: DeviceColor<u16> = b.parse().unwrap();
            assert_eq!(a16.fuzzy_equals(&b16, Percentage::new(fuzz)), expected, "u16 {fuzz}%");
        }
    }

    /// Scaling red by 50% truncates, matching the raw-unit arithmetic.
    #[test]
    fn test_percentage_scaling() {
        let red: DeviceColor<u8> = "#F00".parse().unwrap();
        let half = red * Percentage::new(50.0);
        assert_eq!((half.r, half.g, half.b, half.a), (127, 0, 0, 255));

        let red16: DeviceColor<u16> = "#F00".parse().unwrap();
        assert_eq!((red16 * Percentage::new(50.0)).r, 32767);

        let red_f: DeviceColor<f32> = "#F00".parse().unwrap();
        assert_relative_eq!((red_f * Percentage::new(50.0)).r, 0.5, epsilon = 1e-6);
    }

    fn model_round_trip<Q: Quantum>(device: DeviceColor<Q>) -> (DeviceColor<Q>, DeviceColor<Q>) {
        let hsl = Hsl::from_device(&device).to_device();
        let hsv = Hsv::from_device(&device).to_device();
        (hsl, hsv)
    }

    /// HSL and HSV derivation reproduces the source within one quantum.
    #[test]
    fn test_model_round_trips() {
        for (r, g, b) in [(255, 0, 0), (12, 200, 99), (128, 128, 128), (250, 251, 252)] {
            let device = DeviceColor::<u8>::rgb(r, g, b);
            let (hsl, hsv) = model_round_trip(device);
            for back in [hsl, hsv] {
                assert!(back.r.abs_diff(r) <= 1, "{r},{g},{b}");
                assert!(back.g.abs_diff(g) <= 1, "{r},{g},{b}");
                assert!(back.b.abs_diff(b) <= 1, "{r},{g},{b}");
            }

            let wide = DeviceColor::<u16>::from_rgb_bytes(r, g, b);
            let (hsl16, hsv16) = model_round_trip(wide);
            for back in [hsl16, hsv16] {
                assert!(back.r.abs_diff(wide.r) <= 1);
                assert!(back.g.abs_diff(wide.g) <= 1);
                assert!(back.b.abs_diff(wide.b) <= 1);
            }
        }
    }

    /// Full turns of the hue wheel change nothing observable.
    #[test]
    fn test_hue_shift_full_turns() {
        let base = DeviceColor::<u8>::rgb(10, 200, 60);

        let mut once = Hsv::from_device(&base);
        once.hue_shift(-360.0);
        assert_eq!(once.to_device(), base);

        let mut a = Hsv::from_device(&base);
        let mut b = Hsv::from_device(&base);
        a.hue_shift(97.0);
        b.hue_shift(97.0 + 3.0 * 360.0);
        assert_eq!(a.to_device(), b.to_device());
    }

    /// Only exact black and white pass through the mono model.
    #[test]
    fn test_mono_boundary() {
        let black: DeviceColor<u8> = "black".parse().unwrap();
        let white: DeviceColor<u8> = "white".parse().unwrap();
        assert!(Mono::from_device(&black).unwrap().is_black);
        assert!(!Mono::from_device(&white).unwrap().is_black);

        let almost: DeviceColor<u8> = "#010101".parse().unwrap();
        assert!(Mono::from_device(&almost).is_err());
        let clear: DeviceColor<u8> = "#0000".parse().unwrap();
        assert!(Mono::from_device(&clear).is_err());
    }

    /// A four-channel hex literal is CMYK with opaque alpha.
    #[test]
    fn test_cmyk_literal() {
        let cyan: Cmyk<u8> = "#FF000000".parse().unwrap();
        assert_eq!((cyan.c(), cyan.m(), cyan.y(), cyan.k(), cyan.a()), (255, 0, 0, 0, 255));

        let device = cyan.to_device();
        assert!(device.is_cmyk());
        assert_eq!(device.to_string(), "cmyka(255,0,0,0,1.0)");

        // Same digits through the device grammar mean RGBA instead
        let rgba: DeviceColor<u8> = "#FF000000".parse().unwrap();
        assert!(!rgba.is_cmyk());
        assert_eq!(rgba.a, 0);
    }

    /// Gray shade survives decompose/derive against the literal grammar.
    #[test]
    fn test_gray_through_literals() {
        let parsed: DeviceColor<u8> = "#80".parse().unwrap();
        let gray = Gray::from_device(&parsed);
        assert_eq!(gray.to_device(), parsed);

        let wide = Gray::<u16>::new(0.5).unwrap().to_device();
        assert_eq!(Gray::from_device(&wide).to_device(), wide);
    }

    /// YUV keeps luma ordering for achromatic colors.
    #[test]
    fn test_yuv_luma_ordering() {
        let dark = Yuv::from_device(&DeviceColor::<u8>::rgb(20, 20, 20));
        let bright = Yuv::from_device(&DeviceColor::<u8>::rgb(200, 200, 200));
        assert!(dark.y < bright.y);
        assert_relative_eq!(dark.u, 0.5, epsilon = 1e-9);
        assert_relative_eq!(dark.v, 0.5, epsilon = 1e-9);
    }
}

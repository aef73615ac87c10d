use approx::assert_abs_diff_eq;
use colorcast::convert::{
    cmyk_to_rgb, hex_to_rgb, hsl_to_hsv, hsl_to_rgb, hsv_to_hsl, hsv_to_rgb, rgb_to_cmyk,
    rgb_to_hex, rgb_to_hsl, rgb_to_hsv,
};
use colorcast::{Cmy, Cmyk, Color, Component, Hex, Hsl, Hsv, Rgb, Space};
use proptest::prelude::*;

/// Largest per channel difference between two colors.
fn channel_distance(a: Rgb, b: Rgb) -> u8 {
    a.channels()
        .into_iter()
        .zip(b.channels())
        .map(|(a, b)| a.abs_diff(b))
        .max()
        .unwrap_or(0)
}

fn any_rgb() -> impl Strategy<Value = Rgb> {
    any::<[u8; 3]>().prop_map(Rgb::from)
}

proptest! {
    #[test]
    fn rgb_through_hsl_stays_within_one(rgb in any_rgb()) {
        let back = hsl_to_rgb(&rgb_to_hsl(&rgb));
        prop_assert!(channel_distance(rgb, back) <= 1, "{} -> {}", rgb, back);
    }

    #[test]
    fn rgb_through_hsv_stays_within_one(rgb in any_rgb()) {
        let back = hsv_to_rgb(&rgb_to_hsv(&rgb));
        prop_assert!(channel_distance(rgb, back) <= 1, "{} -> {}", rgb, back);
    }

    #[test]
    fn rgb_through_cmyk_is_exact(rgb in any_rgb()) {
        prop_assert_eq!(cmyk_to_rgb(&rgb_to_cmyk(&rgb)), rgb);
    }

    #[test]
    fn rgb_through_hex_is_exact(rgb in any_rgb()) {
        prop_assert_eq!(hex_to_rgb(&rgb_to_hex(&rgb)), rgb);
    }

    #[test]
    fn hex_keeps_low_24_bits(value in any::<u32>()) {
        let hex = Hex::new(value);
        prop_assert_eq!(hex.value(), value & 0xFF_FFFF);
        prop_assert_eq!(rgb_to_hex(&hex_to_rgb(&hex)), hex);
    }

    #[test]
    fn hsl_through_hsv_keeps_hue(
        hue in 0.0..=360.0 as Component,
        saturation in 0.0..=1.0 as Component,
        lightness in 0.01..0.99 as Component,
    ) {
        let hsl = Hsl::new(hue, saturation, lightness);
        let back = hsv_to_hsl(&hsl_to_hsv(&hsl));
        prop_assert_eq!(back.hue(), hsl.hue());
        prop_assert!((back.saturation() - hsl.saturation()).abs() < 1.0e-3);
        prop_assert!((back.lightness() - hsl.lightness()).abs() < 1.0e-4);
    }

    #[test]
    fn in_range_values_are_kept(
        a in 0.0..=1.0 as Component,
        b in 0.0..=1.0 as Component,
        c in 0.0..=1.0 as Component,
        d in 0.0..=1.0 as Component,
        hue in 0.0..=360.0 as Component,
    ) {
        let hsl = Hsl::new(hue, a, b);
        prop_assert_eq!((hsl.hue(), hsl.saturation(), hsl.lightness()), (hue, a, b));

        let hsv = Hsv::new(hue, a, b);
        prop_assert_eq!((hsv.hue(), hsv.saturation(), hsv.value()), (hue, a, b));

        let cmy = Cmy::new(a, b, c);
        prop_assert_eq!((cmy.cyan(), cmy.magenta(), cmy.yellow()), (a, b, c));

        let cmyk = Cmyk::new(a, b, c, d);
        prop_assert_eq!(
            (cmyk.cyan(), cmyk.magenta(), cmyk.yellow(), cmyk.key()),
            (a, b, c, d)
        );
    }

    #[test]
    fn display_parses_back(rgb in any_rgb()) {
        prop_assert_eq!(rgb.to_string().parse::<Rgb>(), Ok(rgb));

        let hex = rgb_to_hex(&rgb);
        prop_assert_eq!(hex.to_string().parse::<Hex>(), Ok(hex));

        let hsl = rgb_to_hsl(&rgb);
        prop_assert_eq!(hsl.to_string().parse::<Hsl>(), Ok(hsl));

        let cmyk = rgb_to_cmyk(&rgb);
        prop_assert_eq!(cmyk.to_string().parse::<Cmyk>(), Ok(cmyk));
    }
}

#[test]
fn every_fourth_rgb_round_trips_within_one() {
    for red in (0..=255u8).step_by(4) {
        for green in (0..=255u8).step_by(4) {
            for blue in (0..=255u8).step_by(4) {
                let rgb = Rgb::new(red, green, blue);
                assert!(channel_distance(rgb, hsl_to_rgb(&rgb_to_hsl(&rgb))) <= 1);
                assert!(channel_distance(rgb, hsv_to_rgb(&rgb_to_hsv(&rgb))) <= 1);
            }
        }
    }
}

#[test]
fn dynamic_colors_follow_the_same_arrows() {
    let rgb = Rgb::new(141, 178, 148);
    let color = Color::from(rgb);

    let hsv = color.to_space(Space::Hsv);
    assert_eq!(hsv, Color::Hsv(rgb_to_hsv(&rgb)));
    assert_eq!(color.to_space(Space::Hex).to_string(), "0x8DB294");

    let back = hsv.to_model::<Rgb>();
    assert!(channel_distance(rgb, back) <= 1);

    let cmyk = color.to_model::<Cmyk>();
    assert_abs_diff_eq!(cmyk.key(), 77.0 / 255.0, epsilon = 1.0e-6);
}

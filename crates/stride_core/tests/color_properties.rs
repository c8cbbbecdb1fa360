use stride_core::color::{
    generate_shade, hex_to_rgb_triple, normalize_color, rgb_triple_to_hex, Rgb,
};

/// Every 6-digit hex survives hex -> triple -> hex (case-insensitive)
#[test]
fn hex_round_trips_through_rgb_triple() {
    let samples = [
        "#000000", "#ffffff", "#a44200", "#d58936", "#3c1518", "#69140e", "#fff94f", "#10dc60",
        "#FF6B35", "#4ecdc4", "#010203", "#fefdfc",
    ];
    for hex in samples {
        let back = rgb_triple_to_hex(&hex_to_rgb_triple(hex)).unwrap();
        assert!(back.eq_ignore_ascii_case(hex), "{hex} came back as {back}");
    }

    // Sweep each channel independently
    for v in 0..=255u8 {
        for rgb in [Rgb::new(v, 0, 0), Rgb::new(0, v, 0), Rgb::new(0, 0, v)] {
            let hex = rgb.to_hex();
            let back = rgb_triple_to_hex(&hex_to_rgb_triple(&hex)).unwrap();
            assert_eq!(back, rgb.to_hex_upper());
        }
    }
}

/// Anything that is not a valid hex or in-range triple comes back as the fallback
#[test]
fn normalize_color_is_total() {
    let fallback = "#10dc60";
    let rejects = [
        "",
        " ",
        "#",
        "#1",
        "#12",
        "#1234",
        "#12345",
        "#1234567",
        "#ggg",
        "rgb(1,2,3)",
        "1,2",
        "1,2,3,4",
        "256,0,0",
        "0,0,999",
        "-1,0,0",
        "1.5,2,3",
        "red",
        "ÿÿÿ",
        "#ÿÿÿÿÿ",
    ];
    for input in rejects {
        assert_eq!(normalize_color(Some(input), fallback), fallback, "{input:?}");
    }
    assert_eq!(normalize_color(None, fallback), fallback);
}

#[test]
fn shade_of_normalized_rgb_input() {
    let primary = normalize_color(Some("255,107,53"), "#a44200");
    assert_eq!(primary, "#FF6B35");
    assert_eq!(generate_shade(&primary, 0.2), "#cc552a");
}

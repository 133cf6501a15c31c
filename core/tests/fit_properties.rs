use kagami_core::{fit_within, FittedSize};

const SIZES: &[u32] = &[1, 2, 3, 7, 299, 300, 599, 600, 601, 640, 1024, 1080, 1920, 4032, 12_000];

#[test]
fn fitted_size_respects_limit_and_ratio() {
    for &max in &[1u32, 300, 600] {
        for &width in SIZES {
            for &height in SIZES {
                let FittedSize {
                    width: fw,
                    height: fh,
                } = fit_within(width, height, max);
                assert!(fw <= width && fh <= height, "{width}x{height} upscaled to {fw}x{fh}");
                if width > max || height > max {
                    assert!(fw <= max && fh <= max, "{width}x{height} -> {fw}x{fh} over {max}");
                    assert!(
                        fw == max || fh == max,
                        "{width}x{height} -> {fw}x{fh} not touching {max}"
                    );
                    let (long, short, fitted_short) = if width > height {
                        (width, height, fh)
                    } else {
                        (height, width, fw)
                    };
                    let exact = max as f64 * short as f64 / long as f64;
                    if exact < 0.5 {
                        assert_eq!(fitted_short, 1, "{width}x{height} -> {fw}x{fh}");
                    } else {
                        assert!(
                            (fitted_short as f64 - exact).abs() <= 0.5 + 1e-9,
                            "{width}x{height} -> {fw}x{fh} ratio drift"
                        );
                    }
                } else {
                    assert_eq!((fw, fh), (width, height));
                }
            }
        }
    }
}

#[test]
fn documented_cases() {
    assert_eq!(fit_within(500, 300, 600), FittedSize::new(500, 300));
    assert_eq!(fit_within(1200, 600, 600), FittedSize::new(600, 300));
    assert_eq!(fit_within(600, 1200, 600), FittedSize::new(300, 600));
    assert_eq!(<(u32, u32)>::from(fit_within(4032, 3024, 600)), (600, 450));
}

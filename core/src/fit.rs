#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FittedSize {
    pub width: u32,
    pub height: u32,
}

impl FittedSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub const fn square(edge: u32) -> Self {
        Self::new(edge, edge)
    }
}

impl From<FittedSize> for (u32, u32) {
    fn from(size: FittedSize) -> Self {
        (size.width, size.height)
    }
}

pub fn fit_within(width: u32, height: u32, max_edge: u32) -> FittedSize {
    if width <= max_edge && height <= max_edge {
        return FittedSize::new(width, height);
    }
    if width == 0 || height == 0 {
        return FittedSize::new(width, height);
    }
    let ratio = width as f64 / height as f64;
    if width > height {
        let scaled = (max_edge as f64 / ratio).round() as u32;
        FittedSize::new(max_edge, scaled.clamp(1, height))
    } else {
        let scaled = (max_edge as f64 * ratio).round() as u32;
        FittedSize::new(scaled.clamp(1, width), max_edge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn within_bounds_is_untouched() {
        assert_eq!(fit_within(500, 300, 600), FittedSize::new(500, 300));
        assert_eq!(fit_within(600, 600, 600), FittedSize::new(600, 600));
    }

    #[test]
    fn landscape_shrinks_to_width() {
        assert_eq!(fit_within(1200, 600, 600), FittedSize::new(600, 300));
    }

    #[test]
    fn portrait_shrinks_to_height() {
        assert_eq!(fit_within(600, 1200, 600), FittedSize::new(300, 600));
    }

    #[test]
    fn zero_edge_does_not_divide() {
        assert_eq!(fit_within(900, 0, 600), FittedSize::new(900, 0));
        assert_eq!(fit_within(0, 900, 600), FittedSize::new(0, 900));
    }

    #[test]
    fn extreme_ratio_keeps_one_pixel() {
        assert_eq!(fit_within(60_000, 10, 600), FittedSize::new(600, 1));
    }
}

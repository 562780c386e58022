//! Text anchor placement.

/// Pixel position of the start of the text baseline.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Anchor {
    pub x: i32,
    pub y: i32,
}

/// Where text goes on the image, as fractions of its size.
///
/// `width` is measured from the left edge and `height` up from the bottom
/// edge. With `center` set, `width` locates the middle of the text instead of
/// its left edge. Values outside `[0, 1]` are accepted and simply place the
/// text off canvas.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Placement {
    pub width: f64,
    pub height: f64,
    pub center: bool,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            width: 0.5,
            height: 0.5,
            center: false,
        }
    }
}

impl Placement {
    /// Computes the anchor for text `text_width` pixels wide on an image of
    /// `image_width` by `image_height` pixels.
    pub fn anchor(&self, image_width: i32, image_height: i32, text_width: i32) -> Anchor {
        compute_anchor(image_width, image_height, self, text_width)
    }
}

fn relative(fraction: f64, size: i32) -> i32 {
    (size as f64 * fraction).round() as i32
}

/// Computes where to start drawing text. No clamping is done.
pub fn compute_anchor(
    image_width: i32,
    image_height: i32,
    placement: &Placement,
    text_width: i32,
) -> Anchor {
    let y = image_height - relative(placement.height, image_height);
    let x = relative(placement.width, image_width);
    let x = if placement.center {
        x - text_width / 2
    } else {
        x
    };
    Anchor { x, y }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(width: f64, height: f64, center: bool) -> Placement {
        Placement {
            width,
            height,
            center,
        }
    }

    #[test]
    fn height_is_measured_from_bottom() {
        assert_eq!(compute_anchor(800, 600, &at(0.0, 0.0, false), 0).y, 600);
        assert_eq!(compute_anchor(800, 600, &at(0.0, 1.0, false), 0).y, 0);
        assert_eq!(compute_anchor(800, 600, &at(0.0, 0.5, false), 0).y, 300);
        assert_eq!(compute_anchor(800, 600, &at(0.0, 0.25, false), 0).y, 450);
    }

    #[test]
    fn fractions_are_rounded() {
        // 101 * 0.5 = 50.5 rounds away from zero
        assert_eq!(compute_anchor(101, 101, &at(0.5, 0.5, false), 0), Anchor { x: 51, y: 50 });
        assert_eq!(compute_anchor(3, 3, &at(1.0 / 3.0, 1.0 / 3.0, false), 0), Anchor { x: 1, y: 2 });
    }

    #[test]
    fn left_aligned_ignores_text_width() {
        let a = compute_anchor(1000, 500, &at(0.1, 0.5, false), 400);
        assert_eq!(a, Anchor { x: 100, y: 250 });
    }

    #[test]
    fn centered_subtracts_half_the_width() {
        let a = compute_anchor(1000, 500, &at(0.5, 0.5, true), 400);
        assert_eq!(a, Anchor { x: 300, y: 250 });
        // odd widths truncate
        let a = compute_anchor(1000, 500, &at(0.5, 0.5, true), 401);
        assert_eq!(a.x, 300);
    }

    #[test]
    fn anchors_may_leave_the_canvas() {
        let a = compute_anchor(100, 100, &at(0.0, 0.5, true), 300);
        assert_eq!(a.x, -150);
        let a = compute_anchor(100, 100, &at(1.5, -0.5, false), 0);
        assert_eq!(a, Anchor { x: 150, y: 150 });
    }

    #[test]
    fn default_is_middle_left_aligned() {
        let p = Placement::default();
        assert_eq!(p.anchor(200, 100, 50), Anchor { x: 100, y: 50 });
    }
}

//! Viewport-space geometry shared by the trackers.

/// A pointer sample in viewport (client) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A bounding box as reported by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Replaces any non-finite component with zero.
    pub fn sanitized(self) -> Self {
        Self {
            left: finite_or_zero(self.left),
            top: finite_or_zero(self.top),
            width: finite_or_zero(self.width).max(0.0),
            height: finite_or_zero(self.height).max(0.0),
        }
    }
}

/// Pointer position relative to a region's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RelativeCoordinate {
    pub x: f64,
    pub y: f64,
}

impl RelativeCoordinate {
    /// `pointer - box.origin`, always finite.
    pub fn between(pointer: Point, bounds: Rect) -> Self {
        let bounds = bounds.sanitized();
        Self {
            x: finite_or_zero(pointer.x - bounds.left),
            y: finite_or_zero(pointer.y - bounds.top),
        }
    }

    pub fn css_x(&self) -> String {
        format!("{}px", self.x)
    }

    pub fn css_y(&self) -> String {
        format!("{}px", self.y)
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_coordinate_subtracts_box_origin() {
        let coord = RelativeCoordinate::between(
            Point::new(120.0, 80.0),
            Rect::new(100.0, 50.0, 200.0, 200.0),
        );
        assert_eq!(coord, RelativeCoordinate { x: 20.0, y: 30.0 });
    }

    #[test]
    fn zero_area_box_still_yields_origin_offset() {
        let bounds = Rect::new(10.0, 10.0, 0.0, 0.0);
        assert_eq!(bounds.sanitized(), bounds);

        let coord = RelativeCoordinate::between(Point::new(15.0, 40.0), bounds);
        assert_eq!(coord, RelativeCoordinate { x: 5.0, y: 30.0 });
    }

    #[test]
    fn non_finite_box_is_treated_as_zero() {
        let bounds = Rect::new(f64::NAN, f64::INFINITY, f64::NAN, -3.0);
        let coord = RelativeCoordinate::between(Point::new(7.0, 9.0), bounds);

        assert_eq!(coord, RelativeCoordinate { x: 7.0, y: 9.0 });
        assert_eq!(bounds.sanitized(), Rect::default());
    }

    #[test]
    fn css_values_carry_pixel_unit() {
        let coord = RelativeCoordinate { x: 20.0, y: 30.5 };
        assert_eq!(coord.css_x(), "20px");
        assert_eq!(coord.css_y(), "30.5px");
    }
}

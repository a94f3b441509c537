//! Core types for Rotunda layouts.
//!
//! This crate provides the geometry a layout exchanges with its host view:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Affine transforms: [`Transform2D`], used to render rotated items

mod geometry;
mod transform;

pub use geometry::{Point, Rect, Size};
pub use transform::Transform2D;

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // GEOMETRY TESTS
    // ==========================================================================

    mod geometry_tests {
        use super::*;
        use proptest::prelude::*;

        #[test]
        fn test_point_arithmetic() {
            let a = Point::new(3.0, 4.0);
            let b = Point::new(1.0, 1.0);
            assert_eq!(a + b, Point::new(4.0, 5.0));
            assert_eq!(a - b, Point::new(2.0, 3.0));
            assert_eq!(Point::default(), Point::ORIGIN);
        }

        #[test]
        fn test_point_distance() {
            let d = Point::ORIGIN.distance(&Point::new(3.0, 4.0));
            assert!((d - 5.0).abs() < 1e-6);
        }

        #[test]
        fn test_size_is_positive() {
            assert!(Size::new(133.0, 173.0).is_positive());
            assert!(!Size::new(0.0, 173.0).is_positive());
            assert!(!Size::new(133.0, -1.0).is_positive());
            assert!(!Size::new(f32::NAN, 1.0).is_positive());
            assert!(!Size::new(f32::INFINITY, 1.0).is_positive());
        }

        #[test]
        fn test_size_is_non_negative() {
            assert!(Size::ZERO.is_non_negative());
            assert!(Size::new(320.0, 480.0).is_non_negative());
            assert!(!Size::new(-1.0, 480.0).is_non_negative());
            assert!(!Size::new(320.0, f32::NAN).is_non_negative());
        }

        #[test]
        fn test_rect_from_center() {
            let r = Rect::from_center(Point::new(100.0, 50.0), Size::new(40.0, 20.0));
            assert_eq!(r, Rect::new(80.0, 40.0, 40.0, 20.0));
            assert_eq!(r.center(), Point::new(100.0, 50.0));
            assert_eq!(r.size(), Size::new(40.0, 20.0));
            assert_eq!(r.origin(), Point::new(80.0, 40.0));
        }

        #[test]
        fn test_rect_mid_y() {
            let r = Rect::new(0.0, 10.0, 320.0, 480.0);
            assert_eq!(r.mid_y(), 250.0);
            assert_eq!(Rect::from_size(Size::new(320.0, 480.0)).mid_y(), 240.0);
        }

        #[test]
        fn test_rect_contains_point() {
            let r = Rect::new(0.0, 0.0, 10.0, 10.0);
            assert!(r.contains_point(&Point::new(5.0, 5.0)));
            assert!(r.contains_point(&Point::new(10.0, 10.0)));
            assert!(!r.contains_point(&Point::new(10.1, 5.0)));
        }

        #[test]
        fn test_rect_intersects() {
            let a = Rect::new(0.0, 0.0, 10.0, 10.0);
            assert!(a.intersects(&Rect::new(5.0, 5.0, 10.0, 10.0)));
            assert!(!a.intersects(&Rect::new(10.0, 0.0, 10.0, 10.0)));
        }

        #[test]
        fn test_geometry_serde() {
            let r = Rect::new(1.0, 2.0, 3.0, 4.0);
            let json = serde_json::to_string(&r).unwrap();
            assert_eq!(json, r#"{"x":1.0,"y":2.0,"width":3.0,"height":4.0}"#);
        }

        proptest! {
            #[test]
            fn prop_point_distance_symmetric(x1 in -1000.0f32..1000.0, y1 in -1000.0f32..1000.0, x2 in -1000.0f32..1000.0, y2 in -1000.0f32..1000.0) {
                let p1 = Point::new(x1, y1);
                let p2 = Point::new(x2, y2);
                prop_assert!((p1.distance(&p2) - p2.distance(&p1)).abs() < 0.001);
            }

            #[test]
            fn prop_rect_from_center_round_trips_center(x in -1000.0f32..1000.0, y in -1000.0f32..1000.0, w in 0.0f32..1000.0, h in 0.0f32..1000.0) {
                let r = Rect::from_center(Point::new(x, y), Size::new(w, h));
                prop_assert!(r.center().distance(&Point::new(x, y)) < 0.01);
            }
        }
    }

    // ==========================================================================
    // TRANSFORM TESTS
    // ==========================================================================

    mod transform_tests {
        use super::*;
        use proptest::prelude::*;
        use std::f32::consts::FRAC_PI_2;

        fn close(a: Point, b: Point) -> bool {
            a.distance(&b) < 1e-4
        }

        #[test]
        fn test_identity() {
            let p = Point::new(7.0, -3.0);
            assert_eq!(Transform2D::IDENTITY.apply(p), p);
            assert_eq!(Transform2D::default(), Transform2D::IDENTITY);
        }

        #[test]
        fn test_translate() {
            let t = Transform2D::translate(10.0, 20.0);
            assert_eq!(t.apply(Point::new(1.0, 1.0)), Point::new(11.0, 21.0));
        }

        #[test]
        fn test_rotate_quarter_turn() {
            let t = Transform2D::rotate(FRAC_PI_2);
            assert!(close(t.apply(Point::new(1.0, 0.0)), Point::new(0.0, 1.0)));
        }

        #[test]
        fn test_rotate_about_pivot() {
            let pivot = Point::new(1.0, 1.0);
            let t = Transform2D::rotate_about(FRAC_PI_2, pivot);
            assert!(close(t.apply(pivot), pivot));
            assert!(close(t.apply(Point::new(2.0, 1.0)), Point::new(1.0, 2.0)));
        }

        #[test]
        fn test_then_applies_in_order() {
            let t = Transform2D::translate(1.0, 0.0).then(&Transform2D::rotate(FRAC_PI_2));
            // translate to (1, 0) first, then rotate to (0, 1)
            assert!(close(t.apply(Point::ORIGIN), Point::new(0.0, 1.0)));
        }

        proptest! {
            #[test]
            fn prop_rotate_about_preserves_distance_to_pivot(
                angle in -6.3f32..6.3,
                px in -500.0f32..500.0, py in -500.0f32..500.0,
                x in -500.0f32..500.0, y in -500.0f32..500.0
            ) {
                let pivot = Point::new(px, py);
                let p = Point::new(x, y);
                let moved = Transform2D::rotate_about(angle, pivot).apply(p);
                prop_assert!((moved.distance(&pivot) - p.distance(&pivot)).abs() < 0.05);
            }
        }
    }
}

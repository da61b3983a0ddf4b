//! Bounds Tests - Containment and Edge Vectors
//!
//! Property tests for AxisAlignedBox and RegionSet. Coordinates are drawn on
//! a quarter-meter grid so every sum below is exact in f32.

use gallery_engine::physics::{AxisAlignedBox, RegionSet, WalkableRegion};
use glam::{Vec2, Vec3};
use proptest::prelude::*;

fn grid(range: std::ops::Range<i32>) -> impl Strategy<Value = f32> {
    range.prop_map(|q| q as f32 * 0.25)
}

fn any_box() -> impl Strategy<Value = AxisAlignedBox> {
    (grid(-400..400), grid(-400..400), grid(0..200), grid(0..200))
        .prop_map(|(cx, cz, hx, hz)| AxisAlignedBox::new(Vec2::new(cx, cz), Vec2::new(hx, hz)))
}

fn any_point() -> impl Strategy<Value = Vec3> {
    (grid(-1200..1200), grid(-40..40), grid(-1200..1200)).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

/// A box and a point inside it (boundary included).
fn box_with_inside_point() -> impl Strategy<Value = (AxisAlignedBox, Vec3)> {
    (-400i32..400, -400i32..400, 0i32..200, 0i32..200)
        .prop_flat_map(|(cx, cz, hx, hz)| (Just((cx, cz, hx, hz)), -hx..=hx, -hz..=hz, -40i32..40))
        .prop_map(|((cx, cz, hx, hz), ox, oz, y)| {
            let q = |v: i32| v as f32 * 0.25;
            (
                AxisAlignedBox::new(Vec2::new(q(cx), q(cz)), Vec2::new(q(hx), q(hz))),
                Vec3::new(q(cx + ox), q(y), q(cz + oz)),
            )
        })
}

// ============================================================================
// AxisAlignedBox Properties
// ============================================================================

proptest! {
    #[test]
    fn center_is_always_inside(b in any_box(), y in grid(-40..40)) {
        let c = b.center();
        prop_assert!(b.contains(Vec3::new(c.x, y, c.y)));
    }

    #[test]
    fn edge_vector_is_zero_inside((b, p) in box_with_inside_point()) {
        prop_assert!(b.contains(p));
        prop_assert_eq!(b.edge_vector(p), Vec3::ZERO);
    }

    #[test]
    fn edge_vector_readmits_outside_points(b in any_box(), p in any_point()) {
        prop_assume!(!b.contains(p));
        let edge = b.edge_vector(p);
        prop_assert_eq!(edge.y, 0.0);
        prop_assert!(b.contains(p + edge));
    }

    #[test]
    fn edge_vector_is_minimal_per_axis(b in any_box(), p in any_point()) {
        prop_assume!(!b.contains(p));
        let corrected = p + b.edge_vector(p);
        let (min, max) = (b.min(), b.max());

        // An axis already within the span is untouched, otherwise it lands on the near edge
        if p.x >= min.x && p.x <= max.x {
            prop_assert_eq!(corrected.x, p.x);
        } else {
            prop_assert_eq!(corrected.x, if p.x < min.x { min.x } else { max.x });
        }
        if p.z >= min.y && p.z <= max.y {
            prop_assert_eq!(corrected.z, p.z);
        } else {
            prop_assert_eq!(corrected.z, if p.z < min.y { min.y } else { max.y });
        }
    }

    #[test]
    fn push_out_lands_on_boundary((b, p) in box_with_inside_point()) {
        let push = b.edge_vector_from_inside(p);
        let out = p + push;
        let (min, max) = (b.min(), b.max());

        // Exactly one axis moves, and it ends on an edge
        prop_assert!(push.x == 0.0 || push.z == 0.0);
        prop_assert!(out.x == min.x || out.x == max.x || out.z == min.y || out.z == max.y);
        prop_assert!(b.contains(out));
    }

    #[test]
    fn corner_form_matches_center_form(p in any_point()) {
        let from_corners = AxisAlignedBox::from_corners(Vec2::new(0.0, 0.0), Vec2::new(10.0, 4.0));
        let from_center = AxisAlignedBox::new(Vec2::new(5.0, 2.0), Vec2::new(5.0, 2.0));
        prop_assert_eq!(from_corners.contains(p), from_center.contains(p));
        prop_assert_eq!(from_corners.edge_vector(p), from_center.edge_vector(p));
    }
}

// ============================================================================
// Fixed Cases
// ============================================================================

#[test]
fn test_corner_form_sample_points() {
    let from_corners = AxisAlignedBox::from_corners(Vec2::new(0.0, 0.0), Vec2::new(10.0, 4.0));
    let samples = [
        (Vec3::new(5.0, 0.0, 2.0), true),
        (Vec3::new(0.0, 0.0, 0.0), true),
        (Vec3::new(10.0, 0.0, 4.0), true),
        (Vec3::new(10.01, 0.0, 2.0), false),
        (Vec3::new(-3.0, 0.0, 7.0), false),
    ];
    for (point, inside) in samples {
        assert_eq!(from_corners.contains(point), inside, "point {:?}", point);
    }
    assert_eq!(
        from_corners.edge_vector(Vec3::new(-3.0, 0.0, 7.0)),
        Vec3::new(3.0, 0.0, -3.0)
    );
}

#[test]
fn test_exclusion_center_push_prefers_x() {
    let pedestal = AxisAlignedBox::new(Vec2::new(2.0, 2.0), Vec2::new(1.0, 1.0));
    let push = pedestal.edge_vector_from_inside(Vec3::new(2.0, 0.0, 2.0));
    assert_eq!(push, Vec3::new(1.0, 0.0, 0.0));
}

// ============================================================================
// RegionSet Tests
// ============================================================================

#[test]
fn test_region_set_is_a_union() {
    let rooms: RegionSet = vec![
        AxisAlignedBox::from_corners(Vec2::new(0.0, 0.0), Vec2::new(4.0, 4.0)),
        AxisAlignedBox::from_corners(Vec2::new(3.0, 1.0), Vec2::new(6.0, 2.0)),
    ]
    .into_iter()
    .collect();

    assert!(rooms.contains_point(Vec3::new(1.0, 0.0, 1.0)));
    assert!(rooms.contains_point(Vec3::new(5.0, 0.0, 1.5)));
    assert!(!rooms.contains_point(Vec3::new(5.0, 0.0, 3.0)));
    assert_eq!(rooms.first_containing(Vec3::new(3.5, 0.0, 1.5)), Some(0));
    assert_eq!(rooms.last_containing(Vec3::new(3.5, 0.0, 1.5)), Some(1));
}

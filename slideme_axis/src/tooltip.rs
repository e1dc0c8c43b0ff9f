// Copyright 2026 the Slideme Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tooltip bubble and label placement.
//!
//! The tooltip is a teardrop: an isosceles triangle whose apex sits on the
//! thumb, united with a circle of diameter `width` centered `width` away from
//! the thumb. The triangle base is a diameter of that circle, so its sides
//! enter the circle at 60% of their length; [`tooltip_outline`] emits that
//! union boundary directly rather than two overlapping shapes.

use core::f64::consts::TAU;

use kurbo::{Arc, BezPath, Point, Size, Vec2};

use crate::model::{Margin, Orientation, Position};
use crate::thumb::clamp_thumb_to_track;

/// Flattening tolerance for the bubble arc.
const ARC_TOLERANCE: f64 = 0.1;

/// Point on the track where the tooltip attaches.
///
/// The cross-axis coordinate is the track center; the main-axis coordinate is
/// the thumb position clamped onto the track.
#[must_use]
pub fn tooltip_anchor(
    orientation: Orientation,
    extent: Size,
    thumb_main: f64,
    thumb_radius: f64,
) -> Point {
    let main = clamp_thumb_to_track(orientation, extent, thumb_main, thumb_radius);
    orientation.compose(main, orientation.cross_center(extent))
}

/// Perpendicular used for the triangle base, rotated a quarter turn from `dir`.
fn perpendicular(dir: Vec2) -> Vec2 {
    Vec2::new(-dir.y, dir.x)
}

/// The two base vertices of the tooltip tail.
///
/// Both lie `base_width` away from `anchor` toward `position`, spread by
/// `±base_width / 2` across it.
#[must_use]
pub fn triangle_vertices(position: Position, anchor: Point, base_width: f64) -> (Point, Point) {
    let dir = position.direction();
    let across = perpendicular(dir);
    let base = anchor + dir * base_width;
    (
        base + across * (base_width / 2.0),
        base - across * (base_width / 2.0),
    )
}

/// Center of the tooltip bubble, `diameter` away from `anchor` toward `position`.
#[must_use]
pub fn circle_center(position: Position, anchor: Point, diameter: f64) -> Point {
    anchor + position.direction() * diameter
}

/// Closed outline of the tooltip: the union of tail triangle and bubble.
///
/// Returns an empty path for a non-positive `width`, which is the resting
/// state of a hidden tooltip.
#[must_use]
pub fn tooltip_outline(position: Position, anchor: Point, width: f64) -> BezPath {
    let mut path = BezPath::new();
    if width.is_nan() || width <= 0.0 {
        return path;
    }
    let dir = position.direction();
    let across = perpendicular(dir);
    let center = circle_center(position, anchor, width);
    let radius = width / 2.0;

    // Where the triangle sides cross the circle.
    let entry = anchor + dir * (0.6 * width) + across * (0.3 * width);
    // Angle subtended by the chord between them, on the anchor side.
    let gap = 2.0 * Vec2::new(0.4, 0.3).atan2();

    path.move_to(anchor);
    path.line_to(entry);
    let arc = Arc::new(
        center,
        Vec2::new(radius, radius),
        (entry - center).atan2(),
        -(TAU - gap),
        0.0,
    );
    // The arc ends on the other entry point; closing returns to the anchor.
    path.extend(arc.append_iter(ARC_TOLERANCE));
    path.close_path();
    path
}

/// Origin for the value text inside the tooltip bubble.
///
/// `text_size` is the measured bounds of the text; the result is the baseline
/// origin that centers those bounds on the bubble.
#[must_use]
pub fn tooltip_label_origin(
    position: Position,
    anchor: Point,
    width: f64,
    text_size: Size,
) -> Point {
    let center = circle_center(position, anchor, width);
    Point::new(
        center.x - text_size.width / 2.0,
        center.y + text_size.height / 2.0,
    )
}

/// Origin for a tick description placed on `position` relative to its tick.
///
/// The label keeps `gap` (usually the thumb diameter) between itself and the
/// tick and is centered on the other axis.
#[must_use]
pub fn tick_label_origin(position: Position, tick: Point, text_size: Size, gap: f64) -> Point {
    let half_w = text_size.width / 2.0;
    let half_h = text_size.height / 2.0;
    let base = match position {
        Position::Left => Point::new(tick.x - text_size.width, tick.y + half_h),
        Position::Right => Point::new(tick.x, tick.y + half_h),
        Position::Top => Point::new(tick.x - half_w, tick.y - half_h),
        Position::Bottom => Point::new(tick.x - half_w, tick.y + half_h),
    };
    Margin::on(position.opposite(), gap).offset(base)
}

#[cfg(test)]
mod tests {
    use kurbo::Shape;

    use super::*;

    fn close(a: Point, b: Point) -> bool {
        (a - b).hypot() < 1e-9
    }

    #[test]
    fn anchor_is_clamped_and_centered() {
        let extent = Size::new(200.0, 100.0);
        assert_eq!(
            tooltip_anchor(Orientation::Horizontal, extent, 500.0, 10.0),
            Point::new(180.0, 50.0)
        );
        let extent = Size::new(80.0, 300.0);
        assert_eq!(
            tooltip_anchor(Orientation::Vertical, extent, 120.0, 10.0),
            Point::new(40.0, 120.0)
        );
    }

    #[test]
    fn triangle_points_toward_position() {
        let anchor = Point::new(100.0, 50.0);
        let (a, b) = triangle_vertices(Position::Top, anchor, 20.0);
        assert!(close(a, Point::new(110.0, 30.0)) || close(a, Point::new(90.0, 30.0)));
        assert!(close(a.midpoint(b), Point::new(100.0, 30.0)));
        assert!(((a - b).hypot() - 20.0).abs() < 1e-9);

        let (a, b) = triangle_vertices(Position::Left, anchor, 20.0);
        assert!(close(a.midpoint(b), Point::new(80.0, 50.0)));
        assert_eq!(a.x, b.x);
    }

    #[test]
    fn circle_offsets_by_diameter() {
        let anchor = Point::new(10.0, 10.0);
        assert_eq!(circle_center(Position::Bottom, anchor, 30.0), Point::new(10.0, 40.0));
        assert_eq!(circle_center(Position::Right, anchor, 30.0), Point::new(40.0, 10.0));
    }

    #[test]
    fn outline_is_the_union() {
        let anchor = Point::new(100.0, 100.0);
        for position in [
            Position::Left,
            Position::Top,
            Position::Right,
            Position::Bottom,
        ] {
            let width = 40.0;
            let path = tooltip_outline(position, anchor, width);
            let dir = position.direction();
            // Sample points sit slightly off the symmetry axis, which runs
            // through the apex and an arc join.
            let off = perpendicular(dir) * 0.5;
            let center = circle_center(position, anchor, width);

            // Inside the bubble, past the triangle base.
            assert!(path.contains(center + dir * (width * 0.4) + off));
            // Inside the tail, close to the apex.
            assert!(path.contains(anchor + dir * 4.0 + off));
            assert!(path.contains(anchor + dir * 4.0 - off));
            // Triangle base corners sit on the circle, not outside the union.
            let (a, b) = triangle_vertices(position, anchor, width);
            assert!(((a - center).hypot() - width / 2.0).abs() < 1e-9);
            assert!(((b - center).hypot() - width / 2.0).abs() < 1e-9);
            // Beside the apex, behind the anchor and past the bubble stay outside.
            assert!(!path.contains(anchor + dir * 4.0 + off * 6.0));
            assert!(!path.contains(anchor - dir * 5.0 + off));
            assert!(!path.contains(center + dir * width + off));

            let bounds = path.bounding_box();
            assert!((bounds.width().max(bounds.height()) - 1.5 * width).abs() < 0.5);
        }
    }

    #[test]
    fn outline_has_one_straight_side_and_closes_on_the_arc() {
        use kurbo::PathEl;

        let anchor = Point::new(60.0, 80.0);
        for position in [Position::Left, Position::Top, Position::Right, Position::Bottom] {
            let width = 40.0;
            let path = tooltip_outline(position, anchor, width);
            let elements = path.elements();
            assert_eq!(elements.first(), Some(&PathEl::MoveTo(anchor)));
            assert_eq!(elements.last(), Some(&PathEl::ClosePath));
            let lines = elements
                .iter()
                .filter(|el| matches!(el, PathEl::LineTo(_)))
                .count();
            assert_eq!(lines, 1);

            // The last arc segment lands on the second entry point.
            let dir = position.direction();
            let exit = anchor + dir * (0.6 * width) - perpendicular(dir) * (0.3 * width);
            let end = match elements[elements.len() - 2] {
                PathEl::CurveTo(_, _, p) => p,
                el => panic!("unexpected element {el:?}"),
            };
            assert!((end - exit).hypot() < 1e-6);
        }
    }

    #[test]
    fn empty_outline_when_collapsed() {
        let path = tooltip_outline(Position::Top, Point::ORIGIN, 0.0);
        assert!(path.elements().is_empty());
    }

    #[test]
    fn label_centered_in_bubble() {
        let anchor = Point::new(100.0, 100.0);
        let origin = tooltip_label_origin(Position::Top, anchor, 40.0, Size::new(20.0, 10.0));
        assert_eq!(origin, Point::new(90.0, 65.0));
    }

    #[test]
    fn tick_labels_keep_their_gap() {
        let tick = Point::new(50.0, 50.0);
        let text = Size::new(30.0, 10.0);
        assert_eq!(
            tick_label_origin(Position::Bottom, tick, text, 20.0),
            Point::new(35.0, 75.0)
        );
        assert_eq!(
            tick_label_origin(Position::Top, tick, text, 20.0),
            Point::new(35.0, 25.0)
        );
        assert_eq!(
            tick_label_origin(Position::Left, tick, text, 20.0),
            Point::new(0.0, 55.0)
        );
        assert_eq!(
            tick_label_origin(Position::Right, tick, text, 20.0),
            Point::new(70.0, 55.0)
        );
    }
}

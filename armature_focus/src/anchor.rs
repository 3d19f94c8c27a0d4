// Copyright 2025 the Armature Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchored panel placement.
//!
//! Popovers and menus position their panel rectangle relative to the
//! trigger that opened them. This module is the pure geometry half of that
//! concern: callers measure the anchor, the panel, and the viewport in one
//! consistent coordinate space and get a panel rectangle back. No styling,
//! no measurement, no host integration.
//!
//! [`place`] applies the requested [`Placement`] literally. [`place_within`]
//! additionally flips to the opposite side when the preferred side
//! overflows the viewport and the opposite side fits, then clamps the
//! panel's cross-axis position into the viewport.
//!
//! ```
//! use armature_focus::anchor::{Placement, Side, place};
//! use kurbo::{Rect, Size};
//!
//! let trigger = Rect::new(10.0, 10.0, 50.0, 30.0);
//! let panel = place(trigger, Size::new(40.0, 20.0), Placement {
//!     side: Side::Bottom,
//!     gap: 4.0,
//!     ..Placement::default()
//! });
//! assert_eq!(panel, Rect::new(10.0, 34.0, 50.0, 54.0));
//! ```

use kurbo::{Point, Rect, Size};

/// Which side of the anchor the panel prefers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Above the anchor.
    Top,
    /// Below the anchor.
    Bottom,
    /// Left of the anchor.
    Left,
    /// Right of the anchor.
    Right,
}

impl Side {
    /// The side across the anchor.
    pub fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// How the panel aligns along the anchor's cross axis.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Align {
    /// Leading edges flush (left edge for vertical sides, top edge for
    /// horizontal ones).
    #[default]
    Start,
    /// Centered on the anchor.
    Center,
    /// Trailing edges flush.
    End,
}

/// A placement request: preferred side, cross-axis alignment, and the gap
/// between anchor and panel.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement {
    /// The preferred side.
    pub side: Side,
    /// Cross-axis alignment.
    pub align: Align,
    /// Distance between the anchor's edge and the panel's, in the shared
    /// coordinate space.
    pub gap: f64,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            side: Side::Bottom,
            align: Align::Start,
            gap: 0.0,
        }
    }
}

/// Places a panel of `size` against `anchor` exactly as requested.
pub fn place(anchor: Rect, size: Size, placement: Placement) -> Rect {
    let main = match placement.side {
        Side::Bottom => anchor.y1 + placement.gap,
        Side::Top => anchor.y0 - placement.gap - size.height,
        Side::Right => anchor.x1 + placement.gap,
        Side::Left => anchor.x0 - placement.gap - size.width,
    };
    let origin = match placement.side {
        Side::Top | Side::Bottom => {
            let x = aligned(anchor.x0, anchor.x1, size.width, placement.align);
            Point::new(x, main)
        }
        Side::Left | Side::Right => {
            let y = aligned(anchor.y0, anchor.y1, size.height, placement.align);
            Point::new(main, y)
        }
    };
    Rect::from_origin_size(origin, size)
}

/// Places a panel of `size` against `anchor`, keeping it inside `viewport`
/// where possible.
///
/// When the preferred side overflows the viewport's edge on the main axis
/// and the opposite side would fit, the placement flips; otherwise the
/// preferred side stands. The cross-axis position is then clamped into the
/// viewport (a panel wider than the viewport pins to its leading edge).
pub fn place_within(anchor: Rect, size: Size, placement: Placement, viewport: Rect) -> Rect {
    let preferred = place(anchor, size, placement);
    let (rect, side) = if fits(preferred, viewport, placement.side) {
        (preferred, placement.side)
    } else {
        let opposite = Placement {
            side: placement.side.opposite(),
            ..placement
        };
        let flipped = place(anchor, size, opposite);
        if fits(flipped, viewport, opposite.side) {
            (flipped, opposite.side)
        } else {
            (preferred, placement.side)
        }
    };
    clamp_cross(rect, viewport, side)
}

fn aligned(lo: f64, hi: f64, length: f64, align: Align) -> f64 {
    match align {
        Align::Start => lo,
        Align::Center => lo + ((hi - lo) - length) / 2.0,
        Align::End => hi - length,
    }
}

fn fits(rect: Rect, viewport: Rect, side: Side) -> bool {
    match side {
        Side::Bottom => rect.y1 <= viewport.y1,
        Side::Top => rect.y0 >= viewport.y0,
        Side::Right => rect.x1 <= viewport.x1,
        Side::Left => rect.x0 >= viewport.x0,
    }
}

fn clamp_cross(rect: Rect, viewport: Rect, side: Side) -> Rect {
    match side {
        Side::Top | Side::Bottom => {
            let x = clamp_span(rect.x0, rect.width(), viewport.x0, viewport.x1);
            Rect::from_origin_size(Point::new(x, rect.y0), rect.size())
        }
        Side::Left | Side::Right => {
            let y = clamp_span(rect.y0, rect.height(), viewport.y0, viewport.y1);
            Rect::from_origin_size(Point::new(rect.x0, y), rect.size())
        }
    }
}

fn clamp_span(start: f64, length: f64, lo: f64, hi: f64) -> f64 {
    if length >= hi - lo {
        return lo;
    }
    start.clamp(lo, hi - length)
}

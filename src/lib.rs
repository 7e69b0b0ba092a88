//
// Copyright 2022-Present (c) Raja Lehtihet & Wael El Oraiby
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice,
// this list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its contributors
// may be used to endorse or promote products derived from this software without
// specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE
// ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE
// LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR
// CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF
// SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
// INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN
// CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE)
// ARISING IN ANY WAY OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE
// POSSIBILITY OF SUCH DAMAGE.
//
#![deny(missing_docs)]
//! `ugui-redux` is a retained-mode window and widget toolkit for small pixel displays.
//! The engine owns a model of windows holding buttons, checkboxes, textboxes and images, draws them
//! through a single pixel callback and turns raw touch samples into per-widget events.
//! It never allocates: windows and their object tables are storage owned by the embedding application.

mod bitmap;
#[cfg(feature = "builder")]
mod builder;
mod canvas;
mod color;
mod console;
mod context;
mod draw_ops;
mod driver;
mod font;
mod object;
mod signal;
mod text;
mod touch;
mod widgets;
mod window;

pub use bitmap::*;
#[cfg(feature = "builder")]
pub use builder::*;
pub use canvas::*;
pub use color::*;
pub use console::Console;
pub use context::*;
pub use draw_ops::*;
pub use driver::*;
pub use font::*;
pub use object::*;
pub use rs_math3d::{Recti, Vec2i};
pub use signal::*;
pub use text::*;
pub use touch::{TouchPhase, TouchSample, NO_COORDINATE};
pub use widgets::*;
pub use window::*;

use std::fmt;

/// Maximum number of vertices accepted by [`Canvas::fill_poly`].
pub const MAX_POLY_POINTS: usize = 20;
/// Number of events an object can hold between two update cycles.
pub const EVENT_QUEUE_DEPTH: usize = 4;
/// Smallest accepted window extent (`xe - xs` and `ye - ys`) when resizing.
pub const MIN_WINDOW_EXTENT: i16 = 10;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// Reasons a mutating call can be rejected.
pub enum GuiError {
    /// The window or object handle does not refer to a valid record.
    InvalidHandle,
    /// No live object matches the requested type and id.
    NotFound,
    /// The record is in use: a visible or updating object, or the active window.
    Busy,
    /// The requested geometry lies outside the screen or below the minimum extent.
    OutOfBounds,
    /// No free slot is left in a fixed-capacity table.
    Exhausted,
}

impl fmt::Display for GuiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            GuiError::InvalidHandle => "invalid window or object handle",
            GuiError::NotFound => "no object with the requested type and id",
            GuiError::Busy => "record is busy",
            GuiError::OutOfBounds => "geometry out of bounds",
            GuiError::Exhausted => "no free slot left",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for GuiError {}

/// Result type returned by every engine mutator.
pub type GuiResult<T = ()> = Result<T, GuiError>;

#[derive(Default, Copy, Clone, PartialEq, Eq, Hash, Debug)]
/// Rectangle described by its inclusive corner coordinates.
pub struct Area {
    /// Left column.
    pub xs: i16,
    /// Top row.
    pub ys: i16,
    /// Right column (inclusive).
    pub xe: i16,
    /// Bottom row (inclusive).
    pub ye: i16,
}

impl Area {
    /// Marker for a box that has not been resolved yet.
    pub const UNSET: Area = Area::new(-1, -1, -1, -1);

    /// Creates an area from its corners.
    pub const fn new(xs: i16, ys: i16, xe: i16, ye: i16) -> Self { Self { xs, ys, xe, ye } }

    /// Number of columns covered, both edges included.
    pub fn width(&self) -> i16 { self.xe - self.xs + 1 }

    /// Number of rows covered, both edges included.
    pub fn height(&self) -> i16 { self.ye - self.ys + 1 }

    /// Returns `true` when `(x, y)` lies inside the area, edges included.
    pub fn contains(&self, x: i16, y: i16) -> bool { x >= self.xs && x <= self.xe && y >= self.ys && y <= self.ye }

    /// Returns `true` when `other` lies completely inside `self`.
    pub fn covers(&self, other: &Area) -> bool { self.xs <= other.xs && self.ys <= other.ys && self.xe >= other.xe && self.ye >= other.ye }

    /// Shrinks the area by `d` on every side.
    pub fn inset(&self, d: i16) -> Area { Area::new(self.xs + d, self.ys + d, self.xe - d, self.ye - d) }

    /// Moves the area by `(dx, dy)`.
    pub fn offset(&self, dx: i16, dy: i16) -> Area { Area::new(self.xs + dx, self.ys + dy, self.xe + dx, self.ye + dy) }

    /// Returns the area with its corners ordered so that `xs <= xe` and `ys <= ye`.
    pub fn normalized(&self) -> Area {
        let (xs, xe) = if self.xe < self.xs { (self.xe, self.xs) } else { (self.xs, self.xe) };
        let (ys, ye) = if self.ye < self.ys { (self.ye, self.ys) } else { (self.ys, self.ye) };
        Area::new(xs, ys, xe, ye)
    }
}

impl From<Recti> for Area {
    fn from(r: Recti) -> Self { Area::new(r.x as i16, r.y as i16, (r.x + r.width - 1) as i16, (r.y + r.height - 1) as i16) }
}

impl From<Area> for Recti {
    fn from(a: Area) -> Self { Recti { x: a.xs as i32, y: a.ys as i32, width: a.width() as i32, height: a.height() as i32 } }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// Kind of message handed to a window callback.
pub enum MessageKind {
    /// The message originates from an object of the window.
    Object,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// Event carried by a [`Message`].
pub enum Event {
    /// Press and release both landed on the object.
    Clicked,
    /// The object is about to be fully redrawn.
    Prerender,
    /// The object was just fully redrawn.
    Postrender,
    /// The object entered its pressed state.
    Pressed,
    /// The object left its pressed state.
    Released,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// Notification delivered to a window's message callback.
pub struct Message {
    /// Message category.
    pub kind: MessageKind,
    /// Type of the source object.
    pub object_type: ObjectType,
    /// Caller-assigned id of the source object.
    pub id: u8,
    /// What happened.
    pub event: Event,
}

/// Per-window receiver for object messages.
pub type MessageCallback<'a> = &'a dyn Fn(&Message);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_edges_are_inclusive() {
        let a = Area::new(2, 3, 6, 5);
        assert_eq!(a.width(), 5);
        assert_eq!(a.height(), 3);
        assert!(a.contains(2, 3));
        assert!(a.contains(6, 5));
        assert!(!a.contains(7, 5));
        assert!(!a.contains(2, 6));
    }

    #[test]
    fn area_normalizes_and_converts() {
        let a = Area::new(9, 8, 1, 2).normalized();
        assert_eq!(a, Area::new(1, 2, 9, 8));
        let r: Recti = a.into();
        assert_eq!((r.x, r.y, r.width, r.height), (1, 2, 9, 7));
        assert_eq!(Area::from(r), a);
    }

    #[test]
    fn covering_is_edge_inclusive() {
        let outer = Area::new(0, 0, 10, 10);
        assert!(outer.covers(&Area::new(0, 0, 10, 10)));
        assert!(outer.covers(&outer.inset(3)));
        assert!(!outer.covers(&Area::new(0, 0, 11, 10)));
    }
}

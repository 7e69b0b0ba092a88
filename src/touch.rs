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
use crate::{Area, Object, ObjectState, TouchState};

/// Coordinate value meaning "no position reported".
pub const NO_COORDINATE: i16 = -1;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
/// Whether the touch panel is currently pressed.
pub enum TouchPhase {
    /// Nothing touches the panel.
    #[default]
    Released,
    /// The panel is pressed.
    Pressed,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// Latest raw touch input.
pub struct TouchSample {
    /// Column, or [`NO_COORDINATE`].
    pub x: i16,
    /// Row, or [`NO_COORDINATE`].
    pub y: i16,
    /// Press state.
    pub phase: TouchPhase,
}

impl Default for TouchSample {
    fn default() -> Self { Self { x: NO_COORDINATE, y: NO_COORDINATE, phase: TouchPhase::Released } }
}

/// Derives the next touch bits of an object whose on-screen box is `abs`.
pub(crate) fn next_touch_state(touch: TouchState, abs: Area, sample: TouchSample) -> TouchState {
    let mut t = touch;
    if sample.phase == TouchPhase::Pressed && sample.x != NO_COORDINATE {
        let first = !t.contains(TouchState::IS_PRESSED);
        if first {
            t.insert(TouchState::PRESSED_OUTSIDE_OBJECT | TouchState::CHANGED);
            t.remove(TouchState::RELEASED_ON_OBJECT | TouchState::RELEASED_OUTSIDE_OBJECT | TouchState::CLICK_ON_OBJECT);
        }
        t.remove(TouchState::IS_PRESSED_ON_OBJECT);
        if abs.contains(sample.x, sample.y) {
            t.insert(TouchState::IS_PRESSED_ON_OBJECT);
            if first {
                t.remove(TouchState::PRESSED_OUTSIDE_OBJECT);
                t.insert(TouchState::PRESSED_ON_OBJECT);
            }
        }
        t.insert(TouchState::IS_PRESSED);
    } else if t.contains(TouchState::IS_PRESSED) {
        if t.contains(TouchState::IS_PRESSED_ON_OBJECT) {
            if t.contains(TouchState::PRESSED_ON_OBJECT) {
                t.insert(TouchState::CLICK_ON_OBJECT);
            }
            t.insert(TouchState::RELEASED_ON_OBJECT);
        } else {
            t.insert(TouchState::RELEASED_OUTSIDE_OBJECT);
        }
        t.insert(TouchState::CHANGED);
        t.remove(TouchState::PRESSED_OUTSIDE_OBJECT | TouchState::PRESSED_ON_OBJECT | TouchState::IS_PRESSED);
    }
    t
}

/// Runs the touch sample against every live, visible, touch-enabled object not waiting for a redraw.
pub(crate) fn process_touch(objects: &mut [Object], sample: TouchSample) {
    for obj in objects.iter_mut() {
        let core = &mut obj.core;
        if !core.is_live()
            || !core.state.contains(ObjectState::VISIBLE | ObjectState::TOUCH_ENABLE)
            || core.state.contains(ObjectState::REDRAW)
        {
            continue;
        }
        core.touch = next_touch_state(core.touch, core.abs, sample);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOX: Area = Area::new(10, 10, 20, 20);

    fn press(x: i16, y: i16) -> TouchSample { TouchSample { x, y, phase: TouchPhase::Pressed } }

    fn release() -> TouchSample { TouchSample::default() }

    #[test]
    fn press_and_release_inside_is_a_click() {
        let t = next_touch_state(TouchState::empty(), BOX, press(15, 15));
        assert!(t.contains(TouchState::PRESSED_ON_OBJECT | TouchState::IS_PRESSED_ON_OBJECT | TouchState::IS_PRESSED | TouchState::CHANGED));
        assert!(!t.contains(TouchState::PRESSED_OUTSIDE_OBJECT));

        let t = next_touch_state(t - TouchState::CHANGED, BOX, release());
        assert!(t.contains(TouchState::CLICK_ON_OBJECT | TouchState::RELEASED_ON_OBJECT | TouchState::CHANGED));
        assert!(!t.intersects(TouchState::IS_PRESSED | TouchState::PRESSED_ON_OBJECT));
    }

    #[test]
    fn press_outside_then_release_is_not_a_click() {
        let t = next_touch_state(TouchState::empty(), BOX, press(0, 0));
        assert!(t.contains(TouchState::PRESSED_OUTSIDE_OBJECT));
        let t = next_touch_state(t, BOX, release());
        assert!(t.contains(TouchState::RELEASED_OUTSIDE_OBJECT | TouchState::CHANGED));
        assert!(!t.contains(TouchState::CLICK_ON_OBJECT));
    }

    #[test]
    fn dragging_onto_the_object_does_not_click() {
        let t = next_touch_state(TouchState::empty(), BOX, press(0, 0));
        let t = next_touch_state(t, BOX, press(15, 15));
        assert!(t.contains(TouchState::IS_PRESSED_ON_OBJECT));
        assert!(!t.contains(TouchState::PRESSED_ON_OBJECT));
        let t = next_touch_state(t, BOX, release());
        assert!(t.contains(TouchState::RELEASED_ON_OBJECT));
        assert!(!t.contains(TouchState::CLICK_ON_OBJECT));
    }

    #[test]
    fn edges_count_as_inside() {
        let t = next_touch_state(TouchState::empty(), BOX, press(20, 10));
        assert!(t.contains(TouchState::PRESSED_ON_OBJECT));
    }

    #[test]
    fn idle_release_changes_nothing() {
        assert_eq!(next_touch_state(TouchState::empty(), BOX, release()), TouchState::empty());
    }
}

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
mod button;
mod checkbox;
mod image;
mod textbox;

pub use button::*;
pub use checkbox::*;
pub use image::*;
pub use textbox::*;

use crate::{Area, Canvas, Color, Event, Font, Message, MessageKind, Object, ObjectCore, ObjectState, ObjectType, PixelSink, TouchState, Widget};

/// Bevel colors of a window frame: outer ring, middle ring, inner ring, in (top, left, bottom, right) pairs.
pub(crate) const WINDOW_PALETTE: [Color; 12] = [
    Color(0x646464),
    Color(0x646464),
    Color(0x646464),
    Color(0x646464),
    Color(0xFFFFFF),
    Color(0xFFFFFF),
    Color(0x696969),
    Color(0x696969),
    Color(0xE3E3E3),
    Color(0xE3E3E3),
    Color(0xA0A0A0),
    Color(0xA0A0A0),
];

/// Raised bevel of a released button or checkbox.
pub(crate) const RELEASED_PALETTE: [Color; 12] = WINDOW_PALETTE;

/// Sunken bevel of a pressed button or checkbox.
pub(crate) const PRESSED_PALETTE: [Color; 12] = [
    Color(0x646464),
    Color(0x646464),
    Color(0x646464),
    Color(0x646464),
    Color(0xA0A0A0),
    Color(0xA0A0A0),
    Color(0xA0A0A0),
    Color(0xA0A0A0),
    Color(0xF0F0F0),
    Color(0xF0F0F0),
    Color(0xF0F0F0),
    Color(0xF0F0F0),
];

impl<S: PixelSink> Canvas<S> {
    /// Draws the three nested rings of a bevel, each as top, left, bottom and right segments.
    pub(crate) fn draw_object_frame(&mut self, a: Area, pal: &[Color; 12]) {
        let Area { xs, ys, xe, ye } = a;
        self.draw_line(xs, ys, xe - 1, ys, pal[0]);
        self.draw_line(xs, ys + 1, xs, ye - 1, pal[1]);
        self.draw_line(xs, ye, xe, ye, pal[2]);
        self.draw_line(xe, ys, xe, ye - 1, pal[3]);

        self.draw_line(xs + 1, ys + 1, xe - 2, ys + 1, pal[4]);
        self.draw_line(xs + 1, ys + 2, xs + 1, ye - 2, pal[5]);
        self.draw_line(xs + 1, ye - 1, xe - 1, ye - 1, pal[6]);
        self.draw_line(xe - 1, ys + 1, xe - 1, ye - 2, pal[7]);

        self.draw_line(xs + 2, ys + 2, xe - 3, ys + 2, pal[8]);
        self.draw_line(xs + 2, ys + 3, xs + 2, ye - 3, pal[9]);
        self.draw_line(xs + 2, ye - 2, xe - 2, ye - 2, pal[10]);
        self.draw_line(xe - 2, ys + 2, xe - 2, ye - 3, pal[11]);
    }
}

/// Everything a widget update routine needs from its window and the context.
pub(crate) struct UpdateCtx<'c, 'f, S: PixelSink> {
    pub(crate) canvas: &'c mut Canvas<S>,
    /// Context font, used by widgets without their own.
    pub(crate) font: &'f Font<'f>,
    /// Window content rectangle; widget boxes are relative to its origin.
    pub(crate) inner: Area,
    /// Window bounds.
    pub(crate) outer: Area,
    /// Window body color, used to erase hidden widgets.
    pub(crate) back_color: Color,
    pub(crate) callback: Option<&'f dyn Fn(&Message)>,
}

impl<S: PixelSink> UpdateCtx<'_, '_, S> {
    /// Box of a widget in screen coordinates.
    pub(crate) fn absolute(&self, rel: Area) -> Area { rel.offset(self.inner.xs, self.inner.ys) }

    #[cfg(feature = "render-events")]
    pub(crate) fn render_event(&self, ty: ObjectType, core: &ObjectCore, event: Event) {
        if let Some(cb) = self.callback {
            cb(&Message { kind: MessageKind::Object, object_type: ty, id: core.id, event });
        }
    }

    #[cfg(not(feature = "render-events"))]
    pub(crate) fn render_event(&self, _ty: ObjectType, _core: &ObjectCore, _event: Event) {}
}

/// Runs the update routine of one object.
pub(crate) fn update_object<S: PixelSink>(obj: &mut Object, ctx: &mut UpdateCtx<S>) {
    let core = &mut obj.core;
    match &mut obj.widget {
        Widget::Button(btn) => button::update(btn, core, ctx),
        Widget::Checkbox(chk) => checkbox::update(chk, core, ctx),
        Widget::Textbox(txb) => textbox::update(txb, core, ctx),
        Widget::Image(img) => image::update(img, core, ctx),
        Widget::None => {}
    }
}

/// Update pass over a window's objects: dirty objects first, then touch-driven ones.
pub(crate) fn update_objects<S: PixelSink>(objects: &mut [Object], ctx: &mut UpdateCtx<S>) {
    for obj in objects.iter_mut() {
        if !obj.is_live() {
            continue;
        }
        if obj.core.state.contains(ObjectState::UPDATE) {
            update_object(obj, ctx);
        }
        if obj.core.state.contains(ObjectState::VISIBLE | ObjectState::TOUCH_ENABLE)
            && obj.core.touch.intersects(TouchState::CHANGED | TouchState::IS_PRESSED)
        {
            update_object(obj, ctx);
        }
    }
}

/// Hands every pending event to the window callback, oldest first.
pub(crate) fn deliver_events(objects: &mut [Object], callback: Option<&dyn Fn(&Message)>) {
    for obj in objects.iter_mut().filter(|o| o.is_live()) {
        let object_type = obj.object_type();
        while let Some(event) = obj.core.events.pop() {
            if let Some(cb) = callback {
                cb(&Message { kind: MessageKind::Object, object_type, id: obj.core.id, event });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::tests::recording_canvas;
    use std::collections::HashSet;

    #[test]
    fn bevel_rings_do_not_overlap() {
        let (mut canvas, plots) = recording_canvas(32, 32);
        canvas.draw_object_frame(Area::new(0, 0, 9, 9), &PRESSED_PALETTE);
        let p = plots.borrow();
        let all: Vec<(i16, i16)> = p.iter().map(|&(x, y, _)| (x, y)).collect();
        let unique: HashSet<_> = all.iter().copied().collect();
        assert_eq!(all.len(), unique.len());
        assert_eq!(unique.len(), 36 + 28 + 20);
        assert!(p.iter().any(|&(x, y, c)| (x, y) == (2, 2) && c == Color(0xF0F0F0)));
        assert!(p.iter().any(|&(x, y, c)| (x, y) == (9, 9) && c == Color(0x646464)));
    }
}

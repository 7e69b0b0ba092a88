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
use super::{ButtonStyle, PRESSED_PALETTE, RELEASED_PALETTE, UpdateCtx};
use crate::{Alignment, Area, Color, Event, Font, Gui, GuiError, GuiResult, ObjectCore, ObjectState, ObjectType, PixelSink, Text, TouchState, Widget, WindowId};

#[derive(Debug, Copy, Clone)]
/// Check box payload: a square box with an X mark followed by a label.
pub struct Checkbox<'a> {
    pub(crate) pressed: bool,
    pub(crate) always_redraw: bool,
    pub(crate) checked: bool,
    pub(crate) style: ButtonStyle,
    pub(crate) fc: Color,
    pub(crate) bc: Color,
    pub(crate) afc: Color,
    pub(crate) abc: Color,
    pub(crate) font: Option<&'a Font<'a>>,
    pub(crate) align: Alignment,
    pub(crate) h_space: i16,
    pub(crate) v_space: i16,
    pub(crate) text: &'a str,
}

impl<'a> Checkbox<'a> {
    fn new(fc: Color, bc: Color) -> Self {
        Self {
            pressed: false,
            always_redraw: false,
            checked: false,
            style: ButtonStyle::THREE_D,
            fc,
            bc,
            afc: fc,
            abc: bc,
            font: None,
            align: Alignment::TOP_LEFT,
            h_space: 2,
            v_space: 2,
            text: "-",
        }
    }

    /// Returns `true` when the box is ticked.
    pub fn is_checked(&self) -> bool { self.checked }

    /// Returns `true` while the box is held down.
    pub fn is_pressed(&self) -> bool { self.pressed }

    /// Style bits.
    pub fn style(&self) -> ButtonStyle { self.style }

    /// Label and mark color.
    pub fn fore_color(&self) -> Color { self.fc }

    /// Fill color.
    pub fn back_color(&self) -> Color { self.bc }

    /// Label color while pressed with alternate colors.
    pub fn alt_fore_color(&self) -> Color { self.afc }

    /// Fill color while pressed with alternate colors.
    pub fn alt_back_color(&self) -> Color { self.abc }

    /// Label font, `None` for the context font.
    pub fn font(&self) -> Option<&'a Font<'a>> { self.font }

    /// Label.
    pub fn text(&self) -> &'a str { self.text }

    /// Label placement.
    pub fn align(&self) -> Alignment { self.align }

    /// Pixels between glyphs.
    pub fn h_space(&self) -> i16 { self.h_space }

    /// Pixels between lines.
    pub fn v_space(&self) -> i16 { self.v_space }
}

pub(super) fn update<S: PixelSink>(chk: &mut Checkbox, core: &mut ObjectCore, ctx: &mut UpdateCtx<S>) {
    if core.touch.contains(TouchState::CHANGED) {
        if core.touch.contains(TouchState::PRESSED_ON_OBJECT) {
            chk.pressed = true;
            core.state.insert(ObjectState::UPDATE);
            core.post(Event::Pressed);
        } else if chk.pressed {
            chk.pressed = false;
            core.state.insert(ObjectState::UPDATE);
            core.post(Event::Released);
            if core.touch.contains(TouchState::RELEASED_ON_OBJECT) {
                chk.checked = !chk.checked;
            }
        }
        if core.touch.contains(TouchState::CLICK_ON_OBJECT) {
            core.state.insert(ObjectState::UPDATE);
            core.post(Event::Clicked);
        }
        core.touch.remove(TouchState::CHANGED);
    }

    if !core.state.contains(ObjectState::UPDATE) {
        return;
    }

    core.abs = ctx.absolute(core.rel);
    if core.abs.ye > ctx.outer.ye || core.abs.xe > ctx.outer.xe {
        return;
    }

    let a = core.abs;
    if core.state.contains(ObjectState::VISIBLE) {
        let font = chk.font.unwrap_or(ctx.font);
        let d = if chk.style.contains(ButtonStyle::THREE_D) { 3 } else { 1 };
        let d2 = font.char_width.max(font.char_height);

        if core.state.contains(ObjectState::REDRAW) || chk.always_redraw {
            ctx.render_event(ObjectType::Checkbox, core, Event::Prerender);
            let (mut fc, mut bc) = (chk.fc, chk.bc);
            if chk.pressed {
                if chk.style.contains(ButtonStyle::TOGGLE_COLORS) {
                    (fc, bc) = (chk.bc, chk.fc);
                } else if chk.style.contains(ButtonStyle::USE_ALTERNATE_COLORS) {
                    (fc, bc) = (chk.afc, chk.abc);
                }
            }
            if !chk.style.contains(ButtonStyle::NO_FILL) {
                ctx.canvas.fill_area(a.inset(d), bc);
            }
            ctx.canvas.put_text(&Text {
                text: chk.text,
                font,
                area: Area::new(a.xs + d2 + 3 * d, a.ys + d, a.xe, a.ye),
                fc,
                bc,
                align: chk.align,
                h_space: chk.h_space,
                v_space: chk.v_space,
            });
            core.state.remove(ObjectState::REDRAW);
            ctx.render_event(ObjectType::Checkbox, core, Event::Postrender);
        }

        let mark = if chk.checked { chk.fc } else { chk.bc };
        let (xs, ys) = (a.xs, a.ys);
        ctx.canvas.draw_line(xs + d + 1, ys + d, xs + d2 + d - 1, ys + d2 + d - 2, mark);
        ctx.canvas.draw_line(xs + d, ys + d, xs + d2 + d - 1, ys + d2 + d - 1, mark);
        ctx.canvas.draw_line(xs + d, ys + d + 1, xs + d2 + d - 2, ys + d2 + d - 1, mark);
        ctx.canvas.draw_line(xs + d2 + d - 1, ys + d + 1, xs + d + 1, ys + d2 + d - 1, mark);
        ctx.canvas.draw_line(xs + d2 + d - 1, ys + d, xs + d, ys + d2 + d - 1, mark);
        ctx.canvas.draw_line(xs + d2 + d - 2, ys + d, xs + d, ys + d2 + d - 2, mark);

        if !chk.style.contains(ButtonStyle::NO_BORDERS) {
            let frame = Area::new(xs, ys, xs + d2 + 2 * d - 1, ys + d2 + 2 * d - 1);
            if chk.style.contains(ButtonStyle::THREE_D) {
                ctx.canvas.draw_object_frame(frame, if chk.pressed { &PRESSED_PALETTE } else { &RELEASED_PALETTE });
            } else {
                let c = if chk.pressed { chk.abc } else { chk.afc };
                ctx.canvas.draw_frame(frame.xs, frame.ys, frame.xe, frame.ye, c);
            }
        }
    } else if !chk.style.contains(ButtonStyle::NO_FILL) {
        ctx.canvas.fill_area(a, ctx.back_color);
    }
    core.state.remove(ObjectState::UPDATE);
}

impl<'a, S: PixelSink> Gui<'a, S> {
    fn checkbox_mut(&mut self, wnd: WindowId, id: u8) -> GuiResult<(&mut Checkbox<'a>, &mut ObjectCore)> {
        let obj = self.live_object_mut(wnd, ObjectType::Checkbox, id)?;
        match &mut obj.widget {
            Widget::Checkbox(chk) => Ok((chk, &mut obj.core)),
            _ => Err(GuiError::NotFound),
        }
    }

    fn modify_checkbox(&mut self, wnd: WindowId, id: u8, f: impl FnOnce(&mut Checkbox<'a>)) -> GuiResult {
        let (chk, core) = self.checkbox_mut(wnd, id)?;
        f(chk);
        core.state.insert(ObjectState::UPDATE | ObjectState::REDRAW);
        Ok(())
    }

    /// Creates an unticked check box with the given id in a free slot of the window.
    pub fn checkbox_create(&mut self, wnd: WindowId, id: u8, rel: Area) -> GuiResult {
        let w = self.window(wnd)?;
        let chk = Checkbox::new(w.fore_color(), w.back_color());
        self.create_object(wnd, Widget::Checkbox(chk), id, rel, true)
    }

    /// Frees the check box's slot. Fails while it is visible or waiting for an update.
    pub fn checkbox_delete(&mut self, wnd: WindowId, id: u8) -> GuiResult { self.delete_object(wnd, ObjectType::Checkbox, id) }

    /// Shows the check box.
    pub fn checkbox_show(&mut self, wnd: WindowId, id: u8) -> GuiResult { self.show_object(wnd, ObjectType::Checkbox, id) }

    /// Hides the check box, dropping any press in progress and pending events.
    pub fn checkbox_hide(&mut self, wnd: WindowId, id: u8) -> GuiResult {
        let (chk, core) = self.checkbox_mut(wnd, id)?;
        chk.pressed = false;
        core.touch = TouchState::empty();
        core.events.clear();
        core.state.remove(ObjectState::VISIBLE);
        core.state.insert(ObjectState::UPDATE);
        Ok(())
    }

    /// Check box payload.
    pub fn checkbox(&self, wnd: WindowId, id: u8) -> GuiResult<&Checkbox<'a>> {
        match &self.live_object(wnd, ObjectType::Checkbox, id)?.widget {
            Widget::Checkbox(chk) => Ok(chk),
            _ => Err(GuiError::NotFound),
        }
    }

    /// Ticks or clears the box.
    pub fn checkbox_set_checked(&mut self, wnd: WindowId, id: u8, checked: bool) -> GuiResult { self.modify_checkbox(wnd, id, |c| c.checked = checked) }

    /// Sets the label and mark color.
    pub fn checkbox_set_fore_color(&mut self, wnd: WindowId, id: u8, c: Color) -> GuiResult { self.modify_checkbox(wnd, id, |b| b.fc = c) }

    /// Sets the fill color.
    pub fn checkbox_set_back_color(&mut self, wnd: WindowId, id: u8, c: Color) -> GuiResult { self.modify_checkbox(wnd, id, |b| b.bc = c) }

    /// Sets the pressed label color used with [`ButtonStyle::USE_ALTERNATE_COLORS`].
    pub fn checkbox_set_alt_fore_color(&mut self, wnd: WindowId, id: u8, c: Color) -> GuiResult { self.modify_checkbox(wnd, id, |b| b.afc = c) }

    /// Sets the pressed fill color used with [`ButtonStyle::USE_ALTERNATE_COLORS`].
    pub fn checkbox_set_alt_back_color(&mut self, wnd: WindowId, id: u8, c: Color) -> GuiResult { self.modify_checkbox(wnd, id, |b| b.abc = c) }

    /// Sets the label.
    pub fn checkbox_set_text(&mut self, wnd: WindowId, id: u8, text: &'a str) -> GuiResult { self.modify_checkbox(wnd, id, |b| b.text = text) }

    /// Sets the label font. The box side follows the larger glyph dimension.
    pub fn checkbox_set_font(&mut self, wnd: WindowId, id: u8, font: &'a Font<'a>) -> GuiResult { self.modify_checkbox(wnd, id, |b| b.font = Some(font)) }

    /// Sets the style. Toggle colors win over alternate colors.
    pub fn checkbox_set_style(&mut self, wnd: WindowId, id: u8, style: ButtonStyle) -> GuiResult {
        let (style, always_redraw) = style.normalized();
        self.modify_checkbox(wnd, id, |b| {
            b.style = style;
            b.always_redraw = always_redraw;
        })
    }

    /// Sets the pixels between glyphs.
    pub fn checkbox_set_h_space(&mut self, wnd: WindowId, id: u8, h_space: i16) -> GuiResult { self.modify_checkbox(wnd, id, |b| b.h_space = h_space) }

    /// Sets the pixels between lines.
    pub fn checkbox_set_v_space(&mut self, wnd: WindowId, id: u8, v_space: i16) -> GuiResult { self.modify_checkbox(wnd, id, |b| b.v_space = v_space) }

    /// Sets the label placement.
    pub fn checkbox_set_align(&mut self, wnd: WindowId, id: u8, align: Alignment) -> GuiResult { self.modify_checkbox(wnd, id, |b| b.align = align) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::tests::recording_canvas;

    const GLYPHS: [u8; 8] = [0; 8];

    fn ctx_parts() -> (Area, Area) { (Area::new(3, 19, 96, 76), Area::new(0, 0, 99, 79)) }

    #[test]
    fn release_on_box_toggles_mark() {
        let font = Font::one_bpp(&GLYPHS, 8, 8, 0x20, 0x20);
        let (mut canvas, plots) = recording_canvas(100, 80);
        let (inner, outer) = ctx_parts();
        let mut ctx = UpdateCtx { canvas: &mut canvas, font: &font, inner, outer, back_color: Color::WHITE, callback: None };

        let mut chk = Checkbox::new(Color::RED, Color::WHITE);
        let mut core = ObjectCore { state: ObjectState::VALID | ObjectState::VISIBLE | ObjectState::REDRAW | ObjectState::UPDATE, rel: Area::new(0, 0, 60, 20), ..ObjectCore::INIT };

        core.touch = TouchState::CHANGED | TouchState::PRESSED_ON_OBJECT | TouchState::IS_PRESSED;
        update(&mut chk, &mut core, &mut ctx);
        assert!(chk.pressed && !chk.checked);
        assert_eq!(core.abs, Area::new(3, 19, 63, 39));

        core.touch = TouchState::CHANGED | TouchState::RELEASED_ON_OBJECT | TouchState::CLICK_ON_OBJECT;
        update(&mut chk, &mut core, &mut ctx);
        assert!(!chk.pressed && chk.checked);
        assert_eq!(core.events.as_slice(), &[Event::Pressed, Event::Released, Event::Clicked]);
        assert!(!core.state.contains(ObjectState::UPDATE));

        // diagonal of the X mark, inside a 3D frame with an 8 pixel box
        assert!(plots.borrow().iter().any(|&(x, y, c)| (x, y) == (3 + 3 + 4, 19 + 3 + 4) && c == Color::RED));
    }

    #[test]
    fn release_outside_keeps_state() {
        let font = Font::one_bpp(&GLYPHS, 8, 8, 0x20, 0x20);
        let (mut canvas, _plots) = recording_canvas(100, 80);
        let (inner, outer) = ctx_parts();
        let mut ctx = UpdateCtx { canvas: &mut canvas, font: &font, inner, outer, back_color: Color::WHITE, callback: None };

        let mut chk = Checkbox::new(Color::RED, Color::WHITE);
        chk.pressed = true;
        let mut core = ObjectCore { state: ObjectState::VALID | ObjectState::VISIBLE, rel: Area::new(0, 0, 60, 20), ..ObjectCore::INIT };
        core.touch = TouchState::CHANGED | TouchState::RELEASED_OUTSIDE_OBJECT;
        update(&mut chk, &mut core, &mut ctx);
        assert!(!chk.checked && !chk.pressed);
        assert_eq!(core.events.as_slice(), &[Event::Released]);
    }
}

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
use super::{PRESSED_PALETTE, RELEASED_PALETTE, UpdateCtx};
use crate::{Alignment, Area, Color, Event, Font, Gui, GuiError, GuiResult, ObjectCore, ObjectState, ObjectType, PixelSink, Text, TouchState, Widget, WindowId};
use bitflags::bitflags;

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    /// Look of a button or checkbox.
    pub struct ButtonStyle : u8 {
        /// Beveled 3D border instead of a flat one.
        const THREE_D = 1;
        /// Swap fore and back colors while pressed.
        const TOGGLE_COLORS = 2;
        /// Use the alternate colors while pressed.
        const USE_ALTERNATE_COLORS = 4;
        /// No border at all.
        const NO_BORDERS = 8;
        /// Leave the background untouched.
        const NO_FILL = 16;
    }
}

impl ButtonStyle {
    /// Keeps one color scheme (toggle wins over alternate) and reports whether the widget must
    /// repaint on every update to show its pressed look.
    pub(crate) fn normalized(self) -> (ButtonStyle, bool) {
        let mut style = self & (ButtonStyle::THREE_D | ButtonStyle::NO_BORDERS | ButtonStyle::NO_FILL);
        let always_redraw = if self.contains(ButtonStyle::TOGGLE_COLORS) {
            style |= ButtonStyle::TOGGLE_COLORS;
            true
        } else if self.contains(ButtonStyle::USE_ALTERNATE_COLORS) {
            style |= ButtonStyle::USE_ALTERNATE_COLORS;
            true
        } else {
            false
        };
        (style, always_redraw)
    }
}

#[derive(Debug, Copy, Clone)]
/// Push button payload.
pub struct Button<'a> {
    pub(crate) pressed: bool,
    pub(crate) always_redraw: bool,
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

impl<'a> Button<'a> {
    fn new(fc: Color, bc: Color) -> Self {
        Self {
            pressed: false,
            always_redraw: false,
            style: ButtonStyle::THREE_D,
            fc,
            bc,
            afc: fc,
            abc: bc,
            font: None,
            align: Alignment::CENTER,
            h_space: 2,
            v_space: 2,
            text: "-",
        }
    }

    /// Returns `true` while the button is held down.
    pub fn is_pressed(&self) -> bool { self.pressed }

    /// Style bits.
    pub fn style(&self) -> ButtonStyle { self.style }

    /// Label color.
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

pub(super) fn update<S: PixelSink>(btn: &mut Button, core: &mut ObjectCore, ctx: &mut UpdateCtx<S>) {
    if core.touch.contains(TouchState::CHANGED) {
        if core.touch.contains(TouchState::PRESSED_ON_OBJECT) {
            btn.pressed = true;
            core.state.insert(ObjectState::UPDATE);
            core.post(Event::Pressed);
        } else if btn.pressed {
            btn.pressed = false;
            core.state.insert(ObjectState::UPDATE);
            core.post(Event::Released);
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

    if core.state.contains(ObjectState::VISIBLE) {
        if core.state.contains(ObjectState::REDRAW) || btn.always_redraw {
            core.abs = ctx.absolute(core.rel);
            if core.abs.ye > ctx.outer.ye || core.abs.xe > ctx.outer.xe {
                return;
            }
            ctx.render_event(ObjectType::Button, core, Event::Prerender);

            let d = if btn.style.contains(ButtonStyle::THREE_D) { 3 } else { 1 };
            let (mut fc, mut bc) = (btn.fc, btn.bc);
            if btn.pressed {
                if btn.style.contains(ButtonStyle::TOGGLE_COLORS) {
                    (fc, bc) = (btn.bc, btn.fc);
                } else if btn.style.contains(ButtonStyle::USE_ALTERNATE_COLORS) {
                    (fc, bc) = (btn.afc, btn.abc);
                }
            }

            let inner = core.abs.inset(d);
            if !btn.style.contains(ButtonStyle::NO_FILL) {
                ctx.canvas.fill_area(inner, bc);
            }
            ctx.canvas.put_text(&Text {
                text: btn.text,
                font: btn.font.unwrap_or(ctx.font),
                area: inner,
                fc,
                bc,
                align: btn.align,
                h_space: btn.h_space,
                v_space: btn.v_space,
            });
            core.state.remove(ObjectState::REDRAW);
            ctx.render_event(ObjectType::Button, core, Event::Postrender);
        }

        if !btn.style.contains(ButtonStyle::NO_BORDERS) {
            let a = core.abs;
            if btn.style.contains(ButtonStyle::THREE_D) {
                ctx.canvas.draw_object_frame(a, if btn.pressed { &PRESSED_PALETTE } else { &RELEASED_PALETTE });
            } else {
                let c = if btn.pressed { btn.abc } else { btn.afc };
                ctx.canvas.draw_frame(a.xs, a.ys, a.xe, a.ye, c);
            }
        }
    } else if !btn.style.contains(ButtonStyle::NO_FILL) && core.abs != Area::UNSET {
        ctx.canvas.fill_area(core.abs, ctx.back_color);
    }
    core.state.remove(ObjectState::UPDATE);
}

impl<'a, S: PixelSink> Gui<'a, S> {
    fn button_mut(&mut self, wnd: WindowId, id: u8) -> GuiResult<(&mut Button<'a>, &mut ObjectCore)> {
        let obj = self.live_object_mut(wnd, ObjectType::Button, id)?;
        match &mut obj.widget {
            Widget::Button(btn) => Ok((btn, &mut obj.core)),
            _ => Err(GuiError::NotFound),
        }
    }

    fn modify_button(&mut self, wnd: WindowId, id: u8, f: impl FnOnce(&mut Button<'a>)) -> GuiResult {
        let (btn, core) = self.button_mut(wnd, id)?;
        f(btn);
        core.state.insert(ObjectState::UPDATE | ObjectState::REDRAW);
        Ok(())
    }

    /// Creates a button with the given id in a free slot of the window.
    /// `rel` is relative to the window's content area.
    pub fn button_create(&mut self, wnd: WindowId, id: u8, rel: Area) -> GuiResult {
        let w = self.window(wnd)?;
        let btn = Button::new(w.fore_color(), w.back_color());
        self.create_object(wnd, Widget::Button(btn), id, rel, true)
    }

    /// Frees the button's slot. Fails while it is visible or waiting for an update.
    pub fn button_delete(&mut self, wnd: WindowId, id: u8) -> GuiResult { self.delete_object(wnd, ObjectType::Button, id) }

    /// Shows the button.
    pub fn button_show(&mut self, wnd: WindowId, id: u8) -> GuiResult { self.show_object(wnd, ObjectType::Button, id) }

    /// Hides the button, dropping any press in progress and pending events.
    pub fn button_hide(&mut self, wnd: WindowId, id: u8) -> GuiResult {
        let (btn, core) = self.button_mut(wnd, id)?;
        btn.pressed = false;
        core.touch = TouchState::empty();
        core.events.clear();
        core.state.remove(ObjectState::VISIBLE);
        core.state.insert(ObjectState::UPDATE);
        Ok(())
    }

    /// Button payload.
    pub fn button(&self, wnd: WindowId, id: u8) -> GuiResult<&Button<'a>> {
        match &self.live_object(wnd, ObjectType::Button, id)?.widget {
            Widget::Button(btn) => Ok(btn),
            _ => Err(GuiError::NotFound),
        }
    }

    /// Sets the label color.
    pub fn button_set_fore_color(&mut self, wnd: WindowId, id: u8, c: Color) -> GuiResult { self.modify_button(wnd, id, |b| b.fc = c) }

    /// Sets the fill color.
    pub fn button_set_back_color(&mut self, wnd: WindowId, id: u8, c: Color) -> GuiResult { self.modify_button(wnd, id, |b| b.bc = c) }

    /// Sets the pressed label color used with [`ButtonStyle::USE_ALTERNATE_COLORS`].
    pub fn button_set_alt_fore_color(&mut self, wnd: WindowId, id: u8, c: Color) -> GuiResult { self.modify_button(wnd, id, |b| b.afc = c) }

    /// Sets the pressed fill color used with [`ButtonStyle::USE_ALTERNATE_COLORS`].
    pub fn button_set_alt_back_color(&mut self, wnd: WindowId, id: u8, c: Color) -> GuiResult { self.modify_button(wnd, id, |b| b.abc = c) }

    /// Sets the label.
    pub fn button_set_text(&mut self, wnd: WindowId, id: u8, text: &'a str) -> GuiResult { self.modify_button(wnd, id, |b| b.text = text) }

    /// Sets the label font.
    pub fn button_set_font(&mut self, wnd: WindowId, id: u8, font: &'a Font<'a>) -> GuiResult { self.modify_button(wnd, id, |b| b.font = Some(font)) }

    /// Sets the style. Toggle colors win over alternate colors.
    pub fn button_set_style(&mut self, wnd: WindowId, id: u8, style: ButtonStyle) -> GuiResult {
        let (style, always_redraw) = style.normalized();
        self.modify_button(wnd, id, |b| {
            b.style = style;
            b.always_redraw = always_redraw;
        })
    }

    /// Sets the pixels between glyphs.
    pub fn button_set_h_space(&mut self, wnd: WindowId, id: u8, h_space: i16) -> GuiResult { self.modify_button(wnd, id, |b| b.h_space = h_space) }

    /// Sets the pixels between lines.
    pub fn button_set_v_space(&mut self, wnd: WindowId, id: u8, v_space: i16) -> GuiResult { self.modify_button(wnd, id, |b| b.v_space = v_space) }

    /// Sets the label placement.
    pub fn button_set_align(&mut self, wnd: WindowId, id: u8, align: Alignment) -> GuiResult { self.modify_button(wnd, id, |b| b.align = align) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_wins_over_alternate() {
        let (style, redraw) = (ButtonStyle::TOGGLE_COLORS | ButtonStyle::USE_ALTERNATE_COLORS | ButtonStyle::THREE_D).normalized();
        assert_eq!(style, ButtonStyle::TOGGLE_COLORS | ButtonStyle::THREE_D);
        assert!(redraw);

        let (style, redraw) = (ButtonStyle::NO_FILL | ButtonStyle::NO_BORDERS).normalized();
        assert_eq!(style, ButtonStyle::NO_FILL | ButtonStyle::NO_BORDERS);
        assert!(!redraw);

        let (_, redraw) = ButtonStyle::USE_ALTERNATE_COLORS.normalized();
        assert!(redraw);
    }
}

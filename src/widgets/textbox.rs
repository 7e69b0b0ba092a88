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
use super::UpdateCtx;
use crate::{Alignment, Area, Color, Event, Font, Gui, GuiError, GuiResult, ObjectCore, ObjectState, ObjectType, PixelSink, Text, Widget, WindowId};

#[derive(Debug, Copy, Clone)]
/// Static text box payload.
pub struct Textbox<'a> {
    pub(crate) text: Option<&'a str>,
    pub(crate) font: Option<&'a Font<'a>>,
    pub(crate) fc: Color,
    pub(crate) bc: Color,
    pub(crate) align: Alignment,
    pub(crate) h_space: i16,
    pub(crate) v_space: i16,
}

impl<'a> Textbox<'a> {
    fn new(fc: Color, bc: Color) -> Self { Self { text: None, font: None, fc, bc, align: Alignment::CENTER, h_space: 0, v_space: 0 } }

    /// Content, `None` for an empty box.
    pub fn text(&self) -> Option<&'a str> { self.text }

    /// Font, `None` for the context font.
    pub fn font(&self) -> Option<&'a Font<'a>> { self.font }

    /// Text color.
    pub fn fore_color(&self) -> Color { self.fc }

    /// Fill color.
    pub fn back_color(&self) -> Color { self.bc }

    /// Text placement.
    pub fn align(&self) -> Alignment { self.align }

    /// Pixels between glyphs.
    pub fn h_space(&self) -> i16 { self.h_space }

    /// Pixels between lines.
    pub fn v_space(&self) -> i16 { self.v_space }
}

impl Default for Textbox<'_> {
    fn default() -> Self { Textbox::new(Color(0x000000), Color(0xF0F0F0)) }
}

pub(super) fn update<S: PixelSink>(txb: &mut Textbox, core: &mut ObjectCore, ctx: &mut UpdateCtx<S>) {
    if !core.state.contains(ObjectState::UPDATE) {
        return;
    }
    if core.state.contains(ObjectState::VISIBLE) {
        if core.state.contains(ObjectState::REDRAW) {
            core.abs = ctx.absolute(core.rel);
            if core.abs.ye >= ctx.outer.ye || core.abs.xe >= ctx.outer.xe {
                return;
            }
            ctx.render_event(ObjectType::Textbox, core, Event::Prerender);
            ctx.canvas.fill_area(core.abs, txb.bc);
            if let Some(text) = txb.text {
                ctx.canvas.put_text(&Text {
                    text,
                    font: txb.font.unwrap_or(ctx.font),
                    area: core.abs,
                    fc: txb.fc,
                    bc: txb.bc,
                    align: txb.align,
                    h_space: txb.h_space,
                    v_space: txb.v_space,
                });
            }
            core.state.remove(ObjectState::REDRAW);
            ctx.render_event(ObjectType::Textbox, core, Event::Postrender);
        }
    } else if core.abs != Area::UNSET {
        ctx.canvas.fill_area(core.abs, ctx.back_color);
    }
    core.state.remove(ObjectState::UPDATE);
}

impl<'a, S: PixelSink> Gui<'a, S> {
    fn modify_textbox(&mut self, wnd: WindowId, id: u8, f: impl FnOnce(&mut Textbox<'a>)) -> GuiResult {
        let obj = self.live_object_mut(wnd, ObjectType::Textbox, id)?;
        match &mut obj.widget {
            Widget::Textbox(txb) => f(txb),
            _ => return Err(GuiError::NotFound),
        }
        obj.core.state.insert(ObjectState::UPDATE | ObjectState::REDRAW);
        Ok(())
    }

    /// Creates an empty text box with the given id in a free slot of the window.
    pub fn textbox_create(&mut self, wnd: WindowId, id: u8, rel: Area) -> GuiResult {
        let w = self.window(wnd)?;
        let txb = Textbox::new(w.fore_color(), w.back_color());
        self.create_object(wnd, Widget::Textbox(txb), id, rel, false)
    }

    /// Frees the text box's slot. Fails while it is visible or waiting for an update.
    pub fn textbox_delete(&mut self, wnd: WindowId, id: u8) -> GuiResult { self.delete_object(wnd, ObjectType::Textbox, id) }

    /// Shows the text box.
    pub fn textbox_show(&mut self, wnd: WindowId, id: u8) -> GuiResult { self.show_object(wnd, ObjectType::Textbox, id) }

    /// Hides the text box; the next update paints its box with the window color.
    pub fn textbox_hide(&mut self, wnd: WindowId, id: u8) -> GuiResult { self.hide_object(wnd, ObjectType::Textbox, id) }

    /// Text box payload.
    pub fn textbox(&self, wnd: WindowId, id: u8) -> GuiResult<&Textbox<'a>> {
        match &self.live_object(wnd, ObjectType::Textbox, id)?.widget {
            Widget::Textbox(txb) => Ok(txb),
            _ => Err(GuiError::NotFound),
        }
    }

    /// Sets the content.
    pub fn textbox_set_text(&mut self, wnd: WindowId, id: u8, text: &'a str) -> GuiResult { self.modify_textbox(wnd, id, |t| t.text = Some(text)) }

    /// Sets the font.
    pub fn textbox_set_font(&mut self, wnd: WindowId, id: u8, font: &'a Font<'a>) -> GuiResult { self.modify_textbox(wnd, id, |t| t.font = Some(font)) }

    /// Sets the text color.
    pub fn textbox_set_fore_color(&mut self, wnd: WindowId, id: u8, c: Color) -> GuiResult { self.modify_textbox(wnd, id, |t| t.fc = c) }

    /// Sets the fill color.
    pub fn textbox_set_back_color(&mut self, wnd: WindowId, id: u8, c: Color) -> GuiResult { self.modify_textbox(wnd, id, |t| t.bc = c) }

    /// Sets the pixels between glyphs.
    pub fn textbox_set_h_space(&mut self, wnd: WindowId, id: u8, h_space: i16) -> GuiResult { self.modify_textbox(wnd, id, |t| t.h_space = h_space) }

    /// Sets the pixels between lines.
    pub fn textbox_set_v_space(&mut self, wnd: WindowId, id: u8, v_space: i16) -> GuiResult { self.modify_textbox(wnd, id, |t| t.v_space = v_space) }

    /// Sets the text placement.
    pub fn textbox_set_align(&mut self, wnd: WindowId, id: u8, align: Alignment) -> GuiResult { self.modify_textbox(wnd, id, |t| t.align = align) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::tests::recording_canvas;

    #[test]
    fn box_touching_the_window_edge_is_skipped() {
        let (mut canvas, plots) = recording_canvas(100, 80);
        let mut ctx = UpdateCtx {
            canvas: &mut canvas,
            font: &Font::EMPTY,
            inner: Area::new(3, 19, 96, 76),
            outer: Area::new(0, 0, 99, 79),
            back_color: Color::WHITE,
            callback: None,
        };
        let mut txb = Textbox::default();
        let mut core = ObjectCore {
            state: ObjectState::VALID | ObjectState::VISIBLE | ObjectState::UPDATE | ObjectState::REDRAW,
            rel: Area::new(0, 0, 96, 10),
            ..ObjectCore::INIT
        };
        update(&mut txb, &mut core, &mut ctx);
        assert!(plots.borrow().is_empty());
        assert!(core.state.contains(ObjectState::UPDATE | ObjectState::REDRAW));

        core.rel = Area::new(0, 0, 9, 9);
        update(&mut txb, &mut core, &mut ctx);
        assert_eq!(plots.borrow().len(), 100);
        assert!(!core.state.intersects(ObjectState::UPDATE | ObjectState::REDRAW));
    }

    #[test]
    fn hidden_box_is_erased_with_window_color() {
        let (mut canvas, plots) = recording_canvas(100, 80);
        let mut ctx = UpdateCtx {
            canvas: &mut canvas,
            font: &Font::EMPTY,
            inner: Area::new(3, 19, 96, 76),
            outer: Area::new(0, 0, 99, 79),
            back_color: Color::GREEN,
            callback: None,
        };
        let mut txb = Textbox::default();
        let mut core = ObjectCore { state: ObjectState::VALID | ObjectState::UPDATE, ..ObjectCore::INIT };
        update(&mut txb, &mut core, &mut ctx);
        assert!(plots.borrow().is_empty());

        core.abs = Area::new(10, 20, 11, 21);
        core.state.insert(ObjectState::UPDATE);
        update(&mut txb, &mut core, &mut ctx);
        assert_eq!(plots.borrow().as_slice(), &[(10, 20, Color::GREEN), (11, 20, Color::GREEN), (10, 21, Color::GREEN), (11, 21, Color::GREEN)]);
    }
}

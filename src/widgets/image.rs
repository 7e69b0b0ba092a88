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
use crate::{Area, Bitmap, Gui, GuiError, GuiResult, ObjectCore, ObjectState, ObjectType, PixelSink, Widget, WindowId};

#[derive(Debug, Default, Copy, Clone)]
/// Image payload. The box is sized by the bitmap, starting at the object's relative origin.
pub struct Image<'a> {
    pub(crate) bitmap: Option<&'a Bitmap<'a>>,
}

impl<'a> Image<'a> {
    /// Bitmap shown, if any.
    pub fn bitmap(&self) -> Option<&'a Bitmap<'a>> { self.bitmap }
}

pub(super) fn update<S: PixelSink>(img: &mut Image, core: &mut ObjectCore, ctx: &mut UpdateCtx<S>) {
    if !core.state.contains(ObjectState::UPDATE) {
        return;
    }
    if core.state.contains(ObjectState::VISIBLE) {
        if core.state.contains(ObjectState::REDRAW) {
            let Some(bmp) = img.bitmap else {
                core.state.remove(ObjectState::UPDATE | ObjectState::REDRAW);
                return;
            };
            let (xs, ys) = (core.rel.xs + ctx.inner.xs, core.rel.ys + ctx.inner.ys);
            core.abs = Area::new(xs, ys, xs + bmp.width, ys + bmp.height);
            if core.abs.ye >= ctx.outer.ye || core.abs.xe >= ctx.outer.xe {
                return;
            }
            ctx.canvas.draw_bmp(xs, ys, bmp);
            core.state.remove(ObjectState::REDRAW);
        }
    } else if core.abs != Area::UNSET {
        ctx.canvas.fill_area(core.abs, ctx.back_color);
    }
    core.state.remove(ObjectState::UPDATE);
}

impl<'a, S: PixelSink> Gui<'a, S> {
    /// Creates an image without a bitmap in a free slot of the window. Only the origin of `rel` is used.
    pub fn image_create(&mut self, wnd: WindowId, id: u8, rel: Area) -> GuiResult {
        self.create_object(wnd, Widget::Image(Image::default()), id, rel, false)
    }

    /// Frees the image's slot. Fails while it is visible or waiting for an update.
    pub fn image_delete(&mut self, wnd: WindowId, id: u8) -> GuiResult { self.delete_object(wnd, ObjectType::Image, id) }

    /// Shows the image.
    pub fn image_show(&mut self, wnd: WindowId, id: u8) -> GuiResult { self.show_object(wnd, ObjectType::Image, id) }

    /// Hides the image; the next update paints its box with the window color.
    pub fn image_hide(&mut self, wnd: WindowId, id: u8) -> GuiResult { self.hide_object(wnd, ObjectType::Image, id) }

    /// Image payload.
    pub fn image(&self, wnd: WindowId, id: u8) -> GuiResult<&Image<'a>> {
        match &self.live_object(wnd, ObjectType::Image, id)?.widget {
            Widget::Image(img) => Ok(img),
            _ => Err(GuiError::NotFound),
        }
    }

    /// Sets the bitmap shown by the image.
    pub fn image_set_bmp(&mut self, wnd: WindowId, id: u8, bmp: &'a Bitmap<'a>) -> GuiResult {
        let obj = self.live_object_mut(wnd, ObjectType::Image, id)?;
        match &mut obj.widget {
            Widget::Image(img) => img.bitmap = Some(bmp),
            _ => return Err(GuiError::NotFound),
        }
        obj.core.state.insert(ObjectState::UPDATE | ObjectState::REDRAW);
        Ok(())
    }
}

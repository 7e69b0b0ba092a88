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
use crate::{widgets::WINDOW_PALETTE, Alignment, Area, Canvas, Color, Font, MessageCallback, Object, ObjectState, PixelSink, Text};
use bitflags::bitflags;
use log::*;

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    /// Lifecycle and dirty bits of a window.
    pub struct WindowState : u8 {
        /// The table slot holds a created window.
        const VALID = 2;
        /// The window is shown.
        const VISIBLE = 8;
        /// The window must be redrawn at the next update.
        const UPDATE = 32;
        /// Only the title bar needs repainting.
        const REDRAW_TITLE = 64;
    }
}

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    /// Look of a window.
    pub struct WindowStyle : u8 {
        /// Beveled 3D frame.
        const THREE_D = 1;
        /// Title bar on top.
        const SHOW_TITLE = 2;
    }
}

#[derive(Debug, Copy, Clone)]
/// Title bar of a window.
pub struct Title<'a> {
    /// Caption, `None` for an empty bar.
    pub text: Option<&'a str>,
    /// Caption font, `None` to use the context font.
    pub font: Option<&'a Font<'a>>,
    /// Pixels between glyphs.
    pub h_space: i16,
    /// Pixels between lines.
    pub v_space: i16,
    /// Caption placement.
    pub align: Alignment,
    /// Caption color of the active window.
    pub fc: Color,
    /// Bar color of the active window.
    pub bc: Color,
    /// Caption color of an inactive window.
    pub ifc: Color,
    /// Bar color of an inactive window.
    pub ibc: Color,
    /// Bar height in pixels.
    pub height: i16,
}

impl Title<'_> {
    const DEFAULT: Title<'static> = Title {
        text: None,
        font: None,
        h_space: 2,
        v_space: 2,
        align: Alignment::CENTER_LEFT,
        fc: Color::WHITE,
        bc: Color::BLUE,
        ifc: Color::WHITE,
        ibc: Color::GRAY,
        height: 15,
    };
}

/// A window record.
///
/// Tables of windows are storage owned by the application, e.g.
/// `[const { Window::new() }; 4]`; [`Gui::window_create`](crate::Gui::window_create) claims a slot.
pub struct Window<'a> {
    pub(crate) objects: Option<&'a mut [Object<'a>]>,
    pub(crate) state: WindowState,
    pub(crate) fc: Color,
    pub(crate) bc: Color,
    pub(crate) area: Area,
    pub(crate) style: WindowStyle,
    pub(crate) title: Title<'a>,
    pub(crate) callback: Option<MessageCallback<'a>>,
}

impl<'a> Window<'a> {
    /// Creates an unused table slot.
    pub const fn new() -> Self {
        Self {
            objects: None,
            state: WindowState::empty(),
            fc: Color::BLACK,
            bc: Color::BLACK,
            area: Area::new(0, 0, 0, 0),
            style: WindowStyle::empty(),
            title: Title::DEFAULT,
            callback: None,
        }
    }

    pub(crate) fn init(&mut self, objects: &'a mut [Object<'a>], callback: MessageCallback<'a>, screen: Area) {
        for obj in objects.iter_mut() {
            obj.reset();
        }
        *self = Window {
            objects: Some(objects),
            state: WindowState::VALID,
            fc: Color(0x000000),
            bc: Color(0xF0F0F0),
            area: screen,
            style: WindowStyle::THREE_D | WindowStyle::SHOW_TITLE,
            title: Title::DEFAULT,
            callback: Some(callback),
        };
    }

    /// Returns `true` once the slot holds a created window.
    pub fn is_valid(&self) -> bool { self.state.contains(WindowState::VALID) }

    /// Returns `true` while the window is shown.
    pub fn is_visible(&self) -> bool { self.state.contains(WindowState::VISIBLE) }

    /// State bits.
    pub fn state(&self) -> WindowState { self.state }

    /// Style bits.
    pub fn style(&self) -> WindowStyle { self.style }

    /// Outer bounds on screen.
    pub fn area(&self) -> Area { self.area }

    /// Foreground color.
    pub fn fore_color(&self) -> Color { self.fc }

    /// Body color.
    pub fn back_color(&self) -> Color { self.bc }

    /// Title bar settings.
    pub fn title(&self) -> &Title<'a> { &self.title }

    /// Object table.
    pub fn objects(&self) -> &[Object<'a>] { self.objects.as_deref().unwrap_or_default() }

    pub(crate) fn objects_mut(&mut self) -> &mut [Object<'a>] { self.objects.as_deref_mut().unwrap_or_default() }

    /// Content rectangle: the bounds minus the bevel and the title bar.
    pub fn inner_area(&self) -> Area {
        let mut a = self.area;
        if self.style.contains(WindowStyle::THREE_D) {
            a = a.inset(3);
        }
        if self.style.contains(WindowStyle::SHOW_TITLE) {
            a.ys += self.title.height + 1;
        }
        a
    }

    /// Width available to objects.
    pub fn inner_width(&self) -> i16 {
        let mut w = self.area.xe - self.area.xs;
        if self.style.contains(WindowStyle::THREE_D) {
            w -= 6;
        }
        w.max(0)
    }

    /// Width of the bounds.
    pub fn outer_width(&self) -> i16 { (self.area.xe - self.area.xs).max(0) }

    /// Height available to objects.
    pub fn inner_height(&self) -> i16 {
        let mut h = self.area.ye - self.area.ys;
        if self.style.contains(WindowStyle::THREE_D) {
            h -= 6;
        }
        if self.style.contains(WindowStyle::SHOW_TITLE) {
            h -= self.title.height;
        }
        h.max(0)
    }

    /// Height of the bounds.
    pub fn outer_height(&self) -> i16 { (self.area.ye - self.area.ys).max(0) }

    pub(crate) fn draw_title<S: PixelSink>(&self, canvas: &mut Canvas<S>, gui_font: &Font, active: bool) {
        let mut a = self.area;
        if self.style.contains(WindowStyle::THREE_D) {
            a = a.inset(3);
        }
        let t = &self.title;
        let (fc, bc) = if active { (t.fc, t.bc) } else { (t.ifc, t.ibc) };

        canvas.fill_frame(a.xs, a.ys, a.xe, a.ys + t.height - 1, bc);
        if let Some(text) = t.text {
            canvas.put_text(&Text {
                text,
                font: t.font.unwrap_or(gui_font),
                area: Area::new(a.xs + 3, a.ys, a.xe, a.ys + t.height - 1),
                fc,
                bc,
                align: t.align,
                h_space: t.h_space,
                v_space: t.v_space,
            });
        }
        canvas.draw_line(a.xs, a.ys + t.height, a.xe, a.ys + t.height, WINDOW_PALETTE[11]);
    }

    /// Repaints the active window and forces every visible object to redraw.
    pub(crate) fn redraw<S: PixelSink>(&mut self, canvas: &mut Canvas<S>, gui_font: &Font, desktop: Color) {
        self.state.remove(WindowState::UPDATE);
        if !self.is_visible() {
            canvas.fill_area(self.area, desktop);
            return;
        }

        let title_only = self.state.contains(WindowState::REDRAW_TITLE);
        self.state.remove(WindowState::REDRAW_TITLE);
        trace!("window redraw {:?} title_only={}", self.area, title_only);

        let mut a = self.area;
        if self.style.contains(WindowStyle::THREE_D) {
            if !title_only {
                canvas.draw_object_frame(a, &WINDOW_PALETTE);
            }
            a = a.inset(3);
        }
        if self.style.contains(WindowStyle::SHOW_TITLE) {
            self.draw_title(canvas, gui_font, true);
            if title_only {
                return;
            }
            a.ys += self.title.height + 1;
        }

        canvas.fill_area(a, self.bc);
        for obj in self.objects_mut() {
            if obj.is_live() && obj.core.state.contains(ObjectState::VISIBLE) {
                obj.core.state.insert(ObjectState::UPDATE | ObjectState::REDRAW);
            }
        }
    }
}

impl Default for Window<'_> {
    fn default() -> Self { Window::new() }
}

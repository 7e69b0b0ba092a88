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
use crate::object;
use crate::touch::process_touch;
use crate::widgets::{UpdateCtx, deliver_events, update_objects};
use crate::{
    Alignment, Area, Canvas, Color, Console, Driver, DriverKind, DriverStatus, Font, GuiError, GuiResult, MIN_WINDOW_EXTENT, MessageCallback, Object,
    ObjectState, ObjectType, PixelSink, TouchPhase, TouchSample, UpdateSignal, Widget, Window, WindowState, WindowStyle,
};
use log::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
/// Handle of a window: its index in the window table.
pub struct WindowId(usize);

impl WindowId {
    /// Index into the window table.
    pub fn index(&self) -> usize { self.0 }
}

#[derive(Debug, Copy, Clone)]
/// Run-time defaults of a [`Gui`].
pub struct GuiConfig {
    /// Color of the screen behind the windows.
    pub desktop_color: Color,
    /// Color of free-form text.
    pub fore_color: Color,
    /// Background of free-form text.
    pub back_color: Color,
    /// Pixels between glyphs of free-form text.
    pub char_h_space: i16,
    /// Pixels between lines of free-form text.
    pub char_v_space: i16,
    /// Distance of the console region from the screen edges.
    pub console_inset: i16,
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            desktop_color: Color(0x5E8BEF),
            fore_color: Color::WHITE,
            back_color: Color::BLACK,
            char_h_space: 1,
            char_v_space: 1,
            console_inset: 4,
        }
    }
}

/// A display and everything shown on it.
///
/// The context owns the pixel sink; windows and their objects live in tables borrowed from the
/// application for `'a`. Input is fed with [`Gui::touch_update`] and the screen is brought up to
/// date by calling [`Gui::update`] periodically.
pub struct Gui<'a, S: PixelSink> {
    canvas: Canvas<S>,
    windows: &'a mut [Window<'a>],
    next: Option<WindowId>,
    active: Option<WindowId>,
    last: Option<WindowId>,
    touch: TouchSample,
    console: Console,
    font: Font<'a>,
    char_h_space: i16,
    char_v_space: i16,
    fore_color: Color,
    back_color: Color,
    desktop_color: Color,
    update_signal: Option<&'a UpdateSignal>,
}

impl<'a, S: PixelSink> Gui<'a, S> {
    /// Creates a context for a `width` x `height` display with default settings.
    pub fn new(sink: S, width: i16, height: i16, windows: &'a mut [Window<'a>]) -> Self { Self::with_config(sink, width, height, windows, GuiConfig::default()) }

    /// Creates a context for a `width` x `height` display.
    pub fn with_config(sink: S, width: i16, height: i16, windows: &'a mut [Window<'a>], config: GuiConfig) -> Self {
        let inset = config.console_inset;
        let console_area = Area::new(inset, inset, width - inset - 1, height - inset - 1);
        for w in windows.iter_mut() {
            *w = Window::new();
        }
        debug!("gui {}x{} with {} window slots", width, height, windows.len());
        Self {
            canvas: Canvas::new(sink, width, height),
            windows,
            next: None,
            active: None,
            last: None,
            touch: TouchSample::default(),
            console: Console::new(console_area, config.fore_color, config.back_color),
            font: Font::EMPTY,
            char_h_space: config.char_h_space,
            char_v_space: config.char_v_space,
            fore_color: config.fore_color,
            back_color: config.back_color,
            desktop_color: config.desktop_color,
            update_signal: None,
        }
    }

    /// Drawing surface.
    pub fn canvas(&self) -> &Canvas<S> { &self.canvas }

    /// Mutable drawing surface, for primitives outside any window.
    pub fn canvas_mut(&mut self) -> &mut Canvas<S> { &mut self.canvas }

    /// Display width.
    pub fn x_dim(&self) -> i16 { self.canvas.width() }

    /// Display height.
    pub fn y_dim(&self) -> i16 { self.canvas.height() }

    ////////////////////////////////////////////////////////////////////////////
    // drivers
    ////////////////////////////////////////////////////////////////////////////

    /// Installs an accelerator in its slot and enables it.
    pub fn driver_register(&mut self, driver: Driver) {
        debug!("driver {:?} registered", driver.kind());
        self.canvas.drivers_mut().register(driver)
    }

    /// Activates a registered accelerator.
    pub fn driver_enable(&mut self, kind: DriverKind) { self.canvas.drivers_mut().enable(kind) }

    /// Deactivates a registered accelerator.
    pub fn driver_disable(&mut self, kind: DriverKind) { self.canvas.drivers_mut().disable(kind) }

    /// Status of an accelerator slot.
    pub fn driver_status(&self, kind: DriverKind) -> DriverStatus { self.canvas.drivers().status(kind) }

    ////////////////////////////////////////////////////////////////////////////
    // text
    ////////////////////////////////////////////////////////////////////////////

    /// Selects the context font, used by free-form text and by every widget without its own font.
    pub fn font_select(&mut self, font: Font<'a>) { self.font = font }

    /// Context font.
    pub fn font(&self) -> &Font<'a> { &self.font }

    /// Sets the pixels between glyphs of free-form text.
    pub fn font_set_hspace(&mut self, s: i16) { self.char_h_space = s }

    /// Sets the pixels between lines of free-form text.
    pub fn font_set_vspace(&mut self, s: i16) { self.char_v_space = s }

    /// Sets the color of free-form text.
    pub fn set_forecolor(&mut self, c: Color) { self.fore_color = c }

    /// Sets the background of free-form text.
    pub fn set_backcolor(&mut self, c: Color) { self.back_color = c }

    /// Color of free-form text.
    pub fn forecolor(&self) -> Color { self.fore_color }

    /// Background of free-form text.
    pub fn backcolor(&self) -> Color { self.back_color }

    /// Color of the screen behind the windows.
    pub fn desktop_color(&self) -> Color { self.desktop_color }

    /// Sets the color of the screen behind the windows. Takes effect at the next repaint.
    pub fn set_desktop_color(&mut self, c: Color) { self.desktop_color = c }

    /// Draws one character with the context font.
    pub fn put_char(&mut self, ch: char, x: i16, y: i16, fc: Color, bc: Color) { self.canvas.put_char(ch, x, y, fc, bc, &self.font) }

    /// Draws text starting at `(x, y)`, wrapping back to `x` at the right screen edge and at `'\n'`.
    pub fn put_string(&mut self, x: i16, y: i16, s: &str) {
        let font = &self.font;
        let (mut xp, mut yp) = (x, y);
        for ch in s.chars() {
            if ch == '\n' {
                xp = self.canvas.width();
                continue;
            }
            let Some(code) = font.code_of(ch) else { continue };
            let cw = font.glyph_width(code);
            if xp + cw > self.canvas.width() - 1 {
                xp = x;
                yp += font.char_height + self.char_v_space;
            }
            self.canvas.put_glyph(code, xp, yp, self.fore_color, self.back_color, font);
            xp += cw + self.char_h_space;
        }
    }

    ////////////////////////////////////////////////////////////////////////////
    // console
    ////////////////////////////////////////////////////////////////////////////

    /// Console state.
    pub fn console(&self) -> &Console { &self.console }

    /// Appends text to the console, scrolling back to the top once the region is full.
    pub fn console_put_string(&mut self, s: &str) {
        let Gui { canvas, console, font, char_h_space, char_v_space, .. } = self;
        console.put_string(canvas, font, *char_h_space, *char_v_space, s)
    }

    /// Moves the console to another region. Fails if the region lies off screen.
    pub fn console_set_area(&mut self, area: Area) -> GuiResult {
        let a = area.normalized();
        if a.xs < 0 || a.ys < 0 || a.xe >= self.x_dim() || a.ye >= self.y_dim() {
            warn!("console area {:?} is off screen", area);
            return Err(GuiError::OutOfBounds);
        }
        self.console.set_area(a);
        Ok(())
    }

    /// Sets the console text color.
    pub fn console_set_forecolor(&mut self, c: Color) { self.console.set_fore_color(c) }

    /// Sets the console background.
    pub fn console_set_backcolor(&mut self, c: Color) { self.console.set_back_color(c) }

    ////////////////////////////////////////////////////////////////////////////
    // input and frame
    ////////////////////////////////////////////////////////////////////////////

    /// Records the latest touch sample. Pass [`NO_COORDINATE`](crate::NO_COORDINATE) when the
    /// panel reports no position.
    pub fn touch_update(&mut self, x: i16, y: i16, phase: TouchPhase) { self.touch = TouchSample { x, y, phase } }

    /// Latest touch sample.
    pub fn touch(&self) -> TouchSample { self.touch }

    /// Lets another task wait on `signal` until the next [`Gui::update`].
    pub fn attach_update_signal(&mut self, signal: &'a UpdateSignal) { self.update_signal = Some(signal) }

    /// Brings the screen up to date.
    ///
    /// Handles a pending window switch, repaints the active window if needed, then runs touch
    /// dispatch, object updates and event delivery, each over all objects before the next starts.
    pub fn update(&mut self) {
        if let Some(signal) = self.update_signal {
            signal.acknowledge();
        }
        self.switch_window();

        let Some(active) = self.active else { return };
        let Gui { canvas, windows, font, touch, desktop_color, .. } = self;
        let Some(wnd) = windows.get_mut(active.0) else { return };

        if wnd.state.contains(WindowState::UPDATE) {
            wnd.redraw(canvas, font, *desktop_color);
        }
        if !wnd.is_visible() {
            return;
        }

        let mut ctx = UpdateCtx {
            canvas,
            font: &*font,
            inner: wnd.inner_area(),
            outer: wnd.area,
            back_color: wnd.bc,
            callback: wnd.callback,
        };
        let callback = wnd.callback;
        let objects = wnd.objects_mut();
        process_touch(objects, *touch);
        update_objects(objects, &mut ctx);
        deliver_events(objects, callback);
    }

    fn switch_window(&mut self) {
        if self.next == self.active {
            return;
        }
        let Some(next) = self.next else { return };
        self.last = self.active;
        self.active = Some(next);
        trace!("window switch {:?} -> {:?}", self.last, next);

        let Some(next_area) = self.windows.get(next.0).map(|w| w.area) else { return };
        if let Some(last) = self.last.and_then(|l| self.windows.get(l.0)) {
            // windows of the same size hide the old title anyway
            if last.style.contains(WindowStyle::SHOW_TITLE) && last.is_visible() && last.area != next_area {
                last.draw_title(&mut self.canvas, &self.font, false);
            }
        }
        if let Some(w) = self.windows.get_mut(next.0) {
            w.state.remove(WindowState::REDRAW_TITLE);
            w.state.insert(WindowState::UPDATE | WindowState::VISIBLE);
        }
    }

    ////////////////////////////////////////////////////////////////////////////
    // windows
    ////////////////////////////////////////////////////////////////////////////

    fn valid_window(&self, id: WindowId) -> GuiResult<&Window<'a>> { self.windows.get(id.0).filter(|w| w.is_valid()).ok_or(GuiError::InvalidHandle) }

    fn valid_window_mut(&mut self, id: WindowId) -> GuiResult<&mut Window<'a>> {
        self.windows.get_mut(id.0).filter(|w| w.is_valid()).ok_or(GuiError::InvalidHandle)
    }

    fn modify_window(&mut self, id: WindowId, state: WindowState, f: impl FnOnce(&mut Window<'a>)) -> GuiResult {
        let w = self.valid_window_mut(id)?;
        w.state.insert(state);
        f(w);
        Ok(())
    }

    /// Claims the first unused slot of the window table for a new hidden window covering the whole
    /// screen. Every slot of `objects` is reset.
    pub fn window_create(&mut self, objects: &'a mut [Object<'a>], callback: MessageCallback<'a>) -> GuiResult<WindowId> {
        if objects.is_empty() {
            warn!("window without object slots");
            return Err(GuiError::InvalidHandle);
        }
        let screen = Area::new(0, 0, self.x_dim() - 1, self.y_dim() - 1);
        let Some(index) = self.windows.iter().position(|w| !w.is_valid()) else {
            warn!("window table is full");
            return Err(GuiError::Exhausted);
        };
        debug!("window {} created with {} object slots", index, objects.len());
        self.windows[index].init(objects, callback, screen);
        Ok(WindowId(index))
    }

    /// Releases a window's slot. The active window cannot be deleted.
    pub fn window_delete(&mut self, id: WindowId) -> GuiResult {
        if self.active == Some(id) {
            warn!("window {} is active and cannot be deleted", id.0);
            return Err(GuiError::Busy);
        }
        *self.valid_window_mut(id)? = Window::new();
        if self.next == Some(id) {
            self.next = None;
        }
        if self.last == Some(id) {
            self.last = None;
        }
        debug!("window {} deleted", id.0);
        Ok(())
    }

    /// Makes the window the active one at the next update. Showing the active window again forces a
    /// full repaint.
    pub fn window_show(&mut self, id: WindowId) -> GuiResult {
        let w = self.valid_window_mut(id)?;
        w.state.insert(WindowState::VISIBLE | WindowState::UPDATE);
        w.state.remove(WindowState::REDRAW_TITLE);
        self.next = Some(id);
        debug!("window {} shown", id.0);
        Ok(())
    }

    /// Hides a window. Hiding the active window brings back the previously active one when it is
    /// still visible.
    pub fn window_hide(&mut self, id: WindowId) -> GuiResult {
        let area = self.valid_window(id)?.area;
        debug!("window {} hidden", id.0);
        if self.active != Some(id) {
            self.window_clear(id);
            return Ok(());
        }

        let previous = self.last.filter(|l| self.windows.get(l.0).is_some_and(|w| w.is_visible()));
        match previous {
            Some(last) => {
                if !self.windows[last.0].area.covers(&area) {
                    self.window_clear(id);
                }
                self.next = Some(last);
            }
            None => {
                let w = self.valid_window_mut(id)?;
                w.state.remove(WindowState::VISIBLE);
                w.state.insert(WindowState::UPDATE);
            }
        }
        Ok(())
    }

    /// Paints a visible window's bounds with the desktop color and marks it hidden. The active
    /// window is repainted when a window other than itself is cleared.
    fn window_clear(&mut self, id: WindowId) {
        let Some(w) = self.windows.get_mut(id.0) else { return };
        if !w.is_visible() {
            return;
        }
        w.state.remove(WindowState::VISIBLE);
        let area = w.area;
        self.canvas.fill_area(area, self.desktop_color);

        if self.active == Some(id) {
            return;
        }
        if let Some(active) = self.active.and_then(|a| self.windows.get_mut(a.0)) {
            if active.is_visible() {
                active.state.remove(WindowState::REDRAW_TITLE);
                active.state.insert(WindowState::UPDATE);
            }
        }
    }

    /// Moves and resizes a window. The bounds must lie on screen and span at least
    /// [`MIN_WINDOW_EXTENT`] pixels each way. Resizing the active window repaints the uncovered
    /// desktop right away.
    pub fn window_resize(&mut self, id: WindowId, area: Area) -> GuiResult {
        let (xmax, ymax) = (self.x_dim() - 1, self.y_dim() - 1);
        let is_active = self.active == Some(id);
        let w = self.valid_window_mut(id)?;
        if w.area == area {
            return Ok(());
        }
        if area.xs < 0 || area.ys < 0 || area.xe > xmax || area.ye > ymax {
            warn!("window {} resize to {:?} leaves the screen", id.0, area);
            return Err(GuiError::OutOfBounds);
        }
        if area.xe - area.xs < MIN_WINDOW_EXTENT || area.ye - area.ys < MIN_WINDOW_EXTENT {
            warn!("window {} resize to {:?} is too small", id.0, area);
            return Err(GuiError::OutOfBounds);
        }

        w.area = area;
        let repaint = is_active && w.is_visible();
        debug!("window {} resized to {:?}", id.0, area);
        if !repaint {
            return Ok(());
        }

        let desktop = self.desktop_color;
        let a = area;
        if a.ys > 0 {
            self.canvas.fill_frame(0, 0, xmax, a.ys - 1, desktop);
        }
        if a.ye < ymax {
            self.canvas.fill_frame(0, a.ye + 1, xmax, ymax, desktop);
        }
        if a.xs > 0 {
            self.canvas.fill_frame(0, a.ys, a.xs - 1, a.ye, desktop);
        }
        if a.xe < xmax {
            self.canvas.fill_frame(a.xe + 1, a.ys, xmax, a.ye, desktop);
        }
        self.modify_window(id, WindowState::UPDATE, |w| w.state.remove(WindowState::REDRAW_TITLE))
    }

    /// Swaps the title text and title bar colors to draw attention to the window.
    pub fn window_alert(&mut self, id: WindowId) -> GuiResult {
        self.modify_window(id, WindowState::UPDATE | WindowState::REDRAW_TITLE, |w| {
            std::mem::swap(&mut w.title.fc, &mut w.title.bc);
        })
    }

    /// Window record.
    pub fn window(&self, id: WindowId) -> GuiResult<&Window<'a>> { self.valid_window(id) }

    /// Content rectangle of the window; object boxes are relative to its top-left corner.
    pub fn window_area(&self, id: WindowId) -> GuiResult<Area> { Ok(self.valid_window(id)?.inner_area()) }

    /// Active window, if any.
    pub fn active_window(&self) -> Option<WindowId> { self.active }

    /// Sets the window's foreground color.
    pub fn window_set_forecolor(&mut self, id: WindowId, c: Color) -> GuiResult {
        self.modify_window(id, WindowState::UPDATE, |w| {
            w.fc = c;
            w.state.remove(WindowState::REDRAW_TITLE);
        })
    }

    /// Sets the window's body color.
    pub fn window_set_backcolor(&mut self, id: WindowId, c: Color) -> GuiResult {
        self.modify_window(id, WindowState::UPDATE, |w| {
            w.bc = c;
            w.state.remove(WindowState::REDRAW_TITLE);
        })
    }

    /// Sets the caption.
    pub fn window_set_title_text(&mut self, id: WindowId, text: &'a str) -> GuiResult {
        self.modify_window(id, WindowState::UPDATE | WindowState::REDRAW_TITLE, |w| w.title.text = Some(text))
    }

    /// Sets the caption font. The bar grows to fit the font, which repaints the whole window.
    pub fn window_set_title_text_font(&mut self, id: WindowId, font: &'a Font<'a>) -> GuiResult {
        self.modify_window(id, WindowState::UPDATE | WindowState::REDRAW_TITLE, |w| {
            w.title.font = Some(font);
            if w.title.height <= font.char_height + 1 {
                w.title.height = font.char_height + 2;
                w.state.remove(WindowState::REDRAW_TITLE);
            }
        })
    }

    /// Sets the caption color of the active window.
    pub fn window_set_title_text_color(&mut self, id: WindowId, c: Color) -> GuiResult {
        self.modify_window(id, WindowState::UPDATE | WindowState::REDRAW_TITLE, |w| w.title.fc = c)
    }

    /// Sets the bar color of the active window.
    pub fn window_set_title_color(&mut self, id: WindowId, c: Color) -> GuiResult {
        self.modify_window(id, WindowState::UPDATE | WindowState::REDRAW_TITLE, |w| w.title.bc = c)
    }

    /// Sets the caption color of the window while inactive.
    pub fn window_set_title_inactive_text_color(&mut self, id: WindowId, c: Color) -> GuiResult {
        self.modify_window(id, WindowState::UPDATE | WindowState::REDRAW_TITLE, |w| w.title.ifc = c)
    }

    /// Sets the bar color of the window while inactive.
    pub fn window_set_title_inactive_color(&mut self, id: WindowId, c: Color) -> GuiResult {
        self.modify_window(id, WindowState::UPDATE | WindowState::REDRAW_TITLE, |w| w.title.ibc = c)
    }

    /// Sets the pixels between caption glyphs.
    pub fn window_set_title_text_hspace(&mut self, id: WindowId, s: i16) -> GuiResult {
        self.modify_window(id, WindowState::UPDATE | WindowState::REDRAW_TITLE, |w| w.title.h_space = s)
    }

    /// Sets the pixels between caption lines.
    pub fn window_set_title_text_vspace(&mut self, id: WindowId, s: i16) -> GuiResult {
        self.modify_window(id, WindowState::UPDATE | WindowState::REDRAW_TITLE, |w| w.title.v_space = s)
    }

    /// Sets the caption placement.
    pub fn window_set_title_text_alignment(&mut self, id: WindowId, align: Alignment) -> GuiResult {
        self.modify_window(id, WindowState::UPDATE | WindowState::REDRAW_TITLE, |w| w.title.align = align)
    }

    /// Sets the bar height, repainting the whole window.
    pub fn window_set_title_height(&mut self, id: WindowId, height: i16) -> GuiResult {
        self.modify_window(id, WindowState::UPDATE, |w| {
            w.title.height = height;
            w.state.remove(WindowState::REDRAW_TITLE);
        })
    }

    /// Moves the left edge.
    pub fn window_set_xstart(&mut self, id: WindowId, xs: i16) -> GuiResult {
        let a = self.valid_window(id)?.area;
        self.window_resize(id, Area { xs, ..a })
    }

    /// Moves the top edge.
    pub fn window_set_ystart(&mut self, id: WindowId, ys: i16) -> GuiResult {
        let a = self.valid_window(id)?.area;
        self.window_resize(id, Area { ys, ..a })
    }

    /// Moves the right edge.
    pub fn window_set_xend(&mut self, id: WindowId, xe: i16) -> GuiResult {
        let a = self.valid_window(id)?.area;
        self.window_resize(id, Area { xe, ..a })
    }

    /// Moves the bottom edge.
    pub fn window_set_yend(&mut self, id: WindowId, ye: i16) -> GuiResult {
        let a = self.valid_window(id)?.area;
        self.window_resize(id, Area { ye, ..a })
    }

    /// Switches the bevel and the title bar on or off.
    pub fn window_set_style(&mut self, id: WindowId, style: WindowStyle) -> GuiResult {
        self.modify_window(id, WindowState::UPDATE, |w| {
            w.style = style & (WindowStyle::THREE_D | WindowStyle::SHOW_TITLE);
            w.state.remove(WindowState::REDRAW_TITLE);
        })
    }

    ////////////////////////////////////////////////////////////////////////////
    // objects
    ////////////////////////////////////////////////////////////////////////////

    /// Object of the window with the given type and id.
    pub fn object(&self, wnd: WindowId, ty: ObjectType, id: u8) -> GuiResult<&Object<'a>> { self.live_object(wnd, ty, id) }

    pub(crate) fn live_object(&self, wnd: WindowId, ty: ObjectType, id: u8) -> GuiResult<&Object<'a>> {
        object::find_object(self.valid_window(wnd)?.objects(), ty, id).ok_or(GuiError::NotFound)
    }

    pub(crate) fn live_object_mut(&mut self, wnd: WindowId, ty: ObjectType, id: u8) -> GuiResult<&mut Object<'a>> {
        object::search_object(self.valid_window_mut(wnd)?.objects_mut(), ty, id).ok_or(GuiError::NotFound)
    }

    pub(crate) fn create_object(&mut self, wnd: WindowId, widget: Widget<'a>, id: u8, rel: Area, touch: bool) -> GuiResult {
        let ty = widget.object_type();
        let obj = object::create_object(self.valid_window_mut(wnd)?.objects_mut(), widget, id, rel).inspect_err(|_| {
            warn!("window {} has no free object slot for {:?} {}", wnd.0, ty, id);
        })?;
        obj.core.state.insert(ObjectState::VISIBLE | ObjectState::REDRAW);
        if touch {
            obj.core.state.insert(ObjectState::TOUCH_ENABLE);
        }
        debug!("{:?} {} created in window {}", ty, id, wnd.0);
        Ok(())
    }

    pub(crate) fn delete_object(&mut self, wnd: WindowId, ty: ObjectType, id: u8) -> GuiResult {
        object::delete_object(self.valid_window_mut(wnd)?.objects_mut(), ty, id).inspect_err(|e| {
            warn!("{:?} {} in window {} not deleted: {}", ty, id, wnd.0, e);
        })?;
        debug!("{:?} {} deleted from window {}", ty, id, wnd.0);
        Ok(())
    }

    pub(crate) fn show_object(&mut self, wnd: WindowId, ty: ObjectType, id: u8) -> GuiResult {
        let obj = self.live_object_mut(wnd, ty, id)?;
        obj.core.state.insert(ObjectState::VISIBLE | ObjectState::UPDATE | ObjectState::REDRAW);
        Ok(())
    }

    pub(crate) fn hide_object(&mut self, wnd: WindowId, ty: ObjectType, id: u8) -> GuiResult {
        let obj = self.live_object_mut(wnd, ty, id)?;
        obj.core.state.remove(ObjectState::VISIBLE);
        obj.core.state.insert(ObjectState::UPDATE);
        Ok(())
    }
}

/// Several displays driven by one application, one of them selected at a time.
pub struct GuiSet<'a, S: PixelSink, const N: usize> {
    guis: [Gui<'a, S>; N],
    active: usize,
}

impl<'a, S: PixelSink, const N: usize> GuiSet<'a, S, N> {
    /// Wraps the contexts; the first one is selected.
    pub fn new(guis: [Gui<'a, S>; N]) -> Self { Self { guis, active: 0 } }

    /// Selects the context that receives subsequent calls.
    pub fn select(&mut self, index: usize) -> GuiResult {
        if index >= N {
            return Err(GuiError::OutOfBounds);
        }
        self.active = index;
        Ok(())
    }

    /// Index of the selected context.
    pub fn active_index(&self) -> usize { self.active }

    /// Selected context.
    pub fn active(&self) -> &Gui<'a, S> { &self.guis[self.active] }

    /// Mutable selected context.
    pub fn active_mut(&mut self) -> &mut Gui<'a, S> { &mut self.guis[self.active] }

    /// Context at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Gui<'a, S>> { self.guis.get_mut(index) }
}

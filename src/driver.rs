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
use crate::{Color, GuiResult};

/// Hardware line drawer. Returning an error makes the engine fall back to software.
pub type DrawLineFn = fn(x1: i16, y1: i16, x2: i16, y2: i16, c: Color) -> GuiResult;
/// Hardware rectangle filler. Returning an error makes the engine fall back to software.
pub type FillFrameFn = fn(x1: i16, y1: i16, x2: i16, y2: i16, c: Color) -> GuiResult;
/// Pixel pusher returned by a [`FillAreaFn`]; receives pixels in row-major order.
pub type PushPixelFn = fn(c: Color);
/// Opens an output window on the display and returns the function streaming pixels into it.
pub type FillAreaFn = fn(x1: i16, y1: i16, x2: i16, y2: i16) -> PushPixelFn;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// Identifies one of the acceleration slots.
pub enum DriverKind {
    /// Line drawing.
    DrawLine,
    /// Solid rectangle filling.
    FillFrame,
    /// Streaming pixels into a rectangle (glyph blits).
    FillArea,
}

impl DriverKind {
    fn slot(self) -> usize {
        match self {
            DriverKind::DrawLine => 0,
            DriverKind::FillFrame => 1,
            DriverKind::FillArea => 2,
        }
    }
}

#[derive(Debug, Copy, Clone)]
/// Acceleration function handed to [`DriverRegistry::register`].
pub enum Driver {
    /// Line drawer.
    DrawLine(DrawLineFn),
    /// Rectangle filler.
    FillFrame(FillFrameFn),
    /// Area streamer.
    FillArea(FillAreaFn),
}

impl Driver {
    /// Slot the driver belongs to.
    pub fn kind(&self) -> DriverKind {
        match self {
            Driver::DrawLine(_) => DriverKind::DrawLine,
            Driver::FillFrame(_) => DriverKind::FillFrame,
            Driver::FillArea(_) => DriverKind::FillArea,
        }
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
/// Registration state of one acceleration slot.
pub enum DriverStatus {
    /// Nothing was registered.
    #[default]
    Unset,
    /// Registered and consulted before software drawing.
    Enabled,
    /// Registered but bypassed.
    Disabled,
}

#[derive(Debug, Default, Copy, Clone)]
struct DriverSlot {
    driver: Option<Driver>,
    status: DriverStatus,
}

#[derive(Debug, Default, Copy, Clone)]
/// The three acceleration slots consulted by the rasterizer.
pub struct DriverRegistry {
    slots: [DriverSlot; 3],
}

impl DriverRegistry {
    /// Creates a registry with every slot unset.
    pub const fn new() -> Self { Self { slots: [DriverSlot { driver: None, status: DriverStatus::Unset }; 3] } }

    /// Installs `driver` in its slot and enables it.
    pub fn register(&mut self, driver: Driver) {
        let slot = &mut self.slots[driver.kind().slot()];
        slot.driver = Some(driver);
        slot.status = DriverStatus::Enabled;
    }

    /// Enables a registered slot; unset slots stay unset.
    pub fn enable(&mut self, kind: DriverKind) {
        let slot = &mut self.slots[kind.slot()];
        if slot.status != DriverStatus::Unset {
            slot.status = DriverStatus::Enabled;
        }
    }

    /// Disables a registered slot; unset slots stay unset.
    pub fn disable(&mut self, kind: DriverKind) {
        let slot = &mut self.slots[kind.slot()];
        if slot.status != DriverStatus::Unset {
            slot.status = DriverStatus::Disabled;
        }
    }

    /// Current state of a slot.
    pub fn status(&self, kind: DriverKind) -> DriverStatus { self.slots[kind.slot()].status }

    fn active(&self, kind: DriverKind) -> Option<Driver> {
        let slot = &self.slots[kind.slot()];
        if slot.status == DriverStatus::Enabled { slot.driver } else { None }
    }

    pub(crate) fn draw_line(&self) -> Option<DrawLineFn> {
        match self.active(DriverKind::DrawLine) {
            Some(Driver::DrawLine(f)) => Some(f),
            _ => None,
        }
    }

    pub(crate) fn fill_frame(&self) -> Option<FillFrameFn> {
        match self.active(DriverKind::FillFrame) {
            Some(Driver::FillFrame(f)) => Some(f),
            _ => None,
        }
    }

    pub(crate) fn fill_area(&self) -> Option<FillAreaFn> {
        match self.active(DriverKind::FillArea) {
            Some(Driver::FillArea(f)) => Some(f),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(_: i16, _: i16, _: i16, _: i16, _: Color) -> GuiResult { Ok(()) }

    #[test]
    fn enable_requires_registration() {
        let mut reg = DriverRegistry::new();
        reg.enable(DriverKind::DrawLine);
        assert_eq!(reg.status(DriverKind::DrawLine), DriverStatus::Unset);
        assert!(reg.draw_line().is_none());

        reg.register(Driver::DrawLine(line));
        assert_eq!(reg.status(DriverKind::DrawLine), DriverStatus::Enabled);
        assert!(reg.draw_line().is_some());

        reg.disable(DriverKind::DrawLine);
        assert_eq!(reg.status(DriverKind::DrawLine), DriverStatus::Disabled);
        assert!(reg.draw_line().is_none());

        reg.enable(DriverKind::DrawLine);
        assert!(reg.draw_line().is_some());
        assert_eq!(reg.status(DriverKind::FillFrame), DriverStatus::Unset);
    }
}

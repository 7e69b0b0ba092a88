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
use crate::{Area, Button, Checkbox, EVENT_QUEUE_DEPTH, Event, GuiError, GuiResult, Image, Textbox};
use bitflags::bitflags;
use log::*;

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    /// Lifecycle and dirty bits of an object slot.
    pub struct ObjectState : u8 {
        /// The slot holds no object.
        const FREE = 1;
        /// The slot belongs to a created window.
        const VALID = 2;
        /// Reserved.
        const BUSY = 4;
        /// The object is shown.
        const VISIBLE = 8;
        /// Reserved.
        const ENABLE = 16;
        /// The object must run its update routine.
        const UPDATE = 32;
        /// The object must be fully repainted.
        const REDRAW = 64;
        /// The object takes part in touch dispatch.
        const TOUCH_ENABLE = 128;

        /// Empty, usable slot.
        const INIT = Self::FREE.bits() | Self::VALID.bits();
    }
}

bitflags! {
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
    /// Touch transitions recorded for an object.
    pub struct TouchState : u8 {
        /// Something changed since the object last looked.
        const CHANGED = 1;
        /// The press began on the object.
        const PRESSED_ON_OBJECT = 2;
        /// The press began outside the object.
        const PRESSED_OUTSIDE_OBJECT = 4;
        /// The press ended on the object.
        const RELEASED_ON_OBJECT = 8;
        /// The press ended outside the object.
        const RELEASED_OUTSIDE_OBJECT = 16;
        /// The current sample lies on the object.
        const IS_PRESSED_ON_OBJECT = 32;
        /// A press is in progress.
        const IS_PRESSED = 64;
        /// Press and release both landed on the object.
        const CLICK_ON_OBJECT = 128;
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// Kind of an object.
pub enum ObjectType {
    /// Empty slot.
    None,
    /// Push button.
    Button,
    /// Static text box.
    Textbox,
    /// Bitmap.
    Image,
    /// Check box.
    Checkbox,
}

#[derive(Debug, Copy, Clone)]
/// Fixed-depth FIFO of events waiting for delivery.
pub struct EventQueue {
    events: [Event; EVENT_QUEUE_DEPTH],
    len: usize,
}

impl EventQueue {
    /// Creates an empty queue.
    pub const fn new() -> Self { Self { events: [Event::Clicked; EVENT_QUEUE_DEPTH], len: 0 } }

    /// Appends an event; returns `false` and drops it when the queue is full.
    pub fn push(&mut self, event: Event) -> bool {
        if self.len == EVENT_QUEUE_DEPTH {
            return false;
        }
        self.events[self.len] = event;
        self.len += 1;
        true
    }

    /// Removes the oldest event.
    pub fn pop(&mut self) -> Option<Event> {
        if self.len == 0 {
            return None;
        }
        let head = self.events[0];
        self.events.copy_within(1..self.len, 0);
        self.len -= 1;
        Some(head)
    }

    /// Pending events, oldest first.
    pub fn as_slice(&self) -> &[Event] { &self.events[..self.len] }

    /// Returns `true` when nothing is pending.
    pub fn is_empty(&self) -> bool { self.len == 0 }

    /// Drops every pending event.
    pub fn clear(&mut self) { self.len = 0 }
}

impl Default for EventQueue {
    fn default() -> Self { Self::new() }
}

#[derive(Debug, Copy, Clone)]
/// Per-type data of an object.
pub enum Widget<'a> {
    /// Empty slot.
    None,
    /// Push button.
    Button(Button<'a>),
    /// Check box.
    Checkbox(Checkbox<'a>),
    /// Static text box.
    Textbox(Textbox<'a>),
    /// Bitmap.
    Image(Image<'a>),
}

impl Widget<'_> {
    /// Type tag of the payload.
    pub fn object_type(&self) -> ObjectType {
        match self {
            Widget::None => ObjectType::None,
            Widget::Button(_) => ObjectType::Button,
            Widget::Checkbox(_) => ObjectType::Checkbox,
            Widget::Textbox(_) => ObjectType::Textbox,
            Widget::Image(_) => ObjectType::Image,
        }
    }
}

#[derive(Debug, Copy, Clone)]
pub(crate) struct ObjectCore {
    pub(crate) state: ObjectState,
    pub(crate) touch: TouchState,
    pub(crate) abs: Area,
    pub(crate) rel: Area,
    pub(crate) id: u8,
    pub(crate) events: EventQueue,
}

impl ObjectCore {
    pub(crate) const INIT: ObjectCore = ObjectCore {
        state: ObjectState::INIT,
        touch: TouchState::empty(),
        abs: Area::UNSET,
        rel: Area::UNSET,
        id: 0,
        events: EventQueue::new(),
    };

    pub(crate) fn post(&mut self, event: Event) {
        if !self.events.push(event) {
            warn!("object {} event queue full, dropping {:?}", self.id, event);
        }
    }

    pub(crate) fn is_live(&self) -> bool { !self.state.contains(ObjectState::FREE) && self.state.contains(ObjectState::VALID) }
}

#[derive(Debug, Copy, Clone)]
/// One slot of a window's object table.
///
/// The table is plain storage owned by the application; every slot starts empty and is claimed by
/// the widget create calls of [`Gui`](crate::Gui).
pub struct Object<'a> {
    pub(crate) core: ObjectCore,
    pub(crate) widget: Widget<'a>,
}

impl<'a> Object<'a> {
    /// Creates an empty slot.
    pub const fn new() -> Self { Self { core: ObjectCore::INIT, widget: Widget::None } }

    /// Type of the object held by the slot.
    pub fn object_type(&self) -> ObjectType { self.widget.object_type() }

    /// Caller-assigned id.
    pub fn id(&self) -> u8 { self.core.id }

    /// State bits.
    pub fn state(&self) -> ObjectState { self.core.state }

    /// Touch bits.
    pub fn touch_state(&self) -> TouchState { self.core.touch }

    /// Box relative to the window's inner area.
    pub fn rel_area(&self) -> Area { self.core.rel }

    /// Box on screen, resolved at the last redraw.
    pub fn abs_area(&self) -> Area { self.core.abs }

    /// Events waiting for delivery.
    pub fn pending_events(&self) -> &[Event] { self.core.events.as_slice() }

    /// Widget payload.
    pub fn widget(&self) -> &Widget<'a> { &self.widget }

    /// Returns `true` when the slot holds no object and can be claimed.
    pub fn is_free(&self) -> bool { self.core.state.contains(ObjectState::INIT) }

    /// Returns `true` when the slot holds an object.
    pub fn is_live(&self) -> bool { self.core.is_live() }

    pub(crate) fn reset(&mut self) { *self = Object::new() }
}

impl Default for Object<'_> {
    fn default() -> Self { Object::new() }
}

/// First slot that is both free and valid.
pub(crate) fn free_object<'o, 'a>(objects: &'o mut [Object<'a>]) -> Option<&'o mut Object<'a>> {
    objects.iter_mut().find(|o| o.is_free())
}

/// First live object with the given type and id.
pub(crate) fn search_object<'o, 'a>(objects: &'o mut [Object<'a>], ty: ObjectType, id: u8) -> Option<&'o mut Object<'a>> {
    objects.iter_mut().find(|o| o.is_live() && o.object_type() == ty && o.core.id == id)
}

pub(crate) fn find_object<'o, 'a>(objects: &'o [Object<'a>], ty: ObjectType, id: u8) -> Option<&'o Object<'a>> {
    objects.iter().find(|o| o.is_live() && o.object_type() == ty && o.core.id == id)
}

/// Releases an object's slot. Visible objects and objects waiting for an update are kept.
pub(crate) fn delete_object(objects: &mut [Object], ty: ObjectType, id: u8) -> GuiResult {
    let obj = search_object(objects, ty, id).ok_or(GuiError::NotFound)?;
    if obj.core.state.intersects(ObjectState::VISIBLE | ObjectState::UPDATE) {
        return Err(GuiError::Busy);
    }
    obj.reset();
    Ok(())
}

/// Claims a free slot for a new widget and returns it.
pub(crate) fn create_object<'o, 'a>(objects: &'o mut [Object<'a>], widget: Widget<'a>, id: u8, rel: Area) -> GuiResult<&'o mut Object<'a>> {
    let obj = free_object(objects).ok_or(GuiError::Exhausted)?;
    obj.core = ObjectCore { id, rel, ..ObjectCore::INIT };
    obj.core.state.remove(ObjectState::FREE);
    obj.widget = widget;
    Ok(obj)
}

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
use std::cell::RefCell;
use ugui_redux::*;

#[derive(Default)]
struct Framebuffer {
    plots: Vec<(i16, i16, Color)>,
}

impl PixelSink for Framebuffer {
    fn plot(&mut self, x: i16, y: i16, c: Color) { self.plots.push((x, y, c)) }
}

const BUTTON_BOX: Area = Area::new(10, 10, 50, 30);

fn plots<'a>(gui: &'a Gui<'_, Framebuffer>) -> &'a [(i16, i16, Color)] { &gui.canvas().sink().plots }

fn clear_plots(gui: &mut Gui<'_, Framebuffer>) { gui.canvas_mut().sink_mut().plots.clear() }

fn touch_events(log: &RefCell<Vec<Message>>) -> Vec<(ObjectType, u8, Event)> {
    log.borrow()
        .iter()
        .filter(|m| !matches!(m.event, Event::Prerender | Event::Postrender))
        .map(|m| (m.object_type, m.id, m.event))
        .collect()
}

#[test_log::test]
fn press_and_release_on_a_button() {
    let log = RefCell::new(Vec::new());
    let cb = |m: &Message| log.borrow_mut().push(*m);
    let mut windows = [const { Window::new() }; 1];
    let mut objects = [Object::new(); 4];
    let mut gui = Gui::new(Framebuffer::default(), 120, 100, &mut windows);

    let w = gui.window_create(&mut objects, &cb).unwrap();
    gui.button_create(w, 0, BUTTON_BOX).unwrap();
    gui.window_show(w).unwrap();
    gui.update();

    let abs = gui.object(w, ObjectType::Button, 0).unwrap().abs_area();
    assert_eq!(abs, Area::new(13, 29, 53, 49));
    assert!(touch_events(&log).is_empty());

    gui.touch_update((abs.xs + abs.xe) / 2, (abs.ys + abs.ye) / 2, TouchPhase::Pressed);
    gui.update();
    assert!(gui.button(w, 0).unwrap().is_pressed());
    gui.touch_update(NO_COORDINATE, NO_COORDINATE, TouchPhase::Released);
    gui.update();

    assert_eq!(
        touch_events(&log),
        vec![(ObjectType::Button, 0, Event::Pressed), (ObjectType::Button, 0, Event::Released), (ObjectType::Button, 0, Event::Clicked)]
    );
    assert!(!gui.button(w, 0).unwrap().is_pressed());
    assert!(gui.object(w, ObjectType::Button, 0).unwrap().pending_events().is_empty());
}

#[test]
fn render_events_wrap_the_first_paint() {
    let log = RefCell::new(Vec::new());
    let cb = |m: &Message| log.borrow_mut().push(*m);
    let mut windows = [const { Window::new() }; 1];
    let mut objects = [Object::new(); 1];
    let mut gui = Gui::new(Framebuffer::default(), 120, 100, &mut windows);

    let w = gui.window_create(&mut objects, &cb).unwrap();
    gui.textbox_create(w, 3, Area::new(0, 0, 20, 10)).unwrap();
    gui.window_show(w).unwrap();
    gui.update();

    let events: Vec<Event> = log.borrow().iter().map(|m| m.event).collect();
    if cfg!(feature = "render-events") {
        assert_eq!(events, vec![Event::Prerender, Event::Postrender]);
    } else {
        assert!(events.is_empty());
    }
}

#[test]
fn press_outside_never_clicks() {
    let log = RefCell::new(Vec::new());
    let cb = |m: &Message| log.borrow_mut().push(*m);
    let mut windows = [const { Window::new() }; 1];
    let mut objects = [Object::new(); 1];
    let mut gui = Gui::new(Framebuffer::default(), 120, 100, &mut windows);

    let w = gui.window_create(&mut objects, &cb).unwrap();
    gui.button_create(w, 0, BUTTON_BOX).unwrap();
    gui.window_show(w).unwrap();
    gui.update();

    gui.touch_update(100, 80, TouchPhase::Pressed);
    gui.update();
    // dragging onto the button does not turn the press into a click
    gui.touch_update(30, 40, TouchPhase::Pressed);
    gui.update();
    gui.touch_update(NO_COORDINATE, NO_COORDINATE, TouchPhase::Released);
    gui.update();

    assert!(touch_events(&log).is_empty());
    let touch = gui.object(w, ObjectType::Button, 0).unwrap().touch_state();
    assert!(touch.contains(TouchState::RELEASED_ON_OBJECT));
    assert!(!touch.contains(TouchState::CLICK_ON_OBJECT));

    gui.touch_update(100, 80, TouchPhase::Pressed);
    gui.update();
    gui.touch_update(NO_COORDINATE, NO_COORDINATE, TouchPhase::Released);
    gui.update();
    let touch = gui.object(w, ObjectType::Button, 0).unwrap().touch_state();
    assert!(touch.contains(TouchState::RELEASED_OUTSIDE_OBJECT));
    assert!(!touch.contains(TouchState::CLICK_ON_OBJECT));
    assert!(touch_events(&log).is_empty());
}

#[test]
fn checkbox_toggles_on_release() {
    let log = RefCell::new(Vec::new());
    let cb = |m: &Message| log.borrow_mut().push(*m);
    let mut windows = [const { Window::new() }; 1];
    let mut objects = [Object::new(); 1];
    let mut gui = Gui::new(Framebuffer::default(), 120, 100, &mut windows);

    let w = gui.window_create(&mut objects, &cb).unwrap();
    gui.checkbox_create(w, 5, Area::new(0, 0, 60, 14)).unwrap();
    gui.window_show(w).unwrap();
    gui.update();

    for _ in 0..2 {
        gui.touch_update(10, 25, TouchPhase::Pressed);
        gui.update();
        gui.touch_update(NO_COORDINATE, NO_COORDINATE, TouchPhase::Released);
        gui.update();
    }
    assert!(!gui.checkbox(w, 5).unwrap().is_checked());
    gui.touch_update(10, 25, TouchPhase::Pressed);
    gui.update();
    gui.touch_update(NO_COORDINATE, NO_COORDINATE, TouchPhase::Released);
    gui.update();
    assert!(gui.checkbox(w, 5).unwrap().is_checked());
    assert_eq!(touch_events(&log).iter().filter(|e| e.2 == Event::Clicked).count(), 3);
}

#[test]
fn resize_to_the_same_bounds_paints_nothing() {
    let cb = |_: &Message| {};
    let mut windows = [const { Window::new() }; 1];
    let mut objects = [Object::new(); 2];
    let mut gui = Gui::new(Framebuffer::default(), 120, 100, &mut windows);

    let w = gui.window_create(&mut objects, &cb).unwrap();
    gui.button_create(w, 0, BUTTON_BOX).unwrap();
    gui.window_resize(w, Area::new(10, 10, 100, 90)).unwrap();
    gui.window_show(w).unwrap();
    gui.update();
    clear_plots(&mut gui);

    assert_eq!(gui.window_resize(w, Area::new(10, 10, 100, 90)), Ok(()));
    gui.update();
    assert!(plots(&gui).is_empty());

    assert_eq!(gui.window_resize(w, Area::new(20, 10, 100, 90)), Ok(()));
    let desktop = gui.desktop_color();
    assert!(plots(&gui).iter().any(|&(x, y, c)| (x, y) == (15, 50) && c == desktop));
    gui.update();
    assert!(plots(&gui).iter().any(|&(_, _, c)| c == Color(0xF0F0F0)));
}

#[test]
fn same_sized_windows_skip_the_inactive_title() {
    let cb = |_: &Message| {};
    let mut windows = [const { Window::new() }; 2];
    let mut objs_a = [Object::new(); 1];
    let mut objs_b = [Object::new(); 1];
    let mut gui = Gui::new(Framebuffer::default(), 120, 100, &mut windows);
    let inactive = Color::GRAY;

    let a = gui.window_create(&mut objs_a, &cb).unwrap();
    let b = gui.window_create(&mut objs_b, &cb).unwrap();
    gui.window_show(a).unwrap();
    gui.update();
    gui.window_show(b).unwrap();
    gui.update();
    assert_eq!(gui.active_window(), Some(b));
    assert!(!plots(&gui).iter().any(|&(_, _, c)| c == inactive));

    gui.window_resize(a, Area::new(0, 0, 60, 50)).unwrap();
    gui.window_show(a).unwrap();
    gui.update();
    clear_plots(&mut gui);
    gui.window_show(b).unwrap();
    gui.update();
    assert!(plots(&gui).iter().any(|&(x, y, c)| (x, y) == (3, 3) && c == inactive));
}

#[test]
fn hiding_the_active_window_restores_the_previous_one() {
    let cb = |_: &Message| {};
    let mut windows = [const { Window::new() }; 2];
    let mut objs_a = [Object::new(); 1];
    let mut objs_b = [Object::new(); 1];
    let mut gui = Gui::new(Framebuffer::default(), 120, 100, &mut windows);

    let a = gui.window_create(&mut objs_a, &cb).unwrap();
    let b = gui.window_create(&mut objs_b, &cb).unwrap();
    gui.window_resize(b, Area::new(20, 20, 80, 80)).unwrap();
    gui.window_show(a).unwrap();
    gui.update();
    gui.window_show(b).unwrap();
    gui.update();

    gui.window_hide(b).unwrap();
    gui.update();
    assert_eq!(gui.active_window(), Some(a));
    assert!(gui.window(a).unwrap().is_visible());

    gui.window_hide(a).unwrap();
    gui.update();
    assert!(!gui.window(a).unwrap().is_visible());
    let desktop = gui.desktop_color();
    assert!(plots(&gui).iter().any(|&(_, _, c)| c == desktop));
}

#[test]
fn object_pool_never_grows() {
    let cb = |_: &Message| {};
    let mut windows = [const { Window::new() }; 1];
    let mut objects = [Object::new(); 2];
    let mut gui = Gui::new(Framebuffer::default(), 120, 100, &mut windows);

    let w = gui.window_create(&mut objects, &cb).unwrap();
    gui.button_create(w, 0, BUTTON_BOX).unwrap();
    gui.textbox_create(w, 0, Area::new(0, 40, 50, 50)).unwrap();
    assert_eq!(gui.image_create(w, 0, Area::new(0, 0, 0, 0)), Err(GuiError::Exhausted));
    let live = gui.window(w).unwrap().objects().iter().filter(|o| o.is_live()).count();
    assert_eq!(live, 2);

    assert_eq!(gui.button_delete(w, 0), Err(GuiError::Busy));
    gui.window_show(w).unwrap();
    gui.update();
    gui.button_hide(w, 0).unwrap();
    assert_eq!(gui.button_delete(w, 0), Err(GuiError::Busy));
    gui.update();
    assert_eq!(gui.button_delete(w, 0), Ok(()));
    assert_eq!(gui.button_delete(w, 0), Err(GuiError::NotFound));
    assert_eq!(gui.button_set_text(w, 0, "gone"), Err(GuiError::NotFound));

    gui.image_create(w, 0, Area::new(0, 0, 0, 0)).unwrap();
    assert!(gui.image(w, 0).unwrap().bitmap().is_none());
}

fn color_at(gui: &Gui<'_, Framebuffer>, x: i16, y: i16) -> Option<Color> {
    plots(gui).iter().rev().find(|&&(px, py, _)| (px, py) == (x, y)).map(|&(_, _, c)| c)
}

fn press_button_center(gui: &mut Gui<'_, Framebuffer>, abs: Area) {
    gui.touch_update((abs.xs + abs.xe) / 2, (abs.ys + abs.ye) / 2, TouchPhase::Pressed);
    gui.update();
}

fn release_touch(gui: &mut Gui<'_, Framebuffer>) {
    gui.touch_update(NO_COORDINATE, NO_COORDINATE, TouchPhase::Released);
    gui.update();
}

#[test]
fn pressed_bevel_sinks_and_recovers() {
    let cb = |_: &Message| {};
    let mut windows = [const { Window::new() }; 1];
    let mut objects = [Object::new(); 1];
    let mut gui = Gui::new(Framebuffer::default(), 120, 100, &mut windows);

    let w = gui.window_create(&mut objects, &cb).unwrap();
    gui.button_create(w, 0, BUTTON_BOX).unwrap();
    gui.window_show(w).unwrap();
    gui.update();
    let abs = gui.object(w, ObjectType::Button, 0).unwrap().abs_area();
    assert_eq!(color_at(&gui, abs.xs + 2, abs.ys + 2), Some(Color(0xE3E3E3)));

    clear_plots(&mut gui);
    press_button_center(&mut gui, abs);
    assert_eq!(color_at(&gui, abs.xs + 2, abs.ys + 2), Some(Color(0xF0F0F0)));
    assert_eq!(color_at(&gui, abs.xs + 1, abs.ys + 1), Some(Color(0xA0A0A0)));
    // a plain press repaints the bevel only
    assert_eq!(color_at(&gui, abs.xs + 3, abs.ys + 3), None);

    clear_plots(&mut gui);
    release_touch(&mut gui);
    assert_eq!(color_at(&gui, abs.xs + 2, abs.ys + 2), Some(Color(0xE3E3E3)));
    assert_eq!(color_at(&gui, abs.xs + 1, abs.ys + 1), Some(Color(0xFFFFFF)));
}

#[test]
fn toggle_colors_swap_the_fill_while_held() {
    let cb = |_: &Message| {};
    let mut windows = [const { Window::new() }; 1];
    let mut objects = [Object::new(); 1];
    let mut gui = Gui::new(Framebuffer::default(), 120, 100, &mut windows);

    let w = gui.window_create(&mut objects, &cb).unwrap();
    gui.button_create(w, 0, BUTTON_BOX).unwrap();
    gui.button_set_style(w, 0, ButtonStyle::THREE_D | ButtonStyle::TOGGLE_COLORS).unwrap();
    gui.window_show(w).unwrap();
    gui.update();
    let abs = gui.object(w, ObjectType::Button, 0).unwrap().abs_area();
    let btn = gui.button(w, 0).unwrap();
    let (fc, bc) = (btn.fore_color(), btn.back_color());
    assert_eq!((fc, bc), (Color::BLACK, Color(0xF0F0F0)));
    assert_eq!(color_at(&gui, abs.xs + 3, abs.ys + 3), Some(bc));

    clear_plots(&mut gui);
    press_button_center(&mut gui, abs);
    assert_eq!(color_at(&gui, abs.xs + 3, abs.ys + 3), Some(fc));
    assert_eq!(color_at(&gui, abs.xe - 3, abs.ye - 3), Some(fc));

    clear_plots(&mut gui);
    release_touch(&mut gui);
    assert_eq!(color_at(&gui, abs.xs + 3, abs.ys + 3), Some(bc));
}

#[test]
fn flat_frame_uses_alternate_colors() {
    let cb = |_: &Message| {};
    let mut windows = [const { Window::new() }; 1];
    let mut objects = [Object::new(); 1];
    let mut gui = Gui::new(Framebuffer::default(), 120, 100, &mut windows);

    let w = gui.window_create(&mut objects, &cb).unwrap();
    gui.button_create(w, 0, BUTTON_BOX).unwrap();
    gui.button_set_style(w, 0, ButtonStyle::empty()).unwrap();
    gui.button_set_alt_fore_color(w, 0, Color::BLUE).unwrap();
    gui.button_set_alt_back_color(w, 0, Color::RED).unwrap();
    gui.window_show(w).unwrap();
    gui.update();
    let abs = gui.object(w, ObjectType::Button, 0).unwrap().abs_area();
    assert_eq!(color_at(&gui, abs.xs, abs.ys), Some(Color::BLUE));
    // the flat fill starts one pixel in
    assert_eq!(color_at(&gui, abs.xs + 1, abs.ys + 1), Some(Color(0xF0F0F0)));

    clear_plots(&mut gui);
    press_button_center(&mut gui, abs);
    assert_eq!(color_at(&gui, abs.xs, abs.ys), Some(Color::RED));
    assert_eq!(color_at(&gui, abs.xe, abs.ye), Some(Color::RED));

    clear_plots(&mut gui);
    release_touch(&mut gui);
    assert_eq!(color_at(&gui, abs.xs, abs.ys), Some(Color::BLUE));
}

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
use std::sync::atomic::{AtomicBool, Ordering};

/// Flag that lets one task wait until another has run [`Gui::update`](crate::Gui::update).
///
/// Waiting spins on the flag instead of blocking, so the task that drives the GUI is never parked
/// by a waiter.
#[derive(Debug, Default)]
pub struct UpdateSignal {
    pending: AtomicBool,
}

impl UpdateSignal {
    /// Creates a signal with no pending request.
    pub const fn new() -> Self { Self { pending: AtomicBool::new(false) } }

    /// Asks for an update without waiting for it.
    pub fn request(&self) { self.pending.store(true, Ordering::Release) }

    /// Returns `true` while a requested update has not run yet.
    pub fn is_pending(&self) -> bool { self.pending.load(Ordering::Acquire) }

    /// Requests an update and spins until it has run.
    pub fn wait_for_update(&self) {
        self.request();
        while self.is_pending() {
            std::hint::spin_loop();
        }
    }

    pub(crate) fn acknowledge(&self) { self.pending.store(false, Ordering::Release) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Gui, Window};
    use std::thread;

    #[test]
    fn update_releases_a_waiting_thread() {
        static SIGNAL: UpdateSignal = UpdateSignal::new();
        let handle = thread::spawn(|| SIGNAL.wait_for_update());

        let mut windows: [Window; 0] = [];
        let mut gui = Gui::new(|_: i16, _: i16, _: crate::Color| {}, 10, 10, &mut windows);
        gui.attach_update_signal(&SIGNAL);
        while !handle.is_finished() {
            gui.update();
            thread::yield_now();
        }
        assert!(handle.join().is_ok());
        assert!(!SIGNAL.is_pending());
    }

    #[test]
    fn request_is_cleared_by_acknowledge() {
        let s = UpdateSignal::new();
        assert!(!s.is_pending());
        s.request();
        assert!(s.is_pending());
        s.acknowledge();
        assert!(!s.is_pending());
    }
}

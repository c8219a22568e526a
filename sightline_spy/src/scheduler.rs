// Copyright 2026 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame scheduling for scroll and resize signals.
//!
//! ## Overview
//!
//! Hosts forward raw window signals to the [`Scheduler`], which keeps at most one animation
//! frame pending at a time:
//!
//! - A scroll records the latest offset and requests a [`Pass::Detect`] frame if none is pending.
//! - A resize requests a [`Pass::Reflow`] frame, or upgrades the pending frame to one.
//!
//! When the host's frame fires, [`Scheduler::take_frame`] hands back the pass to run. Frames are
//! requested from a [`FrameClock`]; [`FrameQueue`] is a manual clock for tests and headless use.
//!
//! After [`Scheduler::detach`] every signal is ignored and the pending frame is canceled.

use alloc::collections::VecDeque;

bitflags::bitflags! {
    /// Window signals the scheduler is listening to.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
    pub struct Signals: u8 {
        /// Window scroll.
        const SCROLL = 1 << 0;
        /// Window resize.
        const RESIZE = 1 << 1;
    }
}

/// Handle of a requested animation frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(pub u64);

/// Source of animation frames.
pub trait FrameClock {
    /// Request a callback on the next frame.
    fn request_frame(&mut self) -> FrameId;
    /// Cancel a previously requested frame. Unknown or already-fired frames are ignored.
    fn cancel_frame(&mut self, id: FrameId);
}

/// A frame clock driven by hand.
///
/// Requested frames queue up until [`FrameQueue::take`] fires them in order.
#[derive(Clone, Debug, Default)]
pub struct FrameQueue {
    next: u64,
    queued: VecDeque<FrameId>,
}

impl FrameQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire the oldest outstanding frame.
    pub fn take(&mut self) -> Option<FrameId> {
        self.queued.pop_front()
    }

    /// Number of outstanding frames.
    pub fn pending(&self) -> usize {
        self.queued.len()
    }
}

impl FrameClock for FrameQueue {
    fn request_frame(&mut self) -> FrameId {
        let id = FrameId(self.next);
        self.next += 1;
        self.queued.push_back(id);
        id
    }

    fn cancel_frame(&mut self, id: FrameId) {
        self.queued.retain(|f| *f != id);
    }
}

/// Work a frame performs. A reflow includes detection.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Pass {
    /// Resolve and apply the active pair.
    Detect,
    /// Rebuild and re-sort the pairs, then detect.
    Reflow,
}

/// Coalesces window signals into animation frames.
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    listening: Signals,
    last_scroll_y: f64,
    pending: Option<(FrameId, Pass)>,
}

impl Scheduler {
    /// Create a scheduler that listens to nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start listening to `signals`.
    pub fn attach(&mut self, signals: Signals) {
        self.listening |= signals;
    }

    /// Signals currently listened to.
    pub fn listening(&self) -> Signals {
        self.listening
    }

    /// Scroll offset recorded by the most recent scroll signal.
    pub fn last_scroll_y(&self) -> f64 {
        self.last_scroll_y
    }

    /// The pass the pending frame will run, if any.
    pub fn pending(&self) -> Option<Pass> {
        self.pending.map(|(_, pass)| pass)
    }

    /// Handle a scroll signal. Returns true if a new frame was requested.
    pub fn on_scroll(&mut self, clock: &mut impl FrameClock, scroll_y: f64) -> bool {
        if !self.listening.contains(Signals::SCROLL) {
            return false;
        }
        self.last_scroll_y = scroll_y;
        self.request(clock, Pass::Detect)
    }

    /// Handle a resize signal. Returns true if a new frame was requested.
    pub fn on_resize(&mut self, clock: &mut impl FrameClock) -> bool {
        if !self.listening.contains(Signals::RESIZE) {
            return false;
        }
        self.request(clock, Pass::Reflow)
    }

    fn request(&mut self, clock: &mut impl FrameClock, pass: Pass) -> bool {
        if let Some((id, pending)) = &mut self.pending {
            if pass > *pending {
                tracing::trace!(frame = id.0, "pending frame upgraded to reflow");
                *pending = pass;
            }
            return false;
        }
        let id = clock.request_frame();
        tracing::trace!(frame = id.0, ?pass, "frame requested");
        self.pending = Some((id, pass));
        true
    }

    /// Claim the pass for a fired frame.
    ///
    /// Returns `None` for frames this scheduler does not own, including stale frames that fire
    /// after [`Scheduler::detach`].
    pub fn take_frame(&mut self, id: FrameId) -> Option<Pass> {
        match self.pending {
            Some((pending, pass)) if pending == id => {
                self.pending = None;
                Some(pass)
            }
            _ => None,
        }
    }

    /// Returns true if `id` is the pending frame.
    pub fn owns_frame(&self, id: FrameId) -> bool {
        self.pending.is_some_and(|(pending, _)| pending == id)
    }

    /// Stop listening and cancel the pending frame.
    pub fn detach(&mut self, clock: &mut impl FrameClock) {
        self.listening = Signals::empty();
        if let Some((id, _)) = self.pending.take() {
            clock.cancel_frame(id);
        }
    }
}

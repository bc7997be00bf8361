//! Tap versus drag disambiguation.
//!
//! A press becomes a drag once it has been held for the drag threshold. A
//! release before that is a tap, which passes through to the link under the
//! pointer. After a drag ends the machine stays in `Dragging` for a short
//! release delay so the trailing pointer-up is not read as a fresh tap.
//!
//! Timers are deadlines polled from the frame loop, so superseding a press
//! cancels its pending transition deterministically. Press and release also
//! settle any deadline already passed, so classification never depends on
//! how often frames run.

use instant::Instant;
use std::time::Duration;

/// Fire-once deadline that can be re-armed or cancelled.
#[derive(Clone, Copy, Debug, Default)]
pub struct DeadlineTimer {
    deadline: Option<Instant>,
}

impl DeadlineTimer {
    #[inline]
    pub fn arm(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    #[inline]
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns `true` exactly once, on the first poll at or after the deadline.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(d) if now >= d => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    Idle,
    DownPending,
    Dragging,
}

/// Device that produced a pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
    Pen,
}

impl PointerKind {
    /// Maps a DOM `pointerType` string; unknown types are treated as touch.
    pub fn from_pointer_type(pointer_type: &str) -> Self {
        match pointer_type {
            "mouse" => PointerKind::Mouse,
            "pen" => PointerKind::Pen,
            _ => PointerKind::Touch,
        }
    }
}

/// Snapshot of the pointer as exposed to other components.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub is_down: bool,
    pub is_dragging: bool,
    pub down_at: Option<Instant>,
}

/// How a pointer-up was classified.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerRelease {
    /// Released before the drag threshold; click-through is allowed.
    Tap,
    /// Released at the end of a drag; click-through is suppressed.
    DragEnd,
    /// Up without a matching down.
    Stray,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerTransition {
    DragStarted,
    DragEnded,
}

#[derive(Clone, Debug)]
pub struct PointerStateMachine {
    phase: PointerPhase,
    is_down: bool,
    down_at: Option<Instant>,
    drag_timer: DeadlineTimer,
    release_timer: DeadlineTimer,
    drag_threshold: Duration,
    release_delay: Duration,
}

impl PointerStateMachine {
    pub fn new(drag_threshold: Duration, release_delay: Duration) -> Self {
        Self {
            phase: PointerPhase::Idle,
            is_down: false,
            down_at: None,
            drag_timer: DeadlineTimer::default(),
            release_timer: DeadlineTimer::default(),
            drag_threshold,
            release_delay,
        }
    }

    #[inline]
    pub fn phase(&self) -> PointerPhase {
        self.phase
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.phase == PointerPhase::Dragging
    }

    #[inline]
    pub fn is_down(&self) -> bool {
        self.is_down
    }

    pub fn state(&self) -> PointerState {
        PointerState {
            is_down: self.is_down,
            is_dragging: self.is_dragging(),
            down_at: self.down_at,
        }
    }

    pub fn pointer_down(&mut self, now: Instant) {
        // settle timers that came due since the last frame
        self.poll(now);
        self.is_down = true;
        self.down_at = Some(now);
        match self.phase {
            PointerPhase::Dragging if self.release_timer.is_armed() => {
                // re-grab during the release grace keeps the drag alive
                self.release_timer.cancel();
                log::debug!("[pointer] drag resumed");
            }
            PointerPhase::Dragging => {}
            PointerPhase::Idle | PointerPhase::DownPending => {
                self.phase = PointerPhase::DownPending;
                self.drag_timer.arm(now, self.drag_threshold);
            }
        }
    }

    pub fn pointer_up(&mut self, now: Instant) -> PointerRelease {
        self.is_down = false;
        match self.phase {
            PointerPhase::DownPending if self.drag_timer.fire_if_due(now) => {
                // held past the threshold but no frame polled in between
                self.phase = PointerPhase::Dragging;
                self.release_timer.arm(now, self.release_delay);
                log::debug!("[pointer] drag started at release");
                PointerRelease::DragEnd
            }
            PointerPhase::DownPending => {
                self.drag_timer.cancel();
                self.phase = PointerPhase::Idle;
                PointerRelease::Tap
            }
            PointerPhase::Dragging => {
                self.release_timer.arm(now, self.release_delay);
                PointerRelease::DragEnd
            }
            PointerPhase::Idle => PointerRelease::Stray,
        }
    }

    /// Fires whichever timer is due.
    pub fn poll(&mut self, now: Instant) -> Option<PointerTransition> {
        if self.drag_timer.fire_if_due(now)
            && self.is_down
            && self.phase == PointerPhase::DownPending
        {
            self.phase = PointerPhase::Dragging;
            log::debug!("[pointer] drag started");
            return Some(PointerTransition::DragStarted);
        }
        if self.release_timer.fire_if_due(now) && self.phase == PointerPhase::Dragging {
            self.phase = PointerPhase::Idle;
            self.down_at = None;
            log::debug!("[pointer] drag ended");
            return Some(PointerTransition::DragEnded);
        }
        None
    }

    /// Drops any pending transition and returns to idle.
    pub fn reset(&mut self) {
        self.drag_timer.cancel();
        self.release_timer.cancel();
        self.phase = PointerPhase::Idle;
        self.is_down = false;
        self.down_at = None;
    }
}

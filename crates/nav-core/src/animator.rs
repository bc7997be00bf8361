//! Frame-driven ease of the effective pointer toward a programmatic target.
//!
//! Each frame covers a fixed fraction (`damping`) of the remaining distance,
//! so the error decays geometrically and never reaches zero. The loop keeps
//! running until `stop` is called; the frame that observes the stop still
//! performs its step and then declines to reschedule.

use glam::DVec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationTarget {
    pub target_px: DVec2,
    pub active: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimatorStep {
    pub position_px: DVec2,
    pub reschedule: bool,
}

#[derive(Clone, Debug)]
pub struct InterpolationAnimator {
    target: Option<AnimationTarget>,
    scheduled: bool,
    damping: f64,
}

impl InterpolationAnimator {
    pub fn new(damping: f64) -> Self {
        Self {
            target: None,
            scheduled: false,
            damping: damping.clamp(0.0, 1.0),
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.target.map(|t| t.active).unwrap_or(false)
    }

    #[inline]
    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }

    #[inline]
    pub fn target(&self) -> Option<AnimationTarget> {
        self.target
    }

    #[inline]
    pub fn damping(&self) -> f64 {
        self.damping
    }

    /// Activates toward `target_px`. Returns `true` when the caller has to
    /// request the per-frame callback (it was not already scheduled).
    pub fn start(&mut self, target_px: DVec2) -> bool {
        self.target = Some(AnimationTarget {
            target_px,
            active: true,
        });
        if self.scheduled {
            return false;
        }
        self.scheduled = true;
        true
    }

    /// Moves the target of an active animation; ignored when inactive.
    pub fn retarget(&mut self, target_px: DVec2) {
        if let Some(t) = self.target.as_mut().filter(|t| t.active) {
            t.target_px = target_px;
        }
    }

    pub fn stop(&mut self) {
        if let Some(t) = self.target.as_mut() {
            t.active = false;
        }
    }

    /// Stops immediately, skipping the final step.
    pub fn cancel(&mut self) {
        self.target = None;
        self.scheduled = false;
    }

    /// One frame of the ease. Returns `None` when no frame is scheduled.
    pub fn step(&mut self, current_px: DVec2) -> Option<AnimatorStep> {
        if !self.scheduled {
            return None;
        }
        let reschedule = self.is_active();
        let target_px = self.target.map(|t| t.target_px).unwrap_or(current_px);
        let position_px = current_px + (target_px - current_px) * self.damping;
        if !reschedule {
            self.scheduled = false;
            self.target = None;
        }
        Some(AnimatorStep {
            position_px,
            reschedule,
        })
    }
}

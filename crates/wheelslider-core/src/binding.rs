//! Synchronisation between the centered tick and the caller's value
//!
//! The binding is the only writer of the bound value. It writes exactly once
//! per settle on a new tick and never while a gesture is in flight.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::mapping::SliderModel;

/// Which tick, if any, the user has committed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollPosition {
    /// No settle has happened since this instance was created
    #[default]
    Uninitialized,
    Positioned(usize),
}

impl ScrollPosition {
    pub fn index(&self) -> Option<usize> {
        match self {
            ScrollPosition::Uninitialized => None,
            ScrollPosition::Positioned(index) => Some(*index),
        }
    }
}

/// Whether external changes to the bound value move the wheel after mount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResyncPolicy {
    /// Align to the value once when first displayed, then the wheel owns its position
    #[default]
    MountOnly,
    /// Re-center whenever the value maps to a different tick than the one shown
    Follow,
}

/// Receiver of the discrete selection signal fired on every settle
pub trait SelectionFeedback {
    fn selection_changed(&mut self, index: usize);
}

impl<F> SelectionFeedback for F
where
    F: FnMut(usize),
{
    fn selection_changed(&mut self, index: usize) {
        self(index)
    }
}

/// Feedback sink that ignores every signal
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFeedback;

impl SelectionFeedback for NoFeedback {
    fn selection_changed(&mut self, _index: usize) {}
}

/// State machine mirroring the centered tick into the bound value
#[derive(Debug, Clone)]
pub struct ScrollPositionBinding {
    model: SliderModel,
    position: ScrollPosition,
    policy: ResyncPolicy,
}

impl ScrollPositionBinding {
    pub fn new(model: SliderModel, policy: ResyncPolicy) -> Self {
        Self {
            model,
            position: ScrollPosition::Uninitialized,
            policy,
        }
    }

    pub fn model(&self) -> &SliderModel {
        &self.model
    }

    pub fn position(&self) -> ScrollPosition {
        self.position
    }

    pub fn policy(&self) -> ResyncPolicy {
        self.policy
    }

    /// Tick to scroll to when first displayed
    ///
    /// Out-of-range values are clamped. This is an alignment, not a user
    /// action: the value is not written and no feedback is fired.
    pub fn align_on_mount(&self, value: f64) -> usize {
        let index = self.model.clamped_index_for_value(value);
        debug!(value, index, "aligning wheel on mount");
        index
    }

    /// Tick the visual decay is centered on
    pub fn center_index(&self, value: f64) -> usize {
        self.position
            .index()
            .unwrap_or_else(|| self.model.clamped_index_for_value(value))
    }

    /// Commit a settled gesture
    ///
    /// `None` (a gesture that ended without centering a tick) leaves everything
    /// untouched, as does settling on the tick that is already committed.
    /// Otherwise the value is overwritten with the tick's value, feedback is
    /// fired once, and the new value is returned.
    pub fn settle<F>(&mut self, index: Option<usize>, value: &mut f64, feedback: &mut F) -> Option<f64>
    where
        F: SelectionFeedback + ?Sized,
    {
        let index = self.model.clamp_index(index? as i64);
        if self.position == ScrollPosition::Positioned(index) {
            return None;
        }

        self.position = ScrollPosition::Positioned(index);
        let snapped = self.model.value_for_index(index);
        *value = snapped;
        feedback.selection_changed(index);
        debug!(index, value = snapped, "wheel settled");
        Some(snapped)
    }

    /// Reconcile with an externally changed value
    ///
    /// `displayed` is the tick currently centered on screen. Under
    /// [`ResyncPolicy::Follow`], returns the tick to jump to when the value no
    /// longer maps to it. The value itself is never written here.
    pub fn resync(&mut self, value: f64, displayed: usize) -> Option<usize> {
        if self.policy == ResyncPolicy::MountOnly {
            return None;
        }
        let target = self.model.clamped_index_for_value(value);
        if target == displayed {
            return None;
        }
        if let ScrollPosition::Positioned(_) = self.position {
            self.position = ScrollPosition::Positioned(target);
        }
        debug!(value, from = displayed, to = target, "resyncing wheel to external value");
        Some(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::{StepSpec, ValueRange};

    fn binding(policy: ResyncPolicy) -> ScrollPositionBinding {
        let model = SliderModel::new(ValueRange::new(0.0, 30.0), StepSpec::Step(0.5)).unwrap();
        ScrollPositionBinding::new(model, policy)
    }

    #[test]
    fn test_mount_does_not_write() {
        let b = binding(ResyncPolicy::MountOnly);
        assert_eq!(b.align_on_mount(5.0), 10);
        assert_eq!(b.position(), ScrollPosition::Uninitialized);
    }

    #[test]
    fn test_mount_clamps_out_of_range() {
        let b = binding(ResyncPolicy::MountOnly);
        assert_eq!(b.align_on_mount(-5.0), 0);
        assert_eq!(b.align_on_mount(99.0), 60);
    }

    #[test]
    fn test_settle_writes_once_with_feedback() {
        let mut b = binding(ResyncPolicy::MountOnly);
        let mut value = 5.0;
        let mut signals = Vec::new();
        let mut feedback = |i: usize| signals.push(i);

        assert_eq!(b.settle(Some(12), &mut value, &mut feedback), Some(6.0));
        assert_eq!(value, 6.0);
        assert_eq!(b.position(), ScrollPosition::Positioned(12));

        // Same tick again: no write, no signal
        value = 6.25;
        assert_eq!(b.settle(Some(12), &mut value, &mut feedback), None);
        assert_eq!(value, 6.25);

        assert_eq!(signals, vec![12]);
    }

    #[test]
    fn test_settle_without_index_is_noop() {
        let mut b = binding(ResyncPolicy::MountOnly);
        let mut value = 5.0;
        let mut count = 0;
        let mut feedback = |_: usize| count += 1;
        assert_eq!(b.settle(None, &mut value, &mut feedback), None);
        assert_eq!(value, 5.0);
        assert_eq!(b.position(), ScrollPosition::Uninitialized);
        assert_eq!(count, 0);
    }

    #[test]
    fn test_first_settle_on_mount_tick_snaps_value() {
        let mut b = binding(ResyncPolicy::MountOnly);
        let mut value = 5.3;
        let index = b.align_on_mount(value);
        assert_eq!(b.settle(Some(index), &mut value, &mut NoFeedback), Some(5.0));
        assert_eq!(value, 5.0);
    }

    #[test]
    fn test_position_zero_is_distinct_from_uninitialized() {
        let mut b = binding(ResyncPolicy::MountOnly);
        let mut value = 0.0;
        assert_eq!(b.position().index(), None);
        b.settle(Some(0), &mut value, &mut NoFeedback);
        assert_eq!(b.position().index(), Some(0));
    }

    #[test]
    fn test_count_scenario_bounds() {
        let model = SliderModel::new(ValueRange::new(0.0, 10.0), StepSpec::Count(10)).unwrap();
        let mut b = ScrollPositionBinding::new(model, ResyncPolicy::MountOnly);
        let mut value = 4.0;
        b.settle(Some(0), &mut value, &mut NoFeedback);
        assert_eq!(value, 0.0);
        b.settle(Some(10), &mut value, &mut NoFeedback);
        assert_eq!(value, 10.0);
    }

    #[test]
    fn test_center_prefers_committed_position() {
        let mut b = binding(ResyncPolicy::MountOnly);
        let mut value = 5.0;
        assert_eq!(b.center_index(value), 10);
        b.settle(Some(20), &mut value, &mut NoFeedback);
        assert_eq!(b.center_index(1.0), 20);
    }

    #[test]
    fn test_resync_policies() {
        let mut mount_only = binding(ResyncPolicy::MountOnly);
        assert_eq!(mount_only.resync(20.0, 10), None);

        let mut follow = binding(ResyncPolicy::Follow);
        let mut value = 5.0;
        follow.settle(Some(10), &mut value, &mut NoFeedback);
        assert_eq!(follow.resync(5.0, 10), None);
        assert_eq!(follow.resync(20.0, 10), Some(40));
        assert_eq!(follow.position(), ScrollPosition::Positioned(40));
    }
}

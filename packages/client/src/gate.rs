//! Per-action control gating.
//!
//! Every mutating portal operation originates from one control (a submit
//! button, a menu entry). While the operation is in flight that control is
//! disabled and shows a busy indicator; when the operation settles, however
//! it settles, the control comes back. [`run`] wraps a future with exactly
//! that contract.
//!
//! There is no concurrency control beyond the disabled state itself.
//! Distinct controls gate independently, nothing cancels an in-flight
//! request, and a hung request keeps its control disabled.

use std::future::Future;

/// The originating control of a gated action.
pub trait Trigger: Send + Sync {
    fn set_enabled(&self, enabled: bool);
    fn set_busy(&self, busy: bool);
}

/// Trigger for hosts without a control to gate. All transitions are
/// dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct InertTrigger;

impl Trigger for InertTrigger {
    fn set_enabled(&self, _enabled: bool) {}
    fn set_busy(&self, _busy: bool) {}
}

/// Guard marking one in-flight action on a trigger.
///
/// Construction disables the control and reveals its busy indicator; drop
/// restores both, in reverse order. Drop runs on success, on error, and on
/// unwind, so the control can never be left dead by a failed action.
pub struct PendingAction<'a> {
    trigger: &'a dyn Trigger,
}

impl<'a> PendingAction<'a> {
    pub fn begin(trigger: &'a dyn Trigger) -> Self {
        trigger.set_enabled(false);
        trigger.set_busy(true);
        Self { trigger }
    }
}

impl Drop for PendingAction<'_> {
    fn drop(&mut self) {
        self.trigger.set_busy(false);
        self.trigger.set_enabled(true);
    }
}

/// Run `action` while `trigger` is held pending, restoring the trigger when
/// the future settles. The action's output passes through untouched.
pub async fn run<F>(trigger: &dyn Trigger, action: F) -> F::Output
where
    F: Future,
{
    let _pending = PendingAction::begin(trigger);
    action.await
}

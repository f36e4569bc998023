use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::{Mutex, MutexGuard};

use sc_core::registration::WizardState;

/// Wizard state plus the dispatch lock of a single registration session.
///
/// ## Lock Ordering
/// When acquiring both locks, acquire `dispatch_lock` first, then `state`.
/// - `dispatch_lock`: held for a whole dispatch (transition, actions, result events).
/// - `state`: short-lived, for reading (`get_state`) and writing (`set_state`).
///
/// `network_in_flight` is independent of both locks. It is set from the moment
/// a network-capable trigger is accepted until its dispatch ends.
pub struct RegistrationContext {
    state: Mutex<WizardState>,
    dispatch_lock: Mutex<()>,
    network_in_flight: AtomicBool,
}

/// Clears the in-flight flag on drop.
pub struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

impl RegistrationContext {
    pub fn new(initial_state: WizardState) -> Self {
        Self {
            state: Mutex::new(initial_state),
            dispatch_lock: Mutex::new(()),
            network_in_flight: AtomicBool::new(false),
        }
    }

    /// Snapshot of the current state. Does NOT acquire `dispatch_lock`, so it
    /// can be read while a backend request is in flight.
    pub async fn get_state(&self) -> WizardState {
        self.state.lock().await.clone()
    }

    /// Waits for any in-flight dispatch to finish.
    pub async fn acquire_dispatch_lock(&self) -> MutexGuard<'_, ()> {
        self.dispatch_lock.lock().await
    }

    /// Marks a network-capable dispatch as started. Returns `None` while
    /// another one is still running.
    pub fn try_begin_network_dispatch(&self) -> Option<InFlightGuard<'_>> {
        self.network_in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlightGuard {
                flag: &self.network_in_flight,
            })
    }

    #[cfg(test)]
    pub fn is_network_in_flight(&self) -> bool {
        self.network_in_flight.load(Ordering::Acquire)
    }

    /// This should only be called after acquiring `dispatch_lock`.
    pub async fn set_state(&self, state: WizardState) {
        let mut guard = self.state.lock().await;
        *guard = state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sc_core::registration::StepLayout;

    #[test]
    fn second_network_dispatch_is_refused_until_the_first_ends() {
        let context = RegistrationContext::new(WizardState::new(&StepLayout::default()));

        let first = context.try_begin_network_dispatch();
        assert!(first.is_some());
        assert!(context.is_network_in_flight());
        assert!(context.try_begin_network_dispatch().is_none());

        drop(first);
        assert!(!context.is_network_in_flight());
        assert!(context.try_begin_network_dispatch().is_some());
    }

    #[tokio::test]
    async fn held_dispatch_lock_does_not_mark_network_in_flight() {
        let context = RegistrationContext::new(WizardState::new(&StepLayout::default()));
        let _local_edit = context.acquire_dispatch_lock().await;

        assert!(context.try_begin_network_dispatch().is_some());
    }
}

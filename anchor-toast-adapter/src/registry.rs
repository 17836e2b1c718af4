use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// What the registry needs from a live controller, independent of its content type.
pub(crate) trait Dismiss {
    fn dismiss_animated(&self);
    fn is_disposed(&self) -> bool;
}

thread_local! {
    // Toast controllers are single-threaded UI objects; the UI thread's registry is the only
    // one that ever holds entries.
    static LIVE: RefCell<Vec<(u64, Weak<dyn Dismiss>)>> = const { RefCell::new(Vec::new()) };
}

pub(crate) fn register(id: u64, controller: Weak<dyn Dismiss>) {
    LIVE.with(|live| live.borrow_mut().push((id, controller)));
}

pub(crate) fn unregister(id: u64) {
    // Controllers dropped during thread teardown may outlive the registry itself.
    let _ = LIVE.try_with(|live| live.borrow_mut().retain(|(lid, _)| *lid != id));
}

fn snapshot() -> Vec<Rc<dyn Dismiss>> {
    LIVE.with(|live| {
        let mut live = live.borrow_mut();
        live.retain(|(_, c)| c.strong_count() > 0);
        live.iter().filter_map(|(_, c)| c.upgrade()).collect()
    })
}

/// Number of live, undisposed controllers on this thread.
pub fn live_count() -> usize {
    snapshot().iter().filter(|c| !c.is_disposed()).count()
}

/// Dismisses (with animation) the toast of every live controller on this thread.
///
/// Works on a snapshot of the registry, so controllers created or disposed while the broadcast
/// runs (for example from an overlay callback) do not disturb it. Returns the number of
/// controllers that were asked to dismiss.
pub fn dismiss_all() -> usize {
    let controllers = snapshot();
    tdebug!(count = controllers.len(), "dismiss_all");

    let mut dismissed = 0;
    for controller in controllers {
        if controller.is_disposed() {
            continue;
        }
        controller.dismiss_animated();
        dismissed += 1;
    }
    dismissed
}

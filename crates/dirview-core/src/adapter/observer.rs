/// Reset notifications for views observing a [`FileTreeModel`](super::FileTreeModel).
///
/// The model never emits row-level change events; the only mutation is a
/// full tree replacement, announced by a begin/end pair.
use crossbeam_channel::Sender;

/// Something that wants to hear about full-tree replacements.
pub trait ModelObserver {
    /// The tree is about to be discarded. Drop any cached row references.
    fn reset_began(&mut self);

    /// The new tree is installed and may be queried.
    fn reset_ended(&mut self);
}

/// Events delivered by [`ChannelObserver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelEvent {
    ResetBegan,
    ResetEnded,
}

/// Forwards reset notifications into a crossbeam channel so a UI can drain
/// them once per frame.
pub struct ChannelObserver {
    tx: Sender<ModelEvent>,
}

impl ChannelObserver {
    pub fn new(tx: Sender<ModelEvent>) -> Self {
        Self { tx }
    }
}

impl ModelObserver for ChannelObserver {
    fn reset_began(&mut self) {
        // A dropped receiver just means nobody is listening any more.
        let _ = self.tx.send(ModelEvent::ResetBegan);
    }

    fn reset_ended(&mut self) {
        let _ = self.tx.send(ModelEvent::ResetEnded);
    }
}

/// Scoped reset bracket.
///
/// Creating the guard notifies every observer that a reset began; dropping
/// it notifies them that it ended. Early returns and panics inside the
/// bracket therefore still deliver a matching end notification.
pub(crate) struct ResetGuard<'a> {
    observers: &'a mut Vec<Box<dyn ModelObserver>>,
}

impl<'a> ResetGuard<'a> {
    pub(crate) fn begin(observers: &'a mut Vec<Box<dyn ModelObserver>>) -> Self {
        for observer in observers.iter_mut() {
            observer.reset_began();
        }
        Self { observers }
    }
}

impl Drop for ResetGuard<'_> {
    fn drop(&mut self) {
        for observer in self.observers.iter_mut() {
            observer.reset_ended();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_brackets_scope() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let mut observers: Vec<Box<dyn ModelObserver>> = vec![Box::new(ChannelObserver::new(tx))];

        {
            let _guard = ResetGuard::begin(&mut observers);
            assert_eq!(rx.try_recv(), Ok(ModelEvent::ResetBegan));
            assert!(rx.try_recv().is_err());
        }

        assert_eq!(rx.try_recv(), Ok(ModelEvent::ResetEnded));
    }

    #[test]
    fn test_dropped_receiver_is_ignored() {
        let (tx, rx) = crossbeam_channel::unbounded();
        drop(rx);
        let mut observers: Vec<Box<dyn ModelObserver>> = vec![Box::new(ChannelObserver::new(tx))];
        let guard = ResetGuard::begin(&mut observers);
        drop(guard);
    }
}

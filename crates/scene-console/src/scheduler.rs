//! Timer seam between the console and its host
//!
//! The console never runs callbacks on its own. It asks the host to schedule
//! a [`TimerEvent`] and the host hands the event back through
//! [`Console::on_timer`](crate::Console::on_timer) when it is due. Console
//! state therefore stays on one flow of control no matter how the host
//! implements timing.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Work the console asks to have done later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerEvent {
    /// Wipe the surface's placeholder text after construction
    ClearPlaceholder,
    /// Replace the `Clear()` feedback line with the emptied log
    ClearFeedback,
    /// Re-sample watched signals
    Refresh,
}

/// Handle to a recurring timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub u64);

/// Timer service provided by the host
pub trait Scheduler {
    fn schedule_once(&mut self, delay: Duration, event: TimerEvent);

    fn schedule_recurring(&mut self, interval: Duration, event: TimerEvent) -> TimerHandle;

    fn cancel(&mut self, handle: TimerHandle);
}

#[derive(Debug)]
struct Timer {
    handle: TimerHandle,
    due: Duration,
    interval: Option<Duration>,
    event: TimerEvent,
}

#[derive(Debug, Default)]
struct FrameSchedulerInner {
    now: Duration,
    next_id: u64,
    timers: Vec<Timer>,
}

/// Cooperative scheduler driven by the host's frame clock
///
/// Cloning yields another handle to the same timer set: give one clone to the
/// console and call [`advance`](Self::advance) on the other every frame.
#[derive(Debug, Clone, Default)]
pub struct FrameScheduler {
    inner: Rc<RefCell<FrameSchedulerInner>>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward and collect every event that came due, oldest first
    ///
    /// A recurring timer fires at most once per call, however many periods
    /// elapsed.
    pub fn advance(&self, dt: Duration) -> Vec<TimerEvent> {
        let mut inner = self.inner.borrow_mut();
        inner.now += dt;
        let now = inner.now;

        let mut due: Vec<(Duration, u64, TimerEvent)> = inner
            .timers
            .iter()
            .filter(|t| t.due <= now)
            .map(|t| (t.due, t.handle.0, t.event))
            .collect();
        due.sort_by_key(|(at, id, _)| (*at, *id));

        inner.timers.retain_mut(|t| {
            if t.due > now {
                return true;
            }
            match t.interval {
                Some(interval) => {
                    while t.due <= now {
                        t.due += interval;
                    }
                    true
                }
                None => false,
            }
        });

        due.into_iter().map(|(_, _, event)| event).collect()
    }

    /// Number of recurring timers still armed
    pub fn active_recurring(&self) -> usize {
        self.inner
            .borrow()
            .timers
            .iter()
            .filter(|t| t.interval.is_some())
            .count()
    }

    /// Number of one-shot timers not yet fired
    pub fn pending_once(&self) -> usize {
        self.inner
            .borrow()
            .timers
            .iter()
            .filter(|t| t.interval.is_none())
            .count()
    }

    fn push(&self, due_in: Duration, interval: Option<Duration>, event: TimerEvent) -> TimerHandle {
        let mut inner = self.inner.borrow_mut();
        let handle = TimerHandle(inner.next_id);
        inner.next_id += 1;
        let due = inner.now + due_in;
        inner.timers.push(Timer {
            handle,
            due,
            interval,
            event,
        });
        handle
    }
}

impl Scheduler for FrameScheduler {
    fn schedule_once(&mut self, delay: Duration, event: TimerEvent) {
        self.push(delay, None, event);
    }

    fn schedule_recurring(&mut self, interval: Duration, event: TimerEvent) -> TimerHandle {
        self.push(interval, Some(interval), event)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.inner
            .borrow_mut()
            .timers
            .retain(|t| t.handle != handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_once_fires_once() {
        let mut scheduler = FrameScheduler::new();
        scheduler.schedule_once(MS * 500, TimerEvent::ClearFeedback);

        assert!(scheduler.advance(MS * 499).is_empty());
        assert_eq!(scheduler.advance(MS), vec![TimerEvent::ClearFeedback]);
        assert!(scheduler.advance(MS * 1000).is_empty());
        assert_eq!(scheduler.pending_once(), 0);
    }

    #[test]
    fn test_recurring_coalesces_missed_periods() {
        let mut scheduler = FrameScheduler::new();
        scheduler.schedule_recurring(MS * 100, TimerEvent::Refresh);

        assert_eq!(scheduler.advance(MS * 100), vec![TimerEvent::Refresh]);
        assert_eq!(scheduler.advance(MS * 350), vec![TimerEvent::Refresh]);
        assert!(scheduler.advance(MS * 40).is_empty());
        assert_eq!(scheduler.advance(MS * 20), vec![TimerEvent::Refresh]);
    }

    #[test]
    fn test_cancel_stops_recurring() {
        let mut scheduler = FrameScheduler::new();
        let handle = scheduler.schedule_recurring(MS * 100, TimerEvent::Refresh);
        assert_eq!(scheduler.active_recurring(), 1);

        scheduler.cancel(handle);
        assert_eq!(scheduler.active_recurring(), 0);
        assert!(scheduler.advance(MS * 1000).is_empty());
    }

    #[test]
    fn test_events_come_out_in_due_order() {
        let mut scheduler = FrameScheduler::new();
        scheduler.schedule_once(MS * 300, TimerEvent::ClearFeedback);
        scheduler.schedule_once(MS * 100, TimerEvent::ClearPlaceholder);

        assert_eq!(
            scheduler.advance(MS * 1000),
            vec![TimerEvent::ClearPlaceholder, TimerEvent::ClearFeedback]
        );
    }
}

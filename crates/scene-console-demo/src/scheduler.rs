//! Thread-backed timer service
//!
//! Each scheduled timer gets a sleeper thread that sends its event back over
//! a channel. The UI loop drains the channel and feeds the events to the
//! console, so console state is only touched from the UI thread.

use scene_console::{Scheduler, TimerEvent, TimerHandle};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

pub struct ThreadScheduler {
    event_tx: Sender<TimerEvent>,
    next_id: u64,
    /// Stop flags of running recurring timers
    recurring: HashMap<TimerHandle, Arc<AtomicBool>>,
}

impl ThreadScheduler {
    /// Create the scheduler and the receiving end the UI loop drains
    pub fn new() -> (Self, Receiver<TimerEvent>) {
        let (event_tx, event_rx) = mpsc::channel();
        let scheduler = Self {
            event_tx,
            next_id: 0,
            recurring: HashMap::new(),
        };
        (scheduler, event_rx)
    }
}

impl Scheduler for ThreadScheduler {
    fn schedule_once(&mut self, delay: Duration, event: TimerEvent) {
        let tx = self.event_tx.clone();
        thread::spawn(move || {
            thread::sleep(delay);
            // Receiver gone means the app is shutting down
            let _ = tx.send(event);
        });
    }

    fn schedule_recurring(&mut self, interval: Duration, event: TimerEvent) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;

        let active = Arc::new(AtomicBool::new(true));
        let thread_active = Arc::clone(&active);
        let tx = self.event_tx.clone();

        thread::spawn(move || loop {
            thread::sleep(interval);
            if !thread_active.load(Ordering::Relaxed) {
                break;
            }
            if tx.send(event).is_err() {
                break;
            }
        });

        log::debug!("Timer {:?}: every {:?} -> {:?}", handle, interval, event);
        self.recurring.insert(handle, active);
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        // The thread notices on its next wake-up; no join so the UI never blocks
        if let Some(active) = self.recurring.remove(&handle) {
            active.store(false, Ordering::Relaxed);
            log::debug!("Timer {:?}: cancelled", handle);
        }
    }
}

impl Drop for ThreadScheduler {
    fn drop(&mut self) {
        for active in self.recurring.values() {
            active.store(false, Ordering::Relaxed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::RecvTimeoutError;

    #[test]
    fn test_once_delivers_event() {
        let (mut scheduler, rx) = ThreadScheduler::new();
        scheduler.schedule_once(Duration::from_millis(5), TimerEvent::ClearPlaceholder);
        assert_eq!(
            rx.recv_timeout(Duration::from_secs(2)),
            Ok(TimerEvent::ClearPlaceholder)
        );
    }

    #[test]
    fn test_cancel_stops_recurring_ticks() {
        let (mut scheduler, rx) = ThreadScheduler::new();
        let handle = scheduler.schedule_recurring(Duration::from_millis(5), TimerEvent::Refresh);
        assert_eq!(
            rx.recv_timeout(Duration::from_secs(2)),
            Ok(TimerEvent::Refresh)
        );

        scheduler.cancel(handle);
        // Drain ticks sent before the flag was observed
        while rx.try_recv().is_ok() {}

        let mut late = 0;
        loop {
            match rx.recv_timeout(Duration::from_millis(100)) {
                Ok(_) => late += 1,
                Err(RecvTimeoutError::Timeout) => break,
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
        assert!(late <= 1);
    }
}

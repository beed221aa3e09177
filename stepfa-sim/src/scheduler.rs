use std::{collections::BTreeMap, time::Duration};

/// Handle of a repeating timer created by a [`Scheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerHandle(pub u64);

/// Timer facility of the host (e.g., an event loop).
///
/// The [`Simulation`](crate::Simulation) only asks for timers to be created and
/// cancelled. When a timer fires, the host calls
/// [`Simulation::on_timer`](crate::Simulation::on_timer) with its handle, on the
/// same thread as every other call.
pub trait Scheduler {
    /// Starts a timer firing every `period` until it is cancelled.
    fn schedule_repeating(&mut self, period: Duration) -> TimerHandle;

    /// Cancels the timer. Cancelling an unknown or already cancelled timer does
    /// nothing.
    fn cancel(&mut self, handle: TimerHandle);
}

impl<S: Scheduler + ?Sized> Scheduler for &mut S {
    fn schedule_repeating(&mut self, period: Duration) -> TimerHandle {
        (**self).schedule_repeating(period)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        (**self).cancel(handle)
    }
}

/// [`Scheduler`] driven by a virtual clock that only moves when
/// [`advance`](ManualScheduler::advance) is called.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_handle: u64,
    timers: BTreeMap<TimerHandle, Timer>,
}

#[derive(Debug, Clone, Copy)]
struct Timer {
    period: Duration,
    next_due: Duration,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on the virtual clock.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of timers that have not been cancelled.
    pub fn active_timers(&self) -> usize {
        self.timers.len()
    }

    /// Period of the timer, if it is still active.
    pub fn period(&self, handle: TimerHandle) -> Option<Duration> {
        self.timers.get(&handle).map(|timer| timer.period)
    }

    /// Moves the clock forward and returns every timer firing in that window,
    /// in the order they fire. A timer fires once for every period that fits.
    pub fn advance(&mut self, by: Duration) -> Vec<TimerHandle> {
        let until = self.now + by;
        let mut fired = Vec::new();

        for (handle, timer) in self.timers.iter_mut() {
            // A zero period would fire forever.
            let period = timer.period.max(Duration::from_nanos(1));
            while timer.next_due <= until {
                fired.push((timer.next_due, *handle));
                timer.next_due += period;
            }
        }

        self.now = until;
        fired.sort();
        fired.into_iter().map(|(_, handle)| handle).collect()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_repeating(&mut self, period: Duration) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;

        self.timers.insert(
            handle,
            Timer {
                period,
                next_due: self.now + period,
            },
        );

        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.timers.remove(&handle);
    }
}

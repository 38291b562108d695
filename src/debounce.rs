//! Debounced actions with last-call-wins scheduling.
//!
//! A [`Debounced`] wraps an action and delays each invocation until a quiet
//! period has elapsed with no further calls. A new call strictly supersedes
//! the pending one, so the action fires at most once per quiet window and
//! always with the value from the most recent call. Dropping the handle
//! cancels any pending invocation before it fires.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Default quiet period between the last call and the action firing
pub const DEFAULT_QUIET_PERIOD_MS: u64 = 300;

enum Command<T> {
    Invoke(T),
    Cancel,
    Shutdown,
}

/// A rate-limited wrapper around an action.
///
/// The wrapped action runs on a dedicated worker thread owned by this handle.
/// `call` never blocks on the action; it only replaces the pending value and
/// restarts the quiet window.
///
/// # Examples
///
/// ```
/// use std::sync::mpsc;
/// use std::time::Duration;
/// use livepreview::debounce::Debounced;
///
/// let (tx, rx) = mpsc::channel();
/// let debounced = Debounced::new(move |n: u32| { let _ = tx.send(n); }, Duration::from_millis(20));
/// debounced.call(1);
/// debounced.call(2);
/// debounced.call(3);
/// // Only the last value survives the quiet window.
/// assert_eq!(rx.recv_timeout(Duration::from_secs(1)).unwrap(), 3);
/// ```
pub struct Debounced<T: Send + 'static> {
    tx: Sender<Command<T>>,
    worker: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debounced<T> {
    /// Wrap `action` so invocations collapse until `quiet_period` elapses
    /// without a new call.
    pub fn new<F>(action: F, quiet_period: Duration) -> Self
    where
        F: Fn(T) + Send + 'static,
    {
        let (tx, rx) = mpsc::channel::<Command<T>>();

        let worker = thread::spawn(move || {
            // Holds the value from the most recent call; present only while a
            // timer is conceptually running.
            let mut pending: Option<T> = None;

            loop {
                let command = if pending.is_some() {
                    match rx.recv_timeout(quiet_period) {
                        Ok(command) => command,
                        Err(RecvTimeoutError::Timeout) => {
                            if let Some(value) = pending.take() {
                                action(value);
                            }
                            continue;
                        }
                        Err(RecvTimeoutError::Disconnected) => break,
                    }
                } else {
                    match rx.recv() {
                        Ok(command) => command,
                        Err(_) => break,
                    }
                };

                match command {
                    // Restarts the quiet window: recv_timeout above begins a
                    // fresh period on the next iteration.
                    Command::Invoke(value) => pending = Some(value),
                    Command::Cancel => pending = None,
                    Command::Shutdown => break,
                }
            }
        });

        Self {
            tx,
            worker: Some(worker),
        }
    }

    /// Wrap `action` with the default quiet period.
    pub fn with_default_period<F>(action: F) -> Self
    where
        F: Fn(T) + Send + 'static,
    {
        Self::new(action, Duration::from_millis(DEFAULT_QUIET_PERIOD_MS))
    }

    /// Schedule an invocation with `value`, superseding any pending one.
    pub fn call(&self, value: T) {
        let _ = self.tx.send(Command::Invoke(value));
    }

    /// Discard the pending invocation, if any, without firing it.
    pub fn cancel(&self) {
        let _ = self.tx.send(Command::Cancel);
    }
}

impl<T: Send + 'static> Drop for Debounced<T> {
    fn drop(&mut self) {
        // Pending work is discarded, never fired after teardown.
        let _ = self.tx.send(Command::Shutdown);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    const QUIET: Duration = Duration::from_millis(30);

    fn settle() {
        thread::sleep(QUIET * 4);
    }

    #[test]
    fn rapid_calls_collapse_to_last_value() {
        let fired = Arc::new(Mutex::new(Vec::new()));
        let sink = fired.clone();
        let debounced = Debounced::new(
            move |n: u32| sink.lock().unwrap().push(n),
            QUIET,
        );

        for n in 1..=5 {
            debounced.call(n);
        }
        settle();

        assert_eq!(*fired.lock().unwrap(), vec![5]);
    }

    #[test]
    fn spaced_calls_fire_once_each() {
        let count = Arc::new(AtomicUsize::new(0));
        let sink = count.clone();
        let debounced = Debounced::new(
            move |()| {
                sink.fetch_add(1, Ordering::SeqCst);
            },
            QUIET,
        );

        debounced.call(());
        settle();
        debounced.call(());
        settle();

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn no_calls_never_fires() {
        let count = Arc::new(AtomicUsize::new(0));
        let sink = count.clone();
        let _debounced = Debounced::new(
            move |()| {
                sink.fetch_add(1, Ordering::SeqCst);
            },
            QUIET,
        );

        settle();
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn cancel_discards_pending_invocation() {
        let count = Arc::new(AtomicUsize::new(0));
        let sink = count.clone();
        let debounced = Debounced::new(
            move |()| {
                sink.fetch_add(1, Ordering::SeqCst);
            },
            QUIET,
        );

        debounced.call(());
        debounced.cancel();
        settle();

        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn drop_with_pending_call_never_fires() {
        let count = Arc::new(AtomicUsize::new(0));
        let sink = count.clone();
        let debounced = Debounced::new(
            move |()| {
                sink.fetch_add(1, Ordering::SeqCst);
            },
            QUIET,
        );

        debounced.call(());
        drop(debounced);
        settle();

        assert_eq!(count.load(Ordering::SeqCst), 0);
    }
}

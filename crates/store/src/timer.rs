// Copyright (C) 2026 ScientificallyFit
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Scheduled-task abstractions for lesson timing.
//!
//! Two tasks back the timed lesson surfaces: a countdown for focus
//! sprints and a debouncer for keystroke auto-saves. Both are plain
//! tokio tasks driven by `select!` over a command channel and the
//! clock, and both shut down when their handles drop — a torn-down
//! lesson can never leave a stray task ticking.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tracing::debug;

/// Buffer size for the timer's event channel.
const EVENT_BUFFER_SIZE: usize = 16;

/// Events emitted by a running [`FocusTimer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// One second elapsed; this many seconds remain.
    Tick {
        /// Seconds until the countdown finishes.
        remaining_secs: u64,
    },
    /// The countdown reached zero. No further events follow.
    Finished,
}

/// Control messages for the timer task.
#[derive(Debug, Clone, Copy)]
enum TimerCommand {
    Pause,
    Resume,
    Cancel,
}

/// A fixed-duration countdown ticking once per second.
///
/// Dropping the handle cancels the task; no tick fires after
/// cancellation.
#[derive(Debug)]
pub struct FocusTimer {
    commands: mpsc::UnboundedSender<TimerCommand>,
    events: mpsc::Receiver<TimerEvent>,
}

impl FocusTimer {
    /// Starts a countdown of the given duration.
    ///
    /// Must be called within a tokio runtime. A zero-length countdown
    /// emits `Finished` immediately.
    #[must_use]
    pub fn start(duration_secs: u64) -> Self {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::channel(EVENT_BUFFER_SIZE);

        tokio::spawn(run_countdown(duration_secs, command_rx, event_tx));

        Self {
            commands: command_tx,
            events: event_rx,
        }
    }

    /// Pauses the countdown. Ticks stop until `resume`.
    pub fn pause(&self) {
        let _ = self.commands.send(TimerCommand::Pause);
    }

    /// Resumes a paused countdown. The next tick fires a full second
    /// after resumption.
    pub fn resume(&self) {
        let _ = self.commands.send(TimerCommand::Resume);
    }

    /// Cancels the countdown. The task stops without emitting
    /// `Finished`.
    pub fn cancel(&self) {
        let _ = self.commands.send(TimerCommand::Cancel);
    }

    /// Receives the next timer event, or `None` once the task has
    /// stopped.
    pub async fn next_event(&mut self) -> Option<TimerEvent> {
        self.events.recv().await
    }
}

async fn run_countdown(
    duration_secs: u64,
    mut commands: mpsc::UnboundedReceiver<TimerCommand>,
    events: mpsc::Sender<TimerEvent>,
) {
    if duration_secs == 0 {
        let _ = events.send(TimerEvent::Finished).await;
        return;
    }

    let mut remaining: u64 = duration_secs;
    let mut paused: bool = false;
    let mut ticker = tokio::time::interval(Duration::from_secs(1));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first interval tick completes immediately; consume it so the
    // countdown starts a full second from now.
    ticker.tick().await;

    loop {
        tokio::select! {
            command = commands.recv() => match command {
                Some(TimerCommand::Pause) => paused = true,
                Some(TimerCommand::Resume) => {
                    paused = false;
                    ticker.reset();
                }
                Some(TimerCommand::Cancel) | None => {
                    debug!(remaining, "Countdown canceled");
                    break;
                }
            },
            _ = ticker.tick(), if !paused => {
                remaining -= 1;
                if remaining == 0 {
                    let _ = events.send(TimerEvent::Finished).await;
                    break;
                }
                if events
                    .send(TimerEvent::Tick { remaining_secs: remaining })
                    .await
                    .is_err()
                {
                    // Receiver dropped.
                    break;
                }
            }
        }
    }
}

/// Debounces a stream of values down to the latest one.
///
/// Each submitted value restarts the idle window; once `delay` passes
/// with no new value, the latest is emitted exactly once on the output
/// channel. Dropping the handle closes the input, which flushes any
/// pending value and ends the task.
#[derive(Debug)]
pub struct Debouncer<T> {
    input: mpsc::Sender<T>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Creates a debouncer and its output channel.
    ///
    /// Must be called within a tokio runtime.
    #[must_use]
    pub fn new(delay: Duration) -> (Self, mpsc::Receiver<T>) {
        let (input_tx, input_rx) = mpsc::channel(EVENT_BUFFER_SIZE);
        let (output_tx, output_rx) = mpsc::channel(EVENT_BUFFER_SIZE);

        tokio::spawn(run_debounce(delay, input_rx, output_tx));

        (Self { input: input_tx }, output_rx)
    }

    /// Submits a value, restarting the idle window.
    ///
    /// A value submitted after the output receiver has been dropped is
    /// discarded.
    pub async fn submit(&self, value: T) {
        let _ = self.input.send(value).await;
    }
}

async fn run_debounce<T: Send + 'static>(
    delay: Duration,
    mut input: mpsc::Receiver<T>,
    output: mpsc::Sender<T>,
) {
    let mut pending: Option<T> = None;

    loop {
        tokio::select! {
            value = input.recv() => match value {
                // Latest wins; the sleep below restarts on the next
                // loop iteration.
                Some(v) => pending = Some(v),
                None => {
                    // Input closed: flush whatever is pending and stop.
                    if let Some(v) = pending.take() {
                        let _ = output.send(v).await;
                    }
                    break;
                }
            },
            () = tokio::time::sleep(delay), if pending.is_some() => {
                if let Some(v) = pending.take()
                    && output.send(v).await.is_err()
                {
                    break;
                }
            }
        }
    }
}

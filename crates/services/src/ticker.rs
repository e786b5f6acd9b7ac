//! The external one-second stimulus that drives the quiz countdown.

use std::time::Duration;

use tokio::time::{Instant, MissedTickBehavior, interval_at};

use quiz_core::{Event, QuizMachine, Status};

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Whether the tick driver should keep running after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickFlow {
    Continue,
    Stop,
}

impl TickFlow {
    #[must_use]
    pub fn from_status(status: Status) -> Self {
        if status == Status::Active {
            TickFlow::Continue
        } else {
            TickFlow::Stop
        }
    }
}

/// Call `on_tick` once per `period` until it returns `TickFlow::Stop`.
///
/// The first call happens one full period after this starts. Returns the
/// number of ticks delivered.
pub async fn drive_ticks<F>(period: Duration, mut on_tick: F) -> u32
where
    F: FnMut() -> TickFlow,
{
    let mut interval = interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut delivered = 0_u32;
    loop {
        interval.tick().await;
        delivered = delivered.saturating_add(1);
        if on_tick() == TickFlow::Stop {
            tracing::debug!(delivered, "tick driver stopped");
            return delivered;
        }
    }
}

/// Submit one `Tick` to `machine` if it is still active.
pub fn tick_machine(machine: &mut QuizMachine) -> TickFlow {
    if !machine.current_state().is_active() {
        return TickFlow::Stop;
    }
    if let Err(err) = machine.submit(Event::Tick) {
        tracing::warn!(error = %err, "tick rejected");
        return TickFlow::Stop;
    }
    TickFlow::from_status(machine.current_state().status())
}

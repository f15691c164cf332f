//! UI event types.
//!
//! Everything the reducer reacts to arrives as a `UiEvent`: terminal input,
//! timer ticks, and results of async work delivered through the runtime
//! inbox.

use crossterm::event::Event;
use quickfund_core::auth::{AuthMode, Session};

use crate::common::{TaskCompleted, TaskId, TaskKind, TaskStarted};

#[derive(Debug)]
pub enum UiEvent {
    /// Timer tick (drives toast expiry and the submit spinner).
    Tick,
    /// Emitted once per loop iteration with the current terminal size.
    Frame { width: u16, height: u16 },
    /// Raw terminal input.
    Terminal(Event),
    /// An async task was spawned by the runtime.
    TaskStarted { kind: TaskKind, started: TaskStarted },
    /// An async task finished; `result` is only applied while the task is
    /// still the active one for its slot.
    TaskCompleted {
        kind: TaskKind,
        completed: TaskCompleted<Box<UiEvent>>,
    },
    /// Auth backend results.
    Auth(AuthUiEvent),
    /// The system opener could not handle a link.
    OpenUrlFailed { url: String, error: String },
}

#[derive(Debug)]
pub enum AuthUiEvent {
    /// Login or signup finished.
    Completed {
        task: TaskId,
        mode: AuthMode,
        result: Result<Session, String>,
    },
    /// The submission was cancelled before the backend answered.
    Cancelled { task: TaskId },
    /// Logout finished.
    LoggedOut { result: Result<(), String> },
}

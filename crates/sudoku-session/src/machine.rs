//! Session lifecycle: `Loading -> Ready | Failed`, with stale-load discard.

use crate::error::LoadError;
use crate::session::Session;
use crate::source::{self, PuzzleSource};

/// Where the machine is in its lifecycle.
#[derive(Debug)]
pub enum Phase {
    /// A load is outstanding; no session to play yet.
    Loading,
    /// A session is live and accepting edits.
    Ready(Session),
    /// The last load failed. Terminal until an explicit restart.
    Failed,
}

/// Identifies one load attempt. A result presented with an old ticket is
/// dropped; the player has already moved on from that attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Owns the one session per player and the transitions between loading,
/// playing, and failure. Single logical actor; every operation runs to
/// completion before the next is accepted, so no locking lives here.
#[derive(Debug)]
pub struct SessionMachine {
    phase: Phase,
    generation: u64,
}

impl SessionMachine {
    /// A new machine, already in `Loading` for its first puzzle.
    pub fn new() -> Self {
        Self {
            phase: Phase::Loading,
            generation: 0,
        }
    }

    /// Ticket for the load attempt currently expected.
    pub fn current_ticket(&self) -> LoadTicket {
        LoadTicket(self.generation)
    }

    /// Abandon whatever is in flight or on screen and go load again.
    /// Returns the ticket the new attempt must present on completion.
    pub fn restart(&mut self) -> LoadTicket {
        self.generation += 1;
        self.phase = Phase::Loading;
        LoadTicket(self.generation)
    }

    /// Deliver the result of a load attempt. Returns `false` when the
    /// result was discarded: either the ticket is stale or the machine is
    /// not waiting for a load.
    pub fn complete(&mut self, ticket: LoadTicket, result: Result<Session, LoadError>) -> bool {
        if ticket.0 != self.generation || !matches!(self.phase, Phase::Loading) {
            return false;
        }
        self.phase = match result {
            Ok(session) => Phase::Ready(session),
            Err(_) => Phase::Failed,
        };
        true
    }

    /// Restart and complete in one step from a synchronous source.
    /// Returns `true` when the machine ended up `Ready`.
    pub fn load_from<S: PuzzleSource + ?Sized>(&mut self, src: &S) -> bool {
        let ticket = self.restart();
        self.complete(ticket, source::load(src));
        matches!(self.phase, Phase::Ready(_))
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn session(&self) -> Option<&Session> {
        match &self.phase {
            Phase::Ready(session) => Some(session),
            _ => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut Session> {
        match &mut self.phase {
            Phase::Ready(session) => Some(session),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.phase, Phase::Failed)
    }
}

impl Default for SessionMachine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SourceError;
    use crate::source::PuzzleRecord;

    const QUESTION: &str =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    const SOLUTION: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    fn session() -> Session {
        Session::from_record(&PuzzleRecord {
            question: QUESTION.to_string(),
            solution: SOLUTION.to_string(),
        })
        .unwrap()
    }

    struct FixedSource;

    impl PuzzleSource for FixedSource {
        fn fetch_one(&self) -> Result<Option<PuzzleRecord>, SourceError> {
            Ok(Some(PuzzleRecord {
                question: QUESTION.to_string(),
                solution: SOLUTION.to_string(),
            }))
        }
    }

    struct BrokenSource;

    impl PuzzleSource for BrokenSource {
        fn fetch_one(&self) -> Result<Option<PuzzleRecord>, SourceError> {
            Err(SourceError::new("connection refused"))
        }
    }

    #[test]
    fn test_starts_loading() {
        let machine = SessionMachine::new();
        assert!(machine.is_loading());
        assert!(machine.session().is_none());
    }

    #[test]
    fn test_load_success_transitions_to_ready() {
        let mut machine = SessionMachine::new();
        let ticket = machine.current_ticket();
        assert!(machine.complete(ticket, Ok(session())));
        assert!(machine.session().is_some());
        assert!(!machine.is_failed());
    }

    #[test]
    fn test_load_failure_transitions_to_failed() {
        let mut machine = SessionMachine::new();
        let ticket = machine.current_ticket();
        assert!(machine.complete(ticket, Err(LoadError::SourceUnavailable(None))));
        assert!(machine.is_failed());
        assert!(machine.session().is_none());
    }

    #[test]
    fn test_failed_is_terminal_until_restart() {
        let mut machine = SessionMachine::new();
        let ticket = machine.current_ticket();
        machine.complete(ticket, Err(LoadError::SourceUnavailable(None)));

        // Same ticket again: machine is no longer waiting.
        assert!(!machine.complete(ticket, Ok(session())));
        assert!(machine.is_failed());

        let ticket = machine.restart();
        assert!(machine.is_loading());
        assert!(machine.complete(ticket, Ok(session())));
        assert!(machine.session().is_some());
    }

    #[test]
    fn test_stale_load_is_discarded() {
        let mut machine = SessionMachine::new();
        let stale = machine.current_ticket();

        // Player restarts while the first load is still outstanding.
        let fresh = machine.restart();

        // The stale result lands late and must not be applied.
        assert!(!machine.complete(stale, Ok(session())));
        assert!(machine.is_loading());

        assert!(machine.complete(fresh, Ok(session())));
        assert!(machine.session().is_some());
    }

    #[test]
    fn test_load_from_source() {
        let mut machine = SessionMachine::new();
        assert!(machine.load_from(&FixedSource));
        assert_eq!(machine.session().unwrap().mistakes(), 0);

        assert!(!machine.load_from(&BrokenSource));
        assert!(machine.is_failed());
    }

    #[test]
    fn test_restart_replaces_live_session() {
        let mut machine = SessionMachine::new();
        assert!(machine.load_from(&FixedSource));
        machine
            .session_mut()
            .unwrap()
            .edit(crate::grid::Position::new(0, 2), "9");
        assert_eq!(machine.session().unwrap().mistakes(), 1);

        assert!(machine.load_from(&FixedSource));
        assert_eq!(machine.session().unwrap().mistakes(), 0);
    }
}

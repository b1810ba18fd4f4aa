//! Session integration tests.
//!
//! These tests verify the start / roll / finish lifecycle, the error
//! surface, and event fan-out across several sinks.

use std::cell::RefCell;
use std::rc::Rc;

use rust_dicegame::core::{DiceRoll, GameError, PlayerName, Roll, Score};
use rust_dicegame::dice::{CountingRollSource, FixedSequence, LoggingRollSource};
use rust_dicegame::events::{EventSink, GameEvent, RecordingSink};
use rust_dicegame::scoring::{DoubleOnEven, SimpleScoring};
use rust_dicegame::session::Session;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn alice() -> PlayerName {
    PlayerName::new("Alice").unwrap()
}

/// Appends `(tag, event)` to a log shared by several sinks.
struct SharedLog {
    tag: &'static str,
    log: Rc<RefCell<Vec<(&'static str, GameEvent)>>>,
}

impl EventSink for SharedLog {
    fn on_game_started(&self, player: &PlayerName) {
        self.log
            .borrow_mut()
            .push((self.tag, GameEvent::started(player.clone())));
    }

    fn on_roll_made(&self, player: &PlayerName, roll: Roll, score: Score) {
        self.log
            .borrow_mut()
            .push((self.tag, GameEvent::roll_made(player.clone(), roll, score)));
    }

    fn on_game_finished(&self, player: &PlayerName, final_score: Score) {
        self.log
            .borrow_mut()
            .push((self.tag, GameEvent::finished(player.clone(), final_score)));
    }
}

// =============================================================================
// Preconditions
// =============================================================================

/// Rolling or finishing before start is an illegal-state error.
#[test]
fn test_roll_and_finish_require_start() {
    init_tracing();
    let recorder = Rc::new(RecordingSink::new());
    let mut session = Session::new(FixedSequence::default(), SimpleScoring);
    session.attach(recorder.clone());

    assert_eq!(session.roll(), Err(GameError::NotStarted));
    assert_eq!(session.finish(), Err(GameError::NotStarted));
    assert!(recorder.is_empty(), "failed calls must not notify");
}

// =============================================================================
// Scoring and notification
// =============================================================================

/// A fixed source returning 3 yields score 3 and one roll event.
#[test]
fn test_single_roll_notifies_once() {
    init_tracing();
    let recorder = Rc::new(RecordingSink::new());
    let mut session = Session::new(FixedSequence::new([3]).unwrap(), SimpleScoring);

    session.start(alice());
    session.attach(recorder.clone());
    let roll = session.roll().unwrap();

    let three = Score::new(3).unwrap();
    assert_eq!(roll, Roll::Single(DiceRoll::new(3).unwrap()));
    assert_eq!(session.current_score(), three);
    assert_eq!(recorder.events(), vec![GameEvent::roll_made(alice(), roll, three)]);
}

/// Every sink sees every event, in attachment order.
#[test]
fn test_events_reach_all_sinks_in_order() {
    init_tracing();
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut session = Session::new(FixedSequence::new([3]).unwrap(), SimpleScoring);
    session.attach(Rc::new(SharedLog { tag: "first", log: log.clone() }));
    session.attach(Rc::new(SharedLog { tag: "second", log: log.clone() }));

    session.start(alice());
    session.roll().unwrap();

    let three = Score::new(3).unwrap();
    let roll = Roll::Single(DiceRoll::new(3).unwrap());
    assert_eq!(
        *log.borrow(),
        vec![
            ("first", GameEvent::started(alice())),
            ("second", GameEvent::started(alice())),
            ("first", GameEvent::roll_made(alice(), roll, three)),
            ("second", GameEvent::roll_made(alice(), roll, three)),
        ]
    );
}

/// Detached sinks stop receiving events; the rest keep going.
#[test]
fn test_detach_between_events() {
    init_tracing();
    let first = Rc::new(RecordingSink::new());
    let second = Rc::new(RecordingSink::new());
    let mut session = Session::new(FixedSequence::default(), SimpleScoring);
    let first_id = session.attach(first.clone());
    session.attach(second.clone());

    session.start(alice());
    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 1);

    assert!(session.detach(first_id));
    assert!(!session.detach(first_id), "second detach is a no-op");
    session.roll().unwrap();

    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 2);
    assert_eq!(session.sink_count(), 1);
}

/// A sink outlives the session that notified it.
#[test]
fn test_sink_outlives_session() {
    let recorder = Rc::new(RecordingSink::new());
    {
        let mut session = Session::new(FixedSequence::default(), DoubleOnEven);
        session.attach(recorder.clone());
        session.start(alice());
        for _ in 0..6 {
            session.roll().unwrap();
        }
        assert_eq!(session.finish().unwrap().value(), 33);
    }

    let events = recorder.events();
    assert_eq!(events.len(), 8);
    assert_eq!(events.last().and_then(GameEvent::score), Some(Score::new(33).unwrap()));
}

/// Full playthrough with wrapped dice.
#[test]
fn test_full_game_with_wrapped_dice() {
    init_tracing();
    let dice = CountingRollSource::new(LoggingRollSource::new(FixedSequence::default()));
    let recorder = Rc::new(RecordingSink::new());
    let mut session = Session::new(dice, SimpleScoring);
    session.attach(recorder.clone());

    session.start_named("  Alice  ").unwrap();
    let rolls: Vec<u32> = (0..7).map(|_| session.roll().unwrap().value()).collect();
    let total = session.finish().unwrap();

    assert_eq!(rolls, vec![1, 2, 3, 4, 5, 6, 1]);
    assert_eq!(total.value(), 22);
    assert_eq!(session.source().roll_count(), 7);
    assert_eq!(session.source().count_of(1), 2);
    assert_eq!(session.current_player(), Some(&alice()));

    let finished = recorder.events().pop().unwrap();
    assert_eq!(finished, GameEvent::finished(alice(), total));
}

/// Each player gets a fresh score when a session restarts.
#[test]
fn test_restart_for_new_player() {
    let recorder = Rc::new(RecordingSink::new());
    let mut session = Session::new(FixedSequence::new([5]).unwrap(), SimpleScoring);
    session.attach(recorder.clone());

    session.start(alice());
    session.roll().unwrap();
    session.finish().unwrap();

    let bob = PlayerName::new("Bob").unwrap();
    session.start(bob.clone());
    session.roll().unwrap();

    assert_eq!(session.current_score().value(), 5);
    assert_eq!(recorder.events().last().map(GameEvent::player), Some(&bob));
}

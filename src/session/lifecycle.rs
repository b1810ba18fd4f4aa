//! The roll / score / notify loop.

use std::rc::Rc;

use tracing::{debug, instrument};

use crate::core::{GameError, GameResult, PlayerName, Roll, Score};
use crate::dice::RollSource;
use crate::events::{EventSink, GameEvent, SinkId, SinkList};
use crate::scoring::ScoringStrategy;

/// One player's playthrough.
///
/// The type parameters default to boxed trait objects, which is what
/// [`crate::games::GameFacade`] builds from a configuration. Tests and
/// callers that know their concrete types can name them instead and keep
/// access to them through [`source`](Self::source).
///
/// ```
/// use std::rc::Rc;
/// use rust_dicegame::core::PlayerName;
/// use rust_dicegame::dice::FixedSequence;
/// use rust_dicegame::events::RecordingSink;
/// use rust_dicegame::scoring::SimpleScoring;
/// use rust_dicegame::session::Session;
///
/// let mut session = Session::new(FixedSequence::default(), SimpleScoring);
/// let recorder = Rc::new(RecordingSink::new());
/// session.attach(recorder.clone());
///
/// session.start(PlayerName::new("Alice").unwrap());
/// session.roll().unwrap();
/// session.roll().unwrap();
/// let total = session.finish().unwrap();
///
/// assert_eq!(total.value(), 3);
/// assert_eq!(recorder.len(), 4);
/// ```
pub struct Session<R = Box<dyn RollSource>, S = Box<dyn ScoringStrategy>> {
    source: R,
    strategy: S,
    player: Option<PlayerName>,
    score: Score,
    rolls: u32,
    sinks: SinkList,
}

impl<R: RollSource, S: ScoringStrategy> Session<R, S> {
    /// Create an unstarted session.
    pub fn new(source: R, strategy: S) -> Self {
        Self {
            source,
            strategy,
            player: None,
            score: Score::ZERO,
            rolls: 0,
            sinks: SinkList::new(),
        }
    }

    /// Begin a game for `player`, resetting the score.
    ///
    /// Starting an already-started session restarts it for the new player.
    #[instrument(skip(self))]
    pub fn start(&mut self, player: PlayerName) {
        self.score = Score::ZERO;
        self.rolls = 0;
        self.sinks.notify(&GameEvent::started(player.clone()));
        self.player = Some(player);
    }

    /// Validate `name` and begin a game for it.
    pub fn start_named(&mut self, name: &str) -> GameResult<()> {
        let player = PlayerName::new(name)?;
        self.start(player);
        Ok(())
    }

    /// Roll once, score it, and notify sinks.
    ///
    /// Fails with [`GameError::NotStarted`] before `start`. A value that does
    /// not fit its roll kind is rejected without touching the score.
    #[instrument(skip(self), err)]
    pub fn roll(&mut self) -> GameResult<Roll> {
        let player = self.player.as_ref().ok_or(GameError::NotStarted)?;

        let value = self.source.shake();
        let roll = Roll::from_raw(self.source.kind(), value)?;
        let score = self.strategy.apply(self.score, roll);
        debug!(%player, %roll, from = %self.score, to = %score, "scored roll");

        self.score = score;
        self.rolls += 1;
        self.sinks.notify(&GameEvent::roll_made(player.clone(), roll, score));
        Ok(roll)
    }

    /// End the game and notify sinks of the final score.
    ///
    /// The player is kept, so the final score stays queryable.
    #[instrument(skip(self), err)]
    pub fn finish(&mut self) -> GameResult<Score> {
        let player = self.player.as_ref().ok_or(GameError::NotStarted)?;
        self.sinks.notify(&GameEvent::finished(player.clone(), self.score));
        Ok(self.score)
    }

    /// Attach a sink; it is notified after all previously attached sinks.
    pub fn attach(&mut self, sink: Rc<dyn EventSink>) -> SinkId {
        self.sinks.attach(sink)
    }

    /// Detach a sink. Unknown handles are ignored and return `false`.
    pub fn detach(&mut self, id: SinkId) -> bool {
        self.sinks.detach(id)
    }

    /// Number of attached sinks.
    #[must_use]
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    /// Score so far.
    #[must_use]
    pub fn current_score(&self) -> Score {
        self.score
    }

    /// Player of the current game, if started.
    #[must_use]
    pub fn current_player(&self) -> Option<&PlayerName> {
        self.player.as_ref()
    }

    /// Has `start` been called?
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.player.is_some()
    }

    /// Rolls made since the last `start`.
    #[must_use]
    pub fn rolls(&self) -> u32 {
        self.rolls
    }

    /// Borrow the roll source.
    pub fn source(&self) -> &R {
        &self.source
    }

    /// Borrow the scoring strategy.
    pub fn strategy(&self) -> &S {
        &self.strategy
    }
}

//! One-stop construction of configured games.

use std::rc::Rc;

use tracing::{info, instrument};

use crate::core::{GameConfig, GameResult, PlayerName, Score};
use crate::dice::DiceFactory;
use crate::events::TracingSink;
use crate::session::Session;

use super::track::{play_track, TrackOutcome};

/// Builds sessions and track runs from a [`GameConfig`].
///
/// Every session it creates reports through a shared [`TracingSink`].
///
/// ```
/// use rust_dicegame::core::{DiceKind, GameConfig, PlayerName, ScoringKind};
/// use rust_dicegame::games::GameFacade;
///
/// let config = GameConfig::new()
///     .with_dice(DiceKind::Fixed)
///     .with_scoring(ScoringKind::BonusOnMax);
/// let mut facade = GameFacade::new(config);
///
/// // 1 + 2 + 3 + 4 + 5 + (6 + 6)
/// let score = facade.play_rounds(PlayerName::new("Alice").unwrap(), 6).unwrap();
/// assert_eq!(score.value(), 27);
/// ```
#[derive(Debug)]
pub struct GameFacade {
    config: GameConfig,
    factory: DiceFactory,
    console: Rc<TracingSink>,
}

impl GameFacade {
    /// Create a facade for `config`.
    pub fn new(config: GameConfig) -> Self {
        let factory = DiceFactory::new(config.seed);
        Self {
            config,
            factory,
            console: Rc::new(TracingSink),
        }
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Number of roll sources created so far.
    #[must_use]
    pub fn dice_created(&self) -> u32 {
        self.factory.created()
    }

    /// Create an unstarted session with the configured dice and scoring.
    pub fn create_session(&mut self) -> Session {
        let source = self.factory.build(&self.config);
        let mut session = Session::new(source, self.config.scoring.strategy());
        session.attach(self.console.clone());
        session
    }

    /// Play one lap of the board with a fresh roll source.
    #[instrument(skip(self), err)]
    pub fn play_simple_game(&mut self) -> GameResult<TrackOutcome> {
        let mut source = self.factory.build(&self.config);
        let outcome = play_track(&mut source)?;
        info!(moves = outcome.moves, distance = outcome.distance, "lap complete");
        Ok(outcome)
    }

    /// Start a session for `player`, roll `rounds` times, and finish.
    #[instrument(skip(self), err)]
    pub fn play_rounds(&mut self, player: PlayerName, rounds: u32) -> GameResult<Score> {
        let mut session = self.create_session();
        session.start(player);
        for _ in 0..rounds {
            session.roll()?;
        }
        session.finish()
    }
}

impl Default for GameFacade {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DiceKind, ScoringKind};
    use crate::dice::RollSource;
    use crate::events::RecordingSink;

    fn fixed(scoring: ScoringKind) -> GameFacade {
        GameFacade::new(GameConfig::new().with_dice(DiceKind::Fixed).with_scoring(scoring))
    }

    #[test]
    fn test_play_rounds_per_strategy() {
        let alice = PlayerName::new("Alice").unwrap();

        assert_eq!(fixed(ScoringKind::Simple).play_rounds(alice.clone(), 6).unwrap().value(), 21);
        assert_eq!(fixed(ScoringKind::BonusOnMax).play_rounds(alice.clone(), 6).unwrap().value(), 27);
        // 1 + 4 + 3 + 8 + 5 + 12
        assert_eq!(fixed(ScoringKind::DoubleOnEven).play_rounds(alice, 6).unwrap().value(), 33);
    }

    #[test]
    fn test_session_has_console_sink() {
        let mut facade = fixed(ScoringKind::Simple);
        let mut session = facade.create_session();
        assert_eq!(session.sink_count(), 1);

        let recorder = Rc::new(RecordingSink::new());
        session.attach(recorder.clone());
        session.start(PlayerName::new("Eve").unwrap());
        assert_eq!(recorder.len(), 1);
    }

    #[test]
    fn test_simple_game_fixed() {
        let mut facade = fixed(ScoringKind::Simple);
        let outcome = facade.play_simple_game().unwrap();
        assert_eq!(outcome.moves, 6);
    }

    #[test]
    fn test_factory_counter() {
        let mut facade = GameFacade::new(GameConfig::new().with_seed(4).counting().logging());
        facade.play_simple_game().unwrap();
        let _ = facade.create_session();
        assert_eq!(facade.dice_created(), 2);
    }

    #[test]
    fn test_counting_config_exposes_roll_count() {
        let mut counted = GameFacade::new(GameConfig::new().with_dice(DiceKind::Fixed).counting());
        let mut session = counted.create_session();
        session.start(PlayerName::new("Alice").unwrap());
        for _ in 0..3 {
            session.roll().unwrap();
        }
        assert_eq!(session.source().rolls_counted(), Some(3));

        let mut plain = fixed(ScoringKind::Simple);
        assert_eq!(plain.create_session().source().rolls_counted(), None);
    }

    #[test]
    fn test_seeded_facades_agree() {
        let config = GameConfig::new().with_dice(DiceKind::Double).with_seed(31);
        let bob = PlayerName::new("Bob").unwrap();

        let a = GameFacade::new(config.clone()).play_rounds(bob.clone(), 10).unwrap();
        let b = GameFacade::new(config).play_rounds(bob, 10).unwrap();
        assert_eq!(a, b);
    }
}

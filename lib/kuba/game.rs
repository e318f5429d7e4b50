use crate::kuba::rules::*;
use crate::kuba::{Board, Color, Direction, InvalidMove, Marble, OutOfRange, Outcome, Player};
use crate::kuba::{Push, Square, Tally};
use derive_more::{Display, Error};
use tracing::{debug, info, instrument};

#[cfg(test)]
use proptest::{prelude::*, sample::Selector};

/// The reason why two players cannot sit at the same game.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum InvalidPlayers {
    #[display(fmt = "both players push {_0} marbles")]
    SameColor(#[error(not(source))] Color),

    #[display(fmt = "both players are called `{_0}`")]
    SameName(#[error(not(source))] String),
}

/// A game of Kuba between two players.
///
/// The game owns the [`Board`] and only ever changes it through pushes that
/// passed every rule check, so a rejected push has no effect at all.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Game {
    players: [Player; 2],
    board: Board,
    prior: Board,
    turn: Option<Color>,
    outcome: Option<Outcome>,
}

#[cfg(test)]
impl Arbitrary for Game {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (any::<Color>(), 0..64usize, any::<Selector>())
            .prop_map(|(c, moves, selector)| {
                let mut game = Game::new(("first", c), ("second", !c));

                for _ in 0..moves {
                    let owned = game.moves().map(|(n, p)| (n.to_owned(), p));
                    match selector.try_select(owned) {
                        None => break,
                        Some((name, push)) => game.play(&name, push).unwrap(),
                    }
                }

                game
            })
            .boxed()
    }
}

impl Game {
    /// The number of red marbles a player must capture to win.
    pub const CAPTURES_TO_WIN: u8 = 7;

    /// Starts a new game on the starting layout.
    ///
    /// Either player may push first.
    ///
    /// # Panics
    ///
    /// Panics if both players have the same color or the same name,
    /// see [`Game::try_new`] for the fallible version.
    pub fn new<N: Into<String>>(first: (N, Color), second: (N, Color)) -> Self {
        match Game::try_new(first, second) {
            Ok(game) => game,
            Err(e) => panic!("{e}"),
        }
    }

    /// Starts a new game on the starting layout, unless both players have the
    /// same color or the same name.
    pub fn try_new<N: Into<String>>(
        first: (N, Color),
        second: (N, Color),
    ) -> Result<Self, InvalidPlayers> {
        let players = [Player::new(first.0, first.1), Player::new(second.0, second.1)];

        if players[0].color() == players[1].color() {
            return Err(InvalidPlayers::SameColor(players[0].color()));
        }

        if players[0].name() == players[1].name() {
            return Err(InvalidPlayers::SameName(players[0].name().to_owned()));
        }

        Ok(Game {
            players,
            board: Board::default(),
            prior: Board::default(),
            turn: None,
            outcome: None,
        })
    }

    /// Both players, in the order they were given to [`Game::new`].
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// The player with the given name, if any.
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name() == name)
    }

    /// The opponent of the player with the given name, if any.
    pub fn opponent(&self, name: &str) -> Option<&Player> {
        let p = self.player(name)?;
        Some(self.seat(!p.color()))
    }

    fn seat(&self, c: Color) -> &Player {
        match &self.players {
            [p, _] if p.color() == c => p,
            [_, p] => p,
        }
    }

    fn seat_mut(&mut self, c: Color) -> &mut Player {
        match &mut self.players {
            [p, _] if p.color() == c => p,
            [_, p] => p,
        }
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The board as it was before the last push.
    ///
    /// No push may restore this board.
    pub fn prior(&self) -> &Board {
        &self.prior
    }

    /// A copy of the playable cells, row by row.
    pub fn board_snapshot(&self) -> [[Option<Marble>; Square::SIDE]; Square::SIDE] {
        self.board.rows()
    }

    /// The [`Marble`] at the given coordinates, if any.
    pub fn tile_at(&self, row: usize, col: usize) -> Result<Option<Marble>, OutOfRange> {
        Ok(self.board[Square::new(row, col)?])
    }

    /// How many marbles of each kind are still on the board.
    pub fn marble_counts(&self) -> Tally {
        self.board.tally()
    }

    /// How many red marbles the player with the given name has captured.
    pub fn captured_count(&self, name: &str) -> Option<u8> {
        Some(self.player(name)?.captured())
    }

    /// The name of the player who pushes next.
    ///
    /// This is `None` before the first push, when either player may push.
    pub fn current_turn(&self) -> Option<&str> {
        Some(self.seat(self.turn?).name())
    }

    /// How the game was decided, if it was.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// The name of the winner, if the game was decided.
    pub fn winner(&self) -> Option<&str> {
        Some(self.seat(self.outcome?.winner()).name())
    }

    /// An iterator over every push the rules currently allow.
    ///
    /// Before the first push this includes the pushes of both players.
    pub fn moves(&self) -> impl Iterator<Item = (&str, Push)> + '_ {
        let undecided = self.outcome.is_none();

        self.players
            .iter()
            .filter(move |p| undecided && self.turn.map_or(true, |c| c == p.color()))
            .flat_map(move |p| {
                Square::iter()
                    .flat_map(|sq| Direction::iter().map(move |d| Push::new(sq, d)))
                    .filter(move |&push| self.check(p.color(), push).is_ok())
                    .map(move |push| (p.name(), push))
            })
    }

    /// Attempts a push given raw coordinates and direction notation.
    ///
    /// Checks run in a fixed order and the first failure is reported; the
    /// game is left unchanged unless the push is accepted.
    pub fn attempt_move(
        &mut self,
        player: &str,
        row: usize,
        col: usize,
        direction: &str,
    ) -> Result<(), InvalidMove> {
        let push = ensure_undecided(self.outcome)
            .and_then(|_| ensure_on_board(row, col))
            .and_then(|sq| Ok(Push::new(sq, ensure_direction(direction)?)));

        match push {
            Ok(push) => self.play(player, push),
            Err(e) => {
                debug!(player, row, col, direction, reason = %e, "push rejected");
                Err(e)
            }
        }
    }

    /// Attempts a well formed [`Push`].
    #[instrument(level = "debug", skip(self))]
    pub fn play(&mut self, player: &str, push: Push) -> Result<(), InvalidMove> {
        let checked = ensure_undecided(self.outcome)
            .and_then(|_| ensure_turn(self.turn, self.player(player).map(Player::color)))
            .and_then(|color| Ok((color, self.check(color, push)?)));

        match checked {
            Ok((color, next)) => {
                self.commit(color, push);
                debug_assert_eq!(self.board, next);
                Ok(())
            }

            Err(e) => {
                debug!(reason = %e, "push rejected");
                Err(e)
            }
        }
    }

    /// Runs the checks that depend on the board, returning the board after
    /// the push.
    fn check(&self, color: Color, push: Push) -> Result<Board, InvalidMove> {
        ensure_owned(&self.board, push.square(), color)?;
        ensure_open(&self.board, push)?;
        let next = ensure_no_self_capture(&self.board, push, color)?;
        ensure_no_repetition(&next, &self.prior)?;
        Ok(next)
    }

    fn commit(&mut self, color: Color, push: Push) {
        self.prior = self.board;

        let red = self.board.tally().red;
        self.board.apply_push(push);
        if self.board.tally().red + 1 == red {
            self.seat_mut(color).capture();
        }

        let dropped = self.board.clear_tray();
        debug_assert_ne!(dropped.and_then(|m| m.color()), Some(color));

        self.turn = Some(!color);
        debug!(%push, ?dropped, tally = %self.board.tally(), "push accepted");

        if self.outcome.is_none() {
            self.outcome = self.evaluate();
            if let Some(o) = self.outcome {
                info!(winner = %self.seat(o.winner()), outcome = %o, "game decided");
            }
        }
    }

    // Every condition is evaluated and the last one that holds decides.
    fn evaluate(&self) -> Option<Outcome> {
        let tally = self.board.tally();

        let captures = self
            .players
            .iter()
            .filter(|p| p.captured() >= Self::CAPTURES_TO_WIN)
            .map(|p| Outcome::Captured(p.color()));

        let depletion = self
            .players
            .iter()
            .filter(|p| tally[Marble::from(p.color())] == 0)
            .map(|p| Outcome::Eliminated(p.color()));

        captures.chain(depletion).last()
    }
}

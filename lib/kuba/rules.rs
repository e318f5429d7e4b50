use crate::kuba::{Board, Color, Direction, Outcome, OutOfRange, ParseDirectionError, Push, Square};
use derive_more::{Display, Error, From};

/// The reason why a push was rejected.
///
/// Variants are listed in the order the checks run in, the first failing
/// check decides the reason.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum InvalidMove {
    #[display(fmt = "the game is already over")]
    #[from(ignore)]
    GameAlreadyWon,

    #[display(fmt = "{_0}")]
    PositionOutOfRange(OutOfRange),

    #[display(fmt = "{_0}")]
    InvalidDirection(ParseDirectionError),

    #[display(fmt = "it is not this player's turn")]
    #[from(ignore)]
    NotYourTurn,

    #[display(fmt = "the square does not hold one of this player's marbles")]
    #[from(ignore)]
    NotYourMarble,

    #[display(fmt = "the marble can only be pushed from an empty cell or the edge")]
    #[from(ignore)]
    PushBlocked,

    #[display(fmt = "the push would drop one of this player's own marbles")]
    #[from(ignore)]
    SelfCapture,

    #[display(fmt = "the push would undo the opponent's last move")]
    #[from(ignore)]
    RepeatsPriorPosition,
}

/// Fails if the game has been decided.
pub fn ensure_undecided(outcome: Option<Outcome>) -> Result<(), InvalidMove> {
    match outcome {
        None => Ok(()),
        Some(_) => Err(InvalidMove::GameAlreadyWon),
    }
}

/// Fails unless the coordinates address a playable cell.
pub fn ensure_on_board(row: usize, col: usize) -> Result<Square, InvalidMove> {
    Ok(Square::new(row, col)?)
}

/// Fails unless the notation names one of the four directions.
pub fn ensure_direction(s: &str) -> Result<Direction, InvalidMove> {
    Ok(s.parse()?)
}

/// Fails unless the player is known and it is their turn.
///
/// While `turn` is `None` either player may move.
pub fn ensure_turn(turn: Option<Color>, player: Option<Color>) -> Result<Color, InvalidMove> {
    match (turn, player) {
        (None, Some(c)) => Ok(c),
        (Some(t), Some(c)) if t == c => Ok(c),
        _ => Err(InvalidMove::NotYourTurn),
    }
}

/// Fails unless the square holds a marble of the player's color.
pub fn ensure_owned(board: &Board, sq: Square, color: Color) -> Result<(), InvalidMove> {
    match board[sq].and_then(|m| m.color()) {
        Some(c) if c == color => Ok(()),
        _ => Err(InvalidMove::NotYourMarble),
    }
}

/// Fails unless the cell behind the pushing marble is open.
pub fn ensure_open(board: &Board, push: Push) -> Result<(), InvalidMove> {
    if board.is_open(push.behind()) {
        Ok(())
    } else {
        Err(InvalidMove::PushBlocked)
    }
}

/// Fails if the push would drop a marble of the player's color.
///
/// Returns the board as it would be after the push, with the tray cleared.
pub fn ensure_no_self_capture(
    board: &Board,
    push: Push,
    color: Color,
) -> Result<Board, InvalidMove> {
    let mut next = *board;
    next.apply_push(push);

    match next.clear_tray().and_then(|m| m.color()) {
        Some(c) if c == color => Err(InvalidMove::SelfCapture),
        _ => Ok(next),
    }
}

/// Fails if the board after the push is identical to the retained snapshot.
pub fn ensure_no_repetition(next: &Board, prior: &Board) -> Result<(), InvalidMove> {
    if next == prior {
        Err(InvalidMove::RepeatsPriorPosition)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kuba::Marble;
    use test_strategy::proptest;

    fn push(s: &str) -> Push {
        s.parse().unwrap()
    }

    #[proptest]
    fn decided_games_reject_every_move(o: Outcome) {
        assert_eq!(ensure_undecided(Some(o)), Err(InvalidMove::GameAlreadyWon));
        assert_eq!(ensure_undecided(None), Ok(()));
    }

    #[proptest]
    fn coordinates_on_the_board_address_a_square(sq: Square) {
        assert_eq!(ensure_on_board(sq.row(), sq.col()), Ok(sq));
    }

    #[proptest]
    fn coordinates_off_the_board_are_out_of_range(
        #[strategy(Square::SIDE..)] row: usize,
        col: usize,
    ) {
        assert_eq!(
            ensure_on_board(row, col),
            Err(InvalidMove::PositionOutOfRange(OutOfRange(row, col)))
        );
    }

    #[proptest]
    fn direction_must_be_one_of_four_letters(
        #[filter(!["F", "B", "L", "R"].contains(&#s.as_str()))] s: String,
        d: Direction,
    ) {
        assert_eq!(ensure_direction(&d.to_string()), Ok(d));
        assert_eq!(
            ensure_direction(&s),
            Err(InvalidMove::InvalidDirection(ParseDirectionError))
        );
    }

    #[proptest]
    fn either_player_may_move_first(c: Color) {
        assert_eq!(ensure_turn(None, Some(c)), Ok(c));
    }

    #[proptest]
    fn only_the_side_to_move_may_move(c: Color) {
        assert_eq!(ensure_turn(Some(c), Some(c)), Ok(c));
        assert_eq!(ensure_turn(Some(!c), Some(c)), Err(InvalidMove::NotYourTurn));
    }

    #[proptest]
    fn unknown_players_never_have_the_turn(turn: Option<Color>) {
        assert_eq!(ensure_turn(turn, None), Err(InvalidMove::NotYourTurn));
    }

    #[proptest]
    fn players_may_only_push_their_own_marbles(b: Board, sq: Square, c: Color) {
        let owned = b[sq] == Some(Marble::from(c));
        assert_eq!(ensure_owned(&b, sq, c).is_ok(), owned);
    }

    #[proptest]
    fn push_is_blocked_unless_cell_behind_is_open(b: Board, p: Push) {
        assert_eq!(ensure_open(&b, p).is_ok(), b.is_open(p.behind()));
    }

    #[test]
    fn pushing_own_marble_off_the_board_is_self_capture() {
        let board = Board::default();
        assert_eq!(
            ensure_no_self_capture(&board, push("55B"), Color::White),
            Err(InvalidMove::SelfCapture)
        );
    }

    #[test]
    fn pushing_opponent_marble_off_the_board_is_allowed() {
        let board: Board = "
            . . . . . . .
            . . . . . . .
            . . . . . . .
            . . . . . W B
            . . . . . . .
            . . . . . . .
            . . . . . . .
        "
        .parse()
        .unwrap();

        let next = ensure_no_self_capture(&board, push("35R"), Color::White).unwrap();
        assert_eq!(next.tray(), None);
        assert_eq!(next.tally().black, 0);
        assert_eq!(next.tally().white, 1);
    }

    #[proptest]
    fn restoring_the_retained_snapshot_is_a_repetition(b: Board) {
        assert_eq!(ensure_no_repetition(&b, &b), Err(InvalidMove::RepeatsPriorPosition));
    }
}

use std::io::Read;
use std::str::SplitWhitespace;

use crate::constants::{MAX_BOARD_SIZE, MAX_GHOST_COUNT, MAX_GHOST_STEPS, MAX_MOVE_COUNT};
use crate::error::{Result, SetupError};
use crate::types::{Direction, GameSetup, GhostColor, GhostStart, Vec2};

/// Size limits applied while reading untrusted input.
#[derive(Clone, Debug)]
pub struct ParseOptions {
    pub max_moves: usize,
    /// Red and blue ghosts together.
    pub max_ghosts: usize,
    /// Ghost count times move count.
    pub max_ghost_steps: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_moves: MAX_MOVE_COUNT,
            max_ghosts: MAX_GHOST_COUNT,
            max_ghost_steps: MAX_GHOST_STEPS,
        }
    }
}

pub fn read_game<R: Read>(mut reader: R, options: &ParseOptions) -> Result<GameSetup> {
    let mut raw = String::new();
    reader.read_to_string(&mut raw)?;
    parse_game(&raw, options)
}

/// Parses the whitespace separated game description.
///
/// Layout: board size, PackMan `x y`, red ghost count and pairs, blue ghost count
/// and pairs, move count and that many `U`/`D`/`L`/`R` tokens. Everything is
/// validated here so the simulation never sees a bad command or an off-board
/// piece. Tokens after the last move are ignored.
pub fn parse_game(raw: &str, options: &ParseOptions) -> Result<GameSetup> {
    let mut tokens = Tokens::new(raw);

    let size = tokens.next_i64("board size")?;
    if size < 1 || size > MAX_BOARD_SIZE as i64 {
        return Err(SetupError::InvalidBoardSize {
            size,
            max: MAX_BOARD_SIZE,
        });
    }
    let board_size = size as i32;

    let packman = tokens.next_position("packman", board_size)?;

    let mut ghosts = Vec::new();
    for color in [GhostColor::Red, GhostColor::Blue] {
        let field = match color {
            GhostColor::Red => "red ghosts",
            GhostColor::Blue => "blue ghosts",
        };
        let count = tokens.next_count(field, options.max_ghosts.saturating_sub(ghosts.len()))?;
        ghosts.reserve(count);
        for _ in 0..count {
            let position = tokens.next_position(field, board_size)?;
            ghosts.push(GhostStart { color, position });
        }
    }

    let move_count = tokens.next_count("moves", options.max_moves)?;
    let ghost_steps = ghosts.len().saturating_mul(move_count);
    if ghost_steps > options.max_ghost_steps {
        return Err(SetupError::LimitExceeded {
            field: "ghost steps",
            count: ghost_steps,
            limit: options.max_ghost_steps,
        });
    }
    let mut moves = Vec::with_capacity(move_count);
    for _ in 0..move_count {
        let token = tokens.next_token("move")?;
        let dir = Direction::parse_move(token).ok_or_else(|| SetupError::InvalidMove {
            token: token.to_string(),
        })?;
        moves.push(dir);
    }

    Ok(GameSetup {
        board_size,
        packman,
        ghosts,
        moves,
    })
}

struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(raw: &'a str) -> Self {
        Self {
            inner: raw.split_whitespace(),
        }
    }

    fn next_token(&mut self, expected: &'static str) -> Result<&'a str> {
        self.inner
            .next()
            .ok_or(SetupError::UnexpectedEnd { expected })
    }

    fn next_i64(&mut self, field: &'static str) -> Result<i64> {
        let token = self.next_token(field)?;
        token
            .parse::<i64>()
            .map_err(|_| SetupError::InvalidInteger {
                field,
                token: token.to_string(),
            })
    }

    fn next_count(&mut self, field: &'static str, limit: usize) -> Result<usize> {
        let value = self.next_i64(field)?;
        if value < 0 {
            return Err(SetupError::NegativeCount { field, value });
        }
        let count = usize::try_from(value).unwrap_or(usize::MAX);
        if count > limit {
            return Err(SetupError::LimitExceeded {
                field,
                count,
                limit,
            });
        }
        Ok(count)
    }

    fn next_position(&mut self, entity: &'static str, size: i32) -> Result<Vec2> {
        let x = self.next_coordinate(entity)?;
        let y = self.next_coordinate(entity)?;
        if x < 1 || y < 1 || x > size || y > size {
            return Err(SetupError::OutOfBounds { entity, x, y, size });
        }
        Ok(Vec2::new(x, y))
    }

    fn next_coordinate(&mut self, entity: &'static str) -> Result<i32> {
        let token = self.next_token(entity)?;
        token.parse::<i32>().map_err(|_| SetupError::InvalidInteger {
            field: entity,
            token: token.to_string(),
        })
    }
}

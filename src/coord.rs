use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    ops::{Mul, Sub},
    str::FromStr,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseCoordError {
    InvalidX(char),
    InvalidY(char),
    NotEnoughCharacter(u8),
    Unexpected(char),
}
impl Display for ParseCoordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParseCoordError::InvalidX(x) => write!(
                f,
                "found `{x}`, characters from `a` to `h` were expected instead"
            )?,
            ParseCoordError::InvalidY(y) => write!(
                f,
                "found `{y}`, characters from `1` to `8` were expected instead"
            )?,
            ParseCoordError::NotEnoughCharacter(len) => write!(
                f,
                "provided string have length of {len} characters, 2 were expected"
            )?,
            ParseCoordError::Unexpected(c) => write!(f, "unexpected `{c}`")?,
        }
        Ok(())
    }
}
impl Error for ParseCoordError {}

/// A square, stored as the board index `col * 8 + row`, both axes counted from zero:
/// column 0 is the a-file and row 0 is the first rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord(u8);

impl Coord {
    pub const fn new(col: u8, row: u8) -> Option<Self> {
        if col >= 8 || row >= 8 {
            None
        } else {
            Some(Coord(col * 8 + row))
        }
    }
    /// Accepts signed axes so callers can probe one step past the edge.
    pub fn new_signed(col: i8, row: i8) -> Option<Self> {
        Self::new(u8::try_from(col).ok()?, u8::try_from(row).ok()?)
    }
    /// Parses a literal such as `"e4"` at compile time, see [`coord!`](crate::coord!).
    pub const fn from_literal(s: &str) -> Self {
        let bytes = s.as_bytes();
        assert!(bytes.len() == 2, "coordinate literal must be 2 characters");
        assert!(
            bytes[0] >= b'a' && bytes[0] <= b'h',
            "file must be from `a` to `h`"
        );
        assert!(
            bytes[1] >= b'1' && bytes[1] <= b'8',
            "rank must be from `1` to `8`"
        );
        Coord((bytes[0] - b'a') * 8 + (bytes[1] - b'1'))
    }
    pub fn from_chars(x: char, y: char) -> Result<Self, ParseCoordError> {
        let col = match x {
            'a'..='h' => x as u8 - b'a',
            _ => return Err(ParseCoordError::InvalidX(x)),
        };
        let row = match y {
            '1'..='8' => y as u8 - b'1',
            _ => return Err(ParseCoordError::InvalidY(y)),
        };
        Ok(Coord(col * 8 + row))
    }
    pub fn col(self) -> u8 {
        self.0 >> 3
    }
    pub fn row(self) -> u8 {
        self.0 & 0b_111
    }
    pub fn index(self) -> usize {
        self.0.into()
    }
    pub fn all() -> impl DoubleEndedIterator<Item = Self> {
        (0..64).map(Coord)
    }
    pub fn move_by(self, movement: Vector) -> Option<Self> {
        Self::new(
            self.col().checked_add_signed(movement.x)?,
            self.row().checked_add_signed(movement.y)?,
        )
    }
    pub fn line_exclusive(self, direction: Vector) -> impl Iterator<Item = Self> {
        debug_assert_ne!(direction, Vector::ZERO);
        (1..).map_while(move |distance| self.move_by(direction * distance))
    }
    /// Squares strictly between `self` and `end`, or `None` when they share no
    /// rank, file, or diagonal.
    pub fn between(self, end: Self) -> Option<impl Iterator<Item = Self>> {
        let difference = end - self;
        if difference == Vector::ZERO || !difference.is_queen_aligned() {
            return None;
        }
        let direction = difference.as_unit();
        Some(
            self.line_exclusive(direction)
                .take_while(move |position| *position != end),
        )
    }
}
impl Display for Coord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let x = (self.col() + b'a') as char;
        let y = self.row() + 1;
        write!(f, "{x}{y}")?;
        Ok(())
    }
}
impl FromStr for Coord {
    type Err = ParseCoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let Some(x) = chars.next() else {
            return Err(ParseCoordError::NotEnoughCharacter(0));
        };
        let Some(y) = chars.next() else {
            return Err(ParseCoordError::NotEnoughCharacter(1));
        };
        if let Some(c) = chars.next() {
            return Err(ParseCoordError::Unexpected(c));
        }
        Coord::from_chars(x, y)
    }
}
impl Sub<Self> for Coord {
    type Output = Vector;

    #[allow(clippy::cast_possible_wrap, reason = "both axes are below 8")]
    fn sub(self, rhs: Self) -> Self::Output {
        Vector {
            x: self.col() as i8 - rhs.col() as i8,
            y: self.row() as i8 - rhs.row() as i8,
        }
    }
}
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vector {
    pub x: i8,
    pub y: i8,
}
impl Vector {
    pub const ZERO: Self = Vector { x: 0, y: 0 };

    pub const KNIGHT_MOVES: [Self; 8] = [
        Vector { x: -2, y: -1 },
        Vector { x: -1, y: -2 },
        Vector { x: -1, y: 2 },
        Vector { x: 2, y: -1 },
        Vector { x: 1, y: 2 },
        Vector { x: 2, y: 1 },
        Vector { x: 1, y: -2 },
        Vector { x: -2, y: 1 },
    ];
    pub const KING_MOVES: [Self; 8] = [
        Vector { x: -1, y: -1 },
        Vector { x: 1, y: -1 },
        Vector { x: -1, y: 1 },
        Vector { x: 1, y: 1 },
        Vector { x: 0, y: 1 },
        Vector { x: 0, y: -1 },
        Vector { x: 1, y: 0 },
        Vector { x: -1, y: 0 },
    ];
    pub const QUEEN_DIRECTIONS: [Self; 8] = Vector::KING_MOVES;

    pub fn pawn_attacks(direction: i8) -> [Self; 2] {
        [-1, 1].map(|x| Vector { x, y: direction })
    }
    pub fn is_diagonal(self) -> bool {
        self.x.unsigned_abs() == self.y.unsigned_abs()
    }
    pub fn is_orthogonal(self) -> bool {
        self.x == 0 || self.y == 0
    }
    pub fn is_queen_aligned(self) -> bool {
        self.is_diagonal() || self.is_orthogonal()
    }
    pub fn is_king_move(self) -> bool {
        self != Vector::ZERO && self.x.unsigned_abs() <= 1 && self.y.unsigned_abs() <= 1
    }
    pub fn is_knight_move(self) -> bool {
        let x = self.x.unsigned_abs();
        let y = self.y.unsigned_abs();
        (x == 1 && y == 2) || (x == 2 && y == 1)
    }
    pub fn as_unit(self) -> Self {
        Vector {
            x: self.x.signum(),
            y: self.y.signum(),
        }
    }
}
impl Mul<i8> for Vector {
    type Output = Vector;

    fn mul(self, rhs: i8) -> Self::Output {
        Vector {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

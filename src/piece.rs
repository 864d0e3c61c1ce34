use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use crate::color::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}
impl PieceKind {
    pub const STARTING_CONFIGURATION: [Self; 8] = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];
    pub fn uppercase(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
    pub fn lowercase(self) -> char {
        self.uppercase().to_ascii_lowercase()
    }
}
impl Display for PieceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PieceKind::Pawn => write!(f, "pawn")?,
            PieceKind::Knight => write!(f, "knight")?,
            PieceKind::Bishop => write!(f, "bishop")?,
            PieceKind::Rook => write!(f, "rook")?,
            PieceKind::Queen => write!(f, "queen")?,
            PieceKind::King => write!(f, "king")?,
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromotionChoice {
    Queen,
    Rook,
    Bishop,
    Knight,
}
impl PromotionChoice {
    pub const ALL: [Self; 4] = [
        PromotionChoice::Queen,
        PromotionChoice::Rook,
        PromotionChoice::Bishop,
        PromotionChoice::Knight,
    ];
}
impl From<PromotionChoice> for PieceKind {
    fn from(value: PromotionChoice) -> Self {
        match value {
            PromotionChoice::Queen => PieceKind::Queen,
            PromotionChoice::Rook => PieceKind::Rook,
            PromotionChoice::Bishop => PieceKind::Bishop,
            PromotionChoice::Knight => PieceKind::Knight,
        }
    }
}
impl Display for PromotionChoice {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", PieceKind::from(*self))?;
        Ok(())
    }
}
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParsePromotionError {
    Empty,
    UnknownSymbol(char),
    UnexpectedSymbol(char),
}
impl Display for ParsePromotionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParsePromotionError::Empty => write!(f, "expected one character, found none instead")?,
            ParsePromotionError::UnknownSymbol(c) => write!(
                f,
                "found `{c}`, expected one of `q`, `r`, `b`, `n`, or uppercase forms of these letters"
            )?,
            ParsePromotionError::UnexpectedSymbol(c) => {
                write!(f, "unexpected `{c}`, only one character is expected")?;
            }
        }
        Ok(())
    }
}
impl Error for ParsePromotionError {}

impl TryFrom<char> for PromotionChoice {
    type Error = ParsePromotionError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        let choice = match value {
            'q' | 'Q' => PromotionChoice::Queen,
            'r' | 'R' => PromotionChoice::Rook,
            'b' | 'B' => PromotionChoice::Bishop,
            'n' | 'N' => PromotionChoice::Knight,
            c => return Err(ParsePromotionError::UnknownSymbol(c)),
        };
        Ok(choice)
    }
}
impl FromStr for PromotionChoice {
    type Err = ParsePromotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut characters = s.chars();
        let choice = characters
            .next()
            .ok_or(ParsePromotionError::Empty)?
            .try_into()?;

        if let Some(c) = characters.next() {
            return Err(ParsePromotionError::UnexpectedSymbol(c));
        }
        Ok(choice)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
    /// Set once the piece first leaves its square, gates castling.
    pub moved: bool,
}
impl Piece {
    pub fn new(color: Color, kind: PieceKind) -> Self {
        Piece {
            color,
            kind,
            moved: false,
        }
    }
    pub fn is(self, color: Color, kind: PieceKind) -> bool {
        self.color == color && self.kind == kind
    }
    pub fn fen(self) -> char {
        match self.color {
            Color::White => self.kind.uppercase(),
            Color::Black => self.kind.lowercase(),
        }
    }
}
impl Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind)?;
        Ok(())
    }
}
#[cfg(test)]
mod test {
    use crate::piece::{ParsePromotionError, PieceKind, PromotionChoice};

    #[test]
    fn parse_promotion() {
        assert_eq!("q".parse(), Ok(PromotionChoice::Queen));
        assert_eq!("N".parse(), Ok(PromotionChoice::Knight));
        assert_eq!(
            "k".parse::<PromotionChoice>(),
            Err(ParsePromotionError::UnknownSymbol('k'))
        );
        assert_eq!(
            "".parse::<PromotionChoice>(),
            Err(ParsePromotionError::Empty)
        );
        assert_eq!(
            "qq".parse::<PromotionChoice>(),
            Err(ParsePromotionError::UnexpectedSymbol('q'))
        );
    }
    #[test]
    fn promotion_never_yields_pawn_or_king() {
        for choice in PromotionChoice::ALL {
            assert!(!matches!(
                PieceKind::from(choice),
                PieceKind::Pawn | PieceKind::King
            ));
        }
    }
}

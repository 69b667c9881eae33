use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::{Castling, Color, Move, Occupant, Piece, Position, Square};

impl Position {
    /// Parse a position from FEN notation.
    ///
    /// Halfmove clock and fullmove number are accepted but ignored; the
    /// position model does not carry them.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut position = Position::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidRankCount { found: ranks.len() });
        }

        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 8 - rank_idx;
            let mut file = 1;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                    continue;
                }
                let Some(Occupant::Occupied(color, piece)) = Occupant::from_char(c) else {
                    return Err(FenError::InvalidPiece { char: c });
                };
                if file > 8 {
                    return Err(FenError::BadFileCount { rank, files: file });
                }
                position.set_piece(Square::from_file_rank(file, rank), color, piece);
                file += 1;
            }
            if file != 9 {
                return Err(FenError::BadFileCount {
                    rank,
                    files: file - 1,
                });
            }
        }

        position.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        for c in parts[2].chars() {
            let castling = match c {
                'K' => Castling::WhiteKingside,
                'Q' => Castling::WhiteQueenside,
                'k' => Castling::BlackKingside,
                'q' => Castling::BlackQueenside,
                '-' => continue,
                _ => return Err(FenError::InvalidCastling { char: c }),
            };
            position.castling_rights.set(castling);
        }

        position.en_passant_target = if parts[3] == "-" {
            None
        } else {
            let sq = parts[3]
                .parse::<Square>()
                .map_err(|_| FenError::InvalidEnPassant {
                    found: parts[3].to_string(),
                })?;
            Some(sq)
        };

        Ok(position)
    }

    /// Parse a position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Convert the position to FEN notation. Clock fields are written as
    /// "0 1".
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::new();
        for rank in (1..=8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 1..=8 {
                let sq = Square::from_file_rank(file, rank);
                if let Occupant::Occupied(color, piece) = self.piece_at(sq) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = if self.white_to_move() { "w" } else { "b" };
        let castling: String = Castling::ALL
            .iter()
            .filter(|&&c| self.castling_rights.has(c))
            .map(|c| c.to_char())
            .collect();
        let castling = if castling.is_empty() {
            "-".to_string()
        } else {
            castling
        };
        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!("{} {} {} {} 0 1", rows.join("/"), active, castling, ep)
    }

    /// Parse a move in long algebraic notation ("e2e4", "e7e8Q", "e2e1q").
    ///
    /// The promotion letter may be given in either case. Returns the
    /// matching legal move, or an error describing why parsing failed.
    ///
    /// # Example
    /// ```
    /// use mailbox_chess::board::Position;
    ///
    /// let pos = Position::new();
    /// let mv = pos.parse_move("e2e4").unwrap();
    /// assert_eq!(mv.to_string(), "e2e4");
    /// ```
    pub fn parse_move(&self, text: &str) -> Result<Move, MoveParseError> {
        let chars: Vec<char> = text.chars().collect();
        if chars.len() < 4 || chars.len() > 5 {
            return Err(MoveParseError::InvalidLength { len: chars.len() });
        }

        if !('a'..='h').contains(&chars[0])
            || !('1'..='8').contains(&chars[1])
            || !('a'..='h').contains(&chars[2])
            || !('1'..='8').contains(&chars[3])
        {
            return Err(MoveParseError::InvalidSquare {
                notation: text.to_string(),
            });
        }

        let from = Square::from_chars(chars[0], chars[1]);
        let to = Square::from_chars(chars[2], chars[3]);

        let promotion = match chars.get(4) {
            Some(&c) => {
                let piece =
                    Piece::from_char(c).ok_or(MoveParseError::InvalidPromotion { char: c })?;
                if matches!(piece, Piece::Pawn | Piece::King) {
                    return Err(MoveParseError::InvalidPromotion { char: c });
                }
                Some(piece)
            }
            None => None,
        };

        self.generate_moves()
            .into_iter()
            .find(|m| m.from == from && m.to == to && m.promotion_piece() == promotion)
            .ok_or(MoveParseError::IllegalMove {
                notation: text.to_string(),
            })
    }

    /// Parse a move and apply it in one call.
    ///
    /// # Example
    /// ```
    /// use mailbox_chess::board::Position;
    ///
    /// let pos = Position::new().play("e2e4").unwrap().play("e7e5").unwrap();
    /// assert!(pos.white_to_move());
    /// ```
    pub fn play(&self, text: &str) -> Result<Position, MoveParseError> {
        let mv = self.parse_move(text)?;
        Ok(self.apply_move(mv))
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::try_from_fen(s)
    }
}

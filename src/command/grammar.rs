//! Keyword table for the command grammar.

use crate::draw::ShapeKind;

/// Shape selected by a keyword, independent of its filled modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeTag {
    Line,
    Circle,
    Rectangle,
    Triangle,
    Square,
    Trapezoid,
}

impl ShapeTag {
    /// Number of integer arguments the shape takes.
    pub const fn arity(self) -> usize {
        match self {
            ShapeTag::Line => 4,
            ShapeTag::Circle => 3,
            ShapeTag::Rectangle => 4,
            ShapeTag::Triangle => 6,
            ShapeTag::Square => 3,
            ShapeTag::Trapezoid => 8,
        }
    }

    /// Builds the shape geometry from exactly [`arity`](Self::arity) integers.
    ///
    /// Returns `None` when `args` has the wrong length.
    pub fn build(self, args: &[i32]) -> Option<ShapeKind> {
        let kind = match (self, args) {
            (ShapeTag::Line, &[x1, y1, x2, y2]) => ShapeKind::Line { x1, y1, x2, y2 },
            (ShapeTag::Circle, &[cx, cy, radius]) => ShapeKind::Circle { cx, cy, radius },
            (ShapeTag::Rectangle, &[x, y, width, height]) => ShapeKind::Rectangle {
                x,
                y,
                width,
                height,
            },
            (ShapeTag::Triangle, &[x1, y1, x2, y2, x3, y3]) => ShapeKind::Triangle {
                points: [(x1, y1), (x2, y2), (x3, y3)],
            },
            (ShapeTag::Square, &[x, y, side]) => ShapeKind::Square { x, y, side },
            (ShapeTag::Trapezoid, &[x1, y1, x2, y2, x3, y3, x4, y4]) => ShapeKind::Trapezoid {
                points: [(x1, y1), (x2, y2), (x3, y3), (x4, y4)],
            },
            _ => return None,
        };
        Some(kind)
    }
}

/// Entry of the keyword table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    /// Draws a shape, optionally filled
    Shape { tag: ShapeTag, filled: bool },
    /// Sets the canvas background
    Background,
}

/// All accepted keywords, lowercase.
pub static KEYWORDS: phf::Map<&'static str, Keyword> = phf::phf_map! {
    "line" => Keyword::Shape { tag: ShapeTag::Line, filled: false },
    "circle" => Keyword::Shape { tag: ShapeTag::Circle, filled: false },
    "fcircle" => Keyword::Shape { tag: ShapeTag::Circle, filled: true },
    "rectangle" => Keyword::Shape { tag: ShapeTag::Rectangle, filled: false },
    "frectangle" => Keyword::Shape { tag: ShapeTag::Rectangle, filled: true },
    "triangle" => Keyword::Shape { tag: ShapeTag::Triangle, filled: false },
    "ftriangle" => Keyword::Shape { tag: ShapeTag::Triangle, filled: true },
    "square" => Keyword::Shape { tag: ShapeTag::Square, filled: false },
    "fsquare" => Keyword::Shape { tag: ShapeTag::Square, filled: true },
    "trapezoid" => Keyword::Shape { tag: ShapeTag::Trapezoid, filled: false },
    "ftrapezoid" => Keyword::Shape { tag: ShapeTag::Trapezoid, filled: true },
    "background" => Keyword::Background,
};

impl Keyword {
    /// Looks up a keyword token case-insensitively.
    pub fn lookup(token: &str) -> Option<Self> {
        KEYWORDS.get(token.to_lowercase().as_str()).copied()
    }

    /// Total token count of a complete command, counting the keyword and the
    /// trailing color token.
    ///
    /// A shape command typed without a color is one token shorter.
    pub const fn token_count(self) -> usize {
        match self {
            Keyword::Shape { tag, .. } => 1 + tag.arity() + 1,
            Keyword::Background => 2,
        }
    }
}

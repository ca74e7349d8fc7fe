//! The grid a quest takes place on, and its text format.
//!
//! Maps are drawn one row per line: `%` is a wall, `.` an open cell, `S` the
//! start and `M` a medal. All rows must have the same length and there must
//! be exactly one start.

use crate::quest::QuestError;
use crate::search::Position;
use nom::{
    character::complete::{line_ending, multispace0, one_of},
    combinator::{eof, map},
    multi::{many1, separated_list1},
    sequence::{delimited, terminated, tuple},
};
use nom_locate::{position, LocatedSpan};
use std::fmt::{self, Display, Formatter};

type Span<'a> = LocatedSpan<&'a str>;

type ParseResult<'a, T> = nom::IResult<Span<'a>, T>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Wall,
    Open,
    Start,
    Medal,
}

/// A cell together with the line and column it was read from.
type LocatedCell = (u32, usize, Cell);

fn parse_cell(input: Span) -> ParseResult<LocatedCell> {
    map(
        tuple((position, one_of("%.SM"))),
        |(span, symbol): (Span, char)| {
            let cell = match symbol {
                '%' => Cell::Wall,
                'S' => Cell::Start,
                'M' => Cell::Medal,
                _ => Cell::Open,
            };
            (span.location_line(), span.get_utf8_column(), cell)
        },
    )(input)
}

fn parse_rows(input: Span) -> ParseResult<Vec<Vec<LocatedCell>>> {
    delimited(
        multispace0,
        separated_list1(line_ending, many1(parse_cell)),
        terminated(multispace0, eof),
    )(input)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestMap {
    width: i64,
    height: i64,
    /// Row-major wall flags
    walls: Vec<bool>,
    start: Position,
    /// Medals in row-major order
    medals: Vec<Position>,
}

impl QuestMap {
    /// A map without walls.
    pub fn open_field(width: i64, height: i64, start: Position, medals: Vec<Position>) -> Self {
        Self {
            width,
            height,
            walls: vec![false; (width * height).max(0) as usize],
            start,
            medals,
        }
    }

    pub fn from_text(text: &str) -> Result<Self, QuestError> {
        let (_, rows) = parse_rows(Span::new(text)).map_err(|e| match e {
            nom::Err::Error(e) | nom::Err::Failure(e) => QuestError::Syntax {
                line: e.input.location_line(),
                column: e.input.get_utf8_column(),
                found: e.input.fragment().chars().next(),
            },
            nom::Err::Incomplete(_) => QuestError::Syntax {
                line: 1,
                column: 1,
                found: None,
            },
        })?;

        let width = rows[0].len();
        let mut walls = Vec::with_capacity(width * rows.len());
        let mut start: Option<Position> = None;
        let mut medals = vec![];

        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(QuestError::RaggedRow {
                    line: row[0].0,
                    expected: width,
                    found: row.len(),
                });
            }
            for (x, &(_, _, cell)) in row.iter().enumerate() {
                let here = Position::new(x as i64, y as i64);
                walls.push(cell == Cell::Wall);
                match cell {
                    Cell::Start => match start {
                        Some(first) => {
                            return Err(QuestError::DuplicateStart {
                                first,
                                second: here,
                            })
                        }
                        None => start = Some(here),
                    },
                    Cell::Medal => medals.push(here),
                    Cell::Wall | Cell::Open => {}
                }
            }
        }

        Ok(Self {
            width: width as i64,
            height: rows.len() as i64,
            walls,
            start: start.ok_or(QuestError::MissingStart)?,
            medals,
        })
    }

    pub fn width(&self) -> i64 {
        self.width
    }

    pub fn height(&self) -> i64 {
        self.height
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn medals(&self) -> &[Position] {
        &self.medals
    }

    pub fn in_bounds(&self, position: Position) -> bool {
        (0..self.width).contains(&position.x) && (0..self.height).contains(&position.y)
    }

    /// Whether the agent may stand on `position`.
    pub fn is_free(&self, position: Position) -> bool {
        self.in_bounds(position)
            && !self.walls[(position.y * self.width + position.x) as usize]
    }
}

impl Display for QuestMap {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            let row: String = (0..self.width)
                .map(|x| {
                    let here = Position::new(x, y);
                    if here == self.start {
                        'S'
                    } else if self.medals.contains(&here) {
                        'M'
                    } else if self.is_free(here) {
                        '.'
                    } else {
                        '%'
                    }
                })
                .collect();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Debug)]
pub enum Error {
    InconsistentRow(usize, usize),
    InvalidCharForMap(char),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InconsistentRow(expect_col_n, this_col_n) => write!(
                f,
                "Expect {} column(s) in each row, given {}.",
                expect_col_n, this_col_n
            ),
            Error::InvalidCharForMap(c) => write!(f, "Invalid character({}) for map.", c),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
    pub start_row: usize,
    pub start_col: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Open,
    Visited,
    Exit,
}

impl Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tile_char = match self {
            Tile::Wall => '#',
            Tile::Open => ' ',
            Tile::Visited => '.',
            Tile::Exit => 'A',
        };

        write!(f, "{}", tile_char)
    }
}

impl TryFrom<char> for Tile {
    type Error = Error;

    fn try_from(value: char) -> std::result::Result<Self, Self::Error> {
        match value {
            '#' => Ok(Tile::Wall),
            ' ' => Ok(Tile::Open),
            'A' => Ok(Tile::Exit),
            other => Err(Error::InvalidCharForMap(other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub r: usize,
    pub c: usize,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}

impl Position {
    pub fn new(r: usize, c: usize) -> Self {
        Self { r, c }
    }

    pub fn neighbor(&self, dir: Direction) -> Option<Self> {
        match dir {
            Direction::Up if self.r > 0 => Some(Position::new(self.r - 1, self.c)),
            Direction::Down => Some(Position::new(self.r + 1, self.c)),
            Direction::Left if self.c > 0 => Some(Position::new(self.r, self.c - 1)),
            Direction::Right => Some(Position::new(self.r, self.c + 1)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn all_dirs() -> &'static [Direction] {
        static ALL_DIRECTIONS: [Direction; 4] = [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ];

        &ALL_DIRECTIONS
    }
}

#[derive(Debug, Clone)]
pub struct Map {
    tiles: Vec<Tile>,
    row_n: usize,
    col_n: usize,
}

impl Display for Map {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for r in 0..self.row_n {
            for c in 0..self.col_n {
                let pos = Position::new(r, c);
                write!(f, "{}", self.tile(&pos).unwrap())?;
            }
            writeln!(f, "")?;
        }

        Ok(())
    }
}

impl Map {
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> std::result::Result<Self, Error> {
        let mut builder = MapBuilder::new();
        for line in lines {
            builder.add_row(line.as_ref())?;
        }

        Ok(builder.build())
    }

    pub fn path_exists(&mut self, pos: &Position) -> bool {
        match self.tile(pos).cloned() {
            Some(Tile::Exit) => return true,
            Some(Tile::Open) => (),
            Some(Tile::Wall | Tile::Visited) | None => return false,
        }

        *self.tile_mut(pos).unwrap() = Tile::Visited;
        let found = Direction::all_dirs().iter().any(|dir| {
            pos.neighbor(*dir)
                .map(|next_pos| self.path_exists(&next_pos))
                .unwrap_or(false)
        });
        *self.tile_mut(pos).unwrap() = Tile::Open;

        found
    }

    pub fn count_paths(&mut self, pos: &Position) -> usize {
        match self.tile(pos).cloned() {
            Some(Tile::Exit) => return 1,
            Some(Tile::Open) => (),
            Some(Tile::Wall | Tile::Visited) | None => return 0,
        }

        *self.tile_mut(pos).unwrap() = Tile::Visited;
        let path_n = Direction::all_dirs()
            .iter()
            .map(|dir| {
                pos.neighbor(*dir)
                    .map(|next_pos| self.count_paths(&next_pos))
                    .unwrap_or(0)
            })
            .sum();
        *self.tile_mut(pos).unwrap() = Tile::Open;

        path_n
    }

    pub fn tile(&self, pos: &Position) -> Option<&Tile> {
        self.pos_to_ind(pos).and_then(|ind| self.tiles.get(ind))
    }

    pub fn row_n(&self) -> usize {
        self.row_n
    }

    pub fn col_n(&self) -> usize {
        self.col_n
    }

    fn tile_mut(&mut self, pos: &Position) -> Option<&mut Tile> {
        self.pos_to_ind(pos).and_then(|ind| self.tiles.get_mut(ind))
    }

    fn pos_to_ind(&self, pos: &Position) -> Option<usize> {
        if pos.r < self.row_n && pos.c < self.col_n {
            Some(pos.r * self.col_n + pos.c)
        } else {
            None
        }
    }
}

struct MapBuilder {
    tiles: Vec<Tile>,
    row_n: usize,
    col_n: Option<usize>,
}

impl MapBuilder {
    pub fn new() -> Self {
        Self {
            tiles: Vec::new(),
            row_n: 0,
            col_n: None,
        }
    }

    pub fn add_row(&mut self, text: &str) -> std::result::Result<(), Error> {
        let this_col_n = text.chars().count();
        if *self.col_n.get_or_insert(this_col_n) != this_col_n {
            return Err(Error::InconsistentRow(self.col_n.unwrap(), this_col_n));
        }

        for c in text.chars() {
            self.tiles.push(Tile::try_from(c)?);
        }
        self.row_n += 1;

        Ok(())
    }

    pub fn build(self) -> Map {
        Map {
            tiles: self.tiles,
            row_n: self.row_n,
            col_n: self.col_n.unwrap_or(0),
        }
    }
}

pub fn read_map<P: AsRef<Path>>(path: P) -> Result<Map> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut builder = MapBuilder::new();
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} of given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        builder.add_row(line.as_str())?;
    }

    Ok(builder.build())
}

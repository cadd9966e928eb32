//! Text-mode presentation layer: renders the grid, reads menu selections and coordinates, and
//! drives the [Grid] and [RouteCalculator]. All input and output goes through the reader and
//! writer handed to [Game], so sessions can be scripted.
use crate::{CellKind, Grid, MazeError, RouteCalculator, Strategy};
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use log::debug;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

const MENU: &str = "[1] Add wall (#)
[2] Add water (~)
[3] Remove obstacle
[4] Solve with BFS (shortest path)
[5] Solve with DFS
[6] Quit";

/// One turn of the menu loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    AddWall,
    AddWater,
    RemoveObstacle,
    SolveBfs,
    SolveDfs,
    Quit,
}

impl FromStr for Command {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Command::AddWall),
            "2" => Ok(Command::AddWater),
            "3" => Ok(Command::RemoveObstacle),
            "4" => Ok(Command::SolveBfs),
            "5" => Ok(Command::SolveDfs),
            "6" => Ok(Command::Quit),
            other => Err(MazeError::ParseError(other.to_owned())),
        }
    }
}

/// Parses a row, column or dimension typed by the user.
pub fn parse_coordinate(input: &str) -> Result<i32, MazeError> {
    let input = input.trim();
    input
        .parse()
        .map_err(|_| MazeError::ParseError(input.to_owned()))
}

/// Reads one line without its line ending. [None] at end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_owned()))
}

fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> io::Result<Option<String>> {
    write!(output, "{}", text)?;
    output.flush()?;
    read_line(input)
}

fn read_dimension<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    name: &str,
) -> Result<i32, MazeError> {
    let text = format!("How many {} will the maze have: ", name);
    let line = prompt_line(input, output, &text)?.unwrap_or_default();
    parse_coordinate(&line)
}

/// Builds the grid, asking only for the dimensions that are not given.
pub fn read_grid<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    rows: Option<i32>,
    cols: Option<i32>,
) -> Result<Grid, MazeError> {
    let rows = match rows {
        Some(rows) => rows,
        None => read_dimension(input, output, "rows")?,
    };
    let cols = match cols {
        Some(cols) => cols,
        None => read_dimension(input, output, "columns")?,
    };
    Grid::new(rows, cols)
}

/// An interactive session on a single grid.
pub struct Game<R, W> {
    grid: Grid,
    calculator: RouteCalculator,
    input: R,
    output: W,
    /// Clear the terminal before each rendering of the grid.
    pub clear_screen: bool,
}

impl<R: BufRead, W: Write> Game<R, W> {
    pub fn new(grid: Grid, input: R, output: W) -> Game<R, W> {
        Game {
            grid,
            calculator: RouteCalculator::default(),
            input,
            output,
            clear_screen: true,
        }
    }
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Runs the menu loop until the user quits or the input ends.
    pub fn run(&mut self) -> Result<(), MazeError> {
        loop {
            self.show_grid()?;
            writeln!(self.output, "\n{}\n{}\n{}", "=".repeat(50), MENU, "=".repeat(50))?;
            let Some(selection) = self.prompt("Choose an option: ")? else {
                break;
            };
            let keep_going = match selection.parse::<Command>() {
                Ok(Command::Quit) => {
                    self.message("Goodbye!")?;
                    false
                }
                Ok(command) => self.execute(command)?,
                Err(_) => {
                    self.message("Invalid option.")?;
                    self.pause()?
                }
            };
            if !keep_going {
                break;
            }
        }
        Ok(())
    }

    /// Carries out a single command. Returns false once the session should end.
    pub fn execute(&mut self, command: Command) -> Result<bool, MazeError> {
        debug!("Executing {:?}", command);
        match command {
            Command::AddWall => self.add_obstacle(CellKind::Wall),
            Command::AddWater => self.add_obstacle(CellKind::Water),
            Command::RemoveObstacle => self.remove_obstacle(),
            Command::SolveBfs => self.solve(Strategy::BreadthFirst),
            Command::SolveDfs => self.solve(Strategy::DepthFirst),
            Command::Quit => Ok(false),
        }
    }

    fn add_obstacle(&mut self, kind: CellKind) -> Result<bool, MazeError> {
        let Some(coordinates) = self.ask_coordinates()? else {
            return Ok(false);
        };
        match coordinates {
            Ok((row, col)) => {
                if self.grid.place_obstacle(row, col, kind) {
                    let name = if kind == CellKind::Wall { "Wall" } else { "Water" };
                    self.message(&format!("{} added.", name))?;
                } else {
                    self.message("You cannot place an obstacle at that position.")?;
                }
            }
            Err(_) => self.message("Invalid coordinates.")?,
        }
        Ok(true)
    }

    fn remove_obstacle(&mut self) -> Result<bool, MazeError> {
        let Some(coordinates) = self.ask_coordinates()? else {
            return Ok(false);
        };
        match coordinates {
            Ok((row, col)) => {
                if self.grid.remove_obstacle(row, col) {
                    self.message("Obstacle removed.")?;
                } else {
                    self.message("There is no obstacle at that position.")?;
                }
            }
            Err(_) => self.message("Invalid coordinates.")?,
        }
        Ok(true)
    }

    fn solve(&mut self, strategy: Strategy) -> Result<bool, MazeError> {
        self.calculator.set_strategy(strategy);
        let path = self.calculator.solve(&mut self.grid);
        self.show_grid()?;
        match path {
            Some(path) => {
                self.message(&format!("Path found! Length: {} cells", path.len()))?;
                self.message("Marked with dots (.)")?;
                self.message(&format!("Algorithm used: {}", strategy))?;
            }
            None => self.message("No path exists with these obstacles.")?,
        }
        self.pause()
    }

    /// Reads a row and a column. A malformed row abandons the turn before the column is asked
    /// for. The outer [None] means the input has ended.
    fn ask_coordinates(&mut self) -> Result<Option<Result<(i32, i32), MazeError>>, MazeError> {
        let max_row = self.grid.rows() - 1;
        let max_col = self.grid.cols() - 1;
        let Some(row) = self.prompt(&format!("Row (0-{}): ", max_row))? else {
            return Ok(None);
        };
        let row = match parse_coordinate(&row) {
            Ok(row) => row,
            Err(err) => return Ok(Some(Err(err))),
        };
        let Some(col) = self.prompt(&format!("Column (0-{}): ", max_col))? else {
            return Ok(None);
        };
        Ok(Some(parse_coordinate(&col).map(|col| (row, col))))
    }

    fn show_grid(&mut self) -> Result<(), MazeError> {
        if self.clear_screen {
            execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        write!(self.output, "{}", self.grid)?;
        Ok(())
    }

    fn message(&mut self, text: &str) -> Result<(), MazeError> {
        writeln!(self.output, "\n{}", text)?;
        Ok(())
    }

    /// Waits for Enter. Returns false if the input has ended.
    fn pause(&mut self) -> Result<bool, MazeError> {
        Ok(self.prompt("\nPress Enter to continue...")?.is_some())
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>, MazeError> {
        Ok(prompt_line(&mut self.input, &mut self.output, text)?)
    }
}

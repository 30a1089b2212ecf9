mod renderer;

pub use renderer::{Renderer, Tile};

use std::{
    collections::VecDeque,
    io::{BufRead, Write},
    ops::ControlFlow,
};

use crossterm::{
    queue,
    style::{self, Attribute, Color, Stylize},
};

use crate::{config::Config, error::MazeError, generators::MazeGenerator, maze::Maze, storage};

/// Menu entries, numbered as the user types them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Exit,
    Generate,
    Load,
    Save,
    Display,
    Escape,
}

impl Command {
    /// Menu entries in display order, exit last
    const MENU: [Command; 6] = [
        Command::Generate,
        Command::Load,
        Command::Save,
        Command::Display,
        Command::Escape,
        Command::Exit,
    ];

    pub fn number(self) -> u8 {
        match self {
            Command::Exit => 0,
            Command::Generate => 1,
            Command::Load => 2,
            Command::Save => 3,
            Command::Display => 4,
            Command::Escape => 5,
        }
    }

    pub fn parse(token: &str) -> Option<Command> {
        let number = token.parse::<u8>().ok()?;
        Self::MENU
            .into_iter()
            .find(|command| command.number() == number)
    }

    /// Commands that need a maze in memory.
    pub fn requires_maze(self) -> bool {
        matches!(self, Command::Save | Command::Display | Command::Escape)
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Exit => write!(f, "Exit"),
            Command::Generate => write!(f, "Generate a new maze"),
            Command::Load => write!(f, "Load a maze"),
            Command::Save => write!(f, "Save the maze"),
            Command::Display => write!(f, "Display the maze"),
            Command::Escape => write!(f, "Find the escape"),
        }
    }
}

/// Whitespace separated tokens read lazily from a line-based input.
struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or `None` once the input is exhausted.
    fn next_token(&mut self) -> std::io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(str::to_owned));
        }
    }
}

/// The interactive menu loop.
pub struct App<R, W> {
    input: Tokens<R>,
    output: W,
    generator: MazeGenerator,
    renderer: Renderer,
    colored: bool,
    /// The maze currently in memory, replaced on every generate or load
    maze: Option<Maze>,
}

impl<R: BufRead, W: Write> App<R, W> {
    const INCORRECT_OPTION: &str = "Incorrect option. Please try again";

    pub fn new(input: R, output: W, config: &Config) -> Self {
        Self {
            input: Tokens::new(input),
            output,
            generator: MazeGenerator::new(config.seed),
            renderer: Renderer::new(config.colored),
            colored: config.colored,
            maze: None,
        }
    }

    pub fn maze(&self) -> Option<&Maze> {
        self.maze.as_ref()
    }

    /// Runs the menu loop until the user exits or the input ends.
    ///
    /// Maze errors are reported to the user and the menu is shown again. Only failures to
    /// read input or write output end the loop with an error.
    pub fn run(&mut self) -> std::io::Result<()> {
        tracing::info!("Started main app loop");
        loop {
            self.print_menu()?;
            let Some(token) = self.input.next_token()? else {
                break;
            };

            let command = match Command::parse(&token) {
                Some(command) if !command.requires_maze() || self.maze.is_some() => command,
                _ => {
                    tracing::debug!("[app loop] rejected option {:?}", token);
                    self.print(Self::INCORRECT_OPTION, Color::Yellow)?;
                    continue;
                }
            };

            match self.execute(command) {
                Ok(ControlFlow::Continue(())) => {}
                Ok(ControlFlow::Break(())) => break,
                Err(MazeError::Io(err)) if !matches!(command, Command::Save | Command::Load) => {
                    // The console itself failed, there is nowhere left to report to
                    return Err(err);
                }
                Err(err) => {
                    tracing::warn!("[app loop] {} failed: {}", command, err);
                    self.print(&err.to_string(), Color::Red)?;
                }
            }
        }
        tracing::info!("Exiting main app loop");
        Ok(())
    }

    fn execute(&mut self, command: Command) -> Result<ControlFlow<()>, MazeError> {
        tracing::debug!("[app loop] executing {:?}", command);
        match command {
            Command::Exit => {
                self.print("Bye", Color::Green)?;
                return Ok(ControlFlow::Break(()));
            }
            Command::Generate => {
                self.print("Enter the size of a new maze", Color::Blue)?;
                let Some(token) = self.input.next_token()? else {
                    return Ok(ControlFlow::Break(()));
                };
                let Ok(size) = token.parse::<u16>() else {
                    let message = format!(
                        "Please enter a valid number between {} and {}.",
                        Maze::MIN_SIZE,
                        u16::MAX
                    );
                    self.print(&message, Color::Yellow)?;
                    return Ok(ControlFlow::Continue(()));
                };
                let maze = self.generator.generate(size, size)?;
                self.renderer.render(&mut self.output, &maze, false)?;
                self.maze = Some(maze);
            }
            Command::Load => {
                self.print("Enter the path to file with maze", Color::Blue)?;
                let Some(path) = self.input.next_token()? else {
                    return Ok(ControlFlow::Break(()));
                };
                self.maze = Some(storage::load(&path)?);
            }
            Command::Save => {
                self.print("Enter the path to a new maze file", Color::Blue)?;
                let Some(path) = self.input.next_token()? else {
                    return Ok(ControlFlow::Break(()));
                };
                if let Some(maze) = &self.maze {
                    storage::save(maze, &path)?;
                }
            }
            Command::Display | Command::Escape => {
                if let Some(maze) = &self.maze {
                    self.renderer
                        .render(&mut self.output, maze, command == Command::Escape)?;
                }
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    fn print_menu(&mut self) -> std::io::Result<()> {
        self.print_styled("=== Menu ===", Color::Blue, true)?;
        let has_maze = self.maze.is_some();
        for command in Command::MENU {
            if command.requires_maze() && !has_maze {
                continue;
            }
            let entry = format!("{}. {}", command.number(), command);
            self.print_styled(&entry, Color::Reset, false)?;
        }
        Ok(())
    }

    fn print(&mut self, message: &str, color: Color) -> std::io::Result<()> {
        self.print_styled(message, color, false)
    }

    /// Writes one line, styled when colors are enabled.
    fn print_styled(&mut self, message: &str, color: Color, bold: bool) -> std::io::Result<()> {
        if self.colored {
            let mut content = message.with(color);
            if bold {
                content = content.attribute(Attribute::Bold);
            }
            queue!(self.output, style::PrintStyledContent(content), style::Print("\n"))?;
        } else {
            writeln!(self.output, "{}", message)?;
        }
        self.output.flush()
    }
}

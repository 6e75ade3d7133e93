extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
extern crate mortal;
use crate::mach::{Display, Runtime, Storage, PIXEL_COLUMNS, PIXEL_ROWS, SCREEN_COLUMNS, SCREEN_ROWS};
use ansi_term::{Colour, Style};
use clap::Parser;
use linefeed::{DefaultTerminal, Interface, ReadResult, Signal};
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, warn};

/// Level I BASIC for the terminal.
#[derive(Parser, Debug)]
#[command(name = "basic")]
#[command(version, about = "TRS-80 Level I BASIC", long_about = None)]
struct Cli {
    /// Program to LOAD at start-up
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "basic=trace"
    #[arg(long, value_name = "FILTER")]
    log: Option<String>,
}

pub fn main() {
    let cli = Cli::parse();
    let filter = match &cli.log {
        Some(filter) => tracing_subscriber::EnvFilter::new(filter),
        None => tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    if let Err(error) = main_loop(&cli) {
        eprintln!("{}", Colour::Red.bold().paint(error.to_string()));
    }
}

fn main_loop(cli: &Cli) -> io::Result<()> {
    let mut runtime = Runtime::new(Console::new()?, FileStorage);
    let handle = runtime.interrupt_handle();
    runtime.display_mut().interrupt_with(handle.clone());
    if let Err(error) = ctrlc::set_handler(move || {
        handle.store(true, Ordering::SeqCst);
    }) {
        warn!(%error, "no Ctrl-C handler");
    }

    runtime
        .display_mut()
        .write_line(&Style::new().bold().paint("LEVEL I BASIC").to_string());
    runtime.display_mut().write_line("READY");
    if let Some(file) = &cli.file {
        let path = file.to_string_lossy().replace('"', "");
        runtime.enter(&format!("LOAD \"{}\"", path));
    }

    loop {
        let string = match runtime.display_mut().read_command()? {
            Some(string) => string,
            None => break,
        };
        if runtime.enter(&string) {
            runtime.display_mut().add_history(string);
        }
    }
    Ok(())
}

/// The terminal as a Level I screen. Text on the current row is held
/// back until the row ends so that `INPUT` can hand it to the line editor
/// as the prompt.
pub struct Console {
    interface: Interface<DefaultTerminal>,
    screen: Option<mortal::Terminal>,
    halted: Arc<AtomicBool>,
    tail: String,
    column: usize,
    row: usize,
    pixels: HashSet<(usize, usize)>,
}

impl Console {
    pub fn new() -> io::Result<Console> {
        let interface = Interface::new("BASIC")?;
        interface.set_report_signal(Signal::Interrupt, true);
        Ok(Console {
            interface,
            screen: None,
            halted: Arc::default(),
            tail: String::new(),
            column: 0,
            row: 0,
            pixels: HashSet::default(),
        })
    }

    /// Ctrl-C while waiting for input sets this flag.
    pub fn interrupt_with(&mut self, halted: Arc<AtomicBool>) {
        self.halted = halted;
    }

    /// A line typed at the prompt, or `None` at end of input.
    pub fn read_command(&mut self) -> io::Result<Option<String>> {
        self.flush()?;
        self.interface.set_prompt("")?;
        loop {
            match self.interface.read_line()? {
                ReadResult::Input(string) => {
                    self.line_entered();
                    return Ok(Some(string));
                }
                ReadResult::Signal(Signal::Interrupt) => {
                    self.interface.set_buffer("")?;
                    self.interface.write_fmt(format_args!("BREAK\n"))?;
                }
                ReadResult::Signal(_) | ReadResult::Eof => return Ok(None),
            }
        }
    }

    pub fn add_history(&self, string: String) {
        self.interface.add_history_unique(string);
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.tail.is_empty() {
            self.interface.write_fmt(format_args!("{}", self.tail))?;
            self.tail.clear();
        }
        io::stdout().flush()
    }

    fn line_entered(&mut self) {
        self.column = 0;
        self.advance_row();
    }

    fn advance_row(&mut self) {
        if self.row + 1 < SCREEN_ROWS {
            self.row += 1;
        }
    }

    fn screen(&mut self) -> io::Result<&mortal::Terminal> {
        if self.screen.is_none() {
            self.screen = Some(mortal::Terminal::new()?);
        }
        match &self.screen {
            Some(screen) => Ok(screen),
            None => Err(io::Error::new(io::ErrorKind::Other, "no terminal")),
        }
    }

    /// The terminal only moves relative to where it is, so absolute
    /// moves go through the first column of the tracked row.
    fn move_between(
        screen: &mortal::Terminal,
        from: (usize, usize),
        to: (usize, usize),
    ) -> io::Result<()> {
        let (rows, columns) = steps(from, to);
        screen.move_to_first_column()?;
        if rows < 0 {
            screen.move_up(rows.unsigned_abs())?;
        } else if rows > 0 {
            screen.move_down(rows as usize)?;
        }
        if columns > 0 {
            screen.move_right(columns)?;
        }
        Ok(())
    }

    /// Each character cell shows a 2x3 block of pixels.
    fn draw_cell(&mut self, x: usize, y: usize) -> io::Result<()> {
        let (column, row) = (x / 2, y / 3);
        let lit = (0..2).any(|dx| {
            (0..3).any(|dy| self.pixels.contains(&(column * 2 + dx, row * 3 + dy)))
        });
        self.flush()?;
        let cursor = (self.column, self.row);
        let screen = self.screen()?;
        Console::move_between(screen, cursor, (column, row))?;
        screen.write_str(if lit { "\u{2588}" } else { " " })?;
        Console::move_between(screen, (column + 1, row), cursor)
    }

    fn log_failure(result: io::Result<()>) {
        if let Err(error) = result {
            warn!(%error, "terminal");
        }
    }
}

impl Display for Console {
    fn write(&mut self, s: &str) {
        for ch in s.chars() {
            self.tail.push(ch);
            if ch == '\n' {
                self.column = 0;
                self.advance_row();
            } else {
                self.column += 1;
                if self.column >= SCREEN_COLUMNS {
                    self.column = 0;
                    self.advance_row();
                }
            }
        }
        if let Some(end) = self.tail.rfind('\n') {
            let rest = self.tail.split_off(end + 1);
            let result = self.interface.write_fmt(format_args!("{}", self.tail));
            self.tail = rest;
            Console::log_failure(result);
        }
    }

    fn read_line(&mut self) -> io::Result<String> {
        let prompt = std::mem::take(&mut self.tail);
        self.interface.set_prompt(&prompt)?;
        match self.interface.read_line()? {
            ReadResult::Input(string) => {
                self.line_entered();
                Ok(string)
            }
            ReadResult::Signal(Signal::Interrupt) => {
                debug!("interrupted input");
                self.interface.set_buffer("")?;
                self.interface.lock_reader().cancel_read_line()?;
                self.halted.store(true, Ordering::SeqCst);
                self.line_entered();
                Ok(String::new())
            }
            ReadResult::Signal(_) | ReadResult::Eof => Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "end of input",
            )),
        }
    }

    fn read_key(&mut self) -> io::Result<char> {
        self.flush()?;
        let halted = self.halted.clone();
        let screen = self.screen()?;
        let state = screen.prepare(mortal::PrepareConfig::default())?;
        let key = loop {
            match screen.read_event(None)? {
                Some(mortal::Event::Key(mortal::Key::Char(ch))) => break ch,
                Some(mortal::Event::Key(mortal::Key::Ctrl('c'))) => {
                    halted.store(true, Ordering::SeqCst);
                    break '\n';
                }
                Some(mortal::Event::Key(_)) => break '\n',
                _ => continue,
            }
        };
        screen.restore(state)?;
        Ok(key)
    }

    fn cursor_position(&self) -> (usize, usize) {
        (self.column, self.row)
    }

    fn set_cursor_position(&mut self, column: usize, row: usize) {
        let cursor = (self.column, self.row);
        let result = self.flush().and_then(|_| {
            let screen = self.screen()?;
            Console::move_between(screen, cursor, (column, row))
        });
        Console::log_failure(result);
        self.column = column;
        self.row = row;
    }

    fn clear(&mut self) {
        self.tail.clear();
        self.pixels.clear();
        self.column = 0;
        self.row = 0;
        // clearing also homes the cursor
        let result = self.screen().and_then(|screen| screen.clear_screen());
        Console::log_failure(result);
    }

    fn set(&mut self, x: usize, y: usize) {
        debug_assert!(x < PIXEL_COLUMNS && y < PIXEL_ROWS);
        self.pixels.insert((x, y));
        let result = self.draw_cell(x, y);
        Console::log_failure(result);
    }

    fn reset(&mut self, x: usize, y: usize) {
        self.pixels.remove(&(x, y));
        let result = self.draw_cell(x, y);
        Console::log_failure(result);
    }

    fn point(&self, x: usize, y: usize) -> bool {
        self.pixels.contains(&(x, y))
    }
}

/// Programs are plain text files, one numbered line per line.
pub struct FileStorage;

impl Storage for FileStorage {
    fn load(&mut self, path: &str) -> io::Result<Vec<String>> {
        let reader = BufReader::new(File::open(path)?);
        reader.lines().collect()
    }

    fn save(&mut self, path: &str, lines: &[String]) -> io::Result<()> {
        let mut file = File::create(path)?;
        for line in lines {
            writeln!(file, "{}", line)?;
        }
        Ok(())
    }
}

/// Rows to move (negative is up) and columns to move right after
/// returning to the first column.
fn steps(from: (usize, usize), to: (usize, usize)) -> (isize, usize) {
    (to.1 as isize - from.1 as isize, to.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps() {
        assert_eq!(steps((10, 5), (3, 2)), (-3, 3));
        assert_eq!(steps((0, 0), (63, 15)), (15, 63));
        assert_eq!(steps((7, 4), (0, 4)), (0, 0));
    }
}

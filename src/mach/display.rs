use super::{SCREEN_COLUMNS, SCREEN_ROWS};
use std::collections::{HashMap, HashSet, VecDeque};
use std::io;

/// ## Collaborators
///
/// The interpreter never touches a terminal or a file system directly.
/// Everything it shows or reads goes through a `Display`, and programs
/// are loaded and saved through a `Storage`.

pub trait Display {
    fn write(&mut self, s: &str);
    fn write_line(&mut self, s: &str) {
        self.write(s);
        self.write("\n");
    }
    /// Blocks until a line is entered. The line is echoed.
    fn read_line(&mut self) -> io::Result<String>;
    fn read_key(&mut self) -> io::Result<char>;
    /// Column and row of the cursor.
    fn cursor_position(&self) -> (usize, usize);
    fn set_cursor_position(&mut self, column: usize, row: usize);
    fn clear(&mut self);
    fn set(&mut self, x: usize, y: usize);
    fn reset(&mut self, x: usize, y: usize);
    fn point(&self, x: usize, y: usize) -> bool;
}

pub trait Storage {
    fn load(&mut self, path: &str) -> io::Result<Vec<String>>;
    fn save(&mut self, path: &str, lines: &[String]) -> io::Result<()>;
}

/// A display without a screen. Output accumulates as text and input
/// comes from a queue, which is how the tests drive the interpreter.
#[derive(Debug, Default)]
pub struct Transcript {
    output: String,
    input: VecDeque<String>,
    keys: VecDeque<char>,
    column: usize,
    row: usize,
    pixels: HashSet<(usize, usize)>,
}

impl Transcript {
    pub fn new() -> Transcript {
        Transcript::default()
    }

    pub fn push_input(&mut self, line: &str) {
        self.input.push_back(line.to_string());
    }

    pub fn push_key(&mut self, key: char) {
        self.keys.push_back(key);
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }

    fn advance_row(&mut self) {
        if self.row + 1 < SCREEN_ROWS {
            self.row += 1;
        }
    }
}

impl Display for Transcript {
    fn write(&mut self, s: &str) {
        for ch in s.chars() {
            self.output.push(ch);
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
    }

    fn read_line(&mut self) -> io::Result<String> {
        match self.input.pop_front() {
            Some(line) => {
                self.write_line(&line);
                Ok(line)
            }
            None => Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no more input",
            )),
        }
    }

    fn read_key(&mut self) -> io::Result<char> {
        Ok(self.keys.pop_front().unwrap_or('\n'))
    }

    fn cursor_position(&self) -> (usize, usize) {
        (self.column, self.row)
    }

    fn set_cursor_position(&mut self, column: usize, row: usize) {
        self.column = column;
        self.row = row;
    }

    fn clear(&mut self) {
        self.column = 0;
        self.row = 0;
        self.pixels.clear();
    }

    fn set(&mut self, x: usize, y: usize) {
        self.pixels.insert((x, y));
    }

    fn reset(&mut self, x: usize, y: usize) {
        self.pixels.remove(&(x, y));
    }

    fn point(&self, x: usize, y: usize) -> bool {
        self.pixels.contains(&(x, y))
    }
}

/// Program files kept in memory, by path.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    files: HashMap<String, Vec<String>>,
}

impl MemoryStorage {
    pub fn new() -> MemoryStorage {
        MemoryStorage::default()
    }

    pub fn file(&self, path: &str) -> Option<&[String]> {
        self.files.get(path).map(|v| v.as_slice())
    }
}

impl Storage for MemoryStorage {
    fn load(&mut self, path: &str) -> io::Result<Vec<String>> {
        match self.files.get(path) {
            Some(lines) => Ok(lines.clone()),
            None => Err(io::Error::new(io::ErrorKind::NotFound, path.to_string())),
        }
    }

    fn save(&mut self, path: &str, lines: &[String]) -> io::Result<()> {
        self.files.insert(path.to_string(), lines.to_vec());
        Ok(())
    }
}

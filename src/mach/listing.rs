use crate::lang::{ast::Statement, Line, LineNumber};
use std::collections::{btree_map::Values, BTreeMap};
use std::ops::Bound::{Excluded, Unbounded};
use std::rc::Rc;

/// ## Program store
///
/// Lines are kept sorted by number. Before a run the statements of every
/// line are flattened into one sequence of slots so that falling through
/// to the next statement is an index increment and jumps are indexes.

#[derive(Debug, Default)]
pub struct Listing {
    source: BTreeMap<u16, Line>,
    dirty: bool,
    code: Vec<Slot>,
    starts: BTreeMap<u16, usize>,
}

/// One executable statement. For an `IF` the statements of the `THEN`
/// follow it directly and `skip` is the slot just past them.
#[derive(Debug, Clone)]
pub struct Slot {
    pub line_number: LineNumber,
    pub source: Rc<str>,
    pub statement: Rc<Statement>,
    pub skip: usize,
}

impl Slot {
    pub fn compile(line: &Line, code: &mut Vec<Slot>) {
        Slot::flatten(line.number(), line.source(), line.statements(), code);
    }

    fn flatten(number: LineNumber, source: &Rc<str>, statements: &[Statement], code: &mut Vec<Slot>) {
        for statement in statements {
            let index = code.len();
            code.push(Slot {
                line_number: number,
                source: source.clone(),
                statement: Rc::new(statement.clone()),
                skip: index + 1,
            });
            if let Statement::If(_, _, then) = statement {
                Slot::flatten(number, source, then, code);
                code[index].skip = code.len();
            }
        }
    }
}

impl Listing {
    pub fn clear(&mut self) {
        self.source.clear();
        self.code.clear();
        self.starts.clear();
        self.dirty = false;
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    /// A line with no text deletes the line of that number.
    pub fn add_or_replace(&mut self, line: Line) -> Option<Line> {
        let number = line.number()?;
        if line.source().is_empty() {
            return self.remove(number);
        }
        self.dirty = true;
        self.source.insert(number, line)
    }

    pub fn remove(&mut self, number: u16) -> Option<Line> {
        let line = self.source.remove(&number);
        if line.is_some() {
            self.dirty = true;
        }
        line
    }

    pub fn line(&self, number: u16) -> Option<&Line> {
        self.source.get(&number)
    }

    pub fn lines(&self) -> Values<'_, u16, Line> {
        self.source.values()
    }

    pub fn list(&self, from: u16) -> impl Iterator<Item = &Line> {
        self.source.range(from..).map(|(_, line)| line)
    }

    pub fn next_line(&self, number: u16) -> Option<&Line> {
        self.source
            .range((Excluded(number), Unbounded))
            .next()
            .map(|(_, line)| line)
    }

    pub fn previous_line(&self, number: u16) -> Option<&Line> {
        self.source.range(..number).next_back().map(|(_, line)| line)
    }

    /// Bytes of program memory in use.
    pub fn size(&self) -> usize {
        self.source.values().map(|line| line.size()).sum()
    }

    /// Rebuild the executable sequence if any line changed.
    pub fn initialize(&mut self) {
        if !self.dirty {
            return;
        }
        self.code.clear();
        self.starts.clear();
        for (number, line) in self.source.iter() {
            self.starts.insert(*number, self.code.len());
            Slot::compile(line, &mut self.code);
        }
        self.dirty = false;
    }

    /// One past the last slot.
    pub fn end(&self) -> usize {
        self.code.len()
    }

    pub fn slot(&self, index: usize) -> Option<&Slot> {
        debug_assert!(!self.dirty);
        self.code.get(index)
    }

    /// First slot of exactly this line.
    pub fn line_start(&self, number: u16) -> Option<usize> {
        self.starts.get(&number).copied()
    }

    /// First statement at or after the line that is not `DATA`.
    pub fn get_executable_statement(&self, number: u16) -> Option<usize> {
        let start = self.starts.range(number..).next().map(|(_, index)| *index)?;
        (start..self.code.len())
            .find(|index| !matches!(*self.code[*index].statement, Statement::Data(..)))
    }
}

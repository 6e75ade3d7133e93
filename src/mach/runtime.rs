use super::*;
use crate::error;
use crate::lang::ast::{AcceptVisitor, Expression, Ident, Print, Statement, Visitor};
use crate::lang::{Builtin, Column, Error, ErrorKind, Line, LineNumber};
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, trace, warn};

type Result<T> = std::result::Result<T, Error>;

/// ## Interpreter
///
/// One loop runs everything: the line typed at the prompt and the stored
/// program. Each statement tells the loop where to go next. `GOSUB` and
/// `FOR` push addresses on explicit stacks so the host stack never grows
/// with the BASIC program.

pub struct Runtime<D: Display, S: Storage> {
    display: D,
    storage: S,
    listing: Listing,
    env: Environment,
    direct: Vec<Slot>,
    cont: Option<Address>,
    ready: bool,
    halted: Arc<AtomicBool>,
}

/// What the run loop does after a statement.
#[derive(Debug, PartialEq)]
enum Flow {
    Next,
    Jump(Address),
    Halt,
}

impl Default for Runtime<Transcript, MemoryStorage> {
    fn default() -> Self {
        Runtime::new(Transcript::new(), MemoryStorage::new())
    }
}

impl<D: Display, S: Storage> Runtime<D, S> {
    pub fn new(display: D, storage: S) -> Runtime<D, S> {
        Runtime {
            display,
            storage,
            listing: Listing::default(),
            env: Environment::new(),
            direct: vec![],
            cont: None,
            ready: false,
            halted: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    /// Setting the flag stops a running program before its next statement.
    pub fn interrupt_handle(&self) -> Arc<AtomicBool> {
        self.halted.clone()
    }

    /// Bytes free for the program and arrays.
    pub fn mem(&self) -> usize {
        MEM_BASELINE.saturating_sub(self.listing.size())
    }

    /// Enter a line as if typed at the prompt. A numbered line is stored;
    /// anything else runs immediately. Returns false if an error was shown.
    pub fn enter(&mut self, s: &str) -> bool {
        let line = match Line::parse(s) {
            Ok(Some(line)) => line,
            Ok(None) => return true,
            Err(error) => {
                self.report(&error);
                return false;
            }
        };
        debug!(line = %line, "enter");
        self.direct.clear();
        if line.is_direct() {
            Slot::compile(&line, &mut self.direct);
        } else {
            self.direct.push(Slot {
                line_number: None,
                source: line.source().clone(),
                statement: Rc::new(Statement::Replace(0..0, Box::new(line))),
                skip: 1,
            });
        }
        self.halted.store(false, Ordering::SeqCst);
        self.execute(Address::Direct(0))
    }

    fn execute(&mut self, start: Address) -> bool {
        let mut pc = start;
        let mut success = true;
        loop {
            if self.halted.swap(false, Ordering::SeqCst) {
                let line_number = self.slot(pc).and_then(|slot| slot.line_number);
                debug!(?line_number, "interrupted");
                self.brk(line_number, pc);
                break;
            }
            let slot = match self.slot(pc) {
                Some(slot) => slot,
                None => break,
            };
            trace!(line = ?slot.line_number, statement = ?slot.statement, "execute");
            match self.statement(&slot, pc) {
                Ok(Flow::Next) => pc = next(pc),
                Ok(Flow::Jump(address)) => {
                    if let (Address::Direct(_), Address::Program(_)) = (pc, address) {
                        self.ready = true;
                    }
                    pc = address;
                }
                Ok(Flow::Halt) => break,
                Err(error) => {
                    let error = error
                        .in_line_number(slot.line_number)
                        .in_column(&slot.statement.column())
                        .in_source(&slot.source);
                    self.report(&error);
                    success = false;
                    break;
                }
            }
        }
        self.new_line_if_needed();
        if self.ready {
            self.ready = false;
            self.display.write_line("READY");
            debug!("ready");
        }
        success
    }

    fn slot(&self, address: Address) -> Option<Slot> {
        match address {
            Address::Program(index) => self.listing.slot(index).cloned(),
            Address::Direct(index) => self.direct.get(index).cloned(),
        }
    }

    fn report(&mut self, error: &Error) {
        warn!(%error, "reported");
        self.new_line_if_needed();
        self.display.write_line(&error.report());
    }

    fn new_line_if_needed(&mut self) {
        if self.display.cursor_position().0 != 0 {
            self.display.write("\n");
        }
    }

    fn brk(&mut self, line_number: LineNumber, resume: Address) {
        self.new_line_if_needed();
        match line_number {
            Some(number) => self.display.write_line(&format!("BREAK AT {}", number)),
            None => self.display.write_line("BREAK"),
        }
        if let Address::Program(_) = resume {
            self.cont = Some(resume);
            self.ready = true;
        }
    }

    /// Any edit to the program invalidates `CONT` and open loops.
    fn program_changed(&mut self) {
        self.cont = None;
        self.env.clear_stacks();
    }

    fn statement(&mut self, slot: &Slot, pc: Address) -> Result<Flow> {
        use Statement::*;
        match &*slot.statement {
            Cls(_) => {
                self.display.clear();
                Ok(Flow::Next)
            }
            Cont(_) => self.r#cont(),
            Data(..) | Rem(..) => Ok(Flow::Next),
            Delete(_, number) => {
                if self.listing.remove(*number).is_some() {
                    debug!(number, "delete");
                    self.program_changed();
                }
                Ok(Flow::Next)
            }
            End(_) => Ok(Flow::Halt),
            Expression(_, expr) => {
                self.eval(expr)?;
                Ok(Flow::Next)
            }
            For(_, var, from, to, step) => self.r#for(pc, var, from, to, step),
            Gosub(_, expr) => {
                let target = self.target(expr)?;
                self.env.gosubs.push(next(pc))?;
                Ok(Flow::Jump(target))
            }
            Goto(_, expr) => Ok(Flow::Jump(self.target(expr)?)),
            If(_, predicate, _) => {
                if self.eval(predicate)?.is_true() {
                    Ok(Flow::Next)
                } else {
                    Ok(Flow::Jump(with_index(pc, slot.skip)))
                }
            }
            Input(_, items, newline) => self.r#input(items, *newline),
            Let(_, expr) => {
                self.eval(expr)?;
                Ok(Flow::Next)
            }
            List(_, from) => self.r#list(from),
            Load(_, path) => self.r#load(pc, path, true),
            Merge(_, path) => self.r#load(pc, path, false),
            New(_) => {
                info!("new");
                self.listing.clear();
                self.env.clear();
                self.program_changed();
                Ok(halt_if_running(pc))
            }
            Next(_, var) => self.r#next(var),
            On(_, selector, targets, is_gosub) => self.r#on(pc, selector, targets, *is_gosub),
            Print(_, print) => self.r#print(print),
            Read(_, targets) => {
                for target in targets {
                    let val = self.env.data.get_next()?;
                    self.assign(target, val)?;
                }
                Ok(Flow::Next)
            }
            Replace(_, line) => self.r#replace(line),
            Restore(_) => {
                self.env.data.move_first();
                Ok(Flow::Next)
            }
            Return(_) => match self.env.gosubs.pop() {
                Some(address) => Ok(Flow::Jump(address)),
                None => Err(error!(ReturnWithoutGosub)),
            },
            Run(_, from) => self.r#run(from),
            Save(_, path) => self.r#save(path),
            Stop(_) => {
                self.brk(slot.line_number, next(pc));
                Ok(Flow::Halt)
            }
        }
    }

    /// A line number that must exist, as the first statement to run there.
    fn target(&mut self, expr: &Expression) -> Result<Address> {
        let number = self.eval(expr)?.to_line_number()?;
        self.listing.initialize();
        if self.listing.line(number).is_none() {
            return Err(error!(UndefinedLine, ..&expr.column(); &format!("CAN'T GO TO LINE {}", number)));
        }
        let index = self
            .listing
            .get_executable_statement(number)
            .unwrap_or_else(|| self.listing.end());
        Ok(Address::Program(index))
    }

    fn r#cont(&mut self) -> Result<Flow> {
        match self.cont.take() {
            Some(address) => {
                debug!(?address, "cont");
                self.listing.initialize();
                self.ready = true;
                Ok(Flow::Jump(address))
            }
            None => Err(error!(CantContinue)),
        }
    }

    fn r#run(&mut self, from: &Option<Expression>) -> Result<Flow> {
        self.listing.initialize();
        self.env.clear();
        self.cont = None;
        let mut collector = DataCollector {
            data: &mut self.env.data,
        };
        for line in self.listing.lines() {
            for statement in line.statements() {
                statement.accept(&mut collector);
            }
        }
        let start = match from {
            Some(expr) => self.target(expr)?,
            None => Address::Program(0),
        };
        debug!(data = self.env.data.len(), "run");
        self.ready = true;
        Ok(Flow::Jump(start))
    }

    fn r#for(
        &mut self,
        pc: Address,
        var: &Ident,
        from: &Expression,
        to: &Expression,
        step: &Option<Expression>,
    ) -> Result<Flow> {
        let start = self.eval(from)?;
        self.env.vars.assign(var.name(), start)?;
        let end = self.eval(to)?;
        let step = match step {
            Some(step) => self.eval(step)?,
            None => Val::Integer(1),
        };
        end.to_f32()?;
        step.to_f32()?;
        if let Some(index) = self
            .env
            .fors
            .iter()
            .position(|check| Var::same(check.var.name(), var.name()))
        {
            self.env.fors.truncate(index);
        }
        self.env.fors.push(ForCheck {
            var: var.clone(),
            end,
            step,
            resume: next(pc),
        })?;
        Ok(Flow::Next)
    }

    /// A named `NEXT` discards inner loops until it finds its own.
    fn r#next(&mut self, var: &Option<Ident>) -> Result<Flow> {
        loop {
            let check = match self.env.fors.pop() {
                Some(check) => check,
                None => return Err(error!(NextWithoutFor)),
            };
            if let Some(var) = var {
                if !Var::same(var.name(), check.var.name()) {
                    continue;
                }
            }
            let name = check.var.name().clone();
            let val = Operation::sum(self.env.vars.get(&name), check.step.clone())?;
            let val = self.env.vars.assign(&name, val)?;
            let done = if check.step.to_f32()? < 0.0 {
                Operation::less(val, check.end.clone())?
            } else {
                Operation::less(check.end.clone(), val)?
            };
            if done.is_true() {
                return Ok(Flow::Next);
            }
            let resume = check.resume;
            self.env.fors.push(check)?;
            return Ok(Flow::Jump(resume));
        }
    }

    fn r#on(
        &mut self,
        pc: Address,
        selector: &Expression,
        targets: &[Expression],
        is_gosub: bool,
    ) -> Result<Flow> {
        let n = self.eval(selector)?.to_i32()?;
        if n < 1 || n as usize > targets.len() {
            return Ok(Flow::Next);
        }
        let target = self.target(&targets[n as usize - 1])?;
        if is_gosub {
            self.env.gosubs.push(next(pc))?;
        }
        Ok(Flow::Jump(target))
    }

    fn r#print(&mut self, print: &Print) -> Result<Flow> {
        if let Some(at) = &print.at {
            let n = self.eval(at)?.to_i32()?;
            if n < 0 || n as usize >= SCREEN_COLUMNS * SCREEN_ROWS {
                return Err(error!(IllegalQuantity, ..&at.column()));
            }
            let n = n as usize;
            self.display
                .set_cursor_position(n % SCREEN_COLUMNS, n / SCREEN_COLUMNS);
        }
        if let Some(tab) = &print.tab {
            let n = self.eval(tab)?;
            let column = self.display.cursor_position().0;
            let padding = Function::tab(n, column).map_err(|e| e.in_column(&tab.column()))?;
            self.display.write(&padding.to_string());
        }
        for item in &print.items {
            let val = self.eval(item)?;
            self.display.write(&val.to_string());
        }
        if print.newline {
            self.display.write("\n");
        }
        Ok(Flow::Next)
    }

    fn r#input(&mut self, items: &[Expression], newline: bool) -> Result<Flow> {
        for item in items {
            if !item.is_target() {
                let val = self.eval(item)?;
                self.display.write(&val.to_string());
                continue;
            }
            loop {
                self.display.write("? ");
                let text = self.display.read_line()?;
                match self.input_value(item, text.trim()) {
                    Ok(_) => break,
                    Err(error) if error.kind() == ErrorKind::ValueOutOfRange => {
                        debug!(%error, "input retry");
                        self.display.write_line(&error.legacy().to_string());
                    }
                    Err(error) => return Err(error),
                }
            }
        }
        if newline && !items.last().map_or(false, |item| item.is_target()) {
            self.display.write("\n");
        }
        Ok(Flow::Next)
    }

    /// Numbers first, then the name of a variable, then the text itself.
    fn input_value(&mut self, target: &Expression, text: &str) -> Result<Val> {
        let val = match target {
            Expression::Identifier(_, Ident::String(_)) => Val::from(text),
            _ => {
                if let Ok(n) = text.parse::<i32>() {
                    Val::Integer(n)
                } else if let Ok(n) = text.parse::<f32>() {
                    Val::Single(n)
                } else if !text.is_empty()
                    && text.chars().all(|c| c.is_ascii_alphabetic())
                    && self.env.vars.exists(text)
                {
                    self.env.vars.get(text)
                } else {
                    Val::from(text)
                }
            }
        };
        self.assign(target, val)
    }

    fn r#list(&mut self, from: &Option<Expression>) -> Result<Flow> {
        let from = match from {
            Some(expr) => self.eval(expr)?.to_line_number()?,
            None => 0,
        };
        let lines: Vec<String> = self.listing.list(from).map(|l| l.to_string()).collect();
        for (index, line) in lines.iter().enumerate() {
            if index > 0 && index % LIST_PAGE_LINES == 0 {
                self.display.read_key()?;
            }
            self.display.write_line(line);
        }
        Ok(Flow::Next)
    }

    fn path(&mut self, expr: &Expression) -> Result<String> {
        match self.eval(expr)? {
            Val::String(s) => Ok(s.to_string()),
            _ => Err(error!(TypeMismatch, ..&expr.column())),
        }
    }

    fn r#load(&mut self, pc: Address, path: &Expression, clear: bool) -> Result<Flow> {
        let path = self.path(path)?;
        let lines = self.storage.load(&path)?;
        if clear {
            self.listing.clear();
            self.env.clear();
        }
        self.program_changed();
        for (index, text) in lines.iter().enumerate() {
            let line = match Line::parse(text)? {
                Some(line) => line,
                None => continue,
            };
            if line.is_direct() {
                return Err(error!(DirectStatementInFile; &format!("IN LINE {} OF {}", index + 1, path)));
            }
            self.listing.add_or_replace(line);
        }
        if clear {
            info!(%path, lines = self.listing.len(), "load");
            self.display.write_line(&format!("Loaded \"{}\".", path));
        } else {
            info!(%path, lines = self.listing.len(), "merge");
            self.display.write_line(&format!("Merged \"{}\".", path));
        }
        Ok(halt_if_running(pc))
    }

    fn r#save(&mut self, path: &Expression) -> Result<Flow> {
        let path = self.path(path)?;
        let lines: Vec<String> = self.listing.lines().map(|l| l.to_string()).collect();
        self.storage.save(&path, &lines)?;
        info!(%path, lines = lines.len(), "save");
        self.display.write_line(&format!("Saved \"{}\".", path));
        Ok(Flow::Next)
    }

    fn r#replace(&mut self, line: &Line) -> Result<Flow> {
        let number = match line.number() {
            Some(number) => number,
            None => return Err(error!(InvalidLineNumber)),
        };
        let previous = self.listing.add_or_replace(line.clone());
        if self.listing.size() > MEM_BASELINE {
            match previous {
                Some(previous) => self.listing.add_or_replace(previous),
                None => self.listing.remove(number),
            };
            return Err(error!(OutOfMemory));
        }
        debug!(number, size = self.listing.size(), "replace");
        self.program_changed();
        Ok(Flow::Next)
    }

    fn eval(&mut self, expr: &Expression) -> Result<Val> {
        use Expression::*;
        match expr {
            Literal(_, literal) => Ok(Val::from(literal)),
            Identifier(_, ident) => Ok(self.env.vars.get(ident.name())),
            ArrayAccess(col, ident, index) => {
                let index = self.array_index(col, index)?;
                Ok(self.env.vars.get_array(ident.name(), index))
            }
            Assign(_, target, value) => {
                let value = self.eval(value)?;
                self.assign(target, value)
            }
            Binary(col, lhs, op, rhs) => {
                let lhs = self.eval(lhs)?;
                let rhs = self.eval(rhs)?;
                Operation::binary(lhs, *op, rhs).map_err(|e| e.in_column(col))
            }
            Unary(col, op, operand) => {
                let val = self.eval(operand)?;
                Operation::unary(*op, val).map_err(|e| e.in_column(col))
            }
            Grouping(_, expr) => self.eval(expr),
            Call(col, builtin, args) => self.call(*builtin, args).map_err(|e| e.in_column(col)),
        }
    }

    fn assign(&mut self, target: &Expression, val: Val) -> Result<Val> {
        match target {
            Expression::Identifier(col, ident) => self
                .env
                .vars
                .assign(ident.name(), val)
                .map_err(|e| e.in_column(col)),
            Expression::ArrayAccess(col, ident, index) => {
                let index = self.array_index(col, index)?;
                self.env
                    .vars
                    .assign_array(ident.name(), index, val)
                    .map_err(|e| e.in_column(col))
            }
            _ => Err(error!(SyntaxError, ..&target.column(); "EXPECTED VARIABLE")),
        }
    }

    /// Arrays share free memory with the program.
    fn array_index(&mut self, col: &Column, index: &Expression) -> Result<i32> {
        let index = self.eval(index)?.to_i32()?;
        let capacity = self.mem() / ARRAY_ELEMENT_SIZE;
        if index < 0 || index as usize >= capacity {
            return Err(error!(SubscriptOutOfRange, ..col));
        }
        Ok(index)
    }

    fn call(&mut self, builtin: Builtin, args: &[Expression]) -> Result<Val> {
        let mut vals: Vec<Val> = vec![];
        for arg in args {
            vals.push(self.eval(arg)?);
        }
        let mut arg = || vals.pop().ok_or_else(|| error!(WrongArity));
        use Builtin::*;
        match builtin {
            Abs => Function::abs(arg()?),
            Chr => Function::chr(arg()?),
            Int => Function::int(arg()?),
            Mem => Ok(Val::Integer(self.mem() as i32)),
            Rnd => Function::rnd(arg()?),
            Tab => Function::tab(arg()?, self.display.cursor_position().0),
            Zone => Ok(Function::zone(self.display.cursor_position().0)),
            Point | Reset | Set => {
                let y = arg()?;
                let x = arg()?;
                let (x, y) = Function::pixel(x, y)?;
                match builtin {
                    Point => return Ok(Val::Bool(self.display.point(x, y))),
                    Reset => self.display.reset(x, y),
                    _ => self.display.set(x, y),
                }
                Ok(Val::Integer(0))
            }
        }
    }
}

fn next(address: Address) -> Address {
    match address {
        Address::Program(index) => Address::Program(index + 1),
        Address::Direct(index) => Address::Direct(index + 1),
    }
}

fn with_index(address: Address, index: usize) -> Address {
    match address {
        Address::Program(_) => Address::Program(index),
        Address::Direct(_) => Address::Direct(index),
    }
}

fn halt_if_running(pc: Address) -> Flow {
    match pc {
        Address::Program(_) => Flow::Halt,
        Address::Direct(_) => Flow::Next,
    }
}

/// Gathers every `DATA` element of the program before a run.
struct DataCollector<'a> {
    data: &'a mut Data,
}

impl<'a> Visitor for DataCollector<'a> {
    fn visit_statement(&mut self, statement: &Statement) {
        if let Statement::Data(_, elements) = statement {
            for element in elements {
                if let Expression::Literal(_, literal) = element {
                    self.data.add(Val::from(literal));
                }
            }
        }
    }
}

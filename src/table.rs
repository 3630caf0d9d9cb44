use std::{fmt, io};
use io::{Write};

use tracing::{debug, trace};

use super::model::{Name, Map, Type, Value};

/// A named value together with its declared [`Type`].
///
/// `type_` is not checked against `value`: a `Symbol` may claim to be an
/// `int` while holding a `double`.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub name: Name,
    pub type_: Type,
    pub value: Value,
}

impl Symbol {
    /// Returns `true` if `type_` is the natural type of `value`.
    pub fn is_consistent(&self) -> bool { self.type_ == self.value.natural_type() }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Name: {} Type: {} Value: {}", self.name, self.type_, self.value)
    }
}

// ----------------------------------------------------------------------------

/// The line that [`SymbolTable::print()`] writes for a name, without the
/// line break.
pub struct Line<'a> {
    name: &'a str,
    symbol: Option<&'a Symbol>,
}

impl fmt::Display for Line<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.symbol {
            Some(symbol) => write!(f, "{}", symbol),
            None => write!(f, "Symbol '{}' not found.", self.name),
        }
    }
}

// ----------------------------------------------------------------------------

/// A map from [`Name`] to [`Symbol`].
#[derive(Debug, Default)]
pub struct SymbolTable(Map<Symbol>);

impl SymbolTable {
    pub fn new() -> Self { Self::default() }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn contains(&self, name: &str) -> bool { self.0.contains_key(name) }

    pub fn get(&self, name: &str) -> Option<&Symbol> { self.0.get(name) }

    /// Insert a symbol, replacing any existing symbol called `name`.
    pub fn add(&mut self, name: &str, type_: Type, value: impl Into<Value>) {
        let name: Name = name.into();
        let value = value.into();
        trace!(%name, %type_, %value, "add");
        if let Some(old) = self.0.insert(name.clone(), Symbol {name, type_, value}) {
            debug!(name = %old.name, old_type = %old.type_, "replaced symbol");
        }
    }

    /// Like [`Self::add()`], but the type is the natural type of `value`.
    pub fn declare(&mut self, name: &str, value: impl Into<Value>) {
        let value = value.into();
        self.add(name, value.natural_type(), value);
    }

    /// Replace the type and value of the existing symbol called `name`.
    ///
    /// Returns `false`, and changes nothing, if there is no such symbol.
    pub fn update(&mut self, name: &str, type_: Type, value: impl Into<Value>) -> bool {
        match self.0.get_mut(name) {
            Some(symbol) => {
                symbol.type_ = type_;
                symbol.value = value.into();
                trace!(name, %type_, value = %symbol.value, "update");
                true
            },
            None => {
                debug!(name, "update of missing symbol");
                false
            },
        }
    }

    /// Describe the symbol called `name`, or report that it is missing.
    pub fn render<'a>(&'a self, name: &'a str) -> Line<'a> {
        let symbol = self.get(name);
        if symbol.is_none() { debug!(name, "symbol not found"); }
        Line {name, symbol}
    }

    /// Write [`Self::render()`] and a line break to `output`.
    pub fn print_to(&self, name: &str, output: &mut impl Write) -> io::Result<()> {
        writeln!(output, "{}", self.render(name))
    }

    /// Write [`Self::render()`] and a line break to stdout.
    pub fn print(&self, name: &str) {
        println!("{}", self.render(name));
    }
}

// ----------------------------------------------------------------------------

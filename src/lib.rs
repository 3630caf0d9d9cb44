pub mod model;
pub use model::{Name, Map, Type, Value, describe_raw};

mod error;
pub use error::{Error};

mod table;
pub use table::{Symbol, SymbolTable, Line};

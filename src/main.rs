use std::{io};
use io::{Write};

use ansi_term::Colour::{Blue};
use symtab::{SymbolTable, Type};

// ----------------------------------------------------------------------------

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing::Level::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .init();

    let mut output = io::stdout().lock();

    writeln!(output, "{}", Blue.paint("Adding symbol using temporary variable:"))?;
    let mut table = SymbolTable::new();
    table.add("myCSOPESYGrade", Type::Int, 100);
    table.print_to("myCSOPESYGrade", &mut output)?;

    writeln!(output, "\n{}", Blue.paint("Using unique pointer to SymbolTable:"))?;
    let mut boxed = Box::new(SymbolTable::new());
    boxed.add("myCSOPESYGrade", Type::Int, 100);
    boxed.print_to("myCSOPESYGrade", &mut output)?;

    Ok(())
}

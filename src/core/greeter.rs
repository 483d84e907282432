use crate::domain::model::Name;
use crate::utils::error::Result;
use std::io::{self, Stdout, Write};

/// Formats the greeting line for `name`, without the trailing newline.
pub fn greeting(name: &Name) -> String {
    format!("Hello, {}!", name)
}

/// Writes greetings to a sink, one line per call.
pub struct Greeter<W: Write> {
    out: W,
}

impl Greeter<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Greeter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn greet(&mut self, name: &Name) -> Result<()> {
        writeln!(self.out, "{}", greeting(name))?;
        self.out.flush()?;
        tracing::debug!(name = %name, "Greeted");
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Greets `name` on standard output.
pub fn greet(name: &Name) -> Result<()> {
    Greeter::stdout().greet(name)
}

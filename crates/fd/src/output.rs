//! User-facing messages on stderr.
//!
//! Colors are dropped automatically when stderr is not a terminal.

use console::{Style, Term};

pub(crate) struct Output {
    term: Term,
}

impl Output {
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }

    pub(crate) fn info(&self, msg: &str) {
        self.write(msg, &Style::new());
    }

    pub(crate) fn heading(&self, msg: &str) {
        self.write(msg, &Style::new().bold());
    }

    pub(crate) fn success(&self, msg: &str) {
        self.write(msg, &Style::new().green());
    }

    pub(crate) fn warning(&self, msg: &str) {
        self.write(msg, &Style::new().yellow());
    }

    pub(crate) fn error(&self, msg: &str) {
        self.write(msg, &Style::new().red().bold());
    }

    fn write(&self, msg: &str, style: &Style) {
        // A closed stderr is not worth failing the command over
        let _ = self.term.write_line(&style.apply_to(msg).to_string());
    }
}

//! Demonstration case and its output transcript

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use feature_tour_config::Group;

use crate::core::cases::errors::Failure;

/// Operation run by a case
pub type CaseFn = fn(&Transcript) -> Result<(), Failure>;

/// One ordered, independent demonstration
#[derive(Clone, Copy)]
pub struct DemoCase {
    /// Unique identifier (snake_case)
    pub id: &'static str,
    /// Owning group
    pub group: Group,
    /// One-line description shown by `--list`
    pub summary: &'static str,
    /// The demonstration itself
    pub run: CaseFn,
    /// Expected output, when the case is fixture-checked
    pub expected: Option<&'static [&'static str]>,
    /// Only runs when selected by id
    pub opt_in: bool,
}

impl DemoCase {
    pub const fn new(id: &'static str, group: Group, summary: &'static str, run: CaseFn) -> Self {
        Self {
            id,
            group,
            summary,
            run,
            expected: None,
            opt_in: false,
        }
    }

    /// Attach an expected-output fixture
    pub const fn expecting(mut self, lines: &'static [&'static str]) -> Self {
        self.expected = Some(lines);
        self
    }

    /// Exclude from default runs; the case must be asked for by id
    pub const fn opt_in(mut self) -> Self {
        self.opt_in = true;
        self
    }

    /// Run the case against a fresh transcript
    pub fn execute(&self) -> CaseOutcome {
        let transcript = Transcript::new();
        let result = (self.run)(&transcript);
        CaseOutcome {
            lines: transcript.lines(),
            result,
        }
    }
}

impl fmt::Debug for DemoCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DemoCase")
            .field("id", &self.id)
            .field("group", &self.group)
            .field("expected", &self.expected.map(|e| e.len()))
            .field("opt_in", &self.opt_in)
            .finish()
    }
}

/// Lines produced by one execution, plus how the operation ended
#[derive(Debug)]
pub struct CaseOutcome {
    pub lines: Vec<String>,
    pub result: Result<(), Failure>,
}

/// Output sink of a single case
///
/// Cloning shares the underlying buffer, which lets an entity keep a
/// handle and report its own finalisation from `Drop`.
#[derive(Clone, Default)]
pub struct Transcript {
    lines: Rc<RefCell<Vec<String>>>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one output line
    pub fn line(&self, text: impl Into<String>) {
        self.lines.borrow_mut().push(text.into());
    }

    /// Append an empty separator line
    pub fn blank(&self) {
        self.line("");
    }

    /// Snapshot of the lines written so far
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }
}

impl fmt::Debug for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.lines.borrow().iter()).finish()
    }
}

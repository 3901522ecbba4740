//! Interactive documentation session
//!
//! The session is an explicit state machine:
//!
//! ```text
//! ShowMenu -> AwaitSelection -> DispatchOne | DispatchAll -> AskContinue -> ShowMenu | Terminate
//!                  ^      |
//!                  +------+  (out of range or malformed selection)
//! ```
//!
//! The catalogue is built once when the session is created. Input decisions
//! live in [`input`]; this module only performs the console and file I/O for
//! each state.

pub mod input;

use std::io::{BufRead, Write};

use termcolor::WriteColor;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::extract::{Catalogue, Extractor, MethodFilter};
use crate::output::{
    CsvLog, SessionConfig, print_catalogue, print_divider, print_header, print_method_list,
};
use crate::record::format_record;
use crate::registry::{ModuleInfo, TypeDef};

pub use input::{
    ContinueAnswer, MALFORMED_SELECTION, Selection, classify_selection, parse_continue_answer,
    parse_selection,
};

const SELECTION_PROMPT: &str = "Select a type from the list above: ";
const CONTINUE_PROMPT: &str = "Continue? (Y/N): ";
const INVALID_ANSWER_PROMPT: &str = "Please enter a valid input: ";
const MALFORMED_MESSAGE: &str =
    "Possible malformed input, please enter a valid value and try again.";

/// Where the session is in its menu cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    ShowMenu,
    AwaitSelection,
    /// Document the catalogue entry with this 1-based index
    DispatchOne(usize),
    DispatchAll,
    AskContinue,
    Terminate,
}

impl Selection {
    /// State entered after this selection; `None` means prompt again.
    pub fn next_state(self) -> Option<State> {
        match self {
            Selection::Type(index) => Some(State::DispatchOne(index)),
            Selection::All => Some(State::DispatchAll),
            Selection::OutOfRange | Selection::Malformed => None,
        }
    }
}

impl ContinueAnswer {
    pub fn next_state(self) -> State {
        match self {
            ContinueAnswer::Continue => State::ShowMenu,
            ContinueAnswer::Stop => State::Terminate,
        }
    }
}

/// One operator session over one module.
pub struct Session<'m, R, W> {
    extractor: Extractor<'m>,
    catalogue: Catalogue<'m>,
    log: CsvLog,
    config: SessionConfig,
    input: R,
    out: W,
}

impl<'m, R: BufRead, W: WriteColor> Session<'m, R, W> {
    pub fn new(
        module: &'m ModuleInfo,
        log: CsvLog,
        config: SessionConfig,
        input: R,
        out: W,
    ) -> Self {
        let extractor = Extractor::new(module);
        let catalogue = extractor.list_types();
        Self {
            extractor,
            catalogue,
            log,
            config,
            input,
            out,
        }
    }

    pub fn catalogue(&self) -> &Catalogue<'m> {
        &self.catalogue
    }

    /// Consume the session, returning the console writer.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Run menu cycles until the operator stops or input ends.
    pub fn run(&mut self) -> Result<()> {
        let mut state = State::ShowMenu;
        while state != State::Terminate {
            state = self.step(state)?;
        }
        self.out.flush()?;
        info!("session finished");
        Ok(())
    }

    /// Perform the I/O for `state` and return the state that follows it.
    pub fn step(&mut self, state: State) -> Result<State> {
        let next = match state {
            State::ShowMenu => {
                print_catalogue(&mut self.out, &self.catalogue)?;
                State::AwaitSelection
            }
            State::AwaitSelection => self.await_selection()?,
            State::DispatchOne(index) => {
                match self.catalogue.get(index) {
                    Some(ty) => {
                        self.document_type(ty, MethodFilter::instance_members())?;
                    }
                    None => warn!(
                        index,
                        types = self.catalogue.len(),
                        "no catalogue entry to dispatch"
                    ),
                }
                State::AskContinue
            }
            State::DispatchAll => {
                self.export_all()?;
                State::AskContinue
            }
            State::AskContinue => self.ask_continue()?,
            State::Terminate => State::Terminate,
        };
        debug!(?state, ?next, "session transition");
        Ok(next)
    }

    /// Document every non-compiler-generated type of the module.
    ///
    /// Returns the number of records appended.
    pub fn export_all(&mut self) -> Result<usize> {
        let extractor = self.extractor;
        let mut records = 0;
        for ty in extractor.documentable_types() {
            records += self.document_type(ty, MethodFilter::all())?;
        }
        info!(records, "documented all types");
        Ok(records)
    }

    /// Print the type's methods and append its override records.
    fn document_type(&mut self, ty: &'m TypeDef, record_filter: MethodFilter) -> Result<usize> {
        print_header(&mut self.out, &ty.name)?;
        let listed = self.extractor.list_methods(ty, MethodFilter::all());
        print_method_list(&mut self.out, &listed, self.config.details)?;

        let recorded = self.extractor.list_methods(ty, record_filter);
        let facts = self.extractor.describe_overrides(&recorded);
        self.log.append_all(facts.iter().map(format_record))
    }

    fn await_selection(&mut self) -> Result<State> {
        loop {
            write!(self.out, "{}", SELECTION_PROMPT)?;
            self.out.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(State::Terminate);
            };
            writeln!(self.out)?;

            let selection = classify_selection(parse_selection(&line), self.catalogue.len());
            if let Some(next) = selection.next_state() {
                return Ok(next);
            }
            match selection {
                Selection::OutOfRange => writeln!(
                    self.out,
                    "Please select a value between 1 and {} ",
                    self.catalogue.print_all_option()
                )?,
                _ => writeln!(self.out, "{}", MALFORMED_MESSAGE)?,
            }
        }
    }

    fn ask_continue(&mut self) -> Result<State> {
        write!(self.out, "{}", CONTINUE_PROMPT)?;
        loop {
            self.out.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(State::Terminate);
            };
            match parse_continue_answer(&line) {
                Some(answer) => {
                    if answer == ContinueAnswer::Continue {
                        print_divider(&mut self.out)?;
                    }
                    return Ok(answer.next_state());
                }
                None => write!(self.out, "{}", INVALID_ANSWER_PROMPT)?,
            }
        }
    }

    /// Next console line, or `None` once input is exhausted.
    ///
    /// Undecodable bytes become U+FFFD, so they fail parsing and reprompt.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            warn!("console input closed, ending session");
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
    }
}

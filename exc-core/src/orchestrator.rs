//! Try/Catch/Finally Orchestrator
//!
//! [`Try`] coordinates exactly one protect/dispatch/finalize cycle:
//!
//! 1. **Running**: the protected block runs under [`intercept`].
//! 2. **Dispatching**: if it faulted, the handler chain picks at most one
//!    action (first interest match, else the first default) and runs it.
//! 3. **Finalizing**: the finalizer runs, whatever happened before.
//!
//! Faults never escape [`Try::run`] unless the cycle is strict
//! ([`UnmatchedPolicy::Propagate`]) and nothing handled the exception, or a
//! handler or the finalizer faults on its own; those unwind to the enclosing
//! interceptor.
//!
//! `run` consumes the builder, so a cycle cannot be run twice.
//!
//! # Example
//!
//! ```rust
//! use exc_core::{interest_set, raise, Try};
//! use exc_prelude::prelude::{builtin, ExceptionKind};
//! use std::collections::HashMap;
//!
//! let user = HashMap::from([("name", "John Doe")]);
//! let mut caught = None;
//! let mut cleaned_up = false;
//!
//! Try::new(|| {
//!     if !user.contains_key("email") {
//!         raise(builtin::lookup_error_with("Email doesn't exist"));
//!     }
//! })
//! .catch(interest_set![ExceptionKind::LOOKUP], |e| caught = Some(e.message().to_string()))
//! .catch_all(|_| unreachable!())
//! .finally(|| cleaned_up = true)
//! .run();
//!
//! assert_eq!(caught.as_deref(), Some("Email doesn't exist"));
//! assert!(cleaned_up);
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use crate::config::{DefaultHandlerPolicy, HarnessConfig, UnmatchedPolicy};
use crate::handler::{HandlerChain, HandlerEntry, InterestSet, MatchKind};
use crate::intercept::intercept;
use exc_prelude::prelude::{Exception, HarnessError, Result};
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, error, trace, warn};

/// Stage of a cycle. Stages only ever advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    /// Built, not yet run.
    Idle,
    /// Protected block executing.
    Running,
    /// Selecting and invoking a handler.
    Dispatching,
    /// Finalizer executing.
    Finalizing,
    /// Cycle complete.
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Idle => write!(f, "Idle"),
            Stage::Running => write!(f, "Running"),
            Stage::Dispatching => write!(f, "Dispatching"),
            Stage::Finalizing => write!(f, "Finalizing"),
            Stage::Done => write!(f, "Done"),
        }
    }
}

/// How a cycle ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The protected block completed without faulting.
    Completed,
    /// A handler received the exception.
    Handled(Exception),
    /// No handler matched and the exception was dropped.
    Unhandled(Exception),
}

impl Outcome {
    /// The captured exception, if the block faulted.
    #[must_use]
    pub fn exception(&self) -> Option<&Exception> {
        match self {
            Outcome::Completed => None,
            Outcome::Handled(exception) | Outcome::Unhandled(exception) => Some(exception),
        }
    }

    /// Whether the block completed without faulting.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        matches!(self, Outcome::Completed)
    }

    /// Whether a handler ran.
    #[must_use]
    pub fn is_handled(&self) -> bool {
        matches!(self, Outcome::Handled(_))
    }
}

type Block<'a> = Box<dyn FnOnce() + 'a>;

/// Builder and driver for one try/catch/finally cycle.
pub struct Try<'a> {
    block: Block<'a>,
    handlers: HandlerChain<'a>,
    finalizer: Option<Block<'a>>,
    config: HarnessConfig,
}

/// Start a cycle protecting `block`. Same as [`Try::new`].
pub fn try_block<'a>(block: impl FnOnce() + 'a) -> Try<'a> {
    Try::new(block)
}

impl<'a> Try<'a> {
    /// Protect `block` with the default configuration.
    pub fn new(block: impl FnOnce() + 'a) -> Self {
        Self {
            block: Box::new(block),
            handlers: HandlerChain::new(),
            finalizer: None,
            config: HarnessConfig::default(),
        }
    }

    /// Use `config` for this cycle.
    #[must_use]
    pub fn with_config(mut self, config: HarnessConfig) -> Self {
        self.config = config;
        self
    }

    /// Register a handler for the kinds in `interest`.
    ///
    /// An empty set registers a default handler, like [`Try::catch_all`].
    #[must_use]
    pub fn catch(
        mut self,
        interest: impl Into<InterestSet>,
        action: impl FnOnce(&Exception) + 'a,
    ) -> Self {
        self.handlers.push(HandlerEntry::new(interest.into(), action));
        self
    }

    /// Register a default handler.
    ///
    /// Several defaults may be registered; only the first can ever run.
    #[must_use]
    pub fn catch_all(self, action: impl FnOnce(&Exception) + 'a) -> Self {
        self.catch(InterestSet::any(), action)
    }

    /// Set the finalizer, replacing any previous one.
    #[must_use]
    pub fn finally(mut self, action: impl FnOnce() + 'a) -> Self {
        if self.finalizer.is_some() {
            debug!("replacing previously registered finalizer");
        }
        self.finalizer = Some(Box::new(action));
        self
    }

    /// Number of registered handlers, defaults included.
    #[must_use]
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Run the cycle.
    ///
    /// Returns once the finalizer has run. Under [`UnmatchedPolicy::Propagate`]
    /// an exception no handler matched is re-raised after the finalizer.
    /// A chain refused by [`DefaultHandlerPolicy::Reject`] is logged and
    /// nothing runs.
    pub fn run(self) {
        let strict = self.config.is_strict();
        match self.execute() {
            Ok(Outcome::Unhandled(exception)) if strict => {
                debug!(exception = %exception, "re-raising unhandled exception");
                panic::resume_unwind(Box::new(exception))
            }
            Ok(_) => {}
            Err(err) => error!(error = %err, "try cycle rejected"),
        }
    }

    /// Run the cycle and report how it ended, without re-raising.
    ///
    /// # Errors
    /// - [`HarnessError::MultipleDefaultHandlers`] if the chain is refused by
    ///   [`DefaultHandlerPolicy::Reject`]; nothing runs.
    /// - [`HarnessError::Unhandled`] under [`UnmatchedPolicy::Propagate`] when no
    ///   handler matched; the finalizer has already run.
    pub fn try_run(self) -> Result<Outcome> {
        let strict = self.config.is_strict();
        match self.execute()? {
            Outcome::Unhandled(exception) if strict => Err(HarnessError::Unhandled(exception)),
            outcome => Ok(outcome),
        }
    }

    fn execute(self) -> Result<Outcome> {
        let Try { block, handlers, finalizer, config } = self;

        if config.default_handlers == DefaultHandlerPolicy::Reject {
            let count = handlers.default_count();
            if count > 1 {
                return Err(HarnessError::MultipleDefaultHandlers { count });
            }
        }

        let mut cycle = Cycle::new();
        cycle.advance(Stage::Running);
        let captured = intercept(config.intercept_settings(), block).err();

        let outcome = match captured {
            None => Outcome::Completed,
            Some(exception) => {
                cycle.advance(Stage::Dispatching);
                match handlers.into_selected(exception.kind()) {
                    Some((selection, entry)) => {
                        debug!(
                            exception = %exception,
                            handler = selection.index,
                            default = selection.matched == MatchKind::Default,
                            "dispatching exception"
                        );
                        let result = panic::catch_unwind(AssertUnwindSafe(|| entry.invoke(&exception)));
                        if let Err(payload) = result {
                            // The handler's own fault belongs to the enclosing scope,
                            // after the finalizer has had its turn.
                            cycle.finalize(finalizer);
                            panic::resume_unwind(payload);
                        }
                        Outcome::Handled(exception)
                    }
                    None => {
                        match config.unmatched {
                            UnmatchedPolicy::Discard => {
                                warn!(exception = %exception, "no handler matched; exception discarded");
                            }
                            UnmatchedPolicy::Propagate => {
                                debug!(exception = %exception, "no handler matched");
                            }
                        }
                        Outcome::Unhandled(exception)
                    }
                }
            }
        };

        cycle.finalize(finalizer);
        Ok(outcome)
    }
}

impl fmt::Debug for Try<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Try")
            .field("handlers", &self.handlers)
            .field("has_finalizer", &self.finalizer.is_some())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Stage tracker for a single execution.
struct Cycle {
    stage: Stage,
}

impl Cycle {
    fn new() -> Self {
        Self { stage: Stage::Idle }
    }

    fn advance(&mut self, next: Stage) {
        debug_assert!(next > self.stage, "stage {next} after {}", self.stage);
        trace!(from = %self.stage, to = %next, "try cycle stage");
        self.stage = next;
    }

    fn finalize(&mut self, finalizer: Option<Block<'_>>) {
        self.advance(Stage::Finalizing);
        if let Some(finalizer) = finalizer {
            finalizer();
        }
        self.advance(Stage::Done);
    }
}

//! One-shot bring-up of the expansion I/O subsystem.
//!
//! At boot the expander must reach a defined pin configuration before the
//! buzzer is touched, because on some board revisions the buzzer line is
//! routed through an expander pin. The sequence is therefore fixed: one
//! configuration write to the expander, then one "off" command to the
//! buzzer.

/// Baseline direction mask written to the expander during bring-up: every
/// pin in output mode, matching the board's wiring (the expander only
/// drives peripheral control lines).
pub const BASELINE_DIRECTIONS: u8 = 0x00;

/// The GPIO-expander collaborator seen by the bring-up routine.
pub trait ExpanderPort {
    type Error;

    /// Apply a pin-direction mask to the whole chip.
    fn configure(&mut self, directions: u8) -> Result<(), Self::Error>;
}

/// The buzzer collaborator seen by the bring-up routine.
pub trait BuzzerPort {
    type Error;

    /// Force the buzzer output inactive.
    fn off(&mut self) -> Result<(), Self::Error>;
}

/// Names the first sub-call that failed during bring-up.
///
/// The original vendor routine discarded both sub-call results and reported
/// unconditional success; here the failure is surfaced and the caller
/// decides whether boot continues.
#[derive(Debug, PartialEq, Eq)]
pub enum BringupError<X, B> {
    Expander(X),
    Buzzer(B),
}

/// The expansion I/O subsystem: the expander and the buzzer wired to it.
pub struct ExpansionIo<X, B> {
    expander: X,
    buzzer: B,
}

impl<X: ExpanderPort, B: BuzzerPort> ExpansionIo<X, B> {
    /// Bundle the two ports. No hardware traffic happens until
    /// [`initialize`](Self::initialize) is called.
    pub fn new(expander: X, buzzer: B) -> Self {
        Self { expander, buzzer }
    }

    /// Put the subsystem into its boot state: configure all expander pins
    /// to the baseline, then silence the buzzer.
    ///
    /// Safe to call again; each call re-issues the same two commands in the
    /// same order. A failed expander write stops the sequence before the
    /// buzzer is touched.
    pub fn initialize(&mut self) -> Result<(), BringupError<X::Error, B::Error>> {
        self.expander
            .configure(BASELINE_DIRECTIONS)
            .map_err(BringupError::Expander)?;
        self.buzzer.off().map_err(BringupError::Buzzer)?;
        Ok(())
    }

    pub fn expander_mut(&mut self) -> &mut X {
        &mut self.expander
    }

    pub fn buzzer_mut(&mut self) -> &mut B {
        &mut self.buzzer
    }

    pub fn into_parts(self) -> (X, B) {
        (self.expander, self.buzzer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::RefCell;
    use std::rc::Rc;
    use std::vec::Vec;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Call {
        Configure(u8),
        BuzzerOff,
    }

    #[derive(Debug, PartialEq, Eq)]
    struct Fault;

    struct ScriptedExpander {
        log: Rc<RefCell<Vec<Call>>>,
        fail: bool,
    }

    impl ExpanderPort for ScriptedExpander {
        type Error = Fault;

        fn configure(&mut self, directions: u8) -> Result<(), Fault> {
            self.log.borrow_mut().push(Call::Configure(directions));
            if self.fail {
                Err(Fault)
            } else {
                Ok(())
            }
        }
    }

    struct ScriptedBuzzer {
        log: Rc<RefCell<Vec<Call>>>,
        fail: bool,
    }

    impl BuzzerPort for ScriptedBuzzer {
        type Error = Fault;

        fn off(&mut self) -> Result<(), Fault> {
            self.log.borrow_mut().push(Call::BuzzerOff);
            if self.fail {
                Err(Fault)
            } else {
                Ok(())
            }
        }
    }

    fn rig(
        expander_fails: bool,
        buzzer_fails: bool,
    ) -> (
        ExpansionIo<ScriptedExpander, ScriptedBuzzer>,
        Rc<RefCell<Vec<Call>>>,
    ) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let io = ExpansionIo::new(
            ScriptedExpander {
                log: log.clone(),
                fail: expander_fails,
            },
            ScriptedBuzzer {
                log: log.clone(),
                fail: buzzer_fails,
            },
        );
        (io, log)
    }

    #[test]
    fn construction_issues_no_calls() {
        let (_io, log) = rig(false, false);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn initialize_configures_then_silences() {
        let (mut io, log) = rig(false, false);

        assert_eq!(io.initialize(), Ok(()));
        assert_eq!(
            *log.borrow(),
            [Call::Configure(BASELINE_DIRECTIONS), Call::BuzzerOff]
        );
    }

    #[test]
    fn expander_failure_is_named_and_stops_the_sequence() {
        let (mut io, log) = rig(true, false);

        assert_eq!(io.initialize(), Err(BringupError::Expander(Fault)));
        assert_eq!(*log.borrow(), [Call::Configure(BASELINE_DIRECTIONS)]);
    }

    #[test]
    fn buzzer_failure_is_named() {
        let (mut io, log) = rig(false, true);

        assert_eq!(io.initialize(), Err(BringupError::Buzzer(Fault)));
        assert_eq!(
            *log.borrow(),
            [Call::Configure(BASELINE_DIRECTIONS), Call::BuzzerOff]
        );
    }

    #[test]
    fn reinitialization_repeats_the_same_sequence() {
        let (mut io, log) = rig(false, false);

        io.initialize().unwrap();
        io.initialize().unwrap();

        assert_eq!(
            *log.borrow(),
            [
                Call::Configure(BASELINE_DIRECTIONS),
                Call::BuzzerOff,
                Call::Configure(BASELINE_DIRECTIONS),
                Call::BuzzerOff,
            ]
        );
    }
}

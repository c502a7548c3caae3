//! Coarse classification of a calculator's input cycle.

use crate::state_enum;

state_enum! {
    /// Where a calculator sits between keypresses.
    ///
    /// A phase is derived from the engine's fields after every token; it is
    /// never stored on its own. `Error` is left only through `Clear`.
    #[derive(Copy, Eq, Hash)]
    pub enum Phase {
        /// Fresh engine, nothing typed.
        Empty,
        /// Typing the left-hand operand.
        EnteringFirst,
        /// An operator is pending and no right-hand digit has arrived.
        OperatorStaged,
        /// Typing the right-hand operand.
        EnteringSecond,
        /// A result from `=` is on display.
        Evaluated,
        /// Evaluation failed; the display shows the error sentinel.
        Error,
    }
    final: [Error]
    error: [Error]
}

use std::fmt;

/// Result of a state-changing action.
///
/// Every rejection leaves state untouched. The UI shows nothing for a
/// rejection; the variant exists so callers and tests can tell why.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Accepted,
    RejectedEmptyField,
    RejectedAlreadyBorrowed,
    RejectedUnknownTool,
    RejectedNotIdentified,
    RejectedAlreadyIdentified,
    RejectedInvalidTransition,
}

impl Outcome {
    pub fn is_accepted(self) -> bool {
        self == Outcome::Accepted
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Outcome::Accepted => "accepted",
            Outcome::RejectedEmptyField => "rejected: empty field",
            Outcome::RejectedAlreadyBorrowed => "rejected: already borrowed",
            Outcome::RejectedUnknownTool => "rejected: unknown tool",
            Outcome::RejectedNotIdentified => "rejected: not identified",
            Outcome::RejectedAlreadyIdentified => "rejected: already identified",
            Outcome::RejectedInvalidTransition => "rejected: invalid mode transition",
        };
        f.write_str(s)
    }
}

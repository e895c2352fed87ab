//! Control-number sources.
//!
//! Every interchange, functional group and transaction set carries a control
//! number that its trailer restates. The builder draws them from a
//! [`ControlNumberSource`] supplied by the caller; uniqueness across files is
//! the caller's concern (a database sequence, a persisted counter, ...).

/// Supplies control numbers for the three envelope levels.
pub trait ControlNumberSource {
    /// Next interchange control number (ISA13/IEA02).
    fn next_interchange(&mut self) -> u64;

    /// Next functional group control number (GS06/GE02).
    fn next_group(&mut self) -> u64;

    /// Next transaction set control number (ST02/SE02).
    fn next_transaction(&mut self) -> u64;
}

/// Monotonic counters, one per envelope level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequentialControlNumbers {
    interchange: u64,
    group: u64,
    transaction: u64,
}

impl Default for SequentialControlNumbers {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl SequentialControlNumbers {
    /// Counters starting at 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// All three counters start at `first`.
    pub fn starting_at(first: u64) -> Self {
        Self {
            interchange: first,
            group: first,
            transaction: first,
        }
    }

    /// Values the next calls will return, as (interchange, group, transaction).
    pub fn peek(&self) -> (u64, u64, u64) {
        (self.interchange, self.group, self.transaction)
    }
}

fn advance(counter: &mut u64) -> u64 {
    let value = *counter;
    *counter = counter.saturating_add(1);
    value
}

impl ControlNumberSource for SequentialControlNumbers {
    fn next_interchange(&mut self) -> u64 {
        advance(&mut self.interchange)
    }

    fn next_group(&mut self) -> u64 {
        advance(&mut self.group)
    }

    fn next_transaction(&mut self) -> u64 {
        advance(&mut self.transaction)
    }
}

/// Returns the same numbers on every call. Useful for reproducible output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedControlNumbers {
    pub interchange: u64,
    pub group: u64,
    pub transaction: u64,
}

impl FixedControlNumbers {
    pub fn new(interchange: u64, group: u64, transaction: u64) -> Self {
        Self {
            interchange,
            group,
            transaction,
        }
    }
}

impl ControlNumberSource for FixedControlNumbers {
    fn next_interchange(&mut self) -> u64 {
        self.interchange
    }

    fn next_group(&mut self) -> u64 {
        self.group
    }

    fn next_transaction(&mut self) -> u64 {
        self.transaction
    }
}

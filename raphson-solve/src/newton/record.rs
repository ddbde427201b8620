/// One completed Newton step, immutable once recorded.
///
/// `x` is the estimate the step operated on; `x_next = x + delta_x` is the
/// estimate it produced, with `delta_x = -f_x / df_x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationRecord {
    /// Step counter, 1-based within the solve.
    pub iter: usize,
    /// Estimate before the update.
    pub x: f64,
    /// Function value at `x`.
    pub f_x: f64,
    /// Derivative value at `x`.
    pub df_x: f64,
    /// Newton step, `-f_x / df_x`.
    pub delta_x: f64,
    /// Estimate after the update.
    pub x_next: f64,
}

/// The ordered record of every step a solve ran.
///
/// Records appear in execution order and are never reordered or removed;
/// only the solver appends to a trace.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trace {
    records: Vec<IterationRecord>,
}

impl Trace {
    pub(super) fn new() -> Self {
        Self::default()
    }

    pub(super) fn push(&mut self, record: IterationRecord) {
        self.records.push(record);
    }

    /// Returns the number of recorded steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if no step completed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the records as a slice, in execution order.
    #[must_use]
    pub fn as_slice(&self) -> &[IterationRecord] {
        &self.records
    }

    /// Returns the most recently recorded step, if any.
    #[must_use]
    pub fn last(&self) -> Option<&IterationRecord> {
        self.records.last()
    }

    /// Iterates the records in execution order.
    pub fn iter(&self) -> std::slice::Iter<'_, IterationRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a IterationRecord;
    type IntoIter = std::slice::Iter<'a, IterationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

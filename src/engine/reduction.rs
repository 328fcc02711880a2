//! The early-termination signal threaded through every reduction step.

/// The result of one reduction step.
///
/// Every [`Reducer::step`](crate::engine::Reducer::step) call wraps its
/// accumulator in a `Reduction`, telling the driver whether to keep feeding
/// input or to stop. Both variants carry the accumulator, so no value is
/// ever lost by stopping early.
///
/// Drivers must treat [`Reduction::Done`] as final: no further steps are
/// taken and the flush phase is skipped, because a reducer that terminates
/// early has already produced its complete result.
///
/// # Examples
///
/// ```rust
/// use xduce::engine::Reduction;
///
/// let running: Reduction<i32> = Reduction::Continue(10);
/// let finished: Reduction<i32> = Reduction::Done(10);
///
/// assert!(!running.is_done());
/// assert!(finished.is_done());
/// assert_eq!(running.into_inner(), finished.into_inner());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reduction<A> {
    /// The reduction should continue with this accumulator.
    Continue(A),
    /// The reduction is complete; this accumulator is the final result.
    Done(A),
}

impl<A> Reduction<A> {
    /// Returns `true` when the reduction has terminated early.
    pub const fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }

    /// Extracts the accumulator, discarding the control-flow signal.
    pub fn into_inner(self) -> A {
        match self {
            Self::Continue(accumulator) | Self::Done(accumulator) => accumulator,
        }
    }

    /// Borrows the accumulator regardless of variant.
    pub const fn inner(&self) -> &A {
        match self {
            Self::Continue(accumulator) | Self::Done(accumulator) => accumulator,
        }
    }

    /// Transforms the accumulator while preserving the control-flow signal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xduce::engine::Reduction;
    ///
    /// let stepped = Reduction::Done(3).map(|n| n * 10);
    /// assert_eq!(stepped, Reduction::Done(30));
    /// ```
    pub fn map<B, F>(self, function: F) -> Reduction<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Continue(accumulator) => Reduction::Continue(function(accumulator)),
            Self::Done(accumulator) => Reduction::Done(function(accumulator)),
        }
    }

    /// Forces the signal to [`Reduction::Done`], keeping the accumulator.
    ///
    /// Used by saturating steps (for example a take that has just accepted
    /// its final element) to stop the driver without waiting for the next
    /// input.
    pub fn saturate(self) -> Self {
        match self {
            Self::Continue(accumulator) | Self::Done(accumulator) => Self::Done(accumulator),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

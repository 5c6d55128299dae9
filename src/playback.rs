//! Cursor over a recorded annealing history.
//!
//! A renderer steps through the accepted states at its own cadence, or
//! jumps to any index for scrubbing. The history itself is never modified.

use crate::anneal::AnnealingProblem;
use crate::error::{AnnealError, Result};

/// One recorded state with its position and energy.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame<'a, S> {
    pub index: usize,
    pub state: &'a S,
    pub energy: i64,
}

/// Steps through a history front to back, with random access.
///
/// # Examples
///
/// ```
/// use tsp_anneal::anneal::{AnnealConfig, Annealer};
/// use tsp_anneal::playback::Playback;
/// use tsp_anneal::tsp::{Point, TravelingSalesman};
///
/// let cities = vec![Point::new(0, 0), Point::new(3, 4), Point::new(6, 0)];
/// let config = AnnealConfig::default().with_k_max(100).with_seed(1);
/// let mut engine = Annealer::new(TravelingSalesman::default(), cities, config).unwrap();
/// engine.run().unwrap();
///
/// let mut playback = Playback::new(engine.problem(), engine.history());
/// let first = playback.advance().unwrap();
/// assert_eq!(first.index, 0);
/// assert_eq!(playback.max_index(), engine.history().len() - 1);
/// ```
pub struct Playback<'a, P: AnnealingProblem> {
    problem: &'a P,
    history: &'a [P::State],
    cursor: usize,
}

impl<'a, P: AnnealingProblem> Playback<'a, P> {
    pub fn new(problem: &'a P, history: &'a [P::State]) -> Self {
        Self {
            problem,
            history,
            cursor: 0,
        }
    }

    fn frame(&self, index: usize) -> Result<Frame<'a, P::State>> {
        let state = self
            .history
            .get(index)
            .ok_or(AnnealError::ExhaustedSequence {
                index,
                len: self.history.len(),
            })?;
        Ok(Frame {
            index,
            state,
            energy: self.problem.energy(state),
        })
    }

    /// Returns the frame under the cursor and moves past it.
    ///
    /// # Errors
    ///
    /// [`AnnealError::ExhaustedSequence`] once every frame has been played.
    pub fn advance(&mut self) -> Result<Frame<'a, P::State>> {
        let frame = self.frame(self.cursor)?;
        self.cursor += 1;
        Ok(frame)
    }

    /// Jumps to `index`, returning that frame. Playback resumes after it.
    ///
    /// # Errors
    ///
    /// [`AnnealError::ExhaustedSequence`] if `index` is past the last frame;
    /// the cursor is left where it was.
    pub fn seek(&mut self, index: usize) -> Result<Frame<'a, P::State>> {
        let frame = self.frame(index)?;
        self.cursor = index + 1;
        Ok(frame)
    }

    /// Returns to the first frame.
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    /// Index of the next frame to be played.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Largest valid index, the upper bound of a scrub range.
    pub fn max_index(&self) -> usize {
        self.history.len().saturating_sub(1)
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.history.len()
    }
}

impl<'a, P: AnnealingProblem> Iterator for Playback<'a, P> {
    type Item = Frame<'a, P::State>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.history.len().saturating_sub(self.cursor);
        (remaining, Some(remaining))
    }
}

/// Finds the lowest-energy state in a history.
///
/// Returns the first index attaining the minimum and its energy, or `None`
/// for an empty history.
pub fn lowest_energy<P: AnnealingProblem>(
    problem: &P,
    history: &[P::State],
) -> Option<(usize, i64)> {
    history
        .iter()
        .enumerate()
        .map(|(i, state)| (i, problem.energy(state)))
        .min_by_key(|&(i, energy)| (energy, i))
}

// SPDX-License-Identifier: MPL-2.0
//! Selection state for the slider.
//!
//! The selected index is `None` exactly when the slider has no values. Requests
//! for an index past the last stop are refused and leave the selection as it
//! was; shrinking the stop list clamps the selection to the new last stop.

use crate::error::SelectionError;

/// Currently selected stop index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    index: Option<usize>,
}

impl Selection {
    /// Creates the initial selection for a stop list of `len` entries.
    #[must_use]
    pub fn for_len(len: usize) -> Self {
        Self {
            index: (len > 0).then_some(0),
        }
    }

    /// Returns the selected index, or `None` for an empty slider.
    #[must_use]
    pub fn index(self) -> Option<usize> {
        self.index
    }

    /// Selects `index` among `len` stops.
    ///
    /// Returns `Ok(true)` when the selection changed and `Ok(false)` when
    /// `index` was already selected.
    pub fn select(&mut self, index: usize, len: usize) -> Result<bool, SelectionError> {
        if len == 0 {
            return Err(SelectionError::Empty);
        }
        if index >= len {
            return Err(SelectionError::OutOfRange { index, len });
        }
        let changed = self.index != Some(index);
        self.index = Some(index);
        Ok(changed)
    }

    /// Moves the selection by `delta` stops, stopping at either end.
    pub fn step(&mut self, delta: isize, len: usize) -> Result<bool, SelectionError> {
        let current = self.index.ok_or(SelectionError::Empty)?;
        let last = len.checked_sub(1).ok_or(SelectionError::Empty)?;
        let target = current.saturating_add_signed(delta).min(last);
        self.select(target, len)
    }

    /// Re-validates the selection after the stop list changed to `len` entries.
    ///
    /// Returns `true` if the selected index moved.
    pub fn fit_to_len(&mut self, len: usize) -> bool {
        let fitted = match (self.index, len) {
            (_, 0) => None,
            (None, _) => Some(0),
            (Some(index), len) if index >= len => Some(len - 1),
            (index, _) => index,
        };
        let moved = fitted != self.index;
        self.index = fitted;
        moved
    }
}

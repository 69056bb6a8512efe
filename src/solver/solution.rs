//! Staged solution record
//!
//! A solve produces five named stage segments, ordered by the stage
//! machine ALIGN → CROSS → F2L → OLL → PLL. A search-based strategy
//! fills ALIGN alone; a staged human-method strategy fills all five.
//! The record is immutable once built; the full and reversed operation
//! views are derived on demand.

use crate::notation::MoveSequence;
use std::fmt;

/// One phase of the solving pipeline, strictly forward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Align,
    Cross,
    FirstTwoLayers,
    OrientLastLayer,
    PermuteLastLayer,
}

impl Stage {
    /// All stages in pipeline order
    pub const ALL: [Self; 5] = [
        Self::Align,
        Self::Cross,
        Self::FirstTwoLayers,
        Self::OrientLastLayer,
        Self::PermuteLastLayer,
    ];

    /// Position in the pipeline
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Align => 0,
            Self::Cross => 1,
            Self::FirstTwoLayers => 2,
            Self::OrientLastLayer => 3,
            Self::PermuteLastLayer => 4,
        }
    }

    /// The stage that follows, or `None` after PLL
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Align => Some(Self::Cross),
            Self::Cross => Some(Self::FirstTwoLayers),
            Self::FirstTwoLayers => Some(Self::OrientLastLayer),
            Self::OrientLastLayer => Some(Self::PermuteLastLayer),
            Self::PermuteLastLayer => None,
        }
    }

    /// Report label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Align => "Align",
            Self::Cross => "Cross",
            Self::FirstTwoLayers => "F2L",
            Self::OrientLastLayer => "OLL",
            Self::PermuteLastLayer => "PLL",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// An ordered record of the five stage segments of one solve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    segments: [MoveSequence; 5],
}

impl Solution {
    /// Wrap a flat operation sequence as the ALIGN stage, leaving the
    /// remaining stages empty
    #[must_use]
    pub fn from_flat(sequence: MoveSequence) -> Self {
        Self {
            segments: [
                sequence,
                MoveSequence::new(),
                MoveSequence::new(),
                MoveSequence::new(),
                MoveSequence::new(),
            ],
        }
    }

    /// Build from five separately labeled segments
    #[must_use]
    pub fn from_stages(
        align: MoveSequence,
        cross: MoveSequence,
        first_two_layers: MoveSequence,
        orient_last_layer: MoveSequence,
        permute_last_layer: MoveSequence,
    ) -> Self {
        Self {
            segments: [
                align,
                cross,
                first_two_layers,
                orient_last_layer,
                permute_last_layer,
            ],
        }
    }

    /// The segment recorded for a stage
    #[must_use]
    pub fn segment(&self, stage: Stage) -> &MoveSequence {
        &self.segments[stage.index()]
    }

    /// Steps a stage contributes to the merged full operation
    #[must_use]
    pub fn step_count(&self, stage: Stage) -> usize {
        self.segment(stage).merged().len()
    }

    /// The full operation: stages concatenated in pipeline order, with
    /// consecutive identical quarter turns merged into half turns
    #[must_use]
    pub fn full(&self) -> MoveSequence {
        self.segments
            .iter()
            .flat_map(|segment| segment.moves().iter().copied())
            .collect::<MoveSequence>()
            .merged()
    }

    /// The exact reverse of the full operation
    #[must_use]
    pub fn reversed(&self) -> MoveSequence {
        self.full().inverse()
    }

    /// Total steps in the merged full operation
    #[must_use]
    pub fn total_steps(&self) -> usize {
        self.full().len()
    }

    /// Whether no stage recorded any moves
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.iter().all(MoveSequence::is_empty)
    }
}

//! Drop-target location within a column.
//!
//! While a card is dragged over a column, the host describes every candidate
//! insertion slot of that column as a [`SlotMarker`]: one marker sits directly
//! above each card, and one trailing marker stands for the end of the column.
//! [`nearest_slot`] then picks the slot the card would land in.

use serde::{Deserialize, Serialize};

use crate::card::CardId;

/// Marker value that designates the end of a column.
pub const END_MARKER: &str = "-1";

/// Default distance, in pointer units, within which the chosen slot is drawn
/// emphasized.
pub const DEFAULT_HIGHLIGHT_RADIUS: f64 = 50.0;

/// Where a dropped card is inserted relative to its new siblings.
///
/// # Examples
///
/// ```
/// use swimlane_protocol::{CardId, InsertionPoint};
///
/// let point = InsertionPoint::from_marker("-1");
/// assert_eq!(point, InsertionPoint::End);
///
/// let point = InsertionPoint::from_marker("abc");
/// assert_eq!(point, InsertionPoint::Before(CardId::new("abc")));
/// assert_eq!(point.as_marker(), "abc");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsertionPoint {
    /// Insert immediately before the given card.
    Before(CardId),
    /// Append after every other card.
    End,
}

impl InsertionPoint {
    /// Parses a marker string; [`END_MARKER`] and the empty string mean the
    /// end of the column.
    #[must_use]
    pub fn from_marker(marker: &str) -> Self {
        if marker.is_empty() || marker == END_MARKER {
            Self::End
        } else {
            Self::Before(CardId::new(marker))
        }
    }

    /// Returns the marker string for this insertion point.
    #[must_use]
    pub fn as_marker(&self) -> &str {
        match self {
            Self::Before(id) => id.as_str(),
            Self::End => END_MARKER,
        }
    }

    /// Returns the card this point is placed before, if any.
    #[must_use]
    pub fn before(&self) -> Option<&CardId> {
        match self {
            Self::Before(id) => Some(id),
            Self::End => None,
        }
    }
}

/// A rendered candidate slot with its vertical extent.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotMarker {
    /// Where a drop on this slot would insert the card.
    pub target: InsertionPoint,
    /// Top edge, in pointer coordinates.
    pub top: f64,
    /// Height, in pointer coordinates.
    pub height: f64,
}

impl SlotMarker {
    /// Creates a marker.
    #[must_use]
    pub fn new(target: InsertionPoint, top: f64, height: f64) -> Self {
        Self {
            target,
            top,
            height,
        }
    }

    /// Returns the vertical midpoint of the marker.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// The slot chosen for a pointer position.
#[derive(Debug, Clone, PartialEq)]
pub struct NearestSlot<'a> {
    /// Index of the chosen marker in the input slice.
    pub index: usize,
    /// The chosen marker.
    pub slot: &'a SlotMarker,
    /// Signed distance from the marker's midpoint to the pointer, always
    /// negative. `None` when no marker was below the pointer and the first
    /// marker was returned as a fallback.
    pub offset: Option<f64>,
}

impl NearestSlot<'_> {
    /// Returns true if the slot is within `radius` of the pointer and should
    /// be drawn emphasized.
    ///
    /// The fallback slot is never emphasized.
    #[must_use]
    pub fn is_emphasized(&self, radius: f64) -> bool {
        self.offset.is_some_and(|offset| -offset <= radius)
    }
}

/// Chooses the insertion slot for a pointer at `pointer_y`.
///
/// Only markers whose midpoint lies below the pointer (strictly negative
/// offset) are eligible; among them the closest wins. If none is eligible the
/// first marker is returned. Returns `None` only for an empty slice.
///
/// # Examples
///
/// ```
/// use swimlane_protocol::{CardId, InsertionPoint, SlotMarker, nearest_slot};
///
/// let markers = vec![
///     SlotMarker::new(InsertionPoint::Before(CardId::new("a")), 0.0, 2.0),
///     SlotMarker::new(InsertionPoint::Before(CardId::new("b")), 10.0, 2.0),
///     SlotMarker::new(InsertionPoint::End, 20.0, 2.0),
/// ];
///
/// let nearest = nearest_slot(&markers, 5.0).unwrap();
/// assert_eq!(nearest.index, 1);
///
/// // Below every midpoint: the first slot is returned.
/// let nearest = nearest_slot(&markers, 100.0).unwrap();
/// assert_eq!(nearest.index, 0);
/// assert!(nearest.offset.is_none());
/// ```
#[must_use]
pub fn nearest_slot(markers: &[SlotMarker], pointer_y: f64) -> Option<NearestSlot<'_>> {
    let first = markers.first()?;

    let closest = markers
        .iter()
        .enumerate()
        .filter_map(|(index, slot)| {
            let offset = pointer_y - slot.midpoint();
            (offset < 0.0).then_some((index, slot, offset))
        })
        .fold(None, |best: Option<(usize, &SlotMarker, f64)>, candidate| {
            match best {
                Some(best) if best.2 >= candidate.2 => Some(best),
                _ => Some(candidate),
            }
        });

    Some(match closest {
        Some((index, slot, offset)) => NearestSlot {
            index,
            slot,
            offset: Some(offset),
        },
        None => NearestSlot {
            index: 0,
            slot: first,
            offset: None,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markers(tops: &[f64]) -> Vec<SlotMarker> {
        let mut markers: Vec<SlotMarker> = tops
            .iter()
            .enumerate()
            .map(|(i, top)| SlotMarker::new(InsertionPoint::Before(CardId::new(format!("c{i}"))), *top, 2.0))
            .collect();
        if let Some(last) = markers.last_mut() {
            last.target = InsertionPoint::End;
        }
        markers
    }

    #[test]
    fn empty_markers_yield_nothing() {
        assert!(nearest_slot(&[], 10.0).is_none());
    }

    #[test]
    fn picks_closest_marker_below_pointer() {
        let markers = markers(&[0.0, 10.0, 20.0, 30.0]);

        // Midpoints are 1, 11, 21, 31.
        assert_eq!(nearest_slot(&markers, 0.5).map(|n| n.index), Some(0));
        assert_eq!(nearest_slot(&markers, 1.5).map(|n| n.index), Some(1));
        assert_eq!(nearest_slot(&markers, 15.0).map(|n| n.index), Some(2));
        assert_eq!(nearest_slot(&markers, 30.9).map(|n| n.index), Some(3));
    }

    #[test]
    fn pointer_on_midpoint_is_not_eligible() {
        let markers = markers(&[0.0, 10.0]);
        let nearest = nearest_slot(&markers, 11.0).expect("non-empty");
        assert_eq!(nearest.index, 0);
        assert!(nearest.offset.is_none());
    }

    #[test]
    fn pointer_below_everything_falls_back_to_first() {
        let markers = markers(&[0.0, 10.0, 20.0]);
        let nearest = nearest_slot(&markers, 500.0).expect("non-empty");
        assert_eq!(nearest.index, 0);
        assert_eq!(nearest.slot.target, InsertionPoint::Before(CardId::new("c0")));
        assert!(!nearest.is_emphasized(f64::INFINITY));
    }

    #[test]
    fn offset_reports_distance_to_midpoint() {
        let markers = markers(&[0.0, 10.0]);
        let nearest = nearest_slot(&markers, 8.0).expect("non-empty");
        assert_eq!(nearest.index, 1);
        assert_eq!(nearest.offset, Some(-3.0));
    }

    #[test]
    fn highlight_radius_never_changes_selection() {
        let markers = markers(&[0.0, 100.0]);
        let nearest = nearest_slot(&markers, 2.0).expect("non-empty");
        assert_eq!(nearest.index, 1);
        assert!(!nearest.is_emphasized(DEFAULT_HIGHLIGHT_RADIUS));
        assert!(nearest.is_emphasized(200.0));
    }

    #[test]
    fn marker_roundtrip() {
        assert_eq!(InsertionPoint::End.as_marker(), END_MARKER);
        assert_eq!(InsertionPoint::from_marker(""), InsertionPoint::End);
        assert_eq!(
            InsertionPoint::from_marker("x").before(),
            Some(&CardId::new("x"))
        );
    }
}

#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The chosen marker is always the eligible one with the largest offset.
        #[test]
        fn chosen_marker_is_closest_eligible(
            tops in prop::collection::vec(0.0f64..1000.0, 1..20),
            pointer in -10.0f64..1100.0,
        ) {
            let markers: Vec<SlotMarker> = tops
                .iter()
                .map(|top| SlotMarker::new(InsertionPoint::End, *top, 1.0))
                .collect();
            let nearest = nearest_slot(&markers, pointer).expect("non-empty");

            let best = markers
                .iter()
                .map(|m| pointer - m.midpoint())
                .filter(|offset| *offset < 0.0)
                .fold(None, |acc: Option<f64>, o| Some(acc.map_or(o, |a| a.max(o))));

            match best {
                Some(best) => prop_assert_eq!(nearest.offset, Some(best)),
                None => {
                    prop_assert_eq!(nearest.index, 0);
                    prop_assert!(nearest.offset.is_none());
                }
            }
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::layout::{Cabin, SeatState};

/// Seat classes, in the order they are filled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatClass {
    Aisle,
    Window,
    Middle,
}

impl SeatClass {
    pub const PASS_ORDER: [SeatClass; 3] = [SeatClass::Aisle, SeatClass::Window, SeatClass::Middle];

    /// Whether position `index` of `row` belongs to this class.
    ///
    /// Only the position is checked, not the cell's own state. The first
    /// cell of a row is never an aisle seat, even when an aisle follows it.
    pub fn matches(self, row: &[SeatState], index: usize) -> bool {
        match self {
            SeatClass::Aisle => index > 0 && index < row.len() && has_aisle_neighbour(row, index),
            SeatClass::Window => is_window(row, index),
            SeatClass::Middle => {
                index < row.len() && !is_window(row, index) && !has_aisle_neighbour(row, index)
            }
        }
    }

    /// Class of a real seat; `None` for aisles, padding and out-of-range positions
    pub fn classify(row: &[SeatState], index: usize) -> Option<SeatClass> {
        if !row.get(index)?.is_real_seat() {
            return None;
        }
        Self::PASS_ORDER.into_iter().find(|class| class.matches(row, index))
    }
}

fn is_window(row: &[SeatState], index: usize) -> bool {
    index < row.len() && (index == 0 || index == row.len() - 1)
}

// Neighbours past either end of the row count as "not an aisle".
fn has_aisle_neighbour(row: &[SeatState], index: usize) -> bool {
    let before = index.checked_sub(1).and_then(|i| row.get(i));
    let after = row.get(index + 1);

    [before, after]
        .into_iter()
        .flatten()
        .any(|state| *state == SeatState::Aisle)
}

/// Counters shared by every pass over one cabin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatCounters {
    pub next_seat_number: u32,
    pub remaining_passengers: u32,
}

impl SeatCounters {
    pub fn new(passengers: u32) -> Self {
        Self {
            next_seat_number: 1,
            remaining_passengers: passengers,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining_passengers == 0
    }

    fn take_seat(&mut self) -> u32 {
        let number = self.next_seat_number;
        self.next_seat_number += 1;
        self.remaining_passengers -= 1;
        number
    }
}

/// Run one pass over the cabin, seating passengers in every open seat of
/// `class`, row by row and left to right, until nobody is left.
///
/// Returns the counters after the pass. Seats that are already assigned are
/// skipped, so running the same pass again with the returned counters
/// assigns nothing new.
pub fn assign_pass(cabin: &mut Cabin, class: SeatClass, counters: SeatCounters) -> SeatCounters {
    let mut counters = counters;

    let targets: Vec<(usize, usize)> = cabin
        .rows()
        .iter()
        .enumerate()
        .flat_map(|(row_index, row)| {
            (0..row.len())
                .filter(move |&col| row[col] == SeatState::Seat && class.matches(row, col))
                .map(move |col| (row_index, col))
        })
        .take(counters.remaining_passengers as usize)
        .collect();

    let assigned = targets.len();
    for (row, col) in targets {
        let number = counters.take_seat();
        cabin.assign(row, col, number);
    }

    tracing::debug!(
        ?class,
        assigned,
        next_seat_number = counters.next_seat_number,
        remaining_passengers = counters.remaining_passengers,
        "Seat pass complete"
    );

    counters
}

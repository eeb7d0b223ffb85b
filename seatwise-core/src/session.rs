use serde::Serialize;
use serde_json::Value;

use crate::assigner::{assign_pass, SeatClass, SeatCounters};
use crate::input;
use crate::layout::{BlockDescriptor, Cabin, LayoutLimits};
use crate::SeatingResult;

/// Result of a full assignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssignmentOutcome {
    pub seat_map: Cabin,
    pub remaining_passengers: u32,
}

/// One cabin and the passengers waiting to be seated in it.
///
/// The individual passes may be called on their own and in any order. Each
/// pass only fills seats that are still open and continues the numbering
/// where the previous pass stopped, so calling a pass twice is harmless.
/// Seat numbers follow call order; only [`SeatingSession::run_full_assignment`]
/// guarantees aisle, window, middle numbering.
#[derive(Debug, Clone)]
pub struct SeatingSession {
    cabin: Cabin,
    passengers: u32,
    counters: SeatCounters,
}

impl SeatingSession {
    pub fn new(layout: &[BlockDescriptor], passengers: u32) -> SeatingResult<Self> {
        let cabin = Cabin::build(layout)?;

        tracing::info!(
            blocks = layout.len(),
            rows = cabin.row_count(),
            capacity = cabin.capacity(),
            passengers,
            "Seating session created"
        );

        Ok(Self {
            cabin,
            passengers,
            counters: SeatCounters::new(passengers),
        })
    }

    /// Same as [`SeatingSession::new`], rejecting any block larger than `limits`
    pub fn with_limits(
        layout: &[BlockDescriptor],
        passengers: u32,
        limits: &LayoutLimits,
    ) -> SeatingResult<Self> {
        limits.check(layout)?;
        Self::new(layout, passengers)
    }

    /// Build a session from untyped JSON. The layout is validated before
    /// the passenger count; a `None` count seats nobody.
    pub fn from_json(layout: &Value, passengers: Option<&Value>) -> SeatingResult<Self> {
        let blocks = input::parse_layout(layout)?;
        let passengers = input::parse_passenger_count(passengers)?;
        Self::new(&blocks, passengers)
    }

    pub fn seat_map(&self) -> &Cabin {
        &self.cabin
    }

    pub fn passengers(&self) -> u32 {
        self.passengers
    }

    pub fn remaining_passengers(&self) -> u32 {
        self.counters.remaining_passengers
    }

    pub fn next_seat_number(&self) -> u32 {
        self.counters.next_seat_number
    }

    pub fn counters(&self) -> SeatCounters {
        self.counters
    }

    /// Returns how many seats the pass assigned
    pub fn assign_aisle_seats(&mut self) -> u32 {
        self.run_pass(SeatClass::Aisle)
    }

    /// Returns how many seats the pass assigned
    pub fn assign_window_seats(&mut self) -> u32 {
        self.run_pass(SeatClass::Window)
    }

    /// Returns how many seats the pass assigned
    pub fn assign_middle_seats(&mut self) -> u32 {
        self.run_pass(SeatClass::Middle)
    }

    fn run_pass(&mut self, class: SeatClass) -> u32 {
        let before = self.counters;
        self.counters = assign_pass(&mut self.cabin, class, before);
        before.remaining_passengers - self.counters.remaining_passengers
    }

    /// Fill aisle, then window, then middle seats.
    ///
    /// Running out of seats is not an error; whoever could not be seated is
    /// reported in `remaining_passengers`.
    pub fn run_full_assignment(&mut self) -> AssignmentOutcome {
        let assigned: u32 = SeatClass::PASS_ORDER
            .into_iter()
            .map(|class| self.run_pass(class))
            .sum();

        if self.counters.remaining_passengers > 0 {
            tracing::warn!(
                capacity = self.cabin.capacity(),
                remaining_passengers = self.counters.remaining_passengers,
                "Not enough seats for every passenger"
            );
        }

        tracing::info!(
            assigned,
            remaining_passengers = self.counters.remaining_passengers,
            "Seat assignment complete"
        );

        AssignmentOutcome {
            seat_map: self.cabin.clone(),
            remaining_passengers: self.counters.remaining_passengers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::SeatState::{Aisle as A, Assigned, Empty as E, Seat as S};
    use crate::SeatingError;
    use serde_json::json;

    fn layout(pairs: &[(u32, u32)]) -> Vec<BlockDescriptor> {
        pairs.iter().copied().map(BlockDescriptor::from).collect()
    }

    #[test]
    fn test_new_session() {
        let session = SeatingSession::new(&layout(&[(1, 2), (3, 4)]), 5).unwrap();

        assert_eq!(session.passengers(), 5);
        assert_eq!(session.remaining_passengers(), 5);
        assert_eq!(session.next_seat_number(), 1);
        assert_eq!(session.seat_map().row_count(), 4);
    }

    #[test]
    fn test_full_assignment_with_leftover_passenger() {
        let mut session = SeatingSession::new(&layout(&[(3, 2), (2, 2), (3, 2)]), 17).unwrap();
        let outcome = session.run_full_assignment();

        assert_eq!(outcome.seat_map.rows(), &[
            vec![Assigned(9), Assigned(13), Assigned(1), A, Assigned(2), Assigned(3), A, Assigned(4), Assigned(14), Assigned(10)],
            vec![Assigned(11), Assigned(15), Assigned(5), A, Assigned(6), Assigned(7), A, Assigned(8), Assigned(16), Assigned(12)],
        ]);
        assert_eq!(outcome.remaining_passengers, 1);
    }

    #[test]
    fn test_full_assignment_stops_at_passenger_count() {
        let mut session = SeatingSession::new(&layout(&[(4, 1), (5, 1)]), 5).unwrap();
        let outcome = session.run_full_assignment();

        assert_eq!(outcome.seat_map.rows(), &[vec![
            Assigned(3), Assigned(5), S, Assigned(1), A, Assigned(2), S, S, S, Assigned(4),
        ]]);
        assert_eq!(outcome.remaining_passengers, 0);
    }

    #[test]
    fn test_pass_counts_and_idempotence() {
        let mut session = SeatingSession::new(&layout(&[(3, 1), (2, 2)]), 5).unwrap();

        assert_eq!(session.assign_aisle_seats(), 3);
        assert_eq!(session.assign_aisle_seats(), 0);
        assert_eq!(session.remaining_passengers(), 2);
        assert_eq!(session.next_seat_number(), 4);

        assert_eq!(session.seat_map().rows(), &[
            vec![S, S, Assigned(1), A, Assigned(2), S],
            vec![E, E, E, A, Assigned(3), S],
        ]);
    }

    #[test]
    fn test_out_of_order_passes_keep_numbering_contiguous() {
        let mut session = SeatingSession::new(&layout(&[(3, 1), (3, 1)]), 10).unwrap();

        assert_eq!(session.assign_middle_seats(), 2);
        assert_eq!(session.assign_window_seats(), 2);
        assert_eq!(session.assign_aisle_seats(), 2);

        assert_eq!(session.seat_map().rows(), &[vec![
            Assigned(3), Assigned(1), Assigned(5), A, Assigned(6), Assigned(2), Assigned(4),
        ]]);
        assert_eq!(session.remaining_passengers(), 4);
    }

    #[test]
    fn test_rerunning_full_assignment_continues_numbering() {
        let mut session = SeatingSession::new(&layout(&[(2, 1), (2, 1)]), 2).unwrap();
        session.assign_window_seats();

        let outcome = session.run_full_assignment();

        assert_eq!(outcome.seat_map.rows(), &[vec![Assigned(1), S, A, S, Assigned(2)]]);
        assert_eq!(session.run_full_assignment(), outcome);
        assert_eq!(session.next_seat_number(), 3);
    }

    #[test]
    fn test_with_limits() {
        let limits = LayoutLimits { max_block_rows: 10, max_block_columns: 30 };

        assert!(SeatingSession::with_limits(&layout(&[(3, 20)]), 1, &limits).is_ok());

        let err = SeatingSession::with_limits(&layout(&[(3, 20), (10, 2)]), 1, &limits).unwrap_err();
        assert!(matches!(err, SeatingError::InvalidSeatLayout(_)));
    }

    #[test]
    fn test_from_json() {
        let mut session = SeatingSession::from_json(&json!([[4, 1], [5, 1]]), Some(&json!(5))).unwrap();
        let outcome = session.run_full_assignment();

        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({
                "seat_map": [[3, 5, "seat", 1, "aisle", 2, "seat", "seat", "seat", 4]],
                "remaining_passengers": 0,
            })
        );
    }

    #[test]
    fn test_from_json_validation_order() {
        let err = SeatingSession::from_json(&json!([]), Some(&json!(-1))).unwrap_err();
        assert!(matches!(err, SeatingError::InvalidSeatLayout(_)));

        let err = SeatingSession::from_json(&json!([[1, 2], [3, 4]]), Some(&json!(-1))).unwrap_err();
        assert!(matches!(err, SeatingError::InvalidPassengerCount(_)));
    }

    #[test]
    fn test_from_json_null_passengers_rejected() {
        let err = SeatingSession::from_json(&json!([[1, 2]]), Some(&Value::Null)).unwrap_err();
        assert!(matches!(err, SeatingError::InvalidPassengerCount(_)));

        let session = SeatingSession::from_json(&json!([[1, 2]]), None).unwrap();
        assert_eq!(session.passengers(), 0);
    }
}

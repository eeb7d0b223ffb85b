//! Seat allocation for a single airplane cabin.
//!
//! A cabin is described as a list of seat blocks. The layout builder turns
//! those blocks into a seat map, and the assigner fills that map in three
//! passes: aisle seats, then window seats, then middle seats.

pub mod layout;
pub mod input;
pub mod assigner;
pub mod session;

pub use layout::{BlockDescriptor, Cabin, LayoutLimits, SeatState};
pub use assigner::{assign_pass, SeatClass, SeatCounters};
pub use session::{AssignmentOutcome, SeatingSession};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeatingError {
    #[error("Invalid seat layout: {0}")]
    InvalidSeatLayout(String),
    #[error("Invalid passenger count: {0}")]
    InvalidPassengerCount(String),
}

pub type SeatingResult<T> = Result<T, SeatingError>;

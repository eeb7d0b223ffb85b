use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{SeatingError, SeatingResult};

/// State of one cell in the seat map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SeatRepr", into = "SeatRepr")]
pub enum SeatState {
    /// A real seat nobody has been given yet
    Seat,
    /// Padding where a shorter block has no seat at this layer
    Empty,
    /// Gap between two blocks
    Aisle,
    /// A seat holding the given seat number (numbers start at 1)
    Assigned(u32),
}

impl SeatState {
    /// `Seat` or `Assigned`, i.e. somewhere a passenger can sit
    pub fn is_real_seat(&self) -> bool {
        matches!(self, SeatState::Seat | SeatState::Assigned(_))
    }

    /// Seat number of an assigned seat
    pub fn seat_number(&self) -> Option<u32> {
        match self {
            SeatState::Assigned(number) => Some(*number),
            _ => None,
        }
    }
}

// Wire form: "seat" / "empty" / "aisle", or the bare seat number.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum SeatRepr {
    Number(u32),
    Label(SeatLabel),
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum SeatLabel {
    Seat,
    Empty,
    Aisle,
}

impl From<SeatState> for SeatRepr {
    fn from(state: SeatState) -> Self {
        match state {
            SeatState::Seat => SeatRepr::Label(SeatLabel::Seat),
            SeatState::Empty => SeatRepr::Label(SeatLabel::Empty),
            SeatState::Aisle => SeatRepr::Label(SeatLabel::Aisle),
            SeatState::Assigned(number) => SeatRepr::Number(number),
        }
    }
}

impl TryFrom<SeatRepr> for SeatState {
    type Error = String;

    fn try_from(repr: SeatRepr) -> Result<Self, Self::Error> {
        match repr {
            SeatRepr::Number(0) => Err("seat numbers start at 1".to_string()),
            SeatRepr::Number(number) => Ok(SeatState::Assigned(number)),
            SeatRepr::Label(SeatLabel::Seat) => Ok(SeatState::Seat),
            SeatRepr::Label(SeatLabel::Empty) => Ok(SeatState::Empty),
            SeatRepr::Label(SeatLabel::Aisle) => Ok(SeatState::Aisle),
        }
    }
}

/// One rectangular seat block, written as `[rows, columns]`.
///
/// `rows` is how many seats the block contributes to every cabin row and
/// `columns` is how many cabin rows deep the block goes. Past that depth the
/// block is padded with `Empty` cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(u32, u32)", into = "(u32, u32)")]
pub struct BlockDescriptor {
    pub rows: u32,
    pub columns: u32,
}

impl BlockDescriptor {
    pub const fn new(rows: u32, columns: u32) -> Self {
        Self { rows, columns }
    }

    /// Both dimensions strictly below the configured maximums
    pub fn fits_within(&self, limits: &LayoutLimits) -> bool {
        self.rows < limits.max_block_rows && self.columns < limits.max_block_columns
    }

    fn cell_at_layer(&self, layer: u32) -> SeatState {
        if self.columns > layer {
            SeatState::Seat
        } else {
            SeatState::Empty
        }
    }
}

impl From<(u32, u32)> for BlockDescriptor {
    fn from((rows, columns): (u32, u32)) -> Self {
        Self { rows, columns }
    }
}

impl From<BlockDescriptor> for (u32, u32) {
    fn from(block: BlockDescriptor) -> Self {
        (block.rows, block.columns)
    }
}

/// Upper bounds on the size of a single block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutLimits {
    pub max_block_rows: u32,
    pub max_block_columns: u32,
}

impl LayoutLimits {
    pub fn check(&self, blocks: &[BlockDescriptor]) -> SeatingResult<()> {
        match blocks.iter().position(|block| !block.fits_within(self)) {
            Some(index) => Err(SeatingError::InvalidSeatLayout(format!(
                "block {} ({}x{}) exceeds the limit of {}x{}",
                index,
                blocks[index].rows,
                blocks[index].columns,
                self.max_block_rows,
                self.max_block_columns,
            ))),
            None => Ok(()),
        }
    }
}

/// The seat map: one `Vec<SeatState>` per cabin row.
///
/// Row lengths are fixed once built. The only mutation allowed afterwards is
/// turning a `Seat` into an `Assigned` seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Cabin {
    rows: Vec<Vec<SeatState>>,
}

impl Cabin {
    /// Build the seat map for the given blocks.
    ///
    /// Cabin row `c` slices layer `c` across every block in order, so the
    /// cabin has as many rows as the deepest block has columns. Blocks are
    /// separated by a single `Aisle` cell with none after the last block.
    pub fn build(blocks: &[BlockDescriptor]) -> SeatingResult<Self> {
        if blocks.is_empty() {
            return Err(SeatingError::InvalidSeatLayout(
                "at least one seat block is required".to_string(),
            ));
        }

        let depth = blocks.iter().map(|block| block.columns).max().unwrap_or(0);
        let rows = (0..depth).map(|layer| Self::build_row(blocks, layer)).collect();

        Ok(Self { rows })
    }

    fn build_row(blocks: &[BlockDescriptor], layer: u32) -> Vec<SeatState> {
        let width = blocks.iter().map(|block| block.rows as usize).sum::<usize>() + blocks.len() - 1;
        let mut row = Vec::with_capacity(width);

        for (index, block) in blocks.iter().enumerate() {
            if index > 0 {
                row.push(SeatState::Aisle);
            }
            row.extend(std::iter::repeat(block.cell_at_layer(layer)).take(block.rows as usize));
        }

        row
    }

    pub fn rows(&self) -> &[Vec<SeatState>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&[SeatState]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell at (`row`, `col`), or `None` when either index is out of range
    pub fn seat(&self, row: usize, col: usize) -> Option<SeatState> {
        self.rows.get(row).and_then(|cells| cells.get(col)).copied()
    }

    /// Number of real seats, assigned or not
    pub fn capacity(&self) -> usize {
        self.count(SeatState::is_real_seat)
    }

    pub fn assigned_count(&self) -> usize {
        self.count(|state| state.seat_number().is_some())
    }

    pub fn vacant_count(&self) -> usize {
        self.count(|state| *state == SeatState::Seat)
    }

    fn count(&self, predicate: impl Fn(&SeatState) -> bool) -> usize {
        self.rows.iter().flatten().filter(|state| predicate(state)).count()
    }

    /// Give seat `number` to the cell at (`row`, `col`).
    ///
    /// Returns false and leaves the cell alone unless it is an unassigned `Seat`.
    pub(crate) fn assign(&mut self, row: usize, col: usize, number: u32) -> bool {
        match self.rows.get_mut(row).and_then(|cells| cells.get_mut(col)) {
            Some(cell @ SeatState::Seat) => {
                *cell = SeatState::Assigned(number);
                true
            }
            _ => false,
        }
    }
}

impl fmt::Display for Cabin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .rows
            .iter()
            .flatten()
            .filter_map(SeatState::seat_number)
            .map(|number| number.to_string().len())
            .max()
            .unwrap_or(1);

        for row in &self.rows {
            let cells: Vec<String> = row
                .iter()
                .map(|state| {
                    let label = match state {
                        SeatState::Seat => ".".to_string(),
                        SeatState::Empty => String::new(),
                        SeatState::Aisle => "|".to_string(),
                        SeatState::Assigned(number) => number.to_string(),
                    };
                    format!("{:>width$}", label, width = width)
                })
                .collect();
            writeln!(f, "{}", cells.join(" ").trim_end())?;
        }

        Ok(())
    }
}

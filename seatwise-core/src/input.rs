//! Validation of untyped layout and passenger input.
//!
//! Callers that already hold `BlockDescriptor`s never go through here. This
//! is the front door for JSON coming from outside the crate, where a block
//! may be a string, a float or a negative number.

use serde_json::Value;

use crate::layout::BlockDescriptor;
use crate::{SeatingError, SeatingResult};

/// Parse `[[rows, columns], ...]` into block descriptors
pub fn parse_layout(value: &Value) -> SeatingResult<Vec<BlockDescriptor>> {
    let blocks = value.as_array().ok_or_else(|| {
        SeatingError::InvalidSeatLayout("expected an array of [rows, columns] blocks".to_string())
    })?;

    if blocks.is_empty() {
        return Err(SeatingError::InvalidSeatLayout(
            "at least one seat block is required".to_string(),
        ));
    }

    blocks
        .iter()
        .enumerate()
        .map(|(index, block)| parse_block(index, block))
        .collect()
}

fn parse_block(index: usize, block: &Value) -> SeatingResult<BlockDescriptor> {
    let pair = match block.as_array() {
        Some(pair) if pair.len() == 2 => pair,
        _ => {
            return Err(SeatingError::InvalidSeatLayout(format!(
                "block {} must be a [rows, columns] pair, got {}",
                index, block
            )))
        }
    };

    let rows = non_negative_integer(&pair[0]).ok_or_else(|| {
        SeatingError::InvalidSeatLayout(format!("block {} has an invalid row count: {}", index, pair[0]))
    })?;
    let columns = non_negative_integer(&pair[1]).ok_or_else(|| {
        SeatingError::InvalidSeatLayout(format!(
            "block {} has an invalid column count: {}",
            index, pair[1]
        ))
    })?;

    Ok(BlockDescriptor::new(rows, columns))
}

/// Parse a passenger count. An absent count means nobody is boarding; an
/// explicit `null` is rejected like any other non-integer.
pub fn parse_passenger_count(value: Option<&Value>) -> SeatingResult<u32> {
    let Some(value) = value else {
        return Ok(0);
    };

    non_negative_integer(value).ok_or_else(|| {
        SeatingError::InvalidPassengerCount(format!(
            "expected a non-negative integer, got {}",
            value
        ))
    })
}

// Integral floats such as `2.0` are accepted; anything that does not fit in
// a u32 is not.
fn non_negative_integer(value: &Value) -> Option<u32> {
    let number = value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|float| *float >= 0.0 && float.fract() == 0.0 && *float <= u32::MAX as f64)
            .map(|float| float as u64)
    })?;

    u32::try_from(number).ok()
}

//! Solves `ratio_a * amount_a == ratio_b * amount_b` for the one blank field.

pub mod solver;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::types::{Field, FieldUpdate, Inputs, Outcome, SkipReason, Solve};

pub const DEFAULT_RATIO_PLACES: u32 = 2;

fn blank(text: &str) -> bool {
    text.is_empty() || text == "." || text == "0."
}

/// Parses a ratio field. Blank, unparseable and zero values are not provided.
pub fn parse_ratio(text: &str) -> Option<Decimal> {
    let t = text.trim();
    if blank(t) {
        return None;
    }
    t.parse::<Decimal>().ok().filter(|v| !v.is_zero())
}

/// Parses an amount field. Only whole numbers count; zero is not provided.
pub fn parse_amount(text: &str) -> Option<i64> {
    let t = text.trim();
    if blank(t) {
        return None;
    }
    t.parse::<i64>().ok().filter(|v| *v != 0)
}

pub fn classify(inputs: &Inputs) -> Solve {
    match (inputs.ratio_a, inputs.amount_a, inputs.ratio_b, inputs.amount_b) {
        (Some(ratio_a), Some(amount_a), Some(ratio_b), None) => Solve::AmountB { ratio_a, amount_a, ratio_b },
        (Some(ratio_a), Some(amount_a), None, Some(amount_b)) => Solve::RatioB { ratio_a, amount_a, amount_b },
        (Some(ratio_a), None, Some(ratio_b), Some(amount_b)) => Solve::AmountA { ratio_b, amount_b, ratio_a },
        (None, Some(amount_a), Some(ratio_b), Some(amount_b)) => Solve::RatioA { ratio_b, amount_b, amount_a },
        _ => {
            let missing = [
                inputs.ratio_a.is_none(),
                inputs.amount_a.is_none(),
                inputs.ratio_b.is_none(),
                inputs.amount_b.is_none(),
            ]
            .iter()
            .filter(|m| **m)
            .count();
            Solve::Ambiguous { missing }
        }
    }
}

/// Derives the blank field with ratios shown to two places.
pub fn infer(inputs: &Inputs) -> Outcome {
    infer_with_places(inputs, DEFAULT_RATIO_PLACES)
}

pub fn infer_with_places(inputs: &Inputs, ratio_places: u32) -> Outcome {
    let res = match classify(inputs) {
        Solve::AmountB { ratio_a, amount_a, ratio_b } => {
            solve_amount(ratio_a, amount_a, ratio_b).map(|v| (Field::AmountB, v.to_string()))
        }
        Solve::RatioB { ratio_a, amount_a, amount_b } => {
            solve_ratio(ratio_a, amount_a, amount_b, ratio_places).map(|v| (Field::RatioB, v))
        }
        Solve::AmountA { ratio_b, amount_b, ratio_a } => {
            solve_amount(ratio_b, amount_b, ratio_a).map(|v| (Field::AmountA, v.to_string()))
        }
        Solve::RatioA { ratio_b, amount_b, amount_a } => {
            solve_ratio(ratio_b, amount_b, amount_a, ratio_places).map(|v| (Field::RatioA, v))
        }
        Solve::Ambiguous { missing } => Err(SkipReason::Ambiguous { missing }),
    };

    match res {
        Ok((field, text)) => Outcome::Updated(FieldUpdate { field, text }),
        Err(reason) => Outcome::Skipped(reason),
    }
}

/// `trunc(ratio * amount / other_ratio)`
fn solve_amount(ratio: Decimal, amount: i64, other_ratio: Decimal) -> Result<i64, SkipReason> {
    if other_ratio.is_zero() {
        return Err(SkipReason::DivideByZero);
    }
    let v = ratio
        .checked_mul(Decimal::from(amount))
        .and_then(|num| num.checked_div(other_ratio))
        .ok_or(SkipReason::Overflow)?;
    v.trunc().to_i64().ok_or(SkipReason::Overflow)
}

/// `ratio * amount / other_amount`, rounded half-even and padded to `places`.
fn solve_ratio(ratio: Decimal, amount: i64, other_amount: i64, places: u32) -> Result<String, SkipReason> {
    if other_amount == 0 {
        return Err(SkipReason::DivideByZero);
    }
    let v = ratio
        .checked_mul(Decimal::from(amount))
        .and_then(|num| num.checked_div(Decimal::from(other_amount)))
        .ok_or(SkipReason::Overflow)?;
    let v = v.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven);
    Ok(format!("{:.*}", places as usize, v))
}

/// `ratio_a * amount_a - ratio_b * amount_b`, when all four are present.
pub fn imbalance(inputs: &Inputs) -> Option<Decimal> {
    let lhs = inputs.ratio_a?.checked_mul(Decimal::from(inputs.amount_a?))?;
    let rhs = inputs.ratio_b?.checked_mul(Decimal::from(inputs.amount_b?))?;
    lhs.checked_sub(rhs)
}

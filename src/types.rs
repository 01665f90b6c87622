use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    RatioA,
    RatioB,
    AmountA,
    AmountB,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::RatioA, Field::AmountA, Field::RatioB, Field::AmountB];

    pub fn is_ratio(self) -> bool {
        matches!(self, Field::RatioA | Field::RatioB)
    }

    /// Tab order: ratio_a, amount_a, ratio_b, amount_b, then back to ratio_a.
    pub fn next(self) -> Field {
        match self {
            Field::RatioA => Field::AmountA,
            Field::AmountA => Field::RatioB,
            Field::RatioB => Field::AmountB,
            Field::AmountB => Field::RatioA,
        }
    }

    /// Short command label.
    pub fn label(self) -> &'static str {
        match self {
            Field::RatioA => "ra",
            Field::RatioB => "rb",
            Field::AmountA => "aa",
            Field::AmountB => "ab",
        }
    }

    pub fn from_label(s: &str) -> Option<Field> {
        match s {
            "ra" => Some(Field::RatioA),
            "rb" => Some(Field::RatioB),
            "aa" => Some(Field::AmountA),
            "ab" => Some(Field::AmountB),
            _ => None,
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Field::RatioA => "ratio_a",
            Field::RatioB => "ratio_b",
            Field::AmountA => "amount_a",
            Field::AmountB => "amount_b",
        };
        f.write_str(s)
    }
}

/// Parsed field values. `None` means the field was left blank.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Inputs {
    pub ratio_a: Option<Decimal>,
    pub ratio_b: Option<Decimal>,
    pub amount_a: Option<i64>,
    pub amount_b: Option<i64>,
}

/// Which formula applies, decided by which fields are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solve {
    AmountB { ratio_a: Decimal, amount_a: i64, ratio_b: Decimal },
    RatioB { ratio_a: Decimal, amount_a: i64, amount_b: i64 },
    AmountA { ratio_b: Decimal, amount_b: i64, ratio_a: Decimal },
    RatioA { ratio_b: Decimal, amount_b: i64, amount_a: i64 },
    Ambiguous { missing: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldUpdate {
    pub field: Field,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    Ambiguous { missing: usize },
    DivideByZero,
    Overflow,
    Consistent,
    Inconsistent { diff: Decimal },
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::Ambiguous { .. } => "ambiguous",
            SkipReason::DivideByZero => "divide_by_zero",
            SkipReason::Overflow => "overflow",
            SkipReason::Consistent => "consistent",
            SkipReason::Inconsistent { .. } => "inconsistent",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Updated(FieldUpdate),
    Skipped(SkipReason),
}

impl Outcome {
    pub fn update(&self) -> Option<&FieldUpdate> {
        match self {
            Outcome::Updated(u) => Some(u),
            Outcome::Skipped(_) => None,
        }
    }
}

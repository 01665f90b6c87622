use crate::engine::solver::Solver;
use crate::engine::{parse_amount, parse_ratio};
use crate::types::{Field, Inputs, Outcome};

/// The four text fields as the user sees them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    ratio_a: String,
    ratio_b: String,
    amount_a: String,
    amount_b: String,
}

impl Form {
    pub fn text(&self, field: Field) -> &str {
        match field {
            Field::RatioA => &self.ratio_a,
            Field::RatioB => &self.ratio_b,
            Field::AmountA => &self.amount_a,
            Field::AmountB => &self.amount_b,
        }
    }

    pub fn text_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::RatioA => &mut self.ratio_a,
            Field::RatioB => &mut self.ratio_b,
            Field::AmountA => &mut self.amount_a,
            Field::AmountB => &mut self.amount_b,
        }
    }

    pub fn set_text(&mut self, field: Field, text: impl Into<String>) {
        *self.text_mut(field) = text.into();
    }

    pub fn inputs(&self) -> Inputs {
        Inputs {
            ratio_a: parse_ratio(&self.ratio_a),
            ratio_b: parse_ratio(&self.ratio_b),
            amount_a: parse_amount(&self.amount_a),
            amount_b: parse_amount(&self.amount_b),
        }
    }

    /// Runs the solver and writes the derived value into its field.
    pub fn calculate(&mut self, solver: &Solver) -> Outcome {
        let out = solver.solve(&self.inputs());
        if let Outcome::Updated(u) = &out {
            self.set_text(u.field, u.text.clone());
        }
        out
    }

    pub fn clear(&mut self) {
        for f in Field::ALL {
            self.text_mut(f).clear();
        }
    }

    /// Ratios on the left, amounts on the right, side A on top.
    /// The focused field is marked with `>`.
    pub fn render(&self, focus: Field) -> String {
        let cell = |f: Field| {
            let mark = if f == focus { '>' } else { ' ' };
            format!("{}{} [{:>10}]", mark, f.label(), self.text(f))
        };
        format!(
            "        ratio              amount\n A  {}  {}\n B  {}  {}",
            cell(Field::RatioA),
            cell(Field::AmountA),
            cell(Field::RatioB),
            cell(Field::AmountB),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::Stats;
    use crate::types::SkipReason;

    fn solver() -> Solver {
        Solver { ratio_places: 2, consistency_tolerance: None, stats: Stats::new(0) }
    }

    fn form(ra: &str, aa: &str, rb: &str, ab: &str) -> Form {
        let mut f = Form::default();
        f.set_text(Field::RatioA, ra);
        f.set_text(Field::AmountA, aa);
        f.set_text(Field::RatioB, rb);
        f.set_text(Field::AmountB, ab);
        f
    }

    #[test]
    fn calculate_writes_only_the_missing_field() {
        let mut f = form("1.80", "100", " 2.00 ", "");
        f.calculate(&solver());
        assert_eq!(f, form("1.80", "100", " 2.00 ", "90"));
    }

    #[test]
    fn calculate_fills_ratio_with_two_places() {
        let mut f = form("", "100", "2", "90");
        f.calculate(&solver());
        assert_eq!(f.text(Field::RatioA), "1.80");
    }

    #[test]
    fn blank_markers_are_overwritten() {
        let mut f = form("1.80", "100", "0.", "90");
        f.calculate(&solver());
        assert_eq!(f.text(Field::RatioB), "2.00");
    }

    #[test]
    fn second_calculate_changes_nothing() {
        let s = solver();
        let mut f = form("1.80", "100", "2.00", "");
        f.calculate(&s);
        let before = f.clone();
        assert_eq!(f.calculate(&s), Outcome::Skipped(SkipReason::Ambiguous { missing: 0 }));
        assert_eq!(f, before);
    }

    #[test]
    fn failed_calculate_leaves_garbage_untouched() {
        let mut f = form("abc", "100", "", "90");
        let before = f.clone();
        f.calculate(&solver());
        assert_eq!(f, before);
    }

    #[test]
    fn clear_empties_everything() {
        let mut f = form("1.80", "100", "2.00", "90");
        f.clear();
        assert_eq!(f, Form::default());
    }

    #[test]
    fn render_marks_focus() {
        let f = form("1.80", "100", "", "");
        let board = f.render(Field::AmountA);
        assert!(board.contains(">aa ["));
        assert!(board.contains(" ra [      1.80]"));
    }
}

use crate::types::Field;
use crate::ui::form::Form;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Digit(char),
    Point,
    Backspace,
}

impl Key {
    /// `0-9`, `.` and `<` for backspace.
    pub fn from_char(c: char) -> Option<Key> {
        match c {
            '0'..='9' => Some(Key::Digit(c)),
            '.' => Some(Key::Point),
            '<' => Some(Key::Backspace),
            _ => None,
        }
    }
}

/// Applies one keystroke to `target`.
pub fn press(form: &mut Form, target: Field, key: Key) {
    let text = form.text_mut(target);
    match key {
        Key::Digit(d) => text.push(d),
        Key::Point => {
            if target.is_ratio() && !text.contains('.') {
                if text.is_empty() {
                    text.push('0');
                }
                text.push('.');
            }
        }
        Key::Backspace => {
            text.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_keys(form: &mut Form, target: Field, keys: &str) {
        for k in keys.chars().filter_map(Key::from_char) {
            press(form, target, k);
        }
    }

    #[test]
    fn digits_append() {
        let mut f = Form::default();
        type_keys(&mut f, Field::AmountA, "120");
        assert_eq!(f.text(Field::AmountA), "120");
    }

    #[test]
    fn point_on_empty_ratio_writes_leading_zero() {
        let mut f = Form::default();
        type_keys(&mut f, Field::RatioB, ".5");
        assert_eq!(f.text(Field::RatioB), "0.5");
    }

    #[test]
    fn second_point_is_ignored() {
        let mut f = Form::default();
        type_keys(&mut f, Field::RatioA, "1.8.0");
        assert_eq!(f.text(Field::RatioA), "1.80");
    }

    #[test]
    fn point_is_ignored_on_amounts() {
        let mut f = Form::default();
        type_keys(&mut f, Field::AmountB, "9.5");
        assert_eq!(f.text(Field::AmountB), "95");
    }

    #[test]
    fn backspace_removes_last_char() {
        let mut f = Form::default();
        type_keys(&mut f, Field::RatioA, "1.85<");
        assert_eq!(f.text(Field::RatioA), "1.8");
        type_keys(&mut f, Field::RatioA, "<<<<");
        assert_eq!(f.text(Field::RatioA), "");
    }

    #[test]
    fn only_target_changes() {
        let mut f = Form::default();
        f.set_text(Field::RatioA, "1.8");
        type_keys(&mut f, Field::RatioB, "2");
        assert_eq!(f.text(Field::RatioA), "1.8");
        assert_eq!(f.text(Field::RatioB), "2");
    }

    #[test]
    fn unknown_chars_are_not_keys() {
        assert_eq!(Key::from_char('x'), None);
        assert_eq!(Key::from_char('7'), Some(Key::Digit('7')));
    }

    #[test]
    fn tab_order_wraps() {
        let mut f = Field::RatioA;
        let mut seen = vec![];
        for _ in 0..4 {
            seen.push(f);
            f = f.next();
        }
        assert_eq!(seen, Field::ALL.to_vec());
        assert_eq!(f, Field::RatioA);
    }
}

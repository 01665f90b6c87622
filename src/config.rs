use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub ratio_places: u32,
    pub show_board: bool,

    // All-present balance check, off unless enabled
    pub check_consistency: bool,
    pub consistency_tolerance: Option<String>,

    pub stats_on_exit: bool,
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let c = config::Config::builder()
            .set_default("ratio_places", 2)?
            .set_default("show_board", true)?
            .set_default("check_consistency", false)?
            .set_default("stats_on_exit", true)?
            .add_source(config::Environment::default().try_parsing(true))
            .build()?;
        Ok(c.try_deserialize()?)
    }

    /// `None` when the check is off.
    pub fn tolerance(&self) -> anyhow::Result<Option<Decimal>> {
        if !self.check_consistency {
            return Ok(None);
        }
        Ok(match &self.consistency_tolerance {
            Some(v) if !v.trim().is_empty() => Some(v.trim().parse::<Decimal>()?.abs()),
            _ => Some(dec!(0.01)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(check: bool, tol: Option<&str>) -> Settings {
        Settings {
            ratio_places: 2,
            show_board: true,
            check_consistency: check,
            consistency_tolerance: tol.map(str::to_string),
            stats_on_exit: false,
        }
    }

    #[test]
    fn tolerance_off_by_default() {
        assert_eq!(settings(false, Some("5")).tolerance().unwrap(), None);
    }

    #[test]
    fn tolerance_defaults_when_enabled() {
        assert_eq!(settings(true, None).tolerance().unwrap(), Some(dec!(0.01)));
        assert_eq!(settings(true, Some(" ")).tolerance().unwrap(), Some(dec!(0.01)));
    }

    #[test]
    fn tolerance_parses() {
        assert_eq!(settings(true, Some("-0.5")).tolerance().unwrap(), Some(dec!(0.5)));
        assert!(settings(true, Some("abc")).tolerance().is_err());
    }
}

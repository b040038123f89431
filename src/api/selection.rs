use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// Dropdown-style control whose option values are the valid x metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricSelector {
    options: Vec<String>,
    value: String,
}

impl MetricSelector {
    pub fn new(options: Vec<String>, value: impl Into<String>) -> PlotResult<Self> {
        let value = value.into();
        if !options.contains(&value) {
            return Err(PlotError::UnknownMetric(value));
        }
        for (i, option) in options.iter().enumerate() {
            if options[..i].contains(option) {
                return Err(PlotError::InvalidData(format!(
                    "duplicate selector option `{option}`"
                )));
            }
        }
        Ok(Self { options, value })
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Changes the selected option.
    ///
    /// Returns `Ok(true)` when the value changed, `Ok(false)` when `value` was
    /// already selected. Values outside the options are rejected.
    pub fn select(&mut self, value: &str) -> PlotResult<bool> {
        if !self.options.iter().any(|option| option == value) {
            return Err(PlotError::UnknownMetric(value.to_owned()));
        }
        if self.value == value {
            return Ok(false);
        }
        value.clone_into(&mut self.value);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::MetricSelector;
    use crate::error::PlotError;

    fn selector() -> MetricSelector {
        MetricSelector::new(vec!["humidity".into(), "windSpeed".into()], "humidity")
            .expect("selector")
    }

    #[test]
    fn select_reports_changes_only() {
        let mut selector = selector();
        assert!(!selector.select("humidity").expect("same"));
        assert!(selector.select("windSpeed").expect("change"));
        assert_eq!(selector.value(), "windSpeed");
    }

    #[test]
    fn unknown_option_keeps_current_value() {
        let mut selector = selector();
        let err = selector.select("pressure").unwrap_err();
        assert!(matches!(err, PlotError::UnknownMetric(name) if name == "pressure"));
        assert_eq!(selector.value(), "humidity");
    }

    #[test]
    fn duplicate_options_are_rejected() {
        let result = MetricSelector::new(vec!["a".into(), "a".into()], "a");
        assert!(result.is_err());
    }
}

use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{PlotError, PlotResult};

/// Label text used when a record lacks the requested field.
pub const MISSING_FIELD_TEXT: &str = "n/a";

/// Where a record keeps its named metric fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordLayout {
    /// Metrics are top-level keys of each record.
    Flat,
    /// Metrics live in the first entry of `daily.data`, as in daily weather
    /// forecast exports.
    #[default]
    DailySummary,
}

/// One dataset record, reduced to its named metric fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Record {
    fields: IndexMap<String, Value>,
}

impl Record {
    #[must_use]
    pub fn new(fields: IndexMap<String, Value>) -> Self {
        Self { fields }
    }

    /// Builds a record of numeric fields; handy for in-memory datasets.
    #[must_use]
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, f64)>) -> Self {
        let fields = pairs
            .into_iter()
            .map(|(name, value)| {
                let value = serde_json::Number::from_f64(value).map_or(Value::Null, Value::Number);
                (name.to_owned(), value)
            })
            .collect();
        Self { fields }
    }

    fn from_json(index: usize, value: Value, layout: RecordLayout) -> PlotResult<Self> {
        let summary = match layout {
            RecordLayout::Flat => value,
            RecordLayout::DailySummary => {
                let mut value = value;
                value
                    .get_mut("daily")
                    .and_then(|daily| daily.get_mut("data"))
                    .and_then(|data| data.get_mut(0))
                    .map(Value::take)
                    .ok_or_else(|| {
                        PlotError::InvalidData(format!("record {index}: missing `daily.data[0]`"))
                    })?
            }
        };

        match summary {
            Value::Object(map) => Ok(Self {
                fields: map.into_iter().collect(),
            }),
            other => Err(PlotError::InvalidData(format!(
                "record {index}: expected an object of metric fields, got {}",
                json_kind(&other)
            ))),
        }
    }

    #[must_use]
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Numeric value of a metric; NaN when the field is missing, not numeric
    /// or spells a non-finite value such as `"inf"`.
    #[must_use]
    pub fn metric(&self, name: &str) -> f64 {
        let value = match self.fields.get(name) {
            Some(Value::Number(number)) => number.as_f64(),
            Some(Value::String(text)) => text.trim().parse::<f64>().ok(),
            _ => None,
        };
        value.filter(|value| value.is_finite()).unwrap_or(f64::NAN)
    }

    /// Metric value as written in the source, for label text.
    #[must_use]
    pub fn metric_text(&self, name: &str) -> String {
        match self.fields.get(name) {
            Some(Value::String(text)) => text.clone(),
            Some(Value::Number(number)) => match number.as_f64() {
                // f64 Display drops the trailing ".0": 5.0 reads as "5".
                Some(value) => value.to_string(),
                None => number.to_string(),
            },
            Some(Value::Null) | None => MISSING_FIELD_TEXT.to_owned(),
            Some(other) => other.to_string(),
        }
    }
}

/// Ordered, immutable sequence of records loaded once per session.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    #[must_use]
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Reads a JSON array of records laid out as `layout` describes.
    pub fn from_json(value: Value, layout: RecordLayout) -> PlotResult<Self> {
        let Value::Array(items) = value else {
            return Err(PlotError::InvalidData(format!(
                "dataset must be a JSON array, got {}",
                json_kind(&value)
            )));
        };

        let records = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| Record::from_json(index, item, layout))
            .collect::<PlotResult<Vec<_>>>()?;
        Ok(Self { records })
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Largest finite value of `metric`; `None` when no record has one.
    #[must_use]
    pub fn max(&self, metric: &str) -> Option<f64> {
        self.records
            .iter()
            .map(|record| record.metric(metric))
            .filter(|value| value.is_finite())
            .map(OrderedFloat)
            .max()
            .map(OrderedFloat::into_inner)
    }

    /// Names of numeric fields on the first record, in source order.
    #[must_use]
    pub fn numeric_metric_names(&self) -> Vec<String> {
        let Some(first) = self.records.first() else {
            return Vec::new();
        };
        first
            .field_names()
            .filter(|name| first.metric(name).is_finite())
            .map(str::to_owned)
            .collect()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{Dataset, MISSING_FIELD_TEXT, Record, RecordLayout};

    #[test]
    fn daily_summary_layout_reads_first_daily_entry() {
        let raw = json!([
            {"daily": {"data": [{"humidity": 0.61, "apparentTemperatureHigh": 71.3}]}},
            {"daily": {"data": [{"humidity": 0.74, "apparentTemperatureHigh": 64.0}]}}
        ]);
        let dataset = Dataset::from_json(raw, RecordLayout::DailySummary).expect("dataset");
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records()[1].metric("humidity"), 0.74);
        assert_eq!(dataset.max("apparentTemperatureHigh"), Some(71.3));
    }

    #[test]
    fn missing_daily_block_is_rejected() {
        let raw = json!([{"daily": {"data": []}}]);
        let err = Dataset::from_json(raw, RecordLayout::DailySummary).unwrap_err();
        assert!(err.to_string().contains("record 0"));
    }

    #[test]
    fn string_fields_are_numeric_and_kept_verbatim() {
        let raw = json!([{"GrLivArea": "1710", "SalePrice": "208500"}]);
        let dataset = Dataset::from_json(raw, RecordLayout::Flat).expect("dataset");
        let record = &dataset.records()[0];
        assert_eq!(record.metric("GrLivArea"), 1710.0);
        assert_eq!(record.metric_text("SalePrice"), "208500");
    }

    #[test]
    fn missing_metric_is_nan_and_ignored_by_max() {
        let dataset = Dataset::new(vec![
            Record::from_pairs([("x", 3.0)]),
            Record::from_pairs([("y", 9.0)]),
        ]);
        assert!(dataset.records()[1].metric("x").is_nan());
        assert_eq!(dataset.records()[1].metric_text("x"), MISSING_FIELD_TEXT);
        assert_eq!(dataset.max("x"), Some(3.0));
        assert_eq!(dataset.max("z"), None);
    }

    #[test]
    fn non_finite_strings_read_as_missing() {
        let raw = json!([
            {"x": "inf", "y": "NaN", "z": "-Infinity", "w": 4.0},
            {"x": "2", "y": "infinity", "z": "3", "w": 1.0}
        ]);
        let dataset = Dataset::from_json(raw, RecordLayout::Flat).expect("dataset");
        let first = &dataset.records()[0];

        assert!(first.metric("x").is_nan());
        assert!(first.metric("y").is_nan());
        assert!(first.metric("z").is_nan());
        assert_eq!(first.metric_text("x"), "inf");
        assert_eq!(dataset.max("x"), Some(2.0));
        assert_eq!(dataset.max("y"), None);
        assert_eq!(dataset.numeric_metric_names(), vec!["w"]);
    }

    #[test]
    fn numeric_metric_names_skip_text_fields() {
        let raw = json!([{"summary": "Clear", "humidity": 0.5, "pressure": 1012.3}]);
        let dataset = Dataset::from_json(raw, RecordLayout::Flat).expect("dataset");
        assert_eq!(dataset.numeric_metric_names(), vec!["humidity", "pressure"]);
    }
}

// File: crates/minichart-core/src/config.rs
// Summary: Declarative chart configuration (type, labels, datasets, options) with lenient JSON coercion.
// Notes:
// - Accepts the configuration shape written for full-featured web chart libraries;
//   unknown keys (plugins, scales, interaction, ...) are ignored.
// - Dirty data never fails deserialization: values coerce to numbers, bad entries to 0.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::ChartResult;
use crate::geometry::clamp;

/// Largest cutout fraction; always leaves a visible ring.
pub const MAX_CUTOUT: f32 = 0.95;

/// Closed set of chart kinds; anything unrecognized keeps its raw name.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub enum ChartType {
    Doughnut,
    Pie,
    Bar,
    Line,
    Unknown(String),
}

impl ChartType {
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "doughnut" => Self::Doughnut,
            "pie" => Self::Pie,
            "bar" => Self::Bar,
            "line" => Self::Line,
            _ => Self::Unknown(name.to_owned()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Doughnut => "doughnut",
            Self::Pie => "pie",
            Self::Bar => "bar",
            Self::Line => "line",
            Self::Unknown(raw) => raw,
        }
    }
}

impl Default for ChartType {
    fn default() -> Self { Self::Unknown(String::new()) }
}

impl From<Value> for ChartType {
    fn from(v: Value) -> Self {
        match v {
            Value::String(s) => Self::parse(&s),
            Value::Null => Self::default(),
            other => Self::Unknown(other.to_string()),
        }
    }
}

/// One color for every item, or one color per item (gaps allowed).
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub enum ColorSpec {
    Single(String),
    PerItem(Vec<Option<String>>),
}

impl ColorSpec {
    pub fn single(color: impl Into<String>) -> Self {
        Self::Single(color.into())
    }

    pub fn per_item<I, C>(colors: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<String>,
    {
        Self::PerItem(colors.into_iter().map(|c| Some(c.into())).collect())
    }

    /// Color for item `index`; a single color applies to every item.
    pub fn at(&self, index: usize) -> Option<&str> {
        match self {
            Self::Single(c) => Some(c),
            Self::PerItem(list) => list.get(index).and_then(|c| c.as_deref()),
        }
    }

    /// Color for a whole series: the single color or the first list entry.
    pub fn first(&self) -> Option<&str> {
        self.at(0)
    }
}

impl From<Value> for ColorSpec {
    fn from(v: Value) -> Self {
        match v {
            Value::String(s) => Self::Single(s),
            Value::Array(items) => Self::PerItem(
                items
                    .into_iter()
                    .map(|i| match i {
                        Value::String(s) => Some(s),
                        _ => None,
                    })
                    .collect(),
            ),
            _ => Self::PerItem(Vec::new()),
        }
    }
}

/// Doughnut hole size as written in the configuration.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub enum Cutout {
    /// `"60%"` style, stored as the percentage number.
    Percent(f32),
    /// Bare number or numeric string.
    Number(f32),
    Invalid,
}

impl Cutout {
    /// Fraction of the outer radius, clamped to `[0, MAX_CUTOUT]`.
    /// `None` when the value is not a percentage or a fraction in `[0, 1)`.
    pub fn fraction(self) -> Option<f32> {
        match self {
            Self::Percent(p) if p.is_finite() => Some(clamp(p / 100.0, 0.0, MAX_CUTOUT)),
            Self::Number(n) if (0.0..1.0).contains(&n) => Some(clamp(n, 0.0, MAX_CUTOUT)),
            _ => None,
        }
    }
}

impl From<Value> for Cutout {
    fn from(v: Value) -> Self {
        match v {
            Value::String(s) => {
                let s = s.trim();
                match s.strip_suffix('%') {
                    Some(p) => p.trim().parse::<f32>().map(Self::Percent).unwrap_or(Self::Invalid),
                    None => s.parse::<f32>().map(Self::Number).unwrap_or(Self::Invalid),
                }
            }
            Value::Number(n) => n.as_f64().map(|f| Self::Number(f as f32)).unwrap_or(Self::Invalid),
            _ => Self::Invalid,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    /// Redraw on host resize notifications. Only an explicit `false` disables it.
    #[serde(deserialize_with = "not_false")]
    pub responsive: bool,
    pub cutout: Option<Cutout>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self { responsive: true, cutout: None }
    }
}

impl ChartOptions {
    pub fn with_responsive(mut self, responsive: bool) -> Self {
        self.responsive = responsive;
        self
    }

    pub fn with_cutout(mut self, cutout: Cutout) -> Self {
        self.cutout = Some(cutout);
        self
    }

    /// Inner radius fraction for `chart_type`: pie is solid, doughnut uses the
    /// configured cutout. A missing or unusable cutout leaves the disk solid.
    pub fn cutout_fraction(&self, chart_type: &ChartType) -> f32 {
        match chart_type {
            ChartType::Doughnut => self
                .cutout
                .and_then(Cutout::fraction)
                .unwrap_or(0.0),
            _ => 0.0,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Dataset {
    #[serde(deserialize_with = "lenient_string")]
    pub label: String,
    #[serde(deserialize_with = "coerce_values")]
    pub data: Vec<f64>,
    pub background_color: Option<ColorSpec>,
    pub border_color: Option<ColorSpec>,
}

impl Dataset {
    pub fn new(label: impl Into<String>, data: impl Into<Vec<f64>>) -> Self {
        Self { label: label.into(), data: data.into(), ..Self::default() }
    }

    pub fn with_background(mut self, color: ColorSpec) -> Self {
        self.background_color = Some(color);
        self
    }

    pub fn with_border(mut self, color: ColorSpec) -> Self {
        self.border_color = Some(color);
        self
    }

    /// Value at `index`; missing or non-finite entries read as 0.
    pub fn value_at(&self, index: usize) -> f64 {
        self.data.get(index).copied().filter(|v| v.is_finite()).unwrap_or(0.0)
    }

    /// Values usable as magnitudes: negatives and non-finite entries become 0.
    pub fn magnitudes(&self) -> Vec<f64> {
        (0..self.data.len()).map(|i| self.value_at(i).max(0.0)).collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartData {
    #[serde(deserialize_with = "coerce_labels")]
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    pub data: ChartData,
    pub options: ChartOptions,
}

impl ChartConfig {
    pub fn new<I, L>(chart_type: ChartType, labels: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self {
            chart_type,
            data: ChartData { labels: labels.into_iter().map(Into::into).collect(), datasets: Vec::new() },
            options: ChartOptions::default(),
        }
    }

    pub fn with_dataset(mut self, dataset: Dataset) -> Self {
        self.data.datasets.push(dataset);
        self
    }

    pub fn with_options(mut self, options: ChartOptions) -> Self {
        self.options = options;
        self
    }

    /// Parse a JSON configuration document.
    pub fn from_json(input: &str) -> ChartResult<Self> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn labels(&self) -> &[String] {
        &self.data.labels
    }

    pub fn datasets(&self) -> &[Dataset] {
        &self.data.datasets
    }

    pub fn first_dataset(&self) -> Option<&Dataset> {
        self.data.datasets.first()
    }
}

/// JS-style `Number(v) || 0`, restricted to finite results.
pub fn coerce_number(v: &Value) -> f64 {
    let n = match v {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => {
            let t = s.trim();
            if t.is_empty() { 0.0 } else { t.parse::<f64>().unwrap_or(0.0) }
        }
        Value::Bool(true) => 1.0,
        _ => 0.0,
    };
    if n.is_finite() { n } else { 0.0 }
}

fn label_text(v: Value) -> String {
    match v {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn coerce_values<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<f64>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Array(items) => items.iter().map(coerce_number).collect(),
        _ => Vec::new(),
    })
}

fn coerce_labels<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Array(items) => items.into_iter().map(label_text).collect(),
        _ => Vec::new(),
    })
}

fn lenient_string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Value::deserialize(d).map(label_text)
}

fn not_false<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    Ok(!matches!(Value::deserialize(d)?, Value::Bool(false)))
}

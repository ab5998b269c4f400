use serde::{Deserialize, Serialize};

/// Namespace prefix of ISO 4217 currency measures.
const ISO4217_PREFIX: &str = "iso4217:";

/// Fact identifier — unique within a report instance.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FactId(pub String);

impl FactId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FactId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The value of a fact as handed over by the document parser.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FactValue {
    Number(f64),
    Text(String),
    /// xsi:nil facts
    Nil,
}

impl FactValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FactValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

/// An aspect value together with its display label.
///
/// Labels are resolved by the caller (taxonomy lookups, period formatting)
/// and carried here verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aspect {
    /// Raw value, e.g. a concept QName or `2017-01-01/2018-01-01`
    pub value: String,
    /// Display label of the value
    pub label: String,
}

impl Aspect {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Names the aspect of a fact to look up.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AspectName {
    Concept,
    Period,
    Unit,
    /// A taxonomy-defined dimension, by identifier (e.g. `eg:SegmentAxis`)
    Dimension(String),
}

impl std::fmt::Display for AspectName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AspectName::Concept => write!(f, "concept"),
            AspectName::Period => write!(f, "period"),
            AspectName::Unit => write!(f, "unit"),
            AspectName::Dimension(name) => write!(f, "{}", name),
        }
    }
}

/// Unit of a numeric fact: the measure QName (e.g. `iso4217:USD` or
/// `xbrli:shares`) as the aspect value, with its display label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Unit(Aspect);

impl Unit {
    pub fn new(measure: impl Into<String>, label: impl Into<String>) -> Self {
        Self(Aspect::new(measure, label))
    }

    /// A currency unit labelled by its code.
    pub fn currency(code: &str) -> Self {
        Self::new(format!("{}{}", ISO4217_PREFIX, code), code)
    }

    pub fn measure(&self) -> &str {
        &self.0.value
    }

    pub fn label(&self) -> &str {
        &self.0.label
    }

    pub fn as_aspect(&self) -> &Aspect {
        &self.0
    }

    /// Whether the measure is an ISO 4217 currency.
    pub fn is_monetary(&self) -> bool {
        self.measure().starts_with(ISO4217_PREFIX)
    }

    /// Currency code of a monetary unit.
    pub fn currency_code(&self) -> Option<&str> {
        self.measure().strip_prefix(ISO4217_PREFIX)
    }
}

/// A fact from an inline XBRL report.
///
/// Facts are read-only once built; the `with_*` methods are for construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Fact {
    pub id: FactId,
    pub value: FactValue,
    pub concept: Aspect,
    pub period: Aspect,
    #[serde(default)]
    pub unit: Option<Unit>,
    /// Dimension identifier → value, in document order
    #[serde(default)]
    pub dimensions: Vec<(String, Aspect)>,
    /// Declared accuracy (`decimals` attribute)
    #[serde(default)]
    pub decimals: Option<i32>,
    /// Declared power-of-ten scale (`scale` attribute)
    #[serde(default)]
    pub scale: Option<i32>,
}

impl Fact {
    pub fn new(id: impl Into<String>, concept: Aspect, period: Aspect) -> Self {
        Self {
            id: FactId::new(id),
            value: FactValue::Nil,
            concept,
            period,
            unit: None,
            dimensions: Vec::new(),
            decimals: None,
            scale: None,
        }
    }

    pub fn with_value(mut self, value: FactValue) -> Self {
        self.value = value;
        self
    }

    pub fn with_number(self, value: f64) -> Self {
        self.with_value(FactValue::Number(value))
    }

    pub fn with_text(self, value: impl Into<String>) -> Self {
        self.with_value(FactValue::Text(value.into()))
    }

    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = Some(unit);
        self
    }

    /// Set a dimension value. A dimension that is already present keeps its
    /// position and has its value replaced.
    pub fn with_dimension(mut self, name: impl Into<String>, value: Aspect) -> Self {
        let name = name.into();
        match self.dimensions.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.dimensions.push((name, value)),
        }
        self
    }

    pub fn with_decimals(mut self, decimals: i32) -> Self {
        self.decimals = Some(decimals);
        self
    }

    pub fn with_scale(mut self, scale: i32) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Declared scale, 0 when absent.
    pub fn scale(&self) -> i32 {
        self.scale.unwrap_or(0)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self.value, FactValue::Number(_))
    }

    pub fn is_monetary(&self) -> bool {
        self.unit.as_ref().is_some_and(Unit::is_monetary)
    }

    /// Look up one of the fact's aspects.
    pub fn aspect(&self, name: &AspectName) -> Option<&Aspect> {
        match name {
            AspectName::Concept => Some(&self.concept),
            AspectName::Period => Some(&self.period),
            AspectName::Unit => self.unit.as_ref().map(Unit::as_aspect),
            AspectName::Dimension(dim) => self.dimension(dim),
        }
    }

    pub fn dimension(&self, name: &str) -> Option<&Aspect> {
        self.dimensions
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, aspect)| aspect)
    }

    /// Identifiers of the dimensions present on this fact, in document order.
    pub fn dimension_names(&self) -> impl Iterator<Item = &str> {
        self.dimensions.iter().map(|(n, _)| n.as_str())
    }
}

//! Scale filter menu.
//!
//! Facts declare a power-of-ten `scale`; the viewer offers a menu of the
//! scales present in the report, each named after its bucket ("Thousands",
//! "Millions", ...). A few exponents are named differently for monetary and
//! non-monetary facts, so the name depends on which kinds of fact use it.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::Fact;

/// Bucket names for one scale exponent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScaleName {
    pub exponent: i32,
    /// Name used for monetary facts
    pub monetary: &'static str,
    /// Name used for all other facts
    pub non_monetary: &'static str,
}

const fn same(exponent: i32, name: &'static str) -> ScaleName {
    ScaleName {
        exponent,
        monetary: name,
        non_monetary: name,
    }
}

/// Named scale buckets. Exponents not listed are shown as plain numbers.
pub static SCALE_NAMES: &[ScaleName] = &[
    same(-3, "Thousandths"),
    ScaleName {
        exponent: -2,
        monetary: "Cents",
        non_monetary: "Hundredths",
    },
    same(-1, "Tenths"),
    same(1, "Tens"),
    same(2, "Hundreds"),
    same(3, "Thousands"),
    same(4, "Ten Thousands"),
    same(5, "Hundred Thousands"),
    same(6, "Millions"),
    same(7, "Ten Millions"),
    same(8, "Hundred Millions"),
    same(9, "Billions"),
];

/// Which kinds of fact use a scale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScaleUsage {
    pub monetary: bool,
    pub non_monetary: bool,
}

impl ScaleUsage {
    fn record(&mut self, fact: &Fact) {
        if fact.is_monetary() {
            self.monetary = true;
        } else {
            self.non_monetary = true;
        }
    }
}

/// Restricts the facts considered for the scale menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitFilter {
    #[default]
    Any,
    Monetary,
    NonMonetary,
}

impl UnitFilter {
    pub fn matches(&self, fact: &Fact) -> bool {
        match self {
            UnitFilter::Any => true,
            UnitFilter::Monetary => fact.is_monetary(),
            UnitFilter::NonMonetary => !fact.is_monetary(),
        }
    }
}

/// Name of the scale bucket for `exponent`, given the kinds of fact using it.
///
/// Used by one kind only, that kind's name is used; used by both, the two
/// names are joined when they differ. Unnamed exponents fall back to their
/// number.
pub fn scale_name(exponent: i32, usage: ScaleUsage) -> String {
    let Some(entry) = SCALE_NAMES.iter().find(|s| s.exponent == exponent) else {
        return exponent.to_string();
    };

    match (usage.monetary, usage.non_monetary) {
        (true, true) if entry.monetary != entry.non_monetary => {
            format!("{}, {}", entry.monetary, entry.non_monetary)
        }
        (true, _) => entry.monetary.to_string(),
        (false, _) => entry.non_monetary.to_string(),
    }
}

/// Scale menu for `facts`: every non-zero declared scale among the facts
/// matching `filter`, mapped to its bucket name, in ascending exponent order.
pub fn scales_options<'a>(
    facts: impl IntoIterator<Item = &'a Fact>,
    filter: UnitFilter,
) -> BTreeMap<i32, String> {
    let mut usage: BTreeMap<i32, ScaleUsage> = BTreeMap::new();
    for fact in facts.into_iter().filter(|f| filter.matches(f)) {
        let scale = fact.scale();
        // 0 means no scale declared
        if scale != 0 {
            usage.entry(scale).or_default().record(fact);
        }
    }

    let options: BTreeMap<i32, String> = usage
        .into_iter()
        .map(|(exponent, usage)| (exponent, scale_name(exponent, usage)))
        .collect();

    debug!(
        filter = ?filter,
        options = options.len(),
        "Built scale filter options"
    );
    options
}

/// The scales chosen in the scale filter menu.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleSelection {
    scales: BTreeSet<i32>,
}

impl ScaleSelection {
    pub fn new(scales: impl IntoIterator<Item = i32>) -> Self {
        Self {
            scales: scales.into_iter().collect(),
        }
    }

    pub fn select(&mut self, scale: i32) {
        self.scales.insert(scale);
    }

    pub fn deselect(&mut self, scale: i32) {
        self.scales.remove(&scale);
    }

    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }

    /// An empty selection matches every fact.
    pub fn matches(&self, fact: &Fact) -> bool {
        self.scales.is_empty() || self.scales.contains(&fact.scale())
    }
}

/// Facts whose declared scale is in `selection`.
pub fn select_by_scale<'a>(
    facts: impl IntoIterator<Item = &'a Fact>,
    selection: &'a ScaleSelection,
) -> impl Iterator<Item = &'a Fact> {
    facts.into_iter().filter(move |f| selection.matches(f))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Aspect, Unit};

    fn scaled_fact(id: String, monetary: bool, scale: i32) -> Fact {
        let unit = if monetary {
            Unit::currency("USD")
        } else {
            Unit::new("test:shares", "shares")
        };
        let fact = Fact::new(
            id,
            Aspect::new("eg:Concept1", "English label"),
            Aspect::new("2018-01-01/2019-01-01", "2018"),
        )
        .with_number(1.0)
        .with_unit(unit);
        if scale != 0 {
            fact.with_scale(scale)
        } else {
            fact
        }
    }

    fn monetary_facts() -> Vec<Fact> {
        (-4..11)
            .map(|s| scaled_fact(format!("itemM{}", s), true, s))
            .collect()
    }

    fn non_monetary_facts() -> Vec<Fact> {
        (-4..11)
            .map(|s| scaled_fact(format!("item{}", s), false, s))
            .collect()
    }

    fn expected(minus_two: &str) -> BTreeMap<i32, String> {
        [
            (1, "Tens"),
            (2, "Hundreds"),
            (3, "Thousands"),
            (4, "Ten Thousands"),
            (5, "Hundred Thousands"),
            (6, "Millions"),
            (7, "Ten Millions"),
            (8, "Hundred Millions"),
            (9, "Billions"),
            (10, "10"),
            (-1, "Tenths"),
            (-2, minus_two),
            (-3, "Thousandths"),
            (-4, "-4"),
        ]
        .into_iter()
        .map(|(k, v)| (k, v.to_string()))
        .collect()
    }

    #[test]
    fn mixed_monetary_and_non_monetary() {
        let facts: Vec<Fact> = monetary_facts()
            .into_iter()
            .chain(non_monetary_facts())
            .collect();
        let options = scales_options(&facts, UnitFilter::Any);
        assert_eq!(options, expected("Cents, Hundredths"));
        assert!(!options.contains_key(&0));
    }

    #[test]
    fn only_monetary() {
        let options = scales_options(&monetary_facts(), UnitFilter::Any);
        assert_eq!(options, expected("Cents"));
    }

    #[test]
    fn only_non_monetary() {
        let options = scales_options(&non_monetary_facts(), UnitFilter::Any);
        assert_eq!(options, expected("Hundredths"));
    }

    #[test]
    fn filter_restricts_categories() {
        let facts: Vec<Fact> = monetary_facts()
            .into_iter()
            .chain(non_monetary_facts())
            .collect();
        assert_eq!(
            scales_options(&facts, UnitFilter::Monetary),
            expected("Cents")
        );
        assert_eq!(
            scales_options(&facts, UnitFilter::NonMonetary),
            expected("Hundredths")
        );
    }

    #[test]
    fn empty_input_gives_empty_menu() {
        assert!(scales_options(&Vec::<Fact>::new(), UnitFilter::Any).is_empty());

        let unscaled = vec![scaled_fact("f1".into(), true, 0)];
        assert!(scales_options(&unscaled, UnitFilter::Any).is_empty());
    }

    #[test]
    fn options_iterate_in_ascending_order() {
        let options = scales_options(&monetary_facts(), UnitFilter::Any);
        let keys: Vec<i32> = options.keys().copied().collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn name_rule_in_isolation() {
        let both = ScaleUsage {
            monetary: true,
            non_monetary: true,
        };
        let monetary = ScaleUsage {
            monetary: true,
            non_monetary: false,
        };
        let other = ScaleUsage {
            monetary: false,
            non_monetary: true,
        };

        assert_eq!(scale_name(-2, both), "Cents, Hundredths");
        assert_eq!(scale_name(-2, monetary), "Cents");
        assert_eq!(scale_name(-2, other), "Hundredths");
        assert_eq!(scale_name(2, both), "Hundreds");
        assert_eq!(scale_name(6, monetary), "Millions");
        assert_eq!(scale_name(12, both), "12");
        assert_eq!(scale_name(-4, other), "-4");
    }

    #[test]
    fn table_has_no_duplicate_or_zero_exponents() {
        let exponents: BTreeSet<i32> = SCALE_NAMES.iter().map(|s| s.exponent).collect();
        assert_eq!(exponents.len(), SCALE_NAMES.len());
        assert!(!exponents.contains(&0));
    }

    #[test]
    fn selection_filters_facts() {
        let facts = monetary_facts();
        let selection = ScaleSelection::new([3, 6]);
        let ids: Vec<&str> = select_by_scale(&facts, &selection)
            .map(|f| f.id.as_str())
            .collect();
        assert_eq!(ids, vec!["itemM3", "itemM6"]);
    }

    #[test]
    fn empty_selection_matches_all() {
        let facts = monetary_facts();
        let mut selection = ScaleSelection::default();
        assert!(selection.is_empty());
        assert_eq!(select_by_scale(&facts, &selection).count(), facts.len());

        selection.select(-2);
        assert_eq!(select_by_scale(&facts, &selection).count(), 1);
        selection.deselect(-2);
        assert_eq!(select_by_scale(&facts, &selection).count(), facts.len());
    }
}

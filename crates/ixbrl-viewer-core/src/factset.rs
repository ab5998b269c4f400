use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use tracing::{debug, trace};

use crate::aspect::label_row;
use crate::error::ViewerError;
use crate::types::{AspectName, Fact, FactId};

/// Separator between the aspect labels that make up a unique label.
const LABEL_SEPARATOR: &str = ", ";

/// A group of facts believed to share one concept.
///
/// The set computes, once and for all of its members together, the shortest
/// run of aspect labels that tells each fact apart from its peers. The result
/// is kept for the lifetime of the set; build a new set to recompute.
#[derive(Debug)]
pub struct FactSet {
    facts: Vec<Fact>,
    /// Fact id -> minimally unique label, filled on first access
    unique_labels: OnceLock<HashMap<FactId, String>>,
}

impl FactSet {
    /// Create a fact set. The set must be non-empty and its fact ids distinct.
    pub fn new(facts: Vec<Fact>) -> Result<Self, ViewerError> {
        if facts.is_empty() {
            return Err(ViewerError::EmptyFactSet);
        }

        let mut seen = HashSet::new();
        for fact in &facts {
            if !seen.insert(&fact.id) {
                return Err(ViewerError::DuplicateFact(fact.id.clone()));
            }
        }

        Ok(Self {
            facts,
            unique_labels: OnceLock::new(),
        })
    }

    pub fn facts(&self) -> &[Fact] {
        &self.facts
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    pub fn contains(&self, id: &FactId) -> bool {
        self.facts.iter().any(|f| f.id == *id)
    }

    /// Every aspect considered when telling facts apart: concept and period,
    /// then each dimension present on any member in first-seen order.
    pub fn all_dimensions(&self) -> Vec<AspectName> {
        let mut dims = vec![AspectName::Concept, AspectName::Period];
        let mut seen = HashSet::new();
        for fact in &self.facts {
            for name in fact.dimension_names() {
                if seen.insert(name) {
                    dims.push(AspectName::Dimension(name.to_string()));
                }
            }
        }
        dims
    }

    /// The label that distinguishes `fact` from the other members of the set.
    ///
    /// Aspect labels are joined with `", "` and are not escaped, so labels
    /// that themselves contain `", "` can make two different facts read the
    /// same.
    pub fn minimally_unique_label(&self, fact: &Fact) -> Result<&str, ViewerError> {
        self.label_for(&fact.id)
    }

    /// Same as [`FactSet::minimally_unique_label`], by fact id.
    pub fn label_for(&self, id: &FactId) -> Result<&str, ViewerError> {
        self.unique_labels()
            .get(id)
            .map(String::as_str)
            .ok_or_else(|| ViewerError::FactNotInSet(id.clone()))
    }

    /// The full fact id -> unique label map.
    pub fn unique_labels(&self) -> &HashMap<FactId, String> {
        self.unique_labels
            .get_or_init(|| self.compute_unique_labels())
    }

    fn compute_unique_labels(&self) -> HashMap<FactId, String> {
        let dims = self.all_dimensions();
        let rows: Vec<Vec<&str>> = self.facts.iter().map(|f| label_row(f, &dims)).collect();

        // None until the first discriminating dimension is folded in
        let mut unique: Vec<Option<String>> = vec![None; self.facts.len()];
        let mut have_empty = false;
        let mut folded = Vec::new();

        for (j, dim) in dims.iter().enumerate() {
            let values: HashSet<&str> = rows.iter().map(|row| row[j]).collect();
            if values.len() < 2 {
                continue;
            }

            for (acc, row) in unique.iter_mut().zip(&rows) {
                let label = row[j];
                *acc = Some(match acc.take() {
                    Some(prev) => format!("{}{}{}", prev, LABEL_SEPARATOR, label),
                    None => label.to_string(),
                });
            }
            have_empty = unique.iter().any(|l| l.as_deref() == Some(""));
            folded.push(dim);

            let distinct: HashSet<&str> = unique.iter().filter_map(|l| l.as_deref()).collect();
            trace!(
                dimension = %dim,
                distinct = distinct.len(),
                facts = self.facts.len(),
                "Folded dimension into unique labels"
            );
            if distinct.len() == self.facts.len() {
                break;
            }
        }

        // A blank label says nothing on its own; lead every label with the concept
        if have_empty {
            for (acc, row) in unique.iter_mut().zip(&rows) {
                let concept = row[0];
                *acc = Some(match acc.take() {
                    Some(label) if !label.is_empty() => {
                        format!("{}{}{}", concept, LABEL_SEPARATOR, label)
                    }
                    _ => concept.to_string(),
                });
            }
        }

        debug!(
            facts = self.facts.len(),
            dimensions = dims.len(),
            folded = folded.len(),
            concept_prefix = have_empty,
            "Computed minimally unique labels"
        );

        self.facts
            .iter()
            .zip(unique)
            .map(|(fact, label)| (fact.id.clone(), label.unwrap_or_default()))
            .collect()
    }
}

/// Partition facts into one [`FactSet`] per concept.
///
/// Sets come out in the order their concept is first seen; members keep their
/// input order.
pub fn group_by_concept(
    facts: impl IntoIterator<Item = Fact>,
) -> Result<Vec<FactSet>, ViewerError> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<Fact>> = HashMap::new();

    for fact in facts {
        let concept = fact.concept.value.clone();
        if !groups.contains_key(&concept) {
            order.push(concept.clone());
        }
        groups.entry(concept).or_default().push(fact);
    }

    order
        .into_iter()
        .filter_map(|concept| groups.remove(&concept))
        .map(FactSet::new)
        .collect()
}

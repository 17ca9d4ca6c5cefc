use crate::numbers::parse_int;
use crate::species::Species;
use phf::phf_set;
use schema::CatalogRow;
use std::collections::HashMap;

/// Values of the `evolution` cell that mean "this row evolves into nothing".
static NO_EVOLUTION: phf::Set<&'static str> = phf_set! {
    "",
    "null",
    "none",
    "false",
    "0",
};

/// A parent -> child evolution edge, keyed in the index by the child's lowercased name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub child: String,
    pub parent: String,
    pub requirement: String,
    pub quantity_required: i64,
    pub item_required: bool,
}

impl Transition {
    /// The edge a catalog row declares through its `evolution` cell, if any.
    ///
    /// This ignores whether the row itself is a species, so form rows still contribute edges.
    pub fn from_row(row: &CatalogRow) -> Option<Self> {
        let target = row.evolution.trim();
        if NO_EVOLUTION.contains(target.to_lowercase().as_str()) {
            return None;
        }

        Some(Transition {
            child: target.to_string(),
            parent: row.name.trim().to_string(),
            requirement: row.requirement.trim().to_string(),
            quantity_required: parse_int::<i64>(&row.quantity_required),
            item_required: row.item_required.trim().eq_ignore_ascii_case("yes"),
        })
    }

    pub fn child_key(&self) -> String {
        self.child.to_lowercase()
    }

    pub fn parent_key(&self) -> String {
        self.parent.to_lowercase()
    }
}

/// Both directions of the transition registry.
///
/// `by_child` answers "how is this species obtained", `by_parent` answers "what can this
/// species become". Children under one parent keep registration order.
#[derive(Debug, Clone, Default)]
pub struct TransitionIndex {
    by_child: HashMap<String, Transition>,
    by_parent: HashMap<String, Vec<String>>,
}

impl TransitionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a transition. A later transition for the same child replaces the earlier one,
    /// including its slot under the old parent.
    pub fn insert(&mut self, transition: Transition) {
        let child_key = transition.child_key();
        let parent_key = transition.parent_key();

        if let Some(previous) = self.by_child.insert(child_key.clone(), transition) {
            log::debug!(
                "transition into {:?} from {:?} replaced by a later row",
                previous.child,
                previous.parent
            );
            if let Some(children) = self.by_parent.get_mut(&previous.parent_key()) {
                children.retain(|key| key != &child_key);
            }
        }

        self.by_parent.entry(parent_key).or_default().push(child_key);
    }

    /// The transition that produces `child`, matched case-insensitively.
    pub fn for_child(&self, child: &str) -> Option<&Transition> {
        self.by_child.get(&child.to_lowercase())
    }

    /// Every transition leaving `parent`, matched case-insensitively.
    pub fn children_of<'a>(&'a self, parent: &str) -> impl Iterator<Item = &'a Transition> + 'a {
        self.by_parent
            .get(&parent.to_lowercase())
            .into_iter()
            .flatten()
            .filter_map(|child_key| self.by_child.get(child_key))
    }

    /// Cheapest positive quantity among `parent`'s outgoing transitions.
    ///
    /// A parent with several evolution paths is evolvable as soon as the cheapest one is
    /// affordable, so the minimum is its requirement.
    pub fn required_quantity(&self, parent: &str) -> Option<i64> {
        self.children_of(parent)
            .map(|transition| transition.quantity_required)
            .filter(|&quantity| quantity > 0)
            .min()
    }

    /// Quantity a species needs to evolve: its cheapest outgoing path, or the quantity on its
    /// own catalog row when no outgoing path names a positive one.
    pub fn resolved_quantity(&self, species: &Species) -> i64 {
        self.required_quantity(&species.key)
            .unwrap_or(species.quantity_required)
    }

    /// Owned, has a positive requirement, and holds at least that many.
    pub fn is_evolvable_now(&self, species: &Species) -> bool {
        let required = self.resolved_quantity(species);
        species.owned && required > 0 && species.count >= required
    }

    pub fn len(&self) -> usize {
        self.by_child.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_child.is_empty()
    }
}

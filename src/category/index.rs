use super::{Category, NodeGroup};
use crate::ids::{CategoryId, NodeGroupId};
use ahash::AHashMap;
use std::sync::LazyLock;

static EMPTY: LazyLock<CategoryIndex> = LazyLock::new(|| CategoryIndex::new(&[]));

/// Constant-time lookup of categories and node groups that keeps the
/// caller-supplied category order for display.
#[derive(Debug, Clone)]
pub struct CategoryIndex {
    categories: Vec<Category>,
    by_id: AHashMap<CategoryId, usize>,
    groups_by_id: AHashMap<NodeGroupId, (usize, usize)>,
}

impl CategoryIndex {
    /// Builds the index from a copy of `categories`.
    ///
    /// On duplicate ids the last category (or group) wins.
    pub fn new(categories: &[Category]) -> Self {
        let categories = categories.to_vec();

        let by_id = categories
            .iter()
            .enumerate()
            .map(|(index, category)| (category.id.clone(), index))
            .collect();

        let groups_by_id = categories
            .iter()
            .enumerate()
            .flat_map(|(category_index, category)| {
                category
                    .groups
                    .iter()
                    .enumerate()
                    .map(move |(group_index, group)| {
                        (group.id.clone(), (category_index, group_index))
                    })
            })
            .collect();

        Self {
            categories,
            by_id,
            groups_by_id,
        }
    }

    /// The shared index used while no categories are loaded.
    pub fn empty() -> &'static CategoryIndex {
        &EMPTY
    }

    /// All categories in their original order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn get(&self, id: &CategoryId) -> Option<&Category> {
        self.by_id.get(id).map(|&index| &self.categories[index])
    }

    pub fn get_group(&self, id: &NodeGroupId) -> Option<&NodeGroup> {
        self.groups_by_id
            .get(id)
            .map(|&(category, group)| &self.categories[category].groups[group])
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for CategoryIndex {
    fn default() -> Self {
        Self::new(&[])
    }
}

impl From<Vec<Category>> for CategoryIndex {
    fn from(categories: Vec<Category>) -> Self {
        Self::new(&categories)
    }
}

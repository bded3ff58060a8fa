//! Category summary used by the `view_menu` tool.

use crate::menu::domain::MenuItem;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    pub category: String,
    pub names: Vec<String>,
}

/// Group item names by category, categories in first-seen order.
pub fn group_by_category(items: &[MenuItem]) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = Vec::new();
    for item in items {
        match groups.iter_mut().find(|g| g.category == item.category) {
            Some(group) => group.names.push(item.name.clone()),
            None => groups.push(CategoryGroup {
                category: item.category.clone(),
                names: vec![item.name.clone()],
            }),
        }
    }
    groups
}

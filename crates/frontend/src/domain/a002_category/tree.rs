//! Category tree helpers: table rows with depth and parent-picker options.

use contracts::domain::a002_category::Category;
use std::collections::{HashMap, HashSet};

/// One category as a table row; `children` is always empty here.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRow {
    pub depth: usize,
    pub child_count: usize,
    pub category: Category,
}

impl CategoryRow {
    /// Name indented by depth, for `<option>` labels.
    pub fn indented_name(&self) -> String {
        format!("{}{}", "\u{2014} ".repeat(self.depth), self.category.name)
    }
}

/// Nests a flat list by `parent_id`. Input that is already a tree (every
/// top-level node is a root) is returned unchanged. Nodes whose parent is
/// missing become roots.
pub fn build_tree(items: Vec<Category>) -> Vec<Category> {
    if items.iter().all(|c| c.parent_id.is_none()) {
        return items;
    }

    let ids: HashSet<i64> = items.iter().map(|c| c.id).collect();
    let mut by_parent: HashMap<Option<i64>, Vec<Category>> = HashMap::new();
    for c in items {
        let parent = c.parent_id.filter(|p| *p != c.id && ids.contains(p));
        by_parent.entry(parent).or_default().push(c);
    }

    fn attach(node: &mut Category, by_parent: &mut HashMap<Option<i64>, Vec<Category>>) {
        if let Some(children) = by_parent.remove(&Some(node.id)) {
            node.children.extend(children);
        }
        for child in node.children.iter_mut() {
            attach(child, by_parent);
        }
    }

    let mut roots = by_parent.remove(&None).unwrap_or_default();
    for root in roots.iter_mut() {
        attach(root, &mut by_parent);
    }
    // Parent cycles never reach a root
    roots.extend(by_parent.into_values().flatten());
    roots
}

/// Depth-first rows, parents before their children.
pub fn flatten(tree: &[Category]) -> Vec<CategoryRow> {
    fn push_rows(nodes: &[Category], depth: usize, out: &mut Vec<CategoryRow>) {
        for node in nodes {
            out.push(CategoryRow {
                depth,
                child_count: node.children.len(),
                category: Category {
                    id: node.id,
                    name: node.name.clone(),
                    description: node.description.clone(),
                    parent_id: node.parent_id,
                    image_url: node.image_url.clone(),
                    children: Vec::new(),
                },
            });
            push_rows(&node.children, depth + 1, out);
        }
    }

    let mut out = Vec::new();
    push_rows(tree, 0, &mut out);
    out
}

fn find(nodes: &[Category], id: i64) -> Option<&Category> {
    nodes.iter().find_map(|n| {
        if n.id == id {
            Some(n)
        } else {
            find(&n.children, id)
        }
    })
}

/// `id` plus the ids of all its descendants.
pub fn subtree_ids(tree: &[Category], id: i64) -> HashSet<i64> {
    fn collect(node: &Category, out: &mut HashSet<i64>) {
        for child in &node.children {
            out.insert(child.id);
            collect(child, out);
        }
    }

    let mut out = HashSet::from([id]);
    if let Some(node) = find(tree, id) {
        collect(node, &mut out);
    }
    out
}

/// Categories that may become the parent of `editing`: a category cannot
/// move under itself or one of its descendants.
pub fn parent_options(tree: &[Category], editing: Option<i64>) -> Vec<CategoryRow> {
    let excluded = editing
        .map(|id| subtree_ids(tree, id))
        .unwrap_or_default();
    flatten(tree)
        .into_iter()
        .filter(|row| !excluded.contains(&row.category.id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat(id: i64, name: &str, parent_id: Option<i64>, children: Vec<Category>) -> Category {
        Category {
            id,
            name: name.to_string(),
            description: None,
            parent_id,
            image_url: None,
            children,
        }
    }

    /// Clothing(1) > Men(2) > Shirts(4); Clothing(1) > Women(3); Shoes(5)
    fn sample() -> Vec<Category> {
        vec![
            cat(
                1,
                "Clothing",
                None,
                vec![
                    cat(2, "Men", Some(1), vec![cat(4, "Shirts", Some(2), vec![])]),
                    cat(3, "Women", Some(1), vec![]),
                ],
            ),
            cat(5, "Shoes", None, vec![]),
        ]
    }

    #[test]
    fn test_flatten_is_depth_first_with_depth() {
        let rows = flatten(&sample());
        let got: Vec<(i64, usize)> = rows.iter().map(|r| (r.category.id, r.depth)).collect();
        assert_eq!(got, vec![(1, 0), (2, 1), (4, 2), (3, 1), (5, 0)]);
        assert_eq!(rows[0].child_count, 2);
        assert!(rows.iter().all(|r| r.category.children.is_empty()));
        assert_eq!(rows[2].indented_name(), "\u{2014} \u{2014} Shirts");
    }

    #[test]
    fn test_subtree_ids() {
        assert_eq!(subtree_ids(&sample(), 1), HashSet::from([1, 2, 3, 4]));
        assert_eq!(subtree_ids(&sample(), 4), HashSet::from([4]));
        assert_eq!(subtree_ids(&sample(), 99), HashSet::from([99]));
    }

    #[test]
    fn test_parent_options_exclude_self_and_descendants() {
        let ids: Vec<i64> = parent_options(&sample(), Some(2))
            .iter()
            .map(|r| r.category.id)
            .collect();
        assert_eq!(ids, vec![1, 3, 5]);
        assert_eq!(parent_options(&sample(), None).len(), 5);
    }

    #[test]
    fn test_build_tree_from_flat_list() {
        let flat = vec![
            cat(4, "Shirts", Some(2), vec![]),
            cat(1, "Clothing", None, vec![]),
            cat(2, "Men", Some(1), vec![]),
            cat(7, "Orphan", Some(42), vec![]),
        ];
        let tree = build_tree(flat);
        let rows: Vec<(i64, usize)> = flatten(&tree)
            .iter()
            .map(|r| (r.category.id, r.depth))
            .collect();
        assert_eq!(rows, vec![(1, 0), (2, 1), (4, 2), (7, 0)]);
    }

    #[test]
    fn test_build_tree_keeps_nested_input() {
        assert_eq!(build_tree(sample()), sample());
    }
}

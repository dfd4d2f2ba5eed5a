//! Tree Utilities
//!
//! Node paths, expansion state and row layout for the navigation tree.

use std::collections::HashSet;

use crate::icons::Icon;
use crate::models::NavNode;

/// Name of the top-level entry highlighted as the current page
pub const CURRENT_PAGE: &str = "Dashboard";

/// Path of a node: its name at the root, `parent.name` below
pub fn node_path(parent: Option<&str>, name: &str) -> String {
    match parent {
        Some(parent) if !parent.is_empty() => format!("{}.{}", parent, name),
        _ => name.to_string(),
    }
}

/// Set of expanded node paths
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpansionState {
    paths: HashSet<String>,
}

impl ExpansionState {
    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    /// Flip membership of `path`. Returns whether it is now expanded.
    pub fn toggle(&mut self, path: &str) -> bool {
        if self.paths.remove(path) {
            false
        } else {
            self.paths.insert(path.to_string());
            true
        }
    }

    /// Toggle a clicked row. Leaf rows leave the state untouched.
    pub fn toggle_row(&mut self, path: &str, has_children: bool) -> bool {
        if !has_children {
            return false;
        }
        self.toggle(path);
        true
    }
}

/// One rendered row of the navigation tree
#[derive(Debug, Clone, PartialEq)]
pub struct MenuRow {
    /// Position in the tree as child indices (`"1.0"`); unique per row
    pub key: String,
    /// Expansion key; may repeat when sibling names repeat
    pub path: String,
    pub name: String,
    pub icon: Icon,
    pub depth: usize,
    pub has_children: bool,
    pub expanded: bool,
    /// Every ancestor is expanded
    pub visible: bool,
}

/// Flatten the forest into rows using recursive DFS.
/// Every node yields exactly one row, parents before their children.
pub fn flatten_menu(nodes: &[NavNode], expanded: &ExpansionState) -> Vec<MenuRow> {
    fn collect(
        nodes: &[NavNode],
        parent_key: Option<&str>,
        parent: Option<&str>,
        depth: usize,
        visible: bool,
        expanded: &ExpansionState,
        result: &mut Vec<MenuRow>,
    ) {
        for (index, node) in nodes.iter().enumerate() {
            let key = match parent_key {
                Some(parent_key) => format!("{}.{}", parent_key, index),
                None => index.to_string(),
            };
            let path = node_path(parent, &node.name);
            let is_expanded = expanded.contains(&path);
            result.push(MenuRow {
                key: key.clone(),
                path: path.clone(),
                name: node.name.clone(),
                icon: node.icon,
                depth,
                has_children: node.has_children(),
                expanded: is_expanded,
                visible,
            });
            collect(&node.children, Some(&key), Some(&path), depth + 1, visible && is_expanded, expanded, result);
        }
    }

    let mut result = Vec::new();
    collect(nodes, None, None, 0, true, expanded, &mut result);
    result
}

/// Left padding of a row in rem. Collapsed rows all sit at level 0.
pub fn indent_rem(depth: usize, collapsed: bool) -> f32 {
    if collapsed {
        0.75
    } else {
        (depth + 1) as f32 * 0.75
    }
}

pub fn is_current_page(name: &str, depth: usize) -> bool {
    depth == 0 && name == CURRENT_PAGE
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(name: &str) -> NavNode {
        NavNode { name: name.to_string(), icon: Icon::Home, children: vec![] }
    }

    fn branch(name: &str, children: Vec<NavNode>) -> NavNode {
        NavNode { name: name.to_string(), icon: Icon::Home, children }
    }

    fn sample_forest() -> Vec<NavNode> {
        vec![
            leaf("Dashboard"),
            branch("Finance", vec![
                branch("Reports", vec![leaf("Quarterly")]),
                leaf("Budget"),
            ]),
            branch("Sales", vec![leaf("Orders")]),
        ]
    }

    #[test]
    fn test_node_path() {
        assert_eq!(node_path(None, "Finance"), "Finance");
        assert_eq!(node_path(Some("Finance"), "Reports"), "Finance.Reports");
        assert_eq!(node_path(Some("Finance.Reports"), "Q1"), "Finance.Reports.Q1");
    }

    #[test]
    fn test_toggle_flips_membership() {
        let mut state = ExpansionState::default();
        assert!(state.toggle("Finance"));
        assert!(state.contains("Finance"));
        assert!(!state.toggle("Finance"));
        assert!(!state.contains("Finance"));
    }

    #[test]
    fn test_toggle_leaves_siblings_and_ancestors_alone() {
        let mut state = ExpansionState::default();
        state.toggle("Finance");
        state.toggle("Sales");
        state.toggle("Finance.Reports");

        state.toggle("Finance.Reports");

        assert!(state.contains("Finance"));
        assert!(state.contains("Sales"));
        assert!(!state.contains("Finance.Reports"));
    }

    #[test]
    fn test_leaf_click_is_inert() {
        let mut state = ExpansionState::default();
        assert!(!state.toggle_row("Dashboard", false));
        assert_eq!(state, ExpansionState::default());

        assert!(state.toggle_row("Finance", true));
        assert!(state.contains("Finance"));
    }

    #[test]
    fn test_flatten_menu_one_row_per_node_in_preorder() {
        let rows = flatten_menu(&sample_forest(), &ExpansionState::default());
        let paths: Vec<&str> = rows.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, vec![
            "Dashboard",
            "Finance",
            "Finance.Reports",
            "Finance.Reports.Quarterly",
            "Finance.Budget",
            "Sales",
            "Sales.Orders",
        ]);
        let depths: Vec<usize> = rows.iter().map(|r| r.depth).collect();
        assert_eq!(depths, vec![0, 0, 1, 2, 1, 0, 1]);
    }

    #[test]
    fn test_row_keys_stay_unique_when_paths_repeat() {
        let forest = vec![
            leaf("Reports"),
            leaf("Reports"),
            branch("A", vec![leaf("B")]),
            leaf("A.B"),
        ];
        let rows = flatten_menu(&forest, &ExpansionState::default());
        assert_eq!(rows.len(), 5);

        let keys: Vec<&str> = rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["0", "1", "2", "2.0", "3"]);
        let unique: HashSet<&str> = keys.iter().copied().collect();
        assert_eq!(unique.len(), rows.len());

        assert_eq!(rows[0].path, rows[1].path);
        assert_eq!(rows[3].path, rows[4].path);
    }

    #[test]
    fn test_visibility_requires_every_ancestor_expanded() {
        let mut state = ExpansionState::default();
        state.toggle("Finance.Reports");
        let rows = flatten_menu(&sample_forest(), &state);
        let quarterly = rows.iter().find(|r| r.path == "Finance.Reports.Quarterly").unwrap();
        assert!(!quarterly.visible);

        state.toggle("Finance");
        let rows = flatten_menu(&sample_forest(), &state);
        let quarterly = rows.iter().find(|r| r.path == "Finance.Reports.Quarterly").unwrap();
        assert!(quarterly.visible);
        let orders = rows.iter().find(|r| r.path == "Sales.Orders").unwrap();
        assert!(!orders.visible);
    }

    #[test]
    fn test_dashboard_finance_scenario() {
        let forest = vec![leaf("Dashboard"), branch("Finance", vec![leaf("Reports")])];
        let mut state = ExpansionState::default();

        let rows = flatten_menu(&forest, &state);
        let top: Vec<&MenuRow> = rows.iter().filter(|r| r.depth == 0).collect();
        assert_eq!(top.len(), 2);
        assert!(top[1].has_children && !top[1].expanded);
        assert!(!rows[2].visible);

        state.toggle("Finance");
        let rows = flatten_menu(&forest, &state);
        assert!(rows[1].expanded);
        assert_eq!(rows[2].name, "Reports");
        assert!(rows[2].visible);
        assert_eq!(rows[2].depth, rows[1].depth + 1);
        assert!(indent_rem(rows[2].depth, false) > indent_rem(rows[1].depth, false));
    }

    #[test]
    fn test_indent_is_flat_when_collapsed() {
        assert_eq!(indent_rem(0, false), 0.75);
        assert_eq!(indent_rem(2, false), 2.25);
        assert_eq!(indent_rem(0, true), 0.75);
        assert_eq!(indent_rem(3, true), 0.75);
    }

    #[test]
    fn test_current_page_only_at_top_level() {
        assert!(is_current_page("Dashboard", 0));
        assert!(!is_current_page("Dashboard", 1));
        assert!(!is_current_page("dashboard", 0));
    }
}

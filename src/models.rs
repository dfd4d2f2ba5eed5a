//! Frontend Models
//!
//! Menu data as served by the menu service, and its resolved form.

use serde::{Deserialize, Serialize};

use crate::icons::Icon;

/// Menu entry as returned by `GET /itemMenu`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuNode {
    #[serde(rename = "NAME")]
    pub name: String,
    #[serde(rename = "ICON", default)]
    pub icon: Option<String>,
    #[serde(rename = "SUBITEMS", default)]
    pub subitems: Option<Vec<MenuNode>>,
}

/// Menu entry ready for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct NavNode {
    pub name: String,
    pub icon: Icon,
    pub children: Vec<NavNode>,
}

impl NavNode {
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

impl From<MenuNode> for NavNode {
    fn from(node: MenuNode) -> Self {
        Self {
            icon: Icon::resolve(node.icon.as_deref()),
            name: node.name,
            children: node
                .subitems
                .unwrap_or_default()
                .into_iter()
                .map(NavNode::from)
                .collect(),
        }
    }
}

/// Resolve icon keys at every depth of the fetched forest
pub fn resolve_menu(nodes: Vec<MenuNode>) -> Vec<NavNode> {
    nodes.into_iter().map(NavNode::from).collect()
}

//! Sidebar declarations.
//!
//! A sidebar is declared as an ordered list of nodes. A node is either a
//! bare string (a document reference) or a `{ label, items }` table (a
//! category with nested nodes). Declaration order is semantically
//! meaningful: it becomes the rendered menu order and the reading order.

use serde::Deserialize;

/// Ordered list of nodes forming one named sidebar.
pub type SidebarTree = Vec<SidebarNode>;

/// One declared sidebar node.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SidebarNode {
    /// Reference to a document by registry id.
    Doc(String),
    /// Labeled grouping of nested nodes; not itself navigable.
    Category(Category),
}

/// A labeled grouping node. Categories nest without bound.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Category {
    /// Display label.
    pub label: String,
    /// Nested nodes in declaration order.
    pub items: Vec<SidebarNode>,
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    /// TOML requires a top-level table; wrap the trees like `site.toml` does.
    #[derive(Debug, Deserialize)]
    struct Wrapper {
        sidebars: BTreeMap<String, SidebarTree>,
    }

    fn parse(toml: &str) -> BTreeMap<String, SidebarTree> {
        toml::from_str::<Wrapper>(toml).unwrap().sidebars
    }

    #[test]
    fn test_parse_doc_shorthand() {
        let sidebars = parse(
            r#"
[sidebars]
docs = ["intro", "setup"]
"#,
        );

        assert_eq!(
            sidebars["docs"],
            vec![
                SidebarNode::Doc("intro".to_owned()),
                SidebarNode::Doc("setup".to_owned()),
            ]
        );
    }

    #[test]
    fn test_parse_category() {
        let sidebars = parse(
            r#"
[sidebars]
docs = [
    "intro",
    { label = "Getting Started", items = ["setup", "deploy"] },
]
"#,
        );

        let tree = &sidebars["docs"];
        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0], SidebarNode::Doc("intro".to_owned()));
        let SidebarNode::Category(category) = &tree[1] else {
            panic!("expected category, got {:?}", tree[1]);
        };
        assert_eq!(category.label, "Getting Started");
        assert_eq!(category.items.len(), 2);
    }

    #[test]
    fn test_parse_nested_categories() {
        let sidebars = parse(
            r#"
[sidebars]
docs = [
    { label = "Outer", items = [
        { label = "Inner", items = ["deep"] },
    ] },
]
"#,
        );

        let SidebarNode::Category(outer) = &sidebars["docs"][0] else {
            panic!("expected category");
        };
        let SidebarNode::Category(inner) = &outer.items[0] else {
            panic!("expected nested category");
        };
        assert_eq!(inner.label, "Inner");
        assert_eq!(inner.items, vec![SidebarNode::Doc("deep".to_owned())]);
    }

    #[test]
    fn test_parse_multiple_named_trees() {
        let sidebars = parse(
            r#"
[sidebars]
docs = ["intro"]
architecture = ["overview"]
"#,
        );

        assert_eq!(sidebars.len(), 2);
        assert!(sidebars.contains_key("docs"));
        assert!(sidebars.contains_key("architecture"));
    }

    #[test]
    fn test_parse_rejects_unknown_category_field() {
        let result = toml::from_str::<Wrapper>(
            r#"
[sidebars]
docs = [{ label = "X", items = [], href = "https://example.com" }]
"#,
        );

        assert!(result.is_err());
    }
}

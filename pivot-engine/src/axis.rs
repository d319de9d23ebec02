//! FILENAME: pivot-engine/src/axis.rs
//! Axis trees - The row and column hierarchies of a pivot table.
//!
//! Each level of an axis is one dimension (or `@values`). Nodes keep the
//! order in which their members were first seen. A subtotal node stands
//! for all members of its level and repeats the deeper levels below it.

use analytics_model::{Coordinates, Value, VALUES_DIMENSION};

use crate::model::Content;

// ============================================================================
// AXIS TREE STRUCTURES
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum AxisMember {
    Member {
        /// Identity used for lookups.
        member: Value,
        /// What the header shows.
        display: Value,
    },
    /// All members of the level, with the subtotal description.
    Subtotal(Value),
}

/// A node in the axis tree.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisNode {
    /// Dimension name of the node's level.
    pub name: String,
    pub member: AxisMember,
    /// Child nodes (next level).
    pub children: Vec<AxisNode>,
}

impl AxisNode {
    pub fn member(name: impl Into<String>, member: Value, display: Value) -> Self {
        AxisNode {
            name: name.into(),
            member: AxisMember::Member { member, display },
            children: Vec::new(),
        }
    }

    pub fn subtotal(name: impl Into<String>, description: Value) -> Self {
        AxisNode {
            name: name.into(),
            member: AxisMember::Subtotal(description),
            children: Vec::new(),
        }
    }

    pub fn is_subtotal(&self) -> bool {
        matches!(self.member, AxisMember::Subtotal(_))
    }

    /// Number of leaves below (or at) this node: the span of its header.
    pub fn leaf_count(&self) -> usize {
        if self.children.is_empty() {
            1
        } else {
            self.children.iter().map(AxisNode::leaf_count).sum()
        }
    }

    /// Header content of the node.
    pub fn content(&self) -> Content {
        match &self.member {
            AxisMember::Member { display, .. } => Content::Member(display.clone()),
            AxisMember::Subtotal(description) => Content::Label(description.clone()),
        }
    }

    fn signature(&self) -> Option<String> {
        match &self.member {
            AxisMember::Member { member, .. } => Some(member.signature()),
            AxisMember::Subtotal(_) => None,
        }
    }
}

/// Inserts a member path into a forest, reusing nodes whose member matches
/// at each level. Repeated prefixes therefore group under one node even
/// when they are not adjacent in the input.
pub fn insert_path(forest: &mut Vec<AxisNode>, path: &[(String, Value, Value)]) {
    let Some(((name, member, display), rest)) = path.split_first() else {
        return;
    };

    let signature = member.signature();
    let index = match forest
        .iter()
        .position(|n| n.signature().as_deref() == Some(signature.as_str()))
    {
        Some(index) => index,
        None => {
            forest.push(AxisNode::member(name.clone(), member.clone(), display.clone()));
            forest.len() - 1
        }
    };

    insert_path(&mut forest[index].children, rest);
}

/// Nodes at `depth` (0 = top level) in display order.
pub fn nodes_at_depth(forest: &[AxisNode], depth: usize) -> Vec<&AxisNode> {
    if depth == 0 {
        return forest.iter().collect();
    }
    forest
        .iter()
        .flat_map(|n| nodes_at_depth(&n.children, depth - 1))
        .collect()
}

// ============================================================================
// FLATTENED AXIS
// ============================================================================

/// A path from the top of an axis to one of its leaves. `None` marks a
/// subtotal level.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AxisLeaf {
    pub entries: Vec<(String, Option<Value>)>,
}

impl AxisLeaf {
    pub fn is_subtotal(&self) -> bool {
        self.entries.iter().any(|(_, member)| member.is_none())
    }

    /// Lookup key of the path.
    pub fn signature(&self) -> String {
        self.entries
            .iter()
            .map(|(name, member)| match member {
                Some(member) => format!("{}={}", name, member.signature()),
                None => format!("{}=*", name),
            })
            .collect::<Vec<_>>()
            .join("|")
    }

    /// Cube coordinates of the path, leaving out subtotal levels and
    /// `@values`.
    pub fn coordinates(&self) -> Coordinates {
        self.entries
            .iter()
            .filter(|(name, _)| name != VALUES_DIMENSION)
            .filter_map(|(name, member)| member.as_ref().map(|m| (name.clone(), m.clone())))
            .collect()
    }

    /// The measure named by the path's `@values` entry.
    pub fn measure(&self) -> Option<&str> {
        self.entries.iter().find_map(|(name, member)| match member {
            Some(Value::Text(measure)) if name == VALUES_DIMENSION => Some(measure.as_str()),
            _ => None,
        })
    }
}

/// Leaves of the forest in display order (DFS). An empty forest is an
/// axis without levels and has a single empty leaf.
pub fn flatten(forest: &[AxisNode]) -> Vec<AxisLeaf> {
    let mut leaves = Vec::new();
    if forest.is_empty() {
        leaves.push(AxisLeaf::default());
    } else {
        flatten_nodes(forest, &mut Vec::new(), &mut leaves);
    }
    leaves
}

fn flatten_nodes(
    nodes: &[AxisNode],
    path: &mut Vec<(String, Option<Value>)>,
    leaves: &mut Vec<AxisLeaf>,
) {
    for node in nodes {
        let member = match &node.member {
            AxisMember::Member { member, .. } => Some(member.clone()),
            AxisMember::Subtotal(_) => None,
        };
        path.push((node.name.clone(), member));

        if node.children.is_empty() {
            leaves.push(AxisLeaf {
                entries: path.clone(),
            });
        } else {
            flatten_nodes(&node.children, path, leaves);
        }

        path.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(members: &[(&str, &str)]) -> Vec<(String, Value, Value)> {
        members
            .iter()
            .map(|(name, member)| (name.to_string(), Value::text(*member), Value::text(*member)))
            .collect()
    }

    #[test]
    fn insert_groups_repeated_prefixes() {
        let mut forest = Vec::new();
        insert_path(&mut forest, &path(&[("region", "North"), ("product", "Apples")]));
        insert_path(&mut forest, &path(&[("region", "South"), ("product", "Apples")]));
        insert_path(&mut forest, &path(&[("region", "North"), ("product", "Pears")]));

        assert_eq!(forest.len(), 2);
        assert_eq!(forest[0].leaf_count(), 2);
        assert_eq!(nodes_at_depth(&forest, 1).len(), 3);

        let leaves = flatten(&forest);
        assert_eq!(leaves.len(), 3);
        assert_eq!(
            leaves[1].coordinates().get("product"),
            Some(&Value::text("Pears"))
        );
    }

    #[test]
    fn subtotal_leaves() {
        let mut total = AxisNode::subtotal("region", Value::message("Subtotal"));
        total.children.push(AxisNode::member(
            VALUES_DIMENSION,
            Value::text("sales"),
            Value::text("Sales"),
        ));

        let leaves = flatten(&[total]);
        assert_eq!(leaves.len(), 1);
        assert!(leaves[0].is_subtotal());
        assert!(leaves[0].coordinates().is_empty());
        assert_eq!(leaves[0].measure(), Some("sales"));
        assert_eq!(leaves[0].signature(), "region=*|@values=s:sales");
    }

    #[test]
    fn empty_axis_has_single_leaf() {
        let leaves = flatten(&[]);
        assert_eq!(leaves, vec![AxisLeaf::default()]);
    }
}

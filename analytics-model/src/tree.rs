//! FILENAME: analytics-model/src/tree.rs
//! PURPOSE: Hierarchical view of a result.
//! CONTEXT: Level N of the tree holds the members of the Nth dimension; the
//! deepest level is the `@values` pseudo-dimension whose nodes each carry
//! one measure. Building the tree requires the tuples to be grouped by
//! their leading dimensions, which is what an ordered query returns.

use crate::error::ModelError;
use crate::measure::Measure;
use crate::result::{ResultTable, VALUES_DIMENSION};
use crate::translation::TranslatableMessage;
use crate::value::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    /// Dimension name of this level ("" for the root).
    pub name: String,
    /// Dimension label of this level.
    pub label: Value,
    pub member: Value,
    pub display_member: Value,
    /// Set on `@values` nodes only.
    pub measure: Option<Measure>,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn root() -> Self {
        TreeNode {
            name: String::new(),
            label: Value::Null,
            member: Value::Null,
            display_member: Value::Null,
            measure: None,
            children: Vec::new(),
        }
    }

    fn values_node(measure: &Measure) -> Self {
        TreeNode {
            name: VALUES_DIMENSION.to_string(),
            label: Value::Message(TranslatableMessage::new("Values")),
            member: Value::Text(measure.name.clone()),
            display_member: measure.label.clone(),
            measure: Some(measure.clone()),
            children: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TreeNode> {
        self.children.iter()
    }

    /// The child whose member equals `member`.
    pub fn traverse(&self, member: &Value) -> Option<&TreeNode> {
        let signature = member.signature();
        self.children
            .iter()
            .find(|child| child.member.signature() == signature)
    }

    /// Dimension names below this node, following the first child at
    /// every level.
    pub fn level_names(&self) -> Vec<String> {
        let mut names = Vec::new();
        let mut node = self;
        while let Some(child) = node.children.first() {
            names.push(child.name.clone());
            node = child;
        }
        names
    }

    /// (name, label) of every level below this node.
    pub fn levels(&self) -> Vec<(String, Value)> {
        let mut levels = Vec::new();
        let mut node = self;
        while let Some(child) = node.children.first() {
            levels.push((child.name.clone(), child.label.clone()));
            node = child;
        }
        levels
    }

    pub(crate) fn build(table: &ResultTable) -> Result<TreeNode, ModelError> {
        let mut root = TreeNode::root();

        for tuple in table {
            let mut node = &mut root;

            for dimension in tuple.dimensions() {
                let signature = dimension.member.signature();
                let continues_last = node
                    .children
                    .last()
                    .map(|last| last.member.signature() == signature)
                    .unwrap_or(false);

                if !continues_last {
                    if node.children.iter().any(|c| c.member.signature() == signature) {
                        return Err(ModelError::HierarchicalOrderingRequired);
                    }
                    node.children.push(TreeNode {
                        name: dimension.name.clone(),
                        label: dimension.label.clone(),
                        member: dimension.member.clone(),
                        display_member: dimension.display_member.clone(),
                        measure: None,
                        children: Vec::new(),
                    });
                }

                let last = node.children.len() - 1;
                node = &mut node.children[last];
            }

            for measure in tuple.measures() {
                let exists = node
                    .children
                    .iter()
                    .any(|c| c.measure.as_ref().map(|m| m.name == measure.name).unwrap_or(false));
                if !exists {
                    node.children.push(TreeNode::values_node(measure));
                }
            }
        }

        Ok(root)
    }
}

impl<'a> IntoIterator for &'a TreeNode {
    type Item = &'a TreeNode;
    type IntoIter = std::slice::Iter<'a, TreeNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::MeasureDescriptor;
    use crate::result::ResultBuilder;

    fn builder() -> ResultBuilder {
        ResultBuilder::new()
            .dimension("region", "Region")
            .dimension("product", "Product")
            .measure(MeasureDescriptor::new("sales", "Sales"))
    }

    #[test]
    fn builds_nested_levels_with_values_leaves() {
        let result = builder()
            .row(vec!["North".into(), "Apples".into()], vec![Value::Int(100)])
            .row(vec!["North".into(), "Oranges".into()], vec![Value::Int(150)])
            .row(vec!["South".into(), "Apples".into()], vec![Value::Int(200)])
            .build();

        let tree = result.tree().unwrap();

        assert_eq!(tree.children.len(), 2);
        assert_eq!(tree.children[0].children.len(), 2);
        assert_eq!(tree.level_names(), vec!["region", "product", VALUES_DIMENSION]);

        let leaf = tree
            .traverse(&"North".into())
            .and_then(|n| n.traverse(&"Oranges".into()))
            .and_then(|n| n.children.first())
            .unwrap();
        assert_eq!(leaf.measure.as_ref().map(|m| m.value.clone()), Some(Value::Int(150)));
        assert_eq!(leaf.display_member, Value::text("Sales"));
    }

    #[test]
    fn rejects_non_hierarchical_ordering() {
        let result = builder()
            .row(vec!["North".into(), "Apples".into()], vec![Value::Int(100)])
            .row(vec!["South".into(), "Apples".into()], vec![Value::Int(200)])
            .row(vec!["North".into(), "Oranges".into()], vec![Value::Int(150)])
            .build();

        assert_eq!(result.tree(), Err(ModelError::HierarchicalOrderingRequired));
    }

    #[test]
    fn empty_result_gives_empty_root() {
        let tree = builder().build().tree().unwrap();
        assert!(tree.is_empty());
        assert!(tree.level_names().is_empty());
    }
}

//! FILENAME: analytics-model/src/result.rs
//! PURPOSE: The flat (tabular) view of a query result and its entry point.
//! CONTEXT: A result is a list of tuples. Each tuple has one coordinate per
//! dimension and the measures computed for that coordinate. The tree and
//! cube views are derived from the tuples on demand.

use crate::cube::Cube;
use crate::error::ModelError;
use crate::measure::{MeasureDescriptor, Measures};
use crate::tree::TreeNode;
use crate::value::{Coordinates, Value};

/// Name of the pseudo-dimension whose members are the measures.
pub const VALUES_DIMENSION: &str = "@values";

// ============================================================================
// DIMENSION
// ============================================================================

/// One coordinate of a tuple.
#[derive(Debug, Clone, PartialEq)]
pub struct Dimension {
    /// Dimension identifier, e.g. "month".
    pub name: String,
    /// Dimension label, e.g. "Month".
    pub label: Value,
    /// The member identity.
    pub member: Value,
    /// What to show for the member.
    pub display_member: Value,
}

impl Dimension {
    pub fn new(name: impl Into<String>, label: impl Into<Value>, member: impl Into<Value>) -> Self {
        let member = member.into();
        Dimension {
            name: name.into(),
            label: label.into(),
            display_member: member.clone(),
            member,
        }
    }

    pub fn with_display_member(mut self, display_member: impl Into<Value>) -> Self {
        self.display_member = display_member.into();
        self
    }
}

// ============================================================================
// TUPLE
// ============================================================================

/// A row of the flat result.
#[derive(Debug, Clone, PartialEq)]
pub struct Tuple {
    dimensions: Vec<Dimension>,
    measures: Measures,
}

impl Tuple {
    pub fn new(dimensions: Vec<Dimension>, measures: Measures) -> Self {
        Tuple {
            dimensions,
            measures,
        }
    }

    /// Number of dimensions.
    pub fn len(&self) -> usize {
        self.dimensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty()
    }

    pub fn get_by_index(&self, index: usize) -> Option<&Dimension> {
        self.dimensions.get(index)
    }

    pub fn get_by_name(&self, name: &str) -> Option<&Dimension> {
        self.dimensions.iter().find(|d| d.name == name)
    }

    pub fn dimensions(&self) -> &[Dimension] {
        &self.dimensions
    }

    pub fn measures(&self) -> &Measures {
        &self.measures
    }

    pub fn coordinates(&self) -> Coordinates {
        self.dimensions
            .iter()
            .map(|d| (d.name.clone(), d.member.clone()))
            .collect()
    }

    /// Whether every coordinate in `coordinates` matches this tuple.
    pub fn matches(&self, coordinates: &Coordinates) -> bool {
        coordinates.iter().all(|(name, member)| {
            self.get_by_name(name)
                .map(|d| d.member.signature() == member.signature())
                .unwrap_or(false)
        })
    }
}

// ============================================================================
// RESULT TABLE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultTable {
    tuples: Vec<Tuple>,
}

impl ResultTable {
    pub fn new(tuples: Vec<Tuple>) -> Self {
        ResultTable { tuples }
    }

    /// The first tuple, describing the shape of every tuple in the table.
    pub fn row_prototype(&self) -> Result<&Tuple, ModelError> {
        self.tuples.first().ok_or(ModelError::EmptyResult)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tuple> {
        self.tuples.iter()
    }

    pub fn len(&self) -> usize {
        self.tuples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }
}

impl<'a> IntoIterator for &'a ResultTable {
    type Item = &'a Tuple;
    type IntoIter = std::slice::Iter<'a, Tuple>;

    fn into_iter(self) -> Self::IntoIter {
        self.tuples.iter()
    }
}

// ============================================================================
// ANALYTICS RESULT
// ============================================================================

/// A query result as handed to the renderers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnalyticsResult {
    table: ResultTable,
    dimensions: Vec<(String, Value)>,
    measures: Vec<MeasureDescriptor>,
}

impl AnalyticsResult {
    /// Builds a result whose dimension and measure descriptors are taken
    /// from the first tuple.
    pub fn new(tuples: Vec<Tuple>) -> Self {
        let (dimensions, measures) = match tuples.first() {
            Some(first) => (
                first
                    .dimensions()
                    .iter()
                    .map(|d| (d.name.clone(), d.label.clone()))
                    .collect(),
                first.measures().iter().map(MeasureDescriptor::from).collect(),
            ),
            None => (Vec::new(), Vec::new()),
        };

        AnalyticsResult {
            table: ResultTable::new(tuples),
            dimensions,
            measures,
        }
    }

    pub fn with_descriptors(
        tuples: Vec<Tuple>,
        dimensions: Vec<(String, Value)>,
        measures: Vec<MeasureDescriptor>,
    ) -> Self {
        AnalyticsResult {
            table: ResultTable::new(tuples),
            dimensions,
            measures,
        }
    }

    pub fn table(&self) -> &ResultTable {
        &self.table
    }

    /// The hierarchical view. Fails when the tuples are not grouped by
    /// their leading dimensions.
    pub fn tree(&self) -> Result<TreeNode, ModelError> {
        TreeNode::build(&self.table)
    }

    pub fn cube(&self) -> Cube {
        Cube::new(
            self.dimensions.clone(),
            self.measures.clone(),
            self.table.iter().cloned().collect(),
        )
    }

    /// (name, label) of each dimension, in tuple order.
    pub fn dimensions(&self) -> &[(String, Value)] {
        &self.dimensions
    }

    pub fn measure_descriptors(&self) -> &[MeasureDescriptor] {
        &self.measures
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

// ============================================================================
// RESULT BUILDER
// ============================================================================

/// Convenience builder used by query adapters to assemble a result.
#[derive(Debug, Clone, Default)]
pub struct ResultBuilder {
    dimensions: Vec<(String, Value)>,
    measures: Vec<MeasureDescriptor>,
    tuples: Vec<Tuple>,
}

impl ResultBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dimension(mut self, name: impl Into<String>, label: impl Into<Value>) -> Self {
        self.dimensions.push((name.into(), label.into()));
        self
    }

    pub fn measure(mut self, descriptor: MeasureDescriptor) -> Self {
        self.measures.push(descriptor);
        self
    }

    /// Adds a tuple. `members` follow the dimension order and `values` the
    /// measure order; surplus entries are ignored and missing values are null.
    pub fn row(mut self, members: Vec<Value>, values: Vec<Value>) -> Self {
        let dimensions = self
            .dimensions
            .iter()
            .zip(members)
            .map(|((name, label), member)| Dimension::new(name.clone(), label.clone(), member))
            .collect();

        let mut values = values.into_iter();
        let measures: Measures = self
            .measures
            .iter()
            .map(|descriptor| descriptor.measure(values.next().unwrap_or(Value::Null)))
            .collect();

        self.tuples.push(Tuple::new(dimensions, measures));
        self
    }

    /// Adds a fully specified tuple.
    pub fn tuple(mut self, tuple: Tuple) -> Self {
        self.tuples.push(tuple);
        self
    }

    pub fn build(self) -> AnalyticsResult {
        AnalyticsResult::with_descriptors(self.tuples, self.dimensions, self.measures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::Unit;

    fn sales() -> AnalyticsResult {
        ResultBuilder::new()
            .dimension("region", "Region")
            .measure(MeasureDescriptor::new("revenue", "Revenue").with_unit(Unit::symbol("USD")))
            .measure(MeasureDescriptor::new("count", "Count"))
            .row(vec!["North".into()], vec![Value::Int(100), Value::Int(3)])
            .row(vec!["South".into()], vec![Value::Int(50)])
            .build()
    }

    #[test]
    fn row_prototype_of_empty_table_fails() {
        let result = ResultBuilder::new().dimension("region", "Region").build();
        assert_eq!(result.table().row_prototype(), Err(ModelError::EmptyResult));
    }

    #[test]
    fn builder_fills_missing_values_with_null() {
        let result = sales();
        let south = result.table().iter().nth(1).unwrap();

        assert_eq!(south.len(), 1);
        assert_eq!(
            south.measures().get_by_name("count").map(|m| &m.value),
            Some(&Value::Null)
        );
        assert_eq!(
            south.measures().get_by_name("revenue").and_then(|m| m.unit.clone()),
            Some(Unit::symbol("USD"))
        );
    }

    #[test]
    fn tuple_matches_coordinates() {
        let result = sales();
        let north = result.table().row_prototype().unwrap();

        assert!(north.matches(&Coordinates::new().with("region", "North".into())));
        assert!(!north.matches(&Coordinates::new().with("region", "South".into())));
        assert!(!north.matches(&Coordinates::new().with("year", Value::Int(1))));
        assert!(north.matches(&Coordinates::new()));
    }

    #[test]
    fn descriptors_derived_from_first_tuple() {
        let built = sales();
        let tuples: Vec<Tuple> = built.table().iter().cloned().collect();
        let result = AnalyticsResult::new(tuples);

        assert_eq!(result.dimensions().len(), 1);
        assert_eq!(result.dimensions()[0].0, "region");
        assert_eq!(result.measure_descriptors().len(), 2);
    }
}

//! FILENAME: analytics-model/src/cube.rs
//! PURPOSE: Roll-up view of a result.
//! CONTEXT: A cube cell is the set of tuples matching some coordinates.
//! Its measures are the tuples' values rolled up with each measure's
//! aggregation. Drilling down a dimension splits the cell by member.

use crate::error::ModelError;
use crate::measure::{Measure, MeasureDescriptor, Measures};
use crate::result::{AnalyticsResult, Dimension, Tuple};
use crate::value::{Coordinates, Value};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cube {
    dimensions: Vec<(String, Value)>,
    measures: Vec<MeasureDescriptor>,
    tuples: Vec<Tuple>,
}

impl Cube {
    pub fn new(
        dimensions: Vec<(String, Value)>,
        measures: Vec<MeasureDescriptor>,
        tuples: Vec<Tuple>,
    ) -> Self {
        Cube {
            dimensions,
            measures,
            tuples,
        }
    }

    /// The cell covering every tuple.
    pub fn apex(&self) -> CubeCell<'_> {
        self.slice(&Coordinates::new())
    }

    pub fn slice(&self, coordinates: &Coordinates) -> CubeCell<'_> {
        CubeCell {
            cube: self,
            coordinates: coordinates.clone(),
            tuples: self.tuples.iter().filter(|t| t.matches(coordinates)).collect(),
        }
    }

    pub fn dimensions(&self) -> &[(String, Value)] {
        &self.dimensions
    }

    pub fn measure_descriptors(&self) -> &[MeasureDescriptor] {
        &self.measures
    }

    pub fn has_dimension(&self, name: &str) -> bool {
        self.dimensions.iter().any(|(n, _)| n == name)
    }

    pub fn dimension_label(&self, name: &str) -> Result<&Value, ModelError> {
        self.dimensions
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, label)| label)
            .ok_or_else(|| ModelError::DimensionNotFound(name.to_string()))
    }

    pub fn measure_descriptor(&self, name: &str) -> Result<&MeasureDescriptor, ModelError> {
        self.measures
            .iter()
            .find(|m| m.name == name)
            .ok_or_else(|| ModelError::MeasureNotFound(name.to_string()))
    }

    /// Flattens the cube to one tuple per non-empty combination of
    /// `dimensions` members, nested in drill-down order. An empty
    /// `measures` list keeps every measure.
    pub fn project(&self, dimensions: &[String], measures: &[String]) -> Result<AnalyticsResult, ModelError> {
        let descriptors: Vec<MeasureDescriptor> = if measures.is_empty() {
            self.measures.clone()
        } else {
            measures
                .iter()
                .map(|name| self.measure_descriptor(name).cloned())
                .collect::<Result<_, _>>()?
        };

        let labels: Vec<(String, Value)> = dimensions
            .iter()
            .map(|name| Ok((name.clone(), self.dimension_label(name)?.clone())))
            .collect::<Result<_, ModelError>>()?;

        let mut leaves = Vec::new();
        collect_leaves(self.apex(), dimensions, &mut leaves)?;

        let tuples = leaves
            .iter()
            .map(|cell| {
                let dims = dimensions
                    .iter()
                    .filter_map(|name| cell.dimension(name))
                    .collect();
                let values = descriptors.iter().map(|d| cell.aggregate(d)).collect();
                Tuple::new(dims, values)
            })
            .collect();

        Ok(AnalyticsResult::with_descriptors(tuples, labels, descriptors))
    }
}

fn collect_leaves<'a>(
    cell: CubeCell<'a>,
    dimensions: &[String],
    leaves: &mut Vec<CubeCell<'a>>,
) -> Result<(), ModelError> {
    match dimensions.split_first() {
        None => {
            if !cell.is_empty() {
                leaves.push(cell);
            }
            Ok(())
        }
        Some((first, rest)) => {
            for child in cell.drill_down(first)? {
                collect_leaves(child, rest, leaves)?;
            }
            Ok(())
        }
    }
}

// ============================================================================
// CUBE CELL
// ============================================================================

#[derive(Debug, Clone)]
pub struct CubeCell<'a> {
    cube: &'a Cube,
    coordinates: Coordinates,
    tuples: Vec<&'a Tuple>,
}

impl<'a> CubeCell<'a> {
    pub fn cube(&self) -> &'a Cube {
        self.cube
    }

    pub fn coordinates(&self) -> &Coordinates {
        &self.coordinates
    }

    /// Number of tuples rolled up into this cell.
    pub fn tuple_count(&self) -> usize {
        self.tuples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }

    /// Splits the cell by the members of `dimension`, in first-seen order.
    pub fn drill_down(&self, dimension: &str) -> Result<Vec<CubeCell<'a>>, ModelError> {
        if !self.cube.has_dimension(dimension) {
            return Err(ModelError::DimensionNotFound(dimension.to_string()));
        }

        let mut members: Vec<(String, Value)> = Vec::new();
        for tuple in &self.tuples {
            if let Some(d) = tuple.get_by_name(dimension) {
                let signature = d.member.signature();
                if !members.iter().any(|(s, _)| *s == signature) {
                    members.push((signature, d.member.clone()));
                }
            }
        }

        Ok(members
            .into_iter()
            .map(|(signature, member)| CubeCell {
                cube: self.cube,
                coordinates: self.coordinates.with(dimension, member),
                tuples: self
                    .tuples
                    .iter()
                    .copied()
                    .filter(|t| {
                        t.get_by_name(dimension)
                            .map(|d| d.member.signature() == signature)
                            .unwrap_or(false)
                    })
                    .collect(),
            })
            .collect())
    }

    /// The coordinate of `name` in this cell, with its display member.
    /// `None` when the cell is not sliced on that dimension.
    pub fn dimension(&self, name: &str) -> Option<Dimension> {
        let member = self.coordinates.get(name)?;
        let label = self.cube.dimension_label(name).ok()?.clone();
        let display_member = self
            .tuples
            .iter()
            .find_map(|t| t.get_by_name(name))
            .map(|d| d.display_member.clone())
            .unwrap_or_else(|| member.clone());

        Some(Dimension::new(name, label, member.clone()).with_display_member(display_member))
    }

    pub fn measure(&self, name: &str) -> Result<Measure, ModelError> {
        Ok(self.aggregate(self.cube.measure_descriptor(name)?))
    }

    /// Every measure of the cube, rolled up over this cell.
    pub fn measures(&self) -> Measures {
        self.cube.measures.iter().map(|d| self.aggregate(d)).collect()
    }

    fn aggregate(&self, descriptor: &MeasureDescriptor) -> Measure {
        let values: Vec<&Value> = self
            .tuples
            .iter()
            .filter_map(|t| t.measures().get_by_name(&descriptor.name))
            .map(|m| &m.value)
            .collect();

        descriptor.measure(descriptor.aggregation.aggregate(&values))
    }
}

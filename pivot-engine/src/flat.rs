//! FILENAME: pivot-engine/src/flat.rs
//! Flat tables - One row per tuple, dimensions first, then measures.

use analytics_model::{CubeCell, MeasureDescriptor, ResultTable, Value};

use crate::error::PivotError;
use crate::model::{Cell, Content, Row, Table};

/// Lays out a flat result as is.
pub struct ResultSetToTableTransformer;

impl ResultSetToTableTransformer {
    pub fn transform(result: &ResultTable) -> Result<Table, PivotError> {
        let prototype = result.row_prototype()?;

        let mut table = Table::new();
        let header = prototype
            .dimensions()
            .iter()
            .map(|d| Cell::header(Content::Label(d.label.clone())))
            .chain(
                prototype
                    .measures()
                    .iter()
                    .map(|m| Cell::header(Content::Label(m.label.clone()))),
            )
            .collect();
        table.header.rows.push(Row::new(header));

        for tuple in result {
            let cells = tuple
                .dimensions()
                .iter()
                .map(|d| Cell::data(Content::Member(d.display_member.clone())))
                .chain(
                    tuple
                        .measures()
                        .iter()
                        .map(|m| Cell::data(Content::Value(m.value.clone()))),
                )
                .collect();
            table.body.rows.push(Row::new(cells));
        }

        Ok(table)
    }
}

/// Lays out every non-empty leaf cell below a cube cell as a flat table.
pub struct CubeTableAdapter;

impl CubeTableAdapter {
    /// An empty `measures` list selects every measure of the cube.
    pub fn transform(
        cell: &CubeCell<'_>,
        dimensions: &[String],
        measures: &[String],
    ) -> Result<Table, PivotError> {
        let cube = cell.cube();

        let descriptors: Vec<&MeasureDescriptor> = if measures.is_empty() {
            cube.measure_descriptors().iter().collect()
        } else {
            measures
                .iter()
                .map(|name| cube.measure_descriptor(name))
                .collect::<Result<_, _>>()?
        };

        let labels: Vec<Value> = dimensions
            .iter()
            .map(|name| cube.dimension_label(name).cloned())
            .collect::<Result<_, _>>()?;

        let mut table = Table::new();
        let header = labels
            .into_iter()
            .chain(descriptors.iter().map(|d| d.label.clone()))
            .map(|label| Cell::header(Content::Label(label)))
            .collect();
        table.header.rows.push(Row::new(header));

        let mut leaves = Vec::new();
        collect_leaves(cell.clone(), dimensions, &mut leaves)?;

        for leaf in &leaves {
            let mut cells: Vec<Cell> = dimensions
                .iter()
                .map(|name| {
                    let member = leaf
                        .dimension(name)
                        .map(|d| d.display_member)
                        .unwrap_or(Value::Null);
                    Cell::data(Content::Member(member))
                })
                .collect();

            for descriptor in &descriptors {
                let measure = leaf.measure(&descriptor.name)?;
                cells.push(Cell::data(Content::Value(measure.value)));
            }

            table.body.rows.push(Row::new(cells));
        }

        log::debug!("flattened cube cell into {} rows", leaves.len());

        Ok(table)
    }
}

fn collect_leaves<'a>(
    cell: CubeCell<'a>,
    dimensions: &[String],
    leaves: &mut Vec<CubeCell<'a>>,
) -> Result<(), PivotError> {
    match dimensions.split_first() {
        None => {
            if !cell.is_empty() {
                leaves.push(cell);
            }
        }
        Some((first, rest)) => {
            for child in cell.drill_down(first)? {
                collect_leaves(child, rest, leaves)?;
            }
        }
    }
    Ok(())
}

/// The dimensions not shown as columns, in their original order.
pub fn rows_from(dimensions: &[String], columns: &[String]) -> Vec<String> {
    dimensions
        .iter()
        .filter(|d| !columns.contains(d))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use analytics_model::{Coordinates, ModelError, ResultBuilder};

    fn result() -> analytics_model::AnalyticsResult {
        ResultBuilder::new()
            .dimension("region", "Region")
            .dimension("product", "Product")
            .measure(MeasureDescriptor::new("sales", "Sales"))
            .measure(MeasureDescriptor::new("units", "Units"))
            .row(vec!["North".into(), "Apples".into()], vec![Value::Int(100), Value::Int(4)])
            .row(vec!["South".into(), "Apples".into()], vec![Value::Int(200), Value::Int(5)])
            .row(vec!["North".into(), "Pears".into()], vec![Value::Int(150), Value::Int(6)])
            .build()
    }

    #[test]
    fn flat_table_follows_tuple_order() {
        let table = ResultSetToTableTransformer::transform(result().table()).unwrap();

        assert_eq!(table.header.rows[0].cells.len(), 4);
        assert_eq!(
            table.header.rows[0].cells[2].content,
            Content::Label(Value::text("Sales"))
        );
        assert_eq!(table.body.rows.len(), 3);
        assert_eq!(
            table.body.rows[1].cells[0].content,
            Content::Member(Value::text("South"))
        );
        assert_eq!(
            table.body.rows[2].cells[3].content,
            Content::Value(Value::Int(6))
        );
    }

    #[test]
    fn flat_table_of_empty_result_fails() {
        let empty = ResultBuilder::new().dimension("region", "Region").build();
        assert_eq!(
            ResultSetToTableTransformer::transform(empty.table()).unwrap_err(),
            PivotError::Model(ModelError::EmptyResult)
        );
    }

    #[test]
    fn cube_adapter_rolls_up_selected_dimensions() {
        let cube = result().cube();
        let table = CubeTableAdapter::transform(
            &cube.apex(),
            &["region".to_string()],
            &["sales".to_string()],
        )
        .unwrap();

        assert_eq!(table.header.rows[0].cells.len(), 2);
        assert_eq!(table.body.rows.len(), 2);
        assert_eq!(
            table.body.rows[0].cells[1].content,
            Content::Value(Value::Int(250))
        );
    }

    #[test]
    fn cube_adapter_from_slice() {
        let cube = result().cube();
        let north = cube.slice(&Coordinates::new().with("region", "North".into()));
        let table = CubeTableAdapter::transform(&north, &["product".to_string()], &[]).unwrap();

        assert_eq!(table.body.rows.len(), 2);
        assert_eq!(table.body.rows[1].cells.len(), 3);
        assert_eq!(
            table.body.rows[1].cells[0].content,
            Content::Member(Value::text("Pears"))
        );
    }

    #[test]
    fn cube_adapter_unknown_dimension() {
        let cube = result().cube();
        let error = CubeTableAdapter::transform(&cube.apex(), &["year".to_string()], &[]).unwrap_err();
        assert_eq!(
            error,
            PivotError::Model(ModelError::DimensionNotFound("year".to_string()))
        );
    }

    #[test]
    fn rows_are_dimensions_minus_columns() {
        let dimensions = vec!["year".to_string(), "region".to_string(), "product".to_string()];
        assert_eq!(
            rows_from(&dimensions, &["region".to_string()]),
            vec!["year".to_string(), "product".to_string()]
        );
    }
}

//! FILENAME: pivot-engine/src/transformer.rs
//! Pivot transformer - Lays out a tree or cube as a pivot table.
//!
//! Algorithm:
//! 1. Split the levels into row levels and column (pivoted) levels
//! 2. Build one axis tree per direction, keeping first-seen member order
//! 3. Emit one header row per column level, legends heading the row labels
//! 4. Emit one body row per row-axis leaf, looking up every intersection
//! 5. Move the outermost row subtotal (the grand total) to the footer

use analytics_model::{
    Cube, CubeCell, MeasureDescriptor, TreeNode, Value, VALUES_DIMENSION,
};
use rustc_hash::FxHashMap;

use crate::axis::{flatten, insert_path, nodes_at_depth, AxisLeaf, AxisMember, AxisNode};
use crate::error::PivotError;
use crate::model::{Cell, CellKind, Content, Row, Table};

// ============================================================================
// SUBTOTAL DESCRIPTIONS
// ============================================================================

/// Supplies the label of the subtotal entry of a dimension.
pub trait SubtotalDescriptionResolver: Send + Sync {
    fn subtotal_description(&self, dimension: &str) -> Value;
}

/// Labels every subtotal "Subtotal".
pub struct HardcodedSubtotalDescriptionResolver;

impl SubtotalDescriptionResolver for HardcodedSubtotalDescriptionResolver {
    fn subtotal_description(&self, _dimension: &str) -> Value {
        Value::message("Subtotal")
    }
}

// ============================================================================
// PIVOT TABLE TRANSFORMER
// ============================================================================

pub struct PivotTableTransformer {
    subtotal_descriptions: Box<dyn SubtotalDescriptionResolver>,
}

impl Default for PivotTableTransformer {
    fn default() -> Self {
        PivotTableTransformer::new()
    }
}

impl PivotTableTransformer {
    pub fn new() -> Self {
        PivotTableTransformer {
            subtotal_descriptions: Box::new(HardcodedSubtotalDescriptionResolver),
        }
    }

    pub fn with_subtotal_descriptions(resolver: impl SubtotalDescriptionResolver + 'static) -> Self {
        PivotTableTransformer {
            subtotal_descriptions: Box::new(resolver),
        }
    }

    /// Lays out a result tree. Levels named in `pivoted` become columns,
    /// the others rows. Legends of `superfluous_legends` levels stay empty.
    pub fn transform_tree_to_table(
        &self,
        tree: &TreeNode,
        pivoted: &[String],
        superfluous_legends: &[String],
    ) -> Result<Table, PivotError> {
        if tree.is_empty() {
            return Err(PivotError::EmptyResult);
        }

        let levels = tree.levels();
        let (column_levels, row_levels): (Vec<_>, Vec<_>) = levels
            .iter()
            .cloned()
            .partition(|(name, _)| pivoted.contains(name));

        let mut leaves = Vec::new();
        collect_tree_leaves(tree, levels.len(), &mut Vec::new(), &mut leaves);

        let mut row_forest = Vec::new();
        let mut column_forest = Vec::new();
        let mut values: FxHashMap<(String, String), Value> = FxHashMap::default();

        for path in &leaves {
            let (column_path, row_path): (Vec<_>, Vec<_>) = path
                .iter()
                .map(|n| (n.name.clone(), n.member.clone(), n.display_member.clone()))
                .partition(|(name, _, _)| pivoted.contains(name));

            insert_path(&mut row_forest, &row_path);
            insert_path(&mut column_forest, &column_path);

            let value = path
                .last()
                .and_then(|leaf| leaf.measure.as_ref())
                .map(|m| m.value.clone())
                .unwrap_or(Value::Null);
            values.insert((path_signature(&row_path), path_signature(&column_path)), value);
        }

        log::debug!(
            "pivoting tree: {} row levels, {} column levels, {} leaves",
            row_levels.len(),
            column_levels.len(),
            leaves.len()
        );

        let layout = Layout {
            row_forest: &row_forest,
            row_levels: &row_levels,
            column_forest: &column_forest,
            column_levels: &column_levels,
        };

        layout.build(
            |name, label| legend(superfluous_legends, name, label),
            |row, column| {
                Ok(values
                    .get(&(row.signature(), column.signature()))
                    .map(|v| Content::Value(v.clone()))
                    .unwrap_or(Content::Empty))
            },
        )
    }

    /// Lays out a cube. `@values` may be placed in `rows` or `columns`; it
    /// is appended to the columns when absent. Dimensions listed in
    /// `subtotals` get a subtotal entry after their members.
    pub fn transform_cube(
        &self,
        cube: &Cube,
        rows: &[String],
        columns: &[String],
        measures: &[String],
        skip_legends: &[String],
        subtotals: &[String],
    ) -> Result<Table, PivotError> {
        let apex = cube.apex();
        if apex.is_empty() {
            return Err(PivotError::EmptyResult);
        }

        let rows = rows.to_vec();
        let mut columns = columns.to_vec();
        if !rows.iter().chain(columns.iter()).any(|d| d == VALUES_DIMENSION) {
            columns.push(VALUES_DIMENSION.to_string());
        }

        let descriptors: Vec<MeasureDescriptor> = if measures.is_empty() {
            cube.measure_descriptors().to_vec()
        } else {
            measures
                .iter()
                .map(|name| cube.measure_descriptor(name).cloned())
                .collect::<Result<_, _>>()?
        };

        let row_levels = level_labels(cube, &rows)?;
        let column_levels = level_labels(cube, &columns)?;

        let row_forest = self.build_cube_axis(&apex, &rows, &descriptors, subtotals, true, false)?;
        let column_forest = self.build_cube_axis(&apex, &columns, &descriptors, subtotals, true, false)?;

        log::debug!(
            "pivoting cube: rows {:?}, columns {:?}, subtotals {:?}",
            rows,
            columns,
            subtotals
        );

        let layout = Layout {
            row_forest: &row_forest,
            row_levels: &row_levels,
            column_forest: &column_forest,
            column_levels: &column_levels,
        };

        layout.build(
            |name, label| legend(skip_legends, name, label),
            |row, column| {
                let Some(measure) = row.measure().or_else(|| column.measure()) else {
                    return Ok(Content::Empty);
                };

                let coordinates = column
                    .coordinates()
                    .iter()
                    .fold(row.coordinates(), |acc, (name, member)| acc.with(name.clone(), member.clone()));

                let cell = cube.slice(&coordinates);
                if cell.is_empty() {
                    return Ok(Content::Empty);
                }
                Ok(Content::Value(cell.measure(measure)?.value))
            },
        )
    }

    /// Builds the axis forest below `cell`. Subtotals nested in another
    /// subtotal are left out, except below a root subtotal: that branch is
    /// the grand total and keeps its inner subtotals so it ends with the
    /// overall total.
    fn build_cube_axis(
        &self,
        cell: &CubeCell<'_>,
        levels: &[String],
        descriptors: &[MeasureDescriptor],
        subtotals: &[String],
        root: bool,
        in_subtotal: bool,
    ) -> Result<Vec<AxisNode>, PivotError> {
        let Some((level, rest)) = levels.split_first() else {
            return Ok(Vec::new());
        };

        let mut nodes = Vec::new();

        if level == VALUES_DIMENSION {
            for descriptor in descriptors {
                let mut node = AxisNode::member(
                    VALUES_DIMENSION,
                    Value::Text(descriptor.name.clone()),
                    descriptor.label.clone(),
                );
                node.children = self.build_cube_axis(cell, rest, descriptors, subtotals, false, in_subtotal)?;
                nodes.push(node);
            }
            return Ok(nodes);
        }

        for child in cell.drill_down(level)? {
            let Some(dimension) = child.dimension(level) else {
                continue;
            };
            let mut node = AxisNode::member(level.clone(), dimension.member, dimension.display_member);
            node.children = self.build_cube_axis(&child, rest, descriptors, subtotals, false, in_subtotal)?;
            nodes.push(node);
        }

        if !in_subtotal && !nodes.is_empty() && subtotals.contains(level) {
            let mut node = AxisNode::subtotal(
                level.clone(),
                self.subtotal_descriptions.subtotal_description(level),
            );
            node.children = self.build_cube_axis(cell, rest, descriptors, subtotals, false, in_subtotal || !root)?;
            nodes.push(node);
        }

        Ok(nodes)
    }
}

fn legend(hidden: &[String], name: &str, label: &Value) -> Content {
    if hidden.iter().any(|h| h == name) {
        Content::Empty
    } else {
        Content::Label(label.clone())
    }
}

fn level_labels(cube: &Cube, levels: &[String]) -> Result<Vec<(String, Value)>, PivotError> {
    levels
        .iter()
        .map(|name| {
            let label = if name == VALUES_DIMENSION {
                Value::message("Values")
            } else {
                cube.dimension_label(name)?.clone()
            };
            Ok((name.clone(), label))
        })
        .collect()
}

/// Every root-to-leaf path reaching `depth` levels.
fn collect_tree_leaves<'a>(
    node: &'a TreeNode,
    depth: usize,
    path: &mut Vec<&'a TreeNode>,
    leaves: &mut Vec<Vec<&'a TreeNode>>,
) {
    for child in &node.children {
        path.push(child);
        if child.is_leaf() {
            if path.len() == depth {
                leaves.push(path.clone());
            }
        } else {
            collect_tree_leaves(child, depth, path, leaves);
        }
        path.pop();
    }
}

fn path_signature(path: &[(String, Value, Value)]) -> String {
    AxisLeaf {
        entries: path
            .iter()
            .map(|(name, member, _)| (name.clone(), Some(member.clone())))
            .collect(),
    }
    .signature()
}

// ============================================================================
// LAYOUT
// ============================================================================

struct Layout<'a> {
    row_forest: &'a [AxisNode],
    row_levels: &'a [(String, Value)],
    column_forest: &'a [AxisNode],
    column_levels: &'a [(String, Value)],
}

impl Layout<'_> {
    fn build<L, F>(&self, legend: L, mut value_at: F) -> Result<Table, PivotError>
    where
        L: Fn(&str, &Value) -> Content,
        F: FnMut(&AxisLeaf, &AxisLeaf) -> Result<Content, PivotError>,
    {
        let mut table = Table::new();
        table.header.rows = self.header_rows(&legend);

        let column_leaves = flatten(self.column_forest);

        if self.row_forest.is_empty() {
            let row = AxisLeaf::default();
            let cells = data_cells(&row, &column_leaves, false, &mut value_at)?;
            table.body.rows.push(Row::new(cells));
            return Ok(table);
        }

        for node in self.row_forest {
            let target = if node.is_subtotal() {
                &mut table.footer.rows
            } else {
                &mut table.body.rows
            };
            emit_rows(
                node,
                false,
                &mut Vec::new(),
                &mut Vec::new(),
                &column_leaves,
                &mut value_at,
                target,
            )?;
        }

        Ok(table)
    }

    fn header_rows<L>(&self, legend: &L) -> Vec<Row>
    where
        L: Fn(&str, &Value) -> Content,
    {
        let row_label_columns = self.row_levels.len();
        let row_legends: Vec<Cell> = self
            .row_levels
            .iter()
            .map(|(name, label)| Cell::header(legend(name.as_str(), label)))
            .collect();

        let Some((last_name, last_label)) = self.column_levels.last() else {
            let mut cells = row_legends;
            cells.push(Cell::header(Content::Empty));
            return vec![Row::new(cells)];
        };

        // A visible legend for the last column level needs its own row.
        let legend_row = row_label_columns > 0 && !legend(last_name.as_str(), last_label).is_empty();
        let column_level_count = self.column_levels.len();

        let mut rows = Vec::new();
        for (depth, (name, label)) in self.column_levels.iter().enumerate() {
            let is_last = depth + 1 == column_level_count;
            let mut cells = Vec::new();

            if row_label_columns > 0 {
                if !is_last || legend_row {
                    cells.push(Cell::header(legend(name.as_str(), label)).with_column_span(row_label_columns));
                } else {
                    cells.extend(row_legends.iter().cloned());
                }
            }

            let row_span = if is_last && legend_row { 2 } else { 1 };
            for node in nodes_at_depth(self.column_forest, depth) {
                cells.push(
                    Cell::header(node.content())
                        .with_column_span(node.leaf_count())
                        .with_row_span(row_span),
                );
            }

            rows.push(Row::new(cells));
        }

        if legend_row {
            rows.push(Row::new(row_legends));
        }

        rows
    }
}

fn emit_rows<F>(
    node: &AxisNode,
    in_subtotal: bool,
    pending: &mut Vec<Cell>,
    path: &mut Vec<(String, Option<Value>)>,
    column_leaves: &[AxisLeaf],
    value_at: &mut F,
    rows: &mut Vec<Row>,
) -> Result<(), PivotError>
where
    F: FnMut(&AxisLeaf, &AxisLeaf) -> Result<Content, PivotError>,
{
    let subtotal = in_subtotal || node.is_subtotal();
    let kind = if subtotal { CellKind::Footer } else { CellKind::Header };
    pending.push(Cell::new(kind, node.content()).with_row_span(node.leaf_count()));

    let member = match &node.member {
        AxisMember::Member { member, .. } => Some(member.clone()),
        AxisMember::Subtotal(_) => None,
    };
    path.push((node.name.clone(), member));

    if node.children.is_empty() {
        let row = AxisLeaf {
            entries: path.clone(),
        };
        let mut cells: Vec<Cell> = std::mem::take(pending);
        cells.extend(data_cells(&row, column_leaves, subtotal, value_at)?);
        rows.push(Row::new(cells));
    } else {
        for child in &node.children {
            emit_rows(child, subtotal, pending, path, column_leaves, value_at, rows)?;
        }
    }

    path.pop();
    Ok(())
}

fn data_cells<F>(
    row: &AxisLeaf,
    column_leaves: &[AxisLeaf],
    row_is_subtotal: bool,
    value_at: &mut F,
) -> Result<Vec<Cell>, PivotError>
where
    F: FnMut(&AxisLeaf, &AxisLeaf) -> Result<Content, PivotError>,
{
    column_leaves
        .iter()
        .map(|column| {
            let kind = if row_is_subtotal || column.is_subtotal() {
                CellKind::Footer
            } else {
                CellKind::Data
            };
            Ok(Cell::new(kind, value_at(row, column)?))
        })
        .collect()
}

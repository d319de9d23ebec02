//! FILENAME: analytics-model/src/aggregation.rs
//! PURPOSE: Roll-up functions used when a cube cell spans several tuples.
//! CONTEXT: Only the functions needed to display subtotals are provided;
//! computing the base values is the query engine's job.

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// Supported roll-up functions for measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Aggregation {
    Sum,
    Count,
    Average,
    Min,
    Max,
}

impl Default for Aggregation {
    fn default() -> Self {
        Aggregation::Sum
    }
}

impl Aggregation {
    /// Aggregates the values of the tuples covered by a cube cell.
    ///
    /// A single value passes through untouched whatever its type. Nulls are
    /// skipped; any other non-numeric value makes the result `Null`.
    pub fn aggregate(&self, values: &[&Value]) -> Value {
        if let [single] = values {
            if *self != Aggregation::Count {
                return (*single).clone();
            }
        }

        let present: Vec<&Value> = values.iter().copied().filter(|v| !v.is_null()).collect();

        if *self == Aggregation::Count {
            return Value::Int(present.len() as i64);
        }

        if present.is_empty() {
            return Value::Null;
        }

        let all_int = present.iter().all(|v| matches!(v, Value::Int(_)));
        let numbers: Option<Vec<f64>> = present.iter().map(|v| v.as_f64()).collect();
        let numbers = match numbers {
            Some(numbers) => numbers,
            None => return Value::Null,
        };

        match self {
            Aggregation::Sum => {
                let int_sum = if all_int {
                    present
                        .iter()
                        .filter_map(|v| int_of(v))
                        .try_fold(0i64, |acc, i| acc.checked_add(i))
                } else {
                    None
                };

                match int_sum {
                    Some(sum) => Value::Int(sum),
                    // Mixed types or an i64 overflow
                    None => Value::Float(numbers.iter().sum()),
                }
            }
            Aggregation::Average => Value::Float(numbers.iter().sum::<f64>() / numbers.len() as f64),
            Aggregation::Min => pick(&present, &numbers, all_int, |a, b| a < b),
            Aggregation::Max => pick(&present, &numbers, all_int, |a, b| a > b),
            Aggregation::Count => Value::Int(present.len() as i64),
        }
    }
}

fn int_of(value: &Value) -> Option<i64> {
    match value {
        Value::Int(i) => Some(*i),
        _ => None,
    }
}

fn pick(present: &[&Value], numbers: &[f64], all_int: bool, better: impl Fn(f64, f64) -> bool) -> Value {
    let mut best = 0;
    for (i, n) in numbers.iter().enumerate() {
        if better(*n, numbers[best]) {
            best = i;
        }
    }

    if all_int {
        present[best].clone()
    } else {
        Value::Float(numbers[best])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sum_keeps_integers() {
        let values = [Value::Int(2), Value::Int(3), Value::Null];
        let refs: Vec<&Value> = values.iter().collect();
        assert_eq!(Aggregation::Sum.aggregate(&refs), Value::Int(5));
    }

    #[test]
    fn sum_mixed_becomes_float() {
        let values = [Value::Int(2), Value::Float(0.5)];
        let refs: Vec<&Value> = values.iter().collect();
        assert_eq!(Aggregation::Sum.aggregate(&refs), Value::Float(2.5));
    }

    #[test]
    fn sum_overflowing_integers_becomes_float() {
        let values = [Value::Int(i64::MAX), Value::Int(1)];
        let refs: Vec<&Value> = values.iter().collect();
        assert_eq!(
            Aggregation::Sum.aggregate(&refs),
            Value::Float(i64::MAX as f64 + 1.0)
        );

        let values = [Value::Int(i64::MIN), Value::Int(-1)];
        let refs: Vec<&Value> = values.iter().collect();
        assert!(matches!(Aggregation::Sum.aggregate(&refs), Value::Float(f) if f < 0.0));
    }

    #[test]
    fn single_value_passes_through() {
        let values = [Value::text("n/a")];
        let refs: Vec<&Value> = values.iter().collect();
        assert_eq!(Aggregation::Sum.aggregate(&refs), Value::text("n/a"));
    }

    #[test]
    fn non_numeric_values_roll_up_to_null() {
        let values = [Value::text("a"), Value::text("b")];
        let refs: Vec<&Value> = values.iter().collect();
        assert_eq!(Aggregation::Sum.aggregate(&refs), Value::Null);
    }

    #[test]
    fn count_min_max_average() {
        let values = [Value::Int(4), Value::Int(1), Value::Int(7)];
        let refs: Vec<&Value> = values.iter().collect();
        assert_eq!(Aggregation::Count.aggregate(&refs), Value::Int(3));
        assert_eq!(Aggregation::Min.aggregate(&refs), Value::Int(1));
        assert_eq!(Aggregation::Max.aggregate(&refs), Value::Int(7));
        assert_eq!(Aggregation::Average.aggregate(&refs), Value::Float(4.0));
    }

    #[test]
    fn empty_input() {
        assert_eq!(Aggregation::Sum.aggregate(&[]), Value::Null);
        assert_eq!(Aggregation::Count.aggregate(&[]), Value::Int(0));
    }
}

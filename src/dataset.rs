//! Cell values, generated records, and the assembled dataset table.

use chrono::NaiveDate;
use std::cmp::Ordering;

/// A single cell value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Float(f64),
    Str(String),
    Date(NaiveDate),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Render for CSV output. Nulls render as an empty field, floats render
    /// trimmed (`7.5`, not `7.50`), dates as `YYYY-MM-DD`.
    pub fn render(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Float(v) => format!("{v}"),
            Value::Str(s) => s.clone(),
            Value::Date(d) => d.format("%Y-%m-%d").to_string(),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Date(_) => 1,
            Value::Float(_) => 2,
            Value::Str(_) => 3,
        }
    }

    /// Total order across cell values: same-type values compare naturally,
    /// mixed types compare by type rank with nulls first.
    pub fn cmp_values(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Float(a), Value::Float(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (Value::Str(a), Value::Str(b)) => a.cmp(b),
            (Value::Date(a), Value::Date(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

/// One generated row: an ordered name -> value map.
///
/// Inserting under an existing name overwrites the value but keeps the
/// column's original position, so later duplicate declarations win without
/// reordering the table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    entries: Vec<(String, Value)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, value: Value) {
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| n == name) {
            entry.1 = value;
        } else {
            self.entries.push((name.to_string(), value));
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }
}

/// The assembled table: fixed column order, row-major cells
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl Dataset {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a record, emitting its values in this dataset's column order.
    /// A column the record does not carry becomes a null cell.
    pub fn push_record(&mut self, record: &Record) {
        let row = self
            .columns
            .iter()
            .map(|c| record.get(c).cloned().unwrap_or(Value::Null))
            .collect();
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Value> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Overwrite a cell. Indices must be in range.
    pub fn set(&mut self, row: usize, col: usize, value: Value) {
        self.rows[row][col] = value;
    }

    /// Column index by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Sort rows ascending by the given column. Stable: equal keys keep
    /// their original order. Out-of-range columns leave the rows untouched.
    pub fn sort_by_column(&mut self, col: usize) {
        if col >= self.columns.len() {
            return;
        }
        self.rows.sort_by(|a, b| a[col].cmp_values(&b[col]));
    }

    pub fn null_count(&self) -> usize {
        self.rows
            .iter()
            .map(|r| r.iter().filter(|v| v.is_null()).count())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, Value)]) -> Record {
        let mut r = Record::new();
        for (name, value) in pairs {
            r.insert(name, value.clone());
        }
        r
    }

    #[test]
    fn test_record_insert_overwrites_keeping_position() {
        let mut r = Record::new();
        r.insert("a", Value::Float(1.0));
        r.insert("b", Value::Float(2.0));
        r.insert("a", Value::Str("new".into()));

        assert_eq!(r.len(), 2);
        assert_eq!(r.columns().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(r.get("a"), Some(&Value::Str("new".into())));
    }

    #[test]
    fn test_push_record_follows_column_order() {
        let mut ds = Dataset::new(vec!["x".into(), "y".into()]);
        ds.push_record(&record(&[("y", Value::Float(2.0)), ("x", Value::Float(1.0))]));

        assert_eq!(ds.rows[0], vec![Value::Float(1.0), Value::Float(2.0)]);
    }

    #[test]
    fn test_missing_column_becomes_null() {
        let mut ds = Dataset::new(vec!["x".into(), "y".into()]);
        ds.push_record(&record(&[("x", Value::Float(1.0))]));

        assert_eq!(ds.rows[0][1], Value::Null);
        assert_eq!(ds.null_count(), 1);
    }

    #[test]
    fn test_sort_by_column_is_stable() {
        let mut ds = Dataset::new(vec!["name".into(), "n".into()]);
        ds.push_record(&record(&[("name", Value::Str("b".into())), ("n", Value::Float(1.0))]));
        ds.push_record(&record(&[("name", Value::Str("a".into())), ("n", Value::Float(2.0))]));
        ds.push_record(&record(&[("name", Value::Str("a".into())), ("n", Value::Float(3.0))]));
        ds.sort_by_column(0);

        assert_eq!(ds.rows[0][1], Value::Float(2.0));
        assert_eq!(ds.rows[1][1], Value::Float(3.0));
        assert_eq!(ds.rows[2][1], Value::Float(1.0));
    }

    #[test]
    fn test_sort_out_of_range_column_is_noop() {
        let mut ds = Dataset::new(vec!["x".into()]);
        ds.push_record(&record(&[("x", Value::Str("z".into()))]));
        ds.push_record(&record(&[("x", Value::Str("a".into()))]));
        ds.sort_by_column(5);

        assert_eq!(ds.rows[0][0], Value::Str("z".into()));
    }

    #[test]
    fn test_render() {
        assert_eq!(Value::Null.render(), "");
        assert_eq!(Value::Float(7.5).render(), "7.5");
        assert_eq!(Value::Float(7.0).render(), "7");
        assert_eq!(Value::Str("abc".into()).render(), "abc");
        let date = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
        assert_eq!(Value::Date(date).render(), "2026-03-09");
    }
}

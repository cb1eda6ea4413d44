//! Tabular rows to objects.
//!
//! A `Table` is an ordered set of named columns and rows of cells. Each row
//! becomes one destination object; each destination property takes the
//! first column whose name matches it, ignoring case.

use crate::{
    config::MapperConfig,
    error::{ConversionError, ErrorOrigin, MapError},
    map::{
        Coercion, Conversion, MapReport, Mapper, PropertyStatus, SkipReason, default_mapper,
        parse_enum,
        pass::{Pass, assign},
    },
    model::{PropertyModel, names_eq, validated_model},
    obs::sink::{MapEvent, PassKind, record},
    traits::Mappable,
    types::Decimal,
    value::{TypeTag, Value},
};

/// Source path reported for row passes.
const ROW_SOURCE_PATH: &str = "table row";

///
/// Row
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Row {
    cells: Vec<Value>,
}

impl Row {
    #[must_use]
    pub fn cells(&self) -> &[Value] {
        &self.cells
    }

    #[must_use]
    pub fn cell(&self, index: usize) -> Option<&Value> {
        self.cells.get(index)
    }
}

///
/// Table
///
/// Column names are unique ignoring case; every row carries exactly one
/// cell per column. `Value::Null` is a database null.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    pub fn new<I, S>(columns: I) -> Result<Self, MapError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::default();

        for column in columns {
            let column = column.into();
            if table.column_index(&column).is_some() {
                return Err(MapError::invalid_argument(
                    ErrorOrigin::Rows,
                    format!("duplicate column name '{column}'"),
                ));
            }
            table.columns.push(column);
        }

        Ok(table)
    }

    pub fn push_row(&mut self, cells: Vec<Value>) -> Result<(), MapError> {
        if cells.len() != self.columns.len() {
            return Err(MapError::invalid_argument(
                ErrorOrigin::Rows,
                format!(
                    "row {} has {} cells, expected {}",
                    self.rows.len(),
                    cells.len(),
                    self.columns.len()
                ),
            ));
        }

        self.rows.push(Row { cells });

        Ok(())
    }

    /// Builder form of [`Table::push_row`].
    pub fn with_row(mut self, cells: Vec<Value>) -> Result<Self, MapError> {
        self.push_row(cells)?;

        Ok(self)
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First column whose name matches `name`, ignoring case.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| names_eq(c, name))
    }
}

impl Mapper {
    /// One `T` per row, in row order.
    pub fn rows_to_objects<T>(&self, table: &Table) -> Result<Vec<T>, MapError>
    where
        T: Mappable + Default,
    {
        Ok(self
            .rows_to_objects_with_report(table)?
            .into_iter()
            .map(|(obj, _)| obj)
            .collect())
    }

    pub fn rows_to_objects_with_report<T>(
        &self,
        table: &Table,
    ) -> Result<Vec<(T, MapReport)>, MapError>
    where
        T: Mappable + Default,
    {
        let model = validated_model::<T>()?;

        // Column resolution depends only on the header.
        let plan: Vec<Option<usize>> = model
            .properties
            .iter()
            .map(|p| table.column_index(p.name))
            .collect();

        let mut out = Vec::with_capacity(table.len());
        for row in table.rows() {
            out.push(self.row_to_object(row, &plan)?);
        }

        record(&MapEvent::RowsConverted {
            dest_path: model.path,
            rows: out.len() as u64,
        });

        Ok(out)
    }

    fn row_to_object<T>(&self, row: &Row, plan: &[Option<usize>]) -> Result<(T, MapReport), MapError>
    where
        T: Mappable + Default,
    {
        let mut obj = T::default();
        let mut pass = Pass::start(PassKind::Row, ROW_SOURCE_PATH, T::MODEL.path);

        for (index, (property, column)) in T::MODEL.properties.iter().zip(plan).enumerate() {
            let Some(cell) = column.and_then(|c| row.cell(c)) else {
                pass.settle(property.name, PropertyStatus::Skipped(SkipReason::NoMatch));
                continue;
            };

            let status = match convert_cell(property, cell, self.config()) {
                Ok(Coercion::Skip(reason)) => PropertyStatus::Skipped(reason),
                Ok(Coercion::Assign {
                    source,
                    value,
                    conversion,
                }) => assign(&mut obj, index, value, source, conversion)?,
                Err(err) => PropertyStatus::Failed(err),
            };
            pass.settle(property.name, status);
        }

        Ok((obj, pass.finish()))
    }
}

/// Convert one cell for `property`.
///
/// Non-nullable numerics parse permissively and fall back to zero; booleans
/// are true only for the literal `1`; text takes the cell's string form
/// (empty for null). Enum cells resolve like enum coercion. A null cell
/// against any other nullable property stays null. A null cell for a
/// non-nullable property of any other type is skipped, and everything else
/// receives the raw cell.
fn convert_cell(
    property: &PropertyModel,
    cell: &Value,
    config: &MapperConfig,
) -> Result<Coercion, ConversionError> {
    let text = || cell.canonical_string().unwrap_or_default();

    let parsed = match property.tag {
        TypeTag::Text => Value::Text(text()),
        _ if property.nullable && cell.is_null() => return Ok(raw(property, cell)),
        TypeTag::Enum => {
            let text = text();
            if text.trim().is_empty() {
                return Ok(Coercion::Skip(SkipReason::EmptyEnumText));
            }

            return Ok(Coercion::Assign {
                source: property.name,
                value: parse_enum(property, &text, config.enum_numeric_fallback)?,
                conversion: Conversion::EnumParse,
            });
        }
        _ if property.nullable => return Ok(raw(property, cell)),
        TypeTag::Int16 => Value::Int16(text().trim().parse().unwrap_or_default()),
        TypeTag::Int32 => Value::Int32(text().trim().parse().unwrap_or_default()),
        TypeTag::Int64 => Value::Int64(text().trim().parse().unwrap_or_default()),
        TypeTag::Decimal => Value::Decimal(Decimal::parse_or_zero(&text())),
        TypeTag::Bool => Value::Bool(text() == "1"),
        TypeTag::Other if cell.is_null() => return Ok(Coercion::Skip(SkipReason::NullCell)),
        TypeTag::Other => return Ok(raw(property, cell)),
    };

    Ok(Coercion::Assign {
        source: property.name,
        value: parsed,
        conversion: Conversion::CellParse,
    })
}

fn raw(property: &PropertyModel, cell: &Value) -> Coercion {
    Coercion::Assign {
        source: property.name,
        value: cell.clone(),
        conversion: Conversion::Direct,
    }
}

/// Default-configuration shorthand for [`Mapper::rows_to_objects`].
pub fn rows_to_objects<T>(table: &Table) -> Result<Vec<T>, MapError>
where
    T: Mappable + Default,
{
    default_mapper().rows_to_objects(table)
}

///
/// TESTS
///

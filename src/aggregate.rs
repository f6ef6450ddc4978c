use crate::errors::AggregateError;
use crate::models::{ChartData, ColumnNames, Series};
use crate::numeric::{parse_sales, parse_year};
use crate::table::{Table, cell};
use std::str::FromStr;
use tracing::warn;

/// Resolved positions of the year, month and sales columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalesColumns {
    pub year: Option<usize>,
    pub month: Option<usize>,
    pub sales: Option<usize>,
}

impl SalesColumns {
    pub fn resolve(table: &Table, names: &ColumnNames) -> Self {
        Self {
            year: table.column_index(&names.year),
            month: table.column_index(&names.month),
            sales: table.column_index(&names.sales),
        }
    }
}

/// What to do with year or sales cells that do not parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParsePolicy {
    /// Unparseable cells become NaN and flow into the sums.
    Propagate,
    /// Reject the whole table on the first bad row.
    FailFast,
    /// Drop bad rows with a warning.
    #[default]
    Skip,
}

impl FromStr for ParsePolicy {
    type Err = crate::errors::ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "propagate" => Ok(Self::Propagate),
            "fail-fast" | "fail_fast" => Ok(Self::FailFast),
            "skip" => Ok(Self::Skip),
            other => Err(crate::errors::ConfigError::UnknownPolicy(other.to_string())),
        }
    }
}

fn row_year(row: &[String], columns: &SalesColumns) -> Option<i64> {
    cell(row, columns.year).and_then(parse_year)
}

fn row_sales(row: &[String], columns: &SalesColumns) -> f64 {
    cell(row, columns.sales).map_or(f64::NAN, parse_sales)
}

/// Groups `rows` by year into yearly totals and breaks the most recent year
/// down by month.
///
/// Yearly labels keep the order in which years first appear. A year cell that
/// does not parse counts as a single "no year" group whose total is zero, and
/// its presence leaves the monthly breakdown empty since no maximum exists.
/// Sales cells that do not parse poison the total of their own year only.
pub fn aggregate(rows: &[Vec<String>], columns: &SalesColumns) -> ChartData {
    let years: Vec<Option<i64>> = rows.iter().map(|row| row_year(row, columns)).collect();

    let mut distinct: Vec<Option<i64>> = Vec::new();
    for year in &years {
        if !distinct.contains(year) {
            distinct.push(*year);
        }
    }

    let totals: Vec<f64> = distinct
        .iter()
        .map(|target| match target {
            // No row ever compares equal to an unparsed year.
            None => 0.0,
            Some(_) => rows
                .iter()
                .zip(&years)
                .filter(|(_, year)| *year == target)
                .map(|(row, _)| row_sales(row, columns))
                .sum::<f64>(),
        })
        .collect();

    let latest = if distinct.iter().any(Option::is_none) {
        None
    } else {
        distinct.iter().flatten().copied().max()
    };

    let mut monthly = Series::default();
    if let Some(latest) = latest {
        for (row, year) in rows.iter().zip(&years) {
            if *year == Some(latest) {
                monthly
                    .labels
                    .push(cell(row, columns.month).map(str::to_string));
                monthly.values.push(row_sales(row, columns));
            }
        }
    }

    ChartData {
        yearly: Series {
            labels: distinct,
            values: totals,
        },
        monthly,
    }
}

/// Runs [`aggregate`] after applying `policy` to the rows. `names` is only
/// used to word errors.
pub fn aggregate_with(
    rows: &[Vec<String>],
    columns: &SalesColumns,
    names: &ColumnNames,
    policy: ParsePolicy,
) -> Result<ChartData, AggregateError> {
    if policy == ParsePolicy::Propagate {
        return Ok(aggregate(rows, columns));
    }

    let required = [
        (columns.year, &names.year),
        (columns.month, &names.month),
        (columns.sales, &names.sales),
    ];
    for (index, name) in required {
        if index.is_none() {
            return Err(AggregateError::MissingColumn(name.clone()));
        }
    }

    let mut kept = Vec::with_capacity(rows.len());
    for (offset, row) in rows.iter().enumerate() {
        match check_row(offset + 1, row, columns, names, policy) {
            Ok(()) => kept.push(row.clone()),
            Err(err) if policy == ParsePolicy::Skip => {
                warn!("skipping {err}");
            }
            Err(err) => return Err(err),
        }
    }

    Ok(aggregate(&kept, columns))
}

fn check_row(
    row_number: usize,
    row: &[String],
    columns: &SalesColumns,
    names: &ColumnNames,
    policy: ParsePolicy,
) -> Result<(), AggregateError> {
    let missing = |column: &String| AggregateError::MissingCell {
        row: row_number,
        column: column.clone(),
    };

    let year = cell(row, columns.year).ok_or_else(|| missing(&names.year))?;
    // A short row only loses its month label when skipping.
    if policy == ParsePolicy::FailFast {
        cell(row, columns.month).ok_or_else(|| missing(&names.month))?;
    }
    let sales = cell(row, columns.sales).ok_or_else(|| missing(&names.sales))?;

    if parse_year(year).is_none() {
        return Err(AggregateError::InvalidYear {
            row: row_number,
            value: year.to_string(),
        });
    }
    if parse_sales(sales).is_nan() {
        return Err(AggregateError::InvalidSales {
            row: row_number,
            value: sales.to_string(),
        });
    }
    Ok(())
}

impl ChartData {
    /// Copy with the yearly series sorted by ascending year, unparsed years last.
    pub fn chronological(&self) -> Self {
        let mut pairs: Vec<(Option<i64>, f64)> = self
            .yearly
            .labels
            .iter()
            .copied()
            .zip(self.yearly.values.iter().copied())
            .collect();
        pairs.sort_by_key(|(year, _)| (year.is_none(), *year));

        let (labels, values) = pairs.into_iter().unzip();
        Self {
            yearly: Series { labels, values },
            monthly: self.monthly.clone(),
        }
    }
}

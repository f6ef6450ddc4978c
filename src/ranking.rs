use crate::errors::RankingError;
use crate::models::Series;
use crate::numeric::parse_grouped_number;
use crate::table::{Table, cell};
use std::collections::HashMap;

pub const DEFAULT_LIMIT: usize = 5;

/// Sums `value_column` per distinct `group_column` cell and returns the
/// `limit` largest groups, biggest first. Equal totals are ordered by name.
pub fn top_groups(
    table: &Table,
    group_column: &str,
    value_column: &str,
    limit: usize,
) -> Result<Series<String>, RankingError> {
    let group_index = table
        .column_index(group_column)
        .ok_or_else(|| RankingError::MissingColumn(group_column.to_string()))?;
    let value_index = table
        .column_index(value_column)
        .ok_or_else(|| RankingError::MissingColumn(value_column.to_string()))?;

    let mut totals: HashMap<&str, f64> = HashMap::new();
    for (offset, row) in table.rows.iter().enumerate() {
        let row_number = offset + 1;
        let group = cell(row, Some(group_index)).ok_or_else(|| RankingError::MissingCell {
            row: row_number,
            column: group_column.to_string(),
        })?;
        let raw = cell(row, Some(value_index)).ok_or_else(|| RankingError::MissingCell {
            row: row_number,
            column: value_column.to_string(),
        })?;
        let value = parse_grouped_number(raw).ok_or_else(|| RankingError::InvalidNumber {
            row: row_number,
            value: raw.to_string(),
        })?;
        *totals.entry(group).or_default() += value;
    }

    let mut ranked: Vec<(&str, f64)> = totals.into_iter().collect();
    ranked.sort_by(|(a_name, a_total), (b_name, b_total)| {
        b_total.total_cmp(a_total).then_with(|| a_name.cmp(b_name))
    });
    ranked.truncate(limit);

    Ok(Series {
        labels: ranked.iter().map(|(name, _)| name.to_string()).collect(),
        values: ranked.iter().map(|(_, total)| *total).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn campaigns() -> Table {
        Table::parse(
            "client,ad_spend,delivered_impressions\n\
             acme,100,\"1,000\"\n\
             globex,300,500\n\
             acme,250,\"2,500\"\n\
             initech,50,10\n\
             umbrella,300,20\n\
             hooli,5,1\n\
             stark,1,1\n",
        )
        .unwrap()
    }

    #[test]
    fn ranks_groups_by_summed_value() {
        let top = top_groups(&campaigns(), "client", "ad_spend", DEFAULT_LIMIT).unwrap();
        assert_eq!(top.labels, vec!["acme", "globex", "umbrella", "initech", "hooli"]);
        assert_eq!(top.values, vec![350.0, 300.0, 300.0, 50.0, 5.0]);
    }

    #[test]
    fn strips_thousands_separators() {
        let top = top_groups(&campaigns(), "client", "delivered_impressions", 2).unwrap();
        assert_eq!(top.labels, vec!["acme", "globex"]);
        assert_eq!(top.values, vec![3500.0, 500.0]);
    }

    #[test]
    fn limit_larger_than_groups_returns_everything() {
        let top = top_groups(&campaigns(), "client", "ad_spend", 50).unwrap();
        assert_eq!(top.labels.len(), 6);
    }

    #[test]
    fn unknown_column_is_an_error() {
        let err = top_groups(&campaigns(), "region", "ad_spend", 5).unwrap_err();
        assert_eq!(err, RankingError::MissingColumn("region".to_string()));
    }

    #[test]
    fn non_numeric_value_is_an_error() {
        let table = Table::parse("client,spend\nacme,12\nglobex,lots\n").unwrap();
        let err = top_groups(&table, "client", "spend", 5).unwrap_err();
        assert_eq!(
            err,
            RankingError::InvalidNumber {
                row: 2,
                value: "lots".to_string()
            }
        );
    }
}

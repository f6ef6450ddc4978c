use serde::{Deserialize, Serialize};

/// Index aligned chart labels and values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series<L> {
    pub labels: Vec<L>,
    pub values: Vec<f64>,
}

impl<L> Default for Series<L> {
    fn default() -> Self {
        Self {
            labels: Vec::new(),
            values: Vec::new(),
        }
    }
}

/// Yearly labels are `None` where the year cell did not parse; monthly labels
/// are `None` where the month cell is missing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartData {
    pub yearly: Series<Option<i64>>,
    pub monthly: Series<Option<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary<L> {
    pub total: f64,
    pub average: f64,
    pub average_display: String,
    pub highest_label: Option<L>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnNames {
    pub year: String,
    pub month: String,
    pub sales: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            year: "Year".to_string(),
            month: "Month".to_string(),
            sales: "Sales".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YearOrder {
    #[default]
    FirstSeen,
    Chronological,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryView {
    #[default]
    Monthly,
    Yearly,
}

#[derive(Debug, Deserialize)]
pub struct SalesQuery {
    #[serde(default)]
    pub order: YearOrder,
}

#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    #[serde(default)]
    pub view: SummaryView,
}

#[derive(Debug, Deserialize)]
pub struct TopQuery {
    pub group: String,
    pub value: String,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TableResponse {
    pub source: String,
    pub loaded_at: String,
    pub row_count: usize,
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorStatus {
    pub running: bool,
    pub color: String,
    pub changes: u64,
}

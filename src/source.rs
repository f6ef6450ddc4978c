use crate::errors::SourceError;
use crate::table::Table;
use std::{fmt, path::PathBuf};
use tokio::fs;
use tracing::{error, info};

/// Where the sales table comes from. Both backends share [`Table::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableSource {
    File(PathBuf),
    Http(String),
}

impl TableSource {
    /// `http://` and `https://` locations are fetched, anything else is a path.
    pub fn parse_location(location: &str) -> Self {
        let location = location.trim();
        if location.starts_with("http://") || location.starts_with("https://") {
            Self::Http(location.to_string())
        } else {
            Self::File(PathBuf::from(location))
        }
    }

    pub async fn load(&self) -> Result<Table, SourceError> {
        let result = match self {
            Self::File(path) => read_file(path.clone()).await,
            Self::Http(url) => fetch(url).await,
        }
        .and_then(|text| Table::parse(&text));

        match &result {
            Ok(table) => info!(source = %self, rows = table.row_count(), "loaded table"),
            Err(err) => error!(source = %self, "failed to load table: {err}"),
        }
        result
    }
}

impl fmt::Display for TableSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Http(url) => f.write_str(url),
        }
    }
}

async fn read_file(path: PathBuf) -> Result<String, SourceError> {
    fs::read_to_string(&path)
        .await
        .map_err(|source| SourceError::Io { path, source })
}

async fn fetch(url: &str) -> Result<String, SourceError> {
    let response = reqwest::get(url).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::Status {
            url: url.to_string(),
            status,
        });
    }
    Ok(response.text().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("sales_source_{}_{}_{name}", std::process::id(), nanos))
    }

    #[test]
    fn location_picks_backend() {
        assert_eq!(
            TableSource::parse_location("https://example.com/data.csv"),
            TableSource::Http("https://example.com/data.csv".to_string())
        );
        assert_eq!(
            TableSource::parse_location(" data/sales.csv "),
            TableSource::File(PathBuf::from("data/sales.csv"))
        );
    }

    #[tokio::test]
    async fn file_source_parses_table() {
        let path = temp_path("ok.csv");
        fs::write(&path, "Year,Month,Sales\n2024,Jan,10\n").await.unwrap();

        let table = TableSource::File(path.clone()).load().await.unwrap();
        assert_eq!(table.header, vec!["Year", "Month", "Sales"]);
        assert_eq!(table.rows, vec![vec!["2024", "Jan", "10"]]);

        fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let path = temp_path("missing.csv");
        let err = TableSource::File(path.clone()).load().await.unwrap_err();
        match err {
            SourceError::Io { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn empty_file_is_rejected() {
        let path = temp_path("empty.csv");
        fs::write(&path, "").await.unwrap();
        let err = TableSource::File(path.clone()).load().await.unwrap_err();
        assert!(matches!(err, SourceError::Empty));
        fs::remove_file(&path).await.unwrap();
    }
}

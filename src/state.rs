use crate::aggregate::{ParsePolicy, SalesColumns};
use crate::config::Config;
use crate::cycler::ColorCycler;
use crate::errors::SourceError;
use crate::models::ColumnNames;
use crate::source::TableSource;
use crate::table::Table;
use chrono::{DateTime, Local};
use std::sync::Arc;
use tokio::sync::RwLock;

/// A loaded table together with when it was read.
#[derive(Debug)]
pub struct Snapshot {
    pub table: Table,
    pub columns: SalesColumns,
    pub loaded_at: DateTime<Local>,
}

impl Snapshot {
    pub fn new(table: Table, names: &ColumnNames) -> Self {
        let columns = SalesColumns::resolve(&table, names);
        Self {
            table,
            columns,
            loaded_at: Local::now(),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub source: TableSource,
    pub policy: ParsePolicy,
    pub names: ColumnNames,
    pub snapshot: Arc<RwLock<Arc<Snapshot>>>,
    pub cycler: ColorCycler,
}

impl AppState {
    pub fn new(config: &Config, table: Table) -> Self {
        Self {
            source: config.source.clone(),
            policy: config.policy,
            snapshot: Arc::new(RwLock::new(Arc::new(Snapshot::new(table, &config.columns)))),
            names: config.columns.clone(),
            cycler: ColorCycler::new(config.color_interval),
        }
    }

    pub async fn current(&self) -> Arc<Snapshot> {
        Arc::clone(&*self.snapshot.read().await)
    }

    /// Reads the source again. The previous table stays in place on failure.
    pub async fn reload(&self) -> Result<Arc<Snapshot>, SourceError> {
        let table = self.source.load().await?;
        let fresh = Arc::new(Snapshot::new(table, &self.names));
        *self.snapshot.write().await = Arc::clone(&fresh);
        Ok(fresh)
    }
}

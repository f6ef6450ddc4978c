use crate::models::ColorStatus;
use rand::Rng;
use std::{sync::Arc, time::Duration};
use tokio::{sync::Mutex, task::JoinHandle, time};
use tracing::{debug, info};

pub const INITIAL_COLOR: &str = "#FFFFFF";

enum CyclerState {
    Idle,
    Running(JoinHandle<()>),
}

struct Palette {
    color: String,
    changes: u64,
}

/// Periodically swaps the current color for a random one while running.
#[derive(Clone)]
pub struct ColorCycler {
    interval: Duration,
    state: Arc<Mutex<CyclerState>>,
    palette: Arc<Mutex<Palette>>,
}

impl ColorCycler {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            state: Arc::new(Mutex::new(CyclerState::Idle)),
            palette: Arc::new(Mutex::new(Palette {
                color: INITIAL_COLOR.to_string(),
                changes: 0,
            })),
        }
    }

    /// Returns `false` without doing anything when already running.
    pub async fn start(&self) -> bool {
        let mut state = self.state.lock().await;
        if matches!(*state, CyclerState::Running(_)) {
            return false;
        }

        let palette = Arc::clone(&self.palette);
        let period = self.interval;
        let handle = tokio::spawn(async move {
            let mut ticker = time::interval(period);
            // The first tick completes immediately.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let mut palette = palette.lock().await;
                palette.color = random_color();
                palette.changes += 1;
                debug!(color = %palette.color, "color changed");
            }
        });

        *state = CyclerState::Running(handle);
        info!(interval_ms = period.as_millis() as u64, "color cycler started");
        true
    }

    /// Returns `false` when the cycler was already idle.
    pub async fn stop(&self) -> bool {
        let mut state = self.state.lock().await;
        match std::mem::replace(&mut *state, CyclerState::Idle) {
            CyclerState::Running(handle) => {
                handle.abort();
                // No color change may land after stop returns.
                let _ = handle.await;
                info!("color cycler stopped");
                true
            }
            CyclerState::Idle => false,
        }
    }

    pub async fn status(&self) -> ColorStatus {
        let running = matches!(*self.state.lock().await, CyclerState::Running(_));
        let palette = self.palette.lock().await;
        ColorStatus {
            running,
            color: palette.color.clone(),
            changes: palette.changes,
        }
    }
}

pub fn random_color() -> String {
    let value: u32 = rand::rng().random_range(0..=0xFF_FFFF);
    format!("#{value:06X}")
}

use super::stats::StatsSample;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Notable simulation events, logged as one JSON object per line.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(tag = "event")]
pub enum LiveEvent {
    Birth {
        id: Uuid,
        parent_id: Option<Uuid>,
        tick: u64,
        timestamp: String,
    },
    Death {
        id: Uuid,
        tick: u64,
        cause: String,
        timestamp: String,
    },
    EggLaid {
        id: Uuid,
        parent_id: Uuid,
        tick: u64,
        timestamp: String,
    },
    Hatched {
        id: Uuid,
        egg_id: Uuid,
        tick: u64,
        timestamp: String,
    },
    Extinction {
        tick: u64,
        timestamp: String,
    },
    Snapshot {
        tick: u64,
        stats: StatsSample,
        timestamp: String,
    },
}

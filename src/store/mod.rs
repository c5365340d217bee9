//! Persistence boundary: whole-document snapshots
//!
//! The document is saved as one opaque JSON record under a single key.
//! Loading must survive schema evolution: snapshots written by older
//! builds miss newer fields (the per-layout spacing records, newer style
//! toggles) and every one of them fills from defaults. Write failures
//! are logged and swallowed — saving is best-effort and never blocks
//! editing. Unreadable snapshots fall back to the default document.

use serde_json::Value;
use thiserror::Error;

use crate::document::Estimate;

/// The single record key snapshots live under
pub const STORAGE_KEY: &str = "quote-sheet-document-v1";

/// Snapshot write failures (reads never fail, they fall back)
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("snapshot serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("storage write failed: {0}")]
    Write(String),
}

/// Durable keyed storage. The browser build backs this with
/// localStorage; tests use a map.
pub trait SnapshotStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Serialize the document into the store. Failures are logged and
/// swallowed; editing must never block on persistence.
pub fn save(doc: &Estimate, store: &mut dyn SnapshotStore) {
    let json = match serde_json::to_string(doc) {
        Ok(json) => json,
        Err(err) => {
            log::warn!("skipping snapshot save: {err}");
            return;
        }
    };
    if let Err(err) = store.write(STORAGE_KEY, &json) {
        log::warn!("snapshot write failed: {err}");
    }
}

/// Load the document from the store, falling back to the default
/// document when there is no snapshot or it cannot be read.
pub fn load(store: &dyn SnapshotStore) -> Estimate {
    match store.read(STORAGE_KEY) {
        Some(json) => from_json(&json),
        None => Estimate::default(),
    }
}

/// Parse a snapshot, tolerating older shapes. Missing fields fill from
/// defaults; unknown fields are ignored; garbage falls back to the
/// default document.
pub fn from_json(json: &str) -> Estimate {
    let mut value: Value = match serde_json::from_str(json) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("snapshot is not valid JSON, starting fresh: {err}");
            return Estimate::default();
        }
    };

    migrate(&mut value);

    match serde_json::from_value(value) {
        Ok(doc) => doc,
        Err(err) => {
            log::warn!("snapshot did not match the document schema, starting fresh: {err}");
            Estimate::default()
        }
    }
}

/// Rewrite pre-union snapshots in place: older builds stored the
/// discount as a bare number next to a `discountType` discriminant.
fn migrate(value: &mut Value) {
    let Some(obj) = value.as_object_mut() else {
        return;
    };

    // a bare number is the oldest shape of all, before the discriminant
    let legacy_kind = match obj.get("discountType").and_then(Value::as_str) {
        Some("rate") => Some("rate"),
        Some("amount") => Some("amount"),
        _ => obj.get("discount").and_then(Value::as_f64).map(|_| "amount"),
    };

    if let Some(kind) = legacy_kind {
        let amount = obj.get("discount").and_then(Value::as_f64).unwrap_or(0.0);
        let discount = match kind {
            "rate" => serde_json::json!({ "kind": "rate", "value": amount }),
            _ => serde_json::json!({ "kind": "amount", "value": amount as i64 }),
        };
        obj.insert("discount".into(), discount);
        obj.remove("discountType");
    }
}

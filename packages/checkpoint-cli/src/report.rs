//! Reading outgoing transactions from disk and reporting on them

use eyre::{eyre, Result, WrapErr};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use gravity_rs::{AnyOutgoingTx, CheckpointError, OutgoingTx};

/// What `inspect` prints for one transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TxReport {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub store_index: String,
    pub nonce: u64,
    pub source_height: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkpoint: Option<String>,
}

impl TxReport {
    /// Build a report; the checkpoint is only computed when a gravity id is given
    pub fn build(tx: &AnyOutgoingTx, gravity_id: Option<&[u8]>) -> Result<Self, CheckpointError> {
        let checkpoint = match gravity_id {
            Some(id) => Some(tx.checkpoint(id)?.to_hex()),
            None => None,
        };

        Ok(TxReport {
            kind: tx.kind(),
            store_index: format!("0x{}", hex::encode(tx.store_index())),
            nonce: tx.nonce(),
            source_height: tx.source_height(),
            checkpoint,
        })
    }
}

/// Read a file holding one tagged transaction or an array of them
pub fn read_transactions(path: &Path) -> Result<Vec<AnyOutgoingTx>> {
    let raw = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
    let txs = parse_transactions(&raw)
        .wrap_err_with(|| format!("Invalid outgoing transaction file {}", path.display()))?;

    info!(
        path = %path.display(),
        count = txs.len(),
        "Loaded outgoing transactions"
    );
    Ok(txs)
}

/// Parse one tagged transaction or an array of them
pub fn parse_transactions(raw: &str) -> Result<Vec<AnyOutgoingTx>> {
    let value: serde_json::Value = serde_json::from_str(raw).wrap_err("Invalid JSON")?;

    let txs = match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, item)| {
                serde_json::from_value(item)
                    .map_err(|e| eyre!("transaction {}: {}", i, e))
            })
            .collect::<Result<Vec<AnyOutgoingTx>>>()?,
        single => vec![serde_json::from_value(single).wrap_err("transaction 0")?],
    };

    for tx in &txs {
        debug!(kind = tx.kind(), nonce = tx.nonce(), "Parsed outgoing transaction");
    }
    Ok(txs)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIGNER_SET: &str = r#"{
        "type": "signer_set",
        "nonce": 1,
        "height": 42,
        "signers": [
            {"ethereum_address": "0x1111111111111111111111111111111111111111", "power": 5000}
        ]
    }"#;

    #[test]
    fn test_parse_single() {
        let txs = parse_transactions(SIGNER_SET).unwrap();
        assert_eq!(txs.len(), 1);
        assert_eq!(txs[0].kind(), "signer_set");
    }

    #[test]
    fn test_parse_array() {
        let raw = format!("[{}, {}]", SIGNER_SET, SIGNER_SET.replace("\"nonce\": 1", "\"nonce\": 2"));
        let txs = parse_transactions(&raw).unwrap();
        assert_eq!(txs.len(), 2);
        assert_eq!(txs[1].nonce(), 2);
    }

    #[test]
    fn test_parse_reports_bad_entry_index() {
        let bad = SIGNER_SET.replace("0x1111111111111111111111111111111111111111", "0x11");
        let raw = format!("[{}, {}]", SIGNER_SET, bad);
        let err = parse_transactions(&raw).unwrap_err();
        assert!(err.to_string().contains("transaction 1"));
    }

    #[test]
    fn test_report_with_checkpoint() {
        let txs = parse_transactions(SIGNER_SET).unwrap();
        let report = TxReport::build(&txs[0], Some(&b"test-id"[..])).unwrap();

        assert_eq!(report.kind, "signer_set");
        assert_eq!(report.store_index, "0x010000000000000001");
        assert_eq!(report.source_height, 42);
        assert_eq!(
            report.checkpoint.as_deref(),
            Some("0xd996c7f47a9ac766c37b3b01d619ca14947e104889382b065903a8c478bee81e")
        );
    }

    #[test]
    fn test_report_without_gravity_id() {
        let txs = parse_transactions(SIGNER_SET).unwrap();
        let report = TxReport::build(&txs[0], None).unwrap();
        assert_eq!(report.checkpoint, None);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["type"], "signer_set");
        assert!(json.get("checkpoint").is_none());
    }

    #[test]
    fn test_report_oversized_gravity_id() {
        let txs = parse_transactions(SIGNER_SET).unwrap();
        let err = TxReport::build(&txs[0], Some(&[0u8; 40][..])).unwrap_err();
        assert_eq!(err, CheckpointError::OversizedIdentifier { len: 40 });
    }
}

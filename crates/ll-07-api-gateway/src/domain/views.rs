//! Response bodies that add display fields to subsystem types.

use ll_02_consent_flow::{ConsentOutcome, ConsentStage};
use ll_03_donor_registration::SubmitState;
use ll_04_ledger_store::LedgerRecord;
use ll_06_preferences::ThemePreference;
use serde::Serialize;
use shared_bus::ConsentSource;

/// Ledger record plus the truncated forms the ledger table shows.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerRecordView {
    #[serde(flatten)]
    pub record: LedgerRecord,
    pub short_wallet: String,
    pub short_hash: String,
}

impl From<LedgerRecord> for LedgerRecordView {
    fn from(record: LedgerRecord) -> Self {
        Self {
            short_wallet: record.short_wallet(),
            short_hash: record.short_hash(),
            record,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletView {
    pub address: String,
    pub display: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitStateView {
    pub submit_state: SubmitState,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsentView {
    pub stage: ConsentStage,
    pub request: Option<ConsentSource>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsentApproveView {
    pub outcome: ConsentOutcome,
    pub stage: ConsentStage,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsentDismissView {
    pub cancelled: bool,
    pub stage: ConsentStage,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeView {
    pub theme: ThemePreference,
    pub dark: bool,
}

impl From<ThemePreference> for ThemeView {
    fn from(theme: ThemePreference) -> Self {
        Self {
            theme,
            dark: theme.is_dark(),
        }
    }
}

//! Billing-cycle invoice generation.
//!
//! For a given date, every active contract belongs to exactly one billing
//! period, identified by a deterministic period key derived from the
//! contract's billing cycle. The generator ensures one invoice exists per
//! (contract, period): it checks for an existing invoice before creating one,
//! so a run is safe to repeat within the same period, and the unique index on
//! (`contract_id`, `period_key`) turns any concurrent duplicate create into a
//! rejected insert rather than a second invoice.

use crate::{
    core::invoice::PaymentStatus,
    entities::{Contract, contract, invoice},
    errors::{Error, Result},
};
use chrono::{Datelike, Duration, NaiveDate};
use rust_decimal::Decimal;
use sea_orm::{Set, prelude::*};
use tracing::warn;

/// Days between an invoice's issue date and its due date, for every cycle.
pub const DUE_DATE_OFFSET_DAYS: i64 = 7;

/// Billing recurrence pattern of a contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingCycle {
    /// One invoice per ISO-8601 week
    Weekly,
    /// Two invoices per calendar month, split on the 15th
    Biweekly,
    /// One invoice per calendar month
    Monthly,
}

impl BillingCycle {
    /// The canonical string stored in the database.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Biweekly => "biweekly",
            Self::Monthly => "monthly",
        }
    }

    /// Parses a stored billing-cycle string.
    ///
    /// An unrecognized value is an error, never coerced to a default cycle;
    /// the generator skips such contracts with a warning instead of guessing
    /// a billing period for them.
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "weekly" => Ok(Self::Weekly),
            "biweekly" => Ok(Self::Biweekly),
            "monthly" => Ok(Self::Monthly),
            _ => Err(Error::UnsupportedBillingCycle {
                value: value.to_string(),
            }),
        }
    }
}

/// Derives the period key identifying the billing interval containing `date`.
///
/// Keys are cycle-local: the same date maps to different keys under different
/// cycles, and changing a contract's cycle mid-period simply yields a new key
/// rather than being reconciled with the old one.
///
/// * weekly: `"2025-W01"` - ISO week calendar, so a date in late December can
///   belong to the next year's first week
/// * biweekly: `"2024-02-Q1"` - first half through the 15th, second half after,
///   regardless of month length
/// * monthly: `"2024-07"`
#[must_use]
pub fn derive_period_key(cycle: BillingCycle, date: NaiveDate) -> String {
    match cycle {
        BillingCycle::Weekly => {
            let week = date.iso_week();
            format!("{}-W{:02}", week.year(), week.week())
        }
        BillingCycle::Biweekly => {
            let half = if date.day() <= 15 { 1 } else { 2 };
            format!("{}-{:02}-Q{}", date.year(), date.month(), half)
        }
        BillingCycle::Monthly => format!("{}-{:02}", date.year(), date.month()),
    }
}

/// One invoice produced by a generation run.
#[derive(Debug, Clone)]
pub struct GeneratedInvoice {
    /// Contract the invoice charges
    pub contract_id: i64,
    /// Billing period the invoice covers
    pub period_key: String,
    /// Amount charged
    pub amount: Decimal,
}

/// Outcome of one generation run over all active contracts.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    /// Details of each invoice created during this run
    pub created_invoices: Vec<GeneratedInvoice>,
    /// Number of invoices created
    pub created_count: usize,
    /// Number of contracts skipped because of a per-contract failure
    pub skipped_count: usize,
    /// The "today" the run was executed for
    pub generation_date: NaiveDate,
}

/// Generates the missing invoices for the billing period containing `today`,
/// across all active contracts.
///
/// Contracts are processed independently: a failure on one (an unsupported
/// billing cycle, a rejected insert) is logged, counted as skipped, and never
/// aborts the rest of the batch. Only a failure to read the contract store at
/// all surfaces as an error.
///
/// A contract whose current period already has an invoice is left untouched,
/// which makes the whole run idempotent: re-running after a crash or an
/// overlapping scheduler trigger never duplicates an invoice.
pub async fn generate_due_invoices(
    db: &DatabaseConnection,
    today: NaiveDate,
) -> Result<GenerationResult> {
    let active_contracts = Contract::find()
        .filter(contract::Column::Active.eq(true))
        .all(db)
        .await?;

    let mut created_invoices = Vec::new();
    let mut skipped_count = 0;

    for contract in &active_contracts {
        match generate_invoice_for_contract(db, contract, today).await {
            Ok(Some(created)) => created_invoices.push(created),
            Ok(None) => {} // already invoiced for this period
            Err(error) => {
                warn!(
                    contract_id = contract.id,
                    %error,
                    "skipping contract during invoice generation"
                );
                skipped_count += 1;
            }
        }
    }

    Ok(GenerationResult {
        created_count: created_invoices.len(),
        skipped_count,
        generation_date: today,
        created_invoices,
    })
}

/// Generates the invoice for a single contract's current period, if missing.
///
/// Returns `Ok(None)` when the period is already invoiced. The existence
/// check is the authoritative gate; an invoice is never created
/// unconditionally.
async fn generate_invoice_for_contract(
    db: &DatabaseConnection,
    contract: &contract::Model,
    today: NaiveDate,
) -> Result<Option<GeneratedInvoice>> {
    let cycle = BillingCycle::parse(&contract.billing_cycle)?;
    let period_key = derive_period_key(cycle, today);

    if crate::core::invoice::invoice_exists_for_period(db, contract.id, &period_key).await? {
        return Ok(None);
    }

    let new_invoice = invoice::ActiveModel {
        uid: Set(Uuid::new_v4()),
        contract_id: Set(contract.id),
        issue_date: Set(today),
        due_date: Set(today + Duration::days(DUE_DATE_OFFSET_DAYS)),
        amount: Set(contract.amount),
        payment_status: Set(PaymentStatus::Pending.as_str().to_string()),
        period_key: Set(Some(period_key.clone())),
        ..Default::default()
    };
    new_invoice.insert(db).await?;

    Ok(Some(GeneratedInvoice {
        contract_id: contract.id,
        period_key,
        amount: contract.amount,
    }))
}

/// Formats a generation result into a human-readable summary string.
/// Useful for logging the outcome of a scheduled run.
#[must_use]
pub fn format_generation_summary(result: &GenerationResult) -> String {
    use std::fmt::Write;

    let mut summary = format!(
        "Invoice Generation - {} - Created {} invoices\n",
        result.generation_date.format("%Y-%m-%d"),
        result.created_count
    );

    if result.skipped_count > 0 {
        // write! is infallible when writing to String, so unwrap is safe
        writeln!(summary, "  Skipped {} contracts (see warnings)", result.skipped_count).unwrap();
    }

    for created in &result.created_invoices {
        writeln!(
            summary,
            "  Contract #{} - {} | ${}",
            created.contract_id, created.period_key, created.amount
        )
        .unwrap();
    }

    summary
}

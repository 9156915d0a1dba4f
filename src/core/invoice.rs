//! Invoice business logic - Handles invoice lookups, creation, and payment status.
//!
//! Invoices are normally produced by the billing generator (see
//! [`crate::core::billing`]); the operations here cover direct creation by an
//! operator, the period-existence gate the generator relies on, and the
//! payment-status lifecycle (pending, paid, overdue).

use crate::{
    entities::{Contract, Invoice, invoice},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::sea_query::Expr;
use sea_orm::{QueryOrder, Set, prelude::*};

/// Payment state of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Issued, awaiting payment
    Pending,
    /// Settled in full
    Paid,
    /// Past its due date without payment
    Overdue,
}

impl PaymentStatus {
    /// The canonical string stored in the database.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Overdue => "overdue",
        }
    }

    /// Parses a stored payment status string.
    ///
    /// Unknown values are an error rather than being coerced to a default, so
    /// bad data surfaces instead of being silently reinterpreted.
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "pending" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            "overdue" => Ok(Self::Overdue),
            _ => Err(Error::InvalidPaymentStatus {
                value: value.to_string(),
            }),
        }
    }
}

/// Checks whether an invoice already exists for the given contract and
/// billing period.
///
/// This is the authoritative gate the generator consults before creating an
/// invoice; it is what makes re-running a generation batch safe.
pub async fn invoice_exists_for_period(
    db: &DatabaseConnection,
    contract_id: i64,
    period_key: &str,
) -> Result<bool> {
    Invoice::find()
        .filter(invoice::Column::ContractId.eq(contract_id))
        .filter(invoice::Column::PeriodKey.eq(period_key))
        .one(db)
        .await
        .map(|found| found.is_some())
        .map_err(Into::into)
}

/// Creates an invoice directly, outside the periodic generation flow.
///
/// Used when an operator raises a one-off charge against a contract. Such
/// invoices carry no period key and are therefore never counted against the
/// one-invoice-per-period rule.
pub async fn create_invoice(
    db: &DatabaseConnection,
    contract_id: i64,
    issue_date: NaiveDate,
    due_date: NaiveDate,
    amount: Decimal,
) -> Result<invoice::Model> {
    if amount <= Decimal::ZERO {
        return Err(Error::InvalidAmount { amount });
    }

    Contract::find_by_id(contract_id)
        .one(db)
        .await?
        .ok_or(Error::ContractNotFound { id: contract_id })?;

    let new_invoice = invoice::ActiveModel {
        uid: Set(Uuid::new_v4()),
        contract_id: Set(contract_id),
        issue_date: Set(issue_date),
        due_date: Set(due_date),
        amount: Set(amount),
        payment_status: Set(PaymentStatus::Pending.as_str().to_string()),
        period_key: Set(None),
        ..Default::default()
    };

    Ok(new_invoice.insert(db).await?)
}

/// Retrieves an invoice by its externally-visible token.
pub async fn get_invoice_by_uid(
    db: &DatabaseConnection,
    uid: Uuid,
) -> Result<Option<invoice::Model>> {
    Invoice::find()
        .filter(invoice::Column::Uid.eq(uid))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all invoices for a contract, newest first.
pub async fn get_invoices_for_contract(
    db: &DatabaseConnection,
    contract_id: i64,
) -> Result<Vec<invoice::Model>> {
    Invoice::find()
        .filter(invoice::Column::ContractId.eq(contract_id))
        .order_by_desc(invoice::Column::IssueDate)
        .order_by_desc(invoice::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Sets the payment status of an invoice.
///
/// This is the hook for operators and external payment processing; the
/// billing generator itself never updates an invoice once created.
pub async fn set_payment_status(
    db: &DatabaseConnection,
    invoice_id: i64,
    status: PaymentStatus,
) -> Result<invoice::Model> {
    let existing = Invoice::find_by_id(invoice_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::InvoiceNotFound {
            id: invoice_id.to_string(),
        })?;

    let mut active_model: invoice::ActiveModel = existing.into();
    active_model.payment_status = Set(status.as_str().to_string());
    Ok(active_model.update(db).await?)
}

/// Flips every pending invoice whose due date has passed to overdue.
///
/// Runs as a single `UPDATE ... WHERE` statement and returns the number of
/// invoices affected. Paid invoices are never touched.
pub async fn mark_overdue_invoices(db: &DatabaseConnection, today: NaiveDate) -> Result<u64> {
    let result = Invoice::update_many()
        .col_expr(
            invoice::Column::PaymentStatus,
            Expr::value(PaymentStatus::Overdue.as_str()),
        )
        .filter(invoice::Column::PaymentStatus.eq(PaymentStatus::Pending.as_str()))
        .filter(invoice::Column::DueDate.lt(today))
        .exec(db)
        .await?;

    Ok(result.rows_affected)
}

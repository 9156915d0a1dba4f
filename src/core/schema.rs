//! Static form-descriptor registry.
//!
//! Editing surfaces (dashboards, admin forms) need to know which fields each
//! entity exposes, how to label them, and which input to render. Rather than
//! introspecting entity metadata at runtime, the registry is an explicit
//! static mapping from entity kind to an ordered list of field descriptors,
//! built once and consulted. Rendering itself lives elsewhere.

use crate::core::billing::BillingCycle;
use crate::core::invoice::PaymentStatus;

/// Input widget a field should be edited with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Free-form single-line text
    Text,
    /// Email address
    Email,
    /// Numeric value (integer or decimal)
    Number,
    /// Calendar date
    Date,
    /// One value out of a fixed choice set
    Select,
}

/// Describes one editable field of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field name as stored in the entity
    pub name: &'static str,
    /// Human-readable label
    pub label: &'static str,
    /// Input widget to render
    pub input: InputKind,
    /// Whether a value must be provided
    pub required: bool,
    /// Fixed choice set for [`InputKind::Select`] fields, empty otherwise
    pub choices: &'static [&'static str],
}

/// The entity kinds the back-office edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// A renting client
    Client,
    /// A fleet vehicle
    Vehicle,
    /// A rental contract
    Contract,
    /// A billing invoice
    Invoice,
}

/// Choice set for contract billing cycles, aligned with [`BillingCycle`].
pub const BILLING_CYCLE_CHOICES: &[&str] = &[
    BillingCycle::Weekly.as_str(),
    BillingCycle::Biweekly.as_str(),
    BillingCycle::Monthly.as_str(),
];

/// Choice set for invoice payment states, aligned with [`PaymentStatus`].
pub const PAYMENT_STATUS_CHOICES: &[&str] = &[
    PaymentStatus::Pending.as_str(),
    PaymentStatus::Paid.as_str(),
    PaymentStatus::Overdue.as_str(),
];

const CLIENT_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor {
        name: "first_name",
        label: "First name",
        input: InputKind::Text,
        required: true,
        choices: &[],
    },
    FieldDescriptor {
        name: "last_name",
        label: "Last name",
        input: InputKind::Text,
        required: true,
        choices: &[],
    },
    FieldDescriptor {
        name: "document_number",
        label: "Document number",
        input: InputKind::Text,
        required: true,
        choices: &[],
    },
    FieldDescriptor {
        name: "phone",
        label: "Phone",
        input: InputKind::Text,
        required: false,
        choices: &[],
    },
    FieldDescriptor {
        name: "email",
        label: "Email",
        input: InputKind::Email,
        required: true,
        choices: &[],
    },
];

const VEHICLE_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor {
        name: "brand",
        label: "Brand",
        input: InputKind::Text,
        required: true,
        choices: &[],
    },
    FieldDescriptor {
        name: "model",
        label: "Model",
        input: InputKind::Text,
        required: true,
        choices: &[],
    },
    FieldDescriptor {
        name: "license_plate",
        label: "License plate",
        input: InputKind::Text,
        required: true,
        choices: &[],
    },
    FieldDescriptor {
        name: "year",
        label: "Year",
        input: InputKind::Number,
        required: false,
        choices: &[],
    },
];

const CONTRACT_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor {
        name: "client_id",
        label: "Client",
        input: InputKind::Number,
        required: true,
        choices: &[],
    },
    FieldDescriptor {
        name: "vehicle_id",
        label: "Vehicle",
        input: InputKind::Number,
        required: true,
        choices: &[],
    },
    FieldDescriptor {
        name: "start_date",
        label: "Start date",
        input: InputKind::Date,
        required: true,
        choices: &[],
    },
    FieldDescriptor {
        name: "amount",
        label: "Amount per period",
        input: InputKind::Number,
        required: true,
        choices: &[],
    },
    FieldDescriptor {
        name: "billing_cycle",
        label: "Billing cycle",
        input: InputKind::Select,
        required: true,
        choices: BILLING_CYCLE_CHOICES,
    },
];

const INVOICE_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor {
        name: "contract_id",
        label: "Contract",
        input: InputKind::Number,
        required: true,
        choices: &[],
    },
    FieldDescriptor {
        name: "issue_date",
        label: "Issue date",
        input: InputKind::Date,
        required: true,
        choices: &[],
    },
    FieldDescriptor {
        name: "due_date",
        label: "Due date",
        input: InputKind::Date,
        required: true,
        choices: &[],
    },
    FieldDescriptor {
        name: "amount",
        label: "Amount",
        input: InputKind::Number,
        required: true,
        choices: &[],
    },
    FieldDescriptor {
        name: "payment_status",
        label: "Payment status",
        input: InputKind::Select,
        required: true,
        choices: PAYMENT_STATUS_CHOICES,
    },
];

/// Returns the ordered field descriptors for an entity kind.
#[must_use]
pub const fn fields_for(kind: EntityKind) -> &'static [FieldDescriptor] {
    match kind {
        EntityKind::Client => CLIENT_FIELDS,
        EntityKind::Vehicle => VEHICLE_FIELDS,
        EntityKind::Contract => CONTRACT_FIELDS,
        EntityKind::Invoice => INVOICE_FIELDS,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_field_names_unique_per_entity() {
        for kind in [
            EntityKind::Client,
            EntityKind::Vehicle,
            EntityKind::Contract,
            EntityKind::Invoice,
        ] {
            let fields = fields_for(kind);
            let names: HashSet<&str> = fields.iter().map(|f| f.name).collect();
            assert_eq!(names.len(), fields.len(), "{kind:?} has duplicate fields");
        }
    }

    #[test]
    fn test_select_fields_carry_choices() {
        for kind in [
            EntityKind::Client,
            EntityKind::Vehicle,
            EntityKind::Contract,
            EntityKind::Invoice,
        ] {
            for field in fields_for(kind) {
                if field.input == InputKind::Select {
                    assert!(!field.choices.is_empty(), "{} has no choices", field.name);
                } else {
                    assert!(field.choices.is_empty(), "{} has stray choices", field.name);
                }
            }
        }
    }

    #[test]
    fn test_billing_cycle_choices_parse() {
        for choice in BILLING_CYCLE_CHOICES {
            assert!(BillingCycle::parse(choice).is_ok());
        }
    }

    #[test]
    fn test_payment_status_choices_parse() {
        for choice in PAYMENT_STATUS_CHOICES {
            assert!(PaymentStatus::parse(choice).is_ok());
        }
    }

    #[test]
    fn test_contract_form_selects_billing_cycle() {
        let cycle_field = fields_for(EntityKind::Contract)
            .iter()
            .find(|f| f.name == "billing_cycle")
            .unwrap();
        assert_eq!(cycle_field.input, InputKind::Select);
        assert_eq!(cycle_field.choices, BILLING_CYCLE_CHOICES);
    }
}

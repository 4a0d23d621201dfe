//! Invoice entity - One row per issued invoice.
//!
//! Amounts are stored as integer cents and only converted to major units at
//! the display or edit-form boundary. Status is restricted to the two-value
//! `InvoiceStatus` enum at the type level.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Invoice database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "invoices")]
pub struct Model {
    /// Unique identifier for the invoice
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// ID of the customer this invoice was issued to
    pub customer_id: String,
    /// Invoice amount in integer cents, never negative at rest
    pub amount: i64,
    /// Date the invoice was issued
    pub date: Date,
    /// Payment status, either pending or paid
    pub status: InvoiceStatus,
}

/// Payment status of an invoice. No other values are valid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    /// Issued but not yet paid
    #[sea_orm(string_value = "pending")]
    Pending,
    /// Payment received
    #[sea_orm(string_value = "paid")]
    Paid,
}

/// Defines relationships between Invoice and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each invoice belongs to one customer
    #[sea_orm(
        belongs_to = "super::customer::Entity",
        from = "Column::CustomerId",
        to = "super::customer::Column::Id"
    )]
    Customer,
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

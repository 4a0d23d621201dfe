//! Customer entity - One row per billable customer.
//!
//! Customers are referenced by invoices through `customer_id` and carry the
//! display fields (name, email, avatar) the dashboard tables join against.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Customer database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    /// Unique identifier for the customer
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Full display name
    pub name: String,
    /// Contact email address
    pub email: String,
    /// Path or URL of the customer's avatar image
    pub image_url: String,
}

/// Defines relationships between Customer and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One customer has many invoices
    #[sea_orm(has_many = "super::invoice::Entity")]
    Invoices,
}

impl Related<super::invoice::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Invoices.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

//! Revenue entity - Pre-aggregated monthly revenue for the dashboard chart.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Revenue database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "revenue")]
pub struct Model {
    /// Month label (e.g. "Jan"), one row per month
    #[sea_orm(primary_key, auto_increment = false)]
    pub month: String,
    /// Revenue for that month in whole currency units
    pub revenue: i64,
}

/// Revenue rows stand alone; there are no relations to other entities.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

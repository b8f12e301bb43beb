//! Row-to-record mapping for every order-store entity.
//!
//! # Responsibility
//! - Own the column list of each reference table.
//! - Turn one `SqlRow` into one domain record, rejecting invalid state.
//!
//! # Invariants
//! - Every query returning an entity selects `T::COLUMNS` from `T::TABLE`
//!   and maps through `T::from_row`.

use crate::db::{Select, SqlRow};
use crate::model::customer::Customer;
use crate::model::jeep::{Jeep, JeepModel};
use crate::model::option::{JeepOption, OptionType};
use crate::model::part::{Color, Engine, Tire};
use crate::repo::{RepoError, RepoResult};

/// Anything that can be built from one result row.
pub trait FromRow: Sized {
    const TABLE: &'static str;
    const COLUMNS: &'static [&'static str];

    fn from_row(row: &SqlRow) -> RepoResult<Self>;

    /// `SELECT <COLUMNS> FROM <TABLE>` with no filters yet.
    fn select() -> Select {
        Select::from(Self::TABLE, Self::COLUMNS)
    }
}

impl FromRow for Customer {
    const TABLE: &'static str = "customers";
    const COLUMNS: &'static [&'static str] = &[
        "customer_pk",
        "customer_id",
        "first_name",
        "last_name",
        "phone",
    ];

    fn from_row(row: &SqlRow) -> RepoResult<Self> {
        Ok(Self {
            customer_pk: row.get_i64("customer_pk")?,
            customer_id: row.get_text("customer_id")?,
            first_name: row.get_text("first_name")?,
            last_name: row.get_text("last_name")?,
            phone: row.get_text("phone")?,
        })
    }
}

impl FromRow for Jeep {
    const TABLE: &'static str = "models";
    const COLUMNS: &'static [&'static str] = &["model_pk", "model_id", "trim_level", "num_doors"];

    fn from_row(row: &SqlRow) -> RepoResult<Self> {
        let model_text = row.get_text("model_id")?;
        let model_id = JeepModel::parse(&model_text).ok_or_else(|| {
            RepoError::InvalidData(format!("invalid model `{model_text}` in models.model_id"))
        })?;

        Ok(Self {
            model_pk: row.get_i64("model_pk")?,
            model_id,
            trim_level: row.get_text("trim_level")?,
            num_doors: row.get_u32("num_doors")?,
        })
    }
}

impl FromRow for Color {
    const TABLE: &'static str = "colors";
    const COLUMNS: &'static [&'static str] = &["color_pk", "color_id"];

    fn from_row(row: &SqlRow) -> RepoResult<Self> {
        Ok(Self {
            color_pk: row.get_i64("color_pk")?,
            color_id: row.get_text("color_id")?,
        })
    }
}

impl FromRow for Engine {
    const TABLE: &'static str = "engines";
    const COLUMNS: &'static [&'static str] = &["engine_pk", "engine_id"];

    fn from_row(row: &SqlRow) -> RepoResult<Self> {
        Ok(Self {
            engine_pk: row.get_i64("engine_pk")?,
            engine_id: row.get_text("engine_id")?,
        })
    }
}

impl FromRow for Tire {
    const TABLE: &'static str = "tires";
    const COLUMNS: &'static [&'static str] = &[
        "tire_pk",
        "tire_id",
        "tire_size",
        "manufacturer",
        "warranty_miles",
        "price",
    ];

    fn from_row(row: &SqlRow) -> RepoResult<Self> {
        Ok(Self {
            tire_pk: row.get_i64("tire_pk")?,
            tire_id: row.get_text("tire_id")?,
            tire_size: row.get_text("tire_size")?,
            manufacturer: row.get_text("manufacturer")?,
            warranty_miles: row.get_u32("warranty_miles")?,
            price: row.get_decimal("price")?,
        })
    }
}

impl FromRow for JeepOption {
    const TABLE: &'static str = "options";
    const COLUMNS: &'static [&'static str] = &[
        "option_pk",
        "option_id",
        "category",
        "manufacturer",
        "name",
        "price",
    ];

    fn from_row(row: &SqlRow) -> RepoResult<Self> {
        let category_text = row.get_text("category")?;
        let category = OptionType::parse(&category_text).ok_or_else(|| {
            RepoError::InvalidData(format!(
                "invalid option category `{category_text}` in options.category"
            ))
        })?;

        Ok(Self {
            option_pk: row.get_i64("option_pk")?,
            option_id: row.get_text("option_id")?,
            category,
            manufacturer: row.get_text("manufacturer")?,
            name: row.get_text("name")?,
            price: row.get_decimal("price")?,
        })
    }
}

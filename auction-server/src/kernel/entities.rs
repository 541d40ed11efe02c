use {
    serde::{
        Deserialize,
        Serialize,
    },
    uuid::Uuid,
};

pub type UserId = Uuid;

/// Physical condition of the product being auctioned. Carried through
/// storage verbatim; the lifecycle engine never inspects it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "product_condition", rename_all = "snake_case")]
pub enum ProductCondition {
    New,
    Used,
    Refurbished,
}

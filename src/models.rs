use chrono::NaiveDateTime;
use sqlx::prelude::FromRow;
use uuid::Uuid;

/// Closed set of account roles. The client application decides which screens
/// to open from this value; the server only ever reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Client,
    Realtor,
    Performer,
    Admin,
}

impl Role {
    /// Parses a stored role value. Fixed-width character columns pad with
    /// spaces, so the value is trimmed first.
    pub fn parse(value: &str) -> Option<Role> {
        match value.trim() {
            "client" => Some(Role::Client),
            "realtor" => Some(Role::Realtor),
            "performer" => Some(Role::Performer),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Client => "client",
            Role::Realtor => "realtor",
            Role::Performer => "performer",
            Role::Admin => "admin",
        }
    }
}

#[derive(Debug, FromRow)]
pub struct UserAccount {
    pub id: Uuid,
    pub login: String,
    pub password_hash: String,
    pub role: String,
}

#[derive(Debug, FromRow)]
pub struct Client {
    pub id: Uuid,
    pub full_name: String,
    pub phone_number: String,
    pub login: String,
    pub photo: Vec<u8>,
}

#[derive(Debug, FromRow)]
pub struct Order {
    pub id: Uuid,
    pub order_number: String,
    pub client_id: Uuid,
    pub contract_id: Option<Uuid>,
    pub realtor_id: Option<Uuid>,
    pub basic_info: String,
    pub status: String,
    pub start_date: NaiveDateTime,
    pub end_date: Option<NaiveDateTime>,
}

#[derive(Debug, FromRow)]
pub struct Billing {
    pub id: Uuid,
    pub status: String,
    pub price: f64,
    pub payment_date: Option<NaiveDateTime>,
}

#[derive(Debug, FromRow)]
pub struct Realtor {
    pub id: Uuid,
    pub phone_number: String,
    pub rating: f64,
    pub experience: i32,
    pub full_name: String,
    pub photo: Vec<u8>,
}

#[derive(Debug, FromRow)]
pub struct Contract {
    pub id: Uuid,
    pub reg_number: String,
    pub contract_number: String,
    pub details: String,
}

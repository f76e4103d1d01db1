use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Billing, Client, Contract, Order, Realtor, Role};

/// Wire format for timestamps: `YYYY-MM-DD HH:MM:SS`, UTC-naive.
pub mod sql_datetime {
    use chrono::NaiveDateTime;
    use serde::Serializer;

    pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S: Serializer>(dt: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&dt.format(FORMAT).to_string())
    }
}

/// Same format for optional timestamps; pair with
/// `skip_serializing_if = "Option::is_none"` so null dates are omitted,
/// never fabricated.
pub mod sql_datetime_opt {
    use chrono::NaiveDateTime;
    use serde::Serializer;

    pub fn serialize<S: Serializer>(dt: &Option<NaiveDateTime>, s: S) -> Result<S::Ok, S::Error> {
        match dt {
            Some(dt) => super::sql_datetime::serialize(dt, s),
            None => s.serialize_none(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthorizeForm {
    pub login: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoginQuery {
    pub login: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct IdQuery {
    pub id: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NewResponseForm {
    pub login: Option<String>,
    pub message: Option<String>,
    pub realtor_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AuthorizedView {
    pub role: Role,
    pub token: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub login: String,
    pub role: Role,
    pub exp: usize,
}

impl Claims {
    pub fn new(login: &str, role: Role, exp: usize) -> Self {
        Self {
            login: login.to_string(),
            role,
            exp,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BillingView {
    pub id: Uuid,
    pub status: String,
    pub price: f64,
    #[serde(with = "sql_datetime_opt", skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<chrono::NaiveDateTime>,
}

impl From<Billing> for BillingView {
    fn from(billing: Billing) -> Self {
        Self {
            id: billing.id,
            status: billing.status,
            price: billing.price,
            payment_date: billing.payment_date,
        }
    }
}

/// Short row for the client's order list screen.
#[derive(Debug, Serialize)]
pub struct OrderSummaryView {
    pub id: Uuid,
    pub status: String,
    #[serde(with = "sql_datetime")]
    pub start_date: chrono::NaiveDateTime,
    #[serde(with = "sql_datetime_opt", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<chrono::NaiveDateTime>,
}

impl From<Order> for OrderSummaryView {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            status: order.status,
            start_date: order.start_date,
            end_date: order.end_date,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct OrderView {
    pub id: Uuid,
    pub order_number: String,
    pub client_id: Uuid,
    pub contract_id: Option<Uuid>,
    pub realtor_id: Option<Uuid>,
    pub basic_info: String,
    pub status: String,
    #[serde(with = "sql_datetime")]
    pub start_date: chrono::NaiveDateTime,
    #[serde(with = "sql_datetime_opt", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<chrono::NaiveDateTime>,
}

impl From<Order> for OrderView {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            order_number: order.order_number,
            client_id: order.client_id,
            contract_id: order.contract_id,
            realtor_id: order.realtor_id,
            basic_info: order.basic_info,
            status: order.status,
            start_date: order.start_date,
            end_date: order.end_date,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RealtorView {
    pub id: Uuid,
    pub phone_number: String,
    pub rating: f64,
    pub experience: i32,
    pub full_name: String,
    pub photo: String,
    pub responses: Vec<String>,
}

impl RealtorView {
    pub fn new(realtor: Realtor, responses: Vec<String>) -> Self {
        Self {
            id: realtor.id,
            phone_number: realtor.phone_number,
            rating: realtor.rating,
            experience: realtor.experience,
            full_name: realtor.full_name,
            photo: BASE64.encode(&realtor.photo),
            responses,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ContractView {
    pub id: Uuid,
    pub reg_number: String,
    pub contract_number: String,
    pub details: String,
}

impl From<Contract> for ContractView {
    fn from(contract: Contract) -> Self {
        Self {
            id: contract.id,
            reg_number: contract.reg_number,
            contract_number: contract.contract_number,
            details: contract.details,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProfileView {
    pub full_name: String,
    pub phone_number: String,
    pub login: String,
    pub photo: String,
}

impl From<Client> for ProfileView {
    fn from(client: Client) -> Self {
        Self {
            full_name: client.full_name,
            phone_number: client.phone_number,
            login: client.login,
            photo: BASE64.encode(&client.photo),
        }
    }
}

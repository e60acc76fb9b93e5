use serde::{de::Error as _, Deserialize, Deserializer, Serialize};

use crate::store::{Charge, NewCharge};

/// Request body for creating a charge
///
/// Every key must be present; `telefone` and `descricao` may be `null`.
/// `valor` and `totalParcelas` accept whatever PostgreSQL would coerce on
/// insert: JSON numbers or numeric strings.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateChargeRequest {
    pub nome: String,
    #[serde(deserialize_with = "present_but_nullable")]
    pub telefone: Option<String>,
    #[serde(deserialize_with = "present_but_nullable")]
    pub descricao: Option<String>,
    #[serde(deserialize_with = "coerced_real")]
    pub valor: f32,
    #[serde(rename = "totalParcelas", deserialize_with = "coerced_integer")]
    pub total_parcelas: i32,
    pub frequencia: String,
    #[serde(rename = "dataInicio")]
    pub data_inicio: String,
}

// A field with `deserialize_with` and no `default` is required by serde,
// unlike a plain `Option` which silently becomes `None` when absent.
fn present_but_nullable<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Numeric {
    Number(f64),
    Text(String),
}

/// A `REAL` column value: any JSON number, or a string that parses as one
fn coerced_real<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: Deserializer<'de>,
{
    match Numeric::deserialize(deserializer)? {
        Numeric::Number(n) => {
            let value = n as f32;
            if value.is_infinite() {
                return Err(D::Error::custom("value out of range: overflow"));
            }
            Ok(value)
        }
        Numeric::Text(text) => text.trim().parse::<f32>().map_err(|_| {
            D::Error::custom(format!("invalid input syntax for type real: \"{}\"", text))
        }),
    }
}

/// An `INTEGER` column value: a JSON number rounded half away from zero, or
/// a string holding an integer
fn coerced_integer<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    match Numeric::deserialize(deserializer)? {
        Numeric::Number(n) => {
            let rounded = n.round();
            if rounded < i32::MIN as f64 || rounded > i32::MAX as f64 {
                return Err(D::Error::custom("integer out of range"));
            }
            Ok(rounded as i32)
        }
        Numeric::Text(text) => text.trim().parse::<i32>().map_err(|_| {
            D::Error::custom(format!("invalid input syntax for type integer: \"{}\"", text))
        }),
    }
}

impl From<CreateChargeRequest> for NewCharge {
    fn from(req: CreateChargeRequest) -> Self {
        NewCharge {
            client_name: req.nome,
            phone: req.telefone,
            description: req.descricao,
            value: req.valor,
            total_installments: req.total_parcelas,
            frequency: req.frequencia,
            start_date: req.data_inicio,
        }
    }
}

/// A charge as returned by the list endpoint, keyed by the stored column names
#[derive(Debug, Serialize, Deserialize, PartialEq, utoipa::ToSchema)]
pub struct ChargeResponse {
    pub id: i32,
    pub nome_cliente: String,
    pub telefone: Option<String>,
    pub descricao: Option<String>,
    pub valor: f32,
    pub total_parcelas: i32,
    pub parcelas_pagas: i32,
    pub frequencia: String,
    pub data_inicio: String,
}

impl From<Charge> for ChargeResponse {
    fn from(charge: Charge) -> Self {
        ChargeResponse {
            id: charge.id,
            nome_cliente: charge.client_name,
            telefone: charge.phone,
            descricao: charge.description,
            valor: charge.value,
            total_parcelas: charge.total_installments,
            parcelas_pagas: charge.paid_installments,
            frequencia: charge.frequency,
            data_inicio: charge.start_date,
        }
    }
}

/// Response type for a successful create
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn success() -> Self {
        StatusResponse {
            status: "success".to_string(),
        }
    }
}

/// Response type for a successful "mark installment paid"
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MarkPaidResponse {
    pub status: String,
    pub novas_parcelas_pagas: i32,
}

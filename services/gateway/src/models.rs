use fee_engine::history::CalculationHistory;
use lands_types::errors::FeeError;
use lands_types::fee::{FeeCalculationRequest, FeeCalculationResult, LineItem};
use lands_types::transaction::{PropertyType, TransactionType};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, de};

/// Calculation request as submitted by the portal form.
///
/// Exemptions are chosen from the catalogue by id. Amounts may be sent as
/// JSON strings (`"100000.50"`) or numbers (`100000.5`); type names are
/// matched case-insensitively.
#[derive(Debug, Clone, Deserialize)]
pub struct CalculateRequest {
    pub transaction_type: String,
    #[serde(default)]
    pub property_type: Option<String>,
    #[serde(default, deserialize_with = "optional_amount")]
    pub property_value: Option<Decimal>,
    #[serde(default, deserialize_with = "amount")]
    pub property_area: Decimal,
    #[serde(default)]
    pub lease_duration_years: Option<i64>,
    #[serde(default)]
    pub exemption_id: Option<String>,
    #[serde(default)]
    pub include_registration_fee: bool,
    #[serde(default)]
    pub include_survey_fee: bool,
    #[serde(default)]
    pub include_search_fee: bool,
    #[serde(default)]
    pub expedited: bool,
}

impl CalculateRequest {
    /// Split into the engine request and the selected exemption id
    pub fn into_parts(self) -> Result<(FeeCalculationRequest, Option<String>), FeeError> {
        let transaction_type: TransactionType = self.transaction_type.parse()?;
        let property_type = match self.property_type.as_deref() {
            Some(name) => {
                let Ok(parsed) = name.parse::<PropertyType>();
                parsed
            }
            None => PropertyType::default(),
        };

        let request = FeeCalculationRequest {
            transaction_type,
            property_type,
            property_value: self.property_value,
            property_area: self.property_area,
            lease_duration_years: self.lease_duration_years,
            exemption: None,
            include_registration_fee: self.include_registration_fee,
            include_survey_fee: self.include_survey_fee,
            include_search_fee: self.include_search_fee,
            expedited: self.expedited,
        };
        Ok((request, self.exemption_id))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireAmount {
    Text(String),
    Number(serde_json::Number),
}

impl WireAmount {
    fn into_decimal<E: de::Error>(self) -> Result<Decimal, E> {
        let text = match self {
            WireAmount::Text(text) => text,
            WireAmount::Number(number) => number.to_string(),
        };
        text.trim()
            .parse::<Decimal>()
            .map_err(|_| E::custom(format!("invalid amount: {:?}", text)))
    }
}

fn amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    WireAmount::deserialize(deserializer)?.into_decimal()
}

fn optional_amount<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<WireAmount>::deserialize(deserializer)?
        .map(WireAmount::into_decimal)
        .transpose()
}

#[derive(Debug, Clone, Serialize)]
pub struct CalculationResponse {
    #[serde(flatten)]
    pub result: FeeCalculationResult,
    pub line_items: Vec<LineItem>,
}

impl From<FeeCalculationResult> for CalculationResponse {
    fn from(result: FeeCalculationResult) -> Self {
        let line_items = result.line_items();
        Self { result, line_items }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HistoryResponse {
    pub capacity: usize,
    pub calculations: Vec<FeeCalculationResult>,
}

impl From<&CalculationHistory> for HistoryResponse {
    fn from(history: &CalculationHistory) -> Self {
        Self {
            capacity: history.capacity(),
            calculations: history.to_vec(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

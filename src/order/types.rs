//! Order event input model

use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Input for a single order email composition
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposeInput {
    /// Lifecycle action that triggered the email (`shipped`, `refunded`, `itemRefund`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,

    /// Shop context, passed through unexamined
    pub from_shop: serde_json::Value,

    /// Destination identifier
    pub to: String,

    /// Locale hint (pass-through)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    pub data_for_email: DataForEmail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataForEmail {
    pub order: Order,
}

/// The order aggregate as delivered by the order workflow
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub email: String,
    pub reference_id: String,
    pub updated_at: String,
    pub workflow: Workflow,
    #[serde(default, deserialize_with = "null_as_default")]
    pub shipping: Vec<Shipment>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub payments: Vec<Payment>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub discounts: Vec<Discount>,
}

impl Order {
    /// First shipment, the only one read when composing
    pub fn primary_shipment(&self) -> Option<&Shipment> {
        self.shipping.first()
    }

    /// First payment, the only one read when composing
    pub fn primary_payment(&self) -> Option<&Payment> {
        self.payments.first()
    }

    /// Tracking value of the first shipment, if it carries a non-empty one
    pub fn tracking(&self) -> Option<&str> {
        self.primary_shipment()
            .and_then(|shipment| shipment.tracking.as_deref())
            .filter(|tracking| !tracking.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workflow {
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    pub address: ShippingAddress,
    #[serde(default, deserialize_with = "null_as_default")]
    pub shipment_method: ShipmentMethod,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<LineItem>,
    pub invoice: Invoice,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    #[serde(default, deserialize_with = "null_as_default")]
    pub full_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub address1: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub region: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub postal: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone: String,
}

impl ShippingAddress {
    /// `"{city} {region} {postal}"`, empty components keep their separators
    pub fn locality_line(&self) -> String {
        locality_line(&self.city, &self.region, &self.postal)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShipmentMethod {
    #[serde(default, deserialize_with = "null_as_default")]
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    pub price: Price,
    #[serde(default, deserialize_with = "null_as_default")]
    pub metafields: Vec<Metafield>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Price {
    pub amount: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metafield {
    #[serde(default, deserialize_with = "null_as_default")]
    pub key: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    pub shipping: f64,
    pub subtotal: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub address: BillingAddress,
    #[serde(default, deserialize_with = "null_as_default")]
    pub display_name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BillingAddress {
    #[serde(default, deserialize_with = "null_as_default")]
    pub address1: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub region: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub postal: String,
}

impl BillingAddress {
    pub fn locality_line(&self) -> String {
        locality_line(&self.city, &self.region, &self.postal)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Discount {
    #[serde(default)]
    pub amount: Option<f64>,
}

fn locality_line(city: &str, region: &str, postal: &str) -> String {
    format!("{} {} {}", city, region, postal)
}

//! Display field extraction from an order

use serde::{Deserialize, Serialize};

use crate::order::{Discount, LineItem, Metafield, Order};

use super::types::{ComposeError, ComposeResult};

/// Metafield key holding an item's image path
pub const PRODUCT_IMAGE_KEY: &str = "productImage";

/// One rendered line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductLine {
    pub product_image: String,
    pub product_description: String,
    pub product_price: String,
}

/// Flat, display-ready variables handed to the email template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DynamicData {
    pub full_name: String,
    pub first_name: String,
    pub shipping_address: String,
    pub shipping_address_line2: String,
    pub order_number: String,
    pub order_date: String,
    pub contact_number: String,
    pub billing_address: String,
    pub billing_address_line2: String,
    pub shipping_method: String,
    pub payment_method: String,
    pub product: Vec<ProductLine>,
    pub shipping_handling_cost: String,
    pub sub_total_cost: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promo_discount: Option<String>,
    pub total_cost: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
}

/// Extract template variables from an order.
///
/// Fails when the first shipment or first payment is absent, since the
/// recipient and address fields cannot be derived without them.
pub fn extract_fields(order: &Order, product_image_base_url: &str) -> ComposeResult<DynamicData> {
    let shipment = order
        .primary_shipment()
        .ok_or(ComposeError::MissingSection("shipping"))?;
    let payment = order
        .primary_payment()
        .ok_or(ComposeError::MissingSection("payments"))?;

    let address = &shipment.address;
    let invoice = &shipment.invoice;

    Ok(DynamicData {
        full_name: address.full_name.clone(),
        first_name: first_name(&address.full_name).to_string(),
        shipping_address: address.address1.clone(),
        shipping_address_line2: address.locality_line(),
        order_number: order.reference_id.clone(),
        order_date: order.updated_at.clone(),
        contact_number: address.phone.clone(),
        billing_address: payment.address.address1.clone(),
        billing_address_line2: payment.address.locality_line(),
        shipping_method: shipment.shipment_method.label.clone(),
        payment_method: payment.display_name.clone(),
        product: shipment
            .items
            .iter()
            .map(|item| product_line(item, product_image_base_url))
            .collect(),
        shipping_handling_cost: format_money(invoice.shipping),
        sub_total_cost: format_money(invoice.subtotal),
        promo_discount: promo_discount(&order.discounts),
        total_cost: format_money(invoice.total),
        tracking_number: order.tracking().map(str::to_string),
    })
}

/// `"$"` followed by the amount fixed to two decimals.
///
/// Exact ties round away from zero and negative zero prints as `0.00`.
pub fn format_money(amount: f64) -> String {
    // Only odd multiples of 1/8 sit exactly halfway between two cents
    let eighths = amount * 8.0;
    let rounded = if eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
        (amount.abs() * 100.0).ceil().copysign(amount) / 100.0
    } else {
        amount
    };

    if rounded == 0.0 {
        return "$0.00".to_string();
    }
    format!("${:.2}", rounded)
}

/// First whitespace-delimited token of a full name
pub fn first_name(full_name: &str) -> &str {
    full_name.split_whitespace().next().unwrap_or("")
}

/// Base URL joined with the last `productImage` metafield value
pub fn product_image_url(base_url: &str, metafields: &[Metafield]) -> String {
    let image = metafields
        .iter()
        .rfind(|m| m.key == PRODUCT_IMAGE_KEY)
        .map(|m| m.value.as_str())
        .unwrap_or("");

    format!("{}{}", base_url, image)
}

fn product_line(item: &LineItem, base_url: &str) -> ProductLine {
    ProductLine {
        product_image: product_image_url(base_url, &item.metafields),
        product_description: item.title.clone(),
        product_price: format_money(item.price.amount),
    }
}

// A zero amount counts as no discount.
fn promo_discount(discounts: &[Discount]) -> Option<String> {
    discounts
        .first()
        .and_then(|d| d.amount)
        .filter(|amount| *amount != 0.0 && !amount.is_nan())
        .map(format_money)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const BASE: &str = "https://images.example.com/";

    fn order_with(shipping: serde_json::Value, discounts: serde_json::Value) -> Order {
        serde_json::from_value(json!({
            "email": "jane@example.com",
            "referenceId": "R-100",
            "updatedAt": "2024-03-01T10:00:00Z",
            "workflow": { "status": "new" },
            "shipping": shipping,
            "payments": [{
                "address": { "address1": "1 Pay St", "city": "Sydney", "region": "NSW", "postal": "2000" },
                "displayName": "Visa 4242"
            }],
            "discounts": discounts
        }))
        .unwrap()
    }

    fn shipment(tracking: serde_json::Value) -> serde_json::Value {
        json!([{
            "address": {
                "fullName": "Jane Q Doe",
                "address1": "10 Ship Rd",
                "city": "Sydney",
                "region": "NSW",
                "postal": "2000",
                "phone": "0400000000"
            },
            "shipmentMethod": { "label": "Express" },
            "items": [
                {
                    "title": "Lamp",
                    "price": { "amount": 19.5 },
                    "metafields": [{ "key": "productImage", "value": "lamp.jpg" }]
                }
            ],
            "invoice": { "shipping": 10, "subtotal": 19.5, "total": 24.5 },
            "tracking": tracking
        }])
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(19.5), "$19.50");
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(1234.567), "$1234.57");
        assert_eq!(format_money(3.0), "$3.00");
    }

    #[test]
    fn test_first_name() {
        assert_eq!(first_name("Jane Q Doe"), "Jane");
        assert_eq!(first_name("Cher"), "Cher");
        assert_eq!(first_name(""), "");
    }

    #[test]
    fn test_format_money_exact_ties_round_up() {
        assert_eq!(format_money(0.125), "$0.13");
        assert_eq!(format_money(10.125), "$10.13");
        assert_eq!(format_money(0.375), "$0.38");
        assert_eq!(format_money(-0.125), "$-0.13");
    }

    #[test]
    fn test_format_money_non_ties() {
        assert_eq!(format_money(2.5), "$2.50");
        // 1.005 is stored just below the tie
        assert_eq!(format_money(1.005), "$1.00");
        assert_eq!(format_money(-3.2), "$-3.20");
    }

    #[test]
    fn test_format_money_negative_zero() {
        assert_eq!(format_money(-0.0), "$0.00");
        assert_eq!(format_money(0.0), "$0.00");
    }

    #[test]
    fn test_product_image_last_match_wins() {
        let metafields = vec![
            Metafield { key: "productImage".into(), value: "a".into() },
            Metafield { key: "color".into(), value: "red".into() },
            Metafield { key: "productImage".into(), value: "b".into() },
        ];
        assert_eq!(product_image_url(BASE, &metafields), format!("{}b", BASE));
    }

    #[test]
    fn test_product_image_without_match() {
        let metafields = vec![Metafield { key: "color".into(), value: "red".into() }];
        assert_eq!(product_image_url(BASE, &metafields), BASE);
        assert_eq!(product_image_url(BASE, &[]), BASE);
    }

    #[test]
    fn test_extract_full_order() {
        let order = order_with(shipment(json!("TRACK-1")), json!([{ "amount": 5 }]));
        let data = extract_fields(&order, BASE).unwrap();

        assert_eq!(data.full_name, "Jane Q Doe");
        assert_eq!(data.first_name, "Jane");
        assert_eq!(data.shipping_address, "10 Ship Rd");
        assert_eq!(data.shipping_address_line2, "Sydney NSW 2000");
        assert_eq!(data.billing_address, "1 Pay St");
        assert_eq!(data.billing_address_line2, "Sydney NSW 2000");
        assert_eq!(data.order_number, "R-100");
        assert_eq!(data.order_date, "2024-03-01T10:00:00Z");
        assert_eq!(data.contact_number, "0400000000");
        assert_eq!(data.shipping_method, "Express");
        assert_eq!(data.payment_method, "Visa 4242");
        assert_eq!(data.shipping_handling_cost, "$10.00");
        assert_eq!(data.sub_total_cost, "$19.50");
        assert_eq!(data.total_cost, "$24.50");
        assert_eq!(data.promo_discount.as_deref(), Some("$5.00"));
        assert_eq!(data.tracking_number.as_deref(), Some("TRACK-1"));
        assert_eq!(
            data.product,
            vec![ProductLine {
                product_image: format!("{}lamp.jpg", BASE),
                product_description: "Lamp".to_string(),
                product_price: "$19.50".to_string(),
            }]
        );
    }

    #[test]
    fn test_zero_discount_omitted() {
        let order = order_with(shipment(json!(null)), json!([{ "amount": 0 }]));
        let data = extract_fields(&order, BASE).unwrap();
        assert!(data.promo_discount.is_none());

        let value = serde_json::to_value(&data).unwrap();
        assert!(value.get("promo_discount").is_none());
    }

    #[test]
    fn test_missing_discounts_omitted() {
        let order = order_with(shipment(json!(null)), json!(null));
        let data = extract_fields(&order, BASE).unwrap();
        assert!(data.promo_discount.is_none());
    }

    #[test]
    fn test_tracking_omitted_when_empty() {
        let order = order_with(shipment(json!("")), json!([]));
        let data = extract_fields(&order, BASE).unwrap();

        let value = serde_json::to_value(&data).unwrap();
        assert!(value.get("tracking_number").is_none());
    }

    #[test]
    fn test_missing_shipping_section() {
        let order = order_with(json!([]), json!([]));
        let err = extract_fields(&order, BASE).unwrap_err();
        assert!(matches!(err, ComposeError::MissingSection("shipping")));
    }

    #[test]
    fn test_missing_payments_section() {
        let mut order = order_with(shipment(json!(null)), json!([]));
        order.payments.clear();
        let err = extract_fields(&order, BASE).unwrap_err();
        assert_eq!(err.to_string(), "Missing required order section: payments");
    }
}

//! Order event model.
//!
//! The inbound payload is validated in two steps: the required top-level
//! fields are checked first, then the rest is deserialized into the typed
//! order aggregate. Sequences the order workflow may omit (`shipping`,
//! `payments`, `discounts`) deserialize to empty and are checked when the
//! composer reads them.

mod types;
mod validation;

pub use types::{
    BillingAddress, ComposeInput, DataForEmail, Discount, Invoice, LineItem, Metafield, Order,
    Payment, Price, Shipment, ShipmentMethod, ShippingAddress, Workflow,
};

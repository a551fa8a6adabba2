//! Order submission gateway.
//!
//! The real storefront hands validated orders to the commerce platform.
//! Here the gateway is a trait with an in-repo mock that sleeps to model
//! the round-trip and always accepts.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cart::{LineItem, OrderTotals};
use crate::checkout::{
    ContactDetails, DeliveryAddress, DiscountCode, GiftOptions, PaymentDetails, ShippingDetails,
};
use crate::error::StorefrontError;
use crate::ids::OrderId;

/// Everything the gateway needs to place an order: the five validated
/// field groups, the resolved cart lines, and the totals and discount
/// for server-side reconciliation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub contact: ContactDetails,
    pub address: DeliveryAddress,
    pub gift: GiftOptions,
    pub shipping: ShippingDetails,
    pub payment: PaymentDetails,
    pub items: Vec<LineItem>,
    pub totals: OrderTotals,
    pub discount: Option<DiscountCode>,
}

/// A successfully placed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    /// Internal order identifier.
    pub order_id: OrderId,
    /// Human-readable order number (e.g., "WH-1756023456").
    pub order_number: String,
}

/// External order submission endpoint.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    /// Submit a validated order.
    async fn submit(&self, order: &OrderRequest) -> Result<OrderConfirmation, StorefrontError>;
}

/// Mock gateway: sleeps ~300ms and accepts every order.
#[derive(Debug, Clone, Default)]
pub struct MockOrderGateway;

impl MockOrderGateway {
    /// Generate a human-readable order number.
    fn order_number() -> String {
        use std::time::{SystemTime, UNIX_EPOCH};
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        format!("WH-{ts}")
    }
}

#[async_trait]
impl OrderGateway for MockOrderGateway {
    async fn submit(&self, order: &OrderRequest) -> Result<OrderConfirmation, StorefrontError> {
        tokio::time::sleep(Duration::from_millis(300)).await;

        let confirmation = OrderConfirmation {
            order_id: OrderId::generate(),
            order_number: Self::order_number(),
        };
        info!(
            order_number = %confirmation.order_number,
            items = order.items.len(),
            total = %order.totals.total,
            "order accepted"
        );
        Ok(confirmation)
    }
}

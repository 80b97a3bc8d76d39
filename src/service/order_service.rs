use crate::domain::order::{ticket_price, CreateOrderRequest, Order, OrderStatus, PlacedOrder};
use crate::error::ApiError;
use crate::providers::PaymentProvider;
use crate::repo::orders_repo::OrdersRepo;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone)]
pub struct OrderService {
    pub orders_repo: OrdersRepo,
    pub provider: Arc<dyn PaymentProvider>,
}

impl OrderService {
    /// A provider failure aborts the whole operation; nothing is persisted.
    pub async fn create_order(&self, req: CreateOrderRequest) -> Result<PlacedOrder, ApiError> {
        let method = req.method.unwrap_or_default();
        if method.is_empty() {
            return Err(ApiError::Validation("payment method required".to_string()));
        }

        let ticket = req.ticket.unwrap_or_else(|| "general".to_string());
        let amount = ticket_price(&ticket);

        let mut order = Order {
            id: Uuid::new_v4().to_string(),
            email: req.email,
            ticket,
            method,
            phone: req.phone,
            amount,
            status: OrderStatus::Pending,
            provider: None,
            provider_reference: None,
            created_at: chrono::Utc::now().timestamp_millis(),
        };

        let mut instruction = None;
        if order.method == "bkash" {
            let payment = self
                .provider
                .create_payment(amount, &order.id)
                .await
                .map_err(ApiError::Provider)?;

            order.provider = Some(self.provider.name().to_string());
            order.provider_reference = Some(payment.provider_reference);
            instruction = Some(payment.instruction);
        }

        self.orders_repo.insert(&order).await.map_err(ApiError::Storage)?;

        Ok(PlacedOrder { order, instruction })
    }
}

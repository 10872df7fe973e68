//! Order operations.
//!
//! Large date ranges can exhaust the remote service, so [`SmartwebClient::get_orders_from_date`]
//! splits them into month windows (see [`month_windows`]) and issues one call per window.

use chrono::{Days, Months, NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, instrument};

use super::SmartwebClient;
use crate::{
    error::Result,
    models::{
        Order, OrderCurrency, OrderCustomer, OrderDelivery, OrderLine, OrderTransaction, Record,
        Transaction,
    },
    operation::Operation,
    params::Params,
    payload::Payload,
    transport::Transport,
};

/// Status codes requested when the caller does not choose any.
pub const DEFAULT_ORDER_STATUSES: [i64; 7] = [1, 2, 3, 4, 6, 7, 8];

/// Splits the range starting at `from` into month windows that cover `until`.
///
/// Each window runs from its start to one month later, both ends inclusive. The next window
/// starts the day after the previous one ends. Windows are produced while the start is not
/// after `until`, so the last window may end up to one month past it. Empty when `from` is
/// after `until`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use smartweb_client::client::month_windows;
///
/// let day = |m, d| NaiveDate::from_ymd_opt(2024, m, d).unwrap();
/// let windows = month_windows(day(1, 15), day(3, 1));
///
/// assert_eq!(windows, vec![(day(1, 15), day(2, 15)), (day(2, 16), day(3, 16))]);
/// ```
#[must_use]
pub fn month_windows(from: NaiveDate, until: NaiveDate) -> Vec<(NaiveDate, NaiveDate)> {
    let mut windows = Vec::new();
    let mut start = from;
    while start <= until {
        let Some(end) = start.checked_add_months(Months::new(1)) else {
            break;
        };
        windows.push((start, end));
        let Some(next) = end.checked_add_days(Days::new(1)) else {
            break;
        };
        start = next;
    }
    windows
}

impl<T: Transport> SmartwebClient<T> {
    /// Fetches an order by id. Returns `None` if no such order exists.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails or the order cannot be decoded.
    #[instrument(skip(self))]
    pub async fn get_order(&self, order_id: i64) -> Result<Option<Order>> {
        self.fetch_one(Operation::OrderGetById, Params::new().with("OrderId", order_id)).await
    }

    /// Lists orders placed from `start` to `end` (inclusive) with one of `statuses`.
    ///
    /// Pass [`DEFAULT_ORDER_STATUSES`] for the usual set. Large ranges are better served by
    /// [`SmartwebClient::get_orders_from_date`].
    ///
    /// # Errors
    ///
    /// Returns error if the call fails or an order cannot be decoded.
    pub async fn get_orders(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        statuses: &[i64],
    ) -> Result<Vec<Order>> {
        let params = Params::new()
            .with_date("Start", start)
            .with_date("End", end)
            .with_list("Status", statuses);
        self.fetch_many(Operation::OrderGetByDate, params).await
    }

    /// Lists orders placed from `from` until today, one month window per call.
    ///
    /// Results are concatenated in window order.
    ///
    /// # Errors
    ///
    /// Returns the first error any window raises.
    #[instrument(skip(self, statuses))]
    pub async fn get_orders_from_date(
        &self,
        from: NaiveDate,
        statuses: &[i64],
    ) -> Result<Vec<Order>> {
        let windows = month_windows(from, Utc::now().date_naive());
        debug!(windows = windows.len(), "fetching orders by month");

        let mut orders = Vec::new();
        for (start, end) in windows {
            debug!(%start, %end, "order window");
            orders.extend(self.get_orders(start, end, statuses).await?);
        }
        Ok(orders)
    }

    /// Lists every order placed by a user.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails or an order cannot be decoded.
    pub async fn get_user_orders(&self, user_id: i64) -> Result<Vec<Order>> {
        let params = Params::new().with("UserId", user_id).nil("Start").nil("End");
        self.fetch_many(Operation::OrderGetByDateAndUser, params).await
    }

    /// Lists orders with one of `statuses` updated between `start` and `end`.
    ///
    /// A `None` start fetches from the first order, a `None` end up to now.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails or an order cannot be decoded.
    pub async fn get_updated_orders(
        &self,
        statuses: &[i64],
        start: Option<NaiveDateTime>,
        end: Option<NaiveDateTime>,
    ) -> Result<Vec<Order>> {
        let params = Params::new()
            .with_list("Status", statuses)
            .with_datetime("Start", start)
            .with_datetime("End", end);
        self.fetch_many(Operation::OrderGetByDateUpdated, params).await
    }

    /// Creates an order from any record serializing to the remote order fields.
    ///
    /// # Errors
    ///
    /// Returns error if the order cannot be serialized or the call fails.
    pub async fn create_order<O: Serialize>(&self, order: &O) -> Result<Payload> {
        info!("creating order");
        self.call(Operation::OrderCreate, Params::new().with_record("OrderData", order)?).await
    }

    /// Sets `status` on the order when given, then submits the order's current status.
    ///
    /// # Errors
    ///
    /// - `SmartwebError::InvalidInput` if the order has no id
    /// - any error from the call
    pub async fn update_order_status(
        &self,
        order: &mut Order,
        status: Option<i64>,
    ) -> Result<Payload> {
        let order_id = order.require_id()?;
        if let Some(status) = status {
            order.status = Some(status);
        }
        info!(order_id, status = ?order.status, "updating order status");

        let params = Params::new().with("OrderId", order_id).with("Status", order.status);
        self.call(Operation::OrderUpdateStatus, params).await
    }

    /// Replaces (or with `append`, extends) the order comment, then submits it.
    ///
    /// See [`Order::apply_comment`] for how the comment is combined.
    ///
    /// # Errors
    ///
    /// - `SmartwebError::InvalidInput` if the order has no id
    /// - any error from the call
    pub async fn update_order_comment(
        &self,
        order: &mut Order,
        comment: Option<&str>,
        append: bool,
    ) -> Result<Payload> {
        let order_id = order.require_id()?;
        order.apply_comment(comment, append);
        info!(order_id, append, "updating order comment");

        let params =
            Params::new().with("OrderId", order_id).with("Text", order.order_comment.clone());
        self.call(Operation::OrderUpdateComment, params).await
    }

    /// Creates an invoice for the order, due `maturity_days` from today (0, 8, 14 or 30).
    ///
    /// # Errors
    ///
    /// - `SmartwebError::InvalidInput` if the order has no id
    /// - any error from the call
    pub async fn create_invoice(&self, order: &Order, maturity_days: i64) -> Result<Payload> {
        let order_id = order.require_id()?;
        info!(order_id, maturity_days, "creating invoice");

        let params =
            Params::new().with("OrderId", order_id).with("MaturityDayInterval", maturity_days);
        self.call(Operation::OrderCreateInvoice, params).await
    }

    /// Records a payment transaction on an order.
    ///
    /// # Errors
    ///
    /// Returns error if the transaction cannot be serialized or the call fails.
    pub async fn set_transaction(&self, transaction: &Transaction) -> Result<Payload> {
        info!(order_id = ?transaction.order_id, "setting transaction");
        self.call(
            Operation::OrderSetTransactionCode,
            Params::new().with_record("TransactionData", transaction)?,
        )
        .await
    }

    /// Lists the lines of an order.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails or a line cannot be decoded.
    pub async fn get_order_lines(&self, order_id: i64) -> Result<Vec<OrderLine>> {
        self.fetch_many(Operation::OrderGetLines, Params::new().with("OrderId", order_id)).await
    }

    /// Sets `status` on the line when given, then submits the line's current status.
    ///
    /// # Errors
    ///
    /// - `SmartwebError::InvalidInput` if the line has no id
    /// - any error from the call
    pub async fn update_order_line_status(
        &self,
        line: &mut OrderLine,
        status: Option<i64>,
    ) -> Result<Payload> {
        let line_id = line.require_id()?;
        if let Some(status) = status {
            line.status = Some(status);
        }
        info!(line_id, status = ?line.status, "updating order line status");

        let params = Params::new().with("OrderLineId", line_id).with("Status", line.status);
        self.call(Operation::OrderUpdateLineStatus, params).await
    }

    /// Lists the delivery addresses of an order line.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails or an address cannot be decoded.
    pub async fn get_order_line_addresses(&self, line_id: i64) -> Result<Vec<OrderCustomer>> {
        self.fetch_many(
            Operation::OrderGetLineAddresses,
            Params::new().with("OrderLineId", line_id),
        )
        .await
    }

    /// Fetches an order delivery.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails or the delivery cannot be decoded.
    pub async fn get_order_delivery(&self, delivery_id: i64) -> Result<Option<OrderDelivery>> {
        self.fetch_one(Operation::OrderGetDelivery, Params::new().with("DeliveryId", delivery_id))
            .await
    }

    /// Fetches an order payment, as returned by the service.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails.
    pub async fn get_order_payment(&self, payment_id: i64) -> Result<Payload> {
        self.call(Operation::OrderGetPayment, Params::new().with("PaymentId", payment_id)).await
    }

    /// Fetches an order currency.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails or the currency cannot be decoded.
    pub async fn get_order_currency(&self, currency_id: i64) -> Result<Option<OrderCurrency>> {
        self.fetch_one(Operation::OrderGetCurrency, Params::new().with("CurrencyId", currency_id))
            .await
    }

    /// Fetches an order customer.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails or the customer cannot be decoded.
    pub async fn get_order_customer(&self, customer_id: i64) -> Result<Option<OrderCustomer>> {
        self.fetch_one(Operation::OrderGetCustomer, Params::new().with("CustomerId", customer_id))
            .await
    }

    /// Lists the payment transactions of an order.
    ///
    /// # Errors
    ///
    /// Returns error if the call fails or a transaction cannot be decoded.
    pub async fn get_order_transactions(&self, order_id: i64) -> Result<Vec<OrderTransaction>> {
        self.fetch_many(Operation::OrderGetTransactions, Params::new().with("OrderId", order_id))
            .await
    }
}

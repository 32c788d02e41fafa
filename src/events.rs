use tokio::sync::{mpsc, watch};
use tracing::{debug, info, instrument};

/// Events the checkout flow publishes for other components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutEvent {
    /// A checkout submission was accepted and the basket cleared.
    OrderSubmitted,
}

/// Owns the basket badge count shown on the tab bar.
///
/// The flow never touches the count directly; it publishes
/// [`CheckoutEvent::OrderSubmitted`] and this component resets its own state.
pub struct BasketBadge {
    receiver: mpsc::Receiver<CheckoutEvent>,
    count: watch::Sender<u32>,
}

impl BasketBadge {
    pub fn new(
        buffer_size: usize,
        initial_count: u32,
    ) -> (Self, mpsc::Sender<CheckoutEvent>, watch::Receiver<u32>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (count, count_rx) = watch::channel(initial_count);
        let badge = Self { receiver, count };
        (badge, sender, count_rx)
    }

    #[instrument(name = "basket_badge", skip(self))]
    pub async fn run(mut self) {
        info!("BasketBadge starting");

        while let Some(event) = self.receiver.recv().await {
            match event {
                CheckoutEvent::OrderSubmitted => {
                    debug!("Order submitted, resetting badge");
                    self.count.send_replace(0);
                    info!("Badge count reset");
                }
            }
        }

        info!("BasketBadge stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn badge_resets_to_zero_on_order_submitted() {
        let (badge, events, mut count) = BasketBadge::new(10, 4);
        let _handle = tokio::spawn(badge.run());

        assert_eq!(*count.borrow(), 4);

        events.send(CheckoutEvent::OrderSubmitted).await.unwrap();
        count.changed().await.unwrap();
        assert_eq!(*count.borrow(), 0);
    }
}

use rand::{distributions::{Distribution, Standard}, Rng};

// Statuses produced by the order generator. The orders table itself accepts any text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus{
    Paid,
    Sent,
    Delivered
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 3] = [OrderStatus::Paid, OrderStatus::Sent, OrderStatus::Delivered];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Paid => "Paid",
            OrderStatus::Sent => "Sent",
            OrderStatus::Delivered => "Delivered"
        }
    }
}

impl Distribution<OrderStatus> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> OrderStatus {
        OrderStatus::ALL[rng.gen_range(0..OrderStatus::ALL.len())]
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

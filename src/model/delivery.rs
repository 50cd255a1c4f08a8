use serde::{Deserialize, Serialize};

/// The four stages an order passes through, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeliveryStage {
    Placed,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl DeliveryStage {
    pub const ALL: [DeliveryStage; 4] = [
        DeliveryStage::Placed,
        DeliveryStage::Preparing,
        DeliveryStage::OutForDelivery,
        DeliveryStage::Delivered,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DeliveryStage::Placed => "Order Placed",
            DeliveryStage::Preparing => "Preparing",
            DeliveryStage::OutForDelivery => "Out for Delivery",
            DeliveryStage::Delivered => "Delivered",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DeliveryStage::Placed => "Your order has been confirmed",
            DeliveryStage::Preparing => "Our chefs are preparing your food",
            DeliveryStage::OutForDelivery => "Your order is on the way",
            DeliveryStage::Delivered => "Your order has been delivered",
        }
    }

    /// Demo clock time shown next to a completed step.
    pub fn timestamp_label(&self) -> &'static str {
        match self {
            DeliveryStage::Placed => "2:30 PM",
            DeliveryStage::Preparing => "2:35 PM",
            DeliveryStage::OutForDelivery => "3:05 PM",
            DeliveryStage::Delivered => "3:25 PM",
        }
    }
}

/// One row of the delivery tracker.
///
/// The set of steps is fixed; only `completed` ever changes, and only the
/// simulator changes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryStep {
    pub id: u32,
    pub stage: DeliveryStage,
    pub label: String,
    pub description: String,
    pub completed: bool,
    pub timestamp_label: String,
}

impl DeliveryStep {
    pub fn new(id: u32, stage: DeliveryStage) -> Self {
        Self {
            id,
            stage,
            label: stage.label().to_string(),
            description: stage.description().to_string(),
            completed: false,
            timestamp_label: stage.timestamp_label().to_string(),
        }
    }

    /// The step catalog, all incomplete, ids starting at 1.
    pub fn catalog() -> Vec<DeliveryStep> {
        DeliveryStage::ALL
            .iter()
            .zip(1..)
            .map(|(stage, id)| DeliveryStep::new(id, *stage))
            .collect()
    }
}

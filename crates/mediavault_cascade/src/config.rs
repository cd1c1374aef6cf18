//! Consumer configuration.

use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};

/// Topic carrying product deletion events.
pub const DEFAULT_TOPIC: &str = "product-deleted";

/// Consumer group the media service joins.
pub const DEFAULT_GROUP_ID: &str = "media-service";

/// Bounded queue depth between event source and listener.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 64;

/// Settings for the product event listener.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, Setters)]
#[serde(default, deny_unknown_fields)]
#[setters(prefix = "with_")]
pub struct ConsumerConfig {
    /// Topic whose deliveries are handled; everything else is skipped
    #[setters(into)]
    topic: String,
    /// Consumer group name, reported in logs
    #[setters(into)]
    group_id: String,
    /// Capacity of the delivery channel
    channel_capacity: usize,
}

impl Default for ConsumerConfig {
    fn default() -> Self {
        Self {
            topic: DEFAULT_TOPIC.to_string(),
            group_id: DEFAULT_GROUP_ID.to_string(),
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

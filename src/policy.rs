use crate::status::{Availability, BatteryStatus};

pub const LOW_BATTERY_THRESHOLD: i32 = 20;

pub fn should_notify(status: &BatteryStatus) -> bool {
    status.availability == Availability::Available && status.level <= LOW_BATTERY_THRESHOLD
}

use rand::Rng;
use std::time::Duration;

pub fn format_pkr(amount: impl Into<u64>) -> String {
    format!("PKR {}", amount.into())
}

/// `base` plus or minus up to half of it, so simulated latency is not uniform.
pub fn jittered_delay(base_millis: u64) -> Duration {
    if base_millis == 0 {
        return Duration::ZERO;
    }
    let spread = base_millis / 2;
    let millis = rand::thread_rng().gen_range(base_millis - spread..=base_millis + spread);
    Duration::from_millis(millis)
}

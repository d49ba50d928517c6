use std::time::Duration;

pub struct ServerTime {
    pub delta: Duration,
}

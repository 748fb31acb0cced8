//! 时钟与模拟延迟
//!
//! 模拟服务通过可注入的时钟等待延迟并获取当前时间，
//! 测试中使用 `InstantClock` 即可零延迟同步运行。

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::fmt::Debug;
use std::sync::Arc;
use std::time::Duration;

#[async_trait]
pub trait Clock: Send + Sync + Debug {
    fn now(&self) -> DateTime<Utc>;

    async fn sleep(&self, duration: Duration);
}

/// 基于 tokio 定时器的真实时钟
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

#[async_trait]
impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// 不等待的时钟
#[derive(Debug, Default, Clone, Copy)]
pub struct InstantClock;

#[async_trait]
impl Clock for InstantClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    async fn sleep(&self, _duration: Duration) {}
}

/// 模拟网络延迟
///
/// 每次调用先等待固定时长，之后的存储读写在一次同步步骤内完成
#[derive(Debug, Clone)]
pub struct Latency {
    clock: Arc<dyn Clock>,
    delay: Duration,
}

impl Latency {
    pub fn new(clock: Arc<dyn Clock>, delay: Duration) -> Self {
        Self { clock, delay }
    }

    pub async fn wait(&self) {
        if !self.delay.is_zero() {
            self.clock.sleep(self.delay).await;
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instant_clock_does_not_block() {
        let latency = Latency::new(Arc::new(InstantClock), Duration::from_secs(3600));
        tokio_test::block_on(latency.wait());
        assert_eq!(latency.delay(), Duration::from_secs(3600));
    }

    #[tokio::test(start_paused = true)]
    async fn test_system_clock_waits_configured_delay() {
        let latency = Latency::new(Arc::new(SystemClock), Duration::from_millis(80));
        let started = tokio::time::Instant::now();

        latency.wait().await;

        assert!(started.elapsed() >= Duration::from_millis(80));
    }
}

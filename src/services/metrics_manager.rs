// src/services/metrics_manager.rs
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Default, Clone, Serialize)]
pub struct MetricsData {
    pub mode_usage: HashMap<String, u64>,
    pub experience_usage: HashMap<String, u64>,
}

/// In-memory usage counters, reset on restart.
#[derive(Debug, Clone)]
pub struct MetricsManager {
    inner: Arc<RwLock<MetricsData>>,
}

impl Default for MetricsManager {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsManager {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MetricsData::default())),
        }
    }

    pub async fn increment_mode(&self, mode: &str) {
        let mut data = self.inner.write().await;
        *data.mode_usage.entry(mode.to_string()).or_insert(0) += 1;
    }

    pub async fn increment_experience(&self, experience: &str) {
        let mut data = self.inner.write().await;
        *data.experience_usage.entry(experience.to_string()).or_insert(0) += 1;
    }

    pub async fn get_metrics(&self) -> MetricsData {
        self.inner.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn counters_accumulate() {
        let metrics = MetricsManager::new();
        metrics.increment_mode("form").await;
        metrics.increment_mode("form").await;
        metrics.increment_experience("Mix").await;

        let data = metrics.get_metrics().await;
        assert_eq!(data.mode_usage.get("form"), Some(&2));
        assert_eq!(data.experience_usage.get("Mix"), Some(&1));
    }
}

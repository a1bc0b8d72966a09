use axum::http::StatusCode;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::Mutex;

#[derive(Default)]
pub(crate) struct RequestMetrics {
    counts: Mutex<HashMap<(String, u16), u64>>,
    latency_ns: Mutex<HashMap<String, Vec<u64>>>,
}

impl RequestMetrics {
    pub(crate) async fn observe_request(&self, route: &str, status: StatusCode, latency: Duration) {
        let mut counts = self.counts.lock().await;
        *counts
            .entry((route.to_string(), status.as_u16()))
            .or_insert(0) += 1;
        drop(counts);
        let mut latency_map = self.latency_ns.lock().await;
        latency_map
            .entry(route.to_string())
            .or_insert_with(Vec::new)
            .push(latency.as_nanos() as u64);
    }

    /// Prometheus text exposition, sorted for deterministic scrapes.
    pub(crate) async fn render(&self) -> String {
        let mut body = String::new();
        let mut counts: Vec<((String, u16), u64)> =
            self.counts.lock().await.clone().into_iter().collect();
        counts.sort_by(|a, b| a.0.cmp(&b.0));
        for ((route, status), count) in counts {
            body.push_str(&format!(
                "http_requests_total{{route=\"{route}\",status=\"{status}\"}} {count}\n"
            ));
        }
        let mut latencies: Vec<(String, Vec<u64>)> =
            self.latency_ns.lock().await.clone().into_iter().collect();
        latencies.sort_by(|a, b| a.0.cmp(&b.0));
        for (route, vals) in latencies {
            body.push_str(&format!(
                "rolodex_http_request_latency_p95_seconds{{route=\"{route}\"}} {:.6}\n",
                percentile_ns(&vals, 0.95) as f64 / 1_000_000_000.0
            ));
        }
        body
    }
}

fn percentile_ns(samples: &[u64], q: f64) -> u64 {
    if samples.is_empty() {
        return 0;
    }
    let mut v: Vec<u64> = samples.to_vec();
    v.sort_unstable();
    let idx = ((v.len() as f64) * q).ceil() as usize;
    v[idx.saturating_sub(1).min(v.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentile_of_an_empty_sample_set_is_zero() {
        assert_eq!(percentile_ns(&[], 0.95), 0);
    }

    #[test]
    fn percentile_picks_the_upper_tail() {
        let samples: Vec<u64> = (1..=100).collect();
        assert_eq!(percentile_ns(&samples, 0.95), 95);
        assert_eq!(percentile_ns(&samples, 1.0), 100);
    }

    #[tokio::test]
    async fn render_lists_each_route_status_pair_once() {
        let metrics = RequestMetrics::default();
        metrics
            .observe_request("/api/v1/contacts", StatusCode::OK, Duration::from_millis(2))
            .await;
        metrics
            .observe_request("/api/v1/contacts", StatusCode::OK, Duration::from_millis(3))
            .await;
        metrics
            .observe_request("/", StatusCode::OK, Duration::from_millis(1))
            .await;
        let body = metrics.render().await;
        assert!(body.contains("http_requests_total{route=\"/api/v1/contacts\",status=\"200\"} 2"));
        assert!(body.contains("http_requests_total{route=\"/\",status=\"200\"} 1"));
        assert!(body.contains("rolodex_http_request_latency_p95_seconds{route=\"/\"}"));
    }
}

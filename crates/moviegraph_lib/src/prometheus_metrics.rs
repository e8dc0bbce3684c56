use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::sync::OnceLock;

// It's important to use the exported crate `prometheus_exporter::prometheus`
// instead of `prometheus`, as different versions of that crate have
// incompatible global registries.
use prometheus_exporter::prometheus;

pub struct PrometheusMetrics {
    pub movie_mutations: prometheus::IntCounterVec,
    pub movies_stored: prometheus::IntGauge,
}

static METRICS: OnceLock<PrometheusMetrics> = OnceLock::new();

pub fn metrics() -> &'static PrometheusMetrics {
    METRICS.get_or_init(|| PrometheusMetrics::new(prometheus::default_registry().clone()))
}

impl PrometheusMetrics {
    fn new(registry: prometheus::Registry) -> Self {
        let movie_mutations = prometheus::register_int_counter_vec_with_registry!(
            "movie_mutations",
            "Number of movie mutations served by the GraphQL API",
            &["operation", "success"],
            registry
        )
        .unwrap();
        let movies_stored = prometheus::register_int_gauge_with_registry!(
            "movies_stored",
            "Number of movies currently held in the store",
            registry
        )
        .unwrap();

        Self {
            movie_mutations,
            movies_stored,
        }
    }

    pub fn observe_mutation(&self, operation: &str, success: bool) {
        self.movie_mutations
            .with_label_values(&[operation, if success { "true" } else { "false" }])
            .inc();
    }
}

#[derive(Debug)]
pub struct PrometheusExporter {
    binding: SocketAddr,
    _exporter: prometheus_exporter::Exporter,
}

impl PrometheusExporter {
    /// Starts exporting Prometheus metrics at `http://0.0.0.0:{port}/metrics`. The server
    /// will keep running until the returned [`PrometheusExporter`] is dropped.
    pub fn start(port: u16, registry: prometheus::Registry) -> anyhow::Result<Self> {
        let binding = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, port));
        let exporter = {
            let mut builder = prometheus_exporter::Builder::new(binding);
            builder.with_registry(registry);
            builder.start()?
        };

        Ok(Self {
            binding,
            _exporter: exporter,
        })
    }

    /// Returns the port this Prometheus exporter is bound to.
    pub fn port(&self) -> u16 {
        self.binding.port()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observe_mutation_counts() {
        let registry = prometheus::Registry::new();
        let metrics = PrometheusMetrics::new(registry.clone());

        metrics.observe_mutation("deleteMovie", false);
        metrics.observe_mutation("deleteMovie", false);
        metrics.observe_mutation("addMovie", true);

        assert_eq!(
            metrics
                .movie_mutations
                .with_label_values(&["deleteMovie", "false"])
                .get(),
            2
        );
        assert_eq!(
            metrics
                .movie_mutations
                .with_label_values(&["addMovie", "true"])
                .get(),
            1
        );
    }
}

//! Metrics collection.
//!
//! # Metrics
//! - `deeplink_dispatch_total` (counter): links dispatched, by route and source
//! - `deeplink_unmatched_total` (counter): links not dispatched, by reason
//!
//! # Design Decisions
//! - Uses the `metrics` facade; the host installs the recorder/exporter
//! - Label values come from fixed sets (route names, source kinds, reasons),
//!   never raw URLs or caller-supplied screen names

/// Record a link dispatched to a route.
pub fn record_dispatch(route: &str, source: &'static str) {
    ::metrics::counter!(
        "deeplink_dispatch_total",
        "route" => route.to_string(),
        "source" => source
    )
    .increment(1);
}

/// Record a link that was not dispatched.
pub fn record_unmatched(reason: &'static str) {
    ::metrics::counter!("deeplink_unmatched_total", "reason" => reason).increment(1);
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::sync::{Arc, Mutex};

    use ::metrics::{
        Counter, CounterFn, Gauge, Histogram, Key, KeyName, Metadata, Recorder, SharedString,
        Unit,
    };

    use crate::config::LinksConfig;
    use crate::navigation::LinkSource;
    use crate::reader::ReaderRoute;
    use crate::routing::LinkRouter;

    type Counts = Arc<Mutex<BTreeMap<String, u64>>>;

    /// Counter handle that adds into the shared map under a rendered key.
    struct CountingHandle {
        key: String,
        counts: Counts,
    }

    impl CounterFn for CountingHandle {
        fn increment(&self, value: u64) {
            *self.counts.lock().unwrap().entry(self.key.clone()).or_default() += value;
        }

        fn absolute(&self, value: u64) {
            self.counts.lock().unwrap().insert(self.key.clone(), value);
        }
    }

    /// Recorder that keeps counter totals keyed as `name{label=value,...}`.
    #[derive(Default)]
    struct CapturingRecorder {
        counts: Counts,
    }

    impl CapturingRecorder {
        fn counts(&self) -> BTreeMap<String, u64> {
            self.counts.lock().unwrap().clone()
        }
    }

    impl Recorder for CapturingRecorder {
        fn describe_counter(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}
        fn describe_gauge(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}
        fn describe_histogram(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}

        fn register_counter(&self, key: &Key, _: &Metadata<'_>) -> Counter {
            let mut labels: Vec<String> =
                key.labels().map(|l| format!("{}={}", l.key(), l.value())).collect();
            labels.sort();
            Counter::from_arc(Arc::new(CountingHandle {
                key: format!("{}{{{}}}", key.name(), labels.join(",")),
                counts: self.counts.clone(),
            }))
        }

        fn register_gauge(&self, _: &Key, _: &Metadata<'_>) -> Gauge {
            Gauge::noop()
        }

        fn register_histogram(&self, _: &Key, _: &Metadata<'_>) -> Histogram {
            Histogram::noop()
        }
    }

    fn exercise(metrics_enabled: bool) -> BTreeMap<String, u64> {
        let mut config = LinksConfig::default();
        config.observability.metrics_enabled = metrics_enabled;
        let router = LinkRouter::builder(&config)
            .route(ReaderRoute::Discover)
            .build()
            .unwrap();

        let recorder = CapturingRecorder::default();
        ::metrics::with_local_recorder(&recorder, || {
            router.handle("https://wordpress.com/discover", Some(&LinkSource::Widget)).unwrap();
            router.handle("https://wordpress.com/discover", Some(&LinkSource::Widget)).unwrap();
            router
                .handle_path("/discover", Some(&LinkSource::Screen("me_tab".into())))
                .unwrap();
            router.handle("https://wordpress.com/discover", None).unwrap();
            router.handle("https://wordpress.com/tag", None).unwrap_err();
            router.handle("https://example.com/discover", None).unwrap_err();
        });
        recorder.counts()
    }

    #[test]
    fn test_dispatch_and_rejection_counters() {
        let counts = exercise(true);

        let expected: BTreeMap<String, u64> = [
            ("deeplink_dispatch_total{route=reader_discover,source=widget}", 2),
            ("deeplink_dispatch_total{route=reader_discover,source=screen}", 1),
            ("deeplink_dispatch_total{route=reader_discover,source=none}", 1),
            ("deeplink_unmatched_total{reason=no_route}", 1),
            ("deeplink_unmatched_total{reason=unsupported_url}", 1),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

        assert_eq!(counts, expected);
    }

    #[test]
    fn test_disabled_metrics_record_nothing() {
        assert!(exercise(false).is_empty());
    }
}

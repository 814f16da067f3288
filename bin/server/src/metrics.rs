use metrics::{describe_counter, describe_histogram};

// this is for queries forwarded to nodes
pub const METRICS_QUERY_COUNT: &str = "lnd_proxy_query_count";
pub const METRICS_QUERY_ERROR_COUNT: &str = "lnd_proxy_query_error_count";
pub const METRICS_QUERY_HISTOGRAM: &str = "lnd_proxy_query_histogram";

pub fn describe_metrics() {
    describe_counter!(METRICS_QUERY_COUNT, "Number of queries forwarded to nodes");
    describe_counter!(METRICS_QUERY_ERROR_COUNT, "Number of failed queries");
    describe_histogram!(METRICS_QUERY_HISTOGRAM, "Query latency histogram in seconds");
}

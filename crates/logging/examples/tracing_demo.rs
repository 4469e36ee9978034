//! Routes a whole group into a tracing subscriber.
//!
//! Run with: `cargo run -p grouplog --example tracing_demo --features tracing`

use grouplog::tracing_bridge::tracing_sink;
use grouplog::{Annotation, FormatFlags, Group, Severity, SinkSet};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let sinks = SinkSet {
        trace: Some(tracing_sink(Severity::Trace)),
        debug: Some(tracing_sink(Severity::Debug)),
        info: Some(tracing_sink(Severity::Info)),
        notice: Some(tracing_sink(Severity::Notice)),
        warning: Some(tracing_sink(Severity::Warning)),
        alert: Some(tracing_sink(Severity::Alert)),
        error: Some(tracing_sink(Severity::Error)),
        critical: Some(tracing_sink(Severity::Critical)),
        emergency: Some(tracing_sink(Severity::Emergency)),
    };

    let group = Group::with_sinks("demo:", Annotation::OFF, FormatFlags::OFF, sinks)
        .expect("all sinks set");

    let _ = group.println("one line through every severity");
    let _ = group.warning().print("and one warning on its own");
}

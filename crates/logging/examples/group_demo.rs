//! Basic group usage: default routing, suppression, and the macros.
//!
//! Run with: `cargo run -p grouplog --example group_demo`

use grouplog::{Annotation, Group, print_log};

fn main() {
    // Six levels to stdout, Error/Critical/Emergency to stderr.
    let group = Group::must_new("demo:", Annotation::default());

    let _ = group.info().print("service started");
    let _ = print_log!(group.debug(), "listening on port {}", 7878);

    group.trace().set_ignore(true);
    let _ = group.trace().print("not shown");

    group.set_label("DEMO:");
    let _ = group.notice().print("relabeled on the fly");

    let stats = group.info().stats();
    let _ = group.debug().print_fmt(format_args!(
        "info level has written {} lines, {} bytes",
        stats.lines, stats.bytes
    ));
}

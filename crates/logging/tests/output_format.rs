//! End-to-end output format tests.
//!
//! Exercises the composed line format through real groups: bare
//! label+token lines, per-level routing, caller file/line annotations,
//! alignment padding, and timestamp fields.

use grouplog::{Annotation, Capture, FormatFlags, Group, Severity, SinkSet};

// ============================================================================
// Bare Lines
// ============================================================================

/// Verifies one message per level, flags off and label empty, yields the
/// nine token-prefixed lines in emission order.
#[test]
fn bare_lines_per_level_in_order() {
    let captures: Vec<Capture> = (0..9).map(|_| Capture::new()).collect();
    let sinks = SinkSet {
        trace: Some(captures[0].sink()),
        debug: Some(captures[1].sink()),
        info: Some(captures[2].sink()),
        notice: Some(captures[3].sink()),
        warning: Some(captures[4].sink()),
        alert: Some(captures[5].sink()),
        error: Some(captures[6].sink()),
        critical: Some(captures[7].sink()),
        emergency: Some(captures[8].sink()),
    };
    let group =
        Group::with_sinks("", Annotation::OFF, FormatFlags::OFF, sinks).expect("all sinks set");

    for severity in Severity::ALL {
        group.level(severity).print("hello").expect("write succeeds");
    }

    let expected = [
        "TRACE: hello",
        "DEBUG: hello",
        "INFO: hello",
        "NOTICE: hello",
        "WARNING: hello",
        "ALERT: hello",
        "ERROR: hello",
        "CRITICAL: hello",
        "EMERGENCY: hello",
    ];
    for (capture, want) in captures.iter().zip(expected) {
        assert_eq!(capture.lines(), [want]);
    }
}

/// Verifies a group sweep writes the same nine lines into one shared sink.
#[test]
fn group_println_emits_nine_lines() {
    let capture = Capture::new();
    let group = Group::with_sinks(
        "glog:",
        Annotation::OFF,
        FormatFlags::OFF,
        SinkSet::uniform(&capture.sink()),
    )
    .expect("all sinks set");

    group.println("\"this a test\"").expect("write succeeds");

    assert_eq!(
        capture.lines(),
        [
            "glog:TRACE: \"this a test\"",
            "glog:DEBUG: \"this a test\"",
            "glog:INFO: \"this a test\"",
            "glog:NOTICE: \"this a test\"",
            "glog:WARNING: \"this a test\"",
            "glog:ALERT: \"this a test\"",
            "glog:ERROR: \"this a test\"",
            "glog:CRITICAL: \"this a test\"",
            "glog:EMERGENCY: \"this a test\"",
        ]
    );
}

// ============================================================================
// Destination Routing
// ============================================================================

/// Verifies the standard split shape routed at two observable sinks: the
/// six lower levels reach one destination, the three error levels the
/// other, and nothing crosses over.
#[test]
fn standard_split_routes_six_and_three() {
    let out = Capture::new();
    let err = Capture::new();

    let mut sinks = SinkSet::uniform(&out.sink());
    let err_sink = err.sink();
    sinks.error = Some(err_sink.clone());
    sinks.critical = Some(err_sink.clone());
    sinks.emergency = Some(err_sink);

    let group =
        Group::with_sinks("s:", Annotation::OFF, FormatFlags::OFF, sinks).expect("all sinks set");
    for severity in Severity::ALL {
        group.level(severity).print(severity.name()).expect("write succeeds");
    }

    assert_eq!(
        out.lines(),
        [
            "s:TRACE: Trace",
            "s:DEBUG: Debug",
            "s:INFO: Info",
            "s:NOTICE: Notice",
            "s:WARNING: Warning",
            "s:ALERT: Alert",
        ]
    );
    assert_eq!(
        err.lines(),
        [
            "s:ERROR: Error",
            "s:CRITICAL: Critical",
            "s:EMERGENCY: Emergency",
        ]
    );
}

// ============================================================================
// Caller File Annotations
// ============================================================================

/// Verifies the short file flag renders this file's base name and line.
#[test]
fn short_file_names_this_file() {
    let capture = Capture::new();
    let group = Group::with_sinks(
        "f:",
        Annotation::OFF,
        FormatFlags {
            short_file: true,
            ..FormatFlags::OFF
        },
        SinkSet::uniform(&capture.sink()),
    )
    .expect("all sinks set");
    group.set_align_file(0);

    group.info().print("here").expect("write succeeds");

    let line = capture.text();
    assert!(
        line.starts_with("f:INFO: output_format.rs:"),
        "unexpected line {line:?}"
    );
    assert!(line.ends_with(" here\n"));
}

/// Verifies the long file flag keeps the path's directory components.
#[test]
fn long_file_keeps_directories() {
    let capture = Capture::new();
    let group = Group::with_sinks(
        "f:",
        Annotation {
            trim_source_root: false,
            ..Annotation::OFF
        },
        FormatFlags {
            long_file: true,
            ..FormatFlags::OFF
        },
        SinkSet::uniform(&capture.sink()),
    )
    .expect("all sinks set");
    group.set_align_file(0);

    group.info().print("here").expect("write succeeds");

    let line = capture.text();
    assert!(
        line.contains("tests/output_format.rs:") || line.contains("tests\\output_format.rs:"),
        "long file must keep directories, got {line:?}"
    );
}

/// Verifies the file field is padded to the configured minimum width.
#[test]
fn file_field_respects_alignment() {
    let capture = Capture::new();
    let group = Group::with_sinks(
        "",
        Annotation::OFF,
        FormatFlags {
            short_file: true,
            ..FormatFlags::OFF
        },
        SinkSet::uniform(&capture.sink()),
    )
    .expect("all sinks set");
    group.set_align_file(40);

    group.debug().print("msg").expect("write succeeds");

    let line = capture.text();
    let field_end = line.find("msg").expect("message present");
    let field = &line["DEBUG: ".len()..field_end];
    assert_eq!(field.len(), 40, "padded field in {line:?}");
    assert!(field.starts_with("output_format.rs:"));
    assert!(field.ends_with(' '));
}

// ============================================================================
// Timestamp Fields
// ============================================================================

/// Verifies the date and time fields have the documented shape.
#[test]
fn date_and_time_have_expected_shape() {
    let capture = Capture::new();
    let group = Group::with_sinks(
        "t:",
        Annotation::OFF,
        FormatFlags {
            date: true,
            time: true,
            ..FormatFlags::OFF
        },
        SinkSet::uniform(&capture.sink()),
    )
    .expect("all sinks set");

    group.notice().print("stamped").expect("write succeeds");

    let line = capture.text();
    let rest = line.strip_prefix("t:NOTICE: ").expect("prefix present");
    // date: YYYY/MM/DD
    assert_eq!(&rest[4..5], "/");
    assert_eq!(&rest[7..8], "/");
    assert!(rest[..4].chars().all(|c| c.is_ascii_digit()));
    // time: HH:MM:SS after the date and a space
    let time = &rest[11..19];
    assert_eq!(&time[2..3], ":");
    assert_eq!(&time[5..6], ":");
    assert!(rest[11..13].chars().all(|c| c.is_ascii_digit()));
    assert!(rest.ends_with("stamped\n"));
}

/// Verifies the microsecond flag widens the time field.
#[test]
fn microseconds_widen_the_time_field() {
    let capture = Capture::new();
    let group = Group::with_sinks(
        "t:",
        Annotation::OFF,
        FormatFlags {
            time: true,
            microseconds: true,
            ..FormatFlags::OFF
        },
        SinkSet::uniform(&capture.sink()),
    )
    .expect("all sinks set");

    group.notice().print("stamped").expect("write succeeds");

    let line = capture.text();
    let rest = line.strip_prefix("t:NOTICE: ").expect("prefix present");
    // HH:MM:SS.ffffff
    assert_eq!(&rest[8..9], ".");
    assert!(rest[9..15].chars().all(|c| c.is_ascii_digit()));
}

//! Integration tests for group-wide configuration.
//!
//! Group setters must apply identically to all nine levels, construction
//! must reject unset destinations, and the panicking constructor variants
//! must abort instead of returning an error.

use grouplog::{
    Annotation, Capture, ConfigError, FormatFlags, FunctionName, Group, GroupConfig, Severity,
    Sink, SinkSet,
};

fn capture_group(label: &str, capture: &Capture) -> Group {
    Group::with_sinks(
        label,
        Annotation::OFF,
        FormatFlags::OFF,
        SinkSet::uniform(&capture.sink()),
    )
    .expect("all sinks set")
}

// ============================================================================
// Construction
// ============================================================================

/// Verifies construction fails on the first unset destination, in order.
#[test]
fn construction_rejects_unset_destination() {
    for severity in Severity::ALL {
        let mut sinks = SinkSet::standard();
        match severity {
            Severity::Trace => sinks.trace = None,
            Severity::Debug => sinks.debug = None,
            Severity::Info => sinks.info = None,
            Severity::Notice => sinks.notice = None,
            Severity::Warning => sinks.warning = None,
            Severity::Alert => sinks.alert = None,
            Severity::Error => sinks.error = None,
            Severity::Critical => sinks.critical = None,
            Severity::Emergency => sinks.emergency = None,
        }
        let err = Group::with_sinks("g:", Annotation::OFF, FormatFlags::OFF, sinks)
            .expect_err("unset sink must fail construction");
        assert_eq!(err, ConfigError::MissingSink(severity));
    }
}

/// Verifies an empty sink set reports the first level in emission order.
#[test]
fn empty_sink_set_reports_trace_first() {
    let err = Group::with_sinks("g:", Annotation::OFF, FormatFlags::OFF, SinkSet::default())
        .expect_err("default sink set is fully unset");
    assert_eq!(err, ConfigError::MissingSink(Severity::Trace));
}

/// Verifies the panicking constructor aborts on an unset destination.
#[test]
#[should_panic(expected = "group construction failed")]
fn must_with_sinks_panics_on_unset_destination() {
    let mut sinks = SinkSet::standard();
    sinks.critical = None;
    let _ = Group::must_with_sinks("g:", Annotation::OFF, FormatFlags::OFF, sinks);
}

/// Verifies a discard sink satisfies construction for a silenced level.
#[test]
fn discard_satisfies_an_unused_level() {
    let capture = Capture::new();
    let mut sinks = SinkSet::uniform(&capture.sink());
    sinks.trace = Some(Sink::discard());

    let group =
        Group::with_sinks("g:", Annotation::OFF, FormatFlags::OFF, sinks).expect("all slots set");
    group.trace().print("discarded").expect("write succeeds");
    group.debug().print("kept").expect("write succeeds");

    assert_eq!(capture.lines(), ["g:DEBUG: kept"]);
}

/// Verifies group names stay unique even with identical labels.
#[test]
fn group_names_are_unique() {
    let a = Group::must_new("twin:", Annotation::OFF);
    let b = Group::must_new("twin:", Annotation::OFF);
    assert!(a.name().starts_with("twin:<"));
    assert_ne!(a.name(), b.name());
}

// ============================================================================
// Group-Wide Setters
// ============================================================================

/// Verifies set_flags reaches all nine levels.
#[test]
fn set_flags_applies_to_all_levels() {
    let capture = Capture::new();
    let group = capture_group("g:", &capture);

    group.set_flags(FormatFlags::DATE_TIME_SHORT_MICRO);
    for level in group.levels() {
        assert_eq!(level.flags(), FormatFlags::DATE_TIME_SHORT_MICRO);
    }
}

/// Verifies set_annotation reaches all nine levels.
#[test]
fn set_annotation_applies_to_all_levels() {
    let capture = Capture::new();
    let group = capture_group("g:", &capture);

    group.set_annotation(Annotation::FULL);
    for level in group.levels() {
        assert_eq!(level.annotation().function, FunctionName::Full);
        assert!(level.annotation().trim_source_root);
    }
}

/// Verifies set_ignore flips each level's own flag, and back.
#[test]
fn set_ignore_applies_to_all_levels() {
    let capture = Capture::new();
    let group = capture_group("g:", &capture);

    for state in [true, false, true, false] {
        group.set_ignore(state);
        for level in group.levels() {
            assert_eq!(level.ignore(), state);
        }
    }
}

/// Verifies a relabel shows up on the next emitted line of every level.
#[test]
fn set_label_takes_effect_on_next_line() {
    let capture = Capture::new();
    let group = capture_group("old:", &capture);

    group.alert().print("before").expect("write succeeds");
    group.set_label("NEW:");
    group.alert().print("after").expect("write succeeds");

    assert_eq!(capture.lines(), ["old:ALERT: before", "NEW:ALERT: after"]);
}

/// Verifies set_sink reroutes all nine levels to the new destination.
#[test]
fn set_sink_applies_to_all_levels() {
    let capture = Capture::new();
    let group = capture_group("g:", &capture);
    let rerouted = Capture::new();

    group.set_sink(&rerouted.sink());
    group.println("moved").expect("write succeeds");

    assert!(capture.is_empty());
    assert_eq!(rerouted.lines().len(), 9);
    for level in group.levels() {
        assert!(Sink::same(&level.sink(), &group.trace().sink()));
    }
}

/// Verifies alignment setters clamp per field on every level.
#[test]
fn group_alignment_setters_clamp() {
    let capture = Capture::new();
    let group = capture_group("g:", &capture);

    group.set_align_file(1000);
    group.set_align_func(51);
    for level in group.levels() {
        assert_eq!(level.align_file(), 50);
        assert_eq!(level.align_func(), 50);
    }

    group.set_align_file(0);
    group.set_align_func(0);
    for level in group.levels() {
        assert_eq!(level.align_file(), 0);
        assert_eq!(level.align_func(), 0);
    }
}

// ============================================================================
// Config Bundle
// ============================================================================

/// Verifies from_config applies label, flags, annotation, and alignment.
#[test]
fn from_config_applies_every_field() {
    let capture = Capture::new();
    let config = GroupConfig {
        label: "cfg:".to_owned(),
        flags: FormatFlags::OFF,
        annotation: Annotation::FULL,
        align_file: 60,
        align_func: 4,
    };

    let group = Group::from_config(&config, SinkSet::uniform(&capture.sink()))
        .expect("all sinks set");

    for level in group.levels() {
        assert_eq!(level.flags(), FormatFlags::OFF);
        assert_eq!(level.annotation(), Annotation::FULL);
        assert_eq!(level.align_file(), 50, "applied widths are clamped");
        assert_eq!(level.align_func(), 4);
        assert!(level.prefix().starts_with("cfg:"));
    }
}

use serial_test::serial;
use std::fmt;
use tracerr::constants::{CHAIN_SEPARATOR, NO_TRACE_MSG, depth::DEFAULT_CALL_DEPTH};
use tracerr::{JsonFormatter, TraceRecord, TracedError, append, settings, traced};

// Call sites live in plain functions so the reported function name is the
// function itself rather than a test harness closure.

#[inline(never)]
fn open_file() -> (TracedError, u32) {
    (traced!("failed: {}", "disk full"), line!())
}

#[inline(never)]
fn wrap_error(previous: TracedError) -> (TracedError, u32) {
    (append!(Some(previous), "could not save {}", "report.txt"), line!())
}

#[inline(never)]
fn root_both_ways() -> (TracedError, TracedError) {
    (traced!("no {} found", "config"), append!(None::<TracedError>, "no {} found", "config"))
}

#[inline(never)]
fn wrapped_constructor(message: &str) -> TracedError {
    traced!("{}", message)
}

#[inline(never)]
fn call_through_wrapper() -> (TracedError, u32) {
    (wrapped_constructor("wrapped"), line!())
}

#[test]
#[serial]
fn test_new_reports_call_site() {
    settings::reset();
    let (err, line) = open_file();

    assert_eq!(
        err.to_string(),
        format!("traced_test.rs:open_file():{}: failed: disk full", line)
    );
    assert!(err.is_root());
}

#[test]
#[serial]
fn test_append_none_matches_new() {
    settings::reset();
    let (from_new, from_append) = root_both_ways();

    assert_eq!(from_new.to_string(), from_append.to_string());
    assert!(from_append.is_root());
}

#[test]
#[serial]
fn test_append_concatenates_exactly_once() {
    settings::reset();
    let (root, _) = open_file();
    let root_text = root.to_string();
    let (err, line) = wrap_error(root);

    let expected = format!(
        "{}{}traced_test.rs:wrap_error():{}: could not save report.txt",
        root_text, CHAIN_SEPARATOR, line
    );
    assert_eq!(err.to_string(), expected);
    assert_eq!(err.to_string().matches(root_text.as_str()).count(), 1);
    assert_eq!(err.previous().unwrap().to_string(), root_text);
}

#[test]
#[serial]
fn test_json_formatter_scenario() {
    settings::reset();
    settings::set_formatter(JsonFormatter);
    let (err, line) = open_file();
    settings::reset();

    let record = TraceRecord::parse(err.details()).unwrap();
    assert_eq!(
        record,
        TraceRecord {
            file: "traced_test.rs".to_string(),
            func: "open_file()".to_string(),
            line_nbr: line,
            details: "failed: disk full".to_string(),
        }
    );
}

#[test]
#[serial]
fn test_json_chain_lines_parse() {
    settings::reset();
    settings::set_formatter(JsonFormatter);
    let (root, _) = open_file();
    let (err, line) = wrap_error(root);
    settings::reset();

    let lines: Vec<&str> = err.details().split(CHAIN_SEPARATOR).collect();
    assert_eq!(lines.len(), 2);

    let first = TraceRecord::parse(lines[0]).unwrap();
    let second = TraceRecord::parse(lines[1]).unwrap();
    assert_eq!(first.func, "open_file()");
    assert_eq!(second.func, "wrap_error()");
    assert_eq!(second.line_nbr, line);
    assert!(second.func.ends_with("()"));
}

#[test]
#[serial]
fn test_call_depth_skips_wrapper() {
    settings::reset();
    let before = wrapped_constructor("direct");
    let before_text = before.to_string();
    assert!(before_text.contains(":wrapped_constructor():"));

    settings::set_call_depth(DEFAULT_CALL_DEPTH + 1);
    let (err, line) = call_through_wrapper();
    settings::reset();

    assert_eq!(
        err.to_string(),
        format!("traced_test.rs:call_through_wrapper():{}: wrapped", line)
    );
    assert_eq!(before.to_string(), before_text);
}

#[test]
#[serial]
fn test_out_of_range_depth_renders_sentinel() {
    settings::reset();
    let (root, _) = open_file();
    let root_text = root.to_string();

    settings::set_call_depth(10_000);
    let lost = traced!("never shown {}", 1);
    let appended = append!(Some(root), "also never shown");
    settings::reset();

    assert_eq!(lost.to_string(), NO_TRACE_MSG);
    assert_eq!(
        appended.to_string(),
        format!("{}{}{}", root_text, CHAIN_SEPARATOR, NO_TRACE_MSG)
    );

    settings::set_formatter(JsonFormatter);
    settings::set_call_depth(10_000);
    let lost_json = traced!("never shown as json");
    settings::reset();

    assert_eq!(lost_json.to_string(), NO_TRACE_MSG);
    assert!(TraceRecord::parse(lost_json.details()).is_err());
}

fn bracketed(file: &str, function: &str, line: u32, details: fmt::Arguments<'_>) -> String {
    format!("[{} {} {}] {}", file, function, line, details)
}

#[test]
#[serial]
fn test_custom_formatter() {
    settings::reset();
    settings::set_formatter(bracketed);
    let (err, line) = open_file();
    settings::reset();

    assert_eq!(
        err.to_string(),
        format!("[traced_test.rs open_file {}] failed: disk full", line)
    );
}

#[test]
#[serial]
fn test_formatter_change_is_not_retroactive() {
    settings::reset();
    let (err, _) = open_file();
    let text = err.to_string();

    settings::set_formatter(JsonFormatter);
    assert_eq!(err.to_string(), text);
    assert!(!err.to_string().starts_with('{'));
    settings::reset();
}

#[test]
#[serial]
fn test_append_to_anyhow_error() {
    settings::reset();
    let cause = anyhow::anyhow!("database unavailable");
    let err = append!(Some(cause), "loading user {}", 42);

    assert!(err.to_string().starts_with("database unavailable;\n"));
    assert!(err.to_string().ends_with(": loading user 42"));
    assert_eq!(err.root_cause().to_string(), "database unavailable");
}

#[test]
#[serial]
fn test_question_mark_into_box_dyn_error() {
    fn fails() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Err(traced!("bad input"))?
    }

    settings::reset();
    let err = fails().unwrap_err();
    assert!(err.to_string().ends_with(": bad input"));
}

#[test]
#[serial]
fn test_concurrent_reconfiguration() {
    settings::reset();
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..50 {
                    let (err, _) = open_file();
                    let text = err.to_string();
                    assert!(
                        text.starts_with("traced_test.rs:open_file():") || text.starts_with('{'),
                        "unexpected rendering: {}",
                        text
                    );
                }
            });
        }
        scope.spawn(|| {
            for i in 0..50 {
                if i % 2 == 0 {
                    settings::set_formatter(JsonFormatter);
                } else {
                    settings::set_formatter(tracerr::DefaultFormatter);
                }
            }
        });
    });
    settings::reset();
}

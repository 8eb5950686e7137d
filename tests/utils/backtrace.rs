use strtools::utils::backtrace::*;

#[test]
fn test_format_backtrace_empty() {
    assert_eq!(format_backtrace(&[]), "");
}

#[test]
fn test_format_backtrace_single_frame() {
    let frames = vec![Frame::new("connect", "/var/www/lib/db.rs", 17)];
    assert_eq!(format_backtrace(&frames), "\n\tfrom connect() called at [db.rs:17]");
}

#[test]
fn test_format_backtrace_orders_prefixes() {
    let frames = vec![
        Frame::new("query", "/app/src/db.rs", 88),
        Frame::new("load_user", "/app/src/user.rs", 21),
        Frame::new("main", "/app/src/main.rs", 5),
    ];
    let trace = format_backtrace(&frames);
    assert_eq!(
        trace,
        "\n\tfrom query() called at [db.rs:88]\
         \n\tat load_user() called at [user.rs:21]\
         \n\tat main() called at [main.rs:5]"
    );
}

#[test]
fn test_frame_basename() {
    assert_eq!(Frame::new("f", "C:\\app\\src\\lib.rs", 1).file_basename(), "lib.rs");
    assert_eq!(Frame::new("f", "lib.rs", 1).file_basename(), "lib.rs");
    assert_eq!(Frame::new("f", "/srv/app/", 1).file_basename(), "app");
    assert_eq!(Frame::new("f", "", 1).file_basename(), "");
}

#[test]
fn test_frame_display() {
    let frame = Frame::new("strtools::run", "src/main.rs", 42);
    assert_eq!(frame.to_string(), "strtools::run() called at [main.rs:42]");
}

#[test]
fn test_frames_from_json() {
    let json = r#"[
        {"function": "handle", "file": "/srv/api/handler.rs", "line": 10},
        {"function": "main"}
    ]"#;
    let frames: Vec<Frame> = serde_json::from_str(json).unwrap();
    assert_eq!(frames[1], Frame::new("main", "", 0));
    assert_eq!(
        format_backtrace(&frames),
        "\n\tfrom handle() called at [handler.rs:10]\n\tat main() called at [:0]"
    );
}

#[test]
fn test_capture_frames_skips_capture_machinery() {
    let frames = capture_frames();
    assert!(frames
        .iter()
        .all(|frame| !frame.function.starts_with("std::backtrace")));
    let first = frames.first().expect("test builds carry debug info");
    assert!(!first.function.starts_with("strtools::utils::backtrace"));
    assert!(frames
        .iter()
        .any(|frame| frame.function.contains("test_capture_frames_skips_capture_machinery")));
}

#[test]
fn test_format_current_backtrace_shape() {
    let trace = format_current_backtrace();
    assert!(trace.starts_with("\n\tfrom "));
    assert!(trace.contains("test_format_current_backtrace_shape() called at [backtrace.rs:"));
    assert!(trace.lines().skip(2).all(|line| line.starts_with("\tat ")));
}

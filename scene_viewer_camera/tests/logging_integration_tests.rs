//! Integration tests for the camera logging system
//!
//! These tests route the crate's log output into a capturing logger and
//! check what the camera reports for rejected input and failed builders.
//!
//! Run with: cargo test --test logging_integration_tests

use scene_viewer_camera::camera3d::log::{Log, Logger, LogEntry, LogSeverity};
use scene_viewer_camera::camera3d::{
    look_at, perspective, Camera, CameraConfig, PerspectiveParams, Projection, Viewport,
};
use scene_viewer_camera::glam::{Vec2, Vec3};
use std::sync::{Arc, Mutex};
use serial_test::serial;

// ============================================================================
// TEST LOGGER IMPLEMENTATION
// ============================================================================

/// Test logger that captures log entries for verification
struct TestLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogger {
    fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: entries.clone() }, entries)
    }
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

fn camera() -> Camera {
    Camera::new(
        Vec3::new(0.0, 0.0, 5.0),
        Vec3::ZERO,
        Vec3::Y,
        Projection::Perspective(PerspectiveParams { fov_y: 1.0, aspect: 1.0, near: 0.1, far: 100.0 }),
        Viewport::new(640.0, 480.0),
        CameraConfig::default(),
    )
    .unwrap()
}

fn restore() {
    Log::reset_logger();
    Log::set_min_severity(LogSeverity::Info);
}

// ============================================================================
// LOGGING TESTS
// ============================================================================

#[test]
#[serial]
fn test_integration_skipped_mutations_log_debug() {
    let mut camera = camera();
    let (test_logger, entries) = TestLogger::new();
    Log::set_logger(test_logger);
    Log::set_min_severity(LogSeverity::Debug);

    camera.move_by(Vec3::new(f32::NAN, 0.0, 0.0), false);
    camera.rotate(Vec3::ZERO, 1.0);
    camera.zoom(f32::INFINITY, Vec2::ZERO);

    {
        let captured = entries.lock().unwrap();
        let skips: Vec<_> = captured.iter().filter(|e| e.source == "camera3d::Camera").collect();
        assert_eq!(skips.len(), 3);
        assert!(skips.iter().all(|e| e.severity == LogSeverity::Debug));
        assert!(skips[0].message.starts_with("move skipped"));
        assert!(skips[1].message.starts_with("rotate skipped"));
        assert!(skips[2].message.starts_with("zoom skipped"));
    }

    restore();
}

#[test]
#[serial]
fn test_integration_debug_filtered_by_default() {
    let mut camera = camera();
    let (test_logger, entries) = TestLogger::new();
    Log::set_logger(test_logger);
    Log::set_min_severity(LogSeverity::Info);

    camera.move_by(Vec3::new(f32::NAN, 0.0, 0.0), false);

    assert!(entries.lock().unwrap().is_empty());

    restore();
}

#[test]
#[serial]
fn test_integration_builder_error_logged_with_location() {
    let (test_logger, entries) = TestLogger::new();
    Log::set_logger(test_logger);

    let result = perspective(1.0, 1.0, 10.0, 1.0);
    assert!(result.is_err());

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 1);
        let entry = &captured[0];
        assert_eq!(entry.severity, LogSeverity::Error);
        assert_eq!(entry.source, "camera3d::projection");
        assert!(entry.message.contains("near"));
        assert!(entry.file.is_some());
        assert!(entry.line.is_some());
    }

    restore();
}

#[test]
#[serial]
fn test_integration_look_at_up_fallback_warns() {
    let (test_logger, entries) = TestLogger::new();
    Log::set_logger(test_logger);

    let view = look_at(Vec3::new(0.0, 5.0, 0.0), Vec3::ZERO, Vec3::Y);
    assert!(view.is_ok());

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 1);
        let entry = &captured[0];
        assert_eq!(entry.severity, LogSeverity::Warn);
        assert_eq!(entry.source, "camera3d::view");
        assert!(entry.message.contains("parallel"));
    }

    // A usable up stays quiet
    entries.lock().unwrap().clear();
    look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y).unwrap();
    assert!(entries.lock().unwrap().is_empty());

    restore();
}

#[test]
#[serial]
fn test_integration_logger_reset() {
    let (test_logger, entries) = TestLogger::new();
    Log::set_logger(test_logger);

    Log::log(LogSeverity::Info, "test", "Message 1".to_string());
    assert_eq!(entries.lock().unwrap().len(), 1);

    Log::reset_logger();

    // Goes to the default logger, not captured
    Log::log(LogSeverity::Info, "test", "Message 2".to_string());
    assert_eq!(entries.lock().unwrap().len(), 1);

    restore();
}

#[test]
#[serial]
fn test_integration_logging_different_severities() {
    let (test_logger, entries) = TestLogger::new();
    Log::set_logger(test_logger);
    Log::set_min_severity(LogSeverity::Trace);

    Log::log(LogSeverity::Trace, "test", "Trace message".to_string());
    Log::log(LogSeverity::Debug, "test", "Debug message".to_string());
    Log::log(LogSeverity::Info, "test", "Info message".to_string());
    Log::log(LogSeverity::Warn, "test", "Warn message".to_string());
    Log::log(LogSeverity::Error, "test", "Error message".to_string());

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 5);
        assert_eq!(captured[0].severity, LogSeverity::Trace);
        assert_eq!(captured[1].severity, LogSeverity::Debug);
        assert_eq!(captured[2].severity, LogSeverity::Info);
        assert_eq!(captured[3].severity, LogSeverity::Warn);
        assert_eq!(captured[4].severity, LogSeverity::Error);
    }

    restore();
}

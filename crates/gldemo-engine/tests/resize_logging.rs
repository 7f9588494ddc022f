use std::sync::atomic::{AtomicUsize, Ordering};

use gldemo_engine::window::{PlatformEvent, WindowState};
use log::{Level, LevelFilter, Log, Metadata, Record};

struct ResizeCounter {
    resizes: AtomicUsize,
}

impl Log for ResizeCounter {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= Level::Info
    }

    fn log(&self, record: &Record<'_>) {
        if record.args().to_string().starts_with("window resized") {
            self.resizes.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn flush(&self) {}
}

static COUNTER: ResizeCounter = ResizeCounter {
    resizes: AtomicUsize::new(0),
};

// One test per binary: the logger is process global.
#[test]
fn repeated_resize_is_logged_once() {
    log::set_logger(&COUNTER).unwrap();
    log::set_max_level(LevelFilter::Info);

    let mut state = WindowState::default();
    let resize = PlatformEvent::Resized { width: 1280, height: 720 };

    assert!(state.apply(&resize));
    assert!(!state.apply(&resize));
    assert_eq!(COUNTER.resizes.load(Ordering::SeqCst), 1);

    assert!(state.apply(&PlatformEvent::Resized { width: 640, height: 480 }));
    assert_eq!(COUNTER.resizes.load(Ordering::SeqCst), 2);
    assert_eq!((state.width(), state.height()), (640, 480));
}

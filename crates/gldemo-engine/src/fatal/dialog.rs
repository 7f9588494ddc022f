/// Set to `0` to keep fatal errors off the desktop (tests, CI runs).
pub const DIALOG_ENV: &str = "GLDEMO_FATAL_DIALOG";

/// Whether a fatal error should also be shown in a blocking message box.
///
/// Only Windows shows one; there the console is often hidden.
pub(super) fn dialog_enabled(setting: Option<&str>) -> bool {
    cfg!(windows) && setting.is_none_or(|value| value != "0")
}

#[cfg(windows)]
pub(super) fn show(message: &str) {
    rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title("Fatal error")
        .set_description(message)
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}

#[cfg(not(windows))]
pub(super) fn show(_message: &str) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_always_disables_the_dialog() {
        assert!(!dialog_enabled(Some("0")));
    }

    #[test]
    fn dialog_is_a_windows_only_channel() {
        assert_eq!(dialog_enabled(None), cfg!(windows));
        assert_eq!(dialog_enabled(Some("1")), cfg!(windows));
    }
}

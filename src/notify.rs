pub trait Notifier {
    fn notify(&self, message: &str);
}

pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let _ = window.alert_with_message(message);
    }
}

use crate::domain::ports::Notifier;
use std::io::Write;

/// Prints each notification on its own block of stderr, so rendered
/// containers on stdout stay clean.
#[derive(Debug, Clone, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, message: &str) {
        tracing::info!("Notification: {}", message);
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(stderr, "\n[!] {}\n", message);
    }
}

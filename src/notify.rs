//! Notification surface for transient user messages

use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tracing::{info, warn};

use crate::types::{Notice, Variant};

/// Displays transient notices; the caller never waits on it
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Writes notices to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: Notice) {
        match notice.variant() {
            Variant::Default => info!(title = notice.title(), "{}", notice.description()),
            Variant::Destructive => warn!(title = notice.title(), "{}", notice.description()),
        }
    }
}

/// Forwards notices to a channel for another task to display
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: UnboundedSender<Notice>,
}

impl ChannelNotifier {
    pub fn new() -> (Self, UnboundedReceiver<Notice>) {
        let (tx, rx) = unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, notice: Notice) {
        // Nobody listening means nobody to show it to.
        let _ = self.tx.send(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SubmissionOutcome;

    #[tokio::test]
    async fn test_channel_delivers_in_order() {
        let (notifier, mut rx) = ChannelNotifier::new();
        notifier.notify(Notice::LocationRequired);
        notifier.notify(Notice::Submission(SubmissionOutcome::Sent));

        assert_eq!(rx.recv().await, Some(Notice::LocationRequired));
        assert_eq!(rx.recv().await, Some(Notice::Submission(SubmissionOutcome::Sent)));
    }

    #[test]
    fn test_closed_channel_is_ignored() {
        let (notifier, rx) = ChannelNotifier::new();
        drop(rx);
        notifier.notify(Notice::LocationRequired);
        LogNotifier.notify(Notice::LocationRequired);
    }
}

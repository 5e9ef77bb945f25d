pub type NotificationSender = async_channel::Sender<Notification>;
pub type NotificationReceiver = async_channel::Receiver<Notification>;

/// Cross-widget notifications the container emits towards the host shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    AddFlashMsg { msg: String, kind: FlashKind },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Info,
    Warning,
    Danger,
}

/// Commands other widgets can address to the container. The recognized
/// set is currently empty; new commands are added as tagged variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {}

/// Notification sink injected into the container by the host.
pub trait Dispatch {
    fn dispatch(&self, notification: Notification);
}

/// Channel-backed dispatcher for hosts that drain notifications from an
/// event loop.
#[derive(Debug, Clone)]
pub struct ChannelDispatch {
    sender: NotificationSender,
}

impl ChannelDispatch {
    pub fn unbounded() -> (Self, NotificationReceiver) {
        let (sender, receiver) = async_channel::unbounded();

        (Self { sender }, receiver)
    }
}

impl Dispatch for ChannelDispatch {
    fn dispatch(&self, notification: Notification) {
        if let Err(error) = self.sender.send_blocking(notification) {
            log::error!("Failed to dispatch notification: {error}");
        }
    }
}

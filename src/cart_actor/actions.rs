use crate::notify::Notification;

/// The three cart mutations.
///
/// Each one maps its failures to a single user-facing message, except
/// out-of-stock which is reported the same way by every mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOperation {
    Add,
    Remove,
    Update,
}

impl CartOperation {
    pub fn failure_notification(self) -> Notification {
        match self {
            CartOperation::Add => Notification::AddFailed,
            CartOperation::Remove => Notification::RemoveFailed,
            CartOperation::Update => Notification::UpdateFailed,
        }
    }
}

use payloads::{ChannelId, LoggingSettings};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoggingForm {
    pub action_log_channel_id: Option<ChannelId>,
    pub message_log_channel_id: Option<ChannelId>,
}

impl LoggingForm {
    pub fn from_saved(saved: Option<&LoggingSettings>) -> Self {
        let settings = saved.cloned().unwrap_or_default();
        Self {
            action_log_channel_id: settings.action_log_channel_id,
            message_log_channel_id: settings.message_log_channel_id,
        }
    }

    pub fn to_settings(&self) -> LoggingSettings {
        LoggingSettings {
            action_log_channel_id: self.action_log_channel_id.clone(),
            message_log_channel_id: self.message_log_channel_id.clone(),
        }
    }
}

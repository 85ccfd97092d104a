use tagtrace_engine::MessageLog;
use tagtrace_types::MessageLevel;

use super::view_models::{MessageLineViewModel, ScreenViewModel, TabViewModel};

/// Build the full screen view model from the domain state.
pub fn build_screen(
    log: &MessageLog,
    source: &str,
    follow: bool,
    notice: Option<String>,
) -> ScreenViewModel {
    let tabs = log
        .tabs()
        .iter()
        .map(|tab| TabViewModel {
            tag: tab.tag().to_string(),
            count: tab.len(),
            dropped: tab.dropped(),
            worst_level: tab.worst_level(),
            lines: tab
                .messages()
                .map(|msg| MessageLineViewModel {
                    time: msg.timestamp.format("%H:%M:%S").to_string(),
                    level: msg.level,
                    text: msg.text.clone(),
                })
                .collect(),
        })
        .collect();

    ScreenViewModel {
        source: source.to_string(),
        follow,
        tabs,
        total_messages: log.total_count(),
        level_totals: MessageLevel::ALL
            .into_iter()
            .map(|level| (level, log.count_for(level)))
            .collect(),
        notice,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagtrace_types::LogMessage;

    #[test]
    fn screen_mirrors_log_state() {
        let mut log = MessageLog::new(0);
        log.append(LogMessage::new("a", Some("One".to_string()), MessageLevel::Info));
        log.append(LogMessage::new("b", Some("Two".to_string()), MessageLevel::Critical));
        log.append(LogMessage::new("c", Some("One".to_string()), MessageLevel::Warning));

        let screen = build_screen(&log, "app.log", true, None);

        assert_eq!(screen.source, "app.log");
        assert!(screen.follow);
        assert_eq!(screen.total_messages, 3);
        assert_eq!(screen.tabs.len(), 2);
        assert_eq!(screen.tabs[0].tag, "One");
        assert_eq!(screen.tabs[0].count, 2);
        assert_eq!(screen.tabs[0].worst_level, Some(MessageLevel::Warning));
        assert_eq!(screen.tabs[1].lines[0].text, "b");

        let critical_total = screen
            .level_totals
            .iter()
            .find(|(level, _)| *level == MessageLevel::Critical)
            .map(|(_, count)| *count);
        assert_eq!(critical_total, Some(1));
    }
}

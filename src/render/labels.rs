// UI labels
// Localized strings for step rendering

use serde::{Deserialize, Serialize};

use crate::sorting::EventKind;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    English,
    Korean,
}

/// Label set for one locale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Labels {
    pub title: &'static str,
    pub initial_array: &'static str,
    pub step: &'static str,
    pub pivot: &'static str,
    pub partition: &'static str,
    pub merge: &'static str,
    pub previous: &'static str,
    pub next: &'static str,
    pub reset: &'static str,
    pub quit: &'static str,
    pub unknown_command: &'static str,
}

const ENGLISH: Labels = Labels {
    title: "Quicksort Visualization",
    initial_array: "Initial array",
    step: "Step",
    pivot: "Pivot",
    partition: "Partition",
    merge: "Merge",
    previous: "Previous step",
    next: "Next step",
    reset: "Reset",
    quit: "Quit",
    unknown_command: "Unknown command",
};

const KOREAN: Labels = Labels {
    title: "퀵정렬 과정 시각화",
    initial_array: "초기 배열",
    step: "단계",
    pivot: "피벗",
    partition: "분할",
    merge: "병합",
    previous: "이전 단계",
    next: "다음 단계",
    reset: "재설정",
    quit: "종료",
    unknown_command: "알 수 없는 명령",
};

impl Locale {
    pub fn from_string(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "ko" | "kr" | "korean" => Locale::Korean,
            _ => Locale::English,
        }
    }

    pub fn labels(&self) -> &'static Labels {
        match self {
            Locale::English => &ENGLISH,
            Locale::Korean => &KOREAN,
        }
    }
}

impl Labels {
    pub fn kind(&self, kind: EventKind) -> &'static str {
        match kind {
            EventKind::Partition => self.partition,
            EventKind::Merge => self.merge,
        }
    }

    /// Key hints for the console loop
    pub fn prompt(&self) -> String {
        format!(
            "[n] {}  [p] {}  [r] {}  [q] {}",
            self.next, self.previous, self.reset, self.quit
        )
    }

    pub fn unknown(&self, command: &str) -> String {
        format!("{} '{}'", self.unknown_command, command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_from_string() {
        assert_eq!(Locale::from_string("ko"), Locale::Korean);
        assert_eq!(Locale::from_string("Korean"), Locale::Korean);
        assert_eq!(Locale::from_string("en"), Locale::English);
        assert_eq!(Locale::from_string(""), Locale::English);
    }

    #[test]
    fn test_kind_labels() {
        let en = Locale::English.labels();
        assert_eq!(en.kind(EventKind::Partition), "Partition");
        assert_eq!(en.kind(EventKind::Merge), "Merge");

        let ko = Locale::Korean.labels();
        assert_eq!(ko.kind(EventKind::Partition), "분할");
        assert_eq!(ko.kind(EventKind::Merge), "병합");
    }

    #[test]
    fn test_prompt_follows_locale() {
        assert_eq!(
            Locale::English.labels().prompt(),
            "[n] Next step  [p] Previous step  [r] Reset  [q] Quit"
        );
        assert_eq!(
            Locale::Korean.labels().prompt(),
            "[n] 다음 단계  [p] 이전 단계  [r] 재설정  [q] 종료"
        );
    }

    #[test]
    fn test_unknown_command_message() {
        assert_eq!(
            Locale::English.labels().unknown("x"),
            "Unknown command 'x'"
        );
        assert_eq!(Locale::Korean.labels().unknown("x"), "알 수 없는 명령 'x'");
    }
}

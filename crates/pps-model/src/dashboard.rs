//! Dashboard display data.
//!
//! All types here are read-only summaries supplied by the content catalog.
//! The only computation is label formatting.

use serde::{Deserialize, Serialize};

/// Learning module status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModuleStatus {
    /// Every lesson finished
    Completed,
    /// Started but not finished
    InProgress,
    /// Not yet available
    Locked,
}

impl ModuleStatus {
    /// Korean display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Completed => "완료",
            Self::InProgress => "진행중",
            Self::Locked => "잠김",
        }
    }
}

/// A learning module as shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleSummary {
    /// Module identifier.
    pub id: u32,
    /// Module title.
    pub title: String,
    /// Completion percent (0-100).
    pub progress: u8,
    /// Module status.
    pub status: ModuleStatus,
    /// Lesson titles in order.
    #[serde(default)]
    pub lessons: Vec<String>,
}

impl ModuleSummary {
    /// Progress as a fraction in `0.0..=1.0`.
    pub fn progress_fraction(&self) -> f32 {
        f32::from(self.progress.min(100)) / 100.0
    }

    /// Progress label, e.g. `"75%"`.
    pub fn progress_label(&self) -> String {
        format!("{}%", self.progress)
    }
}

/// Aggregate progress figures shown in the stat cards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LearningProgress {
    /// Overall completion percent.
    pub overall_percent: u8,
    /// Title of the module currently being studied.
    pub current_module: String,
    /// Consecutive study days.
    pub streak_days: u32,
    /// Total study time in minutes.
    pub total_minutes: u32,
    /// Lessons completed so far.
    pub completed_lessons: u32,
    /// Lessons available in total.
    pub total_lessons: u32,
}

impl LearningProgress {
    /// Overall percent label, e.g. `"45%"`.
    pub fn overall_label(&self) -> String {
        format!("{}%", self.overall_percent)
    }

    /// Streak label in days, e.g. `"7일"`.
    pub fn streak_label(&self) -> String {
        format!("{}일", self.streak_days)
    }

    /// Total study time, e.g. `"14h 30m"`.
    pub fn total_time_label(&self) -> String {
        let hours = self.total_minutes / 60;
        let minutes = self.total_minutes % 60;
        match (hours, minutes) {
            (0, m) => format!("{m}m"),
            (h, 0) => format!("{h}h"),
            (h, m) => format!("{h}h {m}m"),
        }
    }

    /// Lesson counter, e.g. `"12/24"`.
    pub fn lessons_label(&self) -> String {
        format!("{}/{}", self.completed_lessons, self.total_lessons)
    }
}

/// One entry of the recent-activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentActivity {
    /// Relative date label as authored (e.g. "오늘").
    pub date_label: String,
    /// What was done.
    pub activity: String,
    /// Score achieved.
    pub score: u32,
}

/// Everything the dashboard renders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardContent {
    /// Stat card figures.
    pub progress: LearningProgress,
    /// Learning modules in display order.
    pub modules: Vec<ModuleSummary>,
    /// Recent activity, newest first.
    pub recent_activities: Vec<RecentActivity>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn progress(total_minutes: u32) -> LearningProgress {
        LearningProgress {
            total_minutes,
            ..Default::default()
        }
    }

    #[test]
    fn test_total_time_label() {
        assert_eq!(progress(870).total_time_label(), "14h 30m");
        assert_eq!(progress(45).total_time_label(), "45m");
        assert_eq!(progress(120).total_time_label(), "2h");
        assert_eq!(progress(0).total_time_label(), "0m");
    }

    #[test]
    fn test_labels() {
        let p = LearningProgress {
            overall_percent: 45,
            streak_days: 7,
            completed_lessons: 12,
            total_lessons: 24,
            ..Default::default()
        };
        assert_eq!(p.overall_label(), "45%");
        assert_eq!(p.streak_label(), "7일");
        assert_eq!(p.lessons_label(), "12/24");
    }

    #[test]
    fn test_module_status_kebab_case() {
        let status: ModuleStatus = serde_json::from_str("\"in-progress\"").unwrap();
        assert_eq!(status, ModuleStatus::InProgress);
        assert_eq!(
            serde_json::to_string(&ModuleStatus::Completed).unwrap(),
            "\"completed\""
        );
    }

    #[test]
    fn test_progress_fraction() {
        let module = ModuleSummary {
            id: 2,
            title: "블로그 글쓰기 기초".to_string(),
            progress: 75,
            status: ModuleStatus::InProgress,
            lessons: vec![],
        };
        assert!((module.progress_fraction() - 0.75).abs() < f32::EPSILON);
        assert_eq!(module.progress_label(), "75%");
    }
}

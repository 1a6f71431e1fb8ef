// Planner template model
// Closed set of page templates offered in the day view

/// The planner page templates a day can host.
///
/// A closed enum rather than a string-keyed registry: rendering and
/// behavior dispatch on this via `match`, resolved at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    YearlyReflection,
    Memories,
    HabitTracker,
    MoodTracker,
}

impl TemplateKind {
    /// All templates in drawer order.
    pub const ALL: [TemplateKind; 4] = [
        TemplateKind::YearlyReflection,
        TemplateKind::Memories,
        TemplateKind::HabitTracker,
        TemplateKind::MoodTracker,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            TemplateKind::YearlyReflection => "Yearly Reflection",
            TemplateKind::Memories => "Memories Page",
            TemplateKind::HabitTracker => "Habit Tracker",
            TemplateKind::MoodTracker => "Mood Tracker",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TemplateKind::YearlyReflection => {
                "Reflect on your year and set intentions for the next"
            }
            TemplateKind::Memories => "Create a photo collection of your memories",
            TemplateKind::HabitTracker => "Track your daily and weekly habits",
            TemplateKind::MoodTracker => "Record how each day felt",
        }
    }
}

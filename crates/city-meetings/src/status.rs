use chrono::NaiveDateTime;

use crate::models::MeetingStatus;

/// What a status rule gets to look at
#[derive(Debug, Clone, Copy)]
pub struct StatusInput<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub notes: &'a str,
    pub start: Option<NaiveDateTime>,
}

/// A site-specific rule consulted before the generic one.
/// Returning `None` passes the decision on.
pub type StatusOverride = fn(&StatusInput<'_>, NaiveDateTime) -> Option<MeetingStatus>;

#[derive(Clone)]
pub struct StatusResolver {
    overrides: Vec<StatusOverride>,
}

impl std::fmt::Debug for StatusResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatusResolver")
            .field("overrides", &self.overrides.len())
            .finish()
    }
}

impl StatusResolver {
    pub fn new(overrides: Vec<StatusOverride>) -> Self {
        Self { overrides }
    }

    /// Cancellation text wins; a rescheduled meeting that already happened counts as passed
    pub fn stevenson() -> Self {
        Self::new(vec![cancelled_in_title as StatusOverride, rescheduled_in_past])
    }

    pub fn resolve(&self, input: &StatusInput<'_>, now: NaiveDateTime) -> MeetingStatus {
        self.overrides
            .iter()
            .find_map(|rule| rule(input, now))
            .unwrap_or_else(|| generic_status(input, now))
    }
}

impl Default for StatusResolver {
    fn default() -> Self {
        Self::stevenson()
    }
}

fn title_and_notes(input: &StatusInput<'_>) -> String {
    format!("{} {}", input.title, input.notes).to_lowercase()
}

pub fn cancelled_in_title(input: &StatusInput<'_>, _now: NaiveDateTime) -> Option<MeetingStatus> {
    title_and_notes(input)
        .contains("cancelled")
        .then_some(MeetingStatus::Cancelled)
}

pub fn rescheduled_in_past(input: &StatusInput<'_>, now: NaiveDateTime) -> Option<MeetingStatus> {
    let start = input.start?;
    (title_and_notes(input).contains("rescheduled") && start < now)
        .then_some(MeetingStatus::Passed)
}

/// Status rule shared by every site.
///
/// A meeting without a start time is tentative: there is not enough
/// information to call it passed.
pub fn generic_status(input: &StatusInput<'_>, now: NaiveDateTime) -> MeetingStatus {
    let text = format!("{} {} {}", input.title, input.description, input.notes).to_lowercase();

    if ["cancel", "rescheduled", "postpone"]
        .iter()
        .any(|word| text.contains(word))
    {
        return MeetingStatus::Cancelled;
    }

    match input.start {
        Some(start) if start < now => MeetingStatus::Passed,
        _ => MeetingStatus::Tentative,
    }
}

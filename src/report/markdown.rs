use super::aggregate::{format_contributors, TimeRange, ALL_TIME_START_YEAR};
use crate::enrich::EnrichedUsers;
use crate::model::Repository;
use chrono::{DateTime, Datelike, SecondsFormat, Utc};
use itertools::Itertools;
use markdown_builder::{Link, Markdown};

pub struct ContributorReport<'a> {
    users: &'a EnrichedUsers,
    repositories: &'a [Repository],
    generated_at: DateTime<Utc>,
}

impl<'a> ContributorReport<'a> {
    pub fn new(
        users: &'a EnrichedUsers,
        repositories: &'a [Repository],
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            users,
            repositories,
            generated_at,
        }
    }

    pub fn render(&self) -> String {
        let mut doc = Markdown::new();

        doc.paragraph(format!(
            "Last generated at {}.",
            self.generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
        ));
        let sources = self
            .repositories
            .iter()
            .map(|repo| Link::from(repo.html_url(), &repo.name, false, true))
            .join(", ");
        doc.block(format!("Contributions from: {sources}."));

        doc.header1("All-Time External Contributors");
        if let Some(range) = TimeRange::all_time(self.generated_at) {
            doc.add_range(self.users, &range);
        }

        doc.header1("By Year");
        for year in (ALL_TIME_START_YEAR..=self.generated_at.year()).rev() {
            let Some(range) = TimeRange::year(year) else {
                continue;
            };
            doc.header2(year.to_string());
            doc.add_range(self.users, &range);
        }

        doc.render()
    }
}

trait MarkdownExt {
    /// Adds `text` verbatim, without the paragraph word wrapping.
    fn block(&mut self, text: String);
    fn add_range(&mut self, users: &EnrichedUsers, range: &TimeRange);
}

impl MarkdownExt for Markdown {
    fn block(&mut self, text: String) {
        self.elements.push(Box::new(format!("{text}\n")));
    }

    fn add_range(&mut self, users: &EnrichedUsers, range: &TimeRange) {
        let (summary, labels) = format_contributors(users.values(), range);
        self.paragraph(summary);
        if !labels.is_empty() {
            self.block(labels);
        }
    }
}

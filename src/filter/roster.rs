use std::collections::HashSet;

const COMMENT_MARKER: char = '#';

/// Emails and display names extracted from a roster document.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Roster {
    pub emails: HashSet<String>,
    pub names: HashSet<String>,
}

/// Parses a roster where each entry reads `Name <email> [<email> ...]`.
///
/// Only lines containing `required` are considered and comment lines are
/// skipped. Every `<email>` token of a line is collected, while the name is
/// the text preceding the first one.
pub fn parse_roster(contents: &str, required: &str) -> Roster {
    let mut roster = Roster::default();
    for line in contents.lines() {
        if line.starts_with(COMMENT_MARKER) || !line.contains(required) {
            continue;
        }
        let fields = line.trim_end().split(' ').collect::<Vec<_>>();
        let mut seen_email = false;
        for (index, field) in fields.iter().enumerate() {
            let Some(email) = email_token(field) else {
                continue;
            };
            if !seen_email {
                let name = fields[..index].join(" ");
                let name = name.trim();
                if !name.is_empty() {
                    roster.names.insert(name.to_string());
                }
                seen_email = true;
            }
            roster.emails.insert(email.to_string());
        }
    }
    roster
}

fn email_token(field: &str) -> Option<&str> {
    field.strip_prefix('<')?.strip_suffix('>')
}

/// Parses a comma separated list of logins.
pub fn parse_blocklist(list: &str) -> HashSet<String> {
    list.split(',')
        .map(str::trim)
        .filter(|login| !login.is_empty())
        .map(String::from)
        .collect()
}

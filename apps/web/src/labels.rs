use serde::Deserialize;

/// Fixed endpoint serving the course repository's issue labels.
pub const LABELS_URL: &str = "https://api.github.com/repos/edquant/edh7916/labels";

/// One label record from the repository API. Fields beyond name and color
/// are ignored during deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct Label {
    pub name: String,
    pub color: String,
}

/// Display attributes for one rendered badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub name: String,
    /// CSS color, `#` plus the record's six hex digits.
    pub background: String,
    pub text_color: &'static str,
}

/// Labels whose badges render with white text. Everything else gets black.
const WHITE_TEXT_NAMES: [&str; 2] = ["Bug", "Suggestion"];

pub fn text_color(name: &str) -> &'static str {
    if WHITE_TEXT_NAMES.contains(&name) {
        "white"
    } else {
        "black"
    }
}

pub fn badge(label: &Label) -> Badge {
    Badge {
        name: label.name.clone(),
        background: format!("#{}", label.color),
        text_color: text_color(&label.name),
    }
}

/// One badge per record, in record order.
pub fn badges(labels: &[Label]) -> Vec<Badge> {
    labels.iter().map(badge).collect()
}

#[cfg(test)]
mod tests {
    use super::{badge, badges, text_color, Label};

    fn label(name: &str, color: &str) -> Label {
        Label {
            name: name.to_string(),
            color: color.to_string(),
        }
    }

    #[test]
    fn bug_and_suggestion_get_white_text() {
        assert_eq!(text_color("Bug"), "white");
        assert_eq!(text_color("Suggestion"), "white");
    }

    #[test]
    fn other_names_get_black_text() {
        assert_eq!(text_color("Docs"), "black");
        assert_eq!(text_color("bug"), "black");
        assert_eq!(text_color(""), "black");
    }

    #[test]
    fn badge_prefixes_color_with_hash() {
        let badge = badge(&label("Docs", "0075ca"));
        assert_eq!(badge.background, "#0075ca");
        assert_eq!(badge.text_color, "black");
        assert_eq!(badge.name, "Docs");
    }

    #[test]
    fn badges_preserve_record_order_and_count() {
        let records = [label("Bug", "d73a4a"), label("Docs", "0075ca")];
        let badges = badges(&records);

        assert_eq!(badges.len(), 2);
        assert_eq!(badges[0].name, "Bug");
        assert_eq!(badges[0].background, "#d73a4a");
        assert_eq!(badges[0].text_color, "white");
        assert_eq!(badges[1].name, "Docs");
        assert_eq!(badges[1].background, "#0075ca");
        assert_eq!(badges[1].text_color, "black");
    }

    #[test]
    fn extra_response_fields_are_ignored() {
        let parsed: Vec<Label> = serde_json::from_str(
            r#"[{"id": 1, "name": "Bug", "color": "d73a4a", "default": true}]"#,
        )
        .unwrap();

        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].name, "Bug");
        assert_eq!(parsed[0].color, "d73a4a");
    }
}

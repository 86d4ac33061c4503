use serde::{Deserialize, Serialize};

/// Payload of a `text` block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextContent {
    pub text: String,
    pub format: TextFormat,
    #[serde(default)]
    pub style: TextStyle,
}

/// How the text should be interpreted.
///
/// `Plain` text is always shown literally. `Markdown` and `Html` go through
/// the sanitizing renderer in [`crate::markup`] before display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextFormat {
    Plain,
    Markdown,
    Html,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextStyle {
    #[serde(default)]
    pub alignment: Alignment,
    #[serde(default)]
    pub size: TextSize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

impl Alignment {
    pub fn as_css(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
            Alignment::Justify => "justify",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextSize {
    #[serde(rename = "sm")]
    Sm,
    #[default]
    #[serde(rename = "base")]
    Base,
    #[serde(rename = "lg")]
    Lg,
    #[serde(rename = "xl")]
    Xl,
    #[serde(rename = "2xl")]
    Xxl,
}

impl TextSize {
    pub fn as_css(&self) -> &'static str {
        match self {
            TextSize::Sm => "sm",
            TextSize::Base => "base",
            TextSize::Lg => "lg",
            TextSize::Xl => "xl",
            TextSize::Xxl => "2xl",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_names_match_the_wire_values() {
        assert_eq!(
            serde_json::from_str::<TextFormat>("\"markdown\"").unwrap(),
            TextFormat::Markdown
        );
        assert_eq!(
            serde_json::to_string(&TextFormat::Plain).unwrap(),
            "\"plain\""
        );
    }

    #[test]
    fn size_uses_the_2xl_spelling() {
        assert_eq!(
            serde_json::from_str::<TextSize>("\"2xl\"").unwrap(),
            TextSize::Xxl
        );
        assert_eq!(serde_json::to_string(&TextSize::Xxl).unwrap(), "\"2xl\"");
        assert_eq!(TextSize::Xxl.as_css(), "2xl");
    }
}

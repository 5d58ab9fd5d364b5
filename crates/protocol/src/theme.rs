use serde::{Deserialize, Serialize};

/// Semantic color tokens resolved by the backend's active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeToken {
    // Gantt bars
    BarGreen,
    BarPurple,
    BarOlive,
    BarBlue,
    /// The visual extension of a bar past its logical end.
    BarExtension,
    BarLabel,

    // Numeric series, cycled per series
    Series0,
    Series1,
    Series2,
    Series3,
    Series4,
    Series5,

    // Event track
    EventStem,
    EventMarker,
    EventText,

    // Axes
    AxisLine,
    GridLine,
    TickText,

    PanelBackground,
    PanelBorder,
    TitleText,
    LegendText,
    Background,
}

/// Bar colors cycled by the gantt view.
pub const BAR_PALETTE: [ThemeToken; 4] = [
    ThemeToken::BarGreen,
    ThemeToken::BarPurple,
    ThemeToken::BarOlive,
    ThemeToken::BarBlue,
];

/// Light or dark palette selection for backends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl ThemeToken {
    /// Series color for the `index`-th series of a panel.
    pub fn series(index: usize) -> Self {
        match index % 6 {
            0 => Self::Series0,
            1 => Self::Series1,
            2 => Self::Series2,
            3 => Self::Series3,
            4 => Self::Series4,
            _ => Self::Series5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_tokens_cycle() {
        assert_eq!(ThemeToken::series(0), ThemeToken::Series0);
        assert_eq!(ThemeToken::series(5), ThemeToken::Series5);
        assert_eq!(ThemeToken::series(6), ThemeToken::Series0);
    }

    #[test]
    fn theme_parses_lowercase() {
        let theme: Theme = serde_json::from_str("\"dark\"").unwrap_or_default();
        assert_eq!(theme, Theme::Dark);
    }
}

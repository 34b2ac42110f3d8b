use std::collections::HashMap;

/// Fallback used when neither the feed nor the overrides know a line.
pub const FALLBACK_LINE_COLOR: &str = "0CC0DF";

/// Display colors for lines, keyed by route short name.
///
/// Colors are 6 hex digits without the leading `#`.
#[derive(Debug, Clone)]
pub struct LinePalette {
    overrides: HashMap<String, String>,
    fallback: String,
}

impl Default for LinePalette {
    fn default() -> Self {
        Self::new()
            .with_line("1", "654897")
            .with_line("2", "F07E31")
            .with_line("3", "E7343F")
            .with_line("4", "00995A")
            .with_line("5", "F0B324")
            .with_line("6", "F89BCF")
            .with_line("7", "AD8271")
            .with_line("8", "7ED957")
            .with_line("9", "0CC0DF")
    }
}

impl LinePalette {
    /// An empty palette that only knows the fallback color.
    pub fn new() -> Self {
        Self {
            overrides: HashMap::new(),
            fallback: FALLBACK_LINE_COLOR.into(),
        }
    }

    pub fn with_line(mut self, short_name: &str, color: &str) -> Self {
        self.overrides.insert(short_name.into(), color.into());
        self
    }

    pub fn with_fallback(mut self, color: &str) -> Self {
        self.fallback = color.into();
        self
    }

    /// The feed color wins when it looks usable. Black is treated as unset
    /// because several feeds export it as a placeholder.
    pub fn color_for<'a>(&'a self, short_name: &str, feed_color: Option<&'a str>) -> &'a str {
        if let Some(color) = feed_color
            && color.len() == 6
            && color != "000000"
        {
            return color;
        }
        self.overrides
            .get(short_name)
            .map(String::as_str)
            .unwrap_or(&self.fallback)
    }
}

use owo_colors::Style;
use std::sync::OnceLock;

static THEME: OnceLock<Theme> = OnceLock::new();

/// One style per kind of menu message.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Menu title and section rules
    pub heading: Style,
    /// Create/update/delete went through
    pub done: Style,
    /// Store rejected the request
    pub rejected: Style,
    /// Unknown id or menu choice
    pub notice: Style,
    /// Left-hand side of `label: value` lines
    pub label: Style,
    /// Placeholder text such as an empty listing
    pub empty: Style,
}

impl Theme {
    pub fn detect() -> Self {
        let term = console::Term::stdout();
        Self::for_terminal(term.is_term() && console::colors_enabled())
    }

    pub fn for_terminal(colored: bool) -> Self {
        if !colored {
            return Self {
                heading: Style::new(),
                done: Style::new(),
                rejected: Style::new(),
                notice: Style::new(),
                label: Style::new(),
                empty: Style::new(),
            };
        }

        Self {
            heading: Style::new().cyan().bold(),
            done: Style::new().green().bold(),
            rejected: Style::new().red().bold(),
            notice: Style::new().yellow(),
            label: Style::new().dimmed(),
            empty: Style::new().bright_black().italic(),
        }
    }
}

pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::detect)
}

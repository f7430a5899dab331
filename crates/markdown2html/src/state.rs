use crate::classify::LineKind;
use crate::HtmlFragments;

/// The block container currently open, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConversionState {
    #[default]
    Idle,
    UnorderedList,
    OrderedList,
    Paragraph,
}

impl ConversionState {
    fn closing_tag(self) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::UnorderedList => Some("</ul>"),
            Self::OrderedList => Some("</ol>"),
            Self::Paragraph => Some("</p>"),
        }
    }
}

pub const BREAK_MARKER: &str = "<br/>";

#[derive(Default)]
pub struct Emitter {
    state: ConversionState,
    fragments: HtmlFragments,
}

impl Emitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ConversionState {
        self.state
    }

    pub fn push(&mut self, kind: LineKind<'_>) {
        match kind {
            LineKind::Heading { level, text } => {
                self.close();
                self.fragments.push(format!("<h{level}>{text}</h{level}>"));
            }
            LineKind::UnorderedItem(item) => {
                self.push_item(ConversionState::UnorderedList, "<ul>", item);
            }
            LineKind::OrderedItem(item) => {
                self.push_item(ConversionState::OrderedList, "<ol>", item);
            }
            LineKind::Blank => self.close(),
            LineKind::Text(text) => {
                if self.state == ConversionState::Paragraph {
                    self.fragments.push(BREAK_MARKER.to_string());
                } else {
                    self.enter(ConversionState::Paragraph, "<p>");
                }
                self.fragments.push(text.to_string());
            }
        }
    }

    /// Closes whatever container is still open and hands back the fragments.
    pub fn finish(mut self) -> HtmlFragments {
        self.close();
        self.fragments
    }

    fn push_item(&mut self, list: ConversionState, open_tag: &str, item: &str) {
        if self.state != list {
            self.enter(list, open_tag);
        }
        self.fragments.push(format!("<li>{item}</li>"));
    }

    fn enter(&mut self, next: ConversionState, open_tag: &str) {
        self.close();
        self.fragments.push(open_tag.to_string());
        self.state = next;
    }

    fn close(&mut self) {
        if let Some(tag) = self.state.closing_tag() {
            self.fragments.push(tag.to_string());
        }
        self.state = ConversionState::Idle;
    }
}

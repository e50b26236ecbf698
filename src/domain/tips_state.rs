use super::content::ContentSlot;

/// A named link to a text asset, resolved through an explicit file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TipLink {
    pub name: String,
    pub file_name: String,
}

impl TipLink {
    pub fn new(name: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file_name: file_name.into(),
        }
    }
}

pub fn default_tip_links() -> Vec<TipLink> {
    vec![
        TipLink::new("Water Conservation", "water_conservation.txt"),
        TipLink::new("Electricity Conservation", "electricity_conservation.txt"),
        TipLink::new("Waste Management", "waste_management.txt"),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TipsState {
    links: Vec<TipLink>,
    selected_index: Option<usize>,
    content: ContentSlot,
}

impl Default for TipsState {
    fn default() -> Self {
        Self::new(default_tip_links())
    }
}

impl TipsState {
    pub fn new(links: Vec<TipLink>) -> Self {
        let selected_index = if links.is_empty() { None } else { Some(0) };
        Self {
            links,
            selected_index,
            content: ContentSlot::default(),
        }
    }

    pub fn links(&self) -> &[TipLink] {
        &self.links
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn selected_link(&self) -> Option<&TipLink> {
        self.selected_index.and_then(|index| self.links.get(index))
    }

    pub fn content(&self) -> &ContentSlot {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut ContentSlot {
        &mut self.content
    }

    pub fn select_next(&mut self) {
        let Some(index) = self.selected_index else {
            return;
        };

        let last_index = self.links.len().saturating_sub(1);
        self.selected_index = Some(std::cmp::min(index.saturating_add(1), last_index));
    }

    pub fn select_previous(&mut self) {
        let Some(index) = self.selected_index else {
            return;
        };

        self.selected_index = Some(index.saturating_sub(1));
    }
}

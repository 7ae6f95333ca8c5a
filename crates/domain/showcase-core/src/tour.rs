/// The scripted walkthrough steps, in their fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepId {
    Download,
    Versions,
    Store,
    Branding,
    SelectApps,
    CustomApp,
    Revenue,
}

impl StepId {
    pub const ALL: [StepId; 7] = [
        StepId::Download,
        StepId::Versions,
        StepId::Store,
        StepId::Branding,
        StepId::SelectApps,
        StepId::CustomApp,
        StepId::Revenue,
    ];

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<StepId> {
        Self::ALL.get(index).copied()
    }

    pub fn title(self) -> &'static str {
        match self {
            StepId::Download => "Download Apps",
            StepId::Versions => "Manage Versions",
            StepId::Store => "Create Store",
            StepId::Branding => "Brand Your Store",
            StepId::SelectApps => "Select Apps",
            StepId::CustomApp => "Create Custom App",
            StepId::Revenue => "Revenue Potential",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            StepId::Download => "Start by downloading sample apps for your marketplace.",
            StepId::Versions => "Keep your apps up to date with version management.",
            StepId::Store => "Set up your branded marketplace store.",
            StepId::Branding => "Customize the look and feel of your marketplace.",
            StepId::SelectApps => "Choose which apps to offer in your marketplace.",
            StepId::CustomApp => "Design a unique app for your marketplace.",
            StepId::Revenue => "See the potential earnings from your marketplace.",
        }
    }
}

/// Position in the walkthrough. Progression is strictly forward; jumping is
/// only allowed back to steps that were already reached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TourCursor {
    index: usize,
}

impl TourCursor {
    pub fn new() -> Self {
        Self { index: 0 }
    }

    pub fn index(self) -> usize {
        self.index
    }

    pub fn current(self) -> StepId {
        StepId::from_index(self.index).unwrap_or(StepId::Download)
    }

    pub fn is_terminal(self) -> bool {
        self.index == StepId::ALL.len() - 1
    }

    /// Moves to the next step. At the terminal step this is a silent no-op.
    pub fn advance(&mut self) -> bool {
        if self.is_terminal() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Jumps to a previously reached step. Requests ahead of the current
    /// position are ignored.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index > self.index {
            return false;
        }
        self.index = index;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_order_is_stable() {
        assert_eq!(StepId::Download.index(), 0);
        assert_eq!(StepId::Revenue.index(), StepId::ALL.len() - 1);
        assert_eq!(StepId::from_index(1), Some(StepId::Versions));
        assert_eq!(StepId::from_index(99), None);
    }
}

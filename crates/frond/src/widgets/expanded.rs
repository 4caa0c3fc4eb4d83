use crate::widget::Widget;

/// Marks its child as flexible inside a row or column. The child receives a
/// share of the leftover main-axis space proportional to the weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expanded {
    /// Flex weight, never zero.
    weight: u32,
}

impl Expanded {
    /// A flex wrapper with the given weight. Zero is treated as one.
    pub fn new(weight: u32) -> Self {
        Self {
            weight: weight.max(1),
        }
    }

    /// The flex weight.
    pub fn weight(&self) -> u32 {
        self.weight
    }
}

impl Default for Expanded {
    fn default() -> Self {
        Self::new(1)
    }
}

impl Widget for Expanded {
    fn flex(&self) -> Option<u32> {
        Some(self.weight)
    }
}

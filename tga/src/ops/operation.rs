use std::fmt;

use crate::common::{Channel, Result};
use crate::image::Image;
use crate::ops::BlendMode;

/// One step of a transform chain, with its operands already decoded.
#[derive(Debug, Clone)]
pub enum Operation {
    Blend { mode: BlendMode, operand: Image },
    Combine { green: Image, blue: Image },
    Flip,
    Only(Channel),
    Add(Channel, i32),
    Scale(Channel, i32),
}

impl Operation {
    /// Number of operand images the step carries.
    pub fn operand_count(&self) -> usize {
        match self {
            Operation::Blend { .. } => 1,
            Operation::Combine { .. } => 2,
            Operation::Flip | Operation::Only(_) | Operation::Add(..) | Operation::Scale(..) => 0,
        }
    }
}

impl Image {
    pub fn apply(&mut self, operation: &Operation) -> Result<&mut Self> {
        match operation {
            Operation::Blend { mode, operand } => self.blend(operand, *mode),
            Operation::Combine { green, blue } => self.combine(green, blue),
            Operation::Flip => Ok(self.flip()),
            Operation::Only(channel) => Ok(self.only(*channel)),
            Operation::Add(channel, value) => Ok(self.add(*channel, *value)),
            Operation::Scale(channel, value) => Ok(self.scale(*channel, *value)),
        }
    }

    /// Applies `operations` in order, stopping at the first failure.
    pub fn apply_all<'a, I>(&mut self, operations: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = &'a Operation>,
    {
        for operation in operations {
            self.apply(operation)?;
        }

        Ok(self)
    }
}

/// Renders the command-line token for the step, e.g. `onlyred` or `addgreen`.
impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Blend { mode, .. } => write!(f, "{}", mode),
            Operation::Combine { .. } => write!(f, "combine"),
            Operation::Flip => write!(f, "flip"),
            Operation::Only(channel) => write!(f, "only{}", channel),
            Operation::Add(channel, _) => write!(f, "add{}", channel),
            Operation::Scale(channel, _) => write!(f, "scale{}", channel),
        }
    }
}

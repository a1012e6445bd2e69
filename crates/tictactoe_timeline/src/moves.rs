//! Entries for the move-history browser.

use derive_new::new;
use serde::{Deserialize, Serialize};

/// One jump target in the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct MoveEntry {
    /// History index this entry jumps to.
    pub step: usize,
}

impl MoveEntry {
    /// Button label: "Go to game start" for step 0, "Go to move #N" otherwise.
    pub fn label(&self) -> String {
        match self.step {
            0 => "Go to game start".to_string(),
            n => format!("Go to move #{}", n),
        }
    }
}

impl std::fmt::Display for MoveEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

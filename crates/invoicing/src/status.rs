use serde::{Deserialize, Serialize};

use invoicelens_core::Amount;

/// Tolerance band around zero within which a group counts as settled.
pub const SETTLED_TOLERANCE: f64 = 1.0;

/// Payment status derived for an invoice group from its latest pending amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GroupStatus {
    Paid,
    Overpaid,
    Due,
}

impl GroupStatus {
    pub const ALL: [GroupStatus; 3] = [GroupStatus::Paid, GroupStatus::Overpaid, GroupStatus::Due];

    /// Classify a pending amount.
    ///
    /// `[-1.0, 1.0]` is Paid, below that Overpaid, above it Due.
    pub fn classify(pending: Amount) -> Self {
        let pending = pending.value();
        if (-SETTLED_TOLERANCE..=SETTLED_TOLERANCE).contains(&pending) {
            GroupStatus::Paid
        } else if pending < -SETTLED_TOLERANCE {
            GroupStatus::Overpaid
        } else {
            GroupStatus::Due
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GroupStatus::Paid => "Paid",
            GroupStatus::Overpaid => "Overpaid",
            GroupStatus::Due => "Due",
        }
    }

    /// Parse a user-supplied filter token (`"due"`, `" PAID "`, ...).
    ///
    /// Returns `None` for anything that does not name a status.
    pub fn from_token(token: &str) -> Option<Self> {
        let normalized = normalize_token(token);
        Self::ALL.into_iter().find(|s| s.as_str() == normalized)
    }
}

impl core::fmt::Display for GroupStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trim, then uppercase the first character and lowercase the rest.
pub fn normalize_token(token: &str) -> String {
    let mut chars = token.trim().chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

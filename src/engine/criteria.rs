//! Selection criteria and their normalization.

use std::collections::HashSet;

use crate::ranking::PriorityTag;

/// Credit cap applied when the caller supplies none, zero, or a negative
/// value.
pub const DEFAULT_CREDIT_CAP: u32 = 22;

/// Caller preferences for one projection.
///
/// Malformed input is normalized, never rejected: an absent or
/// non-positive credit cap falls back to [`DEFAULT_CREDIT_CAP`], unknown
/// tag tokens are dropped at parse time, and priority codes are trimmed
/// and deduplicated. [`validate`](Self::validate) exists for callers that
/// prefer strictness; the engine itself never calls it.
///
/// # Examples
///
/// ```
/// use u_projection::engine::SelectionCriteria;
/// use u_projection::ranking::PriorityTag;
///
/// let criteria = SelectionCriteria::default()
///     .with_credit_cap(18)
///     .with_tags([PriorityTag::FailedFirst, PriorityTag::LowestLevelFirst])
///     .with_priority_courses(["DCCB-00107"])
///     .with_maximize_credits(true);
///
/// assert_eq!(criteria.effective_credit_cap(), 18);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SelectionCriteria {
    /// Requested credit cap. `None`, zero, and negative all mean "use the
    /// default"; see [`effective_credit_cap`](Self::effective_credit_cap).
    pub credit_cap: Option<i32>,

    /// Ranking tags, in priority order. Empty means level ordering only.
    /// Deserialized as raw tokens through [`PriorityTag::parse`], so the
    /// Spanish wire tags work and unknown tokens are dropped, not rejected.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "tags_from_tokens"))]
    pub tags: Vec<PriorityTag>,

    /// Course codes the student asked to favor. Free-form; blank entries
    /// and surrounding whitespace are cleaned up by
    /// [`priority_set`](Self::priority_set).
    pub priority_courses: Vec<String>,

    /// `true` selects the credit-maximizing optimizer, `false` the greedy
    /// rank-order fill.
    pub maximize_credits: bool,
}

/// Tag-list deserialization mirroring
/// [`with_raw_tags`](SelectionCriteria::with_raw_tags): unrecognized tokens
/// are dropped rather than failing the whole request.
#[cfg(feature = "serde")]
fn tags_from_tokens<'de, D>(deserializer: D) -> Result<Vec<PriorityTag>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let tokens: Vec<String> = serde::Deserialize::deserialize(deserializer)?;
    Ok(tokens
        .iter()
        .filter_map(|token| PriorityTag::parse(token))
        .collect())
}

impl SelectionCriteria {
    /// Sets the credit cap. Non-positive values fall back to the default
    /// at computation time.
    pub fn with_credit_cap(mut self, cap: i32) -> Self {
        self.credit_cap = Some(cap);
        self
    }

    /// Sets the ranking tags in priority order.
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = PriorityTag>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }

    /// Parses raw tag tokens, keeping recognized ones in order.
    ///
    /// Unknown tokens are dropped, not rejected, so criteria built from an
    /// untrusted request never fail here.
    pub fn with_raw_tags<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tags = tokens
            .into_iter()
            .filter_map(|token| PriorityTag::parse(token.as_ref()))
            .collect();
        self
    }

    /// Sets the priority course codes.
    pub fn with_priority_courses<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.priority_courses = codes.into_iter().map(Into::into).collect();
        self
    }

    /// Chooses between maximizing and greedy selection.
    pub fn with_maximize_credits(mut self, maximize: bool) -> Self {
        self.maximize_credits = maximize;
        self
    }

    /// The cap that will actually apply: the requested one when positive,
    /// [`DEFAULT_CREDIT_CAP`] otherwise.
    pub fn effective_credit_cap(&self) -> u32 {
        match self.credit_cap {
            Some(cap) if cap > 0 => cap as u32,
            _ => DEFAULT_CREDIT_CAP,
        }
    }

    /// The cleaned priority set: entries trimmed, blanks dropped,
    /// duplicates collapsed.
    pub fn priority_set(&self) -> HashSet<String> {
        self.priority_courses
            .iter()
            .map(|code| code.trim())
            .filter(|code| !code.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Validates the criteria.
    ///
    /// Flags the inputs normalization would otherwise silently repair.
    /// Strict callers can reject requests up front; the engine never
    /// calls this.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(cap) = self.credit_cap {
            if cap <= 0 {
                return Err(format!("credit_cap must be positive when set, got {cap}"));
            }
        }
        if self.priority_courses.iter().any(|c| c.trim().is_empty()) {
            return Err("priority_courses must not contain blank entries".into());
        }
        Ok(())
    }
}

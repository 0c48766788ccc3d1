//! Conversion between the free-text label field and a tag list
//!
//! Users edit labels as one string such as `"work; vpn; legacy"`. The store keeps
//! them as an ordered list of [`LabelTag`]s. Both directions live here so the
//! validator and the store agree on the rules.

use crate::types::LabelTag;
use crate::utils::text::trim_form;

/// Separator that splits the raw label text
pub const LABEL_DELIMITER: char = ';';

/// Separator used when joining tags back into text
pub const LABEL_JOINER: &str = "; ";

/// Split on `;`, trim each piece and drop the empty ones, preserving order.
pub fn parse_labels(text: &str) -> Vec<LabelTag> {
    text.split(LABEL_DELIMITER)
        .map(trim_form)
        .filter(|piece| !piece.is_empty())
        .map(LabelTag::new)
        .collect()
}

/// Join tag texts with `"; "`.
///
/// Inverse of [`parse_labels`] for tags that contain no `;` and no outer whitespace.
pub fn labels_to_text(labels: &[LabelTag]) -> String {
    labels
        .iter()
        .map(|label| label.text.as_str())
        .collect::<Vec<_>>()
        .join(LABEL_JOINER)
}

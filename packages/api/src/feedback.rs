//! Public customer feedback.

use serde::{Deserialize, Serialize};

/// One public feedback entry from the portal's landing page.
///
/// The portal returns these newest-first. `date_posted` is an opaque
/// preformatted string; clients display it, they do not parse it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Feedback {
    pub author: String,
    /// Star rating, 0 through 5.
    pub rating: u8,
    pub text: String,
    #[serde(rename = "datePosted")]
    pub date_posted: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_field_uses_the_portal_spelling() {
        let json = r#"{
            "author": "ada",
            "rating": 5,
            "text": "package arrived before I ordered it",
            "datePosted": "Mon, 02 Jan 2006 15:04:05 MST"
        }"#;
        let feedback: Feedback = serde_json::from_str(json).unwrap();
        assert_eq!(feedback.author, "ada");
        assert_eq!(feedback.rating, 5);
        assert_eq!(feedback.date_posted, "Mon, 02 Jan 2006 15:04:05 MST");

        let back = serde_json::to_string(&feedback).unwrap();
        assert!(back.contains(r#""datePosted":"#));
        assert!(!back.contains("date_posted"));
    }
}

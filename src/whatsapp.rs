//! WhatsApp outreach links.
//!
//! Link construction is pure and testable on its own; opening the link is a
//! fire-and-forget browser navigation with no feedback path back into the
//! application.

/// Greeting used by the floating chat button.
pub const GREETING: &str = "Hi! I want a Dubai property shortlist.";

/// Build a `wa.me` click-to-chat link with the message URL-encoded.
pub fn wa_link(phone: &str, text: &str) -> String {
    format!("https://wa.me/{}?text={}", phone, urlencoding::encode(text))
}

/// Message body for a contact-form submission.
pub fn contact_message(name: &str, message: &str) -> String {
    format!("Name: {name}\nMessage: {message}")
}

/// Message body for a listing enquiry.
pub fn listing_message(title: &str) -> String {
    format!("Hi, I'm interested in {title}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_message_layout() {
        assert_eq!(
            contact_message("Ali", "Need a villa"),
            "Name: Ali\nMessage: Need a villa"
        );
    }

    #[test]
    fn test_encoded_text_round_trips() {
        let text = contact_message("Ali", "Need a villa");
        let link = wa_link("971500000000", &text);
        let encoded = link.split("?text=").nth(1).unwrap();
        assert_eq!(urlencoding::decode(encoded).unwrap(), text);
    }

    #[test]
    fn test_link_shape() {
        let link = wa_link("971500000000", GREETING);
        assert!(link.starts_with("https://wa.me/971500000000?text="));
        // The query part must carry no raw spaces or newlines.
        let query = link.split("?text=").nth(1).unwrap();
        assert!(!query.contains(' '));
        assert!(!query.contains('\n'));
    }

    #[test]
    fn test_listing_message_interpolates_title() {
        assert_eq!(
            listing_message("Palm Premium Residence"),
            "Hi, I'm interested in Palm Premium Residence"
        );
    }
}

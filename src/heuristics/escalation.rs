use super::intent::contains_any;

/// True when the (lowercased) text mentions a handoff to a human agent
pub fn detect_escalation(text: &str, escalation_words: &[String]) -> bool {
    contains_any(text, escalation_words)
}

/// True when the text contains a success word and the call was not escalated
pub fn detect_success(text: &str, success_words: &[String], escalated: bool) -> bool {
    contains_any(text, success_words) && !escalated
}

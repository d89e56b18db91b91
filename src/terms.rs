//! Terms & Conditions
//!
//! Free-form terms text is stored as paragraphs.

/// Shown in the preview when the quotation carries no terms of its own
pub const DEFAULT_TERMS: &[&str] = &[
    "Scope of Work: The quotation is based on a general understanding of the client's requirements. \
     Features not listed above will be treated as add-ons and charged additionally. \
     Significant changes during development may affect the timeline and cost.",
    "Third-party Services: Paid APIs, subscriptions and hosting are billed separately after discussion.",
    "Timeline: The delivery timeline will be shared once features and design are finalised.",
    "Payment Terms: 30% advance payment before work begins. \
     Payments are non-refundable once a milestone is completed and approved. \
     Delays in client feedback or asset submission may extend the timeline.",
];

/// Split text into paragraphs on one or more blank lines.
///
/// Lines inside a paragraph keep their line breaks; each paragraph is trimmed
/// and empty ones are dropped.
pub fn split_paragraphs(raw: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in raw.lines() {
        if line.trim().is_empty() {
            flush(&mut current, &mut paragraphs);
        } else {
            current.push(line);
        }
    }
    flush(&mut current, &mut paragraphs);
    paragraphs
}

fn flush(current: &mut Vec<&str>, paragraphs: &mut Vec<String>) {
    let paragraph = current.join("\n").trim().to_string();
    if !paragraph.is_empty() {
        paragraphs.push(paragraph);
    }
    current.clear();
}

/// Inverse of `split_paragraphs`, for filling the terms textarea
pub fn join_paragraphs(paragraphs: &[String]) -> String {
    paragraphs.join("\n\n")
}

/// Paragraphs to render: the quotation's own, or the defaults
pub fn effective_terms(terms: &[String]) -> Vec<String> {
    if terms.is_empty() {
        DEFAULT_TERMS.iter().map(|t| t.to_string()).collect()
    } else {
        terms.to_vec()
    }
}

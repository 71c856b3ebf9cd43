//! Lesson slide segmenter
//!
//! Converts a block of lesson text into an ordered sequence of slides for
//! carousel display. Sections are blank-line delimited; a leading `#` marks
//! a heading and always starts a new slide.

use crate::consts::cli_consts::SLIDE_SOFT_LIMIT;

/// Splits lesson text into carousel slides.
///
/// Walks blank-line-delimited sections in order, accumulating them into the
/// current slide. A new slide starts when a section begins with a heading
/// marker or when appending would push the buffer past [`SLIDE_SOFT_LIMIT`].
/// A single heading-delimited section longer than the limit still becomes
/// one slide.
///
/// If the whole text fits in one slide, it is force-split at the nearest
/// blank-line boundary at or after the midpoint so the carousel always has
/// something to page to. Content with no such boundary stays a single slide;
/// it is never hard-wrapped mid-paragraph.
pub fn split_into_slides(text: &str) -> Vec<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        // Placeholder slide so the viewer always has something to render.
        return vec![String::new()];
    }

    let mut slides: Vec<String> = Vec::new();
    let mut current = String::new();

    for section in sections(trimmed) {
        let is_heading = section.trim_start().starts_with('#');
        let would_overflow =
            !current.is_empty() && current.len() + 2 + section.len() > SLIDE_SOFT_LIMIT;

        if (is_heading || would_overflow) && !current.is_empty() {
            slides.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push_str("\n\n");
        }
        current.push_str(&section);
    }
    if !current.is_empty() {
        slides.push(current);
    }

    if slides.len() == 1 {
        force_second_slide(&mut slides);
    }
    slides
}

/// Groups lines into blank-line-delimited sections. Lines containing only
/// whitespace count as blank.
fn sections(text: &str) -> Vec<String> {
    let mut sections = Vec::new();
    let mut current = String::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                sections.push(std::mem::take(&mut current));
            }
        } else {
            if !current.is_empty() {
                current.push('\n');
            }
            current.push_str(line);
        }
    }
    if !current.is_empty() {
        sections.push(current);
    }
    sections
}

/// Splits a lone slide in two at the first blank-line boundary at or after
/// its midpoint. Leaves the slide untouched when no boundary exists.
fn force_second_slide(slides: &mut Vec<String>) {
    let only = match slides.first() {
        Some(s) if !s.is_empty() => s.clone(),
        _ => return,
    };

    let mut midpoint = only.len() / 2;
    while !only.is_char_boundary(midpoint) {
        midpoint += 1;
    }

    if let Some(offset) = only[midpoint..].find("\n\n") {
        let split_at = midpoint + offset;
        let first = only[..split_at].trim_end().to_string();
        let second = only[split_at..].trim_start().to_string();
        if !first.is_empty() && !second.is_empty() {
            slides.clear();
            slides.push(first);
            slides.push(second);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Short text with no blank lines stays a single slide.
    fn test_short_text_is_one_slide() {
        let slides = split_into_slides("A single short paragraph about towing cover.");
        assert_eq!(
            slides,
            vec!["A single short paragraph about towing cover.".to_string()]
        );
    }

    #[test]
    // Empty input yields one empty placeholder slide.
    fn test_empty_input_yields_placeholder() {
        assert_eq!(split_into_slides(""), vec![String::new()]);
        assert_eq!(split_into_slides("  \n \n"), vec![String::new()]);
    }

    #[test]
    // Each heading-marked section starts its own slide.
    fn test_heading_sections_become_slides() {
        let text = "# First\n\nIntro paragraph.\n\n## Second\n\nMore detail.\n\n# Third\n\nWrap up.";
        let slides = split_into_slides(text);
        assert_eq!(slides.len(), 3);
        assert!(slides[0].starts_with("# First"));
        assert!(slides[1].starts_with("## Second"));
        assert!(slides[2].starts_with("# Third"));
    }

    #[test]
    // Concatenating slides reproduces all non-blank content of the input.
    fn test_slides_preserve_content() {
        let text = "# Heading\n\nfirst paragraph\n\nsecond paragraph\n\n## Another\n\nthird";
        let slides = split_into_slides(text);
        let joined = slides.join("\n\n");
        for fragment in [
            "# Heading",
            "first paragraph",
            "second paragraph",
            "## Another",
            "third",
        ] {
            assert!(joined.contains(fragment), "missing: {}", fragment);
        }
    }

    #[test]
    // Sections accumulate until the soft length limit, then a new slide starts.
    fn test_length_limit_starts_new_slide() {
        let long_a = "a".repeat(500);
        let long_b = "b".repeat(500);
        let text = format!("{}\n\n{}", long_a, long_b);
        let slides = split_into_slides(&text);
        assert_eq!(slides.len(), 2);
        assert_eq!(slides[0], long_a);
        assert_eq!(slides[1], long_b);
    }

    #[test]
    // A single oversized heading section still becomes one slide.
    fn test_single_oversized_section_not_wrapped() {
        let text = format!("# Big\n{}", "x".repeat(1200));
        let slides = split_into_slides(&text);
        assert_eq!(slides.len(), 1);
        assert_eq!(slides[0].len(), text.len());
    }

    #[test]
    // A single-slide result with a post-midpoint blank line is force-split.
    fn test_forced_split_at_midpoint_boundary() {
        let text = "first paragraph here\n\nsecond paragraph here";
        let slides = split_into_slides(text);
        assert_eq!(slides.len(), 2);
        assert_eq!(slides[0], "first paragraph here");
        assert_eq!(slides[1], "second paragraph here");
    }

    #[test]
    // Forced split picks the first boundary at or after the midpoint.
    fn test_forced_split_prefers_late_boundary() {
        let text = "short\n\na much longer paragraph that drags the midpoint well past the first boundary\n\ntail";
        let slides = split_into_slides(text);
        assert_eq!(slides.len(), 2);
        assert_eq!(slides[1], "tail");
    }

    #[test]
    // Multibyte content around the midpoint must not panic.
    fn test_forced_split_handles_multibyte_midpoint() {
        let text = format!("{}\n\n{}", "é".repeat(41), "ü".repeat(40));
        let slides = split_into_slides(&text);
        assert_eq!(slides.len(), 2);
    }

    #[test]
    // Blank lines with stray whitespace still delimit sections.
    fn test_whitespace_only_lines_are_blank() {
        let text = "# One\npayload\n   \n# Two\nmore";
        let slides = split_into_slides(text);
        assert_eq!(slides.len(), 2);
        assert!(slides[1].starts_with("# Two"));
    }
}

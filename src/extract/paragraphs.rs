//! Paragraph assembly from body lines.

/// Join runs of non-empty body lines into paragraphs.
///
/// Each line contributes its text followed by one space, so every
/// paragraph keeps a trailing space. A blank line closes the current
/// paragraph. Consecutive blank lines do not produce empty paragraphs,
/// and text left open at the end of the body is dropped.
pub fn assemble_paragraphs<S: AsRef<str>>(body: &[S]) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current = String::new();

    for line in body {
        let line = line.as_ref();
        if line.is_empty() {
            if !current.is_empty() {
                paragraphs.push(std::mem::take(&mut current));
            }
        } else {
            current.push_str(line);
            current.push(' ');
        }
    }

    paragraphs
}

//! Provider adapter — turns a free-text chat-completion reply into exactly
//! three usable headlines.
//!
//! The reply is untrusted: models number their output, wrap it in quotes or
//! brackets, bold it, or echo the instructions back. Each line goes through
//! an ordered sequence of cleanup passes, then filters drop the junk. A
//! successful but sparse reply is padded from the mock templates; a failed
//! call propagates so the endpoint can fall back wholesale.

use crate::generation::mock::{mock_variations, Length};
use crate::generation::prompts::{system_prompt, user_prompt};
use crate::inference::{InferenceClient, InferenceError};

/// Number of variations every generation produces.
pub const VARIATION_COUNT: usize = 3;

/// Generates headline variations via the live provider.
pub async fn generate_via_provider(
    client: &InferenceClient,
    input: &str,
    tone: &str,
    length: Length,
) -> Result<Vec<String>, InferenceError> {
    let response = client
        .chat(&system_prompt(tone, length), &user_prompt(input, tone, length))
        .await?;

    let text = response.text().ok_or(InferenceError::EmptyContent)?;

    let candidates = parse_headlines(text);
    Ok(fill_shortfall(candidates, input, tone, length))
}

/// Splits a reply into candidate headlines: clean each line, drop lines that
/// are too short, too long, or that echo the instructions, keep the first 3.
fn parse_headlines(text: &str) -> Vec<String> {
    text.lines()
        .map(clean_line)
        .filter(|line| {
            let chars = line.chars().count();
            let lower = line.to_lowercase();
            chars > 10
                && chars < 200
                && !lower.contains("headline")
                && !lower.contains("marketing")
        })
        .take(VARIATION_COUNT)
        .collect()
}

/// Ordered cleanup passes over one line: leading numbering, wrapping
/// quotes/brackets, markdown emphasis, whitespace.
fn clean_line(line: &str) -> String {
    let line = strip_leading_numbering(line);
    let line = line.trim_matches(|c| c == '"' || c == '[' || c == ']');
    let line = line.replace('*', "");
    line.trim().to_string()
}

/// Strips a leading `1.` / `2 -` style marker. Anchored on digits: a line
/// starting with a bare dash or bullet is left alone.
fn strip_leading_numbering(line: &str) -> &str {
    let rest = line.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() == line.len() {
        return line;
    }
    let rest = rest.strip_prefix('.').unwrap_or(rest);
    let rest = rest.trim_start();
    let rest = rest.strip_prefix(['-', '•']).unwrap_or(rest);
    rest.trim_start()
}

/// Pads a sparse candidate list up to [`VARIATION_COUNT`] with mock templates
/// at the corresponding positions.
fn fill_shortfall(mut lines: Vec<String>, input: &str, tone: &str, length: Length) -> Vec<String> {
    if lines.len() >= VARIATION_COUNT {
        return lines;
    }

    let fallback = mock_variations(input, tone, length);
    while lines.len() < VARIATION_COUNT {
        let position = lines.len();
        let filler = fallback
            .get(position)
            .cloned()
            .unwrap_or_else(|| format!("{input} - {tone} Solution"));
        lines.push(filler);
    }

    lines
}

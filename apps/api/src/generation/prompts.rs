// Prompt construction for headline generation.
// The system message fixes tone, length and the exactly-3 numbered output
// format; the user message restates the product so sparse replies stay on
// topic.

use crate::generation::mock::Length;

pub fn system_prompt(tone: &str, length: Length) -> String {
    format!(
        "You are an expert marketing copywriter. Generate exactly 3 {} marketing headlines \
         for the given product/service. Make them {} in length. Return only the headlines, \
         numbered 1-3.",
        tone.to_lowercase(),
        length.as_str()
    )
}

pub fn user_prompt(input: &str, tone: &str, length: Length) -> String {
    format!(
        "Product/Service: {input}\n\n\
         Create 3 {} {} marketing headlines for \"{input}\". Format:\n\
         1. [headline]\n\
         2. [headline]\n\
         3. [headline]",
        tone.to_lowercase(),
        length.as_str()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_pins_tone_length_and_count() {
        let prompt = system_prompt("Professional", Length::Medium);
        assert!(prompt.contains("exactly 3"));
        assert!(prompt.contains("professional"));
        assert!(prompt.contains("medium"));
        assert!(prompt.contains("numbered 1-3"));
    }

    #[test]
    fn test_user_prompt_restates_the_product() {
        let prompt = user_prompt("My product", "Urgent", Length::Short);
        assert!(prompt.starts_with("Product/Service: My product"));
        assert!(prompt.contains("\"My product\""));
        assert!(prompt.contains("1. [headline]"));
    }
}

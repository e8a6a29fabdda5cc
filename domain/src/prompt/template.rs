//! Prompt templates for the answer pipeline

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt for the search-augmented answer call
    pub fn search_system() -> &'static str {
        r#"Search the web for the answer to the question you are given, then answer it.
Give the original text that supports the answer and where it came from.
Return the answer in exactly this format:
{
  "answer": "the option(s) for a multiple-choice question, or the answer for a true/false or fill-in-the-blank question",
  "supporting_text": "the complete original text that supports the answer, with the answer marked using **",
  "source": "[source](link)"
}"#
    }

    /// System prompt for the verification pass
    pub fn verification_system() -> &'static str {
        r#"Verify and refine the candidate answer. Follow these rules strictly:
1. Check that the answer is correct and matches the options. The answer must come from the original text; do not explain or infer on your own.
2. Mark the key evidence: wrap the answer in ** wherever it appears in the original text. Multiple marks are allowed.
3. Format: {"answer":"answer","supporting_text":"original evidence text","source":"[source](link)"}
4. Output only the JSON, nothing else."#
    }

    /// User prompt for the verification pass
    pub fn verification_prompt(question: &str, candidate: &str) -> String {
        format!("Question: {}\nCandidate answer: {}", question, candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_system_names_all_fields() {
        let prompt = PromptTemplate::search_system();
        for field in ["\"answer\"", "\"supporting_text\"", "\"source\""] {
            assert!(prompt.contains(field), "missing {}", field);
        }
    }

    #[test]
    fn test_verification_system_demands_json_only() {
        let prompt = PromptTemplate::verification_system();
        assert!(prompt.contains("Output only the JSON"));
        assert!(prompt.contains(r#""supporting_text""#));
    }

    #[test]
    fn test_verification_prompt_format() {
        let prompt = PromptTemplate::verification_prompt("Q1", r#"{"answer":"B"}"#);
        assert_eq!(prompt, "Question: Q1\nCandidate answer: {\"answer\":\"B\"}");
    }
}

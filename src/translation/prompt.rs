pub const SYSTEM_PROMPT_TEMPLATE: &str = "You are an expert translator specializing in {context} terminology. \
     Translate the user's text from {source} to {target}. \
     Provide only the direct translation, with no additional explanations, \
     introductions, or commentary.";

#[allow(clippy::literal_string_with_formatting_args)]
pub fn build_system_prompt(context: &str, source_lang: &str, target_lang: &str) -> String {
    // {context}, {source} and {target} are placeholders for string replacement,
    // not format arguments
    SYSTEM_PROMPT_TEMPLATE
        .replace("{context}", context)
        .replace("{source}", source_lang)
        .replace("{target}", target_lang)
}

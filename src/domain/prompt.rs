//! Prompt construction for comment generation.

use serde::{Deserialize, Serialize};

use super::settings::WordLimit;

/// Language of the instruction sent to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PromptLanguage {
    #[default]
    #[serde(rename = "zh-hant")]
    TraditionalChinese,
    #[serde(rename = "en")]
    English,
}

impl PromptLanguage {
    /// List separator native to the language.
    pub fn list_separator(self) -> &'static str {
        match self {
            PromptLanguage::TraditionalChinese => "、",
            PromptLanguage::English => ", ",
        }
    }
}

/// Inputs to [`build_prompt`].
#[derive(Debug, Clone, Copy)]
pub struct PromptInput<'a> {
    pub student_name: &'a str,
    pub traits: &'a [String],
    pub styles: &'a [String],
    pub word_limit: WordLimit,
}

/// Build the instruction text for one student's comment.
///
/// Pure. Labels appear in the order given. The style clause is omitted entirely when
/// `styles` is empty; an empty `traits` slice yields an empty traits clause.
pub fn build_prompt(input: &PromptInput<'_>, language: PromptLanguage) -> String {
    let separator = language.list_separator();
    let traits = input.traits.join(separator);
    let styles = input.styles.join(separator);
    let name = input.student_name;
    let limit = input.word_limit;

    match language {
        PromptLanguage::TraditionalChinese => {
            let style_clause =
                if styles.is_empty() { String::new() } else { format!("，請使用{}風格", styles) };
            format!(
                "請根據以下學生特質，為學生「{name}」生成一段{limit}字的期末評語{style_clause}。\n\
                 \n\
                 要求：\n\
                 1. 評語要有創意，使用正向鼓勵的語氣和溫暖親切的口氣。\n\
                 2. 請使用第二人稱「你」來稱呼學生，不要用第三人稱。\n\
                 3. 字數控制在{limit}字左右。\n\
                 4. 不要分段。\n\
                 \n\
                 特質：{traits}"
            )
        }
        PromptLanguage::English => {
            let style_clause = if styles.is_empty() {
                String::new()
            } else {
                format!(", written in a {} style", styles)
            };
            format!(
                "Based on the traits below, write an end-of-term comment of about {limit} words \
                 for the student \"{name}\"{style_clause}.\n\
                 \n\
                 Requirements:\n\
                 1. Be creative, with a positive, encouraging and warm tone.\n\
                 2. Address the student directly as \"you\"; never use the third person.\n\
                 3. Keep the length around {limit} words.\n\
                 4. Write a single paragraph with no line breaks.\n\
                 \n\
                 Traits: {traits}"
            )
        }
    }
}

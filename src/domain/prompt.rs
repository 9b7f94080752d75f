/// System instruction sent with every classification request.
pub const CLASSIFIER_PROMPT: &str = r#"
You are a content classifier. Your task is to classify the content of the input text into one of the following categories:
- Lifestyle
- Beauty
- Fitness & Health
- Tech
- Travel
- Food
- Gaming
- Business / Finance
- Parenting
- Education
- Entertainment


Your response should be a single word indicating the category of the content, without any additional text or explanation.
If the content does not fit into any of the specified categories, respond with "Other".
"#;

/// Two-role prompt: fixed system instruction plus the user content to classify.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationPrompt {
    system_instruction: String,
    user_content: String,
}

impl ClassificationPrompt {
    pub fn new(user_content: impl Into<String>) -> Self {
        Self::with_instruction(CLASSIFIER_PROMPT, user_content)
    }

    pub fn with_instruction(
        system_instruction: impl Into<String>,
        user_content: impl Into<String>,
    ) -> Self {
        Self {
            system_instruction: dedent(&system_instruction.into()),
            user_content: user_content.into(),
        }
    }

    pub fn system_instruction(&self) -> &str {
        &self.system_instruction
    }

    pub fn user_content(&self) -> &str {
        &self.user_content
    }
}

/// Removes the indentation shared by every non-blank line.
fn dedent(text: &str) -> String {
    let margin = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start().len())
        .min()
        .unwrap_or(0);

    if margin == 0 {
        return text.to_string();
    }

    text.split_inclusive('\n')
        .map(|line| {
            if line.trim().is_empty() {
                line.trim_start_matches([' ', '\t'])
            } else {
                line.get(margin..).unwrap_or(line)
            }
        })
        .collect()
}

//! Prompt templates for tutorscope.
//!
//! Prompts can be customized by placing TOML files in the custom prompts directory.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Collection of all prompt templates.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Prompts {
    pub rag: RagPrompts,
    /// Custom variables from config, available in all prompts.
    #[serde(skip)]
    pub variables: HashMap<String, String>,
}

/// Prompts for answering questions about a single video.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RagPrompts {
    pub system: String,
    pub user: String,
}

impl Default for RagPrompts {
    fn default() -> Self {
        Self {
            system: "You are a friendly, expert tutor. Always start with encouragement. \
Follow the exact format with emojis and clear sections. Only use facts present in the \
transcript excerpts."
                .to_string(),

            user: r#"You are explaining a video to a student.

VIDEO: "{{video_title}}"
QUESTION: "{{question}}"

TRANSCRIPT EXCERPTS:
{{context}}

CREATE ANSWER WITH THIS EXACT STRUCTURE:

🎯 **Nice! This is a great question!**
[Start with encouragement, 1 sentence]

📘 **Quick Answer:**
[1-2 line simple answer]

📚 **From the Video:**
• The instructor says: [quote from video]
• Key point: [another point]
• Important: [third point]

🧠 **Simple Explanation:**
[Explain in beginner-friendly way, 2 sentences max]

🚀 **Key Points to Remember:**
1. [Point 1]
2. [Point 2]
3. [Point 3]

💡 **Pro Tip:** [One practical advice]

FORMATTING RULES:
1. Use the exact emojis and headers above
2. Use • for video points
3. Use 1. 2. 3. for key points
4. Keep each section short
5. Be encouraging and clear

Now create the answer:"#
                .to_string(),
        }
    }
}

impl Prompts {
    /// Load prompts from the default location, with optional custom directory and variables.
    pub fn load(
        custom_dir: Option<&str>,
        custom_variables: Option<&HashMap<String, String>>,
    ) -> crate::error::Result<Self> {
        let mut prompts = Prompts::default();

        if let Some(vars) = custom_variables {
            prompts.variables = vars.clone();
        }

        if let Some(dir) = custom_dir {
            let custom_path = PathBuf::from(shellexpand::tilde(dir).to_string());

            let rag_path = custom_path.join("rag.toml");
            if rag_path.exists() {
                let content = std::fs::read_to_string(&rag_path)?;
                prompts.rag = toml::from_str(&content)?;
            }
        }

        Ok(prompts)
    }

    /// Render a prompt template with the given variables.
    pub fn render(template: &str, vars: &HashMap<String, String>) -> String {
        let mut result = template.to_string();
        for (key, value) in vars {
            result = result.replace(&format!("{{{{{}}}}}", key), value);
        }
        result
    }

    /// Render a prompt template with both provided variables and custom config variables.
    /// Provided variables take precedence over custom config variables.
    pub fn render_with_custom(&self, template: &str, vars: &HashMap<String, String>) -> String {
        let mut merged = self.variables.clone();
        for (key, value) in vars {
            merged.insert(key.clone(), value.clone());
        }
        Self::render(template, &merged)
    }
}

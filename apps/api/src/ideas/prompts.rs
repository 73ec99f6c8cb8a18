// LLM prompt constants for the Ideas module.

/// Project-idea prompt template. Replace `{skills}` with a comma-joined
/// skill list before sending.
pub const PROJECT_IDEA_PROMPT_TEMPLATE: &str = r#"You are a career coach and project advisor. Based on the following 3 most important data science skills, generate 3 project ideas for a portfolio. Each project should integrate multiple skills from the list. Provide a project title and a short description for each idea.

Skills: {skills}

Format the output as a JSON array of objects, where each object has a "title" and a "description". Do not include any other text, explanations, or formatting outside of the JSON array."#;

/// Builds the project-idea prompt from a ranked skill list. Pure and total;
/// an empty list produces a prompt with an empty skills line.
pub fn build_idea_prompt(skills: &[String]) -> String {
    PROJECT_IDEA_PROMPT_TEMPLATE.replace("{skills}", &skills.join(", "))
}

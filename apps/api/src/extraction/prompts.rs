// All LLM prompt constants for the Extraction module.
// Prompt builders are pure: output depends only on the input and the fixed
// few-shot exemplars below. Any string input is valid, including empty.

/// Skill-extraction prompt template. Replace `{description}` before sending.
///
/// Two fixed few-shot exemplars (a platform-engineering JD and a
/// human-performance data-science JD) steer the model toward hard skills
/// and the exact JSON array shape the schema contract demands.
pub const SKILL_EXTRACTION_PROMPT_TEMPLATE: &str = r#"You are a data science career coach. Your task is to extract all data science-related skills, tools, and technologies from the following job description. Focus on hard skills like programming languages, libraries, databases, cloud platforms, and methodologies. For each skill, also provide a confidence score (from 0 to 100) indicating how certain you are that this is a relevant skill. A score of 100 means you are highly certain, while a lower score indicates less certainty.

Output the skills and confidence scores as a JSON array of objects. Do not include any other text, explanations, or formatting outside of the JSON array.

--- Few-Shot Learning Examples ---

Job Description:
"The Platform Emerging Technology team is a collection of engineers focused on providing enablement and acceleration for other teams that are delivering products which leverage emergent technologies. The Emerging Technology team enhances high quality outcomes through the delivery of foundational products that meet the scale and agility of the business while maintaining its robust security posture. Drive the implementation and refinement of a cutting-edge framework, deployed on Google Kubernetes Engine (GKE) within Google Cloud Platform (GCP), empowering development teams to seamlessly integrate with Generative AI technologies. Champion best practices in software engineering, including code quality, testing, and documentation, to ensure a robust and reliable framework for internal and external developers."

JSON Output:
[
  {"skill": "Generative AI", "confidence_score": 98},
  {"skill": "Google Kubernetes Engine (GKE)", "confidence_score": 95},
  {"skill": "Google Cloud Platform (GCP)", "confidence_score": 95},
  {"skill": "software engineering", "confidence_score": 90},
  {"skill": "code quality", "confidence_score": 85},
  {"skill": "documentation", "confidence_score": 80}
]

Job Description:
"We are seeking a highly skilled and motivated Human Performance Data Scientist to join our team. The ideal candidate will be experienced in extracting insights from complex datasets, visualizing data through compelling reports, and supporting human-performance initiatives. This position will play a critical role in designing and delivering actionable insights through data-driven storytelling. Use Python and/or R for advanced data analysis, statistical modeling, and automation. Develop dashboards and reports using Power BI, Teamworks AMS, or similar data visualization tools."

JSON Output:
[
  {"skill": "data analysis", "confidence_score": 95},
  {"skill": "statistical modeling", "confidence_score": 95},
  {"skill": "Python", "confidence_score": 98},
  {"skill": "R", "confidence_score": 98},
  {"skill": "Power BI", "confidence_score": 90},
  {"skill": "data visualization", "confidence_score": 90},
  {"skill": "Teamworks AMS", "confidence_score": 85}
]

--- User Input ---

Job Description:
{description}"#;

/// Builds the skill-extraction prompt for one job description.
pub fn build_extraction_prompt(description: &str) -> String {
    SKILL_EXTRACTION_PROMPT_TEMPLATE.replace("{description}", description)
}

//! Response-shape contracts in the Gemini structured-output schema dialect.
//!
//! Each contract is sent in `generationConfig.responseSchema` to constrain
//! decoding on the model side, and is mirrored locally by the serde types
//! (`SkillScore`, `ProjectIdea`) that validate the parsed payload. Keep the
//! two in sync.

use std::collections::BTreeMap;

use serde::Serialize;

/// Upper-case type tags used by the Gemini `responseSchema` dialect.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SchemaType {
    Array,
    Object,
    String,
    Number,
}

/// A node in a Gemini response schema. Only the subset of the dialect this
/// service uses: typed arrays of flat objects with string/number fields.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    #[serde(rename = "type")]
    pub schema_type: SchemaType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<&'static str, Schema>>,
    /// Fixed field order for cross-model output consistency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_ordering: Option<Vec<&'static str>>,
}

impl Schema {
    fn leaf(schema_type: SchemaType) -> Self {
        Self {
            schema_type,
            description: None,
            items: None,
            properties: None,
            property_ordering: None,
        }
    }

    pub fn string() -> Self {
        Self::leaf(SchemaType::String)
    }

    pub fn number() -> Self {
        Self::leaf(SchemaType::Number)
    }

    pub fn array_of(items: Schema) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::leaf(SchemaType::Array)
        }
    }

    pub fn object(
        properties: BTreeMap<&'static str, Schema>,
        property_ordering: Vec<&'static str>,
    ) -> Self {
        Self {
            properties: Some(properties),
            property_ordering: Some(property_ordering),
            ..Self::leaf(SchemaType::Object)
        }
    }

    pub fn with_description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }
}

/// Contract for skill extraction: an array of `{skill, confidence_score}`
/// objects, field order fixed to skill-first.
pub fn skill_extraction_schema() -> Schema {
    let mut properties = BTreeMap::new();
    properties.insert("skill", Schema::string());
    properties.insert(
        "confidence_score",
        Schema::number().with_description(
            "A score from 0 to 100 representing the confidence that the \
             extracted skill is relevant to the job description.",
        ),
    );
    Schema::array_of(Schema::object(
        properties,
        vec!["skill", "confidence_score"],
    ))
}

/// Contract for project idea generation: an array of `{title, description}`
/// objects.
pub fn project_idea_schema() -> Schema {
    let mut properties = BTreeMap::new();
    properties.insert("title", Schema::string());
    properties.insert("description", Schema::string());
    Schema::array_of(Schema::object(properties, vec!["title", "description"]))
}

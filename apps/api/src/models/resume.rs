use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInformation {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub linkedin: Option<String>,
    pub personal_website: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub field_of_study: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkExperience {
    pub company: Option<String>,
    pub position: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certification {
    pub name: Option<String>,
    pub issuing_organization: Option<String>,
    pub issue_date: Option<String>,
    pub expiry_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    pub name: Option<String>,
    pub proficiency_level: Option<String>,
    /// Kept as text: the model answers "5", "5+" or "3-4" interchangeably.
    pub years_of_experience: Option<String>,
}

/// Personal information and education section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentitySection {
    pub personal_information: Option<PersonalInformation>,
    #[serde(deserialize_with = "null_as_empty")]
    pub education: Vec<Education>,
}

/// Work history and certifications section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CareerSection {
    #[serde(deserialize_with = "null_as_empty")]
    pub work_experience: Vec<WorkExperience>,
    #[serde(deserialize_with = "null_as_empty")]
    pub certifications: Vec<Certification>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillsSection {
    #[serde(deserialize_with = "null_as_empty")]
    pub skills: Vec<Skill>,
}

/// The model answers `null` for sections it could not find.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Structured resume, assembled from the three extraction passes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeProfile {
    pub personal_information: Option<PersonalInformation>,
    pub education: Vec<Education>,
    pub work_experience: Vec<WorkExperience>,
    pub certifications: Vec<Certification>,
    pub skills: Vec<Skill>,
}

impl ResumeProfile {
    pub fn from_sections(
        identity: IdentitySection,
        career: CareerSection,
        skills: SkillsSection,
    ) -> Self {
        Self {
            personal_information: identity.personal_information,
            education: identity.education,
            work_experience: career.work_experience,
            certifications: career.certifications,
            skills: skills.skills,
        }
    }
}

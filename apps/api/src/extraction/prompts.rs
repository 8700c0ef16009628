// LLM prompt constants for fact and profile extraction.
// Placeholders: {resume_text}, {career_name}. Filled by `render`.

/// System prompt shared by every extraction call.
pub const EXTRACTION_SYSTEM: &str = "You are a meticulous resume analyst working for an \
    applicant tracking system. You read resumes and report facts about them. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Contact presence check.
pub const CONTACT_FACTS_PROMPT: &str = r#"Check the resume below for three contact fields.

For each field answer exactly "Yes" if it is present in the resume and "No" if it is not:
- email_score: an email address
- phone_score: a phone number
- linkedin_score: a LinkedIn profile URL or handle

Return a JSON object with this EXACT schema:
{
  "email_score": "Yes",
  "phone_score": "No",
  "linkedin_score": "Yes"
}

RESUME:
{resume_text}"#;

/// Keyword, job-title and work-experience analysis against a career name.
pub const KEYWORD_FACTS_PROMPT: &str = r#"Compare the resume below with the target role "{career_name}".

Definitions:
- keywords: strong action verbs that a "{career_name}" posting would use AND that appear in the resume.
  Copy each exactly as written in the resume. keyword_count = number of such keywords.
  Example: "Led a team of four developers to build a chatbot. Troubleshot and debugged issues."
  → keywords ["Led", "build", "Troubleshot", "debugged"], keyword_count 4
- job_title_count: how many times the job title "{career_name}" (or the title itself in the
  resume's work history) appears in the resume.
- general_keyword_count: number of professional terms associated with "{career_name}" that appear
  in the resume (e.g. "team", "application", "methodologies").
- category_keywords: tools, frameworks and libraries required for "{career_name}" that appear in the
  resume, copied exactly as written. category_keyword_count = number of them.
- total_work_experience_count: number of distinct work-experience entries in the resume.
- ats_keywords_to_add: up to 15 strong action verbs relevant to "{career_name}" that are NOT in the resume.
- general_keywords_to_add: up to 15 professional terms relevant to "{career_name}" that are NOT in the resume.

Return a JSON object with this EXACT schema (integers are non-negative):
{
  "keyword_count": 4,
  "keywords": ["Led", "build"],
  "job_title_count": 1,
  "general_keyword_count": 6,
  "category_keyword_count": 3,
  "category_keywords": ["Python", "Transformers"],
  "total_work_experience_count": 2,
  "ats_keywords_to_add": ["Optimized"],
  "general_keywords_to_add": ["stakeholders"]
}

RESUME:
{resume_text}"#;

/// Personal information and education.
pub const IDENTITY_SECTION_PROMPT: &str = r#"Extract the personal information and the education history from the resume below.
Education means degrees and academic programs; certificates are NOT education.

Return a JSON object with this EXACT schema. Use null for anything not stated:
{
  "personal_information": {
    "full_name": "string", "email": "string", "phone": "string",
    "address": "string", "linkedin": "string", "personal_website": "string"
  },
  "education": [
    {"institution": "string", "degree": "string", "field_of_study": "string",
     "start_date": "string", "end_date": "string"}
  ]
}

RESUME:
{resume_text}"#;

/// Work experience and certifications.
pub const CAREER_SECTION_PROMPT: &str = r#"Extract the work experience and the certifications from the resume below.

Return a JSON object with this EXACT schema. Use null for anything not stated:
{
  "work_experience": [
    {"company": "string", "position": "string", "start_date": "string", "end_date": "string"}
  ],
  "certifications": [
    {"name": "string", "issuing_organization": "string", "issue_date": "string", "expiry_date": "string"}
  ]
}

RESUME:
{resume_text}"#;

/// Skills, one per entry.
pub const SKILLS_SECTION_PROMPT: &str = r#"Extract the skills from the resume below.

When a line lists several skills ("Scripting (Linux, Python, Bash)"), emit one entry per skill.
years_of_experience is based on how many years of the work history mention the skill,
written as a string (e.g. "5").

Return a JSON object with this EXACT schema:
{
  "skills": [
    {"name": "Python", "proficiency_level": "Advanced", "years_of_experience": "5"}
  ]
}

RESUME:
{resume_text}"#;

/// Fills `{career_name}` and `{resume_text}` in a single pass over the
/// template, so placeholder text inside either value is never expanded.
/// Without a career name, `{career_name}` is left as is.
pub fn render(template: &str, career_name: Option<&str>, resume_text: &str) -> String {
    let mut prompt = String::with_capacity(template.len() + resume_text.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        prompt.push_str(&rest[..start]);
        let tail = &rest[start..];
        if let Some(after) = tail.strip_prefix("{resume_text}") {
            prompt.push_str(resume_text);
            rest = after;
        } else if let (Some(name), Some(after)) =
            (career_name, tail.strip_prefix("{career_name}"))
        {
            prompt.push_str(name);
            rest = after;
        } else {
            prompt.push('{');
            rest = &tail[1..];
        }
    }
    prompt.push_str(rest);
    prompt
}

use serde::Serialize;

use crate::models::profile::INDUSTRIES;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentSection {
    pub title: &'static str,
    pub description: &'static str,
    pub fields: &'static [&'static str],
}

pub const SECTIONS: &[AssessmentSection] = &[
    AssessmentSection {
        title: "Personal Information",
        description: "Tell us about your current situation",
        fields: &["name", "currentRole", "experience"],
    },
    AssessmentSection {
        title: "Career Goals",
        description: "Where do you want to go?",
        fields: &["targetRole", "industry", "timeframe"],
    },
    AssessmentSection {
        title: "Skills & Preferences",
        description: "Help us understand your learning style",
        fields: &["skills", "learningStyle"],
    },
];

pub const SKILL_OPTIONS: &[&str] = &[
    "JavaScript",
    "React",
    "Python",
    "Data Analysis",
    "Project Management",
    "Marketing",
    "Design",
    "Sales",
    "Leadership",
    "Communication",
];

#[derive(Debug, Clone, Serialize)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Everything the UI needs to render the assessment form.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormOptions {
    pub sections: &'static [AssessmentSection],
    pub experience: Vec<SelectOption>,
    pub industries: Vec<SelectOption>,
    pub timeframes: Vec<SelectOption>,
    pub learning_styles: Vec<SelectOption>,
    pub skills: &'static [&'static str],
}

fn options(pairs: &[(&'static str, &'static str)]) -> Vec<SelectOption> {
    pairs
        .iter()
        .map(|&(value, label)| SelectOption { value, label })
        .collect()
}

pub fn form_options() -> FormOptions {
    FormOptions {
        sections: SECTIONS,
        experience: options(&[
            ("0-1", "0-1 years"),
            ("2-3", "2-3 years"),
            ("4-5", "4-5 years"),
            ("6-10", "6-10 years"),
            ("10+", "10+ years"),
        ]),
        industries: INDUSTRIES
            .iter()
            .zip([
                "Technology",
                "Finance",
                "Healthcare",
                "Education",
                "Marketing",
                "Consulting",
            ])
            .map(|(&value, label)| SelectOption { value, label })
            .collect(),
        timeframes: options(&[
            ("3-months", "3 months"),
            ("6-months", "6 months"),
            ("1-year", "1 year"),
            ("2-years", "2+ years"),
        ]),
        learning_styles: options(&[
            ("structured", "Structured courses"),
            ("hands-on", "Hands-on projects"),
            ("mentorship", "Mentorship & guidance"),
            ("self-paced", "Self-paced learning"),
        ]),
        skills: SKILL_OPTIONS,
    }
}

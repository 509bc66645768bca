//! Fallback synthesis: a network-free roadmap built from profile fields alone.
//!
//! Pure and deterministic: the same profile always yields the same roadmap.
//! Always exactly four milestones with ids 1..=4.

use crate::models::{Milestone, Roadmap, UserProfile};

pub fn fallback_roadmap(profile: &UserProfile) -> Roadmap {
    let senior = profile.experience.is_senior();
    let compressed = profile.timeframe.is_compressed();
    let pick = |short: &str, long: &str| (if compressed { short } else { long }).to_string();

    let role = &profile.target_role;
    let role_lower = role.to_lowercase();
    let industry = &profile.industry;
    let industry_lower = industry.to_lowercase();

    let first = if senior {
        milestone(
            1,
            "Skills Assessment & Gap Analysis",
            "Evaluate current capabilities and identify skill gaps",
            pick("2 weeks", "4 weeks"),
            vec![
                format!("Audit current {role} skills"),
                "Complete industry certifications assessment".to_string(),
                "Network with professionals in target role".to_string(),
            ],
        )
    } else {
        milestone(
            1,
            "Foundation Building",
            "Master the fundamental skills required",
            pick("2 weeks", "4 weeks"),
            vec![
                "Complete foundational courses".to_string(),
                "Build first portfolio project".to_string(),
                "Set up professional profiles".to_string(),
            ],
        )
    };

    let milestones = vec![
        first,
        milestone(
            2,
            "Practical Experience",
            "Gain hands-on experience in your target role",
            pick("6 weeks", "8 weeks"),
            vec![
                format!("Build {role_lower} projects"),
                "Contribute to open source or volunteer projects".to_string(),
                "Seek mentorship or coaching".to_string(),
            ],
        ),
        milestone(
            3,
            &format!("{industry} Domain Knowledge"),
            &format!("Develop expertise in {industry_lower} industry standards and practices"),
            pick("3 weeks", "6 weeks"),
            vec![
                format!("Research {industry_lower} industry trends and challenges"),
                "Learn industry-specific tools and technologies".to_string(),
                "Study successful companies and their technical approaches".to_string(),
                "Network with professionals in the industry".to_string(),
            ],
        ),
        milestone(
            4,
            "Professional Preparation",
            "Prepare for and execute your job search strategy",
            pick("3 weeks", "4 weeks"),
            vec![
                "Tailor resume for target role".to_string(),
                "Practice technical and behavioral interviews".to_string(),
                "Build professional online presence (LinkedIn, GitHub)".to_string(),
                "Apply to target positions and network actively".to_string(),
            ],
        ),
    ];

    Roadmap {
        id: None,
        created_at: None,
        role: role.clone(),
        timeline: profile.timeframe.timeline_label().to_string(),
        milestones,
        user_profile: None,
    }
}

fn milestone(id: u32, title: &str, description: &str, duration: String, tasks: Vec<String>) -> Milestone {
    Milestone {
        id,
        title: title.to_string(),
        description: description.to_string(),
        duration,
        tasks,
        completed: false,
        progress: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExperienceBand, LearningStyle, Timeframe};
    use std::collections::BTreeSet;

    fn profile(experience: &str, timeframe: &str) -> UserProfile {
        UserProfile {
            name: "Ada".to_string(),
            current_role: "Analyst".to_string(),
            experience: ExperienceBand::from(experience.to_string()),
            target_role: "Data Scientist".to_string(),
            industry: "Finance".to_string(),
            skills: BTreeSet::from(["Python".to_string()]),
            timeframe: Timeframe::from(timeframe.to_string()),
            learning_style: LearningStyle::HandsOn,
        }
    }

    #[test]
    fn test_junior_profile_gets_foundation_building() {
        let roadmap = fallback_roadmap(&profile("2-3", "6-months"));
        assert_eq!(roadmap.role, "Data Scientist");
        assert_eq!(roadmap.timeline, "6 months");
        assert_eq!(roadmap.milestones.len(), 4);
        assert_eq!(roadmap.milestones[0].title, "Foundation Building");
        assert_eq!(roadmap.milestones[0].duration, "4 weeks");
    }

    #[test]
    fn test_senior_profile_gets_gap_analysis() {
        let roadmap = fallback_roadmap(&profile("10+", "6-months"));
        assert_eq!(roadmap.milestones[0].title, "Skills Assessment & Gap Analysis");
        assert_eq!(roadmap.milestones[0].tasks[0], "Audit current Data Scientist skills");
    }

    #[test]
    fn test_four_to_five_years_is_senior() {
        let roadmap = fallback_roadmap(&profile("4-5", "1-year"));
        assert_eq!(roadmap.milestones[0].title, "Skills Assessment & Gap Analysis");
        assert_eq!(roadmap.timeline, "12 months");
    }

    #[test]
    fn test_templates_substitute_role_and_industry() {
        let roadmap = fallback_roadmap(&profile("0-1", "2-years"));
        assert_eq!(roadmap.timeline, "24 months");
        assert_eq!(roadmap.milestones[1].tasks[0], "Build data scientist projects");
        assert_eq!(roadmap.milestones[2].title, "Finance Domain Knowledge");
        assert_eq!(
            roadmap.milestones[2].description,
            "Develop expertise in finance industry standards and practices"
        );
        assert_eq!(
            roadmap.milestones[2].tasks[0],
            "Research finance industry trends and challenges"
        );
    }

    #[test]
    fn test_three_month_timeframe_shortens_durations() {
        let roadmap = fallback_roadmap(&profile("2-3", "3-months"));
        let durations: Vec<&str> = roadmap.milestones.iter().map(|m| m.duration.as_str()).collect();
        assert_eq!(durations, vec!["2 weeks", "6 weeks", "3 weeks", "3 weeks"]);
        assert_eq!(roadmap.timeline, "3 months");
    }

    #[test]
    fn test_unknown_timeframe_passes_through() {
        let roadmap = fallback_roadmap(&profile("2-3", "18-months"));
        assert_eq!(roadmap.timeline, "18-months");
    }

    #[test]
    fn test_initial_state_and_ids() {
        let roadmap = fallback_roadmap(&profile("6-10", "6-months"));
        let ids: Vec<u32> = roadmap.milestones.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        let task_counts: Vec<usize> = roadmap.milestones.iter().map(|m| m.tasks.len()).collect();
        assert_eq!(task_counts, vec![3, 3, 4, 4]);
        assert!(roadmap.milestones.iter().all(|m| !m.completed && m.progress == 0));
        assert!(roadmap.id.is_none());
    }

    #[test]
    fn test_deterministic_output() {
        let p = profile("2-3", "6-months");
        let a = serde_json::to_vec(&fallback_roadmap(&p)).unwrap();
        let b = serde_json::to_vec(&fallback_roadmap(&p)).unwrap();
        assert_eq!(a, b);
    }
}

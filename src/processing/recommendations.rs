//! Rule-based resume recommendations

use crate::config::RecommendationConfig;
use crate::processing::skill_matcher::SkillMatcher;
use log::debug;
use std::sync::Arc;

const FEW_SKILLS: &str = "Consider adding more technical skills to your resume";
const NO_EXPERIENCE: &str =
    "Highlight any projects or internships to demonstrate practical experience";
const TOO_SHORT: &str =
    "Your resume seems brief. Consider adding more details about your projects and achievements";
const TOO_LONG: &str =
    "Your resume might be too long. Consider condensing to the most relevant information";
const MISSING_SKILLS_PREFIX: &str = "Consider adding these skills mentioned in the job description: ";
const LOOKS_GOOD: &str =
    "Your resume looks good! Make sure to tailor it for each specific job application.";

pub struct RecommendationEngine {
    config: RecommendationConfig,
    skill_matcher: Arc<SkillMatcher>,
}

impl RecommendationEngine {
    pub fn new(config: RecommendationConfig, skill_matcher: Arc<SkillMatcher>) -> Self {
        Self {
            config,
            skill_matcher,
        }
    }

    /// Every applicable suggestion in rule order, or a single "looks good"
    /// message when none apply.
    pub fn recommend(
        &self,
        skills: &[String],
        experience_years: u32,
        word_count: usize,
        job_description: &str,
    ) -> Vec<String> {
        let mut recommendations = Vec::new();

        if skills.len() < self.config.min_skills {
            recommendations.push(FEW_SKILLS.to_string());
        }

        if experience_years == 0 {
            recommendations.push(NO_EXPERIENCE.to_string());
        }

        if word_count < self.config.min_word_count {
            recommendations.push(TOO_SHORT.to_string());
        } else if word_count > self.config.max_word_count {
            recommendations.push(TOO_LONG.to_string());
        }

        let missing = self.missing_skills(skills, job_description);
        if !missing.is_empty() {
            recommendations.push(format!("{}{}", MISSING_SKILLS_PREFIX, missing.join(", ")));
        }

        if recommendations.is_empty() {
            recommendations.push(LOOKS_GOOD.to_string());
        }

        debug!("Generated {} recommendations", recommendations.len());
        recommendations
    }

    /// Job description skills absent from the resume, alphabetical and capped.
    ///
    /// The job text is only lower-cased, not normalized, so entries such as
    /// `c++` or `ci/cd` can show up here even though normalized resume text
    /// can never contain them.
    pub fn missing_skills(&self, resume_skills: &[String], job_description: &str) -> Vec<String> {
        if job_description.trim().is_empty() {
            return Vec::new();
        }

        self.skill_matcher
            .extract_skills(&job_description.to_lowercase())
            .into_iter()
            .filter(|skill| !resume_skills.contains(skill))
            .take(self.config.max_missing_skills)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_SKILLS;

    fn engine() -> RecommendationEngine {
        let matcher = Arc::new(SkillMatcher::new(DEFAULT_SKILLS).unwrap());
        RecommendationEngine::new(RecommendationConfig::default(), matcher)
    }

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_weak_resume_gets_all_basic_rules() {
        let recs = engine().recommend(&skills(&["python"]), 0, 50, "");
        assert_eq!(recs, vec![FEW_SKILLS, NO_EXPERIENCE, TOO_SHORT]);
    }

    #[test]
    fn test_long_resume() {
        let five = skills(&["aws", "docker", "git", "python", "sql"]);
        let recs = engine().recommend(&five, 4, 900, "");
        assert_eq!(recs, vec![TOO_LONG]);
    }

    #[test]
    fn test_word_count_bounds_are_inclusive() {
        let five = skills(&["aws", "docker", "git", "python", "sql"]);
        assert_eq!(engine().recommend(&five, 2, 200, ""), vec![LOOKS_GOOD]);
        assert_eq!(engine().recommend(&five, 2, 800, ""), vec![LOOKS_GOOD]);
    }

    #[test]
    fn test_missing_skills_sorted_and_capped() {
        let five = skills(&["aws", "docker", "git", "python", "sql"]);
        let job = "We need Python, Kubernetes, GraphQL, React, Angular and Docker";
        let recs = engine().recommend(&five, 3, 400, job);
        assert_eq!(
            recs,
            vec![format!("{}angular, graphql, kubernetes", MISSING_SKILLS_PREFIX)]
        );
    }

    #[test]
    fn test_job_skills_already_covered() {
        let five = skills(&["aws", "docker", "git", "python", "sql"]);
        let recs = engine().recommend(&five, 3, 400, "python and sql on aws");
        assert_eq!(recs, vec![LOOKS_GOOD]);
    }

    #[test]
    fn test_raw_job_text_keeps_symbol_skills() {
        let missing = engine().missing_skills(&skills(&["python"]), "C++ and CI/CD pipelines");
        assert_eq!(missing, vec!["c++", "ci/cd"]);
    }

    #[test]
    fn test_custom_thresholds() {
        let matcher = Arc::new(SkillMatcher::new(DEFAULT_SKILLS).unwrap());
        let config = RecommendationConfig {
            min_skills: 1,
            min_word_count: 10,
            max_word_count: 20,
            max_missing_skills: 1,
        };
        let engine = RecommendationEngine::new(config, matcher);
        let recs = engine.recommend(&skills(&["python"]), 1, 15, "java and ruby");
        assert_eq!(recs, vec![format!("{}java", MISSING_SKILLS_PREFIX)]);
    }

    #[test]
    fn test_deterministic() {
        let engine = engine();
        let input = skills(&["java", "sql"]);
        let first = engine.recommend(&input, 0, 120, "react and vue with docker");
        for _ in 0..5 {
            assert_eq!(engine.recommend(&input, 0, 120, "react and vue with docker"), first);
        }
    }
}

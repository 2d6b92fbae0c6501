//! Landing page copy.
//!
//! `ContentData` holds every string shown on the page, grouped into eight
//! top-level sections. The built-in copy is returned by `ContentData::builtin()`
//! and handed to the UI as a plain value.
//!
//! ## Overrides
//!
//! A `ContentOverride` carries any subset of the sections. Merging is shallow:
//! an overridden section replaces the built-in one wholesale, and fields left
//! out of an overridden section deserialize to empty values instead of falling
//! back to the built-in copy.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// A call-to-action button.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CtaButton {
    pub text: String,
    pub url: String,
}

impl CtaButton {
    fn new(text: &str, url: &str) -> Self {
        Self {
            text: text.to_string(),
            url: url.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PainPoint {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Benefit {
    pub title: String,
    pub description: String,
}

/// One step of the "how it works" explainer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Step {
    pub number: u32,
    pub title: String,
    pub description: String,
    /// Optional code sample shown under the description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Optional time-to-complete badge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stat {
    pub metric: String,
    pub label: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Spec {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hero {
    pub headline: String,
    pub subheadline: String,
    pub description: String,
    pub cta_primary: CtaButton,
    pub cta_secondary: CtaButton,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProblemSection {
    pub eyebrow: String,
    pub title: String,
    pub description: String,
    pub pain_points: Vec<PainPoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolutionSection {
    pub eyebrow: String,
    pub title: String,
    pub description: String,
    pub benefits: Vec<Benefit>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HowItWorks {
    pub title: String,
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Proof {
    pub title: String,
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub company: String,
    pub metric: String,
    pub metric_label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TechSpecs {
    pub title: String,
    pub specs: Vec<Spec>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinalCta {
    pub title: String,
    pub description: String,
    pub cta_primary: CtaButton,
    pub cta_secondary: CtaButton,
}

/// All copy rendered by the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentData {
    pub hero: Hero,
    pub problem_section: ProblemSection,
    pub solution_section: SolutionSection,
    pub how_it_works: HowItWorks,
    pub proof: Proof,
    pub testimonial: Testimonial,
    pub tech_specs: TechSpecs,
    pub final_cta: FinalCta,
}

/// Partial content: any section left as `None` keeps the default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContentOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero: Option<Hero>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problem_section: Option<ProblemSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution_section: Option<SolutionSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub how_it_works: Option<HowItWorks>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proof: Option<Proof>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub testimonial: Option<Testimonial>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tech_specs: Option<TechSpecs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_cta: Option<FinalCta>,
}

impl ContentOverride {
    /// Parses an override from TOML.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Failed to parse content override as TOML")
    }

    /// Parses an override from JSON.
    pub fn from_json_str(contents: &str) -> Result<Self> {
        serde_json::from_str(contents).context("Failed to parse content override as JSON")
    }

    /// Loads an override file. `.json` files are read as JSON, everything else as TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read content override {}", path.display()))?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let parsed = if is_json {
            Self::from_json_str(&contents)
        } else {
            Self::from_toml_str(&contents)
        };
        parsed.with_context(|| format!("Invalid content override {}", path.display()))
    }

    /// Returns true if no section is overridden.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Layers `self` over `lower`: sections set here win, the rest come from `lower`.
    pub fn or(self, lower: ContentOverride) -> ContentOverride {
        ContentOverride {
            hero: self.hero.or(lower.hero),
            problem_section: self.problem_section.or(lower.problem_section),
            solution_section: self.solution_section.or(lower.solution_section),
            how_it_works: self.how_it_works.or(lower.how_it_works),
            proof: self.proof.or(lower.proof),
            testimonial: self.testimonial.or(lower.testimonial),
            tech_specs: self.tech_specs.or(lower.tech_specs),
            final_cta: self.final_cta.or(lower.final_cta),
        }
    }

    /// Names of the sections this override replaces, in page order.
    pub fn section_names(&self) -> Vec<&'static str> {
        [
            ("hero", self.hero.is_some()),
            ("problem_section", self.problem_section.is_some()),
            ("solution_section", self.solution_section.is_some()),
            ("how_it_works", self.how_it_works.is_some()),
            ("proof", self.proof.is_some()),
            ("testimonial", self.testimonial.is_some()),
            ("tech_specs", self.tech_specs.is_some()),
            ("final_cta", self.final_cta.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, set)| set.then_some(name))
        .collect()
    }
}

impl ContentData {
    /// Merges `overrides` over `defaults`, one top-level section at a time.
    pub fn merge(defaults: ContentData, overrides: ContentOverride) -> ContentData {
        let ContentOverride {
            hero,
            problem_section,
            solution_section,
            how_it_works,
            proof,
            testimonial,
            tech_specs,
            final_cta,
        } = overrides;

        ContentData {
            hero: hero.unwrap_or(defaults.hero),
            problem_section: problem_section.unwrap_or(defaults.problem_section),
            solution_section: solution_section.unwrap_or(defaults.solution_section),
            how_it_works: how_it_works.unwrap_or(defaults.how_it_works),
            proof: proof.unwrap_or(defaults.proof),
            testimonial: testimonial.unwrap_or(defaults.testimonial),
            tech_specs: tech_specs.unwrap_or(defaults.tech_specs),
            final_cta: final_cta.unwrap_or(defaults.final_cta),
        }
    }

    /// Built-in copy with an optional override applied.
    pub fn with_overrides(overrides: Option<ContentOverride>) -> ContentData {
        match overrides {
            Some(overrides) => Self::merge(Self::builtin(), overrides),
            None => Self::builtin(),
        }
    }

    /// The built-in page copy.
    #[allow(clippy::too_many_lines)]
    pub fn builtin() -> ContentData {
        ContentData {
            hero: Hero {
                headline: "Stop agent sprawl.".to_string(),
                subheadline: "Control data at the source.".to_string(),
                description: "Replace dozens of single-purpose agents with one unified platform. \
                              Deploy to any infrastructure with policy-driven pipelines that \
                              self-heal - so you can build instead of maintain."
                    .to_string(),
                cta_primary: CtaButton::new("Start Free Trial", "https://exso.cloud/get-started"),
                cta_secondary: CtaButton::new("See How It Works", "#how-it-works"),
            },
            problem_section: ProblemSection {
                eyebrow: "The Problem".to_string(),
                title: "Your infrastructure is buried in agents.".to_string(),
                description: "Every tool brings its own agent. Every team writes custom scripts. \
                              You spend your nights fixing pipelines instead of shipping features."
                    .to_string(),
                pain_points: vec![
                    pain_point(
                        "Splunk forwarders everywhere",
                        "One per node, custom configs, constant updates",
                    ),
                    pain_point(
                        "Fluentd for Kubernetes logs",
                        "YAML nightmares, version drift, debugging hell",
                    ),
                    pain_point(
                        "Custom scripts for compliance",
                        "Brittle Python, unknown authors, 2 AM pages",
                    ),
                    pain_point(
                        "Manual policy enforcement",
                        "Tickets, approvals, meetings - just to move data",
                    ),
                ],
            },
            solution_section: SolutionSection {
                eyebrow: "The Solution".to_string(),
                title: "One agent. Everywhere.".to_string(),
                description: "Expanso Edge replaces your patchwork of tools with a single, \
                              policy-driven platform. Deploy to cloud, on-prem, edge, or \
                              Kubernetes - one agent, one config, total visibility."
                    .to_string(),
                benefits: vec![
                    benefit(
                        "One Agent Replaces Many",
                        "Splunk forwarders, Fluentd, Vector, custom scripts - all replaced by \
                         one lightweight agent.",
                    ),
                    benefit(
                        "Policy-Driven, Not Code-Heavy",
                        "Declarative YAML configs that version in Git. No more brittle scripts.",
                    ),
                    benefit(
                        "Built-In Governance",
                        "Audit trails, data lineage, and compliance enforcement - automatic \
                         from day one.",
                    ),
                    benefit(
                        "Self-Healing Pipelines",
                        "Automatic retries, intelligent backpressure, no data loss. Sleep \
                         through the night.",
                    ),
                ],
            },
            how_it_works: HowItWorks {
                title: "From chaos to control in minutes".to_string(),
                steps: vec![
                    Step {
                        number: 1,
                        title: "Deploy the Agent".to_string(),
                        description: "One command installs Expanso Edge anywhere - cloud VMs, \
                                      Kubernetes, edge devices, or on-prem servers."
                            .to_string(),
                        code: Some(
                            "curl -fsSL https://get.expanso.io/edge/install.sh | bash\n\
                             expanso-edge bootstrap --token YOUR_TOKEN"
                                .to_string(),
                        ),
                        time: Some("< 2 minutes".to_string()),
                    },
                    Step {
                        number: 2,
                        title: "Define Your Pipeline".to_string(),
                        description: "Write pipelines as code. Transform data with Bloblang, \
                                      filter noise, route to any destination - all \
                                      version-controlled in Git."
                            .to_string(),
                        code: Some(PIPELINE_SAMPLE.to_string()),
                        time: Some("5 minutes".to_string()),
                    },
                    Step {
                        number: 3,
                        title: "Watch Data Flow".to_string(),
                        description: "See filtered, governed data arrive at S3, Snowflake, \
                                      Kafka, or any destination - with full audit trails."
                            .to_string(),
                        code: None,
                        time: Some("Real-time".to_string()),
                    },
                ],
            },
            proof: Proof {
                title: "What changes when you stop the sprawl".to_string(),
                stats: vec![
                    stat(
                        "70%",
                        "Less maintenance",
                        "One agent to update, one config to manage",
                    ),
                    stat(
                        "50-70%",
                        "Lower data costs",
                        "Filter at source, pay for less downstream",
                    ),
                    stat("Minutes", "To deploy", "Not weeks of scripting and testing"),
                ],
            },
            testimonial: Testimonial {
                quote: "We replaced six different agents with Expanso. My team went from \
                        spending 40% of their time on pipeline maintenance to building actual \
                        features."
                    .to_string(),
                author: "Senior Platform Engineer".to_string(),
                company: "Fortune 500 Retailer".to_string(),
                metric: "40% -> 5%".to_string(),
                metric_label: "Time on maintenance".to_string(),
            },
            tech_specs: TechSpecs {
                title: "Built for scale".to_string(),
                specs: vec![
                    spec("10,000+", "Nodes per cluster"),
                    spec("< 30 seconds", "Config propagation"),
                    spec("200+", "Connectors"),
                    spec("99.9%", "Uptime SLA"),
                ],
            },
            final_cta: FinalCta {
                title: "Ready to stop maintaining and start building?".to_string(),
                description: "Start free. Deploy in minutes. No credit card required.".to_string(),
                cta_primary: CtaButton::new("Start Free Trial", "https://exso.cloud/get-started"),
                cta_secondary: CtaButton::new("Talk to an Engineer", "/book-a-demo"),
            },
        }
    }
}

impl Default for ContentData {
    fn default() -> Self {
        Self::builtin()
    }
}

const PIPELINE_SAMPLE: &str = r#"input:
  file:
    paths: ["/var/log/app/*.log"]
pipeline:
  processors:
    - mapping: |
        root = if this.level == "ERROR" { this }
        else { deleted() }
output:
  aws_s3:
    bucket: processed-logs
    path: logs/${!timestamp_unix()}.json"#;

fn pain_point(title: &str, description: &str) -> PainPoint {
    PainPoint {
        title: title.to_string(),
        description: description.to_string(),
    }
}

fn benefit(title: &str, description: &str) -> Benefit {
    Benefit {
        title: title.to_string(),
        description: description.to_string(),
    }
}

fn stat(metric: &str, label: &str, description: &str) -> Stat {
    Stat {
        metric: metric.to_string(),
        label: label.to_string(),
        description: description.to_string(),
    }
}

fn spec(value: &str, label: &str) -> Spec {
    Spec {
        value: value.to_string(),
        label: label.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_override_reproduces_defaults() {
        assert_eq!(ContentData::with_overrides(None), ContentData::builtin());
        assert_eq!(
            ContentData::merge(ContentData::builtin(), ContentOverride::default()),
            ContentData::builtin()
        );
    }

    #[test]
    fn test_single_section_override_leaves_others() {
        let hero = Hero {
            headline: "Different headline".to_string(),
            ..Hero::default()
        };
        let merged = ContentData::with_overrides(Some(ContentOverride {
            hero: Some(hero.clone()),
            ..ContentOverride::default()
        }));
        let defaults = ContentData::builtin();

        assert_eq!(merged.hero, hero);
        assert_eq!(merged.problem_section, defaults.problem_section);
        assert_eq!(merged.solution_section, defaults.solution_section);
        assert_eq!(merged.how_it_works, defaults.how_it_works);
        assert_eq!(merged.proof, defaults.proof);
        assert_eq!(merged.testimonial, defaults.testimonial);
        assert_eq!(merged.tech_specs, defaults.tech_specs);
        assert_eq!(merged.final_cta, defaults.final_cta);
    }

    #[test]
    fn test_override_is_shallow() {
        let overrides = ContentOverride::from_toml_str(
            r#"
            [hero]
            headline = "Only the headline"
            "#,
        )
        .unwrap();
        let merged = ContentData::with_overrides(Some(overrides));

        assert_eq!(merged.hero.headline, "Only the headline");
        // Missing nested fields do not fall back to the built-in copy.
        assert_eq!(merged.hero.subheadline, "");
        assert_eq!(merged.hero.cta_primary, CtaButton::default());
    }

    #[test]
    fn test_override_from_json() {
        let overrides = ContentOverride::from_json_str(
            r#"{"tech_specs": {"title": "Specs", "specs": [{"value": "1", "label": "One"}]}}"#,
        )
        .unwrap();
        assert_eq!(overrides.section_names(), vec!["tech_specs"]);
        let specs = overrides.tech_specs.unwrap();
        assert_eq!(specs.specs, vec![spec("1", "One")]);
    }

    #[test]
    fn test_unknown_section_is_rejected() {
        assert!(ContentOverride::from_toml_str("[footer]\ntitle = \"x\"\n").is_err());
    }

    #[test]
    fn test_override_layering() {
        let upper = ContentOverride {
            proof: Some(Proof {
                title: "upper".to_string(),
                stats: Vec::new(),
            }),
            ..ContentOverride::default()
        };
        let lower = ContentOverride {
            proof: Some(Proof {
                title: "lower".to_string(),
                stats: Vec::new(),
            }),
            testimonial: Some(Testimonial::default()),
            ..ContentOverride::default()
        };

        let layered = upper.or(lower);
        assert_eq!(layered.proof.unwrap().title, "upper");
        assert!(layered.testimonial.is_some());
        assert!(layered.hero.is_none());
    }

    #[test]
    fn test_load_picks_format_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let json_path = dir.path().join("content.json");
        fs::write(&json_path, r#"{"final_cta": {"title": "Go"}}"#).unwrap();
        let toml_path = dir.path().join("content.toml");
        fs::write(&toml_path, "[final_cta]\ntitle = \"Go\"\n").unwrap();

        let from_json = ContentOverride::load(&json_path).unwrap();
        let from_toml = ContentOverride::load(&toml_path).unwrap();
        assert_eq!(from_json, from_toml);
        assert!(!from_json.is_empty());
    }

    #[test]
    fn test_builtin_round_trips_through_toml() {
        let content = ContentData::builtin();
        let text = toml::to_string(&content).unwrap();
        let parsed: ContentData = toml::from_str(&text).unwrap();
        assert_eq!(parsed, content);
    }
}

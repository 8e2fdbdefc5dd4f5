//! The playbook catalog.
//!
//! Pure data: per-document content records plus the shared market-stat
//! table and source list. The catalog never draws anything itself; the
//! composers in [`crate::compose`] turn records into pages.
//!
//! A built-in catalog ships with the crate and an external one can be
//! loaded from JSON with the same record shapes.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One phase of a learning pathway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    /// Phase title, e.g. "Phase 1: Executive alignment"
    pub title: String,
    /// What the phase concentrates on
    pub focus: String,
    /// Calendar span, e.g. "Weeks 1-2"
    pub duration: String,
}

/// A role-based training track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cohort {
    /// Audience name
    pub title: String,
    /// One-line description of the track
    pub summary: String,
    /// Courses in the track
    pub courses: Vec<String>,
}

/// One step of the 90-day activation plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanStep {
    /// Step title, e.g. "Weeks 1-2: Readiness"
    pub title: String,
    /// What the step concentrates on
    pub focus: String,
    /// What the step produces
    pub deliverables: String,
}

/// A market statistic shown on the signals page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    /// Headline number, e.g. "60%"
    pub value: String,
    /// What the number measures
    pub label: String,
    /// Publication the number comes from
    pub source: String,
}

/// Content record for one generated document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playbook {
    /// Output file stem
    pub slug: String,
    /// Cover title
    pub title: String,
    /// Cover subtitle
    pub subtitle: String,
    /// Vendor name shown on the cover
    pub vendor: String,
    /// Industry shown on the cover
    pub industry: String,
    /// 6-hex-digit accent color token
    pub accent: String,
    /// Cover highlights
    pub highlights: Vec<String>,
    /// Two executive summary paragraphs
    pub exec_summary: Vec<String>,
    /// Outcome bullets
    pub outcomes: Vec<String>,
    /// Strategic use cases
    pub use_cases: Vec<String>,
    /// Capability map: people column
    pub capability_people: Vec<String>,
    /// Capability map: process column
    pub capability_process: Vec<String>,
    /// Capability map: platform column
    pub capability_platform: Vec<String>,
    /// Vendor accelerators
    pub accelerators: Vec<String>,
    /// Learning pathway phases
    pub learning_path: Vec<Phase>,
    /// Role-based cohorts
    pub cohorts: Vec<Cohort>,
    /// 90-day plan steps
    pub plan: Vec<PlanStep>,
    /// KPI scorecard entries
    pub kpis: Vec<String>,
}

/// A complete catalog: playbooks plus the shared stats and sources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Document records, one per output file
    pub playbooks: Vec<Playbook>,
    /// Market statistics shared by every document
    pub stats: Vec<Stat>,
    /// Citation list shared by every document
    pub sources: Vec<String>,
}

impl Catalog {
    /// Load a catalog from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// The catalog shipped with the crate.
    pub fn builtin() -> Self {
        Self {
            playbooks: builtin_playbooks(),
            stats: builtin_stats(),
            sources: builtin_sources(),
        }
    }
}

fn strs(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn phase(title: &str, focus: &str, duration: &str) -> Phase {
    Phase { title: title.into(), focus: focus.into(), duration: duration.into() }
}

fn cohort(title: &str, summary: &str, courses: &[&str]) -> Cohort {
    Cohort { title: title.into(), summary: summary.into(), courses: strs(courses) }
}

fn step(title: &str, focus: &str, deliverables: &str) -> PlanStep {
    PlanStep { title: title.into(), focus: focus.into(), deliverables: deliverables.into() }
}

fn builtin_stats() -> Vec<Stat> {
    let stat = |value: &str, label: &str, source: &str| Stat {
        value: value.into(),
        label: label.into(),
        source: source.into(),
    };
    vec![
        stat(
            "60%",
            "of workers require training by 2027",
            "World Economic Forum Future of Jobs 2023",
        ),
        stat(
            "44%",
            "of worker skills will be disrupted in the next five years",
            "World Economic Forum Future of Jobs 2023",
        ),
        stat(
            "78%",
            "of organizations use AI in at least one function",
            "McKinsey State of AI 2024",
        ),
        stat(
            "71%",
            "of organizations use generative AI in at least one function",
            "McKinsey State of AI 2024",
        ),
        stat("$675B", "public cloud spend forecast in 2024", "Gartner 2024 cloud spending forecast"),
        stat("$4.88M", "average cost of a data breach", "IBM Cost of a Data Breach 2024"),
    ]
}

fn builtin_sources() -> Vec<String> {
    strs(&[
        "World Economic Forum, Future of Jobs 2023: https://www.weforum.org/publications/the-future-of-jobs-report-2023/digest/",
        "McKinsey, State of AI 2024: https://www.mckinsey.com/capabilities/quantumblack/our-insights/the-state-of-ai",
        "Gartner, Worldwide Public Cloud End-User Spending 2024-2025: https://www.gartner.com/en/newsroom/press-releases/2024-04-03-gartner-forecasts-worldwide-public-cloud-end-user-spending-to-reach-675-billion-in-2024",
        "IBM, Cost of a Data Breach 2024: https://www.ibm.com/reports/data-breach",
        "PwC, 2025 AI Jobs Barometer: https://www.pwc.com/gx/en/issues/artificial-intelligence/ai-jobs-barometer.html",
    ])
}

fn builtin_playbooks() -> Vec<Playbook> {
    vec![
        Playbook {
            slug: "microsoft-healthcare-ai-playbook".into(),
            title: "Microsoft Cloud + AI in Healthcare".into(),
            subtitle: "Clinical workflows, secure data, and measurable patient outcomes".into(),
            vendor: "Microsoft".into(),
            industry: "Healthcare".into(),
            accent: "#ff9100".into(),
            highlights: strs(&[
                "Reduce clinical admin time with Power Platform automation",
                "Accelerate analytics with Azure data and AI services",
                "Embed responsible AI governance into care delivery",
            ]),
            exec_summary: strs(&[
                "Healthcare leaders are facing rising demand, tighter margins, and increasing data complexity. The most successful systems are investing in AI-enabled workflows that reduce administrative burden while improving patient outcomes.",
                "This playbook maps Microsoft cloud capabilities to healthcare priorities and outlines the learning pathway required to deliver measurable ROI within 90 days.",
            ]),
            outcomes: strs(&[
                "Shorter time-to-chart and faster care coordination",
                "Secure data sharing across clinics and partners",
                "AI-ready workforce with accountable governance",
            ]),
            use_cases: strs(&[
                "Clinical workflow automation with Power Platform",
                "Patient access and scheduling optimization",
                "Revenue cycle analytics and claims insights",
                "AI-powered triage and care navigation",
            ]),
            capability_people: strs(&[
                "Clinical operations leaders",
                "Data stewards",
                "IT security team",
            ]),
            capability_process: strs(&[
                "Clinical workflow redesign",
                "Data governance",
                "Change management",
            ]),
            capability_platform: strs(&["Power Platform", "Azure AI", "Microsoft Fabric"]),
            accelerators: strs(&[
                "Healthcare data model",
                "Responsible AI labs",
                "Compliance mapping toolkit",
            ]),
            learning_path: vec![
                phase("Phase 1: Executive alignment", "AI strategy, governance, KPI design", "Weeks 1-2"),
                phase("Phase 2: Skills build", "Power Platform + Azure AI practitioner labs", "Weeks 3-6"),
                phase("Phase 3: Deployment", "Pilot workflows, scale playbooks", "Weeks 7-12"),
            ],
            cohorts: vec![
                cohort(
                    "Executives",
                    "Strategy, governance, and ROI alignment",
                    &["AI leadership briefing", "Healthcare compliance for AI", "Azure strategy workshop"],
                ),
                cohort(
                    "Functional leaders",
                    "Workflow redesign and data readiness",
                    &["Power Platform automation", "Data stewardship", "AI risk management"],
                ),
                cohort(
                    "Practitioners",
                    "Hands-on delivery labs",
                    &["Power Apps labs", "Azure AI services", "Secure data pipelines"],
                ),
            ],
            plan: vec![
                step("Weeks 1-2: Readiness", "Define priority workflows and success metrics", "Use-case shortlist, KPI baseline"),
                step("Weeks 3-6: Enable", "Launch role-based learning cohorts", "Cohort completion, pilot backlog"),
                step("Weeks 7-12: Launch", "Deploy pilot workflows and measure outcomes", "ROI dashboard, scale roadmap"),
            ],
            kpis: strs(&[
                "Workflow cycle time reduction",
                "Patient throughput and satisfaction lift",
                "Security compliance score",
                "AI adoption rate by role",
                "Time-to-insight for clinical analytics",
            ]),
        },
        Playbook {
            slug: "aws-financial-services-modernization".into(),
            title: "AWS for Financial Services Modernization".into(),
            subtitle: "Risk-aware migration, data governance, and AI-led customer insight".into(),
            vendor: "AWS".into(),
            industry: "Financial Services".into(),
            accent: "#dd2c00".into(),
            highlights: strs(&[
                "Modernize core systems with regulated cloud playbooks",
                "Improve fraud and risk detection with AI-led analytics",
                "Enable secure data sharing across business units",
            ]),
            exec_summary: strs(&[
                "Financial institutions need modernization without compromising regulatory requirements. The most effective leaders pair cloud adoption with rigorous governance and role-based enablement.",
                "This playbook outlines the learning, security, and operational steps required to modernize at speed while maintaining compliance and trust.",
            ]),
            outcomes: strs(&[
                "Faster product release cycles",
                "Improved fraud detection and risk modeling",
                "Audit-ready cloud governance",
            ]),
            use_cases: strs(&[
                "Cloud-native data lake and analytics modernization",
                "Fraud detection and real-time risk scoring",
                "KYC automation and onboarding acceleration",
                "Regulatory reporting automation",
            ]),
            capability_people: strs(&[
                "Risk leaders",
                "Security architects",
                "Data engineering team",
            ]),
            capability_process: strs(&[
                "Regulatory controls",
                "Model risk governance",
                "Cloud migration sprints",
            ]),
            capability_platform: strs(&["AWS security services", "AWS analytics", "ML foundations"]),
            accelerators: strs(&[
                "Financial services landing zone",
                "AI risk scorecards",
                "Security control library",
            ]),
            learning_path: vec![
                phase("Phase 1: Governance", "Risk assessment and cloud control alignment", "Weeks 1-2"),
                phase("Phase 2: Build", "AWS analytics + security labs", "Weeks 3-6"),
                phase("Phase 3: Launch", "Pilot models and production readiness", "Weeks 7-12"),
            ],
            cohorts: vec![
                cohort(
                    "Executives",
                    "Risk-aware modernization strategy",
                    &["AWS executive briefing", "Regulatory readiness", "AI governance"],
                ),
                cohort(
                    "Risk & compliance",
                    "Control mapping and audit readiness",
                    &["Cloud risk management", "Security controls", "Model risk management"],
                ),
                cohort(
                    "Practitioners",
                    "Hands-on modernization delivery",
                    &["AWS data engineering", "Security automation", "ML practitioner labs"],
                ),
            ],
            plan: vec![
                step("Weeks 1-2: Assess", "Risk baseline and priority workloads", "Risk register, migration roadmap"),
                step("Weeks 3-6: Enable", "Cohort training and pilot build", "Data platform pilot, compliance sign-off"),
                step("Weeks 7-12: Scale", "Launch use cases and measure impact", "Fraud KPI dashboard, scale plan"),
            ],
            kpis: strs(&[
                "Fraud detection precision",
                "Customer onboarding time",
                "Audit readiness score",
                "Cloud cost-to-value ratio",
                "Model risk exception rate",
            ]),
        },
        Playbook {
            slug: "google-retail-growth".into(),
            title: "Google Cloud for Retail Growth".into(),
            subtitle: "Personalization, demand forecasting, and omnichannel acceleration".into(),
            vendor: "Google Cloud".into(),
            industry: "Retail".into(),
            accent: "#ff9100".into(),
            highlights: strs(&[
                "Increase conversion through AI personalization",
                "Improve demand forecasting and inventory turns",
                "Unify omnichannel customer journeys",
            ]),
            exec_summary: strs(&[
                "Retail leaders are balancing margin pressure with customer expectations for personalization. Modern analytics and AI enable smarter inventory planning and more relevant experiences.",
                "This playbook outlines the learning path required to scale Google Cloud analytics and AI across merchandising, supply chain, and customer experience teams.",
            ]),
            outcomes: strs(&[
                "Higher conversion and basket size",
                "Reduced stockouts and overstocks",
                "Improved omnichannel visibility",
            ]),
            use_cases: strs(&[
                "Demand forecasting with Vertex AI",
                "Personalized recommendations at scale",
                "Inventory optimization and markdown planning",
                "Customer segmentation and loyalty analytics",
            ]),
            capability_people: strs(&[
                "Merchandising leaders",
                "Data analysts",
                "Digital product owners",
            ]),
            capability_process: strs(&[
                "Merchandising analytics",
                "Inventory governance",
                "Experimentation cadence",
            ]),
            capability_platform: strs(&["BigQuery", "Vertex AI", "Looker"]),
            accelerators: strs(&[
                "Retail data model",
                "Forecasting templates",
                "Experimentation playbooks",
            ]),
            learning_path: vec![
                phase("Phase 1: Strategy", "Retail analytics roadmap", "Weeks 1-2"),
                phase("Phase 2: Build", "BigQuery + Looker enablement", "Weeks 3-6"),
                phase("Phase 3: Scale", "AI personalization pilots", "Weeks 7-12"),
            ],
            cohorts: vec![
                cohort(
                    "Executives",
                    "Growth strategy and KPI alignment",
                    &["AI retail strategy", "Data governance", "Customer analytics"],
                ),
                cohort(
                    "Functional leaders",
                    "Merchandising and CX analytics",
                    &["BigQuery analytics", "Looker storytelling", "Forecasting labs"],
                ),
                cohort(
                    "Practitioners",
                    "Hands-on data and AI delivery",
                    &["Vertex AI labs", "Data pipelines", "Experiment design"],
                ),
            ],
            plan: vec![
                step("Weeks 1-2: Discover", "Map customer journeys and data gaps", "Use-case shortlist, data audit"),
                step("Weeks 3-6: Enable", "Build analytics foundations", "Forecasting MVP, KPI baseline"),
                step("Weeks 7-12: Launch", "Personalization pilot", "Revenue lift dashboard, scale plan"),
            ],
            kpis: strs(&[
                "Conversion rate lift",
                "Inventory turnover",
                "Forecast accuracy",
                "Customer lifetime value",
                "Omnichannel fulfillment time",
            ]),
        },
        Playbook {
            slug: "cisco-public-sector".into(),
            title: "Cisco Secure Networks for Public Sector".into(),
            subtitle: "Resilient infrastructure, zero trust adoption, and mission readiness".into(),
            vendor: "Cisco".into(),
            industry: "Public Sector".into(),
            accent: "#34a853".into(),
            highlights: strs(&[
                "Establish zero trust access across agencies",
                "Improve resilience and uptime for mission-critical systems",
                "Scale secure remote workforce enablement",
            ]),
            exec_summary: strs(&[
                "Public sector agencies face rising security threats and a growing demand for digital services. Zero trust and resilient network operations are now critical for mission continuity.",
                "This playbook outlines how Cisco security and networking enablement can deliver measurable risk reduction within a single quarter.",
            ]),
            outcomes: strs(&[
                "Reduced incident response time",
                "Improved network uptime",
                "Standardized security governance",
            ]),
            use_cases: strs(&[
                "Zero trust access and identity governance",
                "Network segmentation for critical systems",
                "Secure remote workforce enablement",
                "SOC modernization and threat response",
            ]),
            capability_people: strs(&[
                "Security leaders",
                "Network operators",
                "Compliance officers",
            ]),
            capability_process: strs(&[
                "Threat response playbooks",
                "Access governance",
                "Risk assessments",
            ]),
            capability_platform: strs(&["Cisco security", "Network automation", "SOC tooling"]),
            accelerators: strs(&[
                "Zero trust blueprint",
                "Incident response labs",
                "Compliance mapping",
            ]),
            learning_path: vec![
                phase("Phase 1: Assess", "Risk posture and access control review", "Weeks 1-2"),
                phase("Phase 2: Enable", "Security + networking labs", "Weeks 3-6"),
                phase("Phase 3: Deploy", "Zero trust pilot rollout", "Weeks 7-12"),
            ],
            cohorts: vec![
                cohort(
                    "Executives",
                    "Mission readiness and risk alignment",
                    &["Cyber resilience briefing", "Zero trust leadership", "Public sector governance"],
                ),
                cohort(
                    "Security leaders",
                    "Security operations and compliance",
                    &["Cisco security labs", "Incident response", "Compliance reporting"],
                ),
                cohort(
                    "Practitioners",
                    "Network operations enablement",
                    &["Network automation", "Secure access labs", "Threat detection"],
                ),
            ],
            plan: vec![
                step("Weeks 1-2: Baseline", "Security and network assessment", "Risk dashboard, access map"),
                step("Weeks 3-6: Enable", "Cohort training and pilot security controls", "Pilot zero trust policies"),
                step("Weeks 7-12: Rollout", "Scale secure access", "Operational KPIs, response plan"),
            ],
            kpis: strs(&[
                "Mean time to detect",
                "Mean time to respond",
                "Zero trust policy coverage",
                "Network uptime",
                "Compliance audit score",
            ]),
        },
        Playbook {
            slug: "pmi-manufacturing-portfolio".into(),
            title: "PMI Portfolio Management in Manufacturing".into(),
            subtitle: "Capital efficiency, plant modernization, and delivery governance".into(),
            vendor: "PMI".into(),
            industry: "Manufacturing".into(),
            accent: "#ff9100".into(),
            highlights: strs(&[
                "Prioritize modernization investments with portfolio scoring",
                "Improve delivery governance across plants",
                "Align leadership on value-based initiatives",
            ]),
            exec_summary: strs(&[
                "Manufacturers face pressure to modernize plants while controlling capital spend. Portfolio management discipline ensures investments align to strategic outcomes.",
                "This playbook outlines how PMI-based governance and training helps leaders deliver modernization programs on time and on budget.",
            ]),
            outcomes: strs(&[
                "Higher ROI per modernization initiative",
                "Reduced delivery variance",
                "Improved resource utilization",
            ]),
            use_cases: strs(&[
                "Portfolio scoring for modernization initiatives",
                "Agile delivery for plant upgrades",
                "Risk mitigation for supply chain investments",
                "Operational readiness reviews",
            ]),
            capability_people: strs(&["PMO leaders", "Plant managers", "Program directors"]),
            capability_process: strs(&[
                "Portfolio governance",
                "Stage gate reviews",
                "Change control",
            ]),
            capability_platform: strs(&["PMI standards", "Agile delivery", "Risk management"]),
            accelerators: strs(&[
                "Portfolio scorecards",
                "Agile governance toolkit",
                "Executive dashboards",
            ]),
            learning_path: vec![
                phase("Phase 1: Align", "Portfolio assessment and prioritization", "Weeks 1-2"),
                phase("Phase 2: Enable", "PMI + agile delivery training", "Weeks 3-6"),
                phase("Phase 3: Execute", "Launch modernization programs", "Weeks 7-12"),
            ],
            cohorts: vec![
                cohort(
                    "Executives",
                    "Capital allocation and governance",
                    &["Portfolio strategy", "Value management", "Risk governance"],
                ),
                cohort(
                    "Program leaders",
                    "Delivery and change management",
                    &["PMI program management", "Agile plant upgrades", "Risk monitoring"],
                ),
                cohort(
                    "Practitioners",
                    "Execution excellence",
                    &["PMI basics", "Operational project tools", "Metrics reporting"],
                ),
            ],
            plan: vec![
                step("Weeks 1-2: Diagnose", "Portfolio health and ROI baseline", "Portfolio map, value gaps"),
                step("Weeks 3-6: Enable", "Train program leads and PMO", "Governance cadence, playbooks"),
                step("Weeks 7-12: Deliver", "Execute top modernization programs", "Delivery dashboards, KPI tracking"),
            ],
            kpis: strs(&[
                "Portfolio ROI",
                "Schedule variance",
                "Capital efficiency",
                "Resource utilization",
                "Risk exposure",
            ]),
        },
        Playbook {
            slug: "ai-certs-workforce-literacy".into(),
            title: "AI Certs for Workforce Literacy".into(),
            subtitle: "Enterprise-wide AI fluency for every business unit".into(),
            vendor: "AI Certs".into(),
            industry: "Enterprise Workforce".into(),
            accent: "#dd2c00".into(),
            highlights: strs(&[
                "Build AI fluency across the enterprise",
                "Accelerate adoption with role-based learning",
                "Reduce AI risk with responsible AI training",
            ]),
            exec_summary: strs(&[
                "AI is moving into every business function, but most employees lack shared language and confidence. AI Certs provides role-based learning to build workforce readiness quickly.",
                "This playbook outlines how to design a scalable AI literacy initiative that aligns with business priorities and governance expectations.",
            ]),
            outcomes: strs(&[
                "Higher AI adoption rates",
                "Reduced AI risk exposure",
                "Improved productivity in core workflows",
            ]),
            use_cases: strs(&[
                "AI literacy for sales, marketing, and ops",
                "Prompt engineering enablement",
                "Responsible AI policy awareness",
                "AI-assisted workflow automation",
            ]),
            capability_people: strs(&["L&D leaders", "Business unit leaders", "AI champions"]),
            capability_process: strs(&[
                "Role-based learning",
                "AI usage guidelines",
                "Change communications",
            ]),
            capability_platform: strs(&[
                "AI Certs curriculum",
                "Live instructor-led labs",
                "Assessment engine",
            ]),
            accelerators: strs(&[
                "AI skills baseline",
                "Prompt libraries",
                "Responsible AI toolkits",
            ]),
            learning_path: vec![
                phase("Phase 1: Baseline", "Assess AI fluency and gaps", "Weeks 1-2"),
                phase("Phase 2: Enable", "Role-based AI Certs cohorts", "Weeks 3-6"),
                phase("Phase 3: Adopt", "Embed AI in workflows", "Weeks 7-12"),
            ],
            cohorts: vec![
                cohort(
                    "Executives",
                    "Governance, policy, and ROI",
                    &["AI strategy", "Responsible AI", "KPI design"],
                ),
                cohort(
                    "Managers",
                    "Workflow adoption and enablement",
                    &["AI productivity", "Prompt engineering", "Change management"],
                ),
                cohort(
                    "Practitioners",
                    "Hands-on AI usage",
                    &["AI fundamentals", "Prompt labs", "AI safety"],
                ),
            ],
            plan: vec![
                step("Weeks 1-2: Diagnose", "AI skills baseline and priority roles", "Skills heatmap"),
                step("Weeks 3-6: Enable", "Cohort learning and labs", "Completion reports, prompts library"),
                step("Weeks 7-12: Embed", "Workflow adoption and measurement", "Adoption dashboard, ROI story"),
            ],
            kpis: strs(&[
                "AI literacy score",
                "Prompt usage rate",
                "Productivity lift",
                "Responsible AI compliance",
                "Adoption by business unit",
            ]),
        },
        Playbook {
            slug: "adoptify-ai-governance".into(),
            title: "Adoptify AI Governance Blueprint".into(),
            subtitle: "Policy, operating model, and safe AI scale-up".into(),
            vendor: "Adoptify AI".into(),
            industry: "Regulated Enterprises".into(),
            accent: "#34a853".into(),
            highlights: strs(&[
                "Establish enterprise AI governance",
                "Build model risk and approval workflows",
                "Align stakeholders on safe AI scale-up",
            ]),
            exec_summary: strs(&[
                "As AI adoption accelerates, leaders need a governance model that balances innovation with control. Adoptify AI provides the frameworks and training to scale safely.",
                "This playbook outlines the learning and operating model required to establish AI governance across regulated teams.",
            ]),
            outcomes: strs(&[
                "Clear AI approval workflows",
                "Reduced compliance risk",
                "Faster time-to-approval",
            ]),
            use_cases: strs(&[
                "AI policy and risk framework design",
                "Model registry and approval workflows",
                "Audit-ready AI documentation",
                "Cross-functional governance councils",
            ]),
            capability_people: strs(&[
                "Risk leaders",
                "Legal and compliance",
                "AI product owners",
            ]),
            capability_process: strs(&[
                "AI policy governance",
                "Model risk management",
                "Approval workflows",
            ]),
            capability_platform: strs(&[
                "Adoptify AI tooling",
                "Policy libraries",
                "Audit dashboards",
            ]),
            accelerators: strs(&[
                "AI policy templates",
                "Risk scoring models",
                "Governance maturity assessments",
            ]),
            learning_path: vec![
                phase("Phase 1: Align", "Define governance objectives", "Weeks 1-2"),
                phase("Phase 2: Build", "Policy and approval workflows", "Weeks 3-6"),
                phase("Phase 3: Scale", "Deploy governance across teams", "Weeks 7-12"),
            ],
            cohorts: vec![
                cohort(
                    "Executives",
                    "Governance vision and policy",
                    &["AI governance strategy", "Risk oversight", "Board reporting"],
                ),
                cohort(
                    "Compliance leaders",
                    "Policy, audit, and controls",
                    &["Model risk management", "AI audit readiness", "Policy workflows"],
                ),
                cohort(
                    "Practitioners",
                    "Implementation enablement",
                    &["Adoptify AI labs", "Policy documentation", "Governance tooling"],
                ),
            ],
            plan: vec![
                step("Weeks 1-2: Design", "Governance charter and priorities", "Policy blueprint"),
                step("Weeks 3-6: Build", "Approval workflow configuration", "Model registry, audit trail"),
                step("Weeks 7-12: Scale", "Expand governance across teams", "Governance scorecard"),
            ],
            kpis: strs(&[
                "Time-to-approval",
                "AI policy adherence",
                "Risk exception rate",
                "Audit readiness",
                "Governance maturity score",
            ]),
        },
        Playbook {
            slug: "microsoft-federal-hybrid".into(),
            title: "Microsoft Hybrid Cloud for Federal Missions".into(),
            subtitle: "Secure collaboration, data residency, and mission continuity".into(),
            vendor: "Microsoft".into(),
            industry: "Federal & Defense".into(),
            accent: "#ff9100".into(),
            highlights: strs(&[
                "Secure collaboration across agencies",
                "Data residency and compliance alignment",
                "Mission continuity with hybrid operations",
            ]),
            exec_summary: strs(&[
                "Federal agencies need secure collaboration while maintaining mission continuity. Hybrid cloud architectures help balance security, residency, and agility.",
                "This playbook outlines the learning and governance steps needed to deploy Microsoft hybrid solutions at scale.",
            ]),
            outcomes: strs(&[
                "Reduced collaboration friction",
                "Stronger compliance posture",
                "Faster mission delivery",
            ]),
            use_cases: strs(&[
                "Hybrid identity and access management",
                "Secure collaboration with M365",
                "Protected data sharing across agencies",
                "Mission-ready data analytics",
            ]),
            capability_people: strs(&["CIO leadership", "Security teams", "Mission operations"]),
            capability_process: strs(&[
                "Identity governance",
                "Data residency controls",
                "Security operations",
            ]),
            capability_platform: strs(&["Azure Stack", "Microsoft 365", "Defender suite"]),
            accelerators: strs(&[
                "FedRAMP alignment",
                "Zero trust blueprint",
                "Secure collaboration playbooks",
            ]),
            learning_path: vec![
                phase("Phase 1: Align", "Mission priorities and security alignment", "Weeks 1-2"),
                phase("Phase 2: Enable", "Hybrid identity + security labs", "Weeks 3-6"),
                phase("Phase 3: Deploy", "Pilot collaboration workloads", "Weeks 7-12"),
            ],
            cohorts: vec![
                cohort(
                    "Executives",
                    "Mission alignment and governance",
                    &["Hybrid strategy", "Security leadership", "Compliance briefing"],
                ),
                cohort(
                    "Security leaders",
                    "Identity and access management",
                    &["Zero trust labs", "Defender operations", "Compliance mapping"],
                ),
                cohort(
                    "Practitioners",
                    "Hybrid cloud enablement",
                    &["Azure Stack labs", "Secure collaboration", "Data residency controls"],
                ),
            ],
            plan: vec![
                step("Weeks 1-2: Align", "Mission objectives and risk assessment", "Mission roadmap, KPI baseline"),
                step("Weeks 3-6: Enable", "Training and pilot design", "Hybrid pilot plan"),
                step("Weeks 7-12: Deploy", "Launch secure collaboration", "Operational scorecard"),
            ],
            kpis: strs(&[
                "Collaboration latency",
                "Compliance coverage",
                "Incident reduction",
                "Mission readiness score",
                "User adoption rate",
            ]),
        },
        Playbook {
            slug: "aws-cyber-resilience".into(),
            title: "AWS Cyber Resilience for Enterprises".into(),
            subtitle: "Zero trust foundations, incident response, and resilience drills".into(),
            vendor: "AWS".into(),
            industry: "Enterprise Security".into(),
            accent: "#dd2c00".into(),
            highlights: strs(&[
                "Reduce breach impact with automated response",
                "Improve recovery with resilience drills",
                "Scale zero trust across cloud workloads",
            ]),
            exec_summary: strs(&[
                "Security leaders need to improve detection, response, and recovery in an environment of accelerating risk. AWS security services combined with consistent enablement deliver measurable resilience gains.",
                "This playbook maps the learning journey required to implement zero trust and incident response programs within 90 days.",
            ]),
            outcomes: strs(&[
                "Lower incident response time",
                "Improved recovery readiness",
                "Stronger security governance",
            ]),
            use_cases: strs(&[
                "Security automation and log analytics",
                "Threat detection and response orchestration",
                "Backup and recovery modernization",
                "Zero trust network segmentation",
            ]),
            capability_people: strs(&["CISO org", "Security operations", "Cloud engineers"]),
            capability_process: strs(&[
                "Incident response",
                "Threat modeling",
                "Resilience drills",
            ]),
            capability_platform: strs(&[
                "AWS security services",
                "CloudTrail",
                "Security Hub",
            ]),
            accelerators: strs(&[
                "Incident response playbooks",
                "Security baseline templates",
                "Resilience scorecards",
            ]),
            learning_path: vec![
                phase("Phase 1: Baseline", "Security posture assessment", "Weeks 1-2"),
                phase("Phase 2: Enable", "Security automation labs", "Weeks 3-6"),
                phase("Phase 3: Launch", "Response drills and recovery validation", "Weeks 7-12"),
            ],
            cohorts: vec![
                cohort(
                    "Executives",
                    "Risk oversight and governance",
                    &["Security leadership briefing", "Risk scorecards", "Board reporting"],
                ),
                cohort(
                    "Security leaders",
                    "Operations and response readiness",
                    &["AWS Security Hub", "Incident response", "Threat hunting"],
                ),
                cohort(
                    "Practitioners",
                    "Hands-on security enablement",
                    &["CloudTrail labs", "Security automation", "Recovery testing"],
                ),
            ],
            plan: vec![
                step("Weeks 1-2: Assess", "Risk assessment and baseline controls", "Security posture report"),
                step("Weeks 3-6: Enable", "Train and pilot automation", "Security automation MVP"),
                step("Weeks 7-12: Validate", "Run response and recovery drills", "Resilience scorecard"),
            ],
            kpis: strs(&[
                "Mean time to detect",
                "Mean time to respond",
                "Recovery time objective",
                "Security control coverage",
                "Incident closure rate",
            ]),
        },
        Playbook {
            slug: "google-supply-chain-analytics".into(),
            title: "Google Cloud Supply Chain Analytics".into(),
            subtitle: "Forecasting, visibility, and cost-to-serve optimization".into(),
            vendor: "Google Cloud".into(),
            industry: "Supply Chain".into(),
            accent: "#ff9100".into(),
            highlights: strs(&[
                "Improve forecasting accuracy",
                "Increase end-to-end visibility",
                "Reduce cost-to-serve",
            ]),
            exec_summary: strs(&[
                "Supply chain leaders are under pressure to increase resilience and reduce cost-to-serve. Data-driven analytics and AI forecasting provide the visibility needed for proactive decision-making.",
                "This playbook outlines the learning journey required to deploy Google Cloud analytics for supply chain teams.",
            ]),
            outcomes: strs(&[
                "Higher forecast accuracy",
                "Lower inventory costs",
                "Faster response to disruptions",
            ]),
            use_cases: strs(&[
                "Demand sensing and forecasting",
                "Logistics optimization",
                "Supplier risk monitoring",
                "Inventory and capacity planning",
            ]),
            capability_people: strs(&[
                "Supply chain leaders",
                "Data scientists",
                "Operations planners",
            ]),
            capability_process: strs(&[
                "Planning cadence",
                "Supplier governance",
                "Scenario modeling",
            ]),
            capability_platform: strs(&["BigQuery", "Vertex AI", "Looker dashboards"]),
            accelerators: strs(&[
                "Supply chain data model",
                "Forecasting accelerators",
                "Scenario templates",
            ]),
            learning_path: vec![
                phase("Phase 1: Align", "Data readiness and use-case selection", "Weeks 1-2"),
                phase("Phase 2: Build", "Analytics foundation and training", "Weeks 3-6"),
                phase("Phase 3: Scale", "Deploy forecasting pilots", "Weeks 7-12"),
            ],
            cohorts: vec![
                cohort(
                    "Executives",
                    "Supply chain strategy and KPIs",
                    &["Analytics strategy", "Risk oversight", "KPI governance"],
                ),
                cohort(
                    "Operations leaders",
                    "Scenario planning and optimization",
                    &["BigQuery analytics", "Forecasting labs", "Looker insights"],
                ),
                cohort(
                    "Practitioners",
                    "Hands-on analytics delivery",
                    &["Data pipelines", "Vertex AI labs", "Demand modeling"],
                ),
            ],
            plan: vec![
                step("Weeks 1-2: Discover", "Data gaps and use-case selection", "Data audit, KPI baseline"),
                step("Weeks 3-6: Enable", "Analytics training and pilot setup", "Forecasting MVP"),
                step("Weeks 7-12: Launch", "Operational rollout", "Visibility dashboard"),
            ],
            kpis: strs(&[
                "Forecast accuracy",
                "Inventory turns",
                "Order fulfillment time",
                "Cost-to-serve",
                "Supplier risk exposure",
            ]),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn test_builtin_catalog_shape() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.playbooks.len(), 10);
        assert_eq!(catalog.stats.len(), 6);
        assert_eq!(catalog.sources.len(), 5);
    }

    #[test]
    fn test_builtin_playbook_roster() {
        let slugs: Vec<String> = Catalog::builtin()
            .playbooks
            .into_iter()
            .map(|b| b.slug)
            .collect();
        assert_eq!(
            slugs,
            [
                "microsoft-healthcare-ai-playbook",
                "aws-financial-services-modernization",
                "google-retail-growth",
                "cisco-public-sector",
                "pmi-manufacturing-portfolio",
                "ai-certs-workforce-literacy",
                "adoptify-ai-governance",
                "microsoft-federal-hybrid",
                "aws-cyber-resilience",
                "google-supply-chain-analytics",
            ]
        );
    }

    #[test]
    fn test_builtin_playbooks_fully_populated() {
        for book in Catalog::builtin().playbooks {
            assert_eq!(book.highlights.len(), 3, "{}", book.slug);
            assert_eq!(book.exec_summary.len(), 2, "{}", book.slug);
            assert_eq!(book.outcomes.len(), 3, "{}", book.slug);
            assert_eq!(book.use_cases.len(), 4, "{}", book.slug);
            assert_eq!(book.learning_path.len(), 3, "{}", book.slug);
            assert_eq!(book.cohorts.len(), 3, "{}", book.slug);
            assert_eq!(book.plan.len(), 3, "{}", book.slug);
            assert_eq!(book.kpis.len(), 5, "{}", book.slug);
        }
    }

    #[test]
    fn test_builtin_accents_parse() {
        for book in Catalog::builtin().playbooks {
            assert!(Color::from_hex(&book.accent).is_ok(), "bad accent for {}", book.slug);
        }
    }

    #[test]
    fn test_builtin_slugs_unique() {
        let catalog = Catalog::builtin();
        let mut slugs: Vec<&str> = catalog.playbooks.iter().map(|b| b.slug.as_str()).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), catalog.playbooks.len());
    }

    #[test]
    fn test_json_round_trip() {
        let catalog = Catalog::builtin();
        let json = serde_json::to_string(&catalog).unwrap();
        let parsed: Catalog = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, catalog);
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        let json = serde_json::to_vec(&Catalog::builtin()).unwrap();
        std::fs::write(&path, json).unwrap();
        let loaded = Catalog::from_json_file(&path).unwrap();
        assert_eq!(loaded, Catalog::builtin());
    }

    #[test]
    fn test_from_json_file_rejects_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, b"{not json").unwrap();
        assert!(matches!(
            Catalog::from_json_file(&path),
            Err(crate::error::Error::Catalog(_))
        ));
    }
}

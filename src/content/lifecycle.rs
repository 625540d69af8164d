// src/content/lifecycle.rs

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifecycleStage {
    pub title: &'static str,
    pub description: &'static str,
    pub tasks: [&'static str; 4],
}

pub const LIFECYCLE_STAGES: [LifecycleStage; 6] = [
    LifecycleStage {
        title: "Problem Definition",
        description: "Define the AI problem, objectives, and success metrics",
        tasks: ["Identify business problem", "Define success criteria", "Assess feasibility", "Stakeholder alignment"],
    },
    LifecycleStage {
        title: "Data Collection & Preparation",
        description: "Gather, clean, and prepare data for model training",
        tasks: ["Data sourcing", "Data quality assessment", "Privacy compliance", "Feature engineering"],
    },
    LifecycleStage {
        title: "Model Development",
        description: "Design, train, and validate AI models",
        tasks: ["Algorithm selection", "Model training", "Hyperparameter tuning", "Cross-validation"],
    },
    LifecycleStage {
        title: "Ethics & Bias Testing",
        description: "Evaluate model for fairness, bias, and ethical considerations",
        tasks: ["Bias detection", "Fairness metrics", "Explainability analysis", "Risk assessment"],
    },
    LifecycleStage {
        title: "Deployment & Monitoring",
        description: "Deploy model to production and monitor performance",
        tasks: ["Production deployment", "Performance monitoring", "Drift detection", "Continuous evaluation"],
    },
    LifecycleStage {
        title: "Governance & Compliance",
        description: "Ensure ongoing compliance with regulations and standards",
        tasks: ["Regulatory compliance", "Documentation", "Audit trails", "Stakeholder reporting"],
    },
];

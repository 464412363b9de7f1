//! The three canned underwriting workflows.

use std::sync::LazyLock;

use meridian_types::{LineOfBusiness, StepId, Workflow, WorkflowId, WorkflowStep};

static WORKFLOWS: LazyLock<Vec<Workflow>> = LazyLock::new(|| {
    vec![
        Workflow {
            id: WorkflowId::HomeownersNewBusiness,
            name: "Homeowners New Business",
            description: "New HO-3 policy from agency submission",
            line_of_business: LineOfBusiness::Homeowners,
            steps: vec![
                WorkflowStep {
                    id: StepId::new("intake"),
                    name: "Document Intake",
                    agent: "Intake Agent",
                    duration: 47,
                    is_human: false,
                    actions: vec![
                        "Extract structured data from ACORD 80 (23 fields)",
                        "Parse prior carrier dec page",
                        "Analyze property photos (roof, pool check)",
                        "Pull CoreLogic replacement cost: $485,000",
                        "Pull LexisNexis claims: 1 claim, 2019, $12,400",
                        "Calculate risk score: 72/100",
                    ],
                    output: "Route to Standard Rating",
                },
                WorkflowStep {
                    id: StepId::new("rating"),
                    name: "Premium Rating",
                    agent: "Rating Agent",
                    duration: 31,
                    is_human: false,
                    actions: vec![
                        "Apply base rate: $1,247 (territory 023)",
                        "Apply new home credit: -8%",
                        "Apply claims surcharge: +12%",
                        "Apply multi-policy discount: -15%",
                        "Apply protective devices credit: -5%",
                        "Select forms: HO-3, HO-04 61",
                        "Verify CA DOI filing compliance",
                    ],
                    output: "Premium: $1,184/year",
                },
                WorkflowStep {
                    id: StepId::new("quote"),
                    name: "Quote Generation",
                    agent: "Issuance Agent",
                    duration: 5,
                    is_human: false,
                    actions: vec![
                        "Generate quote package (PDF)",
                        "Attach state-mandated disclosures",
                        "Create agency portal link",
                        "Queue for eDelivery",
                    ],
                    output: "Quote #HO-2026-001847 sent",
                },
            ],
        },
        Workflow {
            id: WorkflowId::AutoEndorsement,
            name: "Auto Add Driver",
            description: "Add teenage driver to existing policy",
            line_of_business: LineOfBusiness::Auto,
            steps: vec![
                WorkflowStep {
                    id: StepId::new("intake"),
                    name: "Request Parsing",
                    agent: "Intake Agent",
                    duration: 12,
                    is_human: false,
                    actions: vec![
                        "Parse email: Add Driver endorsement",
                        "Extract driver details: Tyler Johnson, DOB 03/15/2009",
                        "Pull MVR from LexisNexis: Clean, licensed 8 months",
                        "Verify license with CA DMV",
                        "Flag: Youthful driver (age 16)",
                    ],
                    output: "Route to Standard Path (UW Review Required)",
                },
                WorkflowStep {
                    id: StepId::new("rating"),
                    name: "Premium Modification",
                    agent: "Rating Agent",
                    duration: 18,
                    is_human: false,
                    actions: vec![
                        "Current premium: $2,847/year",
                        "Add youthful driver surcharge: +$1,240",
                        "Apply good student discount: -$186",
                        "Apply driver training credit: -$124",
                        "Assign to 2019 Honda Civic",
                        "New premium: $3,777/year (+$930)",
                        "Pro-rata: +$465 (6 months remaining)",
                    ],
                    output: "Queue for UW Review",
                },
                WorkflowStep {
                    id: StepId::new("review"),
                    name: "UW Review",
                    agent: "Human Underwriter",
                    duration: 12,
                    is_human: true,
                    actions: vec![
                        "Agent recommendation: APPROVE (94% confidence)",
                        "Review: Clean MVR, good student, driver training",
                        "Parents: 15-year customers, 0 at-fault claims",
                    ],
                    output: "Approved",
                },
                WorkflowStep {
                    id: StepId::new("issue"),
                    name: "Endorsement Issuance",
                    agent: "Issuance Agent",
                    duration: 8,
                    is_human: false,
                    actions: vec![
                        "Generate endorsement documents",
                        "Update policy in Guidewire",
                        "Send eDelivery to agent",
                    ],
                    output: "Endorsement effective immediately",
                },
            ],
        },
        Workflow {
            id: WorkflowId::UmbrellaRenewal,
            name: "Umbrella Renewal",
            description: "Personal umbrella with limit increase recommendation",
            line_of_business: LineOfBusiness::Umbrella,
            steps: vec![
                WorkflowStep {
                    id: StepId::new("prep"),
                    name: "Renewal Preparation",
                    agent: "Intake Agent",
                    duration: 25,
                    is_human: false,
                    actions: vec![
                        "Pull underlying policies (home, auto)",
                        "Verify underlying limits meet requirements",
                        "Detect exposure changes: Pool installed",
                        "Detect exposure changes: Tesla Model Y added",
                        "Refresh claims data: No new claims",
                    ],
                    output: "Flag: Pool requires limit review",
                },
                WorkflowStep {
                    id: StepId::new("analysis"),
                    name: "Coverage Analysis",
                    agent: "Rating Agent",
                    duration: 15,
                    is_human: false,
                    actions: vec![
                        "Current: $1M umbrella, $2,450/year",
                        "Analyze net worth profile",
                        "Calculate pool liability exposure: +$180/year",
                        "Option A: Renew at $1M - $2,450",
                        "Option B: Increase to $2M - $2,890 (RECOMMENDED)",
                        "Option C: Increase to $3M - $3,340",
                    ],
                    output: "Recommend: $2M umbrella",
                },
                WorkflowStep {
                    id: StepId::new("outreach"),
                    name: "Agent Notification",
                    agent: "Issuance Agent",
                    duration: 5,
                    is_human: false,
                    actions: vec![
                        "Generate renewal options document",
                        "Draft agent email with recommendation",
                        "Queue 45-day notice",
                    ],
                    output: "Sent to agent for client discussion",
                },
            ],
        },
    ]
});

/// All workflow definitions, in display order.
#[must_use]
pub fn workflows() -> &'static [Workflow] {
    &WORKFLOWS
}

/// Look up a workflow definition.
///
/// Total because `WorkflowId` is closed and every id has a fixture entry
/// (enforced by test).
#[must_use]
pub fn workflow(id: WorkflowId) -> &'static Workflow {
    WORKFLOWS
        .iter()
        .find(|w| w.id == id)
        .unwrap_or_else(|| unreachable!("fixture missing for workflow {id}"))
}

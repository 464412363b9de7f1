//! Document-intelligence stats and executive talking points.

use std::sync::LazyLock;

use meridian_types::{DocumentType, ExtractedField, TalkingPoint};

static ACORD_FIELDS: LazyLock<Vec<ExtractedField>> = LazyLock::new(|| {
    let f = |field, value, confidence| ExtractedField {
        field,
        value,
        confidence,
    };
    vec![
        f("Named Insured", "Jennifer & Michael Chen", 99.2),
        f("Mailing Address", "1847 Oak Valley Drive", 98.8),
        f("City, State, ZIP", "Walnut Creek, CA 94596", 99.1),
        f("Phone Number", "(415) 555-0847", 97.5),
        f("Email", "jchen@email.com", 99.8),
        f("Policy Type", "HO-3", 99.9),
        f("Location Address", "1847 Oak Valley Drive", 98.8),
        f("Year Built", "2019", 98.2),
        f("Construction Type", "Frame", 97.8),
        f("Roof Type", "Composition Shingle", 96.5),
        f("Square Footage", "2,400", 95.2),
        f("Number of Stories", "2", 99.1),
        f("Dwelling Coverage", "$485,000", 99.5),
        f("Personal Property", "$242,500", 99.4),
        f("Liability", "$300,000", 99.6),
        f("Medical Payments", "$5,000", 99.7),
        f("Deductible", "$1,000", 99.8),
        f("Prior Carrier", "State Farm", 98.3),
        f("Prior Policy Number", "23-HO-847293", 97.9),
        f("Years with Prior Carrier", "3", 96.8),
        f("Burglar Alarm", "Yes", 95.5),
        f("Smoke Detectors", "Yes", 98.2),
        f("Deadbolt Locks", "Yes", 94.8),
    ]
});

static DOCUMENT_TYPES: LazyLock<Vec<DocumentType>> = LazyLock::new(|| {
    vec![
        DocumentType {
            id: "acord-80",
            name: "ACORD 80 (Homeowners App)",
            extraction_accuracy: 98.7,
            avg_processing_time: 8.2,
            fields_extracted: 23,
        },
        DocumentType {
            id: "dec-page",
            name: "Prior Carrier Dec Page",
            extraction_accuracy: 97.4,
            avg_processing_time: 5.1,
            fields_extracted: 14,
        },
        DocumentType {
            id: "property-photos",
            name: "Property Photos",
            extraction_accuracy: 96.2,
            avg_processing_time: 11.8,
            fields_extracted: 9,
        },
        DocumentType {
            id: "mvr-report",
            name: "MVR Report",
            extraction_accuracy: 99.1,
            avg_processing_time: 2.4,
            fields_extracted: 11,
        },
        DocumentType {
            id: "loss-runs",
            name: "Loss Run Report",
            extraction_accuracy: 98.1,
            avg_processing_time: 6.7,
            fields_extracted: 18,
        },
    ]
});

static TALKING_POINTS: LazyLock<Vec<TalkingPoint>> = LazyLock::new(|| {
    vec![
        TalkingPoint {
            id: "accuracy",
            title: "Agent Accuracy",
            question: "How accurate are the agents?",
            content: "Document extraction achieves 96-99% accuracy depending on document \
                      quality. Every extraction is logged with confidence scores, and \
                      low-confidence extractions (below 85%) automatically escalate to human \
                      review. Rating calculations are verified against approved state filings \
                      with 99.94% accuracy.",
        },
        TalkingPoint {
            id: "errors",
            title: "Error Handling",
            question: "What happens when the agent is wrong?",
            content: "Human checkpoints are built into high-stakes decisions. When confidence \
                      is below 90%, the system escalates with full context to a human \
                      reviewer. All overrides are logged with rationale, and exception paths \
                      are clearly defined for each workflow type.",
        },
        TalkingPoint {
            id: "regulators",
            title: "Regulatory Compliance",
            question: "How do we explain this to regulators?",
            content: "Every decision has a complete audit trail: data accessed, reasoning \
                      applied, rules followed. State filing compliance is verified \
                      automatically against SERFF, rate deviations are flagged and \
                      documented, and human oversight points are maintained for all \
                      underwriting decisions.",
        },
        TalkingPoint {
            id: "roi",
            title: "Return on Investment",
            question: "What's the ROI?",
            content: "Typical results: 70% reduction in quote turnaround (48 hours to under \
                      15 minutes for standard risks), 40% increase in straight-through \
                      processing, 60% fewer data entry errors, 50% smaller endorsement \
                      backlog. Underwriters focus on complex risks that actually need human \
                      judgment.",
        },
        TalkingPoint {
            id: "human-loop",
            title: "Human Oversight",
            question: "Do we still need underwriters?",
            content: "Absolutely. Agents handle routine processing so underwriters can focus \
                      on complex risk evaluation, relationship management, and exception \
                      handling. Underwriters review agent recommendations, handle \
                      escalations, and make final decisions on complex risks.",
        },
        TalkingPoint {
            id: "integration",
            title: "System Integration",
            question: "How does this integrate with our existing systems?",
            content: "MCP provides standardized connectors for major policy admin systems \
                      (Guidewire, Duck Creek, Majesco), rating engines (ISO, AAIS), CRMs, and \
                      document management. The agent layer sits on top; no changes to \
                      existing systems are required.",
        },
    ]
});

/// The ACORD 80 fields the extraction demo reveals, in reveal order.
#[must_use]
pub fn acord_fields() -> &'static [ExtractedField] {
    &ACORD_FIELDS
}

/// Extraction stats per supported document type.
#[must_use]
pub fn document_types() -> &'static [DocumentType] {
    &DOCUMENT_TYPES
}

/// Executive Q&A cards for the overview tab.
#[must_use]
pub fn talking_points() -> &'static [TalkingPoint] {
    &TALKING_POINTS
}

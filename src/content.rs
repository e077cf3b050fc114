//! Static page content: prose, precomputed analysis results and links.
//!
//! The p-values and summary statistics below come from the upstream analysis
//! notebooks. Nothing in this crate computes them.

// ---------------------------------------------------------------------------
// Inline text spans
// ---------------------------------------------------------------------------

/// A run of text, optionally emphasised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub text: &'static str,
    pub strong: bool,
}

impl Span {
    pub const fn plain(text: &'static str) -> Self {
        Span { text, strong: false }
    }

    pub const fn strong(text: &'static str) -> Self {
        Span { text, strong: true }
    }
}

/// A precomputed statistical test and the conclusion drawn from it.
#[derive(Debug, Clone, Copy)]
pub struct Finding {
    pub question: &'static str,
    pub statement: &'static [Span],
}

// ---------------------------------------------------------------------------
// Window / navigation
// ---------------------------------------------------------------------------

pub const WINDOW_TITLE: &str = "Human Trafficking Data Analysis";

// ---------------------------------------------------------------------------
// Home
// ---------------------------------------------------------------------------

pub const HOME_TITLE: &str = "Human Trafficking Data Analysis from Missing Person Data";

pub const HOME_INTRO: &[Span] = &[Span::plain(
    "This project analyzes missing person records across India from 2017 to 2022 \
     to uncover demographic and geographic patterns potentially associated with \
     human trafficking.",
)];

pub const GOALS_HEADING: &str = "Goals & Objectives";

pub const GOALS: &[&str] = &[
    "Identify states and districts with the highest missing cases.",
    "Understand age & gender patterns in missing persons.",
    "Use spatial analysis to detect potential trafficking hotspots.",
    "Perform hypothesis testing for actionable insights.",
    "Create a Power BI dashboard for interactive exploration.",
];

pub const PREVIEW_HEADING: &str = "Dataset Preview";
pub const DATASET_DOWNLOAD_LABEL: &str = "📥 Download Dataset";
pub const DATASET_SOURCE_LABEL: &str = "Dataset Source:";
pub const DATASET_SOURCE_LINK_TEXT: &str = "Click Here";
pub const DATASET_SOURCE_URL: &str =
    "https://indiadataportal.com/p/crime-statistics/r/ncrb-cii_missing_persons-dt-yr-prv";

// ---------------------------------------------------------------------------
// EDA
// ---------------------------------------------------------------------------

pub const EDA_TITLE: &str = "Exploratory Data Analysis (EDA)";

pub const EDA_INTRO: &[Span] = &[
    Span::plain("In this section, we visualize patterns in missing person cases. Charts include "),
    Span::strong("Top 10 States"),
    Span::plain(", "),
    Span::strong("Yearly Trends"),
    Span::plain(", and "),
    Span::strong("Age Distribution by Gender"),
    Span::plain("."),
];

// ---------------------------------------------------------------------------
// Geo analysis
// ---------------------------------------------------------------------------

pub const GEO_TITLE: &str = "Geospatial Analysis";

pub const GEO_INTRO: &[Span] = &[
    Span::plain("A "),
    Span::strong("heatmap"),
    Span::plain(
        " showing intensity of missing person cases across states. Areas with high \
         density may indicate potential trafficking hotspots.",
    ),
];

pub const HEATMAP_OPEN_LABEL: &str = "Open heatmap in browser";

// ---------------------------------------------------------------------------
// Hypothesis testing
// ---------------------------------------------------------------------------

pub const HYPOTHESIS_TITLE: &str = "Hypothesis Testing Results";

pub const FINDINGS: &[Finding] = &[
    Finding {
        question: "1. Are females more likely to be minors?",
        statement: &[
            Span::plain("Chi-square test result: "),
            Span::strong("p < 0.05"),
            Span::plain(", indicating a significant association between being female and being a minor."),
        ],
    },
    Finding {
        question: "2. Do urban districts have more missing cases than rural?",
        statement: &[
            Span::plain("T-test result: "),
            Span::strong("p < 0.05"),
            Span::plain(
                ", suggesting a significant difference — urban areas tend to report more missing cases.",
            ),
        ],
    },
];

// ---------------------------------------------------------------------------
// Power BI dashboard
// ---------------------------------------------------------------------------

pub const DASHBOARD_TITLE: &str = "Power BI Dashboard";
pub const PBIX_DOWNLOAD_LABEL: &str = "📥 Download Power BI File (.pbix)";
pub const PBIX_MISSING: &str = "Power BI file not found.";
pub const REPORT_HEADING: &str = "📊 Interactive Power BI Report";
pub const REPORT_LINK_TEXT: &str = "Click here to view";
pub const REPORT_URL: &str = "https://app.powerbi.com/view?r=eyJrIjoiNGViZWQwM2ItMjkxMC00ZGVhLTk2NWUtNGM0NTc5OWRmYzVlIiwidCI6ImY1OTJlZjFjLWI1OGQtNDY0Zi1iZDFkLWY3MGU2NWU3MDRiYSJ9";

// ---------------------------------------------------------------------------
// Summary & feedback
// ---------------------------------------------------------------------------

pub const SUMMARY_TITLE: &str = "Executive Summary & Feedback";
pub const SUMMARY_HEADING: &str = "Executive Summary — Missing Persons in India (2017–2022)";

pub const SUMMARY_POINTS: &[&str] = &[
    "1. Approximately 1 million missing person cases reported.",
    "2. Females account for 65.05% of cases.",
    "3. Minors represent 5.75% of total cases.",
    "4. Highest female missing cases in the 18–30 age group.",
    "5. Highest male missing cases in the 30–45 age group.",
    "6. Peak year: 2019, with 380,484 cases.",
    "7. Maharashtra is the most affected state.",
    "8. Cuttack is the district with the highest cases.",
];

pub const FEEDBACK_HEADING: &str = "Feedback & Suggestions";
pub const FEEDBACK_PROMPT: &str = "Please provide your valuable feedback or suggestions here:";
pub const FEEDBACK_BUTTON: &str = "Submit Feedback";
pub const FEEDBACK_EMPTY: &str = "Please enter some feedback before submitting.";
pub const FEEDBACK_THANKS: &str = "Thank you for your feedback! 🙌";

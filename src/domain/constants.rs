//! Static registry of the labels the catalog knows about.

/// Static-analysis tools with a per-issue column in the dataset.
pub const DETECTION_TOOLS: &[&str] = &[
    "Chimera",
    "Adoctor",
    "DAAP",
    "Lint",
    "PMD",
    "Ecoandroid",
    "Leafactor",
    "Paprika",
    "Droidlens",
    "xAL",
    "Spotbugs",
    "Spotbugs-fbcontrib",
    "Infer",
    "Detekt",
];

pub const ISSUE_CATEGORIES: &[&str] = &[
    "Suboptimal Algorithm",
    "Resource Management",
    "API Misuse",
    "Concurrency",
    "Code Smell",
    "Data Manipulation",
    "Obsolete Solution",
    "Unnecessary Computation",
    "Data Access",
    "RPC/IPC",
    "Build Optimization",
];

pub const SIDE_EFFECTS: &[&str] = &["Runtime", "Memory", "Energy"];

/// Marker used by the dataset for "yes, this tool detects it".
pub const CHECKMARK: &str = "✅";

/// Cell values that explicitly mean "not flagged".
pub(crate) const NEGATIVE_MARKERS: &[&str] = &["no", "false", "0", "-", "❌", "✗"];

// Column names
pub const FIELD_ISSUE: &str = "Issue";
pub const FIELD_CATEGORY: &str = "Category";
pub const FIELD_SIDE_EFFECT: &str = "Side-Effect";
pub const FIELD_ANDROID_SPECIFIC: &str = "Android-Specific";
pub const FIELD_EXPLANATION: &str = "Explanation";
pub const FIELD_POSSIBLE_VOID: &str = "Possible Void";
pub const FIELD_EXPECTED_FIX: &str = "Expected fix";
pub const FIELD_FILE_EXTENSIONS: &str = "File Extensions";
pub const FIELD_SAMPLE: &str = "Sample";
pub const FIELD_EXAMPLE_1: &str = "Example_1";
pub const FIELD_EXAMPLE_2: &str = "Example_2";
pub const FIELD_KOTLIN: &str = "Detectable in Kotlin";
pub const FIELD_SEVERITY: &str = "Severity";

/// Number of explanation characters shown on a summary card.
pub const PREVIEW_CHARS: usize = 150;

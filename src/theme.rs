use crate::ir::Category;

/// Presentation attributes for a marker category. Layout never reads these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryStyle {
    pub icon: &'static str,
    pub fill: &'static str,
    pub border: &'static str,
    pub label: &'static str,
}

const MAINTENANCE: CategoryStyle = CategoryStyle {
    icon: "🔧",
    fill: "#ef4444",
    border: "#ef4444",
    label: "MAINTENANCE",
};

const COMPLAINT: CategoryStyle = CategoryStyle {
    icon: "📢",
    fill: "#facc15",
    border: "#facc15",
    label: "COMPLAINT",
};

const VIOLATION: CategoryStyle = CategoryStyle {
    icon: "⚠️",
    fill: "#dc2626",
    border: "#dc2626",
    label: "VIOLATION",
};

const NOTICE: CategoryStyle = CategoryStyle {
    icon: "📋",
    fill: "#6b7280",
    border: "#6b7280",
    label: "NOTICE",
};

const FALLBACK: CategoryStyle = CategoryStyle {
    icon: "📍",
    fill: "#FFFFFF",
    border: "#FFFFFF",
    label: "OTHER",
};

impl CategoryStyle {
    pub fn for_category(category: &Category) -> Self {
        match category {
            Category::Maintenance => MAINTENANCE,
            Category::Complaint => COMPLAINT,
            Category::Violation => VIOLATION,
            Category::Notice => NOTICE,
            Category::Other(_) => FALLBACK,
        }
    }

    /// Legend entries, in display order. The fallback style has no entry.
    pub fn legend() -> [(Category, Self); 4] {
        [
            (Category::Maintenance, MAINTENANCE),
            (Category::Complaint, COMPLAINT),
            (Category::Violation, VIOLATION),
            (Category::Notice, NOTICE),
        ]
    }
}

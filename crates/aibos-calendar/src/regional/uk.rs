//! United Kingdom statutory deadlines (HMRC and Companies House).
//!
//! The UK tax year ends on 5 April, so most payroll deadlines cluster in
//! the weeks after it.

use super::*;

/// HMRC and Companies House obligations.
pub const UK_TEMPLATES: &[RegionalComplianceTemplate] = &[
    RegionalComplianceTemplate {
        key: "self-assessment-online",
        title: "Self Assessment Online Filing",
        due: MonthDay::last_of(1),
        priority: Priority::Critical,
        category: "Tax & Finance",
        description: "Online Self Assessment return and balancing payment due.",
    },
    RegionalComplianceTemplate {
        key: "tax-year-end",
        title: "End of Tax Year",
        due: MonthDay::fixed(4, 5),
        priority: Priority::Medium,
        category: "Tax & Finance",
        description: "Final day of the tax year; payroll year-end processing begins.",
    },
    RegionalComplianceTemplate {
        key: "p60-issue",
        title: "P60 Issue Deadline",
        due: MonthDay::last_of(5),
        priority: Priority::High,
        category: "Employment & Labor",
        description: "Issue P60 end-of-year certificates to employees.",
    },
    RegionalComplianceTemplate {
        key: "p11d-filing",
        title: "P11D Expenses and Benefits Filing",
        due: MonthDay::fixed(7, 6),
        priority: Priority::High,
        category: "Employment & Labor",
        description: "Submit P11D and P11D(b) returns for the previous tax year.",
    },
    RegionalComplianceTemplate {
        key: "payment-on-account",
        title: "Second Payment on Account",
        due: MonthDay::last_of(7),
        priority: Priority::Medium,
        category: "Tax & Finance",
        description: "Second Self Assessment payment on account.",
    },
    RegionalComplianceTemplate {
        key: "self-assessment-paper",
        title: "Paper Self Assessment Deadline",
        due: MonthDay::last_of(10),
        priority: Priority::Medium,
        category: "Tax & Finance",
        description: "Deadline for paper Self Assessment returns.",
    },
];

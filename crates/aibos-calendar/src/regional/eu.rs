//! European Union deadlines shared across member states.
//!
//! Member-state filings differ; this table only carries obligations set at
//! Union level: the VAT One-Stop-Shop quarterly returns (due the last day
//! of the month following the quarter), the annual GDPR processing-record
//! review, and the statutory accounts filing window.

use super::*;

/// EU-level obligations for calendar-year entities.
pub const EU_TEMPLATES: &[RegionalComplianceTemplate] = &[
    RegionalComplianceTemplate {
        key: "oss-vat-q4",
        title: "OSS VAT Return (Q4)",
        due: MonthDay::last_of(1),
        priority: Priority::High,
        category: "Tax & Finance",
        description: "One-Stop-Shop VAT return for October to December.",
    },
    RegionalComplianceTemplate {
        key: "oss-vat-q1",
        title: "OSS VAT Return (Q1)",
        due: MonthDay::last_of(4),
        priority: Priority::High,
        category: "Tax & Finance",
        description: "One-Stop-Shop VAT return for January to March.",
    },
    RegionalComplianceTemplate {
        key: "gdpr-ropa-review",
        title: "GDPR Records of Processing Review",
        due: MonthDay::fixed(5, 25),
        priority: Priority::Medium,
        category: "Data Protection",
        description: "Annual review of Article 30 records of processing activities.",
    },
    RegionalComplianceTemplate {
        key: "annual-accounts",
        title: "Annual Financial Statements Filing",
        due: MonthDay::last_of(6),
        priority: Priority::High,
        category: "Corporate Governance",
        description: "Publish approved annual accounts in the business register.",
    },
    RegionalComplianceTemplate {
        key: "oss-vat-q2",
        title: "OSS VAT Return (Q2)",
        due: MonthDay::last_of(7),
        priority: Priority::High,
        category: "Tax & Finance",
        description: "One-Stop-Shop VAT return for April to June.",
    },
    RegionalComplianceTemplate {
        key: "oss-vat-q3",
        title: "OSS VAT Return (Q3)",
        due: MonthDay::last_of(10),
        priority: Priority::High,
        category: "Tax & Finance",
        description: "One-Stop-Shop VAT return for July to September.",
    },
    RegionalComplianceTemplate {
        key: "annual-report",
        title: "Annual Report Due",
        due: MonthDay::last_of(12),
        priority: Priority::Medium,
        category: "Corporate Governance",
        description: "Year-end management report and beneficial ownership confirmation.",
    },
];

//! North American statutory deadlines.
//!
//! Provides United States and Canadian federal content:
//!   - US: information returns, estimated tax instalments, individual and
//!     extended filing deadlines, quarterly payroll returns, annual report
//!   - CA: T4/T5 information slips, personal and corporate income tax,
//!     GST/HST annual return, federal annual return

use super::*;

// ── United States ───────────────────────────────────────────────────────

/// IRS and state-level deadlines for calendar-year filers.
pub const US_TEMPLATES: &[RegionalComplianceTemplate] = &[
    RegionalComplianceTemplate {
        key: "w2-1099-filing",
        title: "W-2 and 1099-NEC Filing",
        due: MonthDay::fixed(1, 31),
        priority: Priority::High,
        category: "Employment & Labor",
        description: "Furnish W-2 and 1099-NEC forms to recipients and file with the IRS/SSA.",
    },
    RegionalComplianceTemplate {
        key: "estimated-tax-q4",
        title: "Q4 Estimated Tax Payment",
        due: MonthDay::fixed(1, 15),
        priority: Priority::Medium,
        category: "Tax & Finance",
        description: "Fourth instalment of estimated tax for the prior year.",
    },
    RegionalComplianceTemplate {
        key: "tax-filing-deadline",
        title: "Tax Filing Deadline",
        due: MonthDay::fixed(4, 15),
        priority: Priority::Critical,
        category: "Tax & Finance",
        description: "Federal income tax return and first estimated tax instalment due.",
    },
    RegionalComplianceTemplate {
        key: "form-941-q1",
        title: "Form 941 Quarterly Payroll Return (Q1)",
        due: MonthDay::last_of(4),
        priority: Priority::High,
        category: "Employment & Labor",
        description: "Employer's quarterly federal tax return for January to March.",
    },
    RegionalComplianceTemplate {
        key: "estimated-tax-q2",
        title: "Q2 Estimated Tax Payment",
        due: MonthDay::fixed(6, 15),
        priority: Priority::Medium,
        category: "Tax & Finance",
        description: "Second instalment of estimated tax.",
    },
    RegionalComplianceTemplate {
        key: "form-941-q2",
        title: "Form 941 Quarterly Payroll Return (Q2)",
        due: MonthDay::last_of(7),
        priority: Priority::High,
        category: "Employment & Labor",
        description: "Employer's quarterly federal tax return for April to June.",
    },
    RegionalComplianceTemplate {
        key: "estimated-tax-q3",
        title: "Q3 Estimated Tax Payment",
        due: MonthDay::fixed(9, 15),
        priority: Priority::Medium,
        category: "Tax & Finance",
        description: "Third instalment of estimated tax.",
    },
    RegionalComplianceTemplate {
        key: "extended-return",
        title: "Extended Tax Return Deadline",
        due: MonthDay::fixed(10, 15),
        priority: Priority::High,
        category: "Tax & Finance",
        description: "Final deadline for returns filed under an automatic extension.",
    },
    RegionalComplianceTemplate {
        key: "form-941-q3",
        title: "Form 941 Quarterly Payroll Return (Q3)",
        due: MonthDay::last_of(10),
        priority: Priority::High,
        category: "Employment & Labor",
        description: "Employer's quarterly federal tax return for July to September.",
    },
    RegionalComplianceTemplate {
        key: "annual-report",
        title: "Annual Report Due",
        due: MonthDay::last_of(12),
        priority: Priority::High,
        category: "Corporate Governance",
        description: "State annual report and registered agent confirmation.",
    },
];

// ── Canada ──────────────────────────────────────────────────────────────

/// CRA and Corporations Canada deadlines for calendar-year filers.
pub const CA_TEMPLATES: &[RegionalComplianceTemplate] = &[
    RegionalComplianceTemplate {
        key: "t4-t5-slips",
        title: "T4 and T5 Information Returns",
        due: MonthDay::last_of(2),
        priority: Priority::High,
        category: "Employment & Labor",
        description: "File T4 and T5 information returns and distribute slips.",
    },
    RegionalComplianceTemplate {
        key: "personal-income-tax",
        title: "Personal Income Tax Deadline",
        due: MonthDay::last_of(4),
        priority: Priority::Critical,
        category: "Tax & Finance",
        description: "T1 return filing and balance owing due.",
    },
    RegionalComplianceTemplate {
        key: "gst-hst-annual",
        title: "GST/HST Annual Return",
        due: MonthDay::fixed(6, 15),
        priority: Priority::Medium,
        category: "Tax & Finance",
        description: "Annual GST/HST return for annual filers with a December year-end.",
    },
    RegionalComplianceTemplate {
        key: "t2-corporate-return",
        title: "T2 Corporation Income Tax Return",
        due: MonthDay::last_of(6),
        priority: Priority::Critical,
        category: "Tax & Finance",
        description: "Corporate return due six months after a December 31 year-end.",
    },
    RegionalComplianceTemplate {
        key: "annual-report",
        title: "Annual Report Due",
        due: MonthDay::last_of(12),
        priority: Priority::High,
        category: "Corporate Governance",
        description: "Federal annual return to Corporations Canada.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn us_table_covers_key_deadlines() {
        let keys: Vec<&str> = US_TEMPLATES.iter().map(|t| t.key).collect();
        assert!(keys.contains(&"tax-filing-deadline"));
        assert!(keys.contains(&"annual-report"));
        assert!(keys.contains(&"w2-1099-filing"));
    }

    #[test]
    fn t4_slips_follow_february_length() {
        let t4 = CA_TEMPLATES.iter().find(|t| t.key == "t4-t5-slips").unwrap();
        assert_eq!(t4.due.resolve(2024), NaiveDate::from_ymd_opt(2024, 2, 29));
        assert_eq!(t4.due.resolve(2025), NaiveDate::from_ymd_opt(2025, 2, 28));
    }
}
